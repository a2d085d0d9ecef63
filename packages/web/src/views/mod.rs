mod home;
pub use home::Home;

mod terms;
pub use terms::Terms;
