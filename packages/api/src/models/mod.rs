//! Data models for everything the backend sends and receives.

mod purchase;
mod report;
mod user;

pub use purchase::{format_brl, CreditPackage, PixInfo, PurchaseOrder, PurchaseReceipt};
pub use report::{
    FamilyEntry, LegalEntry, ProfessionalEntry, RecordEntry, ReportCategory, ReportItem,
    ReportSection, SearchReport, SocialEntry,
};
pub use user::{LoginResponse, RegisterAck, User};
