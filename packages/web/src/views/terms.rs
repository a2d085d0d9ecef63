//! Terms-of-use page, rendered from markdown.

use dioxus::prelude::*;
use ui::{markdown_to_html, Navbar};

use crate::Route;

const TERMS: &str = r#"# Terms of use

backcheck compiles information about people from publicly available sources:
court registries, company records, transparency portals and public social
media profiles. By creating an account or running a search you agree to the
terms below.

## What the reports are

- A report is an automated aggregation of public records matched **by name**.
- Name matches can pick up namesakes. A record appearing in a report is not
  proof that it concerns the person you searched for.
- Always confirm a finding against the official source before acting on it.
- Reports are delivered as-is, with no guarantee of completeness or accuracy.

## Acceptable use

- Use reports for lawful purposes only.
- Do not use reports to harass, stalk, discriminate or defame.
- Do not use reports as the sole basis for employment, credit, insurance or
  housing decisions.
- Accounts used abusively may be closed without refund.

## Credits and payment

- Each search consumes one credit at the moment the backend accepts it,
  including when the report comes back empty.
- Credit packages are paid via PIX. Credits are applied after the payment is
  confirmed, normally within minutes.
- Credits do not expire and are not transferable between accounts.

## Privacy

- We store your account email and your credit balance.
- Search subjects are processed to build the report and are not published
  anywhere by us.
- To close your account and remove its data, email us.

## Contact

Questions, billing issues and data requests: [billing@backcheck.app](mailto:billing@backcheck.app)
"#;

/// Static terms page.
#[component]
pub fn Terms() -> Element {
    let nav = use_navigator();

    rsx! {
        div {
            class: "page",

            Navbar {
                on_sign_in: move |_| {
                    nav.push(Route::Home {});
                },
            }

            main {
                class: "page-main",
                article {
                    class: "terms",
                    dangerous_inner_html: markdown_to_html(TERMS),
                }
            }

            footer {
                class: "page-footer",
                p { class: "page-footer-rights", "© backcheck. All rights reserved." }
            }
        }
    }
}
