//! Credit packages: the pricing grid and the PIX payment modal.

use api::{CreditPackage, PurchaseOrder};
use dioxus::prelude::*;
use std::time::Duration;

use crate::browser::copy_text;
use crate::components::{Button, ButtonVariant};
use crate::icons::FaCopy;
use crate::views::ModalOverlay;
use crate::Icon;

const COPY_FLASH_SECS: u64 = 2;

/// The package catalog. The parent runs the purchase when a card is picked.
#[component]
pub fn PricingSection(on_select: EventHandler<CreditPackage>) -> Element {
    rsx! {
        section {
            id: "pricing",
            class: "pricing",
            h2 { class: "pricing-title", "Credit packages" }
            p {
                class: "pricing-subtitle",
                "Buy credits to run searches. Payment via PIX."
            }

            div {
                class: "pricing-grid",
                for package in CreditPackage::ALL {
                    div {
                        class: "price-card",
                        h3 { class: "price-name", "{package.display_name()}" }
                        p { class: "price-amount", "{package.price_display()}" }
                        p {
                            class: "price-credits",
                            if package.credits() == 1 {
                                "1 credit"
                            } else {
                                "{package.credits()} credits"
                            }
                        }
                        Button {
                            variant: ButtonVariant::Primary,
                            onclick: move |_| on_select.call(package),
                            "Buy now"
                        }
                    }
                }
            }
        }
    }
}

/// PIX payment details for a pending purchase. Payment happens outside the
/// app; this modal only hands over the key and the instructions.
#[component]
pub fn PaymentModal(order: PurchaseOrder, on_close: EventHandler<()>) -> Element {
    let mut copied = use_signal(|| false);
    let key = order.receipt.pix_info.key.clone();

    let handle_copy = move |_| {
        copy_text(&key);
        copied.set(true);
        spawn(async move {
            #[cfg(target_arch = "wasm32")]
            gloo_timers::future::sleep(Duration::from_secs(COPY_FLASH_SECS)).await;
            #[cfg(not(target_arch = "wasm32"))]
            tokio::time::sleep(Duration::from_secs(COPY_FLASH_SECS)).await;

            copied.set(false);
        });
    };

    rsx! {
        ModalOverlay {
            on_close: move |_| on_close.call(()),

            button {
                class: "modal-close",
                onclick: move |_| on_close.call(()),
                "×"
            }

            h2 { class: "modal-title", "PIX payment" }

            div {
                class: "pix-order",
                p { class: "pix-product", "{order.package.display_name()}" }
                p { class: "pix-amount", "{order.amount_display()}" }
            }

            p { class: "pix-instruction", "Pay with the PIX key below:" }

            div {
                class: "pix-key-box",
                code { class: "pix-key", "{order.receipt.pix_info.key}" }
                Button {
                    variant: ButtonVariant::Outline,
                    onclick: handle_copy,
                    Icon { icon: FaCopy, width: 13, height: 13 }
                    if copied() { "Copied!" } else { "Copy key" }
                }
            }

            p {
                class: "pix-beneficiary",
                "Beneficiary: {order.receipt.pix_info.name}"
            }

            div {
                class: "pix-footer",
                p {
                    "Credits are applied once the payment is confirmed. After paying, email your receipt to "
                    a { href: "mailto:billing@backcheck.app", "billing@backcheck.app" }
                    " to speed confirmation up."
                }
                p {
                    class: "pix-transaction",
                    "Transaction {order.receipt.transaction_id}"
                }
            }

            Button {
                variant: ButtonVariant::Secondary,
                class: "modal-submit",
                onclick: move |_| on_close.call(()),
                "Close"
            }
        }
    }
}
