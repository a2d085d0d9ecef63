//! # Credit packages and PIX purchase payloads
//!
//! Credits are sold in four fixed bundles. The backend does not publish a
//! catalog endpoint; the client sends the chosen package's code, price and
//! credit count in the purchase request and the backend records them on the
//! pending transaction. [`CreditPackage`] is therefore the single place the
//! catalog is defined.
//!
//! A successful purchase returns a [`PurchaseReceipt`] with the PIX payment
//! details. Payment itself happens out of band: the user pays the PIX key and
//! credits are applied after manual confirmation, so no client-side balance
//! change follows a purchase.

use serde::{Deserialize, Serialize};

/// A purchasable credit bundle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CreditPackage {
    Single,
    Pack10,
    Pack20,
    Pack50,
}

impl CreditPackage {
    /// Catalog order, as shown on the pricing section.
    pub const ALL: [CreditPackage; 4] = [
        CreditPackage::Single,
        CreditPackage::Pack10,
        CreditPackage::Pack20,
        CreditPackage::Pack50,
    ];

    /// `package_type` value on the wire.
    pub fn wire_code(self) -> &'static str {
        match self {
            CreditPackage::Single => "individual",
            CreditPackage::Pack10 => "pack10",
            CreditPackage::Pack20 => "pack20",
            CreditPackage::Pack50 => "pack50",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            CreditPackage::Single => "Single lookup",
            CreditPackage::Pack10 => "10-credit pack",
            CreditPackage::Pack20 => "20-credit pack",
            CreditPackage::Pack50 => "50-credit pack",
        }
    }

    pub fn credits(self) -> u32 {
        match self {
            CreditPackage::Single => 1,
            CreditPackage::Pack10 => 10,
            CreditPackage::Pack20 => 20,
            CreditPackage::Pack50 => 50,
        }
    }

    /// Price in centavos. Kept integral; only the wire request needs a float.
    pub fn price_centavos(self) -> u32 {
        match self {
            CreditPackage::Single => 990,
            CreditPackage::Pack10 => 4990,
            CreditPackage::Pack20 => 7990,
            CreditPackage::Pack50 => 14990,
        }
    }

    /// `amount` value on the wire (the backend stores it as a float).
    pub fn price_brl(self) -> f64 {
        f64::from(self.price_centavos()) / 100.0
    }

    /// Price formatted for display, e.g. `"R$ 49,90"`.
    pub fn price_display(self) -> String {
        format_brl(self.price_centavos())
    }
}

/// Brazilian-real display formatting with comma decimals.
pub fn format_brl(centavos: u32) -> String {
    format!("R$ {},{:02}", centavos / 100, centavos % 100)
}

/// PIX payment coordinates returned with a purchase.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PixInfo {
    /// The PIX key to pay (a random-key UUID on this backend).
    pub key: String,
    /// Beneficiary name shown to the payer.
    pub name: String,
    #[serde(default)]
    pub amount: f64,
}

/// `POST /api/purchase` response: a pending transaction plus payment details.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PurchaseReceipt {
    pub transaction_id: String,
    pub pix_info: PixInfo,
}

/// A receipt paired with the package it was created for. The payment view
/// renders from this so package metadata does not have to round-trip through
/// the backend.
#[derive(Debug, Clone, PartialEq)]
pub struct PurchaseOrder {
    pub receipt: PurchaseReceipt,
    pub package: CreditPackage,
}

impl PurchaseOrder {
    pub fn amount_display(&self) -> String {
        self.package.price_display()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_codes_match_backend_catalog() {
        let codes: Vec<&str> = CreditPackage::ALL.iter().map(|p| p.wire_code()).collect();
        assert_eq!(codes, vec!["individual", "pack10", "pack20", "pack50"]);
    }

    #[test]
    fn test_credits_per_package() {
        assert_eq!(CreditPackage::Single.credits(), 1);
        assert_eq!(CreditPackage::Pack50.credits(), 50);
    }

    #[test]
    fn test_brl_formatting() {
        assert_eq!(format_brl(990), "R$ 9,90");
        assert_eq!(format_brl(4990), "R$ 49,90");
        assert_eq!(format_brl(14990), "R$ 149,90");
        assert_eq!(format_brl(100), "R$ 1,00");
        assert_eq!(format_brl(5), "R$ 0,05");
    }

    #[test]
    fn test_wire_amount_matches_display_price() {
        for package in CreditPackage::ALL {
            let cents = (package.price_brl() * 100.0).round() as u32;
            assert_eq!(cents, package.price_centavos());
        }
    }

    #[test]
    fn test_receipt_decodes_from_backend_shape() {
        let json = r#"{
            "transaction_id": "3e1f2a9b",
            "pix_info": {
                "key": "3656e000-acb3-4645-a176-034c4d9ba6df",
                "name": "Backcheck",
                "amount": 49.9
            }
        }"#;
        let receipt: PurchaseReceipt = serde_json::from_str(json).unwrap();
        assert_eq!(receipt.transaction_id, "3e1f2a9b");
        assert_eq!(receipt.pix_info.name, "Backcheck");

        let order = PurchaseOrder {
            receipt,
            package: CreditPackage::Pack10,
        };
        assert_eq!(order.amount_display(), "R$ 49,90");
    }
}
