//! Outbound links: the UPI payment deep link, QR asset choice, and the
//! WhatsApp message that asks for manual payment verification.

use serde::{Deserialize, Serialize};

use crate::contact::BookingContact;

/// Payee and messaging details baked into every handoff link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HandoffConfig {
    /// UPI virtual payment address.
    pub upi_vpa: String,
    pub payee_name: String,
    /// International format without `+`, as `wa.me` expects.
    pub whatsapp_phone: String,
    /// Prefix shown before the customer's phone number.
    pub phone_prefix: String,
}

impl Default for HandoffConfig {
    fn default() -> Self {
        Self {
            upi_vpa: "sidhusamskoksbi@oksbi".to_string(),
            payee_name: "ShwetVeer Vrish".to_string(),
            whatsapp_phone: "918837405788".to_string(),
            phone_prefix: "+91".to_string(),
        }
    }
}

/// Static payment QR images shipped with the site.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QrAsset {
    Generic,
    Deck,
    Report,
}

impl QrAsset {
    pub fn path(self) -> &'static str {
        match self {
            QrAsset::Generic => "/assets/qr_any.png",
            QrAsset::Deck => "/assets/qr_250.png",
            QrAsset::Report => "/assets/qr_1000.png",
        }
    }
}

/// Discounted prices always get the generic QR; otherwise match known flat prices.
pub fn select_qr(price: u64, discounted: bool) -> QrAsset {
    if discounted {
        return QrAsset::Generic;
    }
    match price {
        250 => QrAsset::Deck,
        1000 => QrAsset::Report,
        _ => QrAsset::Generic,
    }
}

/// `upi://pay` link. Free-text fields are URL-encoded, the amount is not.
pub fn upi_link(config: &HandoffConfig, amount: u64, note: &str) -> String {
    format!(
        "upi://pay?pa={}&pn={}&am={amount}&tn={}",
        urlencoding::encode(&config.upi_vpa),
        urlencoding::encode(&config.payee_name),
        urlencoding::encode(note),
    )
}

/// The payment claim being sent for verification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingTransaction {
    pub service_title: String,
    pub final_price: u64,
    pub discounted: bool,
    pub txn_ref: String,
}

fn or_na(value: &str) -> &str {
    if value.is_empty() {
        "N/A"
    } else {
        value
    }
}

/// Plain-text verification request, exactly as the operator expects to read it.
pub fn verification_message(
    config: &HandoffConfig,
    transaction: &BookingTransaction,
    contact: &BookingContact,
) -> String {
    let discount_note = if transaction.discounted {
        " (Discount Applied)"
    } else {
        ""
    };
    format!(
        "PAYMENT VERIFICATION REQUEST\n\
         ---------------------------\n\
         Service: {}\n\
         Amount Paid: ₹{}{}\n\
         Txn ID (last 4): {}\n\
         ---------------------------\n\
         Client Details\n\
         Name: {}\n\
         Phone: {} {}\n\
         Email: {}\n\
         \n\
         Attached is my payment screenshot.",
        transaction.service_title,
        transaction.final_price,
        discount_note,
        transaction.txn_ref,
        or_na(&contact.name),
        config.phone_prefix,
        or_na(&contact.phone),
        or_na(&contact.email),
    )
}

pub fn whatsapp_url(config: &HandoffConfig, message: &str) -> String {
    format!(
        "https://wa.me/{}?text={}",
        config.whatsapp_phone,
        urlencoding::encode(message)
    )
}

/// A composed WhatsApp handoff, ready to open in a new browsing context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Handoff {
    pub message: String,
    pub url: String,
}

impl Handoff {
    pub fn compose(
        config: &HandoffConfig,
        transaction: &BookingTransaction,
        contact: &BookingContact,
    ) -> Self {
        let message = verification_message(config, transaction, contact);
        let url = whatsapp_url(config, &message);
        Self { message, url }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn transaction(discounted: bool) -> BookingTransaction {
        BookingTransaction {
            service_title: "Cinematic Deck".into(),
            final_price: 310,
            discounted,
            txn_ref: "4F2A".into(),
        }
    }

    #[test]
    fn qr_selection() {
        assert_eq!(select_qr(1000, false), QrAsset::Report);
        assert_eq!(select_qr(1000, true), QrAsset::Generic);
        assert_eq!(select_qr(250, false), QrAsset::Deck);
        assert_eq!(select_qr(250, true), QrAsset::Generic);
        assert_eq!(select_qr(900, false), QrAsset::Generic);
        assert_eq!(select_qr(1000, false).path(), "/assets/qr_1000.png");
    }

    #[test]
    fn upi_link_encodes_free_text_only() {
        let link = upi_link(&HandoffConfig::default(), 310, "The Architect's Report");
        assert_eq!(
            link,
            "upi://pay?pa=sidhusamskoksbi%40oksbi&pn=ShwetVeer%20Vrish&am=310&tn=The%20Architect%27s%20Report"
        );
    }

    #[test]
    fn message_layout() {
        let contact = BookingContact::new("Asha Rao", "9876543210", "asha@college.edu");
        let message = verification_message(&HandoffConfig::default(), &transaction(true), &contact);
        let expected = "PAYMENT VERIFICATION REQUEST
---------------------------
Service: Cinematic Deck
Amount Paid: ₹310 (Discount Applied)
Txn ID (last 4): 4F2A
---------------------------
Client Details
Name: Asha Rao
Phone: +91 9876543210
Email: asha@college.edu

Attached is my payment screenshot.";
        assert_eq!(message, expected);
    }

    #[test]
    fn missing_fields_read_na() {
        let message = verification_message(
            &HandoffConfig::default(),
            &transaction(false),
            &BookingContact::default(),
        );
        assert!(message.contains("Amount Paid: ₹310\n"));
        assert!(message.contains("Name: N/A\n"));
        assert!(message.contains("Phone: +91 N/A\n"));
        assert!(message.contains("Email: N/A\n"));
    }

    #[test]
    fn whatsapp_url_carries_encoded_message() {
        let config = HandoffConfig::default();
        let handoff = Handoff::compose(&config, &transaction(false), &BookingContact::default());
        let prefix = "https://wa.me/918837405788?text=";
        assert!(handoff.url.starts_with(prefix));
        let encoded = &handoff.url[prefix.len()..];
        assert!(!encoded.contains('\n'));
        assert!(!encoded.contains(' '));
        assert_eq!(urlencoding::decode(encoded).unwrap(), handoff.message);
    }

    #[test]
    fn partial_config_keeps_defaults() {
        let config: HandoffConfig =
            serde_json::from_str(r#"{"whatsapp_phone":"919999999999"}"#).unwrap();
        assert_eq!(config.whatsapp_phone, "919999999999");
        assert_eq!(config.upi_vpa, HandoffConfig::default().upi_vpa);
    }
}
