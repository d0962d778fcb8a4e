use pfmarket_common::booking::BookingStep;
use pfmarket_common::contact::BookingContact;
use pfmarket_common::handoff::QrAsset;
use pfmarket_site_integration::whatsapp;
use pfmarket_site_integration::Visitor;

/// Deck at level 2, fresh visitor, straight through to WhatsApp.
#[test]
fn first_time_deck_booking() {
    let mut v = Visitor::new();
    let update = v.slide_to(2);
    assert_eq!(update.price, 310);
    assert!(update.discounted);

    v.click_book();
    assert_eq!(v.step(), BookingStep::Form);
    assert_eq!(v.dialog().contact(), &BookingContact::default());

    v.fill_contact("Asha Rao", "98765 43210", "asha@college.edu");
    assert!(v.submit());
    assert_eq!(v.step(), BookingStep::Payment);
    assert_eq!(v.qr(), QrAsset::Generic);

    assert!(!v.verify_enabled());
    v.type_txn("4F2A");
    assert!(v.verify_enabled());
    assert!(v.verify());
    assert!(!v.dialog_open());

    let handoff = whatsapp::decode(v.last_opened()).unwrap();
    assert_eq!(handoff.phone, "918837405788");
    assert_eq!(handoff.field("Service"), Some("Cinematic Deck"));
    assert_eq!(handoff.field("Amount Paid"), Some("₹310 (Discount Applied)"));
    assert_eq!(handoff.field("Txn ID (last 4)"), Some("4F2A"));
    assert_eq!(handoff.field("Phone"), Some("+91 9876543210"));
    assert_eq!(handoff.field("Email"), Some("asha@college.edu"));
}

/// Report anchor tier: not discounted, so the report QR is offered.
#[test]
fn report_anchor_uses_report_qr() {
    let mut v = Visitor::new();
    let update = v.pick_service("report");
    assert_eq!(update.price, 900);

    let quote = v.quote().unwrap();
    assert_eq!(quote.scope, 10);
    assert_eq!(quote.naive_price, 1200);
    assert_eq!(quote.savings, 300);
    assert_eq!(quote.discount_percent, 25);

    v.slide_to(1);
    v.click_book();
    v.fill_contact("Ravi", "9876543210", "ravi@uni.in");
    assert!(v.submit());
    // ₹1000 at level 1 is discounted, so the generic QR wins.
    assert_eq!(v.qr(), QrAsset::Generic);
    assert!(v.dialog().upi_link().contains("am=1000"));
}

#[test]
fn short_phone_blocks_submit_with_alert() {
    let mut v = Visitor::new();
    v.click_book();
    v.fill_contact("Asha", "98765432", "asha@college.edu");
    assert!(!v.submit());
    assert_eq!(v.step(), BookingStep::Form);
    assert_eq!(v.alerts.len(), 1);
    assert!(v.stored_raw().is_none());

    v.type_phone("9876543210");
    assert!(v.submit());
    assert_eq!(v.stored_contact().unwrap().phone, "9876543210");
}

#[test]
fn returning_visitor_is_prefilled() {
    let mut v = Visitor::new();
    v.click_book();
    v.fill_contact("Asha Rao", "9876543210", "asha@college.edu");
    assert!(v.submit());
    v.close_dialog();

    v.reload();
    v.pick_service("report");
    v.click_book();
    let contact = v.dialog().contact();
    assert_eq!(contact.name, "Asha Rao");
    assert_eq!(contact.phone, "9876543210");
    assert_eq!(contact.email, "asha@college.edu");
    assert_eq!(v.step(), BookingStep::Form);
}

#[test]
fn malformed_storage_is_ignored() {
    let mut v = Visitor::with_stored_raw("{not json");
    v.click_book();
    assert_eq!(v.dialog().contact(), &BookingContact::default());

    v.fill_contact("Asha", "9876543210", "a@b.in");
    assert!(v.submit());
    assert_eq!(v.stored_contact().unwrap().name, "Asha");
}

#[test]
fn edit_details_keeps_txn_but_reopen_clears_it() {
    let mut v = Visitor::new();
    v.click_book();
    v.fill_contact("Asha", "9876543210", "a@b.in");
    assert!(v.submit());
    v.type_txn("9XK2");

    v.edit_details();
    assert_eq!(v.step(), BookingStep::Form);
    assert!(!v.verify_enabled());
    v.type_email("asha@college.edu");
    assert!(v.submit());
    assert_eq!(v.dialog().txn_ref(), "9XK2");
    assert!(v.verify_enabled());

    v.close_dialog();
    v.click_book();
    assert_eq!(v.dialog().txn_ref(), "");
    assert_eq!(v.dialog().contact().email, "asha@college.edu");
}

/// Storage changed after the form was submitted: the handoff uses the latest record.
#[test]
fn verify_reads_latest_stored_contact() {
    let mut v = Visitor::new();
    v.click_book();
    v.fill_contact("Asha", "9876543210", "a@b.in");
    assert!(v.submit());
    v.store_from_elsewhere(&BookingContact::new("Asha Rao", "9123456780", ""));
    v.type_txn("77AB");
    assert!(v.verify());

    let handoff = whatsapp::decode(v.last_opened()).unwrap();
    assert_eq!(handoff.field("Name"), Some("Asha Rao"));
    assert_eq!(handoff.field("Phone"), Some("+91 9123456780"));
    // Empty stored email falls back to what was typed.
    assert_eq!(handoff.field("Email"), Some("a@b.in"));
}

#[test]
fn switching_service_resets_level() {
    let mut v = Visitor::new();
    v.slide_to(5);
    assert_eq!(v.selection().level(), 5);
    let update = v.pick_service("report");
    assert_eq!(v.selection().level(), 0);
    assert_eq!(update.price, 900);
    assert!(!update.discounted);

    v.slide_to(99);
    assert_eq!(v.quote().unwrap().current_price, 2100);
    v.slide_to(-1);
    assert_eq!(v.quote().unwrap().current_price, 900);
}

#[test]
fn custom_payee_flows_into_links() {
    let mut v = Visitor::new();
    v.config.whatsapp_phone = "919000000000".into();
    v.config.upi_vpa = "studio@upi".into();
    v.click_book();
    v.fill_contact("Asha", "9876543210", "a@b.in");
    assert!(v.submit());
    assert_eq!(v.dialog().payee_vpa(), "studio@upi");
    assert!(v.dialog().upi_link().starts_with("upi://pay?pa=studio%40upi&"));
    v.type_txn("1234");
    assert!(v.verify());
    assert_eq!(whatsapp::decode(v.last_opened()).unwrap().phone, "919000000000");
}
