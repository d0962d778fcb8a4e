//! Scripted visitors for end-to-end booking journeys.
//!
//! A [`Visitor`] stands in for one browser tab: it owns a contact store that
//! survives [`Visitor::reload`], and records every alert and every URL the
//! site would open in a new tab.

use std::sync::Once;

use pfmarket_common::booking::{BookingFlow, BookingRequest, BookingStep};
use pfmarket_common::catalog::{default_service, find_service};
use pfmarket_common::contact::{BookingContact, ContactStore, MemoryContactStore, CONTACT_STORAGE_KEY};
use pfmarket_common::handoff::{HandoffConfig, QrAsset};
use pfmarket_common::pricing::{PriceUpdate, PricingSelection, Quote};

pub mod whatsapp;

static TRACING: Once = Once::new();

/// Route `tracing` output through the test writer. Honours `RUST_LOG`.
pub fn init_tracing() {
    TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
            )
            .with_test_writer()
            .try_init();
    });
}

pub struct Visitor {
    pub config: HandoffConfig,
    store: MemoryContactStore,
    selection: PricingSelection,
    dialog: Option<BookingFlow>,
    pub alerts: Vec<String>,
    pub opened_urls: Vec<String>,
}

impl Default for Visitor {
    fn default() -> Self {
        Self::new()
    }
}

impl Visitor {
    pub fn new() -> Self {
        init_tracing();
        Self {
            config: HandoffConfig::default(),
            store: MemoryContactStore::new(),
            selection: PricingSelection::new(default_service()),
            dialog: None,
            alerts: Vec::new(),
            opened_urls: Vec::new(),
        }
    }

    /// Start with something already sitting under the contact key.
    pub fn with_stored_raw(raw: &str) -> Self {
        let visitor = Self::new();
        visitor.store.put_raw(CONTACT_STORAGE_KEY, raw);
        visitor
    }

    /// Fresh page load in the same browser: storage survives, UI state does not.
    pub fn reload(&mut self) {
        self.selection = PricingSelection::new(default_service());
        self.dialog = None;
    }

    pub fn stored_contact(&self) -> Option<BookingContact> {
        self.store.get(CONTACT_STORAGE_KEY)
    }

    pub fn stored_raw(&self) -> Option<String> {
        self.store.raw(CONTACT_STORAGE_KEY)
    }

    // ─── Service projector ──────────────────────────────────────────────

    pub fn pick_service(&mut self, id: &str) -> PriceUpdate {
        let service = find_service(id).unwrap_or_else(|| panic!("no service {id}"));
        self.selection.select_service(service)
    }

    pub fn slide_to(&mut self, level: i64) -> PriceUpdate {
        self.selection.set_level(level)
    }

    pub fn quote(&self) -> Option<Quote> {
        self.selection.quote()
    }

    pub fn selection(&self) -> &PricingSelection {
        &self.selection
    }

    /// Press the projector's call-to-action.
    pub fn click_book(&mut self) {
        let service = self.selection.service();
        assert!(service.is_bookable(), "{} has no booking button", service.id);
        let update = self.selection.price_update();
        let request = BookingRequest {
            service_title: service.title.to_string(),
            final_price: update.price,
            discounted: update.discounted,
        };
        self.dialog = Some(BookingFlow::open(request, self.config.clone(), &self.store));
    }

    // ─── Booking dialog ─────────────────────────────────────────────────

    pub fn dialog(&self) -> &BookingFlow {
        self.dialog.as_ref().expect("booking dialog is not open")
    }

    fn dialog_mut(&mut self) -> &mut BookingFlow {
        self.dialog.as_mut().expect("booking dialog is not open")
    }

    pub fn dialog_open(&self) -> bool {
        self.dialog.is_some()
    }

    pub fn step(&self) -> BookingStep {
        self.dialog().step()
    }

    pub fn type_name(&mut self, name: &str) {
        self.dialog_mut().set_name(name);
    }

    pub fn type_phone(&mut self, phone: &str) {
        self.dialog_mut().set_phone(phone);
    }

    pub fn type_email(&mut self, email: &str) {
        self.dialog_mut().set_email(email);
    }

    pub fn fill_contact(&mut self, name: &str, phone: &str, email: &str) {
        self.type_name(name);
        self.type_phone(phone);
        self.type_email(email);
    }

    /// Submit the contact form. A rejection shows up as an alert.
    pub fn submit(&mut self) -> bool {
        let result = {
            let store = &self.store;
            let flow = self.dialog.as_mut().expect("booking dialog is not open");
            flow.submit_contact(store)
        };
        match result {
            Ok(()) => true,
            Err(e) => {
                self.alerts.push(e.to_string());
                false
            }
        }
    }

    pub fn edit_details(&mut self) {
        self.dialog_mut().edit_details();
    }

    pub fn type_txn(&mut self, txn: &str) {
        self.dialog_mut().set_txn_ref(txn);
    }

    pub fn verify_enabled(&self) -> bool {
        self.dialog().can_verify()
    }

    pub fn qr(&self) -> QrAsset {
        self.dialog().qr_asset()
    }

    /// Click "Verify on WhatsApp". Returns whether a tab was opened.
    pub fn verify(&mut self) -> bool {
        let result = {
            let store = &self.store;
            let flow = self.dialog.as_mut().expect("booking dialog is not open");
            flow.verify(store)
        };
        match result {
            Ok(handoff) => {
                self.opened_urls.push(handoff.url);
                self.dialog = None;
                true
            }
            Err(e) => {
                tracing::debug!("verify refused: {e}");
                false
            }
        }
    }

    pub fn close_dialog(&mut self) {
        self.dialog = None;
    }

    /// Overwrite storage from "another tab" while the dialog is open.
    pub fn store_from_elsewhere(&self, contact: &BookingContact) {
        self.store
            .set(CONTACT_STORAGE_KEY, contact)
            .expect("memory store never fails");
    }

    pub fn last_opened(&self) -> &str {
        self.opened_urls.last().map(String::as_str).expect("nothing opened")
    }
}
