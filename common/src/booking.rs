//! Two-step booking wizard: contact details, then UPI payment and the
//! WhatsApp verification handoff.
//!
//! The flow owns no I/O. Persistence goes through a [`ContactStore`] and the
//! handoff is returned to the caller to open.

use crate::contact::{
    is_valid_phone, sanitize_phone, BookingContact, ContactStore, StoreError, CONTACT_STORAGE_KEY,
};
use crate::handoff::{select_qr, upi_link, BookingTransaction, Handoff, HandoffConfig, QrAsset};

/// Shortest transaction reference the verify action accepts.
pub const MIN_TXN_REF_LEN: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookingStep {
    Form,
    Payment,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BookingError {
    #[error("Please enter a valid 10-digit phone number.")]
    InvalidPhone,
    #[error("Please enter your full name.")]
    MissingName,
    #[error("Please enter your email address.")]
    MissingEmail,
    #[error("Enter at least 4 characters of the transaction ID.")]
    TxnRefTooShort,
    #[error("action not available in the {0:?} step")]
    WrongStep(BookingStep),
    #[error("this booking has already been sent for verification")]
    Closed,
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// The checks the contact form applies before it can be submitted.
pub fn validate_contact(contact: &BookingContact) -> Result<(), BookingError> {
    if contact.name.trim().is_empty() {
        return Err(BookingError::MissingName);
    }
    if !is_valid_phone(&contact.phone) {
        return Err(BookingError::InvalidPhone);
    }
    if contact.email.trim().is_empty() {
        return Err(BookingError::MissingEmail);
    }
    Ok(())
}

/// What is being booked: fixed for the lifetime of one dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingRequest {
    pub service_title: String,
    pub final_price: u64,
    pub discounted: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BookingFlow {
    request: BookingRequest,
    config: HandoffConfig,
    step: BookingStep,
    form: BookingContact,
    txn_ref: String,
    closed: bool,
}

impl BookingFlow {
    /// Open the dialog: always starts at the form, pre-filled from the store.
    pub fn open(request: BookingRequest, config: HandoffConfig, store: &dyn ContactStore) -> Self {
        let form = store.get(CONTACT_STORAGE_KEY).unwrap_or_default();
        tracing::debug!(
            service = %request.service_title,
            price = request.final_price,
            prefilled = !form.name.is_empty(),
            "booking dialog opened"
        );
        Self {
            request,
            config,
            step: BookingStep::Form,
            form,
            txn_ref: String::new(),
            closed: false,
        }
    }

    pub fn request(&self) -> &BookingRequest {
        &self.request
    }

    pub fn step(&self) -> BookingStep {
        self.step
    }

    pub fn contact(&self) -> &BookingContact {
        &self.form
    }

    pub fn txn_ref(&self) -> &str {
        &self.txn_ref
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.form.name = name.into();
    }

    /// Sanitised on every keystroke. Returns `true` when the field must be
    /// rewritten because the typed text differs from what was kept.
    pub fn set_phone(&mut self, raw: &str) -> bool {
        self.form.phone = sanitize_phone(raw);
        self.form.phone != raw
    }

    pub fn set_email(&mut self, email: impl Into<String>) {
        self.form.email = email.into();
    }

    /// Validate, persist (overwriting any earlier record) and move to payment.
    pub fn submit_contact(&mut self, store: &dyn ContactStore) -> Result<(), BookingError> {
        if self.closed {
            return Err(BookingError::Closed);
        }
        if self.step != BookingStep::Form {
            return Err(BookingError::WrongStep(self.step));
        }
        validate_contact(&self.form)?;
        store.set(CONTACT_STORAGE_KEY, &self.form)?;
        self.step = BookingStep::Payment;
        tracing::debug!("contact saved, moving to payment");
        Ok(())
    }

    /// Back to the form. The transaction reference is kept.
    pub fn edit_details(&mut self) {
        self.step = BookingStep::Form;
    }

    pub fn set_txn_ref(&mut self, txn_ref: impl Into<String>) {
        self.txn_ref = txn_ref.into();
    }

    pub fn can_verify(&self) -> bool {
        self.step == BookingStep::Payment && self.txn_ref.chars().count() >= MIN_TXN_REF_LEN
    }

    pub fn qr_asset(&self) -> QrAsset {
        select_qr(self.request.final_price, self.request.discounted)
    }

    pub fn upi_link(&self) -> String {
        upi_link(
            &self.config,
            self.request.final_price,
            &self.request.service_title,
        )
    }

    /// Identifier offered by the copy-to-clipboard button.
    pub fn payee_vpa(&self) -> &str {
        &self.config.upi_vpa
    }

    /// Compose the WhatsApp verification handoff and close the flow.
    ///
    /// Contact fields come from the latest persisted record, falling back
    /// field by field to what is in the form.
    pub fn verify(&mut self, store: &dyn ContactStore) -> Result<Handoff, BookingError> {
        if self.closed {
            return Err(BookingError::Closed);
        }
        if self.step != BookingStep::Payment {
            return Err(BookingError::WrongStep(self.step));
        }
        if !self.can_verify() {
            return Err(BookingError::TxnRefTooShort);
        }

        let contact = match store.get(CONTACT_STORAGE_KEY) {
            Some(stored) => stored.or_fields_from(&self.form),
            None => self.form.clone(),
        };
        let transaction = BookingTransaction {
            service_title: self.request.service_title.clone(),
            final_price: self.request.final_price,
            discounted: self.request.discounted,
            txn_ref: self.txn_ref.clone(),
        };
        let handoff = Handoff::compose(&self.config, &transaction, &contact);

        tracing::info!(
            service = %transaction.service_title,
            price = transaction.final_price,
            discounted = transaction.discounted,
            "verification handoff composed"
        );
        self.closed = true;
        Ok(handoff)
    }
}
