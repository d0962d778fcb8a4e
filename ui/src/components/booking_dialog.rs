use dioxus::prelude::*;

use pfmarket_common::booking::{BookingFlow, BookingStep};
use pfmarket_common::currency::format_inr;

use super::browser;
use super::contact_storage::LocalStorageContactStore;

/// How long the "Copied" indicator stays up.
const COPIED_RESET_MS: u32 = 2_000;

/// Modal wrapping a [`BookingFlow`]. `None` means the dialog is closed.
#[component]
pub fn BookingDialog(mut flow: Signal<Option<BookingFlow>>) -> Element {
    let Some(current) = flow.read().clone() else {
        return rsx! {};
    };
    let request = current.request().clone();
    let price = format_inr(request.final_price);

    rsx! {
        div { class: "dialog-backdrop",
            div { class: "dialog", role: "dialog",
                div { class: "dialog-header",
                    span { class: "eyebrow", "Secure booking" }
                    h3 { "{price} · {request.service_title}" }
                    p { "Two quick steps: confirm your contact details, then pay via UPI and verify on WhatsApp." }
                    button {
                        r#type: "button",
                        class: "dialog-close",
                        onclick: move |_| flow.set(None),
                        "×"
                    }
                }
                match current.step() {
                    BookingStep::Form => rsx! { ContactStep { flow } },
                    BookingStep::Payment => rsx! { PaymentStep { flow } },
                }
            }
        }
    }
}

#[component]
fn ContactStep(mut flow: Signal<Option<BookingFlow>>) -> Element {
    let contact = flow
        .read()
        .as_ref()
        .map(|f| f.contact().clone())
        .unwrap_or_default();

    let submit = move |evt: FormEvent| {
        evt.prevent_default();
        let result = flow
            .write()
            .as_mut()
            .map(|f| f.submit_contact(&LocalStorageContactStore));
        if let Some(Err(e)) = result {
            browser::alert(&e.to_string());
        }
    };

    rsx! {
        form { class: "booking-form", onsubmit: submit,
            div { class: "step-label", "Step 1 · Client details" }
            div { class: "form-group",
                label { r#for: "name", "Full name" }
                input {
                    id: "name",
                    required: true,
                    placeholder: "John Doe",
                    value: "{contact.name}",
                    oninput: move |evt| {
                        if let Some(f) = flow.write().as_mut() {
                            f.set_name(evt.value());
                        }
                    },
                }
            }
            div { class: "form-group",
                label { r#for: "phone", "WhatsApp number" }
                div { class: "phone-row",
                    span { class: "phone-prefix", "+91" }
                    input {
                        id: "phone",
                        r#type: "tel",
                        required: true,
                        placeholder: "9999999999",
                        value: "{contact.phone}",
                        oninput: move |evt| {
                            let mut guard = flow.write();
                            if let Some(f) = guard.as_mut() {
                                if f.set_phone(&evt.value()) {
                                    browser::set_input_value("phone", &f.contact().phone);
                                }
                            }
                        },
                    }
                }
            }
            div { class: "form-group",
                label { r#for: "email", "Email address" }
                input {
                    id: "email",
                    r#type: "email",
                    required: true,
                    placeholder: "student@college.edu",
                    value: "{contact.email}",
                    oninput: move |evt| {
                        if let Some(f) = flow.write().as_mut() {
                            f.set_email(evt.value());
                        }
                    },
                }
            }
            button { r#type: "submit", class: "btn btn-primary", "Proceed to payment" }
        }
    }
}

#[component]
fn PaymentStep(mut flow: Signal<Option<BookingFlow>>) -> Element {
    let mut copied = use_signal(|| false);
    let mut qr_failed = use_signal(|| false);

    let Some(current) = flow.read().clone() else {
        return rsx! {};
    };
    let price = format_inr(current.request().final_price);
    let qr_src = current.qr_asset().path();
    let upi_link = current.upi_link();
    let vpa = current.payee_vpa().to_string();
    let txn_ref = current.txn_ref().to_string();
    let can_verify = current.can_verify();

    let verify = move |_| {
        let result = flow
            .write()
            .as_mut()
            .map(|f| f.verify(&LocalStorageContactStore));
        match result {
            Some(Ok(handoff)) => {
                browser::open_in_new_tab(&handoff.url);
                flow.set(None);
            }
            Some(Err(e)) => tracing::warn!("verify refused: {e}"),
            None => {}
        }
    };

    rsx! {
        div { class: "payment-step",
            div { class: "step-row",
                div { class: "step-label", "Step 2 · UPI payment & verify" }
                button {
                    r#type: "button",
                    class: "link-btn",
                    onclick: move |_| {
                        if let Some(f) = flow.write().as_mut() {
                            f.edit_details();
                        }
                    },
                    "Edit details"
                }
            }
            div { class: "qr-frame",
                if qr_failed() {
                    span { class: "qr-hint", "Add a QR image in public/assets" }
                } else {
                    img {
                        src: qr_src,
                        alt: "QR for {price}",
                        onerror: move |_| qr_failed.set(true),
                    }
                }
            }
            a { class: "btn btn-outline", href: "{upi_link}", "Tap to pay {price}" }
            div { class: "vpa-row",
                code { "{vpa}" }
                button {
                    r#type: "button",
                    class: "copy-btn",
                    onclick: {
                        let vpa = vpa.clone();
                        move |_| {
                            let vpa = vpa.clone();
                            spawn(async move {
                                if browser::copy_to_clipboard(&vpa).await {
                                    copied.set(true);
                                    browser::sleep_ms(COPIED_RESET_MS).await;
                                    copied.set(false);
                                }
                            });
                        }
                    },
                    if copied() { "Copied" } else { "Copy" }
                }
            }
            p { class: "txn-help",
                "After paying, paste the last 4 characters of your UTR / transaction ID "
                "and tap verify on WhatsApp for confirmation."
            }
            div { class: "form-group",
                label { r#for: "txn", "Transaction ID (last 4)" }
                input {
                    id: "txn",
                    placeholder: "e.g. 4F2A",
                    value: "{txn_ref}",
                    oninput: move |evt| {
                        if let Some(f) = flow.write().as_mut() {
                            f.set_txn_ref(evt.value());
                        }
                    },
                }
            }
            button {
                r#type: "button",
                class: "btn btn-primary",
                disabled: !can_verify,
                onclick: verify,
                "Verify on WhatsApp"
            }
        }
    }
}
