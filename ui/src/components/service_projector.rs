use dioxus::prelude::*;

use pfmarket_common::booking::{BookingFlow, BookingRequest};
use pfmarket_common::catalog::{default_service, PricingModel, SERVICE_TIERS};
use pfmarket_common::currency::{format_flat, format_inr};
use pfmarket_common::handoff::HandoffConfig;
use pfmarket_common::pricing::PricingSelection;

use super::app::Route;
use super::booking_dialog::BookingDialog;
use super::contact_storage::LocalStorageContactStore;
use super::scope_slider::ScopeSlider;

/// Tabbed service switcher with live pricing and the booking entry point.
#[component]
pub fn ServiceProjector() -> Element {
    let mut selection = use_signal(|| PricingSelection::new(default_service()));
    let mut booking = use_signal(|| None::<BookingFlow>);

    let current = selection();
    let service = current.service();
    let update = current.price_update();
    let is_free = service.pricing.is_free();

    let price_label = match service.pricing {
        PricingModel::FlatPrice(flat) => format_flat(flat),
        PricingModel::TieredScope(_) => format_inr(update.price),
    };
    let cta_label = if is_free {
        "Reserve free architecture slot".to_string()
    } else {
        format!("Lock in at {}", format_inr(update.price))
    };

    rsx! {
        section { id: "services", class: "services",
            div { class: "section-header",
                span { class: "eyebrow", "Service Protocols" }
                h2 { "Architecture as a service" }
                p { "Pick a protocol and the panel adapts inclusions and live pricing to your scope." }
            }
            div { class: "projector",
                div { class: "tabs", role: "tablist",
                    for tier in SERVICE_TIERS.iter() {
                        button {
                            key: "{tier.id}",
                            r#type: "button",
                            role: "tab",
                            class: if tier.id == service.id { "tab tab-active" } else { "tab" },
                            onclick: move |_| {
                                selection.write().select_service(tier);
                            },
                            "{tier.title}"
                        }
                    }
                    if service.is_bookable() {
                        span { class: "tabs-note", "Refund shield applies" }
                    }
                }

                div { class: "projector-panel",
                    div { class: "projector-copy",
                        span { class: "unit", "{service.unit}" }
                        h3 { "{service.title}" }
                        p { "{service.subtitle}" }
                        ul { class: "features",
                            for feature in service.features.iter() {
                                li { key: "{feature}", "{feature}" }
                            }
                        }
                        if service.is_bookable() {
                            p { class: "survives", "Designed to survive viva + detector + peer review" }
                        } else {
                            p { class: "shield-copy",
                                "Refund Shield wraps every paid protocol in clear, documented acceptance "
                                "criteria. If the work misses that bar, you get a full refund."
                            }
                        }
                    }

                    if service.is_bookable() {
                        div { class: "projector-pricing",
                            span { class: "eyebrow", "Investment" }
                            span { class: "price", "{price_label}" }
                            ScopeSlider { selection }
                            button {
                                r#type: "button",
                                class: "btn btn-primary",
                                onclick: move |_| {
                                    let request = BookingRequest {
                                        service_title: service.title.to_string(),
                                        final_price: update.price,
                                        discounted: update.discounted,
                                    };
                                    booking.set(Some(BookingFlow::open(
                                        request,
                                        HandoffConfig::default(),
                                        &LocalStorageContactStore,
                                    )));
                                },
                                "{cta_label}"
                            }
                            Link {
                                class: "btn btn-ghost",
                                to: Route::Samples { tier_id: service.id.to_string() },
                                "View sample deliverables"
                            }
                        }
                    }
                }
            }
            BookingDialog { flow: booking }
        }
    }
}
