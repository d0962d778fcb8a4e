use dioxus::prelude::*;

use pfmarket_common::catalog::ServiceKind;
use pfmarket_common::samples::{highlight_pills, sample_view, samples_for, SampleView};

use super::app::Route;

/// Live sample suite for one service: deck variants or the report PDF.
#[component]
pub fn SamplesView(tier_id: String) -> Element {
    let mut active_variant = use_signal(|| None::<&'static str>);

    let Some((service, _)) = samples_for(&tier_id) else {
        return rsx! {
            div { class: "not-found",
                h2 { "No samples for \"{tier_id}\"" }
                Link { to: Route::Home {}, "Back to service protocols" }
            }
        };
    };
    let view = sample_view(service, active_variant());
    let showcase = match service.kind {
        ServiceKind::Deck => "decks with animations",
        _ => "reports as PDFs",
    };

    rsx! {
        div { class: "samples-view",
            Link { class: "back-link", to: Route::Home {}, "Back to service protocols" }
            header { class: "samples-header",
                span { class: "eyebrow", "Live sample suite" }
                h1 { "{service.title}" }
                p { "{service.subtitle} This space shows real {showcase} so you can judge structure, pacing, and polish before committing." }
                div { class: "pills",
                    for pill in highlight_pills(service.kind).iter() {
                        span { key: "{pill}", class: "pill", "{pill}" }
                    }
                }
            }
            match view {
                SampleView::Decks { variants, active } => rsx! {
                    div { class: "variant-grid",
                        for variant in variants.iter() {
                            button {
                                key: "{variant.id}",
                                r#type: "button",
                                class: if active.map(|a| a.id) == Some(variant.id) { "variant-card variant-active" } else { "variant-card" },
                                onclick: move |_| active_variant.set(Some(variant.id)),
                                span { class: "variant-label", "{variant.label}" }
                                if let Some(description) = variant.description {
                                    p { "{description}" }
                                }
                            }
                        }
                    }
                    if let Some(deck) = active {
                        div { class: "viewer",
                            h2 { "Live deck preview" }
                            iframe {
                                src: deck.embed_url,
                                width: "100%",
                                height: "100%",
                                "allowfullscreen": "true",
                                "This is an embedded presentation."
                            }
                        }
                    }
                },
                SampleView::Report { pdf_path: Some(path) } => rsx! {
                    div { class: "viewer",
                        h2 { "Report sample" }
                        iframe { src: path, width: "100%", height: "100%" }
                        a { href: path, target: "_blank", "Open the PDF in a new tab" }
                    }
                },
                SampleView::Report { pdf_path: None } => rsx! {
                    p { class: "empty-state", "The report sample is being refreshed. Check back soon." }
                },
                SampleView::Nothing => rsx! {
                    p { class: "empty-state", "Refund Shield is a policy, not a deliverable. It applies to every paid protocol." }
                },
            }
        }
    }
}
