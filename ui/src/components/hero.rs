use dioxus::prelude::*;

use pfmarket_common::catalog::ServiceKind;
use pfmarket_common::pricing::max_discount_percent;

use super::app::Route;
use super::workflow_diagram::WorkflowDiagram;

#[component]
pub fn HeroSection() -> Element {
    let mut show_workflow = use_signal(|| false);
    let best_deal = max_discount_percent(ServiceKind::Deck).max(max_discount_percent(ServiceKind::Report));

    rsx! {
        section { class: "hero",
            span { class: "hero-eyebrow", "Decks · Reports · Refund Shield" }
            h1 { "Academic work, designed like a product launch." }
            p { class: "hero-lede",
                "Cinematic slide decks and publication-grade reports for students who would rather "
                "spend the week preparing than formatting. Scale the scope, see the price, book in two steps."
            }
            div { class: "hero-actions",
                a { class: "btn btn-primary", href: "#services", "See pricing" }
                Link { class: "btn btn-ghost", to: Route::Samples { tier_id: "deck".into() }, "View samples" }
                button {
                    r#type: "button",
                    class: "btn btn-ghost",
                    onclick: move |_| show_workflow.set(true),
                    "How it works"
                }
            }
            p { class: "hero-note", "Bigger scopes save up to {best_deal}% against per-slide pricing." }
        }
        WorkflowDiagram { open: show_workflow }
    }
}
