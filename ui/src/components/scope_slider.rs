use dioxus::prelude::*;

use pfmarket_common::currency::format_inr;
use pfmarket_common::pricing::{max_discount_percent, PricingSelection};

/// Discrete scope slider for tiered services. Renders nothing for flat prices.
#[component]
pub fn ScopeSlider(mut selection: Signal<PricingSelection>) -> Element {
    let current = selection();
    let Some(quote) = current.quote() else {
        return rsx! {};
    };
    let max_level = current.service().pricing.tier_count().saturating_sub(1);
    let level_count = max_level + 1;
    let noun = quote.kind.unit_noun();
    let best = max_discount_percent(quote.kind);
    let naive = format_inr(quote.naive_price);
    let price = format_inr(quote.current_price);
    let claim = quote.savings_claim();
    let savings_line = claim.map(|(percent, saved)| format!("You save {percent}% ({})", format_inr(saved)));

    rsx! {
        div { class: "scope-slider",
            div { class: "scope-header",
                span { "Scale your scope" }
                span { class: "badge", "Up to {best}% off" }
            }
            input {
                r#type: "range",
                min: "0",
                max: "{max_level}",
                step: "1",
                value: "{quote.level}",
                oninput: move |evt| {
                    if let Ok(level) = evt.value().parse::<i64>() {
                        selection.write().set_level(level);
                    }
                },
            }
            div { class: "scope-scale",
                span { "Level 1" }
                span { "Level {level_count}" }
            }
            div { class: "scope-readout",
                span { class: "scope-quantity", "{quote.scope} {noun} · {quote.turnaround}" }
                div { class: "scope-price",
                    if claim.is_some() {
                        span { class: "naive-price", "{naive}" }
                    }
                    span { class: if claim.is_some() { "current-price discounted" } else { "current-price" },
                        "{price}"
                    }
                }
                if let Some(line) = savings_line {
                    span { class: "savings", "{line}" }
                }
            }
            ul { class: "perks",
                for perk in quote.perks.iter() {
                    li { key: "{perk}", "{perk}" }
                }
            }
        }
    }
}
