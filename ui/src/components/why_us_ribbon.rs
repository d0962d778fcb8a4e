use dioxus::prelude::*;

use pfmarket_common::showcase::{active_reason, REASONS};

const AI_BULLETS: &[&str] = &[
    "Template-looking layouts",
    "Visible AI traces / watermarks",
    "Vibe: \"you did nothing\"",
];

const STUDIO_BULLETS: &[&str] = &[
    "Your outline, data, and attempts",
    "Hand-built structure & pacing",
    "Human voice, AI-aware safety",
];

/// Comparison card plus three reason cards, one highlighted at a time.
#[component]
pub fn WhyUsRibbon() -> Element {
    let mut active_id = use_signal(|| REASONS[0].id);
    let active = active_reason(active_id());

    rsx! {
        section { class: "why-us",
            div { class: "section-header",
                span { class: "eyebrow", "Why pay for this in an AI world" }
                h2 { "Real work, not auto-generated output" }
                p {
                    "AI tools can spit out decks and reports. This studio makes sure your "
                    "teacher or hiring manager sees your effort, not just a bot's style."
                }
            }
            div { class: "why-us-grid",
                div { class: "compare-card",
                    div { class: "compare-col compare-ai",
                        h4 { "AI platforms" }
                        ul {
                            for bullet in AI_BULLETS.iter() {
                                li { key: "{bullet}", "{bullet}" }
                            }
                        }
                        p { class: "compare-warning", "High chance of being called out as AI in viva or screening." }
                    }
                    div { class: "compare-col compare-studio",
                        h4 { "This studio" }
                        ul {
                            for bullet in STUDIO_BULLETS.iter() {
                                li { key: "{bullet}", "{bullet}" }
                            }
                        }
                        span { class: "pill", "{active.tag}" }
                    }
                }
                div { class: "reason-list",
                    for reason in REASONS.iter() {
                        button {
                            key: "{reason.id}",
                            r#type: "button",
                            class: if reason.id == active.id { "reason-card reason-active" } else { "reason-card" },
                            onclick: move |_| active_id.set(reason.id),
                            div { class: "reason-head",
                                span { class: "reason-label", "{reason.label}" }
                                span { class: "reason-tag", "{reason.tag}" }
                            }
                            p { "{reason.body}" }
                        }
                    }
                }
            }
        }
    }
}
