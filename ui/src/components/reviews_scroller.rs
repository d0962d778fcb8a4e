use dioxus::prelude::*;

use pfmarket_common::showcase::{Review, REVIEWS, REVIEW_METRICS};

/// Endless testimonial marquee. The card list is rendered twice so the CSS
/// animation can loop without a visible seam.
#[component]
pub fn ReviewsScroller() -> Element {
    rsx! {
        section { class: "reviews",
            div { class: "section-header",
                span { class: "eyebrow", "Social proof" }
                h2 { "What users are saying." }
                p {
                    "Real students and freshers using these decks and reports for vivas, "
                    "project defense, and first-job interviews."
                }
                div { class: "pills",
                    for metric in REVIEW_METRICS.iter() {
                        span { key: "{metric}", class: "pill", "{metric}" }
                    }
                }
            }
            div { class: "marquee",
                div { class: "marquee-track",
                    for (i, review) in REVIEWS.iter().enumerate() {
                        ReviewCard { key: "a{i}", review: *review }
                    }
                    for (i, review) in REVIEWS.iter().enumerate() {
                        ReviewCard { key: "b{i}", review: *review, hidden: true }
                    }
                }
            }
        }
    }
}

#[component]
fn ReviewCard(review: Review, #[props(default)] hidden: bool) -> Element {
    let aria_hidden = if hidden { "true" } else { "false" };
    rsx! {
        figure { class: "review-card", "aria-hidden": aria_hidden,
            blockquote { "“{review.quote}”" }
            figcaption {
                span { class: "review-name", "{review.name}" }
                span { class: "review-title", "{review.title}" }
            }
        }
    }
}
