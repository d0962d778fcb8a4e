use dioxus::prelude::*;

use super::faq_view::FaqView;
use super::hero::HeroSection;
use super::markdown_page::MarkdownPage;
use super::reviews_scroller::ReviewsScroller;
use super::samples_view::SamplesView;
use super::service_projector::ServiceProjector;
use super::why_us_ribbon::WhyUsRibbon;

const MAIN_CSS: Asset = asset!("/assets/main.css");

const TERMS_MD: &str = include_str!("../../../docs/terms.md");
const PRIVACY_MD: &str = include_str!("../../../docs/privacy.md");

#[derive(Clone, Debug, PartialEq, Routable)]
pub enum Route {
    #[layout(SiteLayout)]
    #[route("/")]
    Home {},
    #[route("/samples/:tier_id")]
    Samples { tier_id: String },
    #[route("/terms")]
    Terms {},
    #[route("/privacy")]
    Privacy {},
    #[route("/offline")]
    Offline {},
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

#[component]
pub fn App() -> Element {
    rsx! {
        document::Stylesheet { href: MAIN_CSS }
        Router::<Route> {}
    }
}

#[component]
fn SiteLayout() -> Element {
    rsx! {
        div { class: "site",
            header { class: "site-nav",
                Link { class: "brand", to: Route::Home {}, "CampusSlateNS" }
                nav {
                    a { href: "/#services", "Services" }
                    Link { to: Route::Samples { tier_id: "deck".into() }, "Samples" }
                    a { href: "/#faq", "FAQ" }
                }
            }
            main {
                Outlet::<Route> {}
            }
            footer { class: "site-footer",
                span { "© CampusSlateNS · Academic design studio" }
                nav {
                    Link { to: Route::Terms {}, "Terms" }
                    Link { to: Route::Privacy {}, "Privacy" }
                }
            }
        }
    }
}

/// Landing page.
#[component]
fn Home() -> Element {
    rsx! {
        HeroSection {}
        WhyUsRibbon {}
        ServiceProjector {}
        ReviewsScroller {}
        FaqView {}
    }
}

/// Route component: sample deliverables for one service.
#[component]
fn Samples(tier_id: String) -> Element {
    rsx! { SamplesView { tier_id } }
}

#[component]
fn Terms() -> Element {
    rsx! { MarkdownPage { source: TERMS_MD } }
}

#[component]
fn Privacy() -> Element {
    rsx! { MarkdownPage { source: PRIVACY_MD } }
}

/// Fallback page for when the network is down.
#[component]
fn Offline() -> Element {
    rsx! {
        div { class: "offline-view",
            h2 { "You're offline" }
            p { "Pricing and samples need a connection. Reconnect and refresh to continue booking." }
            Link { to: Route::Home {}, "Try again" }
        }
    }
}

#[component]
fn NotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");
    rsx! {
        div { class: "not-found",
            h2 { "Page not found" }
            p { "Nothing lives at /{path}." }
            Link { to: Route::Home {}, "Back to home" }
        }
    }
}
