pub mod accordion_md;
pub mod app;
pub mod booking_dialog;
pub mod browser;
pub mod contact_storage;
pub mod faq_view;
pub mod hero;
pub mod markdown_page;
pub mod reviews_scroller;
pub mod samples_view;
pub mod scope_slider;
pub mod service_projector;
pub mod why_us_ribbon;
pub mod workflow_diagram;
