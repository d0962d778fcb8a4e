use dioxus::prelude::*;
use pulldown_cmark::{html, Options, Parser};

/// Markdown to HTML with the extensions the bundled docs use.
pub fn render_markdown(source: &str) -> String {
    let mut opts = Options::empty();
    opts.insert(Options::ENABLE_TABLES);
    opts.insert(Options::ENABLE_STRIKETHROUGH);
    let mut out = String::new();
    html::push_html(&mut out, Parser::new_ext(source, opts));
    out
}

/// Static prose page (terms, privacy) rendered from bundled markdown.
#[component]
pub fn MarkdownPage(source: &'static str) -> Element {
    let html_content = use_memo(move || render_markdown(source));

    rsx! {
        article { class: "prose-page",
            div { dangerous_inner_html: "{html_content}" }
        }
    }
}
