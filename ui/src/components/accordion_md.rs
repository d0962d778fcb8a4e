use dioxus::prelude::*;

use super::markdown_page::render_markdown;

#[derive(Clone, Debug, PartialEq)]
struct Panel {
    title: String,
    body_html: String,
}

/// Markdown split on `## ` headings into collapsible panels.
#[derive(Clone, Debug, PartialEq)]
struct Accordion {
    intro_html: String,
    panels: Vec<Panel>,
}

impl Accordion {
    fn parse(source: &str) -> Self {
        let mut intro = String::new();
        let mut raw: Vec<(String, String)> = Vec::new();

        for line in source.lines() {
            match (line.strip_prefix("## "), raw.last_mut()) {
                (Some(title), _) => raw.push((title.trim().to_string(), String::new())),
                (None, Some((_, body))) => {
                    body.push_str(line);
                    body.push('\n');
                }
                (None, None) => {
                    intro.push_str(line);
                    intro.push('\n');
                }
            }
        }

        Self {
            intro_html: render_markdown(&intro),
            panels: raw
                .into_iter()
                .map(|(title, body)| Panel {
                    title,
                    body_html: render_markdown(&body),
                })
                .collect(),
        }
    }
}

#[cfg(test)]
pub(crate) fn panel_titles(source: &str) -> Vec<String> {
    Accordion::parse(source).panels.into_iter().map(|p| p.title).collect()
}

/// One panel open at a time; clicking the open one closes it.
#[component]
pub fn AccordionMarkdown(source: &'static str, section_id: &'static str) -> Element {
    let accordion = use_hook(|| Accordion::parse(source));
    let mut open = use_signal::<Option<usize>>(|| None);

    rsx! {
        section { id: section_id, class: "faq",
            div { class: "faq-intro", dangerous_inner_html: "{accordion.intro_html}" }
            for (i, panel) in accordion.panels.iter().enumerate() {
                div {
                    key: "{i}",
                    class: if open() == Some(i) { "faq-card faq-card-open" } else { "faq-card" },
                    button {
                        r#type: "button",
                        class: "faq-question",
                        onclick: move |_| {
                            let next = if open() == Some(i) { None } else { Some(i) };
                            open.set(next);
                        },
                        "{panel.title}"
                    }
                    if open() == Some(i) {
                        div { class: "faq-answer", dangerous_inner_html: "{panel.body_html}" }
                    }
                }
            }
        }
    }
}
