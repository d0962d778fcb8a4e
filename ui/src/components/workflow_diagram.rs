use dioxus::prelude::*;

use pfmarket_common::showcase::{
    is_reached, rail_progress, WorkflowRole, WorkflowStep, DEFAULT_ACTIVE_STEP, WORKFLOW_STEPS,
};

fn step_class(step: &WorkflowStep, active_id: &str) -> String {
    let role = match step.role {
        WorkflowRole::Client => "step-client",
        WorkflowRole::Studio => "step-studio",
    };
    let lit = if is_reached(step, active_id) { " step-lit" } else { "" };
    let branch = if step.is_branch { " step-branch" } else { "" };
    format!("workflow-step {role}{lit}{branch}")
}

/// Brief-to-delivery lifecycle modal. Hovering or tapping a step moves the rail fill.
#[component]
pub fn WorkflowDiagram(mut open: Signal<bool>) -> Element {
    let mut active_id = use_signal(|| DEFAULT_ACTIVE_STEP);

    if !open() {
        return rsx! {};
    }
    let fill = rail_progress(active_id());

    rsx! {
        div { class: "dialog-backdrop",
            div { class: "dialog workflow", role: "dialog",
                button {
                    r#type: "button",
                    class: "dialog-close",
                    onclick: move |_| open.set(false),
                    "×"
                }
                span { class: "eyebrow", "Production workflow" }
                h2 { "Project lifecycle" }
                div { class: "workflow-legend",
                    span { class: "legend-client", "You" }
                    span { class: "legend-studio", "Studio" }
                    span { class: "legend-hint", "Hover steps to light up the path" }
                }
                div { class: "workflow-rail",
                    div { class: "workflow-rail-fill", style: "width: {fill}%" }
                }
                ol { class: "workflow-steps",
                    for step in WORKFLOW_STEPS.iter() {
                        li {
                            key: "{step.id}",
                            class: step_class(step, active_id()),
                            onmouseenter: move |_| active_id.set(step.id),
                            onclick: move |_| active_id.set(step.id),
                            span { class: "step-title", "{step.title}" }
                            span { class: "step-subtitle", "{step.subtitle}" }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn step_classes_follow_the_active_step() {
        let deck_track = &WORKFLOW_STEPS[5];
        assert_eq!(step_class(deck_track, "3"), "workflow-step step-studio step-branch");
        assert_eq!(step_class(deck_track, "7"), "workflow-step step-studio step-lit step-branch");
        assert_eq!(step_class(&WORKFLOW_STEPS[0], "1"), "workflow-step step-client step-lit");
    }
}
