//! Static home-page content: testimonials, the "why us" reasons and the
//! project lifecycle shown in the workflow diagram.

/// One testimonial card in the scroller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Review {
    pub quote: &'static str,
    pub name: &'static str,
    pub title: &'static str,
}

pub const REVIEWS: &[Review] = &[
    Review {
        quote: "Locked my deck less than 24 hours before committee and still got something that felt tailored, sharp, and easy to speak from.",
        name: "User 1",
        title: "Delegation Head",
    },
    Review {
        quote: "The structure and flow were miles better than my usual slides. The brief was followed exactly, with smart suggestions where I was vague.",
        name: "User 2",
        title: "College MUN Participant",
    },
    Review {
        quote: "Honestly did not expect this level of polish for the price. The refund policy made it feel safe to try, but I didn't need it.",
        name: "User 3",
        title: "First-time Client",
    },
    Review {
        quote: "Loved how they mixed AI-assisted research with a very human voice. Nothing felt generic or copy-pasted from the internet.",
        name: "User 4",
        title: "Research Speaker",
    },
    Review {
        quote: "Turnaround was exactly as promised. Priority slot came in clutch when my original plan fell apart two days before the event.",
        name: "User 5",
        title: "Conference Delegate",
    },
    Review {
        quote: "Briefing was simple. I just dropped my context and references, and the final deck felt like something I would have written on my best day.",
        name: "User 6",
        title: "Student Delegate",
    },
    Review {
        quote: "Slides were clean, consistent, and easy for the chair to skim. Visual hierarchy made my key points stand out without overdesign.",
        name: "User 7",
        title: "Committee Speaker",
    },
    Review {
        quote: "Communication on WhatsApp was fast and clear. I always knew what stage the deck was in and when to expect the next update.",
        name: "User 8",
        title: "Returning Client",
    },
    Review {
        quote: "The research notes attached with the deck made prep way easier. I could adapt answers on the fly without memorizing everything.",
        name: "User 9",
        title: "Crisis Delegate",
    },
    Review {
        quote: "For the price, this easily beats trying to build slides from scratch the night before. The time I saved was worth it alone.",
        name: "User 10",
        title: "College Student",
    },
];

/// Small stat pills above the scroller.
pub const REVIEW_METRICS: &[&str] = &["95% would recommend", "Used across 3+ semesters"];

/// One selectable card in the "why us" ribbon.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reason {
    pub id: &'static str,
    pub label: &'static str,
    pub body: &'static str,
    pub tag: &'static str,
}

pub const REASONS: &[Reason] = &[
    Reason {
        id: "marks",
        label: "Marks you can defend",
        body: "Decks and reports built around your outline and rubric so you can walk through every slide without fearing \"AI did this\" comments.",
        tag: "Exam & viva safe",
    },
    Reason {
        id: "interview",
        label: "Interview leverage",
        body: "Freshers reuse these as portfolio decks and case studies that look intentional, not like a chat export or template everyone's seen.",
        tag: "Portfolio-ready",
    },
    Reason {
        id: "pricing",
        label: "Affordable & negotiable",
        body: "Decks from ₹250 / 10 slides, reports from ₹900 / 10 pages. Tight ceiling? Scope and polish adjust instead of the door closing.",
        tag: "Student-first pricing",
    },
];

/// The ribbon's selected reason. Unknown ids fall back to the first one.
pub fn active_reason(id: &str) -> &'static Reason {
    REASONS.iter().find(|r| r.id == id).unwrap_or(&REASONS[0])
}

/// Who acts at a lifecycle step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkflowRole {
    Client,
    Studio,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkflowStep {
    pub id: &'static str,
    pub role: WorkflowRole,
    pub title: &'static str,
    pub subtitle: &'static str,
    /// Position on the rail, 0..=100.
    pub progress: u8,
    /// Parallel branches share a rail position.
    pub is_branch: bool,
}

const fn step(
    id: &'static str,
    role: WorkflowRole,
    title: &'static str,
    subtitle: &'static str,
    progress: u8,
    is_branch: bool,
) -> WorkflowStep {
    WorkflowStep {
        id,
        role,
        title,
        subtitle,
        progress,
        is_branch,
    }
}

pub const WORKFLOW_STEPS: &[WorkflowStep] = &[
    step("1", WorkflowRole::Client, "Upload Brief", "Prompt & constraints", 5, false),
    step("2", WorkflowRole::Client, "Drop Assets", "Decks & reports", 15, false),
    step("3", WorkflowRole::Studio, "Scope & Risk", "Feasibility check", 25, false),
    step("4", WorkflowRole::Studio, "Narrative", "Creating the spine", 35, false),
    step("5", WorkflowRole::Studio, "Selection", "Deck or Report track", 45, false),
    step("6a", WorkflowRole::Studio, "Deck Track", "Visual first · 12d", 60, true),
    step("6b", WorkflowRole::Studio, "Report Track", "Structure · 22d", 60, true),
    step("7", WorkflowRole::Studio, "Polish & QA", "Final safety check", 75, false),
    step("8", WorkflowRole::Studio, "Handoff", "Assets delivered", 85, false),
    step("9", WorkflowRole::Client, "Complete", "Ready for launch", 95, false),
];

/// Step highlighted when the diagram opens.
pub const DEFAULT_ACTIVE_STEP: &str = "3";

/// Rail fill for the active step; 0 for unknown ids.
pub fn rail_progress(active_id: &str) -> u8 {
    WORKFLOW_STEPS
        .iter()
        .find(|s| s.id == active_id)
        .map(|s| s.progress)
        .unwrap_or(0)
}

/// Steps at or behind the active position are lit.
pub fn is_reached(step: &WorkflowStep, active_id: &str) -> bool {
    step.progress <= rail_progress(active_id)
}
