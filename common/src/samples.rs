use crate::catalog::{find_service, DeckVariant, ServiceKind, ServiceTier};

/// What the samples page shows for a service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SampleView {
    /// Variant cards plus an embedded viewer for the active one.
    Decks {
        variants: &'static [DeckVariant],
        active: Option<&'static DeckVariant>,
    },
    /// A single embedded PDF, if one is configured.
    Report { pdf_path: Option<&'static str> },
    /// Policy tiers without deliverables.
    Nothing,
}

/// Highlight pills shown under the samples header.
pub fn highlight_pills(kind: ServiceKind) -> &'static [&'static str] {
    match kind {
        ServiceKind::Deck => &[
            "Motion-ready transitions",
            "Narrative-first structure",
            "Exam-safe formatting",
        ],
        ServiceKind::Report => &[
            "Publication-grade formatting",
            "Citation-safe structure",
            "Scannable summaries",
        ],
        ServiceKind::Other => &[],
    }
}

/// Resolve the viewer for a service. `active_id` falls back to the first variant.
pub fn sample_view(service: &ServiceTier, active_id: Option<&str>) -> SampleView {
    match service.kind {
        ServiceKind::Deck => {
            let variants = service.samples.deck_variants;
            let active = active_id
                .and_then(|id| variants.iter().find(|v| v.id == id))
                .or_else(|| variants.first());
            SampleView::Decks { variants, active }
        }
        ServiceKind::Report => SampleView::Report {
            pdf_path: service.samples.report_pdf,
        },
        ServiceKind::Other => SampleView::Nothing,
    }
}

/// Route-level lookup: `None` renders the not-found panel.
pub fn samples_for(tier_id: &str) -> Option<(&'static ServiceTier, SampleView)> {
    let service = find_service(tier_id)?;
    Some((service, sample_view(service, None)))
}
