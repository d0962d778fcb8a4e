use std::fmt;

/// Which sample-viewer experience and pricing table a service uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ServiceKind {
    Deck,
    Report,
    Other,
}

impl ServiceKind {
    /// Per-unit rate (rupees) for the hypothetical linear price.
    pub fn naive_unit_rate(self) -> u64 {
        match self {
            ServiceKind::Deck => 30,
            ServiceKind::Report => 120,
            ServiceKind::Other => 0,
        }
    }

    /// Plural noun for the scope quantity ("slides", "pages").
    pub fn unit_noun(self) -> &'static str {
        match self {
            ServiceKind::Deck => "slides",
            ServiceKind::Report => "pages",
            ServiceKind::Other => "units",
        }
    }

    /// The scope-tier table for this kind, if it has one.
    pub fn tier_table(self) -> Option<&'static [PricingTier]> {
        match self {
            ServiceKind::Deck => Some(DECK_TIERS),
            ServiceKind::Report => Some(REPORT_TIERS),
            ServiceKind::Other => None,
        }
    }
}

impl fmt::Display for ServiceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ServiceKind::Deck => write!(f, "deck"),
            ServiceKind::Report => write!(f, "report"),
            ServiceKind::Other => write!(f, "other"),
        }
    }
}

/// One step on the discrete scope slider.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PricingTier {
    pub level: usize,
    /// Slide or page count. Only feeds the naive comparison price.
    pub scope: u32,
    /// Authoritative price in whole rupees.
    pub price: u64,
    pub turnaround: &'static str,
    /// Perks first unlocked at this level.
    pub perks: &'static [&'static str],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlatPrice {
    Amount(u64),
    Free,
}

impl FlatPrice {
    pub fn amount(self) -> u64 {
        match self {
            FlatPrice::Amount(amount) => amount,
            FlatPrice::Free => 0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PricingModel {
    FlatPrice(FlatPrice),
    TieredScope(&'static [PricingTier]),
}

impl PricingModel {
    /// Price before the customer touches the slider.
    pub fn starting_price(&self) -> u64 {
        match self {
            PricingModel::FlatPrice(flat) => flat.amount(),
            PricingModel::TieredScope(tiers) => tiers.first().map(|t| t.price).unwrap_or(0),
        }
    }

    pub fn is_free(&self) -> bool {
        matches!(self, PricingModel::FlatPrice(FlatPrice::Free))
    }

    pub fn tier_count(&self) -> usize {
        match self {
            PricingModel::FlatPrice(_) => 0,
            PricingModel::TieredScope(tiers) => tiers.len(),
        }
    }
}

/// A deck rendered in an embedded viewer on the samples page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeckVariant {
    pub id: &'static str,
    pub label: &'static str,
    pub description: Option<&'static str>,
    pub embed_url: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SampleRefs {
    pub deck_variants: &'static [DeckVariant],
    pub report_pdf: Option<&'static str>,
}

/// A purchasable offering shown in the service projector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServiceTier {
    pub id: &'static str,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub unit: &'static str,
    pub features: &'static [&'static str],
    pub recommended: bool,
    /// Style tag only.
    pub gradient: &'static str,
    pub kind: ServiceKind,
    pub pricing: PricingModel,
    pub samples: SampleRefs,
}

impl ServiceTier {
    /// Policy tiers (Refund Shield) have neither calculator nor booking.
    pub fn is_bookable(&self) -> bool {
        self.kind != ServiceKind::Other
    }
}

pub const DECK_TIERS: &[PricingTier] = &[
    PricingTier {
        level: 0,
        scope: 10,
        price: 250,
        turnaround: "48 hours",
        perks: &["Custom typography & layouts", "Source files included"],
    },
    PricingTier {
        level: 1,
        scope: 12,
        price: 280,
        turnaround: "48 hours",
        perks: &["Data visualisation (charts/graphs)"],
    },
    PricingTier {
        level: 2,
        scope: 15,
        price: 310,
        turnaround: "72 hours",
        perks: &["Motion-ready transitions"],
    },
    PricingTier {
        level: 3,
        scope: 20,
        price: 390,
        turnaround: "3–4 days",
        perks: &["Speaker notes for every slide"],
    },
    PricingTier {
        level: 4,
        scope: 25,
        price: 460,
        turnaround: "4–5 days",
        perks: &["Two revision rounds"],
    },
    PricingTier {
        level: 5,
        scope: 30,
        price: 520,
        turnaround: "5–6 days",
        perks: &["Viva rehearsal walkthrough"],
    },
];

pub const REPORT_TIERS: &[PricingTier] = &[
    PricingTier {
        level: 0,
        scope: 10,
        price: 900,
        turnaround: "5 days",
        perks: &["IEEE/APA/MLA formatting", "Cover page design"],
    },
    PricingTier {
        level: 1,
        scope: 12,
        price: 1000,
        turnaround: "6 days",
        perks: &["Table of contents automation"],
    },
    PricingTier {
        level: 2,
        scope: 15,
        price: 1200,
        turnaround: "7 days",
        perks: &["Plagiarism check & fixes"],
    },
    PricingTier {
        level: 3,
        scope: 20,
        price: 1500,
        turnaround: "9 days",
        perks: &["Figures & tables redrawn"],
    },
    PricingTier {
        level: 4,
        scope: 25,
        price: 1800,
        turnaround: "11 days",
        perks: &["Executive summary"],
    },
    PricingTier {
        level: 5,
        scope: 30,
        price: 2100,
        turnaround: "14 days",
        perks: &["Unlimited revisions until submission"],
    },
];

const DECK_VARIANTS: &[DeckVariant] = &[
    DeckVariant {
        id: "investor-pitch",
        label: "Investor pitch",
        description: Some("Ten-slide narrative with animated market sizing."),
        embed_url: "/embeds/decks/investor-pitch.html",
    },
    DeckVariant {
        id: "thesis-defence",
        label: "Thesis defence",
        description: Some("Committee-ready structure with data-heavy results."),
        embed_url: "/embeds/decks/thesis-defence.html",
    },
    DeckVariant {
        id: "case-study",
        label: "Case study",
        description: None,
        embed_url: "/embeds/decks/case-study.html",
    },
];

pub static SERVICE_TIERS: &[ServiceTier] = &[
    ServiceTier {
        id: "deck",
        title: "Cinematic Deck",
        subtitle: "High-impact presentations for investors & professors.",
        unit: "per deck",
        features: &[
            "Custom Typography & Layouts",
            "Motion-Ready Transitions",
            "Data Visualization (Charts/Graphs)",
            "Source Files Included",
            "48-Hour Turnaround",
        ],
        recommended: true,
        gradient: "from-blue-500 to-cyan-400",
        kind: ServiceKind::Deck,
        pricing: PricingModel::TieredScope(DECK_TIERS),
        samples: SampleRefs {
            deck_variants: DECK_VARIANTS,
            report_pdf: None,
        },
    },
    ServiceTier {
        id: "report",
        title: "The Architect's Report",
        subtitle: "Structuring chaos into academic precision.",
        unit: "per project",
        features: &[
            "Plagiarism Check & Fixes",
            "IEEE/APA/MLA Formatting",
            "Table of Contents Automation",
            "Cover Page Design",
            "Infinite Revisions",
        ],
        recommended: false,
        gradient: "from-violet-500 to-purple-400",
        kind: ServiceKind::Report,
        pricing: PricingModel::TieredScope(REPORT_TIERS),
        samples: SampleRefs {
            deck_variants: &[],
            report_pdf: Some("/samples/architects-report.pdf"),
        },
    },
    ServiceTier {
        id: "shield",
        title: "Refund Shield",
        subtitle: "Our commitment to risk-free excellence.",
        unit: "included",
        features: &[
            "100% Money-Back Guarantee",
            "Escrow-style Payment (Optional)",
            "Strict Confidentiality NDA",
            "Clear Acceptance Criteria",
        ],
        recommended: false,
        gradient: "from-emerald-500 to-green-400",
        kind: ServiceKind::Other,
        pricing: PricingModel::FlatPrice(FlatPrice::Free),
        samples: SampleRefs {
            deck_variants: &[],
            report_pdf: None,
        },
    },
];

/// Look up a service by its short id.
pub fn find_service(id: &str) -> Option<&'static ServiceTier> {
    SERVICE_TIERS.iter().find(|s| s.id == id)
}

/// The service selected when the page loads.
pub fn default_service() -> &'static ServiceTier {
    &SERVICE_TIERS[0]
}
