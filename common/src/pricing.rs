//! Scope-tier pricing: maps a slider level to a price and the discount it
//! represents against a linear per-unit baseline.

use crate::catalog::{PricingModel, PricingTier, ServiceKind, ServiceTier};

/// A fully resolved slider position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Quote {
    pub kind: ServiceKind,
    pub level: usize,
    pub scope: u32,
    pub current_price: u64,
    /// `scope × rate`. A comparison figure only, never charged.
    pub naive_price: u64,
    pub savings: u64,
    pub discount_percent: u8,
    pub turnaround: &'static str,
    /// Perks of every tier up to and including `level`.
    pub perks: Vec<&'static str>,
    /// Level 0 is the anchor tier and never reported as discounted.
    pub discounted: bool,
}

impl Quote {
    /// `(percent, rupees)` to advertise as savings. The anchor tier claims none.
    pub fn savings_claim(&self) -> Option<(u8, u64)> {
        if !self.discounted || self.discount_percent == 0 {
            return None;
        }
        Some((self.discount_percent, self.savings))
    }
}

/// What the service projector needs after every slider or tab change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PriceUpdate {
    pub price: u64,
    pub discounted: bool,
}

/// Clamp a raw slider value into `[0, tier_count - 1]`.
pub fn clamp_level(level: i64, tier_count: usize) -> usize {
    if tier_count == 0 || level <= 0 {
        return 0;
    }
    (level as u64).min(tier_count as u64 - 1) as usize
}

/// Rounded `savings / naive × 100`, clamped to `[0, 100]`.
pub fn discount_percent(naive_price: u64, current_price: u64) -> u8 {
    let savings = naive_price.saturating_sub(current_price);
    if naive_price == 0 || savings == 0 {
        return 0;
    }
    // Integer round-half-up of savings * 100 / naive.
    let numerator = savings as u128 * 200 + naive_price as u128;
    let pct = numerator / (naive_price as u128 * 2);
    pct.min(100) as u8
}

/// Resolve a level against an explicit tier table.
pub fn resolve_in(tiers: &[PricingTier], kind: ServiceKind, level: i64) -> Option<Quote> {
    let level = clamp_level(level, tiers.len());
    let tier = tiers.get(level)?;

    let naive_price = tier.scope as u64 * kind.naive_unit_rate();
    let savings = naive_price.saturating_sub(tier.price);
    let perks = tiers[..=level]
        .iter()
        .flat_map(|t| t.perks.iter().copied())
        .collect();

    Some(Quote {
        kind,
        level,
        scope: tier.scope,
        current_price: tier.price,
        naive_price,
        savings,
        discount_percent: discount_percent(naive_price, tier.price),
        turnaround: tier.turnaround,
        perks,
        discounted: level > 0,
    })
}

/// Resolve a level for a service kind. `None` for kinds without a tier table.
pub fn resolve(kind: ServiceKind, level: i64) -> Option<Quote> {
    resolve_in(kind.tier_table()?, kind, level)
}

/// Largest discount any level of the kind's table offers ("Up to N% off").
pub fn max_discount_percent(kind: ServiceKind) -> u8 {
    let Some(tiers) = kind.tier_table() else {
        return 0;
    };
    tiers
        .iter()
        .map(|t| discount_percent(t.scope as u64 * kind.naive_unit_rate(), t.price))
        .max()
        .unwrap_or(0)
}

/// The projector's current service and slider position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PricingSelection {
    service: &'static ServiceTier,
    level: usize,
}

impl PricingSelection {
    pub fn new(service: &'static ServiceTier) -> Self {
        Self { service, level: 0 }
    }

    pub fn service(&self) -> &'static ServiceTier {
        self.service
    }

    pub fn level(&self) -> usize {
        self.level
    }

    /// Switch services. Always resets the slider to level 0.
    pub fn select_service(&mut self, service: &'static ServiceTier) -> PriceUpdate {
        tracing::debug!(from = self.service.id, to = service.id, "service switched");
        self.service = service;
        self.level = 0;
        self.price_update()
    }

    /// Move the slider. Out-of-range values are clamped.
    pub fn set_level(&mut self, level: i64) -> PriceUpdate {
        self.level = clamp_level(level, self.service.pricing.tier_count());
        self.price_update()
    }

    /// Quote for tiered services; `None` for flat-priced ones.
    pub fn quote(&self) -> Option<Quote> {
        match self.service.pricing {
            PricingModel::TieredScope(tiers) => {
                resolve_in(tiers, self.service.kind, self.level as i64)
            }
            PricingModel::FlatPrice(_) => None,
        }
    }

    pub fn price_update(&self) -> PriceUpdate {
        match self.quote() {
            Some(quote) => PriceUpdate {
                price: quote.current_price,
                discounted: quote.discounted,
            },
            None => PriceUpdate {
                price: self.service.pricing.starting_price(),
                discounted: false,
            },
        }
    }
}
