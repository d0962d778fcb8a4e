//! Plain-text renderings of catalog data for the terminal.

use std::fmt::Write;

use pfmarket_common::booking::BookingFlow;
use pfmarket_common::catalog::{PricingModel, ServiceTier, SERVICE_TIERS};
use pfmarket_common::currency::{format_flat, format_inr};
use pfmarket_common::handoff::Handoff;
use pfmarket_common::pricing::{max_discount_percent, resolve_in, Quote};

pub fn catalog() -> String {
    let mut out = String::new();
    for service in SERVICE_TIERS {
        let pricing = match service.pricing {
            PricingModel::FlatPrice(flat) => format_flat(flat),
            PricingModel::TieredScope(tiers) => format!(
                "from {} over {} levels, up to {}% off",
                format_inr(service.pricing.starting_price()),
                tiers.len(),
                max_discount_percent(service.kind)
            ),
        };
        let star = if service.recommended { " *" } else { "" };
        let _ = writeln!(out, "{:<8} {}{star}", service.id, service.title);
        let _ = writeln!(out, "         {} ({})", pricing, service.unit);
    }
    out
}

pub fn quote(service: &ServiceTier, quote: &Quote) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{} · level {}", service.title, quote.level + 1);
    let _ = writeln!(out, "scope       {} {}", quote.scope, quote.kind.unit_noun());
    let _ = writeln!(out, "price       {}", format_inr(quote.current_price));
    let _ = writeln!(out, "naive       {}", format_inr(quote.naive_price));
    let _ = writeln!(
        out,
        "savings     {} ({}%)",
        format_inr(quote.savings),
        quote.discount_percent
    );
    let _ = writeln!(out, "turnaround  {}", quote.turnaround);
    let _ = writeln!(out, "discounted  {}", quote.discounted);
    for perk in &quote.perks {
        let _ = writeln!(out, "  + {perk}");
    }
    out
}

/// One row per level. `None` for flat-priced services.
pub fn table(service: &ServiceTier) -> Option<String> {
    let PricingModel::TieredScope(tiers) = service.pricing else {
        return None;
    };
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:<5} {:>6} {:>9} {:>9} {:>8} {:>4}  turnaround",
        "level",
        service.kind.unit_noun(),
        "price",
        "naive",
        "savings",
        "%"
    );
    for tier in tiers {
        let Some(q) = resolve_in(tiers, service.kind, tier.level as i64) else {
            continue;
        };
        let _ = writeln!(
            out,
            "{:<5} {:>6} {:>9} {:>9} {:>8} {:>4}  {}",
            q.level + 1,
            q.scope,
            format_inr(q.current_price),
            format_inr(q.naive_price),
            format_inr(q.savings),
            q.discount_percent,
            q.turnaround
        );
    }
    Some(out)
}

/// Payment details shown before verification, then the composed handoff.
pub fn handoff(flow: &BookingFlow, handoff: &Handoff) -> String {
    let mut out = String::new();
    let request = flow.request();
    let _ = writeln!(
        out,
        "{} · {}",
        request.service_title,
        format_inr(request.final_price)
    );
    let _ = writeln!(out, "qr        {}", flow.qr_asset().path());
    let _ = writeln!(out, "upi       {}", flow.upi_link());
    let _ = writeln!(out, "whatsapp  {}", handoff.url);
    let _ = writeln!(out);
    let _ = writeln!(out, "{}", handoff.message);
    out
}

#[cfg(test)]
mod tests {
    use pfmarket_common::catalog::find_service;
    use pfmarket_common::pricing::resolve;

    use super::*;

    #[test]
    fn catalog_lists_every_service() {
        let text = catalog();
        for service in SERVICE_TIERS {
            assert!(text.contains(service.title));
        }
        assert!(text.contains("Free"));
        assert!(text.contains("from ₹250 over 6 levels"));
    }

    #[test]
    fn quote_shows_cumulative_perks() {
        let deck = find_service("deck").unwrap();
        let q = resolve(deck.kind, 2).unwrap();
        let text = quote(deck, &q);
        assert!(text.contains("price       ₹310"));
        assert!(text.contains("naive       ₹450"));
        assert!(text.contains("+ Source files included"));
        assert!(text.contains("+ Motion-ready transitions"));
    }

    #[test]
    fn table_has_a_row_per_level() {
        let report = find_service("report").unwrap();
        let text = table(report).unwrap();
        assert_eq!(text.lines().count(), 7);
        assert!(text.contains("₹2,100"));
        assert!(text.contains("₹3,600"));
    }

    #[test]
    fn flat_services_have_no_table() {
        assert!(table(find_service("shield").unwrap()).is_none());
    }
}
