//! Operator tool for the pfmarket site.
//!
//! Prints the catalog and quotes, and runs the booking handoff end to end
//! so payee details can be checked without a browser.

mod config;
mod report;

use std::path::PathBuf;

use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use pfmarket_common::booking::{BookingFlow, BookingRequest};
use pfmarket_common::catalog::{find_service, PricingModel, ServiceTier, SERVICE_TIERS};
use pfmarket_common::contact::MemoryContactStore;
use pfmarket_common::currency::{format_flat, format_inr};
use pfmarket_common::handoff::HandoffConfig;
use pfmarket_common::pricing::PricingSelection;

#[derive(Parser)]
#[command(name = "pfmarket", about = "pfmarket pricing and booking handoff tool")]
struct Cli {
    /// JSON file overriding the payee VPA, payee name and WhatsApp number.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List every service and how it is priced.
    Catalog,
    /// Resolve one slider position.
    Quote {
        service: String,
        /// Zero-based slider level. Out-of-range values are clamped.
        #[arg(long, default_value_t = 0, allow_hyphen_values = true)]
        level: i64,
    },
    /// Print every tier of a scope-priced service.
    Table { service: String },
    /// Book a service and print the UPI link and WhatsApp verification URL.
    Handoff {
        service: String,
        #[arg(long, default_value_t = 0, allow_hyphen_values = true)]
        level: i64,
        /// Last characters of the UPI transaction reference.
        #[arg(long)]
        txn: String,
        #[arg(long)]
        name: String,
        #[arg(long)]
        phone: String,
        #[arg(long)]
        email: String,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = config::load_handoff_config(cli.config.as_deref())?;

    match cli.command {
        Command::Catalog => print!("{}", report::catalog()),
        Command::Quote { service, level } => {
            let service = lookup(&service)?;
            let mut selection = PricingSelection::new(service);
            selection.set_level(level);
            match selection.quote() {
                Some(quote) => print!("{}", report::quote(service, &quote)),
                None => {
                    let price = match service.pricing {
                        PricingModel::FlatPrice(flat) => format_flat(flat),
                        PricingModel::TieredScope(_) => format_inr(selection.price_update().price),
                    };
                    println!("{} · {price}", service.title);
                }
            }
        }
        Command::Table { service } => {
            let service = lookup(&service)?;
            let Some(table) = report::table(service) else {
                bail!("{} has a flat price and no scope tiers", service.id);
            };
            print!("{table}");
        }
        Command::Handoff {
            service,
            level,
            txn,
            name,
            phone,
            email,
        } => {
            let service = lookup(&service)?;
            let output = run_handoff(service, level, config, &txn, &name, &phone, &email)?;
            print!("{output}");
        }
    }
    Ok(())
}

fn lookup(id: &str) -> anyhow::Result<&'static ServiceTier> {
    find_service(id).with_context(|| {
        let known: Vec<_> = SERVICE_TIERS.iter().map(|s| s.id).collect();
        format!("unknown service {id:?} (known: {})", known.join(", "))
    })
}

/// Drive a [`BookingFlow`] the way the booking dialog does and render the result.
fn run_handoff(
    service: &'static ServiceTier,
    level: i64,
    config: HandoffConfig,
    txn: &str,
    name: &str,
    phone: &str,
    email: &str,
) -> anyhow::Result<String> {
    if !service.is_bookable() {
        bail!("{} cannot be booked", service.title);
    }
    let mut selection = PricingSelection::new(service);
    let update = selection.set_level(level);
    let request = BookingRequest {
        service_title: service.title.to_string(),
        final_price: update.price,
        discounted: update.discounted,
    };

    let store = MemoryContactStore::new();
    let mut flow = BookingFlow::open(request, config, &store);
    flow.set_name(name);
    flow.set_phone(phone);
    flow.set_email(email);
    flow.submit_contact(&store).context("contact details rejected")?;
    flow.set_txn_ref(txn);
    let handoff = flow.verify(&store).context("verification refused")?;

    Ok(report::handoff(&flow, &handoff))
}
