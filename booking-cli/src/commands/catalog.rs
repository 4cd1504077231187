//! Lists the hardware catalog

use std::path::Path;

use anyhow::Result;
use booking_core::{Catalog, format_eur};
use clap::Args;
use comfy_table::{Cell, Color, ContentArrangement, Table, presets::UTF8_FULL_CONDENSED};

use crate::config::BookingConfig;

#[derive(Debug, Args, Default)]
pub struct CatalogArgs {
    /// Include items hidden from the listing page
    #[arg(short, long)]
    pub all: bool,
}

/// The configured catalog, or the bundled one
pub fn load_catalog(path: Option<&Path>) -> Result<Catalog> {
    Ok(match path {
        Some(path) => Catalog::load(path)?,
        None => Catalog::builtin()?,
    })
}

pub fn run(args: CatalogArgs, config: BookingConfig) -> Result<()> {
    let catalog = load_catalog(config.catalog.path.as_deref())?;
    if catalog.is_empty() {
        println!("No hardware in catalog.");
        return Ok(());
    }
    println!("{}", catalog_table(&catalog, args.all));
    Ok(())
}

fn catalog_table(catalog: &Catalog, all: bool) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);
    table.set_content_arrangement(ContentArrangement::Dynamic);

    let mut header = vec!["ID", "Name", "Preis pro Stunde"];
    if all {
        header.push("Sichtbar");
    }
    table.set_header(header);

    for item in catalog.items().iter().filter(|item| all || item.show) {
        let price = match item.hourly_rate() {
            Some(rate) => Cell::new(format_eur(rate)),
            None => Cell::new("-").fg(Color::DarkGrey),
        };
        let mut row = vec![Cell::new(&item.id), Cell::new(&item.name), price];
        if all {
            row.push(if item.show {
                Cell::new("ja")
            } else {
                Cell::new("nein").fg(Color::Yellow)
            });
        }
        table.add_row(row);
    }

    table
}
