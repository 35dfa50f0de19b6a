//! Tagrow - render a truncated, wrapping tag row in the terminal.

mod canvas;
mod cli;
mod config;
mod logging;

use anyhow::{Context, Result};
use tagrow_api::{JsonTagSource, ProgrammingLanguages, SelectionSet, Tag, TagSource};
use tagrow_row::{DisclosureSheet, DisclosureSurface, FlowRow, OverflowController};

use crate::cli::Args;
use crate::config::ConfigFile;
use crate::logging::setup_logging;

fn main() -> Result<()> {
    let args = Args::parse();
    setup_logging(args.verbose);

    run(&args)
}

fn run(args: &Args) -> Result<()> {
    let file = args.config.as_deref().map(ConfigFile::load).transpose()?;
    let config = config::resolve(args, file.as_ref());

    let source: Box<dyn TagSource> = match &args.tags {
        Some(path) => Box::new(
            JsonTagSource::from_path(path)
                .with_context(|| format!("Failed to load tags from {}", path.display()))?,
        ),
        None => Box::new(ProgrammingLanguages),
    };
    let tags = source.tags();
    tracing::info!(source = source.name(), count = tags.len(), "loaded tags");

    let selection = select(&tags, &args.select);

    let row = FlowRow::new(config::measurer(&config), config);
    let layout = row.layout(&tags).context("Failed to lay out tags")?;

    let mut controller = OverflowController::new();
    controller.update(tags, layout.result.clone());

    let mut sheet = DisclosureSheet::new();
    if args.open_more {
        controller.activate(&mut sheet);
    }

    if args.json {
        let output = serde_json::json!({
            "layout": layout.result,
            "indicator_label": controller.indicator_label(),
            "hidden": sheet.items(),
            "selected": selection,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    for line in canvas::draw_row(controller.visible_items(), &layout, &selection) {
        println!("{line}");
    }

    if args.open_more {
        println!();
        if sheet.is_open() {
            println!("{}", sheet.title());
            let sheet_layout = sheet
                .layout(&row)
                .context("Failed to lay out hidden tags")?;
            for line in canvas::draw_row(sheet.items(), &sheet_layout, &selection) {
                println!("{line}");
            }
        } else {
            println!("Nothing hidden.");
        }
    }

    Ok(())
}

/// Apply `--select` toggles in order.
fn select(tags: &[Tag], ids: &[String]) -> SelectionSet {
    let mut selection = SelectionSet::new();
    for id in ids {
        if !tags.iter().any(|tag| &tag.id == id) {
            tracing::warn!(id = %id, "Unknown tag id");
        }
        selection.toggle(id);
    }
    selection
}
