//! Row settings for the terminal renderer.
//!
//! Layering: terminal defaults, then the `--config` file, then flags.

use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;
use tagrow_layout::FlowConfig;
use tagrow_row::MonospaceMeasure;

use crate::cli::Args;

const DEFAULT_COLUMNS: i64 = 80;
const DEFAULT_MAX_LINES: i64 = 2;

/// Settings file. Every field is optional and overrides the terminal default.
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConfigFile {
    pub container_width: Option<i64>,
    pub max_lines: Option<i64>,
    pub unbounded: Option<bool>,
    pub horizontal_spacing: Option<f32>,
    pub vertical_spacing: Option<f32>,
    pub density: Option<f32>,
}

impl ConfigFile {
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        serde_json::from_str(&text)
            .with_context(|| format!("Failed to parse config {}", path.display()))
    }

    fn apply(&self, config: &mut FlowConfig) {
        if let Some(width) = self.container_width {
            config.container_width = width;
        }
        if let Some(lines) = self.max_lines {
            config.max_lines = Some(lines);
        }
        if self.unbounded == Some(true) {
            config.max_lines = None;
        }
        if let Some(spacing) = self.horizontal_spacing {
            config.horizontal_spacing = spacing;
        }
        if let Some(spacing) = self.vertical_spacing {
            config.vertical_spacing = spacing;
        }
        if let Some(density) = self.density {
            config.density = density;
        }
    }
}

/// A row sized for the terminal: one cell of spacing, no blank rows, two lines.
pub fn terminal_defaults() -> FlowConfig {
    let columns = std::env::var("COLUMNS")
        .ok()
        .and_then(|value| value.trim().parse().ok())
        .unwrap_or(DEFAULT_COLUMNS);

    FlowConfig {
        container_width: columns,
        max_lines: Some(DEFAULT_MAX_LINES),
        horizontal_spacing: 1.0,
        vertical_spacing: 0.0,
        density: 1.0,
    }
}

/// Terminal cell measurement at the configured density, so chips and the
/// gaps between them scale together.
pub fn measurer(config: &FlowConfig) -> MonospaceMeasure {
    MonospaceMeasure {
        density: config.density,
        ..MonospaceMeasure::terminal()
    }
}

/// Resolve the effective configuration. Validation happens later, in
/// `FlowConfig::to_params`, so bad values surface as layout errors.
pub fn resolve(args: &Args, file: Option<&ConfigFile>) -> FlowConfig {
    let mut config = terminal_defaults();
    if let Some(file) = file {
        file.apply(&mut config);
    }

    if let Some(width) = args.width {
        config.container_width = width;
    }
    if let Some(lines) = args.max_lines {
        config.max_lines = Some(lines);
    }
    if args.unbounded {
        config.max_lines = None;
    }
    if let Some(spacing) = args.spacing {
        config.horizontal_spacing = spacing;
    }
    if let Some(spacing) = args.line_spacing {
        config.vertical_spacing = spacing;
    }

    tracing::debug!(?config, "resolved row config");
    config
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn args(extra: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("tagrow").chain(extra.iter().copied())).unwrap()
    }

    #[test]
    fn test_flags_override_file() {
        let file: ConfigFile =
            serde_json::from_str(r#"{ "container_width": 50, "max_lines": 4, "density": 2.0 }"#)
                .unwrap();
        let config = resolve(&args(&["--max-lines", "1"]), Some(&file));

        assert_eq!(config.container_width, 50);
        assert_eq!(config.max_lines, Some(1));
        assert_eq!(config.density, 2.0);
        assert_eq!(config.horizontal_spacing, 1.0);
    }

    #[test]
    fn test_unbounded_flag() {
        let config = resolve(&args(&["--unbounded"]), None);
        assert_eq!(config.max_lines, None);
    }

    #[test]
    fn test_unbounded_in_file() {
        let file: ConfigFile = serde_json::from_str(r#"{ "unbounded": true }"#).unwrap();
        assert_eq!(resolve(&args(&[]), Some(&file)).max_lines, None);
    }

    #[test]
    fn test_density_scales_chips_and_spacing() {
        use tagrow_api::{ProgrammingLanguages, TagSource};
        use tagrow_layout::MeasuredItem;
        use tagrow_row::FlowRow;

        let file: ConfigFile = serde_json::from_str(r#"{ "density": 2.0 }"#).unwrap();
        let config = resolve(&args(&["--width", "200"]), Some(&file));
        let row = FlowRow::new(measurer(&config), config);

        let params = row.params(20).unwrap();
        assert_eq!(params.horizontal_spacing, 2);

        // "Kotlin" is 6 columns + 4 of brackets, doubled.
        let layout = row.layout(&ProgrammingLanguages.tags()).unwrap();
        assert_eq!(layout.sizes[0], MeasuredItem::new(20, 2));
        assert_eq!(layout.result.placements[1].x, 22);
    }

    #[test]
    fn test_unknown_fields_rejected() {
        assert!(serde_json::from_str::<ConfigFile>(r#"{ "colour": "red" }"#).is_err());
    }
}
