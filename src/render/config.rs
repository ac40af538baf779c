//! Output configuration for rendered enchantment records.

use clap::ValueEnum;

/// Rendering configuration
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Output layout
    pub format: OutputFormat,
    /// Whether to include the alias list next to each record
    pub show_aliases: bool,
}

/// Output layout for records and lists
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One record per line: `16 Sharpness (alldamage, sharpness, sharp)`
    Plain,
    /// Column-aligned table with a header row
    Table,
    /// Pretty-printed JSON
    Json,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Plain,
            show_aliases: true,
        }
    }
}

impl RenderConfig {
    /// Create a new config with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the output layout
    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    /// Show or hide alias lists
    pub fn with_aliases(mut self, show: bool) -> Self {
        self.show_aliases = show;
        self
    }
}
