use serde::Deserialize;

/// md2text configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Paragraph wrap column (defaults to the terminal width)
    pub width: Option<usize>,

    /// When to emit terminal styling
    pub color: ColorMode,
}

/// Styling policy
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    /// Style only when stdout is a terminal and the environment allows it
    #[default]
    Auto,
    Always,
    Never,
}
