//! TTY detection, color support and width logic

use std::io::IsTerminal;

use termimad::crossterm::terminal;

use crate::config::ColorMode;
use crate::renderer::DEFAULT_WIDTH;

/// Determine if colors should be used for the given mode
pub fn should_use_colors(mode: ColorMode) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => colors_from_env(),
    }
}

fn colors_from_env() -> bool {
    // Priority order:
    // 1. NO_COLOR takes precedence (https://no-color.org/)
    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }

    // 2. CLICOLOR_FORCE enables colors even when piped
    if let Ok(val) = std::env::var("CLICOLOR_FORCE") {
        if val != "0" {
            return true;
        }
    }

    // 3. CLICOLOR=0 disables colors
    if let Ok(val) = std::env::var("CLICOLOR") {
        if val == "0" {
            return false;
        }
    }

    // 4. Check if stdout is a TTY
    std::io::stdout().is_terminal()
}

/// Column count of stdout, or the default when stdout is not a terminal
pub fn terminal_width() -> usize {
    if !std::io::stdout().is_terminal() {
        return DEFAULT_WIDTH;
    }

    match terminal::size() {
        Ok((cols, _)) if cols > 0 => usize::from(cols),
        Ok(_) => DEFAULT_WIDTH,
        Err(e) => {
            tracing::debug!(error = %e, "terminal size unavailable");
            DEFAULT_WIDTH
        }
    }
}
