use std::fs;
use std::path::{Path, PathBuf};

use crate::config::{self, ColorMode, Config};
use crate::display;
use crate::error::{Md2TextError, Result};
use crate::markdown::{self, SAMPLE_MARKDOWN};
use crate::renderer::{RenderOptions, Renderer};

/// Render a Markdown file (or the sample document) to stdout
pub fn run(
    file: Option<PathBuf>,
    width: Option<usize>,
    color: Option<ColorMode>,
    config_path: Option<PathBuf>,
) -> Result<()> {
    // Load configuration
    let config = match config_path {
        Some(path) => config::load(&path)?,
        None => Config::default(),
    };

    // Command-line flags win over the config file
    let options = resolve_options(&config, width, color)?;
    tracing::debug!(width = options.width, styled = options.styled, "render options");

    let source = match file {
        Some(path) => read_source(&path)?,
        None => {
            tracing::debug!("no input file, rendering sample document");
            SAMPLE_MARKDOWN.to_string()
        }
    };

    let document = markdown::parse(&source);
    let output = Renderer::new(options).render(&document);

    display::print_styled(&output)
}

fn resolve_options(
    config: &Config,
    width: Option<usize>,
    color: Option<ColorMode>,
) -> Result<RenderOptions> {
    let width = match width.or(config.width) {
        Some(width) => config::validate_width(width)?,
        None => display::terminal_width(),
    };
    let styled = display::should_use_colors(color.unwrap_or(config.color));

    Ok(RenderOptions { width, styled })
}

/// Read a UTF-8 Markdown file
fn read_source(path: &Path) -> Result<String> {
    tracing::debug!(path = %path.display(), "reading input");

    fs::read_to_string(path).map_err(|source| Md2TextError::Input {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_flags_override_config() {
        let config = Config {
            width: Some(40),
            color: ColorMode::Always,
        };

        let options = resolve_options(&config, Some(20), Some(ColorMode::Never)).unwrap();

        assert_eq!(options.width, 20);
        assert!(!options.styled);
    }

    #[test]
    fn test_config_used_without_flags() {
        let config = Config {
            width: Some(40),
            color: ColorMode::Always,
        };

        let options = resolve_options(&config, None, None).unwrap();

        assert_eq!(options.width, 40);
        assert!(options.styled);
    }

    #[test]
    fn test_zero_width_rejected() {
        let result = resolve_options(&Config::default(), Some(0), None);
        assert!(matches!(result, Err(Md2TextError::Config(_))));
    }

    #[test]
    fn test_read_source() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("doc.md");
        fs::write(&path, "# Hello\n").unwrap();

        assert_eq!(read_source(&path).unwrap(), "# Hello\n");
    }

    #[test]
    fn test_read_source_missing_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("missing.md");

        let err = read_source(&path).unwrap_err();
        assert!(matches!(err, Md2TextError::Input { .. }));
        assert!(err.to_string().contains("missing.md"));
    }

    #[test]
    fn test_read_source_invalid_utf8() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("latin1.md");
        fs::write(&path, [0x63, 0x61, 0x66, 0xe9]).unwrap();

        assert!(matches!(
            read_source(&path),
            Err(Md2TextError::Input { .. })
        ));
    }
}
