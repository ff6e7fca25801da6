use crate::prelude::{eprintln, *};
use colored::Colorize;
use sitenav_core::config::SiteConfig;
use sitenav_core::controller::Controller;
use sitenav_core::page::{parse_page, Page};
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "config.toml";

/// `<config dir>/sitenav/config.toml`
fn default_config_path() -> Option<PathBuf> {
    dirs_next::config_dir().map(|dir| dir.join("sitenav").join(CONFIG_FILE))
}

/// An explicit path must exist. The default location is optional.
pub fn resolve_config(explicit: Option<&Path>, fallback: Option<PathBuf>) -> Result<SiteConfig> {
    let path = match explicit {
        Some(path) => path.to_path_buf(),
        None => match fallback.filter(|path| path.is_file()) {
            Some(path) => path,
            None => {
                log::debug!("No configuration file found, using defaults");
                return Ok(SiteConfig::default());
            }
        },
    };

    log::debug!("Loading configuration from {}", path.display());
    SiteConfig::load(&path).map_err(|e| Error::Config(e.to_string()).into())
}

pub fn load_config(global: &crate::Global) -> Result<SiteConfig> {
    resolve_config(global.config.as_deref(), default_config_path())
}

pub fn load_page(path: &Path) -> Result<Page> {
    let html = std::fs::read_to_string(path).map_err(|e| Error::PageRead {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;

    let page = parse_page(&html);
    log::info!(
        "Parsed {}: {} sections, {} navigation controls, {} tables",
        path.display(),
        page.sections.len(),
        page.controls.len(),
        page.tables.len()
    );

    Ok(page)
}

/// Build a controller for the page at `path`, reporting diagnostics when `--verbose` is set
pub fn controller(path: &Path, global: &crate::Global) -> Result<Controller> {
    let config = load_config(global)?;
    let page = load_page(path)?;
    let controller = Controller::new(page, config);

    if !global.verbose {
        return Ok(controller);
    }

    Ok(controller.with_diagnostics(|diagnostic| {
        log::warn!("{diagnostic}");
        eprintln!("{} {}", "diagnostic:".yellow().bold(), diagnostic);
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_missing_default_uses_defaults() {
        let missing = PathBuf::from("/nonexistent/sitenav.toml");
        let config = resolve_config(None, Some(missing)).unwrap();
        assert_eq!(config, SiteConfig::default());

        let config = resolve_config(None, None).unwrap();
        assert_eq!(config.min_query_len, 3);
    }

    #[test]
    fn test_explicit_path_must_exist() {
        let result = resolve_config(Some(Path::new("/nonexistent/sitenav.toml")), None);
        let err = result.unwrap_err();
        assert!(err.to_string().starts_with("Configuration error"));
    }

    #[test]
    fn test_explicit_path_wins_over_default() {
        let mut explicit = NamedTempFile::new().unwrap();
        writeln!(explicit, "min_query_len = 2").unwrap();
        let mut fallback = NamedTempFile::new().unwrap();
        writeln!(fallback, "min_query_len = 5").unwrap();

        let config =
            resolve_config(Some(explicit.path()), Some(fallback.path().to_path_buf())).unwrap();
        assert_eq!(config.min_query_len, 2);

        let config = resolve_config(None, Some(fallback.path().to_path_buf())).unwrap();
        assert_eq!(config.min_query_len, 5);
    }

    #[test]
    fn test_load_page() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            r#"<div class="section" id="intro"><h1>Intro</h1><p>Hello</p></div>"#
        )
        .unwrap();

        let page = load_page(file.path()).unwrap();
        assert_eq!(page.sections.len(), 1);
        assert_eq!(page.sections[0].title.as_deref(), Some("Intro"));

        assert!(load_page(Path::new("/nonexistent/page.html")).is_err());
    }
}
