//! The config command: print the effective configuration.

use promptdeck_common::Result;
use promptdeck_prompts::{ConfigLoader, EditorConfig};

/// Render a configuration as YAML.
pub fn render_config(config: &EditorConfig) -> Result<String> {
    Ok(serde_yaml_ng::to_string(config)?)
}

/// Run `promptdeck config`.
pub fn run_config(loader: &ConfigLoader) -> Result<()> {
    for path in loader.discover_files() {
        tracing::debug!("Using configuration file {}", path.display());
    }
    let config = loader.load()?;
    print!("{}", render_config(&config)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use promptdeck_prompts::Format;
    use serial_test::serial;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_render_default_config() {
        let rendered = render_config(&EditorConfig::default()).unwrap();
        assert!(rendered.contains("default_format: json"));
        assert!(rendered.contains("default_category: general"));
        assert!(rendered.contains("max_rating: 5"));
        assert!(rendered.contains("seed_library: false"));
    }

    #[test]
    #[serial]
    fn test_project_file_is_loaded() {
        let global = TempDir::new().unwrap();
        let project = TempDir::new().unwrap();
        fs::write(project.path().join("config.yaml"), "default_format: xml\n").unwrap();

        let loader = ConfigLoader::with_search_roots(
            Some(global.path().to_path_buf()),
            Some(project.path().to_path_buf()),
        );
        assert_eq!(loader.load().unwrap().default_format, Format::Xml);
        assert!(run_config(&loader).is_ok());
    }
}
