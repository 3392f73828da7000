pub mod templates;

use crate::config::DEFAULT_CONFIG_FILE;
use crate::error::{ReadinessError, Result};
use std::fs;
use std::path::{Path, PathBuf};
use templates::{CONFIG_TEMPLATE, INTAKE_FILE, INTAKE_TEMPLATE};

/// Writes the template intake and config into `dir`. Nothing is written if
/// either file already exists, unless `force` is set.
pub fn write_templates(dir: &Path, force: bool) -> Result<Vec<PathBuf>> {
    let planned = [
        (dir.join(INTAKE_FILE), INTAKE_TEMPLATE),
        (dir.join(DEFAULT_CONFIG_FILE), CONFIG_TEMPLATE),
    ];

    if !force {
        if let Some((existing, _)) = planned.iter().find(|(path, _)| path.exists()) {
            return Err(ReadinessError::FileExists(existing.display().to_string()));
        }
    }

    fs::create_dir_all(dir)?;
    let mut written = Vec::with_capacity(planned.len());
    for (path, content) in planned {
        fs::write(&path, content)?;
        tracing::debug!(path = %path.display(), "wrote template");
        written.push(path);
    }
    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::config::ReadinessConfig;
    use crate::types::intake::Intake;
    use tempfile::TempDir;

    #[test]
    fn templates_parse_and_validate() {
        let intake: Intake = toml::from_str(INTAKE_TEMPLATE).expect("intake template should parse");
        assert!(intake.validate().is_ok());
        let config: ReadinessConfig =
            toml::from_str(CONFIG_TEMPLATE).expect("config template should parse");
        assert!(config.validate().is_ok());
        assert_eq!(config.places.len(), 4);
    }

    #[test]
    fn write_templates_creates_both_files() {
        let dir = TempDir::new().expect("temp dir should be created");
        let target = dir.path().join("startup");
        let written = write_templates(&target, false).expect("templates should write");
        assert_eq!(written.len(), 2);
        assert!(target.join(INTAKE_FILE).exists());
        assert!(target.join(DEFAULT_CONFIG_FILE).exists());
    }

    #[test]
    fn write_templates_refuses_to_overwrite_without_force() {
        let dir = TempDir::new().expect("temp dir should be created");
        fs::write(dir.path().join(INTAKE_FILE), "keep me").expect("existing intake should write");

        let err = write_templates(dir.path(), false).expect_err("overwrite should be refused");
        assert!(matches!(err, ReadinessError::FileExists(_)));
        assert_eq!(
            fs::read_to_string(dir.path().join(INTAKE_FILE)).expect("intake should read"),
            "keep me"
        );
        assert!(!dir.path().join(DEFAULT_CONFIG_FILE).exists());

        write_templates(dir.path(), true).expect("force should overwrite");
        assert_eq!(
            fs::read_to_string(dir.path().join(INTAKE_FILE)).expect("intake should read"),
            INTAKE_TEMPLATE
        );
    }
}
