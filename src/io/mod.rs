pub mod output;
pub mod writers;

use crate::core::InputOverrides;
use crate::errors::RoiError;
use std::fs;
use std::path::Path;

pub fn read_file(path: &Path) -> Result<String, RoiError> {
    fs::read_to_string(path).map_err(|e| RoiError::io(path, e))
}

pub fn write_file(path: &Path, content: &str) -> Result<(), RoiError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        ensure_dir(parent)?;
    }
    fs::write(path, content).map_err(|e| RoiError::io(path, e))
}

pub fn ensure_dir(path: &Path) -> Result<(), RoiError> {
    if !path.exists() {
        fs::create_dir_all(path).map_err(|e| RoiError::io(path, e))?;
    }
    Ok(())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScenarioFormat {
    Toml,
    Json,
}

impl ScenarioFormat {
    /// `.json` files are JSON; everything else is read as TOML.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Self::Json,
            _ => Self::Toml,
        }
    }
}

pub fn parse_scenario(contents: &str, format: ScenarioFormat) -> Result<InputOverrides, String> {
    match format {
        ScenarioFormat::Toml => toml::from_str(contents).map_err(|e| e.to_string()),
        ScenarioFormat::Json => serde_json::from_str(contents).map_err(|e| e.to_string()),
    }
}

/// Read a saved set of inputs from a TOML or JSON file.
pub fn load_scenario(path: &Path) -> Result<InputOverrides, RoiError> {
    let contents = read_file(path)?;
    let scenario = parse_scenario(&contents, ScenarioFormat::from_path(path))
        .map_err(|message| RoiError::parse(path, message))?;
    log::debug!("Loaded scenario from {}", path.display());
    Ok(scenario)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::RawValue;
    use indoc::indoc;
    use tempfile::TempDir;

    #[test]
    fn test_format_from_extension() {
        assert_eq!(ScenarioFormat::from_path(Path::new("a.json")), ScenarioFormat::Json);
        assert_eq!(ScenarioFormat::from_path(Path::new("a.JSON")), ScenarioFormat::Json);
        assert_eq!(ScenarioFormat::from_path(Path::new("a.toml")), ScenarioFormat::Toml);
        assert_eq!(ScenarioFormat::from_path(Path::new("scenario")), ScenarioFormat::Toml);
    }

    #[test]
    fn test_toml_scenario() {
        let overrides = parse_scenario(
            indoc! {r#"
                pallets_per_day = 100
                workdays_per_year = "250"
                use_incidence_estimator = true
            "#},
            ScenarioFormat::Toml,
        )
        .unwrap();

        assert_eq!(overrides.pallets_per_day, Some(RawValue::Number(100.0)));
        assert_eq!(overrides.workdays_per_year, Some(RawValue::Text("250".to_string())));
        assert_eq!(overrides.use_incidence_estimator, Some(true));
    }

    #[test]
    fn test_json_scenario_accepts_form_field_names() {
        let overrides = parse_scenario(
            r#"{ "palletsPerDay": "100", "workdaysPerYear": 250, "annualChargebacks": "" }"#,
            ScenarioFormat::Json,
        )
        .unwrap();

        assert_eq!(overrides.pallets_per_day, Some(RawValue::Text("100".to_string())));
        assert_eq!(overrides.annual_chargebacks, Some(RawValue::Text(String::new())));
    }

    #[test]
    fn test_load_scenario_errors() {
        let dir = TempDir::new().unwrap();
        assert!(matches!(
            load_scenario(&dir.path().join("missing.toml")),
            Err(RoiError::Io { .. })
        ));

        let path = dir.path().join("bad.json");
        fs::write(&path, r#"{ "palletz": 1 }"#).unwrap();
        assert!(matches!(load_scenario(&path), Err(RoiError::Parse { .. })));
    }

    #[test]
    fn test_write_file_creates_parent_dirs() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("reports").join("roi.csv");
        write_file(&path, "x").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "x");
    }
}
