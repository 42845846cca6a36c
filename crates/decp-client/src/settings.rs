//! Deployment configuration.
//!
//! The dashboard reads one of these per deployment (which OPSN runs it,
//! which region it covers, where the API lives). It is passed explicitly
//! to every consumer; nothing here is process-global.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::Result;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiSettings {
    /// Base URL of the listing API, e.g. `https://marches.example.fr/api`.
    pub base: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    pub api: ApiSettings,
    /// Earliest notification date with usable data for this deployment.
    #[serde(default)]
    pub date_min: Option<NaiveDate>,
    /// Name of the public IT syndicate operating the deployment.
    #[serde(default)]
    pub opsn: String,
    #[serde(default)]
    pub region: String,
    /// Département codes the deployment covers.
    #[serde(default)]
    pub departements: Vec<String>,
}

impl Settings {
    pub fn from_file(path: &Path) -> Result<Self> {
        let file = File::open(path)?;
        Ok(serde_json::from_reader(BufReader::new(file))?)
    }

    /// Display string identifying the deployment, `"{opsn} {region}"`.
    pub fn opsn_region(&self) -> String {
        format!("{} {}", self.opsn, self.region)
            .trim()
            .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opsn_region_concatenates() {
        let settings = Settings {
            api: ApiSettings {
                base: "http://localhost/api".to_string(),
            },
            date_min: None,
            opsn: "OPSN".to_string(),
            region: "REGION".to_string(),
            departements: vec![],
        };
        assert_eq!(settings.opsn_region(), "OPSN REGION");
    }

    #[test]
    fn settings_parse_from_json() {
        let json = r#"{
            "api": {"base": "https://marches.example.fr/api"},
            "date_min": "2020-01-01",
            "opsn": "Syndicat Mixte",
            "region": "Bourgogne-Franche-Comté",
            "departements": ["25", "70", "90"]
        }"#;
        let settings: Settings = serde_json::from_str(json).unwrap();
        assert_eq!(settings.api.base, "https://marches.example.fr/api");
        assert_eq!(settings.departements.len(), 3);
        assert!(settings.date_min.is_some());
    }
}
