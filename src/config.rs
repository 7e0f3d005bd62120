//! Checklist Configuration
//!
//! Column titles and the tracked application list, read once at startup from
//! the embedded `checklist.json`.

use serde::{Deserialize, Serialize};

use crate::error::{ChecklistError, ChecklistResult};

const EMBEDDED_CONFIG: &str = include_str!("../checklist.json");

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ChecklistConfig {
    /// Page heading
    pub title: String,
    /// Title of the alpha code column
    pub alpha_label: String,
    /// Title of the id column
    pub id_label: String,
    /// Tracked applications, one checkbox column each
    pub applications: Vec<String>,
}

impl Default for ChecklistConfig {
    fn default() -> Self {
        Self {
            title: "N2.0 Rollout Checklist".to_string(),
            alpha_label: "Alpha".to_string(),
            id_label: "ID".to_string(),
            applications: ["Portal", "Scanner", "Dispatch", "Billing", "Reports"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }
}

impl ChecklistConfig {
    pub fn from_json(json: &str) -> ChecklistResult<Self> {
        let config: Self = serde_json::from_str(json).map_err(|e| ChecklistError::Config(e.to_string()))?;
        if config.applications.iter().any(|name| name.trim().is_empty()) {
            return Err(ChecklistError::Config("application names must not be blank".to_string()));
        }
        Ok(config)
    }

    /// Load the embedded configuration, falling back to defaults
    pub fn load() -> Self {
        match Self::from_json(EMBEDDED_CONFIG) {
            Ok(config) => {
                log::info!("[CONFIG] Tracking {} applications", config.applications.len());
                config
            }
            Err(e) => {
                log::warn!("[CONFIG] {}; using defaults", e);
                Self::default()
            }
        }
    }

    /// Every exported column title, in table order
    pub fn column_titles(&self) -> Vec<String> {
        let mut titles = vec![self.alpha_label.clone(), self.id_label.clone()];
        titles.extend(self.applications.iter().cloned());
        titles
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_config_parses() {
        let config = ChecklistConfig::from_json(EMBEDDED_CONFIG).unwrap();
        assert!(!config.applications.is_empty());
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let config = ChecklistConfig::from_json(r#"{"applications":["One","Two"]}"#).unwrap();
        assert_eq!(config.applications, vec!["One", "Two"]);
        assert_eq!(config.alpha_label, "Alpha");
        assert_eq!(config.column_titles(), vec!["Alpha", "ID", "One", "Two"]);
    }

    #[test]
    fn test_blank_application_rejected() {
        let err = ChecklistConfig::from_json(r#"{"applications":["One"," "]}"#).unwrap_err();
        assert!(matches!(err, ChecklistError::Config(_)));
    }
}
