use super::traits::{ConfigSection, ConfigManifest, FieldManifest};
use crate::error::QuadgaError;
use serde::{Deserialize, Serialize};

/// Sizes of the projections handed to presentation layers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    pub curve_resolution: usize,
    pub table_rows: usize,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            curve_resolution: 400,
            table_rows: 20,
        }
    }
}

impl ConfigSection for ReportConfig {
    fn section_name() -> &'static str {
        "report"
    }

    fn validate(&self) -> Result<(), QuadgaError> {
        if self.curve_resolution < 2 {
            return Err(QuadgaError::Configuration(
                "Curve resolution must be at least 2 points".to_string(),
            ));
        }
        Ok(())
    }

    fn to_manifest(&self) -> ConfigManifest {
        ConfigManifest {
            section: "Report".to_string(),
            fields: vec![
                FieldManifest::new(
                    "curve_resolution",
                    "integer",
                    serde_json::json!(400),
                    Some(2.0),
                    None,
                    "Sample points per best-performer curve",
                ),
                FieldManifest::new(
                    "table_rows",
                    "integer",
                    serde_json::json!(20),
                    Some(0.0),
                    None,
                    "Generations listed in the summary table",
                ),
            ],
        }
    }
}
