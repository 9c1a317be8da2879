//! Encoder configuration from TOML (`[encoder]` section)

use risk_domain::{ConfigIssue, ConfigIssueCode, DriftPolicy, SchemaVariant, Severity};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Raw encoder configuration from TOML
///
/// # Example
///
/// ```toml
/// [encoder]
/// schema = "extended"      # built-in: "medication" (default) or "extended"
/// # schema_file = "schemas/custom.toml"   # overrides `schema`
/// drift = "reject"         # "drop" (default) or "reject"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileEncoderConfig {
    /// Built-in schema name
    pub schema: Option<String>,
    /// Path to a TOML schema file
    pub schema_file: Option<PathBuf>,
    /// Schema drift policy
    pub drift: Option<String>,
}

impl FileEncoderConfig {
    /// Parse the built-in schema name, falling back to the default variant
    pub fn parse_schema(&self) -> (SchemaVariant, Vec<ConfigIssue>) {
        let mut issues = Vec::new();

        let variant = match &self.schema {
            None => SchemaVariant::default(),
            Some(name) => match name.parse::<SchemaVariant>() {
                Ok(variant) => variant,
                Err(_) => {
                    issues.push(ConfigIssue {
                        severity: Severity::Warning,
                        code: ConfigIssueCode::InvalidEnumValue {
                            field: "encoder.schema".to_string(),
                            value: name.clone(),
                            valid_values: SchemaVariant::all()
                                .iter()
                                .map(|v| v.to_string())
                                .collect(),
                        },
                        message: format!(
                            "encoder.schema: unknown value '{}', falling back to '{}'",
                            name,
                            SchemaVariant::default()
                        ),
                    });
                    SchemaVariant::default()
                }
            },
        };

        if let (Some(name), Some(file)) = (&self.schema, &self.schema_file) {
            issues.push(ConfigIssue {
                severity: Severity::Warning,
                code: ConfigIssueCode::ConflictingSettings {
                    winner: "encoder.schema_file".to_string(),
                    ignored: "encoder.schema".to_string(),
                },
                message: format!(
                    "encoder.schema = '{}' is ignored because encoder.schema_file = '{}' is set",
                    name,
                    file.display()
                ),
            });
        }

        (variant, issues)
    }

    /// Parse the drift policy, rejecting unknown values
    pub fn parse_drift(&self) -> (DriftPolicy, Vec<ConfigIssue>) {
        let mut issues = Vec::new();

        let policy = match &self.drift {
            None => DriftPolicy::default(),
            Some(value) => match value.parse::<DriftPolicy>() {
                Ok(policy) => policy,
                Err(_) => {
                    issues.push(ConfigIssue {
                        severity: Severity::Error,
                        code: ConfigIssueCode::InvalidEnumValue {
                            field: "encoder.drift".to_string(),
                            value: value.clone(),
                            valid_values: vec!["drop".to_string(), "reject".to_string()],
                        },
                        message: format!(
                            "encoder.drift: unknown value '{}' (expected drop or reject)",
                            value
                        ),
                    });
                    DriftPolicy::default()
                }
            },
        };

        (policy, issues)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = FileEncoderConfig::default();
        let (variant, issues) = config.parse_schema();
        assert_eq!(variant, SchemaVariant::Medication);
        assert!(issues.is_empty());

        let (policy, issues) = config.parse_drift();
        assert_eq!(policy, DriftPolicy::Drop);
        assert!(issues.is_empty());
    }

    #[test]
    fn test_unknown_schema_falls_back_with_warning() {
        let config = FileEncoderConfig {
            schema: Some("legacy".to_string()),
            ..Default::default()
        };
        let (variant, issues) = config.parse_schema();
        assert_eq!(variant, SchemaVariant::Medication);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].severity, Severity::Warning);
    }

    #[test]
    fn test_schema_file_wins_over_schema_name() {
        let config = FileEncoderConfig {
            schema: Some("extended".to_string()),
            schema_file: Some(PathBuf::from("custom.toml")),
            drift: None,
        };
        let (variant, issues) = config.parse_schema();
        assert_eq!(variant, SchemaVariant::Extended);
        assert!(matches!(
            issues[0].code,
            ConfigIssueCode::ConflictingSettings { .. }
        ));
    }

    #[test]
    fn test_unknown_drift_is_error() {
        let config = FileEncoderConfig {
            drift: Some("ignore".to_string()),
            ..Default::default()
        };
        let (policy, issues) = config.parse_drift();
        assert_eq!(policy, DriftPolicy::Drop);
        assert!(issues[0].is_error());
    }

    #[test]
    fn test_deserialize() {
        let config: FileEncoderConfig = toml::from_str(
            r#"
schema = "extended"
drift = "reject"
"#,
        )
        .unwrap();
        assert_eq!(config.parse_schema().0, SchemaVariant::Extended);
        assert_eq!(config.parse_drift().0, DriftPolicy::Reject);
    }
}
