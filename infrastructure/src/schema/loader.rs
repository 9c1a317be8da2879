//! TOML schema file loader

use risk_domain::{FeatureSchema, SchemaError, SchemaVariant};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::info;

/// Errors raised while reading a schema file
#[derive(Error, Debug)]
pub enum SchemaFileError {
    #[error("Failed to read schema file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse schema file {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Schema file {} is invalid: {source}", path.display())]
    Invalid {
        path: PathBuf,
        #[source]
        source: SchemaError,
    },
}

/// Resolves the active [`FeatureSchema`]
pub struct SchemaLoader;

impl SchemaLoader {
    /// Read and validate a schema from a TOML file
    pub fn load_file(path: &Path) -> Result<FeatureSchema, SchemaFileError> {
        let content = fs::read_to_string(path).map_err(|source| SchemaFileError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let schema: FeatureSchema =
            toml::from_str(&content).map_err(|source| SchemaFileError::Parse {
                path: path.to_path_buf(),
                source,
            })?;

        schema.validate().map_err(|source| SchemaFileError::Invalid {
            path: path.to_path_buf(),
            source,
        })?;

        info!(
            "Loaded schema '{}' ({} fields) from {}",
            schema.name,
            schema.fields.len(),
            path.display()
        );
        Ok(schema)
    }

    /// The schema file when one is given, otherwise the built-in variant
    pub fn resolve(
        variant: SchemaVariant,
        file: Option<&Path>,
    ) -> Result<FeatureSchema, SchemaFileError> {
        match file {
            Some(path) => Self::load_file(path),
            None => Ok(variant.schema()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use risk_domain::FieldKind;
    use std::io::Write;

    #[test]
    fn test_resolve_builtin() {
        let schema = SchemaLoader::resolve(SchemaVariant::Extended, None).unwrap();
        assert_eq!(schema.name, "extended");
    }

    #[test]
    fn test_load_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
name = "lab-only"

[[fields]]
name = "A1Cresult"
prompt = "A1C test result?"
type = "one_hot"
choices = ["None", "Norm", ">7", ">8"]
baseline = "None"

[[fields]]
name = "pregnant"
type = "flag"
"#
        )
        .unwrap();

        let schema = SchemaLoader::resolve(SchemaVariant::Medication, Some(file.path())).unwrap();
        assert_eq!(schema.name, "lab-only");
        assert_eq!(schema.fields.len(), 2);
        assert_eq!(schema.fields[1].kind, FieldKind::Flag);
    }

    #[test]
    fn test_invalid_schema_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
name = "broken"

[[fields]]
name = "days"
type = "count"
min = 10
max = 1
default = 5
"#
        )
        .unwrap();

        let err = SchemaLoader::load_file(file.path()).unwrap_err();
        assert!(matches!(err, SchemaFileError::Invalid { .. }));
    }

    #[test]
    fn test_unparseable_schema_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "name = \"x\"\n[[fields]]\nname = \"a\"\ntype = \"slider\"").unwrap();

        let err = SchemaLoader::load_file(file.path()).unwrap_err();
        assert!(matches!(err, SchemaFileError::Parse { .. }));
    }
}
