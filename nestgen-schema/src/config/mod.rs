//! Configuration file parsing for `nestgen.toml`.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{SchemaError, SchemaResult};

/// Default name of the configuration file.
pub const CONFIG_FILE_NAME: &str = "nestgen.toml";

/// Main configuration structure for `nestgen.toml`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct CompilerConfig {
    /// Schema file configuration.
    #[serde(default)]
    pub schema: SchemaConfig,

    /// Attribute markers recognized on field lines.
    #[serde(default)]
    pub attributes: AttributeMarkers,
}

impl CompilerConfig {
    /// Load configuration from a file path.
    pub fn from_file(path: impl AsRef<Path>) -> SchemaResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|e| SchemaError::io(path.display().to_string(), e))?;

        Self::from_str(&content)
    }

    /// Parse configuration from a TOML string.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(content: &str) -> SchemaResult<Self> {
        let expanded = expand_env_vars(content);

        let config: Self =
            toml::from_str(&expanded).map_err(|e| SchemaError::TomlError { source: e })?;
        config.attributes.validate()?;
        Ok(config)
    }

    /// Path of the schema source.
    pub fn schema_path(&self) -> PathBuf {
        PathBuf::from(&self.schema.path)
    }
}

/// Schema file configuration.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct SchemaConfig {
    /// Path to the schema file.
    #[serde(default = "default_schema_path")]
    pub path: String,
}

impl Default for SchemaConfig {
    fn default() -> Self {
        Self {
            path: default_schema_path(),
        }
    }
}

fn default_schema_path() -> String {
    "prisma/schema.prisma".to_string()
}

/// Attribute markers that feed property flags.
///
/// A marker is an `@`-prefixed attribute path; it matches an attribute whose
/// path is equal to it, regardless of arguments.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct AttributeMarkers {
    /// Uniqueness markers.
    #[serde(default = "default_unique")]
    pub unique: Vec<String>,

    /// Primary key markers.
    #[serde(default = "default_id")]
    pub id: Vec<String>,

    /// Markers meaning the value is filled in by the database.
    #[serde(default = "default_auto")]
    pub auto: Vec<String>,

    /// Currency storage markers turning `Decimal` into `Money`.
    #[serde(default = "default_money")]
    pub money: Vec<String>,
}

impl Default for AttributeMarkers {
    fn default() -> Self {
        Self {
            unique: default_unique(),
            id: default_id(),
            auto: default_auto(),
            money: default_money(),
        }
    }
}

impl AttributeMarkers {
    fn validate(&self) -> SchemaResult<()> {
        let all = self
            .unique
            .iter()
            .chain(&self.id)
            .chain(&self.auto)
            .chain(&self.money);

        for marker in all {
            let path = marker.strip_prefix('@').unwrap_or_default();
            if path.is_empty() || path.contains(char::is_whitespace) || path.contains('(') {
                return Err(SchemaError::config(format!(
                    "invalid attribute marker `{marker}`: expected `@name` or `@ns.name`"
                )));
            }
        }
        Ok(())
    }
}

fn default_unique() -> Vec<String> {
    vec!["@unique".to_string()]
}

fn default_id() -> Vec<String> {
    vec!["@id".to_string()]
}

fn default_auto() -> Vec<String> {
    vec![
        "@default".to_string(),
        "@updatedAt".to_string(),
        "@auto".to_string(),
    ]
}

fn default_money() -> Vec<String> {
    vec!["@db.Money".to_string()]
}

/// Expand environment variables in the format `${VAR_NAME}`.
fn expand_env_vars(content: &str) -> String {
    let Ok(re) = regex_lite::Regex::new(r"\$\{([^}]+)\}") else {
        return content.to_string();
    };

    let mut result = content.to_string();
    for cap in re.captures_iter(content) {
        let var_name = &cap[1];
        let full_match = &cap[0];

        if let Ok(value) = std::env::var(var_name) {
            result = result.replace(full_match, &value);
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = CompilerConfig::default();
        assert_eq!(config.schema.path, "prisma/schema.prisma");
        assert_eq!(config.attributes.money, vec!["@db.Money"]);
        assert!(config.attributes.auto.contains(&"@default".to_string()));
    }

    #[test]
    fn test_parse_empty_config() {
        let config = CompilerConfig::from_str("").unwrap();
        assert_eq!(config, CompilerConfig::default());
    }

    #[test]
    fn test_parse_partial_config() {
        let toml = r#"
            [schema]
            path = "db/schema.prisma"

            [attributes]
            money = ["@db.Money", "@currency"]
        "#;

        let config = CompilerConfig::from_str(toml).unwrap();
        assert_eq!(config.schema_path(), PathBuf::from("db/schema.prisma"));
        assert_eq!(config.attributes.money.len(), 2);
        // untouched lists keep their defaults
        assert_eq!(config.attributes.unique, vec!["@unique"]);
    }

    #[test]
    fn test_unknown_field_rejected() {
        let result = CompilerConfig::from_str("[schema]\nfile = \"x\"");
        assert!(matches!(result, Err(SchemaError::TomlError { .. })));
    }

    #[test]
    fn test_invalid_marker_rejected() {
        let result = CompilerConfig::from_str("[attributes]\nmoney = [\"Money\"]");
        assert!(matches!(result, Err(SchemaError::ConfigError { .. })));

        let result = CompilerConfig::from_str("[attributes]\nauto = [\"@default(now())\"]");
        assert!(matches!(result, Err(SchemaError::ConfigError { .. })));
    }

    #[test]
    fn test_env_var_expansion() {
        // SAFETY: This test runs single-threaded and we clean up after
        unsafe {
            std::env::set_var("NESTGEN_TEST_SCHEMA", "custom/schema.prisma");
        }
        let expanded = expand_env_vars("path = \"${NESTGEN_TEST_SCHEMA}\"");
        assert_eq!(expanded, "path = \"custom/schema.prisma\"");
        unsafe {
            std::env::remove_var("NESTGEN_TEST_SCHEMA");
        }
    }

    #[test]
    fn test_env_var_missing_left_alone() {
        let expanded = expand_env_vars("path = \"${NESTGEN_SURELY_UNSET_VAR}\"");
        assert_eq!(expanded, "path = \"${NESTGEN_SURELY_UNSET_VAR}\"");
    }

    #[test]
    fn test_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(&path, "[attributes]\nid = [\"@key\"]\n").unwrap();

        let config = CompilerConfig::from_file(&path).unwrap();
        assert_eq!(config.attributes.id, vec!["@key"]);
        assert_eq!(config.schema, SchemaConfig::default());
    }

    #[test]
    fn test_from_file_missing() {
        let result = CompilerConfig::from_file("/definitely/not/here/nestgen.toml");
        assert!(matches!(result, Err(SchemaError::IoError { .. })));
    }
}
