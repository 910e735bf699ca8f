//! Settings structure stored in config files

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::traits::{ConfigError, ConfigResult};
use crate::catalog::CatalogFormat;
use crate::types::SortBy;

/// Where the catalog definitions come from
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum CatalogSource {
    /// Definitions compiled into the crate
    #[default]
    Builtin,
    /// A `.yaml`, `.yml` or `.json` file
    File(PathBuf),
}

impl From<String> for CatalogSource {
    fn from(value: String) -> Self {
        let trimmed = value.trim();
        if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("builtin") {
            CatalogSource::Builtin
        } else {
            CatalogSource::File(PathBuf::from(trimmed))
        }
    }
}

impl From<CatalogSource> for String {
    fn from(source: CatalogSource) -> Self {
        match source {
            CatalogSource::Builtin => "builtin".to_string(),
            CatalogSource::File(path) => path.to_string_lossy().into_owned(),
        }
    }
}

/// Catalog loading settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogSettings {
    #[serde(default)]
    pub source: CatalogSource,
    /// Reject tools that reference unknown categories
    #[serde(default = "default_strict")]
    pub strict: bool,
}

fn default_strict() -> bool {
    true
}

impl Default for CatalogSettings {
    fn default() -> Self {
        Self {
            source: CatalogSource::Builtin,
            strict: default_strict(),
        }
    }
}

/// Listing and widget defaults
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrowseSettings {
    /// Order applied when a query names none; unset keeps definition order
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_sort: Option<SortBy>,
    /// Number of related tools shown on a tool page
    #[serde(default = "default_related_limit")]
    pub related_limit: usize,
}

fn default_related_limit() -> usize {
    4
}

impl Default for BrowseSettings {
    fn default() -> Self {
        Self {
            default_sort: None,
            related_limit: default_related_limit(),
        }
    }
}

/// Everything a config file can hold
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub catalog: CatalogSettings,
    #[serde(default)]
    pub browse: BrowseSettings,
}

impl Settings {
    /// Reject values that would only fail later, when the catalog loads
    pub fn validate(&self) -> ConfigResult<()> {
        if let CatalogSource::File(path) = &self.catalog.source {
            CatalogFormat::from_path(path).map_err(|e| ConfigError::InvalidValue {
                key: "catalog.source".to_string(),
                message: e.to_string(),
            })?;
        }
        Ok(())
    }

    /// Apply the keys `layer` sets, keeping the rest of `self`
    pub fn overlay(mut self, layer: SettingsLayer) -> Settings {
        if let Some(source) = layer.catalog.source {
            self.catalog.source = source;
        }
        if let Some(strict) = layer.catalog.strict {
            self.catalog.strict = strict;
        }
        if let Some(default_sort) = layer.browse.default_sort {
            self.browse.default_sort = Some(default_sort);
        }
        if let Some(related_limit) = layer.browse.related_limit {
            self.browse.related_limit = related_limit;
        }
        self
    }
}

/// Catalog keys present in one config file
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogLayer {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<CatalogSource>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub strict: Option<bool>,
}

/// Browse keys present in one config file
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrowseLayer {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_sort: Option<SortBy>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub related_limit: Option<usize>,
}

/// One config file as written, before defaults fill the gaps
///
/// An absent key leaves the lower layer alone; a present one wins even when
/// it equals the default.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SettingsLayer {
    #[serde(default)]
    pub catalog: CatalogLayer,
    #[serde(default)]
    pub browse: BrowseLayer,
}

impl SettingsLayer {
    /// The settings this layer alone describes
    pub fn to_settings(&self) -> Settings {
        Settings::default().overlay(self.clone())
    }

    pub fn validate(&self) -> ConfigResult<()> {
        self.to_settings().validate()
    }
}

impl From<Settings> for SettingsLayer {
    fn from(settings: Settings) -> Self {
        Self {
            catalog: CatalogLayer {
                source: Some(settings.catalog.source),
                strict: Some(settings.catalog.strict),
            },
            browse: BrowseLayer {
                default_sort: settings.browse.default_sort,
                related_limit: Some(settings.browse.related_limit),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_from_empty_yaml() {
        let settings: Settings = serde_yaml::from_str("{}").unwrap();
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.catalog.source, CatalogSource::Builtin);
        assert!(settings.catalog.strict);
        assert_eq!(settings.browse.related_limit, 4);
    }

    #[test]
    fn test_parse_full_yaml() {
        let yaml = r#"
catalog:
  source: ./data/tools.json
  strict: false
browse:
  default_sort: recent
  related_limit: 6
"#;
        let settings: Settings = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(settings.catalog.source, CatalogSource::File(PathBuf::from("./data/tools.json")));
        assert!(!settings.catalog.strict);
        assert_eq!(settings.browse.default_sort, Some(SortBy::Recent));
        assert_eq!(settings.browse.related_limit, 6);
    }

    #[test]
    fn test_validate_rejects_unknown_catalog_extension() {
        let mut settings = Settings::default();
        assert!(settings.validate().is_ok());

        settings.catalog.source = CatalogSource::File(PathBuf::from("tools.csv"));
        assert!(matches!(
            settings.validate(),
            Err(ConfigError::InvalidValue { ref key, .. }) if key == "catalog.source"
        ));
    }

    #[test]
    fn test_overlay_applies_only_present_keys() {
        let user = Settings {
            browse: BrowseSettings {
                default_sort: Some(SortBy::NameAsc),
                related_limit: 8,
            },
            ..Settings::default()
        };
        let workspace: SettingsLayer = serde_yaml::from_str("catalog:\n  source: tools.yaml\n").unwrap();
        assert_eq!(workspace.catalog.strict, None);

        let merged = user.overlay(workspace);
        assert_eq!(merged.catalog.source, CatalogSource::File(PathBuf::from("tools.yaml")));
        assert!(merged.catalog.strict);
        assert_eq!(merged.browse.default_sort, Some(SortBy::NameAsc));
        assert_eq!(merged.browse.related_limit, 8);
    }

    #[test]
    fn test_overlay_restores_default_values() {
        let user: SettingsLayer = serde_yaml::from_str(
            "catalog:\n  source: ./mine.json\n  strict: false\nbrowse:\n  related_limit: 9\n",
        )
        .unwrap();
        let workspace: SettingsLayer = serde_yaml::from_str(
            "catalog:\n  source: builtin\n  strict: true\nbrowse:\n  related_limit: 4\n",
        )
        .unwrap();

        let merged = Settings::default().overlay(user).overlay(workspace);
        assert!(merged.catalog.strict);
        assert_eq!(merged.catalog.source, CatalogSource::Builtin);
        assert_eq!(merged.browse.related_limit, 4);
    }

    #[test]
    fn test_layer_from_full_settings_overrides_everything() {
        let base = Settings {
            catalog: CatalogSettings {
                source: CatalogSource::File(PathBuf::from("a.yaml")),
                strict: false,
            },
            browse: BrowseSettings {
                default_sort: Some(SortBy::Recent),
                related_limit: 2,
            },
        };
        let merged = base.overlay(SettingsLayer::from(Settings::default()));
        // Unset default_sort has no key to write, so it does not clear
        assert_eq!(merged.browse.default_sort, Some(SortBy::Recent));
        assert_eq!(merged.catalog, CatalogSettings::default());
        assert_eq!(merged.browse.related_limit, 4);
    }

    #[test]
    fn test_layer_validate_checks_catalog_extension() {
        let layer: SettingsLayer = serde_yaml::from_str("catalog:\n  source: tools.csv\n").unwrap();
        assert!(matches!(layer.validate(), Err(ConfigError::InvalidValue { .. })));
        assert!(SettingsLayer::default().validate().is_ok());
    }
}
