use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::surface::RuleSlot;

const DEFAULT_BASE_COLOR: &str = "green";
const DEFAULT_HOVER_COLOR: &str = "orange";
const DEFAULT_HEXAGON_CLASS: &str = "hex";

pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse hexagon config")]
    Parse(#[from] serde_json::Error),
    #[error("config field `{field}` must not be empty")]
    EmptyValue { field: &'static str },
}

/// Resting and hover colors, any CSS color value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorPair {
    pub base: String,
    pub hover: String,
}

impl ColorPair {
    pub fn new(base: impl Into<String>, hover: impl Into<String>) -> Self {
        Self {
            base: base.into(),
            hover: hover.into(),
        }
    }
}

impl Default for ColorPair {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_COLOR, DEFAULT_HOVER_COLOR)
    }
}

/// Element ids of the four style-rule containers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleContainerIds {
    pub before: String,
    pub after: String,
    pub before_hover: String,
    pub after_hover: String,
}

impl RuleContainerIds {
    pub fn id_for(&self, slot: RuleSlot) -> &str {
        match slot {
            RuleSlot::Before => &self.before,
            RuleSlot::After => &self.after,
            RuleSlot::BeforeHover => &self.before_hover,
            RuleSlot::AfterHover => &self.after_hover,
        }
    }
}

impl Default for RuleContainerIds {
    fn default() -> Self {
        Self {
            before: "hexagon-before".to_string(),
            after: "hexagon-after".to_string(),
            before_hover: "hexagon-before-hover".to_string(),
            after_hover: "hexagon-after-hover".to_string(),
        }
    }
}

/// Startup settings; fixed for the lifetime of a layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HexagonConfig {
    #[serde(default)]
    pub colors: ColorPair,
    #[serde(default = "default_hexagon_class")]
    pub hexagon_class: String,
    #[serde(default)]
    pub containers: RuleContainerIds,
}

fn default_hexagon_class() -> String {
    DEFAULT_HEXAGON_CLASS.to_string()
}

impl Default for HexagonConfig {
    fn default() -> Self {
        Self {
            colors: ColorPair::default(),
            hexagon_class: default_hexagon_class(),
            containers: RuleContainerIds::default(),
        }
    }
}

impl HexagonConfig {
    pub fn with_colors(colors: ColorPair) -> Self {
        Self {
            colors,
            ..Self::default()
        }
    }

    pub fn parse(serialized: &str) -> ConfigResult<Self> {
        let config: HexagonConfig = serde_json::from_str(serialized)?;
        config.validate()?;
        Ok(config)
    }

    /// `.hex`-style selector for the configured class.
    pub fn selector(&self) -> String {
        format!(".{}", self.hexagon_class)
    }

    fn validate(&self) -> ConfigResult<()> {
        let fields = [
            ("colors.base", &self.colors.base),
            ("colors.hover", &self.colors.hover),
            ("hexagon_class", &self.hexagon_class),
            ("containers.before", &self.containers.before),
            ("containers.after", &self.containers.after),
            ("containers.before_hover", &self.containers.before_hover),
            ("containers.after_hover", &self.containers.after_hover),
        ];
        match fields.into_iter().find(|(_, value)| value.trim().is_empty()) {
            Some((field, _)) => Err(ConfigError::EmptyValue { field }),
            None => Ok(()),
        }
    }
}

/// Lenient loader: missing or broken config falls back to defaults.
pub fn load_config(serialized: Option<&str>) -> HexagonConfig {
    let Some(serialized) = serialized.filter(|text| !text.trim().is_empty()) else {
        return HexagonConfig::default();
    };
    HexagonConfig::parse(serialized).unwrap_or_else(|err| {
        tracing::warn!(%err, "invalid hexagon config; using defaults");
        HexagonConfig::default()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_green_and_orange() {
        let config = HexagonConfig::default();
        assert_eq!(config.colors, ColorPair::new("green", "orange"));
        assert_eq!(config.selector(), ".hex");
        assert_eq!(config.containers.id_for(RuleSlot::Before), "hexagon-before");
        assert_eq!(config.containers.id_for(RuleSlot::After), "hexagon-after");
        assert_eq!(
            config.containers.id_for(RuleSlot::BeforeHover),
            "hexagon-before-hover"
        );
        assert_eq!(
            config.containers.id_for(RuleSlot::AfterHover),
            "hexagon-after-hover"
        );
    }

    #[test]
    fn parse_accepts_partial_overrides() {
        let config = HexagonConfig::parse(
            r##"{
                "colors": { "base": "red", "hover": "blue" }
            }"##,
        )
        .expect("partial config should parse");

        assert_eq!(config.colors, ColorPair::new("red", "blue"));
        assert_eq!(config.hexagon_class, "hex");
        assert_eq!(config.containers, RuleContainerIds::default());
    }

    #[test]
    fn parse_reads_container_ids() {
        let config = HexagonConfig::parse(
            r##"{
                "hexagon_class": "tile",
                "containers": {
                    "before": "a",
                    "after": "b",
                    "before_hover": "c",
                    "after_hover": "d"
                }
            }"##,
        )
        .expect("container config should parse");

        assert_eq!(config.selector(), ".tile");
        assert_eq!(config.containers.id_for(RuleSlot::AfterHover), "d");
        assert_eq!(config.colors, ColorPair::default());
    }

    #[test]
    fn parse_rejects_invalid_payload() {
        let err = HexagonConfig::parse("{ invalid ").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn parse_rejects_blank_colors() {
        let err = HexagonConfig::parse(r#"{"colors": {"base": " ", "hover": "blue"}}"#)
            .unwrap_err();
        assert!(matches!(
            err,
            ConfigError::EmptyValue {
                field: "colors.base"
            }
        ));
    }

    #[test]
    fn load_config_falls_back_to_defaults() {
        assert_eq!(load_config(None), HexagonConfig::default());
        assert_eq!(load_config(Some("   ")), HexagonConfig::default());
        assert_eq!(load_config(Some("not json")), HexagonConfig::default());

        let config = load_config(Some(r#"{"colors": {"base": "red", "hover": "blue"}}"#));
        assert_eq!(config.colors.hover, "blue");
    }
}
