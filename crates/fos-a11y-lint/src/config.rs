//! Lint Configuration
//!
//! Rule levels and options, the schemas options are checked against, and
//! the bundled profiles.

use std::collections::{BTreeMap, HashSet};

use fos_aria::is_dom_element;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::{ConfigError, Severity};

/// Rule level as written in configuration: a name or `0`, `1`, `2`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "LevelRepr")]
pub enum RuleLevel {
    Off,
    Warn,
    Error,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum LevelRepr {
    Number(u64),
    Name(String),
}

impl TryFrom<LevelRepr> for RuleLevel {
    type Error = String;

    fn try_from(repr: LevelRepr) -> Result<Self, String> {
        match repr {
            LevelRepr::Number(0) => Ok(RuleLevel::Off),
            LevelRepr::Number(1) => Ok(RuleLevel::Warn),
            LevelRepr::Number(2) => Ok(RuleLevel::Error),
            LevelRepr::Name(name) if name == "off" => Ok(RuleLevel::Off),
            LevelRepr::Name(name) if name == "warn" => Ok(RuleLevel::Warn),
            LevelRepr::Name(name) if name == "error" => Ok(RuleLevel::Error),
            LevelRepr::Number(n) => Err(format!("invalid rule level {}", n)),
            LevelRepr::Name(name) => Err(format!("invalid rule level \"{}\"", name)),
        }
    }
}

impl RuleLevel {
    /// Severity of diagnostics, `None` when the rule is off
    pub fn severity(self) -> Option<Severity> {
        match self {
            Self::Off => None,
            Self::Warn => Some(Severity::Warning),
            Self::Error => Some(Severity::Error),
        }
    }
}

/// `"error"`, `["error"]` or `["error", { ...options }]`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged, try_from = "SettingRepr")]
pub enum RuleSetting {
    Level(RuleLevel),
    WithOptions(RuleLevel, Value),
}

#[derive(Deserialize)]
#[serde(untagged)]
enum SettingRepr {
    Level(RuleLevel),
    List(Vec<Value>),
}

impl TryFrom<SettingRepr> for RuleSetting {
    type Error = String;

    fn try_from(repr: SettingRepr) -> Result<Self, String> {
        let items = match repr {
            SettingRepr::Level(level) => return Ok(Self::Level(level)),
            SettingRepr::List(items) => items,
        };
        let mut items = items.into_iter();
        let level = match items.next() {
            Some(level) => RuleLevel::deserialize(level).map_err(|e| e.to_string())?,
            None => return Err("empty rule setting".to_string()),
        };
        match (items.next(), items.next()) {
            (None, _) => Ok(Self::Level(level)),
            (Some(options), None) => Ok(Self::WithOptions(level, options)),
            (Some(_), Some(_)) => Err("expected at most one options value".to_string()),
        }
    }
}

impl RuleSetting {
    pub fn level(&self) -> RuleLevel {
        match self {
            Self::Level(level) | Self::WithOptions(level, _) => *level,
        }
    }

    pub fn options(&self) -> Option<&Value> {
        match self {
            Self::Level(_) => None,
            Self::WithOptions(_, options) => Some(options),
        }
    }
}

impl From<RuleLevel> for RuleSetting {
    fn from(level: RuleLevel) -> Self {
        Self::Level(level)
    }
}

/// Rule id → setting
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LintConfig {
    #[serde(default)]
    pub rules: BTreeMap<String, RuleSetting>,
}

impl LintConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse `{"rules": {...}}` JSON
    pub fn from_json_str(text: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn with_rule(mut self, id: impl Into<String>, setting: impl Into<RuleSetting>) -> Self {
        self.rules.insert(id.into(), setting.into());
        self
    }
}

/// Accepted shape of a rule's options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionsSchema {
    /// No options; `{}` is tolerated
    None,
    /// A non-empty string, or a non-empty array of unique non-empty strings
    StringOrList,
    /// Object whose values are arrays of unique non-empty strings
    Object {
        keys: &'static [&'static str],
        /// Any DOM element name is also a valid key
        dom_elements: bool,
    },
}

impl OptionsSchema {
    /// Check options, describing the first violation
    pub fn validate(&self, options: Option<&Value>) -> Result<(), String> {
        let Some(options) = options else {
            return Ok(());
        };
        match self {
            Self::None => match options {
                Value::Object(map) if map.is_empty() => Ok(()),
                _ => Err("rule takes no options".to_string()),
            },
            Self::StringOrList => match options {
                Value::String(s) if !s.is_empty() => Ok(()),
                Value::Array(items) if !items.is_empty() => string_list(options).map(|_| ()),
                _ => Err("expected a non-empty string or a non-empty array of strings".to_string()),
            },
            Self::Object { keys, dom_elements } => {
                let Value::Object(map) = options else {
                    return Err("expected an object".to_string());
                };
                for (key, value) in map {
                    let known = keys.contains(&key.as_str()) || (*dom_elements && is_dom_element(key));
                    if !known {
                        return Err(format!("unknown key \"{}\"", key));
                    }
                    string_list(value).map_err(|reason| format!("\"{}\": {}", key, reason))?;
                }
                Ok(())
            }
        }
    }
}

/// Array of unique non-empty strings
pub(crate) fn string_list(value: &Value) -> Result<Vec<String>, String> {
    let Value::Array(items) = value else {
        return Err("expected an array of strings".to_string());
    };
    let mut seen = HashSet::new();
    let mut out = Vec::with_capacity(items.len());
    for item in items {
        match item {
            Value::String(s) if s.is_empty() => return Err("empty string".to_string()),
            Value::String(s) if !seen.insert(s.as_str()) => return Err(format!("duplicate \"{}\"", s)),
            Value::String(s) => out.push(s.clone()),
            other => return Err(format!("expected a string, found {}", other)),
        }
    }
    Ok(out)
}

/// Bundled rule sets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Profile {
    /// Lenient default
    Recommended,
    /// Flags every interaction-only handler category
    Strict,
}

const RECOMMENDED_HANDLERS: &[&str] = &[
    "onClick",
    "onError",
    "onLoad",
    "onMouseDown",
    "onMouseUp",
    "onKeyPress",
    "onKeyDown",
    "onKeyUp",
];

impl Profile {
    pub fn name(self) -> &'static str {
        match self {
            Self::Recommended => "recommended",
            Self::Strict => "strict",
        }
    }

    pub fn config(self) -> LintConfig {
        let media_exemptions = json!({
            "body": ["onError", "onLoad"],
            "iframe": ["onError", "onLoad"],
            "img": ["onError", "onLoad"],
        });

        let (interactions, redundant) = match self {
            Self::Recommended => {
                let mut options = media_exemptions;
                options["handlers"] = json!(RECOMMENDED_HANDLERS);
                (options, json!({ "nav": ["navigation"] }))
            }
            Self::Strict => (media_exemptions, json!({})),
        };

        LintConfig::new()
            .with_rule("img-uses-alt", RuleLevel::Error)
            .with_rule(
                "no-noninteractive-element-interactions",
                RuleSetting::WithOptions(RuleLevel::Error, interactions),
            )
            .with_rule("role-has-required-aria-props", RuleLevel::Error)
            .with_rule("valid-aria-proptypes", RuleLevel::Error)
            .with_rule("no-redundant-roles", RuleSetting::WithOptions(RuleLevel::Error, redundant))
            .with_rule("tabindex-no-positive", RuleLevel::Error)
            .with_rule("valid-aria-role", RuleLevel::Error)
            .with_rule("no-invalid-aria", RuleLevel::Error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::RULE_IDS;

    #[test]
    fn test_parse_levels_and_options() {
        let config = LintConfig::from_json_str(
            r#"{"rules": {"img-uses-alt": ["warn", ["Image"]], "tabindex-no-positive": "off"}}"#,
        )
        .unwrap();

        let alt = &config.rules["img-uses-alt"];
        assert_eq!(alt.level(), RuleLevel::Warn);
        assert_eq!(alt.options(), Some(&json!(["Image"])));
        assert_eq!(config.rules["tabindex-no-positive"].level(), RuleLevel::Off);
        assert_eq!(RuleLevel::Off.severity(), None);
    }

    #[test]
    fn test_parse_rejects_unknown_level() {
        for text in [
            r#"{"rules": {"img-uses-alt": "loud"}}"#,
            r#"{"rules": {"img-uses-alt": 3}}"#,
            r#"{"rules": {"img-uses-alt": []}}"#,
            r#"{"rules": {"img-uses-alt": [2, "Image", "Avatar"]}}"#,
            r#"{"rules": {"img-uses-alt": ["loud", "Image"]}}"#,
        ] {
            assert!(matches!(LintConfig::from_json_str(text), Err(ConfigError::Parse(_))), "{}", text);
        }
    }

    #[test]
    fn test_parse_numeric_levels() {
        let config = LintConfig::from_json_str(
            r#"{"rules": {"img-uses-alt": 2, "tabindex-no-positive": 1, "valid-aria-role": 0}}"#,
        )
        .unwrap();
        assert_eq!(config.rules["img-uses-alt"], RuleSetting::Level(RuleLevel::Error));
        assert_eq!(config.rules["tabindex-no-positive"], RuleSetting::Level(RuleLevel::Warn));
        assert_eq!(config.rules["valid-aria-role"], RuleSetting::Level(RuleLevel::Off));
    }

    #[test]
    fn test_parse_level_only_list() {
        let config = LintConfig::from_json_str(
            r#"{"rules": {"tabindex-no-positive": [1], "img-uses-alt": ["error"], "no-redundant-roles": [2, {}]}}"#,
        )
        .unwrap();
        assert_eq!(config.rules["tabindex-no-positive"], RuleSetting::Level(RuleLevel::Warn));
        assert_eq!(config.rules["img-uses-alt"].options(), None);
        assert_eq!(config.rules["no-redundant-roles"], RuleSetting::WithOptions(RuleLevel::Error, json!({})));
    }

    #[test]
    fn test_levels_serialize_as_names() {
        let config = LintConfig::new()
            .with_rule("img-uses-alt", RuleLevel::Warn)
            .with_rule("no-redundant-roles", RuleSetting::WithOptions(RuleLevel::Error, json!({})));
        let value = serde_json::to_value(&config).unwrap();
        assert_eq!(value, json!({"rules": {"img-uses-alt": "warn", "no-redundant-roles": ["error", {}]}}));
        let back: LintConfig = serde_json::from_value(value).unwrap();
        assert_eq!(back, config);
    }

    #[test]
    fn test_string_or_list_schema() {
        let schema = OptionsSchema::StringOrList;
        assert!(schema.validate(None).is_ok());
        assert!(schema.validate(Some(&json!("Image"))).is_ok());
        assert!(schema.validate(Some(&json!(["Image", "Avatar"]))).is_ok());
        assert!(schema.validate(Some(&json!(""))).is_err());
        assert!(schema.validate(Some(&json!([]))).is_err());
        assert!(schema.validate(Some(&json!(["Image", "Image"]))).is_err());
        assert!(schema.validate(Some(&json!([1]))).is_err());
        assert!(schema.validate(Some(&json!({}))).is_err());
    }

    #[test]
    fn test_object_schema() {
        let schema = OptionsSchema::Object { keys: &["handlers"], dom_elements: true };
        assert!(schema.validate(Some(&json!({"handlers": ["onClick"], "img": []}))).is_ok());
        assert!(schema.validate(Some(&json!({"MyComponent": ["onClick"]}))).is_err());
        assert!(schema.validate(Some(&json!({"handlers": "onClick"}))).is_err());
        assert!(schema.validate(Some(&json!(["handlers"]))).is_err());

        let closed = OptionsSchema::Object { keys: &[], dom_elements: false };
        assert!(closed.validate(Some(&json!({"nav": []}))).is_err());
    }

    #[test]
    fn test_none_schema() {
        assert!(OptionsSchema::None.validate(Some(&json!({}))).is_ok());
        assert!(OptionsSchema::None.validate(Some(&json!({"x": 1}))).is_err());
    }

    #[test]
    fn test_profiles_enable_every_rule() {
        for profile in [Profile::Recommended, Profile::Strict] {
            let config = profile.config();
            assert_eq!(config.rules.len(), RULE_IDS.len(), "{}", profile.name());
            assert!(RULE_IDS.iter().all(|id| config.rules.contains_key(*id)));
            assert!(config.rules.values().all(|s| s.level() == RuleLevel::Error));
        }
    }
}
