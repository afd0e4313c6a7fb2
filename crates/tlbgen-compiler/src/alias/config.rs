//! Alias rule configuration.

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

/// Maps an enumeration (or a prefix-filtered subset of one) to a short name.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AliasRule {
    /// Raw enumeration name in the type library.
    pub source_enum: String,
    /// Restricts the rule to members whose raw name starts with this prefix.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filter_prefix: Option<String>,
    /// Display name of the generated class.
    pub alias: String,
    /// Prefix removed from member names.
    pub strip_prefix: String,
    /// Split stripped names on their first `_` into nested classes.
    #[serde(default)]
    pub nested: bool,
}

impl AliasRule {
    pub fn new(
        source_enum: impl Into<String>,
        alias: impl Into<String>,
        strip_prefix: impl Into<String>,
    ) -> Self {
        Self {
            source_enum: source_enum.into(),
            filter_prefix: None,
            alias: alias.into(),
            strip_prefix: strip_prefix.into(),
            nested: false,
        }
    }

    /// Restrict the rule to members starting with `prefix`.
    pub fn with_filter(mut self, prefix: impl Into<String>) -> Self {
        self.filter_prefix = Some(prefix.into());
        self
    }

    pub fn with_nested_grouping(mut self) -> Self {
        self.nested = true;
        self
    }

    /// Identifying key, `source` or `source:filter`.
    pub fn key(&self) -> String {
        match &self.filter_prefix {
            Some(filter) => format!("{}:{}", self.source_enum, filter),
            None => self.source_enum.clone(),
        }
    }

    /// Whether a member of the source enumeration is covered by this rule.
    pub fn matches(&self, member: &str) -> bool {
        self.filter_prefix
            .as_deref()
            .is_none_or(|prefix| member.starts_with(prefix))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("alias `{alias}` is used by both `{first}` and `{second}`")]
    DuplicateAlias {
        alias: String,
        first: String,
        second: String,
    },

    #[error("rule `{0}` is declared more than once")]
    DuplicateRule(String),

    #[error("invalid alias rules: {0}")]
    Parse(String),

    #[error("unknown alias preset `{0}` (expected `femap` or `none`)")]
    UnknownPreset(String),
}

#[derive(Deserialize)]
struct RulesFile {
    rules: Vec<AliasRule>,
}

/// Validated, ordered alias rules.
///
/// Rule order is significant: it drives curated class order and union order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AliasConfig {
    rules: Vec<AliasRule>,
}

impl AliasConfig {
    /// Validate and wrap `rules`. Alias names and rule keys must be unique.
    pub fn new(rules: Vec<AliasRule>) -> Result<Self, ConfigError> {
        let mut aliases: HashMap<&str, String> = HashMap::new();
        let mut keys: HashSet<String> = HashSet::new();

        for rule in &rules {
            let key = rule.key();
            if let Some(first) = aliases.get(rule.alias.as_str()) {
                return Err(ConfigError::DuplicateAlias {
                    alias: rule.alias.clone(),
                    first: first.clone(),
                    second: key,
                });
            }
            if !keys.insert(key.clone()) {
                return Err(ConfigError::DuplicateRule(key));
            }
            aliases.insert(&rule.alias, key);
        }

        Ok(Self { rules })
    }

    /// No curated rules: every enumeration lands in the auto tier.
    pub fn empty() -> Self {
        Self::default()
    }

    /// The curated table for the Femap automation library.
    pub fn femap() -> Self {
        Self::new(super::femap::rules()).expect("built-in femap rules are valid")
    }

    /// Look up a built-in preset by name.
    pub fn preset(name: &str) -> Result<Self, ConfigError> {
        match name {
            "femap" => Ok(Self::femap()),
            "none" => Ok(Self::empty()),
            other => Err(ConfigError::UnknownPreset(other.to_string())),
        }
    }

    /// Parse a rules document: `{"rules": [{"source_enum": ..., ...}]}`.
    pub fn from_json(input: &str) -> Result<Self, ConfigError> {
        let file: RulesFile =
            serde_json::from_str(input).map_err(|e| ConfigError::Parse(e.to_string()))?;
        Self::new(file.rules)
    }

    pub fn rules(&self) -> &[AliasRule] {
        &self.rules
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}
