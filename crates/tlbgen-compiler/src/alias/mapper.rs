//! Translation of resolved types into their aliased display form.

use std::collections::HashMap;
use std::fmt;

use crate::resolve::{Primitive, ResolvedType};

use super::AliasConfig;

/// A resolved type after alias translation.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum DisplayType {
    Primitive(Primitive),
    /// User-defined name with no alias.
    Named(String),
    /// Single curated alias.
    Alias(String),
    /// Enumeration split into several alias families, in rule order.
    Union(Vec<String>),
    Sequence(Box<DisplayType>),
    Tuple(Vec<DisplayType>),
}

impl DisplayType {
    /// Visit this type and every nested component, outermost first.
    pub fn walk(&self, f: &mut impl FnMut(&DisplayType)) {
        f(self);
        match self {
            Self::Sequence(inner) => inner.walk(f),
            Self::Tuple(items) => items.iter().for_each(|item| item.walk(f)),
            _ => {}
        }
    }

    /// Every alias name this type mentions.
    pub fn aliases(&self) -> Vec<&str> {
        let mut out = Vec::new();
        self.collect_aliases(&mut out);
        out
    }

    fn collect_aliases<'a>(&'a self, out: &mut Vec<&'a str>) {
        match self {
            Self::Alias(name) => out.push(name),
            Self::Union(names) => out.extend(names.iter().map(String::as_str)),
            Self::Sequence(inner) => inner.collect_aliases(out),
            Self::Tuple(items) => items.iter().for_each(|item| item.collect_aliases(out)),
            Self::Primitive(_) | Self::Named(_) => {}
        }
    }
}

impl fmt::Display for DisplayType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Primitive(p) => f.write_str(p.as_str()),
            Self::Named(name) | Self::Alias(name) => f.write_str(name),
            Self::Union(names) => f.write_str(&names.join(" | ")),
            Self::Sequence(inner) => write!(f, "Tuple[{inner}, ...]"),
            Self::Tuple(items) => {
                f.write_str("Tuple[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{item}")?;
                }
                f.write_str("]")
            }
        }
    }
}

/// Raw enumeration name → alias names, derived once from an [`AliasConfig`].
#[derive(Clone, Debug, Default)]
pub struct AliasMap {
    groups: HashMap<String, Vec<String>>,
}

impl AliasMap {
    pub fn new(config: &AliasConfig) -> Self {
        let mut groups: HashMap<String, Vec<String>> = HashMap::new();
        for rule in config.rules() {
            groups
                .entry(rule.source_enum.clone())
                .or_default()
                .push(rule.alias.clone());
        }
        Self { groups }
    }

    /// Keep only the aliases `keep` accepts. Enumerations left without an
    /// alias translate to their raw name again.
    pub fn retain(mut self, keep: impl Fn(&str) -> bool) -> Self {
        self.groups.retain(|_, aliases| {
            aliases.retain(|alias| keep(alias));
            !aliases.is_empty()
        });
        self
    }

    /// Aliases covering `name`, in rule declaration order.
    pub fn aliases_of(&self, name: &str) -> &[String] {
        self.groups.get(name).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Translate one user-defined name.
    pub fn translate_name(&self, name: &str) -> DisplayType {
        match self.aliases_of(name) {
            [] => DisplayType::Named(name.to_string()),
            [alias] => DisplayType::Alias(alias.clone()),
            aliases => DisplayType::Union(aliases.to_vec()),
        }
    }

    /// Translate a resolved type component-wise.
    pub fn translate(&self, ty: &ResolvedType) -> DisplayType {
        match ty {
            ResolvedType::Primitive(p) => DisplayType::Primitive(*p),
            ResolvedType::UserDefined(name) => self.translate_name(name),
            ResolvedType::Sequence(inner) => DisplayType::Sequence(Box::new(self.translate(inner))),
            ResolvedType::Tuple(items) => {
                DisplayType::Tuple(items.iter().map(|item| self.translate(item)).collect())
            }
        }
    }
}
