//! Two-tier constants module emission.
//!
//! Tier 1 holds one class per alias rule, in rule order. Tier 2 holds every
//! enumeration (or uncovered remainder of one) no rule claimed, in name
//! order, grouped by detected prefix.

use std::collections::HashMap;

use crate::alias::{
    AliasConfig, AliasRule, AutoGrouping, GroupedConstant, NestedGrouping, auto_grouping,
    flat_members, nested_grouping,
};
use crate::extract::{ConstantEntry, EnumDescriptor, Library};

use super::Config;
use super::naming::{UniqueNames, safe_identifier};

const BANNER_WIDTH: usize = 70;

/// One processed Tier 1 rule.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CuratedClass {
    pub alias: String,
    /// Rule key, `source` or `source:filter`.
    pub rule: String,
    pub constants: usize,
}

/// What the constants module contains.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ConstantsSummary {
    pub curated: Vec<CuratedClass>,
    /// Keys of rules whose enumeration (or filtered subset) was absent.
    pub skipped: Vec<String>,
    pub auto_classes: usize,
    pub auto_constants: usize,
}

impl ConstantsSummary {
    pub fn curated_constants(&self) -> usize {
        self.curated.iter().map(|c| c.constants).sum()
    }
}

/// Constants module emitter.
pub struct ConstantsEmitter<'a> {
    library: &'a Library,
    aliases: &'a AliasConfig,
    config: &'a Config,

    /// Top-level class names already emitted
    class_names: UniqueNames,
    summary: ConstantsSummary,
    /// Output buffer
    output: String,
}

impl<'a> ConstantsEmitter<'a> {
    pub fn new(library: &'a Library, aliases: &'a AliasConfig, config: &'a Config) -> Self {
        Self {
            library,
            aliases,
            config,
            class_names: UniqueNames::new(),
            summary: ConstantsSummary::default(),
            output: String::new(),
        }
    }

    /// Render the module.
    pub fn emit(mut self) -> (String, ConstantsSummary) {
        let aliases = self.aliases;
        for rule in aliases.rules() {
            self.class_names.reserve(&rule.alias);
        }

        self.emit_header();

        self.emit_banner("Tier 1: curated aliases");
        for rule in aliases.rules() {
            self.emit_curated(rule);
        }

        self.emit_banner("Tier 2: auto-generated");
        for (name, members) in self.auto_tier() {
            self.emit_auto(&name, &members);
        }

        self.emit_summary();

        tracing::info!(
            curated = self.summary.curated.len(),
            auto = self.summary.auto_classes,
            skipped = self.summary.skipped.len(),
            "emitted constants module"
        );

        // Ensure exactly one trailing newline
        self.output.truncate(self.output.trim_end().len());
        self.output.push('\n');
        (self.output, self.summary)
    }

    fn line(&mut self, line: &str) {
        self.output.push_str(line);
        self.output.push('\n');
    }

    fn blank(&mut self, count: usize) {
        for _ in 0..count {
            self.output.push('\n');
        }
    }

    fn emit_header(&mut self) {
        let module = self.config.constants_module.clone();
        let generator = self.config.generator.clone();
        self.line("\"\"\"");
        self.line(&format!("{module} - Type-safe constant aliases."));
        self.line("");
        self.line(&format!("Auto-generated by {generator} from a type library."));
        self.line("DO NOT EDIT MANUALLY - regenerate instead.");
        self.line("");
        self.line("Each curated alias is a distinct IntEnum, so type checkers can tell");
        self.line("families apart (e.g. ReturnCode vs Color).");
        self.line("\"\"\"");
        self.line("");
        self.line("from enum import IntEnum");
        self.blank(2);
    }

    fn emit_banner(&mut self, title: &str) {
        let rule = format!("# {}", "=".repeat(BANNER_WIDTH));
        self.line(&rule);
        self.line(&format!("# {title}"));
        self.line(&rule);
        self.blank(2);
    }

    fn emit_curated(&mut self, rule: &AliasRule) {
        let key = rule.key();
        let library = self.library;
        let Some(source) = library.find_enum(&rule.source_enum) else {
            tracing::warn!(rule = %key, "alias rule skipped: enumeration not found");
            self.summary.skipped.push(key);
            return;
        };

        let members: Vec<ConstantEntry> = source
            .members
            .iter()
            .filter(|m| rule.matches(&m.name))
            .cloned()
            .collect();
        if rule.filter_prefix.is_some() && members.is_empty() {
            tracing::warn!(rule = %key, "alias rule skipped: no members match the filter");
            self.summary.skipped.push(key);
            return;
        }

        let constants = if rule.nested {
            let grouping = nested_grouping(&members, &rule.strip_prefix);
            self.line(&format!("class {}:", rule.alias));
            self.line(&format!(
                "    \"\"\"Constants from {} enum (nested grouping).\"\"\"",
                source.name
            ));
            self.line("");
            self.emit_nested_body(&grouping);
            grouping.constant_count()
        } else {
            let flat = flat_members(&members, &rule.strip_prefix);
            self.emit_flat_class(&rule.alias, &source.name, &flat);
            flat.len()
        };
        self.blank(2);

        self.summary.curated.push(CuratedClass {
            alias: rule.alias.clone(),
            rule: key,
            constants,
        });
    }

    /// Enumerations for Tier 2, sorted by name. An enumeration covered only
    /// by filtered rules contributes the members no filter matched.
    fn auto_tier(&self) -> Vec<(String, Vec<ConstantEntry>)> {
        let mut filtered: HashMap<&str, Vec<&AliasRule>> = HashMap::new();
        let mut covered: Vec<&str> = Vec::new();
        for rule in self.aliases.rules() {
            match rule.filter_prefix {
                Some(_) => filtered.entry(&rule.source_enum).or_default().push(rule),
                None => covered.push(&rule.source_enum),
            }
        }

        let mut remaining: Vec<&EnumDescriptor> = self
            .library
            .enums
            .iter()
            .filter(|e| !covered.contains(&e.name.as_str()))
            .collect();
        remaining.sort_by(|a, b| a.name.cmp(&b.name));

        remaining
            .into_iter()
            .filter_map(|e| {
                let members: Vec<ConstantEntry> = match filtered.get(e.name.as_str()) {
                    Some(rules) => e
                        .members
                        .iter()
                        .filter(|m| !rules.iter().any(|r| r.matches(&m.name)))
                        .cloned()
                        .collect(),
                    None => e.members.clone(),
                };
                if members.is_empty() && filtered.contains_key(e.name.as_str()) {
                    return None;
                }
                Some((e.name.clone(), members))
            })
            .collect()
    }

    fn emit_auto(&mut self, name: &str, members: &[ConstantEntry]) {
        let class = self.class_names.claim(&safe_identifier(name));
        let grouping = auto_grouping(members);

        match &grouping {
            AutoGrouping::Flat(flat) => self.emit_flat_class(&class, name, flat),
            AutoGrouping::Nested(nested) => {
                self.line(&format!("class {class}:"));
                self.line(&format!(
                    "    \"\"\"Constants from {name} enum (grouped by prefix).\"\"\""
                ));
                self.line("");
                self.emit_nested_body(nested);
            }
        }
        self.blank(2);

        self.summary.auto_classes += 1;
        self.summary.auto_constants += grouping.constant_count();
    }

    fn emit_flat_class(&mut self, class: &str, source: &str, members: &[GroupedConstant]) {
        self.line(&format!("class {class}(IntEnum):"));
        self.line(&format!("    \"\"\"Constants from {source} enum.\"\"\""));
        if !members.is_empty() {
            self.line("");
        }
        self.emit_members(members, "    ", &mut UniqueNames::new());
    }

    /// Group classes and ungrouped members share one class scope.
    fn emit_nested_body(&mut self, grouping: &NestedGrouping) {
        let mut scope = UniqueNames::new();
        for group in &grouping.groups {
            let class = scope.claim(&safe_identifier(&group.name));
            self.line(&format!("    class {class}:"));
            self.emit_members(&group.members, "        ", &mut UniqueNames::new());
            self.line("");
        }

        if !grouping.ungrouped.is_empty() {
            self.line("    # Ungrouped constants");
            self.emit_members(&grouping.ungrouped, "    ", &mut scope);
        }
    }

    fn emit_members(
        &mut self,
        members: &[GroupedConstant],
        indent: &str,
        names: &mut UniqueNames,
    ) {
        for member in members {
            let name = names.claim(&safe_identifier(&member.name));
            self.line(&format!("{indent}{name} = {}", member.value));
        }
    }

    fn emit_summary(&mut self) {
        let rule = format!("# {}", "=".repeat(BANNER_WIDTH));
        let summary = self.summary.clone();

        self.line(&rule);
        self.line("# Generation Summary");
        self.line(&rule);
        self.line(&format!(
            "# Tier 1: {} classes, {} constants",
            summary.curated.len(),
            summary.curated_constants()
        ));
        for class in &summary.curated {
            self.line(&format!(
                "#   {} ({} constants) from {}",
                class.alias, class.constants, class.rule
            ));
        }
        self.line(&format!(
            "# Tier 2: {} classes, {} constants",
            summary.auto_classes, summary.auto_constants
        ));
        if !summary.skipped.is_empty() {
            self.line(&format!(
                "# Skipped {} rules (not found in type library):",
                summary.skipped.len()
            ));
            for key in &summary.skipped {
                self.line(&format!("#   {key}"));
            }
        }
    }
}

/// Render the constants module for `library`.
pub fn emit_constants(
    library: &Library,
    aliases: &AliasConfig,
    config: &Config,
) -> (String, ConstantsSummary) {
    ConstantsEmitter::new(library, aliases, config).emit()
}
