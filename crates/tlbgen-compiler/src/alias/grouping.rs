//! Grouping of enumeration members into flat or nested constant classes.
//!
//! All orderings are by value, with declaration order breaking ties (stable
//! sorts only). Group keys sort lexicographically.

use std::collections::BTreeMap;

use crate::extract::ConstantEntry;

/// A constant under its display name.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GroupedConstant {
    pub name: String,
    pub value: i32,
}

/// A nested class of constants.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConstantGroup {
    pub name: String,
    pub members: Vec<GroupedConstant>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NestedGrouping {
    pub groups: Vec<ConstantGroup>,
    /// Members without a group key, attached directly to the outer class.
    pub ungrouped: Vec<GroupedConstant>,
}

impl NestedGrouping {
    pub fn constant_count(&self) -> usize {
        self.groups.iter().map(|g| g.members.len()).sum::<usize>() + self.ungrouped.len()
    }
}

/// Shape chosen for an uncurated enumeration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AutoGrouping {
    /// Verbatim member names.
    Flat(Vec<GroupedConstant>),
    /// One group per detected prefix.
    Nested(NestedGrouping),
}

impl AutoGrouping {
    pub fn constant_count(&self) -> usize {
        match self {
            Self::Flat(members) => members.len(),
            Self::Nested(nested) => nested.constant_count(),
        }
    }
}

/// Remove `prefix` from `name`. A remainder starting with a digit gains a
/// leading `_`. Names without the prefix are returned unchanged.
pub fn strip_prefix(name: &str, prefix: &str) -> String {
    match name.strip_prefix(prefix) {
        Some(rest) => leading_digit_fix(rest),
        None => name.to_string(),
    }
}

fn leading_digit_fix(name: &str) -> String {
    if name.starts_with(|c: char| c.is_ascii_digit()) {
        format!("_{name}")
    } else {
        name.to_string()
    }
}

/// Split on the first `_` when both sides are non-empty.
fn split_group(name: &str) -> Option<(&str, &str)> {
    name.split_once('_')
        .filter(|(head, tail)| !head.is_empty() && !tail.is_empty())
}

fn constant(name: String, entry: &ConstantEntry) -> GroupedConstant {
    GroupedConstant {
        name,
        value: entry.value,
    }
}

fn sorted_by_value(mut members: Vec<GroupedConstant>) -> Vec<GroupedConstant> {
    members.sort_by_key(|m| m.value);
    members
}

fn finish_nested(
    groups: BTreeMap<String, Vec<GroupedConstant>>,
    ungrouped: Vec<GroupedConstant>,
) -> NestedGrouping {
    NestedGrouping {
        groups: groups
            .into_iter()
            .map(|(name, members)| ConstantGroup {
                name,
                members: sorted_by_value(members),
            })
            .collect(),
        ungrouped: sorted_by_value(ungrouped),
    }
}

/// Flat members with `prefix` stripped, sorted by value. A member whose whole
/// name is the prefix keeps its raw name.
pub fn flat_members(constants: &[ConstantEntry], prefix: &str) -> Vec<GroupedConstant> {
    let members = constants
        .iter()
        .map(|c| {
            let stripped = strip_prefix(&c.name, prefix);
            let name = if stripped.is_empty() {
                c.name.clone()
            } else {
                stripped
            };
            constant(name, c)
        })
        .collect();
    sorted_by_value(members)
}

/// Strip `prefix`, then split each remainder on its first `_` into a group
/// key and a leaf. Remainders without a separator become ungrouped leaves.
pub fn nested_grouping(constants: &[ConstantEntry], prefix: &str) -> NestedGrouping {
    let mut groups: BTreeMap<String, Vec<GroupedConstant>> = BTreeMap::new();
    let mut ungrouped = Vec::new();

    for c in constants {
        let rest = c.name.strip_prefix(prefix).unwrap_or(&c.name);
        match split_group(rest) {
            Some((key, leaf)) => groups
                .entry(leading_digit_fix(key))
                .or_default()
                .push(constant(leading_digit_fix(leaf), c)),
            None => ungrouped.push(constant(leading_digit_fix(rest), c)),
        }
    }

    finish_nested(groups, ungrouped)
}

/// Group an uncurated enumeration by the text before each member's first
/// `_`. More than one distinct prefix yields nested groups; otherwise the
/// members stay flat under their verbatim names.
pub fn auto_grouping(constants: &[ConstantEntry]) -> AutoGrouping {
    let mut groups: BTreeMap<String, Vec<GroupedConstant>> = BTreeMap::new();
    let mut ungrouped = Vec::new();

    for c in constants {
        match split_group(&c.name) {
            Some((key, leaf)) => groups
                .entry(leading_digit_fix(key))
                .or_default()
                .push(constant(leading_digit_fix(leaf), c)),
            None => ungrouped.push(constant(c.name.clone(), c)),
        }
    }

    if groups.len() > 1 {
        return AutoGrouping::Nested(finish_nested(groups, ungrouped));
    }

    let verbatim = constants
        .iter()
        .map(|c| constant(c.name.clone(), c))
        .collect();
    AutoGrouping::Flat(sorted_by_value(verbatim))
}
