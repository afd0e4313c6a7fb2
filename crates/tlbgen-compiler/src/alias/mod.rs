//! Curated enumeration aliases.
//!
//! An [`AliasConfig`] is a validated, ordered list of [`AliasRule`]s. From it
//! this module derives:
//! - the [`AliasMap`] used to translate raw enum names into display types
//! - the grouping of constants into flat or nested classes

mod config;
mod femap;
mod grouping;
mod mapper;

#[cfg(test)]
mod config_tests;

pub use config::{AliasConfig, AliasRule, ConfigError};
pub use grouping::{
    AutoGrouping, ConstantGroup, GroupedConstant, NestedGrouping, auto_grouping, flat_members,
    nested_grouping, strip_prefix,
};
pub use mapper::{AliasMap, DisplayType};
