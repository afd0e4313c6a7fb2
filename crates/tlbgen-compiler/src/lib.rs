//! tlbgen compiler: metadata extraction, alias mapping, and Python emission.
//!
//! This crate turns the entries of a [`tlbgen_core::MetadataHost`] into two
//! documents (a constants module and a `.pyi` stub module):
//! - `resolve` - type descriptor resolution
//! - `extract` - enumeration and dispatch-interface extraction
//! - `alias` - curated alias rules, union groups, and constant grouping
//! - `typegen` - constants module and `.pyi` stub emission
//! - `pipeline` - extract → map → emit over one host
//! - `report` - human-readable listings and run summaries

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod alias;
pub mod extract;
pub mod pipeline;
pub mod report;
pub mod resolve;
pub mod typegen;

#[cfg(test)]
mod pipeline_tests;
#[cfg(test)]
mod resolve_tests;
#[cfg(test)]
pub mod test_utils;

pub use alias::{AliasConfig, AliasMap, AliasRule, ConfigError, DisplayType};
pub use extract::{EnumDescriptor, ExtractStats, InterfaceDescriptor, Library};
pub use pipeline::{Artifacts, Pipeline};
pub use resolve::{Primitive, ResolvedType, Resolver};
pub use typegen::python::Config;

use tlbgen_core::HostError;

/// Errors that abort a generation run.
#[derive(Debug, Clone, thiserror::Error)]
pub enum Error {
    /// The metadata host could not be enumerated at all.
    #[error("metadata host failed: {0}")]
    Host(#[from] HostError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Result type for generation runs.
pub type Result<T> = std::result::Result<T, Error>;
