//! One generation run: extract, map, emit.

use std::collections::HashSet;

use tlbgen_core::MetadataHost;

use crate::Result;
use crate::alias::{AliasConfig, AliasMap};
use crate::extract::{ExtractStats, Library};
use crate::typegen::python::{Config, ConstantsSummary, StubStats, emit_constants, emit_stubs};

/// Generated documents of one run.
#[derive(Clone, Debug)]
pub struct Artifacts {
    /// Constants module source
    pub constants: String,
    /// `.pyi` stub module source
    pub stubs: String,
    pub summary: ConstantsSummary,
    pub stats: ExtractStats,
    pub stub_stats: StubStats,
}

/// Alias rules and emission settings, shared by both emitters.
pub struct Pipeline {
    aliases: AliasConfig,
    map: AliasMap,
    config: Config,
}

impl Pipeline {
    pub fn new(aliases: &AliasConfig, config: Config) -> Self {
        Self {
            aliases: aliases.clone(),
            map: AliasMap::new(aliases),
            config,
        }
    }

    /// Extract everything from `host` and render both documents.
    ///
    /// Only a host that cannot enumerate its entries fails the run.
    pub fn run(&self, host: &dyn MetadataHost) -> Result<Artifacts> {
        let library = Library::extract(host)?;
        Ok(self.emit(&library))
    }

    /// Render both documents for an already extracted library.
    ///
    /// The stubs only reference aliases the constants module defines, so
    /// rules skipped for this library drop out of the alias map first.
    pub fn emit(&self, library: &Library) -> Artifacts {
        let (constants, summary) = emit_constants(library, &self.aliases, &self.config);

        let emitted: HashSet<&str> = summary.curated.iter().map(|c| c.alias.as_str()).collect();
        let map = self.map.clone().retain(|alias| emitted.contains(alias));
        let (stubs, stub_stats) = emit_stubs(library, &map, &self.config);

        Artifacts {
            constants,
            stubs,
            summary,
            stats: library.stats.clone(),
            stub_stats,
        }
    }
}
