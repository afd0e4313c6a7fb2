//! Dispatch logic: extract params from ArgMatches and convert to command args.
//!
//! This module contains:
//! - `*Params` structs that mirror command `*Args` but are populated from clap
//! - `from_matches()` extractors
//! - `Into<*Args>` impls to bridge dispatch → command handlers

use std::path::PathBuf;

use clap::ArgMatches;

use crate::commands::common::{AliasSource, GenerationArgs};
use crate::commands::constants::ConstantsArgs;
use crate::commands::enums::EnumsArgs;
use crate::commands::generate::GenerateArgs;
use crate::commands::stubs::StubsArgs;

/// Flags shared by every generating command.
pub struct GenerationParams {
    pub snapshot: PathBuf,
    pub aliases: String,
    pub rules: Option<PathBuf>,
    pub constants_module: Option<String>,
    pub base_class: Option<String>,
    pub base_module: Option<String>,
    pub no_enum_aliases: bool,
}

impl GenerationParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            snapshot: snapshot_path(m),
            aliases: m
                .get_one::<String>("aliases")
                .cloned()
                .unwrap_or_else(|| "femap".to_string()),
            rules: m.get_one::<PathBuf>("rules").cloned(),
            constants_module: m.get_one::<String>("constants_module").cloned(),
            base_class: m.get_one::<String>("base_class").cloned(),
            base_module: m.get_one::<String>("base_module").cloned(),
            no_enum_aliases: m.get_flag("no_enum_aliases"),
        }
    }
}

impl From<GenerationParams> for GenerationArgs {
    fn from(p: GenerationParams) -> Self {
        // A rules file wins over the preset
        let aliases = match p.rules {
            Some(path) => AliasSource::File(path),
            None => AliasSource::Preset(p.aliases),
        };
        Self {
            snapshot: p.snapshot,
            aliases,
            constants_module: p.constants_module,
            base_class: p.base_class,
            base_module: p.base_module,
            enum_aliases: !p.no_enum_aliases,
        }
    }
}

pub struct ConstantsParams {
    pub generation: GenerationParams,
    pub output: Option<PathBuf>,
}

impl ConstantsParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            generation: GenerationParams::from_matches(m),
            output: m.get_one::<PathBuf>("output").cloned(),
        }
    }
}

impl From<ConstantsParams> for ConstantsArgs {
    fn from(p: ConstantsParams) -> Self {
        Self {
            generation: p.generation.into(),
            output: p.output,
        }
    }
}

pub struct StubsParams {
    pub generation: GenerationParams,
    pub output: Option<PathBuf>,
}

impl StubsParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            generation: GenerationParams::from_matches(m),
            output: m.get_one::<PathBuf>("output").cloned(),
        }
    }
}

impl From<StubsParams> for StubsArgs {
    fn from(p: StubsParams) -> Self {
        Self {
            generation: p.generation.into(),
            output: p.output,
        }
    }
}

pub struct GenerateParams {
    pub generation: GenerationParams,
    pub out_dir: PathBuf,
    pub stub_name: String,
}

impl GenerateParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            generation: GenerationParams::from_matches(m),
            out_dir: m
                .get_one::<PathBuf>("out_dir")
                .cloned()
                .unwrap_or_else(|| PathBuf::from(".")),
            stub_name: m
                .get_one::<String>("stub_name")
                .cloned()
                .unwrap_or_else(|| "Pyfemap".to_string()),
        }
    }
}

impl From<GenerateParams> for GenerateArgs {
    fn from(p: GenerateParams) -> Self {
        Self {
            generation: p.generation.into(),
            out_dir: p.out_dir,
            stub_name: p.stub_name,
        }
    }
}

pub struct EnumsParams {
    pub snapshot: PathBuf,
}

impl EnumsParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            snapshot: snapshot_path(m),
        }
    }
}

impl From<EnumsParams> for EnumsArgs {
    fn from(p: EnumsParams) -> Self {
        Self {
            snapshot: p.snapshot,
        }
    }
}

fn snapshot_path(m: &ArgMatches) -> PathBuf {
    m.get_one::<PathBuf>("snapshot")
        .cloned()
        .unwrap_or_default()
}
