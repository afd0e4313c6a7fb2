//! Shared argument builders for CLI commands.
//!
//! Each function returns a `clap::Arg` that can be composed into commands.

use std::path::PathBuf;

use clap::{Arg, ArgAction, value_parser};

/// Type library snapshot (positional).
pub fn snapshot_arg() -> Arg {
    Arg::new("snapshot")
        .value_name("SNAPSHOT")
        .required(true)
        .value_parser(value_parser!(PathBuf))
        .help("Type library snapshot (.json, anything else is read as binary)")
}

/// Built-in alias rule set (--aliases).
pub fn aliases_arg() -> Arg {
    Arg::new("aliases")
        .long("aliases")
        .value_name("PRESET")
        .default_value("femap")
        .value_parser(["femap", "none"])
        .help("Built-in curated alias rules")
}

/// Alias rules file (--rules), overrides --aliases.
pub fn rules_arg() -> Arg {
    Arg::new("rules")
        .long("rules")
        .value_name("FILE")
        .value_parser(value_parser!(PathBuf))
        .help("JSON file with curated alias rules (overrides --aliases)")
}

/// Name of the constants module (--constants-module).
pub fn constants_module_arg() -> Arg {
    Arg::new("constants_module")
        .long("constants-module")
        .value_name("NAME")
        .help("Python module the stubs import aliases from [default: constants]")
}

/// Dispatch base class (--base-class).
pub fn base_class_arg() -> Arg {
    Arg::new("base_class")
        .long("base-class")
        .value_name("CLASS")
        .help("Base class of every interface stub [default: DispatchBaseClass]")
}

/// Module providing the base class (--base-module).
pub fn base_module_arg() -> Arg {
    Arg::new("base_module")
        .long("base-module")
        .value_name("MODULE")
        .help("Module the base class is imported from [default: win32com.client]")
}

/// Skip raw enum aliases in stubs (--no-enum-aliases).
pub fn no_enum_aliases_arg() -> Arg {
    Arg::new("no_enum_aliases")
        .long("no-enum-aliases")
        .action(ArgAction::SetTrue)
        .help("Render unaliased enum types as int instead of emitting `zEnum = int` lines")
}

/// Write output to file (-o/--output).
pub fn output_file_arg() -> Arg {
    Arg::new("output")
        .short('o')
        .long("output")
        .value_name("FILE")
        .value_parser(value_parser!(PathBuf))
        .help("Write output to file (default: stdout)")
}

/// Output directory (--out-dir).
pub fn out_dir_arg() -> Arg {
    Arg::new("out_dir")
        .long("out-dir")
        .value_name("DIR")
        .default_value(".")
        .value_parser(value_parser!(PathBuf))
        .help("Directory for the generated files")
}

/// Stub module name (--stub-name).
pub fn stub_name_arg() -> Arg {
    Arg::new("stub_name")
        .long("stub-name")
        .value_name("NAME")
        .default_value("Pyfemap")
        .help("File name (without .pyi) of the stub module")
}
