//! Command builders for the CLI.
//!
//! Each command is built using the shared arg builders from `args.rs`.
//! The generating commands share one set of alias and emission flags.

use clap::Command;

use super::args::*;

/// Add the alias rule selection flags.
fn with_alias_args(cmd: Command) -> Command {
    cmd.arg(aliases_arg()).arg(rules_arg())
}

/// Add the emitter configuration flags.
fn with_config_args(cmd: Command) -> Command {
    cmd.arg(constants_module_arg())
        .arg(base_class_arg())
        .arg(base_module_arg())
        .arg(no_enum_aliases_arg())
}

/// Build the complete CLI with all subcommands.
pub fn build_cli() -> Command {
    Command::new("tlbgen")
        .about("Typed Python constants and stubs from automation type libraries")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(constants_command())
        .subcommand(stubs_command())
        .subcommand(generate_command())
        .subcommand(enums_command())
}

/// Generate the two-tier constants module.
pub fn constants_command() -> Command {
    let cmd = Command::new("constants")
        .about("Generate the constants module")
        .after_help(
            r#"EXAMPLES:
  tlbgen constants femap.json                          # print to stdout
  tlbgen constants femap.json -o femap_constants.py
  tlbgen constants femap.bin --rules rules.json        # custom curated aliases
  tlbgen constants femap.json --aliases none           # auto-generated tier only"#,
        )
        .arg(snapshot_arg())
        .arg(output_file_arg());

    with_config_args(with_alias_args(cmd))
}

/// Generate the `.pyi` stub module.
pub fn stubs_command() -> Command {
    let cmd = Command::new("stubs")
        .about("Generate the interface stub module")
        .after_help(
            r#"EXAMPLES:
  tlbgen stubs femap.json -o Pyfemap.pyi
  tlbgen stubs femap.json --constants-module femap_constants
  tlbgen stubs femap.json --base-class CDispatch --base-module win32com.client.dynamic"#,
        )
        .arg(snapshot_arg())
        .arg(output_file_arg());

    with_config_args(with_alias_args(cmd))
}

/// Generate both modules in one run.
pub fn generate_command() -> Command {
    let cmd = Command::new("generate")
        .about("Generate the constants and stub modules together")
        .after_help(
            r#"EXAMPLES:
  tlbgen generate femap.json                           # ./constants.py + ./Pyfemap.pyi
  tlbgen generate femap.json --out-dir typings --constants-module femap_constants"#,
        )
        .arg(snapshot_arg())
        .arg(out_dir_arg())
        .arg(stub_name_arg());

    with_config_args(with_alias_args(cmd))
}

/// List the enumerations of a type library.
pub fn enums_command() -> Command {
    Command::new("enums")
        .about("List all enums with member counts and prefixes")
        .arg(snapshot_arg())
}
