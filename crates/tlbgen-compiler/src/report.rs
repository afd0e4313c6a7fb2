//! Human-readable listings for the command line.

use std::collections::BTreeSet;
use std::fmt::Write;

use crate::extract::{EnumDescriptor, Library};
use crate::pipeline::Artifacts;

/// Every enumeration with its member count and up to three detected
/// prefixes, sorted by name.
pub fn enum_listing(library: &Library) -> String {
    let mut enums: Vec<&EnumDescriptor> = library.enums.iter().collect();
    enums.sort_by(|a, b| a.name.cmp(&b.name));

    let mut out = String::new();
    writeln!(out, "All available enums in type library:").unwrap();
    writeln!(out, "{}", "-".repeat(50)).unwrap();
    for e in enums {
        writeln!(
            out,
            "  {}: {} constants (prefixes: {})",
            e.name,
            e.members.len(),
            prefix_list(e)
        )
        .unwrap();
    }
    out
}

fn prefix_list(e: &EnumDescriptor) -> String {
    let prefixes: BTreeSet<String> = e
        .members
        .iter()
        .filter_map(|m| m.name.split_once('_'))
        .map(|(head, _)| format!("{head}_"))
        .collect();

    let shown: Vec<&str> = prefixes.iter().take(3).map(String::as_str).collect();
    let mut list = shown.join(", ");
    if prefixes.len() > 3 {
        list.push_str("...");
    }
    list
}

/// Processed and skipped counts of one run.
pub fn run_summary(artifacts: &Artifacts) -> String {
    let stats = &artifacts.stats;
    let summary = &artifacts.summary;
    let stubs = &artifacts.stub_stats;

    let mut out = String::new();
    writeln!(
        out,
        "Extracted {} enums and {} interfaces from {} entries",
        stats.enums, stats.interfaces, stats.entries
    )
    .unwrap();
    writeln!(
        out,
        "  Skipped {} unreadable entries and {} unreadable members",
        stats.skipped_entries, stats.skipped_members
    )
    .unwrap();
    writeln!(
        out,
        "Constants: {} curated classes ({} constants), {} auto classes ({} constants)",
        summary.curated.len(),
        summary.curated_constants(),
        summary.auto_classes,
        summary.auto_constants
    )
    .unwrap();
    write!(out, "  Skipped {} rules (not found in type library)", summary.skipped.len()).unwrap();
    if !summary.skipped.is_empty() {
        write!(out, ": {}", summary.skipped.join(", ")).unwrap();
    }
    out.push('\n');
    writeln!(
        out,
        "Stubs: {} interfaces, {} properties, {} methods",
        stubs.interfaces, stubs.properties, stubs.methods
    )
    .unwrap();
    out
}
