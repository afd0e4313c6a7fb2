//! Extraction of enumerations and dispatch interfaces from a metadata host.
//!
//! Failures are absorbed here: an unreadable member is skipped, an unreadable
//! entry is skipped, and both are counted in [`ExtractStats`]. Only a host
//! that cannot report its entry count aborts extraction.

mod enums;
mod interfaces;

#[cfg(test)]
mod library_tests;

pub use enums::{ConstantEntry, EnumDescriptor, extract_enum};
pub use interfaces::{
    IndexParam, IndexedPropertyDescriptor, InterfaceDescriptor, MethodDescriptor, MethodParam,
    ParamDirection, PropertyDescriptor, extract_interface,
};

use tlbgen_core::{EntryKind, HostResult, MetadataHost};

use crate::resolve::Resolver;

/// Counts collected while extracting one library.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ExtractStats {
    /// Entries reported by the host.
    pub entries: usize,
    pub enums: usize,
    pub interfaces: usize,
    /// Enum or dispatch entries that could not be read at all.
    pub skipped_entries: usize,
    /// Constants, variables, or functions that could not be read.
    pub skipped_members: usize,
}

/// Everything extracted from one metadata snapshot.
#[derive(Clone, Debug, Default)]
pub struct Library {
    /// Enumerations in host order.
    pub enums: Vec<EnumDescriptor>,
    /// Dispatch interfaces in host order.
    pub interfaces: Vec<InterfaceDescriptor>,
    pub stats: ExtractStats,
}

impl Library {
    /// Extract every enumeration and dispatch interface the host exposes.
    pub fn extract(host: &dyn MetadataHost) -> HostResult<Self> {
        let count = host.entry_count()?;
        let resolver = Resolver::new(host);

        let mut library = Library::default();
        library.stats.entries = count;

        for index in 0..count {
            let kind = match host.entry_kind(index) {
                Ok(kind) => kind,
                Err(err) => {
                    tracing::warn!(index, %err, "skipping unreadable entry");
                    library.stats.skipped_entries += 1;
                    continue;
                }
            };

            match kind {
                EntryKind::Enum => match extract_enum(host, index, &mut library.stats) {
                    Ok(descriptor) => library.enums.push(descriptor),
                    Err(err) => {
                        tracing::warn!(index, %err, "skipping enumeration");
                        library.stats.skipped_entries += 1;
                    }
                },
                EntryKind::Dispatch => {
                    match extract_interface(&resolver, host, index, &mut library.stats) {
                        Ok(descriptor) => library.interfaces.push(descriptor),
                        Err(err) => {
                            tracing::warn!(index, %err, "skipping interface");
                            library.stats.skipped_entries += 1;
                        }
                    }
                }
                _ => {}
            }
        }

        library.stats.enums = library.enums.len();
        library.stats.interfaces = library.interfaces.len();
        tracing::info!(
            entries = count,
            enums = library.stats.enums,
            interfaces = library.stats.interfaces,
            skipped_entries = library.stats.skipped_entries,
            skipped_members = library.stats.skipped_members,
            "extracted type library"
        );

        Ok(library)
    }

    /// First enumeration with the given name.
    pub fn find_enum(&self, name: &str) -> Option<&EnumDescriptor> {
        self.enums.iter().find(|e| e.name == name)
    }

    pub fn constant_count(&self) -> usize {
        self.enums.iter().map(|e| e.members.len()).sum()
    }
}
