use tlbgen_core::snapshot::Entry;
use tlbgen_core::{
    Constant, EntryKind, Function, HostError, HostResult, MetadataHost, RefHandle, TypeLibrary,
    Variable,
};

use super::*;
use crate::test_utils::{LibraryBuilder, int, string};

fn library() -> TypeLibrary {
    LibraryBuilder::new()
        .enumeration("zColor", &[("FCL_BLACK", 0), ("FCL_RED", 1)])
        .dispatch("INode", |i| i.variable("ID", int()))
        .entry(Entry::new(EntryKind::Interface, "INodeVtbl"))
        .entry(Entry::new(EntryKind::Coclass, "model"))
        .dispatch("IMatl", |i| i.get("title", vec![], string()))
        .enumeration("zReturnCode", &[("FE_OK", -1)])
        .build()
}

#[test]
fn collects_enums_and_dispatch_interfaces() {
    let lib = Library::extract(&library()).unwrap();

    let enums: Vec<_> = lib.enums.iter().map(|e| e.name.as_str()).collect();
    let interfaces: Vec<_> = lib.interfaces.iter().map(|i| i.name.as_str()).collect();
    assert_eq!(enums, ["zColor", "zReturnCode"]);
    assert_eq!(interfaces, ["INode", "IMatl"]);
    assert_eq!(
        lib.stats,
        ExtractStats {
            entries: 6,
            enums: 2,
            interfaces: 2,
            skipped_entries: 0,
            skipped_members: 0,
        }
    );
    assert_eq!(lib.constant_count(), 3);
    assert_eq!(lib.find_enum("zReturnCode").map(|e| e.members.len()), Some(1));
    assert!(lib.find_enum("zMissing").is_none());
}

#[test]
fn unnamed_entries_are_skipped() {
    let mut broken = Entry::new(EntryKind::Dispatch, "x");
    broken.name = None;
    let host = LibraryBuilder::new()
        .entry(broken)
        .enumeration("zColor", &[("FCL_BLACK", 0)])
        .build();

    let lib = Library::extract(&host).unwrap();

    assert!(lib.interfaces.is_empty());
    assert_eq!(lib.enums.len(), 1);
    assert_eq!(lib.stats.skipped_entries, 1);
}

/// Host whose entries can be counted but never read.
struct Flaky {
    count: HostResult<usize>,
}

impl MetadataHost for Flaky {
    fn entry_count(&self) -> HostResult<usize> {
        self.count.clone()
    }
    fn entry_kind(&self, index: usize) -> HostResult<EntryKind> {
        Err(HostError::EntryOutOfRange(index))
    }
    fn entry_name(&self, index: usize) -> HostResult<String> {
        Err(HostError::MissingEntryName(index))
    }
    fn enum_members(&self, index: usize) -> HostResult<Vec<HostResult<Constant>>> {
        Err(HostError::EntryOutOfRange(index))
    }
    fn interface_variables(&self, index: usize) -> HostResult<Vec<HostResult<Variable>>> {
        Err(HostError::EntryOutOfRange(index))
    }
    fn interface_functions(&self, index: usize) -> HostResult<Vec<HostResult<Function>>> {
        Err(HostError::EntryOutOfRange(index))
    }
    fn resolve_reference(&self, handle: RefHandle) -> HostResult<usize> {
        Err(HostError::UnknownReference(handle))
    }
}

#[test]
fn unreadable_kinds_are_skipped() {
    let lib = Library::extract(&Flaky { count: Ok(3) }).unwrap();

    assert_eq!(lib.stats.entries, 3);
    assert_eq!(lib.stats.skipped_entries, 3);
    assert!(lib.enums.is_empty());
}

#[test]
fn entry_count_failure_is_fatal() {
    let host = Flaky {
        count: Err(HostError::Unavailable("femap.tlb".into())),
    };

    let err = Library::extract(&host).unwrap_err();

    assert_eq!(err.to_string(), "type library unavailable: femap.tlb");
}
