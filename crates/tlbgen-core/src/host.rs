//! The metadata host interface.

use crate::{Constant, EntryKind, Function, RefHandle, Variable};

/// Failure reported by a metadata host for a single call.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HostError {
    #[error("type library unavailable: {0}")]
    Unavailable(String),

    #[error("entry {0} is out of range")]
    EntryOutOfRange(usize),

    #[error("entry {0} has no name")]
    MissingEntryName(usize),

    #[error("entry {index} is a {actual}, not a {expected}")]
    KindMismatch {
        index: usize,
        expected: &'static str,
        actual: EntryKind,
    },

    #[error("slot {slot} of entry {index} has no name")]
    MissingSlotName { index: usize, slot: usize },

    #[error("unknown type reference {0}")]
    UnknownReference(RefHandle),
}

pub type HostResult<T> = Result<T, HostError>;

/// Read-only access to one loaded type library.
///
/// Sequence methods return one result per slot so a single unreadable member
/// does not hide its siblings. Only [`entry_count`](Self::entry_count)
/// failing means the library itself is unusable.
pub trait MetadataHost {
    fn entry_count(&self) -> HostResult<usize>;
    fn entry_kind(&self, index: usize) -> HostResult<EntryKind>;
    fn entry_name(&self, index: usize) -> HostResult<String>;

    fn enum_members(&self, index: usize) -> HostResult<Vec<HostResult<Constant>>>;
    fn interface_variables(&self, index: usize) -> HostResult<Vec<HostResult<Variable>>>;
    fn interface_functions(&self, index: usize) -> HostResult<Vec<HostResult<Function>>>;

    /// Map a reference handle to the index of the entry it names.
    fn resolve_reference(&self, handle: RefHandle) -> HostResult<usize>;
}

impl<T: MetadataHost + ?Sized> MetadataHost for &T {
    fn entry_count(&self) -> HostResult<usize> {
        (*self).entry_count()
    }
    fn entry_kind(&self, index: usize) -> HostResult<EntryKind> {
        (*self).entry_kind(index)
    }
    fn entry_name(&self, index: usize) -> HostResult<String> {
        (*self).entry_name(index)
    }
    fn enum_members(&self, index: usize) -> HostResult<Vec<HostResult<Constant>>> {
        (*self).enum_members(index)
    }
    fn interface_variables(&self, index: usize) -> HostResult<Vec<HostResult<Variable>>> {
        (*self).interface_variables(index)
    }
    fn interface_functions(&self, index: usize) -> HostResult<Vec<HostResult<Function>>> {
        (*self).interface_functions(index)
    }
    fn resolve_reference(&self, handle: RefHandle) -> HostResult<usize> {
        (*self).resolve_reference(handle)
    }
}
