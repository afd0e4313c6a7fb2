//! Serialized type-library snapshots.
//!
//! A snapshot is a dump of every entry a metadata host exposes. It can be
//! read from a human-editable JSON document or from a compact binary form,
//! and it implements [`MetadataHost`] so the compiler can run on it directly.

mod binary;
mod json;
mod types;

#[cfg(test)]
mod host_tests;

pub use types::{Entry, FunctionRecord, MemberRecord, TypeLibrary, VariableRecord};

use crate::{
    Constant, EntryKind, Function, HostError, HostResult, MetadataHost, RefHandle, Variable,
};

/// Error while decoding a snapshot.
#[derive(Debug, thiserror::Error)]
pub enum SnapshotError {
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("binary decode error: {0}")]
    Binary(#[from] postcard::Error),
}

impl TypeLibrary {
    fn entry(&self, index: usize) -> HostResult<&Entry> {
        self.entries
            .get(index)
            .ok_or(HostError::EntryOutOfRange(index))
    }

    fn interface_entry(&self, index: usize) -> HostResult<&Entry> {
        let entry = self.entry(index)?;
        match entry.kind {
            EntryKind::Interface | EntryKind::Dispatch => Ok(entry),
            actual => Err(HostError::KindMismatch {
                index,
                expected: "interface",
                actual,
            }),
        }
    }
}

impl MetadataHost for TypeLibrary {
    fn entry_count(&self) -> HostResult<usize> {
        Ok(self.entries.len())
    }

    fn entry_kind(&self, index: usize) -> HostResult<EntryKind> {
        Ok(self.entry(index)?.kind)
    }

    fn entry_name(&self, index: usize) -> HostResult<String> {
        self.entry(index)?
            .name
            .clone()
            .ok_or(HostError::MissingEntryName(index))
    }

    fn enum_members(&self, index: usize) -> HostResult<Vec<HostResult<Constant>>> {
        let entry = self.entry(index)?;
        if entry.kind != EntryKind::Enum {
            return Err(HostError::KindMismatch {
                index,
                expected: "enum",
                actual: entry.kind,
            });
        }

        let members = entry
            .members
            .iter()
            .enumerate()
            .map(|(slot, member)| {
                let name = member
                    .name
                    .clone()
                    .ok_or(HostError::MissingSlotName { index, slot })?;
                Ok(Constant {
                    name,
                    value: member.value.clone(),
                })
            })
            .collect();
        Ok(members)
    }

    fn interface_variables(&self, index: usize) -> HostResult<Vec<HostResult<Variable>>> {
        let entry = self.interface_entry(index)?;
        let variables = entry
            .variables
            .iter()
            .enumerate()
            .map(|(slot, var)| {
                let name = var
                    .name
                    .clone()
                    .ok_or(HostError::MissingSlotName { index, slot })?;
                Ok(Variable {
                    name,
                    elem: var.elem.clone(),
                })
            })
            .collect();
        Ok(variables)
    }

    fn interface_functions(&self, index: usize) -> HostResult<Vec<HostResult<Function>>> {
        let entry = self.interface_entry(index)?;
        let functions = entry
            .functions
            .iter()
            .enumerate()
            .map(|(slot, func)| {
                let name = func
                    .name
                    .clone()
                    .ok_or(HostError::MissingSlotName { index, slot })?;
                Ok(Function {
                    name,
                    invoke: func.invoke,
                    params: func.params.clone(),
                    ret: func.ret.clone(),
                })
            })
            .collect();
        Ok(functions)
    }

    fn resolve_reference(&self, handle: RefHandle) -> HostResult<usize> {
        self.references
            .get(&handle)
            .copied()
            .ok_or(HostError::UnknownReference(handle))
    }
}
