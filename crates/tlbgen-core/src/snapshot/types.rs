//! Snapshot type definitions.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::{ConstValue, ElemDesc, EntryKind, InvokeKind, Param, RefHandle, TypeDesc};

/// Complete type-library snapshot.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TypeLibrary {
    /// Library name (e.g., "femap").
    pub name: String,
    /// Entries in host order; an entry's position is its index.
    pub entries: Vec<Entry>,
    /// Reference handle -> entry index.
    pub references: IndexMap<RefHandle, usize>,
}

/// One top-level entry. Only the member lists matching `kind` are consulted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Entry {
    pub kind: EntryKind,
    pub name: Option<String>,
    pub members: Vec<MemberRecord>,
    pub variables: Vec<VariableRecord>,
    pub functions: Vec<FunctionRecord>,
}

impl Entry {
    pub fn new(kind: EntryKind, name: impl Into<String>) -> Self {
        Self {
            kind,
            name: Some(name.into()),
            members: Vec::new(),
            variables: Vec::new(),
            functions: Vec::new(),
        }
    }
}

/// Stored enumeration member.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MemberRecord {
    pub name: Option<String>,
    pub value: ConstValue,
}

/// Stored variable-backed interface member.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VariableRecord {
    pub name: Option<String>,
    pub elem: ElemDesc,
}

/// Stored interface function.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FunctionRecord {
    pub name: Option<String>,
    pub invoke: InvokeKind,
    pub params: Vec<Param>,
    pub ret: TypeDesc,
}
