//! Binary serialization for snapshots using postcard.

use super::SnapshotError;
use super::types::TypeLibrary;

impl TypeLibrary {
    /// Deserialize a snapshot from binary format.
    pub fn from_binary(bytes: &[u8]) -> Result<Self, SnapshotError> {
        postcard::from_bytes(bytes).map_err(SnapshotError::Binary)
    }

    /// Serialize a snapshot to binary format.
    pub fn to_binary(&self) -> Vec<u8> {
        postcard::to_allocvec(self).expect("serialization should not fail")
    }
}
