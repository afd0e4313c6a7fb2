//! Enumeration extraction.

use tlbgen_core::{HostResult, MetadataHost};

use super::ExtractStats;

/// One named integer constant.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConstantEntry {
    pub name: String,
    pub value: i32,
    pub owning_enum: String,
}

/// An enumeration with its members in declaration order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EnumDescriptor {
    pub name: String,
    pub members: Vec<ConstantEntry>,
}

/// Read the enumeration at `index`.
///
/// Members that cannot be read, or whose value is not a 32-bit integer, are
/// skipped and counted; they never fail the whole enumeration.
pub fn extract_enum(
    host: &dyn MetadataHost,
    index: usize,
    stats: &mut ExtractStats,
) -> HostResult<EnumDescriptor> {
    let name = host.entry_name(index)?;
    let slots = host.enum_members(index)?;

    let mut members = Vec::with_capacity(slots.len());
    for slot in slots {
        let constant = match slot {
            Ok(constant) => constant,
            Err(err) => {
                tracing::debug!(enumeration = %name, %err, "skipping unreadable constant");
                stats.skipped_members += 1;
                continue;
            }
        };

        let Some(value) = constant.value.as_i32() else {
            tracing::debug!(
                enumeration = %name,
                constant = %constant.name,
                value = ?constant.value,
                "skipping non-integer constant"
            );
            stats.skipped_members += 1;
            continue;
        };

        members.push(ConstantEntry {
            name: constant.name,
            value,
            owning_enum: name.clone(),
        });
    }

    Ok(EnumDescriptor { name, members })
}
