use super::*;
use crate::ConstValue;

fn library() -> TypeLibrary {
    TypeLibrary::from_json(
        r#"{
            "name": "test",
            "entries": [
                { "kind": "enum", "name": "zColor", "members": [
                    { "name": "FCL_BLACK", "value": 0 },
                    { "value": 1 }
                ]},
                { "kind": "dispatch", "name": "INode",
                  "variables": [ { "name": "ID", "type": 3 }, { "type": 3 } ],
                  "functions": [ { "name": "Put", "invoke": "func" }, { "invoke": "func" } ]
                },
                { "kind": "coclass" }
            ],
            "references": { "42": 0 }
        }"#,
    )
    .unwrap()
}

#[test]
fn entry_queries() {
    let lib = library();

    assert_eq!(lib.entry_count(), Ok(3));
    assert_eq!(lib.entry_kind(1), Ok(EntryKind::Dispatch));
    assert_eq!(lib.entry_name(0), Ok("zColor".to_string()));
    assert_eq!(lib.entry_name(2), Err(HostError::MissingEntryName(2)));
    assert_eq!(lib.entry_kind(9), Err(HostError::EntryOutOfRange(9)));
}

#[test]
fn enum_members_isolate_bad_slots() {
    let lib = library();

    let members = lib.enum_members(0).unwrap();
    assert_eq!(members.len(), 2);
    assert_eq!(
        members[0],
        Ok(Constant {
            name: "FCL_BLACK".into(),
            value: ConstValue::Int(0),
        })
    );
    assert_eq!(
        members[1],
        Err(HostError::MissingSlotName { index: 0, slot: 1 })
    );
}

#[test]
fn interface_members_isolate_bad_slots() {
    let lib = library();

    let vars = lib.interface_variables(1).unwrap();
    assert!(vars[0].is_ok());
    assert!(vars[1].is_err());

    let funcs = lib.interface_functions(1).unwrap();
    assert_eq!(funcs[0].as_ref().unwrap().name, "Put");
    assert!(funcs[1].is_err());
}

#[test]
fn member_queries_check_entry_kind() {
    let lib = library();

    assert!(matches!(
        lib.enum_members(1),
        Err(HostError::KindMismatch {
            index: 1,
            expected: "enum",
            actual: EntryKind::Dispatch,
        })
    ));
    assert!(matches!(
        lib.interface_functions(0),
        Err(HostError::KindMismatch { .. })
    ));
}

#[test]
fn resolve_reference() {
    let lib = library();

    assert_eq!(lib.resolve_reference(42), Ok(0));
    assert_eq!(lib.resolve_reference(7), Err(HostError::UnknownReference(7)));
}

#[test]
fn host_is_usable_through_a_reference() {
    let lib = library();
    let host: &dyn MetadataHost = &lib;

    assert_eq!((&host).entry_count(), Ok(3));
}
