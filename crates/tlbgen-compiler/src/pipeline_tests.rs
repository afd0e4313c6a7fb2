use indoc::indoc;
use tlbgen_core::{
    Constant, EntryKind, Function, HostError, HostResult, MetadataHost, RefHandle, TypeLibrary,
    Variable,
};

use super::*;
use crate::test_utils::{LibraryBuilder, double, int, param, reference};

fn sample_host() -> TypeLibrary {
    LibraryBuilder::new()
        .enumeration("zReturnCode", &[("FE_OK", -1), ("FE_FAIL", 0)])
        .enumeration("zColor", &[("FCL_BLACK", 0), ("FCL_RED", 1)])
        .dispatch("INode", |i| {
            i.variable("ID", int())
                .get("color", vec![], reference(1))
                .method("Move", vec![param("dx", double())], reference(0))
        })
        .build()
}

fn sample_rules() -> AliasConfig {
    AliasConfig::new(vec![
        AliasRule::new("zReturnCode", "ReturnCode", "FE_"),
        AliasRule::new("zColor", "Color", "FCL_"),
        AliasRule::new("zMissing", "Missing", "FM_"),
    ])
    .unwrap()
}

#[test]
fn runs_are_byte_identical() {
    let host = sample_host();
    let pipeline = Pipeline::new(&sample_rules(), Config::default());

    let first = pipeline.run(&host).unwrap();
    let second = pipeline.run(&host).unwrap();

    assert_eq!(first.constants, second.constants);
    assert_eq!(first.stubs, second.stubs);
}

#[test]
fn missing_enum_is_reported_and_the_rest_generated() {
    let pipeline = Pipeline::new(&sample_rules(), Config::default());

    let artifacts = pipeline.run(&sample_host()).unwrap();

    assert_eq!(artifacts.summary.skipped, vec!["zMissing".to_string()]);
    assert_eq!(artifacts.summary.curated.len(), 2);
    assert!(artifacts.constants.contains("class ReturnCode(IntEnum):\n"));
    assert!(artifacts.constants.contains("class Color(IntEnum):\n"));
    assert!(!artifacts.constants.contains("class Missing"));
    assert!(artifacts.stubs.contains("def color(self) -> Color: ..."));
    assert!(artifacts.stubs.contains("def Move(self, dx: float) -> ReturnCode: ..."));
}

#[test]
fn unavailable_library_is_fatal() {
    struct Closed;

    impl MetadataHost for Closed {
        fn entry_count(&self) -> HostResult<usize> {
            Err(HostError::Unavailable("femap.tlb".into()))
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

    let pipeline = Pipeline::new(&AliasConfig::femap(), Config::default());

    let err = pipeline.run(&Closed).unwrap_err();

    assert!(matches!(err, Error::Host(HostError::Unavailable(_))));
    insta::assert_snapshot!(err, @"metadata host failed: type library unavailable: femap.tlb");
}

#[test]
fn json_and_binary_snapshots_agree() {
    let json = indoc! {r#"
        {
            "name": "femap",
            "entries": [
                { "kind": "enum", "name": "zReturnCode", "members": [
                    { "name": "FE_OK", "value": -1 },
                    { "name": "FE_FAIL", "value": 0 }
                ]},
                { "kind": "dispatch", "name": "IModel", "functions": [
                    { "name": "Rebuild", "returns": { "reference": 0 } }
                ]}
            ],
            "references": { "0": 0 }
        }
    "#};
    let from_json = TypeLibrary::from_json(json).unwrap();
    let from_binary = TypeLibrary::from_binary(&from_json.to_binary()).unwrap();
    let pipeline = Pipeline::new(&sample_rules(), Config::default());

    let a = pipeline.run(&from_json).unwrap();
    let b = pipeline.run(&from_binary).unwrap();

    assert_eq!(a.constants, b.constants);
    assert_eq!(a.stubs, b.stubs);
    assert!(a.stubs.contains("    def Rebuild(self) -> ReturnCode: ...\n"));
}

#[test]
fn emit_reuses_an_extracted_library() {
    let library = Library::extract(&sample_host()).unwrap();
    let pipeline = Pipeline::new(&sample_rules(), Config::default());

    let artifacts = pipeline.emit(&library);

    assert_eq!(artifacts.stats, library.stats);
    assert_eq!(artifacts.stub_stats.interfaces, 1);
    assert_eq!(artifacts.stub_stats.properties, 2);
    assert_eq!(artifacts.stub_stats.methods, 1);
}

#[test]
fn stubs_only_import_emitted_aliases() {
    let host = LibraryBuilder::new()
        .enumeration("zColor", &[("FCL_BLACK", 0), ("FCL_RED", 1)])
        .dispatch("INode", |i| i.get("color", vec![], reference(0)))
        .build();
    let rules = AliasConfig::new(vec![
        AliasRule::new("zColor", "Color", "FCL_"),
        AliasRule::new("zColor", "BrushPattern", "FPF_").with_filter("FPF_"),
    ])
    .unwrap();

    let artifacts = Pipeline::new(&rules, Config::default()).run(&host).unwrap();

    assert_eq!(artifacts.summary.skipped, vec!["zColor:FPF_".to_string()]);
    assert!(!artifacts.constants.contains("class BrushPattern"));
    assert!(artifacts.stubs.contains("from constants import Color\n"));
    assert!(artifacts.stubs.contains("    def color(self) -> Color: ...\n"));
    assert!(!artifacts.stubs.contains("BrushPattern"));
}
