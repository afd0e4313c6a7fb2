use tlbgen_core::{TypeDesc, vt};

use super::resolve::{Primitive, ResolvedType, Resolver};
use crate::test_utils::{LibraryBuilder, reference};

#[test]
fn primitive_table() {
    let cases = [
        (vt::EMPTY, "None"),
        (vt::I2, "int"),
        (vt::I4, "int"),
        (vt::R4, "float"),
        (vt::R8, "float"),
        (vt::CY, "float"),
        (vt::DATE, "float"),
        (vt::BSTR, "str"),
        (vt::DISPATCH, "Any"),
        (vt::ERROR, "int"),
        (vt::BOOL, "bool"),
        (vt::VARIANT, "Any"),
        (vt::UNKNOWN, "Any"),
        (vt::I1, "int"),
        (vt::UI1, "int"),
        (vt::UI2, "int"),
        (vt::UI4, "int"),
        (vt::I8, "int"),
        (vt::UI8, "int"),
        (vt::INT, "int"),
        (vt::UINT, "int"),
        (vt::VOID, "None"),
        (vt::HRESULT, "int"),
    ];

    for (code, expected) in cases {
        assert_eq!(Primitive::from_code(code).as_str(), expected, "code {code}");
    }
}

#[test]
fn unmapped_codes_fall_back_to_any() {
    for code in [1, 14, 15, 30, 64, 0x4000, u16::MAX] {
        assert_eq!(Primitive::from_code(code), Primitive::Any, "code {code}");
    }
}

#[test]
fn pointer_is_erased() {
    let lib = LibraryBuilder::new().enumeration("zColor", &[]).build();
    let resolver = Resolver::new(&lib);

    let direct = TypeDesc::Primitive(vt::BSTR);
    let pointer = TypeDesc::pointer(TypeDesc::pointer(direct.clone()));
    assert_eq!(resolver.resolve(&pointer), resolver.resolve(&direct));

    let to_enum = TypeDesc::pointer(reference(0));
    assert_eq!(resolver.resolve(&to_enum), ResolvedType::named("zColor"));
}

#[test]
fn array_wraps_element_type() {
    let lib = LibraryBuilder::new().enumeration("zColor", &[]).build();
    let resolver = Resolver::new(&lib);

    let doubles = TypeDesc::array(TypeDesc::Primitive(vt::R8));
    assert_eq!(
        resolver.resolve(&doubles),
        ResolvedType::sequence(ResolvedType::Primitive(Primitive::Float))
    );

    let colors = TypeDesc::pointer(TypeDesc::array(reference(0)));
    assert_eq!(resolver.resolve(&colors).to_string(), "Tuple[zColor, ...]");
}

#[test]
fn reference_follows_host_to_entry_name() {
    let lib = LibraryBuilder::new()
        .enumeration("zReturnCode", &[("FE_OK", -1)])
        .dispatch("INode", |i| i)
        .build();
    let resolver = Resolver::new(&lib);

    assert_eq!(resolver.resolve(&reference(0)).to_string(), "zReturnCode");
    assert_eq!(resolver.resolve(&reference(1)).to_string(), "INode");
}

#[test]
fn unresolvable_reference_falls_back_to_int() {
    let mut lib = LibraryBuilder::new().enumeration("zColor", &[]).build();
    // Handle that points past the last entry.
    lib.references.insert(50, 99);
    let resolver = Resolver::new(&lib);

    assert_eq!(resolver.resolve(&reference(7)), ResolvedType::INT);
    assert_eq!(resolver.resolve(&reference(50)), ResolvedType::INT);
    assert_eq!(
        resolver.resolve(&TypeDesc::array(reference(7))).to_string(),
        "Tuple[int, ...]"
    );
}

#[test]
fn display_of_composites() {
    let ty = ResolvedType::Tuple(vec![
        ResolvedType::named("zReturnCode"),
        ResolvedType::INT,
        ResolvedType::sequence(ResolvedType::ANY),
    ]);

    assert_eq!(ty.to_string(), "Tuple[zReturnCode, int, Tuple[Any, ...]]");
}
