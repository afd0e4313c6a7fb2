use indoc::indoc;

use super::*;

#[test]
fn rule_key_and_matching() {
    let primary = AliasRule::new("zColor", "Color", "FCL_");
    let brush = AliasRule::new("zColor", "BrushPattern", "FPF_").with_filter("FPF_");

    assert_eq!(primary.key(), "zColor");
    assert_eq!(brush.key(), "zColor:FPF_");
    assert!(primary.matches("FPF_SOLID"));
    assert!(brush.matches("FPF_SOLID"));
    assert!(!brush.matches("FCL_BLACK"));
}

#[test]
fn duplicate_alias_is_rejected() {
    let err = AliasConfig::new(vec![
        AliasRule::new("zReturnCode", "Code", "FE_"),
        AliasRule::new("zMessageColor", "Code", "FCM_"),
    ])
    .unwrap_err();

    assert_eq!(
        err,
        ConfigError::DuplicateAlias {
            alias: "Code".into(),
            first: "zReturnCode".into(),
            second: "zMessageColor".into(),
        }
    );
    insta::assert_snapshot!(err, @"alias `Code` is used by both `zReturnCode` and `zMessageColor`");
}

#[test]
fn duplicate_rule_key_is_rejected() {
    let err = AliasConfig::new(vec![
        AliasRule::new("zColor", "BrushPattern", "FPF_").with_filter("FPF_"),
        AliasRule::new("zColor", "Brush", "FPF_").with_filter("FPF_"),
    ])
    .unwrap_err();

    assert_eq!(err, ConfigError::DuplicateRule("zColor:FPF_".into()));
}

#[test]
fn same_enum_with_distinct_filters_is_accepted() {
    let config = AliasConfig::new(vec![
        AliasRule::new("zColor", "Color", "FCL_"),
        AliasRule::new("zColor", "BrushPattern", "FPF_").with_filter("FPF_"),
        AliasRule::new("zColor", "PenLineStyle", "FPL_").with_filter("FPL_"),
    ])
    .unwrap();

    assert_eq!(config.rules().len(), 3);
}

#[test]
fn rules_from_json() {
    let config = AliasConfig::from_json(indoc! {r#"
        {
          "rules": [
            { "source_enum": "zReturnCode", "alias": "ReturnCode", "strip_prefix": "FE_" },
            { "source_enum": "zGroupDefinitionType", "alias": "GroupDef",
              "strip_prefix": "FGD_", "nested": true },
            { "source_enum": "zColor", "filter_prefix": "FPF_", "alias": "BrushPattern",
              "strip_prefix": "FPF_" }
          ]
        }
    "#})
    .unwrap();

    assert_eq!(
        config.rules(),
        [
            AliasRule::new("zReturnCode", "ReturnCode", "FE_"),
            AliasRule::new("zGroupDefinitionType", "GroupDef", "FGD_").with_nested_grouping(),
            AliasRule::new("zColor", "BrushPattern", "FPF_").with_filter("FPF_"),
        ]
    );
}

#[test]
fn rules_file_is_validated() {
    let err = AliasConfig::from_json(
        r#"{"rules": [
            {"source_enum": "a", "alias": "X", "strip_prefix": ""},
            {"source_enum": "b", "alias": "X", "strip_prefix": ""}
        ]}"#,
    )
    .unwrap_err();
    assert!(matches!(err, ConfigError::DuplicateAlias { .. }));

    let err = AliasConfig::from_json(r#"{"rules": [{"alias": "X"}]}"#).unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
}

#[test]
fn presets() {
    assert!(AliasConfig::preset("none").unwrap().is_empty());
    assert_eq!(AliasConfig::preset("femap").unwrap(), AliasConfig::femap());
    assert_eq!(
        AliasConfig::preset("excel").unwrap_err(),
        ConfigError::UnknownPreset("excel".into())
    );
}

#[test]
fn femap_preset_is_valid() {
    assert!(AliasConfig::new(super::femap::rules()).is_ok());

    let femap = AliasConfig::femap();
    assert_eq!(femap.rules().len(), 67);

    let keys: Vec<_> = femap.rules()[..3].iter().map(AliasRule::key).collect();
    assert_eq!(keys, ["zReturnCode", "zMessageColor", "zDataType"]);

    let nested: Vec<_> = femap
        .rules()
        .iter()
        .filter(|r| r.nested)
        .map(|r| r.alias.as_str())
        .collect();
    assert_eq!(nested, ["GroupDef"]);

    let color: Vec<_> = femap
        .rules()
        .iter()
        .filter(|r| r.source_enum == "zColor")
        .map(AliasRule::key)
        .collect();
    assert_eq!(color, ["zColor", "zColor:FPF_", "zColor:FPL_"]);
}
