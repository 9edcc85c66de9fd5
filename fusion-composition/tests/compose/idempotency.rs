use fusion_composition::CompositionConfig;
use fusion_composition::compose::compose;
use fusion_composition::compose::names::FusionTypeNames;
use fusion_composition::compose::templates::BuiltinDirectiveTemplates;
use fusion_composition::error::ErrorCode;
use pretty_assertions::assert_eq;
use rstest::rstest;

use super::test_helpers::PRODUCTS_SDL;
use super::test_helpers::composed;
use super::test_helpers::parse;
use super::test_helpers::print_sdl;

#[rstest]
#[case::no_prefix(CompositionConfig::default())]
#[case::prefix(CompositionConfig::with_prefix("billing"))]
#[case::prefix_self(CompositionConfig::new(Some("billing"), true))]
fn composing_twice_with_the_same_config_is_idempotent(#[case] config: CompositionConfig) {
    let (mut schema, first) = composed(PRODUCTS_SDL, &config);
    let printed = print_sdl(schema.schema());
    let type_count = schema.schema().types.len();
    let directive_count = schema.schema().directive_definitions.len();

    let names = FusionTypeNames::new(&config).unwrap();
    let second = compose(&mut schema, &names, &BuiltinDirectiveTemplates).unwrap();

    assert_eq!(print_sdl(schema.schema()), printed);
    assert_eq!(schema.schema().types.len(), type_count);
    assert_eq!(schema.schema().directive_definitions.len(), directive_count);
    assert_eq!(
        schema
            .schema()
            .schema_definition
            .directives
            .get_all(&first.directives().fusion)
            .count(),
        1
    );
    assert_eq!(first.names(), second.names());
}

#[test]
fn equivalent_configs_do_not_conflict() {
    let (mut schema, _) = composed(PRODUCTS_SDL, &CompositionConfig::default());

    // an empty prefix is no prefix, and prefix-self means nothing without one
    let names = FusionTypeNames::new(&CompositionConfig::new(Some(""), true)).unwrap();
    compose(&mut schema, &names, &BuiltinDirectiveTemplates).unwrap();

    assert_eq!(
        schema.composition_config(),
        Some(&CompositionConfig::default())
    );
}

#[rstest]
#[case::add_prefix(CompositionConfig::default(), CompositionConfig::with_prefix("billing"))]
#[case::change_prefix(
    CompositionConfig::with_prefix("billing"),
    CompositionConfig::with_prefix("shipping")
)]
#[case::toggle_prefix_self(
    CompositionConfig::with_prefix("billing"),
    CompositionConfig::new(Some("billing"), true)
)]
fn conflicting_config_fails_and_leaves_schema_unchanged(
    #[case] first: CompositionConfig,
    #[case] second: CompositionConfig,
) {
    let (mut schema, _) = composed(PRODUCTS_SDL, &first);
    let printed = print_sdl(schema.schema());
    let fusion_types = schema.fusion_type_names().cloned().collect::<Vec<_>>();

    let names = FusionTypeNames::new(&second).unwrap();
    let err = compose(&mut schema, &names, &BuiltinDirectiveTemplates).unwrap_err();

    assert_eq!(err.code(), ErrorCode::ConfigurationConflict);
    assert_eq!(print_sdl(schema.schema()), printed);
    assert_eq!(
        schema.fusion_type_names().cloned().collect::<Vec<_>>(),
        fusion_types
    );
    assert_eq!(schema.composition_config(), Some(&first));
}

#[test]
fn built_in_scalars_are_not_duplicated() {
    let (mut schema, _) = composed(PRODUCTS_SDL, &CompositionConfig::default());
    let names = FusionTypeNames::new(&CompositionConfig::default()).unwrap();
    compose(&mut schema, &names, &BuiltinDirectiveTemplates).unwrap();

    let scalars = schema
        .schema()
        .types
        .keys()
        .filter(|name| ["Boolean", "Int", "String"].contains(&name.as_str()))
        .count();
    assert_eq!(scalars, 3);
    assert!(!schema.is_fusion_type(&apollo_compiler::name!("Boolean")));
}

#[test]
fn printed_schema_remembers_its_composition() {
    let config = CompositionConfig::new(Some("billing"), true);
    let (schema, _) = composed(PRODUCTS_SDL, &config);
    let printed = schema.schema().to_string();

    let mut reparsed = parse(&printed);
    assert_eq!(reparsed.composition_config(), Some(&config));

    let names = FusionTypeNames::new(&CompositionConfig::default()).unwrap();
    let err = compose(&mut reparsed, &names, &BuiltinDirectiveTemplates).unwrap_err();
    assert_eq!(err.code(), ErrorCode::ConfigurationConflict);
    assert!(!reparsed.schema().types.contains_key("TypeName"));
    assert_eq!(reparsed.composition_config(), Some(&config));

    let names = FusionTypeNames::new(&config).unwrap();
    compose(&mut reparsed, &names, &BuiltinDirectiveTemplates).unwrap();
    let roots = reparsed
        .schema()
        .schema_definition
        .directives
        .iter()
        .map(|directive| directive.name.as_str())
        .collect::<Vec<_>>();
    assert_eq!(roots, ["billing_fusion"]);

    let elided = reparsed.without_fusion_members();
    assert!(!elided.to_string().contains("billing_"));
}

#[test]
fn authored_type_with_a_fusion_name_is_not_overwritten() {
    let sdl = r#"
        type Query { uri: Uri }
        type Uri { host: String port: Int }
    "#;
    let mut schema = parse(sdl);
    let names = FusionTypeNames::new(&CompositionConfig::default()).unwrap();
    let err = compose(&mut schema, &names, &BuiltinDirectiveTemplates).unwrap_err();
    assert_eq!(err.code(), ErrorCode::ConfigurationConflict);
    assert!(err.to_string().contains("type \"Uri\""));
    assert!(schema.schema().types["Uri"].is_object());

    // a prefix moves the fusion vocabulary out of the way
    let (schema, _) = composed(sdl, &CompositionConfig::with_prefix("fusion"));
    let elided = schema.without_fusion_members();
    assert!(elided.types["Uri"].is_object());
    elided.validate().unwrap();
}
