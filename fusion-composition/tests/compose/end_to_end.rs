use apollo_compiler::schema::ExtendedType;
use fusion_composition::CompositionConfig;
use pretty_assertions::assert_eq;

use super::test_helpers::PRODUCTS_SDL;
use super::test_helpers::composed;

const TYPE_BASE_NAMES: [&str; 7] = [
    "Selection",
    "SelectionSet",
    "TypeName",
    "Type",
    "Uri",
    "ArgumentDefinition",
    "ResolverKind",
];

const DIRECTIVE_BASE_NAMES: [&str; 12] = [
    "private",
    "resolver",
    "variable",
    "node",
    "declare",
    "is",
    "remove",
    "rename",
    "require",
    "resolve",
    "source",
    "transport",
];

#[test]
fn without_prefix() {
    let (schema, fusion) = composed(PRODUCTS_SDL, &CompositionConfig::default());

    let root = schema
        .schema()
        .schema_definition
        .directives
        .get("fusion")
        .unwrap();
    insta::assert_snapshot!(root.to_string(), @"@fusion(version: 1)");

    for name in TYPE_BASE_NAMES {
        assert!(schema.schema().types.contains_key(name), "missing {name}");
    }
    for name in DIRECTIVE_BASE_NAMES.into_iter().chain(["fusion"]) {
        assert!(
            schema.schema().directive_definitions.contains_key(name),
            "missing @{name}"
        );
    }
    assert_eq!(fusion.types().type_name, "TypeName");
    schema.validate().unwrap();
}

#[test]
fn with_prefix_and_prefix_self() {
    let config = CompositionConfig::new(Some("billing"), true);
    let (schema, fusion) = composed(PRODUCTS_SDL, &config);

    let root = schema
        .schema()
        .schema_definition
        .directives
        .get("billing_fusion")
        .unwrap();
    insta::assert_snapshot!(root.to_string(), @r#"@billing_fusion(prefix: "billing", prefixSelf: true, version: 1)"#);
    assert!(
        schema
            .schema()
            .schema_definition
            .directives
            .get("fusion")
            .is_none()
    );

    for name in TYPE_BASE_NAMES {
        assert!(!schema.schema().types.contains_key(name), "unprefixed {name}");
        assert!(
            schema.schema().types.contains_key(format!("billing_{name}").as_str()),
            "missing billing_{name}"
        );
    }
    for name in DIRECTIVE_BASE_NAMES.into_iter().chain(["fusion"]) {
        assert!(
            schema
                .schema()
                .directive_definitions
                .contains_key(format!("billing_{name}").as_str()),
            "missing @billing_{name}"
        );
    }
    assert!(
        schema
            .fusion_type_names()
            .chain(schema.fusion_directive_names())
            .all(|name| name.starts_with("billing_"))
    );
    assert_eq!(fusion.directives().fusion, "billing_fusion");
    assert_eq!(schema.composition_config(), Some(&config));
    schema.validate().unwrap();
}

#[test]
fn prefix_without_prefix_self_keeps_root_directive_name() {
    let (schema, fusion) = composed(PRODUCTS_SDL, &CompositionConfig::with_prefix("billing"));

    let root = schema
        .schema()
        .schema_definition
        .directives
        .get("fusion")
        .unwrap();
    insta::assert_snapshot!(root.to_string(), @r#"@fusion(prefix: "billing", prefixSelf: false, version: 1)"#);
    assert_eq!(fusion.directives().resolver, "billing_resolver");
    assert!(!schema.is_fusion_directive(&apollo_compiler::name!("billing_fusion")));
}

#[test]
fn auxiliary_types_have_the_expected_shape() {
    let (schema, fusion) = composed(PRODUCTS_SDL, &CompositionConfig::default());

    let ExtendedType::InputObject(argument_definition) =
        &schema.schema().types[&fusion.types().argument_definition]
    else {
        panic!("expected ArgumentDefinition to be an input object");
    };
    insta::assert_snapshot!(
        argument_definition.fields.values().map(|field| field.to_string()).collect::<Vec<_>>().join(", "),
        @"name: TypeName!, type: Type!"
    );

    let ExtendedType::Enum(resolver_kind) = &schema.schema().types[&fusion.types().resolver_kind]
    else {
        panic!("expected ResolverKind to be an enum");
    };
    assert_eq!(
        resolver_kind
            .values
            .keys()
            .map(|value| value.as_str())
            .collect::<Vec<_>>(),
        ["FETCH", "BATCH", "SUBSCRIBE"]
    );
}

#[test]
fn config_is_read_from_json() {
    let config: CompositionConfig =
        serde_json::from_str(r#"{ "prefix": "billing", "prefixSelf": true }"#).unwrap();
    let (schema, fusion) = composed(PRODUCTS_SDL, &config);
    assert_eq!(fusion.directives().fusion, "billing_fusion");
    assert_eq!(
        schema.composition_config().and_then(|config| config.prefix()),
        Some("billing")
    );
}
