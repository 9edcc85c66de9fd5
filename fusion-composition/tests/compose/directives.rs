use apollo_compiler::Name;
use apollo_compiler::Node;
use apollo_compiler::ast::Directive;
use apollo_compiler::ast::Field;
use apollo_compiler::ast::Selection;
use apollo_compiler::ast::Value;
use apollo_compiler::collections::IndexMap;
use apollo_compiler::name;
use apollo_compiler::schema::DirectiveLocation;
use apollo_compiler::schema::ExtendedType;
use apollo_compiler::ty;
use fusion_composition::CompositionConfig;
use fusion_composition::EntityResolverKind;
use fusion_composition::error::ErrorCode;
use pretty_assertions::assert_eq;
use rstest::rstest;

use super::test_helpers::PRODUCTS_SDL;
use super::test_helpers::composed;

fn field(name: Name) -> Field {
    Field {
        alias: None,
        name,
        arguments: Vec::new(),
        directives: Default::default(),
        selection_set: Vec::new(),
    }
}

fn argument_names(directive: &Directive) -> Vec<&str> {
    directive
        .arguments
        .iter()
        .map(|argument| argument.name.as_str())
        .collect()
}

fn string_argument<'a>(directive: &'a Directive, name: &str) -> Option<&'a str> {
    match &**directive.specified_argument_by_name(name)? {
        Value::String(value) => Some(value.as_str()),
        _ => None,
    }
}

#[test]
fn variable_directive_is_valid_on_objects_and_fields() {
    let (schema, fusion) = composed(PRODUCTS_SDL, &CompositionConfig::default());
    let variable = &schema.schema().directive_definitions[&fusion.directives().variable];
    assert!(variable.locations.contains(&DirectiveLocation::Object));
    assert!(variable.locations.contains(&DirectiveLocation::FieldDefinition));
}

#[test]
fn variable_from_field_selects_and_never_binds_an_argument() {
    let (_, fusion) = composed(PRODUCTS_SDL, &CompositionConfig::default());
    let directive = fusion.variable_directive_from_field("products", "productId", &field(name!("id")));

    assert_eq!(directive.name, "variable");
    assert_eq!(argument_names(&directive), ["subgraph", "name", "select"]);
    assert_eq!(string_argument(&directive, "subgraph"), Some("products"));
    assert_eq!(string_argument(&directive, "name"), Some("productId"));
    assert_eq!(string_argument(&directive, "select"), Some("id"));
    assert!(directive.specified_argument_by_name("argument").is_none());
}

#[test]
fn variable_from_argument_binds_and_never_selects() {
    let (_, fusion) = composed(PRODUCTS_SDL, &CompositionConfig::with_prefix("billing"));
    let directive = fusion.variable_directive_from_argument("products", "productId", "id");

    assert_eq!(directive.name, "billing_variable");
    assert_eq!(argument_names(&directive), ["subgraph", "name", "argument"]);
    assert_eq!(string_argument(&directive, "argument"), Some("id"));
    assert!(directive.specified_argument_by_name("select").is_none());
}

#[test]
fn private_directive_has_no_arguments() {
    let (_, fusion) = composed(PRODUCTS_SDL, &CompositionConfig::with_prefix("billing"));
    insta::assert_snapshot!(fusion.private_directive(), @"@billing_private");
}

#[rstest]
#[case::single(EntityResolverKind::Single, None)]
#[case::batch(EntityResolverKind::Batch, Some("BATCH"))]
#[case::subscribe(EntityResolverKind::Subscribe, Some("SUBSCRIBE"))]
fn resolver_kind_is_only_written_when_not_single(
    #[case] kind: EntityResolverKind,
    #[case] expected: Option<&str>,
) {
    let (_, fusion) = composed(PRODUCTS_SDL, &CompositionConfig::default());
    let select = [Selection::Field(Node::new(field(name!("id"))))];
    let directive = fusion.resolver_directive("products", &select, &IndexMap::default(), kind);

    let written = directive
        .specified_argument_by_name("kind")
        .map(|value| match &**value {
            Value::Enum(value) => value.to_string(),
            other => panic!("expected an enum value, found {other}"),
        });
    assert_eq!(written.as_deref(), expected);
    assert_eq!(fusion.resolver_kind_of(&directive).unwrap(), kind);
}

#[test]
fn resolver_without_arguments_omits_the_arguments_list() {
    let (_, fusion) = composed(PRODUCTS_SDL, &CompositionConfig::default());
    let select = [
        Selection::Field(Node::new(field(name!("id")))),
        Selection::Field(Node::new(field(name!("name")))),
    ];
    let directive = fusion.resolver_directive(
        "products",
        &select,
        &IndexMap::default(),
        EntityResolverKind::Single,
    );

    assert_eq!(argument_names(&directive), ["subgraph", "select"]);
    assert_eq!(string_argument(&directive, "select"), Some("{ id name }"));
}

#[test]
fn resolver_arguments_keep_their_order() {
    let (_, fusion) = composed(PRODUCTS_SDL, &CompositionConfig::default());
    let select = [Selection::Field(Node::new(field(name!("product"))))];
    let mut arguments = IndexMap::default();
    arguments.insert(name!("id"), ty!(ID!));
    arguments.insert(name!("locale"), ty!([String]));
    let directive = fusion.resolver_directive(
        "products",
        &select,
        &arguments,
        EntityResolverKind::Batch,
    );

    assert_eq!(
        argument_names(&directive),
        ["subgraph", "select", "arguments", "kind"]
    );
    let Some(Value::List(definitions)) = directive
        .specified_argument_by_name("arguments")
        .map(|value| &**value)
    else {
        panic!("expected a list of argument definitions");
    };
    let definitions = definitions
        .iter()
        .map(|definition| {
            let Value::Object(fields) = &**definition else {
                panic!("expected an argument definition object");
            };
            fields
                .iter()
                .map(|(name, value)| (name.to_string(), value.to_string()))
                .collect::<Vec<_>>()
        })
        .collect::<Vec<_>>();
    assert_eq!(
        definitions,
        [
            [
                ("name".to_owned(), "\"id\"".to_owned()),
                ("type".to_owned(), "\"ID!\"".to_owned()),
            ],
            [
                ("name".to_owned(), "\"locale\"".to_owned()),
                ("type".to_owned(), "\"[String]\"".to_owned()),
            ],
        ]
    );
}

#[test]
fn unknown_resolver_kind_is_not_supported() {
    let (_, fusion) = composed(PRODUCTS_SDL, &CompositionConfig::default());
    let directive = Directive {
        name: fusion.directives().resolver.clone(),
        arguments: vec![Node::new(apollo_compiler::ast::Argument {
            name: name!("kind"),
            value: Node::new(Value::Enum(name!("STREAM"))),
        })],
    };
    let err = fusion.resolver_kind_of(&directive).unwrap_err();
    assert_eq!(err.code(), ErrorCode::NotSupported);
}

#[test]
fn node_directive_lists_types_in_order() {
    let (schema, fusion) = composed(PRODUCTS_SDL, &CompositionConfig::default());
    let object = |name: &str| match &schema.schema().types[name] {
        ExtendedType::Object(object) => object.clone(),
        _ => panic!("expected {name} to be an object type"),
    };
    let types = [object("User"), object("Product")];
    let directive = fusion.node_directive("products", &types);

    assert_eq!(argument_names(&directive), ["subgraph", "types"]);
    let Some(Value::List(names)) = directive
        .specified_argument_by_name("types")
        .map(|value| &**value)
    else {
        panic!("expected a list of type names");
    };
    let names = names
        .iter()
        .map(|name| match &**name {
            Value::String(name) => name.as_str(),
            other => panic!("expected a string, found {other}"),
        })
        .collect::<Vec<_>>();
    assert_eq!(names, ["User", "Product"]);
}
