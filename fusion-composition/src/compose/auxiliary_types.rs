use apollo_compiler::Name;
use apollo_compiler::Node;
use apollo_compiler::collections::IndexMap;
use apollo_compiler::name;
use apollo_compiler::schema::Component;
use apollo_compiler::schema::EnumType;
use apollo_compiler::schema::EnumValueDefinition;
use apollo_compiler::schema::ExtendedType;
use apollo_compiler::schema::InputObjectType;
use apollo_compiler::schema::InputValueDefinition;
use apollo_compiler::schema::ScalarType;
use apollo_compiler::schema::Type;

use crate::compose::names::ARGUMENT_DEFINITION_BASE_NAME;
use crate::compose::names::FusionTypeNames;
use crate::compose::names::RESOLVER_KIND_BASE_NAME;
use crate::compose::names::SELECTION_SCALAR_BASE_NAME;
use crate::compose::names::SELECTION_SET_SCALAR_BASE_NAME;
use crate::compose::names::TYPE_NAME_SCALAR_BASE_NAME;
use crate::compose::names::TYPE_SCALAR_BASE_NAME;
use crate::compose::names::URI_SCALAR_BASE_NAME;
use crate::error::FusionError;
use crate::schema::FusionSchema;

pub(crate) const BOOLEAN_SCALAR_NAME: Name = name!("Boolean");
pub(crate) const INT_SCALAR_NAME: Name = name!("Int");
pub(crate) const STRING_SCALAR_NAME: Name = name!("String");

pub(crate) const NAME_FIELD_NAME: Name = name!("name");
pub(crate) const TYPE_FIELD_NAME: Name = name!("type");

pub(crate) const FETCH_RESOLVER_KIND: Name = name!("FETCH");
pub(crate) const BATCH_RESOLVER_KIND: Name = name!("BATCH");
pub(crate) const SUBSCRIBE_RESOLVER_KIND: Name = name!("SUBSCRIBE");

/// Names of the types a composition run synthesized, and the lookup used to bind directive
/// templates to them.
#[derive(Debug, Clone)]
pub struct AuxiliaryTypes {
    pub boolean: Name,
    pub int: Name,
    pub string: Name,
    pub selection: Name,
    pub selection_set: Name,
    pub type_name: Name,
    pub type_: Name,
    pub uri: Name,
    pub argument_definition: Name,
    pub resolver_kind: Name,
    /// Base (placeholder) name to registered name.
    pub(crate) by_base_name: IndexMap<Name, Name>,
}

/// Ensures the built-in `Boolean`, `Int` and `String` scalars exist and inserts every fusion auxiliary type into `schema`.
pub(crate) fn synthesize(
    schema: &mut FusionSchema,
    names: &FusionTypeNames,
) -> Result<AuxiliaryTypes, FusionError> {
    for scalar in [BOOLEAN_SCALAR_NAME, INT_SCALAR_NAME, STRING_SCALAR_NAME] {
        schema.get_or_insert_scalar(scalar)?;
    }

    for scalar in [
        &names.selection_scalar,
        &names.selection_set_scalar,
        &names.type_name_scalar,
        &names.type_scalar,
        &names.uri_scalar,
    ] {
        schema.insert_fusion_type(scalar_type(scalar.clone()));
    }
    schema.insert_fusion_type(argument_definition_type(
        names.argument_definition.clone(),
        &names.type_name_scalar,
        &names.type_scalar,
    ));
    schema.insert_fusion_type(resolver_kind_type(names.resolver_kind.clone()));

    let mut by_base_name = IndexMap::default();
    for (base_name, name) in [
        (BOOLEAN_SCALAR_NAME, BOOLEAN_SCALAR_NAME),
        (INT_SCALAR_NAME, INT_SCALAR_NAME),
        (STRING_SCALAR_NAME, STRING_SCALAR_NAME),
        (SELECTION_SCALAR_BASE_NAME, names.selection_scalar.clone()),
        (
            SELECTION_SET_SCALAR_BASE_NAME,
            names.selection_set_scalar.clone(),
        ),
        (TYPE_NAME_SCALAR_BASE_NAME, names.type_name_scalar.clone()),
        (TYPE_SCALAR_BASE_NAME, names.type_scalar.clone()),
        (URI_SCALAR_BASE_NAME, names.uri_scalar.clone()),
        (
            ARGUMENT_DEFINITION_BASE_NAME,
            names.argument_definition.clone(),
        ),
        (RESOLVER_KIND_BASE_NAME, names.resolver_kind.clone()),
    ] {
        by_base_name.insert(base_name, name);
    }

    Ok(AuxiliaryTypes {
        boolean: BOOLEAN_SCALAR_NAME,
        int: INT_SCALAR_NAME,
        string: STRING_SCALAR_NAME,
        selection: names.selection_scalar.clone(),
        selection_set: names.selection_set_scalar.clone(),
        type_name: names.type_name_scalar.clone(),
        type_: names.type_scalar.clone(),
        uri: names.uri_scalar.clone(),
        argument_definition: names.argument_definition.clone(),
        resolver_kind: names.resolver_kind.clone(),
        by_base_name,
    })
}

fn scalar_type(name: Name) -> ExtendedType {
    ExtendedType::Scalar(Node::new(ScalarType {
        description: None,
        name,
        directives: Default::default(),
    }))
}

/// input ArgumentDefinition {
///   name: TypeName!
///   type: Type!
/// }
fn argument_definition_type(name: Name, type_name: &Name, type_: &Name) -> ExtendedType {
    let mut fields = IndexMap::default();
    for (field_name, ty) in [(NAME_FIELD_NAME, type_name), (TYPE_FIELD_NAME, type_)] {
        fields.insert(
            field_name.clone(),
            Component::new(InputValueDefinition {
                description: None,
                name: field_name,
                ty: Node::new(Type::Named(ty.clone()).non_null()),
                default_value: None,
                directives: Default::default(),
            }),
        );
    }
    ExtendedType::InputObject(Node::new(InputObjectType {
        description: None,
        name,
        directives: Default::default(),
        fields,
    }))
}

/// enum ResolverKind {
///   FETCH
///   BATCH
///   SUBSCRIBE
/// }
fn resolver_kind_type(name: Name) -> ExtendedType {
    let mut values = IndexMap::default();
    for value in [
        FETCH_RESOLVER_KIND,
        BATCH_RESOLVER_KIND,
        SUBSCRIBE_RESOLVER_KIND,
    ] {
        values.insert(
            value.clone(),
            Component::new(EnumValueDefinition {
                description: None,
                value,
                directives: Default::default(),
            }),
        );
    }
    ExtendedType::Enum(Node::new(EnumType {
        description: None,
        name,
        directives: Default::default(),
        values,
    }))
}
