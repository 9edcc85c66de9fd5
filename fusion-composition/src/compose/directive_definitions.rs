use apollo_compiler::Name;
use apollo_compiler::Node;
use apollo_compiler::ast::Argument;
use apollo_compiler::ast::Directive;
use apollo_compiler::ast::Value;
use apollo_compiler::name;
use apollo_compiler::schema::DirectiveDefinition;
use apollo_compiler::schema::DirectiveLocation;
use apollo_compiler::schema::InputValueDefinition;
use apollo_compiler::schema::Type;

use crate::compose::auxiliary_types::AuxiliaryTypes;
use crate::compose::names::FusionTypeNames;
use crate::compose::rewrite::DirectiveRewriter;
use crate::compose::templates::DirectiveTemplates;
use crate::error::FusionError;
use crate::schema::FusionSchema;

pub(crate) const FUSION_SELECT_ARGUMENT_NAME: Name = name!("select");
pub(crate) const FUSION_SUBGRAPH_ARGUMENT_NAME: Name = name!("subgraph");
pub(crate) const FUSION_ARGUMENTS_ARGUMENT_NAME: Name = name!("arguments");
pub(crate) const FUSION_KIND_ARGUMENT_NAME: Name = name!("kind");
pub(crate) const FUSION_NAME_ARGUMENT_NAME: Name = name!("name");
pub(crate) const FUSION_ARGUMENT_ARGUMENT_NAME: Name = name!("argument");
pub(crate) const FUSION_TYPES_ARGUMENT_NAME: Name = name!("types");
pub(crate) const FUSION_PREFIX_ARGUMENT_NAME: Name = name!("prefix");
pub(crate) const FUSION_PREFIX_SELF_ARGUMENT_NAME: Name = name!("prefixSelf");
pub(crate) const FUSION_VERSION_ARGUMENT_NAME: Name = name!("version");

/// The fusion format version recorded on the schema root.
pub const FUSION_FORMAT_VERSION: i32 = 1;

/// Names of the directive definitions registered by a composition run.
#[derive(Debug, Clone)]
pub struct FusionDirectiveDefinitions {
    pub private: Name,
    pub resolver: Name,
    pub variable: Name,
    pub node: Name,
    pub fusion: Name,
    pub declare: Name,
    pub is: Name,
    pub remove: Name,
    pub rename: Name,
    pub require: Name,
    pub resolve: Name,
    pub source: Name,
    pub transport: Name,
}

/// Builds a directive definition, accumulating locations without duplicates.
struct DirectiveDefinitionBuilder {
    definition: DirectiveDefinition,
}

impl DirectiveDefinitionBuilder {
    fn new(name: Name) -> Self {
        Self {
            definition: DirectiveDefinition {
                description: None,
                name,
                arguments: Vec::new(),
                repeatable: false,
                locations: Vec::new(),
            },
        }
    }

    fn argument(mut self, name: Name, ty: Type) -> Self {
        self.definition
            .arguments
            .push(Node::new(InputValueDefinition {
                description: None,
                name,
                ty: Node::new(ty),
                default_value: None,
                directives: Default::default(),
            }));
        self
    }

    fn location(mut self, location: DirectiveLocation) -> Self {
        if !self.definition.locations.contains(&location) {
            self.definition.locations.push(location);
        }
        self
    }

    fn build(self) -> Node<DirectiveDefinition> {
        Node::new(self.definition)
    }
}

fn named(name: &Name) -> Type {
    Type::Named(name.clone())
}

/// Registers every fusion directive definition on `schema` and applies the root `@fusion`
/// directive to the schema definition.
pub(crate) fn register(
    schema: &mut FusionSchema,
    names: &FusionTypeNames,
    types: &AuxiliaryTypes,
    rewriter: &DirectiveRewriter,
    templates: &dyn DirectiveTemplates,
) -> Result<FusionDirectiveDefinitions, FusionError> {
    schema.insert_fusion_directive_definition(private_directive_definition(
        names.private_directive.clone(),
    ));
    schema.insert_fusion_directive_definition(resolver_directive_definition(
        names.resolver_directive.clone(),
        types,
    ));
    schema.insert_fusion_directive_definition(variable_directive_definition(
        names.variable_directive.clone(),
        types,
    ));
    schema.insert_fusion_directive_definition(node_directive_definition(
        names.node_directive.clone(),
        types,
    ));
    register_fusion_directive(schema, names, types);

    for (template, name) in [
        (templates.declare(), &names.declare_directive),
        (templates.is(), &names.is_directive),
        (templates.remove(), &names.remove_directive),
        (templates.rename(), &names.rename_directive),
        (templates.require(), &names.require_directive),
        (templates.resolve(), &names.resolve_directive),
        (templates.resolve(), &names.source_directive),
        (templates.resolve(), &names.transport_directive),
    ] {
        let definition = rewriter.rewrite(template, name.clone())?;
        schema.insert_fusion_directive_definition(definition);
    }

    Ok(FusionDirectiveDefinitions {
        private: names.private_directive.clone(),
        resolver: names.resolver_directive.clone(),
        variable: names.variable_directive.clone(),
        node: names.node_directive.clone(),
        fusion: names.fusion_directive.clone(),
        declare: names.declare_directive.clone(),
        is: names.is_directive.clone(),
        remove: names.remove_directive.clone(),
        rename: names.rename_directive.clone(),
        require: names.require_directive.clone(),
        resolve: names.resolve_directive.clone(),
        source: names.source_directive.clone(),
        transport: names.transport_directive.clone(),
    })
}

/// directive @private on FIELD_DEFINITION
fn private_directive_definition(name: Name) -> Node<DirectiveDefinition> {
    DirectiveDefinitionBuilder::new(name)
        .location(DirectiveLocation::FieldDefinition)
        .build()
}

/// directive @resolver(
///   select: SelectionSet!
///   subgraph: TypeName!
///   arguments: [ArgumentDefinition!]
///   kind: ResolverKind
/// ) on OBJECT
fn resolver_directive_definition(name: Name, types: &AuxiliaryTypes) -> Node<DirectiveDefinition> {
    DirectiveDefinitionBuilder::new(name)
        .location(DirectiveLocation::Object)
        .argument(
            FUSION_SELECT_ARGUMENT_NAME,
            named(&types.selection_set).non_null(),
        )
        .argument(
            FUSION_SUBGRAPH_ARGUMENT_NAME,
            named(&types.type_name).non_null(),
        )
        .argument(
            FUSION_ARGUMENTS_ARGUMENT_NAME,
            named(&types.argument_definition).non_null().list(),
        )
        .argument(FUSION_KIND_ARGUMENT_NAME, named(&types.resolver_kind))
        .build()
}

/// directive @variable(
///   name: TypeName!
///   select: Selection
///   argument: TypeName
///   subgraph: TypeName!
/// ) on OBJECT | FIELD_DEFINITION
fn variable_directive_definition(name: Name, types: &AuxiliaryTypes) -> Node<DirectiveDefinition> {
    DirectiveDefinitionBuilder::new(name)
        .argument(
            FUSION_NAME_ARGUMENT_NAME,
            named(&types.type_name).non_null(),
        )
        .argument(FUSION_SELECT_ARGUMENT_NAME, named(&types.selection))
        .argument(FUSION_ARGUMENT_ARGUMENT_NAME, named(&types.type_name))
        .argument(
            FUSION_SUBGRAPH_ARGUMENT_NAME,
            named(&types.type_name).non_null(),
        )
        .location(DirectiveLocation::Object)
        .location(DirectiveLocation::FieldDefinition)
        .build()
}

/// directive @node(subgraph: TypeName!, types: [TypeName!]!) on SCHEMA
fn node_directive_definition(name: Name, types: &AuxiliaryTypes) -> Node<DirectiveDefinition> {
    DirectiveDefinitionBuilder::new(name)
        .location(DirectiveLocation::Schema)
        .argument(
            FUSION_SUBGRAPH_ARGUMENT_NAME,
            named(&types.type_name).non_null(),
        )
        .argument(
            FUSION_TYPES_ARGUMENT_NAME,
            named(&types.type_name).non_null().list().non_null(),
        )
        .build()
}

/// directive @fusion(prefix: TypeName, prefixSelf: Boolean, version: Int) on SCHEMA
///
/// Registering the definition also applies it to the schema definition, replacing a previous
/// application from an earlier run with the same configuration.
fn register_fusion_directive(
    schema: &mut FusionSchema,
    names: &FusionTypeNames,
    types: &AuxiliaryTypes,
) {
    let definition = DirectiveDefinitionBuilder::new(names.fusion_directive.clone())
        .location(DirectiveLocation::Schema)
        .argument(FUSION_PREFIX_ARGUMENT_NAME, named(&types.type_name))
        .argument(FUSION_PREFIX_SELF_ARGUMENT_NAME, named(&types.boolean))
        .argument(FUSION_VERSION_ARGUMENT_NAME, named(&types.int))
        .build();
    schema.insert_fusion_directive_definition(definition);

    let version = Node::new(Argument {
        name: FUSION_VERSION_ARGUMENT_NAME,
        value: Node::new(Value::Int(FUSION_FORMAT_VERSION.into())),
    });
    let arguments = match names.prefix() {
        None => vec![version],
        Some(prefix) => vec![
            Node::new(Argument {
                name: FUSION_PREFIX_ARGUMENT_NAME,
                value: Node::new(Value::String(prefix.to_owned())),
            }),
            Node::new(Argument {
                name: FUSION_PREFIX_SELF_ARGUMENT_NAME,
                value: Node::new(Value::Boolean(names.config().prefix_self)),
            }),
            version,
        ],
    };
    schema.replace_schema_directive(Directive {
        name: names.fusion_directive.clone(),
        arguments,
    });
}
