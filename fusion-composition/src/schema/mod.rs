use apollo_compiler::Name;
use apollo_compiler::Node;
use apollo_compiler::Schema;
use apollo_compiler::schema::Component;
use apollo_compiler::schema::Directive;
use apollo_compiler::schema::DirectiveDefinition;
use apollo_compiler::schema::ExtendedType;
use apollo_compiler::schema::ScalarType;
use apollo_compiler::validation::Valid;
use indexmap::IndexSet;

use crate::config::CompositionConfig;
use crate::error::FusionError;
use crate::internal_error;

mod elide;
mod recover;

/// A schema member that a directive template collaborator may hand to the rewriter.
#[derive(Debug, Clone)]
pub enum TypeSystemMember {
    Directive(Node<DirectiveDefinition>),
    Type(ExtendedType),
}

impl TypeSystemMember {
    pub fn name(&self) -> &Name {
        match self {
            TypeSystemMember::Directive(directive) => &directive.name,
            TypeSystemMember::Type(ty) => ty.name(),
        }
    }

    pub(crate) fn kind(&self) -> &'static str {
        match self {
            TypeSystemMember::Directive(_) => "directive definition",
            TypeSystemMember::Type(ExtendedType::Scalar(_)) => "scalar type",
            TypeSystemMember::Type(ExtendedType::Object(_)) => "object type",
            TypeSystemMember::Type(ExtendedType::Interface(_)) => "interface type",
            TypeSystemMember::Type(ExtendedType::Union(_)) => "union type",
            TypeSystemMember::Type(ExtendedType::Enum(_)) => "enum type",
            TypeSystemMember::Type(ExtendedType::InputObject(_)) => "input object type",
        }
    }
}

impl From<DirectiveDefinition> for TypeSystemMember {
    fn from(value: DirectiveDefinition) -> Self {
        TypeSystemMember::Directive(Node::new(value))
    }
}

impl From<Node<DirectiveDefinition>> for TypeSystemMember {
    fn from(value: Node<DirectiveDefinition>) -> Self {
        TypeSystemMember::Directive(value)
    }
}

impl From<ExtendedType> for TypeSystemMember {
    fn from(value: ExtendedType) -> Self {
        TypeSystemMember::Type(value)
    }
}

/// The target schema of fusion composition.
///
/// Besides the wrapped [`Schema`], it records the configuration it was composed with and which
/// of its types and directive definitions were generated by composition rather than authored
/// by a subgraph.
#[derive(Debug, Clone)]
pub struct FusionSchema {
    schema: Schema,
    config: Option<CompositionConfig>,
    fusion_types: IndexSet<Name>,
    fusion_directives: IndexSet<Name>,
}

impl FusionSchema {
    /// Wraps `schema`. A schema that carries a root `@fusion` application from an earlier run
    /// keeps that run's configuration and fusion members.
    pub fn new(schema: Schema) -> Self {
        let mut schema = Self {
            schema,
            config: None,
            fusion_types: Default::default(),
            fusion_directives: Default::default(),
        };
        schema.recover_composition();
        schema
    }

    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    /// Mutable access for attaching directive applications to subgraph-authored members.
    pub fn schema_mut(&mut self) -> &mut Schema {
        &mut self.schema
    }

    /// The configuration recorded by the first composition run, if any.
    pub fn composition_config(&self) -> Option<&CompositionConfig> {
        self.config.as_ref()
    }

    pub fn is_fusion_type(&self, type_name: &Name) -> bool {
        self.fusion_types.contains(type_name)
    }

    pub fn is_fusion_directive(&self, directive_name: &Name) -> bool {
        self.fusion_directives.contains(directive_name)
    }

    pub fn fusion_type_names(&self) -> impl Iterator<Item = &Name> {
        self.fusion_types.iter()
    }

    pub fn fusion_directive_names(&self) -> impl Iterator<Item = &Name> {
        self.fusion_directives.iter()
    }

    pub fn into_inner(self) -> Schema {
        self.schema
    }

    pub fn validate(self) -> Result<Valid<Schema>, FusionError> {
        Ok(self.schema.validate()?)
    }

    pub(crate) fn record_config(&mut self, config: CompositionConfig) {
        self.config = Some(config);
    }

    /// Ensures a scalar named `name` exists, creating a plain scalar definition if the schema has
    /// no type of that name.
    pub(crate) fn get_or_insert_scalar(&mut self, name: Name) -> Result<(), FusionError> {
        match self.schema.types.get(&name) {
            Some(ExtendedType::Scalar(_)) => Ok(()),
            Some(existing) => Err(internal_error!(
                "Expected \"{name}\" to be a scalar type but it is {}",
                TypeSystemMember::Type(existing.clone()).kind()
            )),
            None => {
                self.schema.types.insert(
                    name.clone(),
                    ExtendedType::Scalar(Node::new(ScalarType {
                        description: None,
                        name,
                        directives: Default::default(),
                    })),
                );
                Ok(())
            }
        }
    }

    /// Inserts a composition-generated type, replacing a definition from an earlier run.
    ///
    /// Callers check for authored members of the same name first.
    pub(crate) fn insert_fusion_type(&mut self, ty: ExtendedType) {
        let name = ty.name().clone();
        tracing::trace!(type_name = %name, "registering fusion type");
        self.schema.types.insert(name.clone(), ty);
        self.fusion_types.insert(name);
    }

    /// Inserts a composition-generated directive definition, replacing a definition from an
    /// earlier run.
    pub(crate) fn insert_fusion_directive_definition(
        &mut self,
        definition: Node<DirectiveDefinition>,
    ) {
        let name = definition.name.clone();
        tracing::trace!(directive_name = %name, "registering fusion directive");
        self.schema
            .directive_definitions
            .insert(name.clone(), definition);
        self.fusion_directives.insert(name);
    }

    /// Applies `directive` to the schema definition, replacing every existing application of a
    /// directive with the same name.
    pub(crate) fn replace_schema_directive(&mut self, directive: Directive) {
        let schema_definition = self.schema.schema_definition.make_mut();
        schema_definition
            .directives
            .retain(|existing| existing.name != directive.name);
        schema_definition
            .directives
            .push(Component::new(directive));
    }
}

impl From<Schema> for FusionSchema {
    fn from(schema: Schema) -> Self {
        Self::new(schema)
    }
}
