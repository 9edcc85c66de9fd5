use std::fmt;
use std::str::FromStr;

use apollo_compiler::Name;
use apollo_compiler::Node;
use apollo_compiler::ast::Argument;
use apollo_compiler::ast::Directive;
use apollo_compiler::ast::Field;
use apollo_compiler::ast::Selection;
use apollo_compiler::ast::Value;
use apollo_compiler::collections::IndexMap;
use apollo_compiler::schema::ObjectType;
use apollo_compiler::schema::Type;
use itertools::Itertools;

use crate::compose::FusionTypes;
use crate::compose::auxiliary_types::BATCH_RESOLVER_KIND;
use crate::compose::auxiliary_types::FETCH_RESOLVER_KIND;
use crate::compose::auxiliary_types::NAME_FIELD_NAME;
use crate::compose::auxiliary_types::SUBSCRIBE_RESOLVER_KIND;
use crate::compose::auxiliary_types::TYPE_FIELD_NAME;
use crate::compose::directive_definitions::FUSION_ARGUMENT_ARGUMENT_NAME;
use crate::compose::directive_definitions::FUSION_ARGUMENTS_ARGUMENT_NAME;
use crate::compose::directive_definitions::FUSION_KIND_ARGUMENT_NAME;
use crate::compose::directive_definitions::FUSION_NAME_ARGUMENT_NAME;
use crate::compose::directive_definitions::FUSION_SELECT_ARGUMENT_NAME;
use crate::compose::directive_definitions::FUSION_SUBGRAPH_ARGUMENT_NAME;
use crate::compose::directive_definitions::FUSION_TYPES_ARGUMENT_NAME;
use crate::error::FusionError;

/// How a subgraph resolves an entity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum EntityResolverKind {
    /// One lookup per entity. This is the default and is never written out.
    #[default]
    Single,
    /// One lookup for a batch of entities.
    Batch,
    /// A subscription stream.
    Subscribe,
}

impl EntityResolverKind {
    /// The `ResolverKind` enum value of this kind.
    pub fn enum_value(self) -> Name {
        match self {
            EntityResolverKind::Single => FETCH_RESOLVER_KIND,
            EntityResolverKind::Batch => BATCH_RESOLVER_KIND,
            EntityResolverKind::Subscribe => SUBSCRIBE_RESOLVER_KIND,
        }
    }

    /// Reads a `kind:` argument value.
    pub fn from_value(value: &Value) -> Result<Self, FusionError> {
        match value {
            Value::Enum(value) => value.parse(),
            Value::String(value) => value.parse(),
            _ => Err(FusionError::not_supported(format!(
                "Resolver kind must be an enum value, found `{value}`"
            ))),
        }
    }
}

impl FromStr for EntityResolverKind {
    type Err = FusionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "FETCH" => Ok(EntityResolverKind::Single),
            "BATCH" => Ok(EntityResolverKind::Batch),
            "SUBSCRIBE" => Ok(EntityResolverKind::Subscribe),
            _ => Err(FusionError::not_supported(format!(
                "Unsupported resolver kind \"{s}\""
            ))),
        }
    }
}

impl fmt::Display for EntityResolverKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.enum_value().as_str())
    }
}

fn argument(name: Name, value: Value) -> Node<Argument> {
    Node::new(Argument {
        name,
        value: Node::new(value),
    })
}

fn string(value: impl Into<String>) -> Value {
    Value::String(value.into())
}

/// Serializes a selection set on a single line, e.g. `{ id name }`.
pub(crate) fn serialize_selection_set(selections: &[Selection]) -> String {
    if selections.is_empty() {
        return "{ }".to_owned();
    }
    format!(
        "{{ {} }}",
        selections
            .iter()
            .map(|selection| selection.serialize().no_indent().to_string())
            .join(" ")
    )
}

impl FusionTypes {
    /// `@variable` that selects the variable value from a field of the parent.
    pub fn variable_directive_from_field(
        &self,
        subgraph: &str,
        variable: &str,
        select: &Field,
    ) -> Directive {
        Directive {
            name: self.directives.variable.clone(),
            arguments: vec![
                argument(FUSION_SUBGRAPH_ARGUMENT_NAME, string(subgraph)),
                argument(FUSION_NAME_ARGUMENT_NAME, string(variable)),
                argument(
                    FUSION_SELECT_ARGUMENT_NAME,
                    string(select.serialize().no_indent().to_string()),
                ),
            ],
        }
    }

    /// `@variable` that binds the variable to a field argument.
    pub fn variable_directive_from_argument(
        &self,
        subgraph: &str,
        variable: &str,
        argument_name: &str,
    ) -> Directive {
        Directive {
            name: self.directives.variable.clone(),
            arguments: vec![
                argument(FUSION_SUBGRAPH_ARGUMENT_NAME, string(subgraph)),
                argument(FUSION_NAME_ARGUMENT_NAME, string(variable)),
                argument(FUSION_ARGUMENT_ARGUMENT_NAME, string(argument_name)),
            ],
        }
    }

    pub fn private_directive(&self) -> Directive {
        Directive {
            name: self.directives.private.clone(),
            arguments: Vec::new(),
        }
    }

    /// `@resolver` for a subgraph lookup.
    ///
    /// `arguments` lists the arguments the lookup is called with, in order. The `kind:` argument
    /// is only written for [`EntityResolverKind::Batch`] and [`EntityResolverKind::Subscribe`].
    pub fn resolver_directive(
        &self,
        subgraph: &str,
        select: &[Selection],
        arguments: &IndexMap<Name, Type>,
        kind: EntityResolverKind,
    ) -> Directive {
        let mut directive = Directive {
            name: self.directives.resolver.clone(),
            arguments: vec![
                argument(FUSION_SUBGRAPH_ARGUMENT_NAME, string(subgraph)),
                argument(
                    FUSION_SELECT_ARGUMENT_NAME,
                    string(serialize_selection_set(select)),
                ),
            ],
        };

        if !arguments.is_empty() {
            let argument_definitions = arguments
                .iter()
                .map(|(name, ty)| {
                    Node::new(Value::Object(vec![
                        (NAME_FIELD_NAME, Node::new(string(name.as_str()))),
                        (TYPE_FIELD_NAME, Node::new(string(ty.to_string()))),
                    ]))
                })
                .collect();
            directive.arguments.push(argument(
                FUSION_ARGUMENTS_ARGUMENT_NAME,
                Value::List(argument_definitions),
            ));
        }

        match kind {
            EntityResolverKind::Single => {}
            EntityResolverKind::Batch | EntityResolverKind::Subscribe => {
                directive.arguments.push(argument(
                    FUSION_KIND_ARGUMENT_NAME,
                    Value::Enum(kind.enum_value()),
                ));
            }
        }

        directive
    }

    /// Reads the kind of a `@resolver` application; no `kind:` argument means
    /// [`EntityResolverKind::Single`].
    pub fn resolver_kind_of(
        &self,
        directive: &Directive,
    ) -> Result<EntityResolverKind, FusionError> {
        if directive.name != self.directives.resolver {
            return Err(FusionError::not_supported(format!(
                "Expected a @{} directive, found @{}",
                self.directives.resolver, directive.name
            )));
        }
        directive
            .specified_argument_by_name(&FUSION_KIND_ARGUMENT_NAME)
            .map(|value| EntityResolverKind::from_value(value))
            .transpose()
            .map(Option::unwrap_or_default)
    }

    /// `@node` listing the entity types a subgraph can resolve by id, in the given order.
    pub fn node_directive<'a>(
        &self,
        subgraph: &str,
        types: impl IntoIterator<Item = &'a Node<ObjectType>>,
    ) -> Directive {
        let types = types
            .into_iter()
            .map(|ty| Node::new(string(ty.name.as_str())))
            .collect();
        Directive {
            name: self.directives.node.clone(),
            arguments: vec![
                argument(FUSION_SUBGRAPH_ARGUMENT_NAME, string(subgraph)),
                argument(FUSION_TYPES_ARGUMENT_NAME, Value::List(types)),
            ],
        }
    }
}
