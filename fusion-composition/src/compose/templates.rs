//! Directive templates authored against placeholder type names.
//!
//! A template refers to fusion types by their base name (`TypeName`, `Selection`, ...). The
//! [`DirectiveRewriter`](crate::compose::rewrite::DirectiveRewriter) binds those placeholders
//! to the names registered by a composition run, so one template serves every prefix.
use apollo_compiler::Name;
use apollo_compiler::Node;
use apollo_compiler::name;
use apollo_compiler::schema::DirectiveDefinition;
use apollo_compiler::schema::DirectiveLocation;
use apollo_compiler::schema::InputValueDefinition;
use apollo_compiler::schema::Type;
use apollo_compiler::ty;

use crate::schema::TypeSystemMember;

/// Source of the directive templates that composition re-exports under its naming scheme.
pub trait DirectiveTemplates {
    fn declare(&self) -> TypeSystemMember;
    fn is(&self) -> TypeSystemMember;
    fn remove(&self) -> TypeSystemMember;
    fn rename(&self) -> TypeSystemMember;
    fn require(&self) -> TypeSystemMember;
    /// Also used for `@source` and `@transport`.
    fn resolve(&self) -> TypeSystemMember;
}

/// The templates that ship with this crate.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinDirectiveTemplates;

impl DirectiveTemplates for BuiltinDirectiveTemplates {
    /// directive @declare(
    ///   variable: TypeName!
    ///   select: Selection!
    ///   from: TypeName
    /// ) repeatable on FIELD_DEFINITION
    fn declare(&self) -> TypeSystemMember {
        template(
            name!("declare"),
            vec![
                argument(name!("variable"), ty!(TypeName!)),
                argument(name!("select"), ty!(Selection!)),
                argument(name!("from"), ty!(TypeName)),
            ],
            vec![DirectiveLocation::FieldDefinition],
            true,
        )
    }

    /// directive @is(field: Selection, coordinate: String) on ARGUMENT_DEFINITION
    fn is(&self) -> TypeSystemMember {
        template(
            name!("is"),
            vec![
                argument(name!("field"), ty!(Selection)),
                argument(name!("coordinate"), ty!(String)),
            ],
            vec![DirectiveLocation::ArgumentDefinition],
            false,
        )
    }

    /// directive @remove(coordinate: String!) repeatable on SCHEMA
    fn remove(&self) -> TypeSystemMember {
        template(
            name!("remove"),
            vec![argument(name!("coordinate"), ty!(String!))],
            vec![DirectiveLocation::Schema],
            true,
        )
    }

    /// directive @rename(coordinate: String!, newName: TypeName!) repeatable on SCHEMA
    fn rename(&self) -> TypeSystemMember {
        template(
            name!("rename"),
            vec![
                argument(name!("coordinate"), ty!(String!)),
                argument(name!("newName"), ty!(TypeName!)),
            ],
            vec![DirectiveLocation::Schema],
            true,
        )
    }

    /// directive @require(field: Selection!) on ARGUMENT_DEFINITION
    fn require(&self) -> TypeSystemMember {
        template(
            name!("require"),
            vec![argument(name!("field"), ty!(Selection!))],
            vec![DirectiveLocation::ArgumentDefinition],
            false,
        )
    }

    /// directive @resolve(select: SelectionSet, from: TypeName) on FIELD_DEFINITION
    fn resolve(&self) -> TypeSystemMember {
        template(
            name!("resolve"),
            vec![
                argument(name!("select"), ty!(SelectionSet)),
                argument(name!("from"), ty!(TypeName)),
            ],
            vec![DirectiveLocation::FieldDefinition],
            false,
        )
    }
}

fn argument(name: Name, ty: Type) -> Node<InputValueDefinition> {
    Node::new(InputValueDefinition {
        description: None,
        name,
        ty: Node::new(ty),
        default_value: None,
        directives: Default::default(),
    })
}

fn template(
    name: Name,
    arguments: Vec<Node<InputValueDefinition>>,
    locations: Vec<DirectiveLocation>,
    repeatable: bool,
) -> TypeSystemMember {
    DirectiveDefinition {
        description: None,
        name,
        arguments,
        repeatable,
        locations,
    }
    .into()
}
