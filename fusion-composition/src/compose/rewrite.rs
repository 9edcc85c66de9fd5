use apollo_compiler::Name;
use apollo_compiler::Node;
use apollo_compiler::collections::IndexMap;
use apollo_compiler::schema::DirectiveDefinition;
use apollo_compiler::schema::Type;

use crate::error::FusionError;
use crate::internal_error;
use crate::schema::TypeSystemMember;

/// Binds directive templates to the types registered by one composition run.
#[derive(Debug, Clone)]
pub struct DirectiveRewriter {
    types: IndexMap<Name, Name>,
}

impl DirectiveRewriter {
    /// `types` maps each placeholder name a template may use to the registered type name.
    pub fn new(types: IndexMap<Name, Name>) -> Self {
        Self { types }
    }

    /// Renames the directive definition in `member` to `name` and replaces the named type of each
    /// of its arguments, keeping list and non-null wrapping.
    ///
    /// Only directive definitions can be rewritten.
    pub fn rewrite(
        &self,
        member: TypeSystemMember,
        name: Name,
    ) -> Result<Node<DirectiveDefinition>, FusionError> {
        match member {
            TypeSystemMember::Directive(mut definition) => {
                let directive = definition.make_mut();
                directive.name = name;
                for argument in &mut directive.arguments {
                    let argument = argument.make_mut();
                    let ty = self.replace_named_type(&argument.ty, &directive.name)?;
                    argument.ty = Node::new(ty);
                }
                Ok(definition)
            }
            TypeSystemMember::Type(_) => Err(FusionError::not_supported(format!(
                "Cannot rewrite {} \"{}\": only directive definitions can be rewritten",
                member.kind(),
                member.name(),
            ))),
        }
    }

    fn replace_named_type(&self, ty: &Type, directive_name: &Name) -> Result<Type, FusionError> {
        Ok(match ty {
            Type::Named(name) => Type::Named(self.lookup(name, directive_name)?),
            Type::NonNullNamed(name) => Type::NonNullNamed(self.lookup(name, directive_name)?),
            Type::List(inner) => Type::List(Box::new(
                self.replace_named_type(inner, directive_name)?,
            )),
            Type::NonNullList(inner) => Type::NonNullList(Box::new(
                self.replace_named_type(inner, directive_name)?,
            )),
        })
    }

    fn lookup(&self, placeholder: &Name, directive_name: &Name) -> Result<Name, FusionError> {
        self.types.get(placeholder).cloned().ok_or_else(|| {
            internal_error!(
                "Directive template \"@{directive_name}\" references type \"{placeholder}\" which is not registered in this composition"
            )
        })
    }
}
