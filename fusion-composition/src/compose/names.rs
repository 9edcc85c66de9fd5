use apollo_compiler::Name;
use apollo_compiler::name;

use crate::config::CompositionConfig;
use crate::error::FusionError;
use crate::error::SingleFusionError;

pub(crate) const SELECTION_SCALAR_BASE_NAME: Name = name!("Selection");
pub(crate) const SELECTION_SET_SCALAR_BASE_NAME: Name = name!("SelectionSet");
pub(crate) const TYPE_NAME_SCALAR_BASE_NAME: Name = name!("TypeName");
pub(crate) const TYPE_SCALAR_BASE_NAME: Name = name!("Type");
pub(crate) const URI_SCALAR_BASE_NAME: Name = name!("Uri");
pub(crate) const ARGUMENT_DEFINITION_BASE_NAME: Name = name!("ArgumentDefinition");
pub(crate) const RESOLVER_KIND_BASE_NAME: Name = name!("ResolverKind");

pub(crate) const PRIVATE_DIRECTIVE_BASE_NAME: Name = name!("private");
pub(crate) const RESOLVER_DIRECTIVE_BASE_NAME: Name = name!("resolver");
pub(crate) const VARIABLE_DIRECTIVE_BASE_NAME: Name = name!("variable");
pub(crate) const NODE_DIRECTIVE_BASE_NAME: Name = name!("node");
pub(crate) const FUSION_DIRECTIVE_BASE_NAME: Name = name!("fusion");
pub(crate) const DECLARE_DIRECTIVE_BASE_NAME: Name = name!("declare");
pub(crate) const IS_DIRECTIVE_BASE_NAME: Name = name!("is");
pub(crate) const REMOVE_DIRECTIVE_BASE_NAME: Name = name!("remove");
pub(crate) const RENAME_DIRECTIVE_BASE_NAME: Name = name!("rename");
pub(crate) const REQUIRE_DIRECTIVE_BASE_NAME: Name = name!("require");
pub(crate) const RESOLVE_DIRECTIVE_BASE_NAME: Name = name!("resolve");
pub(crate) const SOURCE_DIRECTIVE_BASE_NAME: Name = name!("source");
pub(crate) const TRANSPORT_DIRECTIVE_BASE_NAME: Name = name!("transport");

/// The concrete name of every fusion type and directive for one composition run.
///
/// Without a prefix every member keeps its base name. With a prefix `p`, every member is named
/// `p_<base>`, except the root `@fusion` directive which is only prefixed when `prefix_self` is
/// set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FusionTypeNames {
    config: CompositionConfig,
    pub selection_scalar: Name,
    pub selection_set_scalar: Name,
    pub type_name_scalar: Name,
    pub type_scalar: Name,
    pub uri_scalar: Name,
    pub argument_definition: Name,
    pub resolver_kind: Name,
    pub private_directive: Name,
    pub resolver_directive: Name,
    pub variable_directive: Name,
    pub node_directive: Name,
    pub fusion_directive: Name,
    pub declare_directive: Name,
    pub is_directive: Name,
    pub remove_directive: Name,
    pub rename_directive: Name,
    pub require_directive: Name,
    pub resolve_directive: Name,
    pub source_directive: Name,
    pub transport_directive: Name,
}

impl FusionTypeNames {
    pub fn new(config: &CompositionConfig) -> Result<Self, FusionError> {
        let config = config.clone().normalized();
        let prefix = match config.prefix() {
            Some(prefix) => Some(Name::new(prefix).map_err(|err| {
                SingleFusionError::InvalidArgument {
                    message: format!(
                        "Invalid fusion prefix \"{}\": the prefix must be a valid GraphQL name",
                        err.name
                    ),
                }
            })?),
            None => None,
        };
        let prefixed = |base: Name| -> Result<Name, FusionError> {
            match &prefix {
                // Both sides are `Name`s and we just add a valid character in between.
                Some(prefix) => Ok(Name::new(&format!("{prefix}_{base}"))?),
                None => Ok(base),
            }
        };
        let fusion_directive = if config.prefix_self {
            prefixed(FUSION_DIRECTIVE_BASE_NAME)?
        } else {
            FUSION_DIRECTIVE_BASE_NAME
        };

        Ok(Self {
            selection_scalar: prefixed(SELECTION_SCALAR_BASE_NAME)?,
            selection_set_scalar: prefixed(SELECTION_SET_SCALAR_BASE_NAME)?,
            type_name_scalar: prefixed(TYPE_NAME_SCALAR_BASE_NAME)?,
            type_scalar: prefixed(TYPE_SCALAR_BASE_NAME)?,
            uri_scalar: prefixed(URI_SCALAR_BASE_NAME)?,
            argument_definition: prefixed(ARGUMENT_DEFINITION_BASE_NAME)?,
            resolver_kind: prefixed(RESOLVER_KIND_BASE_NAME)?,
            private_directive: prefixed(PRIVATE_DIRECTIVE_BASE_NAME)?,
            resolver_directive: prefixed(RESOLVER_DIRECTIVE_BASE_NAME)?,
            variable_directive: prefixed(VARIABLE_DIRECTIVE_BASE_NAME)?,
            node_directive: prefixed(NODE_DIRECTIVE_BASE_NAME)?,
            fusion_directive,
            declare_directive: prefixed(DECLARE_DIRECTIVE_BASE_NAME)?,
            is_directive: prefixed(IS_DIRECTIVE_BASE_NAME)?,
            remove_directive: prefixed(REMOVE_DIRECTIVE_BASE_NAME)?,
            rename_directive: prefixed(RENAME_DIRECTIVE_BASE_NAME)?,
            require_directive: prefixed(REQUIRE_DIRECTIVE_BASE_NAME)?,
            resolve_directive: prefixed(RESOLVE_DIRECTIVE_BASE_NAME)?,
            source_directive: prefixed(SOURCE_DIRECTIVE_BASE_NAME)?,
            transport_directive: prefixed(TRANSPORT_DIRECTIVE_BASE_NAME)?,
            config,
        })
    }

    /// The normalized configuration these names were derived from.
    pub fn config(&self) -> &CompositionConfig {
        &self.config
    }

    pub fn prefix(&self) -> Option<&str> {
        self.config.prefix()
    }

    pub fn type_names(&self) -> [&Name; 7] {
        [
            &self.selection_scalar,
            &self.selection_set_scalar,
            &self.type_name_scalar,
            &self.type_scalar,
            &self.uri_scalar,
            &self.argument_definition,
            &self.resolver_kind,
        ]
    }

    pub fn directive_names(&self) -> [&Name; 13] {
        [
            &self.private_directive,
            &self.resolver_directive,
            &self.variable_directive,
            &self.node_directive,
            &self.fusion_directive,
            &self.declare_directive,
            &self.is_directive,
            &self.remove_directive,
            &self.rename_directive,
            &self.require_directive,
            &self.resolve_directive,
            &self.source_directive,
            &self.transport_directive,
        ]
    }

    pub fn is_fusion_type(&self, name: &str) -> bool {
        self.type_names().iter().any(|type_name| *type_name == name)
    }

    pub fn is_fusion_directive(&self, name: &str) -> bool {
        self.directive_names()
            .iter()
            .any(|directive_name| *directive_name == name)
    }
}
