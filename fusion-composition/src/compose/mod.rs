//! Registration of the fusion directive vocabulary on a target schema.
//!
//! A composition run derives [`FusionTypeNames`] from a [`CompositionConfig`], then [`compose`]
//! synthesizes the auxiliary types, registers every directive definition and applies the root
//! `@fusion` directive. The returned [`FusionTypes`] builds directive applications for the merge
//! walker.
//!
//! [`CompositionConfig`]: crate::config::CompositionConfig

use itertools::Itertools;
use tracing::debug;

use crate::error::FusionError;
use crate::error::SingleFusionError;
use crate::schema::FusionSchema;
use crate::utils::logging::snapshot;

pub mod auxiliary_types;
pub mod directive_definitions;
pub mod directives;
pub mod names;
pub mod rewrite;
pub mod templates;

use auxiliary_types::AuxiliaryTypes;
use directive_definitions::FusionDirectiveDefinitions;
use names::FusionTypeNames;
use rewrite::DirectiveRewriter;
use templates::DirectiveTemplates;

/// Everything a composition run registered on its schema.
#[derive(Debug, Clone)]
pub struct FusionTypes {
    names: FusionTypeNames,
    types: AuxiliaryTypes,
    directives: FusionDirectiveDefinitions,
    rewriter: DirectiveRewriter,
}

impl FusionTypes {
    pub fn names(&self) -> &FusionTypeNames {
        &self.names
    }

    pub fn types(&self) -> &AuxiliaryTypes {
        &self.types
    }

    pub fn directives(&self) -> &FusionDirectiveDefinitions {
        &self.directives
    }

    /// The rewriter bound to this run's types, for templates applied after composition.
    pub fn rewriter(&self) -> &DirectiveRewriter {
        &self.rewriter
    }
}

/// Registers the fusion vocabulary named by `names` on `schema`.
///
/// Composing a schema twice with the same configuration replaces every member in place. A
/// schema composed with a different configuration is rejected before anything is changed; the
/// configurations must match exactly, so the same prefix with a different `prefix_self` is a
/// conflict as well. A schema that authors a type or directive under one of the fusion names is
/// also rejected, since composing would overwrite it.
#[cfg_attr(
    feature = "snapshot_tracing",
    tracing::instrument(level = "trace", skip_all, name = "compose")
)]
pub fn compose(
    schema: &mut FusionSchema,
    names: &FusionTypeNames,
    templates: &dyn DirectiveTemplates,
) -> Result<FusionTypes, FusionError> {
    if let Some(existing) = schema.composition_config() {
        if existing != names.config() {
            return Err(SingleFusionError::ConfigurationConflict {
                message: format!(
                    "Schema was already composed with {}, cannot compose it again with {}",
                    describe(existing.prefix(), existing.prefix_self),
                    describe(names.prefix(), names.config().prefix_self),
                ),
            }
            .into());
        }
        debug!("schema already composed with this configuration, re-registering members");
    }
    check_name_collisions(schema, names)?;

    debug!(
        prefix = ?names.prefix(),
        prefix_self = names.config().prefix_self,
        "composing fusion vocabulary"
    );
    snapshot!(names.config(), "composition configuration");

    let types = auxiliary_types::synthesize(schema, names)?;
    let rewriter = DirectiveRewriter::new(types.by_base_name.clone());
    let directives =
        directive_definitions::register(schema, names, &types, &rewriter, templates)?;
    schema.record_config(names.config().clone());

    snapshot!(
        "FusionSchema",
        schema.schema().to_string(),
        "schema with fusion vocabulary"
    );
    debug!(
        types = schema.fusion_type_names().count(),
        directives = schema.fusion_directive_names().count(),
        "fusion vocabulary registered"
    );

    Ok(FusionTypes {
        names: names.clone(),
        types,
        directives,
        rewriter,
    })
}

/// Fails if `schema` defines, outside of an earlier composition, a type or directive that the
/// fusion vocabulary named by `names` would overwrite.
fn check_name_collisions(
    schema: &FusionSchema,
    names: &FusionTypeNames,
) -> Result<(), FusionError> {
    let types = names
        .type_names()
        .into_iter()
        .filter(|name| schema.schema().types.contains_key(*name) && !schema.is_fusion_type(name))
        .map(|name| format!("type \"{name}\""));
    let directives = names
        .directive_names()
        .into_iter()
        .filter(|name| {
            schema.schema().directive_definitions.contains_key(*name)
                && !schema.is_fusion_directive(name)
        })
        .map(|name| format!("directive \"@{name}\""));
    let collisions = types.chain(directives).collect::<Vec<_>>();
    if collisions.is_empty() {
        return Ok(());
    }
    Err(SingleFusionError::ConfigurationConflict {
        message: format!(
            "Schema defines {} which collide with fusion names, compose with a prefix to avoid the collision",
            collisions.iter().join(", ")
        ),
    }
    .into())
}

fn describe(prefix: Option<&str>, prefix_self: bool) -> String {
    match prefix {
        None => "no prefix".to_owned(),
        Some(prefix) => format!("prefix \"{prefix}\" (prefixSelf: {prefix_self})"),
    }
}
