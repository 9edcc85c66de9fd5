//! Recovery of an earlier composition from the root `@fusion` application.
use apollo_compiler::Schema;
use apollo_compiler::ast::Value;

use super::FusionSchema;
use crate::compose::directive_definitions::FUSION_PREFIX_ARGUMENT_NAME;
use crate::compose::directive_definitions::FUSION_PREFIX_SELF_ARGUMENT_NAME;
use crate::compose::directive_definitions::FUSION_VERSION_ARGUMENT_NAME;
use crate::compose::names::FusionTypeNames;
use crate::config::CompositionConfig;

impl FusionSchema {
    /// Records the configuration of a schema that was composed before it was wrapped, e.g. one
    /// parsed back from printed SDL, and marks the fusion members it already defines.
    pub(super) fn recover_composition(&mut self) {
        let Some(names) = root_fusion_names(&self.schema) else {
            return;
        };
        tracing::debug!(
            prefix = ?names.prefix(),
            prefix_self = names.config().prefix_self,
            "recovered composition from root directive"
        );
        for name in names.type_names() {
            if self.schema.types.contains_key(name) {
                self.fusion_types.insert(name.clone());
            }
        }
        for name in names.directive_names() {
            if self.schema.directive_definitions.contains_key(name) {
                self.fusion_directives.insert(name.clone());
            }
        }
        self.config = Some(names.config().clone());
    }
}

/// The names of the run that applied the root `@fusion` directive of `schema`, if any.
///
/// An application counts when it carries `version` and its name matches the name derived from
/// its own `prefix` and `prefixSelf` arguments.
fn root_fusion_names(schema: &Schema) -> Option<FusionTypeNames> {
    schema
        .schema_definition
        .directives
        .iter()
        .find_map(|directive| {
            directive.specified_argument_by_name(&FUSION_VERSION_ARGUMENT_NAME)?;
            let prefix = match directive
                .specified_argument_by_name(&FUSION_PREFIX_ARGUMENT_NAME)
                .map(|value| &**value)
            {
                Some(Value::String(prefix)) => Some(prefix.as_str()),
                None | Some(Value::Null) => None,
                Some(_) => return None,
            };
            let prefix_self = matches!(
                directive
                    .specified_argument_by_name(&FUSION_PREFIX_SELF_ARGUMENT_NAME)
                    .map(|value| &**value),
                Some(Value::Boolean(true))
            );
            let names = FusionTypeNames::new(&CompositionConfig::new(prefix, prefix_self)).ok()?;
            (directive.name == names.fusion_directive).then_some(names)
        })
}
