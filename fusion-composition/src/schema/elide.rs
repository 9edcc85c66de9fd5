//! Removal of composition-generated members, for user-facing printing.
use apollo_compiler::Name;
use apollo_compiler::Schema;
use apollo_compiler::ast;
use apollo_compiler::schema;
use apollo_compiler::schema::ExtendedType;
use indexmap::IndexSet;

use super::FusionSchema;

impl FusionSchema {
    /// Returns a copy of the schema without fusion-generated types, fusion-generated directive
    /// definitions, and any application of those directives.
    ///
    /// The result is what schema printers should show to users.
    pub fn without_fusion_members(&self) -> Schema {
        let mut schema = self.schema.clone();
        let directives = &self.fusion_directives;

        schema
            .types
            .retain(|type_name, _| !self.fusion_types.contains(type_name));
        schema
            .directive_definitions
            .retain(|directive_name, _| !directives.contains(directive_name));
        for definition in schema.directive_definitions.values_mut() {
            for argument in &mut definition.make_mut().arguments {
                retain_ast_directives(&mut argument.make_mut().directives, directives);
            }
        }

        retain_schema_directives(
            &mut schema.schema_definition.make_mut().directives,
            directives,
        );
        for ty in schema.types.values_mut() {
            match ty {
                ExtendedType::Scalar(scalar) => {
                    retain_schema_directives(&mut scalar.make_mut().directives, directives);
                }
                ExtendedType::Object(object) => {
                    let object = object.make_mut();
                    retain_schema_directives(&mut object.directives, directives);
                    for field in object.fields.values_mut() {
                        let field = field.make_mut();
                        retain_ast_directives(&mut field.directives, directives);
                        for argument in &mut field.arguments {
                            retain_ast_directives(&mut argument.make_mut().directives, directives);
                        }
                    }
                }
                ExtendedType::Interface(interface) => {
                    let interface = interface.make_mut();
                    retain_schema_directives(&mut interface.directives, directives);
                    for field in interface.fields.values_mut() {
                        let field = field.make_mut();
                        retain_ast_directives(&mut field.directives, directives);
                        for argument in &mut field.arguments {
                            retain_ast_directives(&mut argument.make_mut().directives, directives);
                        }
                    }
                }
                ExtendedType::Union(union_) => {
                    retain_schema_directives(&mut union_.make_mut().directives, directives);
                }
                ExtendedType::Enum(enum_) => {
                    let enum_ = enum_.make_mut();
                    retain_schema_directives(&mut enum_.directives, directives);
                    for value in enum_.values.values_mut() {
                        retain_ast_directives(&mut value.make_mut().directives, directives);
                    }
                }
                ExtendedType::InputObject(input_object) => {
                    let input_object = input_object.make_mut();
                    retain_schema_directives(&mut input_object.directives, directives);
                    for field in input_object.fields.values_mut() {
                        retain_ast_directives(&mut field.make_mut().directives, directives);
                    }
                }
            }
        }
        schema
    }
}

fn retain_schema_directives(list: &mut schema::DirectiveList, removed: &IndexSet<Name>) {
    list.retain(|directive| !removed.contains(&directive.name));
}

fn retain_ast_directives(list: &mut ast::DirectiveList, removed: &IndexSet<Name>) {
    list.retain(|directive| !removed.contains(&directive.name));
}
