//! ## Usage
//!
//! Composes the fusion directive vocabulary into a supergraph schema: the auxiliary scalars,
//! input object and enum that directive arguments are typed with, the directive definitions
//! that describe how each subgraph resolves its part of the graph, and the root `@fusion`
//! directive recording how those members were named.
//!
//! ```rust
//! use apollo_compiler::Schema;
//! use fusion_composition::CompositionConfig;
//! use fusion_composition::FusionSchema;
//! use fusion_composition::compose::compose;
//! use fusion_composition::compose::names::FusionTypeNames;
//! use fusion_composition::compose::templates::BuiltinDirectiveTemplates;
//!
//! let schema = Schema::parse("type Query { me: ID }", "schema.graphql").unwrap();
//! let mut schema = FusionSchema::new(schema);
//! let names = FusionTypeNames::new(&CompositionConfig::with_prefix("billing")).unwrap();
//! let fusion = compose(&mut schema, &names, &BuiltinDirectiveTemplates).unwrap();
//! assert_eq!(fusion.directives().resolver, "billing_resolver");
//! ```

#![warn(
    rustdoc::broken_intra_doc_links,
    unreachable_pub,
    unreachable_patterns,
    unused,
    unused_qualifications,
    dead_code,
    while_true,
    unconditional_panic,
    clippy::all
)]

pub mod compose;
pub mod config;
pub mod error;
pub mod schema;
pub(crate) mod utils;

pub use crate::compose::FusionTypes;
pub use crate::compose::compose;
pub use crate::compose::directives::EntityResolverKind;
pub use crate::config::CompositionConfig;
pub use crate::schema::FusionSchema;
pub use crate::schema::TypeSystemMember;
