//! Phase 1: Collection - component declarations, imports and default exports.
//!
//! One AST pass per file produces a [`FileDeclarations`]. The aggregation
//! phase uses it to decide which declaration each usage site refers to.

pub mod component_collector;
pub mod helpers;
pub mod types;

pub use component_collector::ComponentCollector;
pub use types::*;
