//! SQL text for schema creation and the CRUD statements.

mod statements;
pub use statements::*;
