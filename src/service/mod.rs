pub mod crud;
pub mod validation;

pub use crud::{CrudStore, PgCrudStore};
pub use validation::RequestValidator;
