pub mod catalog;
pub mod context;
pub mod field;
pub mod position;
pub mod schema;
pub mod types;

pub use catalog::*;
pub use context::*;
pub use field::*;
pub use position::*;
pub use schema::*;
pub use types::*;
