pub mod series;
pub mod svg;
pub mod types;

pub use series::*;
pub use svg::*;
pub use types::*;
