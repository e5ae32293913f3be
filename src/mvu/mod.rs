pub mod panel;
pub mod runtime;
