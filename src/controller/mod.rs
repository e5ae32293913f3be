pub mod panel;
pub mod selection;
