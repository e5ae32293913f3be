pub mod chart;
pub mod index;
pub mod panel;
