pub mod bar;
pub mod panel;
