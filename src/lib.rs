pub mod common;
pub mod geometry;
pub mod layout;
pub mod workbench;
