pub mod config;

pub use config::{ConfigEdgeInsets, ConfigSize, ConfigUnit, LayoutConfig};
