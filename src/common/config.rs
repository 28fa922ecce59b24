use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::geometry::{EdgeInsets, LayoutDirection, WorkspaceSize};

pub fn config_file() -> PathBuf { dirs::home_dir().unwrap().join(".blockwork.toml") }

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
}

#[derive(Serialize, Deserialize, Debug, PartialEq, Clone)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub settings: Settings,
}

#[derive(Serialize, Deserialize, Debug, PartialEq, Clone, Default)]
#[serde(deny_unknown_fields)]
pub struct Settings {
    /// Layout direction of the host UI. Carried here for convenience; the
    /// geometry calls still take it as an explicit parameter.
    #[serde(default)]
    pub layout_direction: LayoutDirection,
    #[serde(default)]
    pub metrics: MetricsSettings,
}

/// Workspace-space layout metrics. Every value here is in workspace units;
/// view units come from deriving a `LayoutConfig` at a scale factor.
#[derive(Serialize, Deserialize, Debug, PartialEq, Clone)]
#[serde(deny_unknown_fields)]
pub struct MetricsSettings {
    /// Corner radius of block outlines.
    #[serde(default = "default_block_corner_radius")]
    pub block_corner_radius: f64,
    /// Stroke width of block outlines.
    #[serde(default = "default_block_line_width")]
    pub block_line_width: f64,
    /// Horizontal space between a block and its neighbours.
    #[serde(default = "default_separation")]
    pub x_separation: f64,
    /// Vertical space between a block and its neighbours.
    #[serde(default = "default_separation")]
    pub y_separation: f64,
    /// Smallest size an editable field may lay out at.
    #[serde(default = "default_field_minimum_size")]
    pub field_minimum_size: WorkspaceSize,
    /// Upper bound for popover editors anchored to a field.
    #[serde(default = "default_popover_maximum_size")]
    pub popover_maximum_size: WorkspaceSize,
    /// Padding between a field's text and its bounding box.
    #[serde(default = "default_field_text_insets")]
    pub field_text_insets: EdgeInsets,
    /// Padding around the workspace's content area.
    #[serde(default)]
    pub workspace_content_insets: EdgeInsets,
}

impl Default for MetricsSettings {
    fn default() -> Self {
        Self {
            block_corner_radius: default_block_corner_radius(),
            block_line_width: default_block_line_width(),
            x_separation: default_separation(),
            y_separation: default_separation(),
            field_minimum_size: default_field_minimum_size(),
            popover_maximum_size: default_popover_maximum_size(),
            field_text_insets: default_field_text_insets(),
            workspace_content_insets: EdgeInsets::ZERO,
        }
    }
}

fn default_block_corner_radius() -> f64 { 8.0 }

fn default_block_line_width() -> f64 { 1.0 }

fn default_separation() -> f64 { 10.0 }

fn default_field_minimum_size() -> WorkspaceSize { WorkspaceSize::new(44.0, 26.0) }

fn default_popover_maximum_size() -> WorkspaceSize { WorkspaceSize::new(248.0, 248.0) }

fn default_field_text_insets() -> EdgeInsets { EdgeInsets::new(4.0, 8.0, 4.0, 8.0) }

fn inset_issues(name: &str, insets: &EdgeInsets, issues: &mut Vec<String>) {
    for (edge, value) in [
        ("top", insets.top),
        ("leading", insets.leading),
        ("bottom", insets.bottom),
        ("trailing", insets.trailing),
    ] {
        if value < 0.0 {
            issues.push(format!("{name}.{edge} must be non-negative, got {value}"));
        }
    }
}

fn clamp_insets(insets: &mut EdgeInsets) -> usize {
    let mut fixes = 0;
    for value in [
        &mut insets.top,
        &mut insets.leading,
        &mut insets.bottom,
        &mut insets.trailing,
    ] {
        if *value < 0.0 {
            *value = 0.0;
            fixes += 1;
        }
    }
    fixes
}

impl MetricsSettings {
    /// Validates the metric values and returns a list of issues found.
    pub fn validate(&self) -> Vec<String> {
        let mut issues = Vec::new();

        for (name, value) in [
            ("block_corner_radius", self.block_corner_radius),
            ("block_line_width", self.block_line_width),
            ("x_separation", self.x_separation),
            ("y_separation", self.y_separation),
        ] {
            if value < 0.0 {
                issues.push(format!("{name} must be non-negative, got {value}"));
            }
        }

        for (name, size) in [
            ("field_minimum_size", self.field_minimum_size),
            ("popover_maximum_size", self.popover_maximum_size),
        ] {
            if size.width < 0.0 || size.height < 0.0 {
                issues.push(format!(
                    "{name} must be non-negative, got {}x{}",
                    size.width, size.height
                ));
            }
        }

        inset_issues("field_text_insets", &self.field_text_insets, &mut issues);
        inset_issues(
            "workspace_content_insets",
            &self.workspace_content_insets,
            &mut issues,
        );

        issues
    }

    /// Attempts to fix metric values automatically.
    /// Returns the number of fixes applied.
    pub fn auto_fix_values(&mut self) -> usize {
        let mut fixes = 0;
        let defaults = MetricsSettings::default();

        if self.block_corner_radius < 0.0 {
            self.block_corner_radius = defaults.block_corner_radius;
            fixes += 1;
        }
        if self.block_line_width < 0.0 {
            self.block_line_width = defaults.block_line_width;
            fixes += 1;
        }
        if self.x_separation < 0.0 {
            self.x_separation = defaults.x_separation;
            fixes += 1;
        }
        if self.y_separation < 0.0 {
            self.y_separation = defaults.y_separation;
            fixes += 1;
        }
        if self.field_minimum_size.width < 0.0 || self.field_minimum_size.height < 0.0 {
            self.field_minimum_size = defaults.field_minimum_size;
            fixes += 1;
        }
        if self.popover_maximum_size.width < 0.0 || self.popover_maximum_size.height < 0.0 {
            self.popover_maximum_size = defaults.popover_maximum_size;
            fixes += 1;
        }

        fixes += clamp_insets(&mut self.field_text_insets);
        fixes += clamp_insets(&mut self.workspace_content_insets);

        fixes
    }
}

impl Settings {
    pub fn validate(&self) -> Vec<String> { self.metrics.validate() }

    pub fn auto_fix_values(&mut self) -> usize { self.metrics.auto_fix_values() }
}

impl Config {
    pub fn read(path: &Path) -> Result<Config, ConfigError> {
        let buf = std::fs::read_to_string(path)?;
        Self::parse(&buf)
    }

    pub fn parse(buf: &str) -> Result<Config, ConfigError> { Ok(toml::from_str(buf)?) }

    pub fn default() -> Config {
        Self::parse(include_str!("../../blockwork.default.toml")).unwrap()
    }

    /// Save the current config to a file.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let toml_string = toml::to_string_pretty(self)?;
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        std::fs::write(path, toml_string.as_bytes())?;

        Ok(())
    }

    /// Validates the entire configuration and returns a list of issues found.
    pub fn validate(&self) -> Vec<String> { self.settings.validate() }

    /// Attempts to fix configuration values automatically.
    /// Returns the number of fixes applied.
    pub fn auto_fix_values(&mut self) -> usize { self.settings.auto_fix_values() }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use test_log::test;

    use super::*;

    #[test]
    fn default_config_parses() {
        let config = Config::default();
        assert!(config.validate().is_empty());
        assert_eq!(config.settings.metrics, MetricsSettings::default());
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let config = Config::parse(
            r#"
            [settings.metrics]
            block_corner_radius = 2.0
        "#,
        )
        .unwrap();

        assert_eq!(config.settings.metrics.block_corner_radius, 2.0);
        assert_eq!(config.settings.metrics.x_separation, 10.0);
        assert_eq!(
            config.settings.metrics.field_text_insets,
            EdgeInsets::new(4.0, 8.0, 4.0, 8.0)
        );
        assert_eq!(config.settings.layout_direction, LayoutDirection::LeftToRight);
    }

    #[test]
    fn layout_direction_parses() {
        let config = Config::parse(
            r#"
            [settings]
            layout_direction = "right_to_left"
        "#,
        )
        .unwrap();

        assert_eq!(config.settings.layout_direction, LayoutDirection::RightToLeft);
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let result = Config::parse(
            r#"
            [settings.metrics]
            block_corner_radios = 2.0
        "#,
        );

        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn validation_reports_and_fixes_negative_metrics() {
        let mut config = Config::default();
        assert!(config.validate().is_empty());

        config.settings.metrics.x_separation = -5.0;
        config.settings.metrics.field_text_insets.leading = -1.0;

        let issues = config.validate();
        assert_eq!(issues.len(), 2);
        assert!(issues[0].contains("x_separation must be non-negative"));
        assert!(issues[1].contains("field_text_insets.leading"));

        let fixes = config.auto_fix_values();
        assert_eq!(fixes, 2);
        assert_eq!(config.settings.metrics.x_separation, 10.0);
        assert_eq!(config.settings.metrics.field_text_insets.leading, 0.0);
        assert!(config.validate().is_empty());
    }

    #[test]
    fn save_and_read_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("blockwork.toml");

        let mut config = Config::default();
        config.settings.metrics.block_corner_radius = 3.5;
        config.settings.layout_direction = LayoutDirection::RightToLeft;
        config.save(&path).unwrap();

        let read_back = Config::read(&path).unwrap();
        assert_eq!(read_back, config);
    }

    #[test]
    fn read_of_missing_file_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = Config::read(&dir.path().join("nope.toml"));
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }
}
