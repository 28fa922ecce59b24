use tracing::debug;

use crate::common::config::MetricsSettings;
use crate::geometry::{EdgeInsets, ViewSize, WorkspaceSize, assert_positive_scale};

/// A unit value held in both the workspace and view coordinate systems.
///
/// The view value is derived once at construction and never updated. When the
/// scale factor changes, the owner constructs a fresh value; anything still
/// holding the old one keeps a consistent snapshot of the old factor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConfigUnit {
    workspace_unit: f64,
    view_unit: f64,
}

impl ConfigUnit {
    pub const ZERO: ConfigUnit = ConfigUnit {
        workspace_unit: 0.0,
        view_unit: 0.0,
    };

    /// `scale_factor` must be positive.
    pub fn new(workspace_unit: f64, scale_factor: f64) -> Self {
        assert_positive_scale(scale_factor);
        Self {
            workspace_unit,
            view_unit: workspace_unit * scale_factor,
        }
    }

    pub fn workspace_unit(&self) -> f64 { self.workspace_unit }

    pub fn view_unit(&self) -> f64 { self.view_unit }
}

/// A size held in both coordinate systems, scaled per dimension.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConfigSize {
    workspace_size: WorkspaceSize,
    view_size: ViewSize,
}

impl ConfigSize {
    pub const ZERO: ConfigSize = ConfigSize {
        workspace_size: WorkspaceSize::ZERO,
        view_size: ViewSize::ZERO,
    };

    /// `scale_factor` must be positive.
    pub fn new(workspace_width: f64, workspace_height: f64, scale_factor: f64) -> Self {
        Self::from_workspace_size(
            WorkspaceSize::new(workspace_width, workspace_height),
            scale_factor,
        )
    }

    /// `scale_factor` must be positive.
    pub fn from_workspace_size(workspace_size: WorkspaceSize, scale_factor: f64) -> Self {
        Self {
            workspace_size,
            view_size: workspace_size.to_view(scale_factor),
        }
    }

    pub fn workspace_size(&self) -> WorkspaceSize { self.workspace_size }

    pub fn view_size(&self) -> ViewSize { self.view_size }
}

/// Edge insets held in both coordinate systems, scaled per edge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConfigEdgeInsets {
    workspace_insets: EdgeInsets,
    view_insets: EdgeInsets,
}

impl ConfigEdgeInsets {
    pub const ZERO: ConfigEdgeInsets = ConfigEdgeInsets {
        workspace_insets: EdgeInsets::ZERO,
        view_insets: EdgeInsets::ZERO,
    };

    /// `scale_factor` must be positive.
    pub fn new(top: f64, leading: f64, bottom: f64, trailing: f64, scale_factor: f64) -> Self {
        Self::from_workspace_insets(EdgeInsets::new(top, leading, bottom, trailing), scale_factor)
    }

    /// `scale_factor` must be positive.
    pub fn from_workspace_insets(workspace_insets: EdgeInsets, scale_factor: f64) -> Self {
        Self {
            workspace_insets,
            view_insets: workspace_insets.scaled(scale_factor),
        }
    }

    pub fn workspace_insets(&self) -> EdgeInsets { self.workspace_insets }

    pub fn view_insets(&self) -> EdgeInsets { self.view_insets }
}

/// Every derived metric the workbench lays out with, at one scale factor.
///
/// Values are snapshots, not live bindings. When the rendering engine's scale
/// factor moves, the owner calls [`LayoutConfig::rescale`] and swaps the whole
/// set; values read from the old set keep reporting the old factor's view
/// units.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutConfig {
    scale_factor: f64,
    /// Corner radius of block outlines.
    pub block_corner_radius: ConfigUnit,
    /// Stroke width of block outlines.
    pub block_line_width: ConfigUnit,
    /// Horizontal space between a block and its neighbours.
    pub x_separation: ConfigUnit,
    /// Vertical space between a block and its neighbours.
    pub y_separation: ConfigUnit,
    /// Smallest size an editable field may lay out at.
    pub field_minimum_size: ConfigSize,
    /// Upper bound for popover editors anchored to a field.
    pub popover_maximum_size: ConfigSize,
    /// Padding between a field's text and its bounding box.
    pub field_text_insets: ConfigEdgeInsets,
    /// Padding around the workspace's content area.
    pub workspace_content_insets: ConfigEdgeInsets,
}

impl LayoutConfig {
    /// Derives the full configuration set from workspace-space metrics.
    /// `scale_factor` must be positive.
    pub fn from_settings(metrics: &MetricsSettings, scale_factor: f64) -> Self {
        debug!(scale_factor, "building layout config");
        Self {
            scale_factor,
            block_corner_radius: ConfigUnit::new(metrics.block_corner_radius, scale_factor),
            block_line_width: ConfigUnit::new(metrics.block_line_width, scale_factor),
            x_separation: ConfigUnit::new(metrics.x_separation, scale_factor),
            y_separation: ConfigUnit::new(metrics.y_separation, scale_factor),
            field_minimum_size: ConfigSize::from_workspace_size(
                metrics.field_minimum_size,
                scale_factor,
            ),
            popover_maximum_size: ConfigSize::from_workspace_size(
                metrics.popover_maximum_size,
                scale_factor,
            ),
            field_text_insets: ConfigEdgeInsets::from_workspace_insets(
                metrics.field_text_insets,
                scale_factor,
            ),
            workspace_content_insets: ConfigEdgeInsets::from_workspace_insets(
                metrics.workspace_content_insets,
                scale_factor,
            ),
        }
    }

    /// Rebuilds every value from its retained workspace-space measurement at
    /// a new scale factor. Values handed out before the rebuild are stale and
    /// keep their old view units.
    pub fn rescale(&self, scale_factor: f64) -> Self {
        debug!(
            old = self.scale_factor,
            new = scale_factor,
            "rescaling layout config"
        );
        Self {
            scale_factor,
            block_corner_radius: ConfigUnit::new(
                self.block_corner_radius.workspace_unit(),
                scale_factor,
            ),
            block_line_width: ConfigUnit::new(
                self.block_line_width.workspace_unit(),
                scale_factor,
            ),
            x_separation: ConfigUnit::new(self.x_separation.workspace_unit(), scale_factor),
            y_separation: ConfigUnit::new(self.y_separation.workspace_unit(), scale_factor),
            field_minimum_size: ConfigSize::from_workspace_size(
                self.field_minimum_size.workspace_size(),
                scale_factor,
            ),
            popover_maximum_size: ConfigSize::from_workspace_size(
                self.popover_maximum_size.workspace_size(),
                scale_factor,
            ),
            field_text_insets: ConfigEdgeInsets::from_workspace_insets(
                self.field_text_insets.workspace_insets(),
                scale_factor,
            ),
            workspace_content_insets: ConfigEdgeInsets::from_workspace_insets(
                self.workspace_content_insets.workspace_insets(),
                scale_factor,
            ),
        }
    }

    /// The scale factor this set was derived at.
    pub fn scale_factor(&self) -> f64 { self.scale_factor }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use test_log::test;

    use super::*;
    use crate::geometry::LayoutDirection;

    #[test]
    fn unit_derives_view_value_at_construction() {
        let unit = ConfigUnit::new(10.0, 2.0);
        assert_eq!(unit.workspace_unit(), 10.0);
        assert_eq!(unit.view_unit(), 20.0);

        let unit = ConfigUnit::new(-3.5, 2.0);
        assert_eq!(unit.view_unit(), -7.0);
    }

    #[test]
    fn size_scales_per_dimension() {
        let size = ConfigSize::new(10.0, 4.0, 1.5);
        assert_eq!(size.workspace_size(), WorkspaceSize::new(10.0, 4.0));
        assert_eq!(size.view_size(), ViewSize::new(15.0, 6.0));
    }

    #[test]
    fn insets_scale_per_edge() {
        let insets = ConfigEdgeInsets::new(1.0, 2.0, 3.0, 4.0, 2.0);
        assert_eq!(insets.workspace_insets(), EdgeInsets::new(1.0, 2.0, 3.0, 4.0));
        assert_eq!(insets.view_insets(), EdgeInsets::new(2.0, 4.0, 6.0, 8.0));

        // Scaling does not disturb the directional resolution.
        assert_eq!(insets.view_insets().left(LayoutDirection::RightToLeft), 8.0);
    }

    #[test]
    fn zero_constants_are_all_zero() {
        assert_eq!(ConfigUnit::ZERO.workspace_unit(), 0.0);
        assert_eq!(ConfigUnit::ZERO.view_unit(), 0.0);
        assert_eq!(ConfigSize::ZERO.workspace_size(), WorkspaceSize::ZERO);
        assert_eq!(ConfigSize::ZERO.view_size(), ViewSize::ZERO);
        assert_eq!(ConfigEdgeInsets::ZERO.workspace_insets(), EdgeInsets::ZERO);
        assert_eq!(ConfigEdgeInsets::ZERO.view_insets(), EdgeInsets::ZERO);
    }

    #[test]
    #[should_panic(expected = "scale factor must be positive")]
    fn negative_scale_factor_panics() {
        let _ = ConfigUnit::new(10.0, -1.0);
    }

    #[test]
    fn values_are_snapshots_of_their_scale_factor() {
        let old = ConfigSize::new(10.0, 10.0, 2.0);
        assert_eq!(old.view_size().width, 20.0);

        // The owner moves to a new scale factor and rebuilds. The old value
        // is stale by design and keeps reporting 2.0-derived view units.
        let new = ConfigSize::from_workspace_size(old.workspace_size(), 3.0);
        assert_eq!(old.view_size().width, 20.0);
        assert_eq!(new.view_size().width, 30.0);
    }

    #[test]
    fn from_settings_derives_every_metric() {
        let metrics = MetricsSettings::default();
        let config = LayoutConfig::from_settings(&metrics, 2.0);

        assert_eq!(config.scale_factor(), 2.0);
        assert_eq!(
            config.block_corner_radius.workspace_unit(),
            metrics.block_corner_radius
        );
        assert_eq!(
            config.block_corner_radius.view_unit(),
            metrics.block_corner_radius * 2.0
        );
        assert_eq!(
            config.field_minimum_size.view_size(),
            metrics.field_minimum_size.to_view(2.0)
        );
        assert_eq!(
            config.field_text_insets.view_insets(),
            metrics.field_text_insets.scaled(2.0)
        );
    }

    #[test]
    fn rescale_rebuilds_the_whole_set() {
        let metrics = MetricsSettings::default();
        let config = LayoutConfig::from_settings(&metrics, 1.0);
        let rescaled = config.rescale(3.0);

        assert_eq!(rescaled.scale_factor(), 3.0);
        assert_eq!(
            rescaled.x_separation.workspace_unit(),
            config.x_separation.workspace_unit()
        );
        assert_eq!(
            rescaled.x_separation.view_unit(),
            config.x_separation.workspace_unit() * 3.0
        );
        assert_eq!(
            rescaled.popover_maximum_size.view_size(),
            config.popover_maximum_size.workspace_size().to_view(3.0)
        );
        assert_eq!(
            rescaled.workspace_content_insets.view_insets(),
            config.workspace_content_insets.workspace_insets().scaled(3.0)
        );

        // The original set is untouched.
        assert_eq!(config.scale_factor(), 1.0);
        assert_eq!(
            config.x_separation.view_unit(),
            config.x_separation.workspace_unit()
        );
    }
}
