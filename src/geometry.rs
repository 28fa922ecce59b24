use serde::{Deserialize, Serialize};

/// Ambient layout direction of the host UI.
///
/// Threaded explicitly through every edge-inset resolution; the library never
/// infers or caches it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LayoutDirection {
    #[default]
    LeftToRight,
    RightToLeft,
}

#[track_caller]
pub(crate) fn assert_positive_scale(scale_factor: f64) {
    assert!(
        scale_factor > 0.0,
        "scale factor must be positive, got {scale_factor}"
    );
}

/// Point in the workspace coordinate system.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WorkspacePoint {
    pub x: f64,
    pub y: f64,
}

impl WorkspacePoint {
    pub const ZERO: WorkspacePoint = WorkspacePoint { x: 0.0, y: 0.0 };

    pub fn new(x: f64, y: f64) -> Self { Self { x, y } }

    /// Converts to the view coordinate system. `scale_factor` must be
    /// positive.
    pub fn to_view(self, scale_factor: f64) -> ViewPoint {
        assert_positive_scale(scale_factor);
        ViewPoint::new(self.x * scale_factor, self.y * scale_factor)
    }
}

/// Size in the workspace coordinate system.
///
/// Width and height are conventionally non-negative; negative extents are a
/// caller error, not enforced here.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WorkspaceSize {
    pub width: f64,
    pub height: f64,
}

impl WorkspaceSize {
    pub const ZERO: WorkspaceSize = WorkspaceSize { width: 0.0, height: 0.0 };

    pub fn new(width: f64, height: f64) -> Self { Self { width, height } }

    /// Converts to the view coordinate system. `scale_factor` must be
    /// positive.
    pub fn to_view(self, scale_factor: f64) -> ViewSize {
        assert_positive_scale(scale_factor);
        ViewSize::new(self.width * scale_factor, self.height * scale_factor)
    }
}

/// Point in the view coordinate system.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ViewPoint {
    pub x: f64,
    pub y: f64,
}

impl ViewPoint {
    pub const ZERO: ViewPoint = ViewPoint { x: 0.0, y: 0.0 };

    pub fn new(x: f64, y: f64) -> Self { Self { x, y } }
}

/// Size in the view coordinate system.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ViewSize {
    pub width: f64,
    pub height: f64,
}

impl ViewSize {
    pub const ZERO: ViewSize = ViewSize { width: 0.0, height: 0.0 };

    pub fn new(width: f64, height: f64) -> Self { Self { width, height } }
}

/// Rounds view-space values to whole device pixels before they are handed to
/// the renderer.
pub trait Round {
    fn round(self) -> Self;
}

impl Round for ViewPoint {
    fn round(self) -> Self { Self::new(self.x.round(), self.y.round()) }
}

impl Round for ViewSize {
    fn round(self) -> Self { Self::new(self.width.round(), self.height.round()) }
}

/// Inset distances for the edges of a rectangular region.
///
/// Horizontal insets are expressed as leading/trailing rather than left/right
/// so the same value is correct under both LTR and RTL layout directions.
/// Resolve concrete edges with [`EdgeInsets::left`] and [`EdgeInsets::right`].
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EdgeInsets {
    #[serde(default)]
    pub top: f64,
    #[serde(default)]
    pub leading: f64,
    #[serde(default)]
    pub bottom: f64,
    #[serde(default)]
    pub trailing: f64,
}

impl EdgeInsets {
    pub const ZERO: EdgeInsets = EdgeInsets {
        top: 0.0,
        leading: 0.0,
        bottom: 0.0,
        trailing: 0.0,
    };

    pub fn new(top: f64, leading: f64, bottom: f64, trailing: f64) -> Self {
        Self {
            top,
            leading,
            bottom,
            trailing,
        }
    }

    /// Builds directional insets from the legacy non-directional form, with
    /// leading = left and trailing = right baked in.
    pub fn from_ltr(top: f64, left: f64, bottom: f64, right: f64) -> Self {
        Self::new(top, left, bottom, right)
    }

    /// Inset distance for the left edge under `direction`.
    pub fn left(&self, direction: LayoutDirection) -> f64 {
        match direction {
            LayoutDirection::LeftToRight => self.leading,
            LayoutDirection::RightToLeft => self.trailing,
        }
    }

    /// Inset distance for the right edge under `direction`.
    pub fn right(&self, direction: LayoutDirection) -> f64 {
        match direction {
            LayoutDirection::LeftToRight => self.trailing,
            LayoutDirection::RightToLeft => self.leading,
        }
    }

    /// Summed horizontal extent (leading + trailing).
    pub fn horizontal(&self) -> f64 { self.leading + self.trailing }

    /// Summed vertical extent (top + bottom).
    pub fn vertical(&self) -> f64 { self.top + self.bottom }

    /// Scales every edge. `scale_factor` must be positive.
    pub fn scaled(self, scale_factor: f64) -> EdgeInsets {
        assert_positive_scale(scale_factor);
        Self::new(
            self.top * scale_factor,
            self.leading * scale_factor,
            self.bottom * scale_factor,
            self.trailing * scale_factor,
        )
    }
}
