//! Configuration for a resizable element.
//!
//! [`ResizeConfig`] is always complete. [`ResizeOptions`] is the partial
//! form callers usually build; converting it fills every unset field with
//! its default, so replacing the configuration never keeps a value from the
//! previous one.

use resizable_core::edges::{Handle, Handles};
use resizable_core::host::PositionMode;

/// Default minimum size in pixels.
pub const DEFAULT_MINIMUM_SIZE: f32 = 20.0;

/// Default zone thickness in pixels.
pub const DEFAULT_HANDLE_SIZE: f32 = 10.0;

/// Default CSS border drawn on zones.
pub const DEFAULT_BORDER_STYLE: &str = "2px solid rgba(0, 0, 0, 0.4)";

/// Size limits applied to each dimension independently.
///
/// Both limits are exclusive: a candidate equal to either one is rejected.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SizeBounds {
    /// Candidates must be strictly greater than this.
    pub min_size: f32,
    /// Candidates must be strictly less than this (None = unlimited).
    pub max_size: Option<f32>,
}

impl Default for SizeBounds {
    fn default() -> Self {
        Self {
            min_size: DEFAULT_MINIMUM_SIZE,
            max_size: None,
        }
    }
}

impl SizeBounds {
    /// Bounds with a minimum only.
    pub fn min(min_size: f32) -> Self {
        Self {
            min_size,
            max_size: None,
        }
    }

    /// Bounds with both limits.
    pub fn min_max(min_size: f32, max_size: f32) -> Self {
        Self {
            min_size,
            max_size: Some(max_size),
        }
    }

    /// Check a candidate dimension against the bounds.
    #[inline]
    pub fn accepts(&self, size: f32) -> bool {
        size > self.min_size && self.max_size.is_none_or(|max| size < max)
    }
}

/// Full configuration of a resizable element.
#[derive(Debug, Clone, PartialEq)]
pub struct ResizeConfig {
    /// Ignore pointer input when set.
    pub disabled: bool,
    /// Exclusive minimum width/height.
    pub minimum_size: f32,
    /// Exclusive maximum width/height (None = unlimited).
    pub maximum_size: Option<f32>,
    /// Side length of each zone.
    pub handle_size: f32,
    /// Which zones exist.
    pub handles: Handles,
    /// CSS border shorthand drawn on zones.
    pub border_style: String,
    /// How top/left drags move the element.
    pub position: PositionMode,
}

impl Default for ResizeConfig {
    fn default() -> Self {
        Self {
            disabled: false,
            minimum_size: DEFAULT_MINIMUM_SIZE,
            maximum_size: None,
            handle_size: DEFAULT_HANDLE_SIZE,
            handles: Handles::CORNERS,
            border_style: DEFAULT_BORDER_STYLE.to_string(),
            position: PositionMode::Absolute,
        }
    }
}

impl ResizeConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable pointer handling.
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Set the exclusive minimum size.
    pub fn minimum_size(mut self, size: f32) -> Self {
        self.minimum_size = size;
        self
    }

    /// Set the exclusive maximum size.
    pub fn maximum_size(mut self, size: impl Into<Option<f32>>) -> Self {
        self.maximum_size = size.into();
        self
    }

    /// Set the zone thickness.
    pub fn handle_size(mut self, size: f32) -> Self {
        self.handle_size = size.max(0.0);
        self
    }

    /// Replace the set of enabled handles.
    pub fn handles(mut self, handles: Handles) -> Self {
        self.handles = handles;
        self
    }

    /// Enable one additional handle.
    pub fn with_handle(mut self, handle: Handle) -> Self {
        self.handles |= handle.flag();
        self
    }

    /// Set the zone border style.
    pub fn border_style(mut self, style: impl Into<String>) -> Self {
        self.border_style = style.into();
        self
    }

    /// Set the positioning mode.
    pub fn position(mut self, position: PositionMode) -> Self {
        self.position = position;
        self
    }

    /// Size bounds derived from this configuration.
    pub fn bounds(&self) -> SizeBounds {
        SizeBounds {
            min_size: self.minimum_size,
            max_size: self.maximum_size,
        }
    }

    /// True when switching to `other` requires rebuilding the zones.
    pub fn zones_differ(&self, other: &ResizeConfig) -> bool {
        self.handles != other.handles
            || self.handle_size != other.handle_size
            || self.border_style != other.border_style
    }
}

/// Partial configuration; unset fields take their defaults.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResizeOptions {
    pub disabled: Option<bool>,
    pub minimum_size: Option<f32>,
    pub maximum_size: Option<f32>,
    pub handle_size: Option<f32>,
    pub handles: Option<Handles>,
    pub border_style: Option<String>,
    pub position: Option<PositionMode>,
}

impl From<ResizeOptions> for ResizeConfig {
    fn from(options: ResizeOptions) -> Self {
        let defaults = ResizeConfig::default();
        ResizeConfig {
            disabled: options.disabled.unwrap_or(defaults.disabled),
            minimum_size: options.minimum_size.unwrap_or(defaults.minimum_size),
            maximum_size: options.maximum_size,
            handle_size: options.handle_size.unwrap_or(defaults.handle_size),
            handles: options.handles.unwrap_or(defaults.handles),
            border_style: options.border_style.unwrap_or(defaults.border_style),
            position: options.position.unwrap_or(defaults.position),
        }
    }
}
