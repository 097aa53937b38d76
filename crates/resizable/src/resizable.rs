//! Attaching the resize behavior to an element.

use resizable_core::edges::Handle;
use resizable_core::host::{ElementHost, StyleWrite, ZoneId};
use resizable_core::math::Vec2;

use crate::config::ResizeConfig;
use crate::engine::DragEngine;
use crate::error::{ResizeError, ResizeResult};
use crate::gesture::ResizeFrame;
use crate::zones::{ZoneSet, create_zones, destroy_zones};

/// A resize behavior attached to one element.
///
/// The host delivers pointer input through [`Resizable::pointer_down`],
/// [`Resizable::pointer_move`] and [`Resizable::pointer_up`]. Dropping the
/// value detaches it.
///
/// # Example
///
/// ```
/// use resizable::{ResizeConfig, Resizable};
/// use resizable_core::edges::Handle;
/// use resizable_core::math::Vec2;
/// use resizable_test_utils::MockElementHost;
///
/// let host = MockElementHost::with_box(50.0, 50.0, 100.0, 100.0);
/// let mut resizable = Resizable::attach(&host, ResizeConfig::default()).unwrap();
///
/// let zone = resizable.zones().zone_for(Handle::RightBottom).unwrap();
/// resizable.pointer_down(zone, Vec2::new(200.0, 200.0));
/// resizable.pointer_move(Vec2::new(250.0, 230.0));
/// resizable.pointer_up();
///
/// assert_eq!((host.width(), host.height()), (150.0, 130.0));
/// ```
pub struct Resizable<H: ElementHost> {
    host: H,
    config: ResizeConfig,
    zones: ZoneSet,
    engine: DragEngine,
    attached: bool,
}

impl<H: ElementHost> Resizable<H> {
    /// Attach the behavior: apply the positioning mode and create zones.
    pub fn attach(host: H, config: impl Into<ResizeConfig>) -> ResizeResult<Self> {
        let config = config.into();

        host.write_style(StyleWrite::Position(config.position));
        let zones = create_zones(&host, config.handles, config.handle_size, &config.border_style)?;
        tracing::debug!("Attached resizable with {} zones", zones.len());

        Ok(Self {
            host,
            config,
            zones,
            engine: DragEngine::new(),
            attached: true,
        })
    }

    /// Replace the whole configuration.
    ///
    /// Zones are rebuilt when their handles, thickness or border change. A
    /// gesture in progress keeps the bounds and mode it started with but
    /// observes `disabled` immediately.
    pub fn update(&mut self, config: impl Into<ResizeConfig>) -> ResizeResult<()> {
        if !self.attached {
            return Err(ResizeError::Detached);
        }

        let config = config.into();
        let rebuild = self.config.zones_differ(&config);
        let reposition = self.config.position != config.position;
        self.config = config;

        if reposition {
            self.host.write_style(StyleWrite::Position(self.config.position));
        }

        if rebuild {
            destroy_zones(&self.host, &mut self.zones);
            self.zones = create_zones(
                &self.host,
                self.config.handles,
                self.config.handle_size,
                &self.config.border_style,
            )?;
        }

        tracing::debug!(
            "Updated resizable config (zones rebuilt: {}, disabled: {})",
            rebuild,
            self.config.disabled
        );
        Ok(())
    }

    /// Remove every zone and release any held listeners.
    ///
    /// Calling this again is a no-op.
    pub fn detach(&mut self) {
        if !self.attached {
            return;
        }

        self.engine.disarm(&self.host);
        destroy_zones(&self.host, &mut self.zones);
        self.attached = false;
        tracing::debug!("Detached resizable");
    }

    /// Pointer-down on a zone.
    ///
    /// Returns true when a gesture was armed.
    pub fn pointer_down(&mut self, zone: ZoneId, pointer: Vec2) -> bool {
        match self.zones.handle_for(zone) {
            Some(handle) => self.grab(handle, pointer),
            None => {
                tracing::trace!("Pointer-down on unknown zone {:?}", zone);
                false
            }
        }
    }

    /// Start a gesture as if the zone for `handle` was pressed.
    pub fn grab(&mut self, handle: Handle, pointer: Vec2) -> bool {
        if !self.attached {
            return false;
        }
        self.engine
            .arm(&self.host, handle.edges(), pointer, &self.config)
    }

    /// Global pointer-move.
    ///
    /// Returns the values written, or `None` when idle or disabled.
    pub fn pointer_move(&mut self, pointer: Vec2) -> Option<ResizeFrame> {
        self.engine
            .update(&self.host, pointer, self.config.disabled)
    }

    /// Global pointer-up. Returns true when a gesture ended.
    pub fn pointer_up(&mut self) -> bool {
        self.engine.disarm(&self.host).is_some()
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn config(&self) -> &ResizeConfig {
        &self.config
    }

    pub fn zones(&self) -> &ZoneSet {
        &self.zones
    }

    pub fn engine(&self) -> &DragEngine {
        &self.engine
    }

    pub fn is_attached(&self) -> bool {
        self.attached
    }

    pub fn is_resizing(&self) -> bool {
        self.engine.is_armed()
    }
}

impl<H: ElementHost> Drop for Resizable<H> {
    fn drop(&mut self) {
        self.detach();
    }
}

impl<H: ElementHost> std::fmt::Debug for Resizable<H> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Resizable")
            .field("config", &self.config)
            .field("zones", &self.zones)
            .field("engine", &self.engine)
            .field("attached", &self.attached)
            .finish_non_exhaustive()
    }
}
