use alloc::sync::Arc;

use crate::{Geometry, Window};

/// Called synchronously when the tracked window changes, before the frame step returns.
///
/// Adapters use this to flush dependent state (re-resolve visible items, re-render) so that
/// layout reads right after the change observe the new window.
pub type OnWindowChangeCallback = Arc<dyn Fn(&Window) + Send + Sync>;

/// Toggles pointer interaction on the auxiliary element that hosts the rendered items.
///
/// Receives `false` when a scroll burst starts and `true` once the settle delay has elapsed.
pub type PointerEventsCallback = Arc<dyn Fn(bool) + Send + Sync>;

/// Default delay (ms) between the frame-aligned recomputation and re-enabling pointer events.
pub const DEFAULT_SETTLE_DELAY_MS: u64 = 100;

/// Configuration for [`crate::WindowTracker`].
///
/// Cheap to clone: callbacks are stored in `Arc`s.
#[derive(Clone)]
pub struct TrackerOptions {
    pub geometry: Geometry,

    /// Whether a scroll container is attached. A detached tracker ignores every scroll event
    /// and keeps its current window, which effectively turns virtualization off.
    pub attached: bool,

    pub settle_delay_ms: u64,

    pub on_change: Option<OnWindowChangeCallback>,

    /// Auxiliary element hook. `None` when there is no such element.
    pub on_pointer_events: Option<PointerEventsCallback>,
}

impl TrackerOptions {
    pub fn new(geometry: Geometry) -> Self {
        Self {
            geometry,
            attached: true,
            settle_delay_ms: DEFAULT_SETTLE_DELAY_MS,
            on_change: None,
            on_pointer_events: None,
        }
    }

    pub fn with_geometry(mut self, geometry: Geometry) -> Self {
        self.geometry = geometry;
        self
    }

    pub fn with_attached(mut self, attached: bool) -> Self {
        self.attached = attached;
        self
    }

    pub fn with_settle_delay_ms(mut self, delay_ms: u64) -> Self {
        self.settle_delay_ms = delay_ms;
        self
    }

    pub fn with_on_change(
        mut self,
        on_change: Option<impl Fn(&Window) + Send + Sync + 'static>,
    ) -> Self {
        self.on_change = on_change.map(|f| Arc::new(f) as _);
        self
    }

    pub fn with_on_pointer_events(
        mut self,
        on_pointer_events: Option<impl Fn(bool) + Send + Sync + 'static>,
    ) -> Self {
        self.on_pointer_events = on_pointer_events.map(|f| Arc::new(f) as _);
        self
    }
}

impl Default for TrackerOptions {
    fn default() -> Self {
        Self::new(Geometry::default())
    }
}

impl core::fmt::Debug for TrackerOptions {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("TrackerOptions")
            .field("geometry", &self.geometry)
            .field("attached", &self.attached)
            .field("settle_delay_ms", &self.settle_delay_ms)
            .field("on_change", &self.on_change.is_some())
            .field("on_pointer_events", &self.on_pointer_events.is_some())
            .finish()
    }
}
