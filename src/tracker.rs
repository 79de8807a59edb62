use crate::{FrameHandle, Geometry, ScrollEvent, TrackerOptions, Window, compute_window, reduce};

/// Scroll-driven window state machine.
///
/// The tracker holds no UI objects and owns no timers. An adapter drives it:
/// - `on_scroll` for every scroll event of the container
/// - `on_frame(now_ms)` once per display frame, before painting
/// - `update_settle(now_ms)` from a timer or the frame loop (or `tick` for both)
///
/// Bursts of scroll events coalesce into a single recomputation per frame: every accepted
/// event cancels the pending frame request and settle timer before requesting a new frame.
#[derive(Clone, Debug)]
pub struct WindowTracker {
    options: TrackerOptions,
    window: Window,
    offset: u64,
    pointer_events: bool,
    pending_frame: Option<FrameHandle>,
    next_frame: u64,
    settle_deadline_ms: Option<u64>,
}

impl WindowTracker {
    pub fn new(options: TrackerOptions) -> Self {
        vdebug!(
            item_height = options.geometry.item_height,
            container_height = options.geometry.container_height,
            page_size = options.geometry.page_size(),
            page_length = options.geometry.page_length(),
            attached = options.attached,
            "WindowTracker::new"
        );
        Self {
            options,
            window: Window::INITIAL,
            offset: 0,
            pointer_events: true,
            pending_frame: None,
            next_frame: 0,
            settle_deadline_ms: None,
        }
    }

    pub fn options(&self) -> &TrackerOptions {
        &self.options
    }

    /// Replaces the options.
    ///
    /// The window is not recomputed here; the next scroll event picks up the new geometry.
    /// Switching to a detached configuration behaves like [`WindowTracker::detach`].
    pub fn set_options(&mut self, options: TrackerOptions) {
        let prev_geometry = self.options.geometry;
        self.options = options;
        if self.options.geometry != prev_geometry {
            self.log_geometry();
        }
        if !self.options.attached {
            self.cancel_pending();
            self.set_pointer_events(true);
        }
    }

    /// Clones the current options, applies `f`, then delegates to `set_options`.
    pub fn update_options(&mut self, f: impl FnOnce(&mut TrackerOptions)) {
        let mut next = self.options.clone();
        f(&mut next);
        self.set_options(next);
    }

    pub fn geometry(&self) -> Geometry {
        self.options.geometry
    }

    pub fn set_geometry(&mut self, geometry: Geometry) {
        if self.options.geometry == geometry {
            return;
        }
        self.options.geometry = geometry;
        self.log_geometry();
    }

    fn log_geometry(&self) {
        let geometry = self.options.geometry;
        vdebug!(
            container_height = geometry.container_height,
            page_length = geometry.page_length(),
            page_size = geometry.page_size(),
            "WindowTracker: geometry changed"
        );
        if geometry.is_degenerate() {
            vwarn!(
                item_height = geometry.item_height,
                container_height = geometry.container_height,
                "WindowTracker: page size is zero, paging is disabled"
            );
        }
    }

    pub fn window(&self) -> Window {
        self.window
    }

    /// Last offset reported by a scroll event. Updated immediately, ahead of the window.
    pub fn offset(&self) -> u64 {
        self.offset
    }

    pub fn is_attached(&self) -> bool {
        self.options.attached
    }

    pub fn pointer_events_enabled(&self) -> bool {
        self.pointer_events
    }

    pub fn pending_frame(&self) -> Option<FrameHandle> {
        self.pending_frame
    }

    /// When the settle timer fires. A pending frame has no deadline; it runs on the next frame.
    pub fn settle_deadline_ms(&self) -> Option<u64> {
        self.settle_deadline_ms
    }

    /// Handles a scroll event from the container.
    ///
    /// Returns `false` (and changes nothing) when the tracker is detached or the event does not
    /// come from an element.
    pub fn on_scroll(&mut self, event: &ScrollEvent) -> bool {
        if !self.options.attached {
            return false;
        }
        let Some(scroll_top) = event.scroll_top() else {
            vtrace!(event = ?event, "on_scroll: ignoring untargeted event");
            return false;
        };

        self.offset = scroll_top;
        self.set_pointer_events(false);

        self.cancel_pending();
        let frame = FrameHandle(self.next_frame);
        self.next_frame = self.next_frame.wrapping_add(1);
        self.pending_frame = Some(frame);
        vtrace!(offset = scroll_top, frame = frame.0, "on_scroll");
        true
    }

    /// Runs the pending frame-aligned recomputation, if any.
    ///
    /// Recomputes the window from the latest offset, adopts it only if it differs (firing
    /// `on_change` before returning), and arms the settle timer. Returns `true` when the window
    /// changed.
    pub fn on_frame(&mut self, now_ms: u64) -> bool {
        if self.pending_frame.take().is_none() {
            return false;
        }

        let page_length = self.options.geometry.page_length();
        let candidate = compute_window(&self.window, self.offset, page_length);
        let changed = candidate.is_some();
        self.window = reduce(self.window, candidate);

        if changed {
            vdebug!(
                offset = self.offset,
                current = self.window.current(),
                "window changed"
            );
            if let Some(cb) = &self.options.on_change {
                cb(&self.window);
            }
        }

        self.settle_deadline_ms = Some(now_ms.saturating_add(self.options.settle_delay_ms));
        changed
    }

    /// Fires the settle timer once its deadline has passed, re-enabling pointer events.
    pub fn update_settle(&mut self, now_ms: u64) {
        let Some(deadline) = self.settle_deadline_ms else {
            return;
        };
        if now_ms < deadline {
            return;
        }
        self.settle_deadline_ms = None;
        self.set_pointer_events(true);
    }

    /// Runs the frame step, then the settle step. Returns whether the window changed.
    pub fn tick(&mut self, now_ms: u64) -> bool {
        let changed = self.on_frame(now_ms);
        self.update_settle(now_ms);
        changed
    }

    /// Stops tracking the container: pending work is dropped and pointer events are restored.
    pub fn detach(&mut self) {
        self.options.attached = false;
        self.cancel_pending();
        self.set_pointer_events(true);
    }

    /// Resumes accepting scroll events. The window is kept.
    pub fn attach(&mut self) {
        self.options.attached = true;
    }

    fn cancel_pending(&mut self) {
        self.pending_frame = None;
        self.settle_deadline_ms = None;
    }

    fn set_pointer_events(&mut self, enabled: bool) {
        if self.pointer_events == enabled {
            return;
        }
        self.pointer_events = enabled;
        if let Some(cb) = &self.options.on_pointer_events {
            cb(enabled);
        }
    }
}
