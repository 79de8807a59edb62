use alloc::sync::Arc;
use alloc::vec::Vec;

use crate::{
    Geometry, Pages, Paginator, RenderItem, ScrollEvent, TrackerOptions, Window, WindowTracker,
    collect_render_items, for_each_render_item,
};

/// Output of [`VirtualScroll::render`].
#[derive(Debug)]
pub struct Rendered<'a, T> {
    pub items: Vec<RenderItem<'a, T>>,
    pub page_count: usize,
}

/// A framework-neutral virtual list: owns the items, their memoized pages and a
/// [`WindowTracker`], and resolves the visible items on demand.
///
/// Adapters drive it the same way as the tracker (`on_scroll`, `on_frame`/`tick`) and call
/// `render` (or `for_each_render_item`) when painting.
#[derive(Clone, Debug)]
pub struct VirtualScroll<T> {
    items: Arc<[T]>,
    paginator: Paginator<T>,
    tracker: WindowTracker,
}

impl<T> VirtualScroll<T> {
    pub fn new(items: impl Into<Arc<[T]>>, options: TrackerOptions) -> Self {
        let items = items.into();
        let mut paginator = Paginator::new();
        paginator.update(&items, options.geometry.page_size());
        Self {
            items,
            paginator,
            tracker: WindowTracker::new(options),
        }
    }

    pub fn items(&self) -> &Arc<[T]> {
        &self.items
    }

    /// Replaces the item list. Pages are recomputed only if `items` is a different allocation.
    pub fn set_items(&mut self, items: Arc<[T]>) {
        self.items = items;
        self.refresh_pages();
    }

    pub fn tracker(&self) -> &WindowTracker {
        &self.tracker
    }

    pub fn tracker_mut(&mut self) -> &mut WindowTracker {
        &mut self.tracker
    }

    pub fn paginator(&self) -> &Paginator<T> {
        &self.paginator
    }

    pub fn geometry(&self) -> Geometry {
        self.tracker.geometry()
    }

    pub fn set_geometry(&mut self, geometry: Geometry) {
        self.tracker.set_geometry(geometry);
        self.refresh_pages();
    }

    pub fn set_options(&mut self, options: TrackerOptions) {
        self.tracker.set_options(options);
        self.refresh_pages();
    }

    fn refresh_pages(&mut self) {
        let page_size = self.tracker.geometry().page_size();
        self.paginator.update(&self.items, page_size);
    }

    pub fn window(&self) -> Window {
        self.tracker.window()
    }

    pub fn pages(&self) -> Pages<'_, T> {
        self.paginator.cached()
    }

    pub fn page_count(&self) -> usize {
        self.paginator.page_count()
    }

    pub fn on_scroll(&mut self, event: &ScrollEvent) -> bool {
        self.tracker.on_scroll(event)
    }

    pub fn on_frame(&mut self, now_ms: u64) -> bool {
        self.tracker.on_frame(now_ms)
    }

    pub fn tick(&mut self, now_ms: u64) -> bool {
        self.tracker.tick(now_ms)
    }

    pub fn detach(&mut self) {
        self.tracker.detach();
    }

    pub fn for_each_render_item<'a>(&'a self, f: impl FnMut(RenderItem<'a, T>)) {
        let window = self.tracker.window();
        let item_height = self.tracker.geometry().item_height;
        for_each_render_item(&window, self.pages(), item_height, f);
    }

    pub fn collect_render_items<'a>(&'a self, out: &mut Vec<RenderItem<'a, T>>) {
        let window = self.tracker.window();
        let item_height = self.tracker.geometry().item_height;
        collect_render_items(&window, self.pages(), item_height, out);
    }

    /// Resolves the visible items for the current window.
    pub fn render(&self) -> Rendered<'_, T> {
        let mut items = Vec::new();
        self.collect_render_items(&mut items);
        Rendered {
            items,
            page_count: self.page_count(),
        }
    }
}
