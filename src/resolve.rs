use alloc::vec::Vec;
use core::fmt;

use crate::{Pages, Window};

/// Positioning for one rendered item: absolutely positioned, `top` pixels from the start of
/// the list, fixed `height`, inherited width.
///
/// `Display` renders the CSS declarations, e.g.
/// `height: 10px; position: absolute; transform: translateY(20px); width: inherit;`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemStyle {
    pub top: u64,
    pub height: u32,
}

impl ItemStyle {
    pub fn for_index(absolute_index: usize, item_height: u32) -> Self {
        Self {
            top: (item_height as u64).saturating_mul(absolute_index as u64),
            height: item_height,
        }
    }

    pub fn bottom(&self) -> u64 {
        self.top.saturating_add(self.height as u64)
    }
}

impl fmt::Display for ItemStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "height: {}px; position: absolute; transform: translateY({}px); width: inherit;",
            self.height, self.top
        )
    }
}

/// One currently visible item.
#[derive(Debug)]
pub struct RenderItem<'a, T> {
    pub item: &'a T,
    /// Position within the rendered batch.
    pub relative_index: usize,
    /// Position in the full item list. Stable unless the list itself changes.
    pub absolute_index: usize,
    pub style: ItemStyle,
}

impl<T> Clone for RenderItem<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for RenderItem<'_, T> {}

/// Visits the items of every page in `window` that exists, in window order.
///
/// Pages outside `pages` are skipped. Absolute indices continue from the start of the first
/// surviving page; when no page survives nothing is emitted.
pub fn for_each_render_item<'a, T>(
    window: &Window,
    pages: Pages<'a, T>,
    item_height: u32,
    mut f: impl FnMut(RenderItem<'a, T>),
) {
    let mut surviving = window.pages().iter().filter_map(|&p| pages.bounds(p));
    let Some(first) = surviving.next() else {
        vtrace!(current = window.current(), "for_each_render_item: window out of range");
        return;
    };

    let start_index = first.start;
    let all = pages.items();
    let mut relative_index = 0usize;
    for bounds in core::iter::once(first).chain(surviving) {
        for item in &all[bounds] {
            let absolute_index = start_index + relative_index;
            f(RenderItem {
                item,
                relative_index,
                absolute_index,
                style: ItemStyle::for_index(absolute_index, item_height),
            });
            relative_index += 1;
        }
    }
}

/// Collects [`for_each_render_item`] output into `out` (cleared first).
pub fn collect_render_items<'a, T>(
    window: &Window,
    pages: Pages<'a, T>,
    item_height: u32,
    out: &mut Vec<RenderItem<'a, T>>,
) {
    out.clear();
    for_each_render_item(window, pages, item_height, |it| out.push(it));
}
