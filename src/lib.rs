//! Headless paged windowing for virtual scrolling.
//!
//! A long list of fixed-height items is split into pages of as many items as fit in the scroll
//! container. At any time only a window of three pages (previous, current, next) is rendered,
//! each item absolutely positioned at `item_height * index`, so the container scrolls as if the
//! whole list were present.
//!
//! The crate is UI-agnostic. A TUI/GUI/DOM layer is expected to provide:
//! - item height and container height
//! - scroll events carrying the container's scroll offset
//! - a frame callback (run before paint) and a clock for the settle timer
//!
//! Building blocks, from pure to stateful:
//! - [`arrays_equal`], [`page_bounds`]/[`paginate`], [`compute_window`]/[`reduce`]
//! - [`Paginator`]: pagination memoized on list identity
//! - [`WindowTracker`]: scroll events → frame-coalesced window updates
//! - [`VirtualScroll`]: items + paginator + tracker, resolving [`RenderItem`]s
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod controller;
mod equality;
mod error;
mod geometry;
mod options;
mod paginate;
mod resolve;
mod tracker;
mod types;
mod window;


pub use controller::{Rendered, VirtualScroll};
pub use equality::{StrictEq, arrays_equal};
pub use error::GeometryError;
pub use geometry::Geometry;
pub use options::{
    DEFAULT_SETTLE_DELAY_MS, OnWindowChangeCallback, PointerEventsCallback, TrackerOptions,
};
pub use paginate::{Pages, Paginator, page_bounds, paginate};
pub use resolve::{ItemStyle, RenderItem, collect_render_items, for_each_render_item};
pub use tracker::WindowTracker;
pub use types::{FrameHandle, ScrollEvent, ScrollTarget};
pub use window::{Window, compute_window, current_page, reduce};
