use crate::arrays_equal;

/// The three page indices considered visible: `[current - 1, current, current + 1]`.
///
/// Indices are not clamped; negative or past-the-end pages are dropped when the window is
/// resolved against actual pages.
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Window {
    pages: [i64; 3],
}

impl Window {
    /// The window before any scroll event: `[-1, 0, 1]`.
    pub const INITIAL: Self = Self::around(0);

    pub const fn around(current: i64) -> Self {
        Self {
            pages: [
                current.saturating_sub(1),
                current,
                current.saturating_add(1),
            ],
        }
    }

    pub fn current(&self) -> i64 {
        self.pages[1]
    }

    pub fn pages(&self) -> &[i64; 3] {
        &self.pages
    }

    pub fn as_slice(&self) -> &[i64] {
        &self.pages
    }
}

impl Default for Window {
    fn default() -> Self {
        Self::INITIAL
    }
}

/// Index of the page nearest to `offset`: `round(offset / page_length)`.
///
/// Exact halves round up, so with 100px pages offset 150 is page 2 and offset 250 is page 3.
/// A zero `page_length` always yields page 0.
pub fn current_page(offset: u64, page_length: u64) -> i64 {
    if page_length == 0 {
        return 0;
    }
    // floor(offset / len + 1/2) == floor((2 * offset + len) / (2 * len))
    let num = 2 * offset as u128 + page_length as u128;
    let den = 2 * page_length as u128;
    i64::try_from(num / den).unwrap_or(i64::MAX)
}

/// Decides the window for a scroll `offset`.
///
/// Returns `None` when the candidate window equals `previous`, i.e. no state update (and no
/// re-render) is needed.
pub fn compute_window(previous: &Window, offset: u64, page_length: u64) -> Option<Window> {
    let next = Window::around(current_page(offset, page_length));
    if arrays_equal(previous.as_slice(), next.as_slice()) {
        return None;
    }
    Some(next)
}

/// Window state reducer: adopts `candidate` only when it is present and differs from `state`.
pub fn reduce(state: Window, candidate: Option<Window>) -> Window {
    match candidate {
        Some(next) if !arrays_equal(state.as_slice(), next.as_slice()) => next,
        _ => state,
    }
}
