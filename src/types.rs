/// The element a scroll event was dispatched on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ScrollTarget {
    /// A scrollable element, reporting its current vertical offset in pixels.
    Element { scroll_top: u64 },
    /// Anything that is not an element (document, text node, ...). Carries no offset.
    Other,
}

/// A scroll notification from the UI layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScrollEvent {
    pub target: Option<ScrollTarget>,
}

impl ScrollEvent {
    pub fn element(scroll_top: u64) -> Self {
        Self {
            target: Some(ScrollTarget::Element { scroll_top }),
        }
    }

    pub fn untargeted() -> Self {
        Self { target: None }
    }

    /// The reported offset, if the event came from an element.
    pub fn scroll_top(&self) -> Option<u64> {
        match self.target {
            Some(ScrollTarget::Element { scroll_top }) => Some(scroll_top),
            _ => None,
        }
    }
}

/// Identifies a requested frame-aligned recomputation.
///
/// Each accepted scroll event cancels the previous request and issues a new handle, so at most
/// one is pending at a time.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FrameHandle(pub u64);
