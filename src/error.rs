use thiserror::Error;

/// Rejected geometry, returned by [`crate::Geometry::checked`].
///
/// The lenient constructors accept these configurations and degrade instead (see
/// [`crate::page_bounds`]); this type exists for callers that prefer to fail early.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum GeometryError {
    #[error("item height must be greater than zero")]
    ZeroItemHeight,
    #[error(
        "container height ({container_height}px) is shorter than a single item ({item_height}px)"
    )]
    ContainerTooShort {
        item_height: u32,
        container_height: u32,
    },
}
