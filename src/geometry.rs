use crate::GeometryError;

/// Fixed item and container sizes (in pixels) that determine the page layout.
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Geometry {
    pub item_height: u32,
    pub container_height: u32,
}

impl Geometry {
    pub const fn new(item_height: u32, container_height: u32) -> Self {
        Self {
            item_height,
            container_height,
        }
    }

    /// Like [`Geometry::new`], but rejects configurations whose page size would be zero.
    pub fn checked(item_height: u32, container_height: u32) -> Result<Self, GeometryError> {
        if item_height == 0 {
            return Err(GeometryError::ZeroItemHeight);
        }
        if container_height < item_height {
            return Err(GeometryError::ContainerTooShort {
                item_height,
                container_height,
            });
        }
        Ok(Self::new(item_height, container_height))
    }

    /// Number of items in a page: `floor(container_height / item_height)`.
    ///
    /// Zero when `item_height` is zero or the container is shorter than one item.
    pub fn page_size(&self) -> usize {
        if self.item_height == 0 {
            return 0;
        }
        (self.container_height / self.item_height) as usize
    }

    /// Height of a full page in pixels.
    pub fn page_length(&self) -> u64 {
        (self.page_size() as u64).saturating_mul(self.item_height as u64)
    }

    pub fn is_degenerate(&self) -> bool {
        self.page_size() == 0
    }
}
