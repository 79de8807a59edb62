use alloc::sync::Arc;
use alloc::vec::Vec;
use core::ops::Range;

/// Splits `len` items into contiguous pages of `page_size` items.
///
/// Page `i` covers `[i * page_size, (i + 1) * page_size)`; the last page may be shorter.
///
/// A `page_size` of zero cannot address any page, so the whole list becomes a single page
/// (and an empty list has no pages).
pub fn page_bounds(len: usize, page_size: usize) -> Vec<Range<usize>> {
    if page_size == 0 {
        if len == 0 {
            return Vec::new();
        }
        vwarn!(len, "page_bounds: zero page size, using a single page");
        return alloc::vec![0..len];
    }

    let mut pages: Vec<Range<usize>> = Vec::with_capacity(len.div_ceil(page_size));
    for index in 0..len {
        if index % page_size == 0 {
            pages.push(index..index);
        }
        if let Some(page) = pages.last_mut() {
            page.end = index + 1;
        }
    }
    pages
}

/// Partitions `items` into pages of `page_size` items. See [`page_bounds`].
pub fn paginate<T>(items: &[T], page_size: usize) -> Vec<&[T]> {
    page_bounds(items.len(), page_size)
        .into_iter()
        .map(|r| &items[r])
        .collect()
}

/// A borrowed view over a paginated item list.
#[derive(Debug)]
pub struct Pages<'a, T> {
    items: &'a [T],
    bounds: &'a [Range<usize>],
}

impl<T> Clone for Pages<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Pages<'_, T> {}

impl<'a, T> Pages<'a, T> {
    pub(crate) fn new(items: &'a [T], bounds: &'a [Range<usize>]) -> Self {
        Self { items, bounds }
    }

    pub fn len(&self) -> usize {
        self.bounds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bounds.is_empty()
    }

    /// Item index range of a page; `None` for negative or past-the-end indices.
    pub fn bounds(&self, page_index: i64) -> Option<Range<usize>> {
        let i = usize::try_from(page_index).ok()?;
        self.bounds.get(i).cloned()
    }

    pub fn get(&self, page_index: i64) -> Option<&'a [T]> {
        self.bounds(page_index).map(|r| &self.items[r])
    }

    pub fn items(&self) -> &'a [T] {
        self.items
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a [T]> + '_ {
        let items = self.items;
        self.bounds.iter().map(move |r| &items[r.clone()])
    }
}

/// Memoized pagination keyed on list identity and page size.
///
/// Pages are recomputed only when [`Paginator::update`] sees a different `Arc` allocation
/// (pointer identity, not contents) or a different page size. Replacing the list with an
/// equal-but-new `Arc` recomputes; mutating nothing and passing the same `Arc` does not.
#[derive(Debug)]
pub struct Paginator<T> {
    items: Option<Arc<[T]>>,
    page_size: usize,
    bounds: Vec<Range<usize>>,
    generation: u64,
}

impl<T> Default for Paginator<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for Paginator<T> {
    fn clone(&self) -> Self {
        Self {
            items: self.items.clone(),
            page_size: self.page_size,
            bounds: self.bounds.clone(),
            generation: self.generation,
        }
    }
}

impl<T> Paginator<T> {
    pub fn new() -> Self {
        Self {
            items: None,
            page_size: 0,
            bounds: Vec::new(),
            generation: 0,
        }
    }

    /// Refreshes the cached pages if the inputs changed. Returns `true` when it recomputed.
    pub fn update(&mut self, items: &Arc<[T]>, page_size: usize) -> bool {
        let same_items = self
            .items
            .as_ref()
            .is_some_and(|prev| Arc::ptr_eq(prev, items));
        if same_items && self.page_size == page_size {
            return false;
        }

        self.bounds = page_bounds(items.len(), page_size);
        self.items = Some(Arc::clone(items));
        self.page_size = page_size;
        self.generation = self.generation.wrapping_add(1);
        vtrace!(
            len = items.len(),
            page_size,
            pages = self.bounds.len(),
            generation = self.generation,
            "Paginator::update"
        );
        true
    }

    /// Updates (if needed) and returns the pages for `items`.
    pub fn pages<'a>(&'a mut self, items: &'a Arc<[T]>, page_size: usize) -> Pages<'a, T> {
        self.update(items, page_size);
        Pages::new(items, &self.bounds)
    }

    /// Pages from the last [`Paginator::update`]; empty before the first one.
    pub fn cached(&self) -> Pages<'_, T> {
        let items: &[T] = match &self.items {
            Some(items) => &items[..],
            None => &[],
        };
        Pages::new(items, &self.bounds)
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn page_count(&self) -> usize {
        self.bounds.len()
    }

    /// Increments each time the pages are recomputed.
    pub fn generation(&self) -> u64 {
        self.generation
    }
}
