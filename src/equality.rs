use alloc::rc::Rc;
use alloc::sync::Arc;

/// Strict equality: scalars compare by value, references and shared pointers by identity.
///
/// Nothing is compared by content beyond a single scalar, so two distinct allocations holding
/// equal data are never strictly equal. Owned containers (`Vec`, `String`, ...) do not
/// implement this trait; compare them through a reference or an `Arc` instead.
pub trait StrictEq {
    fn strict_eq(&self, other: &Self) -> bool;
}

macro_rules! strict_eq_by_value {
    ($($t:ty),* $(,)?) => {
        $(
            impl StrictEq for $t {
                #[inline]
                fn strict_eq(&self, other: &Self) -> bool {
                    self == other
                }
            }
        )*
    };
}

strict_eq_by_value!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, bool, char, (),
);

impl<T: ?Sized> StrictEq for &T {
    #[inline]
    fn strict_eq(&self, other: &Self) -> bool {
        core::ptr::eq(*self, *other)
    }
}

impl<T: ?Sized> StrictEq for Arc<T> {
    #[inline]
    fn strict_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(self, other)
    }
}

impl<T: ?Sized> StrictEq for Rc<T> {
    #[inline]
    fn strict_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(self, other)
    }
}

/// Shallow slice equality used to detect whether a page window changed.
///
/// Returns `true` iff both slices have the same length and every pair of elements is
/// [`StrictEq`]. Nested slices or shared lists are equal only when they are the same
/// allocation.
///
/// Two slices that share the same address and length are equal without scanning.
pub fn arrays_equal<T: StrictEq>(a: &[T], b: &[T]) -> bool {
    if core::ptr::eq(a, b) {
        return true;
    }

    if a.len() != b.len() {
        return false;
    }

    for (x, y) in a.iter().zip(b) {
        if !x.strict_eq(y) {
            return false;
        }
    }

    true
}
