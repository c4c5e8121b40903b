//! Comparison and equality strategies.
//!
//! Every operation that orders or matches elements takes a strategy object
//! instead of a bare closure. The defaults are [`NaturalOrder`] and
//! [`IdentityEquals`]; any closure with the plain two-argument signature is a
//! strategy as well, and [`Indexed`] adapts closures that also want the
//! positions of both elements.
//!
//! ```
//! use std::cmp::Ordering;
//! use lazyseq::{Comparer, Indexed, NaturalOrder, Reverse};
//!
//! assert_eq!(NaturalOrder.compare(&1, &2, 0, 0), Ordering::Less);
//! assert_eq!(Reverse(NaturalOrder).compare(&1, &2, 0, 0), Ordering::Greater);
//!
//! let by_len = |a: &&str, b: &&str| a.len().cmp(&b.len());
//! assert_eq!(by_len.compare(&"abc", &"de", 0, 0), Ordering::Greater);
//!
//! let by_index = Indexed(|_: &i32, _: &i32, a: usize, b: usize| a.cmp(&b));
//! assert_eq!(by_index.compare(&9, &1, 0, 4), Ordering::Less);
//! ```

use std::cmp::Ordering;

/// Three-way comparison between two elements.
///
/// `lhs_index` and `rhs_index` are the 0-based positions of the elements in
/// the traversals that produced them.
pub trait Comparer<T: ?Sized> {
    fn compare(&self, lhs: &T, rhs: &T, lhs_index: usize, rhs_index: usize) -> Ordering;
}

/// Equality test between two elements.
pub trait Equality<T: ?Sized> {
    fn equals(&self, lhs: &T, rhs: &T, lhs_index: usize, rhs_index: usize) -> bool;
}

/// Relational ordering: `Less` if `lhs < rhs`, `Greater` if `lhs > rhs`,
/// otherwise `Equal`.
///
/// Values that are not comparable (NaN against anything) compare `Equal`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct NaturalOrder;

impl<T: PartialOrd + ?Sized> Comparer<T> for NaturalOrder {
    fn compare(&self, lhs: &T, rhs: &T, _lhs_index: usize, _rhs_index: usize) -> Ordering {
        if lhs < rhs {
            Ordering::Less
        } else if lhs > rhs {
            Ordering::Greater
        } else {
            Ordering::Equal
        }
    }
}

/// Same-value equality, see [`SameValue`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct IdentityEquals;

impl<T: SameValue + ?Sized> Equality<T> for IdentityEquals {
    fn equals(&self, lhs: &T, rhs: &T, _lhs_index: usize, _rhs_index: usize) -> bool {
        lhs.same_value(rhs)
    }
}

/// Adapts a closure that receives both element positions.
///
/// Wraps `Fn(&T, &T, usize, usize) -> Ordering` as a [`Comparer`] and
/// `Fn(&T, &T, usize, usize) -> bool` as an [`Equality`].
#[derive(Debug, Clone, Copy)]
pub struct Indexed<F>(pub F);

impl<T: ?Sized, F> Comparer<T> for Indexed<F>
where
    F: Fn(&T, &T, usize, usize) -> Ordering,
{
    fn compare(&self, lhs: &T, rhs: &T, lhs_index: usize, rhs_index: usize) -> Ordering {
        (self.0)(lhs, rhs, lhs_index, rhs_index)
    }
}

impl<T: ?Sized, F> Equality<T> for Indexed<F>
where
    F: Fn(&T, &T, usize, usize) -> bool,
{
    fn equals(&self, lhs: &T, rhs: &T, lhs_index: usize, rhs_index: usize) -> bool {
        (self.0)(lhs, rhs, lhs_index, rhs_index)
    }
}

/// Flips the ordering produced by another comparer.
#[derive(Debug, Clone, Copy, Default)]
pub struct Reverse<C>(pub C);

impl<T: ?Sized, C: Comparer<T>> Comparer<T> for Reverse<C> {
    fn compare(&self, lhs: &T, rhs: &T, lhs_index: usize, rhs_index: usize) -> Ordering {
        self.0.compare(lhs, rhs, lhs_index, rhs_index).reverse()
    }
}

impl<T: ?Sized, F> Comparer<T> for F
where
    F: Fn(&T, &T) -> Ordering,
{
    fn compare(&self, lhs: &T, rhs: &T, _lhs_index: usize, _rhs_index: usize) -> Ordering {
        self(lhs, rhs)
    }
}

impl<T: ?Sized, F> Equality<T> for F
where
    F: Fn(&T, &T) -> bool,
{
    fn equals(&self, lhs: &T, rhs: &T, _lhs_index: usize, _rhs_index: usize) -> bool {
        self(lhs, rhs)
    }
}

/// Identity-style equality.
///
/// Floating point values follow same-value semantics rather than IEEE
/// equality: every NaN equals every other NaN, and `0.0` differs from `-0.0`.
/// Everything else compares structurally.
pub trait SameValue {
    fn same_value(&self, other: &Self) -> bool;
}

macro_rules! same_value_via_eq {
    ($($ty:ty),* $(,)?) => {
        $(
            impl SameValue for $ty {
                fn same_value(&self, other: &Self) -> bool {
                    self == other
                }
            }
        )*
    };
}

same_value_via_eq!(
    (),
    bool,
    char,
    i8,
    i16,
    i32,
    i64,
    i128,
    isize,
    u8,
    u16,
    u32,
    u64,
    u128,
    usize,
    str,
    String,
    serde_json::Value,
);

macro_rules! same_value_float {
    ($($ty:ty),*) => {
        $(
            impl SameValue for $ty {
                fn same_value(&self, other: &Self) -> bool {
                    (self.is_nan() && other.is_nan()) || self.to_bits() == other.to_bits()
                }
            }
        )*
    };
}

same_value_float!(f32, f64);

impl<T: SameValue + ?Sized> SameValue for &T {
    fn same_value(&self, other: &Self) -> bool {
        (**self).same_value(*other)
    }
}

impl<T: SameValue + ?Sized> SameValue for Box<T> {
    fn same_value(&self, other: &Self) -> bool {
        (**self).same_value(other)
    }
}

impl<T: SameValue> SameValue for Option<T> {
    fn same_value(&self, other: &Self) -> bool {
        match (self, other) {
            (Some(a), Some(b)) => a.same_value(b),
            (None, None) => true,
            _ => false,
        }
    }
}

impl<T: SameValue> SameValue for [T] {
    fn same_value(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().zip(other).all(|(a, b)| a.same_value(b))
    }
}

impl<T: SameValue> SameValue for Vec<T> {
    fn same_value(&self, other: &Self) -> bool {
        self.as_slice().same_value(other.as_slice())
    }
}

impl<A: SameValue, B: SameValue> SameValue for (A, B) {
    fn same_value(&self, other: &Self) -> bool {
        self.0.same_value(&other.0) && self.1.same_value(&other.1)
    }
}

impl<A: SameValue, B: SameValue, C: SameValue> SameValue for (A, B, C) {
    fn same_value(&self, other: &Self) -> bool {
        self.0.same_value(&other.0) && self.1.same_value(&other.1) && self.2.same_value(&other.2)
    }
}
