// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! # Direct Iterators
//!
//! A direct iterator is a cursor whose position *is* its value: advancing
//! it produces the next value, and dereferencing returns the value itself.
//! Wrapping a plain number this way lets it be used wherever a cursor or a
//! Rust iterator is expected, e.g. to walk the indices of a slice.
//!
//! Capabilities are layered the same way as cursor categories:
//!
//! - [`Forward`]: the value has a successor.
//! - [`Bidirectional`]: it also has a predecessor.
//! - [`RandomAccess`]: it can jump by any `isize` and measure signed distances.
//!
//! All primitive integers and floats are random access. User types only
//! implement as much as they support; `DirectIterator` exposes exactly the
//! operations the wrapped type allows.
//!
//! ```rust
//! # use ez_core::utils::direct::{direct_range, indices};
//! let v: Vec<_> = direct_range(3u8, 6).collect();
//! assert_eq!(v, vec![3, 4, 5]);
//!
//! let digits = [7, 1, 8];
//! let idx: Vec<_> = indices(&digits).collect();
//! assert_eq!(idx, vec![0, 1, 2]);
//! ```

use std::{
    iter::FusedIterator,
    ops::{Add, AddAssign, Sub, SubAssign},
};

/// A value with a successor.
pub trait Forward: Clone + PartialEq {
    fn successor(&self) -> Self;
}

/// A value with a successor and a predecessor.
pub trait Bidirectional: Forward {
    fn predecessor(&self) -> Self;
}

/// A value that can be moved by arbitrary signed offsets.
pub trait RandomAccess: Bidirectional + PartialOrd {
    /// Returns the value `n` positions away from `self`.
    fn offset(&self, n: isize) -> Self;

    /// Returns the signed number of positions from `self` to `other`.
    fn distance(&self, other: &Self) -> isize;
}

macro_rules! impl_direct_int {
    ($($t:ty),* $(,)?) => {
        $(
            impl Forward for $t {
                #[inline]
                fn successor(&self) -> Self {
                    *self + 1
                }
            }

            impl Bidirectional for $t {
                #[inline]
                fn predecessor(&self) -> Self {
                    *self - 1
                }
            }

            impl RandomAccess for $t {
                #[inline]
                fn offset(&self, n: isize) -> Self {
                    let base = i128::try_from(*self)
                        .expect("DirectIterator: value is not representable as i128");
                    let target = base
                        .checked_add(n as i128)
                        .expect("DirectIterator: offset overflows");
                    <$t>::try_from(target)
                        .expect("DirectIterator: offset leaves the value's type")
                }

                #[inline]
                fn distance(&self, other: &Self) -> isize {
                    let from = i128::try_from(*self)
                        .expect("DirectIterator: value is not representable as i128");
                    let to = i128::try_from(*other)
                        .expect("DirectIterator: value is not representable as i128");
                    isize::try_from(to - from).expect("DirectIterator: distance overflows isize")
                }
            }
        )*
    };
}

macro_rules! impl_direct_float {
    ($($t:ty),* $(,)?) => {
        $(
            impl Forward for $t {
                #[inline]
                fn successor(&self) -> Self {
                    *self + 1.0
                }
            }

            impl Bidirectional for $t {
                #[inline]
                fn predecessor(&self) -> Self {
                    *self - 1.0
                }
            }

            impl RandomAccess for $t {
                #[inline]
                fn offset(&self, n: isize) -> Self {
                    *self + n as $t
                }

                #[inline]
                fn distance(&self, other: &Self) -> isize {
                    (*other - *self) as isize
                }
            }
        )*
    };
}

impl_direct_int!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize
);
impl_direct_float!(f32, f64);

/// A cursor that dereferences to its own position.
///
/// # Examples
///
/// ```rust
/// # use ez_core::utils::direct::DirectIterator;
/// let mut it = DirectIterator::new(10);
/// it.inc();
/// assert_eq!(*it.get(), 11);
/// assert_eq!(it.at(4), 15);
/// assert_eq!((it + 4) - it, 4);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DirectIterator<T> {
    value: T,
}

impl<T> DirectIterator<T> {
    #[inline]
    pub const fn new(value: T) -> Self {
        Self { value }
    }

    /// Returns the current position, which is also the current value.
    #[inline]
    pub const fn get(&self) -> &T {
        &self.value
    }

    #[inline]
    pub fn into_inner(self) -> T {
        self.value
    }
}

impl<T> From<T> for DirectIterator<T> {
    #[inline]
    fn from(value: T) -> Self {
        Self::new(value)
    }
}

impl<T> DirectIterator<T>
where
    T: Forward,
{
    /// Moves to the successor and returns the cursor.
    #[inline]
    pub fn inc(&mut self) -> &mut Self {
        self.value = self.value.successor();
        self
    }

    /// Moves to the successor and returns the cursor as it was before.
    #[inline]
    pub fn post_inc(&mut self) -> Self {
        let previous = self.clone();
        self.inc();
        previous
    }
}

impl<T> DirectIterator<T>
where
    T: Bidirectional,
{
    /// Moves to the predecessor and returns the cursor.
    #[inline]
    pub fn dec(&mut self) -> &mut Self {
        self.value = self.value.predecessor();
        self
    }

    /// Moves to the predecessor and returns the cursor as it was before.
    #[inline]
    pub fn post_dec(&mut self) -> Self {
        let previous = self.clone();
        self.dec();
        previous
    }
}

impl<T> DirectIterator<T>
where
    T: RandomAccess,
{
    /// Returns the value `n` positions away without moving the cursor.
    #[inline]
    pub fn at(&self, n: isize) -> T {
        self.value.offset(n)
    }
}

impl<T> AddAssign<isize> for DirectIterator<T>
where
    T: RandomAccess,
{
    #[inline]
    fn add_assign(&mut self, n: isize) {
        self.value = self.value.offset(n);
    }
}

impl<T> SubAssign<isize> for DirectIterator<T>
where
    T: RandomAccess,
{
    #[inline]
    fn sub_assign(&mut self, n: isize) {
        self.value = self.value.offset(-n);
    }
}

impl<T> Add<isize> for DirectIterator<T>
where
    T: RandomAccess,
{
    type Output = Self;

    #[inline]
    fn add(mut self, n: isize) -> Self::Output {
        self += n;
        self
    }
}

impl<T> Sub<isize> for DirectIterator<T>
where
    T: RandomAccess,
{
    type Output = Self;

    #[inline]
    fn sub(mut self, n: isize) -> Self::Output {
        self -= n;
        self
    }
}

/// Signed distance between two cursors, `self - rhs`.
impl<T> Sub for DirectIterator<T>
where
    T: RandomAccess,
{
    type Output = isize;

    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        rhs.value.distance(&self.value)
    }
}

/// Yields the current value and advances; never ends on its own.
impl<T> Iterator for DirectIterator<T>
where
    T: Forward,
{
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        Some(self.post_inc().into_inner())
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}

impl<T> FusedIterator for DirectIterator<T> where T: Forward {}

/// The values from a start up to, but excluding, an end.
///
/// Iteration stops when the current value compares equal to the end, so
/// an end that is never reached produces an unbounded sequence.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DirectRange<T> {
    front: DirectIterator<T>,
    back: DirectIterator<T>,
}

impl<T> Iterator for DirectRange<T>
where
    T: Forward,
{
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.front == self.back {
            return None;
        }
        Some(self.front.post_inc().into_inner())
    }
}

impl<T> DoubleEndedIterator for DirectRange<T>
where
    T: Bidirectional,
{
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front == self.back {
            return None;
        }
        Some(self.back.dec().get().clone())
    }
}

impl<T> FusedIterator for DirectRange<T> where T: Forward {}

/// Creates the range `[start, end)` of directly iterated values.
///
/// # Examples
///
/// ```rust
/// # use ez_core::utils::direct::direct_range;
/// let v: Vec<_> = direct_range(-2, 2).rev().collect();
/// assert_eq!(v, vec![1, 0, -1, -2]);
/// ```
#[inline]
pub fn direct_range<T>(start: T, end: T) -> DirectRange<T>
where
    T: Forward,
{
    DirectRange {
        front: DirectIterator::new(start),
        back: DirectIterator::new(end),
    }
}

/// Returns the valid indices of `slice`, in order.
#[inline]
pub fn indices<T>(slice: &[T]) -> DirectRange<usize> {
    direct_range(0, slice.len())
}
