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

//! # Stepped Ranges
//!
//! A `SteppedRange` is a lazy view over the bounds of an interval together
//! with a non-zero step. It computes the grid `lower, lower + step, ...`
//! restricted to the interval and hands it out either as cursor
//! pairs (`begin`/`end`, `rbegin`/`rend`) or as a Rust iterator (`Steps`).
//!
//! ## Sentinel
//!
//! The end cursor sits on the first grid point outside the range. With
//! `k` grid points inside, that is `lower + k * step`, where (truncating
//! division)
//!
//! - closed upper bound: `k = (upper - lower + step) / step`
//! - open upper bound: `k = (upper - lower + step - signum(step)) / step`
//!
//! and `k` is clamped at zero for empty ranges. The same formula serves
//! negative steps, which is how reversed ranges walk from `upper` down.
//!
//! Grid arithmetic is carried out in `i128`, so `Steps` never computes a
//! value outside the interval even when the sentinel itself would overflow
//! `T` (e.g. `[0, 255]` over `u8`).

use crate::{
    math::{boundary::Boundary, cursor::IntervalIterator},
    num::numeric::StepNumeric,
};
use num_traits::{NumCast, Signed, ToPrimitive};
use std::iter::FusedIterator;
use tracing::trace;

/// A lazy view over an interval that is walked in fixed steps.
///
/// # Examples
///
/// ```rust
/// # use ez_core::math::interval::Interval;
/// let evens: Vec<_> = Interval::closed_open(0, 10).step(3).iter().collect();
/// assert_eq!(evens, vec![0, 3, 6, 9]);
///
/// let down: Vec<_> = Interval::closed(1, 3).reverse().iter().collect();
/// assert_eq!(down, vec![3, 2, 1]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SteppedRange<T>
where
    T: StepNumeric,
{
    lower: T,
    upper: T,
    step: T,
    left: Boundary,
    right: Boundary,
}

impl<T> SteppedRange<T>
where
    T: StepNumeric,
{
    /// Creates a stepped range walking from `lower` towards `upper`.
    ///
    /// # Panics
    ///
    /// Panics if `step` is zero.
    #[inline]
    pub fn new(lower: T, upper: T, step: T, left: Boundary, right: Boundary) -> Self {
        assert!(!step.is_zero(), "Invalid stepped range: step must be non-zero");
        trace!(?lower, ?upper, ?step, ?left, ?right, "created stepped range");
        Self {
            lower,
            upper,
            step,
            left,
            right,
        }
    }

    /// Returns the bound the walk starts from.
    #[inline]
    pub const fn lower(&self) -> T {
        self.lower
    }

    /// Returns the bound the walk heads towards.
    #[inline]
    pub const fn upper(&self) -> T {
        self.upper
    }

    #[inline]
    pub const fn step(&self) -> T {
        self.step
    }

    #[inline]
    pub const fn left(&self) -> Boundary {
        self.left
    }

    #[inline]
    pub const fn right(&self) -> Boundary {
        self.right
    }

    /// Returns the number of grid points inside the range.
    ///
    /// # Panics
    ///
    /// Panics if the count exceeds `usize::MAX`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use ez_core::math::interval::Interval;
    /// assert_eq!(Interval::closed(0, 10).step(5).len(), 3);
    /// assert_eq!(Interval::closed_open(0, 10).step(5).len(), 2);
    /// ```
    #[inline]
    pub fn len(&self) -> usize {
        usize::try_from(self.count())
            .expect("SteppedRange: number of grid points exceeds usize::MAX")
    }

    /// Returns `true` if no grid point lies inside the range.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.count() == 0
    }

    /// Returns a cursor on the first grid point.
    ///
    /// # Panics
    ///
    /// Panics if the range is left-open: its lower bound is not a member,
    /// so the walk has no first element.
    #[inline]
    pub fn begin(&self) -> IntervalIterator<T> {
        assert!(
            self.left.is_closed(),
            "Cannot iterate through an interval that is left-open"
        );
        IntervalIterator::new(self.lower, self.step)
    }

    /// Returns a cursor on the sentinel, the first grid point past the range.
    ///
    /// # Panics
    ///
    /// Panics if the sentinel is not representable in `T`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use ez_core::math::interval::Interval;
    /// assert_eq!(*Interval::closed(0, 10).step(3).end().get(), 12);
    /// assert_eq!(*Interval::closed_open(0, 9).step(3).end().get(), 9);
    /// ```
    #[inline]
    pub fn end(&self) -> IntervalIterator<T> {
        IntervalIterator::new(self.sentinel(), self.step)
    }

    /// Creates an iterator over the grid points inside the range.
    ///
    /// # Panics
    ///
    /// Panics if the range is left-open, see [`SteppedRange::begin`].
    #[inline]
    pub fn iter(&self) -> Steps<T> {
        assert!(
            self.left.is_closed(),
            "Cannot iterate through an interval that is left-open"
        );
        let count = self.count();
        let back = if count > 0 {
            self.grid_point(count - 1)
        } else {
            self.lower
        };
        Steps {
            front: self.lower,
            back,
            step: self.step,
            remaining: self.len(),
        }
    }

    fn count(&self) -> i128 {
        let lower = widen(self.lower);
        let upper = widen(self.upper);
        let step = widen(self.step);
        let bias = if self.right.is_open() {
            step - step.signum()
        } else {
            step
        };
        let numerator = upper
            .checked_sub(lower)
            .and_then(|span| span.checked_add(bias))
            .expect("SteppedRange: span between bounds exceeds i128");
        (numerator / step).max(0)
    }

    #[inline]
    fn sentinel(&self) -> T {
        self.grid_point(self.count())
    }

    fn grid_point(&self, k: i128) -> T {
        let value = k
            .checked_mul(widen(self.step))
            .and_then(|offset| offset.checked_add(widen(self.lower)))
            .expect("SteppedRange: grid point exceeds i128");
        <T as NumCast>::from(value)
            .expect("SteppedRange: grid point is not representable in the element type")
    }
}

impl<T> SteppedRange<T>
where
    T: StepNumeric + Signed,
{
    /// Returns the same range walked from `upper` to `lower`.
    ///
    /// The step is negated and the boundary flags swap sides.
    #[inline]
    pub fn reverse(&self) -> Self {
        Self::new(self.upper, self.lower, -self.step, self.right, self.left)
    }

    /// Returns a cursor on the last grid point, walking backwards.
    ///
    /// # Panics
    ///
    /// Panics if the range is right-open, or if the sentinel is not
    /// representable in `T`.
    #[inline]
    pub fn rbegin(&self) -> IntervalIterator<T> {
        assert!(
            self.right.is_closed(),
            "Cannot iterate backwards through an interval that is right-open"
        );
        IntervalIterator::new(self.sentinel() - self.step, -self.step)
    }

    /// Returns a cursor one step before `lower`, walking backwards.
    #[inline]
    pub fn rend(&self) -> IntervalIterator<T> {
        IntervalIterator::new(self.lower - self.step, -self.step)
    }
}

#[inline]
fn widen<T>(value: T) -> i128
where
    T: StepNumeric,
{
    ToPrimitive::to_i128(&value).expect("SteppedRange: bound is not representable as i128")
}

/// An iterator over the grid points of a `SteppedRange`.
///
/// # Examples
///
/// ```rust
/// # use ez_core::math::interval::Interval;
/// let mut steps = Interval::closed(1, 9).step(4).iter();
/// assert_eq!(steps.len(), 3);
/// assert_eq!(steps.next(), Some(1));
/// assert_eq!(steps.next_back(), Some(9));
/// assert_eq!(steps.next(), Some(5));
/// assert_eq!(steps.next(), None);
/// ```
#[derive(Debug, Clone)]
pub struct Steps<T>
where
    T: StepNumeric,
{
    front: T,
    back: T,
    step: T,
    remaining: usize,
}

impl<T> Iterator for Steps<T>
where
    T: StepNumeric,
{
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let result = self.front;
        self.remaining -= 1;
        if self.remaining > 0 {
            self.front = self.front + self.step;
        }
        Some(result)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> DoubleEndedIterator for Steps<T>
where
    T: StepNumeric,
{
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let result = self.back;
        self.remaining -= 1;
        if self.remaining > 0 {
            self.back = self.back - self.step;
        }
        Some(result)
    }
}

impl<T> ExactSizeIterator for Steps<T>
where
    T: StepNumeric,
{
    #[inline]
    fn len(&self) -> usize {
        self.remaining
    }
}

impl<T> FusedIterator for Steps<T> where T: StepNumeric {}

impl<T> IntoIterator for SteppedRange<T>
where
    T: StepNumeric,
{
    type Item = T;
    type IntoIter = Steps<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> IntoIterator for &SteppedRange<T>
where
    T: StepNumeric,
{
    type Item = T;
    type IntoIter = Steps<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::boundary::Boundary::{Closed, Open};

    fn range(lower: i32, upper: i32, step: i32, left: Boundary, right: Boundary) -> SteppedRange<i32> {
        SteppedRange::new(lower, upper, step, left, right)
    }

    fn walk<T: StepNumeric>(mut it: IntervalIterator<T>, end: IntervalIterator<T>) -> Vec<T> {
        let mut out = Vec::new();
        while it != end {
            out.push(*it.get());
            it.inc();
        }
        out
    }

    #[test]
    fn test_closed_unit_step() {
        let r = range(1, 3, 1, Closed, Closed);
        assert_eq!(r.iter().collect::<Vec<_>>(), vec![1, 2, 3]);
        assert_eq!(walk(r.begin(), r.end()), vec![1, 2, 3]);
    }

    #[test]
    fn test_right_open_step_three() {
        let r = range(0, 10, 3, Closed, Open);
        assert_eq!(r.iter().collect::<Vec<_>>(), vec![0, 3, 6, 9]);
        assert_eq!(*r.end().get(), 12);
    }

    #[test]
    fn test_sentinel_on_grid_point() {
        // Open upper bound on the grid: the bound itself is the sentinel.
        let open = range(0, 9, 3, Closed, Open);
        assert_eq!(*open.end().get(), 9);
        assert_eq!(open.len(), 3);

        // Closed upper bound on the grid: one step past it.
        let closed = range(0, 9, 3, Closed, Closed);
        assert_eq!(*closed.end().get(), 12);
        assert_eq!(closed.len(), 4);
    }

    #[test]
    fn test_count_property_closed() {
        for a in -7..7 {
            for b in a..a + 20 {
                for s in 1..6 {
                    let r = range(a, b, s, Closed, Closed);
                    let expected = ((b - a) / s + 1) as usize;
                    assert_eq!(r.len(), expected, "[{a}, {b}] step {s}");
                    assert_eq!(r.iter().count(), expected);
                }
            }
        }
    }

    #[test]
    fn test_step_wider_than_interval_yields_lower_once() {
        let r = range(4, 6, 10, Closed, Closed);
        assert_eq!(r.iter().collect::<Vec<_>>(), vec![4]);
        let r = range(4, 6, 10, Closed, Open);
        assert_eq!(r.iter().collect::<Vec<_>>(), vec![4]);
    }

    #[test]
    fn test_empty_ranges_yield_nothing() {
        assert!(range(1, 0, 1, Closed, Closed).is_empty());
        assert!(range(0, 0, 1, Closed, Open).is_empty());
        assert!(range(5, -20, 3, Closed, Closed).is_empty());
        let r = range(1, 0, 1, Closed, Closed);
        assert_eq!(r.begin(), r.end());
        assert_eq!(r.iter().next(), None);
    }

    #[test]
    fn test_step_against_direction_is_empty() {
        let r = range(0, 10, -1, Closed, Closed);
        assert!(r.is_empty());
    }

    #[test]
    fn test_reverse_closed() {
        let r = range(1, 5, 2, Closed, Closed);
        let rev = r.reverse();
        assert_eq!(rev.lower(), 5);
        assert_eq!(rev.upper(), 1);
        assert_eq!(rev.step(), -2);
        assert_eq!(rev.iter().collect::<Vec<_>>(), vec![5, 3, 1]);
    }

    #[test]
    fn test_reverse_swaps_open_sides() {
        // (0, 10] walked downwards starts at 10 and stops before 0.
        let rev = range(0, 10, 1, Open, Closed).reverse();
        assert_eq!(rev.left(), Closed);
        assert_eq!(rev.right(), Open);
        assert_eq!(*rev.end().get(), 0);
        assert_eq!(
            rev.iter().collect::<Vec<_>>(),
            (1..=10).rev().collect::<Vec<_>>()
        );
    }

    #[test]
    fn test_reverse_of_forward_is_forward_reversed() {
        let r = range(-3, 8, 1, Closed, Closed);
        let mut forward: Vec<_> = r.iter().collect();
        forward.reverse();
        assert_eq!(r.reverse().iter().collect::<Vec<_>>(), forward);
        assert_eq!(r.iter().rev().collect::<Vec<_>>(), forward);
    }

    #[test]
    fn test_rbegin_rend() {
        let r = range(0, 10, 3, Closed, Closed);
        assert_eq!(*r.rbegin().get(), 9);
        assert_eq!(*r.rend().get(), -3);
        assert_eq!(walk(r.rbegin(), r.rend()), vec![9, 6, 3, 0]);
    }

    #[test]
    #[should_panic(expected = "left-open")]
    fn test_begin_on_left_open_panics() {
        range(0, 3, 1, Open, Closed).begin();
    }

    #[test]
    #[should_panic(expected = "right-open")]
    fn test_rbegin_on_right_open_panics() {
        range(0, 3, 1, Closed, Open).rbegin();
    }

    #[test]
    #[should_panic(expected = "step must be non-zero")]
    fn test_zero_step_panics() {
        range(0, 3, 0, Closed, Closed);
    }

    #[test]
    fn test_full_unsigned_range_does_not_overflow() {
        let r: SteppedRange<u8> = SteppedRange::new(0, 255, 1, Closed, Closed);
        assert_eq!(r.len(), 256);
        let mut steps = r.iter();
        assert_eq!(steps.next_back(), Some(255));
        assert_eq!(steps.next(), Some(0));
        assert_eq!(steps.count(), 254);
    }

    #[test]
    #[should_panic(expected = "not representable")]
    fn test_unrepresentable_sentinel_panics() {
        let r: SteppedRange<u8> = SteppedRange::new(0, 255, 1, Closed, Closed);
        r.end();
    }

    #[test]
    fn test_double_ended_meet_in_the_middle() {
        let mut steps = range(0, 4, 1, Closed, Closed).iter();
        assert_eq!(steps.next(), Some(0));
        assert_eq!(steps.next_back(), Some(4));
        assert_eq!(steps.len(), 3);
        assert_eq!(steps.next(), Some(1));
        assert_eq!(steps.next_back(), Some(3));
        assert_eq!(steps.next(), Some(2));
        assert_eq!(steps.next(), None);
        assert_eq!(steps.next_back(), None);
    }

    #[test]
    fn test_into_iterator() {
        let r = range(0, 6, 2, Closed, Closed);
        let mut total = 0;
        for v in &r {
            total += v;
        }
        assert_eq!(total, 12);
        assert_eq!(r.into_iter().count(), 4);
    }
}
