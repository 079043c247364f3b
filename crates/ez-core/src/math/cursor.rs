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

//! # Interval Cursor
//!
//! `IntervalIterator` is a random-access cursor over an arithmetic
//! progression `current, current + step, current + 2 * step, ...`. It is
//! what `SteppedRange::begin`/`end` hand out, but it is equally usable on
//! its own.
//!
//! The step is fixed for the lifetime of a cursor, which is what makes
//! offsets and distances meaningful. Equality and ordering look at the
//! current value only.

use crate::num::numeric::IntervalNumeric;
use num_traits::NumCast;
use std::{
    cmp::Ordering,
    iter::FusedIterator,
    ops::{Add, AddAssign, Sub, SubAssign},
};

/// A cursor over evenly spaced values.
///
/// # Examples
///
/// ```rust
/// # use ez_core::math::cursor::IntervalIterator;
/// let mut it = IntervalIterator::new(0, 3);
/// assert_eq!(*it.get(), 0);
/// it.inc();
/// assert_eq!(*it.get(), 3);
/// assert_eq!(it.at(2), 9);
/// assert_eq!(*(it + 1).get(), 6);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct IntervalIterator<T>
where
    T: IntervalNumeric,
{
    current: T,
    step: T,
}

impl<T> IntervalIterator<T>
where
    T: IntervalNumeric,
{
    /// Creates a cursor at `value` that moves by `step`.
    #[inline]
    pub const fn new(value: T, step: T) -> Self {
        Self {
            current: value,
            step,
        }
    }

    /// Returns a reference to the current value.
    #[inline]
    pub const fn get(&self) -> &T {
        &self.current
    }

    /// Returns the fixed step.
    #[inline]
    pub const fn step(&self) -> T {
        self.step
    }

    /// Advances by one step and returns the cursor.
    #[inline]
    pub fn inc(&mut self) -> &mut Self {
        self.current = self.current + self.step;
        self
    }

    /// Retreats by one step and returns the cursor.
    #[inline]
    pub fn dec(&mut self) -> &mut Self {
        self.current = self.current - self.step;
        self
    }

    /// Advances by one step and returns the cursor as it was before.
    #[inline]
    pub fn post_inc(&mut self) -> Self {
        let previous = *self;
        self.inc();
        previous
    }

    /// Retreats by one step and returns the cursor as it was before.
    #[inline]
    pub fn post_dec(&mut self) -> Self {
        let previous = *self;
        self.dec();
        previous
    }

    /// Returns the value `n` steps away without moving the cursor.
    ///
    /// # Panics
    ///
    /// Panics if `|n|` is not representable in `T`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use ez_core::math::cursor::IntervalIterator;
    /// let it = IntervalIterator::new(10, 2);
    /// assert_eq!(it.at(3), 16);
    /// assert_eq!(it.at(-1), 8);
    /// assert_eq!(*it.get(), 10);
    /// ```
    #[inline]
    pub fn at(&self, n: isize) -> T {
        *(*self + n).get()
    }

    #[inline]
    fn offset(&self, n: isize) -> T {
        let magnitude: T = <T as NumCast>::from(n.unsigned_abs())
            .expect("IntervalIterator: offset is not representable in the element type");
        if n >= 0 {
            self.current + magnitude * self.step
        } else {
            self.current - magnitude * self.step
        }
    }
}

impl<T> PartialEq for IntervalIterator<T>
where
    T: IntervalNumeric,
{
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.current == other.current
    }
}

impl<T> PartialOrd for IntervalIterator<T>
where
    T: IntervalNumeric,
{
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.current.partial_cmp(&other.current)
    }
}

impl<T> AddAssign<isize> for IntervalIterator<T>
where
    T: IntervalNumeric,
{
    #[inline]
    fn add_assign(&mut self, n: isize) {
        self.current = self.offset(n);
    }
}

impl<T> SubAssign<isize> for IntervalIterator<T>
where
    T: IntervalNumeric,
{
    #[inline]
    fn sub_assign(&mut self, n: isize) {
        self.current = self.offset(-n);
    }
}

impl<T> Add<isize> for IntervalIterator<T>
where
    T: IntervalNumeric,
{
    type Output = Self;

    #[inline]
    fn add(mut self, n: isize) -> Self::Output {
        self += n;
        self
    }
}

impl<T> Sub<isize> for IntervalIterator<T>
where
    T: IntervalNumeric,
{
    type Output = Self;

    #[inline]
    fn sub(mut self, n: isize) -> Self::Output {
        self -= n;
        self
    }
}

/// The raw difference of the current values. Divide by the step to get a count.
impl<T> Sub for IntervalIterator<T>
where
    T: IntervalNumeric,
{
    type Output = T;

    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        self.current - rhs.current
    }
}

/// An unbounded progression: yields the current value, then advances.
impl<T> Iterator for IntervalIterator<T>
where
    T: IntervalNumeric,
{
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        Some(*self.post_inc().get())
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}

impl<T> FusedIterator for IntervalIterator<T> where T: IntervalNumeric {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_increment_and_decrement() {
        let mut it = IntervalIterator::new(0, 2);
        it.inc();
        assert_eq!(*it.get(), 2);
        it.inc().inc();
        assert_eq!(*it.get(), 6);
        it.dec();
        assert_eq!(*it.get(), 4);
    }

    #[test]
    fn test_post_increment_returns_previous() {
        let mut it = IntervalIterator::new(1, 1);
        let before = it.post_inc();
        assert_eq!(*before.get(), 1);
        assert_eq!(*it.get(), 2);

        let before = it.post_dec();
        assert_eq!(*before.get(), 2);
        assert_eq!(*it.get(), 1);
    }

    #[test]
    fn test_offsets() {
        let i = IntervalIterator::new(0, 5);
        let mut j = i;
        j += 2;
        assert_eq!(*j.get(), 10);
        assert_eq!(i + 2, j);
        j -= 1;
        assert_eq!(*j.get(), 5);
        assert_eq!(j - 1, i);
        assert_eq!(i + 3, IntervalIterator::new(i.at(3), 5));
    }

    #[test]
    fn test_negative_offsets_on_unsigned() {
        let it: IntervalIterator<u32> = IntervalIterator::new(10, 3);
        assert_eq!(it.at(-2), 4);
        assert_eq!(*(it + -3).get(), 1);
    }

    #[test]
    fn test_distance_is_raw_difference() {
        let i = IntervalIterator::new(0, 3);
        let j = i + 4;
        assert_eq!(j - i, 12);
        assert_eq!(i - j, -12);
    }

    #[test]
    fn test_equality_ignores_step() {
        assert_eq!(IntervalIterator::new(4, 1), IntervalIterator::new(4, 2));
        assert_ne!(IntervalIterator::new(4, 1), IntervalIterator::new(5, 1));
    }

    #[test]
    fn test_ordering() {
        let i = IntervalIterator::new(0, 1);
        let m = i + 1;
        assert!(i < m);
        assert!(i <= m);
        assert!(m > i);
        assert!(m >= i);
        assert!(i <= i);
        assert!(i >= i);
        assert!(!(i < i));
    }

    #[test]
    fn test_negative_step_walks_down() {
        let mut it = IntervalIterator::new(3, -1);
        it.inc();
        assert_eq!(*it.get(), 2);
        assert_eq!(it.at(2), 0);
    }

    #[test]
    fn test_floating_point_cursor() {
        let it = IntervalIterator::new(0.0, 0.5);
        assert_eq!(it.at(3), 1.5);
        assert_eq!((it + 4) - it, 2.0);
    }

    #[test]
    fn test_as_unbounded_iterator() {
        let values: Vec<i32> = IntervalIterator::new(1, 4).take(4).collect();
        assert_eq!(values, vec![1, 5, 9, 13]);
    }

    #[test]
    fn test_default() {
        let it: IntervalIterator<i64> = IntervalIterator::default();
        assert_eq!(*it.get(), 0);
        assert_eq!(it.step(), 0);
    }
}
