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

//! # Interval Builder
//!
//! A two-step way of spelling an interval one bound at a time, so call
//! sites read the same left to right as the bracket notation:
//!
//! ```rust
//! # use ez_core::math::{builder::lower_closed, interval::Interval};
//! let iv = lower_closed(0).upper_open(10);
//! assert_eq!(iv, Interval::closed_open(0, 10));
//! ```

use crate::{
    math::{boundary::Boundary, interval::Interval},
    num::numeric::IntervalNumeric,
};

/// A lower bound waiting for its upper counterpart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LowerBound<T>
where
    T: IntervalNumeric,
{
    value: T,
    left: Boundary,
}

impl<T> LowerBound<T>
where
    T: IntervalNumeric,
{
    #[inline]
    pub const fn new(value: T, left: Boundary) -> Self {
        Self { value, left }
    }

    #[inline]
    pub const fn value(&self) -> T {
        self.value
    }

    #[inline]
    pub const fn boundary(&self) -> Boundary {
        self.left
    }

    /// Completes the interval with an included upper bound.
    #[inline]
    pub const fn upper_closed(self, upper: T) -> Interval<T> {
        Interval::new(self.value, upper, self.left, Boundary::Closed)
    }

    /// Completes the interval with an excluded upper bound.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use ez_core::math::builder::lower_open;
    /// let iv = lower_open(1).upper_open(4);
    /// assert!(!iv.contains(1));
    /// assert!(iv.contains(2));
    /// assert!(!iv.contains(4));
    /// ```
    #[inline]
    pub const fn upper_open(self, upper: T) -> Interval<T> {
        Interval::new(self.value, upper, self.left, Boundary::Open)
    }
}

/// Starts an interval whose lower bound is included.
#[inline]
pub const fn lower_closed<T>(value: T) -> LowerBound<T>
where
    T: IntervalNumeric,
{
    LowerBound::new(value, Boundary::Closed)
}

/// Starts an interval whose lower bound is excluded.
#[inline]
pub const fn lower_open<T>(value: T) -> LowerBound<T>
where
    T: IntervalNumeric,
{
    LowerBound::new(value, Boundary::Open)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builds_all_four_kinds() {
        assert_eq!(lower_closed(1).upper_closed(3), Interval::closed(1, 3));
        assert_eq!(lower_closed(1).upper_open(3), Interval::closed_open(1, 3));
        assert_eq!(lower_open(1).upper_closed(3), Interval::open_closed(1, 3));
        assert_eq!(lower_open(1).upper_open(3), Interval::open(1, 3));
    }

    #[test]
    fn test_lower_bound_accessors() {
        let lb = lower_open(2.5);
        assert_eq!(lb.value(), 2.5);
        assert_eq!(lb.boundary(), Boundary::Open);
    }

    #[test]
    fn test_built_interval_keeps_flags() {
        let iv = lower_open(-1).upper_closed(1);
        assert!(iv.left_open());
        assert!(iv.right_closed());
        assert_eq!(iv.to_string(), "(-1, 1]");
    }
}
