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

//! # Boundary Algebra
//!
//! Open/closed aware comparisons shared by every relational and membership
//! query on intervals. All of them reduce to a single primitive,
//! [`less_than`], whose strictness is chosen from the boundary flags of the
//! operands instead of branching at every call site.
//!
//! The rules for the set relations between `A` and `B` are:
//!
//! | relation            | lower comparison may be equal if         | upper comparison may be equal if          |
//! |---------------------|------------------------------------------|-------------------------------------------|
//! | `A ⊆ B`             | `A` is left-open or `B` is left-closed   | `A` is right-open or `B` is right-closed  |
//! | `A` proper in `B`   | `A` is left-open and `B` is left-closed  | `A` is right-open and `B` is right-closed |
//!
//! An empty `A` is a subset of everything and a proper subset of every
//! non-empty interval.

/// Whether an interval endpoint belongs to the interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Boundary {
    /// The endpoint is excluded.
    Open,
    /// The endpoint is included.
    Closed,
}

impl Boundary {
    /// Returns `Boundary::Open` if `open` is `true`, `Boundary::Closed` otherwise.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use ez_core::math::boundary::Boundary;
    /// assert_eq!(Boundary::from_open(true), Boundary::Open);
    /// assert_eq!(Boundary::from_open(false), Boundary::Closed);
    /// ```
    #[inline]
    pub const fn from_open(open: bool) -> Self {
        if open { Self::Open } else { Self::Closed }
    }

    /// Returns `true` if the endpoint is excluded.
    #[inline]
    pub const fn is_open(self) -> bool {
        matches!(self, Self::Open)
    }

    /// Returns `true` if the endpoint is included.
    #[inline]
    pub const fn is_closed(self) -> bool {
        matches!(self, Self::Closed)
    }

    /// The bracket used when this boundary is the lower one.
    #[inline]
    pub const fn left_bracket(self) -> char {
        match self {
            Self::Open => '(',
            Self::Closed => '[',
        }
    }

    /// The bracket used when this boundary is the upper one.
    #[inline]
    pub const fn right_bracket(self) -> char {
        match self {
            Self::Open => ')',
            Self::Closed => ']',
        }
    }
}

/// Compares `lhs` against `rhs`, admitting equality only if `or_equal` is set.
///
/// This is the single primitive behind emptiness, containment and the set
/// relations.
///
/// # Examples
///
/// ```rust
/// # use ez_core::math::boundary::less_than;
/// assert!(!less_than(&3, &3, false));
/// assert!(less_than(&3, &3, true));
/// assert!(less_than(&2, &3, false));
/// ```
#[inline]
pub fn less_than<T>(lhs: &T, rhs: &T, or_equal: bool) -> bool
where
    T: PartialOrd,
{
    if or_equal { lhs <= rhs } else { lhs < rhs }
}

/// A borrowed view of the bounds and boundary flags of an interval.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Edges<'a, T> {
    pub lower: &'a T,
    pub upper: &'a T,
    pub left: Boundary,
    pub right: Boundary,
}

impl<T> Edges<'_, T>
where
    T: PartialOrd,
{
    /// `upper < lower`, or `upper <= lower` once either side is open.
    #[inline]
    pub fn is_empty(&self) -> bool {
        less_than(
            self.upper,
            self.lower,
            self.left.is_open() || self.right.is_open(),
        )
    }

    #[inline]
    pub fn contains(&self, value: &T) -> bool {
        less_than(self.lower, value, self.left.is_closed())
            && less_than(value, self.upper, self.right.is_closed())
    }
}

/// Returns `true` if `lhs` is a subset of `rhs`.
#[inline]
pub(crate) fn subset<T>(lhs: Edges<'_, T>, rhs: Edges<'_, T>) -> bool
where
    T: PartialOrd,
{
    let lower_or_equal = lhs.left.is_open() || rhs.left.is_closed();
    let upper_or_equal = lhs.right.is_open() || rhs.right.is_closed();
    lhs.is_empty()
        || (less_than(rhs.lower, lhs.lower, lower_or_equal)
            && less_than(lhs.upper, rhs.upper, upper_or_equal))
}

/// Returns `true` if `lhs` lies strictly inside `rhs` on both sides.
#[inline]
pub(crate) fn proper_subset<T>(lhs: Edges<'_, T>, rhs: Edges<'_, T>) -> bool
where
    T: PartialOrd,
{
    let lower_or_equal = lhs.left.is_open() && rhs.left.is_closed();
    let upper_or_equal = lhs.right.is_open() && rhs.right.is_closed();
    (lhs.is_empty() && !rhs.is_empty())
        || (less_than(rhs.lower, lhs.lower, lower_or_equal)
            && less_than(lhs.upper, rhs.upper, upper_or_equal))
}

#[inline]
pub(crate) fn superset<T>(lhs: Edges<'_, T>, rhs: Edges<'_, T>) -> bool
where
    T: PartialOrd,
{
    subset(rhs, lhs)
}

#[inline]
pub(crate) fn proper_superset<T>(lhs: Edges<'_, T>, rhs: Edges<'_, T>) -> bool
where
    T: PartialOrd,
{
    proper_subset(rhs, lhs)
}

/// Two empty intervals are equal whatever their bounds; otherwise flags and bounds must match.
#[inline]
pub(crate) fn equal<T>(lhs: Edges<'_, T>, rhs: Edges<'_, T>) -> bool
where
    T: PartialOrd,
{
    (lhs.is_empty() && rhs.is_empty())
        || (lhs.left == rhs.left
            && lhs.right == rhs.right
            && lhs.lower == rhs.lower
            && lhs.upper == rhs.upper)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn edges<'a>(lower: &'a i32, upper: &'a i32, left: Boundary, right: Boundary) -> Edges<'a, i32> {
        Edges {
            lower,
            upper,
            left,
            right,
        }
    }

    #[test]
    fn test_less_than() {
        assert!(less_than(&1, &2, false));
        assert!(less_than(&1, &2, true));
        assert!(!less_than(&2, &2, false));
        assert!(less_than(&2, &2, true));
        assert!(!less_than(&3, &2, true));
    }

    #[test]
    fn test_less_than_nan_is_never_less() {
        assert!(!less_than(&f64::NAN, &0.0, true));
        assert!(!less_than(&0.0, &f64::NAN, false));
    }

    #[test]
    fn test_boundary_brackets() {
        assert_eq!(Boundary::Open.left_bracket(), '(');
        assert_eq!(Boundary::Closed.left_bracket(), '[');
        assert_eq!(Boundary::Open.right_bracket(), ')');
        assert_eq!(Boundary::Closed.right_bracket(), ']');
    }

    #[test]
    fn test_empty_degenerate_point() {
        use crate::math::boundary::Boundary::*;
        assert!(!edges(&0, &0, Closed, Closed).is_empty());
        assert!(edges(&0, &0, Closed, Open).is_empty());
        assert!(edges(&0, &0, Open, Closed).is_empty());
        assert!(edges(&0, &0, Open, Open).is_empty());
    }

    #[test]
    fn test_empty_reversed_bounds() {
        use crate::math::boundary::Boundary::*;
        for (l, r) in [(Closed, Closed), (Closed, Open), (Open, Closed), (Open, Open)] {
            assert!(edges(&1, &0, l, r).is_empty());
        }
    }

    #[test]
    fn test_contains_respects_flags() {
        use crate::math::boundary::Boundary::*;
        let lo = 0;
        let hi = 2;
        assert!(edges(&lo, &hi, Closed, Closed).contains(&0));
        assert!(!edges(&lo, &hi, Open, Closed).contains(&0));
        assert!(edges(&lo, &hi, Open, Closed).contains(&2));
        assert!(!edges(&lo, &hi, Closed, Open).contains(&2));
    }

    #[test]
    fn test_subset_rules() {
        use crate::math::boundary::Boundary::*;
        let (one, two, zero) = (1, 2, 0);
        let a = edges(&one, &two, Open, Open);
        let b = edges(&zero, &two, Open, Open);
        assert!(subset(a, b));
        assert!(!proper_subset(a, b));
        assert!(superset(b, a));
        assert!(!proper_superset(b, a));
    }

    #[test]
    fn test_empty_is_proper_subset_of_non_empty() {
        use crate::math::boundary::Boundary::*;
        let (one, zero, two) = (1, 0, 2);
        let empty = edges(&one, &zero, Closed, Closed);
        let other = edges(&zero, &two, Closed, Closed);
        assert!(subset(empty, other));
        assert!(proper_subset(empty, other));
        assert!(!proper_subset(empty, empty));
        assert!(subset(empty, empty));
    }

    #[test]
    fn test_equal_empties_ignore_flags() {
        use crate::math::boundary::Boundary::*;
        let (one, zero, five, three) = (1, 0, 5, 3);
        assert!(equal(
            edges(&one, &zero, Closed, Closed),
            edges(&five, &three, Open, Closed)
        ));
        assert!(!equal(
            edges(&zero, &one, Closed, Closed),
            edges(&zero, &one, Closed, Open)
        ));
    }
}
