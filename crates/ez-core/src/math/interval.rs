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

use crate::{
    math::{
        boundary::{self, Boundary, Edges},
        cursor::IntervalIterator,
        error::IntervalError,
        stepped::{SteppedRange, Steps},
    },
    num::{
        checked::CheckedBoundOps,
        numeric::{IntervalNumeric, StepNumeric},
    },
};
use num_traits::{AsPrimitive, Signed};
use std::{
    fmt,
    ops::{Add, BitOr, Bound, Div, Mul, Range, RangeBounds, RangeInclusive, Sub},
};
use tracing::debug;

/// A mathematical interval with independently open or closed endpoints.
///
/// No ordering is enforced between `lower` and `upper`: an interval whose
/// bounds are reversed (or equal with an open side) is simply empty. All
/// empty intervals compare equal, regardless of their bounds and flags.
///
/// # Examples
///
/// ```rust
/// # use ez_core::math::interval::Interval;
/// let iv = Interval::closed_open(0, 10);
/// assert!(iv.contains(0));
/// assert!(!iv.contains(10));
/// assert_eq!(iv.to_string(), "[0, 10)");
///
/// assert!(!Interval::closed(0, 0).is_empty());
/// assert!(Interval::closed_open(0, 0).is_empty());
/// assert!(Interval::closed(1, 0).is_empty());
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Interval<T>
where
    T: IntervalNumeric,
{
    lower: T,
    upper: T,
    left: Boundary,
    right: Boundary,
}

/// One bound of an arithmetic operand (or of a partial result) with its openness.
#[derive(Debug, Clone, Copy)]
struct Corner<T> {
    value: T,
    open: bool,
}

impl<T> Corner<T>
where
    T: IntervalNumeric,
{
    /// A closed zero absorbs multiplication, so the product is attained exactly.
    #[inline]
    fn is_exact_zero(&self) -> bool {
        !self.open && self.value.is_zero()
    }
}

impl<T> Interval<T>
where
    T: IntervalNumeric,
{
    /// Creates a new `Interval` with the given bounds and boundary kinds.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use ez_core::math::{boundary::Boundary, interval::Interval};
    /// let iv = Interval::new(-2, 7, Boundary::Open, Boundary::Closed);
    /// assert_eq!(iv, Interval::open_closed(-2, 7));
    /// ```
    #[inline]
    pub const fn new(lower: T, upper: T, left: Boundary, right: Boundary) -> Self {
        Self {
            lower,
            upper,
            left,
            right,
        }
    }

    /// Creates the closed interval `[lower, upper]`.
    #[inline]
    pub const fn closed(lower: T, upper: T) -> Self {
        Self::new(lower, upper, Boundary::Closed, Boundary::Closed)
    }

    /// Creates the open interval `(lower, upper)`.
    #[inline]
    pub const fn open(lower: T, upper: T) -> Self {
        Self::new(lower, upper, Boundary::Open, Boundary::Open)
    }

    /// Creates the half-open interval `[lower, upper)`.
    #[inline]
    pub const fn closed_open(lower: T, upper: T) -> Self {
        Self::new(lower, upper, Boundary::Closed, Boundary::Open)
    }

    /// Creates the half-open interval `(lower, upper]`.
    #[inline]
    pub const fn open_closed(lower: T, upper: T) -> Self {
        Self::new(lower, upper, Boundary::Open, Boundary::Closed)
    }

    /// Returns the canonical empty interval `(0, 0)`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use ez_core::math::interval::Interval;
    /// assert!(Interval::<i32>::empty().is_empty());
    /// assert_eq!(Interval::<i32>::empty(), Interval::closed(3, 1));
    /// ```
    #[inline]
    pub fn empty() -> Self {
        Self::open(T::zero(), T::zero())
    }

    /// Returns the lower bound.
    #[inline]
    pub const fn lower(&self) -> T {
        self.lower
    }

    /// Returns the upper bound.
    #[inline]
    pub const fn upper(&self) -> T {
        self.upper
    }

    /// Returns the kind of the lower boundary.
    #[inline]
    pub const fn left(&self) -> Boundary {
        self.left
    }

    /// Returns the kind of the upper boundary.
    #[inline]
    pub const fn right(&self) -> Boundary {
        self.right
    }

    #[inline]
    pub const fn left_open(&self) -> bool {
        self.left.is_open()
    }

    #[inline]
    pub const fn left_closed(&self) -> bool {
        self.left.is_closed()
    }

    #[inline]
    pub const fn right_open(&self) -> bool {
        self.right.is_open()
    }

    #[inline]
    pub const fn right_closed(&self) -> bool {
        self.right.is_closed()
    }

    #[inline]
    fn edges(&self) -> Edges<'_, T> {
        Edges {
            lower: &self.lower,
            upper: &self.upper,
            left: self.left,
            right: self.right,
        }
    }

    #[inline]
    fn corners(&self) -> [Corner<T>; 2] {
        [
            Corner {
                value: self.lower,
                open: self.left.is_open(),
            },
            Corner {
                value: self.upper,
                open: self.right.is_open(),
            },
        ]
    }

    /// Returns `true` if no value lies in the interval.
    ///
    /// `lower == upper` is empty unless both sides are closed.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use ez_core::math::interval::Interval;
    /// assert!(!Interval::closed(0, 0).is_empty());
    /// assert!(Interval::open_closed(0, 0).is_empty());
    /// assert!(!Interval::open(0, 1).is_empty());
    /// ```
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.edges().is_empty()
    }

    /// Returns `true` if the interval holds exactly one value, `[v, v]`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use ez_core::math::interval::Interval;
    /// assert!(Interval::closed(1, 1).is_singleton());
    /// assert!(!Interval::closed(0, 1).is_singleton());
    /// ```
    #[inline]
    pub fn is_singleton(&self) -> bool {
        self.left.is_closed() && self.right.is_closed() && self.lower == self.upper
    }

    /// Returns `true` if `value` lies in the interval.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use ez_core::math::interval::Interval;
    /// let iv = Interval::open_closed(0, 2);
    /// assert!(!iv.contains(0));
    /// assert!(iv.contains(1));
    /// assert!(iv.contains(2));
    /// ```
    #[inline]
    pub fn contains(&self, value: T) -> bool {
        self.edges().contains(&value)
    }

    /// Returns `upper - lower`.
    ///
    /// # Errors
    ///
    /// Returns [`IntervalError::EmptyInterval`] if the interval is empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use ez_core::math::interval::Interval;
    /// assert_eq!(Interval::open_closed(-6, 9).diameter(), Ok(15));
    /// assert!(Interval::closed(1, 0).diameter().is_err());
    /// ```
    #[inline]
    pub fn diameter(&self) -> Result<T, IntervalError> {
        if self.is_empty() {
            return Err(IntervalError::empty("diameter"));
        }
        Ok(self.upper - self.lower)
    }

    /// Returns `(lower + upper) / 2` computed in `T`.
    ///
    /// Integer types truncate; use [`Interval::midpoint_as`] to compute in a
    /// wider or floating type.
    ///
    /// # Errors
    ///
    /// Returns [`IntervalError::EmptyInterval`] if the interval is empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use ez_core::math::interval::Interval;
    /// assert_eq!(Interval::open_closed(-6, 9).midpoint(), Ok(1));
    /// assert_eq!(Interval::open_closed(-6.0, 9.0).midpoint(), Ok(1.5));
    /// ```
    #[inline]
    pub fn midpoint(&self) -> Result<T, IntervalError> {
        if self.is_empty() {
            return Err(IntervalError::empty("midpoint"));
        }
        Ok((self.upper + self.lower) / (T::one() + T::one()))
    }

    /// Returns `(lower + upper) / 2` computed in `U`.
    ///
    /// # Errors
    ///
    /// Returns [`IntervalError::EmptyInterval`] if the interval is empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use ez_core::math::interval::Interval;
    /// assert_eq!(Interval::open_closed(-6, 9).midpoint_as::<f64>(), Ok(1.5));
    /// ```
    #[inline]
    pub fn midpoint_as<U>(&self) -> Result<U, IntervalError>
    where
        T: AsPrimitive<U>,
        U: IntervalNumeric + 'static,
    {
        if self.is_empty() {
            return Err(IntervalError::empty("midpoint"));
        }
        let upper: U = self.upper.as_();
        let lower: U = self.lower.as_();
        Ok((upper + lower) / (U::one() + U::one()))
    }

    /// Returns half of the diameter computed in `T`.
    ///
    /// # Errors
    ///
    /// Returns [`IntervalError::EmptyInterval`] if the interval is empty.
    #[inline]
    pub fn radius(&self) -> Result<T, IntervalError> {
        if self.is_empty() {
            return Err(IntervalError::empty("radius"));
        }
        Ok((self.upper - self.lower) / (T::one() + T::one()))
    }

    /// Returns half of the diameter computed in `U`.
    ///
    /// # Errors
    ///
    /// Returns [`IntervalError::EmptyInterval`] if the interval is empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use ez_core::math::interval::Interval;
    /// let iv = Interval::open_closed(-6, 9);
    /// assert_eq!(iv.radius(), Ok(7));
    /// assert_eq!(iv.radius_as::<f64>(), Ok(7.5));
    /// ```
    #[inline]
    pub fn radius_as<U>(&self) -> Result<U, IntervalError>
    where
        T: AsPrimitive<U>,
        U: IntervalNumeric + 'static,
    {
        if self.is_empty() {
            return Err(IntervalError::empty("radius"));
        }
        let diameter: U = (self.upper - self.lower).as_();
        Ok(diameter / (U::one() + U::one()))
    }

    /// Converts both bounds to `U`, keeping the boundary kinds.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use ez_core::math::interval::Interval;
    /// let iv: Interval<f64> = Interval::closed_open(1, 4).cast();
    /// assert_eq!(iv, Interval::closed_open(1.0, 4.0));
    /// ```
    #[inline]
    pub fn cast<U>(&self) -> Interval<U>
    where
        T: AsPrimitive<U>,
        U: IntervalNumeric + 'static,
    {
        Interval::new(self.lower.as_(), self.upper.as_(), self.left, self.right)
    }

    /// Returns `true` if every value of `self` lies in `other`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use ez_core::math::interval::Interval;
    /// assert!(Interval::open(1, 2).is_subset(&Interval::open(0, 2)));
    /// assert!(!Interval::closed(1, 2).is_subset(&Interval::closed_open(0, 2)));
    /// ```
    #[inline]
    pub fn is_subset(&self, other: &Self) -> bool {
        boundary::subset(self.edges(), other.edges())
    }

    /// Returns `true` if `self` lies strictly inside `other` at both ends.
    ///
    /// At each end, `self` must either reach less far than `other` or, when
    /// the bounds coincide, be open where `other` is closed. An empty
    /// interval is a proper subset of every non-empty one.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use ez_core::math::interval::Interval;
    /// assert!(Interval::closed(1, 2).is_proper_subset(&Interval::closed(0, 3)));
    /// assert!(Interval::open(1, 2).is_proper_subset(&Interval::closed(1, 2)));
    /// assert!(!Interval::closed(1, 2).is_proper_subset(&Interval::closed(0, 2)));
    /// ```
    #[inline]
    pub fn is_proper_subset(&self, other: &Self) -> bool {
        boundary::proper_subset(self.edges(), other.edges())
    }

    /// Returns `true` if every value of `other` lies in `self`.
    #[inline]
    pub fn is_superset(&self, other: &Self) -> bool {
        boundary::superset(self.edges(), other.edges())
    }

    /// Returns `true` if `other` is a proper subset of `self`.
    #[inline]
    pub fn is_proper_superset(&self, other: &Self) -> bool {
        boundary::proper_superset(self.edges(), other.edges())
    }

    /// Calculates the intersection of two intervals.
    ///
    /// Each side of the result takes its boundary kind from the operand
    /// supplying the tighter bound. When both operands share a bound the
    /// side is open if either operand is open there.
    ///
    /// # Errors
    ///
    /// Returns [`IntervalError::EmptyInterval`] if the intersection is empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use ez_core::math::interval::Interval;
    /// let a = Interval::closed(1, 3);
    /// let b = Interval::closed(0, 2);
    /// assert_eq!(a.intersection(&b), Ok(Interval::closed(1, 2)));
    /// assert_eq!(a | b, Ok(Interval::closed(1, 2)));
    ///
    /// let c = Interval::closed_open(0, 2);
    /// assert_eq!(a.intersection(&c), Ok(Interval::closed_open(1, 2)));
    ///
    /// assert!(Interval::closed(0, 1).intersection(&Interval::closed(3, 4)).is_err());
    /// ```
    pub fn intersection(&self, other: &Self) -> Result<Self, IntervalError> {
        let (lower, left) = if self.lower > other.lower {
            (self.lower, self.left)
        } else if other.lower > self.lower {
            (other.lower, other.left)
        } else {
            (
                self.lower,
                Boundary::from_open(self.left.is_open() || other.left.is_open()),
            )
        };
        let (upper, right) = if self.upper < other.upper {
            (self.upper, self.right)
        } else if other.upper < self.upper {
            (other.upper, other.right)
        } else {
            (
                self.upper,
                Boundary::from_open(self.right.is_open() || other.right.is_open()),
            )
        };

        let result = Self::new(lower, upper, left, right);
        if result.is_empty() {
            debug!(?lower, ?upper, "intersection of intervals is empty");
            return Err(IntervalError::empty("intersection"));
        }
        Ok(result)
    }

    /// Evaluates `op` on the four corner combinations and spans the results.
    ///
    /// If several corners reach the extremal value, the bound is attained
    /// as soon as one of them is closed.
    fn combine<F>(self, rhs: Self, op: F) -> Self
    where
        F: Fn(Corner<T>, Corner<T>) -> Corner<T>,
    {
        if self.is_empty() || rhs.is_empty() {
            return Self::empty();
        }

        let [a_lower, a_upper] = self.corners();
        let [b_lower, b_upper] = rhs.corners();
        let candidates = [
            op(a_lower, b_lower),
            op(a_lower, b_upper),
            op(a_upper, b_lower),
            op(a_upper, b_upper),
        ];

        let mut low = candidates[0];
        let mut high = candidates[0];
        for corner in &candidates[1..] {
            if corner.value < low.value {
                low = *corner;
            } else if corner.value == low.value {
                low.open &= corner.open;
            }
            if corner.value > high.value {
                high = *corner;
            } else if corner.value == high.value {
                high.open &= corner.open;
            }
        }

        Self::new(
            low.value,
            high.value,
            Boundary::from_open(low.open),
            Boundary::from_open(high.open),
        )
    }

    /// Returns `true` if zero lies in `[lower, upper]`, whatever the boundary kinds.
    #[inline]
    fn reaches_zero(&self) -> bool {
        self.lower <= T::zero() && T::zero() <= self.upper
    }
}

impl<T> Interval<T>
where
    T: StepNumeric,
{
    /// Returns a view that walks the interval in steps of `step`.
    ///
    /// # Panics
    ///
    /// Panics if `step` is zero.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use ez_core::math::interval::Interval;
    /// let v: Vec<_> = Interval::closed(0, 10).step(5).into_iter().collect();
    /// assert_eq!(v, vec![0, 5, 10]);
    /// ```
    #[inline]
    pub fn step(&self, step: T) -> SteppedRange<T> {
        SteppedRange::new(self.lower, self.upper, step, self.left, self.right)
    }

    /// Creates an iterator over the integers in the interval.
    ///
    /// # Panics
    ///
    /// Panics if the interval is left-open.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use ez_core::math::interval::Interval;
    /// let v: Vec<_> = Interval::closed(1, 3).iter().collect();
    /// assert_eq!(v, vec![1, 2, 3]);
    /// ```
    #[inline]
    pub fn iter(&self) -> Steps<T> {
        self.step(T::one()).iter()
    }

    /// Unit-step cursor on `lower`. See [`SteppedRange::begin`].
    #[inline]
    pub fn begin(&self) -> IntervalIterator<T> {
        self.step(T::one()).begin()
    }

    /// Unit-step sentinel cursor. See [`SteppedRange::end`].
    #[inline]
    pub fn end(&self) -> IntervalIterator<T> {
        self.step(T::one()).end()
    }
}

impl<T> Interval<T>
where
    T: StepNumeric + Signed,
{
    /// Returns a unit-step view walking from `upper` down to `lower`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use ez_core::math::interval::Interval;
    /// let v: Vec<_> = Interval::open_closed(0, 3).reverse().iter().collect();
    /// assert_eq!(v, vec![3, 2, 1]);
    /// ```
    #[inline]
    pub fn reverse(&self) -> SteppedRange<T> {
        self.step(T::one()).reverse()
    }

    /// Unit-step cursor on the last value, walking down. See [`SteppedRange::rbegin`].
    #[inline]
    pub fn rbegin(&self) -> IntervalIterator<T> {
        self.step(T::one()).rbegin()
    }

    /// See [`SteppedRange::rend`].
    #[inline]
    pub fn rend(&self) -> IntervalIterator<T> {
        self.step(T::one()).rend()
    }
}

impl<T> PartialEq for Interval<T>
where
    T: IntervalNumeric,
{
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        boundary::equal(self.edges(), other.edges())
    }
}

impl<T> Eq for Interval<T> where T: IntervalNumeric + Eq {}

impl<T> Default for Interval<T>
where
    T: IntervalNumeric,
{
    #[inline]
    fn default() -> Self {
        Self::empty()
    }
}

/// Minkowski sum of two intervals.
///
/// # Panics
///
/// Panics if a corner sum overflows an integer bound type.
impl<T> Add for Interval<T>
where
    T: IntervalNumeric,
{
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        self.combine(rhs, |a, b| Corner {
            value: a
                .value
                .checked_add_bound(b.value)
                .expect("Interval addition overflows the bound type"),
            open: a.open || b.open,
        })
    }
}

/// # Panics
///
/// Panics if a corner difference overflows an integer bound type.
impl<T> Sub for Interval<T>
where
    T: IntervalNumeric,
{
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        self.combine(rhs, |a, b| Corner {
            value: a
                .value
                .checked_sub_bound(b.value)
                .expect("Interval subtraction overflows the bound type"),
            open: a.open || b.open,
        })
    }
}

/// A closed zero factor makes its corner products exact, so they stay closed.
///
/// # Panics
///
/// Panics if a corner product overflows an integer bound type.
impl<T> Mul for Interval<T>
where
    T: IntervalNumeric,
{
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        self.combine(rhs, |a, b| Corner {
            value: a
                .value
                .checked_mul_bound(b.value)
                .expect("Interval multiplication overflows the bound type"),
            open: !(a.is_exact_zero() || b.is_exact_zero()) && (a.open || b.open),
        })
    }
}

/// Fails with [`IntervalError::DivideByZero`] if zero lies in
/// `[rhs.lower, rhs.upper]`. A zero dividend corner is an exact quotient
/// and stays closed even when that bound is open in the dividend.
///
/// # Panics
///
/// Panics if a corner quotient overflows an integer bound type (`MIN / -1`).
impl<T> Div for Interval<T>
where
    T: IntervalNumeric,
{
    type Output = Result<Self, IntervalError>;

    fn div(self, rhs: Self) -> Self::Output {
        if !rhs.is_empty() && rhs.reaches_zero() {
            debug!(divisor = ?rhs, "rejected interval division by zero");
            return Err(IntervalError::DivideByZero);
        }
        Ok(self.combine(rhs, |a, b| Corner {
            value: a
                .value
                .checked_div_bound(b.value)
                .expect("Interval division overflows the bound type"),
            open: !a.value.is_zero() && (a.open || b.open),
        }))
    }
}

/// Intersection, see [`Interval::intersection`].
impl<T> BitOr for Interval<T>
where
    T: IntervalNumeric,
{
    type Output = Result<Self, IntervalError>;

    #[inline]
    fn bitor(self, rhs: Self) -> Self::Output {
        self.intersection(&rhs)
    }
}

impl<T> fmt::Display for Interval<T>
where
    T: IntervalNumeric + fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}, {}{}",
            self.left.left_bracket(),
            self.lower,
            self.upper,
            self.right.right_bracket()
        )
    }
}

impl<T> RangeBounds<T> for Interval<T>
where
    T: IntervalNumeric,
{
    fn start_bound(&self) -> Bound<&T> {
        match self.left {
            Boundary::Open => Bound::Excluded(&self.lower),
            Boundary::Closed => Bound::Included(&self.lower),
        }
    }

    fn end_bound(&self) -> Bound<&T> {
        match self.right {
            Boundary::Open => Bound::Excluded(&self.upper),
            Boundary::Closed => Bound::Included(&self.upper),
        }
    }
}

impl<T> IntoIterator for Interval<T>
where
    T: StepNumeric,
{
    type Item = T;
    type IntoIter = Steps<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> IntoIterator for &Interval<T>
where
    T: StepNumeric,
{
    type Item = T;
    type IntoIter = Steps<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> From<Range<T>> for Interval<T>
where
    T: IntervalNumeric,
{
    #[inline]
    fn from(range: Range<T>) -> Self {
        Self::closed_open(range.start, range.end)
    }
}

impl<T> From<RangeInclusive<T>> for Interval<T>
where
    T: IntervalNumeric,
{
    #[inline]
    fn from(range: RangeInclusive<T>) -> Self {
        let (lower, upper) = range.into_inner();
        Self::closed(lower, upper)
    }
}
