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

//! # Interval Numeric Traits
//!
//! Unified numeric bounds for interval bounds and stepped iteration.
//!
//! ## Highlights
//!
//! - `IntervalNumeric` requires `Num + NumCast + Copy + PartialOrd + Debug`
//!   plus `CheckedBoundOps`. Every primitive integer and float satisfies
//!   it, so intervals over
//!   `f64` support arithmetic, relations and measurements.
//! - `StepNumeric` additionally requires `PrimInt`. Walking an interval in
//!   fixed steps assumes that repeated addition accumulates no rounding
//!   error, so floating point types are rejected at compile time.

use crate::num::checked::CheckedBoundOps;
use num_traits::{Num, NumCast, PrimInt};
use std::fmt::Debug;

/// A trait alias for numeric types that can be used as interval bounds.
///
/// # Examples
///
/// ```rust
/// # use ez_core::num::numeric::IntervalNumeric;
/// fn assert_numeric<T: IntervalNumeric>() {}
///
/// assert_numeric::<i32>();
/// assert_numeric::<u8>();
/// assert_numeric::<f64>();
/// ```
pub trait IntervalNumeric: Num + NumCast + Copy + PartialOrd + Debug + CheckedBoundOps {}

impl<T> IntervalNumeric for T where T: Num + NumCast + Copy + PartialOrd + Debug + CheckedBoundOps {}

/// A trait alias for exact numeric types that support stepped iteration.
///
/// These are all primitive integer types. Floating point types are
/// intentionally excluded.
///
/// ```compile_fail
/// # use ez_core::num::numeric::StepNumeric;
/// fn assert_step<T: StepNumeric>() {}
///
/// assert_step::<f64>();
/// ```
pub trait StepNumeric: IntervalNumeric + PrimInt {}

impl<T> StepNumeric for T where T: IntervalNumeric + PrimInt {}
