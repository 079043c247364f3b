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

//! # Checked Bound Arithmetic
//!
//! By-value arithmetic on interval bounds that reports overflow instead of
//! wrapping or panicking. Integers defer to their `checked_*` methods.
//! Floats never fail: overflow saturates to an infinity under IEEE 754.

/// Arithmetic on interval bounds that returns `None` on overflow.
///
/// # Examples
///
/// ```rust
/// # use ez_core::num::checked::CheckedBoundOps;
/// assert_eq!(3i32.checked_add_bound(4), Some(7));
/// assert_eq!(i32::MAX.checked_add_bound(1), None);
/// assert_eq!(f64::MAX.checked_mul_bound(2.0), Some(f64::INFINITY));
/// ```
pub trait CheckedBoundOps: Sized {
    fn checked_add_bound(self, rhs: Self) -> Option<Self>;
    fn checked_sub_bound(self, rhs: Self) -> Option<Self>;
    fn checked_mul_bound(self, rhs: Self) -> Option<Self>;
    /// Division with a non-zero divisor; `None` only for `MIN / -1`.
    fn checked_div_bound(self, rhs: Self) -> Option<Self>;
}

macro_rules! checked_bound_int {
    ($($t:ty),* $(,)?) => {
        $(
            impl CheckedBoundOps for $t {
                #[inline(always)]
                fn checked_add_bound(self, rhs: $t) -> Option<$t> {
                    <$t>::checked_add(self, rhs)
                }

                #[inline(always)]
                fn checked_sub_bound(self, rhs: $t) -> Option<$t> {
                    <$t>::checked_sub(self, rhs)
                }

                #[inline(always)]
                fn checked_mul_bound(self, rhs: $t) -> Option<$t> {
                    <$t>::checked_mul(self, rhs)
                }

                #[inline(always)]
                fn checked_div_bound(self, rhs: $t) -> Option<$t> {
                    <$t>::checked_div(self, rhs)
                }
            }
        )*
    };
}

macro_rules! checked_bound_float {
    ($($t:ty),* $(,)?) => {
        $(
            impl CheckedBoundOps for $t {
                #[inline(always)]
                fn checked_add_bound(self, rhs: $t) -> Option<$t> {
                    Some(self + rhs)
                }

                #[inline(always)]
                fn checked_sub_bound(self, rhs: $t) -> Option<$t> {
                    Some(self - rhs)
                }

                #[inline(always)]
                fn checked_mul_bound(self, rhs: $t) -> Option<$t> {
                    Some(self * rhs)
                }

                #[inline(always)]
                fn checked_div_bound(self, rhs: $t) -> Option<$t> {
                    Some(self / rhs)
                }
            }
        )*
    };
}

checked_bound_int!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize
);
checked_bound_float!(f32, f64);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integer_overflow_is_none() {
        assert_eq!(u8::MAX.checked_add_bound(1), None);
        assert_eq!(0u8.checked_sub_bound(1), None);
        assert_eq!(i64::MAX.checked_mul_bound(2), None);
        assert_eq!(i32::MIN.checked_div_bound(-1), None);
    }

    #[test]
    fn test_integer_in_range() {
        assert_eq!(200u8.checked_add_bound(55), Some(255));
        assert_eq!((-3i16).checked_sub_bound(4), Some(-7));
        assert_eq!((-6i32).checked_mul_bound(7), Some(-42));
        assert_eq!(7i32.checked_div_bound(-2), Some(-3));
    }

    #[test]
    fn test_floats_never_fail() {
        assert_eq!(1.5f32.checked_add_bound(2.0), Some(3.5));
        assert_eq!(f64::MIN.checked_sub_bound(f64::MAX), Some(f64::NEG_INFINITY));
        assert_eq!(1.0f64.checked_div_bound(4.0), Some(0.25));
    }
}
