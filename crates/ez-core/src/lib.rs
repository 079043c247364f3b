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

//! # Ez Core
//!
//! Generic numeric intervals with independently open or closed endpoints,
//! interval arithmetic, and stepped iteration over integer intervals.
//!
//! ## Modules
//!
//! - `math`: the `Interval` type (emptiness, containment, measurements,
//!   subset relations, intersection, `+ - * /`), stepped views with
//!   forward and reverse cursors, and the `lower_closed(a).upper_open(b)`
//!   builder.
//! - `num`: the numeric traits intervals and stepped views are generic over.
//! - `utils`: direct iterators, cursors whose position is their value.
//!
//! ## Example
//!
//! ```rust
//! use ez_core::math::interval::Interval;
//!
//! let a = Interval::closed(0, 4);
//! let b = Interval::open(2, 3);
//! assert_eq!(a + b, Interval::open(2, 7));
//! assert_eq!(a / b, Ok(Interval::closed_open(0, 2)));
//!
//! let odd: Vec<_> = Interval::closed_open(1, 10).step(2).iter().collect();
//! assert_eq!(odd, vec![1, 3, 5, 7, 9]);
//! ```

pub mod math;
pub mod num;
pub mod utils;
