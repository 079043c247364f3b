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

//! # Math
//!
//! Intervals over numeric types and the machinery to walk them.
//!
//! - `boundary`: open/closed boundary kinds and the comparison rules built on them.
//! - `interval`: the `Interval` value type with its set relations and arithmetic.
//! - `stepped`: stepped views and iterators over integer intervals.
//! - `cursor`: the position-and-step cursor handed out by stepped views.
//! - `builder`: `lower_closed(a).upper_open(b)` style construction.
//! - `error`: the error type of fallible interval operations.

pub mod boundary;
pub mod builder;
pub mod cursor;
pub mod error;
pub mod interval;
pub mod stepped;
