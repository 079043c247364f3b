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

use thiserror::Error;

/// The error type for interval operations that are undefined on their input.
///
/// Both variants describe a violated precondition rather than a transient
/// fault, so retrying the same call yields the same error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum IntervalError {
    /// The operation is undefined because the interval (or its result) is empty.
    #[error("The {operation} of an empty interval is undefined")]
    EmptyInterval {
        /// The name of the rejected operation, e.g. `"diameter"`.
        operation: &'static str,
    },
    /// The divisor of an interval division can reach zero.
    #[error("Interval division by an interval that reaches zero")]
    DivideByZero,
}

impl IntervalError {
    #[inline]
    pub(crate) const fn empty(operation: &'static str) -> Self {
        Self::EmptyInterval { operation }
    }
}
