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

/// Limits used by the demo programs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoConfig {
    /// Collatz stopping times are printed for `1..=collatz_bound`.
    pub collatz_bound: u64,
    /// FizzBuzz runs over `1..=fizzbuzz_bound`.
    pub fizzbuzz_bound: u32,
    /// Number of look-and-say terms to print.
    pub look_and_say_terms: usize,
    /// Primes are listed below this limit.
    pub sieve_limit: usize,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            collatz_bound: 100,
            fizzbuzz_bound: 100,
            look_and_say_terms: 20,
            sieve_limit: 100,
        }
    }
}
