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

use ez_core::utils::direct::direct_range;
use tracing::debug;

#[inline]
pub fn next_collatz(n: u64) -> u64 {
    if n % 2 == 1 { 3 * n + 1 } else { n / 2 }
}

/// Number of Collatz steps needed to reach 1 from `n`.
///
/// # Panics
///
/// Panics if `n` is zero.
pub fn stopping_time(mut n: u64) -> u32 {
    assert!(n > 0, "Collatz sequences start at a positive number");
    let mut steps = 0;
    while n != 1 {
        n = next_collatz(n);
        steps += 1;
    }
    steps
}

/// Stopping times of `1..=bound`.
pub fn stopping_times(bound: u64) -> Vec<u32> {
    direct_range(1, bound + 1).map(stopping_time).collect()
}

pub fn render(bound: u64) -> String {
    let times = stopping_times(bound);
    debug!(bound, longest = ?times.iter().max(), "collatz stopping times");
    let line = times
        .iter()
        .map(u32::to_string)
        .collect::<Vec<_>>()
        .join(", ");
    format!("Stopping time for the Collatz conjecture\n{line}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stopping_time() {
        assert_eq!(stopping_time(1), 0);
        assert_eq!(stopping_time(2), 1);
        assert_eq!(stopping_time(3), 7);
        assert_eq!(stopping_time(6), 8);
        assert_eq!(stopping_time(27), 111);
    }

    #[test]
    fn test_stopping_times_prefix() {
        assert_eq!(stopping_times(6), vec![0, 1, 7, 2, 5, 8]);
        assert_eq!(stopping_times(100).len(), 100);
    }

    #[test]
    fn test_render() {
        assert_eq!(
            render(4),
            "Stopping time for the Collatz conjecture\n0, 1, 7, 2"
        );
    }
}
