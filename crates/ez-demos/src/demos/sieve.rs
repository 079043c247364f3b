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

use ez_core::math::interval::Interval;

/// Primes strictly below `limit`.
pub fn primes_below(limit: usize) -> Vec<usize> {
    let mut is_prime = vec![true; limit];
    let mut primes = Vec::new();
    for i in Interval::closed_open(2, limit) {
        if !is_prime[i] {
            continue;
        }
        primes.push(i);
        if let Some(square) = i.checked_mul(i) {
            for multiple in Interval::closed_open(square, limit).step(i) {
                is_prime[multiple] = false;
            }
        }
    }
    primes
}

pub fn render(limit: usize) -> String {
    let line = primes_below(limit)
        .iter()
        .map(usize::to_string)
        .collect::<Vec<_>>()
        .join(", ");
    format!("Primes under {limit}:\n{line}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_small_limits() {
        assert!(primes_below(0).is_empty());
        assert!(primes_below(2).is_empty());
        assert_eq!(primes_below(3), vec![2]);
        assert_eq!(primes_below(30), vec![2, 3, 5, 7, 11, 13, 17, 19, 23, 29]);
    }

    #[test]
    fn test_primes_under_hundred() {
        let p = primes_below(100);
        assert_eq!(p.len(), 25);
        assert_eq!(p.last(), Some(&97));
    }

    #[test]
    fn test_render() {
        assert_eq!(render(10), "Primes under 10:\n2, 3, 5, 7");
    }
}
