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

//! Three ways of walking a digit list: a plain loop, a cursor over the
//! slice, and the slice's indices.

use ez_core::utils::direct::{DirectIterator, indices};

const PHI: [u8; 13] = [6, 1, 8, 0, 3, 3, 9, 8, 8, 7, 4, 9, 8];
const PI: [u8; 13] = [1, 4, 5, 9, 2, 6, 5, 3, 5, 8, 9, 7, 9];
const E: [u8; 13] = [7, 1, 8, 2, 8, 1, 8, 2, 8, 4, 5, 9, 0];

pub fn by_value(digits: &[u8]) -> String {
    let mut out = String::with_capacity(digits.len());
    for digit in digits {
        out.push(char::from(b'0' + digit));
    }
    out
}

/// Walks a cursor over the positions of `digits` and dereferences through it.
pub fn by_cursor(digits: &[u8]) -> String {
    let mut out = String::with_capacity(digits.len());
    let end = DirectIterator::new(digits.len());
    let mut it = DirectIterator::new(0usize);
    while it != end {
        out.push(char::from(b'0' + digits[*it.get()]));
        it.inc();
    }
    out
}

pub fn by_index(digits: &[u8]) -> String {
    indices(digits)
        .map(|i| char::from(b'0' + digits[i]))
        .collect()
}

pub fn render() -> String {
    format!(
        "phi: 1.{}\npi:  3.{}\ne:   2.{}",
        by_value(&PHI),
        by_cursor(&PI),
        by_index(&E)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_walks_agree() {
        for digits in [&PHI[..], &PI[..], &E[..], &[][..]] {
            let v = by_value(digits);
            assert_eq!(v, by_cursor(digits));
            assert_eq!(v, by_index(digits));
        }
    }

    #[test]
    fn test_render() {
        assert_eq!(
            render(),
            "phi: 1.6180339887498\npi:  3.1415926535897\ne:   2.7182818284590"
        );
    }
}
