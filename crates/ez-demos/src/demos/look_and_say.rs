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

/// Reads `term` aloud: each run of equal digits becomes its length followed by the digit.
pub fn next_term(term: &[u8]) -> Vec<u8> {
    let mut next = Vec::with_capacity(term.len() * 2);
    let mut rest = term;
    while let Some(&digit) = rest.first() {
        let run = rest.iter().position(|&d| d != digit).unwrap_or(rest.len());
        // Runs never exceed three in a sequence seeded with 1.
        next.push(run as u8);
        next.push(digit);
        rest = &rest[run..];
    }
    next
}

/// The first `count` terms, starting from `1`.
pub fn terms(count: usize) -> Vec<Vec<u8>> {
    let mut out = Vec::with_capacity(count);
    let mut term = vec![1];
    for _ in Interval::closed(1, count) {
        let next = next_term(&term);
        out.push(std::mem::replace(&mut term, next));
    }
    out
}

pub fn render(count: usize) -> String {
    let mut report = format!("The first {count} values of Conway's Look-And-Say sequence");
    for (x, term) in Interval::closed(1, count).into_iter().zip(terms(count)) {
        let digits: String = term.iter().map(|d| char::from(b'0' + d)).collect();
        report.push_str(&format!("\n{x}: {digits}"));
    }
    report
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_term() {
        assert_eq!(next_term(&[1]), vec![1, 1]);
        assert_eq!(next_term(&[1, 1]), vec![2, 1]);
        assert_eq!(next_term(&[2, 1]), vec![1, 2, 1, 1]);
        assert_eq!(next_term(&[]), Vec::<u8>::new());
    }

    #[test]
    fn test_terms() {
        let t = terms(6);
        assert_eq!(t.len(), 6);
        assert_eq!(t[3], vec![1, 2, 1, 1]);
        assert_eq!(t[5], vec![3, 1, 2, 2, 1, 1]);
        assert!(terms(0).is_empty());
    }

    #[test]
    fn test_render() {
        assert_eq!(
            render(4),
            "The first 4 values of Conway's Look-And-Say sequence\n1: 1\n2: 11\n3: 21\n4: 1211"
        );
    }
}
