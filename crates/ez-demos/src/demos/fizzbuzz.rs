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

use ez_core::utils::direct::DirectIterator;

pub fn fizzbuzz(i: u32) -> String {
    match (i % 3, i % 5) {
        (0, 0) => "fizzbuzz".to_string(),
        (0, _) => "fizz".to_string(),
        (_, 0) => "buzz".to_string(),
        _ => i.to_string(),
    }
}

pub fn render(bound: u32) -> String {
    let line = DirectIterator::new(1)
        .take_while(|&i| i <= bound)
        .map(fizzbuzz)
        .collect::<Vec<_>>()
        .join(", ");
    format!("FizzBuzz\n{line}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fizzbuzz() {
        assert_eq!(fizzbuzz(1), "1");
        assert_eq!(fizzbuzz(3), "fizz");
        assert_eq!(fizzbuzz(10), "buzz");
        assert_eq!(fizzbuzz(30), "fizzbuzz");
        assert_eq!(fizzbuzz(98), "98");
    }

    #[test]
    fn test_render() {
        assert_eq!(
            render(15),
            "FizzBuzz\n1, 2, fizz, 4, buzz, fizz, 7, 8, fizz, buzz, 11, fizz, 13, 14, fizzbuzz"
        );
        assert_eq!(render(0), "FizzBuzz\n");
    }
}
