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

use ez_core::utils::direct::indices;
use std::cmp::Ordering;

/// Sorts, in place, only the elements matching `select`; all others keep their positions.
///
/// # Examples
///
/// ```text
/// [0, 3, 0, 1, 2]  --(non-zero)-->  [0, 1, 0, 2, 3]
/// ```
pub fn sort_selected<T, P, F>(items: &mut [T], select: P, compare: F)
where
    T: Clone,
    P: Fn(&T) -> bool,
    F: FnMut(&T, &T) -> Ordering,
{
    let positions: Vec<usize> = indices(items).filter(|&i| select(&items[i])).collect();
    let mut selected: Vec<T> = positions.iter().map(|&i| items[i].clone()).collect();
    selected.sort_by(compare);
    for (slot, value) in positions.into_iter().zip(selected) {
        items[slot] = value;
    }
}

pub fn render() -> String {
    let mut numbers = vec![0, 0, 8, 0, 0, 0, 0, 2, 0, 5, 0, 1, 4, 0, 0, 0, 7];
    sort_selected(&mut numbers, |&n| n != 0, i32::cmp);
    numbers
        .iter()
        .map(i32::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sorts_only_selected() {
        let mut v = vec![0, 3, 0, 1, 2];
        sort_selected(&mut v, |&n| n != 0, i32::cmp);
        assert_eq!(v, vec![0, 1, 0, 2, 3]);
    }

    #[test]
    fn test_descending_on_even() {
        let mut v = vec![4, 1, 2, 7, 8, 3];
        sort_selected(&mut v, |n| n % 2 == 0, |a, b| b.cmp(a));
        assert_eq!(v, vec![8, 1, 4, 7, 2, 3]);
    }

    #[test]
    fn test_nothing_selected() {
        let mut v = vec!["b", "a"];
        sort_selected(&mut v, |_| false, |a, b| a.cmp(b));
        assert_eq!(v, vec!["b", "a"]);
    }

    #[test]
    fn test_render() {
        assert_eq!(render(), "0 0 1 0 0 0 0 2 0 4 0 5 7 0 0 0 8");
    }
}
