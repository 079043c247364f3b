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

use crate::config::DemoConfig;
use std::{fmt, str::FromStr};
use thiserror::Error;

pub mod collatz;
pub mod fizzbuzz;
pub mod look_and_say;
pub mod range_for;
pub mod sieve;
pub mod sort_selected;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DemoError {
    #[error("Unknown demo `{0}`; expected one of: {names}", names = Demo::names())]
    Unknown(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Demo {
    Collatz,
    FizzBuzz,
    LookAndSay,
    Sieve,
    RangeFor,
    SortSelected,
}

impl Demo {
    pub const ALL: [Demo; 6] = [
        Demo::Collatz,
        Demo::FizzBuzz,
        Demo::LookAndSay,
        Demo::Sieve,
        Demo::RangeFor,
        Demo::SortSelected,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            Demo::Collatz => "collatz",
            Demo::FizzBuzz => "fizzbuzz",
            Demo::LookAndSay => "look-and-say",
            Demo::Sieve => "sieve",
            Demo::RangeFor => "range-for",
            Demo::SortSelected => "sort-selected",
        }
    }

    fn names() -> String {
        Self::ALL
            .iter()
            .map(|d| d.name())
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Runs the demo and returns its printable report.
    pub fn run(self, config: &DemoConfig) -> String {
        match self {
            Demo::Collatz => collatz::render(config.collatz_bound),
            Demo::FizzBuzz => fizzbuzz::render(config.fizzbuzz_bound),
            Demo::LookAndSay => look_and_say::render(config.look_and_say_terms),
            Demo::Sieve => sieve::render(config.sieve_limit),
            Demo::RangeFor => range_for::render(),
            Demo::SortSelected => sort_selected::render(),
        }
    }
}

impl fmt::Display for Demo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Demo {
    type Err = DemoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase().replace('_', "-");
        Self::ALL
            .into_iter()
            .find(|d| d.name() == wanted)
            .ok_or_else(|| DemoError::Unknown(s.to_string()))
    }
}

/// Resolves command-line arguments to demos; no arguments selects all of them.
pub fn select<S>(args: &[S]) -> Result<Vec<Demo>, DemoError>
where
    S: AsRef<str>,
{
    if args.is_empty() {
        return Ok(Demo::ALL.to_vec());
    }
    args.iter().map(|a| a.as_ref().parse()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_all_when_empty() {
        let none: [&str; 0] = [];
        assert_eq!(select(&none), Ok(Demo::ALL.to_vec()));
    }

    #[test]
    fn test_select_by_name() {
        assert_eq!(
            select(&["sieve", "Look_And_Say"]),
            Ok(vec![Demo::Sieve, Demo::LookAndSay])
        );
    }

    #[test]
    fn test_select_unknown() {
        let err = select(&["collatz", "nope"]).unwrap_err();
        assert_eq!(err, DemoError::Unknown("nope".to_string()));
        assert!(err.to_string().contains("sort-selected"));
    }

    #[test]
    fn test_names_roundtrip() {
        for demo in Demo::ALL {
            assert_eq!(demo.to_string().parse::<Demo>(), Ok(demo));
        }
    }
}
