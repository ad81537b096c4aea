// Copyright (c) 2026 Mikko Tanner. All rights reserved.
// Licensed under the MIT License or the Apache License, Version 2.0.
// SPDX-License-Identifier: MIT OR Apache-2.0

/*!
Ambiguity guards. Each one is a pure predicate over the input and a position
taken by value; none of them moves the caller's cursor. The scanner applies
them in a fixed order (padding, leading zero, hex, range) so the diagnostic
for a given input never depends on which alternative was being tried.
*/

use super::{ErrorKind, ParseError};

/**
Whitespace run in front of an octet's digits.

Returns how many bytes of padding to skip, which is at most `allowed`.
Any whitespace at all fails when `allowed` is 0.
*/
pub(crate) fn padding(input: &[u8], pos: usize, allowed: usize) -> Result<usize, ParseError> {
    let run: usize = input
        .get(pos..)
        .unwrap_or_default()
        .iter()
        .take_while(|b| b.is_ascii_whitespace())
        .count();
    if run > allowed {
        return Err(ParseError::at(ErrorKind::WhitespaceInOctet, pos));
    }
    Ok(run)
}

/// A `0` followed by another digit.
#[inline]
pub(crate) fn leading_zero(digits: &[u8]) -> bool {
    digits.len() > 1 && digits[0] == b'0'
}

/**
Whether the digits ending right before `end` are followed by something that
makes them look like part of a hex number: a letter `a-f`, a `0x` pair, or
an `x` glued to a final `0` digit (the `0x` was split across the digit cap).
*/
pub(crate) fn hex_follows(input: &[u8], end: usize) -> bool {
    let next: Option<u8> = input.get(end).copied();
    let after: Option<u8> = input.get(end + 1).copied();
    let is_x = |b: Option<u8>| matches!(b, Some(b'x' | b'X'));

    match next {
        Some(b'a'..=b'f' | b'A'..=b'F') => true,
        Some(b'0') if is_x(after) => true,
        n if is_x(n) => end > 0 && input[end - 1] == b'0',
        _ => false,
    }
}

/* -------------------------------------------------------------------------- */

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_padding() {
        assert_eq!(padding(b"12", 0, 0), Ok(0));
        assert_eq!(padding(b"  12", 0, 2), Ok(2));
        assert_eq!(padding(b" 12", 0, 2), Ok(1));
        assert_eq!(
            padding(b"1. 2", 2, 0),
            Err(ParseError::at(ErrorKind::WhitespaceInOctet, 2))
        );
        assert_eq!(
            padding(b"   1", 0, 2),
            Err(ParseError::at(ErrorKind::WhitespaceInOctet, 0))
        );
        assert_eq!(padding(b"1", 9, 0), Ok(0));
    }

    #[test]
    fn test_leading_zero() {
        assert!(leading_zero(b"012"));
        assert!(leading_zero(b"00"));
        assert!(!leading_zero(b"0"));
        assert!(!leading_zero(b"10"));
        assert!(!leading_zero(b"100"));
    }

    #[rustfmt::skip]
    #[test]
    fn test_hex_follows() {
        let tests: Vec<(&str, usize, bool)> = vec![
            ("2A",      1, true),
            ("2f.",     1, true),
            ("2g",      1, false),
            ("2.",      1, false),
            ("2",       1, false),
            ("1230x1",  3, true),
            ("1230X1",  3, true),
            ("1230",    3, false),
            ("0x1",     1, true),
            ("1x1",     1, false),
        ];
        for (input, end, expected) in tests {
            assert_eq!(hex_follows(input.as_bytes(), end), expected, "Failed: '{input}'");
        }
    }
}
