// Copyright (c) 2026 Mikko Tanner. All rights reserved.
// Licensed under the MIT License or the Apache License, Version 2.0.
// SPDX-License-Identifier: MIT OR Apache-2.0

use super::{
    scanner::{Scan, Scanner},
    ParseError, Quad,
};

/**
A contiguous mask flavour.

A mask has exactly one octet where the bit run flips. Every octet before it
must equal `before`, every octet after it must equal `after`, and the flip
octet itself must be one of the `boundary` values.
*/
pub(crate) struct MaskKind {
    before: u8,
    after: u8,
    boundary: [u8; 9],
}

/// Ones then zeros, e.g. `255.255.240.0`.
pub(crate) const SUBNET: MaskKind = MaskKind {
    before: 255,
    after: 0,
    boundary: [0, 128, 192, 224, 240, 248, 252, 254, 255],
};

/// Zeros then ones, e.g. `0.0.15.255`.
pub(crate) const ACE: MaskKind = MaskKind {
    before: 0,
    after: 255,
    boundary: [0, 1, 3, 7, 15, 31, 63, 127, 255],
};

impl MaskKind {
    /// Index of the flip octet. Shapes are tried from the flip in the last
    /// octet towards the first; the first shape that fits wins.
    pub(crate) fn shape(&self, q: Quad) -> Option<usize> {
        (0..4).rev().find(|&t| {
            q[..t].iter().all(|&o| o == self.before)
                && self.boundary.contains(&q[t])
                && q[t + 1..].iter().all(|&o| o == self.after)
        })
    }
}

impl Scanner<'_> {
    /// A dotted quad that is also a contiguous mask of the given kind.
    /// Octet diagnostics are the same as for any address; a well-formed quad
    /// that isn't contiguous is a plain [NoMatch](super::ErrorKind::NoMatch).
    pub(crate) fn mask(&mut self, kind: &MaskKind) -> Scan<Quad> {
        let beg: usize = self.pos;
        let quad: Quad = self.dotted()?;
        match kind.shape(quad) {
            Some(_) => Ok(quad),
            None => Err(ParseError::no_match(beg)),
        }
    }
}

/* -------------------------------------------------------------------------- */

#[cfg(test)]
mod tests {
    use super::super::{structs::quad_bits, ErrorKind, GrammarConfig};
    use super::*;

    fn is_subnet(m: u32) -> bool {
        m.leading_ones() + m.trailing_zeros() >= 32
    }

    fn is_ace(m: u32) -> bool {
        is_subnet(!m)
    }

    #[test]
    fn test_shapes_agree_with_bit_math() {
        let probe: [u8; 20] = [
            0, 1, 2, 3, 5, 7, 15, 17, 31, 63, 64, 127, 128, 192, 224, 240, 248, 252, 254, 255,
        ];
        for &a in &probe {
            for &b in &probe {
                for &c in &probe {
                    for &d in &probe {
                        let q: Quad = [a, b, c, d];
                        let bits: u32 = quad_bits(q);
                        assert_eq!(SUBNET.shape(q).is_some(), is_subnet(bits), "subnet {q:?}");
                        assert_eq!(ACE.shape(q).is_some(), is_ace(bits), "ace {q:?}");
                    }
                }
            }
        }
    }

    #[test]
    fn test_every_prefix_length_is_a_mask() {
        for len in 0..=32u32 {
            let mask: u32 = u32::MAX.checked_shl(32 - len).unwrap_or(0);
            assert!(SUBNET.shape(mask.to_be_bytes()).is_some(), "/{len}");
            assert!(ACE.shape((!mask).to_be_bytes()).is_some(), "/{len}");
        }
    }

    #[test]
    fn test_shape_order() {
        assert_eq!(SUBNET.shape([255, 255, 255, 255]), Some(3));
        assert_eq!(SUBNET.shape([255, 255, 255, 0]), Some(3));
        assert_eq!(SUBNET.shape([255, 255, 0, 0]), Some(2));
        assert_eq!(SUBNET.shape([0, 0, 0, 0]), Some(0));
        assert_eq!(ACE.shape([0, 0, 0, 255]), Some(3));
        assert_eq!(ACE.shape([0, 0, 0, 254]), None);
    }

    #[rustfmt::skip]
    #[test]
    fn test_mask_scan() {
        let cfg = GrammarConfig::strict();
        let tests: Vec<(&str, Result<Quad, ParseError>)> = vec![
            ("255.255.255.0",   Ok([255, 255, 255, 0])),
            ("255.0.255.0",     Err(ParseError::no_match(0))),
            ("255.255.256.0",   Err(ParseError::at(ErrorKind::OctetOutOfRange, 8))),
            ("255.255.00.0",    Err(ParseError::at(ErrorKind::LeadingZeroAmbiguous, 8))),
            ("255.255.255.0a",  Err(ParseError::at(ErrorKind::PossibleHexInLastOctet, 13))),
        ];
        for (input, expected) in tests {
            assert_eq!(Scanner::new(input, &cfg).mask(&SUBNET), expected, "Failed: '{input}'");
        }

        let octal = GrammarConfig::unsafe_octal();
        assert_eq!(Scanner::new("255.255.000.00", &octal).mask(&SUBNET), Ok([255, 255, 0, 0]));
        assert_eq!(Scanner::new("0.0.0.255", &cfg).mask(&ACE), Ok([0, 0, 0, 255]));
        assert_eq!(Scanner::new("0.0.0.254", &cfg).mask(&ACE), Err(ParseError::no_match(0)));
    }
}
