// Copyright (c) 2026 Mikko Tanner. All rights reserved.
// Licensed under the MIT License or the Apache License, Version 2.0.
// SPDX-License-Identifier: MIT OR Apache-2.0

use super::{
    config::{LeadingZeros, Separator, TrailingHex},
    guards, ErrorKind, GrammarConfig, ParseError, Quad, Rule, IPV4_BITS, MAX_OCTET,
    OCTET_DIGITS, PREFIX_DIGITS,
};

pub(crate) type Scan<T> = Result<T, ParseError>;

/// Cursor over one input, owned by a single parse call.
pub(crate) struct Scanner<'a> {
    input: &'a str,
    pub(crate) pos: usize,
    pub(crate) cfg: &'a GrammarConfig,
}

impl<'a> Scanner<'a> {
    pub(crate) fn new(input: &'a str, cfg: &'a GrammarConfig) -> Self {
        Scanner { input, pos: 0, cfg }
    }

    #[inline]
    fn bytes(&self) -> &'a [u8] {
        self.input.as_bytes()
    }

    #[inline]
    pub(crate) fn at_end(&self) -> bool {
        self.pos >= self.input.len()
    }

    /// Count of decimal digits at `pos`, at most `max`.
    fn digits(&self, max: usize) -> usize {
        self.bytes()
            .get(self.pos..)
            .unwrap_or_default()
            .iter()
            .take(max)
            .take_while(|b| b.is_ascii_digit())
            .count()
    }

    /// Consume a separator, or fail with [ErrorKind::NoMatch] at `pos`.
    pub(crate) fn separator(&mut self, sep: &Separator) -> Scan<()> {
        match sep.matches(self.input, self.pos) {
            Some(len) => {
                self.pos += len;
                Ok(())
            }
            None => Err(ParseError::no_match(self.pos)),
        }
    }

    /// Separator of a composite rule, per the grammar.
    pub(crate) fn rule_separator(&mut self, rule: Rule) -> Scan<()> {
        let cfg: &'a GrammarConfig = self.cfg;
        match cfg.separator(rule) {
            Some(sep) => self.separator(sep),
            None => Err(ParseError::no_match(self.pos)),
        }
    }

    /// Hex guard on a field ending at `end`; `last` picks the trailing variant.
    fn hex_guard(&self, end: usize, last: bool) -> Scan<()> {
        if !guards::hex_follows(self.bytes(), end) {
            return Ok(());
        }
        match (last, self.cfg.trailing_hex()) {
            (false, _) => Err(ParseError::at(ErrorKind::PossibleHexInOctet, end)),
            (true, TrailingHex::Reject) => Err(ParseError::at(ErrorKind::PossibleHexInLastOctet, end)),
            (true, TrailingHex::Allow) => Ok(()),
        }
    }

    /**
    Read one octet: 1-3 decimal digits, value 0-255.

    Guards run in order padding, leading zero, hex, range. Padding is
    consumed but never counts toward the digit limit. `last` says whether
    this is the final field, which selects the trailing hex guard instead
    of the interior one.
    */
    pub(crate) fn octet(&mut self, last: bool) -> Scan<u8> {
        self.pos += guards::padding(self.bytes(), self.pos, self.cfg.padding())?;

        let beg: usize = self.pos;
        let len: usize = self.digits(OCTET_DIGITS);
        if len == 0 {
            return Err(ParseError::no_match(beg));
        }
        let end: usize = beg + len;
        let digits: &[u8] = &self.bytes()[beg..end];

        if self.cfg.leading_zeros() == LeadingZeros::Reject && guards::leading_zero(digits) {
            return Err(ParseError::at(ErrorKind::LeadingZeroAmbiguous, beg));
        }
        self.hex_guard(end, last)?;

        let value: u16 = decimal(digits);
        if value > MAX_OCTET {
            return Err(ParseError::at(ErrorKind::OctetOutOfRange, beg));
        }

        self.pos = end;
        Ok(value as u8)
    }

    /// Read a prefix length: 1-2 decimal digits, value 0-32.
    pub(crate) fn prefix_length(&mut self) -> Scan<u8> {
        let beg: usize = self.pos;
        let len: usize = self.digits(PREFIX_DIGITS);
        if len == 0 {
            return Err(ParseError::no_match(beg));
        }
        let end: usize = beg + len;
        let digits: &[u8] = &self.bytes()[beg..end];

        if self.cfg.leading_zeros() == LeadingZeros::Reject && guards::leading_zero(digits) {
            return Err(ParseError::at(ErrorKind::LeadingZeroAmbiguous, beg));
        }
        self.hex_guard(end, true)?;

        let value: u16 = decimal(digits);
        if value > IPV4_BITS as u16 {
            return Err(ParseError::at(ErrorKind::PrefixLengthOutOfRange, beg));
        }

        self.pos = end;
        Ok(value as u8)
    }

    /// A prefix length that may stand apart from its address, with the
    /// `cidr` separator optionally in front of it.
    pub(crate) fn detached_prefix_length(&mut self) -> Scan<u8> {
        let cfg: &'a GrammarConfig = self.cfg;
        if let Some(len) = cfg.separator(Rule::Cidr).and_then(|s| s.matches(self.input, self.pos)) {
            self.pos += len;
        }
        self.prefix_length()
    }

    /// Four octets separated by the grammar's dot.
    pub(crate) fn dotted(&mut self) -> Scan<Quad> {
        let cfg: &'a GrammarConfig = self.cfg;
        let mut quad: Quad = [0; 4];
        for (i, slot) in quad.iter_mut().enumerate() {
            if i > 0 {
                self.separator(cfg.dot())?;
            }
            *slot = self.octet(i == 3)?;
        }
        Ok(quad)
    }
}

/// Digits have already been checked, at most 3 of them.
#[inline]
fn decimal(digits: &[u8]) -> u16 {
    digits
        .iter()
        .fold(0u16, |acc, d| acc * 10 + u16::from(d - b'0'))
}

/* -------------------------------------------------------------------------- */
