// Copyright (c) 2026 Mikko Tanner. All rights reserved.
// Licensed under the MIT License or the Apache License, Version 2.0.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Strict parsing of IPv4 addresses, masks, and address/mask composites.

mod builder;
mod composite;
mod config;
mod guards;
mod masks;
mod parser;
mod scanner;
mod strings;
mod structs;

use serde::{Deserialize, Serialize};
use std::{error, fmt};
use strings::*;

pub use builder::*;
pub use config::{GrammarConfig, LeadingZeros, Override, Separator, TrailingHex};
pub use parser::{format, parse, parse_prefix, parse_with};
pub use structs::{prefix_of_mask, Match, Quad, Rule, Value};

pub(crate) const IPV4_BITS: u8 = 32;
pub(crate) const MAX_OCTET: u16 = 255;
pub(crate) const OCTET_DIGITS: usize = 3;
pub(crate) const PREFIX_DIGITS: usize = 2;

/// Every way a parse can be rejected.
#[rustfmt::skip]
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum ErrorKind {
    /// digits parsed but value >= 256
    OctetOutOfRange,
    /// digits parsed but value >= 33
    PrefixLengthOutOfRange,
    WhitespaceInOctet,
    PossibleHexInOctet,
    /// after the last octet of a dotted quad, or after a prefix length
    PossibleHexInLastOctet,
    LeadingZeroAmbiguous,
    AddressDoesNotConformToMask,
    AddressDoesNotConformToPrefix,
    /// structural mismatch, nothing more specific to say
    NoMatch,
}

impl ErrorKind {
    pub fn message(&self) -> &'static str {
        match self {
            ErrorKind::OctetOutOfRange => ERR_OCTET_RANGE,
            ErrorKind::PrefixLengthOutOfRange => ERR_PREFIX_RANGE,
            ErrorKind::WhitespaceInOctet => ERR_WHITESPACE,
            ErrorKind::PossibleHexInOctet => ERR_HEX,
            ErrorKind::PossibleHexInLastOctet => ERR_HEX_LAST,
            ErrorKind::LeadingZeroAmbiguous => ERR_LEADING_ZERO,
            ErrorKind::AddressDoesNotConformToMask => ERR_MASK_CONFORM,
            ErrorKind::AddressDoesNotConformToPrefix => ERR_PREFIX_CONFORM,
            ErrorKind::NoMatch => ERR_NO_MATCH,
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// A rejected parse. `offset` is the byte offset where the deciding check fired.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ParseError {
    pub kind: ErrorKind,
    pub offset: Option<usize>,
}

impl ParseError {
    pub(crate) fn at(kind: ErrorKind, offset: usize) -> Self {
        Self {
            kind,
            offset: Some(offset),
        }
    }

    pub(crate) fn no_match(offset: usize) -> Self {
        Self::at(ErrorKind::NoMatch, offset)
    }

    /// Guard and consistency failures. These end the parse outright, no
    /// alternative gets to retry past them.
    pub fn is_diagnostic(&self) -> bool {
        self.kind != ErrorKind::NoMatch
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.offset {
            Some(offset) => write!(f, "{} {AT_OFFSET} {offset}", self.kind),
            None => write!(f, "{}", self.kind),
        }
    }
}

impl error::Error for ParseError {}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ConfigError {
    /// separator override aimed at a rule that doesn't have one
    NoSeparator(Rule),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::NoSeparator(rule) => write!(f, "{ERR_NO_SEPARATOR}: '{rule}'"),
        }
    }
}

impl error::Error for ConfigError {}

/* -------------------------------------------------------------------------- */
