// Copyright (c) 2026 Mikko Tanner. All rights reserved.
// Licensed under the MIT License or the Apache License, Version 2.0.
// SPDX-License-Identifier: MIT OR Apache-2.0

use super::strings::*;
use serde::{Deserialize, Serialize};
use std::{fmt, net::Ipv4Addr, ops::Range, str::FromStr};

/// Four octets, most significant first.
pub type Quad = [u8; 4];

/// The named entry points of the grammar.
#[rustfmt::skip]
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Rule {
    Octet,
    PrefixLength,
    Dotted,
    SubnetMask,
    AcenetMask,
    /// `addr/prefix`, host bits must be zero
    Cidr,
    /// `addr mask`, host bits must be zero
    Subnet,
    /// `addr ace_mask`, host bits must be zero
    Acenet,
    /// `addr/prefix`, host bits may be set
    Cidrsta,
    /// `addr mask`, host bits may be set
    Substa,
    /// `addr ace_mask`, host bits may be set
    Acesta,
    /// two arbitrary addresses
    Filter,
}

impl Rule {
    pub const ALL: [Rule; 12] = [
        Rule::Octet,
        Rule::PrefixLength,
        Rule::Dotted,
        Rule::SubnetMask,
        Rule::AcenetMask,
        Rule::Cidr,
        Rule::Subnet,
        Rule::Acenet,
        Rule::Cidrsta,
        Rule::Substa,
        Rule::Acesta,
        Rule::Filter,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Rule::Octet => "octet",
            Rule::PrefixLength => "prefix_length",
            Rule::Dotted => "dotted",
            Rule::SubnetMask => "subnet_mask",
            Rule::AcenetMask => "acenet_mask",
            Rule::Cidr => "cidr",
            Rule::Subnet => "subnet",
            Rule::Acenet => "acenet",
            Rule::Cidrsta => "cidrsta",
            Rule::Substa => "substa",
            Rule::Acesta => "acesta",
            Rule::Filter => "filter",
        }
    }

    /// True for the composite rules, i.e. the ones with their own separator.
    pub fn is_composite(&self) -> bool {
        !matches!(
            self,
            Rule::Octet | Rule::PrefixLength | Rule::Dotted | Rule::SubnetMask | Rule::AcenetMask
        )
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Rule {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Rule::ALL
            .iter()
            .copied()
            .find(|r| r.name() == s)
            .ok_or_else(|| format!("{ERR_UNKNOWN_RULE}: '{s}'"))
    }
}

/* -------------------------------------------------------------------------- */

/// The value produced by a successful rule match, before any [Builder](super::Builder).
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum Value {
    /// `octet` and `prefix_length`
    Number(u8),
    /// `dotted`, `subnet_mask` and `acenet_mask`
    Quad(Quad),
    /// `cidr` and `cidrsta`
    Prefixed(Quad, u8),
    /// `subnet`, `acenet`, `substa`, `acesta` and `filter`
    Pair(Quad, Quad),
}

impl Value {
    /// The (first) address carried by this value, if any.
    pub fn addr(&self) -> Option<Ipv4Addr> {
        match self {
            Value::Number(_) => None,
            Value::Quad(q) | Value::Prefixed(q, _) | Value::Pair(q, _) => Some(Ipv4Addr::from(*q)),
        }
    }
}

/// A successful match: the built value plus the byte span it was read from.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Match<T> {
    pub value: T,
    pub span: Range<usize>,
}

impl<T> Match<T> {
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Match<U> {
        Match {
            value: f(self.value),
            span: self.span,
        }
    }
}

/* ---------------------------------- */

#[inline]
pub(crate) fn quad_bits(q: Quad) -> u32 {
    u32::from_be_bytes(q)
}

/// Host bits of a prefix length: the low `32 - len` bits set.
#[inline]
pub(crate) fn host_bits(len: u8) -> u32 {
    u32::MAX.checked_shr(len as u32).unwrap_or(0)
}

/// Prefix length of a contiguous subnet mask, or None if it isn't one.
pub fn prefix_of_mask(mask: Quad) -> Option<u8> {
    let bits: u32 = quad_bits(mask);
    let len: u32 = bits.leading_ones();
    (bits == !host_bits(len as u8)).then_some(len as u8)
}

/* -------------------------------------------------------------------------- */
