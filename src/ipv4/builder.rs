// Copyright (c) 2026 Mikko Tanner. All rights reserved.
// Licensed under the MIT License or the Apache License, Version 2.0.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The two hooks around the recognizer: building results, emitting text.

use super::{prefix_of_mask, strings::*, Quad, Rule, Value};
use ipnet::Ipv4Net;
use std::net::Ipv4Addr;

/// Turns the raw [Value] of a successful match into the caller's result type.
pub trait Builder {
    type Output;

    fn build(&self, rule: Rule, value: Value) -> Self::Output;
}

/// Hands back the [Value] unchanged.
#[derive(Clone, Copy, Debug, Default)]
pub struct ValueBuilder;

impl Builder for ValueBuilder {
    type Output = Value;

    #[inline]
    fn build(&self, _rule: Rule, value: Value) -> Value {
        value
    }
}

/* ---------------------------------- */

/// A match expressed in std / [ipnet] types.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Network {
    /// `octet` and `prefix_length`
    Number(u8),
    Addr(Ipv4Addr),
    /// `subnet_mask` and `acenet_mask`, as written
    Mask(Ipv4Addr),
    /// Every address + prefix/mask form. Station forms keep their host bits,
    /// use [Ipv4Net::trunc] for the network itself.
    Net(Ipv4Net),
    Filter { addr: Ipv4Addr, wildcard: Ipv4Addr },
}

/// Builds a [Network] from a match.
#[derive(Clone, Copy, Debug, Default)]
pub struct NetBuilder;

impl NetBuilder {
    fn net(addr: Quad, len: u8) -> Network {
        // scanned prefix lengths never exceed 32
        Ipv4Net::new(addr.into(), len).map_or(Network::Addr(addr.into()), Network::Net)
    }

    fn pair(addr: Quad, len: Option<u8>, wildcard: Quad) -> Network {
        match len {
            Some(len) => Self::net(addr, len),
            None => Network::Filter {
                addr: addr.into(),
                wildcard: wildcard.into(),
            },
        }
    }
}

impl Builder for NetBuilder {
    type Output = Network;

    fn build(&self, rule: Rule, value: Value) -> Network {
        match (rule, value) {
            (_, Value::Number(n)) => Network::Number(n),
            (Rule::SubnetMask | Rule::AcenetMask, Value::Quad(q)) => Network::Mask(q.into()),
            (_, Value::Quad(q)) => Network::Addr(q.into()),
            (_, Value::Prefixed(q, len)) => Self::net(q, len),
            (Rule::Subnet | Rule::Substa, Value::Pair(q, m)) => Self::pair(q, prefix_of_mask(m), m),
            (Rule::Acenet | Rule::Acesta, Value::Pair(q, m)) => {
                Self::pair(q, prefix_of_mask(m.map(|o| !o)), m)
            }
            (_, Value::Pair(q, w)) => Self::pair(q, None, w),
        }
    }
}

/* -------------------------------------------------------------------------- */

/// Turns a value back into text for a given rule.
pub trait Emitter {
    fn emit(&self, rule: Rule, value: &Value) -> String;
}

/// Plain decimal: `a.b.c.d`, `/` before a prefix length, one space between
/// an address and its mask.
#[derive(Clone, Copy, Debug, Default)]
pub struct CanonicalEmitter;

/// Like [CanonicalEmitter], but every octet is right-aligned to `width`
/// columns with spaces. Output is accepted by grammars with enough padding.
#[derive(Clone, Copy, Debug)]
pub struct PaddedEmitter {
    pub width: usize,
}

impl Default for PaddedEmitter {
    fn default() -> Self {
        Self { width: 3 }
    }
}

fn emit_with(value: &Value, rule: Rule, octet: impl Fn(u8) -> String) -> String {
    let quad = |q: &Quad| q.map(&octet).join(DOT);
    match value {
        Value::Number(n) if rule == Rule::Octet => octet(*n),
        Value::Number(n) => n.to_string(),
        Value::Quad(q) => quad(q),
        Value::Prefixed(q, len) => format!("{}{SLASH}{len}", quad(q)),
        Value::Pair(a, b) => format!("{}{SPACE}{}", quad(a), quad(b)),
    }
}

impl Emitter for CanonicalEmitter {
    fn emit(&self, rule: Rule, value: &Value) -> String {
        emit_with(value, rule, |o| o.to_string())
    }
}

impl Emitter for PaddedEmitter {
    fn emit(&self, rule: Rule, value: &Value) -> String {
        emit_with(value, rule, |o| format!("{o:>w$}", w = self.width))
    }
}

/* -------------------------------------------------------------------------- */

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_emitter() {
        let e = CanonicalEmitter;
        assert_eq!(e.emit(Rule::Octet, &Value::Number(7)), "7");
        assert_eq!(e.emit(Rule::Dotted, &Value::Quad([192, 0, 2, 1])), "192.0.2.1");
        assert_eq!(e.emit(Rule::Cidr, &Value::Prefixed([10, 0, 0, 0], 8)), "10.0.0.0/8");
        assert_eq!(
            e.emit(Rule::Acenet, &Value::Pair([10, 0, 0, 0], [0, 255, 255, 255])),
            "10.0.0.0 0.255.255.255"
        );
    }

    #[test]
    fn test_padded_emitter() {
        let e = PaddedEmitter::default();
        assert_eq!(e.emit(Rule::Octet, &Value::Number(7)), "  7");
        assert_eq!(e.emit(Rule::PrefixLength, &Value::Number(7)), "7");
        assert_eq!(e.emit(Rule::Dotted, &Value::Quad([10, 0, 20, 255])), " 10.  0. 20.255");
        assert_eq!(e.emit(Rule::Cidrsta, &Value::Prefixed([1, 2, 3, 4], 30)), "  1.  2.  3.  4/30");
    }

    #[test]
    fn test_net_builder() {
        let b = NetBuilder;
        let net = |s: &str| Network::Net(s.parse::<Ipv4Net>().unwrap());

        assert_eq!(b.build(Rule::Octet, Value::Number(9)), Network::Number(9));
        assert_eq!(
            b.build(Rule::Dotted, Value::Quad([10, 0, 0, 1])),
            Network::Addr(Ipv4Addr::new(10, 0, 0, 1))
        );
        assert_eq!(
            b.build(Rule::SubnetMask, Value::Quad([255, 0, 0, 0])),
            Network::Mask(Ipv4Addr::new(255, 0, 0, 0))
        );
        assert_eq!(b.build(Rule::Cidr, Value::Prefixed([10, 0, 0, 0], 8)), net("10.0.0.0/8"));
        assert_eq!(b.build(Rule::Cidrsta, Value::Prefixed([10, 0, 0, 1], 8)), net("10.0.0.1/8"));
        assert_eq!(
            b.build(Rule::Substa, Value::Pair([10, 1, 0, 1], [255, 255, 0, 0])),
            net("10.1.0.1/16")
        );
        assert_eq!(
            b.build(Rule::Acenet, Value::Pair([10, 1, 0, 0], [0, 0, 255, 255])),
            net("10.1.0.0/16")
        );
        assert_eq!(
            b.build(Rule::Filter, Value::Pair([10, 1, 2, 3], [0, 255, 0, 255])),
            Network::Filter {
                addr: Ipv4Addr::new(10, 1, 2, 3),
                wildcard: Ipv4Addr::new(0, 255, 0, 255),
            }
        );
    }
}
