// Copyright (c) 2026 Mikko Tanner. All rights reserved.
// Licensed under the MIT License or the Apache License, Version 2.0.
// SPDX-License-Identifier: MIT OR Apache-2.0

use super::{
    masks::{ACE, SUBNET},
    scanner::{Scan, Scanner},
    structs::{host_bits, quad_bits},
    ErrorKind, ParseError, Quad, Rule, Value,
};

/// Whether the host part of the address has to be zero.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum Conform {
    Required,
    Waived,
}

impl Scanner<'_> {
    /// `addr <sep> prefix`, for `cidr` and `cidrsta`.
    fn with_prefix(&mut self, rule: Rule, conform: Conform) -> Scan<Value> {
        let addr: Quad = self.dotted()?;
        self.rule_separator(rule)?;
        let beg: usize = self.pos;
        let len: u8 = self.prefix_length()?;

        if conform == Conform::Required && quad_bits(addr) & host_bits(len) != 0 {
            return Err(ParseError::at(ErrorKind::AddressDoesNotConformToPrefix, beg));
        }
        Ok(Value::Prefixed(addr, len))
    }

    /// `addr <sep> subnet_mask`, for `subnet` and `substa`.
    fn with_subnet_mask(&mut self, rule: Rule, conform: Conform) -> Scan<Value> {
        let addr: Quad = self.dotted()?;
        self.rule_separator(rule)?;
        let beg: usize = self.pos;
        let mask: Quad = self.mask(&SUBNET)?;

        if conform == Conform::Required && quad_bits(addr) & !quad_bits(mask) != 0 {
            return Err(ParseError::at(ErrorKind::AddressDoesNotConformToMask, beg));
        }
        Ok(Value::Pair(addr, mask))
    }

    /// `addr <sep> ace_mask`, for `acenet` and `acesta`. ACE mask bits are
    /// the host bits already, nothing to invert.
    fn with_ace_mask(&mut self, rule: Rule, conform: Conform) -> Scan<Value> {
        let addr: Quad = self.dotted()?;
        self.rule_separator(rule)?;
        let beg: usize = self.pos;
        let mask: Quad = self.mask(&ACE)?;

        if conform == Conform::Required && quad_bits(addr) & quad_bits(mask) != 0 {
            return Err(ParseError::at(ErrorKind::AddressDoesNotConformToMask, beg));
        }
        Ok(Value::Pair(addr, mask))
    }

    /// Two addresses, no contiguity and no consistency requirement.
    fn filter(&mut self) -> Scan<Value> {
        let addr: Quad = self.dotted()?;
        self.rule_separator(Rule::Filter)?;
        let wildcard: Quad = self.dotted()?;
        Ok(Value::Pair(addr, wildcard))
    }

    /// Run one rule from the current position.
    pub(crate) fn rule(&mut self, rule: Rule) -> Scan<Value> {
        match rule {
            Rule::Octet => self.octet(true).map(Value::Number),
            Rule::PrefixLength => self.detached_prefix_length().map(Value::Number),
            Rule::Dotted => self.dotted().map(Value::Quad),
            Rule::SubnetMask => self.mask(&SUBNET).map(Value::Quad),
            Rule::AcenetMask => self.mask(&ACE).map(Value::Quad),
            Rule::Cidr => self.with_prefix(rule, Conform::Required),
            Rule::Cidrsta => self.with_prefix(rule, Conform::Waived),
            Rule::Subnet => self.with_subnet_mask(rule, Conform::Required),
            Rule::Substa => self.with_subnet_mask(rule, Conform::Waived),
            Rule::Acenet => self.with_ace_mask(rule, Conform::Required),
            Rule::Acesta => self.with_ace_mask(rule, Conform::Waived),
            Rule::Filter => self.filter(),
        }
    }
}

/* -------------------------------------------------------------------------- */
