// Copyright (c) 2026 Mikko Tanner. All rights reserved.
// Licensed under the MIT License or the Apache License, Version 2.0.
// SPDX-License-Identifier: MIT OR Apache-2.0

use super::{strings::*, ConfigError, Rule};
use regex::Regex;

/// Width of whitespace padding accepted by [GrammarConfig::padded]:
/// enough for every octet to fill a 3-column field.
pub(crate) const PADDED_WIDTH: usize = 2;

/// What to do with an octet or prefix length written with a leading zero.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum LeadingZeros {
    /// "012" is octal to some readers and decimal to others: reject.
    #[default]
    Reject,
    /// Read the digits as decimal.
    Decimal,
}

/// What to do with a hex-looking character right after the final field.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum TrailingHex {
    #[default]
    Reject,
    Allow,
}

/// A separator token between two fields.
#[derive(Clone, Debug)]
pub enum Separator {
    Literal(String),
    /// One or more ASCII whitespace characters.
    Whitespace,
    /// A regex, anchored at the separator position.
    Pattern(Regex),
    /// First alternative that matches wins.
    Any(Vec<Separator>),
}

impl Separator {
    pub fn literal(token: impl Into<String>) -> Self {
        Separator::Literal(token.into())
    }

    /// Build a [Separator::Pattern]. The pattern is anchored for you.
    pub fn pattern(pat: &str) -> Result<Self, regex::Error> {
        Ok(Separator::Pattern(Regex::new(&format!("^(?:{pat})"))?))
    }

    /// Length of the separator found at `pos`, if any.
    pub fn matches(&self, input: &str, pos: usize) -> Option<usize> {
        let rest: &str = input.get(pos..)?;
        match self {
            Separator::Literal(token) => rest.starts_with(token.as_str()).then_some(token.len()),
            Separator::Whitespace => {
                let n: usize = rest.bytes().take_while(u8::is_ascii_whitespace).count();
                (n > 0).then_some(n)
            }
            Separator::Pattern(re) => re.find(rest).map(|m| m.end()),
            Separator::Any(alts) => alts.iter().find_map(|s| s.matches(input, pos)),
        }
    }
}

/// One replaceable extension point of the grammar, with its replacement.
#[derive(Clone, Debug)]
pub enum Override {
    /// Whitespace characters allowed before an octet's digits.
    Padding(usize),
    LeadingZeros(LeadingZeros),
    TrailingHex(TrailingHex),
    /// Separator between the octets of a dotted quad.
    Dot(Separator),
    /// Separator of a composite rule.
    Separator(Rule, Separator),
}

#[derive(Clone, Debug)]
struct Separators {
    cidr: Separator,
    subnet: Separator,
    acenet: Separator,
    cidrsta: Separator,
    substa: Separator,
    acesta: Separator,
    filter: Separator,
}

impl Separators {
    fn get_mut(&mut self, rule: Rule) -> Option<&mut Separator> {
        match rule {
            Rule::Cidr => Some(&mut self.cidr),
            Rule::Subnet => Some(&mut self.subnet),
            Rule::Acenet => Some(&mut self.acenet),
            Rule::Cidrsta => Some(&mut self.cidrsta),
            Rule::Substa => Some(&mut self.substa),
            Rule::Acesta => Some(&mut self.acesta),
            Rule::Filter => Some(&mut self.filter),
            _ => None,
        }
    }
}

/**
An immutable set of guard strictness settings and separator tokens.

A variant grammar is derived from an existing one by naming the extension
points to replace, see [GrammarConfig::derive]. The composite structure
itself is never changed, and the interior hex guard is not replaceable.
*/
#[derive(Clone, Debug)]
pub struct GrammarConfig {
    padding: usize,
    leading_zeros: LeadingZeros,
    trailing_hex: TrailingHex,
    dot: Separator,
    separators: Separators,
}

impl Default for GrammarConfig {
    fn default() -> Self {
        Self::strict()
    }
}

impl GrammarConfig {
    /// The base grammar: every guard active.
    pub fn strict() -> Self {
        Self {
            padding: 0,
            leading_zeros: LeadingZeros::Reject,
            trailing_hex: TrailingHex::Reject,
            dot: Separator::literal(DOT),
            separators: Separators {
                cidr: Separator::literal(SLASH),
                subnet: Separator::Whitespace,
                acenet: Separator::Whitespace,
                cidrsta: Separator::literal(SLASH),
                substa: Separator::Whitespace,
                acesta: Separator::Whitespace,
                filter: Separator::Whitespace,
            },
        }
    }

    /// The base grammar with the three guard settings replaced.
    fn relaxed(padding: usize, leading_zeros: LeadingZeros, trailing_hex: TrailingHex) -> Self {
        Self {
            padding,
            leading_zeros,
            trailing_hex,
            ..Self::strict()
        }
    }

    /// Trailing hex-looking characters tolerated.
    pub fn lenient() -> Self {
        Self::relaxed(0, LeadingZeros::Reject, TrailingHex::Allow)
    }

    /// Octets may be right-aligned with whitespace.
    pub fn padded() -> Self {
        Self::relaxed(PADDED_WIDTH, LeadingZeros::Reject, TrailingHex::Reject)
    }

    /// Leading zeros accepted and read as decimal.
    pub fn unsafe_octal() -> Self {
        Self::relaxed(0, LeadingZeros::Decimal, TrailingHex::Reject)
    }

    /// Every relaxation at once, and `/` accepted wherever whitespace is.
    pub fn insane() -> Self {
        let base: GrammarConfig =
            Self::relaxed(PADDED_WIDTH, LeadingZeros::Decimal, TrailingHex::Allow);
        let overrides = Rule::ALL
            .into_iter()
            .filter(|r| r.is_composite() && !matches!(r, Rule::Cidr | Rule::Cidrsta))
            .map(|r| {
                let either = vec![Separator::Whitespace, Separator::literal(SLASH)];
                Override::Separator(r, Separator::Any(either))
            });
        match base.derive(overrides) {
            Ok(cfg) => cfg,
            // only composite rules are overridden above
            Err(err) => unreachable!("{err}"),
        }
    }

    /**
    Copy this grammar, substituting the named extension points.

    ### Errors
    [ConfigError::NoSeparator] if a separator override names a rule without
    a separator of its own (anything but the seven composite rules).
    */
    pub fn derive(
        &self,
        overrides: impl IntoIterator<Item = Override>,
    ) -> Result<GrammarConfig, ConfigError> {
        let mut cfg: GrammarConfig = self.clone();
        for o in overrides {
            match o {
                Override::Padding(n) => cfg.padding = n,
                Override::LeadingZeros(lz) => cfg.leading_zeros = lz,
                Override::TrailingHex(th) => cfg.trailing_hex = th,
                Override::Dot(sep) => cfg.dot = sep,
                Override::Separator(rule, sep) => {
                    *cfg
                        .separators
                        .get_mut(rule)
                        .ok_or(ConfigError::NoSeparator(rule))? = sep;
                }
            }
        }
        Ok(cfg)
    }

    #[inline]
    pub fn padding(&self) -> usize {
        self.padding
    }

    #[inline]
    pub fn leading_zeros(&self) -> LeadingZeros {
        self.leading_zeros
    }

    #[inline]
    pub fn trailing_hex(&self) -> TrailingHex {
        self.trailing_hex
    }

    #[inline]
    pub fn dot(&self) -> &Separator {
        &self.dot
    }

    /// Separator of a composite rule; None for the others.
    pub fn separator(&self, rule: Rule) -> Option<&Separator> {
        let s: &Separators = &self.separators;
        match rule {
            Rule::Cidr => Some(&s.cidr),
            Rule::Subnet => Some(&s.subnet),
            Rule::Acenet => Some(&s.acenet),
            Rule::Cidrsta => Some(&s.cidrsta),
            Rule::Substa => Some(&s.substa),
            Rule::Acesta => Some(&s.acesta),
            Rule::Filter => Some(&s.filter),
            _ => None,
        }
    }
}

/* -------------------------------------------------------------------------- */
