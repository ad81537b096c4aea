// Copyright (c) 2026 Mikko Tanner. All rights reserved.
// Licensed under the MIT License or the Apache License, Version 2.0.
// SPDX-License-Identifier: MIT OR Apache-2.0

use super::{scanner::Scanner, Builder, Emitter, GrammarConfig, Match, ParseError, Rule, Value};
use tracing::{debug, trace};

/**
Parse the whole of `input` as `rule` under the grammar `cfg`.

Anything left over after the rule has matched is a
[NoMatch](super::ErrorKind::NoMatch) at the first unconsumed byte.

### Example
```
use strict_ipv4::{parse, ErrorKind, GrammarConfig, Rule, Value};

let cfg = GrammarConfig::strict();
let m = parse("192.0.2.0/25", Rule::Cidr, &cfg).unwrap();
assert_eq!(m.value, Value::Prefixed([192, 0, 2, 0], 25));

let err = parse("10.02.30.40", Rule::Dotted, &cfg).unwrap_err();
assert_eq!(err.kind, ErrorKind::LeadingZeroAmbiguous);
```
*/
pub fn parse(input: &str, rule: Rule, cfg: &GrammarConfig) -> Result<Match<Value>, ParseError> {
    run(input, rule, cfg, true)
}

/// Like [parse], but only anchored at the start: the match may end before
/// the input does, the span says where.
pub fn parse_prefix(
    input: &str,
    rule: Rule,
    cfg: &GrammarConfig,
) -> Result<Match<Value>, ParseError> {
    run(input, rule, cfg, false)
}

/// Like [parse], with the result built by `builder`.
pub fn parse_with<B: Builder>(
    input: &str,
    rule: Rule,
    cfg: &GrammarConfig,
    builder: &B,
) -> Result<Match<B::Output>, ParseError> {
    run(input, rule, cfg, true).map(|m| m.map(|v| builder.build(rule, v)))
}

/// Text for `value` as `rule`, entirely up to the emitter.
pub fn format(value: &Value, rule: Rule, emitter: &impl Emitter) -> String {
    emitter.emit(rule, value)
}

fn run(
    input: &str,
    rule: Rule,
    cfg: &GrammarConfig,
    whole: bool,
) -> Result<Match<Value>, ParseError> {
    trace!(%rule, len = input.len(), "parse");
    let mut s: Scanner = Scanner::new(input, cfg);

    let result = s.rule(rule).and_then(|value| {
        if whole && !s.at_end() {
            return Err(ParseError::no_match(s.pos));
        }
        Ok(Match {
            value,
            span: 0..s.pos,
        })
    });

    if let Err(err) = &result {
        debug!(%rule, kind = ?err.kind, offset = ?err.offset, "rejected: {err}");
    }
    result
}

impl GrammarConfig {
    /// Shorthand for [parse] with this grammar.
    pub fn parse(&self, input: &str, rule: Rule) -> Result<Match<Value>, ParseError> {
        parse(input, rule, self)
    }

    /// Shorthand for [parse_with] with this grammar.
    pub fn parse_with<B: Builder>(
        &self,
        input: &str,
        rule: Rule,
        builder: &B,
    ) -> Result<Match<B::Output>, ParseError> {
        parse_with(input, rule, self, builder)
    }
}

/* -------------------------------------------------------------------------- */
