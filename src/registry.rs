// Copyright (c) 2026 Mikko Tanner. All rights reserved.
// Licensed under the MIT License or the Apache License, Version 2.0.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Process-wide table of named grammar variants.

use crate::ipv4::{parse, GrammarConfig, Match, ParseError, Rule, Value};
use lazy_static::lazy_static;
use parking_lot::RwLock;
use std::{collections::HashMap, error, fmt, sync::Arc};
use tracing::debug;

static ERR_UNKNOWN_GRAMMAR: &str = "unknown grammar";

// Preloaded with the stock variants on first use.
lazy_static! {
    static ref GRAMMARS: RwLock<HashMap<String, Arc<GrammarConfig>>> = {
        let mut m = HashMap::new();
        m.insert("strict".to_string(), Arc::new(GrammarConfig::strict()));
        m.insert("lenient".to_string(), Arc::new(GrammarConfig::lenient()));
        m.insert("padded".to_string(), Arc::new(GrammarConfig::padded()));
        m.insert("unsafe".to_string(), Arc::new(GrammarConfig::unsafe_octal()));
        m.insert("insane".to_string(), Arc::new(GrammarConfig::insane()));
        RwLock::new(m)
    };
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum RegistryError {
    UnknownGrammar(String),
    Parse(ParseError),
}

impl fmt::Display for RegistryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RegistryError::UnknownGrammar(name) => write!(f, "{ERR_UNKNOWN_GRAMMAR}: '{name}'"),
            RegistryError::Parse(err) => write!(f, "{err}"),
        }
    }
}

impl error::Error for RegistryError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            RegistryError::Parse(err) => Some(err),
            RegistryError::UnknownGrammar(_) => None,
        }
    }
}

impl From<ParseError> for RegistryError {
    fn from(err: ParseError) -> Self {
        RegistryError::Parse(err)
    }
}

/// Register (or replace) a grammar under `name`. Returns the previous one.
pub fn register_grammar(
    name: impl Into<String>,
    cfg: GrammarConfig,
) -> Option<Arc<GrammarConfig>> {
    let name: String = name.into();
    let prev = GRAMMARS.write().insert(name.clone(), Arc::new(cfg));
    debug!(grammar = %name, replaced = prev.is_some(), "registered grammar");
    prev
}

/// Shared handle to a registered grammar.
pub fn grammar(name: &str) -> Option<Arc<GrammarConfig>> {
    GRAMMARS.read().get(name).cloned()
}

/// Names of all registered grammars, sorted.
pub fn grammar_names() -> Vec<String> {
    let mut names: Vec<String> = GRAMMARS.read().keys().cloned().collect();
    names.sort();
    names
}

/// [parse] with a grammar looked up by name.
pub fn parse_named(input: &str, rule: Rule, name: &str) -> Result<Match<Value>, RegistryError> {
    let cfg: Arc<GrammarConfig> =
        grammar(name).ok_or_else(|| RegistryError::UnknownGrammar(name.to_string()))?;
    Ok(parse(input, rule, &cfg)?)
}

/* -------------------------------------------------------------------------- */

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ipv4::{ErrorKind, Override, Separator};
    use std::thread;

    #[test]
    fn test_presets_registered() {
        let names: Vec<String> = grammar_names();
        for preset in ["insane", "lenient", "padded", "strict", "unsafe"] {
            assert!(names.iter().any(|n| n == preset), "missing '{preset}'");
        }
    }

    #[test]
    fn test_parse_named() {
        let m = parse_named("010.0.0.1", Rule::Dotted, "unsafe").unwrap();
        assert_eq!(m.value, Value::Quad([10, 0, 0, 1]));

        let err = parse_named("010.0.0.1", Rule::Dotted, "strict").unwrap_err();
        assert_eq!(
            err,
            RegistryError::Parse(ParseError {
                kind: ErrorKind::LeadingZeroAmbiguous,
                offset: Some(0),
            })
        );

        let err = parse_named("10.0.0.1", Rule::Dotted, "no-such-grammar").unwrap_err();
        assert_eq!(err.to_string(), "unknown grammar: 'no-such-grammar'");
    }

    #[test]
    fn test_register_grammar() {
        let cfg = GrammarConfig::strict()
            .derive([Override::Separator(Rule::Subnet, Separator::literal(" mask "))])
            .unwrap();
        assert!(register_grammar("test-mask-word", cfg.clone()).is_none());
        assert!(register_grammar("test-mask-word", cfg).is_some());

        let m = parse_named("10.0.0.0 mask 255.0.0.0", Rule::Subnet, "test-mask-word").unwrap();
        assert_eq!(m.value, Value::Pair([10, 0, 0, 0], [255, 0, 0, 0]));
    }

    #[test]
    fn test_shared_across_threads() {
        let cfg: Arc<GrammarConfig> = grammar("strict").unwrap();
        let inputs: Vec<String> = (0..=32).map(|len| format!("0.0.0.0/{len}")).collect();

        thread::scope(|s| {
            for input in &inputs {
                let cfg = Arc::clone(&cfg);
                s.spawn(move || {
                    assert!(parse(input, Rule::Cidr, &cfg).is_ok(), "Failed: '{input}'");
                });
            }
        });
    }
}
