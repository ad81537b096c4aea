// Copyright (c) 2026 Mikko Tanner. All rights reserved.
// Licensed under the MIT License or the Apache License, Version 2.0.
// SPDX-License-Identifier: MIT OR Apache-2.0

pub(crate) static DOT: &str = ".";
pub(crate) static SLASH: &str = "/";
pub(crate) static SPACE: &str = " ";

// mod.rs
pub(crate) static ERR_OCTET_RANGE: &str = "Octet out of range";
pub(crate) static ERR_PREFIX_RANGE: &str = "Prefix length out of range";
pub(crate) static ERR_WHITESPACE: &str = "Whitespace in octet";
pub(crate) static ERR_HEX: &str = "Possible hexadecimal in octet";
pub(crate) static ERR_HEX_LAST: &str = "Possible hexadecimal in last octet";
pub(crate) static ERR_LEADING_ZERO: &str = "Leading zero is ambiguous (octal or decimal?)";
pub(crate) static ERR_MASK_CONFORM: &str = "Address does not conform to mask";
pub(crate) static ERR_PREFIX_CONFORM: &str = "Address does not conform to CIDR prefix length";
pub(crate) static ERR_NO_MATCH: &str = "No match";
pub(crate) static AT_OFFSET: &str = "at offset";
pub(crate) static ERR_NO_SEPARATOR: &str = "rule has no separator to override";

// structs.rs
pub(crate) static ERR_UNKNOWN_RULE: &str = "unknown rule name";
