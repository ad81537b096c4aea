// Copyright (c) 2026 Mikko Tanner. All rights reserved.
// Licensed under the MIT License or the Apache License, Version 2.0.
// SPDX-License-Identifier: MIT OR Apache-2.0

/*!
Strict parsing of textual IPv4 addresses, netmasks, ACE (wildcard) masks,
CIDR pairs and address/mask composites.

Rather than guessing what an ambiguous string means, the parser rejects it
with a specific diagnostic:
- leading zeros (`010` is octal to some readers, decimal to others)
- hex-looking characters right after an octet or prefix length
- whitespace inside an octet
- host bits set where a network address is expected

How strict each guard is comes from an immutable [GrammarConfig]. Variants
are derived from it with [GrammarConfig::derive] and may be shared
read-only across threads, or registered by name with [register_grammar].
*/

mod ipv4;
mod registry;

pub use ipv4::*;
pub use registry::{grammar, grammar_names, parse_named, register_grammar, RegistryError};
