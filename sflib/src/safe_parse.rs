//
// Copyright (c) 2024 Hemi Labs, Inc.
//
// This file is part of the softfloat16-rs project covered under
// the MIT License.  For the full license text, please see the LICENSE
// file in the root directory of this project.
// SPDX-License-Identifier: MIT
//

//! Safe parsing utilities for unsigned integer operands.
//!
//! Rust's `from_str_radix` accepts leading `+` or `-` signs even for
//! non-decimal radixes, which is undesirable when parsing user input that
//! should strictly conform to an unsigned format. These helpers reject
//! signs, and `parse_u32_auto` detects the radix from a C-style prefix
//! (`0x`/`0X` for hexadecimal, a leading `0` for octal, decimal otherwise).

use std::num::ParseIntError;

/// Parse an unsigned integer from a string with the given radix, rejecting
/// any leading sign.
pub fn parse_u32_radix(s: &str, radix: u32) -> Result<u32, ParseIntError> {
    if s.starts_with('+') || s.starts_with('-') {
        return Err("leading sign not allowed".parse::<u32>().unwrap_err());
    }

    u32::from_str_radix(s, radix)
}

/// Parse an unsigned integer, detecting the radix from its prefix.
pub fn parse_u32_auto(s: &str) -> Result<u32, ParseIntError> {
    if let Some(hex) = s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        parse_u32_radix(hex, 16)
    } else if s.len() > 1 && s.starts_with('0') {
        parse_u32_radix(&s[1..], 8)
    } else {
        parse_u32_radix(s, 10)
    }
}
