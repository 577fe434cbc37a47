//
// Copyright (c) 2024 Hemi Labs, Inc.
//
// This file is part of the softfloat16-rs project covered under
// the MIT License.  For the full license text, please see the LICENSE
// file in the root directory of this project.
// SPDX-License-Identifier: MIT
//

//! Human-readable rendering of packed values for the drivers. Nothing in
//! here feeds back into the arithmetic.

use std::fmt;

use crate::float::{Float16, BIAS, BITS, MANTISSA_LENGTH};

/// Renders `value` as a `0b`-prefixed binary string of exactly `width`
/// digits, e.g. `binary_string(5, 4) == "0b0101"`.
pub fn binary_string(value: u32, width: usize) -> String {
    format!("0b{value:0width$b}")
}

/// Multi-line exponent/mantissa breakdown of a packed value.
pub fn breakdown(f: Float16) -> String {
    [
        format!("Exponent: {} (- {})", f.exponent_field(), BIAS),
        format!(
            "Mantissa: {}",
            binary_string(f.mantissa_field().into(), MANTISSA_LENGTH as usize)
        ),
        format!("Packed:   {}", binary_string(f.to_bits().into(), BITS as usize)),
        format!("Decoded:  {}", f),
    ]
    .join("\n")
}

/// Prints the decoded value.
impl fmt::Display for Float16 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.decode())
    }
}

/// Prints the packed 16-bit pattern.
impl fmt::Binary for Float16 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Binary::fmt(&self.to_bits(), f)
    }
}
