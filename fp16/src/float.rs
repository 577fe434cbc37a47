//
// Copyright (c) 2024 Hemi Labs, Inc.
//
// This file is part of the softfloat16-rs project covered under
// the MIT License.  For the full license text, please see the LICENSE
// file in the root directory of this project.
// SPDX-License-Identifier: MIT
//

use log::debug;

use crate::bitscan::highest_set_bit;
use crate::error::{Error, Result};

/// Total width of the packed representation.
pub const BITS: u32 = 16;
/// Width of the biased exponent field.
pub const EXPONENT_LENGTH: u32 = 5;
/// Width of the stored mantissa field.
pub const MANTISSA_LENGTH: u32 = 10;
/// Exponent bias: `2^(EXPONENT_LENGTH - 1) - 1`.
pub const BIAS: u32 = (1 << (EXPONENT_LENGTH - 1)) - 1;

const EXPONENT_MASK: u16 = (((1 << EXPONENT_LENGTH) - 1) as u16) << MANTISSA_LENGTH;
const MANTISSA_MASK: u16 = (1 << MANTISSA_LENGTH) - 1;
const HIDDEN_BIT: u16 = 1 << MANTISSA_LENGTH;

const EXPONENT_FIELD_MAX: u32 = (1 << EXPONENT_LENGTH) - 1;

/// A 16-bit floating point value stored as its packed bit pattern.
///
/// The layout is a 5-bit biased exponent over a 10-bit mantissa with an
/// implicit leading 1; there is no sign bit. Values are immutable and have
/// no identity beyond their bits: two equal patterns are interchangeable.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Float16(u16);

impl Float16 {
    /// The canonical zero: both fields clear.
    pub const ZERO: Float16 = Float16(0);

    pub const fn from_bits(bits: u16) -> Float16 {
        Float16(bits)
    }

    pub const fn to_bits(self) -> u16 {
        self.0
    }

    /// The biased 5-bit exponent field.
    pub const fn exponent_field(self) -> u16 {
        (self.0 & EXPONENT_MASK) >> MANTISSA_LENGTH
    }

    /// The stored 10-bit mantissa field, hidden bit not included.
    pub const fn mantissa_field(self) -> u16 {
        self.0 & MANTISSA_MASK
    }

    const fn compose(exponent: u16, mantissa: u16) -> Float16 {
        Float16((exponent << MANTISSA_LENGTH) | (mantissa & MANTISSA_MASK))
    }

    /// Encodes a non-negative integer into the packed format.
    ///
    /// Integers with more than `MANTISSA_LENGTH + 1` significant bits lose
    /// their low-order bits: the mantissa is truncated, never rounded.
    /// Fails with [`Error::Unrepresentable`] when the value needs an
    /// exponent field above 30.
    pub fn encode(value: u32) -> Result<Float16> {
        if value == 0 {
            return Ok(Float16::ZERO);
        }

        let msb = highest_set_bit(value)?;
        if BIAS + msb >= EXPONENT_FIELD_MAX {
            return Err(Error::Unrepresentable(value));
        }
        let exponent = BIAS + msb;

        // The leading 1 becomes the hidden bit.
        let stripped = value & !(1 << msb);

        // Line the remaining bits up with the mantissa field; a negative
        // shift amount truncates the excess low-order bits.
        let shift = MANTISSA_LENGTH as i32 - msb as i32;
        let mantissa = if shift >= 0 {
            stripped << shift
        } else {
            stripped >> -shift
        };
        debug!("encode {value}: exponent={exponent} mantissa={mantissa:#012b}");

        Ok(Float16::compose(exponent as u16, mantissa as u16))
    }

    /// Decodes the packed value into a host float.
    ///
    /// The canonical zero decodes to 0. Every other pattern goes through
    /// the normalized formula, including patterns with a zero exponent
    /// field; denormal semantics are out of scope.
    pub fn decode(self) -> f64 {
        if self == Float16::ZERO {
            return 0.0;
        }

        let mantissa = self.mantissa_field();
        let mut significand = 1.0;
        let mut weight = 1.0;
        for bit in (0..MANTISSA_LENGTH).rev() {
            weight *= 0.5;
            if mantissa & (1 << bit) != 0 {
                significand += weight;
            }
        }

        let exponent = self.exponent_field() as i32 - BIAS as i32;
        significand * f64::from(exponent).exp2()
    }

    /// Multiplies two packed values using integer arithmetic only.
    ///
    /// The significands are multiplied with their hidden bits restored,
    /// the biased exponents are added (minus one bias to undo the double
    /// count), and the widened product is renormalized back into the
    /// 10-bit mantissa window, truncating low-order bits. Fails with
    /// [`Error::ExponentRange`] when the resulting exponent does not fit
    /// the 5-bit field.
    pub fn multiply(self, other: Float16) -> Result<Float16> {
        if self == Float16::ZERO || other == Float16::ZERO {
            return Ok(Float16::ZERO);
        }

        let sig_a = u32::from(self.mantissa_field() | HIDDEN_BIT);
        let sig_b = u32::from(other.mantissa_field() | HIDDEN_BIT);

        let mut exponent =
            i32::from(self.exponent_field()) + i32::from(other.exponent_field()) - BIAS as i32;

        // 1.x * 1.y occupies up to 2 * (MANTISSA_LENGTH + 1) bits.
        let product = sig_a * sig_b;
        let top = highest_set_bit(product)?;

        // The product reached 2.0: the window moves up one bit.
        if top == 2 * MANTISSA_LENGTH + 1 {
            exponent += 1;
        }
        debug!("multiply: product={product:#b} top={top} exponent={exponent}");

        let mantissa = (product >> (top - MANTISSA_LENGTH)) as u16 & MANTISSA_MASK;

        if exponent < 0 || exponent > EXPONENT_FIELD_MAX as i32 {
            return Err(Error::ExponentRange(exponent));
        }

        Ok(Float16::compose(exponent as u16, mantissa))
    }
}
