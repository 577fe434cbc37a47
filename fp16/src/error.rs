//
// Copyright (c) 2024 Hemi Labs, Inc.
//
// This file is part of the softfloat16-rs project covered under
// the MIT License.  For the full license text, please see the LICENSE
// file in the root directory of this project.
// SPDX-License-Identifier: MIT
//

/// Errors returned by the 16-bit float operations.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The most significant set bit of zero is undefined; callers that
    /// accept zero must handle it before scanning.
    #[error("bit scan of zero is undefined")]
    ZeroBitScan,

    /// The integer needs an exponent field above 30 (31 stays reserved).
    #[error("{0} is too large for the 16-bit float format")]
    Unrepresentable(u32),

    /// A product's exponent left the 5-bit field.
    #[error("exponent {0} is outside the representable range")]
    ExponentRange(i32),
}

pub type Result<T> = std::result::Result<T, Error>;
