//
// Copyright (c) 2024 Hemi Labs, Inc.
//
// This file is part of the softfloat16-rs project covered under
// the MIT License.  For the full license text, please see the LICENSE
// file in the root directory of this project.
// SPDX-License-Identifier: MIT
//

use crate::error::{Error, Result};

/// Returns the 0-based index of the most significant set bit, e.g.
/// `highest_set_bit(8) == 3`.
///
/// Fails with [`Error::ZeroBitScan`] for zero, which has no set bit.
pub fn highest_set_bit(v: u32) -> Result<u32> {
    if v == 0 {
        return Err(Error::ZeroBitScan);
    }

    Ok(v.ilog2())
}
