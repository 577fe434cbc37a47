//
// Copyright (c) 2024 Hemi Labs, Inc.
//
// This file is part of the softfloat16-rs project covered under
// the MIT License.  For the full license text, please see the LICENSE
// file in the root directory of this project.
// SPDX-License-Identifier: MIT
//

pub mod bitscan;
pub mod error;
pub mod float;
pub mod format;

pub use error::{Error, Result};
pub use float::Float16;
