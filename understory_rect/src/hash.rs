// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Hashing for [`Rectangle`] that agrees with its float equality.

use core::hash::{Hash, Hasher};

use crate::Rectangle;

/// Bit pattern of `v` with `-0.0` folded into `0.0` and all NaNs folded together.
///
/// `0.0 == -0.0` holds, so both must hash alike. NaN never compares equal,
/// so any fixed pattern will do for it.
#[inline]
fn field_bits(v: f64) -> u64 {
    if v == 0.0 {
        0
    } else if v.is_nan() {
        f64::NAN.to_bits()
    } else {
        v.to_bits()
    }
}

impl Rectangle {
    /// Order-sensitive combination of the four fields: `h = 37 * h ^ field`.
    pub(crate) fn hash_code(&self) -> u64 {
        [self.y, self.width, self.height]
            .into_iter()
            .fold(field_bits(self.x), |h, v| {
                h.wrapping_mul(37) ^ field_bits(v)
            })
    }
}

impl Hash for Rectangle {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(self.hash_code());
    }
}
