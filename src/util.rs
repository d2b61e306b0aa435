// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use funty::Unsigned;

/// Integer division rounding up. Returns [`None`] on a zero divisor or overflow
pub fn div_ceil<T: Unsigned>(lhs: T, rhs: T) -> Option<T> {
    let d = lhs.checked_div(rhs)?;
    if lhs % rhs > T::ZERO {
        d.checked_add(T::ONE)
    } else {
        Some(d)
    }
}
