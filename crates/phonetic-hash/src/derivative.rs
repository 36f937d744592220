// Derivative of the numeric state
//
// A secondary value used for branching decisions. Computing it never
// advances the numeric state.

use crate::numeric::Numeric;

const BASE: Numeric = 7;

/// One plus the sum of the base-7 digits of `n`.
pub fn derivative(mut n: Numeric) -> Numeric {
    let mut acc = 1;
    while n != 0 {
        acc += n % BASE;
        n /= BASE;
    }
    acc
}
