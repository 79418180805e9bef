//! Generic arithmetic helpers.

use std::ops::Add;

/// Adds two values of the same type and returns their sum.
///
/// The operand type only has to implement [`Add`], so integers, floats,
/// [`std::time::Duration`], and user-defined types with an `Add` impl all
/// work unchanged. Overflow behavior is whatever the operand type's `+`
/// does.
pub fn add<T: Add<Output = T>>(a: T, b: T) -> T {
    a + b
}
