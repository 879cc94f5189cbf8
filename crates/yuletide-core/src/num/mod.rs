// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! Integer helpers shared by the puzzle solvers.

use num_traits::PrimInt;

/// Greatest common divisor by Euclid's algorithm.
///
/// `gcd(0, 0)` is `0`.
///
/// ```rust
/// # use yuletide_core::num::gcd;
/// assert_eq!(gcd(12u64, 18), 6);
/// ```
pub fn gcd<T>(a: T, b: T) -> T
where
    T: PrimInt,
{
    let (mut a, mut b) = (a, b);
    while b != T::zero() {
        let r = a % b;
        a = b;
        b = r;
    }
    a
}

/// Least common multiple, or `None` on overflow.
///
/// `lcm(0, x)` is `0`.
///
/// ```rust
/// # use yuletide_core::num::lcm;
/// assert_eq!(lcm(4u64, 6), Some(12));
/// assert_eq!(lcm(200u8, 3), None);
/// ```
pub fn lcm<T>(a: T, b: T) -> Option<T>
where
    T: PrimInt,
{
    if a == T::zero() || b == T::zero() {
        return Some(T::zero());
    }
    (a / gcd(a, b)).checked_mul(&b)
}

/// Least common multiple of every value, or `None` on overflow or when
/// `values` is empty.
pub fn lcm_all<T, I>(values: I) -> Option<T>
where
    T: PrimInt,
    I: IntoIterator<Item = T>,
{
    let mut iter = values.into_iter();
    let first = iter.next()?;
    iter.try_fold(first, lcm)
}
