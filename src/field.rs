//! Checked arithmetic on scalar-field elements.
//!
//! Addition, subtraction and multiplication are the `ark-ff` operators on
//! `F: PrimeField`; they already reduce modulo the field prime. This module
//! adds the operations that can fail, plus conversions for circuit literals.

use ark_ff::{BigInteger, Field, PrimeField};

use crate::{Error, Result};

/// Computes `a^(p - 2)`, the multiplicative inverse of `a` by Fermat's little
/// theorem. Fails with [`Error::DivisionByZero`] when `a` is zero.
pub fn inverse<F: PrimeField>(a: &F) -> Result<F> {
    if a.is_zero() {
        return Err(Error::DivisionByZero);
    }
    let mut exponent = F::MODULUS;
    exponent.sub_with_borrow(&F::BigInt::from(2u64));
    Ok(a.pow(exponent))
}

/// Computes `a / b`.
#[inline]
pub fn div<F: PrimeField>(a: &F, b: &F) -> Result<F> {
    Ok(*a * inverse(b)?)
}

/// Computes `a^n`.
#[inline]
pub fn pow<F: Field>(a: &F, n: u64) -> F {
    a.pow([n])
}

/// Maps a signed integer literal into the field; `-n` becomes `p - n`.
pub fn from_i64<F: PrimeField>(n: i64) -> F {
    let magnitude = F::from(n.unsigned_abs());
    if n < 0 {
        -magnitude
    } else {
        magnitude
    }
}
