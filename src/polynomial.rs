//! Dense univariate polynomials in coefficient form.
//!
//! `coeffs[i]` is the coefficient of `x^i`. Leading zeros are never trimmed:
//! QAP columns keep one coefficient per constraint so that they stay aligned
//! with the powers of tau in the reference string.

use ark_ff::PrimeField;
use ark_serialize::{CanonicalDeserialize, CanonicalSerialize};
use ark_std::{
    ops::{Add, Mul, Sub},
    vec,
    vec::Vec,
};

use crate::{field, Error};

/// A polynomial over `F` stored as its coefficient vector.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, CanonicalSerialize, CanonicalDeserialize)]
pub struct Polynomial<F: PrimeField> {
    /// The coefficient of `x^i` is stored at index `i`.
    pub coeffs: Vec<F>,
}

impl<F: PrimeField> Polynomial<F> {
    /// Wraps a coefficient vector without trimming it.
    pub fn new(coeffs: Vec<F>) -> Self {
        Self { coeffs }
    }

    /// The polynomial with no coefficients.
    pub fn zero() -> Self {
        Self { coeffs: Vec::new() }
    }

    /// The constant polynomial `c`.
    pub fn constant(c: F) -> Self {
        Self { coeffs: vec![c] }
    }

    /// Number of stored coefficients.
    #[inline]
    pub fn len(&self) -> usize {
        self.coeffs.len()
    }

    /// Returns `true` if no coefficients are stored.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.coeffs.is_empty()
    }

    /// Degree as implied by the stored length, so `len() - 1`.
    #[inline]
    pub fn degree(&self) -> usize {
        self.coeffs.len().saturating_sub(1)
    }

    /// Returns `true` if every coefficient is zero.
    pub fn is_zero(&self) -> bool {
        self.coeffs.iter().all(|c| c.is_zero())
    }

    /// Evaluates `Σ cᵢ·xⁱ`.
    pub fn evaluate(&self, x: &F) -> F {
        let mut power = F::one();
        let mut result = F::zero();
        for c in &self.coeffs {
            result += *c * power;
            power *= x;
        }
        result
    }

    /// Multiplies every coefficient by `s`.
    pub fn scale(&self, s: &F) -> Self {
        Self::new(self.coeffs.iter().map(|c| *c * s).collect())
    }

    fn zip_with(&self, other: &Self, op: impl Fn(F, F) -> F) -> Self {
        let len = self.len().max(other.len());
        let coeffs = (0..len)
            .map(|i| {
                let a = self.coeffs.get(i).copied().unwrap_or_else(F::zero);
                let b = other.coeffs.get(i).copied().unwrap_or_else(F::zero);
                op(a, b)
            })
            .collect();
        Self::new(coeffs)
    }

    /// Coefficient-wise sum; the shorter operand is padded with zeros.
    pub fn add(&self, other: &Self) -> Self {
        self.zip_with(other, |a, b| a + b)
    }

    /// Coefficient-wise difference `self - other`.
    pub fn sub(&self, other: &Self) -> Self {
        self.zip_with(other, |a, b| a - b)
    }

    /// Schoolbook product; the result has `len(a) + len(b) - 1` coefficients.
    pub fn mul(&self, other: &Self) -> Self {
        if self.is_empty() || other.is_empty() {
            return Self::zero();
        }
        let mut coeffs = vec![F::zero(); self.len() + other.len() - 1];
        for (i, a) in self.coeffs.iter().enumerate() {
            for (j, b) in other.coeffs.iter().enumerate() {
                coeffs[i + j] += *a * b;
            }
        }
        Self::new(coeffs)
    }

    /// Long division returning `(quotient, remainder)`.
    ///
    /// Leading zeros of the divisor are ignored. The remainder keeps the
    /// dividend's length so callers can inspect every coefficient.
    pub fn div_rem(&self, divisor: &Self) -> crate::Result<(Self, Self)> {
        let divisor_len = divisor
            .coeffs
            .iter()
            .rposition(|c| !c.is_zero())
            .map(|i| i + 1)
            .ok_or(Error::DivisionByZero)?;
        let divisor = &divisor.coeffs[..divisor_len];
        let leading_inverse = field::inverse(&divisor[divisor_len - 1])?;

        let mut remainder = self.coeffs.clone();
        if remainder.len() < divisor_len {
            return Ok((Self::zero(), Self::new(remainder)));
        }

        let quotient_len = remainder.len() - divisor_len + 1;
        let mut quotient = vec![F::zero(); quotient_len];
        for i in (0..quotient_len).rev() {
            let coeff = remainder[i + divisor_len - 1] * leading_inverse;
            quotient[i] = coeff;
            for (j, d) in divisor.iter().enumerate() {
                remainder[i + j] -= coeff * d;
            }
        }
        Ok((Self::new(quotient), Self::new(remainder)))
    }

    /// Exact division: fails with [`Error::NotDivisible`] unless every
    /// coefficient of the remainder is zero.
    pub fn exact_div(&self, divisor: &Self) -> crate::Result<Self> {
        let (quotient, remainder) = self.div_rem(divisor)?;
        if remainder.is_zero() {
            Ok(quotient)
        } else {
            Err(Error::NotDivisible)
        }
    }

    /// Adds up a sequence of polynomials.
    pub fn sum<'a>(polys: impl IntoIterator<Item = &'a Self>) -> Self
    where
        F: 'a,
    {
        polys
            .into_iter()
            .fold(Self::zero(), |acc, p| Polynomial::add(&acc, p))
    }

    /// Computes `Σ wᵢ·pᵢ`.
    pub fn linear_combination(weights: &[F], polys: &[Self]) -> Self {
        let len = polys.iter().map(Self::len).max().unwrap_or(0);
        let mut coeffs = vec![F::zero(); len];
        for (w, p) in weights.iter().zip(polys) {
            if w.is_zero() {
                continue;
            }
            for (acc, c) in coeffs.iter_mut().zip(&p.coeffs) {
                *acc += *w * c;
            }
        }
        Self::new(coeffs)
    }

    /// Lagrange interpolation through `points`.
    ///
    /// For `n` points the result has exactly `n` coefficients. Two points
    /// sharing an x coordinate fail with [`Error::DivisionByZero`].
    pub fn interpolate(points: &[(F, F)]) -> crate::Result<Self> {
        let mut result = Self::new(vec![F::zero(); points.len()]);
        for (i, (xi, yi)) in points.iter().enumerate() {
            let mut basis = Self::constant(F::one());
            let mut denominator = F::one();
            for (j, (xj, _)) in points.iter().enumerate() {
                if i == j {
                    continue;
                }
                basis = basis.mul(&Self::new(vec![-*xj, F::one()]));
                denominator *= *xi - xj;
            }
            let weight = field::div(yi, &denominator)?;
            result = Polynomial::add(&result, &basis.scale(&weight));
        }
        Ok(result)
    }

    /// The vanishing polynomial `Z(x) = (x - 1)(x - 2)...(x - n)`.
    pub fn vanishing(n: usize) -> Self {
        (1..=n as u64).fold(Self::constant(F::one()), |acc, i| {
            acc.mul(&Self::new(vec![-F::from(i), F::one()]))
        })
    }
}

impl<'a, F: PrimeField> Add<&'a Polynomial<F>> for &'a Polynomial<F> {
    type Output = Polynomial<F>;

    fn add(self, other: &'a Polynomial<F>) -> Polynomial<F> {
        Polynomial::add(self, other)
    }
}

impl<'a, F: PrimeField> Sub<&'a Polynomial<F>> for &'a Polynomial<F> {
    type Output = Polynomial<F>;

    fn sub(self, other: &'a Polynomial<F>) -> Polynomial<F> {
        Polynomial::sub(self, other)
    }
}

impl<'a, F: PrimeField> Mul<&'a Polynomial<F>> for &'a Polynomial<F> {
    type Output = Polynomial<F>;

    fn mul(self, other: &'a Polynomial<F>) -> Polynomial<F> {
        Polynomial::mul(self, other)
    }
}
