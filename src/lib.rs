//! An implementation of the [`Groth16`] zkSNARK over circuits written as
//! small arithmetic programs.
//!
//! The pipeline runs from a [`Circuit`] through flattening into gates,
//! a rank-1 constraint system ([`ConstraintMatrices`]) and its Lagrange
//! lift into a [`Qap`], to a two-phase trusted setup, proving and
//! verification:
//!
//! ```ignore
//! let compiled = circuit.compile()?;
//! let qap = Qap::from_circuit::<LagrangeReduction>(&compiled)?;
//! let (pk, vk) = Groth16::<Bls12_381>::setup(&qap, &CeremonyConfig::default(), rng)?;
//! let witness = compiled.witness(&[Fr::from(3u64)])?;
//! let proof = Groth16::<Bls12_381>::prove(&pk, &witness, rng)?;
//! assert!(Groth16::<Bls12_381>::verify(&vk, &witness[1..2], &proof)?);
//! ```
//!
//! [`Groth16`]: https://eprint.iacr.org/2016/260.pdf
#![warn(
    unused,
    future_incompatible,
    nonstandard_style,
    rust_2018_idioms,
    missing_docs
)]
#![allow(clippy::many_single_char_names, clippy::op_ref)]
#![forbid(unsafe_code)]

#[macro_use]
extern crate ark_std;

/// Crate-wide error type.
pub mod error;

/// Field helpers over the scalar field of the pairing.
pub mod field;

/// Dense univariate polynomials in coefficient form.
pub mod polynomial;

/// Circuit description language and its flattening into gates.
pub mod circuit;

/// Rank-1 constraint systems built from flattened circuits.
pub mod r1cs;

/// Reduce an R1CS instance to a *Quadratic Arithmetic Program* instance.
pub mod r1cs_to_qap;

/// Bridge from compiled circuits into arkworks constraint systems.
pub mod relations;

/// Data structures used by the prover, verifier, and generator.
pub mod data_structures;

/// Generate public parameters for the Groth16 zkSNARK construction.
pub mod generator;

/// Create proofs for the Groth16 zkSNARK construction.
pub mod prover;

/// Verify proofs for the Groth16 zkSNARK construction.
pub mod verifier;

#[cfg(test)]
mod test;

pub use self::circuit::{Circuit, CompiledCircuit, Expression, Gate, Operand, Statement};
pub use self::data_structures::*;
pub use self::error::{Error, Result};
pub use self::generator::{CeremonyConfig, Phase1Secrets, Phase2Secrets};
pub use self::polynomial::Polynomial;
pub use self::r1cs::ConstraintMatrices;
pub use self::r1cs_to_qap::{LagrangeReduction, Qap, R1CSToQAP};
pub use self::relations::CircuitAssignment;
pub use self::verifier::*;

use ark_ec::pairing::Pairing;
use ark_std::{marker::PhantomData, vec::Vec};

/// The SNARK of [[Groth16]](https://eprint.iacr.org/2016/260.pdf).
///
/// All operations are associated functions; the type only fixes the pairing
/// `E` and the R1CS-to-QAP reduction `QAP`.
pub struct Groth16<E: Pairing, QAP: R1CSToQAP = LagrangeReduction> {
    _p: PhantomData<(E, QAP)>,
}
