use ark_ec::pairing::Pairing;
use ark_serialize::*;
use ark_std::vec::Vec;

use crate::r1cs_to_qap::Qap;

/// A proof in the Groth16 SNARK.
#[derive(Clone, Debug, PartialEq, CanonicalSerialize, CanonicalDeserialize)]
pub struct Proof<E: Pairing> {
    /// The `A` element in `G1`.
    pub a: E::G1Affine,
    /// The `B` element in `G2`.
    pub b: E::G2Affine,
    /// The `C` element in `G1`.
    pub c: E::G1Affine,
}

impl<E: Pairing> Default for Proof<E> {
    fn default() -> Self {
        Self {
            a: E::G1Affine::default(),
            b: E::G2Affine::default(),
            c: E::G1Affine::default(),
        }
    }
}

////////////////////////////////////////////////////////////////////////////////

/// Output of the circuit-independent first phase of the ceremony: powers of
/// the secret `tau` in both groups, and their `alpha`/`beta` multiples in
/// `G1`.
#[derive(Clone, Debug, PartialEq, CanonicalSerialize, CanonicalDeserialize)]
pub struct PowersOfTau<E: Pairing> {
    /// `tau^i * G` for `i < N1`.
    pub powers_of_tau_g1: Vec<E::G1Affine>,
    /// `tau^i * H` for `i < N2`.
    pub powers_of_tau_g2: Vec<E::G2Affine>,
    /// `alpha * tau^i * G` for `i < N1`.
    pub alpha_powers_g1: Vec<E::G1Affine>,
    /// `beta * tau^i * G` for `i < N1`.
    pub beta_powers_g1: Vec<E::G1Affine>,
    /// `alpha * G`.
    pub alpha_g1: E::G1Affine,
    /// `beta * G`.
    pub beta_g1: E::G1Affine,
    /// `beta * H`.
    pub beta_g2: E::G2Affine,
}

////////////////////////////////////////////////////////////////////////////////

/// A verification key in the Groth16 SNARK.
#[derive(Clone, Debug, PartialEq, CanonicalSerialize, CanonicalDeserialize)]
pub struct VerifyingKey<E: Pairing> {
    /// The `alpha * G`, where `G` is the generator of `E::G1`.
    pub alpha_g1: E::G1Affine,
    /// The `beta * H`, where `H` is the generator of `E::G2`.
    pub beta_g2: E::G2Affine,
    /// The `gamma * H`, where `H` is the generator of `E::G2`.
    pub gamma_g2: E::G2Affine,
    /// The `delta * H`, where `H` is the generator of `E::G2`.
    pub delta_g2: E::G2Affine,
    /// The `gamma^{-1} * (beta * a_i(tau) + alpha * b_i(tau) + c_i(tau)) * G`
    /// for every public wire `i`, starting with the constant-one wire.
    pub li_div_gamma: Vec<E::G1Affine>,
}

impl<E: Pairing> Default for VerifyingKey<E> {
    fn default() -> Self {
        Self {
            alpha_g1: E::G1Affine::default(),
            beta_g2: E::G2Affine::default(),
            gamma_g2: E::G2Affine::default(),
            delta_g2: E::G2Affine::default(),
            li_div_gamma: Vec::new(),
        }
    }
}

/// Preprocessed verification key parameters that enable faster verification
/// at the expense of larger size in memory.
#[derive(Clone, Debug, PartialEq, CanonicalSerialize, CanonicalDeserialize)]
pub struct PreparedVerifyingKey<E: Pairing> {
    /// The unprepared verification key.
    pub vk: VerifyingKey<E>,
    /// The element `e(alpha * G, beta * H)` in `E::GT`.
    pub alpha_g1_beta_g2: E::TargetField,
    /// The element `- gamma * H` in `E::G2`, prepared for use in pairings.
    pub gamma_g2_neg_pc: E::G2Prepared,
    /// The element `- delta * H` in `E::G2`, prepared for use in pairings.
    pub delta_g2_neg_pc: E::G2Prepared,
}

impl<E: Pairing> From<PreparedVerifyingKey<E>> for VerifyingKey<E> {
    fn from(other: PreparedVerifyingKey<E>) -> Self {
        other.vk
    }
}

impl<E: Pairing> From<VerifyingKey<E>> for PreparedVerifyingKey<E> {
    fn from(other: VerifyingKey<E>) -> Self {
        crate::prepare_verifying_key(&other)
    }
}

////////////////////////////////////////////////////////////////////////////////

/// The prover key for the Groth16 zkSNARK.
#[derive(Clone, Debug, PartialEq, CanonicalSerialize, CanonicalDeserialize)]
pub struct ProvingKey<E: Pairing> {
    /// The underlying verification key.
    pub vk: VerifyingKey<E>,
    /// The element `beta * G` in `E::G1`.
    pub beta_g1: E::G1Affine,
    /// The element `delta * G` in `E::G1`.
    pub delta_g1: E::G1Affine,
    /// The elements `tau^i * G` in `E::G1`, one per QAP coefficient.
    pub powers_of_tau_g1: Vec<E::G1Affine>,
    /// The elements `tau^i * H` in `E::G2`, one per QAP coefficient.
    pub powers_of_tau_g2: Vec<E::G2Affine>,
    /// The elements `delta^{-1} * (beta * a_i(tau) + alpha * b_i(tau) + c_i(tau)) * G`
    /// for every private wire `i`.
    pub li_div_delta: Vec<E::G1Affine>,
    /// The elements `delta^{-1} * Z(tau) * tau^j * G`, one per coefficient
    /// of `h(x)`.
    pub zx_powers: Vec<E::G1Affine>,
    /// The circuit's QAP, needed to combine the witness into `A`, `B`, `C`.
    pub qap: Qap<E::ScalarField>,
}
