use ark_ec::{pairing::Pairing, AffineRepr, CurveGroup};
use ark_ff::PrimeField;

use crate::{r1cs_to_qap::R1CSToQAP, Error, Groth16, Result};

use super::{PreparedVerifyingKey, Proof, VerifyingKey};

use core::ops::{AddAssign, Neg};

/// Prepare the verifying key `vk` for use in proof verification.
pub fn prepare_verifying_key<E: Pairing>(vk: &VerifyingKey<E>) -> PreparedVerifyingKey<E> {
    PreparedVerifyingKey {
        vk: vk.clone(),
        alpha_g1_beta_g2: E::pairing(vk.alpha_g1, vk.beta_g2).0,
        gamma_g2_neg_pc: vk.gamma_g2.into_group().neg().into_affine().into(),
        delta_g2_neg_pc: vk.delta_g2.into_group().neg().into_affine().into(),
    }
}

/// Folds `public_inputs` into the public-wire commitments of `vk`:
/// `li_div_gamma[0] + Σ x_i · li_div_gamma[i]`.
///
/// The constant-one wire is implicit, so `public_inputs` must hold exactly
/// one element fewer than `li_div_gamma`.
fn accumulate_inputs<E: Pairing>(
    vk: &VerifyingKey<E>,
    public_inputs: &[E::ScalarField],
) -> Result<E::G1> {
    if (public_inputs.len() + 1) != vk.li_div_gamma.len() {
        return Err(Error::MalformedVerifyingKey);
    }

    let mut g_ic = vk.li_div_gamma[0].into_group();
    for (i, b) in public_inputs.iter().zip(vk.li_div_gamma.iter().skip(1)) {
        g_ic.add_assign(&b.mul_bigint(i.into_bigint()));
    }

    Ok(g_ic)
}

impl<E: Pairing, QAP: R1CSToQAP> Groth16<E, QAP> {
    /// Prepare proof inputs for use with [`verify_proof_with_prepared_inputs`], wrt the prepared
    /// verification key `pvk` and instance public inputs.
    ///
    /// [`verify_proof_with_prepared_inputs`]: Self::verify_proof_with_prepared_inputs
    pub fn prepare_inputs(
        pvk: &PreparedVerifyingKey<E>,
        public_inputs: &[E::ScalarField],
    ) -> Result<E::G1> {
        accumulate_inputs(&pvk.vk, public_inputs)
    }

    /// Verify a Groth16 proof `proof` against the prepared verification key `pvk` and prepared public
    /// inputs. This should be preferred over [`verify_proof`] if the instance's public inputs are
    /// known in advance.
    ///
    /// [`verify_proof`]: Self::verify_proof
    pub fn verify_proof_with_prepared_inputs(
        pvk: &PreparedVerifyingKey<E>,
        proof: &Proof<E>,
        prepared_inputs: &E::G1,
    ) -> Result<bool> {
        let verify_time = start_timer!(|| "Groth16::Verifier");
        let qap = E::multi_miller_loop(
            [
                <E::G1Affine as Into<E::G1Prepared>>::into(proof.a),
                prepared_inputs.into_affine().into(),
                proof.c.into(),
            ],
            [
                proof.b.into(),
                pvk.gamma_g2_neg_pc.clone(),
                pvk.delta_g2_neg_pc.clone(),
            ],
        );

        let valid = match E::final_exponentiation(qap) {
            Some(test) => test.0 == pvk.alpha_g1_beta_g2,
            None => false,
        };
        end_timer!(verify_time);

        Ok(valid)
    }

    /// Verify a Groth16 proof `proof` against the prepared verification key `pvk`,
    /// with respect to the instance `public_inputs`.
    pub fn verify_proof(
        pvk: &PreparedVerifyingKey<E>,
        proof: &Proof<E>,
        public_inputs: &[E::ScalarField],
    ) -> Result<bool> {
        let prepared_inputs = Self::prepare_inputs(pvk, public_inputs)?;
        Self::verify_proof_with_prepared_inputs(pvk, proof, &prepared_inputs)
    }

    /// Checks `e(A, B) = e(α, β) · e(pub, γ) · e(C, δ)` with four separate
    /// pairings, where `pub` commits to the constant-one wire followed by
    /// `public_inputs`.
    ///
    /// Returns `Ok(false)` for a well-formed proof that does not verify and
    /// [`Error::MalformedVerifyingKey`] when the number of inputs does not
    /// match `vk`.
    pub fn verify(
        vk: &VerifyingKey<E>,
        public_inputs: &[E::ScalarField],
        proof: &Proof<E>,
    ) -> Result<bool> {
        let verify_time = start_timer!(|| "Groth16::Verifier (unprepared)");
        let public = accumulate_inputs(vk, public_inputs)?;

        // `PairingOutput` is written additively.
        let lhs = E::pairing(proof.a, proof.b);
        let rhs = E::pairing(vk.alpha_g1, vk.beta_g2)
            + E::pairing(public, vk.gamma_g2)
            + E::pairing(proof.c, vk.delta_g2);
        end_timer!(verify_time);

        Ok(lhs == rhs)
    }
}
