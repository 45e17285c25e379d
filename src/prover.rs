use crate::{
    field, generator::evaluate_in_exponent, polynomial::Polynomial, r1cs_to_qap::R1CSToQAP,
    Error, Groth16, Proof, ProvingKey, Result, VerifyingKey,
};
use ark_ec::{pairing::Pairing, AffineRepr, CurveGroup, VariableBaseMSM};
use ark_ff::{UniformRand, Zero};
use ark_std::rand::Rng;

impl<E: Pairing, QAP: R1CSToQAP> Groth16<E, QAP> {
    /// Create a Groth16 proof that `witness` satisfies the circuit behind
    /// `pk`. Fresh blinding scalars `r` and `s` are sampled from `rng`.
    #[inline]
    pub fn prove(
        pk: &ProvingKey<E>,
        witness: &[E::ScalarField],
        rng: &mut impl Rng,
    ) -> Result<Proof<E>> {
        let r = E::ScalarField::rand(rng);
        let s = E::ScalarField::rand(rng);

        Self::create_proof_with_blinding(pk, witness, r, s)
    }

    /// Create a Groth16 proof that is *not* zero-knowledge.
    #[inline]
    pub fn create_proof_no_zk(
        pk: &ProvingKey<E>,
        witness: &[E::ScalarField],
    ) -> Result<Proof<E>> {
        Self::create_proof_with_blinding(
            pk,
            witness,
            E::ScalarField::zero(),
            E::ScalarField::zero(),
        )
    }

    /// Create a Groth16 proof using randomness `r` and `s`.
    ///
    /// Fails with [`Error::NotDivisible`] when `A(x)·B(x) - C(x)` is not a
    /// multiple of `Z(x)`, i.e. when the witness does not satisfy the circuit.
    pub fn create_proof_with_blinding(
        pk: &ProvingKey<E>,
        witness: &[E::ScalarField],
        r: E::ScalarField,
        s: E::ScalarField,
    ) -> Result<Proof<E>> {
        let prover_time = start_timer!(|| "Groth16::Prover");
        let qap = &pk.qap;
        let h = QAP::witness_map(qap, witness)?;

        let c_acc_time = start_timer!(|| "Compute C");
        if h.len() > pk.zx_powers.len() {
            return Err(Error::PolynomialDegreeTooLarge);
        }
        let h_acc = E::G1::msm_unchecked(&pk.zx_powers[..h.len()], &h.coeffs);

        let private_assignment = &witness[qap.num_public..];
        if private_assignment.len() != pk.li_div_delta.len() {
            return Err(Error::InvalidWitnessLength {
                expected: qap.num_public + pk.li_div_delta.len(),
                found: witness.len(),
            });
        }
        let l_aux_acc = E::G1::msm_unchecked(&pk.li_div_delta, private_assignment);

        let r_s_delta_g1 = pk.delta_g1 * (r * s);
        end_timer!(c_acc_time);

        // Compute A
        let a_acc_time = start_timer!(|| "Compute A");
        let a_poly = Polynomial::linear_combination(witness, &qap.a);
        let a_acc = evaluate_in_exponent::<E::G1>(&pk.powers_of_tau_g1, &a_poly)?;
        let g_a = a_acc + pk.vk.alpha_g1 + pk.delta_g1 * r;
        let s_g_a = g_a * s;
        end_timer!(a_acc_time);

        let b_poly = Polynomial::linear_combination(witness, &qap.b);

        // Compute B in G1 if needed
        let g1_b = if !r.is_zero() {
            let b_g1_acc_time = start_timer!(|| "Compute B in G1");
            let b_acc = evaluate_in_exponent::<E::G1>(&pk.powers_of_tau_g1, &b_poly)?;
            let g1_b = b_acc + pk.beta_g1 + pk.delta_g1 * s;
            end_timer!(b_g1_acc_time);

            g1_b
        } else {
            E::G1::zero()
        };

        // Compute B in G2
        let b_g2_acc_time = start_timer!(|| "Compute B in G2");
        let b_acc = evaluate_in_exponent::<E::G2>(&pk.powers_of_tau_g2, &b_poly)?;
        let g2_b = b_acc + pk.vk.beta_g2 + pk.vk.delta_g2 * s;
        let r_g1_b = g1_b * r;
        end_timer!(b_g2_acc_time);

        let c_time = start_timer!(|| "Finish C");
        let mut g_c = s_g_a;
        g_c += &r_g1_b;
        g_c -= &r_s_delta_g1;
        g_c += &l_aux_acc;
        g_c += &h_acc;
        end_timer!(c_time);

        end_timer!(prover_time);

        Ok(Proof {
            a: g_a.into_affine(),
            b: g2_b.into_affine(),
            c: g_c.into_affine(),
        })
    }

    /// Given a Groth16 proof, returns a fresh proof of the same statement. For a proof π of a
    /// statement S, the output of the non-deterministic procedure `rerandomize_proof(π)` is
    /// statistically indistinguishable from a fresh honest proof of S. For more info, see theorem 3 of
    /// [\[BKSV20\]](https://eprint.iacr.org/2020/811)
    pub fn rerandomize_proof(
        vk: &VerifyingKey<E>,
        proof: &Proof<E>,
        rng: &mut impl Rng,
    ) -> Result<Proof<E>> {
        // These are our rerandomization factors. They must be nonzero and uniformly sampled.
        let (mut r1, mut r2) = (E::ScalarField::zero(), E::ScalarField::zero());
        while r1.is_zero() || r2.is_zero() {
            r1 = E::ScalarField::rand(rng);
            r2 = E::ScalarField::rand(rng);
        }

        // See figure 1 in the paper referenced above:
        //   A' = (1/r₁)A
        //   B' = r₁B + r₁r₂(δG₂)
        //   C' = C + r₂A
        let new_a = proof.a * field::inverse(&r1)?;
        let new_b = proof.b * r1 + vk.delta_g2 * (r1 * r2);
        let new_c = proof.c.into_group() + proof.a * r2;

        Ok(Proof {
            a: new_a.into_affine(),
            b: new_b.into_affine(),
            c: new_c.into_affine(),
        })
    }
}
