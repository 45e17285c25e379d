//! The two-phase trusted setup.
//!
//! Phase 1 is circuit independent and produces [`PowersOfTau`]. Phase 2
//! consumes that output together with a circuit's [`Qap`] and produces the
//! [`ProvingKey`] and [`VerifyingKey`]. Each phase takes ownership of its
//! secrets, which are wiped when dropped.

use crate::{
    field, polynomial::Polynomial, r1cs_to_qap::Qap, r1cs_to_qap::R1CSToQAP, Error, Groth16,
    PowersOfTau, ProvingKey, Result, Vec, VerifyingKey,
};
use ark_ec::{
    pairing::Pairing, scalar_mul::BatchMulPreprocessing, AffineRepr, CurveGroup, VariableBaseMSM,
};
use ark_ff::{Field, One, PrimeField};
use ark_std::{cfg_into_iter, cfg_iter, ops::RangeInclusive, rand::Rng};
use zeroize::{Zeroize, ZeroizeOnDrop};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Sizes of the reference string and how ceremony secrets are sampled.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CeremonyConfig {
    /// Number of powers of tau in `G1` (and of their alpha/beta multiples).
    /// A circuit with `n` constraints needs `2n - 1`.
    pub n1: usize,
    /// Number of powers of tau in `G2`. A circuit with `n` constraints
    /// needs `n`.
    pub n2: usize,
    /// Range secrets are drawn from, or `None` to draw from the whole field.
    pub secret_range: Option<RangeInclusive<u64>>,
}

impl Default for CeremonyConfig {
    /// Test-sized parameters: 128 powers in `G1`, 16 in `G2`, and small,
    /// guessable secrets in `200..=500`.
    fn default() -> Self {
        Self {
            n1: 128,
            n2: 16,
            secret_range: Some(200..=500),
        }
    }
}

impl CeremonyConfig {
    /// Default sizes with secrets drawn uniformly from the whole field.
    pub fn full_field() -> Self {
        Self {
            secret_range: None,
            ..Self::default()
        }
    }

    /// Overrides the reference string sizes.
    pub fn with_powers(mut self, n1: usize, n2: usize) -> Self {
        self.n1 = n1;
        self.n2 = n2;
        self
    }

    /// The smallest configuration able to handle `num_constraints`.
    pub fn for_constraints(num_constraints: usize) -> Self {
        let n = num_constraints.max(1);
        Self::default().with_powers(2 * n - 1, n)
    }

    /// Draws a nonzero secret.
    pub fn sample<F: PrimeField, R: Rng>(&self, rng: &mut R) -> F {
        match &self.secret_range {
            Some(range) => {
                let start = (*range.start()).max(1);
                let end = (*range.end()).max(start);
                F::from(rng.gen_range(start..=end))
            },
            None => loop {
                let s = F::rand(rng);
                if !s.is_zero() {
                    break s;
                }
            },
        }
    }
}

/// The secrets `tau`, `alpha` and `beta` of the first phase.
pub struct Phase1Secrets<F: PrimeField> {
    tau: F,
    alpha: F,
    beta: F,
}

impl<F: PrimeField> Phase1Secrets<F> {
    /// Wraps explicitly chosen secrets, e.g. to re-derive a reference string.
    pub fn new(tau: F, alpha: F, beta: F) -> Self {
        Self { tau, alpha, beta }
    }

    /// Samples fresh secrets.
    pub fn sample<R: Rng>(config: &CeremonyConfig, rng: &mut R) -> Self {
        Self::new(config.sample(rng), config.sample(rng), config.sample(rng))
    }
}

impl<F: PrimeField> Zeroize for Phase1Secrets<F> {
    fn zeroize(&mut self) {
        self.tau.zeroize();
        self.alpha.zeroize();
        self.beta.zeroize();
    }
}

impl<F: PrimeField> Drop for Phase1Secrets<F> {
    fn drop(&mut self) {
        self.zeroize();
    }
}

impl<F: PrimeField> ZeroizeOnDrop for Phase1Secrets<F> {}

/// The secrets `delta` and `gamma` of the second phase.
pub struct Phase2Secrets<F: PrimeField> {
    delta: F,
    gamma: F,
}

impl<F: PrimeField> Phase2Secrets<F> {
    /// Wraps explicitly chosen secrets.
    pub fn new(delta: F, gamma: F) -> Self {
        Self { delta, gamma }
    }

    /// Samples fresh secrets.
    pub fn sample<R: Rng>(config: &CeremonyConfig, rng: &mut R) -> Self {
        Self::new(config.sample(rng), config.sample(rng))
    }
}

impl<F: PrimeField> Zeroize for Phase2Secrets<F> {
    fn zeroize(&mut self) {
        self.delta.zeroize();
        self.gamma.zeroize();
    }
}

impl<F: PrimeField> Drop for Phase2Secrets<F> {
    fn drop(&mut self) {
        self.zeroize();
    }
}

impl<F: PrimeField> ZeroizeOnDrop for Phase2Secrets<F> {}

/// Evaluates `poly` at the secret behind `powers` without learning it:
/// `Σ cᵢ·(τⁱ·P) = poly(τ)·P`.
pub(crate) fn evaluate_in_exponent<G: CurveGroup>(
    powers: &[G::Affine],
    poly: &Polynomial<G::ScalarField>,
) -> Result<G> {
    if poly.len() > powers.len() {
        return Err(Error::PolynomialDegreeTooLarge);
    }
    Ok(<G as VariableBaseMSM>::msm_unchecked(
        &powers[..poly.len()],
        &poly.coeffs,
    ))
}

fn powers<F: Field>(base: F, len: usize) -> Vec<F> {
    let mut powers = Vec::with_capacity(len);
    let mut cur = F::one();
    for _ in 0..len {
        powers.push(cur);
        cur *= base;
    }
    powers
}

impl<E: Pairing, QAP: R1CSToQAP> Groth16<E, QAP> {
    /// Runs both ceremony phases with freshly sampled secrets.
    pub fn setup<R: Rng>(
        qap: &Qap<E::ScalarField>,
        config: &CeremonyConfig,
        rng: &mut R,
    ) -> Result<(ProvingKey<E>, VerifyingKey<E>)> {
        let srs = Self::phase1(config, Phase1Secrets::sample(config, rng))?;
        let pk = srs.phase2(qap, Phase2Secrets::sample(config, rng))?;
        let vk = pk.vk.clone();
        Ok((pk, vk))
    }

    /// Phase 1: encrypts `N1` powers of `tau` in `G1` (plain and scaled by
    /// `alpha` and `beta`) and `N2` powers in `G2`.
    pub fn phase1(
        config: &CeremonyConfig,
        secrets: Phase1Secrets<E::ScalarField>,
    ) -> Result<PowersOfTau<E>> {
        if config.n1 == 0 || config.n2 == 0 {
            return Err(Error::PolynomialDegreeTooLarge);
        }
        let phase1_time = start_timer!(|| format!(
            "Ceremony phase 1 with N1 = {}, N2 = {}",
            config.n1, config.n2
        ));

        let g1_generator = E::G1Affine::generator().into_group();
        let g2_generator = E::G2Affine::generator().into_group();

        let tau_powers = powers(secrets.tau, config.n1.max(config.n2));
        let alpha_tau_powers = cfg_iter!(tau_powers[..config.n1])
            .map(|t| *t * secrets.alpha)
            .collect::<Vec<_>>();
        let beta_tau_powers = cfg_iter!(tau_powers[..config.n1])
            .map(|t| *t * secrets.beta)
            .collect::<Vec<_>>();

        let g1_time = start_timer!(|| "Compute G1 powers");
        let g1_table = BatchMulPreprocessing::new(g1_generator, 3 * config.n1 + 2);
        let powers_of_tau_g1 = g1_table.batch_mul(&tau_powers[..config.n1]);
        let alpha_powers_g1 = g1_table.batch_mul(&alpha_tau_powers);
        let beta_powers_g1 = g1_table.batch_mul(&beta_tau_powers);
        let alpha_beta_g1 = g1_table.batch_mul(&[secrets.alpha, secrets.beta]);
        drop(g1_table);
        end_timer!(g1_time);

        let g2_time = start_timer!(|| "Compute G2 powers");
        let g2_table = BatchMulPreprocessing::new(g2_generator, config.n2 + 1);
        let powers_of_tau_g2 = g2_table.batch_mul(&tau_powers[..config.n2]);
        let beta_g2 = (g2_generator * secrets.beta).into_affine();
        drop(g2_table);
        end_timer!(g2_time);

        end_timer!(phase1_time);

        Ok(PowersOfTau {
            powers_of_tau_g1,
            powers_of_tau_g2,
            alpha_powers_g1,
            beta_powers_g1,
            alpha_g1: alpha_beta_g1[0],
            beta_g1: alpha_beta_g1[1],
            beta_g2,
        })
    }
}

impl<E: Pairing> PowersOfTau<E> {
    /// Phase 2: specializes the reference string to `qap`.
    ///
    /// For every wire `i`, `beta * a_i(tau) + alpha * b_i(tau) + c_i(tau)` is
    /// assembled in `G1` from the phase-1 sequences and divided by `gamma`
    /// (public wires) or `delta` (private wires). `Z(tau) * tau^j / delta` is
    /// assembled the same way from the public coefficients of `Z`.
    pub fn phase2(
        &self,
        qap: &Qap<E::ScalarField>,
        secrets: Phase2Secrets<E::ScalarField>,
    ) -> Result<ProvingKey<E>> {
        let num_constraints = qap.num_constraints();
        let num_wires = qap.num_wires();
        if qap.b.len() != num_wires
            || qap.c.len() != num_wires
            || qap.num_public == 0
            || qap.num_public > num_wires
        {
            return Err(Error::InvalidCircuit("malformed QAP".into()));
        }
        let h_len = num_constraints.saturating_sub(1);
        if self.powers_of_tau_g1.len() < num_constraints + h_len
            || self.powers_of_tau_g2.len() < num_constraints
        {
            return Err(Error::PolynomialDegreeTooLarge);
        }

        let phase2_time = start_timer!(|| format!(
            "Ceremony phase 2 for {} wires, {} constraints",
            num_wires, num_constraints
        ));
        let gamma_inverse = field::inverse(&secrets.gamma)?;
        let delta_inverse = field::inverse(&secrets.delta)?;

        let l_time = start_timer!(|| "Calculate L");
        let li = cfg_into_iter!(0..num_wires)
            .map(|i| -> Result<E::G1> {
                let beta_a = evaluate_in_exponent::<E::G1>(&self.beta_powers_g1, &qap.a[i])?;
                let alpha_b = evaluate_in_exponent::<E::G1>(&self.alpha_powers_g1, &qap.b[i])?;
                let c = evaluate_in_exponent::<E::G1>(&self.powers_of_tau_g1, &qap.c[i])?;
                let divisor = if i < qap.num_public {
                    gamma_inverse
                } else {
                    delta_inverse
                };
                Ok((beta_a + alpha_b + c) * divisor)
            })
            .collect::<Result<Vec<_>>>()?;
        let mut li = E::G1::normalize_batch(&li);
        let li_div_delta = li.split_off(qap.num_public);
        let li_div_gamma = li;
        end_timer!(l_time);

        let h_time = start_timer!(|| "Calculate H");
        let zx_powers = cfg_into_iter!(0..h_len)
            .map(|j| {
                let shifted = &self.powers_of_tau_g1[j..];
                evaluate_in_exponent::<E::G1>(shifted, &qap.z).map(|z| z * delta_inverse)
            })
            .collect::<Result<Vec<_>>>()?;
        let zx_powers = E::G1::normalize_batch(&zx_powers);
        end_timer!(h_time);

        let g1_generator = E::G1Affine::generator();
        let g2_generator = E::G2Affine::generator();
        let delta_g1 = (g1_generator * secrets.delta).into_affine();
        let delta_g2 = (g2_generator * secrets.delta).into_affine();
        let gamma_g2 = (g2_generator * secrets.gamma).into_affine();

        end_timer!(phase2_time);

        let vk = VerifyingKey {
            alpha_g1: self.alpha_g1,
            beta_g2: self.beta_g2,
            gamma_g2,
            delta_g2,
            li_div_gamma,
        };

        Ok(ProvingKey {
            vk,
            beta_g1: self.beta_g1,
            delta_g1,
            powers_of_tau_g1: self.powers_of_tau_g1[..num_constraints].to_vec(),
            powers_of_tau_g2: self.powers_of_tau_g2[..num_constraints].to_vec(),
            li_div_delta,
            zx_powers,
            qap: qap.clone(),
        })
    }

    /// Folds a further participant's secrets into the reference string:
    /// `tau -> tau * t`, `alpha -> alpha * a`, `beta -> beta * b`.
    pub fn contribute(&self, secrets: Phase1Secrets<E::ScalarField>) -> Self {
        let contribution_time = start_timer!(|| "Phase 1 contribution");
        let n = self.powers_of_tau_g1.len().max(self.powers_of_tau_g2.len());
        let tau_powers = powers(secrets.tau, n);

        let scale_g1 = |points: &[E::G1Affine], factor: E::ScalarField| {
            let scaled = cfg_iter!(points)
                .zip(cfg_iter!(tau_powers[..points.len()]))
                .map(|(p, t)| *p * (*t * factor))
                .collect::<Vec<E::G1>>();
            E::G1::normalize_batch(&scaled)
        };
        let one = E::ScalarField::one();
        let powers_of_tau_g1 = scale_g1(&self.powers_of_tau_g1, one);
        let alpha_powers_g1 = scale_g1(&self.alpha_powers_g1, secrets.alpha);
        let beta_powers_g1 = scale_g1(&self.beta_powers_g1, secrets.beta);

        let powers_of_tau_g2 = cfg_iter!(self.powers_of_tau_g2)
            .zip(cfg_iter!(tau_powers[..self.powers_of_tau_g2.len()]))
            .map(|(p, t)| *p * t)
            .collect::<Vec<E::G2>>();
        end_timer!(contribution_time);

        Self {
            powers_of_tau_g1,
            powers_of_tau_g2: E::G2::normalize_batch(&powers_of_tau_g2),
            alpha_powers_g1,
            beta_powers_g1,
            alpha_g1: (self.alpha_g1 * secrets.alpha).into_affine(),
            beta_g1: (self.beta_g1 * secrets.beta).into_affine(),
            beta_g2: (self.beta_g2 * secrets.beta).into_affine(),
        }
    }

    /// Checks with pairings that every sequence is made of consecutive
    /// powers of one secret and that the alpha/beta elements agree with
    /// each other.
    pub fn is_well_formed(&self) -> bool {
        let g1 = E::G1Affine::generator();
        let g2 = E::G2Affine::generator();
        let n1 = self.powers_of_tau_g1.len();
        if n1 < 2
            || self.powers_of_tau_g2.len() < 2
            || self.alpha_powers_g1.len() != n1
            || self.beta_powers_g1.len() != n1
            || self.powers_of_tau_g1[0] != g1
            || self.powers_of_tau_g2[0] != g2
            || self.alpha_powers_g1[0] != self.alpha_g1
            || self.beta_powers_g1[0] != self.beta_g1
        {
            return false;
        }

        let tau_g2 = self.powers_of_tau_g2[1];
        // e(x_{i+1}, H) == e(x_i, tau * H) for each G1 sequence.
        let consecutive = |points: &[E::G1Affine]| {
            points
                .windows(2)
                .all(|w| E::pairing(w[1], g2) == E::pairing(w[0], tau_g2))
        };
        let tau_g1 = self.powers_of_tau_g1[1];
        let g2_consecutive = self
            .powers_of_tau_g2
            .windows(2)
            .all(|w| E::pairing(g1, w[1]) == E::pairing(tau_g1, w[0]));

        consecutive(&self.powers_of_tau_g1)
            && consecutive(&self.alpha_powers_g1)
            && consecutive(&self.beta_powers_g1)
            && g2_consecutive
            && E::pairing(self.beta_g1, g2) == E::pairing(g1, self.beta_g2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{circuit::tests::cubic, r1cs_to_qap::LagrangeReduction};
    use ark_bls12_381::{Bls12_381, Fr, G1Projective, G2Affine, G2Projective};
    use ark_ff::{One, Zero};
    use ark_std::test_rng;

    type Ceremony = Groth16<Bls12_381>;

    fn secrets() -> (Fr, Fr, Fr) {
        (Fr::from(233u64), Fr::from(311u64), Fr::from(467u64))
    }

    fn cubic_qap() -> Qap<Fr> {
        Qap::from_circuit::<LagrangeReduction>(&cubic().compile().unwrap()).unwrap()
    }

    fn g1(s: Fr) -> <Bls12_381 as Pairing>::G1Affine {
        (<Bls12_381 as Pairing>::G1Affine::generator() * s).into_affine()
    }

    #[test]
    fn phase1_encrypts_consecutive_powers() {
        let (tau, alpha, beta) = secrets();
        let config = CeremonyConfig::default().with_powers(20, 4);
        let srs = Ceremony::phase1(&config, Phase1Secrets::new(tau, alpha, beta)).unwrap();
        assert_eq!(srs.powers_of_tau_g1.len(), 20);
        assert_eq!(srs.powers_of_tau_g2.len(), 4);
        for (i, point) in srs.powers_of_tau_g1.iter().enumerate() {
            let t = field::pow(&tau, i as u64);
            assert_eq!(*point, g1(t));
            assert_eq!(srs.alpha_powers_g1[i], g1(alpha * t));
            assert_eq!(srs.beta_powers_g1[i], g1(beta * t));
        }
        for (i, point) in srs.powers_of_tau_g2.iter().enumerate() {
            let expected = G2Affine::generator() * field::pow(&tau, i as u64);
            assert_eq!(point.into_group(), expected);
        }
        assert_eq!(srs.alpha_g1, g1(alpha));
        assert_eq!(srs.beta_g1, g1(beta));
        assert!(srs.is_well_formed());
    }

    #[test]
    fn hidden_evaluation_matches_clear_evaluation() {
        let (tau, alpha, beta) = secrets();
        let config = CeremonyConfig::default().with_powers(8, 4);
        let srs = Ceremony::phase1(&config, Phase1Secrets::new(tau, alpha, beta)).unwrap();
        let poly = Polynomial::new(vec![Fr::from(6u64), -Fr::from(5u64), Fr::one()]);

        let hidden: G1Projective = evaluate_in_exponent(&srs.powers_of_tau_g1, &poly).unwrap();
        assert_eq!(hidden.into_affine(), g1(poly.evaluate(&tau)));

        let hidden: G1Projective = evaluate_in_exponent(&srs.alpha_powers_g1, &poly).unwrap();
        assert_eq!(hidden.into_affine(), g1(alpha * poly.evaluate(&tau)));

        let hidden: G2Projective = evaluate_in_exponent(&srs.powers_of_tau_g2, &poly).unwrap();
        assert_eq!(hidden, G2Affine::generator() * poly.evaluate(&tau));

        let too_long = Polynomial::new(vec![Fr::one(); 5]);
        assert!(matches!(
            evaluate_in_exponent::<G2Projective>(&srs.powers_of_tau_g2, &too_long),
            Err(Error::PolynomialDegreeTooLarge)
        ));
    }

    #[test]
    fn phase2_matches_clear_computation() {
        let (tau, alpha, beta) = secrets();
        let (delta, gamma) = (Fr::from(401u64), Fr::from(257u64));
        let qap = cubic_qap();
        let srs = Ceremony::phase1(&CeremonyConfig::default(), Phase1Secrets::new(tau, alpha, beta))
            .unwrap();
        let pk = srs.phase2(&qap, Phase2Secrets::new(delta, gamma)).unwrap();

        let li = |i: usize| {
            beta * qap.a[i].evaluate(&tau) + alpha * qap.b[i].evaluate(&tau) + qap.c[i].evaluate(&tau)
        };
        assert_eq!(pk.vk.li_div_gamma.len(), 2);
        assert_eq!(pk.li_div_delta.len(), 4);
        for i in 0..2 {
            assert_eq!(pk.vk.li_div_gamma[i], g1(li(i) / gamma));
        }
        for i in 2..6 {
            assert_eq!(pk.li_div_delta[i - 2], g1(li(i) / delta));
        }

        let z_tau = qap.z.evaluate(&tau);
        assert_eq!(z_tau, [1u64, 2, 3, 4].iter().map(|i| tau - Fr::from(*i)).product::<Fr>());
        assert_eq!(pk.zx_powers.len(), 3);
        for (j, point) in pk.zx_powers.iter().enumerate() {
            assert_eq!(*point, g1(z_tau * field::pow(&tau, j as u64) / delta));
        }
        assert_eq!(pk.powers_of_tau_g1.len(), 4);
        assert_eq!(pk.powers_of_tau_g2.len(), 4);
        assert_eq!(pk.delta_g1, g1(delta));
        assert_eq!(pk.vk.alpha_g1, g1(alpha));
    }

    #[test]
    fn identical_secrets_give_identical_keys() {
        let (tau, alpha, beta) = secrets();
        let qap = cubic_qap();
        let derive = || {
            Ceremony::phase1(&CeremonyConfig::default(), Phase1Secrets::new(tau, alpha, beta))
                .unwrap()
                .phase2(&qap, Phase2Secrets::new(Fr::from(401u64), Fr::from(257u64)))
                .unwrap()
        };
        assert_eq!(derive(), derive());
    }

    #[test]
    fn undersized_reference_string_is_rejected() {
        let rng = &mut test_rng();
        let qap = cubic_qap();
        // Four constraints need seven powers in G1 and four in G2.
        for (n1, n2) in [(6, 4), (7, 3)] {
            let config = CeremonyConfig::default().with_powers(n1, n2);
            assert!(matches!(
                Ceremony::setup(&qap, &config, rng),
                Err(Error::PolynomialDegreeTooLarge)
            ));
        }
        let config = CeremonyConfig::for_constraints(qap.num_constraints());
        assert_eq!((config.n1, config.n2), (7, 4));
        assert!(Ceremony::setup(&qap, &config, rng).is_ok());
        assert!(matches!(
            Ceremony::phase1(
                &CeremonyConfig::default().with_powers(0, 4),
                Phase1Secrets::sample(&config, rng)
            ),
            Err(Error::PolynomialDegreeTooLarge)
        ));
    }

    #[test]
    fn zero_phase2_secret_is_rejected() {
        let (tau, alpha, beta) = secrets();
        let srs = Ceremony::phase1(&CeremonyConfig::default(), Phase1Secrets::new(tau, alpha, beta))
            .unwrap();
        assert!(matches!(
            srs.phase2(&cubic_qap(), Phase2Secrets::new(Fr::zero(), Fr::one())),
            Err(Error::DivisionByZero)
        ));
    }

    #[test]
    fn contribution_composes_secrets() {
        let (tau, alpha, beta) = secrets();
        let (t, a, b) = (Fr::from(3u64), Fr::from(5u64), Fr::from(7u64));
        let config = CeremonyConfig::default().with_powers(10, 4);
        let srs = Ceremony::phase1(&config, Phase1Secrets::new(tau, alpha, beta)).unwrap();
        let updated = srs.contribute(Phase1Secrets::new(t, a, b));
        let direct =
            Ceremony::phase1(&config, Phase1Secrets::new(tau * t, alpha * a, beta * b)).unwrap();
        assert_eq!(updated, direct);
        assert!(updated.is_well_formed());
    }

    #[test]
    fn tampered_reference_string_is_detected() {
        let rng = &mut test_rng();
        let config = CeremonyConfig::full_field().with_powers(6, 3);
        let mut srs = Ceremony::phase1(&config, Phase1Secrets::sample(&config, rng)).unwrap();
        assert!(srs.is_well_formed());
        srs.powers_of_tau_g1[3] = (srs.powers_of_tau_g1[3] + srs.powers_of_tau_g1[1]).into_affine();
        assert!(!srs.is_well_formed());
    }

    #[test]
    fn sampled_secrets_respect_the_range() {
        let rng = &mut test_rng();
        let config = CeremonyConfig::default();
        for _ in 0..100 {
            let s: Fr = config.sample(rng);
            let value = s.into_bigint().as_ref()[0];
            assert!((200..=500).contains(&value));
        }
        let config = CeremonyConfig {
            secret_range: Some(0..=0),
            ..CeremonyConfig::default()
        };
        assert_eq!(config.sample::<Fr, _>(rng), Fr::one());
    }

    fn wiped_on_drop<T: ZeroizeOnDrop>() {}

    #[test]
    fn secrets_are_wiped() {
        wiped_on_drop::<Phase1Secrets<Fr>>();
        wiped_on_drop::<Phase2Secrets<Fr>>();

        let (tau, alpha, beta) = secrets();
        let mut phase1 = Phase1Secrets::new(tau, alpha, beta);
        phase1.zeroize();
        assert!(phase1.tau.is_zero() && phase1.alpha.is_zero() && phase1.beta.is_zero());

        let mut phase2 = Phase2Secrets::new(Fr::from(401u64), Fr::from(257u64));
        phase2.zeroize();
        assert!(phase2.delta.is_zero() && phase2.gamma.is_zero());
    }
}
