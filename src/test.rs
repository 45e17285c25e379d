use crate::{
    circuit::{Circuit, CompiledCircuit, Expression},
    CeremonyConfig, Error, Groth16, LagrangeReduction, Qap,
};
use ark_ec::pairing::Pairing;
use ark_ff::PrimeField;

/// `y = x^3; return x + y + 5`, so `x = 3` returns `35`.
fn cubic() -> CompiledCircuit {
    Circuit::new(["x"])
        .assign("y", Expression::var("x").pow(3))
        .ret(Expression::var("x") + Expression::var("y") + Expression::constant(5))
        .compile()
        .unwrap()
}

fn keys<E: Pairing>(
    circuit: &CompiledCircuit,
) -> (crate::ProvingKey<E>, crate::VerifyingKey<E>) {
    let rng = &mut ark_std::test_rng();
    let qap = Qap::<E::ScalarField>::from_circuit::<LagrangeReduction>(circuit).unwrap();
    Groth16::<E>::setup(&qap, &CeremonyConfig::default(), rng).unwrap()
}

fn fe<F: PrimeField>(values: &[u64]) -> Vec<F> {
    values.iter().map(|v| F::from(*v)).collect()
}

fn prove_and_verify<E: Pairing>() {
    let rng = &mut ark_std::test_rng();
    let circuit = cubic();
    let (pk, vk) = keys::<E>(&circuit);

    let witness = circuit.witness(&fe::<E::ScalarField>(&[3])).unwrap();
    assert_eq!(witness, fe::<E::ScalarField>(&[1, 3, 27, 9, 35, 30]));

    let proof = Groth16::<E>::prove(&pk, &witness, rng).unwrap();
    assert!(Groth16::<E>::verify(&vk, &fe::<E::ScalarField>(&[3]), &proof).unwrap());
    assert!(!Groth16::<E>::verify(&vk, &fe::<E::ScalarField>(&[4]), &proof).unwrap());

    let pvk = crate::prepare_verifying_key(&vk);
    assert!(Groth16::<E>::verify_proof(&pvk, &proof, &fe::<E::ScalarField>(&[3])).unwrap());
    assert!(!Groth16::<E>::verify_proof(&pvk, &proof, &fe::<E::ScalarField>(&[4])).unwrap());
}

mod bls12_381 {
    use super::*;
    use crate::{prepare_verifying_key, Proof, VerifyingKey};
    use ark_bls12_381::{Bls12_381, Fr};
    use ark_serialize::{CanonicalDeserialize, CanonicalSerialize};
    use ark_std::test_rng;

    type Snark = Groth16<Bls12_381>;

    #[test]
    fn prove_and_verify_cubic() {
        prove_and_verify::<Bls12_381>();
    }

    #[test]
    fn unsatisfying_witness_cannot_be_proven() {
        let rng = &mut test_rng();
        let circuit = cubic();
        let (pk, _) = keys::<Bls12_381>(&circuit);

        let mut witness = circuit.witness(&[Fr::from(3u64)]).unwrap();
        witness[circuit.wire_index("~out").unwrap()] = Fr::from(36u64);
        assert!(matches!(
            Snark::prove(&pk, &witness, rng),
            Err(Error::NotDivisible)
        ));
        assert!(matches!(
            Snark::prove(&pk, &witness[..4], rng),
            Err(Error::InvalidWitnessLength { .. })
        ));
    }

    #[test]
    fn proof_is_bound_to_its_public_input() {
        let rng = &mut test_rng();
        let circuit = cubic();
        let (pk, vk) = keys::<Bls12_381>(&circuit);

        // x = 4 is a valid assignment of the same circuit, just not for x = 3.
        let witness = circuit.witness(&[Fr::from(4u64)]).unwrap();
        assert_eq!(witness, fe::<Fr>(&[1, 4, 64, 16, 73, 68]));
        let proof = Snark::prove(&pk, &witness, rng).unwrap();
        assert!(Snark::verify(&vk, &[Fr::from(4u64)], &proof).unwrap());
        assert!(!Snark::verify(&vk, &[Fr::from(3u64)], &proof).unwrap());
    }

    #[test]
    fn wrong_number_of_public_inputs() {
        let rng = &mut test_rng();
        let circuit = cubic();
        let (pk, vk) = keys::<Bls12_381>(&circuit);
        let proof = Snark::prove(&pk, &circuit.witness(&[Fr::from(3u64)]).unwrap(), rng).unwrap();

        assert!(matches!(
            Snark::verify(&vk, &[], &proof),
            Err(Error::MalformedVerifyingKey)
        ));
        assert!(matches!(
            Snark::verify(&vk, &[Fr::from(1u64), Fr::from(3u64)], &proof),
            Err(Error::MalformedVerifyingKey)
        ));
    }

    #[test]
    fn blinding_changes_the_proof_but_not_its_validity() {
        let circuit = cubic();
        let (pk, vk) = keys::<Bls12_381>(&circuit);
        let witness = circuit.witness(&[Fr::from(3u64)]).unwrap();

        let p1 = Snark::create_proof_with_blinding(
            &pk,
            &witness,
            Fr::from(12u64),
            Fr::from(34u64),
        )
        .unwrap();
        let p2 = Snark::create_proof_with_blinding(
            &pk,
            &witness,
            Fr::from(56u64),
            Fr::from(78u64),
        )
        .unwrap();
        assert_ne!(p1.a, p2.a);
        assert_ne!(p1.c, p2.c);
        assert!(Snark::verify(&vk, &[Fr::from(3u64)], &p1).unwrap());
        assert!(Snark::verify(&vk, &[Fr::from(3u64)], &p2).unwrap());

        let p3 = Snark::create_proof_with_blinding(
            &pk,
            &witness,
            Fr::from(12u64),
            Fr::from(34u64),
        )
        .unwrap();
        assert_eq!(p1, p3);
    }

    #[test]
    fn prove_and_verify_no_zk() {
        let circuit = cubic();
        let (pk, vk) = keys::<Bls12_381>(&circuit);
        let witness = circuit.witness(&[Fr::from(3u64)]).unwrap();

        let proof = Snark::create_proof_no_zk(&pk, &witness).unwrap();
        assert!(Snark::verify(&vk, &[Fr::from(3u64)], &proof).unwrap());
    }

    #[test]
    fn tampered_proof_is_rejected() {
        let rng = &mut test_rng();
        let circuit = cubic();
        let (pk, vk) = keys::<Bls12_381>(&circuit);
        let witness = circuit.witness(&[Fr::from(3u64)]).unwrap();
        let proof = Snark::prove(&pk, &witness, rng).unwrap();
        let other = Snark::prove(&pk, &witness, rng).unwrap();

        let mixed = Proof {
            c: other.c,
            ..proof.clone()
        };
        assert!(!Snark::verify(&vk, &[Fr::from(3u64)], &mixed).unwrap());
        assert!(!Snark::verify(&vk, &[Fr::from(3u64)], &Proof::default()).unwrap());
    }

    #[test]
    fn prepared_and_plain_verification_agree() {
        let rng = &mut test_rng();
        let circuit = cubic();
        let (pk, vk) = keys::<Bls12_381>(&circuit);
        let pvk = prepare_verifying_key(&vk);
        let witness = circuit.witness(&[Fr::from(3u64)]).unwrap();
        let proof = Snark::prove(&pk, &witness, rng).unwrap();

        for x in 0..6u64 {
            let inputs = [Fr::from(x)];
            let prepared = Snark::prepare_inputs(&pvk, &inputs).unwrap();
            assert_eq!(
                Snark::verify(&vk, &inputs, &proof).unwrap(),
                Snark::verify_proof_with_prepared_inputs(&pvk, &proof, &prepared).unwrap()
            );
        }
        assert_eq!(VerifyingKey::from(pvk), vk);
    }

    #[test]
    fn rerandomized_proof_still_verifies() {
        let rng = &mut test_rng();
        let circuit = cubic();
        let (pk, vk) = keys::<Bls12_381>(&circuit);
        let witness = circuit.witness(&[Fr::from(3u64)]).unwrap();
        let proof = Snark::prove(&pk, &witness, rng).unwrap();

        let fresh = Snark::rerandomize_proof(&vk, &proof, rng).unwrap();
        assert_ne!(proof, fresh);
        assert!(Snark::verify(&vk, &[Fr::from(3u64)], &fresh).unwrap());
        assert!(!Snark::verify(&vk, &[Fr::from(4u64)], &fresh).unwrap());
    }

    #[test]
    fn keys_and_proofs_survive_serialization() {
        let rng = &mut test_rng();
        let circuit = cubic();
        let (pk, vk) = keys::<Bls12_381>(&circuit);
        let proof = Snark::prove(&pk, &circuit.witness(&[Fr::from(3u64)]).unwrap(), rng).unwrap();

        let mut bytes = Vec::new();
        vk.serialize_compressed(&mut bytes).unwrap();
        let vk2 = VerifyingKey::<Bls12_381>::deserialize_compressed(&bytes[..]).unwrap();
        assert_eq!(vk, vk2);

        let mut bytes = Vec::new();
        proof.serialize_compressed(&mut bytes).unwrap();
        let proof2 = Proof::<Bls12_381>::deserialize_compressed(&bytes[..]).unwrap();
        assert!(Snark::verify(&vk2, &[Fr::from(3u64)], &proof2).unwrap());

        let mut bytes = Vec::new();
        pk.serialize_uncompressed(&mut bytes).unwrap();
        let pk2 = crate::ProvingKey::<Bls12_381>::deserialize_uncompressed(&bytes[..]).unwrap();
        assert_eq!(pk, pk2);
    }

    #[test]
    fn setup_with_full_field_secrets() {
        let rng = &mut test_rng();
        let circuit = cubic();
        let qap = Qap::<Fr>::from_circuit::<LagrangeReduction>(&circuit).unwrap();
        let config = CeremonyConfig::full_field().with_powers(7, 4);
        let (pk, vk) = Snark::setup(&qap, &config, rng).unwrap();

        let witness = circuit.witness(&[Fr::from(3u64)]).unwrap();
        let proof = Snark::prove(&pk, &witness, rng).unwrap();
        assert!(Snark::verify(&vk, &[Fr::from(3u64)], &proof).unwrap());
    }

    #[test]
    fn several_public_inputs() {
        let rng = &mut test_rng();
        // out = (a + b) * c + a^2
        let circuit = Circuit::new(["a", "b", "c"])
            .assign("s", Expression::var("a") + Expression::var("b"))
            .ret(Expression::var("s") * Expression::var("c") + Expression::var("a").pow(2))
            .compile()
            .unwrap();
        let (pk, vk) = keys::<Bls12_381>(&circuit);
        assert_eq!(vk.li_div_gamma.len(), 4);

        let inputs = fe::<Fr>(&[2, 5, 7]);
        let witness = circuit.witness(&inputs).unwrap();
        assert_eq!(
            witness[circuit.wire_index("~out").unwrap()],
            Fr::from(53u64)
        );
        let proof = Snark::prove(&pk, &witness, rng).unwrap();
        assert!(Snark::verify(&vk, &inputs, &proof).unwrap());
        assert!(!Snark::verify(&vk, &fe::<Fr>(&[5, 2, 7]), &proof).unwrap());
    }
}

mod bn254 {
    use super::*;
    use ark_bn254::Bn254;

    #[test]
    fn prove_and_verify_cubic() {
        prove_and_verify::<Bn254>();
    }
}
