use ark_ff::PrimeField;
use ark_serialize::{CanonicalDeserialize, CanonicalSerialize};
use ark_std::{cfg_iter, vec::Vec};

use crate::{
    circuit::CompiledCircuit, polynomial::Polynomial, r1cs::ConstraintMatrices, Error,
};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// A Quadratic Arithmetic Program: one polynomial per wire for each of the
/// A, B and C matrices, plus the vanishing polynomial over the constraint
/// indices `1..=n`.
#[derive(Clone, Debug, PartialEq, Eq, CanonicalSerialize, CanonicalDeserialize)]
pub struct Qap<F: PrimeField> {
    /// `a[j](i + 1)` equals `A[i][j]`.
    pub a: Vec<Polynomial<F>>,
    /// `b[j](i + 1)` equals `B[i][j]`.
    pub b: Vec<Polynomial<F>>,
    /// `c[j](i + 1)` equals `C[i][j]`.
    pub c: Vec<Polynomial<F>>,
    /// `Z(x) = (x - 1)...(x - n)` for `n` constraints.
    pub z: Polynomial<F>,
    /// Number of leading wires that are public (the constant-one wire and
    /// the circuit inputs).
    pub num_public: usize,
}

impl<F: PrimeField> Qap<F> {
    /// Compiles the R1CS of `circuit` and lifts it.
    pub fn from_circuit<QAP: R1CSToQAP>(circuit: &CompiledCircuit) -> crate::Result<Self> {
        let matrices = ConstraintMatrices::from_circuit(circuit)?;
        QAP::instance_map(&matrices, circuit.num_public())
    }

    /// Number of wires, one polynomial each.
    #[inline]
    pub fn num_wires(&self) -> usize {
        self.a.len()
    }

    /// Number of constraints, the degree of `Z`.
    #[inline]
    pub fn num_constraints(&self) -> usize {
        self.z.degree()
    }
}

/// Computes instance and witness reductions from R1CS to
/// Quadratic Arithmetic Programs (QAPs).
pub trait R1CSToQAP {
    /// Computes the QAP corresponding to `matrices`, whose first
    /// `num_public` wires are public.
    fn instance_map<F: PrimeField>(
        matrices: &ConstraintMatrices<F>,
        num_public: usize,
    ) -> crate::Result<Qap<F>>;

    /// Computes `h(x) = (A(x)·B(x) - C(x)) / Z(x)` for `witness`. Fails
    /// with [`Error::NotDivisible`] if the witness does not satisfy the QAP.
    fn witness_map<F: PrimeField>(
        qap: &Qap<F>,
        witness: &[F],
    ) -> crate::Result<Polynomial<F>>;
}

/// Lifts each matrix column by Lagrange interpolation over the points
/// `x = 1, ..., n`, one per constraint row.
pub struct LagrangeReduction;

impl R1CSToQAP for LagrangeReduction {
    fn instance_map<F: PrimeField>(
        matrices: &ConstraintMatrices<F>,
        num_public: usize,
    ) -> crate::Result<Qap<F>> {
        let num_constraints = matrices.num_constraints();
        if num_constraints == 0 {
            return Err(Error::InvalidCircuit("circuit has no constraints".into()));
        }
        if num_public == 0 || num_public > matrices.num_wires {
            return Err(Error::InvalidCircuit(format!(
                "{} public wires out of {}",
                num_public, matrices.num_wires
            )));
        }

        let qap_time = start_timer!(|| format!(
            "Interpolating {} columns over {} constraints",
            3 * matrices.num_wires,
            num_constraints
        ));
        let interpolate = |column: &Vec<F>| -> crate::Result<Polynomial<F>> {
            let points = column
                .iter()
                .enumerate()
                .map(|(i, y)| (F::from((i + 1) as u64), *y))
                .collect::<Vec<_>>();
            Polynomial::interpolate(&points)
        };

        let (a, b, c) = matrices.columns();
        let a = cfg_iter!(a).map(interpolate).collect::<crate::Result<Vec<_>>>()?;
        let b = cfg_iter!(b).map(interpolate).collect::<crate::Result<Vec<_>>>()?;
        let c = cfg_iter!(c).map(interpolate).collect::<crate::Result<Vec<_>>>()?;
        end_timer!(qap_time);

        Ok(Qap {
            a,
            b,
            c,
            z: Polynomial::vanishing(num_constraints),
            num_public,
        })
    }

    fn witness_map<F: PrimeField>(
        qap: &Qap<F>,
        witness: &[F],
    ) -> crate::Result<Polynomial<F>> {
        if witness.len() != qap.num_wires() {
            return Err(Error::InvalidWitnessLength {
                expected: qap.num_wires(),
                found: witness.len(),
            });
        }

        let witness_map_time = start_timer!(|| "R1CS to QAP witness map");
        let a = Polynomial::linear_combination(witness, &qap.a);
        let b = Polynomial::linear_combination(witness, &qap.b);
        let c = Polynomial::linear_combination(witness, &qap.c);
        let h = (&(&a * &b) - &c).exact_div(&qap.z);
        end_timer!(witness_map_time);

        h
    }
}
