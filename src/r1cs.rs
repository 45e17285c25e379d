use ark_ff::PrimeField;
use ark_serialize::{CanonicalDeserialize, CanonicalSerialize};
use ark_std::{vec, vec::Vec};

use crate::{
    circuit::{CompiledCircuit, Gate},
    Error,
};

/// Dense R1CS matrices: row `r` of `a`, `b` and `c` encodes gate `r`, and a
/// witness `w` satisfies the system iff `(A·w) ⊙ (B·w) = C·w`.
#[derive(Clone, Debug, PartialEq, Eq, CanonicalSerialize, CanonicalDeserialize)]
pub struct ConstraintMatrices<F: PrimeField> {
    /// Left input rows.
    pub a: Vec<Vec<F>>,
    /// Right input rows.
    pub b: Vec<Vec<F>>,
    /// Output rows.
    pub c: Vec<Vec<F>>,
    /// Row width, equal to the number of wires.
    pub num_wires: usize,
}

impl<F: PrimeField> ConstraintMatrices<F> {
    /// Builds one constraint row per gate of `circuit`.
    ///
    /// `target = a * b` places `a`, `b` and `target` in rows A, B and C.
    /// `target = a + b` is encoded as `(a + b) * 1 = target`.
    pub fn from_circuit(circuit: &CompiledCircuit) -> crate::Result<Self> {
        let r1cs_time = start_timer!(|| "Building R1CS matrices");
        let num_wires = circuit.num_wires();
        let num_constraints = circuit.num_constraints();
        let mut a = vec![vec![F::zero(); num_wires]; num_constraints];
        let mut b = vec![vec![F::zero(); num_wires]; num_constraints];
        let mut c = vec![vec![F::zero(); num_wires]; num_constraints];

        for (row, gate) in circuit.gates.iter().enumerate() {
            let (lhs, rhs, target) = gate.operands();
            let (lhs, lhs_coeff) = circuit.resolve::<F>(lhs)?;
            let (rhs, rhs_coeff) = circuit.resolve::<F>(rhs)?;
            let (target, target_coeff) = circuit.resolve::<F>(target)?;
            match gate {
                Gate::Multiplication { .. } => {
                    a[row][lhs] = lhs_coeff;
                    b[row][rhs] = rhs_coeff;
                },
                Gate::Addition { .. } => {
                    a[row][lhs] += lhs_coeff;
                    a[row][rhs] += rhs_coeff;
                    b[row][0] = F::one();
                },
            }
            c[row][target] = target_coeff;
        }
        end_timer!(r1cs_time);

        Ok(Self { a, b, c, num_wires })
    }

    /// Number of constraint rows.
    #[inline]
    pub fn num_constraints(&self) -> usize {
        self.a.len()
    }

    /// Returns the index of the first row violated by `witness`, if any.
    ///
    /// This is a diagnostic spot check; the authoritative validity test is
    /// the exact division performed by the prover.
    pub fn which_is_unsatisfied(&self, witness: &[F]) -> crate::Result<Option<usize>> {
        if witness.len() != self.num_wires {
            return Err(Error::InvalidWitnessLength {
                expected: self.num_wires,
                found: witness.len(),
            });
        }
        let dot = |row: &[F]| -> F { row.iter().zip(witness).map(|(x, w)| *x * w).sum() };
        Ok((0..self.num_constraints())
            .find(|&i| dot(&self.a[i]) * dot(&self.b[i]) != dot(&self.c[i])))
    }

    /// Returns `true` if every row holds for `witness`.
    pub fn is_satisfied(&self, witness: &[F]) -> crate::Result<bool> {
        Ok(self.which_is_unsatisfied(witness)?.is_none())
    }

    /// Column `j` of each matrix: wire `j`'s coefficient in every row.
    pub(crate) fn columns(&self) -> (Vec<Vec<F>>, Vec<Vec<F>>, Vec<Vec<F>>) {
        (
            transpose(&self.a, self.num_wires),
            transpose(&self.b, self.num_wires),
            transpose(&self.c, self.num_wires),
        )
    }
}

fn transpose<F: PrimeField>(rows: &[Vec<F>], width: usize) -> Vec<Vec<F>> {
    (0..width)
        .map(|j| rows.iter().map(|row| row[j]).collect())
        .collect()
}
