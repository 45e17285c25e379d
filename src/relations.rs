use ark_ff::PrimeField;
use ark_relations::{
    lc,
    r1cs::{
        ConstraintSynthesizer, ConstraintSystem, ConstraintSystemRef, LinearCombination,
        SynthesisError, Variable,
    },
};
use ark_std::vec::Vec;

use crate::{circuit::CompiledCircuit, r1cs::ConstraintMatrices, Error, Result};

/// A compiled circuit, optionally paired with a full witness, that can be
/// replayed into an arkworks [`ConstraintSystem`].
///
/// Wire `0` maps to [`Variable::One`], the remaining public wires become
/// instance variables and everything else becomes a witness variable, in
/// wire order. Each R1CS row becomes one `enforce_constraint` call.
pub struct CircuitAssignment<'a, F: PrimeField> {
    circuit: &'a CompiledCircuit,
    matrices: ConstraintMatrices<F>,
    witness: Option<&'a [F]>,
}

impl<'a, F: PrimeField> CircuitAssignment<'a, F> {
    /// Pairs `circuit` with `witness`, which must cover every wire when
    /// present.
    pub fn new(circuit: &'a CompiledCircuit, witness: Option<&'a [F]>) -> Result<Self> {
        if let Some(w) = witness {
            if w.len() != circuit.num_wires() {
                return Err(Error::InvalidWitnessLength {
                    expected: circuit.num_wires(),
                    found: w.len(),
                });
            }
        }
        let matrices = ConstraintMatrices::from_circuit(circuit)?;

        Ok(Self {
            circuit,
            matrices,
            witness,
        })
    }

    /// Synthesizes into a fresh constraint system and returns it.
    pub fn into_constraint_system(self) -> Result<ConstraintSystemRef<F>> {
        let cs = ConstraintSystem::<F>::new_ref();
        self.generate_constraints(cs.clone())?;
        Ok(cs)
    }

    fn value(&self, wire: usize) -> core::result::Result<F, SynthesisError> {
        self.witness
            .map(|w| w[wire])
            .ok_or(SynthesisError::AssignmentMissing)
    }
}

fn row_to_lc<F: PrimeField>(row: &[F], variables: &[Variable]) -> LinearCombination<F> {
    row.iter()
        .zip(variables)
        .filter(|(coeff, _)| !coeff.is_zero())
        .fold(lc!(), |acc, (coeff, var)| acc + (*coeff, *var))
}

impl<'a, F: PrimeField> ConstraintSynthesizer<F> for CircuitAssignment<'a, F> {
    fn generate_constraints(
        self,
        cs: ConstraintSystemRef<F>,
    ) -> core::result::Result<(), SynthesisError> {
        let num_public = self.circuit.num_public();

        let mut variables = Vec::with_capacity(self.circuit.num_wires());
        variables.push(Variable::One);
        for wire in 1..self.circuit.num_wires() {
            let var = if wire < num_public {
                cs.new_input_variable(|| self.value(wire))?
            } else {
                cs.new_witness_variable(|| self.value(wire))?
            };
            variables.push(var);
        }

        for row in 0..self.matrices.num_constraints() {
            cs.enforce_constraint(
                row_to_lc(&self.matrices.a[row], &variables),
                row_to_lc(&self.matrices.b[row], &variables),
                row_to_lc(&self.matrices.c[row], &variables),
            )?;
        }

        Ok(())
    }
}
