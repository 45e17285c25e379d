use ark_relations::r1cs::SynthesisError;

/// Errors raised while compiling circuits, running the setup ceremony,
/// or creating proofs.
///
/// A proof that fails to verify is not an error: verification returns
/// `Ok(false)` for it.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// A field element had to be inverted but was zero.
    #[error("division by zero")]
    DivisionByZero,
    /// Exact polynomial division left a nonzero remainder.
    #[error("polynomial is not divisible by the divisor")]
    NotDivisible,
    /// A wire name does not appear in the circuit's wire ordering.
    #[error("unknown symbol `{0}`")]
    UnknownSymbol(String),
    /// The circuit description cannot be compiled.
    #[error("invalid circuit: {0}")]
    InvalidCircuit(String),
    /// A witness or input assignment has the wrong number of entries.
    #[error("invalid witness length, expected {expected} but got {found}")]
    InvalidWitnessLength {
        /// Number of entries the circuit requires.
        expected: usize,
        /// Number of entries supplied.
        found: usize,
    },
    /// The circuit needs more powers of tau than the ceremony produced.
    #[error("polynomial degree too large for the reference string")]
    PolynomialDegreeTooLarge,
    /// The verifying key does not match the number of public inputs.
    #[error("malformed verifying key")]
    MalformedVerifyingKey,
    /// Replaying the circuit into an arkworks constraint system failed.
    #[error("constraint synthesis failed: {0}")]
    Synthesis(#[from] SynthesisError),
}

/// Result alias used throughout the crate.
pub type Result<T> = core::result::Result<T, Error>;
