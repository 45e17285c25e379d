//! Arithmetic circuits and their flattening into two-operand gates.
//!
//! A [`Circuit`] is a list of statements over named wires, each assigning an
//! [`Expression`] built from additions, multiplications, integer powers,
//! wire names and integer literals. [`Circuit::compile`] flattens every
//! statement into [`Gate`]s, allocating auxiliary wires `sym_1, sym_2, ...`
//! whenever an operand is itself compound, and freezes the wire ordering.

use ark_ff::PrimeField;
use ark_std::{
    fmt,
    ops::{Add, Mul},
    vec::Vec,
};

use crate::{field, Error, Result};

/// Name of the wire that always carries the value `1`.
pub const ONE_WIRE: &str = "~one";
/// Name of the wire that receives the value of the `return` statement.
pub const OUT_WIRE: &str = "~out";

const FRESH_PREFIX: &str = "sym_";

/// An expression tree over named wires and integer literals.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Expression {
    /// `lhs + rhs`.
    Add(Box<Expression>, Box<Expression>),
    /// `lhs * rhs`.
    Mul(Box<Expression>, Box<Expression>),
    /// `base ^ exponent`; the base must be a wire or a literal and the
    /// exponent must be positive.
    Pow(Box<Expression>, i64),
    /// A named wire.
    Variable(String),
    /// An integer literal.
    Constant(i64),
}

impl Expression {
    /// A reference to the wire `name`.
    pub fn var(name: impl Into<String>) -> Self {
        Expression::Variable(name.into())
    }

    /// The literal `value`.
    pub fn constant(value: i64) -> Self {
        Expression::Constant(value)
    }

    /// `self ^ exponent`.
    pub fn pow(self, exponent: i64) -> Self {
        Expression::Pow(Box::new(self), exponent)
    }

    fn as_operand(&self) -> Option<Operand> {
        match self {
            Expression::Variable(name) => Some(Operand::Symbol(name.clone())),
            Expression::Constant(value) => Some(Operand::Constant(*value)),
            _ => None,
        }
    }
}

impl Add for Expression {
    type Output = Expression;

    fn add(self, other: Expression) -> Expression {
        Expression::Add(Box::new(self), Box::new(other))
    }
}

impl Mul for Expression {
    type Output = Expression;

    fn mul(self, other: Expression) -> Expression {
        Expression::Mul(Box::new(self), Box::new(other))
    }
}

/// One line of a circuit body.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Statement {
    /// `target = value`.
    Assign {
        /// The wire being defined.
        target: String,
        /// Its defining expression.
        value: Expression,
    },
    /// `return value`, bound to [`OUT_WIRE`].
    Return(Expression),
}

/// A circuit description: declared inputs followed by straight-line
/// statements ending in a single `return`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Circuit {
    /// Input wire names, in the order their values are supplied.
    pub inputs: Vec<String>,
    /// The circuit body.
    pub statements: Vec<Statement>,
}

impl Circuit {
    /// Starts a circuit with the given input wires.
    pub fn new<S: Into<String>>(inputs: impl IntoIterator<Item = S>) -> Self {
        Self {
            inputs: inputs.into_iter().map(Into::into).collect(),
            statements: Vec::new(),
        }
    }

    /// Appends `target = value`.
    pub fn assign(mut self, target: impl Into<String>, value: Expression) -> Self {
        self.statements.push(Statement::Assign {
            target: target.into(),
            value,
        });
        self
    }

    /// Appends `return value`.
    pub fn ret(mut self, value: Expression) -> Self {
        self.statements.push(Statement::Return(value));
        self
    }

    /// Flattens the circuit into gates and fixes the wire ordering.
    ///
    /// The ordering is `~one`, the inputs, then every other wire in the order
    /// it is first seen: assignment targets and `~out` when their statement
    /// starts, auxiliary wires when they are allocated.
    pub fn compile(&self) -> Result<CompiledCircuit> {
        let compile_time = start_timer!(|| "Circuit flattening");
        let mut flattener = Flattener::new();
        flattener.wires.push(ONE_WIRE.into());
        for input in &self.inputs {
            flattener.declare(input)?;
        }

        let mut returned = false;
        for statement in &self.statements {
            if returned {
                return Err(Error::InvalidCircuit(
                    "statement after return".into(),
                ));
            }
            match statement {
                Statement::Assign { target, value } => {
                    flattener.declare(target)?;
                    flattener.flatten(target, value)?;
                },
                Statement::Return(value) => {
                    flattener.wires.push(OUT_WIRE.into());
                    flattener.flatten(OUT_WIRE, value)?;
                    returned = true;
                },
            }
        }
        if !returned {
            return Err(Error::InvalidCircuit("missing return statement".into()));
        }
        end_timer!(compile_time);

        Ok(CompiledCircuit {
            gates: flattener.gates,
            wires: flattener.wires,
            num_inputs: self.inputs.len(),
        })
    }
}

/// A gate operand: a wire reference or an integer literal.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Operand {
    /// The named wire.
    Symbol(String),
    /// A literal, carried on the constant-one wire.
    Constant(i64),
}

impl Operand {
    fn symbol(name: &str) -> Self {
        Operand::Symbol(name.into())
    }
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operand::Symbol(name) => write!(f, "{}", name),
            Operand::Constant(value) => write!(f, "{}", value),
        }
    }
}

/// An elementary two-operand gate.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Gate {
    /// `target = a + b`.
    Addition {
        /// Left operand.
        a: Operand,
        /// Right operand.
        b: Operand,
        /// Output wire.
        target: Operand,
    },
    /// `target = a * b`.
    Multiplication {
        /// Left operand.
        a: Operand,
        /// Right operand.
        b: Operand,
        /// Output wire.
        target: Operand,
    },
}

impl Gate {
    /// Returns `(a, b, target)`.
    pub fn operands(&self) -> (&Operand, &Operand, &Operand) {
        match self {
            Gate::Addition { a, b, target } | Gate::Multiplication { a, b, target } => {
                (a, b, target)
            },
        }
    }
}

impl fmt::Display for Gate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Gate::Addition { a, b, target } => write!(f, "{} = {} + {}", target, a, b),
            Gate::Multiplication { a, b, target } => write!(f, "{} = {} * {}", target, a, b),
        }
    }
}

#[derive(Clone, Copy)]
enum BinaryOp {
    Add,
    Mul,
}

impl BinaryOp {
    fn gate(self, a: Operand, b: Operand, target: &str) -> Gate {
        let target = Operand::symbol(target);
        match self {
            BinaryOp::Add => Gate::Addition { a, b, target },
            BinaryOp::Mul => Gate::Multiplication { a, b, target },
        }
    }
}

struct Flattener {
    gates: Vec<Gate>,
    wires: Vec<String>,
    fresh: usize,
}

impl Flattener {
    fn new() -> Self {
        Self {
            gates: Vec::new(),
            wires: Vec::new(),
            fresh: 0,
        }
    }

    fn declare(&mut self, name: &str) -> Result<()> {
        if name.is_empty() || name.starts_with('~') {
            return Err(Error::InvalidCircuit(format!(
                "`{}` is not a valid wire name",
                name
            )));
        }
        if self.wires.iter().any(|w| w == name) {
            return Err(Error::InvalidCircuit(format!(
                "wire `{}` is assigned more than once",
                name
            )));
        }
        self.wires.push(name.into());
        Ok(())
    }

    fn mk_symbol(&mut self) -> String {
        loop {
            self.fresh += 1;
            let symbol = format!("{}{}", FRESH_PREFIX, self.fresh);
            if !self.wires.contains(&symbol) {
                self.wires.push(symbol.clone());
                return symbol;
            }
        }
    }

    fn flatten(&mut self, target: &str, value: &Expression) -> Result<()> {
        match value {
            Expression::Add(lhs, rhs) => self.flatten_binary(BinaryOp::Add, target, lhs, rhs),
            Expression::Mul(lhs, rhs) => self.flatten_binary(BinaryOp::Mul, target, lhs, rhs),
            Expression::Pow(base, exponent) => {
                let base = base.as_operand().ok_or_else(|| {
                    Error::InvalidCircuit("power base must be a wire or a literal".into())
                })?;
                if *exponent < 1 {
                    return Err(Error::InvalidCircuit(format!(
                        "exponent {} is not a positive integer",
                        exponent
                    )));
                }
                self.flatten_pow(&base, *exponent, target);
                Ok(())
            },
            Expression::Variable(_) | Expression::Constant(_) => {
                // `target = atom` is encoded as `target = atom * 1`.
                if let Some(atom) = value.as_operand() {
                    self.flatten_pow(&atom, 1, target);
                }
                Ok(())
            },
        }
    }

    fn flatten_binary(
        &mut self,
        op: BinaryOp,
        target: &str,
        lhs: &Expression,
        rhs: &Expression,
    ) -> Result<()> {
        match (lhs.as_operand(), rhs.as_operand()) {
            (Some(a), Some(b)) => {
                self.gates.push(op.gate(a, b, target));
            },
            (None, Some(b)) => {
                let symbol = self.mk_symbol();
                self.gates
                    .push(op.gate(Operand::symbol(&symbol), b, target));
                self.flatten(&symbol, lhs)?;
            },
            (Some(a), None) => {
                let symbol = self.mk_symbol();
                self.gates
                    .push(op.gate(a, Operand::symbol(&symbol), target));
                self.flatten(&symbol, rhs)?;
            },
            (None, None) => {
                let symbol_a = self.mk_symbol();
                let symbol_b = self.mk_symbol();
                self.gates.push(op.gate(
                    Operand::symbol(&symbol_a),
                    Operand::symbol(&symbol_b),
                    target,
                ));
                self.flatten(&symbol_a, lhs)?;
                self.flatten(&symbol_b, rhs)?;
            },
        }
        Ok(())
    }

    // Linear chain: `base^n` costs exactly `n - 1` multiplications (one for n = 1).
    fn flatten_pow(&mut self, base: &Operand, exponent: i64, target: &str) {
        match exponent {
            1 => self.gates.push(BinaryOp::Mul.gate(
                base.clone(),
                Operand::Constant(1),
                target,
            )),
            2 => self
                .gates
                .push(BinaryOp::Mul.gate(base.clone(), base.clone(), target)),
            _ => {
                let symbol = self.mk_symbol();
                self.gates.push(BinaryOp::Mul.gate(
                    Operand::symbol(&symbol),
                    base.clone(),
                    target,
                ));
                self.flatten_pow(base, exponent - 1, &symbol);
            },
        }
    }
}

/// The flattened form of a [`Circuit`]: its gates plus the frozen wire
/// ordering `[~one, inputs..., other wires...]`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CompiledCircuit {
    /// Gates in emission order; gate `i` becomes constraint row `i`.
    pub gates: Vec<Gate>,
    /// Wire names; position `i` is witness coordinate `i`.
    pub wires: Vec<String>,
    /// Number of declared inputs, which sit at positions `1..=num_inputs`.
    pub num_inputs: usize,
}

impl CompiledCircuit {
    /// Number of wires, and therefore the witness length.
    #[inline]
    pub fn num_wires(&self) -> usize {
        self.wires.len()
    }

    /// Number of gates, and therefore R1CS rows.
    #[inline]
    pub fn num_constraints(&self) -> usize {
        self.gates.len()
    }

    /// Number of public wires: the constant-one wire plus the inputs.
    #[inline]
    pub fn num_public(&self) -> usize {
        self.num_inputs + 1
    }

    /// Position of `name` in the wire ordering.
    pub fn wire_index(&self, name: &str) -> Result<usize> {
        self.wires
            .iter()
            .position(|w| w == name)
            .ok_or_else(|| Error::UnknownSymbol(name.into()))
    }

    /// Resolves an operand to `(wire position, coefficient)`. Symbols carry
    /// coefficient one; literals sit on the constant-one wire at position 0.
    pub fn resolve<F: PrimeField>(&self, operand: &Operand) -> Result<(usize, F)> {
        match operand {
            Operand::Symbol(name) => Ok((self.wire_index(name)?, F::one())),
            Operand::Constant(value) => Ok((0, field::from_i64(*value))),
        }
    }

    /// Computes the full witness from the input values by evaluating gates
    /// until every wire is assigned.
    pub fn witness<F: PrimeField>(&self, inputs: &[F]) -> Result<Vec<F>> {
        if inputs.len() != self.num_inputs {
            return Err(Error::InvalidWitnessLength {
                expected: self.num_inputs,
                found: inputs.len(),
            });
        }

        let mut values = vec![None; self.num_wires()];
        values[0] = Some(F::one());
        for (value, input) in values[1..].iter_mut().zip(inputs) {
            *value = Some(*input);
        }

        let mut pending = self
            .gates
            .iter()
            .map(|gate| {
                let (a, b, target) = gate.operands();
                let is_addition = matches!(gate, Gate::Addition { .. });
                Ok((
                    is_addition,
                    self.resolve::<F>(a)?,
                    self.resolve::<F>(b)?,
                    self.resolve::<F>(target)?.0,
                ))
            })
            .collect::<Result<Vec<_>>>()?;

        while !pending.is_empty() {
            let before = pending.len();
            pending.retain(|&(is_addition, (a, ca), (b, cb), target)| {
                match (values[a], values[b]) {
                    (Some(va), Some(vb)) => {
                        let (va, vb) = (ca * va, cb * vb);
                        values[target] = Some(if is_addition { va + vb } else { va * vb });
                        false
                    },
                    _ => true,
                }
            });
            if pending.len() == before {
                let &(_, (a, _), (b, _), _) = &pending[0];
                let stuck = if values[a].is_none() { a } else { b };
                return Err(Error::InvalidCircuit(format!(
                    "wire `{}` is never assigned a value",
                    self.wires[stuck]
                )));
            }
        }

        values
            .into_iter()
            .enumerate()
            .map(|(i, v)| {
                v.ok_or_else(|| {
                    Error::InvalidCircuit(format!(
                        "wire `{}` is never assigned a value",
                        self.wires[i]
                    ))
                })
            })
            .collect()
    }
}
