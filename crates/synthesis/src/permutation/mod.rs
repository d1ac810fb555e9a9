// This code is part of Qiskit.
//
// (C) Copyright IBM 2025
//
// This code is licensed under the Apache License, Version 2.0. You may
// obtain a copy of this license in the LICENSE.txt file in the root directory
// of this source tree or at http://www.apache.org/licenses/LICENSE-2.0.
//
// Any modifications or derivative works of this code must retain this
// copyright notice, and modified files need to carry a notice indicating
// that they have been altered from the originals.

use std::fmt;
use std::str::FromStr;

use rayon::prelude::*;
use revsynth_circuit::{MctCircuitBuilder, SmallMctCircuit};
use tracing::debug;

#[cfg(feature = "python")]
use numpy::PyArrayLike1;
#[cfg(feature = "python")]
use pyo3::prelude::*;
#[cfg(feature = "python")]
use pyo3::wrap_pyfunction;

use crate::error::SynthesisError;

pub mod accumulator;
pub mod transformation_based;
pub mod utils;

pub use accumulator::GateAccumulator;
pub use transformation_based::{
    transformation_based_synthesis, transformation_based_synthesis_bidirectional,
    transformation_based_synthesis_multidirectional,
};
pub use utils::{PermutationTable, MAX_NUM_QUBITS};

/// The row-reduction policy of transformation-based synthesis.
#[derive(Copy, Clone, Debug, Hash, Ord, PartialOrd, Eq, PartialEq)]
pub enum TbsStrategy {
    /// Fix every row on the output side.
    Unidirectional,
    /// Fix every row on the output or the input side, whichever is cheaper.
    Bidirectional,
    /// Fix every row through its cheapest partner row, on both sides.
    Multidirectional,
}

impl TbsStrategy {
    pub const ALL: [TbsStrategy; 3] = [
        TbsStrategy::Unidirectional,
        TbsStrategy::Bidirectional,
        TbsStrategy::Multidirectional,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            TbsStrategy::Unidirectional => "unidirectional",
            TbsStrategy::Bidirectional => "bidirectional",
            TbsStrategy::Multidirectional => "multidirectional",
        }
    }

    /// Runs this strategy on `table`, which is left as the identity.
    pub fn synthesize<C: MctCircuitBuilder>(self, table: &mut PermutationTable) -> C {
        match self {
            TbsStrategy::Unidirectional => transformation_based_synthesis(table),
            TbsStrategy::Bidirectional => transformation_based_synthesis_bidirectional(table),
            TbsStrategy::Multidirectional => transformation_based_synthesis_multidirectional(table),
        }
    }
}

impl fmt::Display for TbsStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for TbsStrategy {
    type Err = SynthesisError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "unidirectional" | "basic" => Ok(TbsStrategy::Unidirectional),
            "bidirectional" => Ok(TbsStrategy::Bidirectional),
            "multidirectional" => Ok(TbsStrategy::Multidirectional),
            _ => Err(SynthesisError::UnknownStrategy(s.to_string())),
        }
    }
}

/// Synthesizes an MCT circuit for the permutation `pattern` of the `n`-bit patterns.
///
/// The pattern is validated before anything else happens and is not modified; the
/// strategy works on its own copy.
pub fn synth_permutation_mct<C: MctCircuitBuilder>(
    pattern: &[u32],
    strategy: TbsStrategy,
) -> Result<C, SynthesisError> {
    let mut table = PermutationTable::new(pattern.to_vec())?;
    Ok(strategy.synthesize(&mut table))
}

/// Runs every strategy on its own copy of `pattern`, in parallel, and keeps the circuit
/// with the fewest gates. Ties go to the circuit with fewer control bits, then to the
/// simpler strategy.
pub fn synth_permutation_mct_best(
    pattern: &[u32],
) -> Result<(TbsStrategy, SmallMctCircuit), SynthesisError> {
    let table = PermutationTable::new(pattern.to_vec())?;
    let (strategy, circuit) = TbsStrategy::ALL
        .par_iter()
        .map(|&strategy| {
            let mut table = table.clone();
            let circuit: SmallMctCircuit = strategy.synthesize(&mut table);
            (strategy, circuit)
        })
        .min_by_key(|(strategy, circuit)| {
            (circuit.num_gates(), circuit.num_control_bits(), *strategy)
        })
        .expect("there is always at least one strategy to run");
    debug!(
        %strategy,
        num_gates = circuit.num_gates(),
        "picked cheapest transformation-based synthesis"
    );
    Ok((strategy, circuit))
}

/// Checks whether an array of size 2^n is a permutation of 0, 1, ..., 2^n - 1 and returns n.
#[cfg(feature = "python")]
#[pyfunction]
#[pyo3(signature = (pattern))]
pub fn _validate_mct_permutation(pattern: PyArrayLike1<i64>) -> PyResult<u32> {
    let values = utils::pattern_from_array(&pattern.as_array())?;
    Ok(utils::validate_permutation(&values)?)
}

/// Synthesizes a reversible circuit for a permutation of the n-bit patterns. Returns the
/// number of qubits and the ``(controls, targets)`` masks of every gate in order.
#[cfg(feature = "python")]
#[pyfunction]
#[pyo3(signature = (pattern, strategy="bidirectional"))]
pub fn _synth_permutation_mct(
    pattern: PyArrayLike1<i64>,
    strategy: &str,
) -> PyResult<(u32, Vec<(u32, u32)>)> {
    let values = utils::pattern_from_array(&pattern.as_array())?;
    let strategy: TbsStrategy = strategy.parse()?;
    let circuit: SmallMctCircuit = synth_permutation_mct(&values, strategy)?;
    Ok((
        circuit.num_qubits(),
        circuit
            .gates()
            .iter()
            .map(|gate| (gate.controls(), gate.targets()))
            .collect(),
    ))
}

#[cfg(feature = "python")]
#[pymodule]
pub fn permutation(m: &Bound<PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(_validate_mct_permutation, m)?)?;
    m.add_function(wrap_pyfunction!(_synth_permutation_mct, m)?)?;
    Ok(())
}
