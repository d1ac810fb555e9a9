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

//! Transformation-based synthesis of reversible circuits.
//!
//! All three routines walk the rows of the truth table in ascending order and, at row
//! `x`, compose the table with MCT gates until row `x` maps to `x`. Rows below `x` are
//! never touched again: every gate used at row `x` has its controls set to a pattern that
//! is at least `x`, and a pattern below `x` cannot contain such a pattern. When the scan
//! ends the table is the identity, and the gates composed on either side, read in the
//! right order, form a circuit for the original permutation.
//!
//! Gates appended to the table (acting on outputs) run at the end of the circuit, in
//! reverse order of discovery. Gates prepended to the table (acting on inputs) run at the
//! start, in order of discovery.

use revsynth_circuit::{MctCircuitBuilder, MctGate};
use tracing::{debug, trace};

use super::accumulator::GateAccumulator;
use super::utils::{hamming_distance, missing_bits, PermutationTable};

/// Appends the gates mapping the output `y` of row `x` onto `x`.
fn repair_output(table: &mut PermutationTable, x: u32, y: u32, mut record: impl FnMut(MctGate)) {
    // move 0s to 1s
    let t01 = missing_bits(y, x);
    if t01 != 0 {
        table.append_mct(y, t01);
        record(MctGate::new(y, t01));
    }
    // move 1s to 0s
    let t10 = missing_bits(x, y);
    if t10 != 0 {
        table.append_mct(x, t10);
        record(MctGate::new(x, t10));
    }
}

/// Prepends the gates moving the contents of row `z` into row `x`.
fn repair_input(table: &mut PermutationTable, x: u32, z: u32, mut record: impl FnMut(MctGate)) {
    // move 0s to 1s
    let t01 = missing_bits(z, x);
    if t01 != 0 {
        table.prepend_mct(z, t01);
        record(MctGate::new(z, t01));
    }
    // move 1s to 0s
    let t10 = missing_bits(x, z);
    if t10 != 0 {
        table.prepend_mct(x, t10);
        record(MctGate::new(x, t10));
    }
}

/// Allocates one wire per bit, then replays `gates` in order.
fn emit<C: MctCircuitBuilder>(num_qubits: u32, gates: Vec<MctGate>) -> C {
    let mut circuit = C::new(num_qubits);
    for _ in 0..num_qubits {
        circuit.allocate_qubit();
    }
    for gate in gates {
        circuit.add_toffoli(gate.controls(), gate.targets());
    }
    circuit
}

/// Reduces `table` to the identity with output-side gates only. Returns the gates in
/// execution order.
pub(crate) fn reduce_unidirectional(table: &mut PermutationTable) -> Vec<MctGate> {
    let mut gates = Vec::new();
    for x in 0..table.len() as u32 {
        // skip identity lines
        let y = table[x as usize];
        if y == x {
            continue;
        }
        trace!(row = x, output = y, "repairing output side");
        repair_output(table, x, y, |gate| gates.push(gate));
        debug_assert!(table.is_bijection());
    }
    debug_assert!(table.is_identity());

    gates.reverse();
    gates
}

/// The repair picked by the bidirectional scan for a single row.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Repair {
    /// Map the current output of the row onto the row.
    Output { y: u32 },
    /// Move the current preimage of the row into the row.
    Input { xs: u32 },
}

/// Picks the cheaper side to repair row `x` from, together with the number of bit flips it
/// costs. Output repairs win ties.
///
/// Rows below `x` must already be fixed, so that the preimage of `x` lies at or after `x`.
pub(crate) fn choose_repair(table: &PermutationTable, x: u32) -> (Repair, u32) {
    let y = table[x as usize];
    let xs = table
        .preimage_from(x, x as usize)
        .expect("rows below the scan index are fixed, so the preimage lies after it")
        as u32;
    let output_cost = hamming_distance(x, y);
    let input_cost = hamming_distance(x, xs);
    if output_cost <= input_cost {
        (Repair::Output { y }, output_cost)
    } else {
        (Repair::Input { xs }, input_cost)
    }
}

/// Reduces `table` to the identity, repairing every row from whichever side is cheaper.
/// Returns the gates in execution order.
pub(crate) fn reduce_bidirectional(table: &mut PermutationTable) -> Vec<MctGate> {
    let mut gates = GateAccumulator::new();
    for x in 0..table.len() as u32 {
        // skip identity lines
        if table[x as usize] == x {
            continue;
        }
        let (repair, cost) = choose_repair(table, x);
        trace!(row = x, ?repair, cost, "repairing row");
        match repair {
            Repair::Output { y } => {
                repair_output(table, x, y, |gate| gates.insert_at_cursor(gate))
            }
            Repair::Input { xs } => {
                repair_input(table, x, xs, |gate| gates.insert_and_advance(gate))
            }
        }
        debug_assert!(table.is_bijection());
    }
    debug_assert!(table.is_identity());

    gates.into_gates()
}

/// Finds the row `z >= x` minimising the bit flips needed to bring row `z` into row `x` and
/// then its output onto `x`. Returns `(z, cost)`; the smallest such `z` wins ties.
pub(crate) fn cheapest_bridge(table: &PermutationTable, x: u32) -> (u32, u32) {
    let mut best = x;
    let mut best_cost = hamming_distance(x, table[x as usize]);
    for z in (x + 1)..table.len() as u32 {
        let cost = hamming_distance(z, x) + hamming_distance(x, table[z as usize]);
        if cost < best_cost {
            best = z;
            best_cost = cost;
        }
    }
    (best, best_cost)
}

/// Reduces `table` to the identity, bridging every row through its cheapest partner row.
/// Returns the gates in execution order.
pub(crate) fn reduce_multidirectional(table: &mut PermutationTable) -> Vec<MctGate> {
    let mut gates = GateAccumulator::new();
    for x in 0..table.len() as u32 {
        // A fixed row costs nothing, no other partner can beat it.
        if table[x as usize] == x {
            continue;
        }
        let (z, cost) = cheapest_bridge(table, x);
        let y = table[z as usize];
        trace!(row = x, partner = z, output = y, cost, "bridging row");

        // map z |-> x
        repair_input(table, x, z, |gate| gates.insert_and_advance(gate));
        // map y |-> x
        repair_output(table, x, y, |gate| gates.insert_at_cursor(gate));
        debug_assert!(table.is_bijection());
    }
    debug_assert!(table.is_identity());

    gates.into_gates()
}

/// Synthesizes a circuit for `table` by fixing one row after the other on the output side
/// only. Leaves `table` as the identity.
pub fn transformation_based_synthesis<C: MctCircuitBuilder>(table: &mut PermutationTable) -> C {
    let num_qubits = table.num_qubits();
    let gates = reduce_unidirectional(table);
    debug!(
        num_qubits,
        num_gates = gates.len(),
        "unidirectional transformation-based synthesis done"
    );
    emit(num_qubits, gates)
}

/// Synthesizes a circuit for `table`, fixing every row on the output or the input side,
/// whichever needs fewer bit flips. Leaves `table` as the identity.
pub fn transformation_based_synthesis_bidirectional<C: MctCircuitBuilder>(
    table: &mut PermutationTable,
) -> C {
    let num_qubits = table.num_qubits();
    let gates = reduce_bidirectional(table);
    debug!(
        num_qubits,
        num_gates = gates.len(),
        "bidirectional transformation-based synthesis done"
    );
    emit(num_qubits, gates)
}

/// Synthesizes a circuit for `table`, fixing every row through the partner row that needs
/// the fewest bit flips on both sides combined. Leaves `table` as the identity.
pub fn transformation_based_synthesis_multidirectional<C: MctCircuitBuilder>(
    table: &mut PermutationTable,
) -> C {
    let num_qubits = table.num_qubits();
    let gates = reduce_multidirectional(table);
    debug!(
        num_qubits,
        num_gates = gates.len(),
        "multidirectional transformation-based synthesis done"
    );
    emit(num_qubits, gates)
}
