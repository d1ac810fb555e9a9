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

use smallvec::SmallVec;

use crate::gate::MctGate;
use crate::Qubit;

/// The construction interface synthesis routines emit into.
///
/// A builder is created with a wire count hint, then every wire is allocated once, in bit
/// order, before the first gate is added. Gates are appended in execution order.
pub trait MctCircuitBuilder {
    /// Create an empty circuit prepared for `num_qubits` wires.
    fn new(num_qubits: u32) -> Self
    where
        Self: Sized;

    /// Allocate the next wire.
    fn allocate_qubit(&mut self) -> Qubit;

    /// Append a gate flipping the `targets` bits when every `controls` bit is set.
    fn add_toffoli(&mut self, controls: u32, targets: u32);
}

/// A reversible circuit stored as a flat list of [MctGate]s.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct SmallMctCircuit {
    qubits: SmallVec<[Qubit; 16]>,
    gates: Vec<MctGate>,
}

impl SmallMctCircuit {
    /// Build a circuit on `num_qubits` wires directly from its gates.
    pub fn from_gates<I>(num_qubits: u32, gates: I) -> Self
    where
        I: IntoIterator<Item = MctGate>,
    {
        let mut circuit = <Self as MctCircuitBuilder>::new(num_qubits);
        for _ in 0..num_qubits {
            circuit.allocate_qubit();
        }
        for gate in gates {
            circuit.add_toffoli(gate.controls(), gate.targets());
        }
        circuit
    }

    /// Number of allocated wires.
    #[inline]
    pub fn num_qubits(&self) -> u32 {
        self.qubits.len() as u32
    }

    #[inline]
    pub fn qubits(&self) -> &[Qubit] {
        &self.qubits
    }

    #[inline]
    pub fn gates(&self) -> &[MctGate] {
        &self.gates
    }

    #[inline]
    pub fn num_gates(&self) -> usize {
        self.gates.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.gates.is_empty()
    }

    /// Total number of control bits over all gates.
    pub fn num_control_bits(&self) -> u32 {
        self.gates.iter().map(MctGate::num_controls).sum()
    }

    pub fn into_gates(self) -> Vec<MctGate> {
        self.gates
    }
}

impl MctCircuitBuilder for SmallMctCircuit {
    fn new(num_qubits: u32) -> Self {
        SmallMctCircuit {
            qubits: SmallVec::with_capacity(num_qubits as usize),
            gates: Vec::new(),
        }
    }

    fn allocate_qubit(&mut self) -> Qubit {
        let qubit = Qubit::new(self.qubits.len());
        self.qubits.push(qubit);
        qubit
    }

    fn add_toffoli(&mut self, controls: u32, targets: u32) {
        debug_assert!(
            (controls | targets)
                .checked_shr(self.num_qubits())
                .unwrap_or(0)
                == 0,
            "gate acts on wires that were never allocated"
        );
        self.gates.push(MctGate::new(controls, targets));
    }
}

impl<'a> IntoIterator for &'a SmallMctCircuit {
    type Item = &'a MctGate;
    type IntoIter = std::slice::Iter<'a, MctGate>;

    fn into_iter(self) -> Self::IntoIter {
        self.gates.iter()
    }
}
