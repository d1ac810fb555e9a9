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

use revsynth_circuit::MctGate;

/// Collects the gates found while reducing a permutation, in an order that needs no
/// sorting afterwards.
///
/// The accumulator behaves like a list with a cursor. Gates found on the input side of the
/// table are inserted at the cursor and the cursor moves past them, so they run first and
/// in the order they were found. Gates found on the output side are inserted at the cursor
/// without moving it, so each one runs before the output-side gates found earlier.
///
/// Internally the two halves are kept apart and joined once in [GateAccumulator::into_gates].
#[derive(Clone, Debug, Default)]
pub struct GateAccumulator {
    early: Vec<MctGate>,
    // In the order the gates were found, i.e. reversed execution order.
    late: Vec<MctGate>,
}

impl GateAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a gate at the cursor and advance the cursor past it.
    #[inline]
    pub fn insert_and_advance(&mut self, gate: MctGate) {
        self.early.push(gate);
    }

    /// Insert a gate at the cursor, leaving the cursor in front of it.
    #[inline]
    pub fn insert_at_cursor(&mut self, gate: MctGate) {
        self.late.push(gate);
    }

    /// Position of the cursor, i.e. the number of gates in front of it.
    #[inline]
    pub fn cursor(&self) -> usize {
        self.early.len()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.early.len() + self.late.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.early.is_empty() && self.late.is_empty()
    }

    /// The accumulated gates in execution order.
    pub fn into_gates(self) -> Vec<MctGate> {
        let GateAccumulator { mut early, late } = self;
        early.reserve(late.len());
        early.extend(late.into_iter().rev());
        early
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn gate(targets: u32) -> MctGate {
        MctGate::new(0, targets)
    }

    #[test]
    fn late_gates_are_reversed() {
        let mut acc = GateAccumulator::new();
        acc.insert_at_cursor(gate(1));
        acc.insert_at_cursor(gate(2));
        acc.insert_at_cursor(gate(4));
        assert_eq!(acc.cursor(), 0);
        assert_eq!(acc.into_gates(), vec![gate(4), gate(2), gate(1)]);
    }

    #[test]
    fn early_gates_keep_order_and_precede_late_ones() {
        let mut acc = GateAccumulator::new();
        acc.insert_at_cursor(gate(1));
        acc.insert_and_advance(gate(2));
        acc.insert_at_cursor(gate(4));
        acc.insert_and_advance(gate(8));
        assert_eq!(acc.cursor(), 2);
        assert_eq!(acc.len(), 4);
        assert_eq!(acc.into_gates(), vec![gate(2), gate(8), gate(4), gate(1)]);
    }

    #[test]
    fn empty_accumulator() {
        let acc = GateAccumulator::new();
        assert!(acc.is_empty());
        assert!(acc.into_gates().is_empty());
    }
}
