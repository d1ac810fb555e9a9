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

use crate::Qubit;

/// A multiple-control Toffoli gate over bit patterns.
///
/// The gate fires on a pattern `z` when every bit of `controls` is set in `z`, and then
/// flips every bit of `targets`. A gate with several target bits is a fan-out of
/// single-target Toffoli gates sharing the same controls.
#[derive(Copy, Clone, Debug, Hash, Eq, PartialEq)]
pub struct MctGate {
    controls: u32,
    targets: u32,
}

impl MctGate {
    /// Create a gate from its masks.
    ///
    /// A bit cannot be a control and a target at the same time; this is checked in debug
    /// builds only, since every synthesis routine derives disjoint masks.
    #[inline]
    pub fn new(controls: u32, targets: u32) -> Self {
        debug_assert_eq!(
            controls & targets,
            0,
            "control mask {controls:#b} overlaps target mask {targets:#b}"
        );
        MctGate { controls, targets }
    }

    #[inline]
    pub fn controls(&self) -> u32 {
        self.controls
    }

    #[inline]
    pub fn targets(&self) -> u32 {
        self.targets
    }

    #[inline]
    pub fn num_controls(&self) -> u32 {
        self.controls.count_ones()
    }

    #[inline]
    pub fn num_targets(&self) -> u32 {
        self.targets.count_ones()
    }

    /// Whether the gate fires on the pattern `z`.
    #[inline]
    pub fn is_active(&self, z: u32) -> bool {
        z & self.controls == self.controls
    }

    /// The image of the pattern `z` under this gate.
    #[inline]
    pub fn apply(&self, z: u32) -> u32 {
        if self.is_active(z) {
            z ^ self.targets
        } else {
            z
        }
    }

    /// Control wires in ascending order.
    pub fn control_qubits(&self) -> impl Iterator<Item = Qubit> {
        qubits_of(self.controls)
    }

    /// Target wires in ascending order.
    pub fn target_qubits(&self) -> impl Iterator<Item = Qubit> {
        qubits_of(self.targets)
    }
}

fn qubits_of(mut mask: u32) -> impl Iterator<Item = Qubit> {
    std::iter::from_fn(move || {
        if mask == 0 {
            return None;
        }
        let bit = mask.trailing_zeros();
        mask &= mask - 1;
        Some(Qubit(bit))
    })
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn uncontrolled_gate_always_fires() {
        let not = MctGate::new(0, 0b1);
        assert_eq!(not.apply(0b0), 0b1);
        assert_eq!(not.apply(0b1), 0b0);
        assert_eq!(not.apply(0b10), 0b11);
        assert_eq!(not.num_controls(), 0);
    }

    #[test]
    fn controlled_gate_needs_all_controls() {
        let ccx = MctGate::new(0b011, 0b100);
        assert_eq!(ccx.apply(0b001), 0b001);
        assert_eq!(ccx.apply(0b010), 0b010);
        assert_eq!(ccx.apply(0b011), 0b111);
        assert_eq!(ccx.apply(0b111), 0b011);
    }

    #[test]
    fn gate_is_self_inverse() {
        let gate = MctGate::new(0b0101, 0b1010);
        for z in 0..16 {
            assert_eq!(gate.apply(gate.apply(z)), z);
        }
    }

    #[test]
    fn qubits_are_listed_from_masks() {
        let gate = MctGate::new(0b1001, 0b0110);
        assert_eq!(
            gate.control_qubits().collect::<Vec<_>>(),
            vec![Qubit(0), Qubit(3)]
        );
        assert_eq!(
            gate.target_qubits().collect::<Vec<_>>(),
            vec![Qubit(1), Qubit(2)]
        );
        assert_eq!(gate.num_targets(), 2);
    }

    #[test]
    #[should_panic]
    #[cfg(debug_assertions)]
    fn overlapping_masks_are_rejected() {
        MctGate::new(0b11, 0b10);
    }
}
