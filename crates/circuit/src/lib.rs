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

//! Reversible circuits built from multiple-control Toffoli gates.
//!
//! The synthesis crates only talk to a circuit through [MctCircuitBuilder], so any
//! representation that can allocate wires and append gates can be the target of a
//! synthesis run. [SmallMctCircuit] is the plain gate-list implementation.

pub mod gate;
pub mod mct_circuit;

pub use gate::MctGate;
pub use mct_circuit::{MctCircuitBuilder, SmallMctCircuit};

/// A wire of a reversible circuit. Wire `i` carries bit `i` of the input pattern.
#[derive(Copy, Clone, Debug, Hash, Ord, PartialOrd, Eq, PartialEq)]
#[repr(transparent)]
pub struct Qubit(pub u32);

impl Qubit {
    // The maximum storable index.
    pub const MAX: Self = Self(u32::MAX);

    /// Construct a new identifier from a usize, if you have a u32 you can
    /// construct one directly via [Qubit()]. This will panic if the `usize`
    /// index exceeds `u32::MAX`.
    #[inline(always)]
    pub const fn new(index: usize) -> Self {
        if index <= Self::MAX.index() {
            Self(index as u32)
        } else {
            panic!("Index value exceeds the maximum identifier width!")
        }
    }

    /// Convert to a usize.
    #[inline(always)]
    pub const fn index(&self) -> usize {
        self.0 as usize
    }

    /// The single-bit mask selecting this wire in a pattern.
    #[inline(always)]
    pub const fn mask(&self) -> u32 {
        1 << self.0
    }
}

impl From<u32> for Qubit {
    fn from(value: u32) -> Self {
        Qubit(value)
    }
}

impl From<Qubit> for u32 {
    fn from(value: Qubit) -> Self {
        value.0
    }
}
