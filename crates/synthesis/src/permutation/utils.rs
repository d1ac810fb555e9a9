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

use crate::error::SynthesisError;

/// Largest number of bits a permutation table may span.
pub const MAX_NUM_QUBITS: u32 = 16;

/// Number of set bits of `value`.
#[inline]
pub fn population_count(value: u32) -> u32 {
    value.count_ones()
}

/// Bits on which `a` and `b` disagree.
#[inline]
pub fn symmetric_difference_mask(a: u32, b: u32) -> u32 {
    a ^ b
}

/// Number of bit flips needed to turn `a` into `b`.
#[inline]
pub fn hamming_distance(a: u32, b: u32) -> u32 {
    population_count(symmetric_difference_mask(a, b))
}

/// Bits that are set in `want` but not in `have`.
#[inline]
pub fn missing_bits(have: u32, want: u32) -> u32 {
    want & !have
}

/// Checks whether `pattern` is a permutation of 0, 1, ..., N - 1 with N = 2^n.
/// Returns `n` on success.
pub fn validate_permutation(pattern: &[u32]) -> Result<u32, SynthesisError> {
    let n = pattern.len();
    if !n.is_power_of_two() {
        return Err(SynthesisError::NotPowerOfTwo { len: n });
    }
    let num_qubits = n.trailing_zeros();
    if num_qubits > MAX_NUM_QUBITS {
        return Err(SynthesisError::TooManyQubits {
            num_qubits,
            max: MAX_NUM_QUBITS,
        });
    }

    let mut seen: Vec<bool> = vec![false; n];
    for &x in pattern {
        if x as usize >= n {
            return Err(SynthesisError::ValueOutOfRange {
                value: x as u64,
                len: n,
            });
        }
        if seen[x as usize] {
            return Err(SynthesisError::DuplicateValue { value: x });
        }
        seen[x as usize] = true;
    }

    Ok(num_qubits)
}

/// Converts a pattern handed over from Python into table values.
#[cfg(feature = "python")]
pub fn pattern_from_array(pattern: &ndarray::ArrayView1<i64>) -> Result<Vec<u32>, SynthesisError> {
    let len = pattern.len();
    pattern
        .iter()
        .map(|&x| {
            if x < 0 {
                Err(SynthesisError::NegativeValue { value: x })
            } else {
                u32::try_from(x).map_err(|_| SynthesisError::ValueOutOfRange {
                    value: x as u64,
                    len,
                })
            }
        })
        .collect()
}

/// A bijection on the `n`-bit patterns, stored as its truth table: row `i` holds the image
/// of the pattern `i`.
///
/// The table can be composed with a multiple-control Toffoli gate from either side. Both
/// compositions keep the table a bijection, so a table built through [PermutationTable::new]
/// stays valid for its whole life.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PermutationTable {
    num_qubits: u32,
    values: Vec<u32>,
}

impl PermutationTable {
    /// Validate `values` and take ownership of them.
    pub fn new(values: Vec<u32>) -> Result<Self, SynthesisError> {
        let num_qubits = validate_permutation(&values)?;
        Ok(PermutationTable { num_qubits, values })
    }

    /// The identity on `num_qubits` bits.
    pub fn identity(num_qubits: u32) -> Result<Self, SynthesisError> {
        if num_qubits > MAX_NUM_QUBITS {
            return Err(SynthesisError::TooManyQubits {
                num_qubits,
                max: MAX_NUM_QUBITS,
            });
        }
        Ok(PermutationTable {
            num_qubits,
            values: (0..1u32 << num_qubits).collect(),
        })
    }

    #[inline]
    pub fn num_qubits(&self) -> u32 {
        self.num_qubits
    }

    /// Number of rows, `2^num_qubits`.
    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    #[inline]
    pub fn values(&self) -> &[u32] {
        &self.values
    }

    pub fn into_values(self) -> Vec<u32> {
        self.values
    }

    pub fn is_identity(&self) -> bool {
        self.values
            .iter()
            .enumerate()
            .all(|(i, &value)| i == value as usize)
    }

    /// Every value in `[0, len)` occurs exactly once.
    pub fn is_bijection(&self) -> bool {
        validate_permutation(&self.values).is_ok()
    }

    /// The first row at or after `start` holding `value`.
    pub fn preimage_from(&self, value: u32, start: usize) -> Option<usize> {
        self.values[start..]
            .iter()
            .position(|&v| v == value)
            .map(|offset| start + offset)
    }

    /// Modifies the table in-place by appending an MCT gate, i.e. the gate acts on the
    /// values (outputs) of the table.
    pub fn append_mct(&mut self, controls: u32, targets: u32) {
        for z in self.values.iter_mut() {
            if *z & controls == controls {
                *z ^= targets;
            }
        }
    }

    /// Modifies the table in-place by prepending an MCT gate, i.e. the gate acts on the
    /// rows (inputs) of the table.
    pub fn prepend_mct(&mut self, controls: u32, targets: u32) {
        for i in 0..self.values.len() {
            if (i as u32) & controls != controls {
                continue;
            }
            let partner = i ^ targets as usize;
            // Each pair is visited from both ends, swap it only once.
            if partner > i {
                self.values.swap(i, partner);
            }
        }
    }
}

impl std::ops::Index<usize> for PermutationTable {
    type Output = u32;

    #[inline]
    fn index(&self, index: usize) -> &u32 {
        &self.values[index]
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn bit_helpers() {
        assert_eq!(population_count(0), 0);
        assert_eq!(population_count(0b1011), 3);
        assert_eq!(symmetric_difference_mask(0b1100, 0b1010), 0b0110);
        assert_eq!(hamming_distance(0b1100, 0b1010), 2);
        assert_eq!(missing_bits(0b0011, 0b0110), 0b0100);
        assert_eq!(missing_bits(0b0110, 0b0011), 0b0001);
    }

    #[test]
    fn rejects_malformed_tables() {
        assert_eq!(
            PermutationTable::new(vec![]),
            Err(SynthesisError::NotPowerOfTwo { len: 0 })
        );
        assert_eq!(
            PermutationTable::new(vec![0, 2, 1]),
            Err(SynthesisError::NotPowerOfTwo { len: 3 })
        );
        assert_eq!(
            PermutationTable::new(vec![0, 1, 4, 2]),
            Err(SynthesisError::ValueOutOfRange { value: 4, len: 4 })
        );
        assert_eq!(
            PermutationTable::new(vec![0, 1, 1, 2]),
            Err(SynthesisError::DuplicateValue { value: 1 })
        );
    }

    #[test]
    fn rejects_oversized_tables() {
        assert_eq!(
            PermutationTable::identity(MAX_NUM_QUBITS + 1),
            Err(SynthesisError::TooManyQubits {
                num_qubits: MAX_NUM_QUBITS + 1,
                max: MAX_NUM_QUBITS,
            })
        );
    }

    #[test]
    fn accepts_valid_tables() {
        let table = PermutationTable::new(vec![3, 0, 2, 1]).unwrap();
        assert_eq!(table.num_qubits(), 2);
        assert_eq!(table.len(), 4);
        assert!(!table.is_identity());
        assert!(table.is_bijection());

        let single = PermutationTable::new(vec![0]).unwrap();
        assert_eq!(single.num_qubits(), 0);
        assert!(single.is_identity());
    }

    #[test]
    fn preimage_search_starts_at_offset() {
        let table = PermutationTable::new(vec![2, 3, 0, 1]).unwrap();
        assert_eq!(table.preimage_from(0, 0), Some(2));
        assert_eq!(table.preimage_from(3, 1), Some(1));
        assert_eq!(table.preimage_from(2, 1), None);
    }

    #[test]
    fn append_acts_on_values() {
        // CX with control on bit 0 and target on bit 1, applied after the identity.
        let mut table = PermutationTable::identity(2).unwrap();
        table.append_mct(0b01, 0b10);
        assert_eq!(table.values(), &[0, 3, 2, 1]);

        // Outputs of [1, 2, 3, 0] are rewritten, not their rows.
        let mut table = PermutationTable::new(vec![1, 2, 3, 0]).unwrap();
        table.append_mct(0b01, 0b10);
        assert_eq!(table.values(), &[3, 2, 1, 0]);
    }

    #[test]
    fn prepend_acts_on_rows() {
        let mut table = PermutationTable::new(vec![1, 2, 3, 0]).unwrap();
        table.prepend_mct(0b01, 0b10);
        assert_eq!(table.values(), &[1, 0, 3, 2]);
    }

    #[test]
    fn append_and_prepend_agree_on_identity() {
        for (controls, targets) in [(0b000, 0b001), (0b001, 0b110), (0b011, 0b100)] {
            let mut appended = PermutationTable::identity(3).unwrap();
            appended.append_mct(controls, targets);
            let mut prepended = PermutationTable::identity(3).unwrap();
            prepended.prepend_mct(controls, targets);
            assert_eq!(appended, prepended);
        }
    }

    #[test]
    fn updates_preserve_bijection() {
        let mut table = PermutationTable::new(vec![5, 3, 7, 0, 6, 1, 4, 2]).unwrap();
        for controls in 0..8u32 {
            for targets in 1..8u32 {
                if controls & targets != 0 {
                    continue;
                }
                table.append_mct(controls, targets);
                assert!(table.is_bijection());
                table.prepend_mct(controls, targets);
                assert!(table.is_bijection());
            }
        }
    }

    #[test]
    fn updates_are_involutions() {
        let original = PermutationTable::new(vec![5, 3, 7, 0, 6, 1, 4, 2]).unwrap();
        let mut table = original.clone();
        table.append_mct(0b100, 0b011);
        table.append_mct(0b100, 0b011);
        assert_eq!(table, original);
        table.prepend_mct(0b010, 0b101);
        table.prepend_mct(0b010, 0b101);
        assert_eq!(table, original);
    }
}
