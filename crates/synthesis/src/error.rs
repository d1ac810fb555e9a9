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

use thiserror::Error;

/// Errors raised before a synthesis run starts.
///
/// Every input is checked up front, so a synthesis routine either returns a complete
/// circuit or one of these errors without having touched the permutation.
#[derive(Debug, Error, Clone, Eq, PartialEq)]
pub enum SynthesisError {
    /// The table length is not `2^n` for any `n`.
    #[error("Invalid permutation: length {len} is not a power of two.")]
    NotPowerOfTwo { len: usize },
    /// The table needs more bits than the patterns can carry.
    #[error("Invalid permutation: {num_qubits} qubits exceed the supported maximum of {max}.")]
    TooManyQubits { num_qubits: u32, max: u32 },
    /// An entry does not name a row of the table.
    #[error("Invalid permutation: input has length {len} and contains {value}.")]
    ValueOutOfRange { value: u64, len: usize },
    /// An entry occurs twice, so the table is not a bijection.
    #[error("Invalid permutation: input contains {value} more than once.")]
    DuplicateValue { value: u32 },
    /// An entry is negative.
    #[error("Invalid permutation: input contains a negative number ({value}).")]
    NegativeValue { value: i64 },
    /// A strategy name that none of the synthesis routines answers to.
    #[error("Unknown transformation-based synthesis strategy '{0}'.")]
    UnknownStrategy(String),
}

#[cfg(feature = "python")]
impl From<SynthesisError> for pyo3::PyErr {
    fn from(error: SynthesisError) -> Self {
        pyo3::exceptions::PyValueError::new_err(error.to_string())
    }
}
