//! Core types for Orchor.
//!
//! Fundamental type aliases and validated wrapper types used throughout
//! the workspace.

use crate::error::{OrchorError, OrchorResult};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

// ============================================================================
// Type Aliases
// ============================================================================

/// Qubit identifier (0-indexed, purely positional)
pub type QubitId = usize;

/// Classical bit identifier (0-indexed, parallel to the qubit register)
pub type ClbitId = usize;

/// Rotation angle in radians
pub type Angle = f64;

/// Measurement counts: bitstring -> count
pub type Counts = HashMap<String, u64>;

// ============================================================================
// Probability (Validated Wrapper)
// ============================================================================

/// Probability value in range [0, 1]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Probability(f64);

impl Probability {
    /// Create a new Probability with validation
    pub fn new(value: f64) -> OrchorResult<Self> {
        if !(0.0..=1.0).contains(&value) {
            return Err(OrchorError::InvalidProbability(value));
        }
        Ok(Self(value))
    }

    /// Get the probability value
    #[inline]
    pub fn value(&self) -> f64 {
        self.0
    }

    /// Get the complement (1 - p)
    #[inline]
    pub fn complement(&self) -> f64 {
        1.0 - self.0
    }

    /// Zero probability
    pub const ZERO: Self = Self(0.0);

    /// Certainty (p = 1)
    pub const ONE: Self = Self(1.0);
}

impl Default for Probability {
    fn default() -> Self {
        Self::ZERO
    }
}

impl fmt::Display for Probability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.6}", self.0)
    }
}

impl TryFrom<f64> for Probability {
    type Error = OrchorError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

// ============================================================================
// Bitstring
// ============================================================================

/// Bitstring for measurement results.
///
/// Display order follows the classical register convention: bit 0 is the
/// rightmost character, so a 5-cell register with only c0 set prints "00001".
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Bitstring {
    bits: Vec<bool>,
}

impl Bitstring {
    /// Create from a vector of bools (index 0 = classical bit 0)
    pub fn new(bits: Vec<bool>) -> Self {
        Self { bits }
    }

    /// Create from display text (e.g. "0110", leftmost char = highest bit)
    pub fn parse(s: &str) -> OrchorResult<Self> {
        let bits: Result<Vec<bool>, _> = s
            .chars()
            .rev()
            .map(|c| match c {
                '0' => Ok(false),
                '1' => Ok(true),
                _ => Err(OrchorError::InvalidBitstring(s.to_string())),
            })
            .collect();
        Ok(Self { bits: bits? })
    }

    /// Create zero bitstring of given length
    pub fn zeros(n: usize) -> Self {
        Self {
            bits: vec![false; n],
        }
    }

    /// Create from a basis-state index (bit q of `index` = cell q)
    pub fn from_index(index: usize, width: usize) -> Self {
        Self {
            bits: (0..width).map(|q| (index >> q) & 1 == 1).collect(),
        }
    }

    /// Get the number of bits
    pub fn len(&self) -> usize {
        self.bits.len()
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    /// Get bit at index (classical cell index)
    pub fn get(&self, index: usize) -> Option<bool> {
        self.bits.get(index).copied()
    }

    /// Set bit at index
    pub fn set(&mut self, index: usize, value: bool) -> OrchorResult<()> {
        let size = self.bits.len();
        match self.bits.get_mut(index) {
            Some(slot) => {
                *slot = value;
                Ok(())
            }
            None => Err(OrchorError::ClbitOutOfRange { bit: index, size }),
        }
    }

    /// Count number of 1s (Hamming weight)
    pub fn popcount(&self) -> usize {
        self.bits.iter().filter(|&&b| b).count()
    }

    /// Convert to a basis-state index (for small bitstrings)
    pub fn to_index(&self) -> usize {
        self.bits
            .iter()
            .enumerate()
            .filter(|(_, &b)| b)
            .map(|(q, _)| 1 << q)
            .sum()
    }
}

impl fmt::Display for Bitstring {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &b in self.bits.iter().rev() {
            write!(f, "{}", if b { '1' } else { '0' })?;
        }
        Ok(())
    }
}

// ============================================================================
// MeasurementBasis
// ============================================================================

/// Measurement basis for a single qubit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Basis {
    /// X (Hadamard) basis
    X,
    /// Y basis
    Y,
    /// Z (computational) basis
    Z,
}

impl Basis {
    /// Parse from character
    pub fn from_char(c: char) -> OrchorResult<Self> {
        match c.to_ascii_uppercase() {
            'X' => Ok(Basis::X),
            'Y' => Ok(Basis::Y),
            'Z' => Ok(Basis::Z),
            _ => Err(OrchorError::InvalidBasis(c.to_string())),
        }
    }

    /// Convert to character
    pub fn to_char(&self) -> char {
        match self {
            Basis::X => 'X',
            Basis::Y => 'Y',
            Basis::Z => 'Z',
        }
    }
}

impl fmt::Display for Basis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_probability_valid() {
        assert!(Probability::new(0.0).is_ok());
        assert!(Probability::new(0.5).is_ok());
        assert!(Probability::new(1.0).is_ok());
    }

    #[test]
    fn test_probability_invalid() {
        assert!(Probability::new(-0.1).is_err());
        assert!(Probability::new(1.1).is_err());
    }

    #[test]
    fn test_probability_complement() {
        let p = Probability::new(0.3).unwrap();
        assert!((p.complement() - 0.7).abs() < 1e-10);
    }

    #[test]
    fn test_bitstring_display_order() {
        // Cell 0 set -> rightmost character
        let mut bs = Bitstring::zeros(5);
        bs.set(0, true).unwrap();
        assert_eq!(bs.to_string(), "00001");
    }

    #[test]
    fn test_bitstring_parse_roundtrip() {
        let bs = Bitstring::parse("01101").unwrap();
        assert_eq!(bs.to_string(), "01101");
        assert_eq!(bs.popcount(), 3);
        assert_eq!(bs.get(0), Some(true));
        assert_eq!(bs.get(1), Some(false));
        assert_eq!(bs.get(4), Some(false));
    }

    #[test]
    fn test_bitstring_index_roundtrip() {
        let bs = Bitstring::from_index(6, 5);
        assert_eq!(bs.to_string(), "00110");
        assert_eq!(bs.to_index(), 6);
    }

    #[test]
    fn test_bitstring_set_out_of_range() {
        let mut bs = Bitstring::zeros(3);
        assert!(bs.set(3, true).is_err());
    }

    #[test]
    fn test_basis_parse() {
        assert_eq!(Basis::from_char('x').unwrap(), Basis::X);
        assert_eq!(Basis::from_char('Z').unwrap(), Basis::Z);
        assert!(Basis::from_char('q').is_err());
    }
}
