//! Rotors: a permutation read through a rotational offset.

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use crate::alphabet::Alphabet;
use crate::error::{ConfigError, Error, RangeError};
use crate::permutation::Permutation;

/// What a rotor slot does between conversions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RotorKind {
    /// Driven by a pawl; carries to its left neighbor at a notch position.
    Moving {
        /// Notch positions as alphabet indices.
        notches: Vec<usize>,
    },
    /// Never advances and never turns; a single-position device.
    Fixed,
    /// The leftmost rotor, which sends the signal back through the stack.
    Reflecting,
}

/// One rotor: a named [`Permutation`] plus a current rotational `setting`.
///
/// The setting shifts how the wiring is read. A signal entering contact `p`
/// on a rotor turned to setting `s` meets the wiring at `(p + s) mod n`, and
/// the result is shifted back by `s` on the way out:
///
/// ```text
/// forward(p)  = (wiring.permute((p + s) mod n) + n - s) mod n
/// backward(p) = (wiring.invert ((p + s) mod n) + n - s) mod n
/// ```
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use walze::{Alphabet, Permutation, Rotor};
///
/// let alpha = Arc::new(Alphabet::default());
/// let wiring = Permutation::new(
///     "(AELTPHQXRU) (BKNW) (CMOY) (DFG) (IV) (JZ) (S)",
///     alpha,
/// )?;
/// let mut rotor = Rotor::moving("I", wiring, "Q")?;
///
/// assert_eq!(rotor.convert_forward(0), 4); // A -> E at setting 0
/// rotor.set_symbol('Q')?;
/// assert!(rotor.at_notch());
/// # Ok::<(), walze::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct Rotor {
    name: String,
    permutation: Permutation,
    setting: usize,
    kind: RotorKind,
}

impl Rotor {
    /// Builds a moving rotor with notches at the given symbols.
    ///
    /// # Errors
    ///
    /// [`ConfigError::NoNotches`] if `notches` is empty, since a pawl-driven
    /// rotor with no notch could never carry.
    /// [`RangeError::SymbolNotInAlphabet`] if a notch symbol is not in the
    /// rotor's alphabet.
    pub fn moving(name: &str, permutation: Permutation, notches: &str) -> Result<Self, Error> {
        if notches.is_empty() {
            return Err(ConfigError::NoNotches { name: String::from(name) }.into());
        }
        let mut positions = Vec::new();
        for symbol in notches.chars() {
            positions.push(permutation.alphabet().index_of(symbol)?);
        }
        Ok(Self {
            name: String::from(name),
            permutation,
            setting: 0,
            kind: RotorKind::Moving { notches: positions },
        })
    }

    /// Builds a fixed rotor. It holds position 0 and cannot be turned.
    #[must_use]
    pub fn fixed(name: &str, permutation: Permutation) -> Self {
        Self {
            name: String::from(name),
            permutation,
            setting: 0,
            kind: RotorKind::Fixed,
        }
    }

    /// Builds a reflector.
    #[must_use]
    pub fn reflector(name: &str, permutation: Permutation) -> Self {
        Self {
            name: String::from(name),
            permutation,
            setting: 0,
            kind: RotorKind::Reflecting,
        }
    }

    /// The rotor's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The rotor's wiring.
    #[must_use]
    pub fn permutation(&self) -> &Permutation {
        &self.permutation
    }

    /// The alphabet the wiring acts on.
    #[must_use]
    pub fn alphabet(&self) -> &Alphabet {
        self.permutation.alphabet()
    }

    /// Current rotational position.
    #[must_use]
    pub fn setting(&self) -> usize {
        self.setting
    }

    /// The rotor's kind.
    #[must_use]
    pub fn kind(&self) -> &RotorKind {
        &self.kind
    }

    /// Notch positions, empty for fixed and reflecting rotors.
    #[must_use]
    pub fn notches(&self) -> &[usize] {
        match &self.kind {
            RotorKind::Moving { notches } => notches,
            RotorKind::Fixed | RotorKind::Reflecting => &[],
        }
    }

    /// True when a pawl can drive this rotor.
    #[must_use]
    pub fn rotates(&self) -> bool {
        matches!(self.kind, RotorKind::Moving { .. })
    }

    /// True for reflectors.
    #[must_use]
    pub fn reflecting(&self) -> bool {
        matches!(self.kind, RotorKind::Reflecting)
    }

    /// Turns the rotor to `position`.
    ///
    /// # Errors
    ///
    /// [`RangeError::IndexOutOfRange`] if `position` is not a valid alphabet
    /// index. [`ConfigError::FixedRotorPosition`] if the rotor is fixed or
    /// reflecting and `position` is not 0.
    pub fn set(&mut self, position: usize) -> Result<(), Error> {
        let size = self.permutation.len();
        if position >= size {
            return Err(RangeError::IndexOutOfRange { index: position, size }.into());
        }
        match self.kind {
            RotorKind::Moving { .. } => {
                self.setting = position;
                Ok(())
            }
            RotorKind::Fixed | RotorKind::Reflecting => {
                if position == 0 {
                    Ok(())
                } else {
                    Err(ConfigError::FixedRotorPosition {
                        name: self.name.clone(),
                        index: position,
                    }
                    .into())
                }
            }
        }
    }

    /// Turns the rotor to the position named by `symbol`.
    ///
    /// # Errors
    ///
    /// As [`set`](Self::set), plus [`RangeError::SymbolNotInAlphabet`] for a
    /// symbol outside the alphabet.
    pub fn set_symbol(&mut self, symbol: char) -> Result<(), Error> {
        let position = self.alphabet().index_of(symbol)?;
        self.set(position)
    }

    /// Puts the rotor back at position 0, whatever its kind.
    pub(crate) fn reset(&mut self) {
        self.setting = 0;
    }

    /// Steps the rotor by one position. Fixed and reflecting rotors stay
    /// where they are.
    pub fn advance(&mut self) {
        if let RotorKind::Moving { .. } = self.kind {
            self.setting = (self.setting + 1) % self.permutation.len();
        }
    }

    /// True when the current setting is one of the notch positions.
    #[must_use]
    pub fn at_notch(&self) -> bool {
        match &self.kind {
            RotorKind::Moving { notches } => notches.contains(&self.setting),
            RotorKind::Fixed | RotorKind::Reflecting => false,
        }
    }

    /// Converts a contact index entering from the right.
    #[must_use]
    pub fn convert_forward(&self, index: usize) -> usize {
        let n = self.permutation.len();
        (self.permutation.permute(index + self.setting) + n - self.setting) % n
    }

    /// Converts a contact index entering from the left.
    #[must_use]
    pub fn convert_backward(&self, index: usize) -> usize {
        let n = self.permutation.len();
        (self.permutation.invert(index + self.setting) + n - self.setting) % n
    }
}

impl fmt::Display for Rotor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Rotor {}", self.name)
    }
}
