//! The machine: rotor slots, ratchet stepping, and the signal path.

use alloc::collections::BTreeMap;
use alloc::string::String;
use alloc::sync::Arc;
use alloc::vec;
use alloc::vec::Vec;

use crate::alphabet::Alphabet;
use crate::error::{ConfigError, Error, RangeError};
use crate::permutation::Permutation;
use crate::rotor::Rotor;

/// A complete rotor machine.
///
/// The machine owns a named inventory of rotors and an active slot order
/// selected from it. Slot 0 is the reflector; the rightmost `num_pawls`
/// slots form the rotating zone; anything between is the fixed zone. Each
/// converted symbol first steps the rotating rotors, then travels
///
/// ```text
/// plugboard -> slot n-1 -> ... -> slot 1 -> reflector
///                                               |
/// plugboard <- slot n-1 <- ... <- slot 1 <------+
/// ```
///
/// and comes out as the ciphertext symbol. Because the reflector pairs
/// contacts symmetrically, encryption and decryption are the same
/// operation.
///
/// Cloning a machine yields an independent copy with its own rotor state,
/// which is the supported way to run several conversions concurrently.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use walze::{Alphabet, Machine, Permutation, Rotor};
///
/// let alpha = Arc::new(Alphabet::new("A-D")?);
/// let inventory = vec![
///     Rotor::reflector("REF", Permutation::new("(AC) (BD)", alpha.clone())?),
///     Rotor::moving("ROT", Permutation::new("(ABCD)", alpha.clone())?, "D")?,
/// ];
/// let mut machine = Machine::new(alpha, 2, 1, inventory)?;
/// machine.insert_rotors(&["REF", "ROT"])?;
/// machine.set_rotors("A")?;
///
/// let ciphertext = machine.convert_message("AB")?;
/// machine.set_rotors("A")?;
/// assert_eq!(machine.convert_message(&ciphertext)?, "AB");
/// # Ok::<(), walze::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct Machine {
    alphabet: Arc<Alphabet>,
    num_rotors: usize,
    num_pawls: usize,
    inventory: Vec<Rotor>,
    by_name: BTreeMap<String, usize>,
    active: Vec<usize>,
    plugboard: Permutation,
}

impl Machine {
    /// Builds a machine with `num_rotors` slots, `num_pawls` pawls, and the
    /// given rotor inventory. No rotors are active until
    /// [`insert_rotors`](Self::insert_rotors); the plugboard starts as the
    /// identity.
    ///
    /// # Errors
    ///
    /// [`ConfigError::SlotCount`] unless `num_rotors >= 2`,
    /// [`ConfigError::PawlCount`] unless `num_pawls < num_rotors`,
    /// [`ConfigError::RatchetCoverage`] unless
    /// `num_rotors + 1 >= 2 * num_pawls` (a wider pawl bank would leave the
    /// leftmost rotating rotors undriven),
    /// [`ConfigError::DuplicateRotor`] for a repeated inventory name,
    /// [`ConfigError::RotorAlphabet`] for an inventory rotor built against
    /// a different alphabet.
    pub fn new(
        alphabet: Arc<Alphabet>,
        num_rotors: usize,
        num_pawls: usize,
        inventory: Vec<Rotor>,
    ) -> Result<Self, ConfigError> {
        if num_rotors < 2 {
            return Err(ConfigError::SlotCount { num_rotors });
        }
        if num_pawls >= num_rotors {
            return Err(ConfigError::PawlCount { num_rotors, num_pawls });
        }
        if num_rotors + 1 < 2 * num_pawls {
            return Err(ConfigError::RatchetCoverage { num_rotors, num_pawls });
        }

        let mut by_name = BTreeMap::new();
        for (index, rotor) in inventory.iter().enumerate() {
            if rotor.alphabet() != &*alphabet {
                return Err(ConfigError::RotorAlphabet { name: String::from(rotor.name()) });
            }
            if by_name.insert(String::from(rotor.name()), index).is_some() {
                return Err(ConfigError::DuplicateRotor { name: String::from(rotor.name()) });
            }
        }

        let plugboard = Permutation::identity(alphabet.clone());
        Ok(Self {
            alphabet,
            num_rotors,
            num_pawls,
            inventory,
            by_name,
            active: Vec::new(),
            plugboard,
        })
    }

    /// Number of rotor slots.
    #[must_use]
    pub fn num_rotors(&self) -> usize {
        self.num_rotors
    }

    /// Number of pawls.
    #[must_use]
    pub fn num_pawls(&self) -> usize {
        self.num_pawls
    }

    /// The machine's alphabet.
    #[must_use]
    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    /// The current plugboard.
    #[must_use]
    pub fn plugboard(&self) -> &Permutation {
        &self.plugboard
    }

    /// Looks up an inventory rotor by name.
    #[must_use]
    pub fn rotor(&self, name: &str) -> Option<&Rotor> {
        self.by_name.get(name).map(|&index| &self.inventory[index])
    }

    /// Iterates the inventory in declaration order.
    pub fn rotors(&self) -> impl Iterator<Item = &Rotor> {
        self.inventory.iter()
    }

    /// Iterates the active rotors in slot order. Empty until
    /// [`insert_rotors`](Self::insert_rotors) succeeds.
    pub fn active_rotors(&self) -> impl Iterator<Item = &Rotor> {
        self.active.iter().map(|&index| &self.inventory[index])
    }

    /// Selects the active rotor order, leftmost (reflector) first, and puts
    /// every selected rotor back at position 0.
    ///
    /// Validation happens before any state changes, so a failed call leaves
    /// the previous selection in place.
    ///
    /// # Errors
    ///
    /// [`ConfigError::RotorCount`] unless exactly
    /// [`num_rotors`](Self::num_rotors) names are given,
    /// [`ConfigError::UnknownRotor`] for a name outside the inventory,
    /// [`ConfigError::DuplicateRotor`] for a name used twice,
    /// [`ConfigError::ReflectorSlot`] unless slot 0 gets a reflector,
    /// [`ConfigError::FixedZoneViolation`] for a rotating or reflecting
    /// rotor in the fixed zone,
    /// [`ConfigError::RotatingZoneViolation`] for a rotor in the rotating
    /// zone that cannot rotate, where it would silently never step.
    pub fn insert_rotors(&mut self, names: &[&str]) -> Result<(), ConfigError> {
        if names.len() != self.num_rotors {
            return Err(ConfigError::RotorCount {
                expected: self.num_rotors,
                given: names.len(),
            });
        }

        let mut selected = Vec::with_capacity(names.len());
        for &name in names {
            let index = *self
                .by_name
                .get(name)
                .ok_or(ConfigError::UnknownRotor { name: String::from(name) })?;
            if selected.contains(&index) {
                return Err(ConfigError::DuplicateRotor { name: String::from(name) });
            }
            selected.push(index);
        }

        let fixed_zone_end = self.num_rotors - self.num_pawls;
        for (slot, &index) in selected.iter().enumerate() {
            let rotor = &self.inventory[index];
            if slot == 0 {
                if !rotor.reflecting() {
                    return Err(ConfigError::ReflectorSlot { name: String::from(rotor.name()) });
                }
            } else if slot < fixed_zone_end {
                if rotor.rotates() || rotor.reflecting() {
                    return Err(ConfigError::FixedZoneViolation {
                        slot,
                        name: String::from(rotor.name()),
                    });
                }
            } else if !rotor.rotates() {
                return Err(ConfigError::RotatingZoneViolation {
                    slot,
                    name: String::from(rotor.name()),
                });
            }
        }

        for &index in &selected {
            self.inventory[index].reset();
        }
        self.active = selected;
        Ok(())
    }

    /// Applies one setting symbol per slot `1..num_rotors`, leftmost first.
    /// The reflector takes no setting.
    ///
    /// # Errors
    ///
    /// [`ConfigError::RotorsNotInserted`] before any
    /// [`insert_rotors`](Self::insert_rotors),
    /// [`ConfigError::SettingLength`] for a string of the wrong length,
    /// [`RangeError::SymbolNotInAlphabet`] for a symbol outside the
    /// alphabet, [`ConfigError::FixedRotorPosition`] for a nonzero setting
    /// on a fixed rotor.
    pub fn set_rotors(&mut self, settings: &str) -> Result<(), Error> {
        if self.active.is_empty() {
            return Err(ConfigError::RotorsNotInserted.into());
        }
        let given = settings.chars().count();
        let expected = self.num_rotors - 1;
        if given != expected {
            return Err(ConfigError::SettingLength { expected, given }.into());
        }
        for (slot, symbol) in (1..self.num_rotors).zip(settings.chars()) {
            let index = self.active[slot];
            self.inventory[index].set_symbol(symbol)?;
        }
        Ok(())
    }

    /// Replaces the plugboard.
    ///
    /// # Errors
    ///
    /// [`ConfigError::PlugboardAlphabet`] if the permutation was built
    /// against a different alphabet.
    pub fn set_plugboard(&mut self, plugboard: Permutation) -> Result<(), ConfigError> {
        if plugboard.alphabet() != &*self.alphabet {
            return Err(ConfigError::PlugboardAlphabet);
        }
        self.plugboard = plugboard;
        Ok(())
    }

    /// Current positions of slots `1..num_rotors` as symbols, leftmost
    /// first.
    ///
    /// # Errors
    ///
    /// [`ConfigError::RotorsNotInserted`] before any
    /// [`insert_rotors`](Self::insert_rotors).
    pub fn current_settings(&self) -> Result<String, Error> {
        if self.active.is_empty() {
            return Err(ConfigError::RotorsNotInserted.into());
        }
        let mut out = String::with_capacity(self.num_rotors - 1);
        for &index in &self.active[1..] {
            let rotor = &self.inventory[index];
            out.push(self.alphabet.char_at(rotor.setting())?);
        }
        Ok(out)
    }

    /// Converts one symbol index: steps the rotors, then runs the signal
    /// path. The index is validated first, so a bad input does not consume
    /// a step.
    ///
    /// # Errors
    ///
    /// [`ConfigError::RotorsNotInserted`] before any
    /// [`insert_rotors`](Self::insert_rotors),
    /// [`RangeError::IndexOutOfRange`] for an index outside the alphabet.
    pub fn convert(&mut self, index: usize) -> Result<usize, Error> {
        if self.active.is_empty() {
            return Err(ConfigError::RotorsNotInserted.into());
        }
        let size = self.alphabet.len();
        if index >= size {
            return Err(RangeError::IndexOutOfRange { index, size }.into());
        }

        self.advance_rotors();

        let mut p = self.plugboard.permute(index);
        for slot in (0..self.num_rotors).rev() {
            p = self.inventory[self.active[slot]].convert_forward(p);
        }
        for slot in 1..self.num_rotors {
            p = self.inventory[self.active[slot]].convert_backward(p);
        }
        Ok(self.plugboard.invert(p))
    }

    /// Converts a message, dropping spaces. Every other symbol must be in
    /// the alphabet; the whole message is checked before any rotor steps,
    /// so a bad symbol aborts the call with the machine state untouched.
    ///
    /// # Errors
    ///
    /// As [`convert`](Self::convert), with
    /// [`RangeError::SymbolNotInAlphabet`] for an unmapped symbol.
    pub fn convert_message(&mut self, message: &str) -> Result<String, Error> {
        if self.active.is_empty() {
            return Err(ConfigError::RotorsNotInserted.into());
        }
        let mut indices = Vec::new();
        for symbol in message.chars() {
            if symbol == ' ' {
                continue;
            }
            indices.push(self.alphabet.index_of(symbol)?);
        }
        let mut out = String::with_capacity(indices.len());
        for index in indices {
            let converted = self.convert(index)?;
            out.push(self.alphabet.char_at(converted)?);
        }
        Ok(out)
    }

    /// Advances the rotating rotors for one keypress.
    ///
    /// Pawl marks are computed from a snapshot of the notch state before
    /// anything moves. The rightmost rotor always steps; a rotor at its
    /// notch carries its left neighbor and steps again itself, which is
    /// the double-step anomaly.
    fn advance_rotors(&mut self) {
        let n = self.num_rotors;
        let mut pulled = vec![false; n];
        pulled[n - 1] = true;
        if self.num_pawls > 0 {
            for slot in (self.num_pawls - 1)..(n - 1) {
                if self.inventory[self.active[slot + 1]].at_notch() {
                    pulled[slot] = true;
                    pulled[slot + 1] = true;
                }
            }
        }
        for (slot, &pull) in pulled.iter().enumerate() {
            if pull {
                let index = self.active[slot];
                self.inventory[index].advance();
            }
        }
    }
}
