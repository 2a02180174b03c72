//! Error types for alphabet, permutation, rotor, and machine construction.

use alloc::string::String;
use core::fmt;

/// A symbol or index outside the alphabet's domain.
///
/// Every variant carries the offending value so callers can report it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RangeError {
    /// Index not in `0..size`.
    IndexOutOfRange {
        /// The rejected index.
        index: usize,
        /// The alphabet size it was checked against.
        size: usize,
    },
    /// Symbol not present in the alphabet.
    SymbolNotInAlphabet {
        /// The rejected symbol.
        symbol: char,
    },
}

impl fmt::Display for RangeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IndexOutOfRange { index, size } => {
                write!(f, "index {} out of range for alphabet of size {}", index, size)
            }
            Self::SymbolNotInAlphabet { symbol } => {
                write!(f, "symbol '{}' not in alphabet", symbol)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for RangeError {}

/// A structurally invalid machine setup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// The expanded alphabet specification contains a symbol twice.
    DuplicateSymbol {
        /// The repeated symbol.
        symbol: char,
    },
    /// A range `X-Y` with `Y` before `X` by code point.
    DescendingRange {
        /// Range start.
        start: char,
        /// Range end.
        end: char,
    },
    /// The alphabet specification expands to no symbols.
    EmptyAlphabet,
    /// A symbol occurs in more than one cycle (or twice in one cycle),
    /// which would break the permutation's bijection.
    RepeatedCycleSymbol {
        /// The repeated symbol.
        symbol: char,
    },
    /// A moving rotor was declared with an empty notch set.
    NoNotches {
        /// The rotor name.
        name: String,
    },
    /// A rotor name that is not in the machine's inventory.
    UnknownRotor {
        /// The unresolved name.
        name: String,
    },
    /// A rotor name used twice (in the inventory, or across active slots).
    DuplicateRotor {
        /// The repeated name.
        name: String,
    },
    /// `insert_rotors` was given the wrong number of names.
    RotorCount {
        /// Slots to fill.
        expected: usize,
        /// Names given.
        given: usize,
    },
    /// `set_rotors` was given a setting string of the wrong length.
    SettingLength {
        /// Symbols required (`num_rotors - 1`).
        expected: usize,
        /// Symbols given.
        given: usize,
    },
    /// `set_rotors` or `convert` was called before any rotors were
    /// inserted.
    RotorsNotInserted,
    /// Slot 0 holds a rotor that is not a reflector.
    ReflectorSlot {
        /// The offending rotor.
        name: String,
    },
    /// A rotating or reflecting rotor placed in the fixed zone.
    FixedZoneViolation {
        /// The offending slot.
        slot: usize,
        /// The offending rotor.
        name: String,
    },
    /// A non-rotating rotor placed in the rotating zone, where it would
    /// silently never step.
    RotatingZoneViolation {
        /// The offending slot.
        slot: usize,
        /// The offending rotor.
        name: String,
    },
    /// Attempt to turn a fixed or reflecting rotor away from position 0.
    FixedRotorPosition {
        /// The rotor name.
        name: String,
        /// The rejected position.
        index: usize,
    },
    /// Fewer than two rotor slots.
    SlotCount {
        /// The rejected slot count.
        num_rotors: usize,
    },
    /// At least as many pawls as rotor slots.
    PawlCount {
        /// Slot count.
        num_rotors: usize,
        /// Pawl count.
        num_pawls: usize,
    },
    /// A slot/pawl geometry whose ratchet would leave rotating rotors
    /// undriven (requires `num_rotors + 1 >= 2 * num_pawls`).
    RatchetCoverage {
        /// Slot count.
        num_rotors: usize,
        /// Pawl count.
        num_pawls: usize,
    },
    /// An inventory rotor built against a different alphabet than the
    /// machine's.
    RotorAlphabet {
        /// The rotor name.
        name: String,
    },
    /// A plugboard built against a different alphabet than the machine's.
    PlugboardAlphabet,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateSymbol { symbol } => {
                write!(f, "duplicate symbol '{}' in alphabet", symbol)
            }
            Self::DescendingRange { start, end } => {
                write!(f, "descending range '{}-{}' in alphabet", start, end)
            }
            Self::EmptyAlphabet => write!(f, "alphabet is empty"),
            Self::RepeatedCycleSymbol { symbol } => {
                write!(f, "symbol '{}' appears in more than one cycle", symbol)
            }
            Self::NoNotches { name } => {
                write!(f, "moving rotor '{}' has no notches", name)
            }
            Self::UnknownRotor { name } => write!(f, "unknown rotor '{}'", name),
            Self::DuplicateRotor { name } => write!(f, "duplicate rotor '{}'", name),
            Self::RotorCount { expected, given } => {
                write!(f, "expected {} rotor names, got {}", expected, given)
            }
            Self::SettingLength { expected, given } => {
                write!(f, "expected {} setting symbols, got {}", expected, given)
            }
            Self::RotorsNotInserted => write!(f, "no rotors have been inserted"),
            Self::ReflectorSlot { name } => {
                write!(f, "rotor '{}' at slot 0 is not a reflector", name)
            }
            Self::FixedZoneViolation { slot, name } => {
                write!(
                    f,
                    "rotor '{}' at slot {} must be a non-rotating, non-reflecting rotor",
                    name, slot
                )
            }
            Self::RotatingZoneViolation { slot, name } => {
                write!(f, "rotor '{}' at slot {} cannot rotate", name, slot)
            }
            Self::FixedRotorPosition { name, index } => {
                write!(f, "rotor '{}' has only one position, cannot turn to {}", name, index)
            }
            Self::SlotCount { num_rotors } => {
                write!(f, "a machine needs at least two rotor slots, got {}", num_rotors)
            }
            Self::PawlCount { num_rotors, num_pawls } => {
                write!(f, "{} pawls cannot fit a {}-slot machine", num_pawls, num_rotors)
            }
            Self::RatchetCoverage { num_rotors, num_pawls } => {
                write!(
                    f,
                    "{} pawls over {} slots would leave rotating rotors undriven",
                    num_pawls, num_rotors
                )
            }
            Self::RotorAlphabet { name } => {
                write!(f, "rotor '{}' uses a different alphabet than the machine", name)
            }
            Self::PlugboardAlphabet => {
                write!(f, "plugboard uses a different alphabet than the machine")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ConfigError {}

/// Union of [`RangeError`] and [`ConfigError`], for operations that can
/// fail either way (cycle parsing, rotor setting).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A domain failure.
    Range(RangeError),
    /// A setup failure.
    Config(ConfigError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Range(e) => e.fmt(f),
            Self::Config(e) => e.fmt(f),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Range(e) => Some(e),
            Self::Config(e) => Some(e),
        }
    }
}

impl From<RangeError> for Error {
    fn from(e: RangeError) -> Self {
        Self::Range(e)
    }
}

impl From<ConfigError> for Error {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}
