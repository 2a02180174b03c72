//! Machine description files.
//!
//! A description names an alphabet, the slot geometry, and every rotor the
//! operator may install:
//!
//! ```text
//! ABCDEFGHIJKLMNOPQRSTUVWXYZ
//! 5 3
//! I    MQ   (AELTPHQXRU) (BKNW) (CMOY) (DFG) (IV) (JZ) (S)
//! BETA N    (ALBEVFCYODJWUGNMQTZSKPR) (HIX)
//! B    R    (AE) (BN) (CK) (DQ) (FU) (GY) (HW) (IJ) (LO) (MP) (RX) (SZ) (TV)
//! ```
//!
//! Tokens are whitespace-separated, so a long cycle list may continue onto
//! the following lines; every token opening with `(` extends the cycle
//! list of the rotor being described. An alphabet written with lowercase
//! symbols selects lowercase session output and is folded to uppercase for
//! the machine itself.

use std::sync::Arc;

use walze::{Alphabet, Machine, Permutation, Rotor};

use crate::error::SessionError;
use crate::format::OutputCase;

/// A parsed machine description.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MachineConfig {
    /// The alphabet specification, folded to uppercase.
    pub alphabet: String,
    /// Number of rotor slots, reflector included.
    pub num_rotors: usize,
    /// Number of pawls driving the rotating zone.
    pub num_pawls: usize,
    /// Every rotor the description offers, in file order.
    pub rotors: Vec<RotorSpec>,
    /// Case for converted session output.
    pub output_case: OutputCase,
}

/// One rotor as written in a description.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RotorSpec {
    /// Rotor name, folded to uppercase.
    pub name: String,
    /// The kind tag, with notch symbols for moving rotors.
    pub kind: RotorSpecKind,
    /// The cycle tokens, folded to uppercase and joined with single spaces.
    pub cycles: String,
}

/// The kind tag of a described rotor: `M<notches>`, `N`, or `R`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RotorSpecKind {
    /// A rotating rotor and the symbols its notches sit at.
    Moving {
        /// Notch symbols from the kind tag, folded to uppercase.
        notches: String,
    },
    /// A fixed rotor.
    Fixed,
    /// A reflector.
    Reflecting,
}

impl MachineConfig {
    /// Parses a description from `source`.
    ///
    /// ```
    /// use walze_session::MachineConfig;
    ///
    /// let config = MachineConfig::parse("ABCD 2 1\nREF R (AC) (BD)\nROT MD (ABCD)")?;
    /// assert_eq!(config.num_rotors, 2);
    /// assert_eq!(config.rotors.len(), 2);
    /// # Ok::<(), walze_session::SessionError>(())
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Truncated`] when the tokens run out before a
    /// required element, [`SessionError::BadToken`] for tokens outside the
    /// grammar, and [`SessionError::UnknownKind`] for a rotor kind tag
    /// other than `M<notches>`, `N`, or `R`.
    pub fn parse(source: &str) -> Result<Self, SessionError> {
        let mut tokens = source.split_whitespace().peekable();

        let written = tokens.next().ok_or(SessionError::Truncated {
            expected: "an alphabet",
        })?;
        if written.contains(['(', ')', '*']) {
            return Err(SessionError::BadToken {
                token: written.to_string(),
                expected: "an alphabet without (, ), or *",
            });
        }
        let output_case = if written.chars().any(char::is_lowercase) {
            OutputCase::Lower
        } else {
            OutputCase::Upper
        };
        let alphabet = written.to_uppercase();

        let num_rotors = next_count(&mut tokens, "a rotor count")?;
        let num_pawls = next_count(&mut tokens, "a pawl count")?;

        let mut rotors = Vec::new();
        while let Some(name) = tokens.next() {
            if name.contains(['(', ')', '*']) {
                return Err(SessionError::BadToken {
                    token: name.to_string(),
                    expected: "a rotor name",
                });
            }
            let name = name.to_uppercase();
            let tag = tokens
                .next()
                .ok_or(SessionError::Truncated {
                    expected: "a rotor kind",
                })?
                .to_uppercase();
            let kind = if let Some(notches) = tag.strip_prefix('M') {
                RotorSpecKind::Moving {
                    notches: notches.to_string(),
                }
            } else if tag == "N" {
                RotorSpecKind::Fixed
            } else if tag == "R" {
                RotorSpecKind::Reflecting
            } else {
                return Err(SessionError::UnknownKind { name, tag });
            };

            let mut cycles = String::new();
            while let Some(token) = tokens.peek() {
                if !token.starts_with('(') {
                    break;
                }
                if !is_cycle_token(token) {
                    return Err(SessionError::BadToken {
                        token: (*token).to_string(),
                        expected: "a cycle like (ABC)",
                    });
                }
                if !cycles.is_empty() {
                    cycles.push(' ');
                }
                cycles.push_str(&token.to_uppercase());
                tokens.next();
            }
            rotors.push(RotorSpec { name, kind, cycles });
        }

        Ok(Self {
            alphabet,
            num_rotors,
            num_pawls,
            rotors,
            output_case,
        })
    }

    /// Builds the machine this description names.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Machine`] when the alphabet, a rotor wiring,
    /// or the machine geometry is rejected.
    pub fn build(&self) -> Result<Machine, SessionError> {
        let alphabet = Arc::new(Alphabet::new(&self.alphabet)?);
        let mut inventory = Vec::with_capacity(self.rotors.len());
        for spec in &self.rotors {
            let wiring = Permutation::new(&spec.cycles, alphabet.clone())?;
            let rotor = match &spec.kind {
                RotorSpecKind::Moving { notches } => Rotor::moving(&spec.name, wiring, notches)?,
                RotorSpecKind::Fixed => Rotor::fixed(&spec.name, wiring),
                RotorSpecKind::Reflecting => Rotor::reflector(&spec.name, wiring),
            };
            inventory.push(rotor);
        }
        Ok(Machine::new(
            alphabet,
            self.num_rotors,
            self.num_pawls,
            inventory,
        )?)
    }
}

fn next_count<'a>(
    tokens: &mut impl Iterator<Item = &'a str>,
    expected: &'static str,
) -> Result<usize, SessionError> {
    let token = tokens.next().ok_or(SessionError::Truncated { expected })?;
    token.parse().map_err(|_| SessionError::BadToken {
        token: token.to_string(),
        expected,
    })
}

/// Checks that a token is one or more non-empty `(...)` groups with
/// nothing outside them.
pub(crate) fn is_cycle_token(token: &str) -> bool {
    let mut inside = false;
    let mut group_len = 0usize;
    for c in token.chars() {
        match c {
            '(' if !inside => {
                inside = true;
                group_len = 0;
            }
            ')' if inside && group_len > 0 => inside = false,
            '(' | ')' => return false,
            _ if inside => group_len += 1,
            _ => return false,
        }
    }
    !inside && !token.is_empty()
}
