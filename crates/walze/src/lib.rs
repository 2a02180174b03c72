//! An Enigma-style rotor cipher machine.
//!
//! `walze` models the whole machine: an [`Alphabet`] maps symbols to dense
//! indices, [`Permutation`]s written in cycle notation act on those indices,
//! [`Rotor`]s read a permutation through a rotational offset, and the
//! [`Machine`] composes them into the per-symbol transform.
//!
//! # Signal Path
//!
//! ```text
//! input  -> plugboard -> slot n-1 -> ... -> slot 1 -> reflector (slot 0)
//!                                                         |
//! output <- plugboard <- slot n-1 <- ... <- slot 1 <------+
//! ```
//!
//! Each keypress steps the rotors first, then runs the path above. The
//! reflector pairs contacts symmetrically, so a machine at a given setting
//! is its own inverse: converting a ciphertext from the same setting
//! returns the plaintext.
//!
//! # Stepping
//!
//! The rightmost rotor steps on every keypress. A rotor at one of its
//! notches carries its left neighbor and, pushed along with it, steps
//! again itself - the double-step anomaly. Which slots may step at all is
//! fixed by the machine geometry (`n` slots, `p` pawls):
//!
//! | Slot | Zone | Steps? |
//! |--------------|---------------|-------------|
//! | `0` | reflector | never |
//! | `1..n-p` | fixed zone | never |
//! | `n-p..n` | rotating zone | pawl-driven |
//!
//! Geometries whose pawl bank could not drive every rotating rotor
//! (`n + 1 < 2p`) are rejected at construction instead of silently
//! mis-stepping.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use walze::{Alphabet, Machine, Permutation, Rotor};
//!
//! let alpha = Arc::new(Alphabet::default());
//! let inventory = vec![
//!     Rotor::reflector(
//!         "R",
//!         Permutation::new(
//!             "(AE) (BN) (CK) (DQ) (FU) (GY) (HW) (IJ) (LO) (MP) (RX) (SZ) (TV)",
//!             alpha.clone(),
//!         )?,
//!     ),
//!     Rotor::moving("MID", Permutation::new("(AZ) (BY)", alpha.clone())?, "Q")?,
//!     Rotor::moving(
//!         "FAST",
//!         Permutation::new("(ABCDEFGHIJKLMNOPQRSTUVWXYZ)", alpha.clone())?,
//!         "C",
//!     )?,
//! ];
//!
//! let mut machine = Machine::new(alpha, 3, 2, inventory)?;
//! machine.insert_rotors(&["R", "MID", "FAST"])?;
//! machine.set_rotors("AA")?;
//! assert_eq!(machine.convert_message("HELLO")?, "ITOOL");
//!
//! // same setting, same machine: decryption is the same operation
//! machine.set_rotors("AA")?;
//! assert_eq!(machine.convert_message("ITOOL")?, "HELLO");
//! # Ok::<(), walze::Error>(())
//! ```
//!
//! # Design
//!
//! - **Indices at the boundaries**: components exchange alphabet indices;
//!   the [`Alphabet`] does every symbol translation exactly once.
//! - **Owned inventory**: the [`Machine`] owns its rotors and addresses the
//!   active order by handle, never by aliased reference. Cloning a machine
//!   gives an independent copy.
//! - **Fail loudly**: malformed configurations and unmapped symbols are
//!   errors that carry the offending value; nothing passes through silently.
//! - **`no_std` + `alloc`**: the core has no dependencies and no I/O.

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

// Symbol/index bijection with range expansion
pub mod alphabet;

// Error taxonomy (range vs. configuration)
pub mod error;

// Rotor slots, ratchet stepping, signal path
pub mod machine;

// Cycle-notation permutation algebra
pub mod permutation;

// Rotor variants and offset arithmetic
pub mod rotor;

// Re-export the working set at the crate root
pub use alphabet::Alphabet;
pub use error::{ConfigError, Error, RangeError};
pub use machine::Machine;
pub use permutation::Permutation;
pub use rotor::{Rotor, RotorKind};

/// Prelude module for convenient imports.
///
/// ```
/// use walze::prelude::*;
/// ```
pub mod prelude {
    pub use crate::alphabet::Alphabet;
    pub use crate::error::{ConfigError, Error, RangeError};
    pub use crate::machine::Machine;
    pub use crate::permutation::Permutation;
    pub use crate::rotor::{Rotor, RotorKind};
}
