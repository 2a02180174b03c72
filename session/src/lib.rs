//! Description files and conversion sessions for `walze` machines.
//!
//! This crate layers the file formats on top of the core machine: a
//! description file names the alphabet, the slot geometry, and the rotor
//! inventory, and a session drives the built machine over a stream of
//! settings and message lines.
//!
//! # Description Files
//!
//! ```text
//! ABCDEFGHIJKLMNOPQRSTUVWXYZ
//! 5 3
//! I    MQ   (AELTPHQXRU) (BKNW) (CMOY) (DFG) (IV) (JZ) (S)
//! II   ME   (FIXVYOMW) (CDKLHUP) (ESZ) (BJ) (GR) (NT) (A) (Q)
//! BETA N    (ALBEVFCYODJWUGNMQTZSKPR) (HIX)
//! B    R    (AE) (BN) (CK) (DQ) (FU) (GY) (HW) (IJ) (LO) (MP) (RX) (SZ) (TV)
//! ```
//!
//! # Session Input
//!
//! ```text
//! * B BETA III IV I AXLE (HQ) (EX) (IP) (TR) (BY)
//! FROM HIS SHOULDER HIAWATHA
//! ```
//!
//! Each settings line selects the rotor order, positions the rotors, and
//! replaces the plugboard; each message line comes back converted, in
//! five-symbol groups:
//!
//! ```text
//! QVPQS OKOIL PUBKJ ZPISF XDW
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

pub mod config;
pub mod error;
pub mod format;
pub mod session;
pub mod summary;

pub use config::{MachineConfig, RotorSpec, RotorSpecKind};
pub use error::SessionError;
pub use format::{group_fives, OutputCase};
pub use session::run;
pub use summary::{MachineSummary, RotorSummary};
