//! Line-oriented conversion sessions.
//!
//! A session reads an input stream against a parsed description. Settings
//! lines choose and position rotors, message lines are converted and
//! written in five-symbol groups, and blank lines are echoed so paragraph
//! breaks survive into the output.

use std::io::{BufRead, Write};
use std::sync::Arc;

use walze::{Alphabet, Machine, Permutation};

use crate::config::{is_cycle_token, MachineConfig};
use crate::error::SessionError;
use crate::format::group_fives;

/// Runs a conversion session over `input`, writing one line of output per
/// input line.
///
/// Lines are handled three ways:
/// - a blank line is echoed,
/// - a line whose first field is `*` reconfigures the machine: one rotor
///   name per slot, a settings field, then any number of plugboard cycles,
/// - any other line is converted and written in five-symbol groups, cased
///   per the description's alphabet.
///
/// The first non-blank line must be a settings line.
///
/// # Errors
///
/// Returns [`SessionError::MessageBeforeSettings`] when a message arrives
/// on an unconfigured machine, [`SessionError::ShortSettingsLine`] and
/// [`SessionError::BadToken`] for malformed settings lines,
/// [`SessionError::Machine`] when the machine rejects a name, setting,
/// plugboard, or symbol, and [`SessionError::Io`] for stream failures.
pub fn run(
    config: &MachineConfig,
    input: impl BufRead,
    output: &mut impl Write,
) -> Result<(), SessionError> {
    let mut machine = config.build()?;
    let alphabet = Arc::new(Alphabet::new(&config.alphabet)?);
    let mut configured = false;

    for line in input.lines() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() {
            writeln!(output)?;
        } else if trimmed.split_whitespace().next() == Some("*") {
            apply_settings(&mut machine, &alphabet, trimmed)?;
            configured = true;
        } else if configured {
            let converted = machine.convert_message(&trimmed.to_uppercase())?;
            let cased = config.output_case.apply(&converted);
            writeln!(output, "{}", group_fives(&cased))?;
        } else {
            return Err(SessionError::MessageBeforeSettings);
        }
    }
    Ok(())
}

/// Applies one settings line: rotor names for every slot, the wheel
/// settings, then plugboard cycles. Each settings line replaces the whole
/// plugboard, so a line without cycles clears it.
fn apply_settings(
    machine: &mut Machine,
    alphabet: &Arc<Alphabet>,
    line: &str,
) -> Result<(), SessionError> {
    let fields: Vec<&str> = line.split_whitespace().skip(1).collect();
    let slots = machine.num_rotors();
    if fields.len() < slots + 1 {
        return Err(SessionError::ShortSettingsLine {
            line: line.to_string(),
        });
    }

    let names: Vec<String> = fields[..slots].iter().map(|f| f.to_uppercase()).collect();
    let names: Vec<&str> = names.iter().map(String::as_str).collect();
    machine.insert_rotors(&names)?;
    machine.set_rotors(&fields[slots].to_uppercase())?;

    for token in &fields[slots + 1..] {
        if !is_cycle_token(token) {
            return Err(SessionError::BadToken {
                token: (*token).to_string(),
                expected: "a plugboard cycle like (AB)",
            });
        }
    }
    let cycles = fields[slots + 1..].join(" ").to_uppercase();
    machine.set_plugboard(Permutation::new(&cycles, alphabet.clone())?)?;
    Ok(())
}
