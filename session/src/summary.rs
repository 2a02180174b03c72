//! Serializable machine summaries for inspection tools.

use serde::Serialize;
use walze::{Machine, RotorKind};

use crate::format::OutputCase;

/// A description of a built machine, one record per inventory rotor.
#[derive(Debug, Serialize)]
pub struct MachineSummary {
    /// The alphabet's symbols in index order.
    pub alphabet: String,
    /// Number of symbols.
    pub size: usize,
    /// Number of rotor slots, reflector included.
    pub num_rotors: usize,
    /// Number of pawls.
    pub num_pawls: usize,
    /// Case applied to session output.
    pub output: OutputCase,
    /// Every inventory rotor, in declaration order.
    pub rotors: Vec<RotorSummary>,
}

/// One rotor of the inventory.
#[derive(Debug, Serialize)]
pub struct RotorSummary {
    /// Rotor name.
    pub name: String,
    /// `"moving"`, `"fixed"`, or `"reflecting"`.
    pub kind: &'static str,
    /// Notch symbols for a moving rotor, empty otherwise.
    pub notches: String,
    /// Wiring as canonical disjoint cycles.
    pub wiring: String,
}

impl MachineSummary {
    /// Summarizes `machine` with the given output case.
    #[must_use]
    pub fn new(machine: &Machine, output: OutputCase) -> Self {
        let symbols: Vec<char> = machine.alphabet().chars().collect();
        let rotors = machine
            .rotors()
            .map(|rotor| {
                let kind = match rotor.kind() {
                    RotorKind::Moving { .. } => "moving",
                    RotorKind::Fixed => "fixed",
                    RotorKind::Reflecting => "reflecting",
                };
                let notches = rotor
                    .notches()
                    .iter()
                    .filter_map(|&notch| symbols.get(notch).copied())
                    .collect();
                RotorSummary {
                    name: rotor.name().to_string(),
                    kind,
                    notches,
                    wiring: rotor.permutation().to_string(),
                }
            })
            .collect();

        Self {
            alphabet: machine.alphabet().symbols(),
            size: machine.alphabet().len(),
            num_rotors: machine.num_rotors(),
            num_pawls: machine.num_pawls(),
            output,
            rotors,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::config::MachineConfig;

    #[test]
    fn test_summary_fields() {
        let config =
            MachineConfig::parse("ABCD 2 1\nREF R (AC) (BD)\nROT MD (ABCD)").unwrap();
        let machine = config.build().unwrap();
        let summary = MachineSummary::new(&machine, config.output_case);

        assert_eq!(summary.alphabet, "ABCD");
        assert_eq!(summary.size, 4);
        assert_eq!(summary.num_rotors, 2);
        assert_eq!(summary.num_pawls, 1);
        assert_eq!(summary.rotors.len(), 2);

        let reflector = &summary.rotors[0];
        assert_eq!(reflector.name, "REF");
        assert_eq!(reflector.kind, "reflecting");
        assert_eq!(reflector.notches, "");
        assert_eq!(reflector.wiring, "(AC) (BD)");

        let rotor = &summary.rotors[1];
        assert_eq!(rotor.kind, "moving");
        assert_eq!(rotor.notches, "D");
    }

    #[test]
    fn test_summary_serializes_to_json() {
        let config = MachineConfig::parse("abcd 2 1\nREF R (AC) (BD)\nROT MD (ABCD)").unwrap();
        let machine = config.build().unwrap();
        let summary = MachineSummary::new(&machine, config.output_case);

        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(json["output"], "lower");
        assert_eq!(json["rotors"][1]["name"], "ROT");
        assert_eq!(json["rotors"][1]["notches"], "D");
    }
}
