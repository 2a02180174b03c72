//! Known-answer vectors for the naval rotor set.
//!
//! The poem runs through one machine without resets between lines, the same
//! way a session drives it, so each line's vector also pins the rotor state
//! carried out of the line before.

use std::sync::Arc;

use walze::{Alphabet, Machine, Permutation, Rotor};

/// Moving rotors: name, notch symbols, wiring.
const MOVING: &[(&str, &str, &str)] = &[
    ("I", "Q", "(AELTPHQXRU) (BKNW) (CMOY) (DFG) (IV) (JZ) (S)"),
    ("II", "E", "(FIXVYOMW) (CDKLHUP) (ESZ) (BJ) (GR) (NT) (A) (Q)"),
    ("III", "V", "(ABDHPEJT) (CFLVMZOYQIRWUKXSG) (N)"),
    ("IV", "J", "(AEPLIYWCOXMRFZBSTGJQNH) (DV) (KU)"),
    ("V", "Z", "(AVOLDRWFIUQ) (BZKSMNHYC) (EGTJPX)"),
    ("VI", "ZM", "(AJQDVLEOZWIYTS) (CGMNHFUX) (BPRK)"),
    ("VII", "ZM", "(ANOUPFRIMBZTLWKSVEGCJYDHXQ)"),
    ("VIII", "ZM", "(AFLSETWUNDHOZVICQ) (BKJ) (GXY) (MPR)"),
];

/// Fixed rotors.
const FIXED: &[(&str, &str)] = &[
    ("BETA", "(ALBEVFCYODJWUGNMQTZSKPR) (HIX)"),
    ("GAMMA", "(AFNIRLBSQWVXGUZDKMTPCOYJHE)"),
];

/// Reflectors.
const REFLECTING: &[(&str, &str)] = &[
    ("B", "(AE) (BN) (CK) (DQ) (FU) (GY) (HW) (IJ) (LO) (MP) (RX) (SZ) (TV)"),
    ("C", "(AR) (BD) (CO) (EJ) (FN) (GT) (HK) (IV) (LM) (PW) (QZ) (SX) (UY)"),
];

/// Hiawatha's photographing, one (plaintext, grouped ciphertext) pair per
/// line, under `B BETA III IV I` at `AXLE` with plugboard
/// `(HQ) (EX) (IP) (TR) (BY)`.
const POEM: &[(&str, &str)] = &[
    ("FROM HIS SHOULDER HIAWATHA", "QVPQS OKOIL PUBKJ ZPISF XDW"),
    ("TOOK THE CAMERA OF ROSEWOOD", "BHCNS CXNUO AATZX SRCFY DGU"),
    ("MADE OF SLIDING FOLDING ROSEWOOD", "FLPNX GXIXT YJUJR CAUGE UNCFM KUF"),
    ("NEATLY PUT IT ALL TOGETHER", "WJFGK CIIRG XODJG VCGPQ OH"),
    ("IN ITS CASE IT LAY COMPACTLY", "ALWEB UHTZM OXIIV XUEFP RPR"),
    ("FOLDED INTO NEARLY NOTHING", "KCGVP FPYKI KITLB URVGT SFU"),
    ("BUT HE OPENED OUT THE HINGES", "SMBNK FRIIM PDOFJ VTTUG RZM"),
    ("PUSHED AND PULLED THE JOINTS", "UVCYL FDZPG IBXRE WXUEB ZQJO"),
    ("AND HINGES", "YMHIP GRRE"),
    ("TILL IT LOOKED ALL SQUARES", "GOHET UXDTW LCMMW AVNVJ VH"),
    ("AND OBLONGS", "OUFAN TQACK"),
    ("LIKE A COMPLICATED FIGURE", "KTOZZ RDABQ NNVPO IEFQA FS"),
    ("IN THE SECOND BOOK OF EUCLID", "VVICV UDUER EYNPF FMNBJ VGQ"),
];

fn naval_machine() -> Machine {
    let alpha = Arc::new(Alphabet::default());
    let mut inventory = Vec::new();
    for (name, cycles) in REFLECTING {
        let wiring = Permutation::new(cycles, alpha.clone()).unwrap();
        inventory.push(Rotor::reflector(name, wiring));
    }
    for (name, cycles) in FIXED {
        let wiring = Permutation::new(cycles, alpha.clone()).unwrap();
        inventory.push(Rotor::fixed(name, wiring));
    }
    for (name, notches, cycles) in MOVING {
        let wiring = Permutation::new(cycles, alpha.clone()).unwrap();
        inventory.push(Rotor::moving(name, wiring, notches).unwrap());
    }
    Machine::new(alpha, 5, 3, inventory).unwrap()
}

fn plugboard(cycles: &str) -> Permutation {
    Permutation::new(cycles, Arc::new(Alphabet::default())).unwrap()
}

fn poem_machine() -> Machine {
    let mut machine = naval_machine();
    machine.insert_rotors(&["B", "BETA", "III", "IV", "I"]).unwrap();
    machine.set_rotors("AXLE").unwrap();
    machine.set_plugboard(plugboard("(HQ) (EX) (IP) (TR) (BY)")).unwrap();
    machine
}

/// Strips the display grouping back off a published vector.
fn packed(grouped: &str) -> String {
    grouped.chars().filter(|c| *c != ' ').collect()
}

#[test]
fn poem_encrypts_line_by_line() {
    let mut machine = poem_machine();
    for (line, (plaintext, ciphertext)) in POEM.iter().enumerate() {
        let converted = machine.convert_message(plaintext).unwrap();
        assert_eq!(converted, packed(ciphertext), "line {}", line + 1);
    }
}

#[test]
fn poem_decrypts_line_by_line() {
    let mut machine = poem_machine();
    for (line, (plaintext, ciphertext)) in POEM.iter().enumerate() {
        let converted = machine.convert_message(ciphertext).unwrap();
        assert_eq!(converted, packed(plaintext), "line {}", line + 1);
    }
}

#[test]
fn first_line_leaves_settings_axmb() {
    let mut machine = poem_machine();
    machine.convert_message(POEM[0].0).unwrap();
    assert_eq!(machine.current_settings().unwrap(), "AXMB");
}

#[test]
fn stepping_trail_with_fourth_wheel() {
    let mut machine = naval_machine();
    machine.insert_rotors(&["B", "BETA", "III", "IV", "I"]).unwrap();
    machine.set_rotors("AXIP").unwrap();

    // press 2: I carries IV at notch Q; press 3: IV at its own notch J
    // steps again and carries III
    let mut trail = Vec::new();
    for _ in 0..3 {
        machine.convert(0).unwrap();
        trail.push(machine.current_settings().unwrap());
    }
    assert_eq!(trail, ["AXIQ", "AXJR", "AYKS"]);
}

#[test]
fn identity_plugboard_vectors() {
    let mut machine = naval_machine();
    machine.insert_rotors(&["B", "BETA", "I", "II", "III"]).unwrap();
    machine.set_rotors("AAAA").unwrap();
    assert_eq!(machine.convert_message("AAAAA").unwrap(), "BDZGO");

    machine.set_rotors("AAAA").unwrap();
    assert_eq!(machine.convert_message("HELLO WORLD").unwrap(), "ILBDAAMTAZ");
}

#[test]
fn multi_notch_rotors_preserve_involution() {
    let mut machine = naval_machine();
    machine.insert_rotors(&["C", "GAMMA", "VI", "VII", "VIII"]).unwrap();
    machine.set_rotors("AJQX").unwrap();

    let plaintext: String = "ENIGMA".repeat(10);
    let ciphertext = machine.convert_message(&plaintext).unwrap();
    for (p, c) in plaintext.chars().zip(ciphertext.chars()) {
        assert_ne!(p, c, "pairing reflector never maps a symbol to itself");
    }

    machine.set_rotors("AJQX").unwrap();
    assert_eq!(machine.convert_message(&ciphertext).unwrap(), plaintext);
}

#[test]
fn toy_alphabet_trace() {
    let alpha = Arc::new(Alphabet::new("A-D").unwrap());
    let inventory = vec![
        Rotor::reflector("REF", Permutation::new("(AC) (BD)", alpha.clone()).unwrap()),
        Rotor::moving("ROT", Permutation::new("(ABCD)", alpha.clone()).unwrap(), "D").unwrap(),
    ];
    let mut machine = Machine::new(alpha, 2, 1, inventory).unwrap();
    machine.insert_rotors(&["REF", "ROT"]).unwrap();
    machine.set_rotors("A").unwrap();
    assert_eq!(machine.convert_message("AB").unwrap(), "CD");

    machine.set_rotors("A").unwrap();
    assert_eq!(machine.convert_message("CD").unwrap(), "AB");
}
