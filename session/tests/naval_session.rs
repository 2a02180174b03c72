//! End-to-end sessions against the naval machine description.

use std::io::Cursor;

use walze_session::{group_fives, run, MachineConfig, SessionError};

/// The naval description. The first reflector's cycle list continues onto
/// a second line, which the parser must fold into one rotor.
const NAVAL: &str = "\
ABCDEFGHIJKLMNOPQRSTUVWXYZ
5 3
I     MQ   (AELTPHQXRU) (BKNW) (CMOY) (DFG) (IV) (JZ) (S)
II    ME   (FIXVYOMW) (CDKLHUP) (ESZ) (BJ) (GR) (NT) (A) (Q)
III   MV   (ABDHPEJT) (CFLVMZOYQIRWUKXSG) (N)
IV    MJ   (AEPLIYWCOXMRFZBSTGJQNH) (DV) (KU)
V     MZ   (AVOLDRWFIUQ) (BZKSMNHYC) (EGTJPX)
VI    MZM  (AJQDVLEOZWIYTS) (CGMNHFUX) (BPRK)
VII   MZM  (ANOUPFRIMBZTLWKSVEGCJYDHXQ)
VIII  MZM  (AFLSETWUNDHOZVICQ) (BKJ) (GXY) (MPR)
BETA  N    (ALBEVFCYODJWUGNMQTZSKPR) (HIX)
GAMMA N    (AFNIRLBSQWVXGUZDKMTPCOYJHE)
B     R    (AE) (BN) (CK) (DQ) (FU) (GY) (HW) (IJ) (LO)
           (MP) (RX) (SZ) (TV)
C     R    (AR) (BD) (CO) (EJ) (FN) (GT) (HK) (IV) (LM) (PW) (QZ) (SX) (UY)
";

const SETTINGS: &str = "* B BETA III IV I AXLE (HQ) (EX) (IP) (TR) (BY)";

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

fn session_output(description: &str, input: &str) -> String {
    let config = MachineConfig::parse(description).unwrap();
    let mut output = Vec::new();
    run(&config, Cursor::new(input), &mut output).unwrap();
    String::from_utf8(output).unwrap()
}

fn packed(grouped: &str) -> String {
    grouped.chars().filter(|c| *c != ' ').collect()
}

#[test]
fn poem_session_encrypts() {
    let mut input = format!("{SETTINGS}\n");
    for (plaintext, _) in POEM {
        input.push_str(plaintext);
        input.push('\n');
    }

    let mut expected = String::new();
    for (_, ciphertext) in POEM {
        expected.push_str(ciphertext);
        expected.push('\n');
    }
    assert_eq!(session_output(NAVAL, &input), expected);
}

#[test]
fn poem_session_decrypts() {
    let mut input = format!("{SETTINGS}\n");
    for (_, ciphertext) in POEM {
        input.push_str(ciphertext);
        input.push('\n');
    }

    let mut expected = String::new();
    for (plaintext, _) in POEM {
        expected.push_str(&group_fives(&packed(plaintext)));
        expected.push('\n');
    }
    assert_eq!(session_output(NAVAL, &input), expected);
}

#[test]
fn resetting_mid_session_repeats_a_line() {
    let (plaintext, ciphertext) = POEM[0];
    let input = format!("{SETTINGS}\n{plaintext}\n{SETTINGS}\n{plaintext}\n");
    let expected = format!("{ciphertext}\n{ciphertext}\n");
    assert_eq!(session_output(NAVAL, &input), expected);
}

#[test]
fn lowercase_description_gives_lowercase_output() {
    let description = "\
a-z
3 2
refl r (ae) (bn) (ck) (dq) (fu) (gy) (hw) (ij) (lo) (mp) (rx) (sz) (tv)
mid  mq (az) (by)
fast mc (abcdefghijklmnopqrstuvwxyz)
";
    let output = session_output(description, "* refl mid fast aa\nhello\n");
    assert_eq!(output, "itool\n");
}

#[test]
fn out_of_alphabet_symbols_abort_the_session() {
    let config = MachineConfig::parse(NAVAL).unwrap();
    let mut output = Vec::new();
    let input = format!("{SETTINGS}\nHELLO!\n");
    let err = run(&config, Cursor::new(input), &mut output).unwrap_err();
    assert!(matches!(err, SessionError::Machine(_)));
}
