use std::io::Write;
use std::process::{Command, Output, Stdio};

fn run(bin: &str, args: &[&str], input: &[u8]) -> Output {
    let mut child = Command::new(bin)
        .args(args)
        .env("BURROWS_LOG", "off")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("failed to start binary");
    {
        let mut stdin = child.stdin.take().expect("no stdin");
        // A program that exits before reading closes the pipe; that is not a test failure.
        let _ = stdin.write_all(input);
    }
    child.wait_with_output().expect("failed to wait on binary")
}

const BWT: &str = env!("CARGO_BIN_EXE_burrows-wheeler");
const MTF: &str = env!("CARGO_BIN_EXE_move-to-front");

#[test]
fn bwt_encode_decode() {
    let out = run(BWT, &["-"], b"ABRACADABRA!");
    assert!(out.status.success());
    assert_eq!(out.stdout, b"\x00\x00\x00\x03ARD!RCAAAABB");

    let back = run(BWT, &["+"], &out.stdout);
    assert!(back.status.success());
    assert_eq!(back.stdout, b"ABRACADABRA!");
}

#[test]
fn mtf_encode_decode() {
    let out = run(MTF, &["-"], b"ABRACADABRA!");
    assert!(out.status.success());
    assert_eq!(
        out.stdout,
        vec![0x41, 0x42, 0x52, 0x02, 0x44, 0x01, 0x45, 0x01, 0x04, 0x04, 0x02, 0x26]
    );

    let back = run(MTF, &["+"], &out.stdout);
    assert!(back.status.success());
    assert_eq!(back.stdout, b"ABRACADABRA!");
}

#[test]
fn bad_flags_fail_without_output() {
    for bin in [BWT, MTF] {
        for args in [
            &[][..],
            &["x"][..],
            &["-", "+"][..],
            &["-V"][..],
            &["--version"][..],
            &["-h"][..],
            &["--help"][..],
        ] {
            let out = run(bin, args, b"data");
            assert!(!out.status.success(), "{} {:?}", bin, args);
            assert!(out.stdout.is_empty());
        }
    }
}

#[test]
fn empty_input() {
    assert!(!run(BWT, &["-"], b"").status.success());
    assert!(!run(BWT, &["+"], b"").status.success());

    let out = run(MTF, &["-"], b"");
    assert!(out.status.success());
    assert!(out.stdout.is_empty());
}
