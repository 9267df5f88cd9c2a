#![cfg(feature = "cmd")]

use std::process::Command;

#[test]
fn builtin_addresses() {
    let output = Command::new(env!("CARGO_BIN_EXE_printIp")).output().unwrap();
    assert!(output.status.success());
    assert_eq!(
        String::from_utf8(output.stdout).unwrap(),
        "255\n0.0\n127.0.0.1\n123.45.67.89.101.112.131.41\nHello, World!\n100.200.300.400\n400.300.200.100\n123.456.789.0\n"
    );
}

#[test]
fn addresses_from_file() {
    let dir = std::env::temp_dir().join(format!("print_ip-cmd-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("addresses.json");
    std::fs::write(&path, r#"[{"uint16": 258}, {"list": ["a", "b"]}]"#).unwrap();

    let output = Command::new(env!("CARGO_BIN_EXE_printIp"))
        .arg("-q")
        .arg("--file")
        .arg(&path)
        .output()
        .unwrap();
    assert!(output.status.success());
    assert_eq!(String::from_utf8(output.stdout).unwrap(), "1.2\na.b\n");
}

#[test]
fn missing_file_exit_code() {
    let output = Command::new(env!("CARGO_BIN_EXE_printIp"))
        .args(["-f", "/nonexistent/print_ip.json"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
}
