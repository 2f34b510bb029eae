// バイナリのエントリーポイントのテスト
// 本計測は時間がかかるため、--help と --version のみ確認する

use std::process::Command;

const BINARY: &str = env!("CARGO_BIN_EXE_arith_bench");

#[test]
fn test_cli_help() {
    let output = Command::new(BINARY)
        .arg("--help")
        .output()
        .expect("Failed to execute binary");

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("arith_bench"));
    assert!(stdout.contains("throughput"));
}

#[test]
fn test_cli_version() {
    let output = Command::new(BINARY)
        .arg("--version")
        .output()
        .expect("Failed to execute binary");

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_cli_rejects_arguments() {
    let output = Command::new(BINARY)
        .arg("--iterations")
        .output()
        .expect("Failed to execute binary");

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
}
