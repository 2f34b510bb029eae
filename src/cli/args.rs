use clap::Parser;

// 引数は取らない。`--help` と `--version` のみ。
#[derive(Parser, Debug)]
#[command(name = "arith_bench")]
#[command(about = "Compares the throughput of =, +, -, *, / across i8, i32, i64, f32 and f64")]
#[command(version)]
pub struct Cli {}
