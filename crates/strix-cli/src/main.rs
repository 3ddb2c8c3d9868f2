use anyhow::{Context, Result};
use clap::Parser;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use strix_core::{scan_files, OffsetRadix, ScanConfig};
use tracing::info;

/// 命令行入口（基于 clap）
#[derive(Parser, Debug)]
#[command(
    name = "strix",
    version,
    about = "提取二进制文件中的可读字符串（单字节与双字节交错两种编码）"
)]
struct Cli {
    /// 最小字符串长度（小于 1 时按 1 处理）
    #[arg(short = 'n', value_name = "LEN", default_value_t = 4)]
    min_len: usize,

    /// 输出偏移列：o=八进制 d=十进制 x=十六进制
    #[arg(short = 't', value_name = "RADIX", value_parser = parse_radix)]
    offset_radix: Option<OffsetRadix>,

    /// 在每条结果前输出文件名
    #[arg(short = 'f')]
    show_source_name: bool,

    /// 输入文件（按参数顺序扫描）
    #[arg(value_name = "FILE", required = true)]
    files: Vec<PathBuf>,
}

fn main() -> Result<()> {
    init_tracing();
    let cli = parse_cli();

    let cfg = ScanConfig {
        // 与原始行为一致：过小的 -n 钳制为 1 而不是报错
        min_len: cli.min_len.max(1),
        offset_radix: cli.offset_radix,
        show_source_name: cli.show_source_name,
    };

    // 锁定 stdout 并加缓冲；命中行由核心在运行中断的瞬间流式写入
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    let stats = scan_files(&cli.files, &cfg, &mut out).context("scan failed")?;
    out.flush().context("flush stdout")?;

    // 单文件打开失败不影响退出码，只计入统计并已在日志中报告
    info!(
        files_scanned = stats.files_scanned,
        files_failed = stats.files_failed,
        matches_emitted = stats.matches_emitted,
        "scan finished"
    );
    Ok(())
}

/// 解析命令行。退出码约定：帮助/版本为 0，任何参数错误统一为 1
fn parse_cli() -> Cli {
    use clap::error::ErrorKind;
    match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let code = match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => 0,
                _ => 1,
            };
            let _ = e.print();
            std::process::exit(code);
        }
    }
}

fn init_tracing() {
    use tracing_subscriber::{fmt, EnvFilter};
    // 日志一律走 stderr，stdout 只承载命中数据。
    // 默认仅 warn 及以上；RUST_LOG=info 可看到收尾统计
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let subscriber = fmt()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .finish();
    let _ = tracing::subscriber::set_global_default(subscriber);
}

/// 解析 -t 的进制参数
fn parse_radix(s: &str) -> Result<OffsetRadix, String> {
    match s {
        "o" => Ok(OffsetRadix::Octal),
        "d" => Ok(OffsetRadix::Decimal),
        "x" => Ok(OffsetRadix::Hex),
        _ => Err(format!("invalid radix '{s}', use o, d or x")),
    }
}
