//! 扫描错误类型
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// 扫描过程中的错误
/// - Open/Read 是单文件级错误：调用方记录后可跳过该文件继续批量扫描
/// - Write 是输出端错误：数据流已断，批量扫描无法继续
#[derive(Debug, Error)]
pub enum ScanError {
    #[error("cannot open {}: {source}", path.display())]
    Open { path: PathBuf, source: io::Error },

    #[error("read error on {}: {source}", path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error("write error: {0}")]
    Write(io::Error),
}
