//! 核心扫描库
//!
//! 设计要点：
//! - 双轨字符串提取：单字节（可打印 ASCII）轨与双字节（可打印字符+NUL 交错）轨
//!   共享同一字节流，逐字节同步推进，状态互不干扰。
//! - 全局偏移按累计消费字节数单调递增，与分块读取无关，运行可跨块无缝衔接。
//! - 命中项在本轨运行中断的瞬间即时输出（流式），不做收集与排序。
//! - 配置以不可变引用传入扫描器，无任何进程级全局状态。

mod accum;
mod classify;
mod config;
mod emit;
mod error;
mod scan;
mod tracks;

// 对外暴露的最小面：配置、统计、错误与两个扫描入口
pub use config::{OffsetRadix, ScanConfig, ScanStats};
pub use error::ScanError;
pub use scan::{scan_file, scan_files};
