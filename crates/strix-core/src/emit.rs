//! 命中输出（单行文本格式化）
use std::io::{self, Write};

use crate::config::{OffsetRadix, ScanConfig};

/// 扫描器 → 输出端的契约：一条轨的运行中断且达到最小长度时调用一次。
/// 命中是瞬态的，传递后即被丢弃，不做任何收集。
pub(crate) trait MatchSink {
    fn emit(&mut self, text: &[u8], start_offset: u64) -> io::Result<()>;
}

/// 行格式输出器
/// - 可选 "<文件名>: " 前缀
/// - 可选偏移列：7 字符右对齐 + 一个空格（八/十/十六进制，无符号 64 位）
/// - 命中文本 + 换行
pub(crate) struct Emitter<'a> {
    cfg: &'a ScanConfig,
    source: &'a str,
    out: &'a mut dyn Write,
    pub(crate) emitted: usize,
}

impl<'a> Emitter<'a> {
    pub(crate) fn new(cfg: &'a ScanConfig, source: &'a str, out: &'a mut dyn Write) -> Self {
        Self {
            cfg,
            source,
            out,
            emitted: 0,
        }
    }
}

impl MatchSink for Emitter<'_> {
    fn emit(&mut self, text: &[u8], start_offset: u64) -> io::Result<()> {
        if self.cfg.show_source_name {
            write!(self.out, "{}: ", self.source)?;
        }
        match self.cfg.offset_radix {
            Some(OffsetRadix::Octal) => write!(self.out, "{:7o} ", start_offset)?,
            Some(OffsetRadix::Decimal) => write!(self.out, "{:7} ", start_offset)?,
            Some(OffsetRadix::Hex) => write!(self.out, "{:7x} ", start_offset)?,
            None => {}
        }
        self.out.write_all(text)?;
        self.out.write_all(b"\n")?;
        self.emitted += 1;
        Ok(())
    }
}
