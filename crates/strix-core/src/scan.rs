//! 扫描驱动：分块读取 + 双轨逐字节推进 + 批量调度
use anyhow::Result;
use std::fs::File;
use std::io::{self, BufReader, Read, Write};
use std::path::{Path, PathBuf};

use tracing::{debug, error};

use crate::config::{ScanConfig, ScanStats};
use crate::emit::{Emitter, MatchSink};
use crate::error::ScanError;
use crate::tracks::{AsciiTrack, WideTrack};

/// 分块大小（字节）。运行可跨块衔接，块大小只影响 I/O 粒度，不影响结果。
pub(crate) const CHUNK_SIZE: usize = 8192;

/// 双轨逐字节驱动器：持有全局偏移与两条轨的全部状态。
/// 每个文件构造一个，扫描结束即丢弃；文件之间不共享任何可变状态。
pub(crate) struct Scanner {
    min_len: usize,
    offset: u64,
    ascii: AsciiTrack,
    wide: WideTrack,
}

impl Scanner {
    pub(crate) fn new(min_len: usize) -> Self {
        Self {
            // 配置层已钳制，这里再兜底一次，保证不小于 1
            min_len: min_len.max(1),
            offset: 0,
            ascii: AsciiTrack::new(),
            wide: WideTrack::new(),
        }
    }

    /// 送入一块字节：每个字节先推进单字节轨、再推进双字节轨，随后偏移加一。
    /// 偏移只与累计消费字节数相关，与块边界无关。
    pub(crate) fn feed(&mut self, chunk: &[u8], sink: &mut dyn MatchSink) -> io::Result<()> {
        for &b in chunk {
            self.ascii.step(b, self.offset, self.min_len, sink)?;
            self.wide.step(b, self.offset, self.min_len, sink)?;
            self.offset += 1;
        }
        Ok(())
    }

    /// 流结束冲刷：两条轨各自做一次终止处理
    pub(crate) fn finish(&mut self, sink: &mut dyn MatchSink) -> io::Result<()> {
        self.ascii.finish(self.min_len, sink)?;
        self.wide.finish(self.min_len, sink)
    }
}

/// 扫描单个文件，把命中行写入 `out`；返回输出的命中条数
pub fn scan_file(path: &Path, cfg: &ScanConfig, out: &mut dyn Write) -> Result<usize, ScanError> {
    let file = File::open(path).map_err(|e| ScanError::Open {
        path: path.to_path_buf(),
        source: e,
    })?;
    let mut reader = BufReader::new(file);

    let source = path.display().to_string();
    let mut emitter = Emitter::new(cfg, &source, out);
    let mut scanner = Scanner::new(cfg.min_len);

    let mut buf = vec![0u8; CHUNK_SIZE];
    loop {
        let n = reader.read(&mut buf).map_err(|e| ScanError::Read {
            path: path.to_path_buf(),
            source: e,
        })?;
        if n == 0 {
            break;
        }
        scanner.feed(&buf[..n], &mut emitter).map_err(ScanError::Write)?;
    }
    scanner.finish(&mut emitter).map_err(ScanError::Write)?;

    debug!(path = %path.display(), matches = emitter.emitted, "file scanned");
    Ok(emitter.emitted)
}

/// 按参数顺序依次扫描多个文件（严格串行）
/// - 单个文件打不开/读失败：记录 error 日志后跳过，继续后续文件
/// - 输出端写失败：整体报错返回
pub fn scan_files(paths: &[PathBuf], cfg: &ScanConfig, out: &mut dyn Write) -> Result<ScanStats> {
    let mut stats = ScanStats::default();
    for path in paths {
        match scan_file(path, cfg, out) {
            Ok(emitted) => {
                stats.files_scanned += 1;
                stats.matches_emitted += emitted;
            }
            Err(e @ ScanError::Write(_)) => return Err(e.into()),
            Err(e) => {
                error!("{e}");
                stats.files_failed += 1;
            }
        }
    }
    Ok(stats)
}

#[cfg(test)]
mod tests {
    use super::{scan_file, scan_files, Scanner};
    use crate::config::{OffsetRadix, ScanConfig};
    use crate::emit::MatchSink;
    use std::io::{self, Write as _};
    use std::path::PathBuf;
    use tempfile::NamedTempFile;

    #[derive(Default)]
    struct Collect {
        matches: Vec<(String, u64)>,
    }

    impl MatchSink for Collect {
        fn emit(&mut self, text: &[u8], start_offset: u64) -> io::Result<()> {
            self.matches
                .push((String::from_utf8_lossy(text).into_owned(), start_offset));
            Ok(())
        }
    }

    fn fixture(data: &[u8]) -> NamedTempFile {
        let mut f = NamedTempFile::new().unwrap();
        f.write_all(data).unwrap();
        f.flush().unwrap();
        f
    }

    fn scan_to_string(data: &[u8], cfg: &ScanConfig) -> String {
        let f = fixture(data);
        let mut out: Vec<u8> = Vec::new();
        scan_file(f.path(), cfg, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn runs_span_feed_boundaries() {
        let mut scanner = Scanner::new(4);
        let mut sink = Collect::default();
        scanner.feed(b"\x00\x00he", &mut sink).unwrap();
        scanner.feed(b"llo", &mut sink).unwrap();
        scanner.feed(b"\x01", &mut sink).unwrap();
        scanner.finish(&mut sink).unwrap();
        assert_eq!(sink.matches, vec![("hello".to_string(), 2)]);
    }

    #[test]
    fn both_tracks_advance_in_lockstep() {
        // "hello" 结尾的 o 与其后的 NUL 在双字节轨里配了对，
        // 和后面的 h\0e\0y\0o\0 连成一条交错运行
        let data = b"abc\x01hello\x00h\x00e\x00y\x00o\x00\x02";
        let got = scan_to_string(data, &ScanConfig::default());
        assert_eq!(got, "hello\noheyo\n");
    }

    #[test]
    fn offset_column_uses_configured_radix() {
        let cfg = ScanConfig {
            offset_radix: Some(OffsetRadix::Decimal),
            ..Default::default()
        };
        let got = scan_to_string(b"\x00\x01\x02\x03\x04ABCDEF", &cfg);
        assert_eq!(got, "      5 ABCDEF\n");
    }

    #[test]
    fn min_len_zero_is_clamped_to_one() {
        let cfg = ScanConfig {
            min_len: 0,
            ..Default::default()
        };
        let got = scan_to_string(b"\x01a\x02", &cfg);
        assert_eq!(got, "a\n");
    }

    #[test]
    fn scanning_twice_is_byte_identical() {
        let data = b"noise\x00\x01w\x00o\x00r\x00d\x00\x02tail";
        let cfg = ScanConfig::default();
        let first = scan_to_string(data, &cfg);
        let second = scan_to_string(data, &cfg);
        assert_eq!(first, second);
        assert_eq!(first, "noise\nword\ntail\n");
    }

    #[test]
    fn batch_skips_unreadable_files_and_continues() {
        let f = fixture(b"\x00good string\x00");
        let paths = vec![PathBuf::from("/no/such/file.bin"), f.path().to_path_buf()];
        let mut out: Vec<u8> = Vec::new();
        let stats = scan_files(&paths, &ScanConfig::default(), &mut out).unwrap();
        assert_eq!(stats.files_scanned, 1);
        assert_eq!(stats.files_failed, 1);
        assert_eq!(stats.matches_emitted, 1);
        assert_eq!(String::from_utf8(out).unwrap(), "good string\n");
    }
}
