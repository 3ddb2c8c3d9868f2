//! 双轨运行检测状态机
//!
//! 两条轨各自独立持有候选缓冲，由驱动层逐字节同步推进：
//! - 单字节轨：可打印即累积，遇中断字节冲刷。
//! - 双字节轨：显式 ExpectChar/ExpectNull 两态。可打印字符先悬挂，
//!   其 NUL 搭档到达才提交进候选。配对失败时冲刷候选，并把失败字节
//!   当作新的 ExpectChar 输入在同一步内重新判定一次（单次额外分派，
//!   不是重试循环）——失败的终止字节本身可能是下一个字符对的开头。

use std::io;

use crate::accum::Candidate;
use crate::classify::is_printable;
use crate::emit::MatchSink;

/// 单字节（8 位）轨：候选缓冲之外没有额外状态
pub(crate) struct AsciiTrack {
    cand: Candidate,
}

impl AsciiTrack {
    pub(crate) fn new() -> Self {
        Self {
            cand: Candidate::new(),
        }
    }

    pub(crate) fn step(
        &mut self,
        b: u8,
        pos: u64,
        min_len: usize,
        sink: &mut dyn MatchSink,
    ) -> io::Result<()> {
        if is_printable(b) {
            self.cand.append(pos, b);
            Ok(())
        } else {
            flush(&mut self.cand, min_len, sink)
        }
    }

    /// 流结束：可打印运行可能一直延伸到最后一个字节，需再冲刷一次
    pub(crate) fn finish(&mut self, min_len: usize, sink: &mut dyn MatchSink) -> io::Result<()> {
        flush(&mut self.cand, min_len, sink)
    }
}

/// 双字节轨的配对状态
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PairState {
    ExpectChar,
    ExpectNull,
}

/// 双字节（可打印字符 + NUL 交错）轨
pub(crate) struct WideTrack {
    cand: Candidate,
    state: PairState,
    pending_char: u8,
    pending_start: u64,
}

impl WideTrack {
    pub(crate) fn new() -> Self {
        Self {
            cand: Candidate::new(),
            state: PairState::ExpectChar,
            pending_char: 0,
            pending_start: 0,
        }
    }

    pub(crate) fn step(
        &mut self,
        b: u8,
        pos: u64,
        min_len: usize,
        sink: &mut dyn MatchSink,
    ) -> io::Result<()> {
        match self.state {
            PairState::ExpectChar => self.expect_char(b, pos, min_len, sink),
            PairState::ExpectNull => {
                if b == 0x00 {
                    // 配对确认：此刻才提交悬挂字符，偏移取悬挂字符所在处
                    self.cand.append(self.pending_start, self.pending_char);
                    self.state = PairState::ExpectChar;
                    Ok(())
                } else {
                    // 配对失败：本次交错运行到此为止。失败字节不丢弃，
                    // 立即按 ExpectChar 的规则重新判定它
                    flush(&mut self.cand, min_len, sink)?;
                    self.state = PairState::ExpectChar;
                    self.expect_char(b, pos, min_len, sink)
                }
            }
        }
    }

    /// ExpectChar 态的转移：可打印则悬挂等待 NUL，否则运行中断
    fn expect_char(
        &mut self,
        b: u8,
        pos: u64,
        min_len: usize,
        sink: &mut dyn MatchSink,
    ) -> io::Result<()> {
        if is_printable(b) {
            self.pending_char = b;
            self.pending_start = pos;
            self.state = PairState::ExpectNull;
            Ok(())
        } else {
            flush(&mut self.cand, min_len, sink)
        }
    }

    /// 流结束：未确认的悬挂字符直接丢弃（NUL 搭档始终没有出现，语义不完整），
    /// 之后冲刷候选
    pub(crate) fn finish(&mut self, min_len: usize, sink: &mut dyn MatchSink) -> io::Result<()> {
        self.state = PairState::ExpectChar;
        flush(&mut self.cand, min_len, sink)
    }
}

/// 运行中断的公共路径：达到最小长度则输出，随后无条件复位候选
fn flush(cand: &mut Candidate, min_len: usize, sink: &mut dyn MatchSink) -> io::Result<()> {
    if cand.len() >= min_len {
        sink.emit(cand.bytes(), cand.start_offset())?;
    }
    cand.reset();
    Ok(())
}
