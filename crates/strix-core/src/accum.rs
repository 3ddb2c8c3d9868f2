//! 候选串累积缓冲
//!
//! 原型中的手工 init/realloc/free 生命周期在这里交给 Vec：几何扩容、
//! 作用域结束自动释放；reset 只清长度不放容量，避免大量短运行反复分配。

/// 一条轨的在途候选串
#[derive(Debug)]
pub(crate) struct Candidate {
    bytes: Vec<u8>,
    start_offset: u64,
}

impl Candidate {
    pub(crate) fn new() -> Self {
        Self {
            bytes: Vec::with_capacity(128),
            start_offset: 0,
        }
    }

    /// 追加一个字符；缓冲由空变非空的那一刻记录起始偏移，
    /// 之后保持不变直到 reset
    pub(crate) fn append(&mut self, pos: u64, b: u8) {
        if self.bytes.is_empty() {
            self.start_offset = pos;
        }
        self.bytes.push(b);
    }

    /// 清空长度；容量保留。start_offset 成为陈旧值，下次 append 会重新记录
    pub(crate) fn reset(&mut self) {
        self.bytes.clear();
    }

    pub(crate) fn len(&self) -> usize {
        self.bytes.len()
    }

    pub(crate) fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub(crate) fn start_offset(&self) -> u64 {
        self.start_offset
    }
}
