//! 扫描选项与统计信息（模块）

/// 偏移列的进制
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OffsetRadix {
    Octal,
    Decimal,
    Hex,
}

/// 扫描选项
/// - 单次扫描期间不可变，由调用方以只读引用共享
#[derive(Debug, Clone)]
pub struct ScanConfig {
    /// 最小命中长度（配置层面应保证 >= 1；扫描器内部再兜底钳制一次）
    pub min_len: usize,
    /// 偏移列进制；None 表示不输出偏移列
    pub offset_radix: Option<OffsetRadix>,
    /// 是否在每条命中前输出 "<文件名>: "
    pub show_source_name: bool,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            min_len: 4,
            offset_radix: None,
            show_source_name: false,
        }
    }
}

/// 批量扫描统计信息（便于 CLI 打印）
#[derive(Debug, Default, Clone)]
pub struct ScanStats {
    pub files_scanned: usize,
    pub files_failed: usize,
    pub matches_emitted: usize,
}
