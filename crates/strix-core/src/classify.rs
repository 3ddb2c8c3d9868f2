//! 可打印性判定

/// 判定单个字节是否算作“文本”：可打印 7 位 ASCII，不含控制字符与 DEL。
/// 两条轨共用这一唯一定义。
#[inline]
pub(crate) fn is_printable(b: u8) -> bool {
    (0x20..=0x7E).contains(&b)
}

#[cfg(test)]
mod tests {
    use super::is_printable;

    #[test]
    fn boundary_bytes() {
        assert!(!is_printable(0x1F));
        assert!(is_printable(0x20));
        assert!(is_printable(0x7E));
        assert!(!is_printable(0x7F));
        assert!(!is_printable(0x00));
        assert!(!is_printable(0xFF));
    }

    #[test]
    fn control_bytes_are_not_text() {
        assert!(is_printable(b'A'));
        assert!(is_printable(b' '));
        // 与 GNU strings 不同：制表符与换行不算可打印
        assert!(!is_printable(b'\t'));
        assert!(!is_printable(b'\n'));
    }
}
