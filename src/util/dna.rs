/// 归一化核酸序列：转大写，U→T，其余字节（含 IUPAC 码）原样保留。
///
/// 参考与 read 必须经过同一归一化，否则大小写差异会造成种子查找失败。
pub fn normalize_seq(seq: &[u8]) -> Vec<u8> {
    seq.iter().map(|&b| normalize_base(b)).collect()
}

#[inline]
pub fn normalize_base(b: u8) -> u8 {
    match b.to_ascii_uppercase() {
        b'U' => b'T',
        up => up,
    }
}

/// 参考中的 gap 碱基；含 gap 的窗口不进入索引
pub const GAP: u8 = b'N';

/// 序列中非 ACGT 碱基的数量
pub fn count_ambiguous(seq: &[u8]) -> usize {
    seq.iter()
        .filter(|&&b| !matches!(b.to_ascii_uppercase(), b'A' | b'C' | b'G' | b'T'))
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_folds_case_and_rna() {
        assert_eq!(normalize_seq(b"acgtU"), b"ACGTT");
        assert_eq!(normalize_seq(b"ACRYn-"), b"ACRYN-");
        assert_eq!(normalize_seq(b"mkvlzz"), b"MKVLZZ");
        assert!(normalize_seq(b"").is_empty());
    }

    #[test]
    fn ambiguous_bases_are_counted() {
        assert_eq!(count_ambiguous(b"acgt"), 0);
        assert_eq!(count_ambiguous(b"ACNNR"), 3);
    }
}
