//! 内置数据集：Homo sapiens ABO 基因启动子区部分序列（allele B3）。
//!
//! 来源：<http://www.ncbi.nlm.nih.gov/nuccore/LC068776.1>

/// GenBank 排版（每 10 碱基一组）
const ABO_LINES: [&str; 3] = [
    "ggccgcctcc cgcgcccctc tgtcccctcc cgtgttcggc ctcgggaagt cggggcggcg",
    "ggcggcgcgg gccgggaggg gtcgcctcgg gctcaccccg ccccagggcc gccgggcgga",
    "aggcggaggc cgagaccaga cgcggagcca tggccgaggt gttgcggacg ctggccg",
];

pub const ABO_NAME: &str = "LC068776.1";

/// 默认 key_length
pub const ABO_KEY_LENGTH: usize = 7;

/// (read, 期望的 1-based 位置)。第二条相对参考含一个替换。
pub const ABO_READS: [(&str, usize); 5] = [
    ("ccggcctcgggaag", 36),
    ("ttgcggacgctagc", 162),
    ("tcgggctccccccg", 87),
    ("ggggggaaggcgga", 114),
    ("tctgtccccccccg", 19),
];

/// 177 bp 小写参考序列
pub fn abo_reference() -> Vec<u8> {
    ABO_LINES
        .iter()
        .flat_map(|line| line.bytes())
        .filter(|b| !b.is_ascii_whitespace())
        .collect()
}
