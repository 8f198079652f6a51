use rustc_hash::FxHashMap;
use serde::Serialize;

use crate::error::{Result, SeedError};

/// 单个 k-mer 在哈希表中的记录
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Slot {
    /// 最后一次出现的 1-based 起始位置
    pos: usize,
    /// 在参考中出现的次数
    count: u32,
}

/// 定长子串（k-mer）索引：
/// - 参考中每个长度为 `key_length` 的窗口映射到其 1-based 起始位置。
/// - 重复的 k-mer 采用 last-write-wins（从左到右扫描，后出现的覆盖先出现的），
///   同时记录出现次数，便于调用方判断位置是否有歧义。
/// - `key_length` 与索引绑定，查找时不再单独传入。
#[derive(Debug, Clone)]
pub struct SequenceIndex {
    key_length: usize,
    reference_len: usize,
    /// 因含 gap 字符而未入表的窗口数
    skipped: usize,
    table: FxHashMap<Vec<u8>, Slot>,
}

/// 索引概要，用于日志与 JSON 输出
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct IndexStats {
    pub key_length: usize,
    pub reference_len: usize,
    pub windows: usize,
    pub skipped_windows: usize,
    pub distinct_keys: usize,
    pub repeated_keys: usize,
}

impl SequenceIndex {
    /// 扫描参考序列构建索引。`key_length` 为 0 或超过参考长度时返回
    /// [`SeedError::InvalidParameter`]，不会返回部分构建的索引。
    pub fn build(reference: &[u8], key_length: usize) -> Result<Self> {
        Self::build_inner(reference, key_length, None)
    }

    /// 同 [`SequenceIndex::build`]，但跳过含 `gap` 字符的窗口，
    /// 使含 gap 的种子永远无法命中（如参考中的 N 区段）。
    pub fn build_skipping(reference: &[u8], key_length: usize, gap: u8) -> Result<Self> {
        Self::build_inner(reference, key_length, Some(gap))
    }

    fn build_inner(reference: &[u8], key_length: usize, gap: Option<u8>) -> Result<Self> {
        let n = reference.len();
        if key_length == 0 || key_length > n {
            return Err(SeedError::InvalidParameter { key_length, reference_len: n });
        }

        let windows = n - key_length + 1;
        let mut table: FxHashMap<Vec<u8>, Slot> = FxHashMap::default();
        table.reserve(windows);
        let mut skipped = 0usize;
        for (c, kmer) in reference.windows(key_length).enumerate() {
            if gap.is_some_and(|g| kmer.contains(&g)) {
                skipped += 1;
                continue;
            }
            table
                .entry(kmer.to_vec())
                .and_modify(|slot| {
                    slot.pos = c + 1;
                    slot.count += 1;
                })
                .or_insert(Slot { pos: c + 1, count: 1 });
        }

        Ok(Self { key_length, reference_len: n, skipped, table })
    }

    /// 返回 `key` 最后一次出现的 1-based 位置
    #[inline]
    pub fn lookup(&self, key: &[u8]) -> Option<usize> {
        self.table.get(key).map(|slot| slot.pos)
    }

    /// `key` 在参考中出现的次数（未出现为 0）
    #[inline]
    pub fn multiplicity(&self, key: &[u8]) -> u32 {
        self.table.get(key).map_or(0, |slot| slot.count)
    }

    pub fn key_length(&self) -> usize {
        self.key_length
    }

    pub fn reference_len(&self) -> usize {
        self.reference_len
    }

    /// 不同 k-mer 的数量
    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    /// 出现不止一次的 k-mer 数量；非 0 时部分查找结果只对应最后一次出现
    pub fn repeated_keys(&self) -> usize {
        self.table.values().filter(|slot| slot.count > 1).count()
    }

    pub fn stats(&self) -> IndexStats {
        IndexStats {
            key_length: self.key_length,
            reference_len: self.reference_len,
            windows: self.reference_len - self.key_length + 1,
            skipped_windows: self.skipped,
            distinct_keys: self.len(),
            repeated_keys: self.repeated_keys(),
        }
    }
}
