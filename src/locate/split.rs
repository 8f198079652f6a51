use serde::Serialize;

use crate::error::{Result, SeedError};
use crate::index::SequenceIndex;

/// 产生定位结果的种子（read 的前半或后半）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Seed {
    First,
    Second,
}

/// 定位结果
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Hit {
    /// read 在参考上的 1-based 起始位置
    pub position: usize,
    pub seed: Seed,
    /// 种子在参考中出现多次，位置取自最后一次出现
    pub ambiguous: bool,
}

/// 分半种子定位。
///
/// 将 read 前 `2k` 个字符切成两个相邻的 k-mer。至多一个替换只能破坏其中一半，
/// 所以另一半必然精确出现在参考中：
/// - 前半命中位置 `p1`，read 起点即 `p1`；
/// - 否则后半命中位置 `p2`，read 起点为 `p2 - k`；
/// - 两半均未命中返回 `Ok(None)`（多于一个错误，或 read 不在参考中，二者不可区分）。
///
/// 只有前 `2k` 个字符受容错保证，之后的错误不会被检查。
pub fn locate(index: &SequenceIndex, read: &[u8]) -> Result<Option<Hit>> {
    let k = index.key_length();
    let required = 2 * k;
    if read.len() < required {
        return Err(SeedError::MalformedRead { read_len: read.len(), required });
    }

    let (first, second) = read[..required].split_at(k);

    if let Some(p1) = index.lookup(first) {
        return Ok(Some(Hit {
            position: p1,
            seed: Seed::First,
            ambiguous: index.multiplicity(first) > 1,
        }));
    }

    // 后半命中于参考前 k 个位置时，推得的起点落在参考之外
    let hit = index.lookup(second).and_then(|p2| p2.checked_sub(k)).filter(|&p| p > 0).map(|p| Hit {
        position: p,
        seed: Seed::Second,
        ambiguous: index.multiplicity(second) > 1,
    });
    Ok(hit)
}
