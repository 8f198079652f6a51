use anyhow::{anyhow, Result};
use rayon::prelude::*;

use super::split::{locate, Hit};
use crate::error;
use crate::index::SequenceIndex;

/// 单条 read 的定位结果
pub type Outcome = error::Result<Option<Hit>>;

/// 批量定位，结果顺序与输入一致。
///
/// 索引构建后只读，`threads > 1` 时在独立的 rayon 线程池中并发查找，无需加锁。
pub fn locate_batch<T>(index: &SequenceIndex, reads: &[T], threads: usize) -> Result<Vec<Outcome>>
where
    T: AsRef<[u8]> + Sync,
{
    if threads <= 1 {
        return Ok(reads.iter().map(|r| locate(index, r.as_ref())).collect());
    }

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(threads)
        .build()
        .map_err(|e| anyhow!("cannot start a pool of {} threads: {}", threads, e))?;
    Ok(pool.install(|| reads.par_iter().map(|r| locate(index, r.as_ref())).collect()))
}
