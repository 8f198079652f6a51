use anyhow::{anyhow, bail, Result};
use std::io::BufRead;

use crate::io::fasta::FastaReader;

/// 只读参考序列，构建后不再修改
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reference {
    pub name: String,
    pub seq: Vec<u8>,
}

impl Reference {
    pub fn new(name: impl Into<String>, seq: Vec<u8>) -> Self {
        Self { name: name.into(), seq }
    }

    /// 打开 FASTA 文件并读取第一条记录
    pub fn from_fasta_path(path: &str) -> Result<Self> {
        let fh = std::fs::File::open(path).map_err(|e| anyhow!("cannot open reference FASTA '{}': {}", path, e))?;
        Self::from_fasta(std::io::BufReader::new(fh))
            .map_err(|e| anyhow!("cannot read reference FASTA '{}': {}", path, e))
    }

    /// 从 FASTA 读取第一条记录作为参考；其余记录不再解析，仅给出警告。
    pub fn from_fasta<R: BufRead>(reader: R) -> Result<Self> {
        let mut records = FastaReader::new(reader);
        let first = match records.next() {
            Some(rec) => rec?,
            None => bail!("FASTA input contains no sequences"),
        };
        if first.seq.is_empty() {
            bail!("FASTA record '{}' has an empty sequence", first.id);
        }

        if records.has_pending_record() {
            log::warn!("using only the first FASTA record '{}'; further records ignored", first.id);
        }

        Ok(Self { name: first.id, seq: first.seq })
    }

    pub fn len(&self) -> usize {
        self.seq.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seq.is_empty()
    }
}
