use anyhow::Result;
use std::io::BufRead;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FastaRecord {
    pub id: String,
    pub desc: Option<String>,
    pub seq: Vec<u8>,
}

/// 逐条产出 FASTA 记录。序列行中的空白与 CR 被去掉，大小写保持原样
/// （大小写归一化由 [`crate::util::dna::normalize_seq`] 负责）。
pub struct FastaReader<R: BufRead> {
    reader: R,
    line: String,
    pending: Option<String>,
    done: bool,
}

impl<R: BufRead> FastaReader<R> {
    pub fn new(reader: R) -> Self {
        Self { reader, line: String::new(), pending: None, done: false }
    }

    /// 上一条记录之后已读到下一个 header，即还有未解析的记录（不触发额外 I/O）
    pub fn has_pending_record(&self) -> bool {
        self.pending.is_some()
    }

    fn read_line(&mut self) -> Result<bool> {
        self.line.clear();
        Ok(self.reader.read_line(&mut self.line)? != 0)
    }

    fn next_header(&mut self) -> Result<Option<String>> {
        if let Some(h) = self.pending.take() {
            return Ok(Some(h));
        }
        // 跳过第一个 '>' 之前的内容
        while self.read_line()? {
            if let Some(h) = self.line.strip_prefix('>') {
                return Ok(Some(h.trim().to_string()));
            }
        }
        Ok(None)
    }

    fn read_record(&mut self) -> Result<Option<FastaRecord>> {
        let header = match self.next_header()? {
            Some(h) => h,
            None => return Ok(None),
        };
        let (id, desc) = split_header(&header);

        let mut seq = Vec::new();
        loop {
            if !self.read_line()? {
                self.done = true;
                break;
            }
            if let Some(h) = self.line.strip_prefix('>') {
                self.pending = Some(h.trim().to_string());
                break;
            }
            seq.extend(self.line.bytes().filter(|b| !b.is_ascii_whitespace()));
        }

        Ok(Some(FastaRecord { id, desc, seq }))
    }
}

impl<R: BufRead> Iterator for FastaReader<R> {
    type Item = Result<FastaRecord>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done && self.pending.is_none() {
            return None;
        }
        match self.read_record() {
            Ok(Some(rec)) => Some(Ok(rec)),
            Ok(None) => {
                self.done = true;
                None
            }
            Err(e) => {
                self.done = true;
                Some(Err(e))
            }
        }
    }
}

/// 将 header 拆成 id（首个空白前）与可选描述
pub(crate) fn split_header(header: &str) -> (String, Option<String>) {
    let mut parts = header.splitn(2, char::is_whitespace);
    let id = parts.next().unwrap_or("").to_string();
    let desc = parts.next().map(|s| s.trim().to_string()).filter(|s| !s.is_empty());
    (id, desc)
}
