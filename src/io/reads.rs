use anyhow::{anyhow, bail, Result};
use std::io::{Cursor, Read};

use super::fasta::{split_header, FastaReader};

/// 待定位的 read
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReadRecord {
    pub id: String,
    pub seq: Vec<u8>,
}

/// read 文件格式，按首个非空行嗅探
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadFormat {
    Fastq,
    Fasta,
    /// 每行一条序列，`#` 开头为注释
    Lines,
}

impl ReadFormat {
    pub fn sniff(text: &str) -> Self {
        let first = text
            .lines()
            .map(str::trim)
            .find(|l| !l.is_empty() && !l.starts_with('#'));
        match first.and_then(|l| l.bytes().next()) {
            Some(b'@') => ReadFormat::Fastq,
            Some(b'>') => ReadFormat::Fasta,
            _ => ReadFormat::Lines,
        }
    }
}

/// 读入全部 read。批量定位需要随机访问，因此一次性载入内存。
pub fn read_all<R: Read>(mut reader: R) -> Result<(ReadFormat, Vec<ReadRecord>)> {
    let mut text = String::new();
    reader.read_to_string(&mut text)?;

    let format = ReadFormat::sniff(&text);
    let reads = match format {
        ReadFormat::Fastq => parse_fastq(&text)?,
        ReadFormat::Fasta => FastaReader::new(Cursor::new(text.as_bytes()))
            .map(|rec| rec.map(|r| ReadRecord { id: r.id, seq: r.seq }))
            .collect::<Result<Vec<_>>>()?,
        ReadFormat::Lines => parse_lines(&text),
    };
    Ok((format, reads))
}

fn parse_lines(text: &str) -> Vec<ReadRecord> {
    text.lines()
        .map(str::trim)
        .filter(|l| !l.is_empty() && !l.starts_with('#'))
        .enumerate()
        .map(|(i, l)| ReadRecord { id: format!("read{}", i + 1), seq: l.as_bytes().to_vec() })
        .collect()
}

fn parse_fastq(text: &str) -> Result<Vec<ReadRecord>> {
    let mut reads = Vec::new();
    // 记录之间允许空行与 `#` 注释行
    let mut lines = text.lines().map(|l| l.trim_end_matches('\r'));

    while let Some(header) = lines.by_ref().find(|l| !l.trim().is_empty() && !l.starts_with('#')) {
        let n = reads.len() + 1;
        let header = header
            .strip_prefix('@')
            .ok_or_else(|| anyhow!("FASTQ record {}: header not starting with '@'", n))?;
        let (id, _) = split_header(header.trim());

        let seq = lines
            .next()
            .ok_or_else(|| anyhow!("FASTQ record {} ('{}'): unexpected EOF after header", n, id))?
            .trim();
        match lines.next() {
            Some(plus) if plus.starts_with('+') => {}
            _ => bail!("FASTQ record {} ('{}'): missing '+' line", n, id),
        }
        let qual = lines
            .next()
            .ok_or_else(|| anyhow!("FASTQ record {} ('{}'): missing quality line", n, id))?
            .trim();
        if qual.len() != seq.len() {
            bail!("FASTQ record {} ('{}'): seq/qual length mismatch", n, id);
        }

        reads.push(ReadRecord { id, seq: seq.as_bytes().to_vec() });
    }
    Ok(reads)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn load(data: &str) -> (ReadFormat, Vec<ReadRecord>) {
        read_all(data.as_bytes()).unwrap()
    }

    #[test]
    fn plain_lines_get_sequential_ids() {
        let (fmt, reads) = load("# reads\nccggcctcgggaag\n\n  ttgcggacgctagc \n");
        assert_eq!(fmt, ReadFormat::Lines);
        assert_eq!(reads.len(), 2);
        assert_eq!(reads[0].id, "read1");
        assert_eq!(reads[0].seq, b"ccggcctcgggaag");
        assert_eq!(reads[1].id, "read2");
        assert_eq!(reads[1].seq, b"ttgcggacgctagc");
    }

    #[test]
    fn fastq_records() {
        let (fmt, reads) = load("@r1 lane1\nACGT\n+\nIIII\n\n@r2\r\nGG\r\n+r2\r\n!!\r\n");
        assert_eq!(fmt, ReadFormat::Fastq);
        assert_eq!(reads.len(), 2);
        assert_eq!(reads[0].id, "r1");
        assert_eq!(reads[0].seq, b"ACGT");
        assert_eq!(reads[1].id, "r2");
        assert_eq!(reads[1].seq, b"GG");
    }

    #[test]
    fn fastq_with_leading_comment() {
        let (fmt, reads) = load("# run 42\n@r1\nACGT\n+\n#III\n# between\n@r2\nGG\n+\n##\n");
        assert_eq!(fmt, ReadFormat::Fastq);
        assert_eq!(reads.len(), 2);
        assert_eq!(reads[0].seq, b"ACGT");
        assert_eq!(reads[1].id, "r2");
    }

    #[test]
    fn fastq_errors_name_the_record() {
        let err = read_all("@r1\nACGT\n+\nII\n".as_bytes()).unwrap_err();
        assert!(err.to_string().contains("seq/qual length mismatch"));
        assert!(err.to_string().contains("r1"));

        let err = read_all("@r1\nACGT\nIIII\n".as_bytes()).unwrap_err();
        assert!(err.to_string().contains("missing '+' line"));

        let err = read_all("@r1\nACGT\n+\nIIII\nACGT\n".as_bytes()).unwrap_err();
        assert!(err.to_string().contains("header not starting with '@'"));
    }

    #[test]
    fn fasta_reads() {
        let (fmt, reads) = load(">q1\nccggcct\ncgggaag\n>q2\nttgcggacgctagc\n");
        assert_eq!(fmt, ReadFormat::Fasta);
        assert_eq!(reads[0].id, "q1");
        assert_eq!(reads[0].seq, b"ccggcctcgggaag");
        assert_eq!(reads[1].id, "q2");
    }

    #[test]
    fn empty_input() {
        let (fmt, reads) = load("");
        assert_eq!(fmt, ReadFormat::Lines);
        assert!(reads.is_empty());
    }
}
