pub mod batch;
pub mod split;

pub use batch::{locate_batch, Outcome};
pub use split::{locate, Hit, Seed};

use anyhow::{anyhow, Result};
use serde::Serialize;
use std::io::{Read, Write};

use crate::error::SeedError;
use crate::index::{IndexStats, Reference, SequenceIndex};
use crate::io::reads::{self, ReadRecord};
use crate::util::dna;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Tsv,
    Json,
}

/// 定位参数
#[derive(Debug, Clone, Serialize)]
pub struct LocateOpt {
    pub key_length: usize,
    pub threads: usize,
    pub format: OutputFormat,
}

impl Default for LocateOpt {
    fn default() -> Self {
        Self { key_length: crate::dataset::ABO_KEY_LENGTH, threads: 1, format: OutputFormat::Tsv }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    Found,
    NotFound,
    Malformed,
}

/// 单条 read 的输出记录
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReadResult {
    pub read_id: String,
    pub status: Status,
    pub position: Option<usize>,
    pub seed: Option<Seed>,
    pub ambiguous: bool,
    pub detail: Option<String>,
}

impl ReadResult {
    pub fn new(read_id: &str, outcome: &Outcome) -> Self {
        let (status, hit, detail) = match outcome {
            Ok(Some(hit)) => (Status::Found, Some(*hit), None),
            Ok(None) => (Status::NotFound, None, None),
            Err(e) => (Status::Malformed, None, Some(e.to_string())),
        };
        Self {
            read_id: read_id.to_string(),
            status,
            position: hit.map(|h| h.position),
            seed: hit.map(|h| h.seed),
            ambiguous: hit.is_some_and(|h| h.ambiguous),
            detail,
        }
    }
}

/// 运行头信息（JSON 首行 / TSV 注释行）
#[derive(Debug, Clone, Serialize)]
pub struct RunHeader {
    pub reference: String,
    pub run_at: String,
    pub opt: LocateOpt,
    pub index: IndexStats,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub total: usize,
    pub found: usize,
    pub not_found: usize,
    pub malformed: usize,
    pub ambiguous: usize,
}

impl Summary {
    pub fn tally(results: &[ReadResult]) -> Self {
        let mut s = Summary { total: results.len(), ..Default::default() };
        for r in results {
            match r.status {
                Status::Found => s.found += 1,
                Status::NotFound => s.not_found += 1,
                Status::Malformed => s.malformed += 1,
            }
            if r.ambiguous {
                s.ambiguous += 1;
            }
        }
        s
    }
}

#[derive(Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
enum JsonLine<'a> {
    Header(&'a RunHeader),
    Read(&'a ReadResult),
}

/// 建索引：参考与 read 统一经 [`dna::normalize_seq`] 归一化。
/// 含 [`dna::GAP`] 的窗口不入表，因此含 gap 的种子不会命中。
pub fn build_index(reference: &Reference, key_length: usize) -> Result<SequenceIndex> {
    let norm = dna::normalize_seq(&reference.seq);
    let index = SequenceIndex::build_skipping(&norm, key_length, dna::GAP)
        .map_err(|e| anyhow!("cannot index reference '{}': {}", reference.name, e))?;

    let stats = index.stats();
    log::info!(
        "indexed '{}': {} bp, k={}, {} windows, {} distinct keys",
        reference.name,
        stats.reference_len,
        stats.key_length,
        stats.windows,
        stats.distinct_keys
    );
    if stats.repeated_keys > 0 {
        log::warn!(
            "{} key(s) occur more than once in '{}'; their hits report the last occurrence",
            stats.repeated_keys,
            reference.name
        );
    }
    if stats.reference_len < 2 * key_length {
        log::warn!(
            "reference '{}' is shorter than 2 x key_length ({}); no read can be placed",
            reference.name,
            2 * key_length
        );
    }
    let n_amb = dna::count_ambiguous(&norm);
    if n_amb > 0 {
        log::debug!(
            "reference '{}' contains {} non-ACGT byte(s); {} window(s) spanning gaps skipped",
            reference.name,
            n_amb,
            stats.skipped_windows
        );
    }
    Ok(index)
}

/// 对一组 read 做定位并生成输出记录
pub fn locate_records(index: &SequenceIndex, records: &[ReadRecord], threads: usize) -> Result<Vec<ReadResult>> {
    let seqs: Vec<Vec<u8>> = records.iter().map(|r| dna::normalize_seq(&r.seq)).collect();
    let outcomes = locate_batch(index, &seqs, threads)?;

    let mut results = Vec::with_capacity(records.len());
    for (rec, outcome) in records.iter().zip(&outcomes) {
        match outcome {
            Err(e @ SeedError::MalformedRead { .. }) => log::warn!("read '{}': {}", rec.id, e),
            Ok(None) => log::debug!("read '{}': no seed matched", rec.id),
            _ => {}
        }
        results.push(ReadResult::new(&rec.id, outcome));
    }
    Ok(results)
}

pub fn write_results<W: Write>(
    out: &mut W,
    format: OutputFormat,
    header: &RunHeader,
    results: &[ReadResult],
) -> Result<()> {
    match format {
        OutputFormat::Tsv => {
            writeln!(
                out,
                "#reference={}\tkey_length={}\trun_at={}",
                header.reference, header.opt.key_length, header.run_at
            )?;
            writeln!(out, "#read_id\tstatus\tposition\tseed\tambiguous\tdetail")?;
            for r in results {
                writeln!(out, "{}", tsv_line(r))?;
            }
        }
        OutputFormat::Json => {
            serde_json::to_writer(&mut *out, &JsonLine::Header(header))?;
            writeln!(out)?;
            for r in results {
                serde_json::to_writer(&mut *out, &JsonLine::Read(r))?;
                writeln!(out)?;
            }
        }
    }
    out.flush()?;
    Ok(())
}

fn tsv_line(r: &ReadResult) -> String {
    let status = match r.status {
        Status::Found => "found",
        Status::NotFound => "not_found",
        Status::Malformed => "malformed",
    };
    let position = r.position.map_or_else(|| "*".to_string(), |p| p.to_string());
    let seed = match r.seed {
        Some(Seed::First) => "first",
        Some(Seed::Second) => "second",
        None => "*",
    };
    let ambiguous = if r.ambiguous { "yes" } else { "no" };
    let detail = r.detail.as_deref().unwrap_or("*");
    format!("{}\t{}\t{}\t{}\t{}\t{}", r.read_id, status, position, seed, ambiguous, detail)
}

/// 从任意 `Read` 读入 read 集合，定位后把结果写到 `out`。
/// `source` 只用于日志与错误信息。
pub fn locate_reads_from<R: Read, W: Write>(
    reference: &Reference,
    reads: R,
    source: &str,
    out: &mut W,
    opt: &LocateOpt,
) -> Result<Summary> {
    let index = build_index(reference, opt.key_length)?;

    let (format, records) =
        reads::read_all(reads).map_err(|e| anyhow!("cannot parse reads '{}': {}", source, e))?;
    log::info!("loaded {} read(s) from '{}' ({:?})", records.len(), source, format);

    let results = locate_records(&index, &records, opt.threads)?;
    let header = RunHeader {
        reference: reference.name.clone(),
        run_at: chrono::Utc::now().to_rfc3339(),
        index: index.stats(),
        opt: opt.clone(),
    };
    write_results(out, opt.format, &header, &results)?;

    let summary = Summary::tally(&results);
    log::info!(
        "{} read(s): {} found ({} ambiguous), {} not found, {} malformed",
        summary.total,
        summary.found,
        summary.ambiguous,
        summary.not_found,
        summary.malformed
    );
    Ok(summary)
}

/// 读入 read 文件（`-` 表示 stdin），定位后写到 `out_path`（缺省 stdout）
pub fn locate_reads_with_opt(
    reference: &Reference,
    reads_path: &str,
    out_path: Option<&str>,
    opt: LocateOpt,
) -> Result<Summary> {
    let input: Box<dyn Read> = if reads_path == "-" {
        Box::new(std::io::stdin().lock())
    } else {
        let fh = std::fs::File::open(reads_path)
            .map_err(|e| anyhow!("cannot open reads '{}': {}", reads_path, e))?;
        Box::new(std::io::BufReader::new(fh))
    };

    let mut out: Box<dyn Write> = if let Some(p) = out_path {
        let fh = std::fs::File::create(p).map_err(|e| anyhow!("cannot create output '{}': {}", p, e))?;
        Box::new(std::io::BufWriter::new(fh))
    } else {
        Box::new(std::io::BufWriter::new(std::io::stdout()))
    };

    locate_reads_from(reference, input, reads_path, &mut out, &opt)
}

/// 用内置 ABO 数据集自检：逐条定位并与期望位置比较，写出 ok / FAIL 行。
/// `key_length` 不为 7 时期望位置未必成立，失败会如实报告。
pub fn run_selftest<W: Write>(key_length: usize, out: &mut W) -> Result<()> {
    let reference = crate::dataset::abo_reference();
    let index = SequenceIndex::build(&reference, key_length)
        .map_err(|e| anyhow!("cannot index built-in {}: {}", crate::dataset::ABO_NAME, e))?;

    let mut failed = 0usize;
    for (read, expected) in crate::dataset::ABO_READS {
        match locate(&index, read.as_bytes()) {
            Ok(Some(hit)) if hit.position == expected => writeln!(out, "ok\t{}\t{}", read, expected)?,
            Ok(got) => {
                failed += 1;
                let got = got.map_or_else(|| "not found".to_string(), |h| h.position.to_string());
                writeln!(out, "FAIL\t{}\texpected {}, got {}", read, expected, got)?;
            }
            Err(e) => {
                failed += 1;
                writeln!(out, "FAIL\t{}\t{}", read, e)?;
            }
        }
    }
    out.flush()?;

    let total = crate::dataset::ABO_READS.len();
    if failed > 0 {
        anyhow::bail!("{} of {} self-test read(s) failed with key length {}", failed, total, key_length);
    }
    writeln!(out, "all {} self-test reads located", total)?;
    Ok(())
}
