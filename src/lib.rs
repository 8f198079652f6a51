//! # seedloc
//!
//! 在一条参考序列中定位短 read，容忍每条 read 至多一个碱基替换。
//!
//! 本 crate 的核心是分半种子定位：
//!
//! - **索引构建**：对参考序列的每个长度为 `key_length` 的窗口建立 k-mer → 1-based 位置的哈希索引
//! - **种子定位**：将 read 前 `2 × key_length` 个字符切成两个相邻种子，
//!   至多一个替换只能破坏其中一个，另一个必定精确命中
//! - **批量定位**：索引只读，可在 rayon 线程池中并发查询
//!
//! ## 快速示例
//!
//! ```rust
//! use seedloc::index::SequenceIndex;
//! use seedloc::locate::locate;
//! use seedloc::dataset;
//!
//! let reference = dataset::abo_reference();
//! let index = SequenceIndex::build(&reference, 7).unwrap();
//!
//! // 含一个替换的 read
//! let hit = locate(&index, b"ttgcggacgctagc").unwrap().unwrap();
//! assert_eq!(hit.position, 162);
//! ```
//!
//! ## 模块说明
//!
//! - [`index`] — k-mer 索引与参考序列
//! - [`locate`] — 分半种子定位、批量定位与结果输出
//! - [`io`] — FASTA 参考与 read 集合（FASTQ / FASTA / 纯文本）解析
//! - [`util`] — 碱基归一化
//! - [`dataset`] — 内置 ABO 基因参考片段
//! - [`error`] — 核心错误类型

pub mod dataset;
pub mod error;
pub mod index;
pub mod io;
pub mod locate;
pub mod util;

pub use error::SeedError;
