//! 演示如何在 library 模式下使用 seedloc 定位 read。
//!
//! 运行方式：
//! ```bash
//! cargo run --example simple_locate
//! ```

use seedloc::dataset;
use seedloc::index::SequenceIndex;
use seedloc::locate::{locate, Seed};

fn main() -> anyhow::Result<()> {
    // 1. 参考序列：内置的 ABO 基因片段
    let reference = dataset::abo_reference();
    println!("参考序列: {} ({} bp)", dataset::ABO_NAME, reference.len());

    // 2. 构建 k-mer 索引
    let index = SequenceIndex::build(&reference, dataset::ABO_KEY_LENGTH)?;
    let stats = index.stats();
    println!(
        "索引构建完成：k={}, 窗口数={}, 不同 k-mer={}, 重复 k-mer={}",
        stats.key_length, stats.windows, stats.distinct_keys, stats.repeated_keys
    );

    // 3. 定位 read（允许一个替换）
    for (read, expected) in dataset::ABO_READS {
        match locate(&index, read.as_bytes())? {
            Some(hit) => {
                let seed = match hit.seed {
                    Seed::First => "前半",
                    Seed::Second => "后半",
                };
                println!("  {} -> {} (期望 {}, 种子={}, 歧义={})", read, hit.position, expected, seed, hit.ambiguous);
            }
            None => println!("  {} -> 未找到", read),
        }
    }

    // 4. 两个错误分别落在两半：无法定位
    let two_errors = b"acggcctggggaag";
    println!("\n两处替换: {:?}", locate(&index, two_errors)?);

    // 5. read 过短
    if let Err(e) = locate(&index, b"ccggcct") {
        println!("过短的 read: {}", e);
    }

    Ok(())
}
