use thiserror::Error;

/// 核心算法的错误类型。
///
/// "未找到" 不属于错误：[`crate::locate::locate`] 以 `Ok(None)` 返回。
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SeedError {
    /// 建索引时 key_length 为 0 或超过参考序列长度
    #[error("invalid key length {key_length} for a reference of {reference_len} bases")]
    InvalidParameter { key_length: usize, reference_len: usize },

    /// read 短于 2 × key_length，无法切分为两个种子
    #[error("read of length {read_len} is shorter than the required {required}")]
    MalformedRead { read_len: usize, required: usize },
}

pub type Result<T> = std::result::Result<T, SeedError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offending_values() {
        let e = SeedError::InvalidParameter { key_length: 0, reference_len: 10 };
        assert_eq!(e.to_string(), "invalid key length 0 for a reference of 10 bases");

        let e = SeedError::MalformedRead { read_len: 5, required: 14 };
        assert_eq!(e.to_string(), "read of length 5 is shorter than the required 14");
    }
}
