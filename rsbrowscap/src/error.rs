//! 全局错误类型定义
use rsbrowscap_engine::CoreError;
use serde_json::Error as SerdeJsonError;
use std::io::Error as IoError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RsBrowscapError {
    // 规则相关错误
    #[error("规则加载失败：{0}")]
    RuleLoadError(String),

    // 编译相关错误（整批中止，不产生部分规则目录）
    #[error("规则编译失败：{0}")]
    CompileError(#[from] CoreError),

    // 序列化/反序列化错误（底层IO错误归入 IoError）
    #[error("CSV解析失败：{0}")]
    CsvError(csv::Error),
    #[error("JSON解析失败：{0}")]
    JsonError(#[from] SerdeJsonError),

    // 基础错误
    #[error("IO操作失败：{0}")]
    IoError(#[from] IoError),
    #[error("无效输入：{0}")]
    InvalidInput(String),
}

impl From<csv::Error> for RsBrowscapError {
    fn from(err: csv::Error) -> Self {
        if !err.is_io_error() {
            return Self::CsvError(err);
        }
        match err.into_kind() {
            csv::ErrorKind::Io(io) => Self::IoError(io),
            kind => Self::RuleLoadError(format!("{:?}", kind)),
        }
    }
}

// 全局Result类型
pub type RsbResult<T> = Result<T, RsBrowscapError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_core_error_converts() {
        let err: RsBrowscapError = CoreError::compile("a**b").into();
        assert!(matches!(err, RsBrowscapError::CompileError(_)));
        assert_eq!(err.to_string(), "规则编译失败：Unable to parse pattern `a**b`");
    }

    #[test]
    fn test_csv_io_error_surfaces_as_io() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: RsBrowscapError = csv::Error::from(io).into();
        match err {
            RsBrowscapError::IoError(e) => assert_eq!(e.kind(), std::io::ErrorKind::PermissionDenied),
            other => panic!("unexpected error: {:?}", other),
        }
    }
}
