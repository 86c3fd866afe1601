//! rsbrowscap-engine 内核错误定义
//! 封装模式编译/规则目录构建的核心错误，与加载层错误解耦，基于thiserror实现类型安全处理
use thiserror::Error;

/// 内核核心错误枚举
/// 查询（parse）在构造上不会失败，因此这里只有编译期错误
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    // ===================== 编译相关错误 =====================
    /// 模式无法分解（空模式），或由分解结果重建的模式与输入不一致
    /// 属于致命错误：整批编译中止，不产生部分规则目录
    #[error("Unable to parse pattern `{pattern}`")]
    Compile { pattern: String },

    // ===================== 内核基础错误 =====================
    /// 内核逻辑不变量被破坏（核心算法约束违反，属于严重错误）
    #[error("Core invariant violation: {0}")]
    InvariantViolation(&'static str),
}

impl CoreError {
    /// 构造模式编译错误
    #[inline]
    pub fn compile(pattern: impl Into<String>) -> Self {
        CoreError::Compile {
            pattern: pattern.into(),
        }
    }
}

/// 内核层全局Result类型别名
/// 统一使用CoreError作为内核层错误类型
pub type CoreResult<T> = Result<T, CoreError>;
