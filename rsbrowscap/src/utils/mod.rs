//! 工具模块：提供通用工具函数
pub mod text;

pub use self::text::{is_blank, normalize_value};
