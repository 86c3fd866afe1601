//! 解析模块：对外的 User-Agent 解析接口
pub mod parser;

pub use self::parser::{BrowscapParser, UserAgentParser};
