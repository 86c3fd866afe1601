//! 编译模块：将通配模式编译为字面量结构规则
pub mod compiler;
pub mod pattern;

pub use self::compiler::{CompileStats, RuleCompiler};
pub use self::pattern::{
    normalize_pattern, split_parts, to_regex, Segment, SINGLE_CHAR, WILDCARD_CHAR,
};
