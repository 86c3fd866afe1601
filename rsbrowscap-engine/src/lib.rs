// 核心公共结构体：能力记录、字段枚举、值驻留池
pub mod core;
// 内核错误定义
pub mod error;
// 字面量驻留池与字面量匹配原语
pub mod literal;
// 编译后的规则结构与特异性排序
pub mod rule;
// 通配模式规范化/分段/编译
pub mod compiler;
// 只读规则目录 + 查询
pub mod catalog;
// 通用工具
pub mod utils;

// 顶层导出常用类型
pub use catalog::{CatalogBuilder, RuleCatalog};
pub use compiler::{normalize_pattern, to_regex, CompileStats, RuleCompiler};
pub use self::core::{BrowsCapField, Capabilities, ValuePool, DEFAULT_BROWSER, DEFAULT_CAPABILITIES, UNKNOWN_VALUE};
pub use error::{CoreError, CoreResult};
pub use literal::{Literal, LiteralArena, LiteralId, LiteralPool};
pub use rule::{compare_rules, Rule, RuleKind, Specificity};
