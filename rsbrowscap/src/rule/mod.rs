//! 规则模块：负责规则的加载与预处理
pub mod loader;

pub use loader::rule_loader::RuleLoader;
