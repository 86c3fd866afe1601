//! rsbrowscap - 基于编译通配规则目录的高性能 browscap User-Agent 解析库

pub mod config;
pub mod error;
pub mod parser;
pub mod rule;
pub mod utils;

// 导出全局错误类型
pub use self::error::{RsBrowscapError, RsbResult};

// 导出配置模块核心结构体与构建器
pub use crate::config::{CustomConfigBuilder, FieldLayout, LoaderConfig, SchemaTier};

// 导出规则加载接口
pub use crate::rule::RuleLoader;

// 导出解析接口
pub use crate::parser::{BrowscapParser, UserAgentParser};

// 导出内核常用类型
pub use rsbrowscap_engine::{
    BrowsCapField, Capabilities, CatalogBuilder, Rule, RuleCatalog, RuleKind, DEFAULT_BROWSER,
    UNKNOWN_VALUE,
};
