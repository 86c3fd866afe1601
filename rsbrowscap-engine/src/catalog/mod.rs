//! 规则目录：排序后的编译规则 + 冻结字面量 + 首字节预筛索引
mod builder;
mod catalog;
mod prefilter;

pub use self::builder::CatalogBuilder;
pub use self::catalog::RuleCatalog;
pub use self::prefilter::{Candidates, PrefixIndex};
