//! 规则加载模块
//! CSV 记录源 → 字段映射 → 规则目录构建
pub mod csv_source;
pub mod record_mapper;
pub mod rule_loader;

pub use csv_source::CsvRecordSource;
pub use record_mapper::{MappedRecord, RecordMapper};
pub use rule_loader::RuleLoader;
