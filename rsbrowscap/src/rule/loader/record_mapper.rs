//! 记录映射：按字段布局把 CSV 记录转为 (原始模式, 能力记录)
use csv::StringRecord;
use rsbrowscap_engine::{to_regex, BrowsCapField, Capabilities, ValuePool};

use crate::config::FieldLayout;
use crate::utils::text::normalize_value;

/// 映射结果
#[derive(Debug, Clone)]
pub struct MappedRecord<'r> {
    /// 原始模式（未规范化）
    pub pattern: &'r str,
    pub capabilities: Capabilities,
}

/// 记录映射器
/// 持有值驻留池，重复的属性值共享同一份分配
#[derive(Debug)]
pub struct RecordMapper {
    layout: FieldLayout,
    values: ValuePool,
    mapped: usize,
    skipped: usize,
}

impl RecordMapper {
    pub fn new(layout: FieldLayout) -> Self {
        Self {
            layout,
            values: ValuePool::new(),
            mapped: 0,
            skipped: 0,
        }
    }

    /// 映射一条记录；字段数不足 min_fields 时返回 None（跳过）
    pub fn map<'r>(&mut self, record: &'r StringRecord) -> Option<MappedRecord<'r>> {
        if record.len() < self.layout.min_fields {
            self.skipped += 1;
            return None;
        }

        let pattern_col = self.layout.columns.get(&BrowsCapField::Pattern).copied()?;
        let pattern = record.get(pattern_col).unwrap_or_default();

        let mut capabilities = Capabilities::unknown();
        capabilities.set(BrowsCapField::Pattern, self.values.intern(&to_regex(pattern)));

        for (field, col) in self.layout.active_columns() {
            if field == BrowsCapField::Pattern {
                continue;
            }
            let raw = record.get(col).unwrap_or_default();
            capabilities.set(field, self.values.intern(normalize_value(raw)));
        }

        self.mapped += 1;
        Some(MappedRecord {
            pattern,
            capabilities,
        })
    }

    pub fn mapped(&self) -> usize {
        self.mapped
    }

    pub fn skipped(&self) -> usize {
        self.skipped
    }

    /// 去重后的属性值个数
    pub fn distinct_values(&self) -> usize {
        self.values.len()
    }
}
