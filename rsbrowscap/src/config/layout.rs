//! CSV 字段布局
//! 属性 → 列下标映射，以及按 schema 版本选择读取的属性集合

use rsbrowscap_engine::BrowsCapField;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{RsBrowscapError, RsbResult};

/// 默认最少字段数：短于此长度的记录直接跳过
pub const DEFAULT_MIN_FIELDS: usize = 48;

/// schema 版本（读取的属性集合）
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SchemaTier {
    /// 8 个基础属性
    #[default]
    Basic,
    /// 基础 + 设备名称、设备品牌
    Standard,
    /// 标准 + 设备代号、平台厂商、设备厂商
    Extended,
}

const BASIC_FIELDS: &[BrowsCapField] = &[
    BrowsCapField::Pattern,
    BrowsCapField::Comment,
    BrowsCapField::Browser,
    BrowsCapField::BrowserType,
    BrowsCapField::BrowserMajorVersion,
    BrowsCapField::Platform,
    BrowsCapField::PlatformVersion,
    BrowsCapField::DeviceType,
];

const STANDARD_FIELDS: &[BrowsCapField] = &[
    BrowsCapField::Pattern,
    BrowsCapField::Comment,
    BrowsCapField::Browser,
    BrowsCapField::BrowserType,
    BrowsCapField::BrowserMajorVersion,
    BrowsCapField::Platform,
    BrowsCapField::PlatformVersion,
    BrowsCapField::DeviceType,
    BrowsCapField::DeviceName,
    BrowsCapField::DeviceBrandName,
];

impl SchemaTier {
    /// 该版本读取的属性
    pub fn fields(&self) -> &'static [BrowsCapField] {
        match self {
            SchemaTier::Basic => BASIC_FIELDS,
            SchemaTier::Standard => STANDARD_FIELDS,
            SchemaTier::Extended => &BrowsCapField::ALL,
        }
    }

    #[inline]
    pub fn includes(&self, field: BrowsCapField) -> bool {
        self.fields().contains(&field)
    }
}

/// 字段布局
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldLayout {
    pub tier: SchemaTier,
    pub min_fields: usize,
    /// 属性 → 列下标（0 起）
    pub columns: FxHashMap<BrowsCapField, usize>,
}

impl Default for FieldLayout {
    /// browscap 完整版 CSV 的列布局
    fn default() -> Self {
        let columns = [
            (BrowsCapField::Pattern, 0),
            (BrowsCapField::Comment, 4),
            (BrowsCapField::Browser, 5),
            (BrowsCapField::BrowserType, 6),
            (BrowsCapField::BrowserMajorVersion, 11),
            (BrowsCapField::Platform, 13),
            (BrowsCapField::PlatformVersion, 14),
            (BrowsCapField::PlatformMaker, 17),
            (BrowsCapField::DeviceName, 41),
            (BrowsCapField::DeviceMaker, 42),
            (BrowsCapField::DeviceType, 43),
            (BrowsCapField::DeviceCodeName, 45),
            (BrowsCapField::DeviceBrandName, 46),
        ]
        .into_iter()
        .collect();

        Self {
            tier: SchemaTier::Basic,
            min_fields: DEFAULT_MIN_FIELDS,
            columns,
        }
    }
}

impl FieldLayout {
    pub fn with_tier(tier: SchemaTier) -> Self {
        Self {
            tier,
            ..Self::default()
        }
    }

    /// 属性所在列；不在当前版本内的属性返回 None
    #[inline]
    pub fn column(&self, field: BrowsCapField) -> Option<usize> {
        if !self.tier.includes(field) {
            return None;
        }
        self.columns.get(&field).copied()
    }

    /// 当前版本实际读取的 (属性, 列) 对
    pub fn active_columns(&self) -> impl Iterator<Item = (BrowsCapField, usize)> + '_ {
        self.tier
            .fields()
            .iter()
            .filter_map(|&field| self.column(field).map(|col| (field, col)))
    }

    /// 校验布局
    /// 1. 必须配置模式列
    /// 2. 最少字段数必须覆盖所有读取列，否则“足够长”的记录仍可能缺列
    pub fn validate(&self) -> RsbResult<()> {
        let pattern_col = self.columns.get(&BrowsCapField::Pattern).ok_or_else(|| {
            RsBrowscapError::InvalidInput("字段布局缺少 pattern 列".to_string())
        })?;

        let max_col = self
            .active_columns()
            .map(|(_, col)| col)
            .chain(std::iter::once(*pattern_col))
            .max()
            .unwrap_or(0);
        if max_col >= self.min_fields {
            return Err(RsBrowscapError::InvalidInput(format!(
                "最少字段数 {} 不足以覆盖第 {} 列",
                self.min_fields, max_col
            )));
        }
        Ok(())
    }

    /// 从 JSON 文本加载布局（未给出的项取默认值）
    pub fn from_json(json: &str) -> RsbResult<Self> {
        let layout: Self = serde_json::from_str(json)?;
        layout.validate()?;
        Ok(layout)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> RsbResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }
}
