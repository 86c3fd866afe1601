//! 规则加载配置管理

use super::layout::{FieldLayout, SchemaTier};

/// 完整加载配置
#[derive(Debug, Clone)]
pub struct LoaderConfig {
    /// 字段布局
    pub layout: FieldLayout,
    /// 首行是否为表头（browscap CSV 默认无表头）
    pub has_headers: bool,
    /// 字段分隔符
    pub delimiter: u8,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            layout: FieldLayout::default(),
            has_headers: false,
            delimiter: b',',
        }
    }
}

impl LoaderConfig {
    /// 指定 schema 版本，其余取默认
    pub fn with_tier(tier: SchemaTier) -> Self {
        Self {
            layout: FieldLayout::with_tier(tier),
            ..Self::default()
        }
    }
}

/// 自定义构建器（链式 API）
#[derive(Debug, Clone, Default)]
pub struct CustomConfigBuilder {
    config: LoaderConfig,
}

impl CustomConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tier(mut self, tier: SchemaTier) -> Self {
        self.config.layout.tier = tier;
        self
    }

    pub fn layout(mut self, layout: FieldLayout) -> Self {
        self.config.layout = layout;
        self
    }

    pub fn min_fields(mut self, min_fields: usize) -> Self {
        self.config.layout.min_fields = min_fields;
        self
    }

    pub fn has_headers(mut self, has_headers: bool) -> Self {
        self.config.has_headers = has_headers;
        self
    }

    pub fn delimiter(mut self, delimiter: u8) -> Self {
        self.config.delimiter = delimiter;
        self
    }

    pub fn build(self) -> LoaderConfig {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_chain() {
        let config = CustomConfigBuilder::new()
            .tier(SchemaTier::Extended)
            .min_fields(47)
            .has_headers(true)
            .delimiter(b';')
            .build();
        assert_eq!(config.layout.tier, SchemaTier::Extended);
        assert_eq!(config.layout.min_fields, 47);
        assert!(config.has_headers);
        assert_eq!(config.delimiter, b';');
    }

    #[test]
    fn test_default_config() {
        let config = LoaderConfig::default();
        assert!(!config.has_headers);
        assert_eq!(config.layout, FieldLayout::default());
        assert_eq!(LoaderConfig::with_tier(SchemaTier::Standard).layout.tier, SchemaTier::Standard);
    }
}
