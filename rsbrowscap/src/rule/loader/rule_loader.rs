use log::{debug, info};
use rsbrowscap_engine::{CatalogBuilder, RuleCatalog};
use std::io::Read;
use std::path::Path;
use std::sync::Arc;
use std::time::Instant;

use super::csv_source::CsvRecordSource;
use super::record_mapper::RecordMapper;
use crate::config::LoaderConfig;
use crate::error::RsbResult;

/// 规则加载器
/// 每次加载使用独立的字面量池/值池，产出不可变的规则目录
#[derive(Debug, Clone, Default)]
pub struct RuleLoader {
    config: LoaderConfig,
}

impl RuleLoader {
    pub fn new(config: LoaderConfig) -> RsbResult<Self> {
        config.layout.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &LoaderConfig {
        &self.config
    }

    /// 从任意读取源加载
    /// 1. 字段不足的记录静默跳过（计数）
    /// 2. 任一模式编译失败则整批中止，不产生部分目录
    pub fn load_reader<R: Read>(&self, input: R) -> RsbResult<RuleCatalog> {
        let started = Instant::now();
        let mut source = CsvRecordSource::new(input, &self.config);
        let mut mapper = RecordMapper::new(self.config.layout.clone());
        let mut builder = CatalogBuilder::new();

        for record in source.records() {
            let record = record?;
            let Some(mapped) = mapper.map(&record) else {
                continue;
            };
            builder.add(mapped.pattern, Arc::new(mapped.capabilities))?;
        }

        debug!(
            "CSV读取完成：有效记录{}条，跳过短记录{}条，属性值去重后{}个，耗时{:?}",
            mapper.mapped(),
            mapper.skipped(),
            mapper.distinct_values(),
            started.elapsed()
        );

        let catalog = builder.build();
        info!(
            "规则库加载完成：{}条规则，总耗时{:?}",
            catalog.len(),
            started.elapsed()
        );
        Ok(catalog)
    }

    pub fn load_str(&self, content: &str) -> RsbResult<RuleCatalog> {
        self.load_reader(content.as_bytes())
    }

    /// 从本地文件加载
    pub fn load_file(&self, path: impl AsRef<Path>) -> RsbResult<RuleCatalog> {
        let path = path.as_ref();
        let file = std::fs::File::open(path)?;
        debug!("开始加载规则文件：{}", path.display());
        self.load_reader(std::io::BufReader::new(file))
    }

    /// 异步读取文件后加载（编译本身为同步计算）
    #[cfg(feature = "async-io")]
    pub async fn load_file_async(&self, path: impl AsRef<Path>) -> RsbResult<RuleCatalog> {
        let path = path.as_ref();
        let content = tokio::fs::read(path).await?;
        debug!("规则文件读取完成：{}（{}字节）", path.display(), content.len());
        self.load_reader(content.as_slice())
    }
}
