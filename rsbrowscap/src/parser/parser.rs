//! User-Agent 解析器
//! 核心职责：
//! 1. 持有只读规则目录（Arc 共享，跨线程并发查询）
//! 2. 提供统一的解析接口，查询永不失败
use rsbrowscap_engine::{Capabilities, Rule, RuleCatalog};
use std::path::Path;
use std::sync::Arc;

use crate::config::LoaderConfig;
use crate::error::RsbResult;
use crate::rule::RuleLoader;

/// 解析器接口
pub trait UserAgentParser: Send + Sync {
    /// 解析 User-Agent，返回最特异命中规则的能力记录；无命中时返回兜底记录
    fn parse(&self, user_agent: &str) -> Arc<Capabilities>;

    /// 按匹配优先级排列的全部规则
    fn rules(&self) -> &[Rule];
}

/// 基于规则目录的解析器
#[derive(Debug, Clone, Default)]
pub struct BrowscapParser {
    catalog: Arc<RuleCatalog>,
}

impl BrowscapParser {
    pub fn new(catalog: RuleCatalog) -> Self {
        Self {
            catalog: Arc::new(catalog),
        }
    }

    /// 共享已有的规则目录
    pub fn with_catalog(catalog: Arc<RuleCatalog>) -> Self {
        Self { catalog }
    }

    /// 使用默认配置加载 CSV 规则文件
    pub fn from_file(path: impl AsRef<Path>) -> RsbResult<Self> {
        Self::from_file_with_config(path, LoaderConfig::default())
    }

    pub fn from_file_with_config(path: impl AsRef<Path>, config: LoaderConfig) -> RsbResult<Self> {
        let catalog = RuleLoader::new(config)?.load_file(path)?;
        Ok(Self::new(catalog))
    }

    #[cfg(feature = "async-io")]
    pub async fn from_file_async(path: impl AsRef<Path>, config: LoaderConfig) -> RsbResult<Self> {
        let catalog = RuleLoader::new(config)?.load_file_async(path).await?;
        Ok(Self::new(catalog))
    }

    pub fn catalog(&self) -> &Arc<RuleCatalog> {
        &self.catalog
    }

    /// 命中的规则本身（可据 is_wildcard 区分兜底结果）
    pub fn lookup(&self, user_agent: &str) -> &Rule {
        self.catalog.lookup(user_agent)
    }
}

impl From<RuleCatalog> for BrowscapParser {
    fn from(catalog: RuleCatalog) -> Self {
        Self::new(catalog)
    }
}

impl UserAgentParser for BrowscapParser {
    #[inline]
    fn parse(&self, user_agent: &str) -> Arc<Capabilities> {
        Arc::clone(self.catalog.parse(user_agent))
    }

    fn rules(&self) -> &[Rule] {
        self.catalog.rules()
    }
}
