use std::sync::Arc;
use std::time::Instant;

use super::catalog::RuleCatalog;
use super::prefilter::PrefixIndex;
use crate::compiler::{CompileStats, RuleCompiler};
use crate::core::Capabilities;
use crate::error::CoreResult;
use crate::rule::{compare_rules, Rule};

/// 规则目录构建器
/// 核心职责：
/// 1. 逐条编译模式（共享同一个字面量驻留池）
/// 2. 按特异性稳定排序，去重兜底通配规则并追加到末尾
/// 3. 冻结字面量存储，构建首字节预筛索引
#[derive(Debug)]
pub struct CatalogBuilder {
    compiler: RuleCompiler,
    rules: Vec<Rule>,
    started: Instant,
}

impl Default for CatalogBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl CatalogBuilder {
    pub fn new() -> Self {
        Self {
            compiler: RuleCompiler::new(),
            rules: Vec::new(),
            started: Instant::now(),
        }
    }

    /// 添加原始模式（规范化后编译）
    pub fn add(&mut self, raw: &str, capabilities: Arc<Capabilities>) -> CoreResult<()> {
        let rule = self.compiler.compile_raw(raw, capabilities)?;
        self.push(rule);
        Ok(())
    }

    /// 添加已规范化的模式
    pub fn add_pattern(&mut self, pattern: &str, capabilities: Arc<Capabilities>) -> CoreResult<()> {
        let rule = self.compiler.compile_pattern(pattern, capabilities)?;
        self.push(rule);
        Ok(())
    }

    #[inline]
    fn push(&mut self, rule: Rule) {
        // 通配规则统一由 build 追加，保证唯一且位于末尾
        if !rule.is_wildcard() {
            self.rules.push(rule);
        }
    }

    /// 已添加的非通配规则数
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn stats(&self) -> CompileStats {
        self.compiler.stats()
    }

    /// 构建只读规则目录
    pub fn build(self) -> RuleCatalog {
        let Self {
            compiler,
            mut rules,
            started,
        } = self;

        let sort_started = Instant::now();
        rules.sort_by(compare_rules);
        rules.push(Rule::wildcard());
        let sort_elapsed = sort_started.elapsed();

        let (literals, stats) = compiler.finish();
        let index = PrefixIndex::build(&rules, &literals);

        log::info!(
            "✅ 规则目录构建完成：规则{}条，字面量{}个（引用{}次），首字节分桶{}条，无锚{}条，排序耗时{:?}，总耗时{:?}",
            rules.len(),
            literals.len(),
            stats.literal_refs,
            index.anchored_len(),
            index.unanchored_len(),
            sort_elapsed,
            started.elapsed()
        );
        log::debug!(
            "  编译统计：共编译{}条，精确{}条，结构化{}条，通配（已合并）{}条",
            stats.total_rules(),
            stats.exact_rules,
            stats.structured_rules,
            stats.wildcard_rules
        );

        RuleCatalog::new(rules.into_boxed_slice(), literals, index)
    }
}
