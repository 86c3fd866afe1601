//! 规则编译器核心
//! 将规范化后的通配模式分解为 前缀/中间字面量/后缀 结构，并驻留所有字面量

use std::sync::Arc;

use super::pattern::{normalize_pattern, split_parts, Segment};
use crate::core::Capabilities;
use crate::error::{CoreError, CoreResult};
use crate::literal::{LiteralArena, LiteralId, LiteralPool};
use crate::rule::{Rule, RuleKind};
use crate::utils::preview_compact;

/// 编译统计信息
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CompileStats {
    pub wildcard_rules: usize,
    pub exact_rules: usize,
    pub structured_rules: usize,
    /// 规则对字面量的引用总数（去重前）
    pub literal_refs: usize,
}

impl CompileStats {
    pub fn total_rules(&self) -> usize {
        self.wildcard_rules + self.exact_rules + self.structured_rules
    }
}

/// 规则编译器
/// 持有本次编译的字面量驻留池；`&mut self` 保证同一池的编译串行进行
#[derive(Debug, Default)]
pub struct RuleCompiler {
    pool: LiteralPool,
    stats: CompileStats,
}

impl RuleCompiler {
    pub fn new() -> Self {
        Self::default()
    }

    /// 编译原始模式（先规范化）
    pub fn compile_raw(&mut self, raw: &str, capabilities: Arc<Capabilities>) -> CoreResult<Rule> {
        let pattern = normalize_pattern(raw);
        self.compile_pattern(&pattern, capabilities)
    }

    /// 编译规范化模式（小写、`*` 已折叠）
    /// 1. 分段为空 → 编译错误
    /// 2. 单段：`*` 返回兜底通配规则，否则为精确字面量规则
    /// 3. 多段：首段非 `*` 为前缀，末段非 `*` 为后缀，其余字面量按序为中间字面量
    /// 4. 由结构重建模式并与输入比对，不一致视为编译器缺陷，直接报错
    pub fn compile_pattern(
        &mut self,
        pattern: &str,
        capabilities: Arc<Capabilities>,
    ) -> CoreResult<Rule> {
        let parts = split_parts(pattern);

        let kind = match parts.as_slice() {
            [] => return Err(CoreError::compile(pattern)),
            [Segment::Wildcard] => {
                self.stats.wildcard_rules += 1;
                return Ok(Rule::wildcard());
            }
            [Segment::Literal(text)] => RuleKind::Exact(self.intern(text)?),
            [first, .., last] => {
                let mut body = &parts[..];

                let prefix = match first {
                    Segment::Literal(text) => {
                        body = &body[1..];
                        Some(self.intern(text)?)
                    }
                    Segment::Wildcard => None,
                };

                let postfix = match last {
                    Segment::Literal(text) => {
                        body = &body[..body.len() - 1];
                        Some(self.intern(text)?)
                    }
                    Segment::Wildcard => None,
                };

                let interior = body
                    .iter()
                    .filter_map(|segment| match segment {
                        Segment::Literal(text) => Some(*text),
                        Segment::Wildcard => None,
                    })
                    .map(|text| self.intern(text))
                    .collect::<CoreResult<Vec<LiteralId>>>()?;

                RuleKind::Structured {
                    prefix,
                    interior: interior.into_boxed_slice(),
                    postfix,
                }
            }
        };

        let rule = Rule::new(kind, pattern, capabilities, &self.pool);

        // 重建校验
        let reconstructed = rule.reconstruct(&self.pool);
        if reconstructed != pattern {
            log::warn!(
                "模式重建校验失败：输入=`{}` 重建=`{}`",
                preview_compact(pattern, 120),
                preview_compact(&reconstructed, 120)
            );
            return Err(CoreError::compile(pattern));
        }

        match rule.kind() {
            RuleKind::Exact(_) => self.stats.exact_rules += 1,
            _ => self.stats.structured_rules += 1,
        }
        Ok(rule)
    }

    #[inline]
    fn intern(&mut self, text: &str) -> CoreResult<LiteralId> {
        self.stats.literal_refs += 1;
        self.pool.intern(text)
    }

    pub fn pool(&self) -> &LiteralPool {
        &self.pool
    }

    pub fn stats(&self) -> CompileStats {
        self.stats
    }

    /// 结束编译：冻结驻留池
    pub fn finish(self) -> (LiteralArena, CompileStats) {
        (self.pool.freeze(), self.stats)
    }
}
