use once_cell::sync::Lazy;
use std::ops::Index;
use std::sync::Arc;

use super::specificity::Specificity;
use crate::core::Capabilities;
use crate::literal::{Literal, LiteralArena, LiteralId};

static WILDCARD_PATTERN: Lazy<Arc<str>> = Lazy::new(|| Arc::from("*"));

/// 规则结构（带标签的变体，单一匹配函数按标签分派）
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuleKind {
    /// 全通配 `*`：恒匹配，兜底
    Wildcard,
    /// 单段字面量：整串精确匹配（`?` 仍为单字符通配）
    Exact(LiteralId),
    /// 前缀 / 中间字面量 / 后缀
    Structured {
        prefix: Option<LiteralId>,
        interior: Box<[LiteralId]>,
        postfix: Option<LiteralId>,
    },
}

/// 编译后的匹配单元
#[derive(Debug, Clone)]
pub struct Rule {
    kind: RuleKind,
    /// 规范化模式（小写、`*` 已折叠）
    pattern: Arc<str>,
    capabilities: Arc<Capabilities>,
    specificity: Specificity,
    /// 各字面量最少字节数之和，短于此长度的查询串直接跳过
    min_len: usize,
}

impl Rule {
    /// 兜底通配规则
    pub fn wildcard() -> Self {
        Self {
            kind: RuleKind::Wildcard,
            pattern: WILDCARD_PATTERN.clone(),
            capabilities: Capabilities::default_record(),
            specificity: Specificity::of_pattern("*"),
            min_len: 0,
        }
    }

    pub(crate) fn new<P>(
        kind: RuleKind,
        pattern: &str,
        capabilities: Arc<Capabilities>,
        literals: &P,
    ) -> Self
    where
        P: Index<LiteralId, Output = Literal>,
    {
        let min_len = kind.literal_ids().map(|id| literals[id].min_len()).sum();
        Self {
            kind,
            pattern: Arc::from(pattern),
            capabilities,
            specificity: Specificity::of_pattern(pattern),
            min_len,
        }
    }

    #[inline(always)]
    pub fn kind(&self) -> &RuleKind {
        &self.kind
    }

    #[inline(always)]
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    #[inline(always)]
    pub fn capabilities(&self) -> &Arc<Capabilities> {
        &self.capabilities
    }

    #[inline(always)]
    pub fn specificity(&self) -> Specificity {
        self.specificity
    }

    #[inline(always)]
    pub fn is_wildcard(&self) -> bool {
        matches!(self.kind, RuleKind::Wildcard)
    }

    /// 首个字面量的固定首字节（用于前缀分桶）
    /// 仅对以字面量开头的规则有意义：Exact 与带 prefix 的 Structured
    pub fn anchor_byte(&self, literals: &LiteralArena) -> Option<u8> {
        match &self.kind {
            RuleKind::Exact(id)
            | RuleKind::Structured {
                prefix: Some(id), ..
            } => literals[*id].leading_byte(),
            _ => None,
        }
    }

    /// 匹配判定（subject 已小写）
    #[inline]
    pub fn matches(&self, subject: &[u8], literals: &LiteralArena) -> bool {
        if subject.len() < self.min_len {
            return false;
        }

        match &self.kind {
            RuleKind::Wildcard => true,
            RuleKind::Exact(id) => literals[*id].matches_exactly(subject),
            RuleKind::Structured {
                prefix,
                interior,
                postfix,
            } => {
                let mut start = 0;
                if let Some(id) = prefix {
                    match literals[*id].match_at(subject, 0) {
                        Some(end) => start = end,
                        None => return false,
                    }
                }

                let mut limit = subject.len();
                if let Some(id) = postfix {
                    match literals[*id].match_suffix(subject, start) {
                        Some(begin) => limit = begin,
                        None => return false,
                    }
                }

                for id in interior.iter() {
                    match literals[*id].find(subject, start, limit) {
                        Some(end) => start = end,
                        None => return false,
                    }
                }
                true
            }
        }
    }

    /// 由字面量结构重建通配模式（用于编译期校验）
    pub fn reconstruct<P>(&self, literals: &P) -> String
    where
        P: Index<LiteralId, Output = Literal>,
    {
        self.kind.reconstruct(literals)
    }
}

impl RuleKind {
    /// 按出现顺序遍历所有字面量句柄
    pub fn literal_ids(&self) -> impl Iterator<Item = LiteralId> + '_ {
        let (head, interior, tail): (Option<LiteralId>, &[LiteralId], Option<LiteralId>) =
            match self {
                RuleKind::Wildcard => (None, &[][..], None),
                RuleKind::Exact(id) => (Some(*id), &[][..], None),
                RuleKind::Structured {
                    prefix,
                    interior,
                    postfix,
                } => (*prefix, &interior[..], *postfix),
            };
        head.into_iter()
            .chain(interior.iter().copied())
            .chain(tail)
    }

    fn reconstruct<P>(&self, literals: &P) -> String
    where
        P: Index<LiteralId, Output = Literal>,
    {
        match self {
            RuleKind::Wildcard => "*".to_string(),
            RuleKind::Exact(id) => literals[*id].text().to_string(),
            RuleKind::Structured {
                prefix,
                interior,
                postfix,
            } => {
                let mut out = String::new();
                if let Some(id) = prefix {
                    out.push_str(literals[*id].text());
                }
                for id in interior.iter() {
                    out.push('*');
                    out.push_str(literals[*id].text());
                }
                out.push('*');
                if let Some(id) = postfix {
                    out.push_str(literals[*id].text());
                }
                out
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::literal::LiteralPool;

    fn structured(
        pool: &mut LiteralPool,
        prefix: Option<&str>,
        interior: &[&str],
        postfix: Option<&str>,
    ) -> RuleKind {
        RuleKind::Structured {
            prefix: prefix.map(|p| pool.intern(p).unwrap()),
            interior: interior.iter().map(|t| pool.intern(t).unwrap()).collect(),
            postfix: postfix.map(|p| pool.intern(p).unwrap()),
        }
    }

    #[test]
    fn test_reconstruct_shapes() {
        let mut pool = LiteralPool::new();
        let cases = [
            (structured(&mut pool, Some("a"), &[], Some("b")), "a*b"),
            (structured(&mut pool, None, &[], Some("abc")), "*abc"),
            (structured(&mut pool, Some("abc"), &[], None), "abc*"),
            (structured(&mut pool, None, &["a"], None), "*a*"),
            (structured(&mut pool, Some("a"), &["b", "c"], Some("d")), "a*b*c*d"),
        ];
        for (kind, expected) in cases {
            assert_eq!(kind.reconstruct(&pool), expected);
        }
    }

    #[test]
    fn test_structured_match_respects_order_and_overlap() {
        let mut pool = LiteralPool::new();
        let kind = structured(&mut pool, Some("ab"), &["c"], Some("ba"));
        let rule = Rule::new(kind, "ab*c*ba", Capabilities::default_record(), &pool);
        let arena = pool.freeze();

        assert!(rule.matches(b"abcba", &arena));
        assert!(rule.matches(b"abxxcxxba", &arena));
        // 前后缀重叠
        assert!(!rule.matches(b"aba", &arena));
        // 缺少中间字面量
        assert!(!rule.matches(b"abxxba", &arena));
    }

    #[test]
    fn test_interior_order_matters() {
        let mut pool = LiteralPool::new();
        let kind = structured(&mut pool, None, &["chrome", "safari"], None);
        let rule = Rule::new(kind, "*chrome*safari*", Capabilities::default_record(), &pool);
        let arena = pool.freeze();

        assert!(rule.matches(b"x chrome/99 safari/537", &arena));
        assert!(!rule.matches(b"x safari/537 chrome/99", &arena));
    }

    #[test]
    fn test_wildcard_rule_matches_everything() {
        let arena = LiteralPool::new().freeze();
        let rule = Rule::wildcard();
        assert!(rule.is_wildcard());
        assert!(rule.matches(b"", &arena));
        assert!(rule.matches(b"curl/7.0", &arena));
        assert_eq!(rule.capabilities().browser(), crate::core::DEFAULT_BROWSER);
    }
}
