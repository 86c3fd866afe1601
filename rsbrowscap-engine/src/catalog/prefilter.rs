//! 首字节预筛索引
//! 以首个字面量固定首字节开头的规则按字节分桶，其余规则（以 `*` 开头或首字符为 `?`）进入无锚列表。
//! 查询时仅合并 subject 首字节对应桶与无锚列表，按目录位置升序产出候选，
//! 因而候选序列是目录顺序的子序列，首个命中即为最特异规则。

use std::iter::Peekable;
use std::slice::Iter;

use crate::literal::LiteralArena;
use crate::rule::Rule;

const BUCKETS: usize = 256;

/// 首字节预筛索引（存储目录下标，各列表内部升序）
#[derive(Debug, Clone)]
pub struct PrefixIndex {
    anchored: Box<[Vec<usize>]>,
    unanchored: Vec<usize>,
}

impl PrefixIndex {
    /// 按目录顺序构建索引
    pub fn build(rules: &[Rule], literals: &LiteralArena) -> Self {
        let mut anchored = vec![Vec::new(); BUCKETS].into_boxed_slice();
        let mut unanchored = Vec::new();

        for (pos, rule) in rules.iter().enumerate() {
            match rule.anchor_byte(literals) {
                Some(byte) => anchored[byte as usize].push(pos),
                None => unanchored.push(pos),
            }
        }

        Self {
            anchored,
            unanchored,
        }
    }

    /// 候选规则下标（升序）
    pub fn candidates(&self, subject: &[u8]) -> Candidates<'_> {
        let bucket: &[usize] = match subject.first() {
            Some(&byte) => &self.anchored[byte as usize],
            None => &[],
        };
        Candidates {
            anchored: bucket.iter().peekable(),
            unanchored: self.unanchored.iter().peekable(),
        }
    }

    /// 带固定首字节的规则数
    pub fn anchored_len(&self) -> usize {
        self.anchored.iter().map(Vec::len).sum()
    }

    pub fn unanchored_len(&self) -> usize {
        self.unanchored.len()
    }
}

/// 两路有序下标的归并迭代器
pub struct Candidates<'a> {
    anchored: Peekable<Iter<'a, usize>>,
    unanchored: Peekable<Iter<'a, usize>>,
}

impl Iterator for Candidates<'_> {
    type Item = usize;

    #[inline]
    fn next(&mut self) -> Option<usize> {
        let pos = match (self.anchored.peek(), self.unanchored.peek()) {
            (Some(a), Some(u)) if a < u => self.anchored.next(),
            (Some(_), Some(_)) => self.unanchored.next(),
            (Some(_), None) => self.anchored.next(),
            (None, _) => self.unanchored.next(),
        };
        pos.copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compiler::RuleCompiler;
    use crate::core::Capabilities;
    use std::sync::Arc;

    fn index_of(patterns: &[&str]) -> (Vec<Rule>, PrefixIndex) {
        let mut compiler = RuleCompiler::new();
        let caps = Arc::new(Capabilities::unknown());
        let rules: Vec<Rule> = patterns
            .iter()
            .map(|p| compiler.compile_pattern(p, caps.clone()).unwrap())
            .collect();
        let (arena, _) = compiler.finish();
        let index = PrefixIndex::build(&rules, &arena);
        (rules, index)
    }

    #[test]
    fn test_candidates_merge_in_catalog_order() {
        let (_, index) = index_of(&["mozilla*", "*iphone*", "msie*", "?ozilla*", "opera*", "*"]);
        assert_eq!(index.anchored_len(), 3);
        assert_eq!(index.unanchored_len(), 3);

        let got: Vec<_> = index.candidates(b"mozilla/5.0").collect();
        assert_eq!(got, vec![0, 1, 2, 3, 5]);
    }

    #[test]
    fn test_empty_subject_only_sees_unanchored() {
        let (_, index) = index_of(&["mozilla*", "*iphone*", "*"]);
        let got: Vec<_> = index.candidates(b"").collect();
        assert_eq!(got, vec![1, 2]);
    }
}
