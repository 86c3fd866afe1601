//! 规则特异性排序
//! 匹配优先级与 rules() 枚举共用这一个比较函数，两者不得各自排序
//!
//! 排序键（依次比较）：
//! 1. 通配规则 `*` 永远排在最后
//! 2. 字面量字符总数（模式去掉 `*` 后的长度，`?` 计一个字符），降序
//! 3. `*` 段数，升序
//! 4. 规范化模式文本，字典序升序
//! 5. 以上全部相同（重复模式）时保持输入顺序（稳定排序）

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use super::rule::Rule;
use crate::compiler::WILDCARD_CHAR;

/// 特异性键（由规范化模式一次性计算）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Specificity {
    /// 是否为兜底通配规则
    pub catch_all: bool,
    /// 字面量字符总数
    pub literal_chars: usize,
    /// `*` 段数
    pub wildcard_segments: usize,
}

impl Specificity {
    pub fn of_pattern(pattern: &str) -> Self {
        let mut literal_chars = 0;
        let mut wildcard_segments = 0;
        for ch in pattern.chars() {
            if ch == WILDCARD_CHAR {
                wildcard_segments += 1;
            } else {
                literal_chars += 1;
            }
        }
        Self {
            catch_all: literal_chars == 0 && wildcard_segments > 0,
            literal_chars,
            wildcard_segments,
        }
    }
}

impl Ord for Specificity {
    fn cmp(&self, other: &Self) -> Ordering {
        self.catch_all
            .cmp(&other.catch_all)
            .then_with(|| other.literal_chars.cmp(&self.literal_chars))
            .then_with(|| self.wildcard_segments.cmp(&other.wildcard_segments))
    }
}

impl PartialOrd for Specificity {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// 规则的全序比较：越特异越靠前
#[inline]
pub fn compare_rules(a: &Rule, b: &Rule) -> Ordering {
    a.specificity()
        .cmp(&b.specificity())
        .then_with(|| a.pattern().cmp(b.pattern()))
}
