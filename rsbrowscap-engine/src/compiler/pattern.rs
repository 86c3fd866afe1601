//! 通配模式的文本处理
//! 规范化、分段、正则形式转换均为纯函数，不依赖驻留池

use once_cell::sync::Lazy;
use regex::Regex;

use crate::utils::fold_case;

/// 多字符通配符
pub const WILDCARD_CHAR: char = '*';
/// 单字符通配符
pub const SINGLE_CHAR: char = '?';

static WILDCARD_RUN_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"\*+").unwrap());

/// 模式分段：字面量片段或单个 `*`
/// `?` 不是分段点，保留在字面量片段内部
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment<'a> {
    Literal(&'a str),
    Wildcard,
}

/// 规范化原始模式：转小写 + 连续 `*` 折叠为一个
pub fn normalize_pattern(raw: &str) -> String {
    let lowered = fold_case(raw);
    WILDCARD_RUN_REGEX.replace_all(&lowered, "*").into_owned()
}

/// 按 `*` 严格分段（不做折叠，连续 `*` 产生连续的 Wildcard 段）
pub fn split_parts(pattern: &str) -> Vec<Segment<'_>> {
    let mut parts = Vec::new();
    let mut literal_start = 0;

    for (idx, ch) in pattern.char_indices() {
        if ch == WILDCARD_CHAR {
            if idx > literal_start {
                parts.push(Segment::Literal(&pattern[literal_start..idx]));
            }
            parts.push(Segment::Wildcard);
            literal_start = idx + ch.len_utf8();
        }
    }
    if literal_start < pattern.len() {
        parts.push(Segment::Literal(&pattern[literal_start..]));
    }

    parts
}

/// 原始模式 → 锚定正则字符串（仅作为元数据输出，匹配不使用）
/// 1. `*` → `.*?`，`?` → `.`
/// 2. ASCII 字母数字与空格原样保留，其余字符一律反斜杠转义
/// 3. 整体转小写
///
/// 按 Unicode 标量逐字符处理：U+FFFF 以上的字符转义为单个 `\<char>`，不拆成代理对
pub fn to_regex(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len() * 2 + 2);
    out.push('^');
    for ch in raw.chars() {
        match ch {
            WILDCARD_CHAR => out.push_str(".*?"),
            SINGLE_CHAR => out.push('.'),
            c if c.is_ascii_alphanumeric() || c == ' ' => out.push(c),
            c => {
                out.push('\\');
                out.push(c);
            }
        }
    }
    out.push('$');
    out.to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_pattern() {
        assert_eq!(normalize_pattern("Mozilla/5.0**Firefox/5*"), "mozilla/5.0*firefox/5*");
        assert_eq!(normalize_pattern("***"), "*");
        assert_eq!(normalize_pattern("Chrome ??"), "chrome ??");
        assert_eq!(normalize_pattern(""), "");
    }

    #[test]
    fn test_split_parts() {
        assert_eq!(
            split_parts("mozilla*chrome*"),
            vec![
                Segment::Literal("mozilla"),
                Segment::Wildcard,
                Segment::Literal("chrome"),
                Segment::Wildcard,
            ]
        );
        assert_eq!(split_parts("*"), vec![Segment::Wildcard]);
        assert_eq!(split_parts("chrome ??"), vec![Segment::Literal("chrome ??")]);
        assert!(split_parts("").is_empty());
    }

    #[test]
    fn test_split_parts_keeps_uncollapsed_runs() {
        assert_eq!(
            split_parts("a**b"),
            vec![
                Segment::Literal("a"),
                Segment::Wildcard,
                Segment::Wildcard,
                Segment::Literal("b"),
            ]
        );
    }

    #[test]
    fn test_to_regex() {
        assert_eq!(
            to_regex("Mozilla/5.0*Firefox/5*"),
            r"^mozilla\/5\.0.*?firefox\/5.*?$"
        );
        assert_eq!(to_regex("Chrome ??"), "^chrome ..$");
        assert_eq!(to_regex("*"), "^.*?$");
        assert_eq!(to_regex("a(b)_c"), r"^a\(b\)\_c$");
        // 增补平面字符整体转义一次
        assert_eq!(to_regex("*\u{1F600}*"), "^.*?\\\u{1F600}.*?$");
    }
}
