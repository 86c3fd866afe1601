use memchr::memmem::Finder;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::sync::Arc;

/// 单字符通配符（在字面量内部按"任意一个字符"处理）
pub const SINGLE_WILDCARD: u8 = b'?';

/// 字面量句柄：指向 LiteralArena 的下标
/// 同一编译批次内，文本相同的字面量必然得到相同句柄，因此句柄相等即内容相等
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct LiteralId(pub(crate) u32);

impl LiteralId {
    #[inline(always)]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// 驻留后的字面量
/// 文本已小写、不含 `*`，可能包含 `?`
#[derive(Debug, Clone)]
pub struct Literal {
    text: Arc<str>,
    /// `?` 个数（每个至少消耗一个字节）
    wildcards: usize,
    /// 首个 `?` 之前的锚定片段查找器（片段为空时为 None）
    head: Option<Finder<'static>>,
}

impl Literal {
    pub(crate) fn new(text: Arc<str>) -> Self {
        let bytes = text.as_bytes();
        let wildcards = bytes.iter().filter(|&&b| b == SINGLE_WILDCARD).count();
        let head_len = bytes
            .iter()
            .position(|&b| b == SINGLE_WILDCARD)
            .unwrap_or(bytes.len());
        let head = (head_len > 0).then(|| Finder::new(&bytes[..head_len]).into_owned());

        Self {
            text,
            wildcards,
            head,
        }
    }

    #[inline(always)]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[inline(always)]
    pub fn has_wildcard(&self) -> bool {
        self.wildcards > 0
    }

    /// 匹配所需的最少字节数
    #[inline(always)]
    pub fn min_len(&self) -> usize {
        self.text.len()
    }

    /// 首字节（以 `?` 开头时无固定首字节）
    #[inline(always)]
    pub fn leading_byte(&self) -> Option<u8> {
        self.text
            .as_bytes()
            .first()
            .copied()
            .filter(|&b| b != SINGLE_WILDCARD)
    }

    /// 在 hay[at..] 处锚定匹配，成功返回匹配结束偏移
    #[inline]
    pub fn match_at(&self, hay: &[u8], at: usize) -> Option<usize> {
        let pat = self.text.as_bytes();
        if !self.has_wildcard() {
            let end = at.checked_add(pat.len())?;
            return (end <= hay.len() && &hay[at..end] == pat).then_some(end);
        }

        let mut pos = at;
        for &b in pat {
            if b == SINGLE_WILDCARD {
                let &lead = hay.get(pos)?;
                pos += utf8_char_width(lead);
                if pos > hay.len() {
                    return None;
                }
            } else {
                if hay.get(pos) != Some(&b) {
                    return None;
                }
                pos += 1;
            }
        }
        Some(pos)
    }

    /// 整串精确匹配（`?` 视为单字符通配）
    #[inline]
    pub fn matches_exactly(&self, hay: &[u8]) -> bool {
        if !self.has_wildcard() {
            return hay == self.text.as_bytes();
        }
        self.match_at(hay, 0) == Some(hay.len())
    }

    /// 后缀锚定匹配：字面量必须以 hay 末尾结束，且起点不早于 floor
    /// 成功返回匹配起始偏移
    #[inline]
    pub fn match_suffix(&self, hay: &[u8], floor: usize) -> Option<usize> {
        let pat = self.text.as_bytes();
        if !self.has_wildcard() {
            let start = hay.len().checked_sub(pat.len())?;
            return (start >= floor && hay.ends_with(pat)).then_some(start);
        }

        let mut pos = hay.len();
        for &b in pat.iter().rev() {
            if pos == 0 {
                return None;
            }
            if b == SINGLE_WILDCARD {
                pos -= 1;
                while pos > 0 && is_continuation(hay[pos]) {
                    pos -= 1;
                }
            } else {
                if hay[pos - 1] != b {
                    return None;
                }
                pos -= 1;
            }
        }
        (pos >= floor).then_some(pos)
    }

    /// 向前扫描：返回首个起点 >= from、终点 <= limit 的匹配的结束偏移
    /// 对应 `*` 的惰性语义：取最左匹配，为后续字面量留出最大空间
    pub fn find(&self, hay: &[u8], from: usize, limit: usize) -> Option<usize> {
        if from > limit || limit - from < self.min_len() {
            return None;
        }
        let window = &hay[..limit];

        match &self.head {
            Some(head) if !self.has_wildcard() => head
                .find(&window[from..])
                .map(|i| from + i + self.text.len()),
            Some(head) => {
                let mut start = from;
                while start < limit {
                    let candidate = start + head.find(&window[start..])?;
                    if let Some(end) = self.match_at(window, candidate) {
                        return Some(end);
                    }
                    start = candidate + 1;
                }
                None
            }
            None => {
                // 以 `?` 开头：逐字符边界尝试
                let mut start = from;
                while start < limit {
                    if let Some(end) = self.match_at(window, start) {
                        return Some(end);
                    }
                    start += utf8_char_width(window[start]);
                }
                None
            }
        }
    }
}

impl PartialEq for Literal {
    fn eq(&self, other: &Self) -> bool {
        self.text == other.text
    }
}

impl Eq for Literal {}

impl Display for Literal {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.text)
    }
}

/// UTF-8 首字节对应的字符宽度
#[inline(always)]
fn utf8_char_width(lead: u8) -> usize {
    match lead {
        0x00..=0x7F => 1,
        0xC0..=0xDF => 2,
        0xE0..=0xEF => 3,
        0xF0..=0xFF => 4,
        // 续字节不应出现在字符边界上，按单字节推进
        _ => 1,
    }
}

#[inline(always)]
fn is_continuation(b: u8) -> bool {
    b & 0xC0 == 0x80
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lit(s: &str) -> Literal {
        Literal::new(Arc::from(s))
    }

    #[test]
    fn test_match_at_plain() {
        let l = lit("mozilla/");
        assert_eq!(l.match_at(b"mozilla/5.0", 0), Some(8));
        assert_eq!(l.match_at(b"xmozilla/5.0", 1), Some(9));
        assert_eq!(l.match_at(b"mozilla", 0), None);
    }

    #[test]
    fn test_match_at_single_wildcard() {
        let l = lit("chrome ??");
        assert_eq!(l.match_at(b"chrome 99", 0), Some(9));
        assert_eq!(l.match_at(b"chrome 9", 0), None);
        assert!(l.matches_exactly(b"chrome 99"));
        assert!(!l.matches_exactly(b"chrome 100"));
    }

    #[test]
    fn test_single_wildcard_consumes_whole_utf8_char() {
        let l = lit("v?x");
        assert!(l.matches_exactly("véx".as_bytes()));
        assert!(!l.matches_exactly("véex".as_bytes()));
    }

    #[test]
    fn test_match_suffix() {
        let l = lit("firefox/5");
        assert_eq!(l.match_suffix(b"gecko firefox/5", 0), Some(6));
        assert_eq!(l.match_suffix(b"gecko firefox/5", 7), None);
        assert_eq!(l.match_suffix(b"firefox/", 0), None);

        let w = lit("os ?");
        assert_eq!(w.match_suffix("ios 9".as_bytes(), 0), Some(1));
        assert_eq!(w.match_suffix("ios ü".as_bytes(), 0), Some(1));
        assert_eq!(w.match_suffix(b"ios", 0), None);
    }

    #[test]
    fn test_find_respects_window() {
        let l = lit("chrome");
        let hay = b"mozilla chrome safari";
        assert_eq!(l.find(hay, 0, hay.len()), Some(14));
        assert_eq!(l.find(hay, 9, hay.len()), None);
        assert_eq!(l.find(hay, 0, 13), None);
    }

    #[test]
    fn test_find_with_wildcards() {
        let l = lit("v?.");
        let hay = b"app v1x v2.0";
        assert_eq!(l.find(hay, 0, hay.len()), Some(11));

        let lead = lit("?bc");
        assert_eq!(lead.find(b"xxabc", 0, 5), Some(5));
        assert_eq!(lead.find(b"bc", 0, 2), None);
    }

    #[test]
    fn test_leading_byte() {
        assert_eq!(lit("mozilla").leading_byte(), Some(b'm'));
        assert_eq!(lit("?ozilla").leading_byte(), None);
    }
}
