use std::fmt;

/// 日志预览：超过 max_chars 个字符时截断并追加 `…`，不分配新字符串
pub struct Preview<'a> {
    text: &'a str,
    max_chars: usize,
}

#[inline]
pub fn preview_compact(text: &str, max_chars: usize) -> Preview<'_> {
    Preview { text, max_chars }
}

impl fmt::Display for Preview<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.text.char_indices().nth(self.max_chars) {
            Some((cut, _)) => {
                f.write_str(&self.text[..cut])?;
                f.write_str("…")
            }
            None => f.write_str(self.text),
        }
    }
}
