//! 属性值文本处理
use rsbrowscap_engine::UNKNOWN_VALUE;

/// 是否为空白（空串或全空白字符）
#[inline]
pub fn is_blank(value: &str) -> bool {
    value.chars().all(char::is_whitespace)
}

/// 属性值规范化：空白 → "Unknown"，否则去除首尾空白
#[inline]
pub fn normalize_value(value: &str) -> &str {
    if is_blank(value) {
        UNKNOWN_VALUE
    } else {
        value.trim()
    }
}
