use std::borrow::Cow;

/// 大小写折叠（模式与查询串共用同一折叠函数，保证字节一致）
/// 1. 已是小写则零拷贝返回
/// 2. 纯ASCII走快速路径
/// 3. 其余按Unicode规则转小写
#[inline(always)]
pub fn fold_case(s: &str) -> Cow<'_, str> {
    if s.is_ascii() {
        if !s.bytes().any(|b| b.is_ascii_uppercase()) {
            return Cow::Borrowed(s);
        }
        return Cow::Owned(s.to_ascii_lowercase());
    }

    let lowered = s.to_lowercase();
    if lowered == s {
        Cow::Borrowed(s)
    } else {
        Cow::Owned(lowered)
    }
}
