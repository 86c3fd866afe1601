use std::sync::Arc;

use super::builder::CatalogBuilder;
use super::prefilter::PrefixIndex;
use crate::core::Capabilities;
use crate::literal::LiteralArena;
use crate::rule::Rule;
use crate::utils::fold_case;

/// 只读规则目录
/// 1. rules 按特异性排序，末尾恒为唯一的兜底通配规则
/// 2. literals 为规则引用的冻结字面量存储
/// 3. 构建完成后不可变，可跨线程共享（Arc）
#[derive(Debug, Clone)]
pub struct RuleCatalog {
    rules: Box<[Rule]>,
    literals: LiteralArena,
    index: PrefixIndex,
}

impl Default for RuleCatalog {
    fn default() -> Self {
        Self::empty()
    }
}

impl RuleCatalog {
    pub(crate) fn new(rules: Box<[Rule]>, literals: LiteralArena, index: PrefixIndex) -> Self {
        Self {
            rules,
            literals,
            index,
        }
    }

    /// 仅包含兜底通配规则的目录
    pub fn empty() -> Self {
        CatalogBuilder::new().build()
    }

    /// 按匹配优先级排列的全部规则
    #[inline]
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    #[inline]
    pub fn literals(&self) -> &LiteralArena {
        &self.literals
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// 目录至少包含兜底规则，恒不为空
    pub fn is_empty(&self) -> bool {
        false
    }

    /// 兜底通配规则（目录末尾）
    pub fn wildcard_rule(&self) -> &Rule {
        &self.rules[self.rules.len() - 1]
    }

    /// 单条规则判定（subject 为原始 User-Agent）
    pub fn matches(&self, rule: &Rule, subject: &str) -> bool {
        rule.matches(fold_case(subject).as_bytes(), &self.literals)
    }

    /// 查找首个命中的规则
    /// 按目录顺序，仅检查预筛候选；兜底规则保证必有结果
    pub fn lookup(&self, subject: &str) -> &Rule {
        let lowered = fold_case(subject);
        let bytes = lowered.as_bytes();

        self.index
            .candidates(bytes)
            .map(|pos| &self.rules[pos])
            .find(|rule| rule.matches(bytes, &self.literals))
            .unwrap_or_else(|| self.wildcard_rule())
    }

    /// 解析 User-Agent，返回命中规则的能力记录
    #[inline]
    pub fn parse(&self, subject: &str) -> &Arc<Capabilities> {
        let rule = self.lookup(subject);
        log::trace!("命中规则：`{}`", rule.pattern());
        rule.capabilities()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compiler::to_regex;
    use crate::core::{BrowsCapField, DEFAULT_BROWSER, UNKNOWN_VALUE};
    use regex::Regex;

    fn caps(browser: &str) -> Arc<Capabilities> {
        Arc::new(Capabilities::unknown().with(BrowsCapField::Browser, browser))
    }

    fn catalog_of(entries: &[(&str, &str)]) -> RuleCatalog {
        let mut builder = CatalogBuilder::new();
        for (pattern, browser) in entries {
            builder.add(pattern, caps(browser)).unwrap();
        }
        builder.build()
    }

    #[test]
    fn test_specific_rule_beats_wildcard() {
        let catalog = catalog_of(&[("Mozilla*Chrome*", "Chrome"), ("*", "Catch")]);
        let ua = "Mozilla/5.0 Chrome/99";
        assert_eq!(catalog.parse(ua).browser(), "Chrome");
        assert_eq!(catalog.parse("curl/8.0").browser(), DEFAULT_BROWSER);
    }

    #[test]
    fn test_longer_pattern_wins() {
        let catalog = catalog_of(&[
            ("Mozilla/5.0*", "Generic"),
            ("Mozilla/5.0*Firefox/5*", "Firefox"),
        ]);
        assert_eq!(
            catalog.parse("Mozilla/5.0 (Windows NT 6.1; rv:5.0) Gecko/20100101 Firefox/5.0").browser(),
            "Firefox"
        );
        assert_eq!(catalog.parse("Mozilla/5.0 (compatible)").browser(), "Generic");
    }

    #[test]
    fn test_single_char_wildcard() {
        let catalog = catalog_of(&[("Chrome ??", "Chrome")]);
        assert_eq!(catalog.parse("chrome 99").browser(), "Chrome");
        assert_eq!(catalog.parse("chrome 1é").browser(), "Chrome");
        assert_eq!(catalog.parse("chrome 9").browser(), DEFAULT_BROWSER);
        assert_eq!(catalog.parse("chrome 100").browser(), DEFAULT_BROWSER);
    }

    #[test]
    fn test_empty_subject_falls_back() {
        let catalog = catalog_of(&[("Mozilla*", "Mozilla"), ("*bot*", "Bot")]);
        let caps = catalog.parse("");
        assert_eq!(caps.browser(), DEFAULT_BROWSER);
        assert_eq!(caps.platform(), UNKNOWN_VALUE);
        assert!(catalog.lookup("").is_wildcard());
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        let catalog = catalog_of(&[("*GoogleBot*", "Googlebot")]);
        assert_eq!(catalog.parse("Mozilla/5.0 (compatible; GOOGLEBOT/2.1)").browser(), "Googlebot");
    }

    #[test]
    fn test_lookup_is_deterministic() {
        let entries = [
            ("*Android*Mobile*", "Android Mobile"),
            ("*Android*", "Android"),
            ("Mozilla/5.0*", "Mozilla"),
            ("*Mobile*", "Mobile"),
        ];
        let a = catalog_of(&entries);
        let b = catalog_of(&entries);
        let ua = "Mozilla/5.0 (Linux; Android 13) Mobile Safari";
        assert_eq!(a.parse(ua).browser(), "Android Mobile");
        for _ in 0..3 {
            assert_eq!(a.lookup(ua).pattern(), b.lookup(ua).pattern());
        }
    }

    #[test]
    fn test_catalog_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<RuleCatalog>();
    }

    #[test]
    fn test_shared_across_threads() {
        let catalog = Arc::new(catalog_of(&[("*Firefox*", "Firefox"), ("*Chrome*", "Chrome")]));
        let handles: Vec<_> = (0..4)
            .map(|i| {
                let catalog = Arc::clone(&catalog);
                std::thread::spawn(move || {
                    let ua = if i % 2 == 0 { "x Firefox/5" } else { "x Chrome/9" };
                    catalog.parse(ua).browser().to_string()
                })
            })
            .collect();
        let got: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        assert_eq!(got, vec!["Firefox", "Chrome", "Firefox", "Chrome"]);
    }

    #[test]
    fn test_matcher_agrees_with_anchored_regex() {
        let patterns = [
            "Mozilla/5.0*Firefox/5*",
            "*iPhone*",
            "Chrome ??",
            "ab*c*ba",
            "*Android 4.?*",
            "Opera/9.80*Version/12.1?",
            "*(compatible; MSIE 9.0*",
        ];
        let subjects = [
            "Mozilla/5.0 (Windows NT 6.1) Firefox/5.0",
            "Mozilla/5.0 (iPhone; CPU iPhone OS 16_0)",
            "Chrome 12",
            "Chrome 1",
            "abcba",
            "aba",
            "abxxba",
            "Mozilla/5.0 (Linux; Android 4.4; Nexus)",
            "Opera/9.80 (X11) Presto/2.12 Version/12.16",
            "Mozilla/5.0 (compatible; MSIE 9.0; Windows NT 6.1)",
            "",
        ];

        let mut builder = CatalogBuilder::new();
        for pattern in patterns {
            builder.add(pattern, caps(pattern)).unwrap();
        }
        let catalog = builder.build();

        for rule in catalog.rules().iter().filter(|r| !r.is_wildcard()) {
            let regex = Regex::new(&to_regex(rule.pattern())).unwrap();
            for subject in subjects {
                assert_eq!(
                    catalog.matches(rule, subject),
                    regex.is_match(&subject.to_lowercase()),
                    "pattern `{}` subject `{}`",
                    rule.pattern(),
                    subject
                );
            }
        }
    }
}
