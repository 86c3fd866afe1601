use rustc_hash::FxHashSet;
use std::sync::Arc;

/// 属性值驻留池
/// 同一编译批次中取值相同的属性（如 "Win10"、"Mobile Phone"）只保留一份 Arc<str>
#[derive(Debug, Default)]
pub struct ValuePool {
    values: FxHashSet<Arc<str>>,
}

impl ValuePool {
    pub fn new() -> Self {
        Self::default()
    }

    /// 返回已驻留的值；不存在则新建并驻留
    pub fn intern(&mut self, value: &str) -> Arc<str> {
        if let Some(existing) = self.values.get(value) {
            return existing.clone();
        }
        let arc: Arc<str> = Arc::from(value);
        self.values.insert(arc.clone());
        arc
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_intern_shares_allocation() {
        let mut pool = ValuePool::new();
        let a = pool.intern("Win10");
        let b = pool.intern("Win10");
        let c = pool.intern("Win7");
        assert!(Arc::ptr_eq(&a, &b));
        assert!(!Arc::ptr_eq(&a, &c));
        assert_eq!(pool.len(), 2);
    }
}
