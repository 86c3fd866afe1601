use rustc_hash::FxHashMap;
use std::ops::Index;
use std::sync::Arc;

use super::literal::{Literal, LiteralId};
use crate::error::{CoreError, CoreResult};

/// 字面量驻留池（编译期）
/// 1. 文本 → 句柄映射，首次出现时创建
/// 2. 仅存活于一次编译过程，无淘汰
/// 3. 编译结束后 freeze 为只读的 LiteralArena，交给规则目录持有
#[derive(Debug, Default)]
pub struct LiteralPool {
    ids: FxHashMap<Arc<str>, LiteralId>,
    literals: Vec<Literal>,
}

impl LiteralPool {
    pub fn new() -> Self {
        Self::default()
    }

    /// 驻留字面量：相同文本恒返回相同句柄
    pub fn intern(&mut self, text: &str) -> CoreResult<LiteralId> {
        if let Some(&id) = self.ids.get(text) {
            return Ok(id);
        }

        let index = u32::try_from(self.literals.len())
            .map_err(|_| CoreError::InvariantViolation("literal pool exceeded u32 handle space"))?;
        let id = LiteralId(index);
        let text: Arc<str> = Arc::from(text);
        self.literals.push(Literal::new(text.clone()));
        self.ids.insert(text, id);
        Ok(id)
    }

    #[inline]
    pub fn get(&self, id: LiteralId) -> &Literal {
        &self.literals[id.index()]
    }

    pub fn len(&self) -> usize {
        self.literals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.literals.is_empty()
    }

    /// 冻结为只读存储（丢弃文本映射）
    pub fn freeze(self) -> LiteralArena {
        LiteralArena {
            literals: self.literals.into_boxed_slice(),
        }
    }
}

impl Index<LiteralId> for LiteralPool {
    type Output = Literal;

    fn index(&self, id: LiteralId) -> &Self::Output {
        self.get(id)
    }
}

/// 冻结后的字面量存储，按句柄寻址
#[derive(Debug, Clone, Default)]
pub struct LiteralArena {
    literals: Box<[Literal]>,
}

impl LiteralArena {
    #[inline(always)]
    pub fn get(&self, id: LiteralId) -> &Literal {
        &self.literals[id.index()]
    }

    pub fn len(&self) -> usize {
        self.literals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.literals.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Literal> {
        self.literals.iter()
    }
}

impl Index<LiteralId> for LiteralArena {
    type Output = Literal;

    #[inline(always)]
    fn index(&self, id: LiteralId) -> &Self::Output {
        self.get(id)
    }
}
