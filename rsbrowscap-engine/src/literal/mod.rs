mod literal;
mod pool;

pub use literal::{Literal, LiteralId, SINGLE_WILDCARD};
pub use pool::{LiteralArena, LiteralPool};
