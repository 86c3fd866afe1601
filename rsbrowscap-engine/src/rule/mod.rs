mod rule;
mod specificity;

pub use rule::{Rule, RuleKind};
pub use specificity::{compare_rules, Specificity};
