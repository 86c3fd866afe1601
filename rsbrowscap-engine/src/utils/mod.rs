pub mod preview;
pub mod safe_lower;

pub use preview::{preview_compact, Preview};
pub use safe_lower::fold_case;
