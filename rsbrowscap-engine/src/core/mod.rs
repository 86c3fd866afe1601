mod capabilities;
mod value_pool;

// 导出常用项
pub use capabilities::{
    BrowsCapField, Capabilities, DEFAULT_BROWSER, DEFAULT_CAPABILITIES, UNKNOWN_VALUE,
};
pub use value_pool::ValuePool;
