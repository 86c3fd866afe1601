pub mod layout;
pub mod loader;

pub use layout::{FieldLayout, SchemaTier, DEFAULT_MIN_FIELDS};
pub use loader::{CustomConfigBuilder, LoaderConfig};
