pub(crate) mod config;
pub use config::JoinConfig;

pub(crate) mod pair;
pub use pair::ColumnPair;

pub(crate) mod table;
pub use table::{ColumnSink, ColumnSource, Table};
