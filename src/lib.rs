pub mod config;
pub mod error;
pub mod load;
pub mod pipeline;
pub mod transform;
pub mod write;

#[cfg(test)]
pub(crate) mod test_support;

pub use config::Config;
pub use error::DataReadError;
pub use load::RawTable;
pub use pipeline::{run, RunSummary};
pub use transform::{split_records, Outputs};
