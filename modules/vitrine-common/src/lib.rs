pub mod types;
pub mod config;
pub mod error;

pub use config::Config;
pub use error::VitrineError;
pub use types::{NewProduct, Product, ScoredProduct, WeightSpec};
