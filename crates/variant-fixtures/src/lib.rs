pub mod catalog;
pub mod display;
pub mod engine;
pub mod error;
pub mod fixture;
pub mod generator;
pub mod typemap;

pub use engine::{DataFusionEngine, Engine, EngineRef};
pub use error::{Error, Result};
pub use fixture::FixtureFile;
pub use generator::Generator;

#[cfg(test)]
pub mod tests;
