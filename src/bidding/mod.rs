pub mod builder;
pub mod engine;
pub mod error;
pub mod extractor;
pub mod id;
pub mod matcher;
