//! 服务模块

pub mod corpus_builder;
pub mod export;
pub mod retrieval;
pub mod synthesis;

pub use corpus_builder::CorpusBuilder;
pub use export::BundleExporter;
pub use retrieval::{KeywordRetrievalService, RetrievalService, create_retrieval_service};
pub use synthesis::{SYSTEM_PROMPT, Synthesizer};
