//! 索引模块

pub mod inverted;
pub mod knowledge_base;

pub use inverted::InvertedIndex;
pub use knowledge_base::KnowledgeBase;
