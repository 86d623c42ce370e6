use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// 语料配置
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct CorpusConfig {
    /// 语料文件路径
    pub corpus_path: PathBuf,
    /// 语料包输出路径（JSON）
    pub bundle_path: PathBuf,
    /// 知识记录输出路径（JSONL，供批量索引加载）
    pub knowledge_path: PathBuf,
}

/// 提取配置
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ExtractionConfig {
    /// 章节保留所需的最小归一化长度（字符）
    pub section_min_chars: usize,
    /// 章节内容截断长度（字符）
    pub section_max_chars: usize,
    /// Organism 正文节选长度（字符）
    pub organism_excerpt_chars: usize,
}

/// 知识记录合成配置
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct SynthesisConfig {
    /// 章节参与合成所需的最小内容长度（字符）
    pub section_min_chars: usize,
    /// 响应文本截断长度（字符）
    pub response_max_chars: usize,
}

/// 索引配置
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct IndexConfig {
    /// 进入索引的最小 token 长度（字符）
    pub min_token_chars: usize,
}

/// 检索配置
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct RetrievalConfig {
    /// 上下文组装的候选数量
    pub context_top_k: usize,
    /// 估算 token 预算的字符系数
    pub chars_per_token: usize,
}

/// 日志配置
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct LoggingConfig {
    /// 日志级别
    pub level: String,
    /// 结构化日志格式
    pub structured: bool,
    /// 日志文件路径
    pub log_dir: Option<PathBuf>,
}

/// 应用配置
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct AppConfig {
    /// 语料配置
    pub corpus: CorpusConfig,
    /// 提取配置
    pub extraction: ExtractionConfig,
    /// 合成配置
    pub synthesis: SynthesisConfig,
    /// 索引配置
    pub index: IndexConfig,
    /// 检索配置
    pub retrieval: RetrievalConfig,
    /// 日志配置
    pub logging: LoggingConfig,
    /// 应用名称
    pub app_name: String,
    /// 环境
    pub environment: String,
}

impl AppConfig {
    /// 创建开发环境配置
    pub fn development() -> Self {
        Self {
            corpus: CorpusConfig {
                corpus_path: PathBuf::from("./masterlog.txt"),
                bundle_path: PathBuf::from("./masterlog_knowledge.json"),
                knowledge_path: PathBuf::from("./masterlog_knowledge.jsonl"),
            },
            extraction: ExtractionConfig {
                section_min_chars: 50,
                section_max_chars: 2000,
                organism_excerpt_chars: 500,
            },
            synthesis: SynthesisConfig {
                section_min_chars: 100,
                response_max_chars: 1500,
            },
            index: IndexConfig { min_token_chars: 4 },
            retrieval: RetrievalConfig {
                context_top_k: 3,
                chars_per_token: 4,
            },
            logging: LoggingConfig {
                level: "debug".into(),
                structured: false,
                log_dir: None,
            },
            app_name: "mnemos".into(),
            environment: "development".into(),
        }
    }

    /// 创建生产环境配置
    pub fn production() -> Self {
        let mut config = Self::development();
        config.environment = "production".into();
        config.logging.level = "info".into();
        config.logging.structured = true;
        config.logging.log_dir = Some(PathBuf::from("./logs"));
        config
    }
}
