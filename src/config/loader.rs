use crate::config::config::AppConfig;
use figment::{
    Figment,
    providers::{Env, Format, Toml},
};
use std::path::PathBuf;

/// 配置加载器
pub struct ConfigLoader;

impl ConfigLoader {
    /// 从默认路径加载配置
    ///
    /// 搜索路径：
    /// 1. ./mnemos.toml
    /// 2. 环境变量（MNEMOS_ 前缀）
    pub fn load() -> Result<AppConfig, figment::Error> {
        let figment = Figment::new()
            .merge(Toml::file("mnemos.toml"))
            .merge(Env::prefixed("MNEMOS_").split("_").global());

        figment.extract()
    }

    /// 从指定路径加载配置
    pub fn load_from(path: PathBuf) -> Result<AppConfig, figment::Error> {
        let figment = Figment::new()
            .merge(Toml::file(path))
            .merge(Env::prefixed("MNEMOS_").split("_").global());

        figment.extract()
    }

    /// 验证配置
    pub fn validate(config: &AppConfig) -> Result<(), ConfigValidationError> {
        if config.corpus.corpus_path.as_os_str().is_empty() {
            return Err(ConfigValidationError::MissingCorpusPath);
        }

        if config.extraction.section_max_chars == 0 {
            return Err(ConfigValidationError::InvalidSectionLimit);
        }

        if config.index.min_token_chars == 0 {
            return Err(ConfigValidationError::InvalidTokenLength);
        }

        if config.retrieval.context_top_k == 0 || config.retrieval.chars_per_token == 0 {
            return Err(ConfigValidationError::InvalidRetrievalBudget);
        }

        Ok(())
    }
}

/// 配置验证错误
#[derive(thiserror::Error, Debug)]
pub enum ConfigValidationError {
    #[error("语料路径未配置")]
    MissingCorpusPath,

    #[error("章节截断长度无效，必须大于 0")]
    InvalidSectionLimit,

    #[error("索引最小 token 长度无效，必须大于 0")]
    InvalidTokenLength,

    #[error("检索预算参数无效，必须大于 0")]
    InvalidRetrievalBudget,
}

/// 获取默认配置文件路径
pub fn default_config_path() -> PathBuf {
    PathBuf::from("mnemos.toml")
}

/// 检查配置文件是否存在
pub fn config_exists() -> bool {
    default_config_path().exists()
}
