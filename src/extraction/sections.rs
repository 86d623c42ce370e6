//! 章节提取
//!
//! 装饰性边框行（三个以上重复边框符号）包夹的全大写标题行界定章节；
//! 章节内容取自未归一化的原始文本。

use regex::Regex;

use super::text::{TextCleaner, truncate_chars};
use crate::config::config::ExtractionConfig;
use crate::error::Result;
use crate::models::section::Section;

/// 章节标题块模式
pub struct SectionPattern {
    title_block: Regex,
}

impl SectionPattern {
    /// 编译标题块模式
    pub fn compile() -> Result<Self> {
        Ok(Self {
            title_block: Regex::new(r"[═─]{3,}\s*\n?\s*([A-Z][A-Z\s\-&:]+[A-Z])\s*\n?\s*[═─]{3,}")?,
        })
    }

    /// 提取全部章节
    ///
    /// 内容为一个标题块结束到下一个标题块开始（或输入末尾）之间的
    /// 原始文本；归一化后长度不足的章节被丢弃。
    pub fn extract(
        &self,
        content: &str,
        config: &ExtractionConfig,
        cleaner: &TextCleaner,
    ) -> Vec<Section> {
        let matches: Vec<_> = self.title_block.captures_iter(content).collect();
        let mut sections = Vec::new();

        for (position, caps) in matches.iter().enumerate() {
            let Some(block) = caps.get(0) else { continue };
            let title = cleaner.clean(&caps[1]);

            let start = block.end();
            let end = matches
                .get(position + 1)
                .and_then(|next| next.get(0))
                .map(|m| m.start())
                .unwrap_or(content.len());

            let body = content[start..end].trim();
            if cleaner.clean(body).chars().count() < config.section_min_chars {
                continue;
            }

            sections.push(Section {
                title,
                content: truncate_chars(body, config.section_max_chars).to_string(),
                position,
            });
        }

        sections
    }
}
