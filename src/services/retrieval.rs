//! 检索服务

use std::cmp::Reverse;
use std::collections::HashMap;

use crate::config::config::RetrievalConfig;
use crate::index::knowledge_base::KnowledgeBase;
use crate::models::knowledge::KnowledgeRecord;

/// 检索服务接口
pub trait RetrievalService: Send + Sync {
    /// 按查询对记录排序，返回前 top_k 条
    fn search(&self, query: &str, top_k: usize) -> Vec<KnowledgeRecord>;

    /// 组装预算受限的上下文文本
    fn get_context(&self, query: &str, token_budget: usize) -> String;
}

/// 关键词检索服务
///
/// 构建后只读；评分为查询 token 在候选记录中的出现次数之和。
pub struct KeywordRetrievalService {
    knowledge: KnowledgeBase,
    config: RetrievalConfig,
}

impl KeywordRetrievalService {
    pub fn new(knowledge: KnowledgeBase, config: RetrievalConfig) -> Self {
        Self { knowledge, config }
    }

    /// 知识库
    pub fn knowledge(&self) -> &KnowledgeBase {
        &self.knowledge
    }

    /// 查询侧不做短词过滤：短词从未进入索引，贡献为零，
    /// 但不会被静默丢出评分。
    fn ranked_positions(&self, query: &str) -> Vec<(usize, usize)> {
        let query = query.to_lowercase();
        let mut scores: HashMap<usize, usize> = HashMap::new();

        for word in query.split_whitespace() {
            if let Some(postings) = self.knowledge.index().postings(word) {
                for &position in postings {
                    *scores.entry(position).or_insert(0) += 1;
                }
            }
        }

        let mut ranked: Vec<(usize, usize)> = scores.into_iter().collect();
        // 评分降序，平分时按记录位置升序，保证稳定顺序
        ranked.sort_by_key(|&(position, score)| (Reverse(score), position));
        ranked
    }
}

impl RetrievalService for KeywordRetrievalService {
    fn search(&self, query: &str, top_k: usize) -> Vec<KnowledgeRecord> {
        self.ranked_positions(query)
            .into_iter()
            .take(top_k)
            .filter_map(|(position, _)| self.knowledge.get(position).cloned())
            .collect()
    }

    fn get_context(&self, query: &str, token_budget: usize) -> String {
        let budget_chars = token_budget * self.config.chars_per_token;
        let mut context = String::new();
        let mut total = 0usize;

        // 按评分顺序贪婪装填，首个放不下的块即终止
        for record in self.search(query, self.config.context_top_k) {
            let block = format!("Q: {}\nA: {}\n\n", record.instruction, record.response);
            let block_chars = block.chars().count();
            if total + block_chars >= budget_chars {
                break;
            }
            context.push_str(&block);
            total += block_chars;
        }

        context
    }
}

/// 创建检索服务
pub fn create_retrieval_service(
    knowledge: KnowledgeBase,
    config: RetrievalConfig,
) -> Box<dyn RetrievalService> {
    Box::new(KeywordRetrievalService::new(knowledge, config))
}
