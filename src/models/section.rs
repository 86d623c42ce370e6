use serde::{Deserialize, Serialize};

/// 章节记录
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Section {
    /// 标题（归一化后）
    pub title: String,

    /// 原始内容（按配置截断）
    pub content: String,

    /// 提取顺序位置（标题块匹配序号）
    pub position: usize,
}
