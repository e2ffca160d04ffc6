use chrono::Utc;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::Summary;

/// 看板统计: 扫描人计数 + 分类计数
/// 失败时两个表为空, error 字段携带原因 (HTTP 状态始终 200)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardSummary {
    pub scanners: IndexMap<String, u64>,
    pub classifications: IndexMap<String, u64>,
    pub updated: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl DashboardSummary {
    pub fn new(scanners: IndexMap<String, u64>, classifications: IndexMap<String, u64>) -> Self {
        Self {
            scanners,
            classifications,
            updated: Utc::now().to_rfc3339(),
            error: None,
        }
    }

    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            error: Some(message.into()),
            ..Self::new(IndexMap::new(), IndexMap::new())
        }
    }
}

/// 上游退货记录透传
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReturnsPayload {
    pub returns: Vec<Value>,
    pub count: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ReturnsPayload {
    pub fn new(returns: Vec<Value>) -> Self {
        Self {
            count: returns.len(),
            returns,
            error: None,
        }
    }

    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            returns: Vec::new(),
            count: 0,
            error: Some(message.into()),
        }
    }
}

/// 上游记录聚合结果
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RemoteSummary {
    pub summary: Summary,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}
