use serde::{Deserialize, Serialize};
use serde_json::Value;

/// 一行扫描记录 (CSV 导出行 / 上游退货记录)
/// 缺失字段按空字符串处理
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Row {
    pub tracking: String,
    pub classification: String,
    pub part_number: String,
}

impl Row {
    pub fn new(
        tracking: impl Into<String>,
        classification: impl Into<String>,
        part_number: impl Into<String>,
    ) -> Self {
        Self {
            tracking: tracking.into(),
            classification: classification.into(),
            part_number: part_number.into(),
        }
    }

    /// 从上游退货记录构建, 字段名按部署不同依次回退
    pub fn from_record(record: &Value) -> Self {
        Self {
            tracking: lookup_field(record, &["tracking", "tracking_number"]).unwrap_or_default(),
            classification: lookup_field(record, &["classification", "return_type", "type"])
                .unwrap_or_default(),
            part_number: lookup_field(record, &["part_number", "part", "sku"]).unwrap_or_default(),
        }
    }
}

/// 依次查找候选字段, 返回第一个非空值 (非字符串值转成其文本形式)
pub fn lookup_field(record: &Value, candidates: &[&str]) -> Option<String> {
    candidates.iter().find_map(|key| match record.get(*key)? {
        Value::Null => None,
        Value::String(s) if s.trim().is_empty() => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    })
}
