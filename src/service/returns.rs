use crate::config::UpstreamConfig;
use crate::error::{AppError, Result};
use crate::models::{lookup_field, DashboardSummary, RemoteSummary, ReturnsPayload, Row};
use crate::service::aggregate;
use indexmap::IndexMap;
use serde_json::Value;
use std::time::Duration;

const SCANNER_FIELDS: &[&str] = &["scanned_by", "scanner", "user", "employee"];
const CLASSIFICATION_FIELDS: &[&str] = &["classification", "return_type", "type"];
const UNKNOWN_SCANNER: &str = "Unknown";
const UNCLASSIFIED: &str = "Unclassified";

/// 上游退货接口客户端
pub struct ReturnsClient {
    client: reqwest::Client,
    url: String,
}

impl ReturnsClient {
    pub fn new(config: &UpstreamConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self {
            client,
            url: config.returns_url.clone(),
        })
    }

    /// 拉取退货记录, 可选按日期过滤
    pub async fn fetch_returns(&self, date: Option<&str>) -> Result<Vec<Value>> {
        let response = self
            .client
            .get(&self.url)
            .header("Accept", "application/json")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::Upstream {
                status: status.as_u16(),
            });
        }

        let body: Value = response.json().await?;
        let records = unwrap_records(body)?;
        let total = records.len();

        let records = match date {
            Some(date) => filter_by_date(records, date),
            None => records,
        };

        tracing::info!(
            "上游退货记录 {} 条, 过滤后 {} 条 (date={:?})",
            total,
            records.len(),
            date
        );
        Ok(records)
    }
}

/// 上游可能直接返回数组, 也可能包在 data / returns 字段里
fn unwrap_records(body: Value) -> Result<Vec<Value>> {
    match body {
        Value::Array(records) => Ok(records),
        Value::Object(mut map) => match map.remove("data").or_else(|| map.remove("returns")) {
            Some(Value::Array(records)) => Ok(records),
            _ => Err(AppError::UnexpectedPayload(
                "object without data/returns array".to_string(),
            )),
        },
        other => Err(AppError::UnexpectedPayload(format!(
            "expected array, got {}",
            json_kind(&other)
        ))),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// `created_at` 的日期部分 (`YYYY-MM-DD HH:MM:SS` 空格前)
fn created_date(record: &Value) -> Option<&str> {
    let created_at = record.get("created_at")?.as_str()?;
    created_at.split(' ').next()
}

/// 按日期字符串精确匹配, 不做时区换算
pub fn filter_by_date(records: Vec<Value>, date: &str) -> Vec<Value> {
    records
        .into_iter()
        .filter(|record| created_date(record) == Some(date))
        .collect()
}

/// 统计扫描人与分类
pub fn tally(records: &[Value]) -> (IndexMap<String, u64>, IndexMap<String, u64>) {
    let mut scanners: IndexMap<String, u64> = IndexMap::new();
    let mut classifications: IndexMap<String, u64> = IndexMap::new();

    for record in records {
        let scanner =
            lookup_field(record, SCANNER_FIELDS).unwrap_or_else(|| UNKNOWN_SCANNER.to_string());
        let classification = lookup_field(record, CLASSIFICATION_FIELDS)
            .unwrap_or_else(|| UNCLASSIFIED.to_string());

        *scanners.entry(scanner).or_insert(0) += 1;
        *classifications.entry(classification).or_insert(0) += 1;
    }

    (scanners, classifications)
}

/// 看板服务: 上游失败时降级为空结果 + error 字段, 不向外抛错
pub struct DashboardService {
    client: ReturnsClient,
}

impl DashboardService {
    pub fn new(client: ReturnsClient) -> Self {
        Self { client }
    }

    pub async fn dashboard(&self, date: Option<&str>) -> DashboardSummary {
        match self.client.fetch_returns(date).await {
            Ok(records) => {
                let (scanners, classifications) = tally(&records);
                DashboardSummary::new(scanners, classifications)
            }
            Err(e) => {
                tracing::warn!("看板数据拉取失败: {}", e);
                DashboardSummary::failed(e.to_string())
            }
        }
    }

    pub async fn returns(&self, date: Option<&str>) -> ReturnsPayload {
        match self.client.fetch_returns(date).await {
            Ok(records) => ReturnsPayload::new(records),
            Err(e) => {
                tracing::warn!("退货记录拉取失败: {}", e);
                ReturnsPayload::failed(e.to_string())
            }
        }
    }

    /// 上游记录映射成扫描行后汇总
    pub async fn remote_summary(&self, date: Option<&str>) -> RemoteSummary {
        match self.client.fetch_returns(date).await {
            Ok(records) => {
                let rows: Vec<Row> = records.iter().map(Row::from_record).collect();
                RemoteSummary {
                    summary: aggregate(&rows),
                    error: None,
                }
            }
            Err(e) => {
                tracing::warn!("远程汇总失败: {}", e);
                RemoteSummary {
                    summary: Default::default(),
                    error: Some(e.to_string()),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_records() -> Vec<Value> {
        vec![
            json!({ "created_at": "2024-05-01 08:15:00", "scanned_by": "ana", "classification": "Return Label" }),
            json!({ "created_at": "2024-05-01 17:45:10", "user": "ben", "return_type": "Part" }),
            json!({ "created_at": "2024-05-02 09:00:00", "scanned_by": "ana", "classification": "Return Label" }),
            json!({ "created_at": "2024-05-01 12:00:00" }),
        ]
    }

    #[test]
    fn test_filter_by_date_matches_date_portion() {
        let filtered = filter_by_date(sample_records(), "2024-05-01");
        assert_eq!(filtered.len(), 3);
        assert!(filter_by_date(sample_records(), "2024-05-03").is_empty());
    }

    #[test]
    fn test_filter_by_date_skips_missing_created_at() {
        let records = vec![json!({ "scanned_by": "x" }), json!({ "created_at": 20240501 })];
        assert!(filter_by_date(records, "2024-05-01").is_empty());
    }

    #[test]
    fn test_tally_uses_fallbacks() {
        let (scanners, classifications) = tally(&sample_records());
        assert_eq!(scanners["ana"], 2);
        assert_eq!(scanners["ben"], 1);
        assert_eq!(scanners[UNKNOWN_SCANNER], 1);
        assert_eq!(classifications["Return Label"], 2);
        assert_eq!(classifications["Part"], 1);
        assert_eq!(classifications[UNCLASSIFIED], 1);
    }

    #[test]
    fn test_unwrap_records_accepts_wrapped_arrays() {
        let wrapped = json!({ "data": [{ "id": 1 }] });
        assert_eq!(unwrap_records(wrapped).unwrap().len(), 1);
        let wrapped = json!({ "returns": [] });
        assert!(unwrap_records(wrapped).unwrap().is_empty());
    }

    #[test]
    fn test_unwrap_records_rejects_other_shapes() {
        assert!(matches!(
            unwrap_records(json!("nope")),
            Err(AppError::UnexpectedPayload(_))
        ));
        assert!(matches!(
            unwrap_records(json!({ "items": [] })),
            Err(AppError::UnexpectedPayload(_))
        ));
    }
}
