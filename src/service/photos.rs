use crate::config::PhotoConfig;
use crate::error::{AppError, Result};
use futures::future::join_all;
use reqwest::Url;
use std::time::Duration;

/// `<id>-N.jpg` / `<id>_N.jpg` 的最大序号
const MAX_PHOTO_INDEX: u32 = 10;

/// 单个候选文件的探测结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProbeOutcome {
    Found(String),
    Missing,
}

/// 按命名约定生成候选文件名
pub fn candidate_names(id: &str) -> Vec<String> {
    let mut names = Vec::with_capacity(1 + 2 * MAX_PHOTO_INDEX as usize);
    names.push(format!("{}.jpg", id));
    names.extend((1..=MAX_PHOTO_INDEX).map(|n| format!("{}-{}.jpg", id, n)));
    names.extend((1..=MAX_PHOTO_INDEX).map(|n| format!("{}_{}.jpg", id, n)));
    names
}

/// 退货照片探测: 对静态资源逐个 HEAD, 收集存在的 URL
pub struct PhotoProber {
    client: reqwest::Client,
    base_url: Url,
}

impl PhotoProber {
    pub fn new(config: &PhotoConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        let base_url = Url::parse(&config.base_url)
            .map_err(|e| AppError::InvalidUrl(format!("{}: {}", config.base_url, e)))?;
        if base_url.cannot_be_a_base() {
            return Err(AppError::InvalidUrl(config.base_url.clone()));
        }
        Ok(Self { client, base_url })
    }

    /// 文件名作为单个路径段追加, `#` `?` `/` 等按百分号编码
    pub fn candidate_url(&self, name: &str) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().push(name);
        }
        url
    }

    async fn probe(&self, url: String) -> ProbeOutcome {
        match self.client.head(&url).send().await {
            Ok(resp) if resp.status().is_success() => ProbeOutcome::Found(url),
            Ok(resp) => {
                tracing::debug!("{} -> {}", url, resp.status());
                ProbeOutcome::Missing
            }
            Err(e) => {
                tracing::debug!("{} probe failed: {}", url, e);
                ProbeOutcome::Missing
            }
        }
    }

    /// 各候选互相独立, 单个失败不影响其他; 结果保持候选顺序
    pub async fn find_photos(&self, id: &str) -> Vec<String> {
        let probes = candidate_names(id)
            .into_iter()
            .map(|name| self.probe(self.candidate_url(&name).to_string()));

        let found: Vec<String> = join_all(probes)
            .await
            .into_iter()
            .filter_map(|outcome| match outcome {
                ProbeOutcome::Found(url) => Some(url),
                ProbeOutcome::Missing => None,
            })
            .collect();

        tracing::info!("照片探测 id={}: 命中 {} 张", id, found.len());
        found
    }
}
