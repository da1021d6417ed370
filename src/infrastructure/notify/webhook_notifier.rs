// Copyright 2025 Kirky.X
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use crate::domain::models::job::PersistedJob;
use crate::domain::repositories::notifier::Notifier;
use async_trait::async_trait;
use reqwest::{header, Client};
use serde_json::json;
use std::collections::HashMap;
use tracing::{error, info, warn};

/// Webhook通知器
///
/// 将摘要以JSON负载投递到配置的Webhook地址。
/// 该边界不抛错：任何投递问题都记录日志并返回 `false`，
/// 未投递成功的职位留待下个周期重新进入摘要。
pub struct WebhookNotifier {
    /// Webhook地址，为空表示未配置投递
    webhook_url: String,
    /// HTTP客户端
    client: Client,
}

impl WebhookNotifier {
    /// 创建新的Webhook通知器实例
    pub fn new(webhook_url: String) -> Self {
        let mut headers = header::HeaderMap::new();
        headers.insert(
            header::USER_AGENT,
            header::HeaderValue::from_static("jobradar-notifier/0.1.0"),
        );
        Self {
            webhook_url,
            client: Client::builder().default_headers(headers).build().unwrap(),
        }
    }

    async fn deliver(&self, payload: serde_json::Value) -> bool {
        if self.webhook_url.is_empty() {
            warn!("Notifier webhook URL not configured, skipping delivery");
            return false;
        }

        match self.client.post(&self.webhook_url).json(&payload).send().await {
            Ok(response) if response.status().is_success() => true,
            Ok(response) => {
                warn!(status = %response.status(), "Digest delivery rejected");
                false
            }
            Err(e) => {
                error!(error = %e, "Digest delivery failed");
                false
            }
        }
    }
}

/// 生成摘要正文
///
/// 按公司聚合的职位数量汇总，数量多的公司排在前面
pub fn format_digest_body(jobs: &[PersistedJob]) -> String {
    let mut company_counts: HashMap<&str, usize> = HashMap::new();
    for job in jobs {
        *company_counts.entry(job.record.company.as_str()).or_default() += 1;
    }

    let mut breakdown: Vec<(&str, usize)> = company_counts.into_iter().collect();
    breakdown.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));

    let mut body = format!(
        "NEW JOBS FOUND: {} entry-level tech positions\n\nCOMPANY BREAKDOWN:\n",
        jobs.len()
    );
    for (company, count) in breakdown {
        body.push_str(&format!("- {}: {} jobs\n", company, count));
    }
    body
}

#[async_trait]
impl Notifier for WebhookNotifier {
    async fn send_digest(&self, jobs: &[PersistedJob]) -> bool {
        let payload = json!({
            "subject": format!("{} new entry-level tech jobs found", jobs.len()),
            "body": format_digest_body(jobs),
            "jobs": jobs.iter().map(|job| {
                json!({
                    "title": job.record.title,
                    "company": job.record.company,
                    "url": job.record.url,
                    "location": job.record.location,
                    "experience_level": job.record.experience_level.to_string(),
                    "date_posted": job.record.posted_date_text,
                })
            }).collect::<Vec<_>>(),
        });

        let delivered = self.deliver(payload).await;
        if delivered {
            info!(jobs = jobs.len(), "Digest notification sent");
        }
        delivered
    }

    async fn send_empty_notice(&self) -> bool {
        let payload = json!({
            "subject": "No new entry-level tech jobs found",
            "body": "No new entry-level tech positions were found in this cycle.",
            "jobs": [],
        });

        let delivered = self.deliver(payload).await;
        if delivered {
            info!("Empty-cycle notification sent");
        }
        delivered
    }
}

#[cfg(test)]
#[path = "webhook_notifier_test.rs"]
mod tests;
