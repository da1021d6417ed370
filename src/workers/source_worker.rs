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

use chrono::{DateTime, Utc};
use scraper::Html;
use std::sync::Arc;
use tracing::{debug, info, warn};

use crate::config::settings::ScraperSettings;
use crate::domain::models::job::JobRecord;
use crate::domain::models::source::Source;
use crate::domain::models::source_report::SourceReport;
use crate::domain::services::{discovery, extraction, validation};
use crate::engines::router::EngineRouter;
use crate::engines::traits::FetchRequest;

/// 来源抓取工作器
///
/// 对单个来源执行完整的抓取流水线：选择策略、抓取快照、
/// 发现候选元素、提取字段、校验资格。任何失败都收敛为
/// 带原因的失败报告，不向上传播。
pub struct SourceWorker {
    router: Arc<EngineRouter>,
    settings: ScraperSettings,
}

impl SourceWorker {
    pub fn new(router: Arc<EngineRouter>, settings: ScraperSettings) -> Self {
        Self { router, settings }
    }

    /// 抓取单个来源
    pub async fn scrape_source(&self, source: &Source) -> SourceReport {
        let strategy = EngineRouter::select_strategy(&source.name);
        let engine = self.router.engine_for(strategy);

        info!(
            source = %source.name,
            strategy = %strategy,
            engine = engine.name(),
            "Scraping source"
        );

        let request = FetchRequest {
            endpoint: source.endpoint.clone(),
            timeout: self.settings.fetch_timeout(),
        };

        let snapshot = match engine.fetch(&request).await {
            Ok(snapshot) => snapshot,
            Err(e) => {
                warn!(source = %source.name, error = %e, "Fetch failed");
                return SourceReport::failure(&source.name, e.to_string(), strategy);
            }
        };

        debug!(
            source = %source.name,
            fetch_time_ms = snapshot.fetch_time_ms,
            bytes = snapshot.html.len(),
            "Snapshot acquired"
        );

        let records = harvest(
            &snapshot.html,
            source,
            self.settings.max_jobs_per_source,
            self.settings.max_days_old,
            Utc::now(),
        );

        SourceReport::success(&source.name, records, strategy)
    }
}

/// 从页面快照收割职位记录
///
/// 同步执行：解析文档、发现候选、提取、校验，达到单来源
/// 上限后提前停止。文档对象不跨越任何等待点。
fn harvest(
    html: &str,
    source: &Source,
    max_jobs: usize,
    max_days_old: i64,
    now: DateTime<Utc>,
) -> Vec<JobRecord> {
    let doc = Html::parse_document(html);
    let candidates = discovery::discover(&doc);
    debug!(source = %source.name, candidates = candidates.len(), "Candidates discovered");

    let mut records = Vec::new();
    for element in candidates {
        if records.len() >= max_jobs {
            break;
        }

        let Some(record) = extraction::extract(element, source, now) else {
            continue;
        };

        if validation::is_eligible(&record, max_days_old, now) {
            records.push(record);
        }
    }

    records
}

#[cfg(test)]
#[path = "source_worker_test.rs"]
mod tests;
