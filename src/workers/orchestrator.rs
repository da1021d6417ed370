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

use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::Semaphore;
use tokio::task::JoinSet;
use tracing::{error, info, warn};

use crate::config::settings::ScraperSettings;
use crate::domain::models::job::JobRecord;
use crate::domain::models::source::Source;
use crate::domain::models::source_report::{ScrapeOutcome, SourceReport};
use crate::domain::repositories::job_repository::JobRepository;
use crate::domain::repositories::notifier::Notifier;
use crate::workers::source_worker::SourceWorker;

/// 单个抓取周期的汇总
#[derive(Debug, Clone)]
pub struct CycleSummary {
    /// 来源总数
    pub sources_total: usize,
    /// 成功来源数
    pub sources_succeeded: usize,
    /// 通过校验的职位总数（含跨来源重复）
    pub jobs_found: usize,
    /// 真正新入库的职位数
    pub new_jobs_saved: u64,
    /// 周期耗时
    pub elapsed: Duration,
}

/// 周期编排器
///
/// 驱动一次完整周期：有界并发地抓取全部来源、收集报告、
/// 一次性批量入库、按入库结果发送摘要或空通知。
/// 单来源失败只影响该来源；持久化失败降级为零入库，
/// 周期照常走到通知环节。
pub struct Orchestrator<R, N>
where
    R: JobRepository + 'static,
    N: Notifier,
{
    worker: Arc<SourceWorker>,
    repository: Arc<R>,
    notifier: Arc<N>,
    settings: ScraperSettings,
}

impl<R, N> Orchestrator<R, N>
where
    R: JobRepository + 'static,
    N: Notifier,
{
    pub fn new(
        worker: Arc<SourceWorker>,
        repository: Arc<R>,
        notifier: Arc<N>,
        settings: ScraperSettings,
    ) -> Self {
        Self {
            worker,
            repository,
            notifier,
            settings,
        }
    }

    /// 执行一个抓取周期
    pub async fn run_cycle(&self, sources: &[Source]) -> CycleSummary {
        let started = Instant::now();
        info!(sources = sources.len(), "Cycle started");

        let reports = self.scrape_all(sources).await;

        let mut sources_succeeded = 0;
        let mut records: Vec<JobRecord> = Vec::new();
        for report in &reports {
            match &report.outcome {
                ScrapeOutcome::Success => {
                    sources_succeeded += 1;
                    info!(
                        "✓ {}: {} jobs ({})",
                        report.source,
                        report.records.len(),
                        report.strategy
                    );
                    records.extend(report.records.iter().cloned());
                }
                ScrapeOutcome::Failure(reason) => {
                    warn!("✗ {}: {}", report.source, reason);
                }
            }
        }

        let jobs_found = records.len();
        let new_jobs_saved = match self.repository.bulk_insert(&records).await {
            Ok(saved) => saved,
            Err(e) => {
                // The cycle degrades to zero saved jobs rather than aborting.
                warn!(error = %e, "Bulk insert failed");
                0
            }
        };

        self.notify(new_jobs_saved).await;

        let summary = CycleSummary {
            sources_total: sources.len(),
            sources_succeeded,
            jobs_found,
            new_jobs_saved,
            elapsed: started.elapsed(),
        };

        info!(
            sources_total = summary.sources_total,
            sources_succeeded = summary.sources_succeeded,
            jobs_found = summary.jobs_found,
            new_jobs_saved = summary.new_jobs_saved,
            elapsed_secs = summary.elapsed.as_secs_f64(),
            "Cycle finished"
        );

        summary
    }

    /// 有界并发抓取全部来源
    ///
    /// 并发度由信号量限定，报告按完成顺序收集。
    /// 任务崩溃记为该来源失败，不影响其余来源。
    async fn scrape_all(&self, sources: &[Source]) -> Vec<SourceReport> {
        let semaphore = Arc::new(Semaphore::new(self.settings.max_workers));
        let mut set: JoinSet<SourceReport> = JoinSet::new();

        for source in sources.iter().cloned() {
            let worker = self.worker.clone();
            let semaphore = semaphore.clone();
            set.spawn(async move {
                // Closing the semaphore is not part of this flow, so
                // acquisition only fails if the task itself is aborted.
                let _permit = semaphore.acquire_owned().await;
                worker.scrape_source(&source).await
            });
        }

        let mut reports = Vec::with_capacity(sources.len());
        while let Some(joined) = set.join_next().await {
            match joined {
                Ok(report) => reports.push(report),
                Err(e) => error!(error = %e, "Scrape task panicked"),
            }
        }
        reports
    }

    /// 按入库结果投递通知
    async fn notify(&self, new_jobs_saved: u64) {
        if new_jobs_saved == 0 {
            if !self.notifier.send_empty_notice().await {
                warn!("Empty-cycle notice was not delivered");
            }
            return;
        }

        let unnotified = match self
            .repository
            .find_unnotified(self.settings.unnotified_limit)
            .await
        {
            Ok(jobs) => jobs,
            Err(e) => {
                error!(error = %e, "Failed to load unnotified jobs");
                return;
            }
        };

        if unnotified.is_empty() {
            return;
        }

        if !self.notifier.send_digest(&unnotified).await {
            // Jobs stay unnotified and roll into the next digest.
            warn!(jobs = unnotified.len(), "Digest was not delivered");
            return;
        }

        let urls: Vec<String> = unnotified.iter().map(|j| j.record.url.clone()).collect();
        if let Err(e) = self.repository.mark_notified(&urls).await {
            error!(error = %e, "Failed to mark jobs as notified");
        }
    }
}

#[cfg(test)]
#[path = "orchestrator_test.rs"]
mod tests;
