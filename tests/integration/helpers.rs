// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use anyhow::Result;
use async_trait::async_trait;
use axum::Router;
use chrono::Utc;
use jobradar::config::settings::ScraperSettings;
use jobradar::domain::models::job::{JobRecord, PersistedJob};
use jobradar::domain::repositories::job_repository::JobRepository;
use jobradar::domain::repositories::notifier::Notifier;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use tokio::net::TcpListener;

/// 以URL为键的内存职位仓库
///
/// 复刻存储端的去重语义：已存在的URL被静默跳过，
/// 插入计数只反映新增行。
#[derive(Default)]
pub struct InMemoryJobRepository {
    pub jobs: Mutex<HashMap<String, PersistedJob>>,
}

#[async_trait]
impl JobRepository for InMemoryJobRepository {
    async fn bulk_insert(&self, records: &[JobRecord]) -> Result<u64> {
        let mut jobs = self.jobs.lock().unwrap();
        let mut saved = 0;
        for record in records {
            if !jobs.contains_key(&record.url) {
                jobs.insert(
                    record.url.clone(),
                    PersistedJob {
                        record: record.clone(),
                        first_seen_at: Utc::now(),
                        notified: false,
                    },
                );
                saved += 1;
            }
        }
        Ok(saved)
    }

    async fn find_unnotified(&self, limit: u64) -> Result<Vec<PersistedJob>> {
        let jobs = self.jobs.lock().unwrap();
        let mut unnotified: Vec<PersistedJob> =
            jobs.values().filter(|j| !j.notified).cloned().collect();
        unnotified.sort_by(|a, b| b.first_seen_at.cmp(&a.first_seen_at));
        unnotified.truncate(limit as usize);
        Ok(unnotified)
    }

    async fn mark_notified(&self, urls: &[String]) -> Result<()> {
        let mut jobs = self.jobs.lock().unwrap();
        for url in urls {
            if let Some(job) = jobs.get_mut(url) {
                job.notified = true;
            }
        }
        Ok(())
    }
}

/// 只计数的通知器
#[derive(Default)]
pub struct CountingNotifier {
    pub digests: AtomicUsize,
    pub empty_notices: AtomicUsize,
    pub last_digest_len: AtomicUsize,
}

#[async_trait]
impl Notifier for CountingNotifier {
    async fn send_digest(&self, jobs: &[PersistedJob]) -> bool {
        self.digests.fetch_add(1, Ordering::SeqCst);
        self.last_digest_len.store(jobs.len(), Ordering::SeqCst);
        true
    }

    async fn send_empty_notice(&self) -> bool {
        self.empty_notices.fetch_add(1, Ordering::SeqCst);
        true
    }
}

pub fn test_settings(fetch_timeout_secs: u64) -> ScraperSettings {
    ScraperSettings {
        sources_file: "sources.csv".to_string(),
        max_jobs_per_source: 15,
        max_workers: 4,
        fetch_timeout_secs,
        max_days_old: 7,
        render_settle_ms: 0,
        render_scroll_wait_ms: 0,
        unnotified_limit: 50,
    }
}

/// 启动一个本地测试服务器并返回其基地址
pub async fn spawn_server(app: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}", addr)
}
