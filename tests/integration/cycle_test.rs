// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::helpers::{spawn_server, test_settings, CountingNotifier, InMemoryJobRepository};
use axum::{response::Html, routing::get, Router};
use jobradar::domain::models::source::Source;
use jobradar::engines::http_engine::HttpEngine;
use jobradar::engines::router::EngineRouter;
use jobradar::engines::traits::FetchEngine;
use jobradar::workers::orchestrator::Orchestrator;
use jobradar::workers::source_worker::SourceWorker;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::sleep;
use url::Url;

const CAREERS_PAGE: &str = r#"
    <html><body>
        <div class="job-listing">
            <h3>Junior Software Engineer</h3>
            <a href="/jobs/backend-1">View</a>
            <span>Remote - USA</span>
            <span>Posted 2 days ago</span>
        </div>
        <div class="job-listing">
            <h3>Software Developer, New Grad</h3>
            <a href="/jobs/newgrad-2">View</a>
            <span>Austin, TX</span>
            <span>Posted yesterday</span>
        </div>
        <div class="job-listing">
            <h3>Data Analyst</h3>
            <a href="/jobs/data-3">View</a>
            <span>New York, NY</span>
        </div>
        <div class="job-listing">
            <h3>Senior Staff Engineer</h3>
            <a href="/jobs/senior-4">View</a>
            <span>Remote - USA</span>
        </div>
    </body></html>
"#;

fn orchestrator(
    repository: Arc<InMemoryJobRepository>,
    notifier: Arc<CountingNotifier>,
    fetch_timeout_secs: u64,
) -> Orchestrator<InMemoryJobRepository, CountingNotifier> {
    let settings = test_settings(fetch_timeout_secs);
    let http: Arc<dyn FetchEngine> = Arc::new(HttpEngine);
    let router = Arc::new(EngineRouter::new(http.clone(), http));
    let worker = Arc::new(SourceWorker::new(router, settings.clone()));
    Orchestrator::new(worker, repository, notifier, settings)
}

#[tokio::test]
async fn test_full_cycle_scrapes_saves_and_notifies() {
    let app = Router::new().route("/careers", get(|| async { Html(CAREERS_PAGE) }));
    let base = spawn_server(app).await;

    let slow_app = Router::new().route(
        "/careers",
        get(|| async {
            sleep(Duration::from_secs(5)).await;
            Html("<html></html>")
        }),
    );
    let slow_base = spawn_server(slow_app).await;

    let repository = Arc::new(InMemoryJobRepository::default());
    let notifier = Arc::new(CountingNotifier::default());
    let orchestrator = orchestrator(repository.clone(), notifier.clone(), 1);

    let sources = vec![
        Source::new("Acme", Url::parse(&format!("{}/careers", base)).unwrap()),
        Source::new("Slowpoke", Url::parse(&format!("{}/careers", slow_base)).unwrap()),
    ];
    let summary = orchestrator.run_cycle(&sources).await;

    // The timed-out source is skipped, the other three eligible
    // postings land in storage. The senior role never gets that far.
    assert_eq!(summary.sources_total, 2);
    assert_eq!(summary.sources_succeeded, 1);
    assert_eq!(summary.jobs_found, 3);
    assert_eq!(summary.new_jobs_saved, 3);

    assert_eq!(notifier.digests.load(Ordering::SeqCst), 1);
    assert_eq!(notifier.last_digest_len.load(Ordering::SeqCst), 3);
    assert_eq!(notifier.empty_notices.load(Ordering::SeqCst), 0);

    let jobs = repository.jobs.lock().unwrap();
    assert_eq!(jobs.len(), 3);
    assert!(jobs.values().all(|j| j.notified));
    assert!(jobs.values().all(|j| j.record.company == "Acme"));
    assert!(jobs.keys().all(|url| url.starts_with(&base)));
}

#[tokio::test]
async fn test_repeat_cycle_saves_nothing_new() {
    let app = Router::new().route("/careers", get(|| async { Html(CAREERS_PAGE) }));
    let base = spawn_server(app).await;

    let repository = Arc::new(InMemoryJobRepository::default());
    let notifier = Arc::new(CountingNotifier::default());
    let orchestrator = orchestrator(repository.clone(), notifier.clone(), 5);

    let sources = vec![Source::new(
        "Acme",
        Url::parse(&format!("{}/careers", base)).unwrap(),
    )];

    let first = orchestrator.run_cycle(&sources).await;
    assert_eq!(first.new_jobs_saved, 3);

    let second = orchestrator.run_cycle(&sources).await;
    assert_eq!(second.jobs_found, 3, "postings are still on the page");
    assert_eq!(second.new_jobs_saved, 0, "all URLs are already stored");

    assert_eq!(notifier.digests.load(Ordering::SeqCst), 1);
    assert_eq!(notifier.empty_notices.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_page_without_postings_yields_empty_notice() {
    let app = Router::new().route(
        "/careers",
        get(|| async { Html("<html><body><p>We are not hiring right now.</p></body></html>") }),
    );
    let base = spawn_server(app).await;

    let repository = Arc::new(InMemoryJobRepository::default());
    let notifier = Arc::new(CountingNotifier::default());
    let orchestrator = orchestrator(repository, notifier.clone(), 5);

    let sources = vec![Source::new(
        "Acme",
        Url::parse(&format!("{}/careers", base)).unwrap(),
    )];
    let summary = orchestrator.run_cycle(&sources).await;

    assert_eq!(summary.sources_succeeded, 1);
    assert_eq!(summary.jobs_found, 0);
    assert_eq!(summary.new_jobs_saved, 0);
    assert_eq!(notifier.digests.load(Ordering::SeqCst), 0);
    assert_eq!(notifier.empty_notices.load(Ordering::SeqCst), 1);
}
