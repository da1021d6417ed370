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

use jobradar::config::settings::Settings;
use jobradar::domain::models::source::Source;
use jobradar::engines::browser_engine::BrowserEngine;
use jobradar::engines::http_engine::HttpEngine;
use jobradar::engines::router::EngineRouter;
use jobradar::engines::traits::FetchEngine;
use jobradar::infrastructure::database::connection;
use jobradar::infrastructure::notify::webhook_notifier::WebhookNotifier;
use jobradar::infrastructure::repositories::job_repo_impl::SeaOrmJobRepository;
use jobradar::utils::telemetry;
use jobradar::workers::orchestrator::Orchestrator;
use jobradar::workers::source_worker::SourceWorker;
use std::sync::Arc;
use tracing::info;

/// 主函数
///
/// 应用程序入口点，初始化全部组件并执行一个抓取周期
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Initialize logging
    telemetry::init_telemetry();
    info!("Starting jobradar...");

    // 2. Load configuration
    let settings = Settings::new()?;
    info!("Configuration loaded");

    // 3. Connect to database and ensure schema
    let db = Arc::new(connection::create_pool(&settings.database).await?);
    connection::ensure_schema(db.as_ref()).await?;
    info!("Database connection established");

    // 4. Initialize engines and router
    let http: Arc<dyn FetchEngine> = Arc::new(HttpEngine);
    let browser: Arc<dyn FetchEngine> = Arc::new(BrowserEngine::new(
        settings.scraper.render_settle(),
        settings.scraper.render_scroll_wait(),
    ));
    let router = Arc::new(EngineRouter::new(http, browser));

    // 5. Initialize repository and notifier
    let repository = Arc::new(SeaOrmJobRepository::new(db.clone()));
    let notifier = Arc::new(WebhookNotifier::new(settings.notifier.webhook_url.clone()));

    // 6. Load the source roster
    let sources = Source::load_from_file(&settings.scraper.sources_file)?;
    info!(sources = sources.len(), "Source roster loaded");

    // 7. Run one scrape cycle
    let worker = Arc::new(SourceWorker::new(router, settings.scraper.clone()));
    let orchestrator = Orchestrator::new(worker, repository, notifier, settings.scraper.clone());
    let summary = orchestrator.run_cycle(&sources).await;

    info!(
        new_jobs_saved = summary.new_jobs_saved,
        elapsed_secs = summary.elapsed.as_secs_f64(),
        "jobradar finished"
    );

    Ok(())
}
