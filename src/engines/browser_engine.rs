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

use crate::engines::traits::{FetchEngine, FetchError, FetchRequest, PageSnapshot};
use async_trait::async_trait;
use chromiumoxide::{Browser, BrowserConfig};
use futures::StreamExt;
use std::time::{Duration, Instant};
use tokio::time::{sleep, timeout};
use tracing::debug;

/// 渲染抓取引擎
///
/// 为每次调用启动一个独立的无头浏览器实例：导航、等待内容稳定、
/// 滚动到底部触发懒加载、再次等待后读取渲染后的DOM。
/// 浏览器实例在任何退出路径上都会被关闭回收，成功与失败一致。
pub struct BrowserEngine {
    /// 导航完成后的固定稳定等待
    settle: Duration,
    /// 滚动之后的二次等待
    scroll_wait: Duration,
}

impl BrowserEngine {
    pub fn new(settle: Duration, scroll_wait: Duration) -> Self {
        Self { settle, scroll_wait }
    }

    async fn render(&self, browser: &Browser, request: &FetchRequest) -> Result<String, FetchError> {
        let navigate = async {
            let page = browser
                .new_page(request.endpoint.as_str())
                .await
                .map_err(render_error)?;
            page.wait_for_navigation().await.map_err(render_error)?;
            Ok::<_, FetchError>(page)
        };
        let page = timeout(request.timeout, navigate)
            .await
            .map_err(|_| FetchError::Timeout(request.timeout))??;

        // Let client-side listings render, then nudge lazy-loaded content.
        sleep(self.settle).await;
        page.evaluate("window.scrollTo(0, document.body.scrollHeight);")
            .await
            .map_err(render_error)?;
        sleep(self.scroll_wait).await;

        page.content().await.map_err(render_error)
    }
}

impl Default for BrowserEngine {
    fn default() -> Self {
        Self::new(Duration::from_secs(3), Duration::from_secs(2))
    }
}

#[async_trait]
impl FetchEngine for BrowserEngine {
    async fn fetch(&self, request: &FetchRequest) -> Result<PageSnapshot, FetchError> {
        let start = Instant::now();

        let config = BrowserConfig::builder()
            .no_sandbox()
            .window_size(1920, 1080)
            .request_timeout(request.timeout)
            .arg("--disable-gpu")
            .arg("--disable-dev-shm-usage")
            .build()
            .map_err(FetchError::Render)?;

        let (mut browser, mut handler) = timeout(request.timeout, Browser::launch(config))
            .await
            .map_err(|_| FetchError::Timeout(request.timeout))?
            .map_err(render_error)?;

        // The CDP connection stays alive only while the handler is polled.
        let handler_task = tokio::spawn(async move {
            while let Some(event) = handler.next().await {
                if event.is_err() {
                    break;
                }
            }
        });

        let result = self.render(&browser, request).await;

        // Teardown runs on every exit path, success or failure, before
        // this invocation reports completion.
        if let Err(e) = browser.close().await {
            debug!(error = %e, "Browser close failed");
        }
        if let Err(e) = browser.wait().await {
            debug!(error = %e, "Browser wait failed");
        }
        handler_task.abort();

        let html = result?;
        Ok(PageSnapshot {
            html,
            engine: self.name(),
            fetch_time_ms: start.elapsed().as_millis() as u64,
        })
    }

    fn name(&self) -> &'static str {
        "browser"
    }
}

fn render_error(error: impl std::fmt::Display) -> FetchError {
    FetchError::Render(error.to_string())
}
