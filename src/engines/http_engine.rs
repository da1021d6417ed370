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
use std::time::Instant;

/// 桌面浏览器UA，部分招聘站点会拒绝默认的程序化客户端标识
const USER_AGENT: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

/// 轻量抓取引擎
///
/// 单次HTTP GET加静态HTML解析，是默认策略。
/// 非2xx状态或超时直接失败，不做重试——失败来源在本周期被跳过。
pub struct HttpEngine;

#[async_trait]
impl FetchEngine for HttpEngine {
    async fn fetch(&self, request: &FetchRequest) -> Result<PageSnapshot, FetchError> {
        // Each request gets a fresh client for cookie isolation
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(request.timeout)
            .build()
            .map_err(|e| FetchError::Network(e.to_string()))?;

        let start = Instant::now();
        let response = client
            .get(request.endpoint.clone())
            .send()
            .await
            .map_err(|e| classify_reqwest_error(e, request))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }

        let html = response
            .text()
            .await
            .map_err(|e| classify_reqwest_error(e, request))?;

        Ok(PageSnapshot {
            html,
            engine: self.name(),
            fetch_time_ms: start.elapsed().as_millis() as u64,
        })
    }

    fn name(&self) -> &'static str {
        "http"
    }
}

fn classify_reqwest_error(error: reqwest::Error, request: &FetchRequest) -> FetchError {
    if error.is_timeout() {
        FetchError::Timeout(request.timeout)
    } else {
        FetchError::Network(error.to_string())
    }
}

#[cfg(test)]
#[path = "http_engine_test.rs"]
mod tests;
