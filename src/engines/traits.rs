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

use async_trait::async_trait;
use std::time::Duration;
use thiserror::Error;
use url::Url;

/// 抓取错误类型
///
/// 全部是来源粒度的可恢复错误：失败来源在本周期被跳过，
/// 不触发重试，也不影响其他来源。
#[derive(Error, Debug)]
pub enum FetchError {
    /// 超时
    #[error("fetch timed out after {0:?}")]
    Timeout(Duration),
    /// 网络传输错误
    #[error("network error: {0}")]
    Network(String),
    /// 非2xx响应
    #[error("unexpected status code: {0}")]
    Status(u16),
    /// 浏览器渲染错误
    #[error("render error: {0}")]
    Render(String),
}

/// 抓取请求
#[derive(Debug, Clone)]
pub struct FetchRequest {
    /// 目标地址
    pub endpoint: Url,
    /// 单次抓取超时
    pub timeout: Duration,
}

/// 页面快照
///
/// 两种抓取策略统一产出的页面文档。元素发现器只消费这一抽象，
/// 不关心快照来自哪种引擎。相对链接统一按来源端点解析。
#[derive(Debug, Clone)]
pub struct PageSnapshot {
    /// 页面最终HTML
    pub html: String,
    /// 产出快照的引擎名称
    pub engine: &'static str,
    /// 抓取耗时（毫秒）
    pub fetch_time_ms: u64,
}

/// 抓取引擎特质
#[async_trait]
pub trait FetchEngine: Send + Sync {
    /// 抓取一个页面快照
    async fn fetch(&self, request: &FetchRequest) -> Result<PageSnapshot, FetchError>;

    /// 引擎名称
    fn name(&self) -> &'static str;
}
