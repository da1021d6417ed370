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

use crate::domain::models::source::FetchStrategy;
use crate::engines::traits::FetchEngine;
use std::sync::Arc;

/// 已知依赖客户端渲染职位列表的来源名称子串
///
/// 固定白名单，命中即走渲染策略，其余一律默认轻量策略。
const RENDERED_SOURCE_HINTS: &[&str] = &[
    "meta",
    "facebook",
    "google",
    "alphabet",
    "netflix",
    "airbnb",
    "uber",
    "lyft",
    "stripe",
    "figma",
    "databricks",
];

/// 引擎路由器
///
/// 根据来源名称选择抓取策略，并持有两种策略各自的引擎实例
pub struct EngineRouter {
    http: Arc<dyn FetchEngine>,
    browser: Arc<dyn FetchEngine>,
}

impl EngineRouter {
    pub fn new(http: Arc<dyn FetchEngine>, browser: Arc<dyn FetchEngine>) -> Self {
        Self { http, browser }
    }

    /// 为来源选择抓取策略
    ///
    /// 纯函数，确定性，无失败模式
    pub fn select_strategy(source_name: &str) -> FetchStrategy {
        let name_lower = source_name.to_lowercase();
        if RENDERED_SOURCE_HINTS.iter().any(|hint| name_lower.contains(hint)) {
            FetchStrategy::Rendered
        } else {
            FetchStrategy::Lightweight
        }
    }

    /// 取指定策略对应的引擎
    pub fn engine_for(&self, strategy: FetchStrategy) -> Arc<dyn FetchEngine> {
        match strategy {
            FetchStrategy::Lightweight => self.http.clone(),
            FetchStrategy::Rendered => self.browser.clone(),
        }
    }
}

#[cfg(test)]
#[path = "router_test.rs"]
mod tests;
