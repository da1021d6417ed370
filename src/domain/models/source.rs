// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use tracing::warn;
use url::Url;

/// 抓取策略
///
/// 每个来源在一个周期内只使用一种抓取策略
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FetchStrategy {
    /// 轻量策略：单次HTTP GET加静态解析
    Lightweight,
    /// 渲染策略：无头浏览器加载并滚动后读取DOM
    Rendered,
}

impl fmt::Display for FetchStrategy {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            FetchStrategy::Lightweight => write!(f, "lightweight"),
            FetchStrategy::Rendered => write!(f, "rendered"),
        }
    }
}

/// 职位来源
///
/// 一个待抓取的招聘站点，每周期从外部来源清单加载一次。
/// 以名称作为标识。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Source {
    /// 来源名称，同时作为入库职位的公司名
    pub name: String,
    /// 职位列表页地址
    pub endpoint: Url,
}

impl Source {
    pub fn new(name: impl Into<String>, endpoint: Url) -> Self {
        Self {
            name: name.into(),
            endpoint,
        }
    }

    /// 从竖线分隔的来源清单文件加载
    ///
    /// 文件格式为每行 `name|endpoint`，首行为表头。
    /// 格式错误或URL非法的行会被跳过并记录警告，不会中断加载。
    pub fn load_from_file(path: impl AsRef<Path>) -> anyhow::Result<Vec<Source>> {
        let content = std::fs::read_to_string(path.as_ref())?;
        let mut sources = Vec::new();

        for (idx, line) in content.lines().enumerate() {
            let line = line.trim();
            // Header row and blank lines
            if idx == 0 || line.is_empty() {
                continue;
            }

            let Some((name, endpoint)) = line.split_once('|') else {
                warn!(line = idx + 1, "Skipping malformed source line");
                continue;
            };

            let name = name.trim();
            match Url::parse(endpoint.trim()) {
                Ok(url) if !name.is_empty() => sources.push(Source::new(name, url)),
                Ok(_) => warn!(line = idx + 1, "Skipping source with empty name"),
                Err(e) => warn!(line = idx + 1, error = %e, "Skipping source with invalid URL"),
            }
        }

        Ok(sources)
    }
}
