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

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::time::Duration;

/// 应用程序配置设置
///
/// 包含数据库、抓取流水线和通知等所有配置项。
/// 一次加载后只读，作为不可变配置向下传递，无隐式全局状态。
#[derive(Debug, Deserialize)]
pub struct Settings {
    /// 数据库配置
    pub database: DatabaseSettings,
    /// 抓取流水线配置
    pub scraper: ScraperSettings,
    /// 通知配置
    pub notifier: NotifierSettings,
}

/// 数据库配置设置
#[derive(Debug, Deserialize)]
pub struct DatabaseSettings {
    /// 数据库连接URL
    pub url: String,
    /// 最大连接数
    pub max_connections: Option<u32>,
    /// 最小连接数
    pub min_connections: Option<u32>,
    /// 连接超时时间（秒）
    pub connect_timeout: Option<u64>,
    /// 空闲连接超时时间（秒）
    pub idle_timeout: Option<u64>,
}

/// 抓取流水线配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct ScraperSettings {
    /// 来源清单文件路径
    pub sources_file: String,
    /// 单来源职位数量上限
    pub max_jobs_per_source: usize,
    /// 并发工作器数量上限
    pub max_workers: usize,
    /// 单次抓取超时（秒）
    pub fetch_timeout_secs: u64,
    /// 职位时间窗口（天）
    pub max_days_old: i64,
    /// 渲染策略稳定等待（毫秒）
    pub render_settle_ms: u64,
    /// 渲染策略滚动后等待（毫秒）
    pub render_scroll_wait_ms: u64,
    /// 单次摘要的未通知职位查询上限
    pub unnotified_limit: u64,
}

impl ScraperSettings {
    pub fn fetch_timeout(&self) -> Duration {
        Duration::from_secs(self.fetch_timeout_secs)
    }

    pub fn render_settle(&self) -> Duration {
        Duration::from_millis(self.render_settle_ms)
    }

    pub fn render_scroll_wait(&self) -> Duration {
        Duration::from_millis(self.render_scroll_wait_ms)
    }
}

/// 通知配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct NotifierSettings {
    /// 摘要投递的Webhook地址，为空时跳过投递
    pub webhook_url: String,
}

impl Settings {
    /// 创建新的配置实例
    ///
    /// 从默认值、可选配置文件和环境变量加载配置
    ///
    /// # Returns
    ///
    /// * `Ok(Settings)` - 成功加载的配置
    /// * `Err(ConfigError)` - 配置加载失败
    pub fn new() -> Result<Self, ConfigError> {
        let env = std::env::var("APP_ENVIRONMENT").unwrap_or_else(|_| "default".to_string());
        let builder = Config::builder()
            // Default DB pool settings
            .set_default("database.url", "postgres://postgres@localhost:5432/jobradar")?
            .set_default("database.max_connections", 10)?
            .set_default("database.min_connections", 1)?
            .set_default("database.connect_timeout", 10)?
            .set_default("database.idle_timeout", 300)?
            // Default scraper settings
            .set_default("scraper.sources_file", "sources.csv")?
            .set_default("scraper.max_jobs_per_source", 15)?
            .set_default("scraper.max_workers", 8)?
            .set_default("scraper.fetch_timeout_secs", 8)?
            .set_default("scraper.max_days_old", 7)?
            .set_default("scraper.render_settle_ms", 3000)?
            .set_default("scraper.render_scroll_wait_ms", 2000)?
            .set_default("scraper.unnotified_limit", 50)?
            // Default notifier settings
            .set_default("notifier.webhook_url", "")?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", env)).required(false))
            .add_source(Environment::with_prefix("JOBRADAR").separator("__"));

        builder.build()?.try_deserialize()
    }
}

#[cfg(test)]
#[path = "settings_test.rs"]
mod tests;
