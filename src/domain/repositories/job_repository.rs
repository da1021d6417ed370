// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::job::{JobRecord, PersistedJob};
use anyhow::Result;
use async_trait::async_trait;

/// 职位仓库特质
///
/// 持久化网关的访问接口。URL作为全局唯一键由存储端保证，
/// 核心流水线内不做跨来源去重。
#[async_trait]
pub trait JobRepository: Send + Sync {
    /// 批量写入职位记录
    ///
    /// URL已存在的记录被静默跳过，返回值只统计真正新插入的行数。
    async fn bulk_insert(&self, records: &[JobRecord]) -> Result<u64>;

    /// 查询尚未通知的职位，按首次发现时间倒序
    async fn find_unnotified(&self, limit: u64) -> Result<Vec<PersistedJob>>;

    /// 将给定URL对应的职位标记为已通知，幂等
    async fn mark_notified(&self, urls: &[String]) -> Result<()>;
}
