// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::job::PersistedJob;
use async_trait::async_trait;

/// 通知器特质
///
/// 发送新职位摘要通知。该边界不向调用方抛出错误，
/// 发送失败以 `false` 表达；未成功通知的职位保持未通知状态，
/// 下个周期会再次进入摘要。
#[async_trait]
pub trait Notifier: Send + Sync {
    /// 发送包含全部未通知职位的摘要
    async fn send_digest(&self, jobs: &[PersistedJob]) -> bool;

    /// 发送"本周期无新职位"通知
    async fn send_empty_notice(&self) -> bool;
}
