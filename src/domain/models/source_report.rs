// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::job::JobRecord;
use crate::domain::models::source::FetchStrategy;

/// 单个来源的抓取结局
///
/// 失败以带原因的标签值表达，而不是向上抛出异常，
/// 由编排器对标签做模式匹配。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScrapeOutcome {
    /// 抓取流程完整执行（结果可以为空）
    Success,
    /// 抓取失败，携带原因描述
    Failure(String),
}

impl ScrapeOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, ScrapeOutcome::Success)
    }
}

/// 单个来源在一个周期内的抓取报告
#[derive(Debug, Clone)]
pub struct SourceReport {
    /// 来源名称
    pub source: String,
    /// 通过校验的职位记录，保持提取顺序
    pub records: Vec<JobRecord>,
    /// 抓取结局
    pub outcome: ScrapeOutcome,
    /// 本次使用的抓取策略
    pub strategy: FetchStrategy,
}

impl SourceReport {
    /// 构造成功报告
    pub fn success(source: impl Into<String>, records: Vec<JobRecord>, strategy: FetchStrategy) -> Self {
        Self {
            source: source.into(),
            records,
            outcome: ScrapeOutcome::Success,
            strategy,
        }
    }

    /// 构造失败报告
    pub fn failure(
        source: impl Into<String>,
        reason: impl Into<String>,
        strategy: FetchStrategy,
    ) -> Self {
        Self {
            source: source.into(),
            records: Vec::new(),
            outcome: ScrapeOutcome::Failure(reason.into()),
            strategy,
        }
    }
}
