// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// 经验等级
///
/// 由经验分类规则得出的岗位级别。标题中的高级信号优先于正文信号，
/// 完全无法判断时默认按初级处理。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExperienceLevel {
    /// 初级岗位
    EntryLevel,
    /// 高级岗位
    SeniorLevel,
}

impl ExperienceLevel {
    /// 从持久化标签还原经验等级
    ///
    /// 未知标签按初级处理，与分类器的默认策略一致
    pub fn from_label(label: &str) -> Self {
        match label {
            "Senior Level" => ExperienceLevel::SeniorLevel,
            _ => ExperienceLevel::EntryLevel,
        }
    }
}

impl fmt::Display for ExperienceLevel {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ExperienceLevel::EntryLevel => write!(f, "Entry Level"),
            ExperienceLevel::SeniorLevel => write!(f, "Senior Level"),
        }
    }
}

/// 职位记录
///
/// 字段提取器产出的核心值对象。提取完成后不可变，
/// 校验器只做接受/拒绝判断，不修改记录本身。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobRecord {
    /// 职位标题
    pub title: String,
    /// 公司名称，即来源名称（受信任，不从页面提取）
    pub company: String,
    /// 职位详情页绝对URL，全局唯一键
    pub url: String,
    /// 职位描述，取原始文本前500个字符
    pub description: String,
    /// 经验等级分类结果
    pub experience_level: ExperienceLevel,
    /// 地点文本，未识别时为空字符串
    pub location: String,
    /// 发布时间原文，未识别时为空字符串
    pub posted_date_text: String,
    /// 发布时间解析结果，原文缺失或无法解析时为空
    pub posted_date: Option<DateTime<Utc>>,
    /// 薪资原文，未识别时为空字符串
    pub salary: String,
    /// 雇佣类型，未识别时为空字符串
    pub employment_type: String,
    /// 候选元素的完整可见文本
    pub raw_text: String,
}

/// 已入库职位
///
/// 持久层返回的职位记录及其通知状态元数据
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PersistedJob {
    /// 职位记录
    pub record: JobRecord,
    /// 首次发现时间
    pub first_seen_at: DateTime<Utc>,
    /// 是否已包含在某次摘要通知中
    pub notified: bool,
}
