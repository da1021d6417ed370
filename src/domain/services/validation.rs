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

use crate::domain::models::job::{ExperienceLevel, JobRecord};
use crate::utils::date_parser;
use crate::utils::keywords::{
    contains_any, min_years_required, ENTRY_LEVEL_KEYWORDS, INTERNATIONAL_KEYWORDS,
    SENIOR_KEYWORDS, TECH_KEYWORDS, USA_KEYWORDS,
};

/// 最小标题长度
const MIN_TITLE_LEN: usize = 5;

/// 未知地点放行策略
///
/// 没有美国地区信号、也没有海外地区信号且地点为空时放行记录。
/// 这是偏向召回的策略开关，不是固定规则。
pub const ALLOW_UNKNOWN_LOCATION: bool = true;

/// 初级年限上限（含）与高级年限下限（不含）
const ENTRY_MAX_YEARS: u32 = 2;
const SENIOR_MIN_YEARS: u32 = 3;

/// 经验等级分类
///
/// 标题中的高级信号无条件生效，优先于正文中的任何信号；
/// 其次看显式的初级关键词；再次按最小经验年限判断；
/// 完全无法判断时默认初级。
pub fn classify_experience(title: &str, body: &str) -> ExperienceLevel {
    let title_lower = title.to_lowercase();
    if contains_any(&title_lower, SENIOR_KEYWORDS) {
        return ExperienceLevel::SeniorLevel;
    }

    let full_text = format!("{} {}", title_lower, body.to_lowercase());
    if contains_any(&full_text, ENTRY_LEVEL_KEYWORDS) {
        return ExperienceLevel::EntryLevel;
    }

    match min_years_required(&full_text) {
        Some(years) if years <= ENTRY_MAX_YEARS => ExperienceLevel::EntryLevel,
        Some(years) if years > SENIOR_MIN_YEARS => ExperienceLevel::SeniorLevel,
        // Exactly 3 years or no signal at all: default to entry level.
        _ => ExperienceLevel::EntryLevel,
    }
}

/// 职位资格校验
///
/// 规则按顺序执行，任一条命中即硬性拒绝：
/// 1. 标题过短或URL为空
/// 2. 标题和描述都不含技术关键词
/// 3. 经验分类为高级
/// 4. 发布时间超出窗口（缺失或无法解析按最近处理）
/// 5. 地理规则：无美国信号时，命中海外信号即拒绝；
///    地点非空但两边都未命中也拒绝；地点为空且无任何信号
///    时按 `ALLOW_UNKNOWN_LOCATION` 放行
pub fn is_eligible(record: &JobRecord, max_days_old: i64, now: chrono::DateTime<chrono::Utc>) -> bool {
    if record.title.chars().count() < MIN_TITLE_LEN || record.url.is_empty() {
        return false;
    }

    let title_lower = record.title.to_lowercase();
    let description_lower = record.description.to_lowercase();
    if !contains_any(&title_lower, TECH_KEYWORDS)
        && !contains_any(&description_lower, TECH_KEYWORDS)
    {
        return false;
    }

    if record.experience_level == ExperienceLevel::SeniorLevel {
        return false;
    }

    if !date_parser::is_recent_job(&record.posted_date_text, max_days_old, now) {
        return false;
    }

    let location_lower = record.location.to_lowercase();
    let full_text = format!("{} {} {}", title_lower, description_lower, location_lower);
    if !contains_any(&full_text, USA_KEYWORDS) {
        if contains_any(&full_text, INTERNATIONAL_KEYWORDS) {
            return false;
        }
        if record.location.is_empty() {
            if !ALLOW_UNKNOWN_LOCATION {
                return false;
            }
        } else {
            // Non-empty location that matches neither list.
            return false;
        }
    }

    true
}

#[cfg(test)]
#[path = "validation_test.rs"]
mod tests;
