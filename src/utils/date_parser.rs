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

use chrono::{DateTime, Duration, Utc};
use once_cell::sync::Lazy;
use regex::Regex;

static DAYS_AGO: Lazy<Regex> = Lazy::new(|| Regex::new(r"(\d+)\s*days?\s*ago").expect("days regex"));
static HOURS_AGO: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\d+)\s*hours?\s*ago").expect("hours regex"));
static WEEKS_AGO: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\d+)\s*weeks?\s*ago").expect("weeks regex"));

/// 解析相对日期文本
///
/// 将 "3 days ago"、"yesterday"、"last week" 等相对日期文本
/// 换算为以 `now` 为基准的绝对时间。无法识别的文本返回 `None`，
/// 调用方将其视为"日期未知"，而不是错误。
pub fn parse_relative_date(date_text: &str, now: DateTime<Utc>) -> Option<DateTime<Utc>> {
    let text = date_text.trim().to_lowercase();
    if text.is_empty() {
        return None;
    }

    if text.contains("today") || text.contains("just now") {
        return Some(now);
    }

    if text.contains("yesterday") {
        return Some(now - Duration::days(1));
    }

    if let Some(caps) = DAYS_AGO.captures(&text) {
        let days: i64 = caps[1].parse().ok()?;
        return Some(now - Duration::days(days));
    }

    if let Some(caps) = HOURS_AGO.captures(&text) {
        let hours: i64 = caps[1].parse().ok()?;
        return Some(now - Duration::hours(hours));
    }

    if let Some(caps) = WEEKS_AGO.captures(&text) {
        let weeks: i64 = caps[1].parse().ok()?;
        return Some(now - Duration::weeks(weeks));
    }

    if text.contains("last week") {
        return Some(now - Duration::weeks(1));
    }

    None
}

/// 判断职位是否在时间窗口内
///
/// 空文本或无法解析的文本按"最近发布"处理（宁可多收不可漏收）。
pub fn is_recent_job(date_text: &str, max_days: i64, now: DateTime<Utc>) -> bool {
    if date_text.trim().is_empty() {
        return true;
    }

    let Some(parsed) = parse_relative_date(date_text, now) else {
        return true;
    };

    (now - parsed).num_days() <= max_days
}

#[cfg(test)]
#[path = "date_parser_test.rs"]
mod tests;
