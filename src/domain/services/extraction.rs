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

use crate::domain::models::job::JobRecord;
use crate::domain::models::source::Source;
use crate::domain::services::validation;
use crate::utils::date_parser;
use crate::utils::keywords::{
    contains_any, extract_employment_type, extract_posted_date_text, extract_salary,
    TECH_KEYWORDS, USA_KEYWORDS,
};
use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;
use scraper::{ElementRef, Selector};

static HEADINGS: Lazy<Selector> =
    Lazy::new(|| Selector::parse("h1, h2, h3, h4, h5").expect("heading selector"));
static ANCHOR: Lazy<Selector> = Lazy::new(|| Selector::parse("a[href]").expect("anchor selector"));

/// 标题回退扫描的最小行长度
const MIN_TITLE_LINE_LEN: usize = 10;
/// 描述字段截取长度
const DESCRIPTION_LEN: usize = 500;
/// 地点行截取长度
const LOCATION_LEN: usize = 100;

/// 从候选元素提取职位记录
///
/// 所有派生规则都是启发式且顺序敏感的。标题或URL无法派生时
/// 返回 `None`，记录被静默丢弃——这是预期内的常见情况，
/// 不是错误。
pub fn extract(element: ElementRef<'_>, source: &Source, now: DateTime<Utc>) -> Option<JobRecord> {
    let lines = text_lines(element);
    let raw_text = lines.join(" ");

    let title = extract_title(element, &lines)?;
    let url = extract_url(element, source)?;

    let location = extract_location(&lines);
    let posted_date_text = extract_posted_date_text(&raw_text);
    let posted_date = date_parser::parse_relative_date(&posted_date_text, now);
    let experience_level = validation::classify_experience(&title, &raw_text);

    Some(JobRecord {
        title,
        company: source.name.clone(),
        url,
        description: raw_text.chars().take(DESCRIPTION_LEN).collect(),
        experience_level,
        location,
        posted_date_text,
        posted_date,
        salary: extract_salary(&raw_text),
        employment_type: extract_employment_type(&raw_text),
        raw_text,
    })
}

/// 收集元素的可见文本行
///
/// 每个文本节点归一化为单行，空白折叠为单个空格。
/// 行视图用于标题/地点的逐行扫描，拼接视图用于整体文本匹配。
fn text_lines(element: ElementRef<'_>) -> Vec<String> {
    element
        .text()
        .map(|chunk| chunk.split_whitespace().collect::<Vec<_>>().join(" "))
        .filter(|line| !line.is_empty())
        .collect()
}

fn extract_title(element: ElementRef<'_>, lines: &[String]) -> Option<String> {
    // Anchor elements carry the title as their own text.
    if element.value().name() == "a" {
        let title = lines.join(" ");
        return (!title.is_empty()).then_some(title);
    }

    // Otherwise prefer the first heading child.
    if let Some(heading) = element.select(&HEADINGS).next() {
        let title = text_lines(heading).join(" ");
        if !title.is_empty() {
            return Some(title);
        }
    }

    // Last resort: first line that looks like a job title.
    lines
        .iter()
        .find(|line| {
            line.len() > MIN_TITLE_LINE_LEN && contains_any(&line.to_lowercase(), TECH_KEYWORDS)
        })
        .cloned()
}

fn extract_url(element: ElementRef<'_>, source: &Source) -> Option<String> {
    let href = if element.value().name() == "a" {
        element.value().attr("href")
    } else {
        element
            .select(&ANCHOR)
            .next()
            .and_then(|a| a.value().attr("href"))
    }?;

    if href.is_empty() {
        return None;
    }

    if href.starts_with("http") {
        Some(href.to_string())
    } else {
        // Relative links resolve against the source endpoint.
        source.endpoint.join(href).ok().map(String::from)
    }
}

fn extract_location(lines: &[String]) -> String {
    for line in lines {
        if contains_any(&line.to_lowercase(), USA_KEYWORDS) {
            return line.chars().take(LOCATION_LEN).collect();
        }
    }
    String::new()
}

#[cfg(test)]
#[path = "extraction_test.rs"]
mod tests;
