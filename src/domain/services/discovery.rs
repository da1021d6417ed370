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

use crate::utils::keywords::{contains_any, JOB_LINK_HINTS, TECH_KEYWORDS};
use once_cell::sync::Lazy;
use scraper::{ElementRef, Html, Selector};
use tracing::debug;

/// 职位卡片选择器级联
///
/// 顺序即优先级：第一个产生非空匹配集的选择器胜出。
/// 这是刻意的"精确优先于召回"取舍，避免把宽模式的噪声
/// 混进窄模式已经命中的结果。
const CARD_SELECTOR_PATTERNS: &[&str] = &[
    r#"div[class*="job"]"#,
    r#"li[class*="job"]"#,
    r#"article[class*="job"]"#,
    r#"div[class*="position"]"#,
    r#"div[class*="opening"]"#,
    r#"div[class*="role"]"#,
    r#"a[href*="/job"]"#,
    r#"a[href*="/jobs/"]"#,
    r#"a[href*="/career"]"#,
    r#"[data-job-id]"#,
    r#"[data-automation-id*="job"]"#,
    r#"[role="listitem"]"#,
    r#".search-result"#,
    r#".job-result"#,
    r#".position"#,
    r#".opportunity"#,
];

static CARD_SELECTORS: Lazy<Vec<Selector>> = Lazy::new(|| {
    CARD_SELECTOR_PATTERNS
        .iter()
        .map(|p| Selector::parse(p).expect("card selector"))
        .collect()
});

static ANCHORS: Lazy<Selector> = Lazy::new(|| Selector::parse("a[href]").expect("anchor selector"));

/// 锚点回退时的最小可见文本长度，用于过滤导航链接
const MIN_ANCHOR_TEXT_LEN: usize = 10;

/// 在解析后的页面中定位候选职位元素
///
/// 先走选择器级联，全部落空后回退到全页锚点扫描。
/// 两种方式都没有结果时返回空序列——页面没有职位，
/// 或页面结构无法识别，都不是错误。
pub fn discover(doc: &Html) -> Vec<ElementRef<'_>> {
    for (selector, pattern) in CARD_SELECTORS.iter().zip(CARD_SELECTOR_PATTERNS) {
        let elements: Vec<ElementRef<'_>> = doc.select(selector).collect();
        if !elements.is_empty() {
            debug!(pattern, count = elements.len(), "Selector cascade matched");
            return elements;
        }
    }

    let fallback: Vec<ElementRef<'_>> = doc
        .select(&ANCHORS)
        .filter(|link| looks_like_job_link(*link))
        .collect();

    if !fallback.is_empty() {
        debug!(count = fallback.len(), "Anchor fallback matched");
    }
    fallback
}

fn looks_like_job_link(link: ElementRef<'_>) -> bool {
    let href = link.value().attr("href").unwrap_or_default().to_lowercase();
    if contains_any(&href, JOB_LINK_HINTS) {
        return true;
    }

    let text = link.text().collect::<Vec<_>>().join(" ");
    let text = text.split_whitespace().collect::<Vec<_>>().join(" ");
    text.len() > MIN_ANCHOR_TEXT_LEN && contains_any(&text.to_lowercase(), TECH_KEYWORDS)
}

#[cfg(test)]
#[path = "discovery_test.rs"]
mod tests;
