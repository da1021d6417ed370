// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use once_cell::sync::Lazy;
use regex::Regex;

/// 技术岗位关键词表
///
/// 用于判断标题或正文是否与技术岗位相关，全部为小写子串匹配
pub const TECH_KEYWORDS: &[&str] = &[
    "engineer",
    "developer",
    "software",
    "programmer",
    "sde",
    "swe",
    "analyst",
    "scientist",
    "architect",
    "intern",
    "associate",
    "dev",
    "coder",
    "qa",
    "quality assurance",
    "devops",
    "full stack",
    "frontend",
    "backend",
    "data",
    "machine learning",
    "ai",
    "cloud",
    "security",
    "mobile",
    "web",
    "application",
    "systems",
    "technical",
    "it",
];

/// 初级岗位关键词表
pub const ENTRY_LEVEL_KEYWORDS: &[&str] = &[
    "entry level",
    "entry-level",
    "junior",
    "jr",
    "associate",
    "new grad",
    "recent grad",
    "graduate",
    "intern",
    "trainee",
    "level 1",
    "level i",
    "sde i",
    "sde 1",
    "engineer i",
    "engineer 1",
    "0-2 years",
    "1-2 years",
    "2-3 years",
    "no experience",
    "fresh",
    "beginner",
    "apprentice",
    "assistant",
    "1+ years",
    "2+ years",
    "3+ years",
];

/// 高级岗位关键词表
///
/// 仅对标题生效的硬性排除信号
pub const SENIOR_KEYWORDS: &[&str] = &[
    "senior",
    "sr.",
    "lead",
    "principal",
    "staff",
    "manager",
    "director",
    "head of",
    "vp",
    "vice president",
    "chief",
    "sde iii",
    "sde 3",
    "sde iv",
    "sde 4",
    "level 3",
    "level 4",
    "level 5",
    "5+ years",
    "6+ years",
    "7+ years",
    "8+ years",
    "9+ years",
    "10+ years",
];

/// 美国/远程地区关键词表
pub const USA_KEYWORDS: &[&str] = &[
    "usa",
    "united states",
    "us",
    "remote",
    "work from home",
    "telecommute",
    "california",
    "ca",
    "new york",
    "ny",
    "texas",
    "tx",
    "washington",
    "wa",
    "florida",
    "fl",
    "seattle",
    "san francisco",
    "chicago",
    "boston",
    "austin",
    "denver",
    "atlanta",
    "los angeles",
    "silicon valley",
    "bay area",
    "portland",
    "philadelphia",
    "phoenix",
    "dallas",
    "miami",
];

/// 已知海外地区关键词表
///
/// 命中即排除（在没有任何美国地区信号的前提下）
pub const INTERNATIONAL_KEYWORDS: &[&str] = &[
    "london",
    "uk",
    "canada",
    "toronto",
    "vancouver",
    "india",
    "bangalore",
    "hyderabad",
    "mumbai",
    "delhi",
    "china",
    "beijing",
    "shanghai",
    "europe",
    "germany",
    "france",
    "australia",
    "singapore",
    "japan",
];

/// 职位链接路径提示词
pub const JOB_LINK_HINTS: &[&str] = &["/job", "/career", "/position", "/opening"];

/// 发布时间文本模式表
///
/// 顺序敏感，取第一个命中的模式
pub static POSTED_DATE_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r"(\d+\s*days?\s*ago)",
        r"(\d+\s*hours?\s*ago)",
        r"(\d+\s*weeks?\s*ago)",
        r"(yesterday)",
        r"(today)",
        r"(just now)",
        r"(last week)",
        r"(posted\s+\d+\s*days?\s*ago)",
        r"(posted\s+yesterday)",
        r"(posted\s+today)",
    ]
    .iter()
    .map(|p| Regex::new(p).expect("posted-date pattern"))
    .collect()
});

/// 薪资文本模式表
pub static SALARY_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r"\$[\d,]+\s*-\s*\$[\d,]+",
        r"\$[\d,]+k?\s*-\s*\$?[\d,]+k?",
        r"salary:\s*\$[\d,]+",
        r"[\d,]+k?\s*-\s*[\d,]+k?\s*(?:per year|annually)",
    ]
    .iter()
    .map(|p| Regex::new(&format!("(?i){}", p)).expect("salary pattern"))
    .collect()
});

/// 经验年限模式表
///
/// 捕获组内为数字年限，区间模式捕获两个数字
pub static YEAR_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r"(\d+)\+?\s*years?\s*(?:of\s*)?(?:experience|exp)",
        r"minimum\s*(\d+)\s*years?",
        r"(\d+)\s*to\s*(\d+)\s*years?",
        r"(\d+)-(\d+)\s*years?",
    ]
    .iter()
    .map(|p| Regex::new(p).expect("year pattern"))
    .collect()
});

/// 雇佣类型映射表（顺序敏感）
pub const EMPLOYMENT_TYPES: &[(&str, &str)] = &[
    ("full-time", "Full-time"),
    ("full time", "Full-time"),
    ("part-time", "Part-time"),
    ("part time", "Part-time"),
    ("contract", "Contract"),
    ("contractor", "Contract"),
    ("internship", "Internship"),
    ("intern", "Internship"),
    ("temporary", "Temporary"),
    ("remote", "Remote"),
];

/// 判断小写文本是否包含任一关键词
pub fn contains_any(text_lower: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|k| text_lower.contains(k))
}

/// 从文本中提取发布时间原文
///
/// 未命中任何模式时返回空字符串
pub fn extract_posted_date_text(text: &str) -> String {
    let lower = text.to_lowercase();
    for pattern in POSTED_DATE_PATTERNS.iter() {
        if let Some(m) = pattern.find(&lower) {
            return m.as_str().to_string();
        }
    }
    String::new()
}

/// 从文本中提取薪资原文
pub fn extract_salary(text: &str) -> String {
    for pattern in SALARY_PATTERNS.iter() {
        if let Some(m) = pattern.find(text) {
            return m.as_str().to_string();
        }
    }
    String::new()
}

/// 从文本中提取雇佣类型
pub fn extract_employment_type(text: &str) -> String {
    let lower = text.to_lowercase();
    for (needle, label) in EMPLOYMENT_TYPES {
        if lower.contains(needle) {
            return (*label).to_string();
        }
    }
    String::new()
}

/// 提取文本中出现的最小经验年限
///
/// 扫描所有年限模式，返回所有命中数字中的最小值
pub fn min_years_required(text_lower: &str) -> Option<u32> {
    let mut min_years: Option<u32> = None;
    for pattern in YEAR_PATTERNS.iter() {
        for caps in pattern.captures_iter(text_lower) {
            let candidate = caps
                .iter()
                .skip(1)
                .flatten()
                .filter_map(|m| m.as_str().parse::<u32>().ok())
                .min();
            if let Some(years) = candidate {
                min_years = Some(min_years.map_or(years, |m: u32| m.min(years)));
            }
        }
    }
    min_years
}

#[cfg(test)]
#[path = "keywords_test.rs"]
mod tests;
