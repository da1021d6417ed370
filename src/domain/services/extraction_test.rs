// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

#[cfg(test)]
mod tests {
    use crate::domain::models::job::ExperienceLevel;
    use crate::domain::models::source::Source;
    use crate::domain::services::extraction::extract;
    use chrono::{Duration, Utc};
    use scraper::{Html, Selector};
    use url::Url;

    fn source() -> Source {
        Source::new("Acme", Url::parse("https://acme.example/careers").unwrap())
    }

    fn first_div(doc: &Html) -> scraper::ElementRef<'_> {
        let sel = Selector::parse("div").unwrap();
        doc.select(&sel).next().unwrap()
    }

    #[test]
    fn test_anchor_element_uses_own_text_and_href() {
        let doc = Html::parse_document(
            r#"<a href="/jobs/42">Junior Software Engineer</a>"#,
        );
        let sel = Selector::parse("a").unwrap();
        let element = doc.select(&sel).next().unwrap();

        let record = extract(element, &source(), Utc::now()).unwrap();
        assert_eq!(record.title, "Junior Software Engineer");
        assert_eq!(record.url, "https://acme.example/jobs/42");
        assert_eq!(record.company, "Acme");
    }

    #[test]
    fn test_heading_title_and_descendant_href() {
        let doc = Html::parse_document(
            r#"<div class="job-card">
                <h3>Backend Developer</h3>
                <a href="https://acme.example/jobs/7">Apply</a>
                <span>Remote - USA</span>
                <span>Posted 2 days ago</span>
                <span>$90,000 - $120,000</span>
                <span>Full-time</span>
            </div>"#,
        );

        let now = Utc::now();
        let record = extract(first_div(&doc), &source(), now).unwrap();
        assert_eq!(record.title, "Backend Developer");
        assert_eq!(record.url, "https://acme.example/jobs/7");
        assert_eq!(record.location, "Remote - USA");
        assert_eq!(record.posted_date_text, "2 days ago");
        assert_eq!(record.posted_date, Some(now - Duration::days(2)));
        assert_eq!(record.salary, "$90,000 - $120,000");
        assert_eq!(record.employment_type, "Full-time");
    }

    #[test]
    fn test_title_falls_back_to_keyword_line() {
        let doc = Html::parse_document(
            r#"<div class="job-card">
                <span>Open role</span>
                <span>Cloud Platform Engineer, Core Infrastructure</span>
                <a href="/jobs/9">details</a>
            </div>"#,
        );

        let record = extract(first_div(&doc), &source(), Utc::now()).unwrap();
        assert_eq!(record.title, "Cloud Platform Engineer, Core Infrastructure");
    }

    #[test]
    fn test_missing_url_drops_record() {
        let doc = Html::parse_document(
            r#"<div class="job-card"><h3>Backend Developer</h3></div>"#,
        );
        assert!(extract(first_div(&doc), &source(), Utc::now()).is_none());
    }

    #[test]
    fn test_missing_title_drops_record() {
        let doc = Html::parse_document(
            r#"<div class="job-card"><a href="/jobs/3"></a><span>ok</span></div>"#,
        );
        assert!(extract(first_div(&doc), &source(), Utc::now()).is_none());
    }

    #[test]
    fn test_description_capped_and_experience_classified() {
        let body = "x".repeat(600);
        let html = format!(
            r#"<div class="job-card"><h3>Junior Data Analyst</h3><a href="/jobs/5">go</a><p>{}</p></div>"#,
            body
        );
        let doc = Html::parse_document(&html);

        let record = extract(first_div(&doc), &source(), Utc::now()).unwrap();
        assert_eq!(record.description.chars().count(), 500);
        assert_eq!(record.experience_level, ExperienceLevel::EntryLevel);
        assert!(record.raw_text.len() > record.description.len());
    }
}
