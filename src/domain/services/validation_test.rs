// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

#[cfg(test)]
mod tests {
    use crate::domain::models::job::{ExperienceLevel, JobRecord};
    use crate::domain::services::validation::{classify_experience, is_eligible};
    use chrono::Utc;

    fn record(title: &str, description: &str, location: &str) -> JobRecord {
        JobRecord {
            title: title.to_string(),
            company: "Acme".to_string(),
            url: "https://acme.example/jobs/1".to_string(),
            description: description.to_string(),
            experience_level: classify_experience(title, description),
            location: location.to_string(),
            posted_date_text: String::new(),
            posted_date: None,
            salary: String::new(),
            employment_type: String::new(),
            raw_text: description.to_string(),
        }
    }

    #[test]
    fn test_senior_title_trumps_entry_body() {
        // Title signal is trusted over body signal, unconditionally.
        assert_eq!(
            classify_experience("Senior Software Engineer", "great for new grads, entry level"),
            ExperienceLevel::SeniorLevel
        );
    }

    #[test]
    fn test_low_year_count_is_entry() {
        assert_eq!(
            classify_experience("Software Engineer", "2 years experience required"),
            ExperienceLevel::EntryLevel
        );
    }

    #[test]
    fn test_high_year_count_is_senior() {
        assert_eq!(
            classify_experience("Software Engineer", "7+ years of experience"),
            ExperienceLevel::SeniorLevel
        );
    }

    #[test]
    fn test_explicit_entry_keyword_wins_over_years() {
        assert_eq!(
            classify_experience("Software Engineer", "new grad role"),
            ExperienceLevel::EntryLevel
        );
    }

    #[test]
    fn test_ambiguous_defaults_to_entry() {
        assert_eq!(
            classify_experience("Software Engineer", "join our team"),
            ExperienceLevel::EntryLevel
        );
    }

    #[test]
    fn test_rejects_short_title() {
        let now = Utc::now();
        let r = record("Eng", "remote software developer role", "Remote");
        assert!(!is_eligible(&r, 7, now));
    }

    #[test]
    fn test_rejects_empty_url() {
        let now = Utc::now();
        let mut r = record("Software Engineer", "remote role", "Remote");
        r.url = String::new();
        assert!(!is_eligible(&r, 7, now));
    }

    #[test]
    fn test_rejects_non_tech_posting() {
        let now = Utc::now();
        let r = record("Shop Floor Manner Coach", "help people be nice", "");
        assert!(!is_eligible(&r, 7, now));
    }

    #[test]
    fn test_rejects_senior_record() {
        let now = Utc::now();
        let r = record("Senior Software Engineer", "remote role", "Remote");
        assert!(!is_eligible(&r, 7, now));
    }

    #[test]
    fn test_rejects_stale_posting() {
        let now = Utc::now();
        let mut r = record("Software Engineer", "remote role", "Remote");
        r.posted_date_text = "12 days ago".to_string();
        assert!(!is_eligible(&r, 7, now));
    }

    #[test]
    fn test_missing_date_assumed_recent() {
        let now = Utc::now();
        let r = record("Software Engineer", "remote role", "Remote");
        assert!(r.posted_date_text.is_empty());
        assert!(is_eligible(&r, 7, now));
    }

    #[test]
    fn test_ambiguous_location_is_allowed() {
        let now = Utc::now();
        // No USA keyword, no international keyword, empty location.
        let r = record("Junior Developer", "golang microservices", "");
        assert!(is_eligible(&r, 7, now));
    }

    #[test]
    fn test_international_location_is_rejected() {
        let now = Utc::now();
        let r = record("Junior Developer", "join our London team", "London, UK");
        assert!(!is_eligible(&r, 7, now));
    }

    #[test]
    fn test_unmatched_nonempty_location_is_rejected() {
        let now = Utc::now();
        let r = record("Junior Developer", "golang microservices", "Springfield");
        assert!(!is_eligible(&r, 7, now));
    }
}
