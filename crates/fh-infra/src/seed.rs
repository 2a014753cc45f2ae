//! Demo portfolio content
//!
//! A fresh namespace renders this seed until its owner replaces it.

use fh_core::{PortfolioSeed, Profile, Project, ProjectId, ProjectStatus};

/// The sample profile and project list shipped with the app.
pub fn demo_portfolio() -> PortfolioSeed {
    PortfolioSeed {
        profile: Profile {
            display_name: "Jordan Reyes".into(),
            headline: "Full-stack developer".into(),
            about: "I build small, sharp tools and the occasional mobile app.".into(),
            skills: vec![
                "Java".into(),
                "Kotlin".into(),
                "TypeScript".into(),
                "PostgreSQL".into(),
            ],
        },
        projects: vec![
            Project {
                id: ProjectId::new(3),
                title: "Weatherly".into(),
                description: "Seven-day forecasts with radar overlays.".into(),
                image_url: "https://images.foliohub.dev/seed/weatherly.png".into(),
                tags: vec!["TypeScript".into(), "React".into(), "OpenWeather".into()],
                status: ProjectStatus::Ongoing,
                date: "June 2025".into(),
                github_link: Some("https://github.com/jreyes/weatherly".into()),
                live_link: Some("https://weatherly.foliohub.dev".into()),
            },
            Project {
                id: ProjectId::new(2),
                title: "Finix".into(),
                description: "Offline-first personal expense tracker.".into(),
                image_url: "https://images.foliohub.dev/seed/finix.png".into(),
                tags: vec!["Java".into(), "Android SDK".into()],
                status: ProjectStatus::Completed,
                date: "March 2024".into(),
                github_link: Some("https://github.com/jreyes/finix".into()),
                live_link: None,
            },
            Project {
                id: ProjectId::new(1),
                title: "Notekeeper".into(),
                description: "Markdown notes with full-text search.".into(),
                image_url: "https://images.foliohub.dev/seed/notekeeper.png".into(),
                tags: vec!["Rust".into(), "SQLite".into()],
                status: ProjectStatus::Completed,
                date: "November 2023".into(),
                github_link: None,
                live_link: Some("https://notes.foliohub.dev".into()),
            },
        ],
    }
}
