//! Typed page content.
//!
//! The site is content-driven: pages receive these records and hand them to
//! the presentational components. Content lives in code rather than a CMS;
//! editing it is a deploy.

use campus_domain::content::{
    CourseMaterial, ProgramConfig, ProgramFeature, ProgramLevel, ProgramSchedule, StatItem, Tuition,
};

/// Everything the page renderers need, assembled once at slice init.
#[derive(Debug, Clone)]
pub struct SiteContent {
    pub announcement: Option<String>,
    pub stats: Vec<StatItem>,
    pub program: ProgramConfig,
}

impl SiteContent {
    /// The current published content set.
    #[must_use]
    pub fn standard() -> Self {
        Self {
            announcement: Some(
                "Enrollment for the autumn term is open — visits every Thursday.".to_owned(),
            ),
            stats: vec![
                StatItem {
                    icon: "M12 14l9-5-9-5-9 5 9 5z".to_owned(),
                    stat: "480+".to_owned(),
                    name: "Students enrolled".to_owned(),
                },
                StatItem {
                    icon: "M12 8v4l3 3".to_owned(),
                    stat: "25".to_owned(),
                    name: "Years of teaching".to_owned(),
                },
                StatItem {
                    icon: "M17 20h5v-2a3 3 0 00-5.356-1.857".to_owned(),
                    stat: "32".to_owned(),
                    name: "Certified teachers".to_owned(),
                },
                StatItem {
                    icon: "M9 12l2 2 4-4".to_owned(),
                    stat: "98%".to_owned(),
                    name: "Graduate success".to_owned(),
                },
            ],
            program: ProgramConfig {
                name: "English Immersion Program".to_owned(),
                description: "Small-group English courses for school-age learners, \
                              taught entirely in the target language."
                    .to_owned(),
                levels: vec![
                    ProgramLevel {
                        name: "Beginner".to_owned(),
                        description: "First words to confident sentences.".to_owned(),
                    },
                    ProgramLevel {
                        name: "Intermediate".to_owned(),
                        description: "Reading, writing, and everyday conversation.".to_owned(),
                    },
                    ProgramLevel {
                        name: "Advanced".to_owned(),
                        description: "Exam preparation and debate.".to_owned(),
                    },
                ],
                schedule: ProgramSchedule {
                    days: vec!["Monday".to_owned(), "Wednesday".to_owned(), "Friday".to_owned()],
                    times: vec![
                        "16:00 – 17:30".to_owned(),
                        "16:00 – 17:30".to_owned(),
                        "15:00 – 16:30".to_owned(),
                    ],
                },
                tuition: Tuition {
                    amount: 240.0,
                    currency: "EUR".to_owned(),
                    period: "month".to_owned(),
                },
                features: vec![
                    ProgramFeature {
                        title: "Native-level teachers".to_owned(),
                        description: "Every group is led by a certified teacher.".to_owned(),
                        icon: "M12 4.354a4 4 0 110 5.292".to_owned(),
                    },
                    ProgramFeature {
                        title: "Groups of eight".to_owned(),
                        description: "Everyone speaks, every lesson.".to_owned(),
                        icon: "M17 20h5v-2a3 3 0 00-5.356-1.857".to_owned(),
                    },
                    ProgramFeature {
                        title: "Term reports".to_owned(),
                        description: "Written progress reports twice a term.".to_owned(),
                        icon: "M9 5H7a2 2 0 00-2 2v12a2 2 0 002 2h10".to_owned(),
                    },
                ],
                materials: vec![
                    CourseMaterial { title: "Course reader".to_owned(), kind: "book".to_owned() },
                    CourseMaterial { title: "Workbook".to_owned(), kind: "book".to_owned() },
                    CourseMaterial {
                        title: "Listening library".to_owned(),
                        kind: "audio".to_owned(),
                    },
                ],
            },
        }
    }
}
