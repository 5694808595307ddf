/// Lower-case title fragments that mark an internship or junior role.
pub const ENTRY_LEVEL_KEYWORDS: &[&str] = &[
    "intern",
    "junior",
    "entry",
    "graduate",
    "associate",
    "trainee",
];

/// Remotive titles are matched without "trainee".
pub const REMOTIVE_ENTRY_LEVEL_KEYWORDS: &[&str] =
    &["intern", "junior", "entry", "graduate", "associate"];

/// Role fragments counted by the title breakdown, in report tie-break order.
pub const ROLE_KEYWORDS: &[&str] = &[
    "Engineer",
    "Developer",
    "Data",
    "Machine Learning",
    "ML",
    "AI",
    "Senior",
    "Junior",
    "Full Stack",
    "Backend",
    "Frontend",
    "Scientist",
];
