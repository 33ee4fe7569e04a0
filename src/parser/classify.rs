use crate::record::Category;

/// Ordered classification rules. Priority is the table order, not the marker
/// position within the title: a title containing both 申报 and 结题 is
/// always 课题申报.
const CATEGORY_RULES: &[(&str, Category)] = &[
    ("申报", Category::CourseApplication),
    ("结题", Category::ProjectClosure),
    ("认定", Category::AchievementRecognition),
    ("评级", Category::AchievementRating),
];

/// Boilerplate phrases stripped from titles, longest-first so the shorter
/// phrases (which are substrings of the longer ones) never fire early.
const REMOVE_PHRASES: &[&str] = &["关于组织", "关于", "工作的通知", "的通知"];

pub fn classify(title: &str) -> Category {
    CATEGORY_RULES
        .iter()
        .find(|(marker, _)| title.contains(marker))
        .map(|(_, category)| *category)
        .unwrap_or(Category::Other)
}

pub fn normalize_title(title: &str) -> String {
    let mut cleaned = title.to_string();
    for phrase in REMOVE_PHRASES {
        cleaned = cleaned.replace(phrase, "");
    }
    cleaned.trim().to_string()
}

// ── Tests ──
