use chrono::NaiveDate;

/// Column labels for both sinks, in output order.
pub const HEADERS: [&str; 6] = [
    "项目名称",
    "项目类型",
    "发布日期",
    "截止日期",
    "联系人",
    "网页URL",
];

/// Closed category set. Rendered with the site's own Chinese labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    CourseApplication,
    ProjectClosure,
    AchievementRecognition,
    AchievementRating,
    Other,
}

impl Category {
    pub fn label(self) -> &'static str {
        match self {
            Category::CourseApplication => "课题申报",
            Category::ProjectClosure => "项目结题",
            Category::AchievementRecognition => "成果认定",
            Category::AchievementRating => "成果评级",
            Category::Other => "其他",
        }
    }
}

/// One fully assembled announcement. Immutable once built; appended to the
/// result set exactly once, in scrape order.
#[derive(Debug, Clone)]
pub struct AnnounceRecord {
    pub name: String,
    pub category: Category,
    pub post_date: NaiveDate,
    pub due_date: Option<NaiveDate>,
    pub contact: String,
    pub url: String,
}

impl AnnounceRecord {
    /// Render as a sink row. Dates use the site's 2024年03月15日 form;
    /// a missing due date becomes an empty field.
    pub fn to_row(&self) -> [String; 6] {
        [
            self.name.clone(),
            self.category.label().to_string(),
            format_date(self.post_date),
            self.due_date.map(format_date).unwrap_or_default(),
            self.contact.clone(),
            self.url.clone(),
        ]
    }
}

fn format_date(d: NaiveDate) -> String {
    d.format("%Y年%m月%d日").to_string()
}

// ── Tests ──

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(due: Option<NaiveDate>) -> AnnounceRecord {
        AnnounceRecord {
            name: "2024年度省社科基金项目申报".to_string(),
            category: Category::CourseApplication,
            post_date: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
            due_date: due,
            contact: "张老师".to_string(),
            url: "https://www.dufe.edu.cn/c_1234.html".to_string(),
        }
    }

    #[test]
    fn row_renders_dates_in_chinese_form() {
        let row = sample(NaiveDate::from_ymd_opt(2024, 3, 15)).to_row();
        assert_eq!(row[2], "2024年03月01日");
        assert_eq!(row[3], "2024年03月15日");
    }

    #[test]
    fn missing_due_date_is_empty_field() {
        let row = sample(None).to_row();
        assert_eq!(row[3], "");
    }

    #[test]
    fn category_labels() {
        assert_eq!(Category::Other.label(), "其他");
        assert_eq!(Category::AchievementRating.label(), "成果评级");
    }
}
