use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;
use scraper::{Html, Selector};

// 截止日期 and 截止时间 are used interchangeably on the site; the capture
// runs up to the first 日 after the marker.
static DUE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"截止(?:日期|时间)：(.+?日)").unwrap());
static FULL_DATE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d{4})年(\d{1,2})月(\d{1,2})日$").unwrap());
static MONTH_DAY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d{1,2})月(\d{1,2})日$").unwrap());

static CONTENT_SEL: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse(".xwnr_content").unwrap());

const CONTACT_MARKER: &str = "联系人：";
const HONORIFIC: &str = "老师";
const CLAUSE_SEPARATOR: char = '；';

/// Pull the due date out of free announcement text. Tries the full
/// 2024年03月15日 form first, then 03月15日 with the publish year attached.
/// Absence (no marker, or an expression that is not a date) is not an error.
pub fn extract_due_date(text: &str, year: i32) -> Option<NaiveDate> {
    let expr = DUE_RE.captures(text)?.get(1)?.as_str();

    if let Some(caps) = FULL_DATE_RE.captures(expr) {
        let y = caps[1].parse().ok()?;
        let m = caps[2].parse().ok()?;
        let d = caps[3].parse().ok()?;
        return NaiveDate::from_ymd_opt(y, m, d);
    }
    if let Some(caps) = MONTH_DAY_RE.captures(expr) {
        let m = caps[1].parse().ok()?;
        let d = caps[2].parse().ok()?;
        return NaiveDate::from_ymd_opt(year, m, d);
    }
    None
}

/// Clean one text node known to contain the 联系人： label: drop everything
/// through the last label occurrence, cut after the first 老师 (keeping it),
/// then cut from the first ；.
pub fn extract_contact(node_text: &str) -> String {
    let mut contact = node_text.trim().to_string();
    if let Some(pos) = contact.rfind(CONTACT_MARKER) {
        contact = contact[pos + CONTACT_MARKER.len()..].to_string();
    }
    if let Some(pos) = contact.find(HONORIFIC) {
        contact.truncate(pos + HONORIFIC.len());
    }
    if let Some(pos) = contact.find(CLAUSE_SEPARATOR) {
        contact.truncate(pos);
    }
    contact
}

/// Enrich one parsed detail page: due date from the main content region's
/// text, contact from the first text node anywhere carrying the label.
pub fn enrich(doc: &Html, year: i32) -> (Option<NaiveDate>, String) {
    let content_text: String = doc
        .select(&CONTENT_SEL)
        .next()
        .map(|region| region.text().collect())
        .unwrap_or_default();
    let due_date = extract_due_date(&content_text, year);

    let contact = doc
        .root_element()
        .text()
        .find(|node| node.contains(CONTACT_MARKER))
        .map(extract_contact)
        .unwrap_or_default();

    (due_date, contact)
}

// ── Tests ──
