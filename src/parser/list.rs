use std::sync::LazyLock;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use scraper::{ElementRef, Html, Selector};

static ITEM_SEL: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse(".xw-list ul li a").unwrap());

/// One listing entry before enrichment. Consumed immediately by the
/// pipeline, never persisted.
#[derive(Debug, Clone)]
pub struct RawItem {
    pub title: String,
    pub href: String,
    pub post_date: NaiveDate,
}

/// Parse one listing page into items in document order. The date badge is
/// the anchor's next sibling <span>, rendered as (2024.05.12); a missing or
/// malformed badge fails the whole page.
pub fn parse_listing(doc: &Html) -> Result<Vec<RawItem>> {
    let mut items = Vec::new();

    for anchor in doc.select(&ITEM_SEL) {
        let title = anchor.text().collect::<String>().trim().to_string();
        let href = anchor
            .value()
            .attr("href")
            .with_context(|| format!("listing anchor '{}' has no href", title))?
            .to_string();

        let badge = next_sibling_span(anchor)
            .with_context(|| format!("no date badge after listing item '{}'", title))?;
        let badge_text = badge.text().collect::<String>();
        // Skip the opening bracket, keep the 10 date characters
        let date_part: String = badge_text.trim().chars().skip(1).take(10).collect();
        let post_date = NaiveDate::parse_from_str(&date_part, "%Y.%m.%d")
            .with_context(|| format!("bad date badge '{}' on item '{}'", badge_text.trim(), title))?;

        items.push(RawItem { title, href, post_date });
    }

    Ok(items)
}

fn next_sibling_span(anchor: ElementRef) -> Option<ElementRef> {
    anchor
        .next_siblings()
        .filter_map(ElementRef::wrap)
        .find(|el| el.value().name() == "span")
}

// ── Tests ──

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(fixture: &str) -> Result<Vec<RawItem>> {
        let html = std::fs::read_to_string(format!("tests/fixtures/{}.html", fixture)).unwrap();
        parse_listing(&Html::parse_document(&html))
    }

    #[test]
    fn items_in_document_order() {
        let items = parse("listing").unwrap();
        assert_eq!(items.len(), 4);
        assert_eq!(items[0].title, "关于组织申报2024年度省社科基金项目工作的通知");
        assert_eq!(items[0].href, "/c_1001.html");
        assert_eq!(
            items[0].post_date,
            NaiveDate::from_ymd_opt(2024, 5, 12).unwrap()
        );
        assert_eq!(items[3].title, "关于开展科研成果认定的通知");
    }

    #[test]
    fn badge_brackets_are_skipped() {
        let items = parse("listing").unwrap();
        assert_eq!(
            items[1].post_date,
            NaiveDate::from_ymd_opt(2024, 4, 30).unwrap()
        );
    }

    #[test]
    fn missing_badge_is_fatal() {
        let html = r#"<div class="xw-list"><ul>
            <li><a href="/c_1.html">无日期的通知</a></li>
        </ul></div>"#;
        let err = parse_listing(&Html::parse_document(html)).unwrap_err();
        assert!(err.to_string().contains("no date badge"));
    }

    #[test]
    fn malformed_badge_is_fatal() {
        let html = r#"<div class="xw-list"><ul>
            <li><a href="/c_1.html">坏日期的通知</a><span>(昨天发布哦!)</span></li>
        </ul></div>"#;
        assert!(parse_listing(&Html::parse_document(html)).is_err());
    }

    #[test]
    fn anchors_outside_list_region_ignored() {
        let html = r#"<body>
            <a href="/nav.html">导航</a>
            <div class="xw-list"><ul>
              <li><a href="/c_1.html">通知一</a><span>(2024.01.02)</span></li>
            </ul></div>
        </body>"#;
        let items = parse_listing(&Html::parse_document(html)).unwrap();
        assert_eq!(items.len(), 1);
    }
}
