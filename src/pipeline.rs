use anyhow::Result;
use chrono::Datelike;
use indicatif::{ProgressBar, ProgressStyle};
use scraper::Html;
use tracing::info;

use crate::fetch::PageSource;
use crate::parser::classify::{classify, normalize_title};
use crate::parser::detail;
use crate::parser::list::{self, RawItem};
use crate::record::AnnounceRecord;

pub const BASE_URL: &str = "https://www.dufe.edu.cn/";

/// Titles carrying these markers are skipped and do not count toward the
/// row cap.
const EXCLUDE_MARKERS: &[&str] = &["研讨会", "实践"];

/// Listing index URLs for the first `pages` pages.
pub fn listing_urls(pages: usize) -> Vec<String> {
    (1..=pages)
        .map(|i| format!("{}r_6_{}.html", BASE_URL, i))
        .collect()
}

/// Walk the configured listing pages in order and build the record set.
/// The cap counts the header row, so `limit` rows means at most `limit - 1`
/// records; once it is reached no further page or detail fetch happens.
pub async fn run(
    source: &dyn PageSource,
    listing_urls: &[String],
    limit: usize,
) -> Result<Vec<AnnounceRecord>> {
    let mut records: Vec<AnnounceRecord> = Vec::new();

    let pb = ProgressBar::new(listing_urls.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("[{elapsed_precise}] {bar:40} {pos}/{len} pages")?
            .progress_chars("=> "),
    );

    'pages: for url in listing_urls {
        let listing_html = source.get_text(url).await?;
        let items = list::parse_listing(&Html::parse_document(&listing_html))?;

        for item in items {
            // Header row counts toward the cap
            if records.len() + 1 >= limit {
                break 'pages;
            }

            let detail_url = resolve_url(&item.href);
            info!("Scraping {}:{}", records.len() + 1, item.title);

            if is_excluded(&item.title) {
                continue;
            }

            let record = build_record(source, &item, &detail_url).await?;
            records.push(record);
        }

        pb.inc(1);
    }

    pb.finish_and_clear();
    info!("Collected {} records", records.len());
    Ok(records)
}

async fn build_record(
    source: &dyn PageSource,
    item: &RawItem,
    detail_url: &str,
) -> Result<AnnounceRecord> {
    let category = classify(&item.title);
    let name = normalize_title(&item.title);

    let detail_html = source.get_text(detail_url).await?;
    let (due_date, contact) = {
        let doc = Html::parse_document(&detail_html);
        detail::enrich(&doc, item.post_date.year())
    };

    Ok(AnnounceRecord {
        name,
        category,
        post_date: item.post_date,
        due_date,
        contact,
        url: detail_url.to_string(),
    })
}

fn resolve_url(href: &str) -> String {
    format!("{}{}", BASE_URL, href.trim_start_matches('/'))
}

fn is_excluded(title: &str) -> bool {
    EXCLUDE_MARKERS.iter().any(|marker| title.contains(marker))
}

// ── Tests ──
