use std::path::Path;

use anyhow::{Context, Result};
use rusqlite::Connection;

use crate::record::{AnnounceRecord, HEADERS};

const TABLE_NAME: &str = "announces";

/// Recreate the announces table from scratch and bulk-insert all rows in
/// result order. A pre-existing database file is removed first, so each run
/// fully replaces the previous one.
pub fn write_db(path: &Path, records: &[AnnounceRecord]) -> Result<()> {
    if path.exists() {
        std::fs::remove_file(path)
            .with_context(|| format!("failed to remove old database {}", path.display()))?;
    }

    let conn = Connection::open(path)
        .with_context(|| format!("failed to open database {}", path.display()))?;
    init_schema(&conn)?;
    insert_records(&conn, records)?;
    Ok(())
}

fn init_schema(conn: &Connection) -> Result<()> {
    let columns_def = HEADERS
        .iter()
        .map(|col| format!("\"{}\" TEXT", col))
        .collect::<Vec<_>>()
        .join(", ");
    conn.execute_batch(&format!(
        "DROP TABLE IF EXISTS \"{table}\";
         CREATE TABLE \"{table}\" ({columns});",
        table = TABLE_NAME,
        columns = columns_def,
    ))?;
    Ok(())
}

fn insert_records(conn: &Connection, records: &[AnnounceRecord]) -> Result<()> {
    let tx = conn.unchecked_transaction()?;
    {
        let mut stmt = tx.prepare(&format!(
            "INSERT INTO \"{}\" VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            TABLE_NAME
        ))?;
        for record in records {
            let row = record.to_row();
            stmt.execute(rusqlite::params![
                row[0], row[1], row[2], row[3], row[4], row[5],
            ])?;
        }
    }
    tx.commit()?;
    Ok(())
}

// ── Tests ──

#[cfg(test)]
mod tests {
    use super::*;

    use chrono::NaiveDate;

    use crate::record::Category;

    fn sample() -> AnnounceRecord {
        AnnounceRecord {
            name: "开展结题验收".to_string(),
            category: Category::ProjectClosure,
            post_date: NaiveDate::from_ymd_opt(2024, 4, 30).unwrap(),
            due_date: NaiveDate::from_ymd_opt(2024, 6, 30),
            contact: "王老师".to_string(),
            url: "https://www.dufe.edu.cn/c_2.html".to_string(),
        }
    }

    #[test]
    fn table_recreated_with_all_rows_in_order() {
        let dir = std::env::temp_dir().join("announce_scraper_db_test");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("output.db");

        // Write twice; second run must fully replace the first
        write_db(&path, &[sample(), sample()]).unwrap();
        write_db(&path, &[sample()]).unwrap();

        let conn = Connection::open(&path).unwrap();
        let count: usize = conn
            .query_row("SELECT COUNT(*) FROM announces", [], |r| r.get(0))
            .unwrap();
        assert_eq!(count, 1);

        let (name, category, due): (String, String, String) = conn
            .query_row(
                "SELECT \"项目名称\", \"项目类型\", \"截止日期\" FROM announces",
                [],
                |r| Ok((r.get(0)?, r.get(1)?, r.get(2)?)),
            )
            .unwrap();
        assert_eq!(name, "开展结题验收");
        assert_eq!(category, "项目结题");
        assert_eq!(due, "2024年06月30日");
    }
}
