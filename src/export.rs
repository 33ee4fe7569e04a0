use std::path::Path;

use anyhow::{Context, Result};

use crate::record::{AnnounceRecord, HEADERS};

/// Overwrite the CSV file with the header row plus one row per record.
pub fn write_csv(path: &Path, records: &[AnnounceRecord]) -> Result<()> {
    let mut wtr = csv::Writer::from_path(path)
        .with_context(|| format!("failed to open {}", path.display()))?;

    wtr.write_record(HEADERS)?;
    for record in records {
        wtr.write_record(&record.to_row())?;
    }
    wtr.flush()?;
    Ok(())
}

// ── Tests ──
