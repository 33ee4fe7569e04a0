mod db;
mod export;
mod fetch;
mod parser;
mod pipeline;
mod record;

use std::path::PathBuf;
use std::time::Instant;

use clap::Parser;

#[derive(Parser)]
#[command(name = "announce_scraper", about = "dufe.edu.cn announcement scraper")]
struct Cli {
    /// Number of listing index pages to walk
    #[arg(short, long, default_value = "3")]
    pages: usize,

    /// Max output rows, header row included
    #[arg(short = 'n', long, default_value = "2")]
    limit: usize,

    /// CSV output path (overwritten each run)
    #[arg(long, default_value = "output.csv")]
    csv: PathBuf,

    /// SQLite output path (recreated each run)
    #[arg(long, default_value = "output.db")]
    db: PathBuf,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let t0 = Instant::now();
    let cli = Cli::parse();

    let fetcher = fetch::Fetcher::new()?;
    let urls = pipeline::listing_urls(cli.pages);
    let records = pipeline::run(&fetcher, &urls, cli.limit).await?;

    export::write_csv(&cli.csv, &records)?;
    println!("CSV 文件已写入！");

    db::write_db(&cli.db, &records)?;
    println!("数据已写入 SQLite 数据库表!");

    let elapsed = t0.elapsed();
    if elapsed.as_secs() >= 1 {
        println!("\nDone in {}", format_duration(elapsed));
    }

    Ok(())
}

fn format_duration(d: std::time::Duration) -> String {
    let secs = d.as_secs();
    if secs < 60 {
        format!("{:.1}s", d.as_secs_f64())
    } else {
        format!("{}m {}s", secs / 60, secs % 60)
    }
}
