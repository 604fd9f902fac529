//! Cross-page selection example.
//!
//! Run with: cargo run --example select_rows -- 30
//!
//! Loads the first page of the catalog, then selects the given number of
//! rows starting there. Set ARTIC_API_URL (or put it in a .env file) to use
//! another endpoint.

use std::env;

use artic_lib::ArticClient;
use artic_lib::Grid;
use artic_lib::api::PageNumber;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let _ = dotenvy::dotenv();

    let count = env::args().nth(1).unwrap_or_else(|| "15".to_string());
    let mut builder = ArticClient::builder();
    if let Ok(url) = env::var("ARTIC_API_URL") {
        builder = builder.base_url(url);
    }

    let mut grid = Grid::new(builder.build()?);
    grid.load(PageNumber::FIRST).await?;
    println!(
        "Page {} of {} ({} artworks)\n",
        grid.page(),
        grid.page_count(),
        grid.total_records()
    );

    grid.set_pending_input(count.as_str());
    match grid.submit_pending(true).await {
        Some(accumulation) => {
            println!("Outcome: {:?}", accumulation.outcome());
            println!("Pages fetched: {}", accumulation.pages_fetched());
            for id in accumulation.ids() {
                println!("  {}", id);
            }
        }
        None => println!("'{}' is not a positive number of rows", count),
    }

    Ok(())
}
