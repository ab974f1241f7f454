use std::io::Write;

use anyhow::{bail, Context};
use futures::future::join_all;
use log::info;
use product_scraper::{
    ExtractionService, FirecrawlClient, FirecrawlConfig, ProductScraper,
};

const USAGE: &str = "usage: product-scraper <url>...";

fn parse_urls<I: IntoIterator<Item = String>>(args: I) -> anyhow::Result<Vec<String>> {
    let urls: Vec<String> = args.into_iter().collect();
    if urls.is_empty() {
        bail!(USAGE);
    }
    Ok(urls)
}

fn load_scraper<F>(lookup: F) -> anyhow::Result<ProductScraper<FirecrawlClient>>
where
    F: Fn(&str) -> Option<String>,
{
    let config = FirecrawlConfig::from_lookup(lookup).context("loading Firecrawl configuration")?;
    let client = FirecrawlClient::new(config).context("building Firecrawl client")?;
    Ok(ProductScraper::new(client))
}

/// Scrapes every URL concurrently and writes each record as JSON. Returns the
/// number of records written, or an error if any scrape failed.
async fn run<S, W>(scraper: &ProductScraper<S>, urls: &[String], out: &mut W) -> anyhow::Result<usize>
where
    S: ExtractionService,
    W: Write,
{
    let results = join_all(urls.iter().map(|url| scraper.scrape_product(url))).await;

    let mut scraped = 0;
    // Failures are already logged by the scraper's observer.
    for record in results.into_iter().flatten() {
        writeln!(out, "{}", serde_json::to_string_pretty(&record)?)?;
        scraped += 1;
    }

    info!("Scraped {}/{} products", scraped, urls.len());
    let failures = urls.len() - scraped;
    if failures > 0 {
        bail!("{} of {} scrapes failed", failures, urls.len());
    }

    Ok(scraped)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .filter_module("hyper", log::LevelFilter::Warn)
        .filter_module("reqwest", log::LevelFilter::Warn)
        .init();

    let urls = parse_urls(std::env::args().skip(1))?;
    let scraper = load_scraper(|key| std::env::var(key).ok())?;

    let stdout = std::io::stdout();
    run(&scraper, &urls, &mut stdout.lock()).await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use product_scraper::scrapers::{MockResponse, MockService};
    use product_scraper::{NoopObserver, ScrapeDocument};
    use serde_json::json;
    use std::sync::Arc;

    fn mock_scraper(responses: Vec<MockResponse>) -> ProductScraper<MockService> {
        ProductScraper::new(MockService::new(responses)).with_observer(Arc::new(NoopObserver))
    }

    fn urls(list: &[&str]) -> Vec<String> {
        list.iter().map(|u| u.to_string()).collect()
    }

    #[test]
    fn test_no_urls_is_usage_error() {
        let err = parse_urls(Vec::new()).unwrap_err();
        assert_eq!(err.to_string(), USAGE);

        let parsed = parse_urls(urls(&["https://example.com/widget"])).unwrap();
        assert_eq!(parsed, vec!["https://example.com/widget".to_string()]);
    }

    #[test]
    fn test_missing_api_key_is_config_error() {
        let err = load_scraper(|_| None).err().unwrap();
        assert_eq!(err.to_string(), "loading Firecrawl configuration");

        let scraper = load_scraper(|key| (key == "FIRECRAWL_API_KEY").then(|| "fc-123".to_string()));
        assert!(scraper.is_ok());
    }

    #[tokio::test]
    async fn test_all_scrapes_succeed() {
        let scraper = mock_scraper(vec![MockResponse::document(ScrapeDocument::with_json(
            json!({ "productName": "Widget", "currentPrice": 19.99 }),
        ))]);
        let mut out = Vec::new();

        let scraped = run(
            &scraper,
            &urls(&["https://example.com/a", "https://example.com/b"]),
            &mut out,
        )
        .await
        .unwrap();

        assert_eq!(scraped, 2);
        let printed = String::from_utf8(out).unwrap();
        assert_eq!(printed.matches("\"productName\": \"Widget\"").count(), 2);
    }

    #[tokio::test]
    async fn test_failures_are_counted() {
        let scraper = mock_scraper(vec![
            MockResponse::document(ScrapeDocument::with_json(json!({ "productName": "Widget" }))),
            MockResponse::failure(503, "engine overloaded"),
            MockResponse::document(ScrapeDocument::with_json(json!({}))),
        ]);
        let mut out = Vec::new();

        let err = run(
            &scraper,
            &urls(&[
                "https://example.com/a",
                "https://example.com/b",
                "https://example.com/c",
            ]),
            &mut out,
        )
        .await
        .unwrap_err();

        assert_eq!(err.to_string(), "2 of 3 scrapes failed");
        let printed = String::from_utf8(out).unwrap();
        assert_eq!(printed.matches("\"productName\"").count(), 1);
        assert_eq!(scraper.service().requests().len(), 3);
    }
}
