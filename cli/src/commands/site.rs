//! Registry listing and crawl policy

use storefront::{endpoints, Client, CrawlPolicy};
use tabled::Tabled;

use crate::output::OutputFormat;

#[derive(Clone, Tabled, serde::Serialize)]
struct EndpointRow {
    resource: &'static str,
    operation: &'static str,
    url: String,
}

fn rows(client: &Client) -> Vec<EndpointRow> {
    endpoints::registry()
        .into_iter()
        .map(|entry| EndpointRow {
            resource: entry.resource,
            operation: entry.operation,
            url: client.endpoints().url(&entry.template),
        })
        .collect()
}

pub fn list_endpoints(client: &Client, format: OutputFormat) -> anyhow::Result<()> {
    format.print(&rows(client), |rows| rows.to_vec());
    Ok(())
}

pub fn robots(sitemap: Option<String>) -> anyhow::Result<()> {
    let policy = match sitemap {
        Some(url) => CrawlPolicy::default().with_sitemap(url),
        None => CrawlPolicy::default(),
    };
    print!("{}", policy.to_robots_txt());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rows_are_absolute() {
        let client = Client::new("http://localhost:8080").unwrap();
        let rows = rows(&client);
        assert!(rows.iter().all(|r| r.url.starts_with("http://localhost:8080/")));
        assert!(rows.iter().any(|r| r.url == "http://localhost:8080/product/{id}/versions"));
    }
}
