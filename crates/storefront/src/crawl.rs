//! Crawl-control policy served to search engines as `robots.txt`

/// Paths kept out of search indexes
pub const DISALLOWED_PATHS: [&str; 4] = ["/admin", "/login", "/reset-password", "/register"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CrawlPolicy {
    disallow: Vec<String>,
    sitemap: Option<String>,
}

impl Default for CrawlPolicy {
    fn default() -> Self {
        Self {
            disallow: DISALLOWED_PATHS.iter().map(|p| p.to_string()).collect(),
            sitemap: None,
        }
    }
}

impl CrawlPolicy {
    pub fn with_sitemap(mut self, sitemap_url: impl Into<String>) -> Self {
        self.sitemap = Some(sitemap_url.into());
        self
    }

    pub fn disallowed(&self) -> &[String] {
        &self.disallow
    }

    /// A path is blocked when a disallowed prefix matches whole segments:
    /// `/admin` blocks `/admin` and `/admin/users`, not `/administrator`.
    pub fn is_allowed(&self, path: &str) -> bool {
        !self.disallow.iter().any(|rule| {
            path.strip_prefix(rule.as_str())
                .is_some_and(|rest| rest.is_empty() || rest.starts_with('/') || rest.starts_with('?'))
        })
    }

    pub fn to_robots_txt(&self) -> String {
        let mut out = String::from("User-agent: *\nAllow: /\n");
        for rule in &self.disallow {
            out.push_str("Disallow: ");
            out.push_str(rule);
            out.push('\n');
        }
        if let Some(sitemap) = &self.sitemap {
            out.push_str("\nSitemap: ");
            out.push_str(sitemap);
            out.push('\n');
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disallow_list_is_exact() {
        let policy = CrawlPolicy::default();
        let mut rules: Vec<&str> = policy.disallowed().iter().map(String::as_str).collect();
        rules.sort_unstable();
        assert_eq!(rules, vec!["/admin", "/login", "/register", "/reset-password"]);
    }

    #[test]
    fn test_is_allowed() {
        let policy = CrawlPolicy::default();
        assert!(!policy.is_allowed("/admin"));
        assert!(!policy.is_allowed("/admin/products/1"));
        assert!(!policy.is_allowed("/login?next=/cart"));
        assert!(!policy.is_allowed("/reset-password"));
        assert!(!policy.is_allowed("/register"));
        assert!(policy.is_allowed("/"));
        assert!(policy.is_allowed("/product/iphone-15"));
        assert!(policy.is_allowed("/administrator"));
    }

    #[test]
    fn test_robots_txt() {
        let text = CrawlPolicy::default()
            .with_sitemap("https://shop.example/sitemap.xml")
            .to_robots_txt();
        assert!(text.starts_with("User-agent: *\nAllow: /\n"));
        assert_eq!(text.matches("Disallow: ").count(), 4);
        assert!(text.contains("Disallow: /reset-password\n"));
        assert!(text.ends_with("Sitemap: https://shop.example/sitemap.xml\n"));
    }
}
