//! Endpoint registry
//!
//! Every backend operation maps to one path here. Static paths are
//! constants; paths carrying an identifier are plain functions that
//! interpolate it verbatim. Ids are opaque, so nothing is escaped or
//! checked.

/// Authentication flow
pub mod auth {
    pub const SIGN_IN: &str = "/api/auth/sign-in";
    pub const SIGN_UP: &str = "/api/auth/sign-up";
    pub const CONFIRM_OTP: &str = "/api/auth/confirm-otp";
    pub const REGISTER_INFORMATION: &str = "/api/auth/register-information";
}

/// Customer and employee administration
pub mod user {
    pub const CUSTOMER: &str = "/user/customer";
    pub const EMPLOYEE: &str = "/user/employee";

    pub fn customer_by_id(id: &str) -> String {
        format!("{CUSTOMER}/{id}")
    }

    pub fn employee_by_id(id: &str) -> String {
        format!("{EMPLOYEE}/{id}")
    }
}

pub mod product {
    pub const BASE: &str = "/product";
    pub const LIST: &str = "/product/list";

    pub fn by_id(id: &str) -> String {
        format!("{BASE}/{id}")
    }

    pub fn versions(id: &str) -> String {
        format!("{BASE}/{id}/versions")
    }
}

pub mod product_version {
    pub const BASE: &str = "/product/version";

    pub fn by_id(id: &str) -> String {
        format!("{BASE}/{id}")
    }

    pub fn update(id: &str) -> String {
        by_id(id)
    }

    pub fn delete(id: &str) -> String {
        by_id(id)
    }
}

/// Paths shared by the named reference resources (brand, category, supplier)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReferencePaths {
    pub resource: &'static str,
    pub base: &'static str,
    pub all: &'static str,
    pub search: &'static str,
}

impl ReferencePaths {
    pub fn by_id(&self, id: &str) -> String {
        format!("{}/{id}", self.base)
    }
}

pub mod brand {
    use super::ReferencePaths;

    pub const PATHS: ReferencePaths = ReferencePaths {
        resource: "brand",
        base: BASE,
        all: ALL,
        search: SEARCH,
    };
    pub const BASE: &str = "/brand";
    pub const ALL: &str = "/brand/all";
    pub const SEARCH: &str = "/brand/search";

    pub fn by_id(id: &str) -> String {
        PATHS.by_id(id)
    }
}

pub mod category {
    use super::ReferencePaths;

    pub const PATHS: ReferencePaths = ReferencePaths {
        resource: "category",
        base: BASE,
        all: ALL,
        search: SEARCH,
    };
    pub const BASE: &str = "/category";
    pub const ALL: &str = "/category/all";
    pub const SEARCH: &str = "/category/search";

    pub fn by_id(id: &str) -> String {
        PATHS.by_id(id)
    }
}

pub mod supplier {
    use super::ReferencePaths;

    pub const PATHS: ReferencePaths = ReferencePaths {
        resource: "supplier",
        base: BASE,
        all: ALL,
        search: SEARCH,
    };
    pub const BASE: &str = "/supplier";
    pub const ALL: &str = "/supplier/all";
    pub const SEARCH: &str = "/supplier/search";

    pub fn by_id(id: &str) -> String {
        PATHS.by_id(id)
    }
}

pub mod import_order {
    pub const BASE: &str = "/import-order";
    pub const PRODUCT_IMPORT_SELECT: &str = "/import-order/product-import-select";
}

pub mod cart {
    pub const BASE: &str = "/cart";

    pub fn item(id: &str) -> String {
        format!("{BASE}/item/{id}")
    }
}

pub mod promotion {
    pub const BASE: &str = "/promotion";

    pub fn by_id(id: &str) -> String {
        format!("{BASE}/{id}")
    }
}

pub mod review {
    pub const BASE: &str = "/review";

    pub fn by_product_version(id: &str) -> String {
        format!("{BASE}/product-version/{id}")
    }

    pub fn statistics(id: &str) -> String {
        format!("{BASE}/product-version/{id}/statistics")
    }
}

pub mod banner {
    pub const BASE: &str = "/banner";

    pub fn by_id(id: &str) -> String {
        format!("{BASE}/{id}")
    }
}

/// Registry paths anchored to one base URL
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    base_url: String,
}

impl Endpoints {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URL for a registry path
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

/// One row of the registry listing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EndpointEntry {
    pub resource: &'static str,
    pub operation: &'static str,
    pub template: String,
}

const ID: &str = "{id}";

/// Every registry entry, parameterized paths rendered with `{id}`
pub fn registry() -> Vec<EndpointEntry> {
    let entry = |resource, operation, template: &str| EndpointEntry {
        resource,
        operation,
        template: template.to_string(),
    };

    let mut entries = vec![
        entry("auth", "sign-in", auth::SIGN_IN),
        entry("auth", "sign-up", auth::SIGN_UP),
        entry("auth", "confirm-otp", auth::CONFIRM_OTP),
        entry("auth", "register-information", auth::REGISTER_INFORMATION),
        entry("user", "customers", user::CUSTOMER),
        entry("user", "customer-by-id", &user::customer_by_id(ID)),
        entry("user", "employees", user::EMPLOYEE),
        entry("user", "employee-by-id", &user::employee_by_id(ID)),
        entry("product", "list", product::LIST),
        entry("product", "base", product::BASE),
        entry("product", "by-id", &product::by_id(ID)),
        entry("product", "versions", &product::versions(ID)),
        entry("product-version", "create", product_version::BASE),
        entry("product-version", "update", &product_version::update(ID)),
        entry("product-version", "delete", &product_version::delete(ID)),
    ];

    for paths in [brand::PATHS, category::PATHS, supplier::PATHS] {
        entries.push(entry(paths.resource, "base", paths.base));
        entries.push(entry(paths.resource, "all", paths.all));
        entries.push(entry(paths.resource, "search", paths.search));
        entries.push(entry(paths.resource, "by-id", &paths.by_id(ID)));
    }

    entries.extend([
        entry("import-order", "base", import_order::BASE),
        entry(
            "import-order",
            "product-import-select",
            import_order::PRODUCT_IMPORT_SELECT,
        ),
        entry("cart", "base", cart::BASE),
        entry("cart", "item", &cart::item(ID)),
        entry("promotion", "base", promotion::BASE),
        entry("promotion", "by-id", &promotion::by_id(ID)),
        entry("review", "base", review::BASE),
        entry("review", "by-product-version", &review::by_product_version(ID)),
        entry("review", "statistics", &review::statistics(ID)),
        entry("banner", "base", banner::BASE),
        entry("banner", "by-id", &banner::by_id(ID)),
    ]);

    entries
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "abc123";

    #[test]
    fn test_parameterized_paths_embed_id() {
        let cases = [
            (user::customer_by_id(SAMPLE), "/user/customer/abc123"),
            (user::employee_by_id(SAMPLE), "/user/employee/abc123"),
            (product::by_id(SAMPLE), "/product/abc123"),
            (product::versions(SAMPLE), "/product/abc123/versions"),
            (product_version::update(SAMPLE), "/product/version/abc123"),
            (product_version::delete(SAMPLE), "/product/version/abc123"),
            (brand::by_id(SAMPLE), "/brand/abc123"),
            (category::by_id(SAMPLE), "/category/abc123"),
            (supplier::by_id(SAMPLE), "/supplier/abc123"),
            (cart::item(SAMPLE), "/cart/item/abc123"),
            (promotion::by_id(SAMPLE), "/promotion/abc123"),
            (review::by_product_version(SAMPLE), "/review/product-version/abc123"),
            (review::statistics(SAMPLE), "/review/product-version/abc123/statistics"),
            (banner::by_id(SAMPLE), "/banner/abc123"),
        ];

        for (actual, expected) in cases {
            assert_eq!(actual, expected);
            assert_eq!(actual.matches(SAMPLE).count(), 1);
        }
    }

    #[test]
    fn test_ids_are_not_escaped() {
        assert_eq!(product::by_id("a b/../c"), "/product/a b/../c");
        assert_eq!(product::by_id(""), "/product/");
    }

    #[test]
    fn test_static_paths() {
        assert_eq!(auth::SIGN_IN, "/api/auth/sign-in");
        assert_eq!(auth::SIGN_UP, "/api/auth/sign-up");
        assert_eq!(auth::CONFIRM_OTP, "/api/auth/confirm-otp");
        assert_eq!(auth::REGISTER_INFORMATION, "/api/auth/register-information");
        assert_eq!(user::CUSTOMER, "/user/customer");
        assert_eq!(product::LIST, "/product/list");
        assert_eq!(brand::ALL, "/brand/all");
        assert_eq!(import_order::PRODUCT_IMPORT_SELECT, "/import-order/product-import-select");
    }

    #[test]
    fn test_endpoints_anchor_to_base() {
        let endpoints = Endpoints::new("http://localhost:8080/");
        assert_eq!(endpoints.base_url(), "http://localhost:8080");
        assert_eq!(
            endpoints.url(&product::versions("p1")),
            "http://localhost:8080/product/p1/versions"
        );
    }

    #[test]
    fn test_registry_is_complete_and_unique() {
        let entries = registry();
        assert_eq!(entries.len(), 38);

        let mut keys: Vec<_> = entries.iter().map(|e| (e.resource, e.operation)).collect();
        keys.sort();
        keys.dedup();
        assert_eq!(keys.len(), entries.len());

        assert!(entries.iter().all(|e| e.template.starts_with('/')));
        assert!(entries
            .iter()
            .any(|e| e.template == "/product/version/{id}" && e.operation == "update"));
    }
}
