use serde::{Deserialize, Serialize};

use crate::validate::{ContractError, Validate};

/// Page envelope shared by every list endpoint
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageResponse<T> {
    pub page_no: u32,
    pub page_size: u32,
    pub total_page: u32,
    /// Older list endpoints still name this `content`
    #[serde(alias = "content")]
    pub items: Vec<T>,
}

impl<T> PageResponse<T> {
    pub fn is_last(&self) -> bool {
        self.page_no >= self.total_page
    }
}

impl<T: Validate> Validate for PageResponse<T> {
    fn validate(&self) -> Result<(), ContractError> {
        if self.items.len() > self.page_size as usize {
            return Err(ContractError::new(
                "page",
                "items",
                format!(
                    "{} items exceed pageSize {}",
                    self.items.len(),
                    self.page_size
                ),
            ));
        }
        self.items.validate()
    }
}

/// Paging and search parameters for list endpoints
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_no: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keyword: Option<String>,
}

impl PageParams {
    pub fn new(page_no: u32, page_size: u32) -> Self {
        Self {
            page_no: Some(page_no),
            page_size: Some(page_size),
            keyword: None,
        }
    }

    pub fn keyword(mut self, keyword: impl Into<String>) -> Self {
        self.keyword = Some(keyword.into());
        self
    }

    pub(crate) fn to_query(&self) -> Vec<(&'static str, String)> {
        let mut query = vec![];
        if let Some(page_no) = self.page_no {
            query.push(("pageNo", page_no.to_string()));
        }
        if let Some(page_size) = self.page_size {
            query.push(("pageSize", page_size.to_string()));
        }
        if let Some(keyword) = &self.keyword {
            query.push(("keyword", keyword.clone()));
        }
        query
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    impl Validate for u32 {}

    #[test]
    fn test_accepts_legacy_content_key() {
        let page: PageResponse<u32> = serde_json::from_value(json!({
            "pageNo": 1, "pageSize": 2, "totalPage": 1, "content": [7, 8]
        }))
        .unwrap();
        assert_eq!(page.items, vec![7, 8]);
        assert!(page.is_last());

        let out = serde_json::to_value(&page).unwrap();
        assert_eq!(out["items"], json!([7, 8]));
        assert!(out.get("content").is_none());
    }

    #[test]
    fn test_missing_envelope_field_is_rejected() {
        let result: Result<PageResponse<u32>, _> =
            serde_json::from_value(json!({ "pageNo": 1, "pageSize": 2, "items": [] }));
        assert!(result.is_err());
    }

    #[test]
    fn test_items_bounded_by_page_size() {
        let page = PageResponse { page_no: 1, page_size: 2, total_page: 3, items: vec![1u32, 2] };
        assert!(page.validate().is_ok());

        let page = PageResponse { page_no: 1, page_size: 2, total_page: 3, items: vec![1u32, 2, 3] };
        let err = page.validate().unwrap_err();
        assert_eq!(err.resource, "page");
    }

    #[test]
    fn test_query_pairs() {
        let params = PageParams::new(2, 10).keyword("phone");
        assert_eq!(
            params.to_query(),
            vec![
                ("pageNo", "2".to_string()),
                ("pageSize", "10".to_string()),
                ("keyword", "phone".to_string()),
            ]
        );
        assert!(PageParams::default().to_query().is_empty());
    }
}
