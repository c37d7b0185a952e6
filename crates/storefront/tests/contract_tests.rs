//! Minimal payloads for every response contract must decode, re-encode
//! without dropping fields, and decode again to the same value.

use serde::{de::DeserializeOwned, Serialize};
use serde_json::{json, Value};
use storefront::types::timestamp;
use storefront::*;

fn assert_round_trip<T>(fixture: Value) -> T
where
    T: DeserializeOwned + Serialize + PartialEq + std::fmt::Debug,
{
    let decoded: T = serde_json::from_value(fixture.clone()).expect("fixture decodes");
    let encoded = serde_json::to_value(&decoded).expect("value encodes");

    assert_wire_equal("$", &fixture, &encoded);

    let again: T = serde_json::from_value(encoded).expect("re-encoded value decodes");
    assert_eq!(again, decoded);
    decoded
}

/// Every fixture field must come back with the same JSON type and value.
/// Numbers compare by value, timestamps by instant.
fn assert_wire_equal(at: &str, expected: &Value, actual: &Value) {
    match (expected, actual) {
        (Value::Object(want), Value::Object(got)) => {
            for (key, value) in want {
                let field = format!("{at}.{key}");
                let Some(found) = got.get(key) else {
                    panic!("{field} lost on re-encode");
                };
                assert_wire_equal(&field, value, found);
            }
        }
        (Value::Array(want), Value::Array(got)) => {
            assert_eq!(want.len(), got.len(), "{at} changed length");
            for (i, (value, found)) in want.iter().zip(got).enumerate() {
                assert_wire_equal(&format!("{at}[{i}]"), value, found);
            }
        }
        (Value::Number(want), Value::Number(got)) => {
            assert_eq!(want.as_f64(), got.as_f64(), "{at} changed value");
        }
        (Value::String(want), Value::String(got)) if want != got => {
            match (timestamp::parse(want), timestamp::parse(got)) {
                (Some(a), Some(b)) => assert_eq!(a, b, "{at} moved in time"),
                _ => panic!("{at} rewritten: {want:?} -> {got:?}"),
            }
        }
        _ => assert_eq!(expected, actual, "{at} changed type or value"),
    }
}

fn stamps() -> (&'static str, &'static str) {
    ("2024-05-01T08:30:00Z", "2024-05-02T09:00:00")
}

#[test]
fn test_category_minimal() {
    let (created, modified) = stamps();
    let category: CategoryResponse = assert_round_trip(json!({
        "id": "cat-1", "name": "Phones", "createdAt": created, "modifiedAt": modified
    }));
    assert_eq!(category.name, "Phones");
    assert!(category.validate().is_ok());
}

#[test]
fn test_category_missing_required_field() {
    let result = serde_json::from_value::<CategoryResponse>(json!({
        "id": "cat-1", "name": "Phones", "createdAt": "2024-05-01T08:30:00Z"
    }));
    assert!(result.is_err());
}

#[test]
fn test_brand_and_supplier_minimal() {
    let (created, modified) = stamps();
    assert_round_trip::<BrandResponse>(json!({
        "id": "b-1", "name": "Acme", "createdAt": created, "modifiedAt": modified
    }));
    let supplier: SupplierResponse = assert_round_trip(json!({
        "id": "s-1", "name": "Wholesale Co", "phone": "0123", "createdAt": created, "modifiedAt": modified
    }));
    assert_eq!(supplier.phone.as_deref(), Some("0123"));
    assert!(supplier.email.is_none());
}

#[test]
fn test_user_minimal() {
    let (created, modified) = stamps();
    let user: UserResponse = assert_round_trip(json!({
        "id": "u-1",
        "email": "staff@shop.example",
        "fullName": "Le Van A",
        "stepActive": "UPDATE_INFO",
        "status": "ACTIVE",
        "role": "EMPLOYEE",
        "createdAt": created,
        "modifiedAt": modified
    }));
    assert_eq!(user.step_active, StepActive::UpdateInfo);
    assert_eq!(user.status, UserStatus::Active);
}

#[test]
fn test_auth_minimal() {
    let auth: AuthResponse = assert_round_trip(json!({
        "accessToken": "jwt", "stepActive": "ACTIVE"
    }));
    assert!(auth.refresh_token.is_none());
    assert_round_trip::<MessageResponse>(json!({ "message": "otp sent", "stepActive": "OTP" }));
}

#[test]
fn test_product_minimal() {
    let (created, modified) = stamps();
    let product: ProductResponse = assert_round_trip(json!({
        "id": "p-1",
        "name": "Phone X",
        "slug": "phone-x",
        "averageRating": 4.5,
        "totalRating": 2,
        "totalSold": 10,
        "totalStock": 3,
        "images": [
            { "url": "https://cdn.example/a.png" },
            { "url": "https://cdn.example/b.png", "isDefault": true }
        ],
        "brandId": "b-1",
        "createdAt": created,
        "modifiedAt": modified
    }));
    assert_eq!(product.metrics.total_sold, 10);
    assert_eq!(product.default_image().map(|i| i.url.as_str()), Some("https://cdn.example/b.png"));
    assert!(product.category_id.is_none());
    assert!(product.validate().is_ok());
}

#[test]
fn test_product_two_default_images_flagged() {
    let (created, modified) = stamps();
    let product: ProductResponse = serde_json::from_value(json!({
        "id": "p-1", "name": "Phone X", "slug": "phone-x",
        "images": [
            { "url": "a", "isDefault": true },
            { "url": "b", "isDefault": true }
        ],
        "createdAt": created, "modifiedAt": modified
    }))
    .unwrap();
    assert_eq!(product.validate().unwrap_err().field, "images");
}

#[test]
fn test_product_version_minimal() {
    let (created, modified) = stamps();
    let version: ProductVersionResponse = assert_round_trip(json!({
        "id": "v-1",
        "productId": "p-1",
        "name": "128GB",
        "colors": [{ "id": "cv-1", "color": "Black", "price": 1500000, "stock": 4 }],
        "createdAt": created,
        "modifiedAt": modified
    }));
    assert_eq!(version.colors[0].price, rust_decimal::Decimal::from(1_500_000));
    assert!(version.validate().is_ok());
}

#[test]
fn test_cart_minimal() {
    let cart: CartResponse = assert_round_trip(json!({
        "count": 3,
        "totalPrice": 450,
        "items": [
            { "id": "ci-1", "productColorVersionId": "cv-1", "productName": "Case",
              "quantity": 1, "price": 100, "totalPrice": 90 },
            { "id": "ci-2", "productColorVersionId": "cv-2", "productName": "Cable",
              "quantity": 2, "price": 200, "totalPrice": 360 }
        ]
    }));
    assert_eq!(cart.items.len(), 2);
    assert!(cart.validate().is_ok());
}

#[test]
fn test_cart_count_mismatch_flagged() {
    let cart: CartResponse = serde_json::from_value(json!({
        "count": 5, "totalPrice": 0, "items": []
    }))
    .unwrap();
    assert_eq!(cart.validate().unwrap_err().field, "count");
}

#[test]
fn test_promotion_minimal() {
    let (created, modified) = stamps();
    let promotion: PromotionResponse = assert_round_trip(json!({
        "id": "promo-1",
        "name": "Summer",
        "discountPercentage": 15,
        "maxDiscountAmount": 50000,
        "startDate": "2024-06-01T00:00:00Z",
        "endDate": "2024-06-30T23:59:59Z",
        "products": [{ "id": "p-1", "name": "Phone X" }],
        "createdAt": created,
        "modifiedAt": modified
    }));
    assert!(promotion.validate().is_ok());
    assert!(promotion.is_running_at("2024-06-15T12:00:00Z".parse().unwrap()));
    assert!(!promotion.is_running_at("2024-07-01T00:00:00Z".parse().unwrap()));
}

#[test]
fn test_promotion_out_of_range_discount_flagged() {
    let (created, modified) = stamps();
    let promotion: PromotionResponse = serde_json::from_value(json!({
        "id": "promo-1", "name": "Broken", "discountPercentage": 120,
        "startDate": created, "endDate": modified,
        "createdAt": created, "modifiedAt": modified
    }))
    .unwrap();
    assert_eq!(promotion.validate().unwrap_err().field, "discountPercentage");
}

#[test]
fn test_review_minimal() {
    let (created, modified) = stamps();
    let review: ReviewResponse = assert_round_trip(json!({
        "id": "r-1",
        "productVersionId": "v-1",
        "reviewer": { "id": "u-1", "fullName": "Tran B" },
        "rating": 5,
        "createdAt": created,
        "modifiedAt": modified
    }));
    assert!(review.comment.is_none());
    assert!(review.validate().is_ok());

    assert_round_trip::<ReviewStatistics>(json!({
        "totalReviews": 2, "averageRating": 4.5, "ratingCounts": { "4": 1, "5": 1 }
    }));
}

#[test]
fn test_banner_and_import_order_minimal() {
    let (created, modified) = stamps();
    assert_round_trip::<BannerResponse>(json!({
        "id": "bn-1", "imageUrl": "https://cdn.example/banner.png",
        "createdAt": created, "modifiedAt": modified
    }));

    let order: ImportOrderResponse = assert_round_trip(json!({
        "id": "io-1",
        "supplierId": "s-1",
        "totalPrice": 1000,
        "items": [{ "productColorVersionId": "cv-1", "productName": "Phone X",
                    "quantity": 10, "importPrice": 100 }],
        "createdAt": created
    }));
    assert!(order.validate().is_ok());

    assert_round_trip::<ProductImportSelect>(json!({
        "productColorVersionId": "cv-1", "productName": "Phone X", "color": "Black"
    }));
}

#[test]
fn test_page_envelope_minimal() {
    let (created, modified) = stamps();
    let page: PageResponse<CategoryResponse> = assert_round_trip(json!({
        "pageNo": 1,
        "pageSize": 1,
        "totalPage": 4,
        "items": [{ "id": "cat-1", "name": "Phones", "createdAt": created, "modifiedAt": modified }]
    }));
    assert!(page.items.len() <= page.page_size as usize);
    assert!(!page.is_last());
    assert!(page.validate().is_ok());
}

#[test]
fn test_requests_skip_absent_optionals() {
    let body = serde_json::to_value(RegisterInformationRequest {
        email: "a@b.c".into(),
        full_name: "A".into(),
        phone: "0900".into(),
        address: None,
    })
    .unwrap();
    assert_eq!(body, json!({ "email": "a@b.c", "fullName": "A", "phone": "0900" }));

    let body = serde_json::to_value(CartItemRequest::new("cv-1", 2)).unwrap();
    assert_eq!(body, json!({ "productColorVersionId": "cv-1", "quantity": 2 }));

    let body = serde_json::to_value(EmployeeRequest::new("e@shop.example", "E", "STAFF")).unwrap();
    assert_eq!(body, json!({ "email": "e@shop.example", "fullName": "E", "role": "STAFF" }));
}
