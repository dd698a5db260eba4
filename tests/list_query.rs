use serde_json::json;

use ucard_admin::domain::collection::{ADMINS, DEPOSITS, USERS, find_collection};
use ucard_admin::domain::types::{FieldName, PageSize};
use ucard_admin::domain::user::{AccountStatus, User};
use ucard_admin::dto::list::{ListRequestDto, RawPage};
use ucard_admin::pagination::PaginationState;
use ucard_admin::query::{StructuredFilter, build_list_query, encode_search_value};
use ucard_admin::repository::envelope::decode_envelope;
use ucard_admin::repository::errors::RepositoryError;
use ucard_admin::services::list::decode_page;

#[test]
fn admin_search_request_body() {
    let query = build_list_query(
        "alice",
        ADMINS.searchable_fields,
        &[],
        &PaginationState::default(),
        ADMINS.sort_field,
    );

    let body = serde_json::to_value(ListRequestDto::from(&query)).unwrap();

    assert_eq!(
        body,
        json!({
            "columns": [
                {"name": "username", "exp": "like", "logic": "or", "value": "\"alice\""},
                {"name": "email", "exp": "like", "logic": "or", "value": "\"alice\""},
                {"name": "role", "exp": "like", "logic": "or", "value": "\"alice\""}
            ],
            "limit": 10,
            "page": 0,
            "sort": "id"
        })
    );
}

#[test]
fn search_and_structured_filters_combine() {
    let mut pagination = PaginationState::new(PageSize::new(20).unwrap());
    pagination.set_page(2).unwrap();
    let chain = StructuredFilter::equals(FieldName::new("chain").unwrap(), "TRON");

    let query = build_list_query(
        "0xabc",
        DEPOSITS.searchable_fields,
        &[chain],
        &pagination,
        DEPOSITS.sort_field,
    );

    assert_eq!(query.filters.len(), 5);
    let last = query.filters.last().unwrap();
    assert_eq!(last.field, "chain");
    assert_eq!(last.value, "\"TRON\"");
    assert_eq!(query.page_index, 1);
    assert_eq!(query.page_size, 20);
    assert_eq!(query.sort_field, "created_at");
}

#[test]
fn blank_search_sends_no_clauses() {
    assert_eq!(encode_search_value::<&str>(None), "");
    assert_eq!(encode_search_value(Some("   ")), "");

    let query = build_list_query(
        "  ",
        USERS.searchable_fields,
        &[],
        &PaginationState::default(),
        USERS.sort_field,
    );
    assert!(query.filters.is_empty());
}

#[test]
fn users_page_decodes_from_wire() {
    let body = json!({
        "code": 0,
        "msg": "ok",
        "data": {
            "userss": [
                {"id": 1, "email": "a@example.com", "name": "Alice", "status": 1},
                {"id": 2, "email": "b@example.com", "username": "bob", "status": 0, "role": "agent"}
            ],
            "total": 12,
            "page": 0,
            "limit": 10
        }
    });
    let body = serde_json::to_vec(&body).unwrap();

    let payload: serde_json::Value = decode_envelope(200, &body).unwrap();
    let collection = find_collection("Users").unwrap();
    let page = RawPage::from_payload(payload, collection.items_key).unwrap();
    let users = decode_page::<User>(page).unwrap();

    assert_eq!(users.total_count, 12);
    assert_eq!(users.items[0].status, AccountStatus::Active);
    assert_eq!(users.items[0].role(), "user");
    assert_eq!(users.items[1].display_name(), "bob");
    assert_eq!(users.items[1].role(), "agent");
}

#[test]
fn row_with_null_email_keeps_page() {
    let page = RawPage {
        items: vec![
            json!({"id": 1, "email": "a@b.c"}),
            json!({"id": 2, "email": null, "username": "phone-user"}),
        ],
        total_count: 2,
    };

    let users = decode_page::<User>(page).unwrap();

    assert_eq!(users.items.len(), 2);
    assert_eq!(users.items[0].email.as_deref(), Some("a@b.c"));
    assert_eq!(users.items[1].email, None);
    assert_eq!(users.items[1].display_name(), "phone-user");
}

#[test]
fn server_errors_carry_their_message() {
    let body = br#"{"code": 40001, "msg": "token expired", "data": null}"#;
    match decode_envelope::<serde_json::Value>(200, body) {
        Err(RepositoryError::Business { code, message }) => {
            assert_eq!(code, 40001);
            assert_eq!(message, "token expired");
        }
        other => panic!("unexpected result: {other:?}"),
    }

    let err = decode_envelope::<serde_json::Value>(502, b"bad gateway").unwrap_err();
    assert_eq!(err.to_string(), "Request failed: 502");
}
