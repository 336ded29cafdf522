//! HTTP-level integration tests for search, article detail, author
//! submissions, and the "my posts" list.

mod common;

use axum::http::StatusCode;
use common::{body_json, delete_auth, get_auth, login, post_json_auth, put_json_auth};
use serde_json::{json, Value};
use uuid::Uuid;

fn seed_id(n: u128) -> Uuid {
    Uuid::from_u128(n)
}

fn numbers(json: &Value) -> Vec<String> {
    json["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|a| a["article_number"].as_str().unwrap().to_string())
        .collect()
}

// ---------------------------------------------------------------------------
// Search
// ---------------------------------------------------------------------------

#[tokio::test]
async fn search_by_keyword_returns_only_approved_matches() {
    let app = common::build_test_app();
    let token = login(&app, common::OPERATOR_EMAIL).await;

    let response = get_auth(
        app.clone(),
        "/api/v1/articles/search?keyword=%E3%83%91%E3%82%B9%E3%83%AF%E3%83%BC%E3%83%89",
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(numbers(&body_json(response).await), vec!["KBA-00001-10001"]);

    // "経費" only appears in a pending article.
    let json = body_json(
        get_auth(app, "/api/v1/articles/search?keyword=%E7%B5%8C%E8%B2%BB", &token).await,
    )
    .await;
    assert!(numbers(&json).is_empty());
}

#[tokio::test]
async fn search_sorts_and_filters() {
    let app = common::build_test_app();
    let token = login(&app, common::OPERATOR_EMAIL).await;

    let json = body_json(
        get_auth(
            app.clone(),
            "/api/v1/articles/search?sort_by=created_at&sort_order=desc",
            &token,
        )
        .await,
    )
    .await;
    assert_eq!(
        numbers(&json),
        vec!["KBA-00003-10003", "KBA-00002-10002", "KBA-00001-10001"]
    );

    let json = body_json(
        get_auth(app, "/api/v1/articles/search?important_only=true", &token).await,
    )
    .await;
    assert_eq!(numbers(&json), vec!["KBA-00001-10001", "KBA-00002-10002"]);
}

#[tokio::test]
async fn search_pages_with_skip_and_limit() {
    let app = common::build_test_app();
    let token = login(&app, common::OPERATOR_EMAIL).await;

    let json = body_json(get_auth(app.clone(), "/api/v1/articles/search?limit=2", &token).await).await;
    assert_eq!(numbers(&json), vec!["KBA-00001-10001", "KBA-00002-10002"]);

    let json = body_json(
        get_auth(app, "/api/v1/articles/search?skip=2&limit=0&sort_order=asc", &token).await,
    )
    .await;
    assert_eq!(numbers(&json), vec!["KBA-00003-10003"]);
}

// ---------------------------------------------------------------------------
// Detail
// ---------------------------------------------------------------------------

#[tokio::test]
async fn detail_reports_capabilities() {
    let app = common::build_test_app();
    let author = login(&app, common::OPERATOR_EMAIL).await;
    let other = login(&app, common::SECOND_OPERATOR_EMAIL).await;

    let uri = format!("/api/v1/articles/{}", seed_id(4));
    let json = body_json(get_auth(app.clone(), &uri, &author).await).await;
    assert_eq!(json["data"]["article_number"], "KBA-00004-10004");
    assert_eq!(json["data"]["status_label"], "承認待ち");
    assert_eq!(json["data"]["category_color"], "#0891b2");
    assert_eq!(json["data"]["can_edit"], true);
    assert_eq!(json["data"]["can_delete"], true);

    let json = body_json(get_auth(app.clone(), &uri, &other).await).await;
    assert_eq!(json["data"]["can_edit"], false);
    assert_eq!(json["data"]["can_delete"], false);

    let approved = format!("/api/v1/articles/{}", seed_id(1));
    let json = body_json(get_auth(app, &approved, &author).await).await;
    assert_eq!(json["data"]["can_edit"], true);
}

#[tokio::test]
async fn reviewer_detail_view_does_not_offer_edit_on_others_articles() {
    let app = common::build_test_app();
    let supervisor = login(&app, common::SUPERVISOR_EMAIL).await;

    let uri = format!("/api/v1/articles/{}", seed_id(4));
    let response = get_auth(app, &uri, &supervisor).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["data"]["status"], "pending");
    assert_eq!(json["data"]["can_edit"], false);
    assert_eq!(json["data"]["can_delete"], false);
}

#[tokio::test]
async fn detail_of_unknown_article_is_404() {
    let app = common::build_test_app();
    let token = login(&app, common::OPERATOR_EMAIL).await;

    let uri = format!("/api/v1/articles/{}", Uuid::new_v4());
    let response = get_auth(app, &uri, &token).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Create / edit
// ---------------------------------------------------------------------------

#[tokio::test]
async fn create_defaults_to_pending_with_generated_number() {
    let app = common::build_test_app();
    let token = login(&app, common::OPERATOR_EMAIL).await;

    let body = json!({
        "title": "Teamsの通知が届かない",
        "category": "システム",
        "question": "通知が表示されません",
        "answer": "通知設定を確認してください",
        "keywords": ["Teams", "通知"],
    });
    let response = post_json_auth(app, "/api/v1/articles", body, &token).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let json = body_json(response).await;
    let number = json["data"]["article_number"].as_str().unwrap();
    assert!(number.starts_with("KBA-"));
    assert_eq!(number.len(), "KBA-00000-00000".len());
    assert_eq!(json["data"]["status"], "pending");
    assert_eq!(json["data"]["author_name"], "山田 太郎");
    assert!(json["data"]["approval"].is_null());
}

#[tokio::test]
async fn create_accepts_comma_separated_keywords() {
    let app = common::build_test_app();
    let token = login(&app, common::OPERATOR_EMAIL).await;

    let body = json!({
        "title": "Outlookが起動しない",
        "category": "システム",
        "keywords": "Outlook, メール,, 起動 ",
    });
    let response = post_json_auth(app, "/api/v1/articles", body, &token).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let json = body_json(response).await;
    assert_eq!(json["data"]["keywords"], json!(["Outlook", "メール", "起動"]));
}

#[tokio::test]
async fn create_rejects_approved_status_and_missing_title() {
    let app = common::build_test_app();
    let token = login(&app, common::OPERATOR_EMAIL).await;

    let response = post_json_auth(
        app.clone(),
        "/api/v1/articles",
        json!({ "title": "t", "category": "システム", "status": "approved" }),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = post_json_auth(
        app,
        "/api/v1/articles",
        json!({ "category": "システム" }),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn draft_can_be_completed_and_submitted() {
    let app = common::build_test_app();
    let token = login(&app, common::OPERATOR_EMAIL).await;

    let response = post_json_auth(
        app.clone(),
        "/api/v1/articles",
        json!({ "title": "書きかけ", "status": "draft" }),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let draft = body_json(response).await;
    let id = draft["data"]["id"].as_str().unwrap().to_string();

    let response = put_json_auth(
        app,
        &format!("/api/v1/articles/{id}"),
        json!({ "category": "システム", "status": "pending" }),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let submitted = body_json(response).await;
    assert_eq!(submitted["data"]["id"], draft["data"]["id"]);
    assert_eq!(submitted["data"]["article_number"], draft["data"]["article_number"]);
    assert_eq!(submitted["data"]["title"], "書きかけ");
    assert_eq!(submitted["data"]["status"], "pending");
}

#[tokio::test]
async fn rejected_article_is_resubmitted() {
    let app = common::build_test_app();
    let token = login(&app, common::SECOND_OPERATOR_EMAIL).await;

    let response = put_json_auth(
        app,
        &format!("/api/v1/articles/{}", seed_id(6)),
        json!({
            "answer": "申請フォームから申請し、上長の承認を受けてください。",
            "status": "pending",
        }),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["data"]["status"], "pending");
    assert!(json["data"]["rejection"].is_null());
}

#[tokio::test]
async fn approved_articles_are_not_editable() {
    let app = common::build_test_app();
    let token = login(&app, common::SUPERVISOR_EMAIL).await;

    let response = put_json_auth(
        app,
        &format!("/api/v1/articles/{}", seed_id(1)),
        json!({ "title": "変更" }),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
}

#[tokio::test]
async fn other_operators_cannot_edit() {
    let app = common::build_test_app();
    let token = login(&app, common::SECOND_OPERATOR_EMAIL).await;

    let response = put_json_auth(
        app,
        &format!("/api/v1/articles/{}", seed_id(4)),
        json!({ "title": "変更" }),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

// ---------------------------------------------------------------------------
// Delete
// ---------------------------------------------------------------------------

#[tokio::test]
async fn only_the_author_may_delete() {
    let app = common::build_test_app();
    let author = login(&app, common::OPERATOR_EMAIL).await;
    let admin = login(&app, common::ADMIN_EMAIL).await;
    let uri = format!("/api/v1/articles/{}", seed_id(5));

    let response = delete_auth(app.clone(), &uri, &admin).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let response = delete_auth(app.clone(), &uri, &author).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = get_auth(app, &uri, &author).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Deletion proposals
// ---------------------------------------------------------------------------

#[tokio::test]
async fn deletion_proposal_creates_pending_record() {
    let app = common::build_test_app();
    let token = login(&app, common::OPERATOR_EMAIL).await;

    let response = post_json_auth(
        app.clone(),
        "/api/v1/articles/deletion-proposals",
        json!({ "article_number": "KBA-00001-10001", "reason": "情報が古くなったため" }),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let json = body_json(response).await;
    let number = json["data"]["article_number"].as_str().unwrap();
    assert!(number.starts_with("DEL-"));
    assert_eq!(json["data"]["status"], "pending");
    assert_eq!(json["data"]["category"], "削除提案");
    assert_eq!(json["data"]["kind"]["type"], "deletion_proposal");
    assert_eq!(json["data"]["kind"]["target"], "KBA-00001-10001");
    assert!(json["data"]["question"].as_str().unwrap().contains("KBA-00001-10001"));
    assert!(json["data"]["answer"].as_str().unwrap().contains("情報が古くなったため"));
}

#[tokio::test]
async fn deletion_proposal_reports_field_errors() {
    let app = common::build_test_app();
    let token = login(&app, common::OPERATOR_EMAIL).await;

    let response = post_json_auth(
        app,
        "/api/v1/articles/deletion-proposals",
        json!({ "article_number": "KBA-1", "reason": "短い" }),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    let fields: Vec<_> = json["fields"]
        .as_array()
        .unwrap()
        .iter()
        .map(|f| f["field"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(fields, vec!["article_number", "reason"]);
}

#[tokio::test]
async fn deletion_proposal_for_missing_article_is_404() {
    let app = common::build_test_app();
    let token = login(&app, common::OPERATOR_EMAIL).await;

    let response = post_json_auth(
        app.clone(),
        "/api/v1/articles/deletion-proposals",
        json!({ "article_number": "KBA-99999-99999", "reason": "存在しない記事の削除提案です" }),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await["code"], "NOT_FOUND");

    let response = get_auth(app, "/api/v1/my-posts", &token).await;
    let json = body_json(response).await;
    assert_eq!(json["data"]["posts"].as_array().unwrap().len(), 4);
}

// ---------------------------------------------------------------------------
// My posts
// ---------------------------------------------------------------------------

#[tokio::test]
async fn my_posts_lists_own_articles_with_counts() {
    let app = common::build_test_app();
    let token = login(&app, common::OPERATOR_EMAIL).await;

    let json = body_json(get_auth(app.clone(), "/api/v1/my-posts", &token).await).await;
    let posts = json["data"]["posts"].as_array().unwrap();
    assert_eq!(posts.len(), 4);
    assert!(posts.iter().all(|p| p["author_id"] == 1));
    assert_eq!(
        json["data"]["counts"],
        json!({ "approved": 2, "pending": 1, "draft": 1, "rejected": 0 })
    );

    let draft = posts.iter().find(|p| p["status"] == "draft").unwrap();
    assert_eq!(draft["actions"], json!(["edit", "delete"]));

    let json = body_json(
        get_auth(app, "/api/v1/my-posts?approved=false&draft=false", &token).await,
    )
    .await;
    let posts = json["data"]["posts"].as_array().unwrap();
    assert_eq!(posts.len(), 1);
    assert_eq!(posts[0]["status"], "pending");
    assert_eq!(json["data"]["counts"]["approved"], 2);
}
