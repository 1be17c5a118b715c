mod common;

use actix_web::http::StatusCode;
use actix_web::test;
use actix_web::test::TestRequest;
use common::setup_test_app;
use quill_types::Document;
use serde_json::json;

#[actix_rt::test]
async fn test_document_lifecycle() -> anyhow::Result<()> {
    let test_app = setup_test_app().await?;

    let req = TestRequest::post()
        .uri("/api/documents")
        .set_json(json!({"title": "Launch plan", "content": "<p>Q3</p>"}))
        .to_request();
    let resp = test::call_service(&test_app.app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let created: Document = test::read_body_json(resp).await;
    assert_eq!(created.title, "Launch plan");
    assert_eq!(created.user_id, "anonymous");
    assert!(created.folder_id.is_none());

    let req = TestRequest::get()
        .uri(&format!("/api/documents/{}", created.id))
        .to_request();
    let fetched: Document = test::call_and_read_body_json(&test_app.app, req).await;
    assert_eq!(fetched, created);

    let req = TestRequest::put()
        .uri(&format!("/api/documents/{}", created.id))
        .set_json(json!({"content": "<p>Q4</p>"}))
        .to_request();
    let resp = test::call_service(&test_app.app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let updated: Document = test::read_body_json(resp).await;
    assert_eq!(updated.title, "Launch plan");
    assert_eq!(updated.content, "<p>Q4</p>");
    assert_eq!(updated.created_at, created.created_at);
    assert!(updated.updated_at >= created.updated_at);

    let req = TestRequest::delete()
        .uri(&format!("/api/documents/{}", created.id))
        .to_request();
    let resp = test::call_service(&test_app.app, req).await;
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    let req = TestRequest::get()
        .uri(&format!("/api/documents/{}", created.id))
        .to_request();
    let resp = test::call_service(&test_app.app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "Document not found");

    Ok(())
}

#[actix_rt::test]
async fn test_create_document_defaults() -> anyhow::Result<()> {
    let test_app = setup_test_app().await?;

    let req = TestRequest::post()
        .uri("/api/documents")
        .set_json(json!({}))
        .to_request();
    let resp = test::call_service(&test_app.app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["title"], "Untitled Document");
    assert_eq!(body["content"], "");
    assert!(body["folderId"].is_null());
    assert!(body["createdAt"].is_string());

    Ok(())
}

#[actix_rt::test]
async fn test_missing_documents_are_not_found() -> anyhow::Result<()> {
    let test_app = setup_test_app().await?;

    let req = TestRequest::put()
        .uri("/api/documents/nope")
        .set_json(json!({"title": "x"}))
        .to_request();
    let resp = test::call_service(&test_app.app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let req = TestRequest::delete().uri("/api/documents/nope").to_request();
    let resp = test::call_service(&test_app.app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}

#[actix_rt::test]
async fn test_list_filters_by_query_and_folder() -> anyhow::Result<()> {
    let test_app = setup_test_app().await?;

    let req = TestRequest::post()
        .uri("/api/folders")
        .set_json(json!({"name": "Work"}))
        .to_request();
    let folder: serde_json::Value = test::call_and_read_body_json(&test_app.app, req).await;
    let folder_id = folder["id"].as_str().unwrap().to_string();

    for (title, folder) in [
        ("Budget report", Some(folder_id.as_str())),
        ("Travel notes", Some(folder_id.as_str())),
        ("Report card", None),
    ] {
        let req = TestRequest::post()
            .uri("/api/documents")
            .set_json(json!({"title": title, "folderId": folder}))
            .to_request();
        test::call_service(&test_app.app, req).await;
    }

    let req = TestRequest::get()
        .uri("/api/documents?q=REPORT")
        .to_request();
    let docs: Vec<Document> = test::call_and_read_body_json(&test_app.app, req).await;
    assert_eq!(docs.len(), 2);

    let req = TestRequest::get()
        .uri(&format!("/api/documents?folderId={}", folder_id))
        .to_request();
    let docs: Vec<Document> = test::call_and_read_body_json(&test_app.app, req).await;
    assert_eq!(docs.len(), 2);
    assert!(docs.iter().all(|d| d.folder_id.as_deref() == Some(folder_id.as_str())));

    let req = TestRequest::get()
        .uri(&format!("/api/documents?folderId={}&q=report", folder_id))
        .to_request();
    let docs: Vec<Document> = test::call_and_read_body_json(&test_app.app, req).await;
    assert_eq!(docs.len(), 1);
    assert_eq!(docs[0].title, "Budget report");

    let req = TestRequest::get().uri("/api/documents?limit=1").to_request();
    let docs: Vec<Document> = test::call_and_read_body_json(&test_app.app, req).await;
    assert_eq!(docs.len(), 1);

    Ok(())
}

#[actix_rt::test]
async fn test_invalid_limit_is_bad_request() -> anyhow::Result<()> {
    let test_app = setup_test_app().await?;

    let req = TestRequest::get()
        .uri("/api/documents?limit=lots")
        .to_request();
    let resp = test::call_service(&test_app.app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert!(body["error"].is_string());

    Ok(())
}

#[actix_rt::test]
async fn test_deleting_folder_keeps_documents() -> anyhow::Result<()> {
    let test_app = setup_test_app().await?;

    let req = TestRequest::post()
        .uri("/api/folders")
        .set_json(json!({"name": "Drafts"}))
        .to_request();
    let resp = test::call_service(&test_app.app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let folder: serde_json::Value = test::read_body_json(resp).await;
    let folder_id = folder["id"].as_str().unwrap().to_string();

    let req = TestRequest::post()
        .uri("/api/documents")
        .set_json(json!({"title": "Draft", "folderId": folder_id}))
        .to_request();
    let document: Document = test::call_and_read_body_json(&test_app.app, req).await;

    let req = TestRequest::delete()
        .uri(&format!("/api/folders/{}", folder_id))
        .to_request();
    let resp = test::call_service(&test_app.app, req).await;
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    let kept = test_app.db.get_document(&document.id)?.unwrap();
    assert!(kept.folder_id.is_none());

    let req = TestRequest::delete()
        .uri(&format!("/api/folders/{}", folder_id))
        .to_request();
    let resp = test::call_service(&test_app.app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}

#[actix_rt::test]
async fn test_folder_name_required() -> anyhow::Result<()> {
    let test_app = setup_test_app().await?;

    let req = TestRequest::post()
        .uri("/api/folders")
        .set_json(json!({"name": "   "}))
        .to_request();
    let resp = test::call_service(&test_app.app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "Folder name is required");

    let req = TestRequest::get().uri("/api/folders").to_request();
    let folders: Vec<serde_json::Value> = test::call_and_read_body_json(&test_app.app, req).await;
    assert!(folders.is_empty());

    Ok(())
}

#[actix_rt::test]
async fn test_export_includes_everything_stored() -> anyhow::Result<()> {
    let test_app = setup_test_app().await?;

    let req = TestRequest::post()
        .uri("/api/documents")
        .set_json(json!({"title": "Backup me"}))
        .to_request();
    test::call_service(&test_app.app, req).await;

    let req = TestRequest::get().uri("/api/export").to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&test_app.app, req).await;

    assert_eq!(body["documents"].as_array().unwrap().len(), 1);
    assert_eq!(body["documents"][0]["title"], "Backup me");
    assert!(body["folders"].as_array().unwrap().is_empty());
    assert!(body["templates"].as_array().unwrap().is_empty());
    assert_eq!(body["settings"]["theme"], "light");
    assert!(body["exportedAt"].is_string());

    Ok(())
}

#[actix_rt::test]
async fn test_search_matches_non_ascii_titles() -> anyhow::Result<()> {
    let test_app = setup_test_app().await?;

    for title in ["École notes", "Über plan", "Ecole plain"] {
        let req = TestRequest::post()
            .uri("/api/documents")
            .set_json(json!({ "title": title }))
            .to_request();
        test::call_service(&test_app.app, req).await;
    }

    // q=école
    let req = TestRequest::get()
        .uri("/api/documents?q=%C3%A9cole")
        .to_request();
    let docs: Vec<Document> = test::call_and_read_body_json(&test_app.app, req).await;
    assert_eq!(docs.len(), 1);
    assert_eq!(docs[0].title, "École notes");

    // q=ÜBER&limit=1
    let req = TestRequest::get()
        .uri("/api/documents?q=%C3%9CBER&limit=1")
        .to_request();
    let docs: Vec<Document> = test::call_and_read_body_json(&test_app.app, req).await;
    assert_eq!(docs.len(), 1);
    assert_eq!(docs[0].title, "Über plan");

    Ok(())
}

#[actix_rt::test]
async fn test_export_document_as_attachment() -> anyhow::Result<()> {
    let test_app = setup_test_app().await?;

    let req = TestRequest::post()
        .uri("/api/documents")
        .set_json(json!({"title": "Launch plan", "content": "<h1>Launch</h1><p>Ship &amp; tell</p>"}))
        .to_request();
    let document: Document = test::call_and_read_body_json(&test_app.app, req).await;

    let req = TestRequest::get()
        .uri(&format!("/api/documents/{}/export", document.id))
        .to_request();
    let resp = test::call_service(&test_app.app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        resp.headers().get("content-disposition").unwrap(),
        "attachment; filename=\"Launch plan.txt\""
    );
    assert!(resp
        .headers()
        .get("content-type")
        .unwrap()
        .to_str()?
        .starts_with("text/plain"));
    let body = test::read_body(resp).await;
    assert_eq!(body, "Launch\nShip & tell");

    let req = TestRequest::get()
        .uri(&format!("/api/documents/{}/export?format=html", document.id))
        .to_request();
    let resp = test::call_service(&test_app.app, req).await;
    assert_eq!(
        resp.headers().get("content-disposition").unwrap(),
        "attachment; filename=\"Launch plan.html\""
    );
    let body = test::read_body(resp).await;
    assert_eq!(body, document.content.as_bytes());

    Ok(())
}

#[actix_rt::test]
async fn test_export_document_errors() -> anyhow::Result<()> {
    let test_app = setup_test_app().await?;

    let req = TestRequest::get()
        .uri("/api/documents/nope/export")
        .to_request();
    let resp = test::call_service(&test_app.app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "Document not found");

    let req = TestRequest::post()
        .uri("/api/documents")
        .set_json(json!({"title": "Memo"}))
        .to_request();
    let document: Document = test::call_and_read_body_json(&test_app.app, req).await;

    let req = TestRequest::get()
        .uri(&format!("/api/documents/{}/export?format=pdf", document.id))
        .to_request();
    let resp = test::call_service(&test_app.app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "Unsupported export format: pdf");

    Ok(())
}

#[actix_rt::test]
async fn test_folders_report_document_counts() -> anyhow::Result<()> {
    let test_app = setup_test_app().await?;

    let req = TestRequest::post()
        .uri("/api/folders")
        .set_json(json!({"name": "Work"}))
        .to_request();
    let folder: serde_json::Value = test::call_and_read_body_json(&test_app.app, req).await;
    assert_eq!(folder["documentCount"], 0);
    let folder_id = folder["id"].as_str().unwrap().to_string();

    for title in ["Budget", "Roadmap"] {
        let req = TestRequest::post()
            .uri("/api/documents")
            .set_json(json!({"title": title, "folderId": folder_id}))
            .to_request();
        test::call_service(&test_app.app, req).await;
    }

    let req = TestRequest::get().uri("/api/folders").to_request();
    let folders: Vec<serde_json::Value> = test::call_and_read_body_json(&test_app.app, req).await;
    assert_eq!(folders.len(), 1);
    assert_eq!(folders[0]["documentCount"], 2);

    Ok(())
}
