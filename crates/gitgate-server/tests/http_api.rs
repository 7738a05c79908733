//! End-to-end dispatcher tests against the in-memory backend.

use std::sync::Arc;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::Request;
use http_body_util::BodyExt;
use tower::util::ServiceExt;

use gitgate_backend::{BackendError, BackendResult, InMemoryBackend, ObjectBackend};
use gitgate_server::build_router;
use gitgate_types::{ObjectId, ObjectKind, TreeEntry};

const ROOT: &str = "2ccc62d64502f9e7f1231c5b228136d3ee0fa72c";
const NESTED_ROOT: &str = "82fcd77642ac584c7debd8709b48d799d7b9fa33";

/// Fixture mirroring the original repository shape:
///
/// ```text
/// ROOT        -> gitserve.go, gitserve_test.go
/// NESTED_ROOT -> a/b/c/testfile ("test\n")
/// ```
///
/// with references `heads/master`, `tags/0.0.0.0.1`,
/// `tags/rooted/tags/are/tricky`, `tags/rooted/tags/may/confuse`, and
/// `remotes/origin/master`, all pointing at ROOT.
fn fixture() -> InMemoryBackend {
    let mut backend = InMemoryBackend::new();

    let blob_serve = ObjectId::new("51d6e2a95bb9ae7e10201b023906b06f9993bb55");
    let blob_serve_test = ObjectId::new("6c493ff740f9380390d5c9ddef4af18697ac9375");
    let blob_nested = ObjectId::new("9daeafb9864cf43055ae93beb0afd6c7d144bfa4");
    let tree_a = ObjectId::new("4b825dc642cb6eb9a060e54bf8d69288fbee4904");
    let tree_b = ObjectId::new("5b825dc642cb6eb9a060e54bf8d69288fbee4905");
    let tree_c = ObjectId::new("6b825dc642cb6eb9a060e54bf8d69288fbee4906");

    backend.insert_blob(blob_serve.clone(), b"package main\n// gitserve\n".to_vec());
    backend.insert_blob(blob_serve_test.clone(), b"package main\n// tests\n".to_vec());
    backend.insert_blob(blob_nested.clone(), b"test\n".to_vec());

    backend.insert_tree(
        ObjectId::new(ROOT),
        vec![
            TreeEntry::new(100644, ObjectKind::Blob, blob_serve, "gitserve.go"),
            TreeEntry::new(100644, ObjectKind::Blob, blob_serve_test, "gitserve_test.go"),
        ],
    );
    backend.insert_tree(
        tree_c.clone(),
        vec![TreeEntry::new(100644, ObjectKind::Blob, blob_nested, "testfile")],
    );
    backend.insert_tree(
        tree_b.clone(),
        vec![TreeEntry::new(40000, ObjectKind::Tree, tree_c, "c")],
    );
    backend.insert_tree(
        tree_a.clone(),
        vec![TreeEntry::new(40000, ObjectKind::Tree, tree_b, "b")],
    );
    backend.insert_tree(
        ObjectId::new(NESTED_ROOT),
        vec![TreeEntry::new(40000, ObjectKind::Tree, tree_a, "a")],
    );

    for name in [
        "heads/master",
        "tags/0.0.0.0.1",
        "tags/rooted/tags/are/tricky",
        "tags/rooted/tags/may/confuse",
        "remotes/origin/master",
    ] {
        backend.insert_ref(name, ObjectId::new(ROOT));
    }
    backend
}

async fn get(uri: &str) -> (u16, Vec<u8>) {
    let app = build_router(Arc::new(fixture()));
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status().as_u16();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, body.to_vec())
}

#[tokio::test]
async fn full_hash_serves_blob_bytes() {
    let (status, body) = get(&format!("/blob/{ROOT}/gitserve.go")).await;
    assert_eq!(status, 200);
    assert_eq!(body, b"package main\n// gitserve\n");
}

#[tokio::test]
async fn qualified_tag_serves_blob_bytes() {
    let (status, body) = get("/blob/tags/0.0.0.0.1/gitserve.go").await;
    assert_eq!(status, 200);
    assert_eq!(body, b"package main\n// gitserve\n");
}

#[tokio::test]
async fn unqualified_branch_serves_blob_bytes() {
    let (status, body) = get("/blob/master/gitserve.go").await;
    assert_eq!(status, 200);
    assert_eq!(body, b"package main\n// gitserve\n");
}

#[tokio::test]
async fn nested_path_under_full_hash() {
    let (status, body) = get(&format!("/blob/{NESTED_ROOT}/a/b/c/testfile")).await;
    assert_eq!(status, 200);
    assert_eq!(body, b"test\n");
}

#[tokio::test]
async fn missing_entry_is_404_with_walker_text() {
    let (status, body) = get(&format!("/blob/{ROOT}/quack")).await;
    assert_eq!(status, 404);
    assert_eq!(body, b"file not found in tree");
}

#[tokio::test]
async fn unknown_hash_is_404() {
    let (status, body) = get("/blob/invalid_hash/gitserve.go").await;
    assert_eq!(status, 404);
    assert!(!body.is_empty(), "backend error text should be the body");
}

#[tokio::test]
async fn slash_bearing_tag_resolves_as_one_unit() {
    let (status, body) = get("/blob/rooted/tags/may/confuse").await;
    assert_eq!(status, 200);
    let html = String::from_utf8(body).unwrap();
    assert!(html.contains(">gitserve.go</a>"), "got: {html}");
    assert!(html.contains(">gitserve_test.go</a>"), "got: {html}");
}

#[tokio::test]
async fn ref_root_without_path_lists_the_tree() {
    let (status, body) = get("/blob/master").await;
    assert_eq!(status, 200);
    let html = String::from_utf8(body).unwrap();
    assert!(html.contains("href=\"/blob/master/gitserve.go\""), "got: {html}");
}

#[tokio::test]
async fn trailing_slash_is_equivalent() {
    let (_, without) = get("/blob/master").await;
    let (status, with) = get("/blob/master/").await;
    assert_eq!(status, 200);
    assert_eq!(with, without);
}

#[tokio::test]
async fn abbreviated_hash_lists_the_tree() {
    let (status, body) = get("/blob/2ccc6/").await;
    assert_eq!(status, 200);
    let html = String::from_utf8(body).unwrap();
    assert!(html.contains(">gitserve.go</a>"), "got: {html}");
}

#[tokio::test]
async fn listing_hrefs_extend_the_request_path() {
    let (status, body) = get("/blob/82fcd77642/a").await;
    assert_eq!(status, 200);
    let html = String::from_utf8(body).unwrap();
    assert!(html.contains("href=\"/blob/82fcd77642/a/b/\""), "got: {html}");

    let (status, body) = get("/blob/82fcd77642/a/b").await;
    assert_eq!(status, 200);
    let html = String::from_utf8(body).unwrap();
    assert!(html.contains("href=\"/blob/82fcd77642/a/b/c/\""), "got: {html}");
}

#[tokio::test]
async fn listing_anchor_round_trips_to_content() {
    let (_, body) = get("/blob/82fcd77642/a/b/c").await;
    let html = String::from_utf8(body).unwrap();
    let marker = "href=\"";
    let start = html.find(marker).expect("listing should contain an anchor") + marker.len();
    let end = html[start..].find('"').unwrap() + start;
    let href = &html[start..end];

    let (status, body) = get(href).await;
    assert_eq!(status, 200);
    assert_eq!(body, b"test\n");
}

#[tokio::test]
async fn path_through_blob_is_404_with_directory_text() {
    let (status, body) = get(&format!("/blob/{ROOT}/gitserve.go/deeper")).await;
    assert_eq!(status, 404);
    assert_eq!(body, b"this is a directory, not an object");
}

/// Backend whose reference enumeration always fails.
struct BrokenRefsBackend;

#[async_trait]
impl ObjectBackend for BrokenRefsBackend {
    async fn list_refs(&self) -> BackendResult<Vec<String>> {
        Err(BackendError::CommandFailed {
            command: "git show-ref".into(),
            stderr: "boom".into(),
        })
    }

    async fn list_tree(&self, _id: &ObjectId) -> BackendResult<Vec<TreeEntry>> {
        unreachable!("dispatcher must fail before walking")
    }

    async fn read_blob(&self, _id: &ObjectId) -> BackendResult<Vec<u8>> {
        unreachable!("dispatcher must fail before walking")
    }

    async fn probe_repo(&self) -> BackendResult<()> {
        Ok(())
    }
}

#[tokio::test]
async fn ref_enumeration_failure_is_500_with_error_text() {
    let app = build_router(Arc::new(BrokenRefsBackend));
    let response = app
        .oneshot(
            Request::builder()
                .uri("/blob/master/file")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), 500);
    let body = response.into_body().collect().await.unwrap().to_bytes();
    assert!(String::from_utf8_lossy(&body).contains("boom"));
}
