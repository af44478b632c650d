use sea_orm::{DatabaseBackend, DbErr, MockDatabase};

use crate::common::TestApp;

/// The blob written before a failed catalog insert stays on disk; the orphan
/// is accepted, documented behavior.
#[tokio::test]
async fn catalog_failure_returns_500_and_keeps_blob() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_exec_errors(vec![DbErr::Custom("connection lost".to_owned())])
        .append_query_errors(vec![DbErr::Custom("connection lost".to_owned())])
        .into_connection();

    let app = TestApp::with_db(db, "postgres://mock".to_string()).await;

    let res = app
        .upload_episode("clip.mp3", b"abc".to_vec(), "Ep1", "First episode")
        .await;

    assert_eq!(res.status, 500);
    assert_eq!(res.body["code"].as_str().unwrap(), "INTERNAL_ERROR");

    // The blob write preceded the insert and is not rolled back.
    assert_eq!(app.uploaded_files().len(), 1);
}

/// A failing catalog read surfaces as a 500, never a crash.
#[tokio::test]
async fn list_failure_returns_500() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_errors(vec![DbErr::Custom("connection lost".to_owned())])
        .into_connection();

    let app = TestApp::with_db(db, "postgres://mock".to_string()).await;

    let res = app.get(crate::common::routes::EPISODES).await;

    assert_eq!(res.status, 500);
    assert_eq!(res.body["code"].as_str().unwrap(), "INTERNAL_ERROR");
}
