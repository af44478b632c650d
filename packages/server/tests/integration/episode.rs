use crate::common::{TestApp, routes};

mod upload {
    use super::*;
    use sea_orm::EntityTrait;
    use server::entity::episode;

    #[tokio::test]
    async fn upload_returns_confirmation() {
        let app = TestApp::spawn().await;

        let res = app
            .upload_episode("clip.mp3", b"ID3_AUDIO".to_vec(), "Ep1", "First episode")
            .await;

        assert_eq!(res.status, 200);
        assert_eq!(res.text, "Episode uploaded successfully.");
    }

    #[tokio::test]
    async fn upload_records_metadata() {
        let app = TestApp::spawn().await;

        let res = app
            .upload_episode("clip.mp3", b"abc".to_vec(), "Ep1", "First episode")
            .await;
        assert_eq!(res.status, 200);

        let list = app.get(routes::EPISODES).await;
        assert_eq!(list.status, 200);

        let records = list.body.as_array().expect("episodes should be an array");
        assert_eq!(records.len(), 1);

        let record = &records[0];
        assert_eq!(record["title"].as_str().unwrap(), "Ep1");
        assert_eq!(record["description"].as_str().unwrap(), "First episode");
        assert!(record["_id"].as_str().is_some());

        let file_path = record["filePath"].as_str().unwrap();
        assert!(file_path.starts_with("/uploads/"));
        assert!(file_path.ends_with(".mp3"));
    }

    #[tokio::test]
    async fn upload_without_file_writes_nothing() {
        let app = TestApp::spawn().await;

        let res = app.upload_without_file("Ep1", "No audio attached").await;

        assert_eq!(res.status, 400);
        assert_eq!(res.body["code"].as_str().unwrap(), "VALIDATION_ERROR");

        // No catalog record and no blob.
        let records = episode::Entity::find().all(&app.db).await.unwrap();
        assert!(records.is_empty());
        assert!(app.uploaded_files().is_empty());
    }

    #[tokio::test]
    async fn upload_with_empty_file_writes_nothing() {
        let app = TestApp::spawn().await;

        let res = app.upload_episode("clip.mp3", Vec::new(), "Ep1", "").await;

        assert_eq!(res.status, 400);
        assert_eq!(res.body["code"].as_str().unwrap(), "VALIDATION_ERROR");
        assert!(app.uploaded_files().is_empty());
    }

    #[tokio::test]
    async fn upload_defaults_missing_fields_to_empty() {
        let app = TestApp::spawn().await;

        let res = app.upload_file_only("clip.mp3", b"abc".to_vec()).await;
        assert_eq!(res.status, 200);

        let list = app.get(routes::EPISODES).await;
        let records = list.body.as_array().unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0]["title"].as_str().unwrap(), "");
        assert_eq!(records[0]["description"].as_str().unwrap(), "");
    }

    #[tokio::test]
    async fn upload_rejects_oversized_file() {
        let app = TestApp::spawn().await;

        // One byte over the 10 MB test limit.
        let payload = vec![0u8; 10 * 1024 * 1024 + 1];
        let res = app.upload_episode("big.mp3", payload, "Ep1", "").await;

        assert_eq!(res.status, 400);
        assert_eq!(res.body["code"].as_str().unwrap(), "VALIDATION_ERROR");
        assert!(app.uploaded_files().is_empty());
    }

    #[tokio::test]
    async fn uploads_of_identical_content_get_distinct_names() {
        let app = TestApp::spawn().await;

        app.upload_episode("a.mp3", b"same".to_vec(), "Ep1", "")
            .await;
        app.upload_episode("a.mp3", b"same".to_vec(), "Ep2", "")
            .await;

        let list = app.get(routes::EPISODES).await;
        let records = list.body.as_array().unwrap();
        assert_eq!(records.len(), 2);
        assert_ne!(
            records[0]["filePath"].as_str().unwrap(),
            records[1]["filePath"].as_str().unwrap()
        );
        assert_eq!(app.uploaded_files().len(), 2);
    }
}

mod list {
    use super::*;

    #[tokio::test]
    async fn list_is_empty_initially() {
        let app = TestApp::spawn().await;

        let res = app.get(routes::EPISODES).await;

        assert_eq!(res.status, 200);
        assert_eq!(res.body.as_array().unwrap().len(), 0);
    }

    #[tokio::test]
    async fn list_returns_all_uploads_oldest_first() {
        let app = TestApp::spawn().await;

        for title in ["Ep1", "Ep2", "Ep3"] {
            let res = app
                .upload_episode("clip.mp3", b"abc".to_vec(), title, "")
                .await;
            assert_eq!(res.status, 200);
        }

        let res = app.get(routes::EPISODES).await;
        assert_eq!(res.status, 200);

        let titles: Vec<&str> = res
            .body
            .as_array()
            .unwrap()
            .iter()
            .map(|r| r["title"].as_str().unwrap())
            .collect();
        assert_eq!(titles, vec!["Ep1", "Ep2", "Ep3"]);
    }
}
