use tui_inbrief_app::api::ApiService;

#[tokio::test]
async fn test_integration_fetch_story_collection() {
    let mut server = mockito::Server::new_async().await;
    let body = r#"{
        "stories": [
            {
                "id": 1,
                "title": "Harbor strike",
                "summary": "Dockworkers walk out over pay.",
                "timeline": [
                    { "datetime": "2024-01-05T09:00", "text": "Union votes to strike" },
                    { "datetime": "2024-01-06T08:00", "text": "Talks resume" }
                ],
                "tags": ["labor"],
                "date": "2024-01-05"
            },
            {
                "id": 2,
                "title": "Comet flyby",
                "summary": "Closest approach in decades.",
                "timeline": []
            }
        ]
    }"#;
    let _m = server
        .mock("GET", "/stories")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(body)
        .create_async()
        .await;

    let service = ApiService::new(server.url());
    let stories = service
        .fetch_stories()
        .await
        .expect("Failed to fetch stories");

    assert_eq!(stories.len(), 2);
    assert_eq!(stories[0].title, "Harbor strike");
    assert_eq!(stories[0].timeline.len(), 2);
    assert_eq!(stories[1].id, 2);
    assert!(stories[1].timeline.is_empty());
}

#[tokio::test]
async fn test_integration_error_status_is_not_ready() {
    let mut server = mockito::Server::new_async().await;
    let _m = server
        .mock("GET", "/stories")
        .with_status(503)
        .create_async()
        .await;

    let service = ApiService::new(server.url());
    let err = service.fetch_stories().await.unwrap_err();

    let message = err.to_string();
    assert!(!message.is_empty());
    assert!(message.contains("error"));
}
