use std::time::{Duration, Instant};

use mockito::Matcher;
use portfolio_chatbot::config::RemoteSettings;
use portfolio_chatbot::services::remote::RemoteReplySource;
use portfolio_chatbot::services::reply_source::{ReplySource, ReplySourceError};
use serde_json::json;

fn settings(base_url: String) -> RemoteSettings {
    RemoteSettings {
        base_url,
        api_key: "test-key".to_string(),
        model: "test-model".to_string(),
        system_prompt: "Be brief.".to_string(),
    }
}

#[tokio::test]
async fn returns_first_choice_content() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/chat/completions")
        .match_header("authorization", "Bearer test-key")
        .match_body(Matcher::PartialJson(json!({
            "model": "test-model",
            "messages": [
                {"role": "system", "content": "Be brief."},
                {"role": "user", "content": "Hello!"}
            ]
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"choices":[{"message":{"role":"assistant","content":"  Hi there!  "}}]}"#)
        .create_async()
        .await;

    let source = RemoteReplySource::new(&settings(server.url()), Duration::from_secs(5)).unwrap();
    let reply = source.reply("Hello!").await.unwrap();

    assert_eq!(reply, "Hi there!");
    mock.assert_async().await;
}

#[tokio::test]
async fn server_error_is_unavailable() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("POST", "/chat/completions")
        .with_status(503)
        .with_body("overloaded")
        .create_async()
        .await;

    let source = RemoteReplySource::new(&settings(server.url()), Duration::from_secs(5)).unwrap();
    let err = source.reply("Hello!").await.unwrap_err();

    assert!(matches!(err, ReplySourceError::Unavailable(ref m) if m.contains("503")));
}

#[tokio::test]
async fn malformed_body_is_unavailable() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("POST", "/chat/completions")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body("this is not json")
        .create_async()
        .await;

    let source = RemoteReplySource::new(&settings(server.url()), Duration::from_secs(5)).unwrap();
    let err = source.reply("Hello!").await.unwrap_err();

    assert!(matches!(err, ReplySourceError::Unavailable(_)));
}

#[tokio::test]
async fn empty_choices_are_unavailable() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("POST", "/chat/completions")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"choices":[]}"#)
        .create_async()
        .await;

    let source = RemoteReplySource::new(&settings(server.url()), Duration::from_secs(5)).unwrap();
    let err = source.reply("Hello!").await.unwrap_err();

    assert_eq!(
        err,
        ReplySourceError::Unavailable("completion contained no reply".to_string())
    );
}

#[tokio::test]
async fn silent_server_times_out() {
    // Accepts connections but never answers.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        let mut held = Vec::new();
        while let Ok((socket, _)) = listener.accept().await {
            held.push(socket);
        }
    });

    let source = RemoteReplySource::new(
        &settings(format!("http://{addr}")),
        Duration::from_millis(200),
    )
    .unwrap();

    let started = Instant::now();
    let err = source.reply("Hello!").await.unwrap_err();

    assert_eq!(err, ReplySourceError::Timeout);
    assert!(started.elapsed() < Duration::from_secs(3));
}

#[tokio::test]
async fn unreachable_server_is_unavailable() {
    // Bind then drop to get a port nobody listens on.
    let addr = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap()
    };

    let source =
        RemoteReplySource::new(&settings(format!("http://{addr}")), Duration::from_secs(2)).unwrap();
    let err = source.reply("Hello!").await.unwrap_err();

    assert!(matches!(err, ReplySourceError::Unavailable(_)));
}
