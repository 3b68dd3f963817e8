//! Canned-response HTTP server for tests.
//!
//! The clients are thin wrappers over reqwest, so exercising their success
//! and failure paths needs a real socket serving scripted bodies. This
//! plays the role the teacher-style mock client would: tests point a
//! client's base URL at [`spawn`] and script the upstream's answers.

use std::net::SocketAddr;
use std::sync::Arc;

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

/// Start a local server answering every request via `handler`.
///
/// The handler receives the request path (including any query string) and
/// the request body, and returns a status code plus response body. Each
/// connection serves one request and is then closed.
pub async fn spawn(
    handler: impl Fn(&str, &str) -> (u16, String) + Send + Sync + 'static,
) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let handler = Arc::new(handler);

    tokio::spawn(async move {
        loop {
            let Ok((stream, _)) = listener.accept().await else {
                break;
            };
            let handler = Arc::clone(&handler);
            tokio::spawn(handle_connection(stream, handler));
        }
    });

    addr
}

async fn handle_connection(
    mut stream: tokio::net::TcpStream,
    handler: Arc<impl Fn(&str, &str) -> (u16, String)>,
) {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 4096];

    // Read up to the end of the header block.
    let head_end = loop {
        let n = match stream.read(&mut chunk).await {
            Ok(0) | Err(_) => return,
            Ok(n) => n,
        };
        buf.extend_from_slice(&chunk[..n]);
        if let Some(pos) = buf.windows(4).position(|w| w == b"\r\n\r\n") {
            break pos;
        }
    };

    let head = String::from_utf8_lossy(&buf[..head_end]).to_string();
    let content_length = head
        .lines()
        .find_map(|line| {
            let (name, value) = line.split_once(':')?;
            if name.eq_ignore_ascii_case("content-length") {
                value.trim().parse::<usize>().ok()
            } else {
                None
            }
        })
        .unwrap_or(0);

    let body_start = head_end + 4;
    while buf.len() < body_start + content_length {
        let n = match stream.read(&mut chunk).await {
            Ok(0) | Err(_) => break,
            Ok(n) => n,
        };
        buf.extend_from_slice(&chunk[..n]);
    }

    let path = head.split_whitespace().nth(1).unwrap_or("/").to_string();
    let body = String::from_utf8_lossy(&buf[body_start..]).to_string();

    let (status, response_body) = handler(&path, &body);
    let response = format!(
        "HTTP/1.1 {status} OK\r\ncontent-type: application/json\r\ncontent-length: {len}\r\nconnection: close\r\n\r\n{response_body}",
        len = response_body.len(),
    );
    let _ = stream.write_all(response.as_bytes()).await;
    let _ = stream.shutdown().await;
}
