//! Local HTTP stand-ins for the ranking pages.

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

/// Serve a single canned HTTP response on a local port, returning its URL.
pub(crate) async fn serve_once(status_line: &'static str, body: String) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let mut buf = [0u8; 4096];
        let _ = socket.read(&mut buf).await;
        let response = format!(
            "HTTP/1.1 {}\r\nContent-Type: text/html\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            status_line,
            body.len(),
            body
        );
        let _ = socket.write_all(response.as_bytes()).await;
        let _ = socket.shutdown().await;
    });
    format!("http://{}/rankings", addr)
}

/// Ranking page with one `(name, points)` row per entry.
pub(crate) fn ranking_page(rows: &[(&str, &str)]) -> String {
    let body: String = rows
        .iter()
        .enumerate()
        .map(|(i, (name, points))| {
            format!(
                r#"<tr><td>{}</td><td class="whitespace-nowrap">{}</td><td>8</td><td>{}</td></tr>"#,
                i + 1,
                name,
                points
            )
        })
        .collect();
    format!(
        r#"<html><body><table id="official"><tbody>{}</tbody></table></body></html>"#,
        body
    )
}

pub(crate) fn test_client() -> reqwest::Client {
    super::install_crypto_provider();
    reqwest::Client::builder()
        .no_proxy()
        .timeout(std::time::Duration::from_secs(5))
        .build()
        .unwrap()
}
