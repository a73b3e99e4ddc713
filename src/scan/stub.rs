//! Minimal in-process HTTP/1.1 server for collector tests.

use reqwest::Url;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};

#[derive(Debug, Clone)]
pub struct StubRoute {
    pub path: &'static str,
    pub status: u16,
    pub body: String,
    pub headers: Vec<(&'static str, &'static str)>,
    pub stall: bool,
}

impl StubRoute {
    pub fn ok(path: &'static str, body: impl Into<String>) -> Self {
        Self {
            path,
            status: 200,
            body: body.into(),
            headers: Vec::new(),
            stall: false,
        }
    }

    pub fn status(path: &'static str, status: u16) -> Self {
        Self {
            path,
            status,
            body: String::new(),
            headers: Vec::new(),
            stall: false,
        }
    }

    /// Accepts the request and never answers.
    pub fn stall(path: &'static str) -> Self {
        Self {
            stall: true,
            ..Self::status(path, 200)
        }
    }

    pub fn header(mut self, name: &'static str, value: &'static str) -> Self {
        self.headers.push((name, value));
        self
    }
}

/// Binds an ephemeral port and serves `routes` until the runtime shuts down.
/// Unknown paths answer 404.
pub async fn serve(routes: Vec<StubRoute>) -> Url {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("stub listener should bind");
    let addr = listener.local_addr().expect("stub addr");

    tokio::spawn(async move {
        while let Ok((stream, _)) = listener.accept().await {
            let routes = routes.clone();
            tokio::spawn(async move {
                let _ = respond(stream, &routes).await;
            });
        }
    });

    Url::parse(&format!("http://{addr}/")).expect("stub url")
}

async fn respond(mut stream: TcpStream, routes: &[StubRoute]) -> std::io::Result<()> {
    let mut request = Vec::new();
    let mut buf = [0u8; 1024];
    while !request.windows(4).any(|window| window == b"\r\n\r\n") {
        let read = stream.read(&mut buf).await?;
        if read == 0 {
            return Ok(());
        }
        request.extend_from_slice(&buf[..read]);
        // TLS ClientHello: hang up so https probes fail fast.
        if request.first() == Some(&0x16) {
            return Ok(());
        }
    }

    let head = String::from_utf8_lossy(&request);
    let mut parts = head.lines().next().unwrap_or_default().split_whitespace();
    let method = parts.next().unwrap_or_default().to_string();
    let target = parts.next().unwrap_or("/");
    let path = target.split('?').next().unwrap_or("/");

    let route = routes.iter().find(|route| route.path == path);
    if route.is_some_and(|route| route.stall) {
        std::future::pending::<()>().await;
    }
    let (status, body, headers) = match route {
        Some(route) => (route.status, route.body.as_str(), route.headers.as_slice()),
        None => (404, "", &[][..]),
    };

    let mut response = format!(
        "HTTP/1.1 {status} {}\r\nContent-Length: {}\r\nConnection: close\r\n",
        if status == 200 { "OK" } else { "Stub" },
        body.len()
    );
    for (name, value) in headers {
        response.push_str(&format!("{name}: {value}\r\n"));
    }
    response.push_str("\r\n");
    if method != "HEAD" {
        response.push_str(body);
    }

    stream.write_all(response.as_bytes()).await?;
    stream.shutdown().await
}
