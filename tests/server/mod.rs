//! Local stand-in for the identity service's verifyPassword endpoint.
#![allow(dead_code)]

use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};
use std::sync::mpsc::{self, Receiver};
use std::thread;
use std::time::Duration;

pub struct Captured {
    pub method: String,
    pub url: String,
    pub content_type: Option<String>,
    pub body: String,
}

impl Captured {
    pub fn json(&self) -> serde_json::Value {
        serde_json::from_str(&self.body).expect("request body is not json")
    }
}

pub struct Server {
    port: u16,
    requests: Receiver<Captured>,
}

impl Server {
    /// Answers every request with `status` and `body`.
    pub fn respond_with(status: u16, body: &str) -> Self {
        let server = tiny_http::Server::http("127.0.0.1:0").expect("bind stub server");
        let port = server
            .server_addr()
            .to_ip()
            .expect("stub server has an ip address")
            .port();
        let body = body.to_string();
        let (tx, rx) = mpsc::channel();

        thread::spawn(move || {
            for mut request in server.incoming_requests() {
                let mut received = String::new();
                let _ = request.as_reader().read_to_string(&mut received);
                let content_type = request
                    .headers()
                    .iter()
                    .find(|h| h.field.equiv("Content-Type"))
                    .map(|h| h.value.as_str().to_string());
                let _ = tx.send(Captured {
                    method: request.method().to_string(),
                    url: request.url().to_string(),
                    content_type,
                    body: received,
                });
                let response =
                    tiny_http::Response::from_string(body.clone()).with_status_code(status);
                let _ = request.respond(response);
            }
        });

        Server { port, requests: rx }
    }

    pub fn url(&self) -> String {
        format!("http://127.0.0.1:{}/verifyPassword", self.port)
    }

    pub fn next_request(&self) -> Captured {
        self.requests
            .recv_timeout(Duration::from_secs(5))
            .expect("stub server received no request")
    }

    pub fn received_nothing(&self) -> bool {
        self.requests
            .recv_timeout(Duration::from_millis(300))
            .is_err()
    }
}

/// An endpoint on a port nobody listens on.
pub fn dead_endpoint() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind probe listener");
    let port = listener.local_addr().expect("probe address").port();
    drop(listener);
    format!("http://127.0.0.1:{}/verifyPassword", port)
}

/// Accepts one connection, drains the request, writes `response` verbatim and
/// hangs up. Lets a test send status lines and bodies tiny_http won't produce.
pub fn raw_response(response: &'static [u8]) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind raw listener");
    let port = listener.local_addr().expect("raw listener address").port();

    thread::spawn(move || {
        if let Ok((mut stream, _)) = listener.accept() {
            drain_request(&mut stream);
            let _ = stream.write_all(response);
            let _ = stream.flush();
        }
    });

    format!("http://127.0.0.1:{}/verifyPassword", port)
}

fn drain_request(stream: &mut TcpStream) {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 1024];
    loop {
        let n = match stream.read(&mut chunk) {
            Ok(0) | Err(_) => return,
            Ok(n) => n,
        };
        buf.extend_from_slice(&chunk[..n]);

        let Some(end) = buf.windows(4).position(|w| w == b"\r\n\r\n") else {
            continue;
        };
        let head = String::from_utf8_lossy(&buf[..end]).to_ascii_lowercase();
        let body_len = head
            .lines()
            .find_map(|line| line.strip_prefix("content-length:"))
            .and_then(|v| v.trim().parse::<usize>().ok())
            .unwrap_or(0);
        if buf.len() >= end + 4 + body_len {
            return;
        }
    }
}
