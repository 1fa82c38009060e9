//! Minimal HTTP/1.1 server for integration tests.
//!
//! Serves fixed routes by exact path: a body with a status, a redirect, or a
//! response that stalls long enough to trip a client timeout. Records the
//! User-Agent of every request.

use std::collections::HashMap;
use std::io::{Read, Write};
use std::net::TcpListener;
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;

#[derive(Debug, Clone)]
pub enum Route {
    Body { status: u16, body: Vec<u8> },
    Redirect(String),
    Stall(Duration),
}

impl Route {
    pub fn ok(body: &[u8]) -> Self {
        Route::Body {
            status: 200,
            body: body.to_vec(),
        }
    }
}

pub struct TestServer {
    /// Base URL without trailing slash, e.g. "http://127.0.0.1:12345".
    pub base: String,
    user_agents: Arc<Mutex<Vec<String>>>,
}

impl TestServer {
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base, path)
    }

    pub fn user_agents(&self) -> Vec<String> {
        self.user_agents.lock().unwrap().clone()
    }
}

/// Starts a server in a background thread. It runs until the process exits.
pub fn start(routes: Vec<(&str, Route)>) -> TestServer {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    let routes: Arc<HashMap<String, Route>> = Arc::new(
        routes
            .into_iter()
            .map(|(p, r)| (p.to_string(), r))
            .collect(),
    );
    let user_agents = Arc::new(Mutex::new(Vec::new()));
    let seen = Arc::clone(&user_agents);
    thread::spawn(move || {
        for stream in listener.incoming().flatten() {
            let routes = Arc::clone(&routes);
            let seen = Arc::clone(&seen);
            thread::spawn(move || handle(stream, &routes, &seen));
        }
    });
    TestServer {
        base: format!("http://127.0.0.1:{}", port),
        user_agents,
    }
}

fn handle(
    mut stream: std::net::TcpStream,
    routes: &HashMap<String, Route>,
    seen: &Mutex<Vec<String>>,
) {
    let _ = stream.set_read_timeout(Some(Duration::from_secs(2)));
    let _ = stream.set_write_timeout(Some(Duration::from_secs(2)));
    let mut buf = [0u8; 8192];
    let n = match stream.read(&mut buf) {
        Ok(0) => return,
        Ok(n) => n,
        Err(_) => return,
    };
    let request = match std::str::from_utf8(&buf[..n]) {
        Ok(s) => s,
        Err(_) => return,
    };
    let (path, user_agent) = parse_request(request);
    if let Some(ua) = user_agent {
        seen.lock().unwrap().push(ua.to_string());
    }

    match routes.get(path) {
        Some(Route::Body { status, body }) => {
            let response = format!(
                "HTTP/1.1 {} X\r\nContent-Length: {}\r\nContent-Type: image/jpeg\r\nConnection: close\r\n\r\n",
                status,
                body.len()
            );
            let _ = stream.write_all(response.as_bytes());
            let _ = stream.write_all(body);
        }
        Some(Route::Redirect(location)) => {
            let response = format!(
                "HTTP/1.1 302 Found\r\nLocation: {}\r\nContent-Length: 0\r\nConnection: close\r\n\r\n",
                location
            );
            let _ = stream.write_all(response.as_bytes());
        }
        Some(Route::Stall(d)) => {
            thread::sleep(*d);
            let _ = stream.write_all(b"HTTP/1.1 200 OK\r\nContent-Length: 0\r\n\r\n");
        }
        None => {
            let _ = stream.write_all(b"HTTP/1.1 404 Not Found\r\nContent-Length: 0\r\nConnection: close\r\n\r\n");
        }
    }
}

/// Returns (path, optional User-Agent value).
fn parse_request(request: &str) -> (&str, Option<&str>) {
    let mut path = "";
    let mut user_agent = None;
    for (i, line) in request.lines().enumerate() {
        let line = line.trim();
        if i == 0 {
            path = line.split_whitespace().nth(1).unwrap_or("");
            continue;
        }
        if line.is_empty() {
            break;
        }
        if let Some((name, value)) = line.split_once(':') {
            if name.trim().eq_ignore_ascii_case("user-agent") {
                user_agent = Some(value.trim());
            }
        }
    }
    (path, user_agent)
}
