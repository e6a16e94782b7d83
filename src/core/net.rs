// src/core/net.rs

// Blocking HTTP GET over a reused reqwest session.

use reqwest::blocking::Client;

use crate::error::LookupError;

/// One connection pool, one user-agent, no other headers.
/// Dropping the session releases its pooled connections.
pub struct HttpSession {
    client: Client,
}

impl HttpSession {
    pub fn new(user_agent: &str) -> Result<Self, LookupError> {
        let client = Client::builder()
            .user_agent(user_agent)
            .build()?;
        Ok(Self { client })
    }

    /// GET `url` and return the decoded body. Any non-2xx status is an error.
    pub fn get_text(&self, url: &str) -> Result<String, LookupError> {
        let resp = self.client.get(url).send()?;

        let status = resp.status();
        if !status.is_success() {
            return Err(LookupError::Status { status, url: s!(url) });
        }
        Ok(resp.text()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{BufRead, BufReader, Write};
    use std::net::TcpListener;
    use std::thread;

    /// Serve exactly one canned response and hand back the request head.
    fn serve_once(status_line: &'static str, body: &'static str) -> (String, thread::JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        let handle = thread::spawn(move || {
            let (mut stream, _) = listener.accept().unwrap();
            let mut reader = BufReader::new(stream.try_clone().unwrap());
            let mut head = s!();
            loop {
                let mut line = s!();
                reader.read_line(&mut line).unwrap();
                if line == "\r\n" || line.is_empty() { break; }
                head.push_str(&line);
            }
            let resp = format!(
                "{status_line}\r\nContent-Type: text/html; charset=utf-8\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            );
            stream.write_all(resp.as_bytes()).unwrap();
            stream.flush().unwrap();
            head
        });
        (format!("http://{addr}/nif/123/"), handle)
    }

    #[test]
    fn sends_user_agent_and_returns_body() {
        let (url, handle) = serve_once("HTTP/1.1 200 OK", "<html>ok</html>");
        let session = HttpSession::new("test-agent/1.0").unwrap();

        let body = session.get_text(&url).unwrap();
        assert_eq!(body, "<html>ok</html>");

        let head = handle.join().unwrap().to_ascii_lowercase();
        assert!(head.starts_with("get /nif/123/ "));
        assert!(head.contains("user-agent: test-agent/1.0"));
        assert!(!head.contains("cookie:"));
    }

    #[test]
    fn non_success_status_is_an_error() {
        let (url, handle) = serve_once("HTTP/1.1 404 Not Found", "gone");
        let session = HttpSession::new("test-agent/1.0").unwrap();

        match session.get_text(&url) {
            Err(LookupError::Status { status, url: u }) => {
                assert_eq!(status.as_u16(), 404);
                assert_eq!(u, url);
            }
            other => panic!("expected status error, got {other:?}"),
        }
        handle.join().unwrap();
    }

    #[test]
    fn connection_refused_is_an_http_error() {
        // Bind then drop to get a port nobody listens on.
        let port = TcpListener::bind("127.0.0.1:0").unwrap().local_addr().unwrap().port();
        let session = HttpSession::new("test-agent/1.0").unwrap();

        let err = session.get_text(&format!("http://127.0.0.1:{port}/")).unwrap_err();
        assert!(matches!(err, LookupError::Http(_)));
    }
}
