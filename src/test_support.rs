//! Test-only helpers: a one-shot HTTP server on a loopback port.

use std::io::{Read, Write};
use std::net::{Shutdown, TcpListener, TcpStream};
use std::thread;

use crate::source::HttpSource;

#[derive(Debug, Clone)]
pub struct StubResponse {
    status: u16,
    reason: &'static str,
    body: Vec<u8>,
}

impl StubResponse {
    /// `200 OK` with a JSON body.
    pub fn ok(body: &str) -> Self {
        Self {
            status: 200,
            reason: "OK",
            body: body.as_bytes().to_vec(),
        }
    }

    /// A bodyless response with the given status line.
    pub fn status(status: u16, reason: &'static str) -> Self {
        Self {
            status,
            reason,
            body: Vec::new(),
        }
    }
}

/// Serve `response` to the first connection on a random loopback port.
///
/// Returns the URL to request and the server thread handle.
pub fn spawn_http_stub(response: StubResponse) -> (String, thread::JoinHandle<()>) {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();

    let handle = thread::spawn(move || {
        if let Ok((mut stream, _)) = listener.accept() {
            if read_request_head(&mut stream).is_ok() {
                let _ = write_response(&mut stream, &response);
            }
            let _ = stream.shutdown(Shutdown::Both);
        }
    });

    (format!("http://{addr}/products"), handle)
}

/// An [`HttpSource`] that ignores proxy settings, for loopback servers.
pub fn local_source(url: impl Into<String>) -> HttpSource {
    let client = reqwest::Client::builder().no_proxy().build().unwrap();
    HttpSource::with_client(url, client)
}

fn read_request_head(stream: &mut TcpStream) -> std::io::Result<()> {
    let mut buf = [0_u8; 1024];
    let mut request = Vec::new();
    loop {
        let read = stream.read(&mut buf)?;
        if read == 0 {
            break;
        }
        request.extend_from_slice(&buf[..read]);
        if request.windows(4).any(|window| window == b"\r\n\r\n") {
            break;
        }
        if request.len() > 64 * 1024 {
            break;
        }
    }
    Ok(())
}

fn write_response(stream: &mut TcpStream, response: &StubResponse) -> std::io::Result<()> {
    write!(
        stream,
        "HTTP/1.1 {} {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
        response.status,
        response.reason,
        response.body.len()
    )?;
    stream.write_all(&response.body)?;
    stream.flush()
}
