//! A local stand-in for the downstream endpoint.

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::server::conn::http1;
use hyper::service::service_fn;
use hyper::{Request, Response};
use hyper_util::rt::TokioIo;
use std::convert::Infallible;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

/// Starts an HTTP server on a random local port that answers every request
/// with the same status and body. Returns the URL of the server.
/// The server runs until the test runtime shuts down.
pub(crate) async fn start(status: u16, body: impl Into<String>) -> String {
    let body = Bytes::from(body.into());

    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind the test server");
    let addr = listener.local_addr().expect("Failed to get the test server address");

    tokio::spawn(async move {
        loop {
            let (stream, _) = match listener.accept().await {
                Ok(v) => v,
                Err(_) => return,
            };
            let io = TokioIo::new(stream);
            let body = body.clone();

            tokio::task::spawn(async move {
                let service = service_fn(move |_req: Request<hyper::body::Incoming>| {
                    let body = body.clone();
                    async move {
                        Ok::<_, Infallible>(
                            Response::builder()
                                .status(status)
                                .body(Full::new(body))
                                .expect("Failed to create a response"),
                        )
                    }
                });

                // the client hanging up is not an error for these tests
                let _ = http1::Builder::new().serve_connection(io, service).await;
            });
        }
    });

    format!("http://{addr}/")
}

/// Returns a URL on a local port nothing is listening on.
pub(crate) async fn closed_port_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind the test port");
    let addr = listener.local_addr().expect("Failed to get the test port");
    drop(listener);

    format!("http://{addr}/")
}

/// Starts a server that promises a 100 byte body, sends 5 bytes and hangs up.
/// Accepts a single connection. Returns the URL of the server.
pub(crate) async fn truncated_body_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind the test server");
    let addr = listener.local_addr().expect("Failed to get the test server address");

    tokio::spawn(async move {
        let (mut stream, _) = match listener.accept().await {
            Ok(v) => v,
            Err(_) => return,
        };
        // unread request bytes would make the close a reset and the client could lose the headers
        let mut request = [0u8; 4096];
        let _ = stream.read(&mut request).await;

        let _ = stream
            .write_all(b"HTTP/1.1 200 OK\r\ncontent-length: 100\r\n\r\nshort")
            .await;
        let _ = stream.flush().await;
        drop(stream);
    });

    format!("http://{addr}/")
}
