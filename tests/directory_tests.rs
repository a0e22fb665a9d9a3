use std::io::{Read, Write};
use std::net::TcpListener;
use std::thread;

use comedor::directory::{self, DirectoryConfig};
use comedor::error::ComedorError;

/// Serve exactly one HTTP response on a local port, then close.
fn serve_once(status_line: &'static str, body: String) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();

    thread::spawn(move || {
        if let Ok((mut stream, _)) = listener.accept() {
            let mut buf = [0u8; 4096];
            let _ = stream.read(&mut buf);
            let response = format!(
                "{}\r\nContent-Type: text/plain; charset=utf-8\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status_line,
                body.len(),
                body
            );
            let _ = stream.write_all(response.as_bytes());
        }
    });

    format!("http://{}", addr)
}

fn config_for(base_url: String) -> DirectoryConfig {
    DirectoryConfig {
        base_url,
        api_key: "test-key".into(),
    }
}

// ==========================================================================
// FAILURE MAPPING
// ==========================================================================

#[test]
fn http_error_with_multibyte_body_maps_to_directory_error() {
    // 199 ASCII bytes followed by a two-byte character, so a byte-indexed
    // truncation at 200 would land inside it.
    let mut body = "a".repeat(199);
    body.push('é');
    let base_url = serve_once("HTTP/1.1 400 Bad Request", body);

    match directory::fetch_people(&config_for(base_url)) {
        Err(ComedorError::Directory(msg)) => assert!(msg.contains("HTTP 400")),
        other => panic!("expected a directory error, got {:?}", other.map(|p| p.len())),
    }
}

#[test]
fn unreachable_backend_maps_to_directory_error() {
    // Bind then drop to get a port with nothing listening.
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let result = directory::fetch_people(&config_for(format!("http://{}", addr)));
    assert!(matches!(result, Err(ComedorError::Directory(_))));
}

#[test]
fn non_json_success_body_maps_to_directory_error() {
    let base_url = serve_once("HTTP/1.1 200 OK", "<html>not people</html>".to_string());

    let result = directory::fetch_people(&config_for(base_url));
    assert!(matches!(result, Err(ComedorError::Directory(_))));
}
