use std::path::PathBuf;

use e2e_helpers::downloads::{download, DownloadOutcome, Downloader};
use e2e_helpers::Error;
use tempfile::TempDir;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const GENESIS: &[u8] = b"{\"startTime\": 1563999616, \"protocolConsts\": {\"k\": 2160}}";

/// reqwest's blocking client must not run on the async runtime threads
async fn blocking_download(url: String, dest: Option<PathBuf>) -> Result<DownloadOutcome, Error> {
    tokio::task::spawn_blocking(move || download(&url, dest.as_deref()))
        .await
        .unwrap()
}

async fn serve(server: &MockServer, route: &str, status: u16, body: &[u8]) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(ResponseTemplate::new(status).set_body_bytes(body.to_vec()))
        .mount(server)
        .await;
}

#[tokio::test(flavor = "multi_thread")]
async fn test_download_writes_exact_body() {
    let server = MockServer::start().await;
    serve(&server, "/configs/genesis.json", 200, GENESIS).await;

    let temp_dir = TempDir::new().unwrap();
    let dest = temp_dir.path().join("genesis.json");
    let url = format!("{}/configs/genesis.json", server.uri());

    let outcome = blocking_download(url.clone(), Some(dest.clone()))
        .await
        .unwrap();

    assert_eq!(std::fs::read(&dest).unwrap(), GENESIS);
    assert_eq!(outcome.status.as_u16(), 200);
    assert_eq!(outcome.bytes, GENESIS.len() as u64);
    assert_eq!(outcome.path, dest);

    // Same text the downloader prints as `[Downloader] <line>`
    let line = outcome.log_line();
    assert!(line.contains(&url));
    let code = line.rsplit(' ').next().unwrap();
    assert_eq!(code.len(), 3);
    assert!(code.chars().all(|c| c.is_ascii_digit()));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_download_large_body_streams_to_file() {
    // Several MB so the body spans many copy chunks
    let body: Vec<u8> = (0..6 * 1024 * 1024u32).map(|i| (i % 251) as u8).collect();
    let server = MockServer::start().await;
    serve(&server, "/cardano-wallet-linux64/binary-dist", 200, &body).await;

    let temp_dir = TempDir::new().unwrap();
    let dest = temp_dir.path().join("binary-dist");

    let outcome = blocking_download(
        format!("{}/cardano-wallet-linux64/binary-dist", server.uri()),
        Some(dest.clone()),
    )
    .await
    .unwrap();

    assert_eq!(outcome.bytes, body.len() as u64);
    assert_eq!(std::fs::metadata(&dest).unwrap().len(), body.len() as u64);
    assert!(std::fs::read(&dest).unwrap() == body);
}

#[tokio::test(flavor = "multi_thread")]
async fn test_directory_destination_is_io_error() {
    let server = MockServer::start().await;
    serve(&server, "/file", 200, b"body").await;

    let temp_dir = TempDir::new().unwrap();

    let err = blocking_download(
        format!("{}/file", server.uri()),
        Some(temp_dir.path().to_path_buf()),
    )
    .await
    .unwrap_err();
    assert!(matches!(err, Error::Io { .. }));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_download_overwrites_existing_file() {
    let server = MockServer::start().await;
    serve(&server, "/topology.json", 200, b"new").await;

    let temp_dir = TempDir::new().unwrap();
    let dest = temp_dir.path().join("topology.json");
    std::fs::write(&dest, b"old content that is longer").unwrap();

    blocking_download(format!("{}/topology.json", server.uri()), Some(dest.clone()))
        .await
        .unwrap();

    assert_eq!(std::fs::read(&dest).unwrap(), b"new");
}

#[tokio::test(flavor = "multi_thread")]
async fn test_error_status_body_still_written() {
    let server = MockServer::start().await;
    serve(&server, "/missing", 404, b"not found").await;

    let temp_dir = TempDir::new().unwrap();
    let dest = temp_dir.path().join("missing");

    let outcome = blocking_download(format!("{}/missing", server.uri()), Some(dest.clone()))
        .await
        .unwrap();

    assert_eq!(outcome.status.as_u16(), 404);
    assert!(outcome.log_line().ends_with(" -> 404"));
    assert_eq!(std::fs::read(&dest).unwrap(), b"not found");
}

#[tokio::test(flavor = "multi_thread")]
async fn test_default_destination_is_last_segment() {
    let server = MockServer::start().await;
    serve(&server, "/download/1/byron-genesis.json", 200, GENESIS).await;

    // Only test in this binary relying on the working directory
    let temp_dir = TempDir::new().unwrap();
    std::env::set_current_dir(temp_dir.path()).unwrap();

    let outcome = blocking_download(
        format!("{}/download/1/byron-genesis.json", server.uri()),
        None,
    )
    .await
    .unwrap();

    assert_eq!(outcome.path, PathBuf::from("byron-genesis.json"));
    assert_eq!(
        std::fs::read(temp_dir.path().join("byron-genesis.json")).unwrap(),
        GENESIS
    );
}

#[tokio::test(flavor = "multi_thread")]
async fn test_unwritable_destination() {
    let server = MockServer::start().await;
    serve(&server, "/file", 200, b"body").await;

    let temp_dir = TempDir::new().unwrap();
    let dest = temp_dir.path().join("no-such-dir").join("file");

    let err = blocking_download(format!("{}/file", server.uri()), Some(dest))
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Io { .. }));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_shared_downloader() {
    let server = MockServer::start().await;
    serve(&server, "/a", 200, b"aaa").await;
    serve(&server, "/b", 200, b"bbb").await;

    let temp_dir = TempDir::new().unwrap();
    let dir = temp_dir.path().to_path_buf();
    let base = server.uri();

    tokio::task::spawn_blocking(move || {
        let downloader = Downloader::with_client(reqwest::blocking::Client::new());
        downloader
            .download(&format!("{}/a", base), Some(dir.join("a").as_path()))
            .unwrap();
        downloader
            .download(&format!("{}/b", base), Some(dir.join("b").as_path()))
            .unwrap();
    })
    .await
    .unwrap();

    assert_eq!(std::fs::read(temp_dir.path().join("a")).unwrap(), b"aaa");
    assert_eq!(std::fs::read(temp_dir.path().join("b")).unwrap(), b"bbb");
}

#[test]
fn test_connection_refused() {
    let temp_dir = TempDir::new().unwrap();
    let dest = temp_dir.path().join("x");

    let err = download("http://127.0.0.1:1/x", Some(dest.as_path())).unwrap_err();
    assert!(matches!(err, Error::Network { .. }));
    assert!(!dest.exists());
}

#[test]
fn test_no_file_name() {
    let err = download("http://127.0.0.1:1/", None).unwrap_err();
    assert!(matches!(err, Error::NoFileName(_)));
}
