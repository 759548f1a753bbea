//! Unit tests for the download provider: file-name guessing rules and the
//! record table behavior observable without a network.

use rstest::rstest;
use tempfile::TempDir;

use darkelixir::services::download_provider::{
    guess_file_name, DownloadProvider, HttpDownloadProvider,
};
use darkelixir::types::download::DownloadRequest;

// --- guess_file_name ---

#[rstest]
#[case("https://host/files/map.json", None, None, "map.json")]
#[case("https://host/files/map.json?v=3", None, None, "map.json")]
#[case("https://host/files/map.json#frag", None, None, "map.json")]
#[case("https://host/dl?id=9", Some("attachment; filename=\"pack.zip\""), None, "pack.zip")]
#[case("https://host/dl", Some("attachment; filename=report.pdf"), None, "report.pdf")]
#[case("https://host/dl", Some("ATTACHMENT; FILENAME=caps.txt"), None, "caps.txt")]
fn test_guess_file_name_sources(
    #[case] url: &str,
    #[case] disposition: Option<&str>,
    #[case] mime: Option<&str>,
    #[case] expected: &str,
) {
    assert_eq!(guess_file_name(url, disposition, mime), expected);
}

/// Extension-less names get a MIME-derived extension, or ".bin" when the
/// type maps to nothing.
#[test]
fn test_guess_file_name_appends_extension() {
    let name = guess_file_name("https://host/export", None, Some("text/plain"));
    assert!(
        name.starts_with("export.") && name.len() > "export.".len(),
        "expected a mime-derived extension, got {}",
        name
    );

    assert_eq!(
        guess_file_name("https://host/export", None, Some("application/x-not-a-type")),
        "export.bin"
    );
    assert_eq!(guess_file_name("https://host/export", None, None), "export.bin");
}

/// Anything the URL or MIME type identifies as zip ends in ".zip", even
/// when the server mislabels it as octet-stream and the guess lands on
/// ".bin" first.
#[rstest]
#[case("https://host/assets.zip/download", None, Some("application/octet-stream"))]
#[case("https://host/assets.zip", None, None)]
#[case("https://host/get?id=1", None, Some("application/zip"))]
#[case("https://host/get?id=1", None, Some("APPLICATION/ZIP"))]
fn test_guess_file_name_zip_fixup(
    #[case] url: &str,
    #[case] disposition: Option<&str>,
    #[case] mime: Option<&str>,
) {
    let name = guess_file_name(url, disposition, mime);
    assert!(name.ends_with(".zip"), "expected .zip suffix, got {}", name);
    assert!(!name.contains(".bin"), "bin guess must be replaced: {}", name);
}

#[test]
fn test_guess_file_name_fallback() {
    // No path segment, no disposition, no type
    assert_eq!(guess_file_name("https://host/", None, None), "downloadfile.bin");
}

// --- HttpDownloadProvider record table ---

#[test]
fn test_query_unknown_handle_is_none() {
    let provider = HttpDownloadProvider::new().unwrap();
    assert!(provider.query("no-such-handle").is_none());
    assert!(provider.query("").is_none());
}

#[test]
fn test_enqueue_registers_record_at_destination() {
    let dir = TempDir::new().unwrap();
    let provider = HttpDownloadProvider::new().unwrap();

    // The connection will fail (nothing listens on this port), but the
    // record must exist immediately with the resolved destination path.
    let handle = provider
        .enqueue(DownloadRequest {
            url: "http://127.0.0.1:9/elixir-pack.zip".to_string(),
            file_name: "elixir-pack.zip".to_string(),
            destination_dir: dir.path().to_path_buf(),
            user_agent: None,
            mime_type: None,
        })
        .unwrap();

    let record = provider.query(&handle).expect("record must exist");
    assert_eq!(record.destination, dir.path().join("elixir-pack.zip"));
}

#[test]
fn test_enqueue_rejects_empty_url() {
    let dir = TempDir::new().unwrap();
    let provider = HttpDownloadProvider::new().unwrap();

    let result = provider.enqueue(DownloadRequest {
        url: String::new(),
        file_name: "x.bin".to_string(),
        destination_dir: dir.path().to_path_buf(),
        user_agent: None,
        mime_type: None,
    });
    assert!(result.is_err());
}

#[test]
fn test_enqueue_assigns_distinct_handles() {
    let dir = TempDir::new().unwrap();
    let provider = HttpDownloadProvider::new().unwrap();

    let request = DownloadRequest {
        url: "http://127.0.0.1:9/a".to_string(),
        file_name: "a.bin".to_string(),
        destination_dir: dir.path().to_path_buf(),
        user_agent: None,
        mime_type: None,
    };
    let h1 = provider.enqueue(request.clone()).unwrap();
    let h2 = provider.enqueue(request).unwrap();
    assert_ne!(h1, h2);
    assert!(provider.query(&h1).is_some());
    assert!(provider.query(&h2).is_some());
}
