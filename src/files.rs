//! File download and type-detection utilities.
//!
//! Downloads refinement payloads into a fresh temporary directory and sniffs
//! file types by content when servers do not say. The caller owns the
//! returned file and its parent directory and is responsible for cleanup.

use std::fs::{self, File};
use std::io::{Read, Seek, SeekFrom};
use std::path::{Path, PathBuf};
use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::{HeaderMap, CONTENT_DISPOSITION, CONTENT_TYPE};
use tracing::{debug, info, warn};
use url::Url;

use crate::error::{FileError, Result};

const HEAD_TIMEOUT: Duration = Duration::from_secs(10);
const DOWNLOAD_TIMEOUT: Duration = Duration::from_secs(30);
const DEFAULT_EXTENSION: &str = ".json";

/// Bytes sampled from the head of a file for text detection.
const TEXT_SAMPLE_SIZE: usize = 8192;

/// Download a file from `file_url` into a new temporary directory.
///
/// The target extension is probed with a HEAD request: Content-Disposition
/// first, then the URL path, then the Content-Type, defaulting to `.json`.
/// A HEAD failure is not fatal; the GET below decides for real.
///
/// # Errors
///
/// Returns an error if the temporary directory cannot be created or the GET
/// request fails. A failed download removes the partial file and directory.
pub fn download_file(file_url: &str) -> Result<PathBuf> {
    let temp_dir = tempfile::Builder::new()
        .prefix("refiner-download-")
        .tempdir()?
        .keep();

    let extension = probe_extension(file_url).unwrap_or_else(|| {
        debug!(url = %file_url, "could not determine file extension, using default");
        DEFAULT_EXTENSION.to_string()
    });
    let target = temp_dir.join(format!("encrypted_file{extension}"));

    match fetch_to(file_url, &target) {
        Ok(()) => {
            info!(path = %target.display(), "downloaded file");
            Ok(target)
        }
        Err(reason) => {
            let _ = fs::remove_file(&target);
            let _ = fs::remove_dir(&temp_dir);
            Err(FileError::Download {
                url: file_url.to_string(),
                reason,
            }
            .into())
        }
    }
}

fn fetch_to(file_url: &str, target: &Path) -> std::result::Result<(), String> {
    let client = Client::builder()
        .timeout(DOWNLOAD_TIMEOUT)
        .build()
        .map_err(|e| e.to_string())?;
    let mut response = client
        .get(file_url)
        .send()
        .and_then(|r| r.error_for_status())
        .map_err(|e| e.to_string())?;
    let mut file = File::create(target).map_err(|e| e.to_string())?;
    response.copy_to(&mut file).map_err(|e| e.to_string())?;
    Ok(())
}

fn probe_extension(file_url: &str) -> Option<String> {
    let client = Client::builder().timeout(HEAD_TIMEOUT).build().ok()?;
    match client
        .head(file_url)
        .send()
        .and_then(|r| r.error_for_status())
    {
        Ok(response) => extension_from_content_disposition(response.headers())
            .or_else(|| extension_from_url_path(file_url))
            .or_else(|| extension_from_content_type(response.headers())),
        Err(e) => {
            // Some servers reject HEAD outright; fall back to the URL path.
            warn!(url = %file_url, error = %e, "HEAD probe failed, using URL path detection");
            extension_from_url_path(file_url)
        }
    }
}

/// Extract a file extension from a Content-Disposition `filename=` value.
fn extension_from_content_disposition(headers: &HeaderMap) -> Option<String> {
    let value = headers.get(CONTENT_DISPOSITION)?.to_str().ok()?;
    let start = value.find("filename=")? + "filename=".len();
    let filename = value[start..]
        .split(';')
        .next()?
        .trim()
        .trim_matches(|c| c == '"' || c == '\'');
    extension_of(filename)
}

/// Extract a file extension from the URL's path component.
fn extension_from_url_path(file_url: &str) -> Option<String> {
    let parsed = Url::parse(file_url).ok()?;
    extension_of(parsed.path())
}

/// Map a Content-Type MIME value to a file extension.
fn extension_from_content_type(headers: &HeaderMap) -> Option<String> {
    let value = headers.get(CONTENT_TYPE)?.to_str().ok()?;
    let mime = value.split(';').next()?.trim().to_ascii_lowercase();
    let ext = match mime.as_str() {
        "application/pdf" => ".pdf",
        "application/zip" | "application/x-compressed" => ".zip",
        "application/x-gzip" => ".gz",
        "application/x-tar" => ".tar",
        "application/x-7z-compressed" => ".7z",
        "application/json" => ".json",
        "text/csv" => ".csv",
        "text/plain" => ".txt",
        "image/jpeg" => ".jpg",
        "image/png" => ".png",
        _ => return None,
    };
    Some(ext.to_string())
}

fn extension_of(name: &str) -> Option<String> {
    Path::new(name)
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| format!(".{e}"))
}

/// Detect a file's type from its content.
///
/// Checks in order: valid JSON, printable text, archive magic bytes
/// (zip/gzip/tar). Falls back to the path's existing extension, else `.bin`.
/// Returns the extension with a leading dot.
pub fn detect_file_type<P: AsRef<Path>>(path: P) -> String {
    let path = path.as_ref();
    if is_json_file(path) {
        return ".json".to_string();
    }
    if is_text_file(path) {
        return ".txt".to_string();
    }
    if let Some(ext) = archive_extension(path) {
        return ext;
    }
    extension_of(&path.to_string_lossy()).unwrap_or_else(|| ".bin".to_string())
}

/// True when the file holds a valid JSON document (`{...}` or `[...]`).
pub fn is_json_file(path: &Path) -> bool {
    let Ok(content) = fs::read_to_string(path) else {
        return false;
    };
    let trimmed = content.trim();
    let structured = (trimmed.starts_with('{') && trimmed.ends_with('}'))
        || (trimmed.starts_with('[') && trimmed.ends_with(']'));
    structured && serde_json::from_str::<serde_json::Value>(trimmed).is_ok()
}

/// True when the head of the file looks like printable UTF-8 text.
///
/// Samples up to 8 KiB; rejects samples with more than 30% NUL/control
/// bytes (tab, LF, CR allowed) or invalid UTF-8.
pub fn is_text_file(path: &Path) -> bool {
    let Ok(mut file) = File::open(path) else {
        return false;
    };
    let mut sample = vec![0u8; TEXT_SAMPLE_SIZE];
    let Ok(read) = file.read(&mut sample) else {
        return false;
    };
    sample.truncate(read);
    if sample.is_empty() {
        return false;
    }

    // NUL bytes count against both tallies.
    let nulls = sample.iter().filter(|&&b| b == 0).count();
    let controls = sample
        .iter()
        .filter(|&&b| b < 32 && !matches!(b, 9 | 10 | 13))
        .count();
    if (nulls + controls) * 10 > sample.len() * 3 {
        return false;
    }
    std::str::from_utf8(&sample).is_ok()
}

fn archive_extension(path: &Path) -> Option<String> {
    let mut file = File::open(path).ok()?;
    let mut header = [0u8; 8];
    let read = file.read(&mut header).ok()?;

    if header[..read].starts_with(b"PK\x03\x04") {
        return Some(".zip".to_string());
    }
    if header[..read].starts_with(&[0x1f, 0x8b]) {
        return Some(".gz".to_string());
    }

    // ustar magic sits at offset 257 in POSIX tar headers.
    let mut ustar = [0u8; 5];
    if file.seek(SeekFrom::Start(257)).is_ok()
        && file.read_exact(&mut ustar).is_ok()
        && &ustar == b"ustar"
    {
        return Some(".tar".to_string());
    }
    None
}

#[cfg(test)]
mod tests {
    use reqwest::header::HeaderValue;

    use super::*;

    fn headers_with(name: reqwest::header::HeaderName, value: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(name, HeaderValue::from_str(value).expect("header value"));
        headers
    }

    #[test]
    fn content_disposition_filename_wins() {
        let headers = headers_with(CONTENT_DISPOSITION, "attachment; filename=\"export.csv\"");
        assert_eq!(
            extension_from_content_disposition(&headers).as_deref(),
            Some(".csv")
        );
    }

    #[test]
    fn content_disposition_without_filename_is_skipped() {
        let headers = headers_with(CONTENT_DISPOSITION, "attachment");
        assert_eq!(extension_from_content_disposition(&headers), None);
    }

    #[test]
    fn url_path_extension_is_detected() {
        assert_eq!(
            extension_from_url_path("https://example.com/files/data.zip?sig=abc").as_deref(),
            Some(".zip")
        );
        assert_eq!(extension_from_url_path("https://example.com/files/data"), None);
    }

    #[test]
    fn content_type_maps_known_mime_types() {
        let headers = headers_with(CONTENT_TYPE, "application/json; charset=utf-8");
        assert_eq!(
            extension_from_content_type(&headers).as_deref(),
            Some(".json")
        );

        let headers = headers_with(CONTENT_TYPE, "application/x-unknown");
        assert_eq!(extension_from_content_type(&headers), None);
    }
}
