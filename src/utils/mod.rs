use base64::{engine::general_purpose, Engine as _};
use std::fs;
use std::path::Path;

/// Read a file and wrap it as a `data:` URI with the given MIME type.
pub fn encode_file_to_data_uri(path: &Path, content_type: &str) -> Result<String, std::io::Error> {
    let data = fs::read(path)?;
    Ok(format!(
        "data:{};base64,{}",
        content_type,
        general_purpose::STANDARD.encode(data)
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_file_to_data_uri() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("dot.png");
        fs::write(&path, b"hello").unwrap();

        let uri = encode_file_to_data_uri(&path, "image/png").unwrap();
        assert_eq!(uri, "data:image/png;base64,aGVsbG8=");
        assert!(encode_file_to_data_uri(&tmp.path().join("none.png"), "image/png").is_err());
    }
}
