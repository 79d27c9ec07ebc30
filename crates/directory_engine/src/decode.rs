use directory_core::User;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DecodeError {
    #[error("payload is not a JSON array of users at line {line}, column {column}: {message}")]
    Malformed {
        line: usize,
        column: usize,
        message: String,
    },
}

/// Decode one page body: a JSON array of user records. A UTF-8 BOM is tolerated.
pub fn decode_users(bytes: &[u8]) -> Result<Vec<User>, DecodeError> {
    let body = bytes.strip_prefix(b"\xEF\xBB\xBF").unwrap_or(bytes);
    serde_json::from_slice(body).map_err(|err| DecodeError::Malformed {
        line: err.line(),
        column: err.column(),
        message: err.to_string(),
    })
}
