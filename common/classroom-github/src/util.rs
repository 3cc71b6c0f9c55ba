//! Utility functions for interpreting `gh` output

/// Whether `gh` stderr describes an HTTP 404 rather than a transport failure
pub fn is_not_found(stderr: &str) -> bool {
    stderr.contains("HTTP 404") || stderr.contains("Not Found")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_not_found() {
        assert!(is_not_found("gh: Not Found (HTTP 404)"));
        assert!(is_not_found("HTTP 404: Not Found (https://api.github.com/users/x)"));
        assert!(!is_not_found("error connecting to api.github.com"));
        assert!(!is_not_found("HTTP 401: Bad credentials"));
    }
}
