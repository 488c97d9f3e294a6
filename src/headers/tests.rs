//! Tests for header field parsing.

#[cfg(test)]
mod tests {
    use crate::headers::{Error, HeaderMap};

    #[test]
    fn test_parse_single_header() {
        let mut headers = HeaderMap::new();
        let data = b"Host: localhost:42069\r\n\r\n";
        let (n, done) = headers.parse(data).unwrap();
        assert_eq!(n, 23);
        assert!(!done);
        assert_eq!(headers.get("Host"), Some("localhost:42069"));
    }

    #[test]
    fn test_parse_header_with_surrounding_whitespace() {
        let mut headers = HeaderMap::new();
        let data = b"       Host:    localhost:42069      \r\n\r\n";
        let (n, done) = headers.parse(data).unwrap();
        assert_eq!(n, 39);
        assert!(!done);
        assert_eq!(headers.get("host"), Some("localhost:42069"));
    }

    #[test]
    fn test_parse_end_of_section() {
        let mut headers = HeaderMap::new();
        let (n, done) = headers.parse(b"\r\nleftover").unwrap();
        assert_eq!(n, 2);
        assert!(done);
        assert!(headers.is_empty());
    }

    #[test]
    fn test_parse_needs_more_data() {
        let mut headers = HeaderMap::new();
        let (n, done) = headers.parse(b"Host: local").unwrap();
        assert_eq!(n, 0);
        assert!(!done);
        assert!(headers.is_empty());
    }

    #[test]
    fn test_parse_whitespace_before_colon() {
        let mut headers = HeaderMap::new();
        let result = headers.parse(b"       Host : localhost:42069       \r\n\r\n");
        assert!(matches!(result, Err(Error::InvalidFieldName(ref n)) if n == "Host "));
        assert!(headers.is_empty());
    }

    #[test]
    fn test_parse_space_inside_name() {
        let mut headers = HeaderMap::new();
        let result = headers.parse(b"X Custom: value\r\n");
        assert!(matches!(result, Err(Error::InvalidFieldName(_))));
        assert!(headers.is_empty());
    }

    #[test]
    fn test_parse_control_character_in_name() {
        let mut headers = HeaderMap::new();
        let result = headers.parse(b"X-Bad\x01Name: value\r\n");
        assert!(matches!(result, Err(Error::InvalidFieldName(_))));
    }

    #[test]
    fn test_parse_non_token_character_in_name() {
        let mut headers = HeaderMap::new();
        let result = headers.parse(b"H\xc2\xa9st: localhost:42069\r\n\r\n");
        assert!(matches!(result, Err(Error::InvalidFieldName(_))));
    }

    #[test]
    fn test_parse_missing_separator() {
        let mut headers = HeaderMap::new();
        let result = headers.parse(b"InvalidHeader\r\n");
        assert!(matches!(result, Err(Error::MissingSeparator(_))));
    }

    #[test]
    fn test_parse_empty_name() {
        let mut headers = HeaderMap::new();
        let result = headers.parse(b": value\r\n");
        assert!(matches!(result, Err(Error::InvalidFieldName(ref n)) if n.is_empty()));
    }

    #[test]
    fn test_parse_value_with_colons() {
        let mut headers = HeaderMap::new();
        headers.parse(b"X-Test: value:with:colons\r\n").unwrap();
        assert_eq!(headers.get("x-test"), Some("value:with:colons"));
    }

    #[test]
    fn test_parse_empty_value() {
        let mut headers = HeaderMap::new();
        headers.parse(b"X-Empty:\r\n").unwrap();
        assert_eq!(headers.get("X-Empty"), Some(""));
    }

    #[test]
    fn test_parse_latin1_byte_in_value() {
        let mut headers = HeaderMap::new();
        let (n, done) = headers.parse(b"X-Name: caf\xe9\r\n\r\n").unwrap();
        assert_eq!(n, 14);
        assert!(!done);
        assert_eq!(headers.get("X-Name"), Some("caf\u{FFFD}"));
    }

    #[test]
    fn test_parse_utf8_value() {
        let mut headers = HeaderMap::new();
        headers.parse("X-Greeting: gr\u{fc}\u{df} dich\r\n".as_bytes()).unwrap();
        assert_eq!(headers.get("x-greeting"), Some("gr\u{fc}\u{df} dich"));
    }

    #[test]
    fn test_parse_all_token_characters() {
        let mut headers = HeaderMap::new();
        headers.parse(b"!#$%&'*+-.^_`|~09azAZ: ok\r\n").unwrap();
        assert_eq!(headers.get("!#$%&'*+-.^_`|~09azaz"), Some("ok"));
    }

    #[test]
    fn test_parse_repeated_header_joins_values() {
        let mut headers = HeaderMap::new();
        let (n, done) = headers.parse(b"Host: a\r\n").unwrap();
        assert_eq!((n, done), (9, false));
        let (n, done) = headers.parse(b"Host: b\r\n").unwrap();
        assert_eq!((n, done), (9, false));
        let (n, done) = headers.parse(b"\r\n").unwrap();
        assert_eq!((n, done), (2, true));
        assert_eq!(headers.get("Host"), Some("a, b"));
        assert_eq!(headers.len(), 1);
    }

    #[test]
    fn test_set_is_case_insensitive() {
        let mut headers = HeaderMap::new();
        headers.set("Set-Person", "lane-loves-go");
        headers.set("set-person", "prime-loves-zig");
        headers.set("SET-PERSON", "tj-loves-ocaml");
        assert_eq!(
            headers.get("Set-Person"),
            Some("lane-loves-go, prime-loves-zig, tj-loves-ocaml")
        );
        // The first spelling is the one kept for output
        assert_eq!(headers.iter().next(), Some(("Set-Person", "lane-loves-go, prime-loves-zig, tj-loves-ocaml")));
    }

    #[test]
    fn test_get_or_empty() {
        let mut headers = HeaderMap::new();
        headers.set("Content-Type", "text/plain");
        assert_eq!(headers.get_or_empty("content-type"), "text/plain");
        assert_eq!(headers.get_or_empty("Content-Length"), "");
        assert!(headers.get("Content-Length").is_none());
    }

    #[test]
    fn test_replace_and_remove() {
        let mut headers = HeaderMap::new();
        headers.set("Content-Type", "text/plain");
        headers.replace("content-type", "text/html");
        assert_eq!(headers.get("Content-Type"), Some("text/html"));

        headers.replace("Trailer", "X-Content-Length");
        assert_eq!(headers.len(), 2);

        assert_eq!(headers.remove("CONTENT-TYPE"), Some("text/html".to_string()));
        assert!(!headers.contains("Content-Type"));
        assert_eq!(headers.remove("Content-Type"), None);
        assert_eq!(headers.len(), 1);
    }

    #[test]
    fn test_iter_preserves_insertion_order() {
        let headers: HeaderMap = [
            ("Content-Length", "13"),
            ("Connection", "close"),
            ("Content-Type", "text/plain"),
        ]
        .into_iter()
        .collect();

        let names: Vec<&str> = headers.iter().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["Content-Length", "Connection", "Content-Type"]);
    }
}
