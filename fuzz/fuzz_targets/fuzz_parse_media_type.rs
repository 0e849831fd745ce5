#![no_main]

use libfuzzer_sys::fuzz_target;
use rfc_mediatype::{is_media_type, parse_content_type, parse_media_type};

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        if !is_media_type(s) {
            assert!(parse_media_type(s).is_err());
            return;
        }

        // Anything the validator accepts must parse
        let parts = parse_media_type(s).unwrap();
        assert!(!parts.type_.is_empty());
        assert!(!parts.subtype.is_empty());
        assert_eq!(parts.type_, parts.type_.to_lowercase());
        assert_eq!(parts.subtype, parts.subtype.to_lowercase());

        let content_type = parse_content_type(s).unwrap();
        assert!(content_type.as_str().starts_with(parts.type_.as_str()));
    }
});
