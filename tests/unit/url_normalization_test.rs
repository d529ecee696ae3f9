//! Parameterized cases for `normalize_url`.

use rstest::rstest;
use smartmark::controllers::collection_controller::normalize_url;

#[rstest]
#[case("example.com", "https://example.com")]
#[case("http://x", "http://x")]
#[case("https://example.com", "https://example.com")]
#[case("http://example.com/path?q=1", "http://example.com/path?q=1")]
#[case("  example.com  ", "https://example.com")]
#[case("www.example.com", "https://www.example.com")]
#[case("ftp.example.com", "https://ftp.example.com")]
fn test_normalize_url_cases(#[case] input: &str, #[case] expected: &str) {
    assert_eq!(normalize_url(input), expected);
}

#[rstest]
#[case("example.com")]
#[case("http://x")]
#[case("  https://padded.org ")]
fn test_normalize_url_is_idempotent(#[case] input: &str) {
    let once = normalize_url(input);
    assert_eq!(normalize_url(&once), once);
}
