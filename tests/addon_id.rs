use localfiles::addon::id::{decode, encode, format_id, parse_id, MOVIE_PREFIX, SERIES_PREFIX};

#[test]
fn test_encode_matches_encode_uri_component() {
    assert_eq!(
        encode("/home/Library/Movies And Series/Movies/Amélie (2001).mkv"),
        "%2Fhome%2FLibrary%2FMovies%20And%20Series%2FMovies%2FAm%C3%A9lie%20(2001).mkv"
    );
    assert_eq!(encode("a-b_c.d!e~f*g'h"), "a-b_c.d!e~f*g'h");
    assert_eq!(encode("a:b?c&d=e#f"), "a%3Ab%3Fc%26d%3De%23f");
}

#[test]
fn test_round_trip() {
    let payloads = [
        "/srv/Movies/Inception.mp4",
        "/srv/Movies/Spaces and: colons.mkv",
        "The Office (US)",
        "Ψ-Files 100%",
        "",
    ];
    for p in payloads {
        let encoded = encode(p);
        assert!(!encoded.contains(':'), "encoded payload must not contain a colon: {encoded}");
        assert_eq!(decode(&encoded).as_deref(), Some(p));
    }
}

#[test]
fn test_format_id_prefixes_payload() {
    assert_eq!(format_id(SERIES_PREFIX, "Foo Bar"), "local-series:Foo%20Bar");
    assert_eq!(format_id(MOVIE_PREFIX, "/m/a.mp4"), "local-movie:%2Fm%2Fa.mp4");
}

#[test]
fn test_parse_id_splits_on_first_colon() {
    let (prefix, payload) = parse_id("local-movie:%2Fm%2Fa%3Ab.mp4").unwrap();
    assert_eq!(prefix, "local-movie");
    assert_eq!(payload, "/m/a:b.mp4");

    let (prefix, payload) = parse_id("xyz:abc:def").unwrap();
    assert_eq!(prefix, "xyz");
    assert_eq!(payload, "abc:def");
}

#[test]
fn test_parse_id_without_colon_is_none() {
    assert!(parse_id("local-movie").is_none());
}

#[test]
fn test_decode_rejects_invalid_utf8() {
    assert!(decode("%FF%FE").is_none());
    assert!(parse_id("local-series:%FF").is_none());
}
