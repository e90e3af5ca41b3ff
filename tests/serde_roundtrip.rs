// tests/serde_roundtrip.rs
use filter_kit::FileSize;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, PartialEq)]
struct Manifest {
    size: FileSize,
}

#[test]
fn file_size_is_transparent_in_json() {
    let original = Manifest { size: FileSize::from(2048) };
    let json = serde_json::to_string(&original).expect("serializes");
    assert_eq!(json, r#"{"size":2048}"#);
    let decoded: Manifest = serde_json::from_str(&json).expect("deserializes");
    assert_eq!(decoded, original);
}
