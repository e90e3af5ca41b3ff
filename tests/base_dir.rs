use filter_kit::path::base_dir;

#[test]
fn resolves_to_an_existing_directory() {
    let dir = base_dir().expect("base dir resolves");
    assert!(dir.is_absolute());
    assert!(dir.is_dir());
}
