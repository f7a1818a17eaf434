use super::*;
use std::fs;

fn touch(dir: &Path, name: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, b"img").unwrap();
    path
}

/// Compare ignoring case, so the tests hold on case-insensitive file systems.
fn assert_badge(found: Option<PathBuf>, expected: &Path) {
    let found = found.expect("badge should be found");
    assert_eq!(
        found.to_string_lossy().to_lowercase(),
        expected.to_string_lossy().to_lowercase()
    );
}

#[test]
fn test_normalize_brand() {
    assert_eq!(normalize_brand("Mercedes-AMG"), "mercedes-amg");
    assert_eq!(normalize_brand("Alfa  Romeo"), "alfa_romeo");
    assert_eq!(normalize_brand("  Rolls-Royce (UK) "), "rolls-royce_uk");
    assert_eq!(normalize_brand("A--B__C"), "a-b_c");
    assert_eq!(normalize_brand("!!!"), "");
}

#[test]
fn test_exact_file_name() {
    let dir = tempfile::tempdir().unwrap();
    let expected = touch(dir.path(), "Ferrari.png");
    touch(dir.path(), "Ferrari Classiche.png");

    let resolver = BadgeResolver::new([dir.path().to_path_buf()]);
    assert_badge(resolver.find("Ferrari"), &expected);
}

#[test]
fn test_case_insensitive_stem() {
    let dir = tempfile::tempdir().unwrap();
    let expected = touch(dir.path(), "porsche.JPG");

    let resolver = BadgeResolver::new([dir.path().to_path_buf()]);
    assert_badge(resolver.find("PORSCHE"), &expected);
}

#[test]
fn test_word_match_does_not_accept_longer_names() {
    let dir = tempfile::tempdir().unwrap();
    touch(dir.path(), "BMW Alpina.png");

    let resolver = BadgeResolver::new([dir.path().to_path_buf()]);
    assert_eq!(resolver.find("BMW"), None);

    let expected = touch(dir.path(), "bmw.svg");
    assert_badge(resolver.find("BMW"), &expected);
}

#[test]
fn test_word_match_across_separators() {
    let dir = tempfile::tempdir().unwrap();
    let expected = touch(dir.path(), "aston_martin.webp");

    let resolver = BadgeResolver::new([dir.path().to_path_buf()]);
    assert_badge(resolver.find("Aston Martin"), &expected);
}

#[test]
fn test_mercedes_amg_finds_underscored_file() {
    let dir = tempfile::tempdir().unwrap();
    let expected = touch(dir.path(), "mercedes_amg.png");

    let resolver = BadgeResolver::new([dir.path().to_path_buf()]);
    assert_badge(resolver.find("Mercedes-AMG"), &expected);
}

#[test]
fn test_user_directory_wins() {
    let user = tempfile::tempdir().unwrap();
    let default = tempfile::tempdir().unwrap();
    let user_badge = touch(user.path(), "ford.png");
    touch(default.path(), "Ford.png");

    let resolver = BadgeResolver::new([user.path().to_path_buf(), default.path().to_path_buf()]);
    assert_badge(resolver.find("Ford"), &user_badge);
}

#[test]
fn test_default_directory_used_when_user_has_no_match() {
    let user = tempfile::tempdir().unwrap();
    let default = tempfile::tempdir().unwrap();
    touch(user.path(), "audi.png");
    let expected = touch(default.path(), "lotus.png");

    let resolver = BadgeResolver::new([user.path().to_path_buf(), default.path().to_path_buf()]);
    assert_badge(resolver.find("Lotus"), &expected);
}

#[test]
fn test_non_image_files_ignored() {
    let dir = tempfile::tempdir().unwrap();
    touch(dir.path(), "ford.txt");

    let resolver = BadgeResolver::new([dir.path().to_path_buf()]);
    assert_eq!(resolver.find("Ford"), None);
}

#[test]
fn test_missing_directories_and_empty_brand() {
    let resolver = BadgeResolver::new([PathBuf::from("/nonexistent/pitwall/badges")]);
    assert_eq!(resolver.find("Ford"), None);
    assert_eq!(BadgeResolver::default().find("Ford"), None);

    let dir = tempfile::tempdir().unwrap();
    touch(dir.path(), "ford.png");
    let resolver = BadgeResolver::new([dir.path().to_path_buf()]);
    assert_eq!(resolver.find("   "), None);
}
