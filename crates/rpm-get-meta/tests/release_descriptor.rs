use rpm_get_meta::{JsonTree, MetaError, QueryPath, Step, Value, is_rate_limited, query, rewrite_match};
use regex::Regex;
use tempfile::tempdir;

const RELEASE: &str = r#"{
  "url": "https://api.github.com/repos/peazip/PeaZip/releases/1",
  "tag_name": "10.4.0",
  "name": "PeaZip 10.4.0",
  "prerelease": false,
  "assets": [
    {
      "name": "peazip-10.4.0.LINUX.GTK2-1.x86_64.rpm",
      "size": 9001,
      "browser_download_url": "https://github.com/peazip/PeaZip/releases/download/10.4.0/peazip-10.4.0.LINUX.GTK2-1.x86_64.rpm"
    },
    {
      "name": "peazip-10.4.0.LINUX.Qt6-1.x86_64.rpm",
      "size": 9002,
      "browser_download_url": "https://github.com/peazip/PeaZip/releases/download/10.4.0/peazip-10.4.0.LINUX.Qt6-1.x86_64.rpm"
    }
  ]
}"#;

fn cached_release() -> (tempfile::TempDir, JsonTree) {
    let dir = tempdir().unwrap();
    let path = dir.path().join("peazip_cache.json");
    std::fs::write(&path, RELEASE).unwrap();
    let tree = JsonTree::load(&path).unwrap();
    (dir, tree)
}

#[test]
fn test_asset_download_url() {
    let (_dir, tree) = cached_release();
    let path: QueryPath = "assets[1].browser_download_url".parse().unwrap();
    assert!(tree.query_str(&path).unwrap().ends_with("Qt6-1.x86_64.rpm"));
}

#[test]
fn test_dig_style_steps() {
    let (_dir, tree) = cached_release();
    let path: QueryPath = [Step::from("assets"), Step::from(0usize), Step::from("size")]
        .into_iter()
        .collect();
    assert_eq!(query(&tree, &path), Some(&Value::from(9001)));
}

#[test]
fn test_missing_segments_are_empty() {
    let (_dir, tree) = cached_release();
    for raw in ["assets[9].name", "body", "assets.0.name.first", "tag_name[0]"] {
        let path: QueryPath = raw.parse().unwrap();
        assert_eq!(tree.query(&path), None, "{raw}");
    }
}

#[test]
fn test_version_from_title() {
    let (_dir, tree) = cached_release();
    let title = tree.query_str(&"name".parse().unwrap()).unwrap();
    let re = Regex::new(r"PeaZip ([\d.]+)").unwrap();
    assert_eq!(rewrite_match(title, &re, "$1").as_deref(), Some("10.4.0"));
}

#[test]
fn test_descriptor_not_rate_limited() {
    let (_dir, tree) = cached_release();
    assert!(!is_rate_limited(&tree));
}

#[test]
fn test_load_missing_file() {
    let dir = tempdir().unwrap();
    let err = JsonTree::load(dir.path().join("absent.json")).unwrap_err();
    assert!(matches!(err, MetaError::Read { .. }));
}

#[test]
fn test_load_truncated_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("half.json");
    std::fs::write(&path, &RELEASE[..RELEASE.len() / 2]).unwrap();
    assert!(matches!(JsonTree::load(&path), Err(MetaError::Parse(_))));
}
