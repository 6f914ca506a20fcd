use adscribe::error::AdScribeError;
use adscribe::store::backend::StorageBackend;
use adscribe::store::fs_backend::FsBackend;
use std::fs;
use tempfile::TempDir;

fn setup() -> (TempDir, FsBackend) {
    let dir = TempDir::new().unwrap();
    let backend = FsBackend::new(dir.path().to_path_buf());
    (dir, backend)
}

#[test]
fn test_fs_backend_basic_io() {
    let (_dir, backend) = setup();

    backend.set("adScribeCampaigns", "[]").unwrap();
    assert_eq!(
        backend.get("adScribeCampaigns").unwrap(),
        Some("[]".to_string())
    );

    backend.remove("adScribeCampaigns").unwrap();
    assert_eq!(backend.get("adScribeCampaigns").unwrap(), None);
}

#[test]
fn test_fs_backend_missing_key_is_none() {
    let (_dir, backend) = setup();
    assert_eq!(backend.get("adScribeUser").unwrap(), None);
    // Removing an absent key is not an error.
    backend.remove("adScribeUser").unwrap();
}

#[test]
fn test_fs_backend_atomic_write_artifacts() {
    let (dir, backend) = setup();

    backend.set("adScribeUser", "{\"email\":\"a@b.c\"}").unwrap();
    backend.set("adScribeUser", "{\"email\":\"d@e.f\"}").unwrap();

    let expected_path = dir.path().join("adScribeUser.json");
    assert_eq!(backend.key_path("adScribeUser"), expected_path);
    assert_eq!(
        fs::read_to_string(&expected_path).unwrap(),
        "{\"email\":\"d@e.f\"}"
    );

    for entry in fs::read_dir(dir.path()).unwrap() {
        let path = entry.unwrap().path();
        let name = path.file_name().unwrap().to_str().unwrap();
        assert!(!name.ends_with(".tmp"), "Found leftover tmp file: {}", name);
    }
}

#[test]
fn test_fs_backend_creates_root_on_first_write() {
    let dir = TempDir::new().unwrap();
    let root = dir.path().join("nested").join("data");
    let backend = FsBackend::new(root.clone());

    assert_eq!(backend.get("adScribeCampaigns").unwrap(), None);
    assert!(!root.exists());

    backend.set("adScribeCampaigns", "[]").unwrap();
    assert!(root.join("adScribeCampaigns.json").exists());
}

#[test]
fn test_fs_backend_rejects_path_like_keys() {
    let (_dir, backend) = setup();
    for key in ["", "../escape", "a/b", ".hidden"] {
        assert!(matches!(
            backend.set(key, "x"),
            Err(AdScribeError::Store(_))
        ));
    }
}
