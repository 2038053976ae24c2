use serde::{Deserialize, Serialize};
use shoecart_cache::{cache_key, Cache, CacheError};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct Item {
    id: u64,
    title: String,
    price: f64,
    amount: i64,
}

fn items() -> Vec<Item> {
    vec![
        Item {
            id: 2,
            title: "Runner".into(),
            price: 139.9,
            amount: 1,
        },
        Item {
            id: 1,
            title: "Trail".into(),
            price: 0.1 + 0.2,
            amount: 3,
        },
    ]
}

#[test]
fn value_survives_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let key = cache_key!("@RocketShoes", "cart");

    {
        let cache = Cache::open(dir.path()).unwrap();
        cache.set(&key, &items()).unwrap();
    }

    let reopened = Cache::open(dir.path()).unwrap();
    let loaded: Vec<Item> = reopened.get(&key).unwrap().unwrap();
    assert_eq!(loaded, items());
}

#[test]
fn keys_do_not_collide() {
    let dir = tempfile::tempdir().unwrap();
    let cache = Cache::open(dir.path()).unwrap();

    cache.set("a:b", &1).unwrap();
    cache.set("a_b", &2).unwrap();

    assert_eq!(cache.get::<i32>("a:b").unwrap(), Some(1));
    assert_eq!(cache.get::<i32>("a_b").unwrap(), Some(2));
}

#[test]
fn corrupt_file_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let cache = Cache::open(dir.path()).unwrap();
    cache.set("cart", &items()).unwrap();

    // Overwrite the only file in the directory with garbage.
    let path = std::fs::read_dir(dir.path()).unwrap().next().unwrap().unwrap().path();
    std::fs::write(&path, b"{ truncated").unwrap();

    let result: Result<Option<Vec<Item>>, _> = cache.get("cart");
    assert!(matches!(result, Err(CacheError::SerializeError(_))));
}

#[test]
fn open_fails_when_path_is_a_file() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("occupied");
    std::fs::write(&file, b"").unwrap();

    assert!(matches!(Cache::open(&file), Err(CacheError::OpenError(_))));
}
