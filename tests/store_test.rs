use std::path::PathBuf;

use moviecli::store::{JsonFileStore, MemoryStore, MovieStore, StoreError};
use moviecli::types::{Movie, MovieId};
use moviecli::utils::generate_movie_id;

// Helper function to create a test movie
fn create_test_movie(title: &str) -> Movie {
    Movie::new(title, "Denis Villeneuve", 2021)
        .with_genres(&["Sci-Fi"])
        .with_ratings(&[8.0])
        .with_cast(&["Zendaya"])
}

// Helper function to get a unique, not yet existing store file
fn temp_store_path() -> PathBuf {
    std::env::temp_dir()
        .join(format!("moviecli-test-{}", generate_movie_id()))
        .join("movies.json")
}

fn cleanup(path: &PathBuf) {
    if let Some(dir) = path.parent() {
        let _ = std::fs::remove_dir_all(dir);
    }
}

#[tokio::test]
async fn test_insert_assigns_id() {
    let mut store = MemoryStore::new();

    let movie = store.insert(create_test_movie("Dune")).await.unwrap();

    let id = movie.id.clone().unwrap();
    assert_eq!(id.as_str().len(), 24);
    assert_eq!(movie.title, "Dune");
    assert_eq!(store.find_all().await.unwrap(), vec![movie]);
}

#[tokio::test]
async fn test_insert_keeps_unused_id_and_replaces_taken_one() {
    let mut store = MemoryStore::new();
    let id = MovieId::new("0123456789abcdef01234567");

    let mut first = create_test_movie("Dune");
    first.id = Some(id.clone());
    let first = store.insert(first).await.unwrap();
    assert_eq!(first.id, Some(id.clone()));

    let mut second = create_test_movie("Arrival");
    second.id = Some(id.clone());
    let second = store.insert(second).await.unwrap();
    assert!(second.id.is_some());
    assert_ne!(second.id, Some(id));
}

#[tokio::test]
async fn test_find_all_keeps_insertion_order() {
    let mut store = MemoryStore::new();
    for title in ["Dune", "Arrival", "Sicario"] {
        store.insert(create_test_movie(title)).await.unwrap();
    }

    let titles: Vec<String> = store
        .find_all()
        .await
        .unwrap()
        .into_iter()
        .map(|m| m.title)
        .collect();
    assert_eq!(titles, vec!["Dune", "Arrival", "Sicario"]);
}

#[tokio::test]
async fn test_find_by_title_is_exact() {
    let mut store = MemoryStore::new();
    let dune = store.insert(create_test_movie("Dune")).await.unwrap();
    store.insert(create_test_movie("Dune: Part Two")).await.unwrap();

    assert_eq!(store.find_by_title("Dune").await.unwrap(), Some(dune));
    assert_eq!(store.find_by_title("dune").await.unwrap(), None);
    assert_eq!(store.find_by_title("Dun").await.unwrap(), None);
}

#[tokio::test]
async fn test_find_by_title_returns_first_match() {
    let mut store = MemoryStore::new();
    let first = store.insert(create_test_movie("Dune")).await.unwrap();
    store
        .insert(Movie::new("Dune", "David Lynch", 1984))
        .await
        .unwrap();

    assert_eq!(store.find_by_title("Dune").await.unwrap(), Some(first));
}

#[tokio::test]
async fn test_save_replaces_document() {
    let mut store = MemoryStore::new();
    let mut movie = store.insert(create_test_movie("Dune")).await.unwrap();

    movie.genres.push("Adventure".to_string());
    movie.release_year = 2022;
    store.save(&movie).await.unwrap();

    let stored = store.find_by_title("Dune").await.unwrap().unwrap();
    assert_eq!(stored.genres, vec!["Sci-Fi", "Adventure"]);
    assert_eq!(stored.release_year, 2022);
    assert_eq!(stored.id, movie.id);
}

#[tokio::test]
async fn test_save_requires_persisted_movie() {
    let mut store = MemoryStore::new();

    let result = store.save(&create_test_movie("Dune")).await;
    assert!(matches!(result, Err(StoreError::MissingId)));

    let mut unknown = create_test_movie("Dune");
    unknown.id = Some(generate_movie_id());
    let result = store.save(&unknown).await;
    assert!(matches!(result, Err(StoreError::NotFound(_))));
}

#[tokio::test]
async fn test_delete_by_id() {
    let mut store = MemoryStore::new();
    let dune = store.insert(create_test_movie("Dune")).await.unwrap();
    let arrival = store.insert(create_test_movie("Arrival")).await.unwrap();

    assert!(store.delete_by_id(dune.id.as_ref().unwrap()).await.unwrap());
    assert_eq!(store.find_all().await.unwrap(), vec![arrival]);

    // Deleting again is acknowledged without removing anything
    assert!(!store.delete_by_id(dune.id.as_ref().unwrap()).await.unwrap());
    assert_eq!(store.find_all().await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_closed_store_rejects_calls() {
    let mut store = MemoryStore::new();
    store.close().await.unwrap();

    assert!(store.is_closed());
    assert!(matches!(store.find_all().await, Err(StoreError::Closed)));
    assert!(matches!(
        store.insert(create_test_movie("Dune")).await,
        Err(StoreError::Closed)
    ));
    assert!(matches!(store.close().await, Err(StoreError::Closed)));
}

#[tokio::test]
async fn test_json_store_opens_missing_file_as_empty() {
    let path = temp_store_path();

    let store = JsonFileStore::open(&path).await.unwrap();

    assert!(store.find_all().await.unwrap().is_empty());
    assert!(!path.exists());
}

#[tokio::test]
async fn test_json_store_persists_writes() {
    let path = temp_store_path();

    let mut store = JsonFileStore::open(&path).await.unwrap();
    let mut dune = store.insert(create_test_movie("Dune")).await.unwrap();
    let arrival = store.insert(create_test_movie("Arrival")).await.unwrap();
    dune.cast.push("Rebecca Ferguson".to_string());
    store.save(&dune).await.unwrap();
    store
        .delete_by_id(arrival.id.as_ref().unwrap())
        .await
        .unwrap();
    store.close().await.unwrap();

    // Document layout on disk
    let json = std::fs::read_to_string(&path).unwrap();
    assert!(json.contains("\"_id\""));
    assert!(json.contains("\"releaseYear\": 2021"));
    assert!(!json.contains("Arrival"));

    // Reopening yields the same documents with the same ids
    let reopened = JsonFileStore::open(&path).await.unwrap();
    assert_eq!(reopened.find_all().await.unwrap(), vec![dune]);

    cleanup(&path);
}

#[tokio::test]
async fn test_json_store_assigns_ids_to_loaded_documents() {
    let path = temp_store_path();
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(
        &path,
        r#"[{"title": "Dune", "director": "David Lynch", "releaseYear": 1984}]"#,
    )
    .unwrap();

    let store = JsonFileStore::open(&path).await.unwrap();
    let movies = store.find_all().await.unwrap();

    assert_eq!(movies.len(), 1);
    assert!(movies[0].id.is_some());
    assert!(movies[0].genres.is_empty());
    assert!(movies[0].ratings.is_empty());
    assert!(movies[0].cast.is_empty());

    cleanup(&path);
}

#[tokio::test]
async fn test_json_store_rejects_malformed_file() {
    let path = temp_store_path();
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(&path, "{ not json").unwrap();

    let result = JsonFileStore::open(&path).await;
    assert!(matches!(result, Err(StoreError::SerdeError(_))));

    cleanup(&path);
}

#[tokio::test]
async fn test_json_store_closed_rejects_calls() {
    let path = temp_store_path();

    let mut store = JsonFileStore::open(&path).await.unwrap();
    store.close().await.unwrap();

    assert!(matches!(store.find_all().await, Err(StoreError::Closed)));
    assert!(matches!(store.close().await, Err(StoreError::Closed)));

    cleanup(&path);
}
