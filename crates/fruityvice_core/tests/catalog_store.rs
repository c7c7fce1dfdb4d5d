use fruityvice_core::{
    CatalogConfig, CatalogSource, CatalogState, CatalogStore, FetchError, FetchResult, Fruit,
    HttpCatalogSource, Nutrition,
};
use std::cell::Cell;

fn fruit(name: &str, calories: f64) -> Fruit {
    Fruit {
        name: name.to_string(),
        id: 0,
        family: String::new(),
        order: String::new(),
        genus: String::new(),
        nutrition: Nutrition {
            calories,
            ..Nutrition::default()
        },
    }
}

/// Source that always answers with a fixed outcome.
struct FixedSource(FetchResult<Vec<Fruit>>);

impl CatalogSource for FixedSource {
    fn fetch_catalog(&self) -> FetchResult<Vec<Fruit>> {
        self.0.clone()
    }
}

/// Source that fails a set number of times before succeeding.
struct FlakySource {
    failures_left: Cell<u32>,
    fruits: Vec<Fruit>,
}

impl CatalogSource for FlakySource {
    fn fetch_catalog(&self) -> FetchResult<Vec<Fruit>> {
        let left = self.failures_left.get();
        if left > 0 {
            self.failures_left.set(left - 1);
            return Err(FetchError::Timeout);
        }
        Ok(self.fruits.clone())
    }
}

#[test]
fn store_starts_idle() {
    let store = CatalogStore::new();
    assert_eq!(*store.state(), CatalogState::Idle);
    assert_eq!(store.attempts(), 0);
    assert!(store.fruits().is_none());
}

#[test]
fn begin_fetch_moves_to_loading_and_gates_reentry() {
    let mut store = CatalogStore::new();

    let ticket = store.begin_fetch();
    assert!(ticket.is_some());
    assert_eq!(*store.state(), CatalogState::Loading);
    assert_eq!(store.attempts(), 1);

    // A second begin while loading is a no-op.
    assert!(store.begin_fetch().is_none());
    assert_eq!(store.attempts(), 1);
}

#[test]
fn successful_outcome_lands_in_ready() {
    let mut store = CatalogStore::new();
    let ticket = store.begin_fetch().unwrap();

    store.apply_outcome(ticket, Ok(vec![fruit("Apple", 52.0)]));

    let fruits = store.fruits().unwrap();
    assert_eq!(fruits.len(), 1);
    assert_eq!(fruits[0].name, "Apple");
}

#[test]
fn timeout_failure_lands_in_error_with_user_message() {
    let mut store = CatalogStore::new();
    let ticket = store.begin_fetch().unwrap();

    store.apply_outcome(ticket, Err(FetchError::Timeout));

    assert_eq!(
        *store.state(),
        CatalogState::Error {
            message: "Request timed out. Please try again.".to_string()
        }
    );
}

#[test]
fn retry_after_error_reaches_ready() {
    let source = FlakySource {
        failures_left: Cell::new(1),
        fruits: vec![fruit("Apple", 52.0)],
    };
    let mut store = CatalogStore::new();

    store.load(&source);
    assert!(matches!(store.state(), CatalogState::Error { .. }));

    store.load(&source);
    assert!(store.fruits().is_some());
    assert_eq!(store.attempts(), 2);
}

#[test]
fn retries_are_unbounded() {
    let source = FlakySource {
        failures_left: Cell::new(3),
        fruits: vec![fruit("Apple", 52.0)],
    };
    let mut store = CatalogStore::new();

    for _ in 0..3 {
        store.load(&source);
        assert!(matches!(store.state(), CatalogState::Error { .. }));
    }
    store.load(&source);
    assert!(store.fruits().is_some());
    assert_eq!(store.attempts(), 4);
}

#[test]
fn stale_outcome_is_discarded() {
    let mut store = CatalogStore::new();

    let first = store.begin_fetch().unwrap();
    store.apply_outcome(first, Err(FetchError::Timeout));

    let second = store.begin_fetch().unwrap();
    assert_eq!(*store.state(), CatalogState::Loading);

    // The first attempt's late success must not overwrite the newer attempt.
    store.apply_outcome(first, Ok(vec![fruit("Stale", 1.0)]));
    assert_eq!(*store.state(), CatalogState::Loading);

    store.apply_outcome(second, Ok(vec![fruit("Fresh", 2.0)]));
    assert_eq!(store.fruits().unwrap()[0].name, "Fresh");
}

#[test]
fn load_runs_a_full_cycle() {
    let source = FixedSource(Ok(vec![fruit("Apple", 52.0), fruit("Banana", 89.0)]));
    let mut store = CatalogStore::new();

    store.load(&source);

    assert_eq!(store.fruits().unwrap().len(), 2);
    assert_eq!(store.attempts(), 1);
}

#[test]
fn user_messages_match_failure_taxonomy() {
    assert_eq!(
        FetchError::Timeout.user_message(),
        "Request timed out. Please try again."
    );
    assert_eq!(
        FetchError::Network("connection refused".to_string()).user_message(),
        "Network error. Please check your connection."
    );
    assert_eq!(
        FetchError::Upstream {
            status: 503,
            message: Some("maintenance".to_string()),
        }
        .user_message(),
        "Failed to fetch fruits: maintenance"
    );
    assert_eq!(
        FetchError::Upstream {
            status: 500,
            message: None,
        }
        .user_message(),
        "Failed to fetch fruits: Unknown error"
    );
    assert_eq!(
        FetchError::Unexpected("boom".to_string()).user_message(),
        "An unexpected error occurred."
    );
}

#[test]
fn unparseable_endpoint_is_classified_as_unexpected() {
    let source = HttpCatalogSource::with_config(CatalogConfig {
        endpoint: "not a url".to_string(),
        ..CatalogConfig::default()
    })
    .unwrap();

    // The request never leaves the process, so this is not a network
    // failure; it must land in the catch-all category.
    let err = source.fetch_catalog().unwrap_err();
    assert!(matches!(err, FetchError::Unexpected(_)));
    assert_eq!(err.user_message(), "An unexpected error occurred.");
}

#[test]
fn malformed_payload_message_includes_detail() {
    let message = FetchError::MalformedPayload("invalid calories `-1` for fruit `X`".to_string())
        .user_message();
    assert!(message.starts_with("Failed to fetch fruits:"));
    assert!(message.contains("invalid calories"));
}
