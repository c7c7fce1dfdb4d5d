//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `fruityvice_core` linkage.
//! - Exercise the fetch → group → jar flow end to end against a live
//!   endpoint when one is configured.

use fruityvice_core::{AppSession, CatalogConfig, CatalogState, GroupKey, HttpCatalogSource};

fn main() {
    println!("fruityvice_core ping={}", fruityvice_core::ping());
    println!("fruityvice_core version={}", fruityvice_core::core_version());

    let endpoint = match std::env::var("FRUITYVICE_ENDPOINT") {
        Ok(endpoint) => endpoint,
        Err(_) => {
            println!("set FRUITYVICE_ENDPOINT to fetch the live catalog");
            return;
        }
    };

    let source = match HttpCatalogSource::with_config(CatalogConfig {
        endpoint,
        ..CatalogConfig::default()
    }) {
        Ok(source) => source,
        Err(err) => {
            eprintln!("client setup failed: {err}");
            return;
        }
    };

    let mut session = AppSession::new();
    session.set_group_key(GroupKey::Family);
    session.load_catalog(&source);

    if let CatalogState::Error { message } = session.catalog().state() {
        println!("{message}");
        return;
    }

    if let Some(view) = session.grouped_view() {
        for group in view.groups() {
            println!("{} ({})", group.label, group.fruits.len());
            for fruit in &group.fruits {
                println!("  {} {} cal", fruit.name, fruit.nutrition.calories);
            }
        }
    }

    // Small jar demo: first two fruits plus a duplicate of the first.
    let sample: Vec<_> = session
        .catalog()
        .fruits()
        .map(|fruits| fruits.iter().take(2).cloned().collect())
        .unwrap_or_default();
    if let Some(first) = sample.first().cloned() {
        session.add_group_to_jar(sample);
        session.add_to_jar(first);
    }

    let summary = session.jar_summary();
    println!("jar total calories: {}", summary.total_calories());
    for entry in summary.entries() {
        println!(
            "  {} x{} {} cal {}",
            entry.name, entry.count, entry.total_calories, entry.color
        );
    }
}
