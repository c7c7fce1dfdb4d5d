use fruityvice_core::{group_catalog, Fruit, GroupKey, Nutrition, ALL_FRUITS_LABEL};

fn fruit(name: &str, family: &str, order: &str, genus: &str) -> Fruit {
    Fruit {
        name: name.to_string(),
        id: 0,
        family: family.to_string(),
        order: order.to_string(),
        genus: genus.to_string(),
        nutrition: Nutrition::default(),
    }
}

fn sample_catalog() -> Vec<Fruit> {
    vec![
        fruit("Apple", "Rosaceae", "Rosales", "Malus"),
        fruit("Banana", "Musaceae", "Zingiberales", "Musa"),
        fruit("Pear", "Rosaceae", "Rosales", "Pyrus"),
        fruit("Pineapple", "Bromeliaceae", "Poales", "Ananas"),
    ]
}

#[test]
fn none_key_and_empty_term_produce_single_group_in_original_order() {
    let catalog = sample_catalog();
    let view = group_catalog(&catalog, GroupKey::None, "");

    assert_eq!(view.len(), 1);
    let all = view.group(ALL_FRUITS_LABEL).unwrap();
    assert_eq!(all.fruits, catalog);
}

#[test]
fn filter_is_case_insensitive_substring_on_name() {
    let catalog = sample_catalog();
    let view = group_catalog(&catalog, GroupKey::None, "APPLE");

    let all = view.group(ALL_FRUITS_LABEL).unwrap();
    let names: Vec<&str> = all.fruits.iter().map(|f| f.name.as_str()).collect();
    assert_eq!(names, vec!["Apple", "Pineapple"]);
    for name in names {
        assert!(name.to_lowercase().contains("apple"));
    }
}

#[test]
fn none_key_with_no_matches_keeps_single_empty_bucket() {
    let catalog = sample_catalog();
    let view = group_catalog(&catalog, GroupKey::None, "durian");

    assert_eq!(view.len(), 1);
    assert!(view.group(ALL_FRUITS_LABEL).unwrap().fruits.is_empty());
    assert_eq!(view.fruit_count(), 0);
}

#[test]
fn family_grouping_matches_expected_buckets() {
    let items = vec![
        fruit("Apple", "Rosaceae", "Rosales", "Malus"),
        fruit("Banana", "Musaceae", "Zingiberales", "Musa"),
    ];
    let view = group_catalog(&items, GroupKey::Family, "");

    assert_eq!(view.len(), 2);
    let rosaceae = view.group("Rosaceae").unwrap();
    assert_eq!(rosaceae.fruits.len(), 1);
    assert_eq!(rosaceae.fruits[0].name, "Apple");
    let musaceae = view.group("Musaceae").unwrap();
    assert_eq!(musaceae.fruits.len(), 1);
    assert_eq!(musaceae.fruits[0].name, "Banana");
}

#[test]
fn keyed_bucket_union_equals_filtered_input() {
    let catalog = sample_catalog();

    for key in [GroupKey::Family, GroupKey::Order, GroupKey::Genus] {
        let view = group_catalog(&catalog, key, "");
        assert_eq!(view.fruit_count(), catalog.len());

        let mut flattened: Vec<Fruit> = Vec::new();
        for group in view.groups() {
            flattened.extend(group.fruits.iter().cloned());
        }
        for item in &catalog {
            assert_eq!(
                flattened.iter().filter(|f| *f == item).count(),
                1,
                "each item appears in exactly one bucket"
            );
        }
    }
}

#[test]
fn bucket_order_follows_first_encounter_and_items_keep_relative_order() {
    let catalog = sample_catalog();
    let view = group_catalog(&catalog, GroupKey::Family, "");

    let labels: Vec<&str> = view.groups().iter().map(|g| g.label.as_str()).collect();
    assert_eq!(labels, vec!["Rosaceae", "Musaceae", "Bromeliaceae"]);

    let rosaceae = view.group("Rosaceae").unwrap();
    let names: Vec<&str> = rosaceae.fruits.iter().map(|f| f.name.as_str()).collect();
    assert_eq!(names, vec!["Apple", "Pear"]);
}

#[test]
fn labels_capitalize_only_the_first_character() {
    let items = vec![
        fruit("Strawberry", "rosaceae", "rosales", "fragaria"),
        fruit("Morus", "moraceae or rosales", "rosales", "morus"),
    ];
    let view = group_catalog(&items, GroupKey::Family, "");

    assert!(view.group("Rosaceae").is_some());
    // Only the leading character changes; interior words stay untouched.
    assert!(view.group("Moraceae or rosales").is_some());
}

#[test]
fn lowercase_and_capitalized_dimension_values_share_a_bucket() {
    let items = vec![
        fruit("Apple", "Rosaceae", "Rosales", "Malus"),
        fruit("Pear", "rosaceae", "Rosales", "Pyrus"),
    ];
    let view = group_catalog(&items, GroupKey::Family, "");

    assert_eq!(view.len(), 1);
    assert_eq!(view.group("Rosaceae").unwrap().fruits.len(), 2);
}

#[test]
fn empty_dimension_value_is_a_valid_distinct_bucket() {
    let items = vec![
        fruit("Mystery", "", "Unknown", "Incognita"),
        fruit("Apple", "Rosaceae", "Rosales", "Malus"),
    ];
    let view = group_catalog(&items, GroupKey::Family, "");

    assert_eq!(view.len(), 2);
    let unnamed = view.group("").unwrap();
    assert_eq!(unnamed.fruits[0].name, "Mystery");
}

#[test]
fn non_alphabetic_leading_character_passes_through_unchanged() {
    let items = vec![fruit("Oddity", "3-leaf", "Unknown", "Incognita")];
    let view = group_catalog(&items, GroupKey::Family, "");

    assert_eq!(view.len(), 1);
    assert!(view.group("3-leaf").is_some());
}

#[test]
fn empty_input_is_well_defined_for_all_keys() {
    let none_view = group_catalog(&[], GroupKey::None, "");
    assert_eq!(none_view.len(), 1);
    assert_eq!(none_view.fruit_count(), 0);

    let family_view = group_catalog(&[], GroupKey::Family, "");
    assert!(family_view.is_empty());
}

#[test]
fn grouping_is_deterministic_for_identical_inputs() {
    let catalog = sample_catalog();
    let first = group_catalog(&catalog, GroupKey::Genus, "a");
    let second = group_catalog(&catalog, GroupKey::Genus, "a");
    assert_eq!(first, second);
}
