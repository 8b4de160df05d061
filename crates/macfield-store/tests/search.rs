use macfield_core::checkout::MetaEntry;
use macfield_core::domain::Order;
use macfield_store::query::OrderQuery;
use macfield_store::repo::OrderNew;
use macfield_store::Store;

fn seed_order(store: &Store, name: &str, mac: Option<&str>) -> Order {
    let meta = mac
        .map(|value| {
            vec![MetaEntry {
                key: "_mac_address".to_string(),
                value: value.to_string(),
            }]
        })
        .unwrap_or_default();
    store
        .orders()
        .create(
            1_700_000_000,
            OrderNew {
                billing_name: name.to_string(),
                billing_email: Some(format!("{}@example.com", name.to_lowercase())),
                meta,
            },
        )
        .expect("create order")
}

fn search_keys() -> Vec<String> {
    vec!["_mac_address".to_string()]
}

#[test]
fn search_matches_meta_value_substring() {
    let store = Store::open_in_memory().expect("open");
    store.migrate().expect("migrate");
    let target = seed_order(&store, "Ada", Some("AA:BB:CC:DD:EE:FF"));
    seed_order(&store, "Grace", Some("11:22:33:44:55:66"));

    let query = OrderQuery::new(vec!["BB:CC".to_string()], search_keys());
    let results = store.orders().search(&query).expect("search");
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].id, target.id);
}

#[test]
fn search_matches_exact_canonical_value() {
    let store = Store::open_in_memory().expect("open");
    store.migrate().expect("migrate");
    let target = seed_order(&store, "Ada", Some("AA:BB:CC:DD:EE:FF"));

    let query = OrderQuery::new(vec!["AA:BB:CC:DD:EE:FF".to_string()], search_keys());
    let results = store.orders().search(&query).expect("search");
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].id, target.id);
}

#[test]
fn search_still_matches_billing_fields() {
    let store = Store::open_in_memory().expect("open");
    store.migrate().expect("migrate");
    seed_order(&store, "Ada", None);
    seed_order(&store, "Grace", None);

    let query = OrderQuery::new(vec!["grace@example.com".to_string()], search_keys());
    let results = store.orders().search(&query).expect("search");
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].billing_name, "Grace");
}

#[test]
fn search_without_registered_keys_ignores_meta() {
    let store = Store::open_in_memory().expect("open");
    store.migrate().expect("migrate");
    seed_order(&store, "Ada", Some("AA:BB:CC:DD:EE:FF"));

    let query = OrderQuery::new(vec!["BB:CC".to_string()], Vec::new());
    let results = store.orders().search(&query).expect("search");
    assert!(results.is_empty());
}

#[test]
fn search_requires_every_term_to_match() {
    let store = Store::open_in_memory().expect("open");
    store.migrate().expect("migrate");
    seed_order(&store, "Ada", Some("AA:BB:CC:DD:EE:FF"));

    let query = OrderQuery::new(
        vec!["Ada".to_string(), "EE:FF".to_string()],
        search_keys(),
    );
    assert_eq!(store.orders().search(&query).expect("search").len(), 1);

    let query = OrderQuery::new(
        vec!["Ada".to_string(), "11:22".to_string()],
        search_keys(),
    );
    assert!(store.orders().search(&query).expect("search").is_empty());
}
