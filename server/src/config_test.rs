use super::*;
use std::collections::HashMap;

fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let vars: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    move |key| vars.get(key).cloned()
}

#[test]
fn empty_environment_uses_defaults() {
    let cfg = ServerConfig::from_lookup(lookup_from(&[]));
    assert_eq!(cfg, ServerConfig::default());
    assert_eq!(cfg.port, 3000);
    assert_eq!(cfg.node_budget, 200_000);
    assert_eq!(cfg.max_body_bytes, 65_536);
}

#[test]
fn overrides_are_parsed() {
    let cfg = ServerConfig::from_lookup(lookup_from(&[
        ("PORT", "8080"),
        ("PLANNER_NODE_BUDGET", " 5000 "),
        ("PLANNER_MAX_BODY_BYTES", "1024"),
    ]));
    assert_eq!(cfg, ServerConfig { port: 8080, node_budget: 5000, max_body_bytes: 1024 });
}

#[test]
fn garbage_falls_back_to_default() {
    let cfg = ServerConfig::from_lookup(lookup_from(&[("PORT", "eighty"), ("PLANNER_NODE_BUDGET", "-1")]));
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert_eq!(cfg.node_budget, DEFAULT_NODE_BUDGET);
}
