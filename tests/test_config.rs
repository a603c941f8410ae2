use docserve::config::{Config, DEFAULT_PORT, Dispatch, Framing};

#[test]
fn test_config_listens_on_fixed_port() {
    let cfg = Config::load();

    assert_eq!(DEFAULT_PORT, 6789);
    assert_eq!(cfg.listen_addr, "0.0.0.0:6789");
}

#[test]
fn test_config_defaults() {
    let cfg = Config::load();

    assert_eq!(cfg.dispatch, Dispatch::Unbounded);
    assert_eq!(cfg.framing, Framing::Legacy);
}

#[test]
fn test_config_default_matches_load() {
    let a = Config::default();
    let b = Config::load();

    assert_eq!(a.listen_addr, b.listen_addr);
    assert_eq!(a.dispatch, b.dispatch);
    assert_eq!(a.framing, b.framing);
}
