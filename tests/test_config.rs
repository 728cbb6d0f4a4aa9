use staticd::config::{Config, DEFAULT_BASE_DIR, DEFAULT_PORT};

fn args(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

#[test]
fn test_config_defaults() {
    let cfg = Config::from_args(args(&[])).unwrap();

    assert_eq!(cfg.port, DEFAULT_PORT);
    assert_eq!(cfg.port, 8080);
    assert_eq!(cfg.base_dir, DEFAULT_BASE_DIR);
    assert_eq!(cfg, Config::default());
}

#[test]
fn test_config_port_only() {
    let cfg = Config::from_args(args(&["3000"])).unwrap();

    assert_eq!(cfg.port, 3000);
    assert_eq!(cfg.base_dir, ".");
}

#[test]
fn test_config_port_and_directory() {
    let cfg = Config::from_args(args(&["9000", "/srv/www"])).unwrap();

    assert_eq!(cfg.port, 9000);
    assert_eq!(cfg.base_dir, "/srv/www");
}

#[test]
fn test_config_extra_arguments_are_ignored() {
    let cfg = Config::from_args(args(&["9000", "public", "extra"])).unwrap();

    assert_eq!(cfg.base_dir, "public");
}

#[test]
fn test_config_invalid_port_is_usage_error() {
    for bad in ["abc", "-1", "65536", "", "0"] {
        let err = Config::from_args(args(&[bad])).unwrap_err();
        assert!(err.to_string().contains("usage"), "{bad}: {err}");
    }
}

#[test]
fn test_config_listen_addr_binds_all_interfaces() {
    let cfg = Config::from_args(args(&["5000"])).unwrap();

    assert_eq!(cfg.listen_addr(), "0.0.0.0:5000");
}

#[test]
fn test_config_clone() {
    let cfg1 = Config::from_args(args(&["8081", "site"])).unwrap();
    let cfg2 = cfg1.clone();

    assert_eq!(cfg1, cfg2);
}
