use super::*;

#[test]
fn port_defaults_when_unset_or_blank() {
    assert_eq!(parse_port(None).expect("default"), DEFAULT_PORT);
    assert_eq!(parse_port(Some("  ")).expect("default"), DEFAULT_PORT);
}

#[test]
fn port_parses_value() {
    assert_eq!(parse_port(Some("8080")).expect("port"), 8080);
    assert_eq!(parse_port(Some(" 4000 ")).expect("port"), 4000);
}

#[test]
fn invalid_port_is_rejected() {
    let err = parse_port(Some("http")).expect_err("not a port");
    assert_eq!(err.to_string(), "invalid PORT `http`");
    assert!(parse_port(Some("70000")).is_err());
}

#[test]
fn bind_addr_listens_on_all_interfaces() {
    let config = ServerConfig {
        port: 3000,
        site_root: None,
    };
    assert_eq!(config.bind_addr().to_string(), "0.0.0.0:3000");
}

#[test]
fn from_env_reads_port_and_site_root() {
    unsafe {
        std::env::set_var("PORT", "3100");
        std::env::set_var("SITE_ROOT", "/srv/cropix");
    }
    let config = ServerConfig::from_env().expect("config");
    unsafe {
        std::env::remove_var("PORT");
        std::env::remove_var("SITE_ROOT");
    }
    assert_eq!(config.port, 3100);
    assert_eq!(config.site_root, Some(PathBuf::from("/srv/cropix")));
}
