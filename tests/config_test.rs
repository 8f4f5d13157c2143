use groupie_tracker::config::Config;
use groupie_tracker::search::CapPolicy;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

#[test]
fn test_file_overrides_defaults() {
    let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
    writeln!(
        file,
        r#"
[server]
http_port = 9090
static_dir = "/srv/groupie/static"

[catalog]
max_artist_id = 60

[search]
result_cap = 10
cap_policy = "strict"
"#
    )
    .unwrap();

    let config = Config::load_from(file.path()).unwrap();

    assert_eq!(config.server.http_port, 9090);
    assert_eq!(config.server.static_dir, Path::new("/srv/groupie/static"));
    assert_eq!(config.catalog.max_artist_id, 60);
    assert_eq!(config.search.result_cap, 10);
    assert_eq!(config.search.cap_policy, CapPolicy::Strict);
    // Untouched sections keep their defaults
    assert_eq!(config.upstream.timeout_secs, 10);
    assert!(config.observability.prometheus_enabled);
}

#[test]
fn test_missing_file_falls_back_to_defaults() {
    let config = Config::load_from(Path::new("/nonexistent/groupie.toml")).unwrap();

    assert_eq!(config.server.http_port, 8081);
    assert_eq!(config.search.cap_policy, CapPolicy::Legacy);
}

#[test]
fn test_invalid_cap_policy_is_rejected() {
    let mut file: NamedTempFile = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
    writeln!(file, "[search]\ncap_policy = \"sometimes\"").unwrap();

    assert!(Config::load_from(file.path()).is_err());
}
