use simak::config::LoggingSettings;
use simak::infrastructure::observability::init_tracing;

// One test only: the subscriber is a process-wide global, so ordering
// between multiple tests in this binary would be nondeterministic.
#[test]
fn given_settings_when_initializing_then_installs_once_and_rejects_reinstall() {
    let plain = LoggingSettings {
        level: "info".to_string(),
        enable_json: false,
    };
    assert!(init_tracing(&plain).is_ok());

    let json = LoggingSettings {
        level: "debug".to_string(),
        enable_json: true,
    };
    assert!(init_tracing(&json).is_err());
}
