use tracing_subscriber::fmt::format::FmtSpan;

// rocket and the http stack log every webhook request at info level
const QUIET_TARGETS: &[&str] = &["rocket", "hyper", "rustls"];

// Appends a warn-level directive for each noisy target, unless the caller already set one for it
pub fn env_filter(verbosity: &str) -> String {
    let targets: Vec<&str> = verbosity
        .split(',')
        .filter_map(|directive| directive.split_once('=').map(|(target, _)| target.trim()))
        .collect();
    QUIET_TARGETS
        .iter()
        .filter(|target| !targets.contains(*target))
        .fold(verbosity.to_string(), |acc, target| format!("{acc},{target}=warn"))
}

pub fn setup(verbosity: &str) {
    tracing_subscriber::fmt()
        .with_file(true)
        .with_line_number(true)
        .with_span_events(FmtSpan::NEW)
        .with_target(false)
        .with_env_filter(env_filter(verbosity))
        .compact()
        .init();
}
