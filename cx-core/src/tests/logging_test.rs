use super::*;
use crate::logging::env_filter;

#[rstest]
#[case::bare_level("info", "info,rocket=warn,hyper=warn,rustls=warn")]
#[case::rocket_already_set("debug,rocket=info", "debug,rocket=info,hyper=warn,rustls=warn")]
#[case::operator_targets(
    "info,cx_ctrl=debug,cx_core=trace",
    "info,cx_ctrl=debug,cx_core=trace,rocket=warn,hyper=warn,rustls=warn"
)]
#[case::similar_target_name("warn,hyper_util=debug", "warn,hyper_util=debug,rocket=warn,hyper=warn,rustls=warn")]
fn test_env_filter_quiets_http_stack(#[case] verbosity: &str, #[case] expected: &str) {
    assert_eq!(env_filter(verbosity), expected);
}
