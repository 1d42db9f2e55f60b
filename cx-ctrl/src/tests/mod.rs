mod controller_test;
mod conversion_test;
mod validation_test;

use std::sync::Arc;

use clockabilly::mock::MockUtcClock;
use cx_client::MockCoralogixApi;
use cx_testutils::*;
use rstest::*;
use tracing_test::traced_test;

use super::*;
use crate::context::CxContext;

const TEST_TS: i64 = 1_700_000_000;

#[fixture]
fn opts() -> Options {
    Options {
        region: Region::EU1,
        coralogix_url: None,
        api_key: TEST_API_KEY.into(),
        namespace: None,
        resync_seconds: DEFAULT_RESYNC_SECONDS,
        webhook_port: DEFAULT_WEBHOOK_PORT,
        cert_path: None,
        key_path: None,
        disable_webhook: false,
        verbosity: "info".into(),
    }
}

fn make_ctx(client: kube::Client, backend: MockCoralogixApi, opts: Options) -> CxContext {
    CxContext::new(client, Arc::new(backend), opts).with_clock(Box::new(MockUtcClock::new(TEST_TS)))
}
