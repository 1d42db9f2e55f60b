mod conditions_test;
mod conversion_test;
mod logging_test;
mod resources_test;
mod time_test;
mod validation_test;

use std::sync::Arc;

use cx_client::MockCoralogixApi;
use cx_testutils::*;
use rstest::*;
use tracing_test::traced_test;

use super::*;
use crate::prelude::*;

fn resolver(client: kube::Client, backend: MockCoralogixApi) -> RefResolver {
    RefResolver::new(client, Arc::new(backend), TEST_NAMESPACE)
}
