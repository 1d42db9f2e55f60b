use std::sync::Arc;

use clockabilly::{
    Clockable,
    UtcClock,
};
use cx_core::prelude::*;

use crate::Options;

pub struct CxContext {
    pub client: kube::Client,
    pub backend: Arc<dyn CoralogixApi>,
    pub opts: Options,
    pub clock: Box<dyn Clockable + Send + Sync>,
}

impl CxContext {
    pub fn new(client: kube::Client, backend: Arc<dyn CoralogixApi>, opts: Options) -> CxContext {
        CxContext { client, backend, opts, clock: Box::new(UtcClock::new()) }
    }

    #[cfg(test)]
    pub fn with_clock(mut self, clock: Box<dyn Clockable + Send + Sync>) -> CxContext {
        self.clock = clock;
        self
    }

    pub fn refs_for(&self, namespace: &str) -> RefResolver {
        RefResolver::new(self.client.clone(), self.backend.clone(), namespace)
    }
}
