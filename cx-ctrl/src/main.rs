mod context;
mod controller;
mod errors;
mod webhook;

use std::sync::Arc;

use clap::Parser;
use cx_client::{
    CoralogixClient,
    Region,
};
use cx_core::errors::*;
use cx_core::logging;
use cx_core::prelude::*;
use futures::FutureExt;
use futures::future::{
    BoxFuture,
    join_all,
};
use tracing::*;
use url::Url;

use crate::context::CxContext;

#[derive(Clone, Debug, Parser)]
#[command(version, about)]
struct Options {
    #[arg(long, env = CORALOGIX_REGION_ENV_VAR, default_value = "EU1")]
    region: Region,

    // Overrides the region's API endpoint
    #[arg(long, env = CORALOGIX_URL_ENV_VAR)]
    coralogix_url: Option<Url>,

    #[arg(long, env = CORALOGIX_API_KEY_ENV_VAR, hide_env_values = true)]
    api_key: String,

    // Watch a single namespace instead of the whole cluster
    #[arg(long)]
    namespace: Option<String>,

    #[arg(long, default_value_t = DEFAULT_RESYNC_SECONDS)]
    resync_seconds: u64,

    #[arg(long, default_value_t = DEFAULT_WEBHOOK_PORT)]
    webhook_port: u16,

    #[arg(long)]
    cert_path: Option<String>,

    #[arg(long)]
    key_path: Option<String>,

    #[arg(long)]
    disable_webhook: bool,

    #[arg(short, long, default_value = "info")]
    verbosity: String,
}

fn controllers(ctx: Arc<CxContext>) -> Vec<BoxFuture<'static, ()>> {
    vec![
        controller::run::<v1beta1::Alert>(ctx.clone()).boxed(),
        controller::run::<v1alpha1::AlertScheduler>(ctx.clone()).boxed(),
        controller::run::<v1alpha1::ApiKey>(ctx.clone()).boxed(),
        controller::run::<v1alpha1::ArchiveLogsTarget>(ctx.clone()).boxed(),
        controller::run::<v1alpha1::ArchiveMetricsTarget>(ctx.clone()).boxed(),
        controller::run::<v1alpha1::Connector>(ctx.clone()).boxed(),
        controller::run::<v1alpha1::CustomEnrichment>(ctx.clone()).boxed(),
        controller::run::<v1alpha1::CustomRole>(ctx.clone()).boxed(),
        controller::run::<v1alpha1::Dashboard>(ctx.clone()).boxed(),
        controller::run::<v1alpha1::DashboardsFolder>(ctx.clone()).boxed(),
        controller::run::<v1alpha1::DataSet>(ctx.clone()).boxed(),
        controller::run::<v1alpha1::Enrichment>(ctx.clone()).boxed(),
        controller::run::<v1alpha1::Events2Metric>(ctx.clone()).boxed(),
        controller::run::<v1alpha1::Extension>(ctx.clone()).boxed(),
        controller::run::<v1alpha1::GlobalRouter>(ctx.clone()).boxed(),
        controller::run::<v1alpha1::Group>(ctx.clone()).boxed(),
        controller::run::<v1alpha1::IPAccess>(ctx.clone()).boxed(),
        controller::run::<v1alpha1::Integration>(ctx.clone()).boxed(),
        controller::run::<v1alpha1::OutboundWebhook>(ctx.clone()).boxed(),
        controller::run::<v1alpha1::Preset>(ctx.clone()).boxed(),
        controller::run::<v1alpha1::RecordingRuleGroupSet>(ctx.clone()).boxed(),
        controller::run::<v1alpha1::RuleGroup>(ctx.clone()).boxed(),
        controller::run::<v1alpha1::SLO>(ctx.clone()).boxed(),
        controller::run::<v1alpha1::Scope>(ctx.clone()).boxed(),
        controller::run::<v1alpha1::TCOLogsPolicies>(ctx.clone()).boxed(),
        controller::run::<v1alpha1::TCOTracesPolicies>(ctx.clone()).boxed(),
        controller::run::<v1alpha1::Team>(ctx.clone()).boxed(),
        controller::run::<v1alpha1::View>(ctx.clone()).boxed(),
        controller::run::<v1alpha1::ViewFolder>(ctx).boxed(),
    ]
}

#[instrument(ret, err, skip_all)]
async fn run(opts: Options) -> EmptyResult {
    let client = kube::Client::try_default().await?;
    let base_url = match &opts.coralogix_url {
        Some(url) => url.clone(),
        None => opts.region.api_url()?,
    };
    info!("syncing with the Coralogix API at {base_url}");

    let backend = Arc::new(CoralogixClient::new(base_url, &opts.api_key)?);
    let ctx = Arc::new(CxContext::new(client, backend, opts.clone()));
    let ctrls = join_all(controllers(ctx));

    if opts.disable_webhook {
        ctrls.await;
        return Ok(());
    }

    let webhook_task = tokio::spawn(webhook::server(&opts)?.launch());
    tokio::select! {
        res = webhook_task => Err(anyhow!("webhook server terminated: {res:#?}")),
        _ = ctrls => Ok(()),
    }
}

#[tokio::main]
async fn main() {
    let args = Options::parse();
    logging::setup(&args.verbosity);
    if let Err(err) = run(args).await {
        cxerr!(err, "operator failed");
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests;
