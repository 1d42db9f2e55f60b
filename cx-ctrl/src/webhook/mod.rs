pub mod conversion;
pub mod validation;

use std::net::{
    IpAddr,
    Ipv4Addr,
};

use cx_core::errors::*;
use rocket::config::TlsConfig;
use tracing::*;

use crate::Options;

pub fn server(opts: &Options) -> anyhow::Result<rocket::Rocket<rocket::Build>> {
    let tls = match (&opts.cert_path, &opts.key_path) {
        (Some(cert), Some(key)) => Some(TlsConfig::from_paths(cert, key)),
        (None, None) => {
            warn!("no certificate configured, serving webhooks over plain HTTP");
            None
        },
        _ => bail!("--cert-path and --key-path must be given together"),
    };

    let rkt_config = rocket::Config {
        address: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
        port: opts.webhook_port,
        tls,
        ..Default::default()
    };
    Ok(rocket::custom(&rkt_config).mount("/", rocket::routes![validation::handler, conversion::handler]))
}
