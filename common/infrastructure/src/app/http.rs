use crate::app::{AppOptions, new_app};
use actix_web::{HttpServer, middleware::Logger, web};
use anyhow::Context;
use std::net::{IpAddr, Ipv6Addr, SocketAddr};
use std::str::FromStr;
use std::sync::Arc;

const DEFAULT_PORT: u16 = 8080;
const DEFAULT_ADDR: SocketAddr = SocketAddr::new(IpAddr::V6(Ipv6Addr::LOCALHOST), DEFAULT_PORT);

#[derive(Clone, Debug, clap::Args)]
#[command(
    rename_all_env = "SCREAMING_SNAKE_CASE",
    next_help_heading = "HTTP endpoint"
)]
#[group(id = "http")]
pub struct HttpServerConfig {
    /// The number of worker threads, defaults to zero, which falls back to the number of cores.
    #[arg(
        id = "http-server-workers",
        long,
        env = "HTTP_SERVER_WORKERS",
        default_value_t = 0
    )]
    pub workers: usize,

    /// The address to listen on
    #[arg(
        id = "http-server-bind-address",
        long,
        env = "HTTP_SERVER_BIND_ADDR",
        default_value_t = default::bind_addr(),
    )]
    pub bind_addr: String,

    /// The port to listen on
    #[arg(
        id = "http-server-bind-port",
        short = 'p',
        long,
        env = "HTTP_SERVER_BIND_PORT",
        default_value_t = DEFAULT_PORT
    )]
    pub bind_port: u16,
}

mod default {
    pub fn bind_addr() -> String {
        "::1".to_string()
    }
}

impl Default for HttpServerConfig {
    fn default() -> Self {
        Self {
            workers: 0,
            bind_addr: default::bind_addr(),
            bind_port: DEFAULT_PORT,
        }
    }
}

impl TryFrom<HttpServerConfig> for HttpServerBuilder {
    type Error = anyhow::Error;

    fn try_from(value: HttpServerConfig) -> Result<Self, Self::Error> {
        let addr = SocketAddr::new(
            IpAddr::from_str(&value.bind_addr).context("parse bind address")?,
            value.bind_port,
        );

        Ok(HttpServerBuilder::new().workers(value.workers).bind(addr))
    }
}

pub type ConfiguratorFn = dyn Fn(&mut web::ServiceConfig) + Send + Sync;

pub struct HttpServerBuilder {
    configurator: Option<Arc<ConfiguratorFn>>,
    bind: SocketAddr,
    workers: usize,
}

impl Default for HttpServerBuilder {
    fn default() -> Self {
        HttpServerBuilder::new()
    }
}

impl HttpServerBuilder {
    pub fn new() -> Self {
        Self {
            configurator: None,
            bind: DEFAULT_ADDR,
            workers: 0,
        }
    }

    pub fn configure<F>(mut self, configurator: F) -> Self
    where
        F: Fn(&mut web::ServiceConfig) + Send + Sync + 'static,
    {
        self.configurator = Some(Arc::new(configurator));
        self
    }

    pub fn bind(mut self, addr: impl Into<SocketAddr>) -> Self {
        self.bind = addr.into();
        self
    }

    pub fn workers(mut self, workers: usize) -> Self {
        self.workers = workers;
        self
    }

    pub async fn run(self) -> anyhow::Result<()> {
        let configurator = self.configurator;

        let mut http = HttpServer::new(move || {
            let app = new_app(AppOptions {
                logger: Some(Logger::default()),
            });

            app.configure(|svc| {
                if let Some(config) = &configurator {
                    config(svc);
                }
            })
        });

        if self.workers > 0 {
            log::info!("Using {} worker(s)", self.workers);
            http = http.workers(self.workers);
        }

        log::info!("Binding to: {}", self.bind);
        http = http.bind(self.bind).context("bind")?;

        Ok(http.run().await?)
    }
}
