use clap::Parser;
use std::process::{ExitCode, Termination};

#[derive(clap::Parser, Debug)]
#[command(
    author,
    version = env!("CARGO_PKG_VERSION"),
    about = "deepmacd",
    long_about = "Look up the vendor of MAC addresses, by their OUI prefix"
)]
pub struct Deepmacd {
    #[command(flatten)]
    pub run: deepmac_server::Run,
}

impl Deepmacd {
    async fn run(self) -> ExitCode {
        match self.run.run().await {
            Ok(code) => code,
            Err(err) => {
                log::error!("Error: {err}");
                for (n, err) in err.chain().skip(1).enumerate() {
                    if n == 0 {
                        log::error!("Caused by:");
                    }
                    log::error!("\t{err}");
                }

                ExitCode::FAILURE
            }
        }
    }
}

#[actix_web::main]
async fn main() -> impl Termination {
    Deepmacd::parse().run().await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verify_cli() {
        use clap::CommandFactory;
        Deepmacd::command().debug_assert();
    }

    #[test]
    fn defaults() {
        let cli = Deepmacd::try_parse_from(["deepmacd"]).unwrap();
        assert_eq!(8080, cli.run.http.bind_port);
        assert_eq!(3306, cli.run.database.port);
        assert!(!cli.run.infra.infrastructure_enabled);
    }
}
