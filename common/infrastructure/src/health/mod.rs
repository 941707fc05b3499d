use futures::future::{BoxFuture, join_all};
use serde::Serialize;
use std::{borrow::Cow, collections::BTreeMap, future::Future};
use tokio::sync::RwLock;

/// A health check
pub trait Check: Send + Sync + 'static {
    fn run(&self) -> BoxFuture<'_, Result<(), Cow<'static, str>>>;
}

impl<F, Fut> Check for F
where
    F: Fn() -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Result<(), Cow<'static, str>>> + Send + 'static,
{
    fn run(&self) -> BoxFuture<'_, Result<(), Cow<'static, str>>> {
        Box::pin(self())
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CheckResult {
    pub up: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct CheckResults {
    pub results: BTreeMap<String, CheckResult>,
}

impl CheckResults {
    pub fn all_up(&self) -> bool {
        self.results.values().all(|result| result.up)
    }
}

/// A named set of checks
#[derive(Default)]
pub struct Checks {
    checks: RwLock<BTreeMap<String, Box<dyn Check>>>,
}

impl Checks {
    pub async fn register(&self, name: impl Into<String>, check: impl Check) {
        self.checks
            .write()
            .await
            .insert(name.into(), Box::new(check));
    }

    pub async fn run(&self) -> CheckResults {
        let checks = self.checks.read().await;

        let results = join_all(checks.iter().map(|(name, check)| async move {
            let result = match check.run().await {
                Ok(()) => CheckResult {
                    up: true,
                    error: None,
                },
                Err(err) => CheckResult {
                    up: false,
                    error: Some(err.into_owned()),
                },
            };
            (name.clone(), result)
        }))
        .await;

        CheckResults {
            results: results.into_iter().collect(),
        }
    }
}

#[derive(Default)]
pub struct HealthChecks {
    pub liveness: Checks,
    pub readiness: Checks,
}
