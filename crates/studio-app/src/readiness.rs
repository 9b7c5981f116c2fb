//! Bounded-retry reachability polling for the development server.
//!
//! One sequential loop per session: attempt `k` starts only after attempt
//! `k-1` has completed or hit its per-probe cap. Attempt starts are spaced
//! by the budget interval and nothing sleeps after the final attempt, so a
//! session that never succeeds ends between `(N-1)*T` and `N*T` after it
//! began.

use std::fmt;
use std::time::Duration;

use async_trait::async_trait;
use studio_common::Endpoint;
use tokio::time::{Instant, MissedTickBehavior};
use tracing::{debug, info};

/// How many probes a session may send and how far apart they start.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryBudget {
    max_attempts: u32,
    interval: Duration,
}

impl RetryBudget {
    pub fn new(max_attempts: u32, interval: Duration) -> Result<Self, ReadinessError> {
        if max_attempts == 0 || interval.is_zero() {
            return Err(ReadinessError::InvalidBudget {
                max_attempts,
                interval,
            });
        }
        Ok(Self {
            max_attempts,
            interval,
        })
    }

    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Upper bound on the length of a session.
    pub fn ceiling(&self) -> Duration {
        self.interval * self.max_attempts
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ReadinessError {
    #[error("{endpoint} not ready after {attempts} attempts ({waited:?})")]
    Timeout {
        endpoint: Endpoint,
        attempts: u32,
        waited: Duration,
    },

    #[error("invalid retry budget: {max_attempts} attempts every {interval:?}")]
    InvalidBudget { max_attempts: u32, interval: Duration },
}

/// Why a single probe did not count as ready.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProbeFailure {
    Unreachable(String),
    Status(u16),
}

impl fmt::Display for ProbeFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unreachable(reason) => write!(f, "unreachable: {reason}"),
            Self::Status(code) => write!(f, "status {code}"),
        }
    }
}

/// One reachability check against an endpoint.
#[async_trait]
pub trait Probe: Send + Sync {
    async fn probe(&self, endpoint: &Endpoint) -> Result<(), ProbeFailure>;
}

/// Plain HTTP GET of the endpoint root; any 2xx counts as ready.
pub struct HttpProbe {
    client: reqwest::Client,
}

impl HttpProbe {
    pub fn new(timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder()
            .no_proxy()
            .timeout(timeout)
            .build()?;
        Ok(Self { client })
    }
}

#[async_trait]
impl Probe for HttpProbe {
    async fn probe(&self, endpoint: &Endpoint) -> Result<(), ProbeFailure> {
        let response = self
            .client
            .get(endpoint.url())
            .send()
            .await
            .map_err(|e| ProbeFailure::Unreachable(e.to_string()))?;

        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            Err(ProbeFailure::Status(status.as_u16()))
        }
    }
}

/// Probe `endpoint` until it answers or the budget runs out.
///
/// Returns the attempt number that succeeded. Probe errors are counted as
/// failed attempts and never propagate.
pub async fn wait_until_ready<P: Probe + ?Sized>(
    probe: &P,
    endpoint: &Endpoint,
    budget: RetryBudget,
) -> Result<u32, ReadinessError> {
    let started = Instant::now();
    let mut ticker = tokio::time::interval(budget.interval);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    for attempt in 1..=budget.max_attempts {
        ticker.tick().await;
        match tokio::time::timeout(budget.interval, probe.probe(endpoint)).await {
            Ok(Ok(())) => {
                info!(%endpoint, attempt, elapsed = ?started.elapsed(), "dev server ready");
                return Ok(attempt);
            }
            Ok(Err(failure)) => debug!(%endpoint, attempt, %failure, "dev server not ready"),
            Err(_) => debug!(%endpoint, attempt, "dev server probe timed out"),
        }
    }

    Err(ReadinessError::Timeout {
        endpoint: endpoint.clone(),
        attempts: budget.max_attempts,
        waited: started.elapsed(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::ScriptedProbe;

    const SLACK: Duration = Duration::from_millis(5);

    fn endpoint() -> Endpoint {
        Endpoint::new("localhost", 3000)
    }

    fn budget(n: u32, ms: u64) -> RetryBudget {
        RetryBudget::new(n, Duration::from_millis(ms)).unwrap()
    }

    #[test]
    fn budget_rejects_zero_attempts_and_interval() {
        assert!(RetryBudget::new(0, Duration::from_millis(500)).is_err());
        assert!(RetryBudget::new(5, Duration::ZERO).is_err());
    }

    #[test]
    fn default_budget_ceiling() {
        assert_eq!(budget(60, 500).ceiling(), Duration::from_secs(30));
    }

    #[tokio::test(start_paused = true)]
    async fn permanent_failure_times_out_after_exactly_n_attempts() {
        for n in [1u32, 2, 5, 60] {
            let probe = ScriptedProbe::failing();
            let t = Duration::from_millis(500);
            let start = Instant::now();

            let err = wait_until_ready(&probe, &endpoint(), budget(n, 500))
                .await
                .unwrap_err();
            let elapsed = start.elapsed();

            assert_eq!(probe.calls(), n);
            assert!(matches!(err, ReadinessError::Timeout { attempts, .. } if attempts == n));
            assert!(elapsed >= t * (n - 1), "n={n} elapsed={elapsed:?}");
            assert!(elapsed <= t * n + SLACK, "n={n} elapsed={elapsed:?}");
        }
    }

    #[tokio::test(start_paused = true)]
    async fn hanging_probes_are_capped_per_attempt() {
        let probe = ScriptedProbe::hanging();
        let start = Instant::now();

        let err = wait_until_ready(&probe, &endpoint(), budget(4, 250))
            .await
            .unwrap_err();

        assert_eq!(probe.calls(), 4);
        assert!(matches!(err, ReadinessError::Timeout { .. }));
        assert!(start.elapsed() <= Duration::from_millis(1000) + SLACK);
        assert!(start.elapsed() >= Duration::from_millis(750));
    }

    #[tokio::test(start_paused = true)]
    async fn success_at_k_never_polls_again() {
        for k in [1u32, 3, 10] {
            let probe = ScriptedProbe::succeeding_at(k);
            let attempt = wait_until_ready(&probe, &endpoint(), budget(10, 100))
                .await
                .unwrap();
            assert_eq!(attempt, k);
            assert_eq!(probe.calls(), k);
        }
    }

    #[tokio::test(start_paused = true)]
    async fn succeeds_on_final_attempt() {
        let probe = ScriptedProbe::succeeding_at(60);
        let start = Instant::now();

        let attempt = wait_until_ready(&probe, &endpoint(), budget(60, 500))
            .await
            .unwrap();

        assert_eq!(attempt, 60);
        assert_eq!(probe.calls(), 60);
        assert!(start.elapsed() >= Duration::from_millis(500 * 59));
        assert!(start.elapsed() <= Duration::from_millis(500 * 59) + SLACK);
    }

    #[test]
    fn timeout_message_names_endpoint() {
        let err = ReadinessError::Timeout {
            endpoint: endpoint(),
            attempts: 60,
            waited: Duration::from_secs(30),
        };
        assert!(err.to_string().contains("localhost:3000"));
        assert!(err.to_string().contains("60 attempts"));
    }

    #[tokio::test]
    async fn http_probe_reports_unreachable_endpoint() {
        let probe = HttpProbe::new(Duration::from_millis(200)).unwrap();
        // Port 9 (discard) is closed on test machines.
        let result = probe.probe(&Endpoint::new("127.0.0.1", 9)).await;
        assert!(matches!(result, Err(ProbeFailure::Unreachable(_))));
    }
}
