use crate::ports::ReachabilityProbe;
use mwcheck_domain::{ProbeOutcome, Reachability};
use regex::Regex;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::Semaphore;
use tokio::task::JoinSet;
use tracing::{debug, info, warn};

/// Determines reachability for a batch of host addresses.
///
/// Small batches are probed sequentially; once the batch reaches twice
/// the worker count the probes fan out to a bounded pool. Workers share
/// nothing, so the pool needs no locking beyond the permit counter.
pub struct HostProber {
    probe: Arc<dyn ReachabilityProbe>,
    workers: usize,
}

impl HostProber {
    pub fn new(probe: Arc<dyn ReachabilityProbe>, workers: usize) -> Self {
        Self {
            probe,
            workers: workers.max(1),
        }
    }

    /// Probes every address and returns exactly one verdict per input
    /// host. A probe that errors or produces no output resolves to
    /// `FAILED`; it never aborts the batch.
    pub async fn probe_hosts(&self, hosts: &[String]) -> Vec<ProbeOutcome> {
        if hosts.is_empty() {
            return Vec::new();
        }

        let parallel = hosts.len() >= 2 * self.workers;
        info!(
            hosts = hosts.len(),
            workers = self.workers,
            parallel,
            "probing hosts"
        );

        let verdicts = if parallel {
            self.probe_pooled(hosts).await
        } else {
            self.probe_sequential(hosts).await
        };

        // Tasks that died without reporting still owe their host a
        // verdict.
        hosts
            .iter()
            .map(|host| {
                let verdict = verdicts
                    .get(host)
                    .copied()
                    .unwrap_or(Reachability::Unreachable);
                ProbeOutcome::new(host.clone(), verdict)
            })
            .collect()
    }

    async fn probe_sequential(&self, hosts: &[String]) -> HashMap<String, Reachability> {
        let mut verdicts = HashMap::with_capacity(hosts.len());
        for host in hosts {
            let verdict = probe_one(Arc::clone(&self.probe), host.clone()).await;
            verdicts.insert(host.clone(), verdict);
        }
        verdicts
    }

    async fn probe_pooled(&self, hosts: &[String]) -> HashMap<String, Reachability> {
        let semaphore = Arc::new(Semaphore::new(self.workers));
        let mut tasks: JoinSet<(String, Reachability)> = JoinSet::new();

        for host in hosts {
            let probe = Arc::clone(&self.probe);
            let semaphore = Arc::clone(&semaphore);
            let host = host.clone();
            tasks.spawn(async move {
                let _permit = semaphore.acquire_owned().await.ok();
                let verdict = probe_one(probe, host.clone()).await;
                (host, verdict)
            });
        }

        let mut verdicts = HashMap::with_capacity(hosts.len());
        while let Some(joined) = tasks.join_next().await {
            match joined {
                Ok((host, verdict)) => {
                    verdicts.insert(host, verdict);
                }
                Err(e) => warn!(error = %e, "probe task aborted"),
            }
        }
        verdicts
    }
}

async fn probe_one(probe: Arc<dyn ReachabilityProbe>, host: String) -> Reachability {
    match probe.probe(&host).await {
        Ok(output) => verdict_for(&output, &host),
        Err(e) => {
            warn!(error = %e, host = %host, "probe failed");
            Reachability::Unreachable
        }
    }
}

/// Matches an echo reply from this specific host, so a reply emitted by
/// an unrelated hop never counts as success.
fn verdict_for(output: &str, host: &str) -> Reachability {
    let pattern = format!(
        r"\d+\s+bytes\s+from\s+{}:\s+icmp_seq=\d+\s+ttl=\d+\s+time=[\d.]+\s*ms",
        regex::escape(host)
    );
    let matcher = Regex::new(&pattern).expect("probe reply pattern is valid");
    if matcher.is_match(output) {
        Reachability::Reachable
    } else {
        debug!(host = %host, "no matching echo reply in probe output");
        Reachability::Unreachable
    }
}
