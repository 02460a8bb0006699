mod postcheck_arp;
mod postcheck_ping;
mod precheck_arp;
mod precheck_ping;
mod report;

pub use postcheck_arp::PostcheckArpUseCase;
pub use postcheck_ping::PostcheckPingUseCase;
pub use precheck_arp::PrecheckArpUseCase;
pub use precheck_ping::PrecheckPingUseCase;
pub use report::{ReportOutput, ReportUseCase};

use mwcheck_domain::DomainError;
use tracing::warn;

/// Transient store failures degrade to an empty result and the run
/// continues; integrity and device faults pass through to the operator.
pub(crate) fn absorb_store<T: Default>(
    result: Result<T, DomainError>,
    operation: &str,
) -> Result<T, DomainError> {
    match result {
        Ok(value) => Ok(value),
        Err(DomainError::Store(e)) => {
            warn!(error = %e, operation, "store operation degraded to empty result");
            Ok(T::default())
        }
        Err(e) => Err(e),
    }
}
