pub mod articles;
pub mod topics;

use crate::application::error::{ApplicationError, ApplicationResult};
use std::future::Future;
use std::time::Duration;

/// Run a read under the request deadline. Dropping the inner future on expiry
/// cancels every store call it still has in flight.
pub(crate) async fn within_deadline<T, F>(deadline: Duration, work: F) -> ApplicationResult<T>
where
    F: Future<Output = ApplicationResult<T>>,
{
    tokio::time::timeout(deadline, work)
        .await
        .map_err(|_| ApplicationError::Timeout(deadline))?
}
