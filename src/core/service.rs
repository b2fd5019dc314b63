use crate::core::calculator::working_hours;
use crate::errors::RemoteError;
use crate::models::request::WorkingHoursRequest;
use crate::models::response::WorkingHoursResponse;
use async_trait::async_trait;

/// Anything able to turn a request into a working-hours result.
#[async_trait]
pub trait WorkingHoursService: Send + Sync {
    async fn calculate(
        &self,
        req: &WorkingHoursRequest,
    ) -> Result<WorkingHoursResponse, RemoteError>;
}

/// In-process calculation, same rules as the remote endpoint.
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalService;

#[async_trait]
impl WorkingHoursService for LocalService {
    async fn calculate(
        &self,
        req: &WorkingHoursRequest,
    ) -> Result<WorkingHoursResponse, RemoteError> {
        working_hours::respond(req)
    }
}
