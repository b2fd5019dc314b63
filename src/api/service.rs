use crate::api::client::ApiClient;
use crate::core::service::WorkingHoursService;
use crate::errors::RemoteError;
use crate::models::request::WorkingHoursRequest;
use crate::models::response::WorkingHoursResponse;
use async_trait::async_trait;

pub const WORKING_HOURS_ENDPOINT: &str = "workingHoursCalculator";

/// Remote calculation through `POST /api/workingHoursCalculator`.
#[derive(Clone, Debug)]
pub struct HttpService {
    client: ApiClient,
}

impl HttpService {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl WorkingHoursService for HttpService {
    async fn calculate(
        &self,
        req: &WorkingHoursRequest,
    ) -> Result<WorkingHoursResponse, RemoteError> {
        tracing::info!(
            url = %self.client.endpoint_url(WORKING_HOURS_ENDPOINT),
            start = %req.start_time,
            end = %req.end_time,
            "requesting working hours"
        );
        self.client.post(WORKING_HOURS_ENDPOINT, req).await
    }
}
