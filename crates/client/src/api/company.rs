// Company profile, services and health

use siteline_core::{Action, CompanyInfo, EntityKind, HealthStatus, Operation, Service};

use crate::error::Result;
use crate::http::ApiClient;

const COMPANY: Operation = Operation::new(EntityKind::Company, Action::Get);
const SERVICES: Operation = Operation::new(EntityKind::Service, Action::List);
const HEALTH: Operation = Operation::new(EntityKind::Health, Action::Get);

impl ApiClient {
    pub async fn get_company_info(&self) -> Result<CompanyInfo> {
        self.get(COMPANY, &["company"]).await
    }

    pub async fn list_services(&self) -> Result<Vec<Service>> {
        self.get(SERVICES, &["services"]).await
    }

    pub async fn health(&self) -> Result<HealthStatus> {
        self.get(HEALTH, &["health"]).await
    }
}
