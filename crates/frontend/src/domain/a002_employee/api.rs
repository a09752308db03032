use contracts::domain::a002_employee::{sort_employees, Employee};

use crate::shared::http::{get_json, CredentialProvider, FetchError};

/// Field officers, sorted by full name
pub async fn fetch_employees(creds: &impl CredentialProvider) -> Result<Vec<Employee>, FetchError> {
    let employees: Vec<Employee> = get_json(creds, "/employee/getAll", &[]).await?;
    Ok(sort_employees(employees))
}
