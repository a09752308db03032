use contracts::dashboards::d400_sales_summary::{SummaryRange, SummaryRecord, SummaryResponse};

use crate::shared::http::{get_json_or_default, CredentialProvider, FetchError};

/// Per-store totals for the range, first page only. A missing or empty
/// `content` comes back as no rows.
pub async fn fetch_sales_summary(
    creds: &impl CredentialProvider,
    range: &SummaryRange,
    size: usize,
) -> Result<Vec<SummaryRecord>, FetchError> {
    let params = range
        .query_params(0, size)
        .map_err(|e| FetchError::InvalidRequest(e.to_string()))?;
    let response: SummaryResponse = get_json_or_default(creds, "/sales/totalTons", &params).await?;
    Ok(response.rows())
}
