use contracts::domain::a003_sale::{CreateSaleRequest, SalesFilter, SalesPage};

use crate::shared::http::{get_json, post_json, CredentialProvider, FetchError};

/// One page of filtered sales. `page` is 0-indexed.
pub async fn fetch_sales_page(
    creds: &impl CredentialProvider,
    filter: &SalesFilter,
    page: usize,
    size: usize,
) -> Result<SalesPage, FetchError> {
    let params = filter.query_params(page, size);
    get_json(creds, "/sales/getFilteredSales", &params).await
}

pub async fn create_sale(
    creds: &impl CredentialProvider,
    request: &CreateSaleRequest,
) -> Result<(), FetchError> {
    post_json(creds, "/sales/create", request).await?;
    Ok(())
}
