use contracts::domain::a001_store::{sort_stores, Store, StoreDetails};

use crate::shared::http::{get_json, CredentialProvider, FetchError};

/// Store reference list, sorted by name
pub async fn fetch_store_names(creds: &impl CredentialProvider) -> Result<Vec<Store>, FetchError> {
    let stores: Vec<Store> = get_json(creds, "/store/names", &[]).await?;
    Ok(sort_stores(stores))
}

pub async fn fetch_store_details(
    creds: &impl CredentialProvider,
    id: i64,
) -> Result<StoreDetails, FetchError> {
    get_json(creds, "/store/getById", &[("id", id.to_string())]).await
}
