use serde::{Deserialize, Serialize};

// ============================================================================
// Reference entity
// ============================================================================

/// Store as returned by `GET /store/names`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Store {
    pub id: i64,
    pub store_name: String,
}

/// Store detail as returned by `GET /store/getById?id=<id>`
///
/// The backend sends many more fields; only the ones the sales screens
/// read are declared, everything else is ignored by serde.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreDetails {
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub store_name: String,
    #[serde(default)]
    pub employee_id: Option<i64>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
}

impl StoreDetails {
    /// Field officer bound to this store.
    ///
    /// A zero id is what the backend sends for "not assigned", so it is
    /// treated the same as a missing field.
    pub fn assigned_officer(&self) -> Option<i64> {
        self.employee_id.filter(|id| *id != 0)
    }
}

/// Warning shown in the new-sale dialog when a store has nobody assigned
pub fn no_officer_warning(store_name: &str) -> String {
    format!("Store {} has no assigned officer.", store_name)
}

/// Stores are listed alphabetically in every picker
pub fn sort_stores(mut stores: Vec<Store>) -> Vec<Store> {
    stores.sort_by(|a, b| a.store_name.cmp(&b.store_name));
    stores
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_assigned_officer_present() {
        let details: StoreDetails = serde_json::from_str(
            r#"{"id": 7, "storeName": "North Yard", "employeeId": 42, "city": "Pune"}"#,
        )
        .unwrap();
        assert_eq!(details.assigned_officer(), Some(42));
    }

    #[test]
    fn test_assigned_officer_missing_or_zero() {
        let missing: StoreDetails =
            serde_json::from_str(r#"{"id": 7, "storeName": "North Yard"}"#).unwrap();
        assert_eq!(missing.assigned_officer(), None);

        let null: StoreDetails =
            serde_json::from_str(r#"{"id": 7, "storeName": "North Yard", "employeeId": null}"#)
                .unwrap();
        assert_eq!(null.assigned_officer(), None);

        let zero = StoreDetails {
            employee_id: Some(0),
            ..StoreDetails::default()
        };
        assert_eq!(zero.assigned_officer(), None);
    }

    #[test]
    fn test_no_officer_warning_names_store() {
        let msg = no_officer_warning("North Yard");
        assert!(msg.contains("North Yard"));
        assert_eq!(msg, "Store North Yard has no assigned officer.");
    }

    #[test]
    fn test_sort_stores_by_name() {
        let stores = vec![
            Store { id: 1, store_name: "Zeta".into() },
            Store { id: 2, store_name: "Alpha".into() },
            Store { id: 3, store_name: "Mid".into() },
        ];
        let names: Vec<_> = sort_stores(stores)
            .into_iter()
            .map(|s| s.store_name)
            .collect();
        assert_eq!(names, vec!["Alpha", "Mid", "Zeta"]);
    }
}
