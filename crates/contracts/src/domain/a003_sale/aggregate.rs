use serde::{Deserialize, Serialize};

// ============================================================================
// Wire shapes
// ============================================================================

/// One `content[]` item of `GET /sales/getFilteredSales`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaleApiItem {
    pub id: i64,
    #[serde(default)]
    pub store_name: String,
    #[serde(default)]
    pub employee_name: String,
    #[serde(default)]
    pub store_city: Option<String>,
    #[serde(default)]
    pub store_state: Option<String>,
    #[serde(default)]
    pub tons: f64,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Spring-style page envelope returned by the filtered sales endpoint.
/// `number` is the 0-indexed page the server actually served.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SalesPage {
    #[serde(default)]
    pub content: Vec<SaleApiItem>,
    #[serde(default)]
    pub number: usize,
    #[serde(default)]
    pub total_pages: usize,
    #[serde(default)]
    pub total_elements: usize,
}

/// Body of `POST /sales/create`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSaleRequest {
    pub employee_id: i64,
    pub store_id: i64,
    pub office_manager_id: i64,
    pub tons: f64,
}

// ============================================================================
// Display row
// ============================================================================

/// Row of the sales records table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SaleRecord {
    pub id: i64,
    pub store_name: String,
    pub employee_name: String,
    pub city: Option<String>,
    pub state: Option<String>,
    pub tons: f64,
    /// Raw `createdAt` timestamp; formatting is left to the view
    pub date: Option<String>,
}

impl From<SaleApiItem> for SaleRecord {
    fn from(item: SaleApiItem) -> Self {
        Self {
            id: item.id,
            store_name: item.store_name,
            employee_name: item.employee_name,
            city: item.store_city.filter(|c| !c.is_empty()),
            state: item.store_state.filter(|s| !s.is_empty()),
            tons: item.tons,
            date: item.created_at.filter(|d| !d.is_empty()),
        }
    }
}

impl SalesPage {
    /// Flatten the page content into display rows, keeping server order
    pub fn records(self) -> Vec<SaleRecord> {
        self.content.into_iter().map(SaleRecord::from).collect()
    }

    /// Server page converted to the 1-indexed page shown in the UI
    pub fn display_page(&self) -> usize {
        self.number + 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE_JSON: &str = r#"{
        "content": [
            {
                "id": 11,
                "storeName": "North Yard",
                "employeeName": "Asha Rao",
                "storeCity": "Pune",
                "storeState": "Maharashtra",
                "tons": 12.5,
                "createdAt": "2026-10-10T08:30:00"
            },
            {
                "id": 12,
                "storeName": "East Depot",
                "employeeName": "Ravi Kumar",
                "storeCity": null,
                "tons": 3.0
            }
        ],
        "number": 2,
        "totalPages": 9,
        "totalElements": 130,
        "size": 15
    }"#;

    #[test]
    fn test_page_envelope() {
        let page: SalesPage = serde_json::from_str(PAGE_JSON).unwrap();
        assert_eq!(page.number, 2);
        assert_eq!(page.display_page(), 3);
        assert_eq!(page.total_pages, 9);
        assert_eq!(page.total_elements, 130);
        assert_eq!(page.content.len(), 2);
    }

    #[test]
    fn test_flatten_maps_store_fields() {
        let page: SalesPage = serde_json::from_str(PAGE_JSON).unwrap();
        let records = page.records();

        assert_eq!(
            records[0],
            SaleRecord {
                id: 11,
                store_name: "North Yard".into(),
                employee_name: "Asha Rao".into(),
                city: Some("Pune".into()),
                state: Some("Maharashtra".into()),
                tons: 12.5,
                date: Some("2026-10-10T08:30:00".into()),
            }
        );
        assert_eq!(records[1].city, None);
        assert_eq!(records[1].state, None);
        assert_eq!(records[1].date, None);
    }

    #[test]
    fn test_empty_body_is_empty_page() {
        let page: SalesPage = serde_json::from_str("{}").unwrap();
        assert!(page.content.is_empty());
        assert_eq!(page.total_pages, 0);
    }

    #[test]
    fn test_create_request_wire_names() {
        let req = CreateSaleRequest {
            employee_id: 42,
            store_id: 7,
            office_manager_id: 86,
            tons: 2.5,
        };
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "employeeId": 42,
                "storeId": 7,
                "officeManagerId": 86,
                "tons": 2.5
            })
        );
    }
}
