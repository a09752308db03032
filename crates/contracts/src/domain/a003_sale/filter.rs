use serde::{Deserialize, Serialize};

/// Free-text filters of the sales records tab, combined with AND on the server
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalesFilter {
    pub store_name: String,
    pub employee_name: String,
    pub city: String,
    pub state: String,
}

impl SalesFilter {
    /// Query parameters for `GET /sales/getFilteredSales`.
    ///
    /// `page` is 0-indexed. Blank filters are left off the wire entirely.
    pub fn query_params(&self, page: usize, size: usize) -> Vec<(&'static str, String)> {
        let mut params = vec![("page", page.to_string()), ("size", size.to_string())];

        let filters = [
            ("storeName", &self.store_name),
            ("employeeName", &self.employee_name),
            ("city", &self.city),
            ("state", &self.state),
        ];
        for (key, value) in filters {
            let value = value.trim();
            if !value.is_empty() {
                params.push((key, value.to_string()));
            }
        }

        params
    }

    pub fn is_empty(&self) -> bool {
        self.store_name.trim().is_empty()
            && self.employee_name.trim().is_empty()
            && self.city.trim().is_empty()
            && self.state.trim().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keys(params: &[(&'static str, String)]) -> Vec<&'static str> {
        params.iter().map(|(k, _)| *k).collect()
    }

    #[test]
    fn test_no_filters_only_paging() {
        let params = SalesFilter::default().query_params(0, 15);
        assert_eq!(
            params,
            vec![("page", "0".to_string()), ("size", "15".to_string())]
        );
    }

    #[test]
    fn test_only_non_empty_filters_sent() {
        let filter = SalesFilter {
            store_name: "North".into(),
            employee_name: String::new(),
            city: "   ".into(),
            state: "MH".into(),
        };
        let params = filter.query_params(3, 15);
        assert_eq!(keys(&params), vec!["page", "size", "storeName", "state"]);
        assert!(params.iter().all(|(_, v)| !v.trim().is_empty()));
    }

    #[test]
    fn test_every_combination_skips_blanks() {
        for mask in 0u8..16 {
            let pick = |bit: u8, v: &str| {
                if mask & (1 << bit) != 0 {
                    v.to_string()
                } else {
                    String::new()
                }
            };
            let filter = SalesFilter {
                store_name: pick(0, "s"),
                employee_name: pick(1, "e"),
                city: pick(2, "c"),
                state: pick(3, "st"),
            };
            let params = filter.query_params(0, 15);
            assert_eq!(params.len(), 2 + mask.count_ones() as usize);
            assert!(params.iter().all(|(_, v)| !v.is_empty()));
        }
    }

    #[test]
    fn test_values_are_trimmed() {
        let filter = SalesFilter {
            city: "  Pune ".into(),
            ..SalesFilter::default()
        };
        let params = filter.query_params(0, 15);
        assert_eq!(params[2], ("city", "Pune".to_string()));
        assert!(!filter.is_empty());
        assert!(SalesFilter::default().is_empty());
    }
}
