use serde::{Deserialize, Serialize};

/// Employee (field officer) as returned by `GET /employee/getAll`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub id: i64,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
}

impl Employee {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Officers are listed by full name
pub fn sort_employees(mut employees: Vec<Employee>) -> Vec<Employee> {
    employees.sort_by_key(|e| e.full_name());
    employees
}

#[cfg(test)]
mod tests {
    use super::*;

    fn emp(id: i64, first: &str, last: &str) -> Employee {
        Employee {
            id,
            first_name: first.to_string(),
            last_name: last.to_string(),
        }
    }

    #[test]
    fn test_full_name() {
        assert_eq!(emp(1, "Asha", "Rao").full_name(), "Asha Rao");
    }

    #[test]
    fn test_sort_by_full_name() {
        let sorted = sort_employees(vec![
            emp(1, "Ravi", "Kumar"),
            emp(2, "Asha", "Rao"),
            emp(3, "Asha", "Patil"),
        ]);
        let ids: Vec<_> = sorted.iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![3, 2, 1]);
    }

    #[test]
    fn test_deserialize_camel_case() {
        let e: Employee =
            serde_json::from_str(r#"{"id": 5, "firstName": "Asha", "lastName": "Rao", "role": "FO"}"#)
                .unwrap();
        assert_eq!(e, emp(5, "Asha", "Rao"));
    }
}
