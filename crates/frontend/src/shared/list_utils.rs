//! Client-side sorting of the rows currently shown in a table

use std::cmp::Ordering;

/// Rows that can be ordered by a named column
pub trait Sortable {
    /// Compare two rows by the given column key
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering;
}

/// Current sort column and direction of a table
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SortState {
    pub field: Option<String>,
    pub ascending: bool,
}

impl SortState {
    /// Clicking the active column flips the direction, any other column
    /// becomes active in ascending order
    pub fn toggle(&mut self, field: &str) {
        if self.field.as_deref() == Some(field) {
            self.ascending = !self.ascending;
        } else {
            self.field = Some(field.to_string());
            self.ascending = true;
        }
    }

    pub fn apply<T: Sortable>(&self, items: &mut [T]) {
        if let Some(field) = &self.field {
            sort_list(items, field, self.ascending);
        }
    }

    pub fn indicator(&self, field: &str) -> &'static str {
        get_sort_indicator(self.field.as_deref().unwrap_or_default(), field, self.ascending)
    }
}

/// Stable sort by the given column
pub fn sort_list<T: Sortable>(items: &mut [T], field: &str, ascending: bool) {
    items.sort_by(|a, b| {
        let cmp = a.compare_by_field(b, field);
        if ascending { cmp } else { cmp.reverse() }
    });
}

/// Sort indicator for a column header
pub fn get_sort_indicator(current_field: &str, field: &str, ascending: bool) -> &'static str {
    if current_field == field {
        if ascending { " ▲" } else { " ▼" }
    } else {
        " ⇅"
    }
}

/// Case-insensitive text comparison
pub fn compare_text(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase())
}

/// Missing values sort after present ones
pub fn compare_optional_text(a: Option<&str>, b: Option<&str>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => compare_text(a, b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Row {
        name: &'static str,
        city: Option<&'static str>,
        tons: f64,
    }

    impl Sortable for Row {
        fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
            match field {
                "name" => compare_text(self.name, other.name),
                "city" => compare_optional_text(self.city, other.city),
                "tons" => self.tons.total_cmp(&other.tons),
                _ => Ordering::Equal,
            }
        }
    }

    fn rows() -> Vec<Row> {
        vec![
            Row { name: "beta", city: None, tons: 2.0 },
            Row { name: "Alpha", city: Some("Pune"), tons: 9.5 },
            Row { name: "gamma", city: Some("Agra"), tons: 0.5 },
        ]
    }

    #[test]
    fn test_sort_by_text_ignores_case() {
        let mut items = rows();
        sort_list(&mut items, "name", true);
        let names: Vec<_> = items.iter().map(|r| r.name).collect();
        assert_eq!(names, vec!["Alpha", "beta", "gamma"]);
    }

    #[test]
    fn test_missing_values_last() {
        let mut items = rows();
        sort_list(&mut items, "city", true);
        let cities: Vec<_> = items.iter().map(|r| r.city).collect();
        assert_eq!(cities, vec![Some("Agra"), Some("Pune"), None]);
    }

    #[test]
    fn test_toggle_flips_direction() {
        let mut sort = SortState::default();
        sort.toggle("tons");
        assert_eq!(sort.field.as_deref(), Some("tons"));
        assert!(sort.ascending);
        assert_eq!(sort.indicator("tons"), " ▲");
        assert_eq!(sort.indicator("name"), " ⇅");

        let mut items = rows();
        sort.apply(&mut items);
        assert_eq!(items[0].tons, 0.5);

        sort.toggle("tons");
        assert!(!sort.ascending);
        sort.apply(&mut items);
        assert_eq!(items[0].tons, 9.5);
        assert_eq!(sort.indicator("tons"), " ▼");

        sort.toggle("name");
        assert!(sort.ascending);
    }

    #[test]
    fn test_unsorted_keeps_server_order() {
        let mut items = rows();
        SortState::default().apply(&mut items);
        assert_eq!(items, rows());
    }
}
