use chrono::NaiveDate;
use thiserror::Error;

use super::aggregate::CreateSaleRequest;

/// Why the new-sale form cannot be submitted yet
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SaleFormError {
    /// Store, officer or tons missing, or tons not a finite number
    #[error("Please ensure Store, Field Officer, and Tons are filled correctly.")]
    Incomplete,
    #[error("Please select a sale date.")]
    MissingDate,
}

/// Transient state of the "New Sale" dialog. `Default` is the empty form
/// the dialog starts from every time it opens or closes.
///
/// The field officer is never chosen directly: it follows the selected
/// store through [`NewSaleForm::select_store`] and
/// [`NewSaleForm::apply_assigned_officer`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NewSaleForm {
    pub store_id: Option<i64>,
    pub field_officer_id: Option<i64>,
    pub tons: String,
    pub date: Option<NaiveDate>,
}

impl NewSaleForm {
    /// Switch the selected store. The officer is cleared until the
    /// store's assignment has been resolved.
    pub fn select_store(&mut self, store_id: Option<i64>) {
        self.store_id = store_id;
        self.field_officer_id = None;
    }

    pub fn apply_assigned_officer(&mut self, officer_id: Option<i64>) {
        self.field_officer_id = officer_id;
    }

    pub fn parsed_tons(&self) -> Option<f64> {
        self.tons
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|t| t.is_finite())
    }

    pub fn validate(&self, office_manager_id: i64) -> Result<CreateSaleRequest, SaleFormError> {
        let (Some(store_id), Some(employee_id), Some(tons)) =
            (self.store_id, self.field_officer_id, self.parsed_tons())
        else {
            return Err(SaleFormError::Incomplete);
        };
        if self.date.is_none() {
            return Err(SaleFormError::MissingDate);
        }

        Ok(CreateSaleRequest {
            employee_id,
            store_id,
            office_manager_id,
            tons,
        })
    }

    pub fn can_submit(&self) -> bool {
        self.validate(0).is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 17).unwrap()
    }

    fn filled() -> NewSaleForm {
        NewSaleForm {
            store_id: Some(7),
            field_officer_id: Some(42),
            tons: "12.5".into(),
            date: Some(today()),
        }
    }

    #[test]
    fn test_empty_form_has_no_date() {
        let form = NewSaleForm::default();
        assert_eq!(form.store_id, None);
        assert_eq!(form.field_officer_id, None);
        assert!(form.tons.is_empty());
        assert_eq!(form.date, None);
        assert!(!form.can_submit());
    }

    #[test]
    fn test_date_must_be_picked() {
        let mut form = NewSaleForm::default();
        form.select_store(Some(7));
        form.apply_assigned_officer(Some(42));
        form.tons = "3".into();
        assert_eq!(form.validate(86), Err(SaleFormError::MissingDate));

        form.date = Some(today());
        assert!(form.can_submit());
    }

    #[test]
    fn test_validate_builds_request_with_manager() {
        let req = filled().validate(86).unwrap();
        assert_eq!(
            req,
            CreateSaleRequest {
                employee_id: 42,
                store_id: 7,
                office_manager_id: 86,
                tons: 12.5,
            }
        );
    }

    #[test]
    fn test_non_numeric_tons_blocks_submit() {
        let mut form = filled();
        form.tons = "abc".into();
        assert_eq!(form.validate(86), Err(SaleFormError::Incomplete));
        assert!(!form.can_submit());

        form.tons = "inf".into();
        assert!(!form.can_submit());

        form.tons = "NaN".into();
        assert!(!form.can_submit());

        form.tons = "".into();
        assert!(!form.can_submit());
    }

    #[test]
    fn test_missing_fields() {
        let mut form = filled();
        form.date = None;
        assert_eq!(form.validate(86), Err(SaleFormError::MissingDate));

        let mut form = filled();
        form.field_officer_id = None;
        assert_eq!(form.validate(86), Err(SaleFormError::Incomplete));

        let mut form = filled();
        form.store_id = None;
        assert_eq!(form.validate(86), Err(SaleFormError::Incomplete));
    }

    #[test]
    fn test_officer_follows_store() {
        let mut form = filled();
        form.select_store(Some(9));
        assert_eq!(form.store_id, Some(9));
        assert_eq!(form.field_officer_id, None);
        assert!(!form.can_submit());

        form.apply_assigned_officer(Some(42));
        assert_eq!(form.field_officer_id, Some(42));
        assert!(form.can_submit());

        form.apply_assigned_officer(None);
        assert_eq!(form.field_officer_id, None);
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            SaleFormError::Incomplete.to_string(),
            "Please ensure Store, Field Officer, and Tons are filled correctly."
        );
        assert_eq!(SaleFormError::MissingDate.to_string(), "Please select a sale date.");
    }
}
