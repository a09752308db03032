use crate::dashboards::d400_sales_summary::api;
use crate::shared::date_utils::today;
use crate::shared::debounce::{RequestSequence, RequestTag};
use crate::shared::http::CredentialProvider;
use crate::system::auth::context::{use_auth, AuthState};
use chrono::NaiveDate;
use contracts::dashboards::d400_sales_summary::{SummaryRange, SummaryRecord};
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Date range inputs plus the result of the last applied summary query.
///
/// `rows` is `None` until a range has been applied, and again after
/// Clear or a failed fetch.
#[derive(Clone, Copy)]
pub struct SummaryLoader {
    pub start: RwSignal<Option<NaiveDate>>,
    pub end: RwSignal<Option<NaiveDate>>,
    pub rows: RwSignal<Option<Vec<SummaryRecord>>>,
    pub applied: RwSignal<Option<(NaiveDate, NaiveDate)>>,
    pub loading: RwSignal<bool>,
    pub error: RwSignal<Option<String>>,
    page_size: usize,
    sequence: StoredValue<RequestSequence>,
    auth_state: ReadSignal<AuthState>,
}

impl SummaryLoader {
    /// Must be created inside a component under `AuthProvider`
    pub fn new(page_size: usize) -> Self {
        let (auth_state, _) = use_auth();
        let range = SummaryRange::default_for(today());
        Self {
            start: RwSignal::new(range.start),
            end: RwSignal::new(range.end),
            rows: RwSignal::new(None),
            applied: RwSignal::new(None),
            loading: RwSignal::new(false),
            error: RwSignal::new(None),
            page_size,
            sequence: StoredValue::new(RequestSequence::new()),
            auth_state,
        }
    }

    fn next_tag(&self) -> RequestTag {
        self.sequence
            .try_update_value(|s| s.next_tag())
            .unwrap_or_default()
    }

    fn is_latest(&self, tag: RequestTag) -> bool {
        self.sequence
            .try_with_value(|s| s.is_latest(tag))
            .unwrap_or(false)
    }

    pub fn apply(&self) {
        let this = *self;
        let range = SummaryRange {
            start: this.start.get_untracked(),
            end: this.end.get_untracked(),
        };

        let bounds = match range.bounds() {
            Ok(bounds) => bounds,
            Err(e) => {
                this.next_tag();
                this.error.set(Some(e.to_string()));
                this.rows.set(None);
                this.applied.set(None);
                return;
            }
        };

        let creds = this.auth_state.get_untracked();
        if creds.bearer_token().is_none() {
            return;
        }

        let tag = this.next_tag();
        this.loading.set(true);
        this.error.set(None);
        this.rows.set(None);
        this.applied.set(None);

        spawn_local(async move {
            let result = api::fetch_sales_summary(&creds, &range, this.page_size).await;
            if !this.is_latest(tag) {
                return;
            }

            match result {
                Ok(rows) => {
                    log::debug!("Sales summary loaded: {} stores", rows.len());
                    this.rows.set(Some(rows));
                    this.applied.set(Some(bounds));
                }
                Err(e) if e.is_no_credential() => {}
                Err(e) => {
                    log::error!("Failed to fetch sales summary: {}", e);
                    this.error.set(Some(e.to_string()));
                }
            }
            this.loading.set(false);
        });
    }

    /// Back to the default lookback window with nothing loaded
    pub fn clear(&self) {
        self.next_tag();
        let range = SummaryRange::default_for(today());
        self.start.set(range.start);
        self.end.set(range.end);
        self.rows.set(None);
        self.applied.set(None);
        self.error.set(None);
        self.loading.set(false);
    }
}
