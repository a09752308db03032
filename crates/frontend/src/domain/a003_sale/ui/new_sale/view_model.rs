use crate::domain::a001_store::api as store_api;
use crate::domain::a002_employee::api as employee_api;
use crate::domain::a003_sale::api;
use crate::shared::config::config;
use crate::shared::debounce::{RequestSequence, RequestTag};
use crate::system::auth::context::AuthState;
use contracts::domain::a001_store::{no_officer_warning, Store};
use contracts::domain::a002_employee::Employee;
use contracts::domain::a003_sale::NewSaleForm;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// ViewModel for the "New Sale" dialog
#[derive(Clone, Copy)]
pub struct NewSaleViewModel {
    pub form: RwSignal<NewSaleForm>,
    pub stores: RwSignal<Vec<Store>>,
    pub officers: RwSignal<Vec<Employee>>,
    pub loading_stores: RwSignal<bool>,
    pub loading_officers: RwSignal<bool>,
    pub resolving_officer: RwSignal<bool>,
    pub creating: RwSignal<bool>,
    pub error: RwSignal<Option<String>>,
    pub warning: RwSignal<Option<String>>,
    resolve_sequence: StoredValue<RequestSequence>,
}

impl NewSaleViewModel {
    pub fn new() -> Self {
        Self {
            form: RwSignal::new(NewSaleForm::default()),
            stores: RwSignal::new(Vec::new()),
            officers: RwSignal::new(Vec::new()),
            loading_stores: RwSignal::new(false),
            loading_officers: RwSignal::new(false),
            resolving_officer: RwSignal::new(false),
            creating: RwSignal::new(false),
            error: RwSignal::new(None),
            warning: RwSignal::new(None),
            resolve_sequence: StoredValue::new(RequestSequence::new()),
        }
    }

    pub fn reset(&self) {
        self.form.set(NewSaleForm::default());
        self.error.set(None);
        self.warning.set(None);
        self.resolving_officer.set(false);
        // responses to lookups started before the reset must not land in the new form
        self.next_resolve_tag();
    }

    fn next_resolve_tag(&self) -> RequestTag {
        self.resolve_sequence
            .try_update_value(|s| s.next_tag())
            .unwrap_or_default()
    }

    pub fn can_submit(&self) -> bool {
        self.form.with(|f| f.can_submit()) && !self.creating.get() && !self.resolving_officer.get()
    }

    /// Load the reference lists shown by the dialog
    pub fn load_references(&self, creds: AuthState) {
        let vm = *self;

        vm.loading_stores.set(true);
        let store_creds = creds.clone();
        spawn_local(async move {
            match store_api::fetch_store_names(&store_creds).await {
                Ok(stores) => vm.stores.set(stores),
                Err(e) if e.is_no_credential() => {}
                Err(e) => {
                    log::error!("Failed to fetch stores: {}", e);
                    vm.error
                        .set(Some("Failed to load stores. Please try again.".to_string()));
                }
            }
            vm.loading_stores.set(false);
        });

        vm.loading_officers.set(true);
        spawn_local(async move {
            match employee_api::fetch_employees(&creds).await {
                Ok(officers) => vm.officers.set(officers),
                Err(e) if e.is_no_credential() => {}
                Err(e) => {
                    log::error!("Failed to fetch field officers: {}", e);
                    vm.error.set(Some(
                        "Failed to load field officers. Please try again.".to_string(),
                    ));
                }
            }
            vm.loading_officers.set(false);
        });
    }

    /// A store was picked: clear the officer and look up the store's assignment
    pub fn select_store(&self, creds: AuthState, store_id: Option<i64>) {
        let vm = *self;
        vm.form.update(|f| f.select_store(store_id));
        vm.warning.set(None);

        let tag = vm.next_resolve_tag();
        let Some(store_id) = store_id else {
            vm.resolving_officer.set(false);
            return;
        };

        vm.resolving_officer.set(true);
        spawn_local(async move {
            let result = store_api::fetch_store_details(&creds, store_id).await;
            let is_latest = vm
                .resolve_sequence
                .try_with_value(|s| s.is_latest(tag))
                .unwrap_or(false);
            if !is_latest {
                return;
            }

            match result {
                Ok(details) => {
                    let officer = details.assigned_officer();
                    vm.form.update(|f| f.apply_assigned_officer(officer));
                    if officer.is_none() {
                        let warning = no_officer_warning(&details.store_name);
                        log::warn!("{}", warning);
                        vm.warning.set(Some(warning));
                    }
                }
                Err(e) if e.is_no_credential() => {}
                Err(e) => {
                    log::error!("Failed to fetch assigned officer for store {}: {}", store_id, e);
                    vm.form.update(|f| f.apply_assigned_officer(None));
                    vm.warning
                        .set(Some("Could not load assigned officer.".to_string()));
                }
            }
            vm.resolving_officer.set(false);
        });
    }

    /// Validate and send the sale; `on_created` runs after a 2xx reply
    pub fn save_command(&self, creds: AuthState, on_created: Callback<()>) {
        let vm = *self;
        let request = match vm.form.with_untracked(|f| f.validate(config().sales.office_manager_id)) {
            Ok(request) => request,
            Err(e) => {
                vm.error.set(Some(e.to_string()));
                return;
            }
        };

        vm.creating.set(true);
        vm.error.set(None);
        spawn_local(async move {
            match api::create_sale(&creds, &request).await {
                Ok(()) => {
                    log::info!(
                        "Sale created: store {} officer {} tons {}",
                        request.store_id,
                        request.employee_id,
                        request.tons
                    );
                    vm.reset();
                    on_created.run(());
                }
                Err(e) if e.is_no_credential() => {}
                Err(e) => {
                    log::error!("Failed to create sale: {}", e);
                    vm.error.set(Some(e.to_string()));
                }
            }
            vm.creating.set(false);
        });
    }
}
