mod state;

use crate::domain::a003_sale::api;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::config::config;
use crate::shared::date_utils::format_sale_date;
use crate::shared::debounce::{Debouncer, RequestTag};
use crate::shared::format::{format_tons, or_not_available};
use crate::shared::http::CredentialProvider;
use crate::shared::icons::icon;
use crate::shared::list_utils::{compare_optional_text, compare_text, Sortable};
use crate::system::auth::context::use_auth;
use contracts::domain::a003_sale::{SaleRecord, SalesFilter};
use leptos::prelude::*;
use leptos::task::spawn_local;
use state::{create_state, RecordsQuery};
use std::cmp::Ordering;
use thaw::*;

impl Sortable for SaleRecord {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "store_name" => compare_text(&self.store_name, &other.store_name),
            "employee_name" => compare_text(&self.employee_name, &other.employee_name),
            "city" => compare_optional_text(self.city.as_deref(), other.city.as_deref()),
            "state" => compare_optional_text(self.state.as_deref(), other.state.as_deref()),
            // ISO timestamps order correctly as text
            "date" => compare_optional_text(self.date.as_deref(), other.date.as_deref()),
            "tons" => self.tons.total_cmp(&other.tons),
            _ => Ordering::Equal,
        }
    }
}

/// "Sales Records" tab: filtered, paginated list of individual sales
#[component]
pub fn SalesRecordsTab(
    /// Bumped after a sale is created; reloads the first page
    #[prop(into)]
    reload: Signal<u64>,
) -> impl IntoView {
    let (auth_state, _) = use_auth();
    let page_size = config().records.page_size;

    let state = create_state();
    let (records, set_records) = signal(Vec::<SaleRecord>::new());
    let (is_loading, set_is_loading) = signal(false);
    let (error, set_error) = signal(Option::<String>::None);

    // inputs bound to Thaw controls
    let store_name = RwSignal::new(String::new());
    let employee_name = RwSignal::new(String::new());
    let city = RwSignal::new(String::new());
    let state_name = RwSignal::new(String::new());

    let filter = Memo::new(move |_| SalesFilter {
        store_name: store_name.get(),
        employee_name: employee_name.get(),
        city: city.get(),
        state: state_name.get(),
    });
    let page = Memo::new(move |_| state.with(|s| s.page));

    let debouncer = StoredValue::new_local(Debouncer::<RecordsQuery>::new(
        config().records.debounce_ms,
    ));
    let skip_next_schedule = StoredValue::new(false);

    let load = move |tag: RequestTag, query: RecordsQuery| {
        let creds = auth_state.get_untracked();
        if creds.bearer_token().is_none() {
            return;
        }
        set_is_loading.set(true);
        set_error.set(None);

        spawn_local(async move {
            let result =
                api::fetch_sales_page(&creds, &query.filter, query.wire_page(), page_size).await;

            let is_latest = debouncer
                .try_with_value(|d| d.is_latest(tag))
                .unwrap_or(false);
            if !is_latest {
                log::debug!("Dropping stale sales response for page {}", query.page);
                return;
            }

            match result {
                Ok(resp) => {
                    state.update(|s| s.apply_page(&resp));
                    set_records.set(resp.records());
                }
                Err(e) if e.is_no_credential() => {}
                Err(e) => {
                    let message = e.message_or(&query.failure_message());
                    log::error!("Failed to fetch sales records: {}", message);
                    set_error.set(Some(message));
                    set_records.set(Vec::new());
                    state.update(|s| s.clear_totals());
                }
            }
            set_is_loading.set(false);
        });
    };

    // any filter edit starts again from the first page
    Effect::new(move |_| {
        let filter = filter.get();
        state.update(|s| {
            s.set_filter(filter);
        });
    });

    // filters or page -> debounced fetch
    let query = Memo::new(move |_| state.with(|s| s.query()));
    Effect::new(move |_| {
        let query = query.get();
        if skip_next_schedule.get_value() {
            skip_next_schedule.set_value(false);
            return;
        }
        debouncer.with_value(|d| d.schedule(query, load));
    });

    // a new sale was created -> first page right away
    Effect::new(move |prev: Option<()>| {
        reload.track();
        if prev.is_none() {
            return;
        }
        let mut moved = false;
        state.update(|s| moved = s.reload_first_page());
        if moved {
            skip_next_schedule.set_value(true);
        }
        let query = state.with_untracked(|s| s.query());
        let tag = debouncer.with_value(|d| d.issue());
        load(tag, query);
    });

    on_cleanup(move || {
        let _ = debouncer.try_with_value(|d| d.cancel());
    });

    let sorted = Memo::new(move |_| {
        let mut rows = records.get();
        state.with(|s| s.sort.apply(&mut rows));
        rows
    });

    let sort_header = move |title: &'static str, field: &'static str| {
        view! {
            <TableHeaderCell>
                {title}
                <span
                    class="table__sort-indicator"
                    on:click=move |_| state.update(|s| s.sort.toggle(field))
                >
                    {move || state.with(|s| s.sort.indicator(field))}
                </span>
            </TableHeaderCell>
        }
    };

    view! {
        <div class="filter-panel">
            <div class="filter-panel-header">
                <div class="filter-panel-header__left">
                    {icon("filter")}
                    <span class="filter-panel__title">"Filters"</span>
                </div>
                <div class="filter-panel-header__right">
                    <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Brand>
                        <span>{move || format!("{} records", state.get().total_elements)}</span>
                    </Badge>
                </div>
            </div>

            <div class="filter-panel-content">
                <Flex gap=FlexGap::Small align=FlexAlign::End>
                    <Input value=store_name placeholder="Search Store..." />
                    <Input value=employee_name placeholder="Search Officer..." />
                    <Input value=city placeholder="Search City..." />
                    <Input value=state_name placeholder="Search State..." />
                </Flex>
            </div>
        </div>

        <div class="page-content">
            {move || {
                if is_loading.get() {
                    return view! {
                        <div class="page-placeholder">
                            <Spinner />
                        </div>
                    }
                    .into_any();
                }

                if let (Some(e), true) = (error.get(), records.with(|r| r.is_empty())) {
                    return view! {
                        <div class="page-placeholder page-placeholder--error">
                            <p class="page-placeholder__title">{e}</p>
                            <p class="text-muted">"Could not load sales data. Please try refreshing."</p>
                        </div>
                    }
                    .into_any();
                }

                if records.with(|r| r.is_empty()) {
                    let hint = if state.with(|s| s.filter.is_empty()) {
                        "There are currently no sales records to display."
                    } else {
                        "No sales match the current filters."
                    };
                    return view! {
                        <div class="page-placeholder">
                            <p class="page-placeholder__title">"No Sales Records Found"</p>
                            <p class="text-muted">{hint}</p>
                        </div>
                    }
                    .into_any();
                }

                view! {
                    <div style="width: 100%; overflow-x: auto;">
                        <Table attr:style="width: 100%;">
                            <TableHeader>
                                <TableRow>
                                    {sort_header("Store Name", "store_name")}
                                    {sort_header("Field Officer", "employee_name")}
                                    {sort_header("City", "city")}
                                    {sort_header("State", "state")}
                                    {sort_header("Date", "date")}
                                    {sort_header("Tons", "tons")}
                                </TableRow>
                            </TableHeader>
                            <TableBody>
                                {move || {
                                    sorted
                                        .get()
                                        .into_iter()
                                        .map(|sale| {
                                            let date = sale
                                                .date
                                                .as_deref()
                                                .map(format_sale_date)
                                                .unwrap_or_else(|| or_not_available(None));
                                            view! {
                                                <TableRow>
                                                    <TableCell><TableCellLayout>{sale.store_name}</TableCellLayout></TableCell>
                                                    <TableCell><TableCellLayout>{sale.employee_name}</TableCellLayout></TableCell>
                                                    <TableCell><TableCellLayout>{or_not_available(sale.city.as_deref())}</TableCellLayout></TableCell>
                                                    <TableCell><TableCellLayout>{or_not_available(sale.state.as_deref())}</TableCellLayout></TableCell>
                                                    <TableCell><TableCellLayout>{date}</TableCellLayout></TableCell>
                                                    <TableCell class="table__cell--right"><TableCellLayout>{format_tons(sale.tons)}</TableCellLayout></TableCell>
                                                </TableRow>
                                            }
                                        })
                                        .collect_view()
                                }}
                            </TableBody>
                        </Table>
                    </div>
                }
                .into_any()
            }}

            <PaginationControls
                current_page=page
                total_pages=Signal::derive(move || state.get().total_pages)
                on_page_change=Callback::new(move |p: usize| state.update(|s| s.go_to(p)))
            />
        </div>
    }
}
