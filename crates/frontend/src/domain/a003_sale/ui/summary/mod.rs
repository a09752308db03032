use crate::dashboards::d400_sales_summary::ui::filters::SummaryFilters;
use crate::dashboards::d400_sales_summary::ui::loader::SummaryLoader;
use crate::shared::config::config;
use crate::shared::format::{format_tons, or_not_available};
use leptos::prelude::*;
use thaw::*;

/// "Sales Summary" tab: one row per store for the applied date range
#[component]
pub fn SalesSummaryTab() -> impl IntoView {
    let loader = SummaryLoader::new(config().summary.table_page_size);

    view! {
        <SummaryFilters loader=loader />

        <div class="page-content">
            {move || {
                if loader.loading.get() {
                    return view! {
                        <div class="page-placeholder">
                            <Spinner />
                        </div>
                    }
                    .into_any();
                }

                if let Some(e) = loader.error.get() {
                    return view! {
                        <div class="page-placeholder page-placeholder--error">
                            <p class="page-placeholder__title">"Error Loading Summary"</p>
                            <p>{e}</p>
                        </div>
                    }
                    .into_any();
                }

                match loader.rows.get() {
                    Some(rows) if !rows.is_empty() => view! {
                        <div style="width: 100%; overflow-x: auto;">
                            <Table attr:style="width: 100%;">
                                <TableHeader>
                                    <TableRow>
                                        <TableHeaderCell>"Store Name"</TableHeaderCell>
                                        <TableHeaderCell>"City"</TableHeaderCell>
                                        <TableHeaderCell>"State"</TableHeaderCell>
                                        <TableHeaderCell>"Last Sale By"</TableHeaderCell>
                                        <TableHeaderCell>"Total Tons"</TableHeaderCell>
                                    </TableRow>
                                </TableHeader>
                                <TableBody>
                                    {rows
                                        .into_iter()
                                        .map(|row| {
                                            view! {
                                                <TableRow>
                                                    <TableCell><TableCellLayout>{row.store_name}</TableCellLayout></TableCell>
                                                    <TableCell><TableCellLayout>{or_not_available(row.store_city.as_deref())}</TableCellLayout></TableCell>
                                                    <TableCell><TableCellLayout>{or_not_available(row.store_state.as_deref())}</TableCellLayout></TableCell>
                                                    <TableCell><TableCellLayout>{or_not_available(Some(row.employee_name.as_str()))}</TableCellLayout></TableCell>
                                                    <TableCell class="table__cell--right"><TableCellLayout>{format_tons(row.total_tons)}</TableCellLayout></TableCell>
                                                </TableRow>
                                            }
                                        })
                                        .collect_view()}
                                </TableBody>
                            </Table>
                        </div>
                    }
                    .into_any(),
                    Some(_) => view! {
                        <div class="page-placeholder">
                            <p class="page-placeholder__title">"No Summary Data Found"</p>
                            <p class="text-muted">"No sales summary data available for the selected date range."</p>
                        </div>
                    }
                    .into_any(),
                    None => view! {
                        <div class="page-placeholder">
                            <p class="page-placeholder__title">"Apply Filters for Summary"</p>
                            <p class="text-muted">"Select a date range to view the sales summary."</p>
                        </div>
                    }
                    .into_any(),
                }
            }}
        </div>
    }
}
