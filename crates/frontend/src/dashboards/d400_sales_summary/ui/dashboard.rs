use super::bar_chart::BarChart;
use super::filters::SummaryFilters;
use super::loader::SummaryLoader;
use crate::domain::a001_store::api as store_api;
use crate::shared::config::config;
use crate::shared::date_utils::format_caption_date;
use crate::shared::format::format_tons;
use crate::shared::icons::icon;
use crate::system::auth::context::use_auth;
use contracts::dashboards::d400_sales_summary::{aggregate_total_tons, ChartSeries};
use contracts::domain::a001_store::Store;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

/// Total Sales Report: tons sold across all stores for a date range
#[component]
pub fn TotalSalesReport() -> impl IntoView {
    let (auth_state, _) = use_auth();
    let loader = SummaryLoader::new(config().summary.chart_page_size);

    let (stores, set_stores) = signal(Vec::<Store>::new());

    // Load the store reference list on mount
    Effect::new(move |_| {
        let creds = auth_state.get_untracked();
        spawn_local(async move {
            match store_api::fetch_store_names(&creds).await {
                Ok(list) => set_stores.set(list),
                Err(e) if e.is_no_credential() => {}
                Err(e) => log::error!("Failed to load stores for the sales report: {}", e),
            }
        });
    });

    let total = Memo::new(move |_| {
        loader
            .rows
            .with(|rows| rows.as_ref().map(|r| aggregate_total_tons(r)))
    });

    let series = Memo::new(move |_| {
        loader.rows.with(|rows| match rows {
            Some(rows) => ChartSeries::from_rows(rows),
            None => ChartSeries::placeholder(),
        })
    });

    view! {
        <div class="page">
            <div class="page__header">
                <div class="page__header-left">
                    {icon("report")}
                    <h1 class="page__title">"Total Sales Report"</h1>
                    <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Brand>
                        <span>{move || format!("{} stores", stores.get().len())}</span>
                    </Badge>
                </div>
            </div>

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

                    match (total.get(), loader.applied.get()) {
                        (Some(total), Some((start, end))) => view! {
                            <div class="summary-card">
                                <div class="summary-card__header">
                                    <h2 class="summary-card__title">"Total Sales Summary"</h2>
                                    <span class="summary-card__caption">
                                        {format!("({} - {})", format_caption_date(start), format_caption_date(end))}
                                    </span>
                                </div>
                                <div class="summary-card__content">
                                    <p class="summary-card__label">"Total Tons Sold (All Stores)"</p>
                                    <p class="summary-card__value">{format_tons(total)}</p>
                                </div>
                            </div>
                        }
                        .into_any(),
                        _ => view! {
                            <div class="page-placeholder">
                                {icon("report")}
                                <p>"Select filters to view the sales summary."</p>
                            </div>
                        }
                        .into_any(),
                    }
                }}

                <div class="chart-card">
                    <div class="chart-card__header">
                        <h2 class="chart-card__title">"Total Sales Bar Chart"</h2>
                        <p class="text-muted">"Total tonnage across all stores for the selected period."</p>
                    </div>
                    <BarChart series=series title="Total Sales Volume" />
                </div>
            </div>
        </div>
    }
}
