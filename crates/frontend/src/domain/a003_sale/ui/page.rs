use super::list::SalesRecordsTab;
use super::new_sale::NewSaleDialog;
use super::summary::SalesSummaryTab;
use crate::shared::icons::icon;
use leptos::prelude::*;
use thaw::*;

const TAB_RECORDS: &str = "records";
const TAB_SUMMARY: &str = "summary";

/// Sales screen: records and per-store summary tabs plus the "New Sale" dialog
#[component]
pub fn SalesScreen() -> impl IntoView {
    let selected_tab = RwSignal::new(TAB_RECORDS.to_string());
    let dialog_open = RwSignal::new(false);
    let (created, set_created) = signal(0u64);

    view! {
        <div class="page page--wide">
            <div class="page__header">
                <div class="page__header-left">
                    {icon("sales")}
                    <h1 class="page__title">"Sales"</h1>
                </div>
                <div class="page__header-right">
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| dialog_open.set(true)
                    >
                        {icon("plus")}
                        " New Sale"
                    </Button>
                </div>
            </div>

            <NewSaleDialog
                open=dialog_open
                on_created=Callback::new(move |_| set_created.update(|n| *n += 1))
            />

            <TabList selected_value=selected_tab>
                <Tab value={TAB_RECORDS.to_string()}>"Sales Records"</Tab>
                <Tab value={TAB_SUMMARY.to_string()}>"Sales Summary"</Tab>
            </TabList>

            // both tabs stay mounted so switching keeps their state
            <div class="tab-content" style:display=move || if selected_tab.get() == TAB_RECORDS { "block" } else { "none" }>
                <SalesRecordsTab reload=created />
            </div>
            <div class="tab-content" style:display=move || if selected_tab.get() == TAB_SUMMARY { "block" } else { "none" }>
                <SalesSummaryTab />
            </div>
        </div>
    }
}
