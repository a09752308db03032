use super::loader::SummaryLoader;
use crate::shared::components::date_input::DateInput;
use crate::shared::icons::icon;
use leptos::prelude::*;
use thaw::*;

/// Start/end date pickers with Apply and Clear
#[component]
pub fn SummaryFilters(loader: SummaryLoader) -> impl IntoView {
    let apply_disabled = Signal::derive(move || loader.loading.get());

    view! {
        <div class="filter-panel">
            <div class="filter-panel-header">
                <div class="filter-panel-header__left">
                    {icon("filter")}
                    <span class="filter-panel__title">"Date range"</span>
                </div>
            </div>

            <div class="filter-panel-content">
                <Flex gap=FlexGap::Small align=FlexAlign::End>
                    <Flex vertical=true gap=FlexGap::Small>
                        <Label>"Start Date"</Label>
                        <DateInput value=loader.start disabled=apply_disabled />
                    </Flex>
                    <Flex vertical=true gap=FlexGap::Small>
                        <Label>"End Date"</Label>
                        <DateInput value=loader.end disabled=apply_disabled />
                    </Flex>
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| loader.apply()
                        disabled=apply_disabled
                    >
                        {move || if loader.loading.get() { "Loading..." } else { "Apply" }}
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| loader.clear()
                    >
                        "Clear"
                    </Button>
                </Flex>
            </div>
        </div>
    }
}
