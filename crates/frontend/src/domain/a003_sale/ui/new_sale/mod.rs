mod view_model;

use crate::shared::components::date_input::DateInput;
use crate::system::auth::context::use_auth;
use chrono::NaiveDate;
use leptos::prelude::*;
use thaw::*;
use view_model::NewSaleViewModel;

/// "New Sale" dialog. The field officer always follows the selected store.
#[component]
pub fn NewSaleDialog(open: RwSignal<bool>, on_created: Callback<()>) -> impl IntoView {
    let (auth_state, _) = use_auth();
    let vm = NewSaleViewModel::new();

    // inputs bound to Thaw controls
    let store_value = RwSignal::new(String::new());
    let tons = RwSignal::new(String::new());
    let date = RwSignal::new(vm.form.with_untracked(|f| f.date));

    // opening or closing starts from an empty form
    Effect::new(move |prev: Option<bool>| {
        let is_open = open.get();
        if prev.is_some_and(|was_open| was_open != is_open) || (prev.is_none() && is_open) {
            vm.reset();
            store_value.set(String::new());
            tons.set(String::new());
            date.set(vm.form.with_untracked(|f| f.date));
            if is_open {
                vm.load_references(auth_state.get_untracked());
            }
        }
        is_open
    });

    Effect::new(move |prev: Option<String>| {
        let value = store_value.get();
        if prev.as_ref().is_some_and(|p| *p != value) {
            vm.select_store(auth_state.get_untracked(), value.parse::<i64>().ok());
        }
        value
    });

    Effect::new(move |_| {
        let value = tons.get();
        vm.form.update(|f| f.tons = value);
    });

    Effect::new(move |_| {
        let value: Option<NaiveDate> = date.get();
        vm.form.update(|f| f.date = value);
    });

    let officer_value = move || {
        vm.form
            .with(|f| f.field_officer_id)
            .map(|id| id.to_string())
            .unwrap_or_default()
    };

    let submit = move |_: leptos::ev::MouseEvent| {
        vm.save_command(
            auth_state.get_untracked(),
            Callback::new(move |_| {
                open.set(false);
                on_created.run(());
            }),
        );
    };

    view! {
        <Dialog open=open>
            <DialogSurface>
                <DialogBody>
                    <DialogTitle>"New Sale"</DialogTitle>
                    <DialogContent>
                        <Flex vertical=true gap=FlexGap::Large>
                            <Show when=move || vm.error.get().is_some()>
                                <div class="warning-box warning-box--error">
                                    <span class="warning-box__icon">"⚠"</span>
                                    <span class="warning-box__text">{move || vm.error.get().unwrap_or_default()}</span>
                                </div>
                            </Show>

                            <Flex vertical=true gap=FlexGap::Small>
                                <Label>"Store"</Label>
                                <Select value=store_value>
                                    <option value="">
                                        {move || if vm.loading_stores.get() { "Loading stores..." } else { "Select a store" }}
                                    </option>
                                    <For
                                        each=move || vm.stores.get()
                                        key=|store| store.id
                                        children=move |store| {
                                            view! { <option value=store.id.to_string()>{store.store_name}</option> }
                                        }
                                    />
                                </Select>
                            </Flex>

                            <Flex vertical=true gap=FlexGap::Small>
                                <Label>"Field Officer"</Label>
                                <select class="form-select" disabled=true prop:value=officer_value>
                                    <option value="">
                                        {move || {
                                            if vm.loading_officers.get() || vm.resolving_officer.get() {
                                                "Loading..."
                                            } else {
                                                "Assigned with the store"
                                            }
                                        }}
                                    </option>
                                    <For
                                        each=move || vm.officers.get()
                                        key=|officer| officer.id
                                        children=move |officer| {
                                            let id = officer.id;
                                            view! {
                                                <option
                                                    value=id.to_string()
                                                    selected=move || vm.form.with(|f| f.field_officer_id == Some(id))
                                                >
                                                    {officer.full_name()}
                                                </option>
                                            }
                                        }
                                    />
                                </select>
                                <Show when=move || vm.warning.get().is_some()>
                                    <MessageBar intent=MessageBarIntent::Warning>
                                        {move || vm.warning.get().unwrap_or_default()}
                                    </MessageBar>
                                </Show>
                            </Flex>

                            <Flex vertical=true gap=FlexGap::Small>
                                <Label>"Tons"</Label>
                                <Input value=tons placeholder="Enter tons" />
                            </Flex>

                            <Flex vertical=true gap=FlexGap::Small>
                                <Label>"Date"</Label>
                                <DateInput value=date disabled=Signal::derive(move || vm.creating.get()) />
                            </Flex>
                        </Flex>
                    </DialogContent>
                    <DialogActions>
                        <Button
                            appearance=ButtonAppearance::Primary
                            on_click=submit
                            disabled=Signal::derive(move || !vm.can_submit())
                        >
                            {move || if vm.creating.get() { "Creating..." } else { "Create Sale" }}
                        </Button>
                        <Button
                            appearance=ButtonAppearance::Secondary
                            on_click=move |_| open.set(false)
                        >
                            "Cancel"
                        </Button>
                    </DialogActions>
                </DialogBody>
            </DialogSurface>
        </Dialog>
    }
}
