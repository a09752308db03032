use crate::shared::icons::icon;
use contracts::shared::pagination::{page_window, DEFAULT_WINDOW};
use leptos::prelude::*;

/// Numbered page links with first/last shortcuts and ellipses.
///
/// Pages are 1-indexed. Nothing is rendered for a single page.
#[component]
pub fn PaginationControls(
    /// Current page (1-indexed)
    #[prop(into)]
    current_page: Signal<usize>,

    /// Total number of pages
    #[prop(into)]
    total_pages: Signal<usize>,

    /// Callback when page changes
    on_page_change: Callback<usize>,
) -> impl IntoView {
    let window = Memo::new(move |_| page_window(current_page.get(), total_pages.get(), DEFAULT_WINDOW));

    let page_link = move |page: usize| {
        view! {
            <button
                class=move || {
                    if current_page.get() == page {
                        "pagination-btn pagination-btn--active"
                    } else {
                        "pagination-btn"
                    }
                }
                on:click=move |_| on_page_change.run(page)
            >
                {page.to_string()}
            </button>
        }
    };

    view! {
        <Show when=move || { total_pages.get() > 1 }>
            <div class="pagination-controls">
                <Show when=move || window.get().show_prev>
                    <button
                        class="pagination-btn"
                        on:click=move |_| on_page_change.run(current_page.get_untracked().saturating_sub(1).max(1))
                        title="Previous page"
                    >
                        {icon("chevron-left")}
                    </button>
                </Show>

                <Show when=move || window.get().show_first>
                    {page_link(1)}
                    <Show when=move || window.get().leading_ellipsis>
                        <span class="pagination-ellipsis">"…"</span>
                    </Show>
                </Show>

                <For
                    each=move || window.get().pages
                    key=|page| *page
                    children=move |page| page_link(page)
                />

                <Show when=move || window.get().show_last>
                    <Show when=move || window.get().trailing_ellipsis>
                        <span class="pagination-ellipsis">"…"</span>
                    </Show>
                    {move || page_link(total_pages.get())}
                </Show>

                <Show when=move || window.get().show_next>
                    <button
                        class="pagination-btn"
                        on:click=move |_| {
                            let next = (current_page.get_untracked() + 1).min(total_pages.get_untracked());
                            on_page_change.run(next);
                        }
                        title="Next page"
                    >
                        {icon("chevron-right")}
                    </button>
                </Show>
            </div>
        </Show>
    }
}
