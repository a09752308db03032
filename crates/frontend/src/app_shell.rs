//! Application shell: auth gate plus navigation between the two screens.

use crate::dashboards::TotalSalesReport;
use crate::domain::a003_sale::ui::SalesScreen;
use crate::shared::icons::icon;
use crate::system::auth::context::{sign_out, use_auth};
use crate::system::auth::guard::RequireAuth;
use leptos::prelude::*;
use thaw::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Screen {
    Sales,
    TotalSalesReport,
}

impl Screen {
    fn title(self) -> &'static str {
        match self {
            Screen::Sales => "Sales",
            Screen::TotalSalesReport => "Total Sales Report",
        }
    }

    fn icon_name(self) -> &'static str {
        match self {
            Screen::Sales => "sales",
            Screen::TotalSalesReport => "report",
        }
    }
}

#[component]
fn MainLayout() -> impl IntoView {
    let (_, set_auth_state) = use_auth();
    let (screen, set_screen) = signal(Screen::Sales);

    let nav_item = move |target: Screen| {
        view! {
            <Button
                appearance=move || {
                    if screen.get() == target {
                        ButtonAppearance::Primary
                    } else {
                        ButtonAppearance::Subtle
                    }
                }
                on_click=move |_| set_screen.set(target)
            >
                {icon(target.icon_name())}
                {format!(" {}", target.title())}
            </Button>
        }
    };

    view! {
        <div class="app-shell">
            <header class="top-header">
                <Flex gap=FlexGap::Small align=FlexAlign::Center>
                    <span class="top-header__brand">"Sales Admin"</span>
                    {nav_item(Screen::Sales)}
                    {nav_item(Screen::TotalSalesReport)}
                </Flex>
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=move |_| sign_out(set_auth_state)
                >
                    {icon("log-out")}
                    " Sign out"
                </Button>
            </header>

            <main class="app-main">
                {move || match screen.get() {
                    Screen::Sales => view! { <SalesScreen /> }.into_any(),
                    Screen::TotalSalesReport => view! { <TotalSalesReport /> }.into_any(),
                }}
            </main>
        </div>
    }
}

/// Application shell - shows the sign-in page until a token is present
#[component]
pub fn AppShell() -> impl IntoView {
    view! {
        <RequireAuth>
            <MainLayout />
        </RequireAuth>
    }
}
