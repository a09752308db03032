use leptos::prelude::*;
use thaw::*;

use crate::system::auth::context::{sign_in, use_auth};

/// Sign-in page: accepts an access token issued by the sales backend
#[component]
pub fn LoginPage() -> impl IntoView {
    let (_, set_auth_state) = use_auth();
    let token = RwSignal::new(String::new());
    let (error_message, set_error_message) = signal(Option::<String>::None);

    let submit = move || {
        let value = token.get_untracked();
        if value.trim().is_empty() {
            set_error_message.set(Some("Please paste an access token.".to_string()));
            return;
        }
        set_error_message.set(None);
        sign_in(set_auth_state, value);
    };

    view! {
        <div class="login-container">
            <div class="login-box">
                <h1>"Sales Admin"</h1>
                <h2>"Sign in"</h2>

                <Show when=move || error_message.get().is_some()>
                    <div class="error-message">
                        {move || error_message.get().unwrap_or_default()}
                    </div>
                </Show>

                <Flex vertical=true gap=FlexGap::Small>
                    <Label>"Access token"</Label>
                    <Input value=token placeholder="Bearer token" />
                    <Button appearance=ButtonAppearance::Primary on_click=move |_| submit()>
                        "Sign in"
                    </Button>
                </Flex>
            </div>
        </div>
    }
}
