use leptos::prelude::*;

use super::storage;
use crate::shared::http::CredentialProvider;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct AuthState {
    pub access_token: Option<String>,
}

impl CredentialProvider for AuthState {
    fn bearer_token(&self) -> Option<String> {
        self.access_token.bearer_token()
    }
}

/// Auth context provider component
#[component]
pub fn AuthProvider(children: Children) -> impl IntoView {
    // Session survives reloads through localStorage
    let (auth_state, set_auth_state) = signal(AuthState {
        access_token: storage::get_access_token(),
    });

    provide_context(auth_state);
    provide_context(set_auth_state);

    children()
}

/// Hook to access auth state
pub fn use_auth() -> (ReadSignal<AuthState>, WriteSignal<AuthState>) {
    let auth_state =
        use_context::<ReadSignal<AuthState>>().expect("AuthProvider not found in component tree");
    let set_auth_state =
        use_context::<WriteSignal<AuthState>>().expect("AuthProvider not found in component tree");

    (auth_state, set_auth_state)
}

/// Helper: store a token and switch the app to the signed-in state
pub fn sign_in(set_auth_state: WriteSignal<AuthState>, token: String) {
    let token = token.trim().to_string();
    if token.is_empty() {
        return;
    }
    storage::save_access_token(&token);
    set_auth_state.set(AuthState {
        access_token: Some(token),
    });
    log::info!("Signed in");
}

/// Helper: Perform logout
pub fn sign_out(set_auth_state: WriteSignal<AuthState>) {
    storage::clear_tokens();
    set_auth_state.set(AuthState::default());
    log::info!("Signed out");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_as_credentials() {
        assert_eq!(AuthState::default().bearer_token(), None);

        let state = AuthState {
            access_token: Some("jwt".into()),
        };
        assert_eq!(state.bearer_token(), Some("jwt".to_string()));
    }
}
