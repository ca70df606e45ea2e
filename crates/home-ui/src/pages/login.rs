use leptos::prelude::*;

#[server]
async fn login(email: String, password: String) -> Result<(), ServerFnError> {
    use crate::server::ssr;
    use home_client::ClientError;
    use home_types::LoginRequest;
    use http::header::SET_COOKIE;
    use leptos_axum::ResponseOptions;

    let api = ssr::api()?;
    let credentials = LoginRequest { email, password };

    let token = api.login(&credentials).await.map_err(|e| {
        let message = match e {
            ClientError::Transport(_) => "Could not reach the server".to_string(),
            ClientError::Status {
                message: Some(message),
                ..
            } => message,
            _ => "Login failed".to_string(),
        };
        ServerFnError::new(message)
    })?;

    let cookieValue = home_api::session::session_cookie(&token, &ssr::cookie_settings())
        .ok_or_else(|| ServerFnError::new("cookie error"))?;

    let responseOptions = expect_context::<ResponseOptions>();
    responseOptions.insert_header(SET_COOKIE, cookieValue);

    leptos_axum::redirect("/");

    Ok(())
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let loginAction = ServerAction::<Login>::new();
    let loginValue = loginAction.value();
    let pending = loginAction.pending();

    let errorMessage = move || {
        loginValue
            .get()
            .and_then(|result| result.err())
            .map(|e| crate::server::error_text(&e))
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <div class="login-header">
                    <div class="login-icon">"\u{2302}"</div>
                    <h1>"Log in"</h1>
                    <p>"Sign in to save your favorite listings"</p>
                </div>

                {move || {
                    errorMessage()
                        .map(|message| {
                            view! { <div class="login-error">{message}</div> }
                        })
                }}

                <ActionForm action=loginAction>
                    <div class="form-group">
                        <label for="email">"Email address"</label>
                        <input type="email" id="email" name="email" required />
                    </div>
                    <div class="form-group">
                        <label for="password">"Password"</label>
                        <input type="password" id="password" name="password" required />
                    </div>
                    <button type="submit" class="btn btn-primary" disabled=move || pending.get()>
                        {move || if pending.get() { "Signing in..." } else { "Sign In" }}
                    </button>
                </ActionForm>
            </div>
        </div>
    }
}
