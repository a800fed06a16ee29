//! Login Form Component
//!
//! Credential form shown while the session gate is closed.

use leptos::prelude::*;

use crate::context::AppContext;

/// Username/password form with an inline error line
#[component]
pub fn LoginForm() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let (username, set_username) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (error, set_error) = signal::<Option<String>>(None);

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        match ctx.login(&username.get(), &password.get()) {
            Ok(()) => set_error.set(None),
            Err(e) => set_error.set(Some(e.to_string())),
        }
    };

    view! {
        <div class="login-overlay">
            <div class="login-card">
                <div class="login-header">
                    <h2>"Bienvenido"</h2>
                    <p>"Ingresa tus credenciales para continuar"</p>
                </div>

                <form on:submit=submit>
                    {move || error.get().map(|msg| view! { <div class="error-message">{msg}</div> })}

                    <div class="form-group">
                        <label for="username">"Usuario"</label>
                        <input
                            id="username"
                            type="text"
                            class="form-input"
                            placeholder="user"
                            required=true
                            prop:value=move || username.get()
                            on:input=move |ev| set_username.set(event_target_value(&ev))
                        />
                    </div>

                    <div class="form-group">
                        <label for="password">"Contraseña"</label>
                        <input
                            id="password"
                            type="password"
                            class="form-input"
                            placeholder="*****"
                            required=true
                            prop:value=move || password.get()
                            on:input=move |ev| set_password.set(event_target_value(&ev))
                        />
                    </div>

                    <button type="submit" class="login-button">"Iniciar Sesión"</button>
                </form>
            </div>
        </div>
    }
}
