//! Mock login: role tiles and a sign-in / sign-up form. Nothing is verified.

use crate::app::{navigate, scroll_to_top, use_app};
use leptos::prelude::*;
use rubber_grading_common::{AuthMode, LoginForm, Page, Role};

fn form_field(
    form: RwSignal<LoginForm>,
    label: &'static str,
    kind: &'static str,
    placeholder: &'static str,
    read: fn(&LoginForm) -> &String,
    write: fn(&mut LoginForm) -> &mut String,
) -> impl IntoView {
    view! {
        <div class="form-field">
            <label>{label}</label>
            <input
                type=kind
                placeholder=placeholder
                prop:value=move || form.with(|f| read(f).clone())
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    form.update(|f| *write(f) = value);
                }
            />
        </div>
    }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let app = use_app();
    let form = RwSignal::new(LoginForm::default());

    let selected_role = move || form.with(|f| f.role);
    let is_sign_in = move || form.with(|f| f.mode == AuthMode::SignIn);

    let tiles = Role::ALL
        .into_iter()
        .map(|role| {
            view! {
                <div
                    class="card role-tile"
                    class:selected=move || selected_role() == Some(role)
                    on:click=move |_| form.update(|f| f.role = Some(role))
                >
                    <h3>{format!("{} Login", role.display_name())}</h3>
                    <p class="text-muted">{role.description()}</p>
                </div>
            }
        })
        .collect_view();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let submitted = form.with(|f| app.try_update(|state| state.login(f).is_some()));
        if submitted == Some(true) {
            scroll_to_top();
        }
    };

    let title = move || {
        let role = selected_role().map(|r| r.display_name()).unwrap_or_default();
        if is_sign_in() {
            format!("Sign In as {}", role)
        } else {
            format!("Sign Up as {}", role)
        }
    };

    view! {
        <section class="page login-page">
            <button class="btn-ghost" on:click=move |_| navigate(app, Page::Home)>
                "← Back to Home"
            </button>

            <div class="page-title">
                <h1>"Choose Login Type"</h1>
                <p class="text-muted">"Select your account type to access the platform"</p>
            </div>

            <div class="grid-3">{tiles}</div>

            <Show when=move || selected_role().is_some()>
                <div class="card login-card">
                    <h2>{title}</h2>
                    <p class="text-muted">
                        {move || if is_sign_in() {
                            "Enter your credentials to access your account"
                        } else {
                            "Create a new account to get started"
                        }}
                    </p>
                    <form on:submit=on_submit>
                        {form_field(form, "Full Name", "text", "Enter your full name", |f| &f.name, |f| &mut f.name)}
                        {form_field(form, "Email", "email", "Enter your email", |f| &f.email, |f| &mut f.email)}
                        {form_field(form, "Password", "password", "Enter your password", |f| &f.password, |f| &mut f.password)}
                        <Show when=move || !is_sign_in()>
                            {form_field(
                                form,
                                "Confirm Password",
                                "password",
                                "Confirm your password",
                                |f| &f.confirm_password,
                                |f| &mut f.confirm_password,
                            )}
                        </Show>
                        <button type="submit" class="btn btn-primary btn-block">
                            {move || if is_sign_in() { "Sign In" } else { "Create Account" }}
                        </button>
                    </form>
                    <button
                        type="button"
                        class="btn-link"
                        on:click=move |_| form.update(|f| f.mode = f.mode.toggled())
                    >
                        {move || if is_sign_in() {
                            "Don't have an account? Sign up"
                        } else {
                            "Already have an account? Sign in"
                        }}
                    </button>
                </div>
            </Show>
        </section>
    }
}
