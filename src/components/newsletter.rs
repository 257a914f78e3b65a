//! Newsletter signup: one subscribe-flow behavior shared by every
//! presentation (hero dialog, CTA dialog, footer inline form). Instances
//! share no state.

use yew::prelude::*;
use web_sys::HtmlInputElement;
use wasm_bindgen_futures::spawn_local;
use gloo_timers::future::TimeoutFuture;
use gloo_console::log;

use crate::api;

/// A submit attempt is only dispatched for a non-blank email with no request
/// already in flight; otherwise it is a no-op.
pub fn can_submit_signup(email: &str, submitting: bool) -> bool {
    !email.trim().is_empty() && !submitting
}

/// Handle returned by [`use_newsletter_signup`].
#[derive(Clone)]
pub struct NewsletterSignup {
    pub email: UseStateHandle<String>,
    pub submitting: UseStateHandle<bool>,
    pub subscribed: UseStateHandle<bool>,
    pub error: UseStateHandle<Option<String>>,
    pub set_email: Callback<Event>,
    pub submit: Callback<SubmitEvent>,
}

/// Subscribe-flow state machine: empty email is a no-op, success clears the
/// input and auto-reverts after `reset_after_ms`, failure keeps the input for
/// a user-initiated retry. `on_done` fires after the success display reverts
/// (dialogs use it to close themselves).
#[hook]
pub fn use_newsletter_signup(
    reset_after_ms: u32,
    on_done: Option<Callback<()>>,
) -> NewsletterSignup {
    let email = use_state(String::new);
    let submitting = use_state(|| false);
    let subscribed = use_state(|| false);
    let error = use_state(|| None::<String>);

    let set_email = {
        let email = email.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            email.set(input.value());
        })
    };

    let submit = {
        let email = email.clone();
        let submitting = submitting.clone();
        let subscribed = subscribed.clone();
        let error = error.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if !can_submit_signup(&email, *submitting) {
                return;
            }
            submitting.set(true);
            error.set(None);
            let address = (*email).clone();
            let email = email.clone();
            let submitting = submitting.clone();
            let subscribed = subscribed.clone();
            let error = error.clone();
            let on_done = on_done.clone();
            spawn_local(async move {
                match api::subscribe_newsletter(&address).await {
                    Ok(_) => {
                        subscribed.set(true);
                        email.set(String::new());
                        submitting.set(false);
                        TimeoutFuture::new(reset_after_ms).await;
                        subscribed.set(false);
                        if let Some(on_done) = on_done {
                            on_done.emit(());
                        }
                    }
                    Err(e) => {
                        log!("Newsletter subscription failed:", e.to_string());
                        error.set(Some(
                            "Une erreur est survenue. Veuillez réessayer.".to_string(),
                        ));
                        submitting.set(false);
                    }
                }
            });
        })
    };

    NewsletterSignup {
        email,
        submitting,
        subscribed,
        error,
        set_email,
        submit,
    }
}

#[derive(Properties, PartialEq)]
pub struct NewsletterDialogProps {
    pub open: bool,
    pub on_close: Callback<()>,
}

/// Modal newsletter presentation used by the hero and CTA sections. Closes
/// itself 2 s after a successful subscription.
#[function_component(NewsletterDialog)]
pub fn newsletter_dialog(props: &NewsletterDialogProps) -> Html {
    let signup = use_newsletter_signup(2_000, Some(props.on_close.clone()));

    if !props.open {
        return html! {};
    }

    let close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };
    let stop_propagation = Callback::from(|e: MouseEvent| e.stop_propagation());

    html! {
        <div class="newsletter-overlay" onclick={close}>
            <style>
                {r#"
                    .newsletter-overlay {
                        position: fixed;
                        inset: 0;
                        background: rgba(0, 0, 0, 0.5);
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        z-index: 50;
                        padding: 1rem;
                    }
                    .newsletter-dialog {
                        background: #fff;
                        border-radius: 16px;
                        padding: 2rem;
                        width: 100%;
                        max-width: 28rem;
                        box-shadow: 0 16px 48px rgba(0, 0, 0, 0.25);
                    }
                    .newsletter-dialog h3 {
                        font-size: 1.5rem;
                        margin: 0 0 0.5rem;
                        background: linear-gradient(to right, #3b82f6, #9333ea);
                        -webkit-background-clip: text;
                        -webkit-text-fill-color: transparent;
                    }
                    .newsletter-dialog > p {
                        color: #475569;
                        margin-bottom: 1.5rem;
                    }
                    .newsletter-dialog form {
                        display: flex;
                        flex-direction: column;
                        gap: 1rem;
                    }
                    .newsletter-dialog input {
                        height: 3rem;
                        padding: 0 0.75rem;
                        border: 1px solid #cbd5e1;
                        border-radius: 8px;
                        font-size: 1rem;
                    }
                    .newsletter-dialog button {
                        height: 3rem;
                        border: none;
                        border-radius: 10px;
                        font-size: 1rem;
                        font-weight: 600;
                        color: #fff;
                        cursor: pointer;
                        background: linear-gradient(to right, #3b82f6, #9333ea);
                    }
                    .newsletter-dialog button:disabled {
                        opacity: 0.5;
                        cursor: not-allowed;
                    }
                    .newsletter-dialog .form-error {
                        color: #dc2626;
                        font-size: 0.9rem;
                    }
                    .newsletter-thanks {
                        text-align: center;
                        padding: 2rem 0;
                    }
                    .newsletter-thanks .icon {
                        width: 4rem;
                        height: 4rem;
                        border-radius: 50%;
                        background: #dcfce7;
                        color: #16a34a;
                        font-size: 1.8rem;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        margin: 0 auto 1rem;
                    }
                    .newsletter-thanks h4 {
                        font-size: 1.25rem;
                        color: #0f172a;
                        margin: 0 0 0.5rem;
                    }
                    .newsletter-thanks p { color: #475569; }
                "#}
            </style>
            <div class="newsletter-dialog" onclick={stop_propagation}>
                <h3>{"Restez informé"}</h3>
                <p>{"Inscrivez-vous à notre newsletter pour recevoir nos dernières actualités et offres exclusives."}</p>
                {
                    if *signup.subscribed {
                        html! {
                            <div class="newsletter-thanks">
                                <div class="icon">{"✉"}</div>
                                <h4>{"Merci de votre inscription !"}</h4>
                                <p>{"Vous recevrez bientôt nos actualités."}</p>
                            </div>
                        }
                    } else {
                        html! {
                            <form onsubmit={signup.submit.clone()}>
                                <input
                                    type="email"
                                    placeholder="votre@email.com"
                                    value={(*signup.email).clone()}
                                    onchange={signup.set_email.clone()}
                                    required=true
                                />
                                if let Some(text) = (*signup.error).as_ref() {
                                    <div class="form-error">{text}</div>
                                }
                                <button type="submit" disabled={*signup.submitting}>
                                    { if *signup.submitting { "Inscription..." } else { "S'abonner" } }
                                </button>
                            </form>
                        }
                    }
                }
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_email_never_submits() {
        assert!(!can_submit_signup("", false));
        assert!(!can_submit_signup("   ", false));
    }

    #[test]
    fn in_flight_request_blocks_resubmit() {
        assert!(!can_submit_signup("test@example.com", true));
    }

    #[test]
    fn valid_email_submits_once_idle() {
        assert!(can_submit_signup("test@example.com", false));
    }
}
