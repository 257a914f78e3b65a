//! Newsletter unsubscribe confirmation page (`/unsubscribe?email=...`).
//!
//! Looks the email up first so an already-unsubscribed or unknown address
//! never triggers a pointless unsubscribe call.

use yew::prelude::*;
use yew_router::prelude::*;
use yew_hooks::prelude::*;
use wasm_bindgen_futures::spawn_local;
use gloo_console::log;

use crate::api::{self, ApiError, NewsletterClient};
use crate::Route;

#[derive(Debug, Clone, PartialEq)]
enum Phase {
    Loading,
    MissingEmail,
    Failed(String),
    AlreadyUnsubscribed,
    ConfirmPending,
    Unsubscribing,
    Done,
}

/// Settles the page before any request when the query parameter is absent or
/// empty; `None` means the lookup should proceed.
fn initial_phase(param: Option<&str>) -> Option<Phase> {
    match param {
        None => Some(Phase::MissingEmail),
        Some("") => Some(Phase::MissingEmail),
        Some(_) => None,
    }
}

/// Settles the page after the lookup. 404 is its own user-facing case.
fn lookup_phase(result: Result<NewsletterClient, ApiError>) -> Phase {
    match result {
        Ok(client) if !client.newsletter => Phase::AlreadyUnsubscribed,
        Ok(_) => Phase::ConfirmPending,
        Err(e) if e.is_not_found() => {
            Phase::Failed("Cet email n'est pas inscrit à notre newsletter.".to_string())
        }
        Err(ApiError::Status { .. }) => {
            Phase::Failed("Erreur lors de la vérification de votre email.".to_string())
        }
        Err(ApiError::Network(_)) => {
            Phase::Failed("Impossible de se connecter au serveur.".to_string())
        }
    }
}

/// Message shown when the unsubscribe call itself fails; the server's own
/// message wins when it sent one.
fn unsubscribe_error(e: &ApiError) -> String {
    match e {
        ApiError::Status { message: Some(message), .. } => message.clone(),
        ApiError::Status { .. } => "Erreur lors de la désinscription.".to_string(),
        ApiError::Network(_) => "Impossible de se connecter au serveur.".to_string(),
    }
}

#[function_component(Unsubscribe)]
pub fn unsubscribe() -> Html {
    let email = use_search_param("email".to_string());
    let phase = use_state(|| Phase::Loading);
    // Error from a failed confirm, shown while staying on the confirm card.
    let confirm_error = use_state(|| None::<String>);

    {
        let phase = phase.clone();
        use_effect_with_deps(
            move |email: &Option<String>| {
                match initial_phase(email.as_deref()) {
                    Some(settled) => phase.set(settled),
                    None => {
                        let address = email.clone().unwrap_or_default();
                        let phase = phase.clone();
                        spawn_local(async move {
                            let result = api::fetch_newsletter_client(&address).await;
                            phase.set(lookup_phase(result));
                        });
                    }
                }
                || ()
            },
            email.clone(),
        );
    }

    let confirm = {
        let email = email.clone();
        let phase = phase.clone();
        let confirm_error = confirm_error.clone();
        Callback::from(move |_: MouseEvent| {
            let Some(address) = email.clone() else {
                return;
            };
            if *phase != Phase::ConfirmPending {
                return;
            }
            phase.set(Phase::Unsubscribing);
            confirm_error.set(None);
            let phase = phase.clone();
            let confirm_error = confirm_error.clone();
            spawn_local(async move {
                match api::unsubscribe_newsletter(&address).await {
                    Ok(_) => phase.set(Phase::Done),
                    Err(e) => {
                        log!("Unsubscribe failed:", e.to_string());
                        confirm_error.set(Some(unsubscribe_error(&e)));
                        phase.set(Phase::ConfirmPending);
                    }
                }
            });
        })
    };

    let email_text = email.clone().unwrap_or_default();

    let card = match &*phase {
        Phase::MissingEmail => html! {
            <div class="unsub-card">
                <h2 class="danger">{"✕ Email manquant"}</h2>
                <p class="subtitle">{"Aucun email n'a été fourni dans l'URL."}</p>
                <Link<Route> to={Route::Home} classes="unsub-button outline">
                    {"← Retour à l'accueil"}
                </Link<Route>>
            </div>
        },
        Phase::Loading => html! {
            <div class="unsub-card centered">
                <div class="spinner"></div>
                <p class="subtitle">{"Vérification en cours..."}</p>
            </div>
        },
        Phase::Failed(message) => html! {
            <div class="unsub-card">
                <h2 class="danger">{"✕ Désinscription impossible"}</h2>
                <div class="alert danger">{message}</div>
                <Link<Route> to={Route::Home} classes="unsub-button outline">
                    {"← Retour à l'accueil"}
                </Link<Route>>
            </div>
        },
        Phase::AlreadyUnsubscribed => html! {
            <div class="unsub-card">
                <h2>{"✉ Déjà désinscrit"}</h2>
                <p class="subtitle">{"Vous êtes déjà désinscrit de notre newsletter"}</p>
                <div class="alert">
                    {"L'email "}<strong>{email_text.clone()}</strong>{" ne reçoit déjà plus nos newsletters."}
                </div>
                <Link<Route> to={Route::Home} classes="unsub-button outline">
                    {"← Retour à l'accueil"}
                </Link<Route>>
            </div>
        },
        Phase::Done => html! {
            <div class="unsub-card">
                <h2 class="success">{"✓ Désinscription réussie"}</h2>
                <p class="subtitle">{"Vous avez été désinscrit avec succès"}</p>
                <div class="alert success">
                    {"L'email "}<strong>{email_text.clone()}</strong>{" ne recevra plus nos newsletters."}
                </div>
                <p class="note">
                    {"Nous sommes désolés de vous voir partir. Si vous changez d'avis, vous pourrez toujours vous réinscrire depuis notre site web."}
                </p>
                <Link<Route> to={Route::Home} classes="unsub-button">
                    {"Retour à l'accueil"}
                </Link<Route>>
            </div>
        },
        Phase::ConfirmPending | Phase::Unsubscribing => {
            let busy = *phase == Phase::Unsubscribing;
            html! {
                <div class="unsub-card">
                    <h2>{"✉ Se désinscrire de la newsletter"}</h2>
                    <p class="subtitle">{"Confirmez votre désinscription"}</p>
                    if let Some(message) = (*confirm_error).as_ref() {
                        <div class="alert danger">{message}</div>
                    }
                    <div class="email-box">
                        <p class="note">{"Email concerné :"}</p>
                        <p class="email">{email_text.clone()}</p>
                    </div>
                    <div class="note">
                        <p>{"Vous êtes sur le point de vous désinscrire de notre newsletter. Vous ne recevrez plus :"}</p>
                        <ul>
                            <li>{"Nos dernières actualités"}</li>
                            <li>{"Nos conseils et astuces web"}</li>
                            <li>{"Nos offres exclusives"}</li>
                        </ul>
                    </div>
                    <div class="alert">
                        {"💡 Vous pourrez toujours vous réinscrire ultérieurement depuis notre site web."}
                    </div>
                    <div class="unsub-actions">
                        <Link<Route> to={Route::Home} classes="unsub-button outline">
                            {"← Annuler"}
                        </Link<Route>>
                        <button class="unsub-button danger" onclick={confirm} disabled={busy}>
                            { if busy { "Désinscription..." } else { "Me désinscrire" } }
                        </button>
                    </div>
                </div>
            }
        }
    };

    html! {
        <div class="unsub-page">
            <style>
                {r#"
                    .unsub-page {
                        min-height: 100vh;
                        background: linear-gradient(135deg, #faf5ff, #eff6ff);
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        padding: 1rem;
                    }
                    .unsub-card {
                        background: #fff;
                        border-radius: 12px;
                        box-shadow: 0 8px 24px rgba(0, 0, 0, 0.1);
                        padding: 2rem;
                        width: 100%;
                        max-width: 28rem;
                    }
                    .unsub-card.centered { text-align: center; }
                    .unsub-card h2 {
                        font-size: 1.3rem;
                        color: #0f172a;
                        margin: 0 0 0.5rem;
                    }
                    .unsub-card h2.danger { color: #dc2626; }
                    .unsub-card h2.success { color: #16a34a; }
                    .unsub-card .subtitle {
                        color: #64748b;
                        margin-bottom: 1.25rem;
                    }
                    .unsub-card .note {
                        font-size: 0.9rem;
                        color: #475569;
                        margin-bottom: 1rem;
                    }
                    .unsub-card .note ul {
                        margin: 0.5rem 0 0 1.25rem;
                    }
                    .alert {
                        border: 1px solid #e2e8f0;
                        border-radius: 8px;
                        padding: 0.75rem 1rem;
                        font-size: 0.9rem;
                        color: #334155;
                        margin-bottom: 1rem;
                    }
                    .alert.danger {
                        background: #fef2f2;
                        border-color: #fca5a5;
                        color: #b91c1c;
                    }
                    .alert.success {
                        background: #f0fdf4;
                        border-color: #86efac;
                        color: #166534;
                    }
                    .email-box {
                        background: #f8fafc;
                        border-radius: 8px;
                        padding: 1rem;
                        margin-bottom: 1rem;
                    }
                    .email-box .email {
                        font-weight: 600;
                        color: #0f172a;
                    }
                    .unsub-actions {
                        display: flex;
                        gap: 0.75rem;
                    }
                    .unsub-actions > * { flex: 1; }
                    .unsub-button {
                        display: inline-flex;
                        align-items: center;
                        justify-content: center;
                        height: 2.75rem;
                        padding: 0 1rem;
                        border-radius: 8px;
                        border: none;
                        font-size: 0.95rem;
                        font-weight: 600;
                        text-decoration: none;
                        cursor: pointer;
                        width: 100%;
                        box-sizing: border-box;
                        background: #0f172a;
                        color: #fff;
                    }
                    .unsub-button.outline {
                        background: #fff;
                        color: #334155;
                        border: 1px solid #cbd5e1;
                    }
                    .unsub-button.danger { background: #dc2626; }
                    .unsub-button:disabled {
                        opacity: 0.5;
                        cursor: not-allowed;
                    }
                    .spinner {
                        display: inline-block;
                        width: 2rem;
                        height: 2rem;
                        border: 3px solid #e9d5ff;
                        border-top-color: #9333ea;
                        border-radius: 50%;
                        animation: unsub-spin 1s linear infinite;
                        margin-bottom: 1rem;
                    }
                    @keyframes unsub-spin { to { transform: rotate(360deg); } }
                "#}
            </style>
            {card}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(newsletter: bool) -> NewsletterClient {
        NewsletterClient {
            id: 1,
            email: "test@example.com".to_string(),
            newsletter,
        }
    }

    #[test]
    fn missing_query_parameter_settles_without_a_request() {
        assert_eq!(initial_phase(None), Some(Phase::MissingEmail));
    }

    #[test]
    fn empty_query_parameter_settles_without_a_request() {
        assert_eq!(initial_phase(Some("")), Some(Phase::MissingEmail));
    }

    #[test]
    fn present_email_proceeds_to_the_lookup() {
        assert_eq!(initial_phase(Some("test@example.com")), None);
    }

    #[test]
    fn subscribed_client_awaits_confirmation() {
        assert_eq!(lookup_phase(Ok(client(true))), Phase::ConfirmPending);
    }

    #[test]
    fn unsubscribed_client_is_terminal() {
        assert_eq!(lookup_phase(Ok(client(false))), Phase::AlreadyUnsubscribed);
    }

    #[test]
    fn not_found_gets_its_own_message() {
        let phase = lookup_phase(Err(ApiError::Status { code: 404, message: None }));
        assert_eq!(
            phase,
            Phase::Failed("Cet email n'est pas inscrit à notre newsletter.".to_string())
        );
    }

    #[test]
    fn other_statuses_get_the_generic_message() {
        let phase = lookup_phase(Err(ApiError::Status { code: 500, message: None }));
        assert_eq!(
            phase,
            Phase::Failed("Erreur lors de la vérification de votre email.".to_string())
        );
    }

    #[test]
    fn transport_failure_gets_the_connectivity_message() {
        let phase = lookup_phase(Err(ApiError::Network("connection refused".to_string())));
        assert_eq!(
            phase,
            Phase::Failed("Impossible de se connecter au serveur.".to_string())
        );
    }

    #[test]
    fn unsubscribe_failure_prefers_the_server_message() {
        let server = ApiError::Status { code: 400, message: Some("Déjà désinscrit".to_string()) };
        assert_eq!(unsubscribe_error(&server), "Déjà désinscrit");
        let bare = ApiError::Status { code: 500, message: None };
        assert_eq!(unsubscribe_error(&bare), "Erreur lors de la désinscription.");
        let network = ApiError::Network("timeout".to_string());
        assert_eq!(unsubscribe_error(&network), "Impossible de se connecter au serveur.");
    }
}
