//! Three-step quote wizard dialog: free-text description (optionally AI
//! analyzed), structured details, contact info, then the estimation request.

use yew::prelude::*;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use wasm_bindgen_futures::spawn_local;
use gloo_timers::future::TimeoutFuture;
use gloo_console::log;

use crate::api;
use crate::quote::draft::{BudgetRange, ProjectType, QuoteDraft, Timeline};

/// How long the success panel stays visible before the dialog closes.
const SUCCESS_CLOSE_MS: u32 = 3_000;

#[derive(Clone, Copy, PartialEq, Eq)]
enum WizardStep {
    Describe,
    Details,
    Contact,
}

impl WizardStep {
    fn number(self) -> u32 {
        match self {
            WizardStep::Describe => 1,
            WizardStep::Details => 2,
            WizardStep::Contact => 3,
        }
    }
}

pub fn can_analyze(draft: &QuoteDraft) -> bool {
    !draft.description.trim().is_empty()
}

pub fn can_continue_details(draft: &QuoteDraft) -> bool {
    draft.project_type.is_some() && !draft.page_count.trim().is_empty()
}

pub fn can_submit_contact(draft: &QuoteDraft) -> bool {
    !draft.full_name.trim().is_empty() && !draft.email.trim().is_empty()
}

#[derive(Properties, PartialEq)]
pub struct QuoteWizardProps {
    pub open: bool,
    pub on_close: Callback<()>,
}

#[function_component(QuoteWizard)]
pub fn quote_wizard(props: &QuoteWizardProps) -> Html {
    let step = use_state(|| WizardStep::Describe);
    let draft = use_state(QuoteDraft::default);
    let processing = use_state(|| false);
    let success = use_state(|| false);
    // Non-blocking notice when the AI analysis fails (manual path stays open).
    let notice = use_state(|| None::<String>);
    // Blocking error on the final submit.
    let error = use_state(|| None::<String>);

    if !props.open {
        return html! {};
    }

    let close = {
        let step = step.clone();
        let draft = draft.clone();
        let notice = notice.clone();
        let error = error.clone();
        let success = success.clone();
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| {
            step.set(WizardStep::Describe);
            draft.set(QuoteDraft::default());
            notice.set(None);
            error.set(None);
            success.set(false);
            on_close.emit(());
        })
    };

    let set_description = {
        let draft = draft.clone();
        Callback::from(move |e: Event| {
            let input: HtmlTextAreaElement = e.target_unchecked_into();
            let mut next = (*draft).clone();
            next.description = input.value();
            draft.set(next);
        })
    };

    let analyze = {
        let step = step.clone();
        let draft = draft.clone();
        let processing = processing.clone();
        let notice = notice.clone();
        Callback::from(move |_: MouseEvent| {
            if *processing || !can_analyze(&draft) {
                return;
            }
            processing.set(true);
            notice.set(None);
            let step = step.clone();
            let draft = draft.clone();
            let processing = processing.clone();
            let notice = notice.clone();
            spawn_local(async move {
                match api::get_ai_suggestions(&draft.description).await {
                    Ok(suggestions) => {
                        log!("AI suggestions received");
                        let mut next = (*draft).clone();
                        next.apply_suggestions(&suggestions);
                        draft.set(next);
                    }
                    Err(e) => {
                        // Analysis failure is never fatal: fall through to the
                        // manual form with a notice.
                        log!("AI analysis failed:", e.to_string());
                        notice.set(Some(
                            "L'analyse a échoué. Veuillez compléter le formulaire manuellement."
                                .to_string(),
                        ));
                    }
                }
                processing.set(false);
                step.set(WizardStep::Details);
            });
        })
    };

    let skip_analysis = {
        let step = step.clone();
        Callback::from(move |_: MouseEvent| step.set(WizardStep::Details))
    };

    let back_to_describe = {
        let step = step.clone();
        Callback::from(move |_: MouseEvent| step.set(WizardStep::Describe))
    };
    let back_to_details = {
        let step = step.clone();
        Callback::from(move |_: MouseEvent| step.set(WizardStep::Details))
    };
    let continue_to_contact = {
        let step = step.clone();
        let draft = draft.clone();
        Callback::from(move |_: MouseEvent| {
            if can_continue_details(&draft) {
                step.set(WizardStep::Contact);
            }
        })
    };

    let set_project_type = {
        let draft = draft.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            let mut next = (*draft).clone();
            next.project_type = ProjectType::from_form_value(&select.value());
            draft.set(next);
        })
    };
    let set_page_count = {
        let draft = draft.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*draft).clone();
            next.page_count = input.value();
            draft.set(next);
        })
    };
    let set_timeline = {
        let draft = draft.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            let mut next = (*draft).clone();
            next.timeline = Timeline::from_label(&select.value());
            draft.set(next);
        })
    };
    let set_budget = {
        let draft = draft.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            let mut next = (*draft).clone();
            next.budget = BudgetRange::from_label(&select.value());
            draft.set(next);
        })
    };

    let set_full_name = {
        let draft = draft.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*draft).clone();
            next.full_name = input.value();
            draft.set(next);
        })
    };
    let set_email = {
        let draft = draft.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*draft).clone();
            next.email = input.value();
            draft.set(next);
        })
    };
    let set_phone = {
        let draft = draft.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*draft).clone();
            next.phone = input.value();
            draft.set(next);
        })
    };
    let set_company = {
        let draft = draft.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*draft).clone();
            next.company = input.value();
            draft.set(next);
        })
    };

    let submit = {
        let step = step.clone();
        let draft = draft.clone();
        let processing = processing.clone();
        let success = success.clone();
        let error = error.clone();
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| {
            if *processing || !can_submit_contact(&draft) {
                return;
            }
            processing.set(true);
            error.set(None);
            let step = step.clone();
            let draft = draft.clone();
            let processing = processing.clone();
            let success = success.clone();
            let error = error.clone();
            let on_close = on_close.clone();
            let request = draft.to_estimation_request();
            spawn_local(async move {
                match api::create_estimation(&request).await {
                    Ok(_) => {
                        processing.set(false);
                        success.set(true);
                        TimeoutFuture::new(SUCCESS_CLOSE_MS).await;
                        success.set(false);
                        step.set(WizardStep::Describe);
                        draft.set(QuoteDraft::default());
                        on_close.emit(());
                    }
                    Err(e) => {
                        log!("Estimation submission failed:", e.to_string());
                        // Entered data stays intact for a user-initiated retry.
                        error.set(Some(
                            "Une erreur est survenue lors de l'envoi de votre demande. Veuillez réessayer."
                                .to_string(),
                        ));
                        processing.set(false);
                    }
                }
            });
        })
    };

    let progress = (*step).number() as f64 / 3.0 * 100.0;
    let stop_propagation = Callback::from(|e: MouseEvent| e.stop_propagation());

    html! {
        <div class="wizard-overlay" onclick={close.clone()}>
            <style>
                {r#"
                    .wizard-overlay {
                        position: fixed;
                        inset: 0;
                        background: rgba(0, 0, 0, 0.5);
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        z-index: 50;
                        padding: 1rem;
                    }
                    .wizard-dialog {
                        background: #fff;
                        border-radius: 16px;
                        padding: 2rem;
                        width: 100%;
                        max-width: 720px;
                        max-height: 90vh;
                        overflow-y: auto;
                        box-shadow: 0 16px 48px rgba(0, 0, 0, 0.25);
                    }
                    .wizard-dialog h2 {
                        font-size: 1.8rem;
                        color: #0f172a;
                        margin: 0;
                    }
                    .wizard-progress {
                        height: 8px;
                        background: #e2e8f0;
                        border-radius: 4px;
                        margin-top: 1rem;
                        overflow: hidden;
                    }
                    .wizard-progress-bar {
                        height: 100%;
                        background: linear-gradient(to right, #3b82f6, #9333ea);
                        transition: width 0.3s ease;
                    }
                    .wizard-step-row {
                        display: flex;
                        justify-content: space-between;
                        align-items: center;
                        margin-top: 0.5rem;
                        color: #475569;
                        font-size: 0.9rem;
                    }
                    .wizard-field { margin-top: 1.25rem; }
                    .wizard-field label {
                        display: block;
                        font-weight: 600;
                        color: #1e293b;
                        margin-bottom: 0.4rem;
                    }
                    .wizard-field textarea {
                        width: 100%;
                        min-height: 12rem;
                        padding: 0.75rem;
                        border: 1px solid #cbd5e1;
                        border-radius: 8px;
                        font-size: 1rem;
                        resize: vertical;
                    }
                    .wizard-field input, .wizard-field select {
                        width: 100%;
                        height: 3rem;
                        padding: 0 0.75rem;
                        border: 1px solid #cbd5e1;
                        border-radius: 8px;
                        font-size: 1rem;
                        background: #fff;
                    }
                    .wizard-grid {
                        display: grid;
                        grid-template-columns: 1fr 1fr;
                        gap: 1.25rem;
                    }
                    @media (max-width: 640px) {
                        .wizard-grid { grid-template-columns: 1fr; }
                    }
                    .wizard-hint {
                        display: flex;
                        gap: 0.75rem;
                        background: #eff6ff;
                        border-radius: 12px;
                        padding: 1rem;
                        color: #334155;
                        margin-top: 1.25rem;
                    }
                    .wizard-notice {
                        background: #fefce8;
                        border: 1px solid #fde047;
                        color: #854d0e;
                        border-radius: 8px;
                        padding: 0.75rem;
                        margin-top: 1rem;
                    }
                    .wizard-error {
                        background: #fef2f2;
                        border: 1px solid #fca5a5;
                        color: #b91c1c;
                        border-radius: 8px;
                        padding: 0.75rem;
                        margin-top: 1rem;
                    }
                    .wizard-actions {
                        display: flex;
                        gap: 1rem;
                        margin-top: 1.5rem;
                    }
                    .wizard-actions button { flex: 1; }
                    .wizard-button {
                        height: 3rem;
                        border: none;
                        border-radius: 10px;
                        font-size: 1rem;
                        font-weight: 600;
                        cursor: pointer;
                        color: #fff;
                        background: linear-gradient(to right, #3b82f6, #9333ea);
                    }
                    .wizard-button:disabled {
                        opacity: 0.5;
                        cursor: not-allowed;
                    }
                    .wizard-button.secondary {
                        background: #fff;
                        color: #334155;
                        border: 1px solid #cbd5e1;
                    }
                    .wizard-button.submit {
                        background: linear-gradient(to right, #22c55e, #059669);
                    }
                    .wizard-success {
                        text-align: center;
                        padding: 3rem 0;
                    }
                    .wizard-success .check { font-size: 4rem; color: #22c55e; }
                    .wizard-success h3 { font-size: 1.8rem; color: #0f172a; margin: 1rem 0 0.5rem; }
                    .wizard-success p { color: #475569; font-size: 1.1rem; }
                "#}
            </style>
            <div class="wizard-dialog" onclick={stop_propagation}>
                <h2>{"Obtenir une estimation gratuite"}</h2>
                <div class="wizard-progress">
                    <div class="wizard-progress-bar" style={format!("width: {}%;", progress)}></div>
                </div>
                <div class="wizard-step-row">
                    <p>{format!("Étape {} sur 3", (*step).number())}</p>
                    if *step == WizardStep::Describe && !*success {
                        <button class="wizard-button secondary" style="flex: none; padding: 0 1rem; height: 2.2rem; font-size: 0.85rem;" onclick={skip_analysis}>
                            {"Suivant"}
                        </button>
                    }
                </div>
                {
                    if *success {
                        html! {
                            <div class="wizard-success">
                                <div class="check">{"✓"}</div>
                                <h3>{"Estimation envoyée !"}</h3>
                                <p>{"Consultez votre email pour voir l'estimation détaillée."}</p>
                            </div>
                        }
                    } else {
                        match *step {
                            WizardStep::Describe => html! {
                                <>
                                    <div class="wizard-hint">
                                        <span>{"✨"}</span>
                                        <p>{"Décrivez votre projet en quelques lignes. Notre IA analysera vos besoins pour pré-remplir le formulaire détaillé."}</p>
                                    </div>
                                    <div class="wizard-field">
                                        <label for="description">{"Décrivez votre projet *"}</label>
                                        <textarea
                                            id="description"
                                            value={draft.description.clone()}
                                            onchange={set_description}
                                            placeholder="Exemple : Je souhaite créer un site e-commerce pour vendre des produits artisanaux. J'ai besoin d'environ 20 pages, d'un système de paiement sécurisé, et d'un design moderne et élégant. Mon budget est d'environ 10 000€..."
                                        />
                                    </div>
                                    <div class="wizard-actions">
                                        <button
                                            class="wizard-button"
                                            onclick={analyze}
                                            disabled={!can_analyze(&draft) || *processing}
                                        >
                                            { if *processing { "Analyse en cours..." } else { "✨ Analyser avec l'IA" } }
                                        </button>
                                    </div>
                                </>
                            },
                            WizardStep::Details => html! {
                                <>
                                    if let Some(text) = (*notice).as_ref() {
                                        <div class="wizard-notice">{text}</div>
                                    }
                                    <div class="wizard-grid" style="margin-top: 1.25rem;">
                                        <div class="wizard-field" style="margin-top: 0;">
                                            <label for="project_type">{"Type de projet *"}</label>
                                            <select id="project_type" onchange={set_project_type}>
                                                <option value="" selected={draft.project_type.is_none()}>{"Sélectionner"}</option>
                                                {
                                                    ProjectType::ALL.iter().map(|t| html! {
                                                        <option
                                                            value={t.form_value()}
                                                            selected={draft.project_type == Some(*t)}
                                                        >
                                                            {t.backend_label()}
                                                        </option>
                                                    }).collect::<Html>()
                                                }
                                            </select>
                                        </div>
                                        <div class="wizard-field" style="margin-top: 0;">
                                            <label for="page_count">{"Nombre de pages/écrans *"}</label>
                                            <input
                                                id="page_count"
                                                type="number"
                                                value={draft.page_count.clone()}
                                                onchange={set_page_count}
                                                placeholder="5"
                                            />
                                        </div>
                                    </div>
                                    <div class="wizard-grid" style="margin-top: 1.25rem;">
                                        <div class="wizard-field" style="margin-top: 0;">
                                            <label for="timeline">{"Délai souhaité *"}</label>
                                            <select id="timeline" onchange={set_timeline}>
                                                <option value="" selected={draft.timeline.is_none()}>{"Sélectionner"}</option>
                                                {
                                                    Timeline::ALL.iter().map(|t| html! {
                                                        <option value={t.label()} selected={draft.timeline == Some(*t)}>
                                                            {t.label()}
                                                        </option>
                                                    }).collect::<Html>()
                                                }
                                            </select>
                                        </div>
                                        <div class="wizard-field" style="margin-top: 0;">
                                            <label for="budget">{"Budget approximatif"}</label>
                                            <select id="budget" onchange={set_budget}>
                                                <option value="" selected={draft.budget.is_none()}>{"Sélectionner"}</option>
                                                {
                                                    BudgetRange::ALL.iter().map(|b| html! {
                                                        <option value={b.label()} selected={draft.budget == Some(*b)}>
                                                            {b.label()}
                                                        </option>
                                                    }).collect::<Html>()
                                                }
                                            </select>
                                        </div>
                                    </div>
                                    <div class="wizard-actions">
                                        <button class="wizard-button secondary" onclick={back_to_describe}>
                                            {"Retour"}
                                        </button>
                                        <button
                                            class="wizard-button"
                                            onclick={continue_to_contact}
                                            disabled={!can_continue_details(&draft)}
                                        >
                                            {"Continuer"}
                                        </button>
                                    </div>
                                </>
                            },
                            WizardStep::Contact => html! {
                                <>
                                    if let Some(text) = (*error).as_ref() {
                                        <div class="wizard-error">{text}</div>
                                    }
                                    <div class="wizard-grid" style="margin-top: 1.25rem;">
                                        <div class="wizard-field" style="margin-top: 0;">
                                            <label for="full_name">{"Nom complet *"}</label>
                                            <input
                                                id="full_name"
                                                value={draft.full_name.clone()}
                                                onchange={set_full_name}
                                                placeholder="Jean Dupont"
                                            />
                                        </div>
                                        <div class="wizard-field" style="margin-top: 0;">
                                            <label for="company">{"Entreprise"}</label>
                                            <input
                                                id="company"
                                                value={draft.company.clone()}
                                                onchange={set_company}
                                                placeholder="Votre entreprise"
                                            />
                                        </div>
                                    </div>
                                    <div class="wizard-grid" style="margin-top: 1.25rem;">
                                        <div class="wizard-field" style="margin-top: 0;">
                                            <label for="email">{"Email *"}</label>
                                            <input
                                                id="email"
                                                type="email"
                                                value={draft.email.clone()}
                                                onchange={set_email}
                                                placeholder="jean@entreprise.fr"
                                            />
                                        </div>
                                        <div class="wizard-field" style="margin-top: 0;">
                                            <label for="phone">{"Téléphone"}</label>
                                            <input
                                                id="phone"
                                                type="tel"
                                                value={draft.phone.clone()}
                                                onchange={set_phone}
                                                placeholder="+33 6 12 34 56 78"
                                            />
                                        </div>
                                    </div>
                                    <div class="wizard-actions">
                                        <button class="wizard-button secondary" onclick={back_to_details}>
                                            {"Retour"}
                                        </button>
                                        <button
                                            class="wizard-button submit"
                                            onclick={submit}
                                            disabled={!can_submit_contact(&draft) || *processing}
                                        >
                                            { if *processing { "Envoi..." } else { "Recevoir mon estimation" } }
                                        </button>
                                    </div>
                                </>
                            },
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
    fn analysis_requires_a_description() {
        let mut draft = QuoteDraft::default();
        assert!(!can_analyze(&draft));
        draft.description = "   ".into();
        assert!(!can_analyze(&draft));
        draft.description = "Un site vitrine pour mon restaurant".into();
        assert!(can_analyze(&draft));
    }

    #[test]
    fn details_step_requires_type_and_page_count() {
        let mut draft = QuoteDraft::default();
        assert!(!can_continue_details(&draft));
        draft.project_type = Some(ProjectType::Showcase);
        assert!(!can_continue_details(&draft));
        draft.page_count = "5".into();
        assert!(can_continue_details(&draft));
    }

    #[test]
    fn contact_step_requires_name_and_email() {
        let mut draft = QuoteDraft::default();
        assert!(!can_submit_contact(&draft));
        draft.full_name = "Jean Dupont".into();
        assert!(!can_submit_contact(&draft));
        draft.email = "jean@entreprise.fr".into();
        assert!(can_submit_contact(&draft));
        draft.full_name = "  ".into();
        assert!(!can_submit_contact(&draft));
    }
}
