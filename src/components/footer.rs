//! Site footer with contact info and the inline newsletter form.

use yew::prelude::*;

use crate::components::newsletter::use_newsletter_signup;

#[function_component(Footer)]
pub fn footer() -> Html {
    let signup = use_newsletter_signup(3_000, None);

    let button_label = if *signup.subscribed {
        "Inscrit !"
    } else if *signup.submitting {
        "Inscription..."
    } else {
        "S'abonner"
    };

    html! {
        <footer class="site-footer">
            <style>
                {r#"
                    .site-footer {
                        background: #020617;
                        color: #fff;
                        padding: 4rem 1.5rem;
                    }
                    .footer-inner {
                        max-width: 80rem;
                        margin: 0 auto;
                    }
                    .footer-grid {
                        display: grid;
                        grid-template-columns: repeat(3, 1fr);
                        gap: 3rem;
                        margin-bottom: 2rem;
                    }
                    @media (max-width: 768px) {
                        .footer-grid { grid-template-columns: 1fr; }
                    }
                    .footer-brand {
                        font-size: 1.5rem;
                        font-weight: 700;
                        margin-bottom: 1rem;
                        background: linear-gradient(to right, #60a5fa, #c084fc);
                        -webkit-background-clip: text;
                        -webkit-text-fill-color: transparent;
                    }
                    .footer-grid h4 {
                        font-weight: 600;
                        margin-bottom: 1rem;
                    }
                    .footer-grid p, .footer-contact span {
                        color: #94a3b8;
                        font-size: 0.9rem;
                    }
                    .footer-contact div {
                        display: flex;
                        gap: 0.75rem;
                        margin-bottom: 0.75rem;
                    }
                    .footer-newsletter form {
                        display: flex;
                        flex-direction: column;
                        gap: 0.5rem;
                    }
                    .footer-newsletter input {
                        height: 2.75rem;
                        padding: 0 0.75rem;
                        border-radius: 8px;
                        border: 1px solid #334155;
                        background: #0f172a;
                        color: #fff;
                        font-size: 0.95rem;
                    }
                    .footer-newsletter input::placeholder { color: #64748b; }
                    .footer-newsletter button {
                        height: 2.75rem;
                        border: none;
                        border-radius: 8px;
                        font-weight: 600;
                        color: #fff;
                        cursor: pointer;
                        background: linear-gradient(to right, #3b82f6, #a855f7);
                    }
                    .footer-newsletter button:disabled {
                        opacity: 0.5;
                        cursor: not-allowed;
                    }
                    .footer-newsletter .form-error {
                        color: #f87171;
                        font-size: 0.85rem;
                    }
                    .footer-bottom {
                        border-top: 1px solid #1e293b;
                        padding-top: 2rem;
                        text-align: center;
                        color: #64748b;
                        font-size: 0.9rem;
                    }
                "#}
            </style>
            <div class="footer-inner">
                <div class="footer-grid">
                    <div>
                        <h3 class="footer-brand">{"Axynis"}</h3>
                        <p>{"Création d'applications et sites web sur mesure"}</p>
                    </div>
                    <div class="footer-contact">
                        <h4>{"Contact"}</h4>
                        <div><span>{"✉"}</span><span>{"contact@studio.fr"}</span></div>
                        <div><span>{"📞"}</span><span>{"+33 1 23 45 67 89"}</span></div>
                        <div><span>{"📍"}</span><span>{"Paris, France"}</span></div>
                    </div>
                    <div class="footer-newsletter">
                        <h4>{"Newsletter"}</h4>
                        <p style="margin-bottom: 1rem;">{"Restez informé de nos dernières actualités"}</p>
                        <form onsubmit={signup.submit.clone()}>
                            <input
                                type="email"
                                placeholder="Votre email"
                                value={(*signup.email).clone()}
                                onchange={signup.set_email.clone()}
                                required=true
                            />
                            if let Some(text) = (*signup.error).as_ref() {
                                <div class="form-error">{text}</div>
                            }
                            <button type="submit" disabled={*signup.submitting}>
                                {button_label}
                            </button>
                        </form>
                    </div>
                </div>
                <div class="footer-bottom">
                    <p>{"© 2025 Axynis. Tous droits réservés."}</p>
                </div>
            </div>
        </footer>
    }
}
