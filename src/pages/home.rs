//! Landing page: hero, services grid, CTA band, footer, plus the quote
//! wizard and CTA newsletter dialogs. Owns only the dialog visibility flags.

use yew::prelude::*;

use crate::components::footer::Footer;
use crate::components::hero::Hero;
use crate::components::newsletter::NewsletterDialog;
use crate::components::services::ServicesSection;
use crate::quote::wizard::QuoteWizard;

#[function_component(Home)]
pub fn home() -> Html {
    let show_quote = use_state(|| false);
    let show_newsletter = use_state(|| false);

    let open_quote = {
        let show_quote = show_quote.clone();
        Callback::from(move |_| show_quote.set(true))
    };
    let open_quote_click = {
        let show_quote = show_quote.clone();
        Callback::from(move |_: MouseEvent| show_quote.set(true))
    };
    let close_quote = {
        let show_quote = show_quote.clone();
        Callback::from(move |_| show_quote.set(false))
    };
    let open_newsletter = {
        let show_newsletter = show_newsletter.clone();
        Callback::from(move |_: MouseEvent| show_newsletter.set(true))
    };
    let close_newsletter = {
        let show_newsletter = show_newsletter.clone();
        Callback::from(move |_| show_newsletter.set(false))
    };

    html! {
        <div class="home-page">
            <style>
                {r#"
                    .home-page {
                        min-height: 100vh;
                        background: #fff;
                    }
                    .cta-section {
                        padding: 6rem 1.5rem;
                        background: linear-gradient(135deg, #1e1b4b, #581c87, #1e1b4b);
                        text-align: center;
                    }
                    .cta-section h2 {
                        font-size: clamp(2.25rem, 5vw, 3rem);
                        font-weight: 700;
                        color: #fff;
                        margin-bottom: 1.5rem;
                    }
                    .cta-section > div > p {
                        font-size: 1.1rem;
                        color: #cbd5e1;
                        max-width: 42rem;
                        margin: 0 auto 3rem;
                    }
                    .cta-actions {
                        display: flex;
                        flex-wrap: wrap;
                        gap: 1rem;
                        justify-content: center;
                    }
                    .cta-button {
                        padding: 1.1rem 2rem;
                        border: none;
                        border-radius: 9999px;
                        font-size: 1.05rem;
                        font-weight: 600;
                        cursor: pointer;
                        background: #fff;
                        color: #0f172a;
                        box-shadow: 0 12px 36px rgba(0, 0, 0, 0.3);
                    }
                    .cta-button.outline {
                        background: rgba(255, 255, 255, 0.05);
                        border: 2px solid rgba(255, 255, 255, 0.3);
                        color: #fff;
                        backdrop-filter: blur(10px);
                        box-shadow: none;
                    }
                "#}
            </style>

            <Hero on_get_quote={open_quote} />
            <ServicesSection />

            <section class="cta-section">
                <div>
                    <h2>{"Prêt à démarrer votre projet ?"}</h2>
                    <p>{"Obtenez une estimation personnalisée ou restez informé de nos actualités"}</p>
                    <div class="cta-actions">
                        <button class="cta-button" onclick={open_quote_click}>
                            {"Obtenir une estimation gratuite →"}
                        </button>
                        <button class="cta-button outline" onclick={open_newsletter}>
                            {"S'abonner à la newsletter ✉"}
                        </button>
                    </div>
                </div>
            </section>

            <NewsletterDialog open={*show_newsletter} on_close={close_newsletter} />

            <Footer />

            <QuoteWizard open={*show_quote} on_close={close_quote} />
        </div>
    }
}
