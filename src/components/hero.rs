//! Landing hero: headline, the two primary actions and the service icon row.

use yew::prelude::*;

use crate::components::newsletter::NewsletterDialog;

#[derive(Properties, PartialEq)]
pub struct HeroProps {
    pub on_get_quote: Callback<()>,
}

#[function_component(Hero)]
pub fn hero(props: &HeroProps) -> Html {
    let show_newsletter = use_state(|| false);

    let open_quote = {
        let on_get_quote = props.on_get_quote.clone();
        Callback::from(move |_: MouseEvent| on_get_quote.emit(()))
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
        <header class="hero">
            <style>
                {r#"
                    .hero {
                        position: relative;
                        min-height: 100vh;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        overflow: hidden;
                        background: linear-gradient(135deg, #1e1b4b, #581c87, #1e1b4b);
                        text-align: center;
                    }
                    .hero-content {
                        position: relative;
                        z-index: 10;
                        max-width: 80rem;
                        margin: 0 auto;
                        padding: 5rem 1.5rem;
                    }
                    .hero h1 {
                        font-size: clamp(3rem, 8vw, 5.5rem);
                        font-weight: 700;
                        color: #fff;
                        letter-spacing: -0.02em;
                        margin-bottom: 1.5rem;
                    }
                    .hero h1 .accent {
                        display: block;
                        background: linear-gradient(to right, #60a5fa, #c084fc, #f472b6);
                        -webkit-background-clip: text;
                        -webkit-text-fill-color: transparent;
                    }
                    .hero-subtitle {
                        font-size: 1.25rem;
                        color: #cbd5e1;
                        max-width: 48rem;
                        margin: 0 auto 3rem;
                        line-height: 1.6;
                    }
                    .hero-cta-group {
                        display: flex;
                        flex-wrap: wrap;
                        gap: 1rem;
                        justify-content: center;
                    }
                    .hero-cta {
                        padding: 1.1rem 2rem;
                        border: none;
                        border-radius: 9999px;
                        font-size: 1rem;
                        font-weight: 600;
                        color: #fff;
                        cursor: pointer;
                        background: linear-gradient(to right, #3b82f6, #9333ea);
                        box-shadow: 0 12px 36px rgba(147, 51, 234, 0.5);
                        transition: transform 0.3s ease;
                    }
                    .hero-cta:hover { transform: scale(1.05); }
                    .hero-cta.outline {
                        background: rgba(255, 255, 255, 0.1);
                        border: 2px solid rgba(255, 255, 255, 0.3);
                        box-shadow: none;
                        backdrop-filter: blur(10px);
                    }
                    .hero-services {
                        display: grid;
                        grid-template-columns: repeat(3, 1fr);
                        gap: 1.5rem;
                        margin-top: 5rem;
                        max-width: 56rem;
                        margin-left: auto;
                        margin-right: auto;
                    }
                    @media (max-width: 640px) {
                        .hero-services { grid-template-columns: repeat(2, 1fr); }
                    }
                    .hero-service-card {
                        background: rgba(255, 255, 255, 0.05);
                        border: 1px solid rgba(255, 255, 255, 0.1);
                        border-radius: 16px;
                        padding: 1.5rem;
                        backdrop-filter: blur(10px);
                        color: #fff;
                        font-weight: 500;
                    }
                    .hero-service-card .icon {
                        font-size: 1.8rem;
                        margin-bottom: 1rem;
                    }
                "#}
            </style>
            <div class="hero-content">
                <h1>
                    {"Transformez vos"}
                    <span class="accent">{"idées en réalité"}</span>
                </h1>
                <p class="hero-subtitle">
                    {"Développement d'applications et sites web sur mesure. De la conception à la mise en ligne, nous créons des solutions digitales qui font la différence."}
                </p>
                <div class="hero-cta-group">
                    <button class="hero-cta" onclick={open_quote}>
                        {"Obtenir une estimation gratuite →"}
                    </button>
                    <button class="hero-cta outline" onclick={open_newsletter}>
                        {"S'abonner à la newsletter ✉"}
                    </button>
                </div>
                <div class="hero-services">
                    <div class="hero-service-card">
                        <div class="icon">{"💻"}</div>
                        <p>{"Sites Web"}</p>
                    </div>
                    <div class="hero-service-card">
                        <div class="icon">{"📱"}</div>
                        <p>{"Applications"}</p>
                    </div>
                    <div class="hero-service-card">
                        <div class="icon">{"✨"}</div>
                        <p>{"Solutions IA"}</p>
                    </div>
                </div>
            </div>
            <NewsletterDialog open={*show_newsletter} on_close={close_newsletter} />
        </header>
    }
}
