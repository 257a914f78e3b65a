//! Static services grid.

use yew::prelude::*;

struct Service {
    icon: &'static str,
    title: &'static str,
    description: &'static str,
}

const SERVICES: [Service; 6] = [
    Service {
        icon: "🌐",
        title: "Sites Vitrine",
        description: "Sites web élégants et performants pour présenter votre entreprise",
    },
    Service {
        icon: "🛒",
        title: "E-commerce",
        description: "Boutiques en ligne complètes avec paiement sécurisé et gestion de stock",
    },
    Service {
        icon: "📱",
        title: "Applications Mobiles",
        description: "Apps iOS et Android natives ou cross-platform",
    },
    Service {
        icon: "⚡",
        title: "Applications Web",
        description: "Plateformes web complexes et outils métier sur mesure",
    },
    Service {
        icon: "🎨",
        title: "Design UI/UX",
        description: "Interfaces modernes et expériences utilisateur optimales",
    },
    Service {
        icon: "🛡️",
        title: "Maintenance & Support",
        description: "Accompagnement continu et évolutions de votre solution",
    },
];

#[function_component(ServicesSection)]
pub fn services_section() -> Html {
    html! {
        <section class="services-section">
            <style>
                {r#"
                    .services-section {
                        padding: 6rem 1.5rem;
                        background: #f9fafb;
                    }
                    .services-inner {
                        max-width: 80rem;
                        margin: 0 auto;
                    }
                    .services-header {
                        text-align: center;
                        margin-bottom: 4rem;
                    }
                    .services-header h2 {
                        font-size: clamp(2.25rem, 5vw, 3rem);
                        font-weight: 700;
                        color: #0f172a;
                        margin-bottom: 1rem;
                    }
                    .services-header p {
                        font-size: 1.1rem;
                        color: #475569;
                        max-width: 42rem;
                        margin: 0 auto;
                    }
                    .services-grid {
                        display: grid;
                        grid-template-columns: repeat(3, 1fr);
                        gap: 1.5rem;
                    }
                    @media (max-width: 1024px) {
                        .services-grid { grid-template-columns: repeat(2, 1fr); }
                    }
                    @media (max-width: 640px) {
                        .services-grid { grid-template-columns: 1fr; }
                    }
                    .service-card {
                        background: #fff;
                        border-radius: 16px;
                        padding: 2rem;
                        box-shadow: 0 4px 12px rgba(0, 0, 0, 0.08);
                        transition: transform 0.3s ease, box-shadow 0.3s ease;
                    }
                    .service-card:hover {
                        transform: translateY(-8px);
                        box-shadow: 0 12px 28px rgba(0, 0, 0, 0.12);
                    }
                    .service-card .icon {
                        font-size: 2.2rem;
                        margin-bottom: 1.5rem;
                    }
                    .service-card h3 {
                        font-size: 1.25rem;
                        font-weight: 700;
                        color: #0f172a;
                        margin-bottom: 0.75rem;
                    }
                    .service-card p {
                        color: #475569;
                        line-height: 1.6;
                    }
                "#}
            </style>
            <div class="services-inner">
                <div class="services-header">
                    <h2>{"Nos Services"}</h2>
                    <p>{"Des solutions complètes pour tous vos besoins digitaux"}</p>
                </div>
                <div class="services-grid">
                    {
                        SERVICES.iter().map(|service| html! {
                            <div class="service-card">
                                <div class="icon">{service.icon}</div>
                                <h3>{service.title}</h3>
                                <p>{service.description}</p>
                            </div>
                        }).collect::<Html>()
                    }
                </div>
            </div>
        </section>
    }
}
