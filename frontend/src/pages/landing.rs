use std::rc::Rc;

use yew::prelude::*;

use crate::components::animated_section::AnimatedSection;
use crate::components::header::{Anchor, Header};
use crate::components::icon::{Glyph, Icon};
use crate::config::asset_url;
use crate::content::{mailto_href, tel_href, BenefitEntry, Office, ServiceEntry, SiteContent};

#[derive(Properties, PartialEq)]
pub struct LandingProps {
    pub content: Rc<SiteContent>,
}

#[function_component(Landing)]
pub fn landing(props: &LandingProps) -> Html {
    let content = &props.content;
    let hero = &content.hero;
    let contact = &content.contact;

    html! {
        <div class="landing-page">
            <style>{LANDING_CSS}</style>
            <Header brand={content.brand.clone()} />

            <section class="hero">
                <div class="hero-backdrop">
                    <img class="hero-image" src={asset_url(&hero.background)} alt={hero.background_alt.clone()} />
                    <div class="hero-overlay"></div>
                </div>
                <div class="hero-blur"></div>
                <div class="hero-content">
                    <h1 class="hero-title gradient-text rise-in">
                        {&hero.headline}
                        <br />
                        <span class="hero-highlight">{&hero.highlight}</span>
                    </h1>
                    <p class="hero-subtitle rise-in delay-1">{&hero.subtitle}</p>
                    <div class="hero-cta-group rise-in delay-2">
                        <a href={Anchor::Contact.href()} class="btn btn-primary">
                            <span>{&hero.primary_cta}</span>
                            <Glyph icon={Icon::ArrowRight} class={classes!("btn-glyph")} />
                        </a>
                        <a href={Anchor::Services.href()} class="btn btn-outline">
                            {&hero.secondary_cta}
                        </a>
                    </div>
                    <div class="hero-routes fade-in-late">
                        <p class="routes-caption">{&hero.routes_caption}</p>
                        <div class="routes-row">
                            <span class="route-badge route-from">
                                {format!("{} {}", hero.route_from.flag, hero.route_from.label)}
                            </span>
                            <Glyph icon={Icon::ArrowRight} class={classes!("route-arrow")} />
                            <span class="route-badge route-to">
                                {format!("{} {}", hero.route_to.flag, hero.route_to.label)}
                            </span>
                        </div>
                    </div>
                </div>
            </section>

            <div class="sections-backdrop">
                <section id={Anchor::Services.id()} class="page-section">
                    <div class="section-inner">
                        <AnimatedSection class={classes!("section-heading")}>
                            <h2 class="gradient-text">{&content.headings.services}</h2>
                            <p class="section-lead">{&content.headings.services_lead}</p>
                        </AnimatedSection>
                        <div class="services-grid">
                            { for content.services.iter().map(service_card) }
                        </div>
                    </div>
                </section>

                <section class="page-section">
                    <div class="section-inner">
                        <AnimatedSection class={classes!("section-heading")}>
                            <h2 class="gradient-text">{&content.headings.benefits}</h2>
                        </AnimatedSection>
                        <div class="benefits-grid">
                            { for content.benefits.iter().map(benefit_card) }
                        </div>
                    </div>
                </section>

                <section id={Anchor::About.id()} class="page-section">
                    <div class="section-inner narrow">
                        <AnimatedSection>
                            <div class="mission-card">
                                <h2 class="gradient-text">{&content.mission.heading}</h2>
                                <p>{&content.mission.body}</p>
                            </div>
                        </AnimatedSection>
                    </div>
                </section>

                <section id={Anchor::Contact.id()} class="page-section">
                    <div class="section-inner">
                        <AnimatedSection class={classes!("section-heading")}>
                            <h2 class="gradient-text">{&contact.heading}</h2>
                            <p class="section-lead">{&contact.lead}</p>
                        </AnimatedSection>
                        <div class="contact-grid">
                            <AnimatedSection>
                                <div class="contact-cards">
                                    { for contact.offices.iter().map(office_card) }
                                    <div class="card contact-card">
                                        <div class="contact-row">
                                            <Glyph icon={Icon::Mail} class={classes!("row-glyph")} color={AttrValue::Static("#818cf8")} />
                                            <a href={mailto_href(&contact.email)}>{&contact.email}</a>
                                        </div>
                                    </div>
                                </div>
                            </AnimatedSection>
                            <AnimatedSection>
                                <div class="cta-card">
                                    <h3>{&contact.cta.title}</h3>
                                    <p>{&contact.cta.body}</p>
                                    <div class="cta-actions">
                                        <a href={Anchor::Contact.href()} class="btn btn-primary btn-block">
                                            <span>{&contact.cta.primary_label}</span>
                                            <Glyph icon={Icon::ArrowRight} class={classes!("btn-glyph")} />
                                        </a>
                                        <a href={tel_href(&contact.cta.call_number)} class="btn btn-outline btn-block">
                                            {format!("{}: {}", contact.cta.call_label, contact.cta.call_number)}
                                        </a>
                                    </div>
                                </div>
                            </AnimatedSection>
                        </div>
                    </div>
                </section>
            </div>

            <footer class="site-footer">
                <div class="footer-brand">
                    <div class="footer-mark">
                        <Glyph icon={Icon::Truck} />
                    </div>
                    <span class="gradient-text">{&content.brand.name}</span>
                </div>
                <p>{&content.footer.copyright}</p>
            </footer>
        </div>
    }
}

fn service_card(service: &ServiceEntry) -> Html {
    html! {
        <AnimatedSection key={service.title.clone()}>
            <div class="card service-card">
                <div class="service-icon" style={format!("background: {};", service.color_tag.gradient())}>
                    <Glyph icon={service.icon} />
                </div>
                <h3>{&service.title}</h3>
                <p>{&service.description}</p>
            </div>
        </AnimatedSection>
    }
}

fn benefit_card(benefit: &BenefitEntry) -> Html {
    html! {
        <AnimatedSection key={benefit.title.clone()}>
            <div class="benefit-card">
                <div class="benefit-icon">
                    <Glyph icon={benefit.icon} />
                </div>
                <h3>{&benefit.title}</h3>
                <p>{&benefit.description}</p>
            </div>
        </AnimatedSection>
    }
}

fn office_card(office: &Office) -> Html {
    let accent: AttrValue = office.accent.clone().into();

    html! {
        <div key={office.name.clone()} class="card contact-card">
            <h3 style={format!("color: {};", office.accent)}>{&office.name}</h3>
            <div class="contact-rows">
                <div class="contact-row">
                    <Glyph icon={Icon::MapPin} class={classes!("row-glyph")} color={accent.clone()} />
                    <span>{&office.address}</span>
                </div>
                { for office.phones.iter().filter(|phone| !phone.trim().is_empty()).map(|phone| html! {
                    <div class="contact-row">
                        <Glyph icon={Icon::Phone} class={classes!("row-glyph")} color={accent.clone()} />
                        <a href={tel_href(phone)}>{phone}</a>
                    </div>
                }) }
            </div>
        </div>
    }
}

const LANDING_CSS: &str = r#"
    html {
        scroll-behavior: smooth;
    }
    body {
        margin: 0;
        font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
    }
    .landing-page {
        min-height: 100vh;
        background: linear-gradient(to bottom right, #0f172a, #1e3a8a, #1e293b);
        color: #fff;
        overflow-x: hidden;
    }
    .landing-page a {
        color: inherit;
    }
    .gradient-text {
        background: linear-gradient(to right, #60a5fa, #818cf8);
        -webkit-background-clip: text;
        background-clip: text;
        color: transparent;
    }
    section[id] {
        scroll-margin-top: 5rem;
    }

    /* Hero */
    .hero {
        position: relative;
        min-height: 100vh;
        display: flex;
        align-items: center;
        justify-content: center;
        padding: 5rem 1rem 0;
        box-sizing: border-box;
    }
    .hero-backdrop,
    .hero-blur,
    .hero-overlay {
        position: absolute;
        inset: 0;
    }
    .hero-image {
        width: 100%;
        height: 100%;
        object-fit: cover;
        opacity: 0.8;
    }
    .hero-overlay {
        background: linear-gradient(to right, rgba(15, 23, 42, 0.8), rgba(30, 58, 138, 0.6), rgba(30, 41, 59, 0.8));
    }
    .hero-blur {
        backdrop-filter: blur(4px);
        -webkit-backdrop-filter: blur(4px);
    }
    .hero-content {
        position: relative;
        z-index: 10;
        max-width: 72rem;
        margin: 0 auto;
        text-align: center;
    }
    .hero-title {
        font-size: 3rem;
        font-weight: 700;
        margin: 0 0 1.5rem;
        background: linear-gradient(to right, #60a5fa, #818cf8, #22d3ee);
        -webkit-background-clip: text;
        background-clip: text;
    }
    .hero-highlight {
        color: #fff;
        -webkit-text-fill-color: #fff;
    }
    .hero-subtitle {
        font-size: 1.25rem;
        color: #d1d5db;
        max-width: 48rem;
        margin: 0 auto 2rem;
        line-height: 1.6;
    }
    .hero-cta-group {
        display: flex;
        flex-direction: column;
        gap: 1rem;
        justify-content: center;
        align-items: center;
    }
    .hero-routes {
        margin-top: 4rem;
    }
    .routes-caption {
        color: #9ca3af;
        margin-bottom: 1rem;
    }
    .routes-row {
        display: flex;
        align-items: center;
        justify-content: center;
        gap: 1rem;
        font-size: 1.125rem;
    }
    .route-badge {
        padding: 0.5rem 1rem;
        border-radius: 9999px;
    }
    .route-from {
        background: linear-gradient(to right, rgba(59, 130, 246, 0.2), rgba(239, 68, 68, 0.2));
        border: 1px solid rgba(59, 130, 246, 0.3);
    }
    .route-to {
        background: linear-gradient(to right, rgba(239, 68, 68, 0.2), rgba(16, 185, 129, 0.2));
        border: 1px solid rgba(34, 197, 94, 0.3);
    }
    .route-arrow {
        width: 1.5rem;
        height: 1.5rem;
        color: #60a5fa;
    }
    @keyframes riseIn {
        from { opacity: 0; transform: translateY(30px); }
        to { opacity: 1; transform: translateY(0); }
    }
    @keyframes fadeIn {
        from { opacity: 0; }
        to { opacity: 1; }
    }
    .rise-in {
        animation: riseIn 0.8s ease-out both;
    }
    .rise-in.delay-1 {
        animation-delay: 0.2s;
    }
    .rise-in.delay-2 {
        animation-delay: 0.4s;
    }
    .fade-in-late {
        animation: fadeIn 1s ease-out 0.8s both;
    }

    /* Buttons */
    .btn {
        display: inline-flex;
        align-items: center;
        justify-content: center;
        gap: 0.5rem;
        padding: 1rem 2rem;
        border-radius: 9999px;
        font-size: 1.125rem;
        font-weight: 600;
        text-decoration: none;
        box-sizing: border-box;
        transition: transform 0.2s, box-shadow 0.2s, background 0.2s;
    }
    .btn:hover {
        transform: scale(1.05);
    }
    .btn:active {
        transform: scale(0.95);
    }
    .btn-primary {
        background: linear-gradient(to right, #3b82f6, #4f46e5);
        box-shadow: 0 10px 15px rgba(0, 0, 0, 0.3);
    }
    .btn-primary:hover {
        box-shadow: 0 20px 40px rgba(59, 130, 246, 0.4);
    }
    .btn-outline {
        border: 2px solid rgba(255, 255, 255, 0.3);
        backdrop-filter: blur(4px);
    }
    .btn-outline:hover {
        background: rgba(255, 255, 255, 0.1);
    }
    .btn-block {
        width: 100%;
    }
    .btn-glyph {
        width: 1.25rem;
        height: 1.25rem;
    }

    /* Sections */
    .sections-backdrop {
        background: linear-gradient(to bottom right, rgba(30, 41, 59, 0.5), rgba(15, 23, 42, 0.5));
    }
    .page-section {
        padding: 5rem 1rem;
    }
    .section-inner {
        max-width: 80rem;
        margin: 0 auto;
    }
    .section-inner.narrow {
        max-width: 72rem;
    }
    .section-heading {
        text-align: center;
        margin-bottom: 4rem;
    }
    .section-heading h2 {
        font-size: 2.25rem;
        font-weight: 700;
        margin: 0 0 1.5rem;
    }
    .section-lead {
        font-size: 1.25rem;
        color: #d1d5db;
        max-width: 42rem;
        margin: 0 auto;
    }
    .card {
        background: linear-gradient(to bottom right, rgba(30, 41, 59, 0.5), rgba(15, 23, 42, 0.5));
        border: 1px solid rgba(255, 255, 255, 0.1);
        border-radius: 1rem;
        backdrop-filter: blur(4px);
        transition: transform 0.3s, border-color 0.3s;
    }

    .services-grid,
    .benefits-grid,
    .contact-grid {
        display: grid;
        grid-template-columns: 1fr;
        gap: 2rem;
    }
    .service-card {
        padding: 2rem;
        height: 100%;
        box-sizing: border-box;
    }
    .service-card:hover {
        transform: translateY(-10px) scale(1.02);
        border-color: rgba(59, 130, 246, 0.3);
    }
    .service-icon {
        width: 4rem;
        height: 4rem;
        border-radius: 1rem;
        display: flex;
        align-items: center;
        justify-content: center;
        margin-bottom: 1.5rem;
        transition: transform 0.3s;
    }
    .service-card:hover .service-icon {
        transform: scale(1.1);
    }
    .service-icon .glyph,
    .benefit-icon .glyph {
        width: 2rem;
        height: 2rem;
    }
    .service-card h3 {
        font-size: 1.5rem;
        margin: 0 0 1rem;
        transition: color 0.3s;
    }
    .service-card:hover h3 {
        color: #60a5fa;
    }
    .service-card p,
    .contact-card span,
    .contact-card a {
        color: #d1d5db;
        line-height: 1.6;
    }

    .benefit-card {
        text-align: center;
        padding: 1.5rem;
        border-radius: 0.75rem;
        background: linear-gradient(to bottom right, rgba(255, 255, 255, 0.05), rgba(255, 255, 255, 0.1));
        border: 1px solid rgba(255, 255, 255, 0.1);
        backdrop-filter: blur(4px);
        transition: transform 0.3s;
    }
    .benefit-card:hover {
        transform: scale(1.05);
    }
    .benefit-icon {
        width: 4rem;
        height: 4rem;
        border-radius: 9999px;
        margin: 0 auto 1rem;
        display: flex;
        align-items: center;
        justify-content: center;
        background: linear-gradient(to right, #3b82f6, #4f46e5);
    }
    .benefit-card h3 {
        font-size: 1.25rem;
        margin: 0 0 0.5rem;
    }
    .benefit-card p {
        color: #d1d5db;
        font-size: 0.875rem;
    }

    .mission-card {
        text-align: center;
        padding: 3rem;
        border-radius: 1.5rem;
        background: linear-gradient(to right, rgba(30, 41, 59, 0.5), rgba(30, 58, 138, 0.5));
        border: 1px solid rgba(255, 255, 255, 0.1);
        backdrop-filter: blur(4px);
    }
    .mission-card h2 {
        font-size: 1.875rem;
        margin: 0 0 2rem;
    }
    .mission-card p {
        font-size: 1.25rem;
        color: #d1d5db;
        line-height: 1.6;
        max-width: 56rem;
        margin: 0 auto;
    }

    .contact-grid {
        gap: 3rem;
    }
    .contact-cards {
        display: flex;
        flex-direction: column;
        gap: 2rem;
    }
    .contact-card {
        padding: 1.5rem;
    }
    .contact-card:hover {
        transform: scale(1.02);
    }
    .contact-card h3 {
        font-size: 1.5rem;
        margin: 0 0 1rem;
    }
    .contact-rows {
        display: flex;
        flex-direction: column;
        gap: 0.75rem;
    }
    .contact-row {
        display: flex;
        align-items: center;
        gap: 0.75rem;
    }
    .contact-row a {
        text-decoration: none;
    }
    .row-glyph {
        width: 1.25rem;
        height: 1.25rem;
        flex-shrink: 0;
    }
    .cta-card {
        text-align: center;
        padding: 2rem;
        border-radius: 1rem;
        background: linear-gradient(to bottom right, rgba(37, 99, 235, 0.2), rgba(79, 70, 229, 0.2));
        border: 1px solid rgba(59, 130, 246, 0.3);
        backdrop-filter: blur(4px);
    }
    .cta-card h3 {
        font-size: 1.875rem;
        margin: 0 0 1.5rem;
    }
    .cta-card p {
        color: #d1d5db;
        font-size: 1.125rem;
        margin: 0 0 2rem;
    }
    .cta-actions {
        display: flex;
        flex-direction: column;
        gap: 1rem;
    }

    /* Footer */
    .site-footer {
        padding: 3rem 1rem;
        text-align: center;
        border-top: 1px solid rgba(255, 255, 255, 0.1);
        background: rgba(15, 23, 42, 0.5);
    }
    .footer-brand {
        display: flex;
        align-items: center;
        justify-content: center;
        gap: 0.75rem;
        margin-bottom: 1rem;
        font-size: 1.25rem;
        font-weight: 700;
    }
    .footer-mark {
        width: 2rem;
        height: 2rem;
        border-radius: 0.5rem;
        display: flex;
        align-items: center;
        justify-content: center;
        background: linear-gradient(to right, #3b82f6, #4f46e5);
    }
    .footer-mark .glyph {
        width: 1.25rem;
        height: 1.25rem;
    }
    .site-footer p {
        color: #9ca3af;
    }

    @media (min-width: 640px) {
        .hero-cta-group {
            flex-direction: row;
        }
    }
    @media (min-width: 768px) {
        .hero-title {
            font-size: 4.5rem;
        }
        .hero-subtitle {
            font-size: 1.5rem;
        }
        .section-heading h2 {
            font-size: 3rem;
        }
        .mission-card h2 {
            font-size: 2.25rem;
        }
        .mission-card p {
            font-size: 1.5rem;
        }
        .services-grid {
            grid-template-columns: repeat(3, 1fr);
        }
        .benefits-grid {
            grid-template-columns: repeat(2, 1fr);
        }
    }
    @media (min-width: 1024px) {
        .benefits-grid {
            grid-template-columns: repeat(4, 1fr);
        }
        .contact-grid {
            grid-template-columns: repeat(2, 1fr);
        }
    }
"#;
