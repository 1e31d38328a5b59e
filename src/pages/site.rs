use chrono::Datelike;
use log::error;
use stylist::Style;
use web_sys::{window, ScrollBehavior, ScrollIntoViewOptions};
use yew::prelude::*;

use crate::components::contact_form::ContactForm;
use crate::components::nav::Nav;
use crate::components::scene::SceneCanvas;
use crate::config::{Palette, SiteVariant};
use crate::content::{
    stagger_delay, EXPERTISE, FOUNDER_BLURB, FOUNDER_HEADLINE, MISSION_HEADLINE, MISSION_PARAGRAPHS, SERVICES,
};
use crate::tracker::policy::ActivePolicy;
use crate::tracker::registry::SectionRegistry;

/// CSS custom properties every static stylesheet on the page reads from.
pub fn palette_declarations(palette: &Palette) -> String {
    format!(
        "--background: {}; --foreground: {}; --accent: {}; --accent-soft: {}; --surface: {};",
        palette.background, palette.foreground, palette.accent, palette.accent_soft, palette.surface
    )
}

fn scroll_to_section(id: &str) {
    let Some(element) = window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(id))
    else {
        return;
    };
    let mut options = ScrollIntoViewOptions::new();
    options.behavior(ScrollBehavior::Smooth);
    element.scroll_into_view_with_scroll_into_view_options(&options);
}

#[derive(Properties, PartialEq)]
pub struct SitePageProps {
    pub variant: SiteVariant,
}

#[function_component(SitePage)]
pub fn site_page(props: &SitePageProps) -> Html {
    let variant = &props.variant;
    let registry = use_memo(
        |_| {
            SectionRegistry::page()
                .map_err(|err| error!("section registry rejected, navigation disabled: {}", err))
                .ok()
        },
        (),
    );

    let theme = use_memo(
        |palette| {
            let declarations = palette_declarations(palette);
            let style = format!(
                "{} background-color: var(--background); color: var(--foreground); min-height: 100vh; font-family: 'Orbitron', sans-serif;",
                declarations
            );
            Style::new(style.as_str()).map_err(|err| {
                error!("failed to build theme style: {}", err);
                style
            })
        },
        variant.palette.clone(),
    );

    let (theme_class, inline_style) = match &*theme {
        Ok(style) => (classes!(style.get_class_name().to_string()), None),
        Err(fallback) => (classes!(), Some(fallback.clone())),
    };

    let get_started = Callback::from(|_: MouseEvent| scroll_to_section("contact"));
    let year = chrono::Utc::now().year();

    html! {
        <div class={classes!("site", format!("variant-{}", variant.key), theme_class)} style={inline_style}>
            {
                match &*registry {
                    Some(registry) => html! {
                        <Nav brand={variant.brand.clone()} registry={registry.clone()} policy={ActivePolicy::default()} />
                    },
                    None => html! {},
                }
            }

            <section id="home" class="page-section hero">
                {
                    if variant.show_scene {
                        html! {
                            <SceneCanvas
                                accent={variant.palette.accent.clone()}
                                background={variant.palette.background.clone()}
                            />
                        }
                    } else {
                        html! { <div class="hero-glow"></div> }
                    }
                }
                <div class="hero-content">
                    <h2 class="section-title">{variant.hero_title.clone()}</h2>
                    <p class="hero-subtitle">{variant.hero_subtitle.clone()}</p>
                    <button class="cta-button" onclick={get_started}>{"Get Started"}</button>
                </div>
            </section>

            <section id="about" class="page-section">
                <h2 class="section-title">{variant.about_title.clone()}</h2>
                <div class="card-grid">
                    <div class="card">
                        <div class="founder-mark" aria-hidden="true">{"MARMIK"}</div>
                        <h3>{FOUNDER_HEADLINE}</h3>
                        <p>{FOUNDER_BLURB}</p>
                    </div>
                    <div class="card">
                        <h3>{MISSION_HEADLINE}</h3>
                        { for MISSION_PARAGRAPHS.iter().map(|p| html! { <p>{*p}</p> }) }
                    </div>
                </div>
            </section>

            <section id="services" class="page-section">
                <h2 class="section-title">{"Our Services"}</h2>
                <div class="card-grid">
                    {
                        SERVICES.iter().enumerate().map(|(index, service)| html! {
                            <div
                                key={service.name}
                                class="card service-card"
                                style={format!("animation-delay: {}s;", stagger_delay(index))}
                            >
                                <div class="service-icon">{service.icon}</div>
                                <h3>{service.name}</h3>
                                <p>{service.description}</p>
                            </div>
                        }).collect::<Html>()
                    }
                </div>
            </section>

            <section id="expertise" class="page-section">
                <h2 class="section-title">{"Our Expertise"}</h2>
                <div class="card-grid">
                    {
                        EXPERTISE.iter().map(|area| html! {
                            <div key={area.title} class="card">
                                <h3>{area.title}</h3>
                                <p>{area.blurb}</p>
                                <ul class="highlights">
                                    { for area.highlights.iter().map(|item| html! { <li>{*item}</li> }) }
                                </ul>
                            </div>
                        }).collect::<Html>()
                    }
                </div>
            </section>

            <section id="contact" class="page-section">
                <h2 class="section-title">{"Get in Touch"}</h2>
                <ContactForm />
            </section>

            <footer class="site-footer">
                <p>{format!("© {} {}. All rights reserved.", year, variant.brand)}</p>
                <div class="legal-links">
                    <a href="#">{"Privacy Policy"}</a>
                    <a href="#">{"Terms of Service"}</a>
                </div>
            </footer>

            <style>
                {r#"
                    html {
                        scroll-behavior: smooth;
                    }
                    body {
                        margin: 0;
                    }
                    .page-section {
                        min-height: 100vh;
                        display: flex;
                        flex-direction: column;
                        justify-content: center;
                        align-items: center;
                        padding: 2rem;
                        position: relative;
                        box-sizing: border-box;
                        scroll-margin-top: 80px;
                    }
                    .hero {
                        overflow: hidden;
                    }
                    .scene-canvas {
                        position: absolute;
                        top: 0;
                        left: 0;
                        width: 100%;
                        height: 100%;
                    }
                    .hero-glow {
                        position: absolute;
                        inset: 0;
                        background: radial-gradient(circle at 50% 40%, var(--accent-soft) 0%, transparent 60%);
                        opacity: 0.15;
                    }
                    .hero-content {
                        position: relative;
                        z-index: 1;
                        text-align: center;
                        animation: heroRise 0.8s cubic-bezier(0.34, 1.56, 0.64, 1);
                    }
                    @keyframes heroRise {
                        from { opacity: 0; transform: translateY(50px); }
                        to { opacity: 1; transform: translateY(0); }
                    }
                    .hero-subtitle {
                        font-size: 1.25rem;
                        margin-bottom: 2rem;
                    }
                    .section-title {
                        font-size: 3rem;
                        margin-bottom: 2rem;
                        text-align: center;
                        background: linear-gradient(45deg, var(--accent), var(--accent-soft));
                        -webkit-background-clip: text;
                        -webkit-text-fill-color: transparent;
                    }
                    .cta-button {
                        background-color: var(--accent);
                        color: var(--background);
                        border: none;
                        padding: 0.5rem 1rem;
                        font-size: 1rem;
                        font-weight: bold;
                        border-radius: 5px;
                        cursor: pointer;
                        transition: background-color 0.3s ease, transform 0.2s ease;
                    }
                    .cta-button:hover {
                        background-color: var(--accent-soft);
                        transform: scale(1.05);
                    }
                    .card-grid {
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(250px, 1fr));
                        gap: 2rem;
                        width: 100%;
                        max-width: 1200px;
                    }
                    .card {
                        background-color: var(--surface);
                        border-radius: 10px;
                        padding: 1.5rem;
                        backdrop-filter: blur(5px);
                        border: 1px solid rgba(255, 255, 255, 0.1);
                        transition: transform 0.3s ease, box-shadow 0.3s ease;
                    }
                    .card:hover {
                        transform: translateY(-5px);
                        box-shadow: 0 10px 20px rgba(0, 0, 0, 0.4);
                    }
                    .service-card {
                        opacity: 0;
                        animation: cardIn 0.5s ease-out forwards;
                    }
                    @keyframes cardIn {
                        from { opacity: 0; transform: translateY(50px); }
                        to { opacity: 1; transform: translateY(0); }
                    }
                    .service-icon {
                        font-size: 2.5rem;
                        margin-bottom: 1rem;
                    }
                    .founder-mark {
                        font-size: 3rem;
                        font-weight: bold;
                        text-align: center;
                        color: var(--accent);
                        padding: 2rem 0;
                        animation: founderSway 6s ease-in-out infinite;
                    }
                    @keyframes founderSway {
                        0%, 100% { transform: perspective(400px) rotateX(0deg) rotateY(0deg); }
                        25% { transform: perspective(400px) rotateX(15deg) rotateY(-15deg); }
                        75% { transform: perspective(400px) rotateX(-15deg) rotateY(15deg); }
                    }
                    .highlights {
                        margin-top: 1rem;
                        padding-left: 1.2rem;
                    }
                    .contact-form {
                        display: flex;
                        flex-direction: column;
                        width: 100%;
                        max-width: 500px;
                    }
                    .contact-form input,
                    .contact-form textarea {
                        background-color: rgba(255, 255, 255, 0.1);
                        border: 1px solid rgba(255, 255, 255, 0.2);
                        border-radius: 5px;
                        padding: 0.75rem;
                        margin-bottom: 1rem;
                        color: var(--foreground);
                        font-size: 1rem;
                    }
                    .contact-form textarea {
                        resize: vertical;
                    }
                    .contact-form input:focus,
                    .contact-form textarea:focus {
                        outline: none;
                        border-color: var(--accent);
                    }
                    .contact-ack {
                        margin-top: 1rem;
                        text-align: center;
                    }
                    .site-footer {
                        padding: 2rem;
                        text-align: center;
                        border-top: 1px solid var(--accent);
                        color: var(--accent);
                    }
                    .legal-links a {
                        color: var(--accent-soft);
                        margin: 0 0.5rem;
                    }
                    @media (max-width: 768px) {
                        .section-title {
                            font-size: 2rem;
                        }
                    }
                "#}
            </style>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::variant;

    #[test]
    fn palette_becomes_custom_properties() {
        let palette = variant("crimson").unwrap().palette;
        let declarations = palette_declarations(&palette);
        assert!(declarations.contains("--accent: #ff3e3e;"));
        assert!(declarations.contains("--background: #000000;"));
        assert_eq!(declarations.matches("--").count(), 5);
    }
}
