use yew::prelude::*;

use crate::content::HERO_SECTION_ID;
use crate::particles::ParticleCanvas;
use crate::theme::Theme;

#[derive(Properties, PartialEq)]
pub struct HeroProps {
    pub theme: Theme,
    pub on_navigate: Callback<&'static str>,
}

#[function_component(Hero)]
pub fn hero(props: &HeroProps) -> Html {
    let hire = props.on_navigate.reform(|_: MouseEvent| "contact");
    let view_projects = props.on_navigate.reform(|_: MouseEvent| "projects");

    html! {
        <section id={HERO_SECTION_ID} class="hero">
            <ParticleCanvas theme={props.theme} />
            <div class="hero-glow"></div>
            <div class="hero-content">
                <div class="badge fade-up accent-pulse">{"⚡ Available for new projects"}</div>
                <h1 class="fade-up-2">
                    {"I Build "}<span class="accent-word">{"Custom"}</span>
                    {" Web & Mobile Solutions "}<span class="accent-word">{"Fast"}</span>
                </h1>
                <p class="hero-desc fade-up-3">
                    {"From idea to launch in days. Full-stack web apps, mobile products, SaaS tools, and custom software — built for startups & businesses that can't afford to wait."}
                </p>
                <div class="btn-row fade-up-4">
                    <button class="btn-primary" onclick={hire}>{"Hire Me →"}</button>
                    <button class="btn-secondary" onclick={view_projects}>{"View Projects"}</button>
                </div>
            </div>
        </section>
    }
}
