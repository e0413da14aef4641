use yew::prelude::*;

use crate::content::SERVICES;

#[function_component(Services)]
pub fn services() -> Html {
    html! {
        <section id="services" class="alt-bg">
            <div class="section section-pad">
                <div class="section-label">{"What I Offer"}</div>
                <h2>{"Services built for "}<span class="accent">{"speed & scale"}</span></h2>
                <div class="divider"></div>
                <div class="services-grid">
                    { for SERVICES.iter().map(|service| html! {
                        <div key={service.title} class="service-card hover-lift hover-glow">
                            <div class="service-watermark">{service.icon}</div>
                            <div class="service-icon">{service.icon}</div>
                            <div class="service-title">{service.title}</div>
                            <div class="service-desc">{service.description}</div>
                            <span class="service-time">{format!("⏱ Delivered in {}", service.turnaround)}</span>
                        </div>
                    }) }
                </div>
            </div>
        </section>
    }
}
