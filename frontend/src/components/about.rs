use yew::prelude::*;

use crate::content::{SKILLS, STATS};

#[function_component(About)]
pub fn about() -> Html {
    html! {
        <section id="about">
            <div class="section section-pad">
                <div class="about-grid">
                    <div class="avatar-wrap">
                        <div class="avatar">
                            <span class="avatar-glyph">{"◈"}</span>
                            <span class="avatar-face">{"👨‍💻"}</span>
                        </div>
                        <div class="stats-row">
                            { for STATS.iter().map(|(value, label)| html! {
                                <div key={*label} class="stat">
                                    <div class="stat-num">{*value}</div>
                                    <div class="stat-label">{*label}</div>
                                </div>
                            }) }
                        </div>
                    </div>
                    <div>
                        <div class="section-label">{"About Me"}</div>
                        <h2>{"Fast. Precise. "}<span class="accent">{"Obsessed"}</span>{" with quality."}</h2>
                        <div class="divider"></div>
                        <p class="about-copy">
                            {"I'm a full-stack developer who builds production-grade digital products for startups and businesses — rapidly. My mission: eliminate the months-long agency timelines and deliver polished, scalable solutions that generate real results."}
                        </p>
                        <p class="about-copy">
                            {"With expertise spanning frontend, backend, mobile, and system design, I handle the entire product lifecycle — from concept to deployment and beyond. No bloat, no bureaucracy."}
                        </p>
                        <div>
                            { for SKILLS.iter().map(|skill| html! {
                                <span key={*skill} class="skill-pill">{*skill}</span>
                            }) }
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}
