use yew::prelude::*;

use crate::content::{Category, Project};

#[derive(Properties, PartialEq)]
pub struct ProjectsProps {
    pub filter: Category,
    pub projects: Vec<&'static Project>,
    pub on_filter: Callback<Category>,
}

fn project_card(project: &Project) -> Html {
    let tile_style = format!(
        "background: linear-gradient(135deg, {0}22, {0}44);",
        project.color
    );
    html! {
        <div key={project.title} class="project-card hover-lift hover-glow">
            <div class="project-img" style={tile_style}>{project.glyph}</div>
            <div class="project-body">
                <div class="project-cat">{project.category.label()}</div>
                <div class="project-title">{project.title}</div>
                <div class="project-desc">{project.description}</div>
                <div class="case-study">{"View Case Study →"}</div>
            </div>
        </div>
    }
}

#[function_component(Projects)]
pub fn projects(props: &ProjectsProps) -> Html {
    html! {
        <section id="projects">
            <div class="section section-pad">
                <div class="section-label">{"Portfolio"}</div>
                <h2>{"Recent "}<span class="accent">{"Work"}</span></h2>
                <div class="divider"></div>
                <div class="filter-row">
                    { for Category::ALL.iter().map(|category| {
                        let category = *category;
                        let onclick = props.on_filter.reform(move |_: MouseEvent| category);
                        html! {
                            <button
                                key={category.label()}
                                class={classes!("filter-btn", (props.filter == category).then_some("active"))}
                                onclick={onclick}
                            >
                                {category.label()}
                            </button>
                        }
                    }) }
                </div>
                <div class="project-grid">
                    { for props.projects.iter().map(|project| project_card(project)) }
                </div>
            </div>
        </section>
    }
}
