use yew::prelude::*;

use crate::content::TESTIMONIALS;

#[derive(Properties, PartialEq)]
pub struct TestimonialsProps {
    pub index: usize,
    pub on_select: Callback<usize>,
}

#[function_component(Testimonials)]
pub fn testimonials(props: &TestimonialsProps) -> Html {
    let Some(current) = TESTIMONIALS.get(props.index) else {
        return html! {};
    };
    let stars = "★".repeat(current.rating);

    html! {
        <section id="testimonials" class="alt-bg">
            <div class="section section-pad">
                <div class="section-heading">
                    <div class="section-label">{"Client Feedback"}</div>
                    <h2>{"What clients "}<span class="accent">{"say"}</span></h2>
                </div>
                <div class="testimonial-wrap">
                    <div class="quote-mark">{"❝"}</div>
                    <div class="stars">{stars}</div>
                    <p class="quote">{format!("\"{}\"", current.quote)}</p>
                    <div class="author">{current.name}</div>
                    <div class="role">{current.role}</div>
                    <div class="dots">
                        { for (0..TESTIMONIALS.len()).map(|i| {
                            let onclick = props.on_select.reform(move |_: MouseEvent| i);
                            html! {
                                <div
                                    key={i}
                                    class={classes!("dot", (i == props.index).then_some("active"))}
                                    onclick={onclick}
                                ></div>
                            }
                        }) }
                    </div>
                </div>
            </div>
        </section>
    }
}
