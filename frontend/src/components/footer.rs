use yew::prelude::*;

use crate::content::{BRAND, NAV_LINKS};
use crate::utils::dom::current_year;

#[derive(Properties, PartialEq)]
pub struct FooterProps {
    pub on_navigate: Callback<&'static str>,
}

#[function_component(Footer)]
pub fn footer(props: &FooterProps) -> Html {
    html! {
        <footer class="site-footer">
            <span class="footer-logo">{BRAND}</span>
            <div class="footer-links">
                { for NAV_LINKS.iter().map(|link| {
                    let section_id = link.section_id;
                    let onclick = props.on_navigate.reform(move |_: MouseEvent| section_id);
                    html! {
                        <span key={link.label} class="footer-link" onclick={onclick}>{link.label}</span>
                    }
                }) }
            </div>
            <div>{format!("© {} DevStudio. Built with precision. Delivered with speed.", current_year())}</div>
        </footer>
    }
}
