use yew::prelude::*;

use crate::content::{BRAND, HERO_SECTION_ID, NAV_LINKS};
use crate::theme::Theme;

#[derive(Properties, PartialEq)]
pub struct NavProps {
    pub theme: Theme,
    pub menu_open: bool,
    pub on_navigate: Callback<&'static str>,
    pub on_toggle_theme: Callback<()>,
    pub on_toggle_menu: Callback<()>,
    pub on_close_menu: Callback<()>,
}

fn nav_items(on_navigate: &Callback<&'static str>, class: &'static str) -> Html {
    NAV_LINKS
        .iter()
        .map(|link| {
            let section_id = link.section_id;
            let onclick = on_navigate.reform(move |_: MouseEvent| section_id);
            html! {
                <li key={link.label} class={class} onclick={onclick}>{link.label}</li>
            }
        })
        .collect()
}

#[function_component(Nav)]
pub fn nav(props: &NavProps) -> Html {
    let to_hero = props.on_navigate.reform(|_: MouseEvent| HERO_SECTION_ID);
    let toggle_theme = props.on_toggle_theme.reform(|_: MouseEvent| ());
    let toggle_menu = props.on_toggle_menu.reform(|_: MouseEvent| ());
    let close_menu = props.on_close_menu.reform(|_: MouseEvent| ());

    html! {
        <>
            <nav class="top-nav">
                <span class="logo" onclick={to_hero}>{BRAND}</span>
                <ul class="nav-links desktop-nav">
                    { nav_items(&props.on_navigate, "nav-link") }
                </ul>
                <div class="nav-actions">
                    <button class="theme-toggle" onclick={toggle_theme}>
                        {props.theme.toggle_label()}
                    </button>
                    <button class="hamburger" aria-label="Menu" onclick={toggle_menu}>
                        <span></span>
                        <span></span>
                        <span></span>
                    </button>
                </div>
            </nav>

            <div class={classes!("mobile-menu", props.menu_open.then_some("open"))}>
                <span class="mobile-menu-close" onclick={close_menu.clone()}>{"✕"}</span>
                <ul class="mobile-links">
                    { nav_items(&props.on_navigate, "nav-link mobile-link") }
                </ul>
            </div>
            {
                if props.menu_open {
                    html! { <div class="menu-overlay" onclick={close_menu}></div> }
                } else {
                    html! {}
                }
            }
        </>
    }
}
