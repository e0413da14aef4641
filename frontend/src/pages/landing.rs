use yew::prelude::*;

use crate::carousel::use_carousel_ticker;
use crate::components::about::About;
use crate::components::contact::Contact;
use crate::components::footer::Footer;
use crate::components::hero::Hero;
use crate::components::nav::Nav;
use crate::components::projects::Projects;
use crate::components::services::Services;
use crate::components::testimonials::Testimonials;
use crate::config;
use crate::content::Category;
use crate::state::{FormField, ViewAction, ViewState};
use crate::utils::dom::scroll_to_section;

const PAGE_CSS: &str = r#"
    @import url('https://fonts.googleapis.com/css2?family=DM+Mono:wght@400;500&family=Playfair+Display:ital,wght@0,700;1,700&display=swap');
    *, *::before, *::after { box-sizing: border-box; margin: 0; padding: 0; }
    html { scroll-behavior: smooth; }
    body { overflow-x: hidden; }
    ::-webkit-scrollbar { width: 4px; }
    ::-webkit-scrollbar-track { background: transparent; }
    ::-webkit-scrollbar-thumb { background: var(--accent); border-radius: 2px; }

    .landing-root {
        font-family: 'DM Mono', 'Courier New', monospace;
        background: var(--bg);
        color: var(--fg);
        min-height: 100vh;
        transition: all 0.3s;
        overflow-x: hidden;
    }
    .accent { color: var(--accent); }
    .alt-bg { background: var(--second-bg); }

    .top-nav {
        position: fixed; top: 0; left: 0; right: 0; z-index: 100;
        display: flex; align-items: center; justify-content: space-between;
        padding: 1rem 2.5rem;
        background: var(--nav-bg);
        backdrop-filter: blur(12px);
        border-bottom: 1px solid var(--border);
    }
    .logo { font-size: 1.1rem; font-weight: 700; color: var(--accent); letter-spacing: 0.05em; cursor: pointer; }
    .nav-links { display: flex; gap: 2rem; list-style: none; }
    .nav-link {
        color: var(--muted); cursor: pointer; font-size: 0.85rem; letter-spacing: 0.1em;
        text-transform: uppercase; transition: color 0.2s; font-weight: 500;
    }
    .nav-link:hover, .footer-link:hover { color: var(--accent) !important; }
    .nav-actions { display: flex; gap: 1rem; align-items: center; }
    .theme-toggle {
        background: var(--accent-dim); border: 1px solid var(--border); color: var(--accent);
        padding: 0.4rem 0.9rem; border-radius: 20px; cursor: pointer; font-size: 0.8rem; font-family: inherit;
    }
    .hamburger {
        display: none; flex-direction: column; gap: 4px; cursor: pointer;
        background: none; border: none; padding: 4px;
    }
    .hamburger span { width: 22px; height: 2px; background: var(--accent); display: block; }

    .mobile-menu {
        position: fixed; top: 0; right: 0; bottom: 0; width: 260px; z-index: 200;
        background: var(--card-bg); border-left: 1px solid var(--border);
        display: flex; flex-direction: column; padding: 5rem 2rem 2rem; gap: 1.5rem;
        transform: translateX(100%); transition: transform 0.3s;
    }
    .mobile-menu.open { transform: translateX(0); }
    .mobile-menu-close { position: absolute; top: 1.5rem; right: 1.5rem; cursor: pointer; color: var(--accent); font-size: 1.2rem; }
    .mobile-links { list-style: none; display: flex; flex-direction: column; gap: 1.5rem; }
    .mobile-link { font-size: 1rem; }
    .menu-overlay { position: fixed; inset: 0; z-index: 150; background: rgba(0,0,0,0.5); }

    .hero {
        position: relative; min-height: 100vh; display: flex; align-items: center; justify-content: center;
        text-align: center; overflow: hidden; padding-top: 5rem;
    }
    .particle-canvas { position: absolute; inset: 0; width: 100%; height: 100%; pointer-events: none; }
    .hero-glow { position: absolute; inset: 0; background: var(--hero-glow); }
    .hero-content { position: relative; z-index: 2; max-width: 820px; padding: 0 1.5rem; }
    .badge {
        display: inline-block; background: var(--accent-dim); border: 1px solid var(--border); color: var(--accent);
        padding: 0.35rem 1rem; border-radius: 20px; font-size: 0.75rem; letter-spacing: 0.2em;
        text-transform: uppercase; margin-bottom: 1.5rem;
    }
    .hero h1 {
        font-size: clamp(2.5rem, 7vw, 5.5rem); font-family: 'Playfair Display', Georgia, serif;
        font-weight: 700; line-height: 1.05; margin-bottom: 1.5rem; letter-spacing: -0.02em;
    }
    .accent-word { color: var(--accent); font-style: italic; }
    .hero-desc {
        font-size: clamp(1rem, 2vw, 1.2rem); color: var(--muted);
        max-width: 560px; margin: 0 auto 2.5rem; line-height: 1.7;
    }
    .btn-row { display: flex; gap: 1rem; justify-content: center; flex-wrap: wrap; }
    .btn-primary {
        background: var(--accent); color: var(--on-accent); padding: 0.85rem 2rem; border-radius: 6px;
        border: none; cursor: pointer; font-family: inherit; font-weight: 700; font-size: 0.9rem;
        letter-spacing: 0.05em; transition: transform 0.2s, box-shadow 0.2s;
    }
    .btn-primary:hover { transform: translateY(-2px); box-shadow: 0 8px 24px var(--accent-dim); }
    .btn-block { width: 100%; padding: 1rem; }
    .btn-secondary {
        background: transparent; color: var(--accent); padding: 0.85rem 2rem; border-radius: 6px;
        border: 1px solid var(--accent); cursor: pointer; font-family: inherit; font-weight: 700;
        font-size: 0.9rem; letter-spacing: 0.05em; transition: background 0.2s;
    }
    .btn-secondary:hover { background: var(--accent-dim) !important; }

    .section { padding: 6rem 2.5rem; max-width: 1100px; margin: 0 auto; }
    .section-heading { text-align: center; margin-bottom: 3rem; }
    .section-label {
        font-size: 0.75rem; color: var(--accent); letter-spacing: 0.25em;
        text-transform: uppercase; margin-bottom: 0.75rem; font-weight: 600;
    }
    .section h2 {
        font-size: clamp(2rem, 4vw, 3rem); font-family: 'Playfair Display', Georgia, serif;
        font-weight: 700; line-height: 1.15; margin-bottom: 1rem;
    }
    .divider { width: 40px; height: 2px; background: var(--accent); margin-bottom: 3rem; }
    .hover-lift { transition: transform 0.2s, border-color 0.2s, box-shadow 0.2s; }
    .hover-lift:hover { transform: translateY(-4px); box-shadow: 0 20px 40px rgba(0,0,0,0.3); }
    .hover-glow:hover { border-color: var(--accent) !important; }

    .about-grid { display: grid; grid-template-columns: 1fr 1.6fr; gap: 4rem; align-items: center; }
    .avatar-wrap { position: relative; }
    .avatar {
        width: 100%; aspect-ratio: 1; border-radius: 12px;
        background: linear-gradient(135deg, var(--accent-dim), var(--avatar-tint));
        display: flex; align-items: center; justify-content: center;
        border: 1px solid var(--border); position: relative; overflow: hidden;
    }
    .avatar-glyph { font-size: 8rem; opacity: 0.15; position: absolute; }
    .avatar-face { font-size: 4rem; z-index: 1; position: relative; }
    .stats-row { display: grid; grid-template-columns: repeat(3, 1fr); gap: 1rem; margin-top: 2rem; }
    .stat { text-align: center; padding: 1rem; background: var(--card-bg); border-radius: 8px; border: 1px solid var(--border); }
    .stat-num { font-size: 1.8rem; font-weight: 700; color: var(--accent); font-family: 'Playfair Display', Georgia, serif; }
    .stat-label { font-size: 0.7rem; color: var(--muted); text-transform: uppercase; letter-spacing: 0.1em; }
    .about-copy { color: var(--muted); line-height: 1.8; margin-bottom: 1.25rem; font-size: 0.95rem; }
    .skill-pill {
        display: inline-block; background: var(--accent-dim); border: 1px solid var(--border); color: var(--accent);
        padding: 0.3rem 0.8rem; border-radius: 4px; font-size: 0.75rem; margin: 0.25rem; letter-spacing: 0.05em;
    }

    .services-grid { display: grid; grid-template-columns: repeat(auto-fit, minmax(300px, 1fr)); gap: 1.25rem; }
    .service-card {
        background: var(--card-bg); border: 1px solid var(--border); border-radius: 10px;
        padding: 1.75rem; position: relative; overflow: hidden;
    }
    .service-watermark { position: absolute; top: -20px; right: -20px; font-size: 6rem; opacity: 0.04; color: var(--accent); }
    .service-icon { font-size: 1.8rem; color: var(--accent); margin-bottom: 1rem; }
    .service-title { font-size: 1.05rem; font-weight: 700; margin-bottom: 0.5rem; }
    .service-desc { font-size: 0.85rem; color: var(--muted); line-height: 1.6; margin-bottom: 1rem; }
    .service-time {
        font-size: 0.7rem; color: var(--accent); background: var(--accent-dim);
        padding: 0.25rem 0.6rem; border-radius: 4px; letter-spacing: 0.1em; display: inline-block;
    }

    .filter-row { display: flex; gap: 0.5rem; margin-bottom: 2rem; flex-wrap: wrap; }
    .filter-btn {
        background: transparent; color: var(--muted); border: 1px solid var(--border);
        padding: 0.4rem 1rem; border-radius: 4px; cursor: pointer; font-family: inherit;
        font-size: 0.8rem; letter-spacing: 0.1em; transition: all 0.2s;
    }
    .filter-btn.active { background: var(--accent); color: var(--on-accent); border-color: var(--accent); }
    .project-grid { display: grid; grid-template-columns: repeat(auto-fill, minmax(310px, 1fr)); gap: 1.25rem; }
    .project-card { background: var(--card-bg); border: 1px solid var(--border); border-radius: 10px; overflow: hidden; cursor: pointer; }
    .project-img {
        height: 160px; display: flex; align-items: center; justify-content: center;
        font-size: 4rem; border-bottom: 1px solid var(--border);
    }
    .project-body { padding: 1.25rem; }
    .project-cat { font-size: 0.7rem; color: var(--accent); letter-spacing: 0.15em; text-transform: uppercase; margin-bottom: 0.4rem; }
    .project-title { font-size: 1rem; font-weight: 700; margin-bottom: 0.4rem; }
    .project-desc { font-size: 0.82rem; color: var(--muted); line-height: 1.5; }
    .case-study { margin-top: 1rem; font-size: 0.78rem; color: var(--accent); cursor: pointer; }

    .testimonial-wrap {
        background: var(--second-bg); border-radius: 16px; border: 1px solid var(--border);
        padding: 3rem; position: relative; overflow: hidden; max-width: 720px; margin: 0 auto;
    }
    .quote-mark { position: absolute; top: 1.5rem; right: 2rem; font-size: 4rem; opacity: 0.07; color: var(--accent); }
    .stars { color: var(--accent); font-size: 0.9rem; margin-bottom: 1rem; }
    .quote { font-size: clamp(1rem, 2vw, 1.2rem); line-height: 1.7; font-style: italic; margin-bottom: 1.5rem; }
    .author { font-weight: 700; font-size: 0.9rem; }
    .role { font-size: 0.8rem; color: var(--muted); }
    .dots { display: flex; gap: 0.5rem; justify-content: center; margin-top: 2rem; }
    .dot { width: 8px; height: 8px; border-radius: 4px; background: var(--border); transition: all 0.3s; cursor: pointer; }
    .dot.active { width: 20px; background: var(--accent); }

    .contact-grid { display: grid; grid-template-columns: 1fr 1fr; gap: 4rem; align-items: start; }
    .contact-copy { color: var(--muted); line-height: 1.7; margin-bottom: 1.5rem; font-size: 0.9rem; }
    .contact-detail { color: var(--muted); font-size: 0.85rem; margin-bottom: 0.5rem; }
    .social-row { display: flex; gap: 1rem; margin-top: 1.5rem; }
    .social-btn {
        background: var(--accent-dim); border: 1px solid var(--border); color: var(--accent);
        padding: 0.6rem 1.2rem; border-radius: 6px; cursor: pointer; font-size: 0.8rem;
        font-family: inherit; transition: background 0.2s; text-decoration: none; display: inline-block;
    }
    .social-btn:hover { background: var(--accent) !important; color: var(--on-accent) !important; }
    .contact-form { display: flex; flex-direction: column; gap: 1rem; }
    .contact-form input, .contact-form textarea {
        background: var(--card-bg); border: 1px solid var(--border); border-radius: 6px;
        padding: 0.85rem 1rem; color: var(--fg); font-family: inherit; font-size: 0.9rem;
        outline: none; transition: border-color 0.2s;
    }
    .contact-form textarea { min-height: 140px; resize: vertical; }
    .contact-form input:focus, .contact-form textarea:focus { border-color: var(--accent) !important; }
    .success-msg {
        background: var(--accent-dim); border: 1px solid var(--accent); border-radius: 8px;
        padding: 1.5rem; text-align: center; color: var(--accent); font-weight: 600;
    }
    .success-check { font-size: 2rem; margin-bottom: 0.5rem; }

    .site-footer {
        background: var(--footer-bg); color: var(--footer-fg); padding: 2.5rem;
        text-align: center; border-top: 1px solid var(--border); font-size: 0.8rem;
    }
    .footer-logo { color: var(--accent); font-weight: 700; font-size: 1.1rem; display: block; margin-bottom: 0.75rem; }
    .footer-links { display: flex; gap: 1.5rem; justify-content: center; margin-bottom: 1.5rem; flex-wrap: wrap; }
    .footer-link { cursor: pointer; transition: color 0.2s; font-size: 0.78rem; letter-spacing: 0.1em; text-transform: uppercase; }

    @keyframes fadeUp { from { opacity: 0; transform: translateY(24px); } to { opacity: 1; transform: translateY(0); } }
    @keyframes pulse { 0%, 100% { opacity: 0.6; } 50% { opacity: 1; } }
    .fade-up { animation: fadeUp 0.8s ease forwards; }
    .fade-up-2 { animation: fadeUp 0.8s 0.15s ease both; }
    .fade-up-3 { animation: fadeUp 0.8s 0.3s ease both; }
    .fade-up-4 { animation: fadeUp 0.8s 0.45s ease both; }
    .accent-pulse { animation: pulse 2s infinite; }

    @media (max-width: 768px) {
        .desktop-nav { display: none !important; }
        .hamburger { display: flex !important; }
        .about-grid { grid-template-columns: 1fr !important; gap: 2rem !important; }
        .contact-grid { grid-template-columns: 1fr !important; gap: 2rem !important; }
    }
    @media (max-width: 640px) {
        .section-pad { padding: 4rem 1.25rem !important; }
    }
"#;

#[function_component(LandingPage)]
pub fn landing_page() -> Html {
    let state = use_reducer(ViewState::default);

    use_carousel_ticker(state.dispatcher(), config::carousel_interval_ms());

    let on_navigate = {
        let state = state.clone();
        Callback::from(move |section_id: &'static str| {
            scroll_to_section(section_id);
            state.dispatch(ViewAction::CloseMenu);
        })
    };
    let on_toggle_theme = {
        let state = state.clone();
        Callback::from(move |_: ()| {
            log::debug!("Switching theme away from {:?}", state.theme);
            state.dispatch(ViewAction::ToggleTheme);
        })
    };
    let on_toggle_menu = {
        let state = state.clone();
        Callback::from(move |_: ()| state.dispatch(ViewAction::ToggleMenu))
    };
    let on_close_menu = {
        let state = state.clone();
        Callback::from(move |_: ()| state.dispatch(ViewAction::CloseMenu))
    };
    let on_filter = {
        let state = state.clone();
        Callback::from(move |category: Category| state.dispatch(ViewAction::SetFilter(category)))
    };
    let on_select_testimonial = {
        let state = state.clone();
        Callback::from(move |index: usize| state.dispatch(ViewAction::SelectTestimonial(index)))
    };
    let on_edit = {
        let state = state.clone();
        Callback::from(move |(field, value): (FormField, String)| {
            state.dispatch(ViewAction::EditField(field, value))
        })
    };
    let on_submit = {
        let state = state.clone();
        Callback::from(move |_: ()| {
            log::debug!("Contact form submitted");
            state.dispatch(ViewAction::Submit);
        })
    };

    let palette = state.palette();

    html! {
        <>
            <style>{PAGE_CSS}</style>
            <div class="landing-root" style={palette.css_vars()}>
                <Nav
                    theme={state.theme}
                    menu_open={state.menu_open}
                    on_navigate={on_navigate.clone()}
                    on_toggle_theme={on_toggle_theme}
                    on_toggle_menu={on_toggle_menu}
                    on_close_menu={on_close_menu}
                />
                <Hero theme={state.theme} on_navigate={on_navigate.clone()} />
                <About />
                <Services />
                <Projects filter={state.filter} projects={state.visible_projects()} on_filter={on_filter} />
                <Testimonials index={state.testimonial} on_select={on_select_testimonial} />
                <Contact
                    form={state.form.clone()}
                    submitted={state.submitted}
                    on_edit={on_edit}
                    on_submit={on_submit}
                />
                <Footer on_navigate={on_navigate} />
            </div>
        </>
    }
}
