use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{window, MouseEvent};
use yew::prelude::*;

use crate::brand;

const NAV_LINKS: [(&str, &str); 8] = [
    ("#home", "Home"),
    ("#about", "About"),
    ("#timeline", "Journey"),
    ("#chefs-choice", "Chef’s Choice"),
    ("#menu", "Menu"),
    ("#growth", "Growth"),
    ("#reviews", "Reviews"),
    ("#contact", "Contact"),
];

pub fn scroll_to_section(id: &str) {
    if let Some(section) = window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(id))
    {
        section.scroll_into_view();
    }
}

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    pub special_available: bool,
    pub on_special: Callback<()>,
}

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    let menu_open = use_state(|| false);
    let is_scrolled = use_state(|| false);

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(move |_| {
            let listener = window().map(|window| {
                let scroll_callback = Closure::wrap(Box::new(move || {
                    let scroll_y = web_sys::window()
                        .and_then(|w| w.scroll_y().ok())
                        .unwrap_or(0.0);
                    is_scrolled.set(scroll_y > 80.0);
                }) as Box<dyn FnMut()>);
                let _ = window.add_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref());
                (window, scroll_callback)
            });

            move || {
                if let Some((window, scroll_callback)) = listener {
                    let _ = window.remove_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref());
                }
            }
        }, ());
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(false))
    };

    let order_now = Callback::from(|_: MouseEvent| scroll_to_section("contact"));

    let open_special = {
        let on_special = props.on_special.clone();
        Callback::from(move |_: MouseEvent| on_special.emit(()))
    };

    let menu_class = if *menu_open {
        "nav-links mobile-menu-open"
    } else {
        "nav-links"
    };

    html! {
        <header class={classes!("top-nav", (*is_scrolled).then(|| "scrolled"))}>
            <div class="nav-content">
                <div class="nav-brand">
                    <div class="nav-logo">{"R"}</div>
                    <div>
                        <div class="nav-name">{brand::NAME}</div>
                        <div class="nav-since">{format!("Since {}", brand::SINCE)}</div>
                    </div>
                </div>
                <button class="burger-menu" onclick={toggle_menu}>
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <nav class={menu_class}>
                    { for NAV_LINKS.iter().map(|(href, label)| html! {
                        <a key={*href} href={*href} class="nav-link" onclick={close_menu.clone()}>{*label}</a>
                    }) }
                </nav>
                <div class="nav-actions">
                    if props.special_available {
                        <button class="nav-special" onclick={open_special}>{"Today’s Special"}</button>
                    }
                    <button class="nav-order" onclick={order_now}>{"Order Now"}</button>
                </div>
            </div>
        </header>
    }
}
