use yew::prelude::*;

use crate::components::carousel::Carousel;
use crate::components::notification::Toast;
use crate::content::models::{in_category, Category, MenuItem};

#[derive(Properties, PartialEq)]
pub struct DishCardProps {
    pub item: MenuItem,
    pub badge: AttrValue,
    #[prop_or_default]
    pub on_order: Option<Callback<MouseEvent>>,
}

#[function_component(DishCard)]
pub fn dish_card(props: &DishCardProps) -> Html {
    let item = &props.item;
    html! {
        <div class="dish-card">
            <div class="dish-image">
                <img src={item.img.clone()} alt={item.name.clone()} loading="lazy" />
                <span class="dish-badge">{props.badge.clone()}</span>
            </div>
            <div class="dish-header">
                <span class="dish-name">{&item.name}</span>
                <span class="dish-price">{format!("₹{}", item.price)}</span>
            </div>
            <p class="dish-desc">{&item.desc}</p>
            if let Some(on_order) = props.on_order.clone() {
                <button class="dish-order" onclick={on_order}>{"Order"}</button>
            }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct ChefsChoiceProps {
    pub items: Vec<MenuItem>,
    pub notify: Callback<Toast>,
}

#[function_component(ChefsChoice)]
pub fn chefs_choice(props: &ChefsChoiceProps) -> Html {
    let on_order = {
        let notify = props.notify.clone();
        Callback::from(move |_: MouseEvent| notify.emit(Toast::success("Added to order (mock)")))
    };

    html! {
        <section id="chefs-choice" class="chefs-choice-section">
            <h2>{"Chef’s Choice"}</h2>
            <p class="section-subtitle">{"Signature dishes loved by our regulars."}</p>
            <Carousel>
                { for props.items.iter().map(|item| html! {
                    <DishCard
                        key={item.id.clone()}
                        item={item.clone()}
                        badge="Signature"
                        on_order={Some(on_order.clone())}
                    />
                }) }
            </Carousel>
        </section>
    }
}

#[derive(Properties, PartialEq)]
pub struct MenuBrowserProps {
    pub menu: Vec<MenuItem>,
}

#[function_component(MenuBrowser)]
pub fn menu_browser(props: &MenuBrowserProps) -> Html {
    let active = use_state(|| Category::ALL[0]);

    let tabs = Category::ALL.iter().map(|&category| {
        let active_handle = active.clone();
        let onclick = Callback::from(move |_: MouseEvent| active_handle.set(category));
        html! {
            <button
                key={category.key()}
                class={classes!("menu-tab", (*active == category).then(|| "active"))}
                {onclick}
            >
                {category.label()}
            </button>
        }
    });

    html! {
        <section id="menu" class="menu-section">
            <div class="menu-header">
                <h2>{"Menu / Foods I Serve"}</h2>
                <div class="menu-tabs">{ for tabs }</div>
            </div>
            <div class="menu-grid">
                { for in_category(&props.menu, *active).into_iter().map(|item| html! {
                    <DishCard key={item.id.clone()} item={item.clone()} badge="Chef’s pick" />
                }) }
            </div>
        </section>
    }
}
