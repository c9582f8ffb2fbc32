use yew::prelude::*;

use crate::content::models::SpecialOffer;
use crate::first_visit::Dismissal;

#[derive(Properties, PartialEq)]
pub struct SpecialDialogProps {
    pub special: Option<SpecialOffer>,
    pub open: bool,
    pub on_dismiss: Callback<Dismissal>,
}

#[function_component(SpecialDialog)]
pub fn special_dialog(props: &SpecialDialogProps) -> Html {
    let Some(special) = props.special.as_ref().filter(|_| props.open) else {
        return html! {};
    };

    let dismiss = |how: Dismissal| {
        let on_dismiss = props.on_dismiss.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            on_dismiss.emit(how);
        })
    };
    let keep_open = Callback::from(|e: MouseEvent| e.stop_propagation());

    html! {
        <div class="dialog-backdrop" onclick={dismiss(Dismissal::Close)}>
            <div class="dialog" role="dialog" aria-modal="true" onclick={keep_open}>
                <div class="dialog-header">
                    <h3 class="dialog-title">{"Today’s Special"}</h3>
                    <p class="dialog-description">{&special.desc}</p>
                </div>
                <div class="dialog-image">
                    <img src={special.img.clone()} alt={special.name.clone()} />
                </div>
                <div class="dialog-offer">
                    <div>
                        <div class="dialog-name">{&special.name}</div>
                        <div class="dialog-price">{format!("₹{}", special.price)}</div>
                    </div>
                    <button class="dialog-add" onclick={dismiss(Dismissal::Add)}>{"Add"}</button>
                </div>
                <div class="dialog-footer">
                    <button class="dialog-close" onclick={dismiss(Dismissal::Close)}>{"✕ Close"}</button>
                </div>
            </div>
        </div>
    }
}
