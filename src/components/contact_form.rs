use log::{info, warn};
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::brand;
use crate::components::notification::Toast;
use crate::contact::{self, ContactMessage};

#[derive(Properties, PartialEq)]
pub struct ContactProps {
    pub menu_pdf_url: Option<String>,
    pub notify: Callback<Toast>,
}

#[function_component(Contact)]
pub fn contact(props: &ContactProps) -> Html {
    let name = use_state(String::new);
    let email = use_state(String::new);
    let message = use_state(String::new);
    let submitting = use_state(|| false);

    let on_name = {
        let name = name.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            name.set(input.value());
        })
    };
    let on_email = {
        let email = email.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            email.set(input.value());
        })
    };
    let on_message = {
        let message = message.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlTextAreaElement = e.target_unchecked_into();
            message.set(input.value());
        })
    };

    let onsubmit = {
        let name = name.clone();
        let email = email.clone();
        let message = message.clone();
        let submitting = submitting.clone();
        let notify = props.notify.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *submitting {
                return;
            }

            let outgoing = ContactMessage::new(&name, &email, &message);
            if let Err(e) = outgoing.validate() {
                notify.emit(Toast::error(e.to_string()));
                return;
            }

            submitting.set(true);
            let name = name.clone();
            let email = email.clone();
            let message = message.clone();
            let submitting = submitting.clone();
            let notify = notify.clone();
            spawn_local(async move {
                let sink = contact::sink_from_config();
                match sink.submit(outgoing).await {
                    Ok(receipt) => {
                        info!("Contact message stored as {}", receipt.id);
                        notify.emit(Toast::success("Message sent! We will get back shortly."));
                        name.set(String::new());
                        email.set(String::new());
                        message.set(String::new());
                    }
                    Err(e) => {
                        warn!("Contact message failed: {}", e);
                        notify.emit(Toast::error("Failed to send message. Please try again."));
                    }
                }
                submitting.set(false);
            });
        })
    };

    html! {
        <section id="contact" class="contact-section">
            <div class="contact-info">
                <h2>{"Get In Touch"}</h2>
                <p>{format!("Find us at {}. For quick orders, ping us on WhatsApp.", brand::ADDRESS)}</p>
                <div class="contact-links">
                    <a href={brand::whatsapp_link()} target="_blank" rel="noopener noreferrer">{"WhatsApp"}</a>
                    <a href={brand::INSTAGRAM_URL} target="_blank" rel="noopener noreferrer">
                        {format!("Instagram {}", brand::INSTAGRAM_HANDLE)}
                    </a>
                    <a href={brand::maps_link()} target="_blank" rel="noopener noreferrer">{"Google Maps"}</a>
                </div>
                <div class="contact-map">
                    <iframe title="map" src={brand::maps_embed()} frameborder="0"></iframe>
                </div>
            </div>
            <form class="contact-form" {onsubmit}>
                <h3>{"Contact Form"}</h3>
                <input type="text" placeholder="Name" value={(*name).clone()} oninput={on_name} required=true />
                <input type="email" placeholder="Email" value={(*email).clone()} oninput={on_email} required=true />
                <textarea placeholder="Message" rows="5" value={(*message).clone()} oninput={on_message} required=true />
                <div class="contact-actions">
                    <button type="submit" class="hero-cta" disabled={*submitting}>
                        {if *submitting { "Sending..." } else { "Send" }}
                    </button>
                    if let Some(url) = props.menu_pdf_url.clone() {
                        <a href={url} target="_blank" rel="noopener noreferrer" download="Ronys-Menu.pdf" class="hero-cta outline">
                            {"Download Menu"}
                        </a>
                    }
                </div>
            </form>
        </section>
    }
}
