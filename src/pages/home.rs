use std::time::Duration;

use gloo_timers::callback::Timeout;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::components::contact_form::Contact;
use crate::components::dishes::{ChefsChoice, MenuBrowser};
use crate::components::header::Header;
use crate::components::music::MusicToggle;
use crate::components::notification::{Toast, ToastView};
use crate::components::reviews::Reviews;
use crate::components::sections::{About, BookingCta, Footer, Hero, Timeline, VideoSection};
use crate::components::special_dialog::SpecialDialog;
use crate::config::{self, ContentMode};
use crate::content::loader::{load_page_content, HttpContentSource};
use crate::content::mock::MockContentSource;
use crate::content::models::PageContent;
use crate::first_visit::{Dismissal, FirstVisitGate};
use crate::growth::Growth;
use crate::storage::{KeyValueStore, LocalStorageStore};

async fn fetch_content() -> PageContent {
    match config::content_mode() {
        ContentMode::Remote => load_page_content(&HttpContentSource::from_config()).await,
        ContentMode::Offline => load_page_content(&MockContentSource).await,
    }
}

/// Hands freshly loaded content to the gate. Returns how long to wait before
/// `display_due`, or `None` when no dialog is to be scheduled.
fn settle<S: KeyValueStore>(gate: &mut FirstVisitGate<S>, content: &PageContent) -> Option<Duration> {
    gate.content_settled(content.special.is_some())
}

#[function_component]
pub fn Home() -> Html {
    let content = use_state(PageContent::default);
    let gate = use_mut_ref(|| FirstVisitGate::new(LocalStorageStore));
    let special_open = use_state(|| false);
    let toast = use_state(|| None::<Toast>);

    // Load everything once, then let the gate decide about the special.
    {
        let content = content.clone();
        let gate = gate.clone();
        let special_open = special_open.clone();
        use_effect_with_deps(move |_| {
            spawn_local(async move {
                let loaded = fetch_content().await;
                let delay = settle(&mut *gate.borrow_mut(), &loaded);
                content.set(loaded);

                if let Some(delay) = delay {
                    let millis = u32::try_from(delay.as_millis()).unwrap_or(u32::MAX);
                    Timeout::new(millis, move || {
                        if gate.borrow_mut().display_due() {
                            special_open.set(true);
                        }
                    })
                    .forget();
                }
            });
            || ()
        }, ());
    }

    let notify = {
        let toast = toast.clone();
        Callback::from(move |next: Toast| toast.set(Some(next)))
    };

    let close_toast = {
        let toast = toast.clone();
        Callback::from(move |_| toast.set(None))
    };

    let on_dismiss = {
        let gate = gate.clone();
        let special_open = special_open.clone();
        let notify = notify.clone();
        Callback::from(move |how: Dismissal| {
            gate.borrow_mut().dismiss(how);
            special_open.set(false);
            if how == Dismissal::Add {
                notify.emit(Toast::success("Added to order (mock)"));
            }
        })
    };

    let on_special = {
        let gate = gate.clone();
        let special_open = special_open.clone();
        Callback::from(move |_| {
            gate.borrow_mut().reopen();
            special_open.set(true);
        })
    };

    html! {
        <div class="home-page">
            <ToastView toast={(*toast).clone()} on_close={close_toast} />
            <Header special_available={content.special.is_some()} {on_special} />
            <Hero hero_img={AttrValue::from(content.hero_image().to_string())} />
            <BookingCta />
            <About chef_img={AttrValue::from(content.chef_image().to_string())} />
            <Timeline items={content.timeline.clone()} />
            if let Some(video) = content.video.clone() {
                <VideoSection {video} />
            }
            <ChefsChoice items={content.chefs_choice.clone()} notify={notify.clone()} />
            <MenuBrowser menu={content.menu.clone()} />
            <Growth />
            <Reviews items={content.reviews.clone()} />
            <Contact menu_pdf_url={content.menu_pdf_url().map(str::to_string)} {notify} />
            <SpecialDialog special={content.special.clone()} open={*special_open} {on_dismiss} />
            <Footer />
            <MusicToggle />
        </div>
    }
}
