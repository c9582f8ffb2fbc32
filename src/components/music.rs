use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys::HtmlAudioElement;
use yew::prelude::*;

use crate::brand;

/// Floating background-music switch. Browsers may refuse playback until the
/// visitor interacts with the page; that refusal is only logged.
#[function_component(MusicToggle)]
pub fn music_toggle() -> Html {
    let audio_ref = use_node_ref();
    let music_on = use_state(|| false);

    {
        let audio_ref = audio_ref.clone();
        use_effect_with_deps(move |music_on| {
            if let Some(audio) = audio_ref.cast::<HtmlAudioElement>() {
                audio.set_volume(brand::MUSIC_VOLUME);
                audio.set_loop(true);
                if *music_on {
                    if let Ok(promise) = audio.play() {
                        spawn_local(async move {
                            if JsFuture::from(promise).await.is_err() {
                                gloo_console::warn!("Background music playback was blocked");
                            }
                        });
                    }
                } else {
                    let _ = audio.pause();
                }
            }
            || ()
        }, *music_on);
    }

    let toggle = {
        let music_on = music_on.clone();
        Callback::from(move |_: MouseEvent| music_on.set(!*music_on))
    };

    html! {
        <>
            <audio ref={audio_ref} src={brand::MUSIC_URL} />
            <div class="music-toggle">
                <span class="music-icon">{"♫"}</span>
                <span>{"Music"}</span>
                <button
                    class={classes!("switch", (*music_on).then(|| "on"))}
                    role="switch"
                    aria-checked={if *music_on { "true" } else { "false" }}
                    onclick={toggle}
                >
                    <span class="switch-thumb"></span>
                </button>
            </div>
        </>
    }
}
