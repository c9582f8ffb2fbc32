use chrono::Datelike;
use web_sys::MouseEvent;
use yew::prelude::*;

use crate::brand;
use crate::content::models::{TimelineEntry, TimelineSide, Video};

fn timeline_key(index: usize, entry: &TimelineEntry) -> String {
    format!("{}-{}", index, entry.year)
}

#[derive(Properties, PartialEq)]
pub struct HeroProps {
    pub hero_img: AttrValue,
}

#[function_component(Hero)]
pub fn hero(props: &HeroProps) -> Html {
    html! {
        <section id="home" class="hero">
            <div class="hero-content">
                <h1>{brand::TAGLINE}</h1>
                <p class="hero-subtitle">
                    {format!(
                        "Hi, I’m Rony, the proud owner and head chef of {}, serving fresh, handcrafted pizzas since {}.",
                        brand::NAME,
                        brand::SINCE
                    )}
                </p>
                <div class="hero-cta-group">
                    <a href="#menu" class="hero-cta">{"Explore Menu"}</a>
                    <a href="#about" class="hero-cta outline">{"Explore My Story"}</a>
                </div>
                <div class="hero-badges">
                    <span class="badge">{"100% Wood-Fired"}</span>
                    <span class="badge">{"Handmade Dough"}</span>
                </div>
            </div>
            <div class="hero-image">
                <img src={props.hero_img.clone()} alt="Wood-fired pizza oven" />
            </div>
            <a href="#timeline" class="hero-scroll-indicator" aria-label="Scroll to journey">{"🍕"}</a>
        </section>
    }
}

#[function_component(BookingCta)]
pub fn booking_cta() -> Html {
    html! {
        <section class="booking-cta">
            <div>
                <h3>{"Dine-in or Book a Table"}</h3>
                <p>{"Reserve your spot for a cozy evening with wood-fired magic."}</p>
            </div>
            <div class="booking-actions">
                <a href="#contact" class="hero-cta">{"Book a Table"}</a>
                <a href="#contact" class="hero-cta outline">{"Order Pizza"}</a>
            </div>
        </section>
    }
}

#[derive(Properties, PartialEq)]
struct AccordionItemProps {
    title: AttrValue,
    children: Children,
}

#[function_component(AccordionItem)]
fn accordion_item(props: &AccordionItemProps) -> Html {
    let is_open = use_state(|| false);

    let toggle = {
        let is_open = is_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            is_open.set(!*is_open);
        })
    };

    html! {
        <div class={classes!("accordion-item", if *is_open { "open" } else { "" })}>
            <button class="accordion-trigger" onclick={toggle}>
                <span>{&props.title}</span>
                <span class="toggle-icon">{if *is_open { "−" } else { "+" }}</span>
            </button>
            if *is_open {
                <div class="accordion-content">
                    { for props.children.iter() }
                </div>
            }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct AboutProps {
    pub chef_img: AttrValue,
}

#[function_component(About)]
pub fn about(props: &AboutProps) -> Html {
    html! {
        <section id="about" class="about-section">
            <div class="about-image">
                <img src={props.chef_img.clone()} alt="Chef Rony" />
            </div>
            <div class="about-text">
                <h2>{"About Me"}</h2>
                <p>
                    {"From a tiny oven in 2015 to a bustling neighborhood favorite, my journey is fueled by the joy of crafting simple, honest food. I believe in slow-fermented dough, San Marzano tomatoes, premium cheeses, and seasonal produce."}
                </p>
                <div class="accordion">
                    { for brand::ABOUT_ENTRIES.iter().map(|entry| html! {
                        <AccordionItem key={entry.title} title={entry.title}>
                            <p>{entry.body}</p>
                        </AccordionItem>
                    }) }
                </div>
            </div>
        </section>
    }
}

#[derive(Properties, PartialEq)]
pub struct TimelineProps {
    pub items: Vec<TimelineEntry>,
}

#[function_component(Timeline)]
pub fn timeline(props: &TimelineProps) -> Html {
    html! {
        <section id="timeline" class="timeline-section">
            <h2>{"The Journey"}</h2>
            <p class="section-subtitle">{"A timeline of Rony’s pizza-making story."}</p>
            <div class="timeline">
                { for props.items.iter().enumerate().map(|(index, entry)| {
                    let side = match TimelineSide::for_index(index) {
                        TimelineSide::Left => "left",
                        TimelineSide::Right => "right",
                    };
                    html! {
                        <div key={timeline_key(index, entry)} class={classes!("timeline-row", side)}>
                            <div class="timeline-card">
                                <div class="timeline-year">{entry.year}</div>
                                <div class="timeline-title">{&entry.title}</div>
                                <p class="timeline-text">{&entry.text}</p>
                            </div>
                            <div class="timeline-image">
                                <img src={entry.img.clone()} alt={entry.title.clone()} loading="lazy" />
                            </div>
                        </div>
                    }
                }) }
            </div>
        </section>
    }
}

#[derive(Properties, PartialEq)]
pub struct VideoSectionProps {
    pub video: Video,
    #[prop_or(AttrValue::from("Behind the Oven"))]
    pub title: AttrValue,
}

#[function_component(VideoSection)]
pub fn video_section(props: &VideoSectionProps) -> Html {
    html! {
        <section id="behind-the-oven" class="video-section">
            <h2>{&props.title}</h2>
            <div class="video-frame">
                <iframe
                    src={props.video.url.clone()}
                    title={props.title.clone()}
                    frameborder="0"
                    allow="accelerometer; autoplay; clipboard-write; encrypted-media; gyroscope; picture-in-picture; web-share"
                    allowfullscreen=true
                />
            </div>
            if let Some(caption) = props.video.caption.as_ref() {
                <p class="video-caption">{caption}</p>
            }
        </section>
    }
}

#[function_component(Footer)]
pub fn footer() -> Html {
    let year = chrono::Utc::now().year();
    html! {
        <footer class="site-footer">
            <div class="footer-content">
                <div class="footer-copy">{format!("© {} {}. All rights reserved.", year, brand::NAME)}</div>
                <div class="footer-links">
                    <a href={brand::INSTAGRAM_URL} target="_blank" rel="noopener noreferrer">{"Instagram"}</a>
                    <a href={brand::whatsapp_link()} target="_blank" rel="noopener noreferrer">{"WhatsApp"}</a>
                    <a href={brand::maps_link()} target="_blank" rel="noopener noreferrer">{"Google Maps"}</a>
                </div>
            </div>
        </footer>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_timeline_keys_unique_for_shared_years() {
        let entry = |title: &str| TimelineEntry {
            year: 2018,
            title: title.to_string(),
            text: String::new(),
            img: String::new(),
        };
        let entries = vec![entry("Pop-up"), entry("Food truck")];
        let keys: HashSet<_> = entries
            .iter()
            .enumerate()
            .map(|(index, entry)| timeline_key(index, entry))
            .collect();
        assert_eq!(keys.len(), entries.len());
    }
}
