use yew::prelude::*;

use crate::components::carousel::Carousel;
use crate::content::models::{Review, ReviewKind};

#[derive(Properties, PartialEq)]
pub struct ReviewsProps {
    pub items: Vec<Review>,
}

pub fn star_line(rating: u8) -> String {
    "★".repeat(usize::from(rating))
}

#[function_component(Reviews)]
pub fn reviews(props: &ReviewsProps) -> Html {
    html! {
        <section id="reviews" class="reviews-section">
            <h2>{"What Customers & Bloggers Say"}</h2>
            <Carousel>
                { for props.items.iter().map(|review| html! {
                    <div key={review.id.clone()} class="review-card">
                        <div class="review-author">
                            <img src={review.avatar.clone()} alt={review.name.clone()} class="review-avatar" />
                            <div>
                                <div class="review-name">
                                    {&review.name}
                                    if review.kind == ReviewKind::Blogger {
                                        <span class="badge">{"Blogger"}</span>
                                    }
                                </div>
                                <div class="review-stars" aria-label={format!("{} out of 5", review.rating)}>
                                    { star_line(review.rating) }
                                </div>
                            </div>
                        </div>
                        <p class="review-text">{format!("“{}”", review.text)}</p>
                    </div>
                }) }
            </Carousel>
        </section>
    }
}
