use futures::future::LocalBoxFuture;
use futures::FutureExt;
use serde::Serialize;
use serde_json::{json, Value};

use crate::content::loader::{ContentError, ContentSource, Resource};
use crate::content::models::{
    Assets, Category, MenuItem, Review, ReviewKind, SpecialOffer, TimelineEntry, Video,
};

const HERO_CHEF: &str = "https://images.unsplash.com/photo-1572552635104-daf938e0aa1f";
const HERO_FIRE: &str = "https://images.unsplash.com/photo-1622880833523-7cf1c0bd4296";
const PIZZA_CLOSE_1: &str = "https://images.unsplash.com/photo-1574071318508-1cdbab80d002";
const PIZZA_CLOSE_2: &str = "https://images.unsplash.com/photo-1598023696416-0193a0bcd302";
const GARLIC_BREAD: &str = "https://images.unsplash.com/photo-1573140401552-3fab0b24306f";
const TIRAMISU: &str = "https://images.unsplash.com/photo-1571877227200-a0d98ea607e9";

/// Bundled content served in offline builds, shaped exactly like the content service.
#[derive(Clone, Copy, Debug, Default)]
pub struct MockContentSource;

impl ContentSource for MockContentSource {
    fn fetch(&self, resource: Resource) -> LocalBoxFuture<'_, Result<Value, ContentError>> {
        let body = match resource {
            Resource::Menu => items(menu()),
            Resource::ChefsChoice => items(chefs_choice()),
            Resource::Reviews => items(reviews()),
            Resource::Timeline => items(timeline()),
            Resource::Video => to_body(video()),
            Resource::Assets => to_body(assets()),
            Resource::Special => to_body(special()),
        };
        async move { body }.boxed_local()
    }
}

fn items<T: Serialize>(list: Vec<T>) -> Result<Value, ContentError> {
    Ok(json!({ "items": to_body(list)? }))
}

fn to_body<T: Serialize>(value: T) -> Result<Value, ContentError> {
    serde_json::to_value(value).map_err(|e| ContentError::Decode(e.to_string()))
}

fn dish(id: &str, name: &str, price: u32, category: Category, img: &str, desc: &str) -> MenuItem {
    MenuItem {
        id: id.to_string(),
        name: name.to_string(),
        price,
        category,
        img: img.to_string(),
        desc: desc.to_string(),
    }
}

pub fn menu() -> Vec<MenuItem> {
    vec![
        dish("m1", "Margherita", 299, Category::Classic, PIZZA_CLOSE_1, "San Marzano tomatoes, fior di latte, basil."),
        dish("m2", "Farmhouse", 349, Category::Classic, PIZZA_CLOSE_2, "Onions, capsicum, mushrooms, sweet corn."),
        dish("m3", "Pepperoni", 399, Category::Classic, PIZZA_CLOSE_2, "Spicy pepperoni, mozzarella, oregano."),
        dish("s1", "Truffle Funghi", 499, Category::Specials, PIZZA_CLOSE_1, "Wild mushrooms, truffle oil, parmesan."),
        dish("s2", "Bombay Heat", 459, Category::Specials, PIZZA_CLOSE_2, "Tandoori chicken, jalapeño, chilli oil."),
        dish("sd1", "Garlic Bread Basket", 159, Category::Sides, GARLIC_BREAD, "Buttery, herby, perfectly toasted."),
        dish("sd2", "Cheesy Dip", 79, Category::Sides, PIZZA_CLOSE_1, "Silky, indulgent cheese dip."),
        dish("d1", "Homemade Lemonade", 99, Category::Drinks, PIZZA_CLOSE_1, "Fresh, zesty and cool."),
        dish("d2", "Iced Tea (Peach)", 129, Category::Drinks, PIZZA_CLOSE_2, "Lightly sweet, aromatic."),
        dish("ds1", "Classic Tiramisu", 249, Category::Desserts, TIRAMISU, "Cocoa, mascarpone, espresso."),
    ]
}

pub fn chefs_choice() -> Vec<MenuItem> {
    vec![
        dish("cc1", "Truffle Funghi", 499, Category::Specials, PIZZA_CLOSE_1, "Wild mushrooms, truffle oil, parmesan."),
        dish("cc2", "Bombay Heat", 459, Category::Specials, PIZZA_CLOSE_2, "Tandoori chicken, jalapeño, chilli oil."),
        dish("cc3", "Burrata Margherita", 529, Category::Specials, PIZZA_CLOSE_1, "Creamy burrata, basil oil, San Marzano base."),
    ]
}

fn review(id: &str, name: &str, rating: u8, text: &str, avatar: u8, kind: ReviewKind) -> Review {
    Review {
        id: id.to_string(),
        name: name.to_string(),
        rating,
        text: text.to_string(),
        avatar: format!("https://i.pravatar.cc/100?img={}", avatar),
        kind,
    }
}

pub fn reviews() -> Vec<Review> {
    vec![
        review("r1", "Ananya M.", 5, "Best wood-fired crust in Mumbai. The truffle funghi blew my mind!", 12, ReviewKind::Customer),
        review("r2", "Rahul S.", 5, "Super fresh ingredients and warm service. Totally recommend!", 5, ReviewKind::Customer),
        review("r3", "Sana K.", 4, "Margherita is perfection. Simple and so flavorful.", 8, ReviewKind::Customer),
        review("r4", "Karan P.", 5, "Ordered for a party, everyone loved the Bombay Heat!", 18, ReviewKind::Customer),
        review("r5", "FoodieMumbai", 5, "Rony’s wood-fired pies are the city’s hidden gem, charred just right, toppings that sing.", 30, ReviewKind::Blogger),
        review("r6", "SliceOfLife Blog", 5, "Truffle Funghi is a masterpiece. Balanced, aromatic, unforgettable.", 16, ReviewKind::Blogger),
    ]
}

pub fn timeline() -> Vec<TimelineEntry> {
    let entry = |year, title: &str, text: &str, img: &str| TimelineEntry {
        year,
        title: title.to_string(),
        text: text.to_string(),
        img: img.to_string(),
    };
    vec![
        entry(2015, "First Oven", "Started with a tiny backyard oven and neighborhood tastings.", HERO_CHEF),
        entry(2018, "Pop-up Nights", "Weekend pop-ups grew a loyal base; perfected slow-fermented dough.", PIZZA_CLOSE_2),
        entry(2021, "Rony’s Pizza Hub", "Opened our cozy hub in Andheri West with a wood-fired oven.", HERO_FIRE),
        entry(2024, "30+ Varieties", "Seasonal specials, collabs, and chef’s tasting menus.", PIZZA_CLOSE_1),
        entry(2025, "Community Favorite", "1000+ happy customers and counting.", GARLIC_BREAD),
    ]
}

pub fn special() -> SpecialOffer {
    SpecialOffer {
        name: "Wood-Fired Burrata Margherita".to_string(),
        price: 529,
        desc: "Silky burrata on blistered San Marzano base, basil oil drizzle.".to_string(),
        img: PIZZA_CLOSE_1.to_string(),
    }
}

pub fn video() -> Video {
    Video {
        url: "https://www.youtube.com/embed/3AAdKl1UYZs".to_string(),
        caption: Some("From dough to fire, a peek into our wood-fired ritual.".to_string()),
    }
}

pub fn assets() -> Assets {
    Assets {
        menu_pdf_url: "https://www.w3.org/WAI/ER/tests/xhtml/testfiles/resources/pdf/dummy.pdf".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::loader::test_support::load;
    use std::collections::HashSet;

    #[test]
    fn test_mock_menu_covers_every_category() {
        let categories: HashSet<_> = menu().iter().map(|item| item.category).collect();
        assert_eq!(categories.len(), Category::ALL.len());
    }

    #[test]
    fn test_mock_ids_unique() {
        let ids: HashSet<_> = menu().into_iter().map(|item| item.id).collect();
        assert_eq!(ids.len(), menu().len());
    }

    #[test]
    fn test_mock_source_round_trips_through_loader() {
        let content = load(&MockContentSource);
        assert_eq!(content.menu, menu());
        assert_eq!(content.chefs_choice.len(), 3);
        assert_eq!(content.reviews.len(), 6);
        assert_eq!(content.timeline, timeline());
        assert_eq!(content.special, Some(special()));
        assert_eq!(content.hero_image(), HERO_FIRE);
        assert_eq!(content.chef_image(), HERO_CHEF);
    }
}
