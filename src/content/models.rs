use serde::{Deserialize, Deserializer, Serialize};

pub const FALLBACK_HERO_IMAGE: &str = "https://images.unsplash.com/photo-1622880833523-7cf1c0bd4296";
pub const FALLBACK_CHEF_IMAGE: &str = "https://images.unsplash.com/photo-1572552635104-daf938e0aa1f";

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Classic,
    Specials,
    Sides,
    Drinks,
    Desserts,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Classic,
        Category::Specials,
        Category::Sides,
        Category::Drinks,
        Category::Desserts,
    ];

    pub fn key(self) -> &'static str {
        match self {
            Category::Classic => "classic",
            Category::Specials => "specials",
            Category::Sides => "sides",
            Category::Drinks => "drinks",
            Category::Desserts => "desserts",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Category::Classic => "Classic Pizzas",
            Category::Specials => "Specials",
            Category::Sides => "Sides",
            Category::Drinks => "Drinks",
            Category::Desserts => "Desserts",
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct MenuItem {
    pub id: String,
    pub name: String,
    #[serde(deserialize_with = "deserialize_price")]
    pub price: u32,
    pub category: Category,
    pub img: String,
    pub desc: String,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ReviewKind {
    #[default]
    Customer,
    Blogger,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Review {
    pub id: String,
    pub name: String,
    #[serde(deserialize_with = "deserialize_rating")]
    pub rating: u8,
    pub text: String,
    pub avatar: String,
    #[serde(rename = "type", default)]
    pub kind: ReviewKind,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct TimelineEntry {
    pub year: i32,
    pub title: String,
    pub text: String,
    pub img: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TimelineSide {
    Left,
    Right,
}

impl TimelineSide {
    pub fn for_index(index: usize) -> Self {
        if index % 2 == 0 {
            TimelineSide::Left
        } else {
            TimelineSide::Right
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct SpecialOffer {
    pub name: String,
    #[serde(deserialize_with = "deserialize_price")]
    pub price: u32,
    pub desc: String,
    pub img: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Video {
    pub url: String,
    #[serde(default)]
    pub caption: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Assets {
    pub menu_pdf_url: String,
}

/// Everything the home page renders, as assembled by the content loader.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PageContent {
    pub menu: Vec<MenuItem>,
    pub chefs_choice: Vec<MenuItem>,
    pub reviews: Vec<Review>,
    pub timeline: Vec<TimelineEntry>,
    pub video: Option<Video>,
    pub assets: Option<Assets>,
    pub special: Option<SpecialOffer>,
}

impl PageContent {
    pub fn hero_image(&self) -> &str {
        self.timeline
            .get(2)
            .map(|entry| entry.img.as_str())
            .or_else(|| self.menu.first().map(|item| item.img.as_str()))
            .unwrap_or(FALLBACK_HERO_IMAGE)
    }

    pub fn chef_image(&self) -> &str {
        self.timeline
            .first()
            .map(|entry| entry.img.as_str())
            .unwrap_or(FALLBACK_CHEF_IMAGE)
    }

    pub fn menu_pdf_url(&self) -> Option<&str> {
        self.assets.as_ref().map(|assets| assets.menu_pdf_url.as_str())
    }
}

pub fn in_category(items: &[MenuItem], category: Category) -> Vec<&MenuItem> {
    items.iter().filter(|item| item.category == category).collect()
}

// The content service stores prices as floats, so 299 arrives as 299.0.
fn deserialize_price<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let value = f64::deserialize(deserializer)?;
    if value <= 0.0 || value.fract() != 0.0 || value > f64::from(u32::MAX) {
        return Err(serde::de::Error::custom(format!("invalid price {}", value)));
    }
    Ok(value as u32)
}

fn deserialize_rating<'de, D>(deserializer: D) -> Result<u8, D::Error>
where
    D: Deserializer<'de>,
{
    let value = i64::deserialize(deserializer)?;
    match u8::try_from(value) {
        Ok(rating @ 1..=5) => Ok(rating),
        _ => Err(serde::de::Error::custom(format!("rating {} outside 1..=5", value))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn entry(year: i32, img: &str) -> TimelineEntry {
        TimelineEntry {
            year,
            title: format!("Year {}", year),
            text: String::new(),
            img: img.to_string(),
        }
    }

    #[test]
    fn test_menu_item_accepts_float_price() {
        let item: MenuItem = serde_json::from_value(json!({
            "id": "m1",
            "name": "Margherita",
            "price": 299.0,
            "category": "classic",
            "img": "https://example.com/m.jpg",
            "desc": "San Marzano tomatoes, fior di latte, basil."
        }))
        .unwrap();
        assert_eq!(item.price, 299);
        assert_eq!(item.category, Category::Classic);
    }

    #[test]
    fn test_menu_item_rejects_bad_price_and_category() {
        let base = json!({
            "id": "m1", "name": "x", "price": 0, "category": "classic", "img": "", "desc": ""
        });
        assert!(serde_json::from_value::<MenuItem>(base.clone()).is_err());

        let mut fractional = base.clone();
        fractional["price"] = json!(12.5);
        assert!(serde_json::from_value::<MenuItem>(fractional).is_err());

        let mut unknown = base;
        unknown["price"] = json!(100);
        unknown["category"] = json!("pasta");
        assert!(serde_json::from_value::<MenuItem>(unknown).is_err());
    }

    #[test]
    fn test_review_kind_defaults_to_customer() {
        let review: Review = serde_json::from_value(json!({
            "id": "r1", "name": "Ananya M.", "rating": 5, "text": "Great", "avatar": ""
        }))
        .unwrap();
        assert_eq!(review.kind, ReviewKind::Customer);

        let blogger: Review = serde_json::from_value(json!({
            "id": "r5", "name": "FoodieMumbai", "rating": 5, "text": "Gem", "avatar": "", "type": "blogger"
        }))
        .unwrap();
        assert_eq!(blogger.kind, ReviewKind::Blogger);
    }

    #[test]
    fn test_review_rating_bounds() {
        for rating in [0, 6, -1] {
            let result = serde_json::from_value::<Review>(json!({
                "id": "r", "name": "n", "rating": rating, "text": "", "avatar": ""
            }));
            assert!(result.is_err(), "rating {} should be rejected", rating);
        }
    }

    #[test]
    fn test_timeline_sides_alternate() {
        let sides: Vec<_> = (0..4).map(TimelineSide::for_index).collect();
        assert_eq!(
            sides,
            vec![TimelineSide::Left, TimelineSide::Right, TimelineSide::Left, TimelineSide::Right]
        );
    }

    #[test]
    fn test_hero_and_chef_image_fallbacks() {
        let mut content = PageContent::default();
        assert_eq!(content.hero_image(), FALLBACK_HERO_IMAGE);
        assert_eq!(content.chef_image(), FALLBACK_CHEF_IMAGE);

        content.menu.push(MenuItem {
            id: "m1".into(),
            name: "Margherita".into(),
            price: 299,
            category: Category::Classic,
            img: "menu.jpg".into(),
            desc: String::new(),
        });
        assert_eq!(content.hero_image(), "menu.jpg");

        content.timeline = vec![entry(2015, "a.jpg"), entry(2018, "b.jpg"), entry(2021, "c.jpg")];
        assert_eq!(content.hero_image(), "c.jpg");
        assert_eq!(content.chef_image(), "a.jpg");
    }

    #[test]
    fn test_in_category_keeps_order() {
        let dish = |id: &str, category| MenuItem {
            id: id.to_string(),
            name: id.to_string(),
            price: 100,
            category,
            img: String::new(),
            desc: String::new(),
        };
        let menu = vec![
            dish("m1", Category::Classic),
            dish("d1", Category::Drinks),
            dish("m2", Category::Classic),
        ];
        let ids: Vec<_> = in_category(&menu, Category::Classic).iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, vec!["m1", "m2"]);
        assert!(in_category(&menu, Category::Desserts).is_empty());
    }

    #[test]
    fn test_category_keys_match_serde() {
        for category in Category::ALL {
            let encoded = serde_json::to_value(category).unwrap();
            assert_eq!(encoded, json!(category.key()));
        }
    }
}
