pub const NAME: &str = "Rony’s Pizza Hub";
pub const TAGLINE: &str = "Crafting Happiness, One Slice at a Time!";
pub const SINCE: i32 = 2015;
pub const WHATSAPP: &str = "+91 90000 12345";
pub const INSTAGRAM_HANDLE: &str = "@ronys.pizza.hub";
pub const INSTAGRAM_URL: &str = "https://www.instagram.com/";
pub const ADDRESS: &str = "XYZ Street, Andheri West, Mumbai";
pub const MAP_AREA: &str = "Andheri West Mumbai";
pub const MUSIC_URL: &str =
    "https://cdn.pixabay.com/download/audio/2021/08/08/audio_6c8435c3a7.mp3?filename=memories-113172.mp3";
pub const MUSIC_VOLUME: f64 = 0.4;

pub struct AboutEntry {
    pub title: &'static str,
    pub body: &'static str,
}

pub const ABOUT_ENTRIES: [AboutEntry; 3] = [
    AboutEntry {
        title: "Experience",
        body: "10+ years perfecting wood-fired techniques and balancing flavor with texture.",
    },
    AboutEntry {
        title: "Inspiration",
        body: "Classic Neapolitan pizza with a Mumbai twist: fresh, vibrant, and soulful.",
    },
    AboutEntry {
        title: "Ingredient Philosophy",
        body: "Quality ingredients, minimal processing, and maximum flavor.",
    },
];

pub fn whatsapp_link() -> String {
    let digits: String = WHATSAPP.chars().filter(char::is_ascii_digit).collect();
    format!("https://wa.me/{}", digits)
}

pub fn maps_link() -> String {
    format!("https://maps.google.com/?q={}", urlencoding::encode(ADDRESS))
}

pub fn maps_embed() -> String {
    format!(
        "https://maps.google.com/maps?q={}&t=&z=13&ie=UTF8&iwloc=&output=embed",
        urlencoding::encode(MAP_AREA)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whatsapp_link_keeps_digits_only() {
        assert_eq!(whatsapp_link(), "https://wa.me/919000012345");
    }

    #[test]
    fn test_map_links_are_encoded() {
        assert_eq!(maps_link(), "https://maps.google.com/?q=XYZ%20Street%2C%20Andheri%20West%2C%20Mumbai");
        assert!(maps_embed().contains("q=Andheri%20West%20Mumbai&"));
    }
}
