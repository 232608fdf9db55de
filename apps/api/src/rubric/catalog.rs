// Built-in category table. Order matters: it breaks weight ties in scoring and
// suggestion ranking.

use super::Category;

fn category(name: &str, weight: u32, keywords: &[&str], suggestion: &str) -> Category {
    Category {
        name: name.to_string(),
        keywords: keywords.iter().map(|k| k.to_string()).collect(),
        weight,
        suggestion: Some(suggestion.to_string()),
    }
}

pub fn default_categories() -> Vec<Category> {
    vec![
        category(
            "feminist_literature",
            15,
            &[
                "bell hooks",
                "All About Love",
                "feminist",
                "Roxane Gay",
                "Rebecca Solnit",
                "Men Explain Things to Me",
                "feminism",
                "feminist author",
                "feminist writer",
                "The Argonauts",
                "Bad Feminist",
                "We Should All Be Feminists",
                "The Second Sex",
                "The Handmaid's Tale",
                "The Color Purple",
                "Sister Outsider",
                "This Bridge Called My Back",
                "woman writer",
                "female author",
                "women's studies",
                "gender studies",
            ],
            "Maybe throw in some feminist lit? Books by bell hooks, Roxane Gay, or Rebecca Solnit would work (+15 points)",
        ),
        category(
            "matcha_latte",
            10,
            &["matcha", "matcha latte", "green tea latte"],
            "A matcha latte could add some points here (+10 points)",
        ),
        category(
            "tote_bag",
            12,
            &["tote bag", "canvas bag", "reusable bag"],
            "A cute tote bag would fit the vibe (+12 points)",
        ),
        category(
            "labubu_keychain",
            8,
            &["Labubu", "keychain", "Pop Mart"],
            "A Labubu keychain or Pop Mart collectible could help boost your score (+8 points)",
        ),
        category(
            "baggy_jeans",
            10,
            &["baggy jeans", "wide leg jeans", "oversized jeans"],
            "Some baggy or wide-leg jeans might score better than slim-fit (+10 points)",
        ),
        category(
            "vintage_clothing",
            8,
            &["vintage", "thrifted", "retro clothing"],
            "Vintage or thrifted pieces always add to the aesthetic (+8 points)",
        ),
        category(
            "female_indie_artists",
            12,
            &[
                "Phoebe Bridgers",
                "Taylor Swift",
                "Lana Del Rey",
                "indie music",
                "vinyl record",
            ],
            "Some vinyl from Phoebe Bridgers, Taylor Swift, or Lana Del Rey would be a nice touch (+12 points)",
        ),
        category(
            "aesthetic_items",
            7,
            &[
                "film camera",
                "polaroid",
                "journal",
                "stationery",
                "minimalist aesthetic",
            ],
            "A film camera, polaroid, or journal could add to the aesthetic (+7 points)",
        ),
        category(
            "coffee_shop_aesthetic",
            6,
            &["coffee shop", "cafe", "indie cafe", "artisanal coffee"],
            "An indie coffee shop background never hurts (+6 points)",
        ),
        category(
            "bookstore_library",
            5,
            &["bookstore", "library", "reading", "books"],
            "A bookstore or library setting would fit perfectly (+5 points)",
        ),
        category(
            "plant_parent",
            5,
            &["plants", "houseplants", "succulents", "potted plants"],
            "Some houseplants or succulents in the background could help (+5 points)",
        ),
        category(
            "thrifting",
            6,
            &["thrift store", "vintage shop", "secondhand"],
            "Thrift store vibes or vintage shop setting would add points (+6 points)",
        ),
    ]
}
