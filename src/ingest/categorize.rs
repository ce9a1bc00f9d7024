//! Keyword rules that assign a category to an imported food.
//!
//! Rules are checked top to bottom against the lowercased food name; the
//! first match wins. Meat rules look at the cut (`Del`) to split organ meat
//! from muscle meat.

pub const FALLBACK_CATEGORY: &str = "Annet";

const VEGETABLES: &[&str] = &[
    "asparges",
    "avokado",
    "bittermelon",
    "bambusskudd",
    "bønnespirer",
    "brokkoli",
    "kål",
    "gulrot",
    "blomkål",
    "tomat",
    "mais",
    "agurk",
    "aubergine",
    "hvitløk",
    "gressløk",
    "ingefær",
    "paprika",
    "okra",
    "purre",
    "gresskar",
    "komatsuna",
    "løk",
    "persille",
    "perilla",
    "potet",
    "spinat",
    "spirer",
    "søtpotet",
    "reddik",
    "squash",
    "kinakål",
];

const PROCESSED_MEAT: &[&str] = &[
    "bacon",
    "skinke",
    "pølse",
    "postei",
    "corned beef",
    "salami",
    "prosciutto",
];

/// A meat whose organ cuts get their own category
struct MeatRule {
    name_tokens: &'static [&'static str],
    organ_tokens: &'static [&'static str],
    organ_category: &'static str,
    meat_category: &'static str,
}

const MEAT_RULES: &[MeatRule] = &[
    MeatRule {
        name_tokens: &["storfe", "okse"],
        organ_tokens: &["hjerte", "nyre", "lever", "tarm", "tunge", "kråse"],
        organ_category: "Okse - Innmat",
        meat_category: "Okse - Kjøtt",
    },
    MeatRule {
        name_tokens: &["kylling"],
        organ_tokens: &["hjerte", "lever", "kråse"],
        organ_category: "Kylling - Innmat",
        meat_category: "Kylling - Kjøtt",
    },
    MeatRule {
        name_tokens: &["svine", "svin"],
        organ_tokens: &["hjerte", "nyre", "lever"],
        organ_category: "Svin - Innmat",
        meat_category: "Svin - Kjøtt",
    },
];

/// Simple name-token rules checked after the meat rules, in order
const NAME_RULES: &[(&[&str], &str)] = &[
    (&["fåre", "lam"], "Lam"),
    (PROCESSED_MEAT, "Bearbeidet kjøtt"),
    (&["hest"], "Hest"),
    (&["hval"], "Hval"),
];

fn contains_any(haystack: &str, tokens: &[&str]) -> bool {
    tokens.iter().any(|token| haystack.contains(token))
}

/// Category for a food name and optional cut
pub fn categorize_food(name: &str, cut: &str) -> &'static str {
    let name = name.to_lowercase();
    let cut = cut.to_lowercase();

    if contains_any(&name, VEGETABLES) {
        return "Grønnsaker";
    }

    if let Some(rule) = MEAT_RULES
        .iter()
        .find(|rule| contains_any(&name, rule.name_tokens))
    {
        return if contains_any(&cut, rule.organ_tokens) {
            rule.organ_category
        } else {
            rule.meat_category
        };
    }

    NAME_RULES
        .iter()
        .find(|(tokens, _)| contains_any(&name, tokens))
        .map(|(_, category)| *category)
        .unwrap_or(FALLBACK_CATEGORY)
}
