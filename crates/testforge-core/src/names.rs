//! Deterministic name derivation helpers.
//!
//! Pluralization follows a fixed rule order and is not guaranteed to be
//! linguistically correct for irregular nouns.

fn is_vowel(c: char) -> bool {
    matches!(c, 'a' | 'e' | 'i' | 'o' | 'u')
}

/// Deterministic English pluralization.
///
/// Rule order: sibilant endings (`s`, `ss`, `sh`, `ch`, `x`, `z`) append
/// `es`; consonant + `y` becomes `ies`; `f`/`fe` become `ves`; consonant +
/// `o` appends `es`; everything else appends `s`.
pub fn pluralize(word: &str) -> String {
    let lower = word.to_lowercase();

    if lower.ends_with('s')
        || lower.ends_with("sh")
        || lower.ends_with("ch")
        || lower.ends_with('x')
        || lower.ends_with('z')
    {
        return format!("{word}es");
    }

    let chars: Vec<char> = lower.chars().collect();
    if lower.ends_with('y') && chars.len() >= 2 && !is_vowel(chars[chars.len() - 2]) {
        return format!("{}ies", &word[..word.len() - 1]);
    }

    if lower.ends_with("fe") {
        return format!("{}ves", &word[..word.len() - 2]);
    }
    if lower.ends_with('f') {
        return format!("{}ves", &word[..word.len() - 1]);
    }

    if lower.ends_with('o') && chars.len() >= 2 && !is_vowel(chars[chars.len() - 2]) {
        return format!("{word}es");
    }

    format!("{word}s")
}

/// `OrderItem` / `orderItem` -> `order_item`.
pub fn to_snake_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 4);
    for (i, c) in name.chars().enumerate() {
        if c.is_uppercase() {
            if i > 0 {
                out.push('_');
            }
            out.extend(c.to_lowercase());
        } else {
            out.push(c);
        }
    }
    out
}

/// `order_item` / `orderItem` -> `OrderItem`.
pub fn to_pascal_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut upper_next = true;
    for c in name.chars() {
        if c == '_' || c == '-' {
            upper_next = true;
        } else if upper_next {
            out.extend(c.to_uppercase());
            upper_next = false;
        } else {
            out.push(c);
        }
    }
    out
}

/// `OrderItem` / `order_item` -> `orderItem`.
pub fn to_camel_case(name: &str) -> String {
    let pascal = to_pascal_case(name);
    let mut chars = pascal.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().collect::<String>() + chars.as_str(),
        None => pascal,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pluralizes_regular_nouns() {
        assert_eq!(pluralize("post"), "posts");
        assert_eq!(pluralize("order"), "orders");
    }

    #[test]
    fn pluralizes_sibilant_endings() {
        assert_eq!(pluralize("address"), "addresses");
        assert_eq!(pluralize("box"), "boxes");
        assert_eq!(pluralize("batch"), "batches");
        assert_eq!(pluralize("dish"), "dishes");
        assert_eq!(pluralize("quiz"), "quizes");
    }

    #[test]
    fn pluralizes_consonant_y() {
        assert_eq!(pluralize("category"), "categories");
        assert_eq!(pluralize("city"), "cities");
        assert_eq!(pluralize("day"), "days");
    }

    #[test]
    fn pluralizes_f_endings() {
        assert_eq!(pluralize("leaf"), "leaves");
        assert_eq!(pluralize("knife"), "knives");
    }

    #[test]
    fn pluralizes_consonant_o() {
        assert_eq!(pluralize("hero"), "heroes");
        assert_eq!(pluralize("video"), "videos");
    }

    #[test]
    fn case_conversions() {
        assert_eq!(to_snake_case("OrderItem"), "order_item");
        assert_eq!(to_pascal_case("order_item"), "OrderItem");
        assert_eq!(to_camel_case("OrderItem"), "orderItem");
        assert_eq!(to_camel_case("street"), "street");
    }
}
