use super::types::{Card, Combination};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use strum_macros::{Display, EnumIter, EnumString};

/// Coarse bucket a card falls into, derived from its `type` text.
#[derive(Debug, Clone, Copy, EnumIter, EnumString, Display, PartialEq, Eq, Hash)]
pub enum CardCategory {
    Monster,
    Spell,
    Trap,
}

impl CardCategory {
    /// First match wins: Monster > Spell > Trap.
    pub fn classify(card_type: &str) -> Option<Self> {
        if card_type.contains("Monster") {
            Some(Self::Monster)
        } else if card_type.contains("Spell") {
            Some(Self::Spell)
        } else if card_type.contains("Trap") {
            Some(Self::Trap)
        } else {
            None
        }
    }
}

/// Parses an "X + Y" combo pattern. Anything else is `None`.
pub fn parse_combo_type(pattern: &str) -> Option<(CardCategory, CardCategory)> {
    let (left, right) = pattern.split_once('+')?;
    let a = CardCategory::from_str(left.trim()).ok()?;
    let b = CardCategory::from_str(right.trim()).ok()?;
    Some((a, b))
}

/// All criteria are optional and AND-combined. Empty strings count as unset.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FilterCriteria {
    pub card_name: Option<String>,
    pub card_type: Option<String>,
    pub monster_type: Option<String>,
    pub spell_type: Option<String>,
    pub trap_type: Option<String>,
    pub attribute: Option<String>,
    pub combo_type: Option<String>,
    pub min_score: f64,
}

fn active(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

fn either(c: &Combination, pred: impl Fn(&Card) -> bool) -> bool {
    c.cards().into_iter().any(pred)
}

impl FilterCriteria {
    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }

    pub fn matches(&self, c: &Combination) -> bool {
        self.matches_name(c)
            && self.matches_score(c)
            && self.matches_card_type(c)
            && self.matches_subtypes(c)
            && self.matches_attribute(c)
            && self.matches_combo_type(c)
    }

    pub fn matches_name(&self, c: &Combination) -> bool {
        match active(&self.card_name) {
            None => true,
            Some(needle) => {
                let needle = needle.to_lowercase();
                either(c, |card| card.name.to_lowercase().contains(&needle))
            }
        }
    }

    pub fn matches_score(&self, c: &Combination) -> bool {
        c.total_score >= self.min_score
    }

    /// Unknown categories match nothing.
    pub fn matches_card_type(&self, c: &Combination) -> bool {
        match active(&self.card_type) {
            None => true,
            Some(raw) => match CardCategory::from_str(raw) {
                Ok(cat) => {
                    let needle = cat.to_string();
                    either(c, |card| card.card_type.contains(&needle))
                }
                Err(_) => false,
            },
        }
    }

    /// Monster/Spell/Trap subtypes are independent substring tests; they do
    /// not depend on `card_type` being set.
    pub fn matches_subtypes(&self, c: &Combination) -> bool {
        [&self.monster_type, &self.spell_type, &self.trap_type]
            .into_iter()
            .filter_map(active)
            .all(|sub| either(c, |card| card.card_type.contains(sub)))
    }

    pub fn matches_attribute(&self, c: &Combination) -> bool {
        match active(&self.attribute) {
            None => true,
            Some(attr) => either(c, |card| card.attribute.as_deref() == Some(attr)),
        }
    }

    /// Order-insensitive bucket pair match. Unparseable patterns and
    /// unclassifiable cards never match.
    pub fn matches_combo_type(&self, c: &Combination) -> bool {
        let Some(raw) = active(&self.combo_type) else {
            return true;
        };
        let Some((x, y)) = parse_combo_type(raw) else {
            return false;
        };
        let a = CardCategory::classify(&c.card1.card_type);
        let b = CardCategory::classify(&c.card2.card_type);
        match (a, b) {
            (Some(a), Some(b)) => (a == x && b == y) || (a == y && b == x),
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card(name: &str, card_type: &str) -> Card {
        Card {
            name: name.to_string(),
            card_type: card_type.to_string(),
            ..Default::default()
        }
    }

    fn combo(c1: Card, c2: Card) -> Combination {
        Combination {
            rank: 1,
            card1: c1,
            card2: c2,
            total_score: 100.0,
            synergy_multiplier: 1.0,
            ..Default::default()
        }
    }

    #[test]
    fn classify_prefers_monster() {
        assert_eq!(
            CardCategory::classify("Spell Monster"),
            Some(CardCategory::Monster)
        );
        assert_eq!(
            CardCategory::classify("Quick-Play Spell Card"),
            Some(CardCategory::Spell)
        );
        assert_eq!(CardCategory::classify("Counter Trap Card"), Some(CardCategory::Trap));
        assert_eq!(CardCategory::classify("Skill Card"), None);
    }

    #[test]
    fn parse_combo_type_accepts_spacing_variants() {
        use CardCategory::*;
        assert_eq!(parse_combo_type("Monster + Spell"), Some((Monster, Spell)));
        assert_eq!(parse_combo_type("Trap+Trap"), Some((Trap, Trap)));
        assert_eq!(parse_combo_type("Monster"), None);
        assert_eq!(parse_combo_type("Monster + Field"), None);
    }

    #[test]
    fn empty_strings_are_unset() {
        let f = FilterCriteria {
            card_name: Some(String::new()),
            combo_type: Some(String::new()),
            ..Default::default()
        };
        let c = combo(card("A", "Effect Monster"), card("B", "Trap Card"));
        assert!(f.matches(&c));
    }

    #[test]
    fn unknown_card_type_matches_nothing() {
        let f = FilterCriteria {
            card_type: Some("Skill".to_string()),
            ..Default::default()
        };
        let c = combo(card("A", "Effect Monster"), card("B", "Trap Card"));
        assert!(!f.matches(&c));
    }
}
