//! Natural-language score phrases for a single tennis game.
//! Pure functions throughout: the output depends only on the two point
//! counts passed in, and nothing persists between calls.

use crate::types::{LateCall, Player, PointName};

/// Announce the score for a game where player one has `p1` points and
/// player two has `p2`, with the first letter uppercased.
///
/// Total for all inputs: counts past forty fall into the late-game branch,
/// which is defined for any difference.
pub fn formatted_score(p1: u8, p2: u8) -> String {
    capitalize_first(&score(p1, p2))
}

/// Lowercase score phrase, early-game ordinal names or late-game
/// difference calls depending on the phase.
pub fn score(p1: u8, p2: u8) -> String {
    if is_early_game(p1, p2) { early_game_score(p1, p2) } else { late_game_score(p1, p2) }
}

fn is_early_game(p1: u8, p2: u8) -> bool {
    // The total-below-six term routes 3-3 into the deuce branch rather
    // than announcing it as "forty all".
    p1 < 4 && p2 < 4 && u16::from(p1) + u16::from(p2) < 6
}

fn early_game_score(p1: u8, p2: u8) -> String {
    let name = |points: u8| {
        PointName::try_from(points)
            .expect("early-game classification keeps points below four")
            .word()
    };
    if p1 == p2 {
        format!("{} all", name(p1))
    } else {
        // Player one's name always comes first, whoever leads.
        format!("{} - {}", name(p1), name(p2))
    }
}

fn late_game_score(p1: u8, p2: u8) -> String {
    if p1 > p2 {
        format!("{} {}", LateCall::from_difference(p1 - p2).word(), Player::One.phrase())
    } else if p2 > p1 {
        format!("{} {}", LateCall::from_difference(p2 - p1).word(), Player::Two.phrase())
    } else {
        LateCall::Deuce.word().to_string()
    }
}

/// Uppercase the first character of `phrase`, leaving the rest untouched.
/// Returns a new string rather than mutating in place.
fn capitalize_first(phrase: &str) -> String {
    let mut chars = phrase.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn three_all_is_late_game() {
        assert!(!is_early_game(3, 3));
        assert_eq!(score(3, 3), "deuce");
    }

    #[test]
    fn early_game_covers_every_pair_below_the_boundary() {
        for p1 in 0..4_u8 {
            for p2 in 0..4_u8 {
                assert_eq!(is_early_game(p1, p2), p1 + p2 < 6, "pair {p1}-{p2}");
            }
        }
        assert!(!is_early_game(4, 0));
        assert!(!is_early_game(0, 4));
    }

    #[test]
    fn early_game_keeps_player_one_first() {
        assert_eq!(score(1, 3), "fifteen - forty");
        assert_eq!(score(3, 1), "forty - fifteen");
    }

    #[test]
    fn late_game_names_the_leader() {
        assert_eq!(score(4, 3), "advantage player one");
        assert_eq!(score(3, 4), "advantage player two");
        assert_eq!(score(6, 4), "win player one");
        assert_eq!(score(4, 6), "win player two");
    }

    #[test]
    fn classification_does_not_overflow_on_large_counts() {
        assert_eq!(score(u8::MAX, u8::MAX), "deuce");
        assert_eq!(score(u8::MAX, 0), "win player one");
    }

    #[test]
    fn capitalize_first_touches_only_the_first_character() {
        assert_eq!(capitalize_first("love all"), "Love all");
        assert_eq!(capitalize_first("Already Upper"), "Already Upper");
        assert_eq!(capitalize_first("x"), "X");
        assert_eq!(capitalize_first(""), "");
    }
}
