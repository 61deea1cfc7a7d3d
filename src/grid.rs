use crate::word::CaseMode;
use itertools::Itertools;
use rand::seq::SliceRandom;
use rand::Rng;

/// Fixed tile count for a round: two rows of eight on the board.
pub const GRID_SIZE: usize = 16;

const ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// One clickable letter on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LetterTile {
    pub glyph: char,
    pub is_target_letter: bool,
}

/// Build the shuffled tile set for a round: every unique letter of the
/// target word plus random distractors, padded to `grid_size` tiles.
///
/// Letters are deduplicated case-insensitively, keeping the display glyph
/// of the first occurrence. Distractors are rejection-sampled from A-Z
/// against everything already on the board, so no glyph appears twice.
/// If the target alone carries more unique letters than `grid_size`, all
/// of them are kept and no distractors are added.
pub fn generate(target_word: &str, mode: CaseMode, grid_size: usize) -> Vec<LetterTile> {
    let target_letters: Vec<char> = target_word
        .chars()
        .unique_by(|c| c.to_ascii_uppercase())
        .collect();

    let distractor_count = grid_size.saturating_sub(target_letters.len());

    let mut rng = rand::thread_rng();
    let mut distractors: Vec<char> = Vec::with_capacity(distractor_count);
    while distractors.len() < distractor_count {
        let candidate = ALPHABET[rng.gen_range(0..ALPHABET.len())] as char;
        let taken = target_letters
            .iter()
            .chain(distractors.iter())
            .any(|c| c.to_ascii_uppercase() == candidate);
        if !taken {
            distractors.push(candidate);
        }
    }

    let mut tiles: Vec<LetterTile> = target_letters
        .into_iter()
        .map(|glyph| LetterTile {
            glyph,
            is_target_letter: true,
        })
        .chain(distractors.into_iter().map(|glyph| LetterTile {
            glyph,
            is_target_letter: false,
        }))
        .collect();

    // Lowercase boards lowercase everything; other modes keep distractors
    // uppercase and target glyphs in the word's display case.
    if mode == CaseMode::Lower {
        for tile in &mut tiles {
            tile.glyph = tile.glyph.to_ascii_lowercase();
        }
    }

    tiles.shuffle(&mut rng);
    tiles
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::word::format_name;
    use std::collections::HashSet;

    #[test]
    fn test_grid_has_sixteen_tiles() {
        for name in ["MARIO", "goku", "Anpanman"] {
            let tiles = generate(name, CaseMode::Upper, GRID_SIZE);
            assert_eq!(tiles.len(), GRID_SIZE);
        }
    }

    #[test]
    fn test_every_target_letter_appears_exactly_once() {
        let tiles = generate("ANPANMAN", CaseMode::Upper, GRID_SIZE);

        for letter in ['A', 'N', 'P', 'M'] {
            let count = tiles
                .iter()
                .filter(|t| t.glyph == letter && t.is_target_letter)
                .count();
            assert_eq!(count, 1, "target letter {letter} not unique");
        }
    }

    #[test]
    fn test_no_glyph_repeats() {
        for _ in 0..20 {
            let tiles = generate("PIKACHU", CaseMode::Upper, GRID_SIZE);
            let glyphs: HashSet<char> = tiles.iter().map(|t| t.glyph.to_ascii_uppercase()).collect();
            assert_eq!(glyphs.len(), tiles.len());
        }
    }

    #[test]
    fn test_distractors_avoid_target_letters() {
        let tiles = generate("SONIC", CaseMode::Upper, GRID_SIZE);
        for tile in tiles.iter().filter(|t| !t.is_target_letter) {
            assert!(!"SONIC".contains(tile.glyph));
        }
    }

    #[test]
    fn test_lowercase_mode_lowercases_every_glyph() {
        let tiles = generate("totoro", CaseMode::Lower, GRID_SIZE);
        assert!(tiles.iter().all(|t| t.glyph.is_ascii_lowercase()));
    }

    #[test]
    fn test_mixed_mode_keeps_display_case_for_targets() {
        let word = format_name("doraemon", CaseMode::Mixed);
        let tiles = generate(&word, CaseMode::Mixed, GRID_SIZE);

        let target_glyphs: Vec<char> = tiles
            .iter()
            .filter(|t| t.is_target_letter)
            .map(|t| t.glyph)
            .collect();
        assert!(target_glyphs.contains(&'D'));
        assert!(target_glyphs.contains(&'o'));

        // Distractors stay uppercase outside lowercase mode.
        assert!(tiles
            .iter()
            .filter(|t| !t.is_target_letter)
            .all(|t| t.glyph.is_ascii_uppercase()));
    }

    #[test]
    fn test_grid_clips_to_target_letters_when_word_is_wide() {
        let tiles = generate("MARIO", CaseMode::Upper, 3);
        assert_eq!(tiles.len(), 5);
        assert!(tiles.iter().all(|t| t.is_target_letter));
    }

    #[test]
    fn test_word_with_repeats_still_fills_the_grid() {
        // "anpanman" has only four unique letters; the rest are distractors.
        let tiles = generate("anpanman", CaseMode::Upper, GRID_SIZE);
        assert_eq!(tiles.len(), GRID_SIZE);
        assert_eq!(tiles.iter().filter(|t| t.is_target_letter).count(), 4);
        assert_eq!(tiles.iter().filter(|t| !t.is_target_letter).count(), 12);
    }
}
