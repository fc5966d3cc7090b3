//! Draw command
//!
//! Draws a fixed number of words from the catalog and returns them in order.

use crate::core::{Catalog, WordRecord};
use crate::sequencer::ShuffleSequencer;
use rand::Rng;

/// A single drawn card
#[derive(Debug, Clone)]
pub struct DrawnCard {
    /// 1-based position in the output
    pub position: usize,
    /// Catalog index the sequencer returned
    pub index: usize,
    /// 1-based shuffle cycle the draw belongs to
    pub cycle: u64,
    pub record: WordRecord,
}

/// Result of a draw run
pub struct DrawResult {
    pub cards: Vec<DrawnCard>,
    pub catalog_size: usize,
}

/// Draw `count` consecutive words
///
/// # Panics
///
/// Panics if the sequencer was built for a larger size than the catalog.
pub fn draw_words<R: Rng>(
    catalog: &Catalog,
    sequencer: &mut ShuffleSequencer<R>,
    count: usize,
) -> DrawResult {
    let cards = (1..=count)
        .map(|position| {
            let index = sequencer.draw();
            DrawnCard {
                position,
                index,
                cycle: sequencer.cycles_completed() + 1,
                record: catalog[index].clone(),
            }
        })
        .collect();

    DrawResult {
        cards,
        catalog_size: catalog.len(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::load_catalog;

    fn small_catalog() -> Catalog {
        Catalog::new(
            ["abate", "lucid", "terse"]
                .into_iter()
                .map(|w| WordRecord::new(w).unwrap())
                .collect(),
        )
        .unwrap()
    }

    #[test]
    fn draws_requested_count() {
        let catalog = small_catalog();
        let mut sequencer = ShuffleSequencer::seeded(catalog.len(), 1).unwrap();
        let result = draw_words(&catalog, &mut sequencer, 7);

        assert_eq!(result.cards.len(), 7);
        assert_eq!(result.catalog_size, 3);
        assert_eq!(
            result.cards.iter().map(|c| c.position).collect::<Vec<_>>(),
            (1..=7).collect::<Vec<_>>()
        );
    }

    #[test]
    fn record_matches_index() {
        let catalog = small_catalog();
        let mut sequencer = ShuffleSequencer::seeded(catalog.len(), 2).unwrap();
        for card in draw_words(&catalog, &mut sequencer, 9).cards {
            assert_eq!(card.record, catalog[card.index]);
        }
    }

    #[test]
    fn cycles_are_numbered() {
        let catalog = small_catalog();
        let mut sequencer = ShuffleSequencer::seeded(catalog.len(), 3).unwrap();
        let cycles: Vec<u64> = draw_words(&catalog, &mut sequencer, 7)
            .cards
            .iter()
            .map(|c| c.cycle)
            .collect();
        assert_eq!(cycles, [1, 1, 1, 2, 2, 2, 3]);
    }

    #[test]
    fn full_catalog_cycle_has_no_duplicates() {
        let catalog = load_catalog(crate::wordlists::BUILTIN).unwrap();
        let mut sequencer = ShuffleSequencer::seeded(catalog.len(), 4).unwrap();
        let result = draw_words(&catalog, &mut sequencer, catalog.len());

        let words: rustc_hash::FxHashSet<&str> =
            result.cards.iter().map(|c| c.record.word()).collect();
        assert_eq!(words.len(), catalog.len());
    }

    #[test]
    fn zero_count_draws_nothing() {
        let catalog = small_catalog();
        let mut sequencer = ShuffleSequencer::seeded(catalog.len(), 5).unwrap();
        assert!(draw_words(&catalog, &mut sequencer, 0).cards.is_empty());
        assert_eq!(sequencer.drawn_in_cycle(), 0);
    }
}
