//! Summary statistics over the full card set.
//!
//! Stats are computed from the unfiltered source so the panel does not
//! jump around while the user filters the results list.

#[cfg(test)]
#[path = "stats_test.rs"]
mod stats_test;

use std::collections::BTreeMap;

use crate::net::types::{Card, Category, Hazard};

/// Aggregates shown by the statistics panel.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CardStats {
    pub total: usize,
    /// Count per category, lowest severity first. Always three entries.
    pub by_category: Vec<(Category, usize)>,
    pub average_score: Option<f64>,
    /// Id and overview of the highest-scoring card; first one wins ties.
    pub most_severe: Option<(String, String)>,
    /// Hazard frequency, most common first.
    pub hazards: Vec<(Hazard, usize)>,
}

impl CardStats {
    pub fn compute(cards: &[Card]) -> Self {
        let by_category = Category::ALL
            .into_iter()
            .map(|category| (category, cards.iter().filter(|c| c.category == category).count()))
            .collect();

        #[allow(clippy::cast_precision_loss)]
        let average_score = (!cards.is_empty())
            .then(|| cards.iter().map(|c| c.severity_score as f64).sum::<f64>() / cards.len() as f64);

        let most_severe = cards
            .iter()
            .fold(None::<&Card>, |best, card| match best {
                Some(b) if b.severity_score >= card.severity_score => Some(b),
                _ => Some(card),
            })
            .map(|card| (card.id.clone(), card.overview.clone()));

        let mut counts: BTreeMap<Hazard, usize> = BTreeMap::new();
        for hazard in cards.iter().flat_map(|c| c.hazards.iter().copied()) {
            *counts.entry(hazard).or_default() += 1;
        }
        let mut hazards: Vec<(Hazard, usize)> = counts.into_iter().collect();
        hazards.sort_by(|a, b| b.1.cmp(&a.1));

        Self { total: cards.len(), by_category, average_score, most_severe, hazards }
    }

    /// Largest category count, used to scale the bars.
    pub fn max_category_count(&self) -> usize {
        self.by_category.iter().map(|(_, n)| *n).max().unwrap_or(0)
    }
}

/// Bar width as a whole percentage of `max`.
pub fn bar_percent(count: usize, max: usize) -> u32 {
    if max == 0 {
        return 0;
    }
    let pct = (count.min(max) * 100).div_ceil(max);
    u32::try_from(pct).unwrap_or(100)
}
