use super::DimensionScore;
use crate::assessment::domain::LikertChoice;
use std::collections::BTreeMap;

/// Accumulates weighted response points per dimension alongside the ceiling
/// each dimension could have reached, then normalizes to 0-100.
///
/// Only dimensions seeded at construction participate. Weight entries naming
/// anything else are dropped on the floor, which keeps stray catalog entries
/// from inventing dimensions the instrument never declared.
#[derive(Debug)]
pub(crate) struct DimensionTally {
    order: Vec<String>,
    raw: BTreeMap<String, f32>,
    ceiling: BTreeMap<String, f32>,
}

impl DimensionTally {
    pub(crate) fn new(dimensions: impl IntoIterator<Item = String>) -> Self {
        let order: Vec<String> = dimensions.into_iter().collect();
        let raw = order.iter().map(|name| (name.clone(), 0.0)).collect();
        let ceiling = order.iter().map(|name| (name.clone(), 0.0)).collect();

        Self {
            order,
            raw,
            ceiling,
        }
    }

    /// Counts a question toward the best-case ceiling, answered or not.
    pub(crate) fn add_ceiling(&mut self, weights: &BTreeMap<String, f32>) {
        let best = f32::from(LikertChoice::StronglyAgree.value());
        for (name, weight) in weights {
            if let Some(total) = self.ceiling.get_mut(name) {
                *total += best * weight;
            }
        }
    }

    /// Counts an answered question's Likert value toward the raw totals.
    pub(crate) fn add_response(&mut self, value: u8, weights: &BTreeMap<String, f32>) {
        let factor = f32::from(value);
        for (name, weight) in weights {
            if let Some(total) = self.raw.get_mut(name) {
                *total += factor * weight;
            }
        }
    }

    /// Normalized 0-100 scores in the order the dimensions were seeded.
    pub(crate) fn normalized(&self) -> Vec<DimensionScore> {
        self.order
            .iter()
            .map(|name| {
                let raw = self.raw.get(name).copied().unwrap_or(0.0);
                let ceiling = self.ceiling.get(name).copied().unwrap_or(0.0);

                DimensionScore {
                    dimension: name.clone(),
                    score: normalize(raw, ceiling),
                }
            })
            .collect()
    }
}

/// Top `limit` scores, highest first. The sort is stable, so dimensions that
/// tie keep their instrument order.
pub(crate) fn rank_descending(scores: &[DimensionScore], limit: usize) -> Vec<DimensionScore> {
    let mut ranked = scores.to_vec();
    ranked.sort_by(|a, b| b.score.total_cmp(&a.score));
    ranked.truncate(limit);
    ranked
}

fn normalize(raw: f32, ceiling: f32) -> f32 {
    if ceiling <= 0.0 {
        0.0
    } else {
        ((raw / ceiling) * 100.0).clamp(0.0, 100.0)
    }
}
