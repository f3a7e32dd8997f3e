use super::config::{LevelBand, SeniorityDimension};
use super::DimensionScore;

/// Weighted blend of the level-dimension scores. Dimensions the result does
/// not carry contribute zero.
pub(crate) fn seniority_index(
    level_scores: &[DimensionScore],
    dimensions: &[SeniorityDimension],
) -> f32 {
    dimensions
        .iter()
        .map(|dimension| {
            let score = level_scores
                .iter()
                .find(|entry| entry.dimension == dimension.name)
                .map(|entry| entry.score)
                .unwrap_or(0.0);

            dimension.weight * score
        })
        .sum()
}

/// Picks the last band whose floor the index meets. An index below every
/// floor lands in the first band; an instrument without bands yields an
/// empty label.
pub(crate) fn classify(index: f32, bands: &[LevelBand]) -> String {
    let mut selected = bands.first();
    for band in bands {
        if index >= band.floor {
            selected = Some(band);
        }
    }

    selected
        .map(|band| band.label.clone())
        .unwrap_or_default()
}
