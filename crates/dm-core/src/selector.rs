use crate::rng::RandomSource;
use crate::score::OptionScore;

/// Pick one of the scored options.
///
/// Zero- and negative-weight options are never eligible. Among the rest, only options tied for
/// the highest rank survive (rank is a hard override of weight); of those, options whose weight
/// falls below `best_weight * fraction` are pruned, and the final choice is drawn uniformly from
/// what remains. `fraction` is expected in [0, 1] but is not validated.
pub fn select<O>(
    mut scores: Vec<OptionScore<O>>,
    fraction: f32,
    rng: &mut dyn RandomSource,
) -> Option<OptionScore<O>> {
    scores.retain(|score| score.weight > 0.0);
    if scores.is_empty() {
        return None;
    }

    let max_rank = scores
        .iter()
        .map(|score| score.rank)
        .fold(f32::NEG_INFINITY, f32::max);
    scores.retain(|score| score.rank >= max_rank);

    scores.sort_by(|a, b| b.weight.total_cmp(&a.weight));

    let best_weight = scores.first()?.weight;
    let minimum_weight = best_weight * fraction;
    scores.retain(|score| score.weight >= minimum_weight);

    let index = rng.uniform_index(scores.len());
    if index < scores.len() {
        Some(scores.swap_remove(index))
    } else {
        None
    }
}
