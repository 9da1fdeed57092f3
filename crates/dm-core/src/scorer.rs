use crate::consideration::DecisionContext;
use crate::option::UtilityOption;
use crate::score::OptionScore;

/// Aggregate an option's considerations into a single weight.
///
/// The addend sum starts at the option's base addend; each consideration adds its addend and
/// multiplies into the running product. A product of exactly 0 is an absolute veto: evaluation
/// stops immediately and the option scores weight 0, no matter what the remaining considerations
/// would have contributed. Otherwise the weight is `addend_sum * multiplier_product`, which may
/// be negative; the selector treats weights ordinally and applies no floor here.
pub fn score_option<'a, W: 'static>(
    option: &'a UtilityOption<W>,
    ctx: &DecisionContext<'_, W>,
) -> OptionScore<&'a UtilityOption<W>> {
    let mut addend_sum = option.base_addend;
    let mut multiplier_product = 1.0f32;

    for consideration in &option.considerations {
        let score = consideration.score(ctx);
        addend_sum += score.addend;
        multiplier_product *= score.multiplier;

        // Unrecoverable: later considerations cannot bring the weight back.
        if multiplier_product == 0.0 {
            return OptionScore {
                rank: option.rank,
                weight: 0.0,
                option,
            };
        }
    }

    OptionScore {
        rank: option.rank,
        weight: addend_sum * multiplier_product,
        option,
    }
}
