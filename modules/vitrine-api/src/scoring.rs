//! Weighted multi-criteria comparison scoring.
//!
//! The pure math lives in [`score_products`]; [`compare_products`]
//! resolves ids through the store first. Unmatched ids are dropped and an
//! empty product set scores to an empty result. Neither is an error.

use vitrine_common::types::{
    Product, ScoredProduct, WeightSpec, CRITERION_DISCOUNT, CRITERION_PRICE, CRITERION_TAUX_REMISE,
};
use vitrine_common::VitrineError;

use crate::store::{store_err, ProductStore};

/// Largest `f(product)` across the set, floored at 1.0 when the maximum
/// would not be positive. The floor keeps every normalization division
/// well-defined.
fn criterion_max(products: &[Product], f: impl Fn(&Product) -> f64) -> f64 {
    let max = products.iter().map(&f).fold(f64::MIN, f64::max);
    if max > 0.0 {
        max
    } else {
        1.0
    }
}

/// Score each product against the supplied weights.
///
/// Every weighted criterion contributes `weight * normalized value`,
/// where values are normalized against the set-wide maximum. Price is
/// inverted so cheaper products score higher; discount and discount rate
/// score higher as they grow. Criteria absent from `weights` contribute
/// nothing, and unknown weight keys are ignored. Scores are not
/// normalized: weights need not sum to one.
pub fn score_products(products: &[Product], weights: &WeightSpec) -> Vec<ScoredProduct> {
    if products.is_empty() {
        return Vec::new();
    }

    let max_price = criterion_max(products, |p| p.price);
    let max_discount = criterion_max(products, |p| p.discount);
    let max_taux_remise = criterion_max(products, |p| p.discount_rate);

    products
        .iter()
        .map(|product| {
            let mut score = 0.0;
            if let Some(w) = weights.get(CRITERION_PRICE) {
                score += w * (1.0 - product.price / max_price);
            }
            if let Some(w) = weights.get(CRITERION_DISCOUNT) {
                score += w * (product.discount / max_discount);
            }
            if let Some(w) = weights.get(CRITERION_TAUX_REMISE) {
                score += w * (product.discount_rate / max_taux_remise);
            }
            ScoredProduct {
                product: product.clone(),
                score,
            }
        })
        .collect()
}

/// Resolve `ids` through the store and score whatever matched.
pub async fn compare_products<S: ProductStore>(
    store: &S,
    ids: &[i32],
    weights: &WeightSpec,
) -> Result<Vec<ScoredProduct>, VitrineError> {
    let products = store.find_by_ids(ids).await.map_err(store_err)?;
    Ok(score_products(&products, weights))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::sample_product;

    fn weights(entries: &[(&str, f64)]) -> WeightSpec {
        entries
            .iter()
            .map(|(k, w)| (k.to_string(), *w))
            .collect()
    }

    #[test]
    fn empty_set_scores_to_empty() {
        let scored = score_products(&[], &weights(&[(CRITERION_PRICE, 1.0)]));
        assert!(scored.is_empty());
    }

    #[test]
    fn cheaper_products_score_higher_under_price_weight() {
        let products = vec![
            sample_product(1, 10.0, 0.0, 0.0),
            sample_product(2, 50.0, 0.0, 0.0),
            sample_product(3, 100.0, 0.0, 0.0),
        ];

        let scored = score_products(&products, &weights(&[(CRITERION_PRICE, 1.0)]));

        assert!(scored[0].score > scored[1].score);
        assert!(scored[1].score > scored[2].score);
        // The most expensive product sits at the zero point of the
        // inverted price scale.
        assert_eq!(scored[2].score, 0.0);
    }

    #[test]
    fn half_price_product_scores_half_under_full_price_weight() {
        let products = vec![
            sample_product(1, 50.0, 0.0, 0.0),
            sample_product(2, 100.0, 0.0, 0.0),
        ];

        let scored = score_products(&products, &weights(&[(CRITERION_PRICE, 1.0)]));

        assert_eq!(scored[0].score, 0.5);
        assert_eq!(scored[1].score, 0.0);
    }

    #[test]
    fn single_product_scores_zero_under_price_weight() {
        let products = vec![sample_product(1, 42.0, 0.0, 0.0)];

        let scored = score_products(&products, &weights(&[(CRITERION_PRICE, 1.0)]));

        assert_eq!(scored.len(), 1);
        assert_eq!(scored[0].score, 0.0);
    }

    #[test]
    fn identical_discounts_all_hit_the_maximum() {
        let products = vec![
            sample_product(1, 10.0, 5.0, 0.0),
            sample_product(2, 20.0, 5.0, 0.0),
        ];

        let scored = score_products(&products, &weights(&[(CRITERION_DISCOUNT, 1.0)]));

        assert_eq!(scored[0].score, 1.0);
        assert_eq!(scored[1].score, 1.0);
    }

    #[test]
    fn two_product_discount_split_yields_expected_scores() {
        let products = vec![
            sample_product(1, 0.0, 10.0, 0.0),
            sample_product(2, 0.0, 5.0, 0.0),
        ];

        let scored = score_products(&products, &weights(&[(CRITERION_DISCOUNT, 0.5)]));

        assert_eq!(scored[0].score, 0.5);
        assert_eq!(scored[1].score, 0.25);
    }

    #[test]
    fn all_zero_criterion_contributes_nothing() {
        // Discount maximum degenerates to the 1.0 floor, so every
        // contribution is w * 0 / 1.
        let products = vec![
            sample_product(1, 10.0, 0.0, 0.0),
            sample_product(2, 20.0, 0.0, 0.0),
        ];

        let scored = score_products(&products, &weights(&[(CRITERION_DISCOUNT, 0.8)]));

        assert_eq!(scored[0].score, 0.0);
        assert_eq!(scored[1].score, 0.0);
    }

    #[test]
    fn absent_and_unknown_weight_keys_are_ignored() {
        let products = vec![
            sample_product(1, 10.0, 4.0, 20.0),
            sample_product(2, 30.0, 8.0, 10.0),
        ];

        let weight_spec = weights(&[(CRITERION_TAUX_REMISE, 1.0), ("popularity", 9.0)]);
        let scored = score_products(&products, &weight_spec);

        // Only the discount-rate criterion counts: 20/20 and 10/20.
        assert_eq!(scored[0].score, 1.0);
        assert_eq!(scored[1].score, 0.5);
    }

    #[test]
    fn criteria_combine_additively() {
        let products = vec![
            sample_product(1, 100.0, 10.0, 0.0),
            sample_product(2, 50.0, 5.0, 0.0),
        ];

        let weight_spec = weights(&[(CRITERION_PRICE, 0.6), (CRITERION_DISCOUNT, 0.4)]);
        let scored = score_products(&products, &weight_spec);

        // Product 1: price term 0, discount term 0.4 * 1.0.
        assert!((scored[0].score - 0.4).abs() < 1e-9);
        // Product 2: price term 0.6 * 0.5, discount term 0.4 * 0.5.
        assert!((scored[1].score - 0.5).abs() < 1e-9);
    }

    #[test]
    fn empty_weights_score_everything_zero() {
        let products = vec![
            sample_product(1, 10.0, 4.0, 2.0),
            sample_product(2, 20.0, 8.0, 6.0),
        ];

        let scored = score_products(&products, &WeightSpec::new());

        assert_eq!(scored.len(), 2);
        assert!(scored.iter().all(|s| s.score == 0.0));
    }
}
