use num_bigint::BigUint;
use num_traits::One;

/// Threshold below which a naive left-to-right fold beats the overhead of
/// building a product tree.
const TREE_THRESHOLD: usize = 64;

/// Product of `factors`. Uses a balanced divide-and-conquer tree once the
/// factor count crosses [`TREE_THRESHOLD`], since multiplying
/// similarly-sized operands pairwise is asymptotically cheaper than folding
/// a running product against ever-larger partial results.
pub fn product(factors: &[BigUint]) -> BigUint {
    if factors.len() < TREE_THRESHOLD {
        return factors.iter().fold(BigUint::one(), |acc, f| acc * f);
    }
    product_tree(factors)
}

fn product_tree(factors: &[BigUint]) -> BigUint {
    match factors.len() {
        0 => BigUint::one(),
        1 => factors[0].clone(),
        n => {
            let mid = n / 2;
            let (left, right) = factors.split_at(mid);
            product_tree(left) * product_tree(right)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_product_is_one() {
        assert_eq!(product(&[]), BigUint::one());
    }

    #[test]
    fn single_factor_is_itself() {
        let f = BigUint::from(17u32);
        assert_eq!(product(&[f.clone()]), f);
    }

    #[test]
    fn small_fold_matches_naive_multiplication() {
        let factors: Vec<BigUint> = (2u32..10).map(BigUint::from).collect();
        let expected: BigUint = factors.iter().fold(BigUint::one(), |acc, f| acc * f);
        assert_eq!(product(&factors), expected);
    }

    #[test]
    fn tree_path_matches_naive_fold() {
        let factors: Vec<BigUint> = (2u32..200).map(BigUint::from).collect();
        let naive = factors.iter().fold(BigUint::one(), |acc, f| acc * f);
        assert_eq!(product(&factors), naive);
    }
}
