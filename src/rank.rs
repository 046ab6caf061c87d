use errors::*;

/// Weighted mid-ranks of `values`.
///
/// Each run of equal values gets the rank `t1 + 0.5 + t2 / 2`, where `t1`
/// is the total weight of all strictly smaller values and `t2` the weight
/// of the run itself. With unit weights this is the classical mid-rank.
///
/// Weights are expected to be nonnegative; this is not checked. NaNs sort
/// last and never tie with each other.
pub fn weighted_rank(values: &[f64], weights: &[f64]) -> Result<Vec<f64>> {
    let n = check_lengths(&[("x", values.len()), ("w", weights.len())])?;
    trace!("weighted rank, n = {}", n);

    // sort permutation and its inverse
    let mut ord: Vec<usize> = (0..n).collect();
    ord.sort_by(|&a, &b| values[a].total_cmp(&values[b]));
    let mut rord = vec![0; n];
    for (k, &i) in ord.iter().enumerate() {
        rord[i] = k;
    }

    let xp: Vec<f64> = ord.iter().map(|&i| values[i]).collect();
    let wp: Vec<f64> = ord.iter().map(|&i| weights[i]).collect();

    let mut rank = vec![0.0; n];
    let mut t1 = 0.0;
    let mut t2 = 0.0;
    let mut start = 0;
    for i in 0..n {
        t2 += wp[i];
        // the last run closes unconditionally
        if i == n - 1 || xp[i + 1] != xp[i] {
            let r = t1 + 0.5 + t2 / 2.0;
            for slot in &mut rank[start..i + 1] {
                *slot = r;
            }
            t1 += t2;
            t2 = 0.0;
            start = i + 1;
        }
    }

    Ok(rord.iter().map(|&k| rank[k]).collect())
}

#[cfg(test)]
mod tests {

    #[test]
    fn unit_weights_with_ties() {
        let x = vec![1.0, 1.0, 2.0];
        let w = vec![1.0, 1.0, 1.0];
        let rank = super::weighted_rank(&x, &w).unwrap();
        assert_eq!(rank.len(), 3);
        assert_approx_eq!(rank[0], 1.5);
        assert_approx_eq!(rank[1], 1.5);
        assert_approx_eq!(rank[2], 3.0);
    }

    #[test]
    fn single_element() {
        let rank = super::weighted_rank(&[5.0], &[2.0]).unwrap();
        assert_eq!(rank.len(), 1);
        assert_approx_eq!(rank[0], 1.5);
    }

    #[test]
    fn unsorted_input_is_scattered_back() {
        let x = vec![30.0, 10.0, 20.0, 10.0, 40.0];
        let w = vec![1.0, 1.0, 1.0, 1.0, 1.0];
        let rank = super::weighted_rank(&x, &w).unwrap();
        let expected = [4.0, 1.5, 3.0, 1.5, 5.0];
        for (r, e) in rank.iter().zip(expected.iter()) {
            assert_approx_eq!(*r, *e);
        }
    }

    #[test]
    fn weighted_runs() {
        // sorted: 1 (w=2), 2 (w=1, w=3), 5 (w=0.5)
        // ranks: 0 + 0.5 + 1 = 1.5; 2 + 0.5 + 2 = 4.5; 6 + 0.5 + 0.25 = 6.75
        let x = vec![2.0, 5.0, 1.0, 2.0];
        let w = vec![1.0, 0.5, 2.0, 3.0];
        let rank = super::weighted_rank(&x, &w).unwrap();
        assert_approx_eq!(rank[0], 4.5);
        assert_approx_eq!(rank[1], 6.75);
        assert_approx_eq!(rank[2], 1.5);
        assert_approx_eq!(rank[3], 4.5);
    }

    #[test]
    fn all_tied() {
        let x = vec![7.0; 4];
        let w = vec![1.0, 2.0, 3.0, 4.0];
        let rank = super::weighted_rank(&x, &w).unwrap();
        for r in rank {
            assert_approx_eq!(r, 5.5);
        }
    }

    #[test]
    fn nan_sorts_last() {
        let x = vec![::std::f64::NAN, 1.0, 2.0];
        let w = vec![1.0, 1.0, 1.0];
        let rank = super::weighted_rank(&x, &w).unwrap();
        assert_approx_eq!(rank[0], 3.0);
        assert_approx_eq!(rank[1], 1.0);
        assert_approx_eq!(rank[2], 2.0);
    }

    #[test]
    fn invalid_arguments() {
        assert!(super::weighted_rank(&[1.0, 2.0], &[1.0]).is_err());
        assert!(super::weighted_rank(&[], &[]).is_err());
    }
}
