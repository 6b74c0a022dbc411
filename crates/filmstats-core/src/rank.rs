// Top-N ranking.

/// How many ranked items to drop from the top, and how many to keep after that.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RankOptions {
    pub limit: i64,
    pub skip: usize,
}

impl RankOptions {
    pub fn top(limit: i64) -> Self {
        Self { limit, skip: 0 }
    }

    pub fn skipping(mut self, skip: usize) -> Self {
        self.skip = skip;
        self
    }
}

/// Sort `items` descending by `metric` and keep the first `options.limit`
/// after skipping `options.skip`.
///
/// Items with equal metrics keep their input order, so the first-seen group wins
/// at the truncation boundary. A limit of zero or less yields nothing.
pub fn top_n<T, M, F>(mut items: Vec<T>, metric: F, options: RankOptions) -> Vec<T>
where
    M: Ord,
    F: Fn(&T) -> M,
{
    if options.limit <= 0 {
        return Vec::new();
    }
    let limit = usize::try_from(options.limit).unwrap_or(usize::MAX);

    // sort_by is stable
    items.sort_by(|a, b| metric(b).cmp(&metric(a)));
    items.into_iter().skip(options.skip).take(limit).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tallies() -> Vec<(&'static str, u64)> {
        vec![("a", 2), ("b", 5), ("c", 2), ("d", 5), ("e", 1)]
    }

    #[test]
    fn test_sorts_descending_with_stable_ties() {
        let ranked = top_n(tallies(), |(_, n)| *n, RankOptions::top(10));
        assert_eq!(ranked, vec![("b", 5), ("d", 5), ("a", 2), ("c", 2), ("e", 1)]);
    }

    #[test]
    fn test_tie_at_boundary_keeps_first_seen() {
        let ranked = top_n(tallies(), |(_, n)| *n, RankOptions::top(3));
        assert_eq!(ranked, vec![("b", 5), ("d", 5), ("a", 2)]);
    }

    #[test]
    fn test_non_positive_limit_is_empty() {
        assert!(top_n(tallies(), |(_, n)| *n, RankOptions::top(0)).is_empty());
        assert!(top_n(tallies(), |(_, n)| *n, RankOptions::top(-4)).is_empty());
    }

    #[test]
    fn test_skip_drops_leaders_before_truncating() {
        let ranked = top_n(tallies(), |(_, n)| *n, RankOptions::top(2).skipping(1));
        assert_eq!(ranked, vec![("d", 5), ("a", 2)]);
    }

    #[test]
    fn test_reranking_top_k_is_idempotent() {
        let once = top_n(tallies(), |(_, n)| *n, RankOptions::top(3));
        let twice = top_n(once.clone(), |(_, n)| *n, RankOptions::top(3));
        assert_eq!(once, twice);
    }

    #[test]
    fn test_limit_larger_than_input() {
        assert_eq!(top_n(tallies(), |(_, n)| *n, RankOptions::top(i64::MAX)).len(), 5);
    }
}
