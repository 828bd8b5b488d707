/// An item paired with the score it was ranked by.
#[derive(Debug, Clone, PartialEq)]
pub struct Ranked<T> {
    pub item: T,
    pub score: f64,
}

/// Sorts descending by score and keeps the first `limit`. Ties keep their
/// input order.
pub fn rank_by_score<T, F>(items: Vec<T>, limit: usize, score: F) -> Vec<Ranked<T>>
where
    F: Fn(&T) -> f64,
{
    let mut ranked: Vec<Ranked<T>> = items
        .into_iter()
        .map(|item| {
            let score = score(&item);
            Ranked { item, score }
        })
        .collect();

    ranked.sort_by(|a, b| b.score.total_cmp(&a.score));
    ranked.truncate(limit);
    ranked
}
