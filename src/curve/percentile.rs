use super::types::ScoredMember;

/// A member's place in the ascending score order
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RankedMember {
    /// Position of the member in the input population
    pub index: usize,
    /// Midpoint plotting position, always inside (0, 1)
    pub percentile: f64,
}

/// Sorts the population ascending by score and assigns `(rank + 0.5) / n`.
/// Ties keep their input order.
pub fn assign_percentiles(population: &[ScoredMember]) -> Vec<RankedMember> {
    let n = population.len();
    let order = sort_indices_by_score(population);

    order
        .into_iter()
        .enumerate()
        .map(|(rank, index)| RankedMember {
            index,
            percentile: plotting_position(rank, n),
        })
        .collect()
}

fn sort_indices_by_score(population: &[ScoredMember]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..population.len()).collect();
    // Vec::sort_by is stable
    order.sort_by(|&a, &b| population[a].score.total_cmp(&population[b].score));
    order
}

fn plotting_position(rank: usize, n: usize) -> f64 {
    (rank as f64 + 0.5) / n as f64
}
