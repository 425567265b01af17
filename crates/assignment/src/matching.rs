use super::Costs;
use ct_core::Pixels;

/// A solved assignment: for each item row, the slot column it was matched
/// to, plus the total ground cost of the matching.
///
/// The mapping is always injective and total over rows. Total cost is
/// deterministic for identical inputs; the particular mapping may differ
/// between runs only where ties make several optima equally cheap.
#[derive(Debug, Clone, PartialEq)]
pub struct Matching {
    slots: Vec<usize>,
    cost: Pixels,
}

impl Matching {
    /// Slot assigned to the given item row.
    pub fn slot(&self, row: usize) -> usize {
        self.slots[row]
    }
    /// Item -> slot pairs in row order.
    pub fn pairs(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.slots.iter().copied().enumerate()
    }
    /// Total ground cost of the matching.
    pub fn cost(&self) -> Pixels {
        self.cost
    }
    pub fn len(&self) -> usize {
        self.slots.len()
    }
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

impl Costs {
    /// Solves the assignment problem exactly.
    ///
    /// One shortest-augmenting-path sweep per row: reduced costs
    /// `c[i][j] - u[i] - v[j]` stay nonnegative on matched edges, so each
    /// Dijkstra pass extends the matching by exactly one optimal edge and
    /// the duals are repaired from the path costs. Zero rows short-circuit
    /// to the empty matching.
    pub fn minimize(&self) -> Matching {
        let rows = self.rows();
        let cols = self.cols();
        let mut u = vec![0f32; rows];
        let mut v = vec![0f32; cols];
        // col matched to each row, row matched to each col
        let mut slot_of = vec![usize::MAX; rows];
        let mut item_of = vec![usize::MAX; cols];
        for row in 0..rows {
            // Dijkstra over columns from this unmatched row.
            let mut shortest = vec![f32::INFINITY; cols];
            let mut reached_from = vec![usize::MAX; cols];
            let mut done = vec![false; cols];
            let mut on_path = vec![false; rows];
            let mut head = row;
            let mut lowest = 0f32;
            let sink = loop {
                on_path[head] = true;
                let mut next = usize::MAX;
                let mut bound = f32::INFINITY;
                for col in (0..cols).filter(|c| !done[*c]) {
                    let reduced = lowest + self.at(head, col) - u[head] - v[col];
                    if reduced < shortest[col] {
                        shortest[col] = reduced;
                        reached_from[col] = head;
                    }
                    // prefer an unmatched column on ties to finish sooner
                    if shortest[col] < bound
                        || (shortest[col] == bound && item_of[col] == usize::MAX)
                    {
                        bound = shortest[col];
                        next = col;
                    }
                }
                lowest = bound;
                done[next] = true;
                match item_of[next] {
                    usize::MAX => break next,
                    matched => head = matched,
                }
            };
            // repair duals along the explored frontier
            u[row] += lowest;
            for item in (0..rows).filter(|i| on_path[*i] && *i != row) {
                u[item] += lowest - shortest[slot_of[item]];
            }
            for col in (0..cols).filter(|c| done[*c]) {
                v[col] -= lowest - shortest[col];
            }
            // augment back along the alternating path
            let mut col = sink;
            loop {
                let item = reached_from[col];
                item_of[col] = item;
                std::mem::swap(&mut slot_of[item], &mut col);
                if item == row {
                    break;
                }
            }
        }
        let cost = slot_of
            .iter()
            .enumerate()
            .map(|(row, col)| self.at(row, *col))
            .sum();
        Matching {
            slots: slot_of,
            cost,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ct_core::Point;
    use rand::Rng;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;
    use std::collections::HashSet;

    /// Exhaustive minimum over all injective mappings, for cross-checking.
    fn brute_force(costs: &Costs) -> f32 {
        fn recurse(costs: &Costs, row: usize, used: &mut Vec<bool>) -> f32 {
            if row == costs.rows() {
                return 0.0;
            }
            let mut best = f32::INFINITY;
            for col in 0..costs.cols() {
                if used[col] {
                    continue;
                }
                used[col] = true;
                best = best.min(costs.at(row, col) + recurse(costs, row + 1, used));
                used[col] = false;
            }
            best
        }
        recurse(costs, 0, &mut vec![false; costs.cols()])
    }

    #[test]
    fn empty_problem_empty_matching() {
        let matching = Costs::new(0, 4, vec![]).minimize();
        assert!(matching.is_empty());
        assert_eq!(matching.cost(), 0.0);
    }
    #[test]
    fn identity_on_diagonal() {
        #[rustfmt::skip]
        let costs = Costs::new(3, 3, vec![
            0.0, 9.0, 9.0,
            9.0, 0.0, 9.0,
            9.0, 9.0, 0.0,
        ]);
        let matching = costs.minimize();
        assert_eq!(matching.cost(), 0.0);
        assert_eq!(matching.slot(0), 0);
        assert_eq!(matching.slot(1), 1);
        assert_eq!(matching.slot(2), 2);
    }
    #[test]
    fn avoids_greedy_trap() {
        // greedy takes (0,0)=1 then pays 10; optimum is 2 + 2
        #[rustfmt::skip]
        let costs = Costs::new(2, 2, vec![
            1.0, 2.0,
            2.0, 10.0,
        ]);
        let matching = costs.minimize();
        assert_eq!(matching.cost(), 4.0);
    }
    #[test]
    fn rectangular_leaves_slots_unused() {
        #[rustfmt::skip]
        let costs = Costs::new(2, 4, vec![
            5.0, 1.0, 6.0, 7.0,
            5.0, 2.0, 6.0, 1.0,
        ]);
        let matching = costs.minimize();
        assert_eq!(matching.cost(), 2.0);
        assert_eq!(matching.slot(0), 1);
        assert_eq!(matching.slot(1), 3);
    }
    #[test]
    fn matching_is_injective() {
        let mut rng = SmallRng::seed_from_u64(7);
        for _ in 0..64 {
            let rows = rng.random_range(1..7);
            let cols = rng.random_range(rows..9);
            let data = (0..rows * cols)
                .map(|_| rng.random_range(0.0..100.0f32))
                .collect();
            let matching = Costs::new(rows, cols, data).minimize();
            let used = matching.pairs().map(|(_, col)| col).collect::<HashSet<_>>();
            assert_eq!(used.len(), rows);
        }
    }
    #[test]
    fn agrees_with_brute_force() {
        let mut rng = SmallRng::seed_from_u64(42);
        for _ in 0..64 {
            let rows = rng.random_range(1..6);
            let cols = rng.random_range(rows..7);
            let data = (0..rows * cols)
                .map(|_| rng.random_range(0.0..50.0f32).round())
                .collect::<Vec<_>>();
            let costs = Costs::new(rows, cols, data);
            let matching = costs.minimize();
            assert_eq!(matching.cost(), brute_force(&costs));
        }
    }
    #[test]
    fn deterministic_cost() {
        let items = vec![Point::new(3.0, 4.0), Point::new(1.0, 1.0)];
        let slots = vec![Point::new(0.0, 0.0), Point::new(5.0, 5.0)];
        let a = Costs::squared(&items, &slots).minimize();
        let b = Costs::squared(&items, &slots).minimize();
        assert_eq!(a.cost(), b.cost());
    }
    #[test]
    fn squared_metric_shape() {
        let items = vec![Point::new(0.0, 0.0)];
        let slots = vec![Point::new(3.0, 4.0), Point::new(0.0, 1.0)];
        let costs = Costs::squared(&items, &slots);
        assert_eq!(costs.at(0, 0), 25.0);
        assert_eq!(costs.at(0, 1), 1.0);
        assert_eq!(costs.minimize().slot(0), 1);
    }
}
