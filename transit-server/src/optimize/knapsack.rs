//! 0/1 knapsack selection of stations under a time budget.

use serde::Serialize;
use tracing::debug;

use crate::domain::Item;

/// Items chosen by [`maximize_value`], in their original input order.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct Selection {
    pub items: Vec<Item>,
    pub total_weight: u64,
    pub total_value: u64,
}

/// Choose the subset of `items` with the greatest total value whose total
/// weight does not exceed `capacity`.
///
/// Dynamic programming over an `(n + 1) × (capacity + 1)` table, so both time
/// and memory are O(n · capacity). When several subsets reach the optimum,
/// which one is returned is an artefact of the reconstruction walk and
/// should not be relied upon.
pub fn maximize_value(items: &[Item], capacity: u32) -> Selection {
    let n = items.len();
    let cap = capacity as usize;

    // best[i][t]: best value using the first i items within budget t
    let mut best = vec![vec![0u64; cap + 1]; n + 1];

    for (i, item) in items.iter().enumerate() {
        let weight = item.weight as usize;
        let value = u64::from(item.value);

        for t in 0..=cap {
            let skip = best[i][t];
            best[i + 1][t] = if weight <= t {
                skip.max(best[i][t - weight] + value)
            } else {
                skip
            };
        }
    }

    // item i was taken iff including it changed the optimum at this budget
    let mut chosen = Vec::new();
    let mut t = cap;
    for i in (1..=n).rev() {
        if best[i][t] != best[i - 1][t] {
            let item = &items[i - 1];
            chosen.push(item.clone());
            t -= item.weight as usize;
        }
    }
    chosen.reverse();

    let selection = Selection {
        total_weight: chosen.iter().map(|it| u64::from(it.weight)).sum(),
        total_value: chosen.iter().map(|it| u64::from(it.value)).sum(),
        items: chosen,
    };

    debug!(
        candidates = n,
        capacity,
        chosen = selection.items.len(),
        total_value = selection.total_value,
        "knapsack solved"
    );

    selection
}
