//! Fit strategies: choosing the hole that serves a request.

use super::block_list::{Block, BlockList};

/// Rule for selecting which hole satisfies a size request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FitStrategy {
    /// First hole in address order that is large enough.
    FirstFit,
    /// Smallest sufficient hole; ties go to the lowest address.
    BestFit,
    /// Largest sufficient hole; ties go to the lowest address.
    WorstFit,
}

impl FitStrategy {
    /// All strategies, in the order the simulator sweeps them.
    pub const ALL: [FitStrategy; 3] = [
        FitStrategy::BestFit,
        FitStrategy::WorstFit,
        FitStrategy::FirstFit,
    ];

    /// Stable snake_case label used in file names and log records.
    pub fn label(&self) -> &'static str {
        match self {
            FitStrategy::FirstFit => "first_fit",
            FitStrategy::BestFit => "best_fit",
            FitStrategy::WorstFit => "worst_fit",
        }
    }
}

/// Selects the hole that serves a request of `size` units, without
/// mutating the list. Returns a copy of the winning hole.
pub(crate) fn find_fit(holes: &BlockList, size: usize, strategy: FitStrategy) -> Option<Block> {
    match strategy {
        FitStrategy::FirstFit => first_fit(holes, size),
        FitStrategy::BestFit => best_fit(holes, size),
        FitStrategy::WorstFit => worst_fit(holes, size),
    }
}

fn first_fit(holes: &BlockList, size: usize) -> Option<Block> {
    holes.iter().find(|h| h.size >= size).copied()
}

fn best_fit(holes: &BlockList, size: usize) -> Option<Block> {
    let mut best: Option<Block> = None;
    for hole in holes {
        if hole.size < size {
            continue;
        }
        // Strict < keeps the lowest-addressed hole among equal sizes.
        if best.is_none_or(|b| hole.size < b.size) {
            best = Some(*hole);
        }
        if hole.size == size {
            // An exact match cannot be beaten.
            break;
        }
    }
    best
}

fn worst_fit(holes: &BlockList, size: usize) -> Option<Block> {
    let mut worst: Option<Block> = None;
    for hole in holes {
        if hole.size < size {
            continue;
        }
        // Strict > means a later hole of equal size never replaces an
        // earlier one.
        if worst.is_none_or(|w| hole.size > w.size) {
            worst = Some(*hole);
        }
    }
    worst
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Hole sizes [10, 5, 20] at increasing addresses.
    fn sample_holes() -> BlockList {
        let mut holes = BlockList::new();
        holes.insert(Block::new(0, 10));
        holes.insert(Block::new(30, 5));
        holes.insert(Block::new(60, 20));
        holes
    }

    #[test]
    fn test_first_fit_takes_first_sufficient_hole() {
        let holes = sample_holes();
        assert_eq!(
            find_fit(&holes, 5, FitStrategy::FirstFit),
            Some(Block::new(0, 10))
        );
    }

    #[test]
    fn test_best_fit_takes_exact_match() {
        let holes = sample_holes();
        assert_eq!(
            find_fit(&holes, 5, FitStrategy::BestFit),
            Some(Block::new(30, 5))
        );
    }

    #[test]
    fn test_worst_fit_takes_largest_hole() {
        let holes = sample_holes();
        assert_eq!(
            find_fit(&holes, 5, FitStrategy::WorstFit),
            Some(Block::new(60, 20))
        );
    }

    #[test]
    fn test_no_sufficient_hole_is_none() {
        let holes = sample_holes();
        for strategy in FitStrategy::ALL {
            assert_eq!(find_fit(&holes, 21, strategy), None);
        }
    }

    #[test]
    fn test_best_fit_tie_goes_to_lowest_address() {
        let mut holes = BlockList::new();
        holes.insert(Block::new(0, 8));
        holes.insert(Block::new(20, 8));
        assert_eq!(
            find_fit(&holes, 6, FitStrategy::BestFit),
            Some(Block::new(0, 8))
        );
    }

    #[test]
    fn test_worst_fit_tie_goes_to_lowest_address() {
        let mut holes = BlockList::new();
        holes.insert(Block::new(0, 8));
        holes.insert(Block::new(20, 8));
        assert_eq!(
            find_fit(&holes, 6, FitStrategy::WorstFit),
            Some(Block::new(0, 8))
        );
    }

    #[test]
    fn test_empty_list_declines() {
        let holes = BlockList::new();
        for strategy in FitStrategy::ALL {
            assert_eq!(find_fit(&holes, 1, strategy), None);
        }
    }
}
