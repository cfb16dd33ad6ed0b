use std::num::NonZeroUsize;

/// Step pointer of a multi-step form, always inside `[0, total - 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepNavigator {
    current: usize,
    total: NonZeroUsize,
}

impl StepNavigator {
    /// Starts at `initial`, clamped to the last step.
    pub fn new(total: NonZeroUsize, initial: usize) -> Self {
        Self {
            current: initial.min(total.get() - 1),
            total,
        }
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn total_steps(&self) -> usize {
        self.total.get()
    }

    pub fn is_first_step(&self) -> bool {
        self.current == 0
    }

    pub fn is_last_step(&self) -> bool {
        self.current + 1 == self.total.get()
    }

    pub fn has_next(&self) -> bool {
        !self.is_last_step()
    }

    pub fn has_prev(&self) -> bool {
        !self.is_first_step()
    }

    pub fn contains(&self, index: usize) -> bool {
        index < self.total.get()
    }

    /// Moves one step forward. Returns `false` on the last step.
    pub fn advance(&mut self) -> bool {
        if !self.has_next() {
            return false;
        }
        self.current += 1;
        true
    }

    /// Moves one step back. Returns `false` on the first step.
    pub fn retreat(&mut self) -> bool {
        if !self.has_prev() {
            return false;
        }
        self.current -= 1;
        true
    }

    /// Points at `index` when it names a step; anything else is ignored.
    pub fn jump_to(&mut self, index: usize) -> bool {
        if !self.contains(index) {
            return false;
        }
        self.current = index;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::StepNavigator;
    use std::num::NonZeroUsize;

    fn navigator(total: usize) -> StepNavigator {
        StepNavigator::new(NonZeroUsize::new(total).expect("non-zero"), 0)
    }

    #[test]
    fn stays_in_range_for_any_move_sequence() {
        for total in 1..=6 {
            let mut nav = navigator(total);
            // Deterministic mix of forward-heavy and backward-heavy runs.
            let pattern = [
                true, true, false, true, true, true, true, false, false, false, false, false,
                false, true,
            ];
            for round in 0..4 {
                for (i, forward) in pattern.iter().enumerate() {
                    if *forward ^ ((round + i) % 5 == 0) {
                        nav.advance();
                    } else {
                        nav.retreat();
                    }
                    assert!(
                        nav.current_index() < total,
                        "total={total} index={}",
                        nav.current_index()
                    );
                }
            }
        }
    }

    #[test]
    fn advance_on_last_step_is_noop() {
        let mut nav = navigator(3);
        assert!(nav.jump_to(2));
        assert!(nav.is_last_step());
        assert!(!nav.advance());
        assert_eq!(nav.current_index(), 2);
    }

    #[test]
    fn retreat_on_first_step_is_noop() {
        let mut nav = navigator(3);
        assert!(nav.is_first_step());
        assert!(!nav.retreat());
        assert_eq!(nav.current_index(), 0);
    }

    #[test]
    fn out_of_range_jump_is_ignored() {
        let mut nav = navigator(4);
        nav.advance();
        assert!(!nav.jump_to(4));
        assert!(!nav.jump_to(usize::MAX));
        assert_eq!(nav.current_index(), 1);
    }

    #[test]
    fn valid_jump_lands_exactly() {
        let mut nav = navigator(5);
        for target in [4, 0, 3, 3, 1] {
            assert!(nav.jump_to(target));
            assert_eq!(nav.current_index(), target);
        }
    }

    #[test]
    fn single_step_form_is_both_first_and_last() {
        let mut nav = navigator(1);
        assert!(nav.is_first_step());
        assert!(nav.is_last_step());
        assert!(!nav.advance());
        assert!(!nav.retreat());
    }

    #[test]
    fn initial_step_is_clamped() {
        let nav = StepNavigator::new(NonZeroUsize::new(3).expect("non-zero"), 9);
        assert_eq!(nav.current_index(), 2);
    }
}
