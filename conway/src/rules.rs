// rules.rs - Conway's B3/S23 rule

/// Next state of a cell from its current state and live-neighbour count.
pub fn next_state(alive: bool, live_neighbours: u8) -> bool {
    match (alive, live_neighbours) {
        (true, 2) | (true, 3) => true,   // Survival
        (false, 3)            => true,   // Birth
        _                     => false,  // Under/overpopulation, or stays dead
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_rule_table() {
        //                 count: 0      1      2      3      4      5      6      7      8
        let alive_expected = [false, false, true,  true,  false, false, false, false, false];
        let dead_expected  = [false, false, false, true,  false, false, false, false, false];

        for count in 0..=8u8 {
            assert_eq!(next_state(true, count), alive_expected[count as usize], "alive, {count} neighbours");
            assert_eq!(next_state(false, count), dead_expected[count as usize], "dead, {count} neighbours");
        }
    }

    #[test]
    fn named_cases() {
        assert!(!next_state(true, 1));   // underpopulation
        assert!(next_state(true, 2));
        assert!(next_state(true, 3));
        assert!(!next_state(true, 4));   // overpopulation
        assert!(next_state(false, 3));   // reproduction
        assert!(!next_state(false, 2));
    }
}
