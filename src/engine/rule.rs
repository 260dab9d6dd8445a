/// A cell has at most 8 live neighbours, so counts range over `0..=8`
const COUNTS: usize = 9;
type RuleTable = [[bool; COUNTS]; 2];

/// Lookup table for B3/S23, indexed by `[alive as usize][neighbours]`
static LIFE_RULE: RuleTable = generate_rule_table();

/// Builds the lookup table for the Game of Life ruleset
///
/// A dead cell with exactly 3 live neighbours is born, a live cell with
/// 2 or 3 live neighbours survives, every other cell is dead.
const fn generate_rule_table() -> RuleTable {
    let mut table = [[false; COUNTS]; 2];
    let mut neighbours = 0;
    while neighbours < COUNTS {
        table[0][neighbours] = neighbours == 3;
        table[1][neighbours] = neighbours == 2 || neighbours == 3;
        neighbours += 1;
    }
    table
}

/// Whether a cell is alive in the next generation
#[inline]
pub fn next_state(alive: bool, neighbours: u8) -> bool {
    LIFE_RULE[alive as usize]
        .get(neighbours as usize)
        .copied()
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rules_match_conway_life() {
        assert!(next_state(true, 2));
        assert!(next_state(true, 3));
        assert!(next_state(false, 3));

        assert!(!next_state(true, 0));
        assert!(!next_state(true, 1));
        assert!(!next_state(true, 4));
        assert!(!next_state(false, 2));
        assert!(!next_state(false, 4));
    }

    #[test]
    fn crowded_cells_always_die() {
        for neighbours in 4..=8 {
            assert!(!next_state(true, neighbours));
            assert!(!next_state(false, neighbours));
        }
    }

    #[test]
    fn out_of_range_counts_are_dead() {
        assert!(!next_state(true, 9));
        assert!(!next_state(false, u8::MAX));
    }
}
