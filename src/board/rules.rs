//! Rule table generation for B3/S23, indexed by current state and live
//! neighbour count.

pub struct RuleTable {
    table: [[u8; 9]; 2],
}

impl RuleTable {
    pub const fn new() -> Self {
        let mut table = [[0u8; 9]; 2];
        let mut current = 0;
        while current < 2 {
            let mut neighbors = 0;
            while neighbors < 9 {
                table[current][neighbors] = output_for(current as u8, neighbors as u8);
                neighbors += 1;
            }
            current += 1;
        }
        Self { table }
    }

    #[inline(always)]
    pub fn lookup(&self, current: u8, neighbors: u8) -> u8 {
        self.table[current as usize][neighbors as usize]
    }
}

impl Default for RuleTable {
    fn default() -> Self {
        Self::new()
    }
}

pub static LIFE: RuleTable = RuleTable::new();

const fn output_for(current: u8, neighbors: u8) -> u8 {
    match neighbors {
        0 | 1 => 0,
        2 => current,
        3 => 1,
        _ => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::{LIFE, RuleTable};

    fn expected_output(current: u8, neighbors: u8) -> u8 {
        let alive = current == 1;
        let next_alive = if alive {
            neighbors == 2 || neighbors == 3
        } else {
            neighbors == 3
        };
        next_alive as u8
    }

    #[test]
    fn rule_table_matches_reference() {
        let table = RuleTable::new();
        for current in 0u8..=1 {
            for neighbors in 0u8..=8 {
                let expected = expected_output(current, neighbors);
                let got = table.lookup(current, neighbors);
                assert_eq!(
                    got, expected,
                    "state {current} with {neighbors} neighbours expected {expected} got {got}"
                );
            }
        }
    }

    #[test]
    fn two_neighbours_preserve_state() {
        assert_eq!(LIFE.lookup(0, 2), 0);
        assert_eq!(LIFE.lookup(1, 2), 1);
    }
}
