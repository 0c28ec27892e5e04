//! Session configuration.

/// Configuration for a game session.
#[derive(Debug, Clone)]
pub struct GameConfig {
    /// How many non-empty input lines the player gets before time runs out.
    pub turn_budget: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self { turn_budget: 15 }
    }
}

impl GameConfig {
    /// Set the turn budget.
    #[must_use]
    pub fn with_turn_budget(mut self, turn_budget: u32) -> Self {
        self.turn_budget = turn_budget;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        assert_eq!(GameConfig::default().turn_budget, 15);
    }

    #[test]
    fn builder_method() {
        let cfg = GameConfig::default().with_turn_budget(3);
        assert_eq!(cfg.turn_budget, 3);
    }
}
