use serde::{Deserialize, Serialize};

use crate::model::{Factor, Order};

/// Selections made on the setup screen before a session starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    multiplier: Factor,
    order: Order,
    voice_enabled: bool,
}

impl SessionConfig {
    #[must_use]
    pub fn new(multiplier: Factor, order: Order, voice_enabled: bool) -> Self {
        Self {
            multiplier,
            order,
            voice_enabled,
        }
    }

    #[must_use]
    pub fn multiplier(&self) -> Factor {
        self.multiplier
    }

    #[must_use]
    pub fn order(&self) -> Order {
        self.order
    }

    #[must_use]
    pub fn voice_enabled(&self) -> bool {
        self.voice_enabled
    }

    #[must_use]
    pub fn with_multiplier(mut self, multiplier: Factor) -> Self {
        self.multiplier = multiplier;
        self
    }

    #[must_use]
    pub fn with_order(mut self, order: Order) -> Self {
        self.order = order;
        self
    }

    #[must_use]
    pub fn with_voice(mut self, enabled: bool) -> Self {
        self.voice_enabled = enabled;
        self
    }

    pub fn set_multiplier(&mut self, multiplier: Factor) {
        self.multiplier = multiplier;
    }

    pub fn set_order(&mut self, order: Order) {
        self.order = order;
    }

    pub fn set_voice_enabled(&mut self, enabled: bool) {
        self.voice_enabled = enabled;
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            multiplier: Factor::default(),
            order: Order::default(),
            voice_enabled: true,
        }
    }
}
