//! Summary of a finished workout and its console rendering.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Derived statistics for one workout. Produced once per package, never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InfoMessage {
    pub training_type: String,
    /// Hours.
    pub duration: f64,
    /// Kilometers.
    pub distance: f64,
    /// km/h.
    pub speed: f64,
    /// kcal.
    pub calories: f64,
}

impl InfoMessage {
    /// Renders the summary line with every number at three decimal places.
    pub fn message(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for InfoMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Тип тренировки: {}; Длительность: {:.3} ч.; Дистанция: {:.3} км; \
             Ср. скорость: {:.3} км/ч; Потрачено ккал: {:.3}.",
            self.training_type, self.duration, self.distance, self.speed, self.calories
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_pads_integers() {
        let info = InfoMessage {
            training_type: "SportsWalking".into(),
            duration: 1.0,
            distance: 5.0,
            speed: 5.0,
            calories: 100.0,
        };
        assert_eq!(
            info.message(),
            "Тип тренировки: SportsWalking; Длительность: 1.000 ч.; Дистанция: 5.000 км; \
             Ср. скорость: 5.000 км/ч; Потрачено ккал: 100.000."
        );
    }

    #[test]
    fn test_message_rounds_to_three_places() {
        let info = InfoMessage {
            training_type: "Swimming".into(),
            duration: 1.5,
            distance: 0.9936,
            speed: 12345.67891,
            calories: 0.0004,
        };
        let message = info.message();
        assert!(message.contains("Длительность: 1.500 ч."));
        assert!(message.contains("Дистанция: 0.994 км"));
        assert!(message.contains("Ср. скорость: 12345.679 км/ч"));
        assert!(message.ends_with("Потрачено ккал: 0.000."));
    }
}
