//! Distance, speed and calorie calculators for each activity kind.
//!
//! Every kind implements [`Training`]. The calorie formula has no default body, so a new
//! kind cannot be added without one. [`Workout`] is the closed set the dispatcher returns.

use crate::{
    info_message::InfoMessage,
    models::{ActivityKind, Sample},
};

/// Distance covered by one step, in meters.
pub const LEN_STEP: f64 = 0.65;
/// Meters in a kilometer.
pub const M_IN_KM: f64 = 1000.0;
/// Minutes in an hour.
pub const MIN_IN_H: f64 = 60.0;

pub trait Training {
    fn kind(&self) -> ActivityKind;

    /// Duration in hours.
    fn duration(&self) -> f64;

    /// Distance in kilometers.
    fn distance(&self) -> f64;

    /// Mean speed in km/h.
    fn mean_speed(&self) -> f64;

    /// Calories burned in kcal.
    fn spent_calories(&self) -> f64;

    fn show_training_info(&self) -> InfoMessage {
        InfoMessage {
            training_type: self.kind().label().to_string(),
            duration: self.duration(),
            distance: self.distance(),
            speed: self.mean_speed(),
            calories: self.spent_calories(),
        }
    }
}

fn step_distance(sample: &Sample, len_step: f64) -> f64 {
    f64::from(sample.action()) * len_step / M_IN_KM
}

#[derive(Debug, Clone, PartialEq)]
pub struct Running {
    sample: Sample,
}

impl Running {
    pub const CALORIES_MEAN_SPEED_MULTIPLIER: f64 = 18.0;
    pub const CALORIES_MEAN_SPEED_SHIFT: f64 = 1.79;

    pub fn new(sample: Sample) -> Self {
        Self { sample }
    }
}

impl Training for Running {
    fn kind(&self) -> ActivityKind {
        ActivityKind::Running
    }

    fn duration(&self) -> f64 {
        self.sample.duration()
    }

    fn distance(&self) -> f64 {
        step_distance(&self.sample, LEN_STEP)
    }

    fn mean_speed(&self) -> f64 {
        self.distance() / self.sample.duration()
    }

    fn spent_calories(&self) -> f64 {
        (Self::CALORIES_MEAN_SPEED_MULTIPLIER * self.mean_speed()
            + Self::CALORIES_MEAN_SPEED_SHIFT)
            * self.sample.weight()
            / M_IN_KM
            * self.sample.duration()
            * MIN_IN_H
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SportsWalking {
    sample: Sample,
    /// Centimeters.
    height: f64,
}

impl SportsWalking {
    pub const CALORIES_WEIGHT_MULTIPLIER: f64 = 0.035;
    pub const CALORIES_SPEED_HEIGHT_MULTIPLIER: f64 = 0.029;
    /// Converts km/h to m/s.
    pub const KMH_IN_MSEC: f64 = 0.278;
    pub const CM_IN_M: f64 = 100.0;

    pub fn new(sample: Sample, height: f64) -> Self {
        Self { sample, height }
    }

    pub fn height(&self) -> f64 {
        self.height
    }
}

impl Training for SportsWalking {
    fn kind(&self) -> ActivityKind {
        ActivityKind::Walking
    }

    fn duration(&self) -> f64 {
        self.sample.duration()
    }

    fn distance(&self) -> f64 {
        step_distance(&self.sample, LEN_STEP)
    }

    fn mean_speed(&self) -> f64 {
        self.distance() / self.sample.duration()
    }

    fn spent_calories(&self) -> f64 {
        let weight = self.sample.weight();
        let speed_msec = self.mean_speed() * Self::KMH_IN_MSEC;
        (Self::CALORIES_WEIGHT_MULTIPLIER * weight
            + speed_msec.powi(2) / (self.height / Self::CM_IN_M)
                * Self::CALORIES_SPEED_HEIGHT_MULTIPLIER
                * weight)
            * self.sample.duration()
            * MIN_IN_H
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Swimming {
    sample: Sample,
    /// Meters.
    length_pool: f64,
    count_pool: f64,
}

impl Swimming {
    /// Distance covered by one stroke, in meters.
    pub const LEN_STEP: f64 = 1.38;
    pub const CALORIES_MEAN_SPEED_SHIFT: f64 = 1.1;
    pub const CALORIES_WEIGHT_MULTIPLIER: f64 = 2.0;

    pub fn new(sample: Sample, length_pool: f64, count_pool: f64) -> Self {
        Self {
            sample,
            length_pool,
            count_pool,
        }
    }

    pub fn length_pool(&self) -> f64 {
        self.length_pool
    }

    pub fn count_pool(&self) -> f64 {
        self.count_pool
    }
}

impl Training for Swimming {
    fn kind(&self) -> ActivityKind {
        ActivityKind::Swimming
    }

    fn duration(&self) -> f64 {
        self.sample.duration()
    }

    fn distance(&self) -> f64 {
        step_distance(&self.sample, Self::LEN_STEP)
    }

    // Measured from pool geometry, not from the stroke count.
    fn mean_speed(&self) -> f64 {
        self.length_pool * self.count_pool / M_IN_KM / self.sample.duration()
    }

    fn spent_calories(&self) -> f64 {
        (self.mean_speed() + Self::CALORIES_MEAN_SPEED_SHIFT)
            * Self::CALORIES_WEIGHT_MULTIPLIER
            * self.sample.weight()
            * self.sample.duration()
    }
}

/// A workout of any supported kind.
#[derive(Debug, Clone, PartialEq)]
pub enum Workout {
    Running(Running),
    Walking(SportsWalking),
    Swimming(Swimming),
}

impl Workout {
    fn as_training(&self) -> &dyn Training {
        match self {
            Workout::Running(t) => t,
            Workout::Walking(t) => t,
            Workout::Swimming(t) => t,
        }
    }
}

impl Training for Workout {
    fn kind(&self) -> ActivityKind {
        self.as_training().kind()
    }

    fn duration(&self) -> f64 {
        self.as_training().duration()
    }

    fn distance(&self) -> f64 {
        self.as_training().distance()
    }

    fn mean_speed(&self) -> f64 {
        self.as_training().mean_speed()
    }

    fn spent_calories(&self) -> f64 {
        self.as_training().spent_calories()
    }
}

impl From<Running> for Workout {
    fn from(t: Running) -> Self {
        Workout::Running(t)
    }
}

impl From<SportsWalking> for Workout {
    fn from(t: SportsWalking) -> Self {
        Workout::Walking(t)
    }
}

impl From<Swimming> for Workout {
    fn from(t: Swimming) -> Self {
        Workout::Swimming(t)
    }
}
