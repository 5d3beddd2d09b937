use log::debug;
use rand::RngExt;
use std::time::Instant;

pub struct IntegerUtils;

impl IntegerUtils {
    /// Inclusive random integer, thread-local RNG. Engine paths take
    /// an injected RNG instead; this is for generators and tooling.
    pub fn random(min: i32, max: i32) -> i32 {
        rand::rng().random_range(min..=max)
    }
}

pub struct FloatUtils;

impl FloatUtils {
    pub fn random(min: f32, max: f32) -> f32 {
        rand::rng().random_range(min..=max)
    }
}

pub struct TimeEstimation;

impl TimeEstimation {
    pub fn estimate<T, F: FnOnce() -> T>(action: F) -> (T, u64) {
        let now = Instant::now();

        let result = action();

        (result, now.elapsed().as_millis() as u64)
    }
}

pub struct Logging;

impl Logging {
    pub fn estimate_result<T, F: FnOnce() -> T>(action: F, message: &str) -> T {
        let (result, elapsed) = TimeEstimation::estimate(action);

        debug!("{}, {} ms", message, elapsed);

        result
    }
}
