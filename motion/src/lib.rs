#![warn(clippy::pedantic)]
#![allow(clippy::float_cmp)]

//! Closed-form kinematic motion profiles for animating a scalar.
//!
//! A [`MotionProfile`] models a particle that starts at rest, accelerates
//! at a constant rate, optionally cruises at a speed cap, then
//! decelerates at the same rate to arrive at rest exactly at its target.
//! Every breakpoint of the trajectory is computed once at construction;
//! [`position`] and [`velocity`] are pure functions of time, so an
//! animation driver may sample at arbitrary or skipped timestamps
//! without accumulating error.
//!
//! [`position`]: MotionProfile::position
//! [`velocity`]: MotionProfile::velocity

/// A three-phase (accelerate / cruise / decelerate) trajectory for one
/// animated scalar, such as a rotation angle.
///
/// When the travel distance is too short to reach the speed cap the
/// cruise phase is empty and the velocity profile is triangular; both
/// inflection breakpoints then coincide at the midpoint.
#[derive(Clone, Copy, Debug)]
pub struct MotionProfile {
    start_point: f64,
    inflect_point1: f64,
    inflect_point2: f64,
    end_point: f64,

    /// Moment when the particle begins motion.
    start_time: f64,
    /// Moment when the particle stops accelerating.
    inflect_time1: f64,
    /// Moment when the particle starts decelerating.
    inflect_time2: f64,
    /// Moment when the particle comes to rest at the end point.
    end_time: f64,

    total_displacement: f64,
    total_distance: f64,
    /// Direction of travel, either +1 or -1.
    direction: f64,
    /// Peak absolute change in position per unit of time.
    peak_speed: f64,
    /// Change in speed per unit of time during the ramp phases.
    acceleration: f64,
}

impl MotionProfile {
    /// Plan a motion from `start_point` to `end_point` beginning at
    /// `start_time`, never exceeding `max_speed`, ramping speed up and
    /// down at `acceleration`.
    ///
    /// A zero-length motion is valid; it finishes at `start_time` and
    /// is treated as traveling in the positive direction.
    ///
    /// # Panics
    ///
    /// Panics unless `max_speed` and `acceleration` are both positive.
    #[must_use]
    pub fn new(
        start_point: f64,
        end_point: f64,
        start_time: f64,
        max_speed: f64,
        acceleration: f64,
    ) -> MotionProfile {
        assert!(max_speed > 0.0, "max speed must be positive");
        assert!(acceleration > 0.0, "acceleration must be positive");

        let total_displacement = end_point - start_point;
        let total_distance = total_displacement.abs();
        let direction = if end_point >= start_point { 1.0 } else { -1.0 };

        // Short displacement: the speed cap is never reached and the
        // velocity profile is a triangle.
        if max_speed * max_speed > total_distance * acceleration {
            let accel_duration = (total_distance / acceleration).sqrt();
            let inflect_time = start_time + accel_duration;
            let midpoint = start_point + 0.5 * total_displacement;

            MotionProfile {
                start_point,
                inflect_point1: midpoint,
                inflect_point2: midpoint,
                end_point,
                start_time,
                inflect_time1: inflect_time,
                inflect_time2: inflect_time,
                end_time: inflect_time + accel_duration,
                total_displacement,
                total_distance,
                direction,
                peak_speed: (total_distance * acceleration).sqrt(),
                acceleration,
            }
        }
        // Otherwise the particle reaches the cap and cruises at it for a
        // while; the velocity profile is a trapezoid.
        else {
            let accel_duration = max_speed / acceleration;
            let cruise_duration = total_distance / max_speed - max_speed / acceleration;

            let inflect_time1 = start_time + accel_duration;
            let inflect_time2 = inflect_time1 + cruise_duration;
            let inflect_point1 =
                start_point + direction * 0.5 * max_speed * max_speed / acceleration;
            let inflect_point2 = inflect_point1 + direction * max_speed * cruise_duration;

            MotionProfile {
                start_point,
                inflect_point1,
                inflect_point2,
                end_point,
                start_time,
                inflect_time1,
                inflect_time2,
                end_time: inflect_time2 + accel_duration,
                total_displacement,
                total_distance,
                direction,
                peak_speed: max_speed,
                acceleration,
            }
        }
    }

    /// The particle's position at the given time, clamped to the start
    /// and end points outside the motion interval.
    #[must_use]
    pub fn position(&self, time: f64) -> f64 {
        if time < self.start_time {
            self.start_point
        } else if time < self.inflect_time1 {
            let dt = time - self.start_time;
            self.start_point + self.direction * 0.5 * self.acceleration * dt * dt
        } else if time < self.inflect_time2 {
            let dt = time - self.inflect_time1;
            self.inflect_point1 + self.direction * self.peak_speed * dt
        } else if time < self.end_time {
            let dt = time - self.inflect_time2;
            self.inflect_point2
                + self.direction * (self.peak_speed * dt - 0.5 * self.acceleration * dt * dt)
        } else {
            self.end_point
        }
    }

    /// The particle's signed velocity at the given time; zero outside
    /// the motion interval.
    #[must_use]
    pub fn velocity(&self, time: f64) -> f64 {
        let speed = if time < self.start_time {
            0.0
        } else if time < self.inflect_time1 {
            self.acceleration * (time - self.start_time)
        } else if time < self.inflect_time2 {
            self.peak_speed
        } else if time < self.end_time {
            self.peak_speed - self.acceleration * (time - self.inflect_time2)
        } else {
            0.0
        };

        speed * self.direction
    }

    /// Whether the motion has completed by the given time. Callers use
    /// this to detach the animation and snap to the exact end point.
    #[must_use]
    pub fn has_finished(&self, time: f64) -> bool {
        time >= self.end_time
    }

    /// Total time the particle spends in motion.
    #[must_use]
    pub fn duration(&self) -> f64 {
        self.end_time - self.start_time
    }

    #[must_use]
    pub fn start_point(&self) -> f64 {
        self.start_point
    }

    #[must_use]
    pub fn end_point(&self) -> f64 {
        self.end_point
    }

    #[must_use]
    pub fn start_time(&self) -> f64 {
        self.start_time
    }

    #[must_use]
    pub fn end_time(&self) -> f64 {
        self.end_time
    }

    /// Signed difference between the end and start points.
    #[must_use]
    pub fn total_displacement(&self) -> f64 {
        self.total_displacement
    }

    /// Absolute distance covered over the whole motion.
    #[must_use]
    pub fn total_distance(&self) -> f64 {
        self.total_distance
    }

    #[must_use]
    pub fn peak_speed(&self) -> f64 {
        self.peak_speed
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn trapezoidal_breakpoints_and_samples() {
        // Distance 10 at cap 2 and ramp 1: 2s ramp up, 3s cruise, 2s
        // ramp down.
        let profile = MotionProfile::new(0.0, 10.0, 0.0, 2.0, 1.0);

        assert_relative_eq!(profile.start_time(), 0.0);
        assert_relative_eq!(profile.inflect_time1, 2.0);
        assert_relative_eq!(profile.inflect_time2, 5.0);
        assert_relative_eq!(profile.end_time(), 7.0);
        assert_relative_eq!(profile.duration(), 7.0);
        assert_relative_eq!(profile.peak_speed(), 2.0);
        assert_relative_eq!(profile.inflect_point1, 2.0);
        assert_relative_eq!(profile.inflect_point2, 8.0);

        assert_relative_eq!(profile.position(1.0), 0.5);
        assert_relative_eq!(profile.position(3.0), 4.0);
        assert_relative_eq!(profile.position(6.0), 9.5);
    }

    #[test]
    fn triangular_profile_peaks_at_the_midpoint() {
        // Distance 1 with a cap of 10 never reaches the cap.
        let profile = MotionProfile::new(0.0, 1.0, 0.0, 10.0, 1.0);

        assert_relative_eq!(profile.inflect_time1, 1.0);
        assert_relative_eq!(profile.inflect_time2, 1.0);
        assert_relative_eq!(profile.end_time(), 2.0);
        assert_relative_eq!(profile.peak_speed(), 1.0);
        assert_relative_eq!(profile.inflect_point1, 0.5);
        assert_relative_eq!(profile.inflect_point2, 0.5);

        assert_relative_eq!(profile.position(0.5), 0.125);
        assert_relative_eq!(profile.position(1.5), 0.875);
        assert_relative_eq!(profile.velocity(1.5), 0.5);
    }

    #[test]
    fn positions_clamp_to_the_endpoints() {
        let profile = MotionProfile::new(3.0, -2.0, 1.0, 4.0, 2.0);

        assert_relative_eq!(profile.position(profile.start_time()), 3.0);
        assert_relative_eq!(profile.position(profile.end_time()), -2.0);
        assert_relative_eq!(profile.position(-100.0), 3.0);
        assert_relative_eq!(profile.position(100.0), -2.0);
        assert_relative_eq!(profile.velocity(-100.0), 0.0);
        assert_relative_eq!(profile.velocity(100.0), 0.0);
    }

    #[test]
    fn finishes_exactly_at_the_end_time() {
        let profile = MotionProfile::new(0.0, 10.0, 0.0, 2.0, 1.0);

        assert!(profile.has_finished(profile.end_time()));
        assert!(profile.has_finished(profile.end_time() + 1.0));
        assert!(!profile.has_finished(profile.end_time() - 1e-9));
        assert!(!profile.has_finished(profile.start_time()));
    }

    #[test]
    fn ascending_motion_never_moves_backwards() {
        let profile = MotionProfile::new(0.0, 10.0, 0.0, 2.0, 1.0);

        let mut previous = profile.position(0.0);
        for step in 1..=700 {
            let time = f64::from(step) * 0.01;
            let current = profile.position(time);
            assert!(current >= previous, "regressed at t = {time}");
            previous = current;
        }
        assert_relative_eq!(previous, 10.0);
    }

    #[test]
    fn descending_motion_mirrors_ascending() {
        let profile = MotionProfile::new(10.0, 0.0, 0.0, 2.0, 1.0);

        assert_relative_eq!(profile.total_displacement(), -10.0);
        assert_relative_eq!(profile.total_distance(), 10.0);
        assert_relative_eq!(profile.position(1.0), 9.5);
        assert_relative_eq!(profile.position(3.0), 6.0);
        assert!(profile.velocity(3.0) < 0.0);
        assert_relative_eq!(profile.position(profile.end_time()), 0.0);
    }

    #[test]
    fn velocity_ramps_cruises_and_ramps_down() {
        let profile = MotionProfile::new(0.0, 10.0, 0.0, 2.0, 1.0);

        assert_relative_eq!(profile.velocity(0.0), 0.0);
        assert_relative_eq!(profile.velocity(1.0), 1.0);
        assert_relative_eq!(profile.velocity(3.0), 2.0);
        assert_relative_eq!(profile.velocity(4.5), 2.0);
        assert_relative_eq!(profile.velocity(6.0), 1.0);
        assert_relative_eq!(profile.velocity(7.0), 0.0);
    }

    #[test]
    fn zero_length_motion_finishes_immediately() {
        let profile = MotionProfile::new(5.0, 5.0, 2.0, 1.0, 1.0);

        assert_relative_eq!(profile.end_time(), 2.0);
        assert_relative_eq!(profile.position(2.0), 5.0);
        assert_relative_eq!(profile.position(1.0), 5.0);
        assert_relative_eq!(profile.position(3.0), 5.0);
        assert!(profile.has_finished(2.0));
    }

    #[test]
    #[should_panic(expected = "max speed must be positive")]
    fn rejects_a_nonpositive_speed_cap() {
        let _ = MotionProfile::new(0.0, 1.0, 0.0, 0.0, 1.0);
    }

    #[test]
    #[should_panic(expected = "acceleration must be positive")]
    fn rejects_a_nonpositive_acceleration() {
        let _ = MotionProfile::new(0.0, 1.0, 0.0, 1.0, -1.0);
    }
}
