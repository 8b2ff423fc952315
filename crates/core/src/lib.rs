//! Core vectors, constants, and shared formatting primitives for the Precise
//! Maneuver workspace.

/// Calendar constants for the simulation clock (365-day years, 24-hour days).
pub mod constants {
    /// Seconds per minute.
    pub const SECONDS_PER_MINUTE: f64 = 60.0;
    /// Seconds per hour.
    pub const SECONDS_PER_HOUR: f64 = 3_600.0;
    /// Seconds per 24-hour day.
    pub const SECONDS_PER_DAY: f64 = 86_400.0;
    /// Days per simulation year.
    pub const DAYS_PER_YEAR: f64 = 365.0;
    /// Seconds per 365-day simulation year.
    pub const SECONDS_PER_YEAR: f64 = 31_536_000.0;
}

/// Degree-valued angle helpers.
pub mod angles {
    /// Wrap an angle in degrees into `[0, 360)`.
    pub fn normalize_degrees(degrees: f64) -> f64 {
        let wrapped = degrees % 360.0;
        if wrapped < 0.0 { wrapped + 360.0 } else { wrapped }
    }

    /// Fold an angle into the signed range `(-180, 180]`.
    ///
    /// Angles above 180° reflect as `180 - angle`, the prograde/retrograde
    /// offset convention used for ejection angles.
    pub fn fold_signed_degrees(degrees: f64) -> f64 {
        let wrapped = normalize_degrees(degrees);
        if wrapped > 180.0 {
            180.0 - wrapped
        } else {
            wrapped
        }
    }
}

/// Three-component vector in the maneuver axis convention.
pub mod vector {
    use std::ops::{Add, Mul, Neg, Sub};

    /// A 3D vector. For maneuver delta-v values the axes are `x` radial,
    /// `y` normal, `z` prograde; geometry inputs use the engine world frame.
    ///
    /// Compared by exact component equality, so a value adopted from the
    /// engine and echoed back compares equal bit-for-bit.
    #[derive(Debug, Clone, Copy, Default, PartialEq)]
    pub struct Vector3 {
        pub x: f64,
        pub y: f64,
        pub z: f64,
    }

    impl Vector3 {
        /// The zero vector.
        pub const ZERO: Vector3 = Vector3 { x: 0.0, y: 0.0, z: 0.0 };

        pub fn new(x: f64, y: f64, z: f64) -> Self {
            Vector3 { x, y, z }
        }

        /// Dot product.
        pub fn dot(self, other: Vector3) -> f64 {
            self.x * other.x + self.y * other.y + self.z * other.z
        }

        /// Cross product.
        pub fn cross(self, other: Vector3) -> Vector3 {
            Vector3 {
                x: self.y * other.z - self.z * other.y,
                y: self.z * other.x - self.x * other.z,
                z: self.x * other.y - self.y * other.x,
            }
        }

        /// Euclidean norm.
        pub fn norm(self) -> f64 {
            self.dot(self).sqrt()
        }

        /// Unit vector in the same direction; the zero vector stays zero.
        pub fn normalized(self) -> Vector3 {
            let norm = self.norm();
            if norm == 0.0 { Vector3::ZERO } else { self * (1.0 / norm) }
        }
    }

    impl Add for Vector3 {
        type Output = Vector3;

        fn add(self, other: Vector3) -> Vector3 {
            Vector3::new(self.x + other.x, self.y + other.y, self.z + other.z)
        }
    }

    impl Sub for Vector3 {
        type Output = Vector3;

        fn sub(self, other: Vector3) -> Vector3 {
            Vector3::new(self.x - other.x, self.y - other.y, self.z - other.z)
        }
    }

    impl Neg for Vector3 {
        type Output = Vector3;

        fn neg(self) -> Vector3 {
            Vector3::new(-self.x, -self.y, -self.z)
        }
    }

    impl Mul<f64> for Vector3 {
        type Output = Vector3;

        fn mul(self, scalar: f64) -> Vector3 {
            Vector3::new(self.x * scalar, self.y * scalar, self.z * scalar)
        }
    }
}

/// Human-readable clock and countdown formatting.
pub mod time {
    use super::constants::*;

    /// Compact duration string using the largest applicable units among
    /// years, days, hours, minutes, and seconds. Units above the largest
    /// nonzero one are omitted; seconds are always present. The sign of the
    /// input is ignored so the caller can prefix `T-`/`T+` itself.
    pub fn format_duration(seconds: f64) -> String {
        let total = seconds.abs();
        let secs = (total % SECONDS_PER_MINUTE).floor() as i64;
        let mins = ((total / SECONDS_PER_MINUTE) % 60.0).floor() as i64;
        let hours = ((total / SECONDS_PER_HOUR) % 24.0).floor() as i64;
        let days = ((total / SECONDS_PER_DAY) % DAYS_PER_YEAR).floor() as i64;
        let years = (total / SECONDS_PER_YEAR).floor() as i64;

        let mut out = String::new();
        if years > 0 {
            out.push_str(&format!("{years}y, "));
        }
        if !out.is_empty() || days > 0 {
            out.push_str(&format!("{days}d, "));
        }
        if !out.is_empty() || hours > 0 {
            out.push_str(&format!("{hours}h, "));
        }
        if !out.is_empty() || mins > 0 {
            out.push_str(&format!("{mins}m, "));
        }
        out.push_str(&format!("{secs}s"));
        out
    }

    /// Absolute simulation time as `"Year Y Day D H:MM:SS"` with 1-based
    /// year and day numbering.
    pub fn format_absolute(ut: f64) -> String {
        let secs = (ut % SECONDS_PER_MINUTE).floor() as i64;
        let mins = ((ut / SECONDS_PER_MINUTE) % 60.0).floor() as i64;
        let hours = ((ut / SECONDS_PER_HOUR) % 24.0).floor() as i64;
        let day = ((ut / SECONDS_PER_DAY) % DAYS_PER_YEAR).floor() as i64 + 1;
        let year = (ut / SECONDS_PER_YEAR).floor() as i64 + 1;
        format!("Year {year} Day {day} {hours}:{mins:02}:{secs:02}")
    }
}

/// Display helpers for scalar quantities.
pub mod units {
    /// Format a value with at most two decimal places, trimming trailing
    /// zeros (`12.30` becomes `12.3`, `5.00` becomes `5`).
    pub fn two_decimals(value: f64) -> String {
        let rendered = format!("{value:.2}");
        let trimmed = rendered.trim_end_matches('0').trim_end_matches('.');
        if trimmed == "-0" {
            "0".to_string()
        } else {
            trimmed.to_string()
        }
    }

    /// Distance display: kilometres beyond 10^6 m, whole metres beyond
    /// 10^5 m, metres with up to two decimals otherwise.
    pub fn format_distance(meters: f64) -> String {
        if (meters / 1_000_000.0).abs() > 1.0 {
            format!("{}km", two_decimals(meters / 1_000.0))
        } else if meters.abs() > 100_000.0 {
            format!("{meters:.0}m")
        } else {
            format!("{}m", two_decimals(meters))
        }
    }
}
