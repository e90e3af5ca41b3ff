use chrono::{DateTime, NaiveTime, TimeZone};

/// Day-boundary helpers for timestamps.
pub trait DayBounds: Sized {
    /// Same calendar date at the given wall time. Out-of-range components
    /// are clamped to 0; a wall time that does not exist locally falls
    /// back to the original instant.
    fn at_time(&self, hour: u32, minute: u32, second: u32) -> Self;

    /// First instant of the day (00:00:00).
    fn start_of_day(&self) -> Self {
        self.at_time(0, 0, 0)
    }

    /// Last whole second of the day (23:59:59).
    fn end_of_day(&self) -> Self {
        self.at_time(23, 59, 59)
    }
}

impl<Tz: TimeZone> DayBounds for DateTime<Tz> {
    fn at_time(&self, hour: u32, minute: u32, second: u32) -> Self {
        let hour = if hour > 23 { 0 } else { hour };
        let minute = if minute > 59 { 0 } else { minute };
        let second = if second > 59 { 0 } else { second };
        let time = NaiveTime::from_hms_opt(hour, minute, second).unwrap_or(NaiveTime::MIN);
        self.with_time(time)
            .earliest()
            .unwrap_or_else(|| self.clone())
    }
}
