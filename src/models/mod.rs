pub mod prayer;
pub mod schedule;

pub use prayer::PrayerKey;
pub use schedule::{Countdown, DaySchedule, MonthlySchedule, Remaining};
