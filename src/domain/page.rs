use std::fmt;
use std::str::FromStr;

use rand::Rng;
use serde::Deserialize;
use time::OffsetDateTime;

use crate::error::AppError;
use crate::services::clock::Clock;

pub const RANDOM_MIN: u32 = 1;
pub const RANDOM_MAX: u32 = 1000;
pub const FILE_PREFIX: &str = "auto_generated_";
pub const FILE_EXT: &str = "html";
/// Names tried per write before giving up.
pub const MAX_NAME_SUFFIX: u32 = 1000;

/// The values captured at one generation instant. Both rendered timestamps come from
/// `generated_at`, so a page never disagrees with itself about when it was made.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerationEvent {
    pub generated_at: OffsetDateTime,
    pub random_value: u32,
}

impl GenerationEvent {
    /// One clock read, one draw from `[RANDOM_MIN, RANDOM_MAX]`.
    pub fn capture<C, R>(clock: &C, rng: &mut R) -> Self
    where
        C: Clock + ?Sized,
        R: Rng + ?Sized,
    {
        Self {
            generated_at: clock.now(),
            random_value: rng.gen_range(RANDOM_MIN..=RANDOM_MAX),
        }
    }

    /// `YYYY-MM-DD HH:MM:SS.ffffff`
    pub fn display_timestamp(&self) -> String {
        let t = self.generated_at;
        format!(
            "{:04}-{:02}-{:02} {:02}:{:02}:{:02}.{:06}",
            t.year(),
            u8::from(t.month()),
            t.day(),
            t.hour(),
            t.minute(),
            t.second(),
            t.microsecond()
        )
    }

    /// `auto_generated_YYYYMMDD_HHMMSS`, second resolution.
    pub fn file_stem(&self) -> String {
        let t = self.generated_at;
        format!(
            "{FILE_PREFIX}{:04}{:02}{:02}_{:02}{:02}{:02}",
            t.year(),
            u8::from(t.month()),
            t.day(),
            t.hour(),
            t.minute(),
            t.second()
        )
    }
}

/// Colour used for the page background and the heading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Accent {
    Red,
    Blue,
    Green,
    Purple,
    #[default]
    Orange,
    Pink,
    Yellow,
    Teal,
}

impl Accent {
    pub const ALL: [Accent; 8] = [
        Accent::Red,
        Accent::Blue,
        Accent::Green,
        Accent::Purple,
        Accent::Orange,
        Accent::Pink,
        Accent::Yellow,
        Accent::Teal,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Accent::Red => "red",
            Accent::Blue => "blue",
            Accent::Green => "green",
            Accent::Purple => "purple",
            Accent::Orange => "orange",
            Accent::Pink => "pink",
            Accent::Yellow => "yellow",
            Accent::Teal => "teal",
        }
    }
}

impl fmt::Display for Accent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Accent {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Accent::ALL
            .into_iter()
            .find(|a| a.as_str() == wanted)
            .ok_or_else(|| {
                let known: Vec<_> = Accent::ALL.iter().map(|a| a.as_str()).collect();
                AppError::Config(format!("unknown accent `{s}`, expected one of {}", known.join(", ")))
            })
    }
}

/// A rendered document and the event it was rendered from.
#[derive(Debug, Clone)]
pub struct Page {
    pub event: GenerationEvent,
    pub html: String,
}

impl Page {
    pub fn file_name(&self, suffix: u32) -> String {
        match suffix {
            0 => format!("{}.{FILE_EXT}", self.event.file_stem()),
            k => format!("{}_{k}.{FILE_EXT}", self.event.file_stem()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::clock::FixedClock;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use time::{Date, Month};

    fn at(micro: u32) -> OffsetDateTime {
        Date::from_calendar_date(2025, Month::October, 7)
            .unwrap()
            .with_hms_micro(8, 5, 3, micro)
            .unwrap()
            .assume_utc()
    }

    struct CountingClock(AtomicUsize);

    impl Clock for CountingClock {
        fn now(&self) -> OffsetDateTime {
            self.0.fetch_add(1, Ordering::SeqCst);
            at(42)
        }
    }

    #[test]
    fn timestamp_is_zero_padded_to_microseconds() {
        let ev = GenerationEvent { generated_at: at(0), random_value: 1 };
        assert_eq!(ev.display_timestamp(), "2025-10-07 08:05:03.000000");

        let ev = GenerationEvent { generated_at: at(7), random_value: 1 };
        assert_eq!(ev.display_timestamp(), "2025-10-07 08:05:03.000007");
    }

    #[test]
    fn file_names_use_second_resolution() {
        let page = Page {
            event: GenerationEvent { generated_at: at(999_999), random_value: 5 },
            html: String::new(),
        };
        assert_eq!(page.file_name(0), "auto_generated_20251007_080503.html");
        assert_eq!(page.file_name(3), "auto_generated_20251007_080503_3.html");
    }

    #[test]
    fn capture_reads_the_clock_once() {
        let clock = CountingClock(AtomicUsize::new(0));
        let ev = GenerationEvent::capture(&clock, &mut StdRng::seed_from_u64(7));
        assert_eq!(clock.0.load(Ordering::SeqCst), 1);
        assert_eq!(ev.generated_at, at(42));
    }

    #[test]
    fn random_values_stay_in_range() {
        let clock = FixedClock(at(1));
        let mut rng = StdRng::seed_from_u64(1234);
        for _ in 0..5_000 {
            let ev = GenerationEvent::capture(&clock, &mut rng);
            assert!((RANDOM_MIN..=RANDOM_MAX).contains(&ev.random_value));
        }
    }

    #[test]
    fn accent_parses_case_insensitively() {
        assert_eq!("Teal".parse::<Accent>().unwrap(), Accent::Teal);
        assert_eq!(" orange ".parse::<Accent>().unwrap(), Accent::Orange);
        assert!(matches!("magenta".parse::<Accent>(), Err(AppError::Config(_))));
    }
}
