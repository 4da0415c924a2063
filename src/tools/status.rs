//! Fitlog Status Tool
//!
//! Provides runtime status information about the fitlog service.

use serde::Serialize;
use std::time::Instant;
use sysinfo::{Pid, ProcessesToUpdate, System};

use crate::ai::ExtractionSource;
use crate::build_info::BuildInfo;
use crate::catalog::catalog;
use crate::config::Config;

/// Log entry parsing instructions for AI assistants
pub const PARSE_INSTRUCTIONS: &str = r#"
# Fitlog Parsing Instructions

Fitlog turns a free-text log entry into structured food, water and workout
records. Nothing is stored; each call returns what was understood.

## Tools

- `parse_log_entry` - parse one entry. Parameters:
  - `text` (required): what the user said, verbatim
  - `date` (optional): the reference "today" as YYYY-MM-DD. Defaults to the server's local date.
  - `use_ai` (optional, default true): try the AI extractor first when it is configured
- `lookup_food` - check how a single food phrase resolves against the catalog
- `list_foods` - the full catalog with macros per serving
- `fitlog_status` - build, uptime and parse counters

Pass the user's words unchanged. The parser handles casing, punctuation and
filler words on its own.

---

## What Gets Recognized

### Dates
- "yesterday", "last night" - one day back
- "today", "this morning", "tonight" - the reference date
- "two days ago", "3 days ago"
- Weekday names ("on monday") - the most recent past occurrence, never today

### Foods
Matched against a built-in catalog of ~60 common foods. Quantities come from
digits ("2 eggs"), fractions ("1/2 cup of rice"), number words ("two", "half")
and units (cups, slices, pieces, oz). Size words pick sized entries:
"small fry" is Small Fries, "large fries" is Large Fries. Restaurant names
("from mcdonald's") are ignored.

Foods not in the catalog are dropped. Use `lookup_food` to check a phrase.

### Water
- "16 oz of water", "drank 20 ounces of water"
- "2 glasses of water" (8 oz per glass)
- "had water" with no amount counts as one glass

### Workouts
- Cardio: run, bike, swim, walk, elliptical, row. Distance in miles or km
  (converted to miles), duration in minutes, hours or "half an hour".
- Strength: push-ups, squats, deadlifts, bench press, pull-ups, lunges, plank.
  Sets and reps as "3 sets of 12", "3x10" or "3 sets".

---

## Response

```json
{
  "result": {
    "date": "2026-01-15",
    "foods": [{"name": "Big Mac", "quantity": 1.0, "macros": {"calories": 550, ...}}],
    "water": {"ounces": 16},
    "workouts": [{"kind": {"type": "cardio", "activity": "run"}, "distance_miles": 2.0, ...}],
    "raw_text": "..."
  },
  "source": "local",
  "understood": true,
  "food_totals": {"calories": 550, ...}
}
```

When `understood` is false, nothing was recognized. Ask the user to rephrase
with concrete foods, amounts or activities.
"#;

#[derive(Debug, Clone, Serialize)]
pub struct FitlogStatus {
    /// Build information
    pub build_number: u64,
    pub build_timestamp: &'static str,
    pub version: &'static str,

    /// Parser information
    pub catalog_size: usize,
    pub ai_enabled: bool,
    pub ai_model: Option<String>,
    pub parses_total: u64,
    pub parses_ai: u64,
    pub parses_local: u64,
    pub parses_not_understood: u64,

    /// Process information
    pub uptime_seconds: u64,
    pub process_id: u32,
    pub memory_usage_bytes: u64,
}

/// Status tracker for collecting runtime information
pub struct StatusTracker {
    start_time: Instant,
    ai_enabled: bool,
    ai_model: String,
    parses_ai: u64,
    parses_local: u64,
    parses_not_understood: u64,
}

impl StatusTracker {
    /// Create a new status tracker
    pub fn new(config: &Config) -> Self {
        Self {
            start_time: Instant::now(),
            ai_enabled: config.ai_enabled(),
            ai_model: config.ai_model.clone(),
            parses_ai: 0,
            parses_local: 0,
            parses_not_understood: 0,
        }
    }

    /// Count a completed parse
    pub fn record_parse(&mut self, source: ExtractionSource, understood: bool) {
        match source {
            ExtractionSource::Ai => self.parses_ai += 1,
            ExtractionSource::Local => self.parses_local += 1,
        }
        if !understood {
            self.parses_not_understood += 1;
        }
    }

    /// Get the current status
    pub fn get_status(&self) -> FitlogStatus {
        let build_info = BuildInfo::current();

        // Get process info
        let pid = std::process::id();
        let mut sys = System::new();
        sys.refresh_processes(ProcessesToUpdate::Some(&[Pid::from_u32(pid)]));

        let memory_usage_bytes = sys
            .process(Pid::from_u32(pid))
            .map(|p| p.memory())
            .unwrap_or(0);

        FitlogStatus {
            build_number: build_info.build_number,
            build_timestamp: build_info.build_timestamp,
            version: build_info.version,
            catalog_size: catalog().len(),
            ai_enabled: self.ai_enabled,
            ai_model: self.ai_enabled.then(|| self.ai_model.clone()),
            parses_total: self.parses_ai + self.parses_local,
            parses_ai: self.parses_ai,
            parses_local: self.parses_local,
            parses_not_understood: self.parses_not_understood,
            uptime_seconds: self.start_time.elapsed().as_secs(),
            process_id: pid,
            memory_usage_bytes,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_counters() {
        let mut tracker = StatusTracker::new(&Config::local_only());
        tracker.record_parse(ExtractionSource::Local, true);
        tracker.record_parse(ExtractionSource::Local, false);
        tracker.record_parse(ExtractionSource::Ai, true);

        let status = tracker.get_status();
        assert_eq!(status.parses_total, 3);
        assert_eq!(status.parses_ai, 1);
        assert_eq!(status.parses_local, 2);
        assert_eq!(status.parses_not_understood, 1);
        assert!(!status.ai_enabled);
        assert!(status.ai_model.is_none());
        assert!(status.catalog_size >= 60);
        assert_eq!(status.process_id, std::process::id());
    }
}
