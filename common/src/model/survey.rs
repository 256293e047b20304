use serde::{Deserialize, Serialize};
use std::fmt;

/// Column titles of the survey CSV file, in write order. The header written
/// on a fresh file must match this list exactly; every later append reuses
/// the same field set.
pub const SURVEY_FIELDS: [&str; 5] = [
    "Name",
    "ScreenTimeHours",
    "FocusLevel",
    "Mood",
    "ProductivityLevel",
];

/// Mood options offered by the survey form. `Tired` is the first option and
/// therefore the form default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Mood {
    Tired,
    Okay,
    Happy,
    Sad,
    Angry,
}

impl Mood {
    pub const ALL: [Mood; 5] = [Mood::Tired, Mood::Okay, Mood::Happy, Mood::Sad, Mood::Angry];

    pub fn as_str(&self) -> &'static str {
        match self {
            Mood::Tired => "Tired",
            Mood::Okay => "Okay",
            Mood::Happy => "Happy",
            Mood::Sad => "Sad",
            Mood::Angry => "Angry",
        }
    }

    /// Inverse of `as_str`, used when reading the mood `<select>` back from
    /// the DOM. Unknown strings fall back to the default option.
    pub fn parse(value: &str) -> Mood {
        Mood::ALL
            .iter()
            .copied()
            .find(|m| m.as_str() == value)
            .unwrap_or(Mood::Tired)
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One submitted survey entry. Serde renames line the fields up with
/// `SURVEY_FIELDS`, so the same struct serializes to a CSV row and to the
/// JSON body of the submit request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SurveyRecord {
    pub name: String,
    pub screen_time_hours: f64,
    pub focus_level: u8,
    pub mood: Mood,
    pub productivity_level: u8,
}

impl Default for SurveyRecord {
    /// Initial form values: empty name, no screen time, both ratings at the
    /// scale midpoint, first mood option.
    fn default() -> Self {
        SurveyRecord {
            name: String::new(),
            screen_time_hours: 0.0,
            focus_level: 5,
            mood: Mood::Tired,
            productivity_level: 5,
        }
    }
}

impl SurveyRecord {
    /// One-line recap shown after a successful submission.
    pub fn summary_line(&self) -> String {
        format!(
            "{} spent {} hours on their phone, felt {}/10 focused, rated their productivity {}/10, and was {} today.",
            self.name, self.screen_time_hours, self.focus_level, self.productivity_level, self.mood
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_record_matches_form_defaults() {
        let record = SurveyRecord::default();
        assert_eq!(record.name, "");
        assert_eq!(record.screen_time_hours, 0.0);
        assert_eq!(record.focus_level, 5);
        assert_eq!(record.mood, Mood::Tired);
        assert_eq!(record.productivity_level, 5);
    }

    #[test]
    fn summary_line_for_submission() {
        let record = SurveyRecord {
            name: "Alice".to_string(),
            screen_time_hours: 3.5,
            focus_level: 7,
            mood: Mood::Happy,
            productivity_level: 8,
        };
        assert_eq!(
            record.summary_line(),
            "Alice spent 3.5 hours on their phone, felt 7/10 focused, \
             rated their productivity 8/10, and was Happy today."
        );
    }

    #[test]
    fn mood_parse_round_trips_and_defaults() {
        for mood in Mood::ALL {
            assert_eq!(Mood::parse(mood.as_str()), mood);
        }
        assert_eq!(Mood::parse("Confused"), Mood::Tired);
    }

    #[test]
    fn record_serializes_with_canonical_field_names() {
        let record = SurveyRecord::default();
        let value = serde_json::to_value(&record).expect("serializable");
        let object = value.as_object().expect("object");
        for field in SURVEY_FIELDS {
            assert!(object.contains_key(field), "missing field {}", field);
        }
    }
}
