use serde::Deserialize;

/// Visual weight of a reminder.
///
/// Only the literal `important` is recognised; anything else in the source
/// file, including typos and empty cells, is treated as [`Urgency::Normal`].
#[derive(Debug, Deserialize, PartialEq, Eq, Clone, Copy, Default)]
#[serde(from = "String")]
pub enum Urgency {
    #[default]
    Normal,
    Important,
}

impl From<String> for Urgency {
    fn from(value: String) -> Self {
        match value.as_str() {
            "important" => Urgency::Important,
            _ => Urgency::Normal,
        }
    }
}

impl Urgency {
    pub fn label(self) -> &'static str {
        match self {
            Urgency::Important => "Wichtig",
            Urgency::Normal => "Normal",
        }
    }

    pub fn css_class(self) -> &'static str {
        match self {
            Urgency::Important => "important",
            Urgency::Normal => "normal",
        }
    }
}

/// One row of the calendar file.
///
/// The source format carries two legacy columns (`NotUsedInt`,
/// `NotUsedString`) between the name and the urgency. They only matter for
/// column alignment and are not kept.
#[derive(Debug, Deserialize, PartialEq, Eq, Clone)]
pub struct Event {
    #[serde(rename = "Id")]
    pub id: i64,
    #[serde(rename = "Year")]
    pub year: i32,
    #[serde(rename = "Month")]
    pub month: i32,
    #[serde(rename = "Day")]
    pub day: i32,
    #[serde(rename = "EventName")]
    pub name: String,
    #[serde(rename = "Urgency")]
    pub urgency: Urgency,
}

impl Event {
    fn date(&self) -> (i32, i32, i32) {
        (self.year, self.month, self.day)
    }
}

/// Sort events most recent date first.
///
/// The sort is stable, so events sharing a date keep their file order.
pub fn sort_by_date(events: &mut [Event]) {
    events.sort_by(|a, b| b.date().cmp(&a.date()));
}
