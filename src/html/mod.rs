use serde::Serialize;
use tera::{Context, Tera};

use crate::domain::event::Event;

const TEMPLATE_NAME: &str = "reminder.html";
const TEMPLATE: &str = include_str!("../../templates/reminder.html");

#[derive(Debug, Serialize)]
struct EventView<'a> {
    day: i32,
    month: i32,
    year: i32,
    name: &'a str,
    urgency_class: &'static str,
    urgency_label: &'static str,
}

impl<'a> From<&'a Event> for EventView<'a> {
    fn from(event: &'a Event) -> Self {
        Self {
            day: event.day,
            month: event.month,
            year: event.year,
            name: &event.name,
            urgency_class: event.urgency.css_class(),
            urgency_label: event.urgency.label(),
        }
    }
}

/// Render the reminder email body, keeping the order of `events`.
///
/// Event names are HTML-escaped. An empty slice still yields the full
/// document with no event blocks.
pub fn render(events: &[Event]) -> tera::Result<String> {
    let mut tera = Tera::default();
    tera.add_raw_template(TEMPLATE_NAME, TEMPLATE)?;

    let views: Vec<EventView> = events.iter().map(EventView::from).collect();
    let mut context = Context::new();
    context.insert("events", &views);

    tera.render(TEMPLATE_NAME, &context)
}
