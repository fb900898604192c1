// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Building calendars programmatically and the invariants builders keep.

use calcore_ical::{
    Alarm, AlarmAction, Calendar, ComponentKind, DEFAULT_CAPABILITIES, ErrorKind, Event,
    Parameter, Property, PropertyKind, Todo, Uri, Value, ValueDate, ValueDateTime,
    ValueDuration, ValueRecurrenceRule, ValueTime, ValueType, decode_str, encode_to_string,
};

fn utc(day: i8, hour: i8) -> ValueDateTime {
    ValueDateTime::new(
        ValueDate::new(2020, 3, day).unwrap(),
        ValueTime::new(hour, 0, 0, true).unwrap(),
    )
}

fn local(day: i8, hour: i8) -> ValueDateTime {
    ValueDateTime::new(
        ValueDate::new(2020, 3, day).unwrap(),
        ValueTime::new(hour, 0, 0, false).unwrap(),
    )
}

fn meeting() -> Event {
    let mut event = Event::new("meeting-1@example.com", utc(1, 12)).unwrap();
    event
        .set(Property::zoned(PropertyKind::DtStart, local(2, 9), "Europe/Berlin").unwrap())
        .unwrap();
    event
        .set_duration(ValueDuration::from_seconds(90 * 60))
        .unwrap();
    event.set_summary("Plan Q2; costs, hiring\nand travel").unwrap();
    event
        .add_categories(vec![Value::from("WORK"), Value::from("PLANNING")])
        .unwrap();
    let attendee = Uri::parse("mailto:ana@example.com", &DEFAULT_CAPABILITIES).unwrap();
    event.add_attendee(Value::CalAddress(attendee)).unwrap();
    event
        .set_rrule(ValueRecurrenceRule::parse("FREQ=WEEKLY;COUNT=4;BYDAY=MO").unwrap())
        .unwrap();
    event
        .add_alarm(Alarm::display(ValueDuration::from_seconds(-600), "Starts soon").unwrap())
        .unwrap();
    event
}

#[test]
fn builds_and_encodes_a_calendar() {
    let mut calendar = Calendar::new("-//Example//Planner//EN").unwrap();
    calendar.add_component(meeting()).unwrap();
    assert_eq!(calendar.validate(), Ok(()));

    let encoded = encode_to_string(&calendar).unwrap();
    assert_eq!(
        encoded,
        "BEGIN:VCALENDAR\r\n\
VERSION:2.0\r\n\
PRODID:-//Example//Planner//EN\r\n\
BEGIN:VEVENT\r\n\
UID:meeting-1@example.com\r\n\
DTSTAMP:20200301T120000Z\r\n\
DTSTART;TZID=Europe/Berlin:20200302T090000\r\n\
DURATION:PT1H30M\r\n\
SUMMARY:Plan Q2\\; costs\\, hiring\\nand travel\r\n\
CATEGORIES:WORK,PLANNING\r\n\
ATTENDEE:mailto:ana@example.com\r\n\
RRULE:FREQ=WEEKLY;COUNT=4;BYDAY=MO\r\n\
BEGIN:VALARM\r\n\
ACTION:DISPLAY\r\n\
TRIGGER:-PT10M\r\n\
DESCRIPTION:Starts soon\r\n\
END:VALARM\r\n\
END:VEVENT\r\n\
END:VCALENDAR\r\n"
    );
}

#[test]
fn decoding_what_was_encoded_gives_the_same_calendar() {
    let mut calendar = Calendar::new("-//Example//Planner//EN").unwrap();
    calendar.add_component(meeting()).unwrap();

    let mut todo = Todo::new("todo-1@example.com", utc(1, 8)).unwrap();
    todo.set_due(ValueDate::new(2020, 3, 31).unwrap()).unwrap();
    todo.set_percent_complete(40).unwrap();
    calendar.add_component(todo).unwrap();

    let decoded = decode_str(&encode_to_string(&calendar).unwrap()).unwrap();
    assert_eq!(decoded, calendar);
    assert_eq!(
        decoded.events().next().unwrap().summary().and_then(|p| p.text()).map(|t| t.as_str()),
        Some("Plan Q2; costs, hiring\nand travel")
    );
}

#[test]
fn date_values_carry_their_value_type() {
    let mut event = Event::new("day@example.com", utc(1, 12)).unwrap();
    event.set_dtstart(ValueDate::new(2020, 3, 2).unwrap()).unwrap();
    let dtstart = event.dtstart().unwrap();
    assert_eq!(
        dtstart.parameters().iter().next(),
        Some(&Parameter::Value(ValueType::Date))
    );

    let mut calendar = Calendar::new("-//Ex//EN").unwrap();
    calendar.add_component(event).unwrap();
    assert!(
        encode_to_string(&calendar)
            .unwrap()
            .contains("\r\nDTSTART;VALUE=DATE:20200302\r\n")
    );
}

#[test]
fn setters_reject_values_eagerly() {
    let mut event = Event::new("a@example.com", utc(1, 12)).unwrap();

    let err = event.set_priority(10).unwrap_err();
    assert!(matches!(err.kind(), ErrorKind::OutOfRange { .. }));
    assert_eq!(err.component(), Some(ComponentKind::Event));
    assert_eq!(err.property(), Some(&PropertyKind::Priority.into()));

    let err = event.set_created(local(1, 12)).unwrap_err();
    assert!(matches!(err.kind(), ErrorKind::MalformedValue { .. }));

    let err = Property::zoned(PropertyKind::DtStart, utc(1, 12), "Europe/Berlin").unwrap_err();
    assert_eq!(err, ErrorKind::TimezoneConflict);

    assert!(Event::new("b@example.com", local(1, 12)).is_err());
    assert!(event.properties().get(PropertyKind::Priority).is_none());
}

#[test]
fn parameters_must_be_writable() {
    let organizer = || {
        let uri = Uri::parse("mailto:jd@example.com", &DEFAULT_CAPABILITIES).unwrap();
        Property::new(PropertyKind::Organizer, Value::CalAddress(uri)).unwrap()
    };

    let prop = organizer()
        .with_parameter(Parameter::CommonName("Doe, Jane; Esq.".to_string()))
        .unwrap();
    let mut event = Event::new("a@example.com", utc(1, 12)).unwrap();
    event.set(prop).unwrap();
    let mut calendar = Calendar::new("-//Ex//EN").unwrap();
    calendar.add_component(event).unwrap();
    assert!(encode_to_string(&calendar).unwrap().contains("ORGANIZER;CN=\"Doe, Jane; Esq.\":mailto:"));

    let err = organizer()
        .with_parameter(Parameter::CommonName("Jane \"JD\" Doe".to_string()))
        .unwrap_err();
    assert!(matches!(err, ErrorKind::MalformedValue { .. }));

    let err = Property::other("X-NOTE", vec!["hello".to_string()])
        .unwrap()
        .with_parameter(Parameter::Other {
            name: "X-TAG".to_string(),
            values: vec!["\"quoted\"".to_string()],
        })
        .unwrap_err();
    assert!(matches!(err, ErrorKind::MalformedValue { .. }));
}

#[test]
fn singletons_occur_once() {
    let mut event = Event::new("a@example.com", utc(1, 12)).unwrap();
    event.set_summary("first").unwrap();
    event.set_summary("second").unwrap();
    assert_eq!(event.properties().get_all(PropertyKind::Summary).count(), 1);

    let duplicate = Property::new(PropertyKind::Summary, "third").unwrap();
    let err = event.add(duplicate).unwrap_err();
    assert_eq!(
        err.kind(),
        &ErrorKind::DuplicateProperty(PropertyKind::Summary.into())
    );

    // Repeatable properties accumulate
    event.add_comment("one").unwrap();
    event.add_comment("two").unwrap();
    assert_eq!(event.comments().count(), 2);
}

#[test]
fn end_and_duration_are_exclusive() {
    let mut event = Event::new("a@example.com", utc(1, 12)).unwrap();
    event.set_dtstart(utc(2, 9)).unwrap();
    event.set_dtend(utc(2, 10)).unwrap();
    event.set_duration(ValueDuration::from_seconds(3600)).unwrap();

    let mut calendar = Calendar::new("-//Ex//EN").unwrap();
    let err = calendar.add_component(event.clone()).unwrap_err();
    assert_eq!(
        err.kind(),
        &ErrorKind::MutuallyExclusive(PropertyKind::DtEnd.into(), PropertyKind::Duration.into())
    );
    assert!(calendar.components().is_empty());

    assert_eq!(event.remove(PropertyKind::Duration), 1);
    calendar.add_component(event).unwrap();
}

#[test]
fn alarm_action_is_fixed() {
    let mut alarm = Alarm::audio(ValueDuration::from_seconds(-300)).unwrap();
    assert_eq!(alarm.action(), AlarmAction::Audio);

    let action = Property::new(PropertyKind::Action, AlarmAction::Display).unwrap();
    let err = alarm.set(action).unwrap_err();
    assert!(matches!(err.kind(), ErrorKind::MalformedValue { .. }));
    assert_eq!(alarm.action(), AlarmAction::Audio);

    // An email alarm cannot go out without an attendee
    let mut email = Alarm::new(AlarmAction::Email, ValueDuration::from_seconds(-60)).unwrap();
    email.set_description("Body").unwrap();
    email.set_summary("Subject").unwrap();
    let err = email.validate().unwrap_err();
    assert_eq!(
        err.reason,
        ErrorKind::MissingRequiredProperty {
            component: ComponentKind::Alarm,
            property: PropertyKind::Attendee.into(),
        }
    );

    let mut event = Event::new("a@example.com", utc(1, 12)).unwrap();
    assert!(event.add_alarm(email).is_err());
    assert!(event.alarms().is_empty());
}

#[test]
fn alarm_without_action_is_rejected() {
    let src = "BEGIN:VCALENDAR\r\n\
VERSION:2.0\r\n\
PRODID:-//Ex//EN\r\n\
BEGIN:VEVENT\r\n\
UID:a@b\r\n\
DTSTAMP:20200301T120000Z\r\n\
DTSTART:20200301T130000Z\r\n\
BEGIN:VALARM\r\n\
TRIGGER:-PT15M\r\n\
END:VALARM\r\n\
END:VEVENT\r\n\
END:VCALENDAR\r\n";
    let err = decode_str(src).unwrap_err();
    assert_eq!(err.kind(), &ErrorKind::MissingAction);
    assert_eq!(err.component(), Some(ComponentKind::Alarm));
}

#[test]
fn version_range_must_be_ordered() {
    let src = "BEGIN:VCALENDAR\r\n\
VERSION:2.1;2.0\r\n\
PRODID:-//Ex//EN\r\n\
END:VCALENDAR\r\n";
    let err = decode_str(src).unwrap_err();
    assert_eq!(err.kind(), &ErrorKind::VersionOrdering);
    assert_eq!(err.line(), Some(2));

    let ordered = decode_str(&src.replace("2.1;2.0", "2.0;2.1")).unwrap();
    assert_eq!(
        ordered.version().map(|p| p.value().to_string()),
        Some("2.0;2.1".to_string())
    );
}
