use shamsi_date::{DateTimeKind, PersianDateTime};

fn sample() -> PersianDateTime {
    PersianDateTime::from_parts(1403, 12, 30, 23, 59, 58, 125, DateTimeKind::Unspecified).unwrap()
}

#[test]
fn named_codes_roundtrip_at_their_precision() {
    let dt = sample();
    let cases = [
        ("d", dt.date()),
        ("N", dt.date()),
        ("D", dt.date()),
        ("dt", dt.date().add_minutes(23.0 * 60.0 + 59.0).unwrap()),
        ("F", dt.date().add_seconds(86_398.0).unwrap()),
        ("TD", dt.date().add_seconds(86_398.0).unwrap()),
    ];
    for (code, expected) in cases {
        let text = dt.format(code).unwrap();
        let parsed = PersianDateTime::parse_exact(&text, code).unwrap();
        assert_eq!(parsed, expected, "{code}: {text}");
    }
}

#[test]
fn custom_pattern_roundtrip_keeps_fraction() {
    let dt = sample();
    let pattern = "yyyy/MM/dd HH:mm:ss.fffffff";
    let text = dt.format(pattern).unwrap();
    assert_eq!(text, "1403/12/30 23:59:58.1250000");
    assert_eq!(PersianDateTime::parse_exact(&text, pattern).unwrap(), dt);
}

#[test]
fn round_trip_format_keeps_kind() {
    for kind in [DateTimeKind::Unspecified, DateTimeKind::Utc] {
        let dt = sample().with_kind(kind);
        let text = dt.format("o").unwrap();
        let parsed = PersianDateTime::parse_exact(&text, "o").unwrap();
        assert_eq!(parsed, dt, "{text}");
        assert_eq!(parsed.kind(), kind);
    }
}

#[test]
fn lenient_parse_reads_formatted_output() {
    let dt = sample();
    for code in ["d", "D", "F", "f", "g", "G"] {
        let text = dt.format(code).unwrap();
        let parsed = PersianDateTime::parse(&text).unwrap();
        assert_eq!(parsed.date(), dt.date(), "{code}: {text}");
    }
}

#[test]
fn lenient_parse_accepts_spelling_variants() {
    // 1402/01/01 was a Tuesday.
    let expected = PersianDateTime::new(1402, 1, 1).unwrap();
    for text in [
        "سه شنبه ۱۴۰۲/۰۱/۰۱",
        "سه\u{200C}شنبه 1402/01/01",
        "سه\u{00A0}شنبه 1402/01/01",
        "سهشنبه، ۱ فروردین ۱۴۰۲",
    ] {
        assert_eq!(PersianDateTime::parse(text).unwrap(), expected, "{text}");
    }
    assert_eq!(PersianDateTime::try_parse("دوشنبه 1402/01/01"), None);
}

#[test]
fn lenient_parse_defaults() {
    let now = PersianDateTime::now();
    let time_only = PersianDateTime::parse("10:15").unwrap();
    assert_eq!((time_only.hour(), time_only.minute()), (10, 15));

    let no_year = PersianDateTime::parse("7 مرداد").unwrap();
    assert_eq!((no_year.month(), no_year.day()), (5, 7));
    assert!(no_year.year() == now.year() || no_year.year() == now.year() + 1);

    let utc = PersianDateTime::parse("1402/05/07 10:00 Z").unwrap();
    assert_eq!(utc.kind(), DateTimeKind::Utc);
}

#[test]
fn designators() {
    let pm = PersianDateTime::parse("1402/05/07 02:30 ب.ظ").unwrap();
    assert_eq!(pm.hour(), 14);
    let am = PersianDateTime::parse_exact("1402/05/07 12:10 ق.ظ", "yyyy/MM/dd hh:mm tt").unwrap();
    assert_eq!(am.hour(), 0);
    assert_eq!(pm.format("hh:mm tt").unwrap(), "02:30 ب.ظ");
}

#[test]
fn serde_roundtrip() {
    for dt in [
        PersianDateTime::MIN,
        PersianDateTime::MAX,
        sample(),
        sample().with_kind(DateTimeKind::Local),
    ] {
        let json = serde_json::to_string(&dt).unwrap();
        let back: PersianDateTime = serde_json::from_str(&json).unwrap();
        assert_eq!(back, dt);
        assert_eq!(back.kind(), dt.kind());
    }
}

#[test]
fn persian_fields_across_nowruz() {
    let last = PersianDateTime::new(1403, 12, 30).unwrap();
    assert!(last.is_leap_year());
    let first = last.add_days(1.0).unwrap();
    assert_eq!((first.year(), first.month(), first.day()), (1404, 1, 1));
    assert_eq!(first.day_of_year(), 1);
    assert_eq!(first.instant().date().to_string(), "2025-03-21");
    assert_eq!(first.day_of_week_name(), "جمعه");
}
