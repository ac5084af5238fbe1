use iso6093::{
    DecimalMark, FormatSettings, Iso6093Error, Representation, SignificandStyle, decompose,
    format_nr1, format_nr2, format_nr2_with, format_nr3, format_nr3_with, format_value,
    is_valid, is_valid_nr1, is_valid_nr2, parse,
};

fn assert_close(actual: f64, expected: f64) {
    let tolerance = expected.abs() * 1e-15;
    assert!(
        (actual - expected).abs() <= tolerance,
        "expected {expected}, got {actual}"
    );
}

#[test]
fn test_format_nr1() {
    assert_eq!(format_nr1(1245), "1245");
    assert_eq!(format_nr1(0), "0");
    assert_eq!(format_nr1(-42), "-42");
    assert_eq!(format_nr1(i64::MIN), "-9223372036854775808");
    for value in [1245, 0, -42, i64::MAX, i64::MIN] {
        assert!(is_valid_nr1(&format_nr1(value)));
    }
    assert!(is_valid(&format_nr1(1245)));
}

#[test]
fn test_format_nr2() {
    assert_eq!(format_nr2(123.45, DecimalMark::FullStop).unwrap(), "123.45");
    assert_eq!(format_nr2(123.45, DecimalMark::Comma).unwrap(), "123,45");
    assert_eq!(format_nr2(-5.678, DecimalMark::Comma).unwrap(), "-5,678");
    assert_eq!(format_nr2(1245.0, DecimalMark::FullStop).unwrap(), "1245.0");
    assert_eq!(format_nr2(0.0000001, DecimalMark::FullStop).unwrap(), "0.0000001");
    assert_eq!(format_nr2(1e21, DecimalMark::FullStop).unwrap(), "1000000000000000000000.0");

    let formatted = format_nr2(84561230.54679, DecimalMark::Comma).unwrap();
    assert_eq!(formatted, "84561230,54679");
    assert!(is_valid(&formatted));
}

#[test]
fn test_format_nr2_rounds_to_fraction_budget() {
    assert_eq!(format_nr2(1e-25, DecimalMark::FullStop).unwrap(), "0.0");
    assert_eq!(format_nr2(-1e-25, DecimalMark::FullStop).unwrap(), "0.0");
    assert_eq!(
        format_nr2(1.5e-19, DecimalMark::FullStop).unwrap(),
        "0.00000000000000000015"
    );
}

#[test]
fn test_format_nr3() {
    assert_eq!(format_nr3(5600.0, DecimalMark::FullStop).unwrap(), "5.6E+3");
    assert_eq!(format_nr3(5600.0, DecimalMark::Comma).unwrap(), "5,6E+3");
    assert_eq!(format_nr3(1.0, DecimalMark::FullStop).unwrap(), "1.0E+0");
    assert_eq!(format_nr3(-0.0015, DecimalMark::Comma).unwrap(), "-1,5E-3");
    assert_eq!(format_nr3(0.0, DecimalMark::FullStop).unwrap(), "0.0E+0");
    assert_eq!(format_nr3(-0.0, DecimalMark::FullStop).unwrap(), "0.0E+0");
    assert_eq!(
        format_nr3(f64::MAX, DecimalMark::FullStop).unwrap(),
        "1.7976931348623157E+308"
    );
}

#[test]
fn test_format_nr3_exponent_always_signed() {
    for value in [1.0, 12.0, 0.5, 3.0e5, -7.25e-9] {
        let formatted = format_nr3(value, DecimalMark::Comma).unwrap();
        let literal = decompose(&formatted).unwrap();
        let exponent = literal.exponent.unwrap();
        assert!(exponent.sign.is_some(), "{formatted} lacks an exponent sign");
    }
}

#[test]
fn test_negative_zero_is_unsigned() {
    assert_eq!(format_nr2(-0.0, DecimalMark::Comma).unwrap(), "0,0");
    assert!(is_valid_nr2(&format_nr2(-0.0, DecimalMark::Comma).unwrap()));
}

#[test]
fn test_non_finite_values() {
    for value in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
        assert!(matches!(
            format_nr2(value, DecimalMark::FullStop),
            Err(Iso6093Error::NonFinite(_))
        ));
        assert!(matches!(
            format_nr3(value, DecimalMark::FullStop),
            Err(Iso6093Error::NonFinite(_))
        ));
    }
}

#[test]
fn test_normalized_significand() {
    let settings = FormatSettings::default()
        .with_decimal_mark(DecimalMark::Comma)
        .with_nr3_significand(SignificandStyle::Normalized);

    assert_eq!(format_nr3_with(5600.0, &settings).unwrap(), "0,56E+4");
    assert_eq!(format_nr3_with(-0.0015, &settings).unwrap(), "-0,15E-2");
    assert_eq!(format_nr3_with(1.0, &settings).unwrap(), "0,1E+1");
    assert_eq!(format_nr3_with(0.0, &settings).unwrap(), "0,0E+0");

    for value in [5600.0, -0.0015, 1.0, 9.99, std::f64::consts::E] {
        let formatted = format_nr3_with(value, &settings).unwrap();
        assert!(decompose(&formatted).unwrap().is_normalized(), "{formatted}");
        assert_close(parse(&formatted).unwrap(), value);
    }
}

#[test]
fn test_max_fraction_digits() {
    let settings = FormatSettings::default().with_max_fraction_digits(2);
    assert_eq!(format_nr2_with(3.14159, &settings).unwrap(), "3.14");
    assert_eq!(format_nr2_with(2.999, &settings).unwrap(), "3.0");
    assert_eq!(format_nr3_with(31415.9, &settings).unwrap(), "3.14E+4");
    assert_eq!(format_nr3_with(99999.0, &settings).unwrap(), "1.0E+5");

    let normalized = settings.with_nr3_significand(SignificandStyle::Normalized);
    assert_eq!(format_nr3_with(31415.9, &normalized).unwrap(), "0.31E+5");
}

#[test]
fn test_invalid_settings_are_rejected() {
    let settings = FormatSettings {
        max_fraction_digits: 0,
        ..FormatSettings::default()
    };
    assert!(matches!(
        format_nr2_with(1.5, &settings),
        Err(Iso6093Error::Settings(_))
    ));
}

#[test]
fn test_format_value() {
    let settings = FormatSettings::default().with_decimal_mark(DecimalMark::Comma);
    assert_eq!(format_value(-12.9, Representation::NR1, &settings).unwrap(), "-12");
    assert_eq!(format_value(-0.5, Representation::NR1, &settings).unwrap(), "0");
    assert_eq!(format_value(12.5, Representation::NR2, &settings).unwrap(), "12,5");
    assert_eq!(format_value(12.5, Representation::NR3, &settings).unwrap(), "1,25E+1");

    assert!(matches!(
        format_value(1e19, Representation::NR1, &settings),
        Err(Iso6093Error::OutOfRange(_))
    ));
    assert!(matches!(
        format_value(f64::NAN, Representation::NR1, &settings),
        Err(Iso6093Error::NonFinite(_))
    ));
}
