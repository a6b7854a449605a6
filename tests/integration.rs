use chrono::{DateTime, TimeZone, Utc};
use earth_rotation::{
    format_rotations, Clipboard, ClipboardError, FixedClock, RotationCalculator, RotationError,
    Rotations, TauntGenerator, TauntZone, SIDEREAL_DAY_MS, UNIX_EPOCH_ROTATIONS,
};

fn calculator() -> RotationCalculator<FixedClock> {
    RotationCalculator::with_clock(FixedClock(
        Utc.with_ymd_and_hms(2025, 8, 6, 0, 0, 0).unwrap(),
    ))
}

#[test]
fn date_roundtrip_2025_is_stable() {
    let calc = calculator();
    let t: DateTime<Utc> = "2025-08-06T12:34:56.000Z".parse().unwrap();
    let rotations = calc.rotations_from_date(t).unwrap();
    let back = calc.date_from_rotations(rotations.value()).unwrap();
    assert!((back - t).num_milliseconds().abs() < 1_000);
}

#[test]
fn rotation_roundtrip_is_stable() {
    let calc = calculator();
    let r = 1_234_567.123_456;
    let date = calc.date_from_rotations(r).unwrap();
    let back = calc.rotations_from_date(date).unwrap();
    assert!((back.value() - r).abs() < 0.000_001);
}

#[test]
fn one_sidereal_day_adds_one_rotation() {
    let calc = calculator();
    let t = Utc.with_ymd_and_hms(2000, 1, 1, 12, 0, 0).unwrap();
    let next = t + chrono::Duration::milliseconds(SIDEREAL_DAY_MS);
    let delta = calc.rotations_from_date(next).unwrap() - calc.rotations_from_date(t).unwrap();
    assert!((delta - 1.0).abs() < 1e-6);
}

#[test]
fn unix_epoch_matches_historical_offset() {
    let calc = calculator();
    let unix = DateTime::<Utc>::from_timestamp(0, 0).unwrap();
    let rotations = calc.rotations_from_date(unix).unwrap();
    assert!((rotations.value() - UNIX_EPOCH_ROTATIONS).abs() < 1e-6);
}

#[test]
fn formatting_matches_expected_text() {
    assert_eq!(format_rotations(1_234_567.0), "1,234,567.000000 回転");
    assert_eq!(format_rotations(123.123_456_7), "123.123457 回転");
    assert_eq!(
        Rotations::new(1_234_567.123_456).unwrap().to_string(),
        "1,234,567.123456 回転"
    );
}

#[test]
fn invalid_inputs_fail() {
    let calc = calculator();
    for bad in [-1.0, f64::NAN, f64::INFINITY] {
        assert!(matches!(
            calc.date_from_rotations(bad),
            Err(RotationError::InvalidRotations { .. })
        ));
    }
    let err = calc.rotations_from_str("invalid").unwrap_err();
    assert!(matches!(err, RotationError::InvalidDate { .. }));
    assert!(err.to_string().starts_with("無効な日時が指定されました"));
}

#[derive(Debug)]
struct Failing;

impl Clipboard for Failing {
    fn name(&self) -> &str {
        "failing"
    }

    fn copy(&self, _text: &str) -> Result<(), ClipboardError> {
        Err(ClipboardError::NoBackend)
    }
}

#[derive(Debug)]
struct Accepting;

impl Clipboard for Accepting {
    fn name(&self) -> &str {
        "accepting"
    }

    fn copy(&self, _text: &str) -> Result<(), ClipboardError> {
        Ok(())
    }
}

#[test]
fn taunt_for_fixed_instant() {
    let generator = TauntGenerator::new(Box::new(Failing), Box::new(Accepting));
    let now = Utc.with_ymd_and_hms(2025, 1, 5, 1, 2, 3).unwrap();
    let calc = RotationCalculator::with_clock(FixedClock(now));

    let phrase = generator.generate_taunt(&now, Rotations::new(1_000.0).unwrap());
    assert!(phrase.contains("2025年1月5日"));
    assert!(phrase.contains("時2分3秒"));
    assert!(phrase.contains("1,000回転"));

    let taunt = generator.taunt_now(&calc, TauntZone::Utc);
    assert!(taunt.phrase.starts_with("いつ？2025年1月5日日曜日？1時2分3秒？地球が"));
    assert!(generator.copy_to_clipboard(&taunt.phrase));

    let broken = TauntGenerator::new(Box::new(Failing), Box::new(Failing));
    assert!(!broken.copy_to_clipboard(&taunt.phrase));
}

#[test]
fn config_and_cli_integration() -> anyhow::Result<()> {
    use clap::Parser;
    use earth_rotation::cli::CliArgs;
    use earth_rotation::config::Config;
    use earth_rotation::DisplayFormat;

    let dir = tempfile::TempDir::new()?;
    let path = dir.path().join("earth-rotation.toml");
    std::fs::write(
        &path,
        r#"
version = 1

[display]
format = "decimal"

[taunt]
zone = "utc"
"#,
    )?;

    let args = CliArgs::parse_from(["earth-rotation", "--config", path.to_str().unwrap(), "now"]);
    let config = Config::from_cli(&args)?;
    assert_eq!(config.display.format, DisplayFormat::Decimal);
    assert_eq!(config.taunt.zone, TauntZone::Utc);

    let args = CliArgs::parse_from([
        "earth-rotation",
        "--config",
        path.to_str().unwrap(),
        "--format",
        "integer",
        "now",
    ]);
    assert_eq!(Config::from_cli(&args)?.display.format, DisplayFormat::Integer);
    Ok(())
}
