use super::*;

fn parse(args: &[&str]) -> Cli {
    Cli::try_parse_from(std::iter::once("cropix").chain(args.iter().copied())).expect("parse")
}

#[test]
fn weather_defaults_to_seven_days() {
    let cli = parse(&["weather", "--city", "Pune"]);
    let Command::Weather(args) = cli.command else {
        panic!("expected weather");
    };
    assert_eq!(
        args.fields(),
        vec![("city", "Pune".to_owned()), ("days", "7".to_owned())]
    );
}

#[test]
fn global_flags_follow_subcommand() {
    let cli = parse(&["market", "--crop", "Rice", "--json", "--base-url", "http://127.0.0.1:8000"]);
    assert!(cli.json);
    assert_eq!(cli.base_url, "http://127.0.0.1:8000");
}

#[test]
fn out_of_range_days_fail_validation_before_sending() {
    let fields = vec![("city", "Pune".to_owned()), ("days", "20".to_owned())];
    let Err(CliError::Validation(errors)) = prepare::<WeatherForecast>(fields) else {
        panic!("expected validation failure");
    };
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].field(), "days");
}

#[test]
fn unknown_market_crop_is_rejected() {
    let cli = parse(&["market", "--crop", "Cotton"]);
    let Command::Market(args) = cli.command else {
        panic!("expected market");
    };
    let Err(err) = prepare::<MarketForecast>(args.fields()) else {
        panic!("expected validation failure");
    };
    assert!(err.to_string().contains("crop_name must be one of Wheat, Rice, Maize, Soybean"));
}

#[test]
fn soil_flags_map_to_wire_names() {
    let cli = parse(&[
        "soil",
        "--nitrogen",
        "90",
        "--phosphorus",
        "42",
        "--potassium",
        "43",
        "--temperature",
        "20.8",
        "--humidity",
        "82",
        "--ph",
        "6.5",
        "--rainfall",
        "202.9",
    ]);
    let Command::Soil(args) = cli.command else {
        panic!("expected soil");
    };
    let (_, submission) = prepare::<SoilCrop>(args.fields()).expect("valid");
    let body = serde_json::to_value(&submission.request).expect("serialize");
    assert_eq!(body["N"], 90.0);
    assert_eq!(body["ph"], 6.5);
}

#[test]
fn missing_image_file_is_reported() {
    let args = DiseaseArgs {
        image: PathBuf::from("/nonexistent/leaf.jpg"),
    };
    let err = args.fields().expect_err("missing file");
    assert!(err.to_string().starts_with("cannot read /nonexistent/leaf.jpg"));
}

#[test]
fn validation_errors_render_one_per_line() {
    let err = CliError::Validation(vec![
        ValidationError::Missing { field: "Crop" },
        ValidationError::Missing { field: "Season" },
    ]);
    assert_eq!(
        err.to_string(),
        "invalid input:\n  - Crop is required\n  - Season is required"
    );
}
