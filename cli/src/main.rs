//! `cropix`: command-line client for the Cropix advisory forms.
//!
//! Each subcommand fills the same form the web page shows, runs the same
//! validation, sends one request and prints the rendered result (or the raw
//! JSON body with `--json`).

mod service;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};
use forms::contact::{Contact, FAILURE, missing_webhook};
use forms::endpoints::disease::IMAGE_FIELD;
use forms::endpoints::{
    CropYield, DiseaseDetection, Fertilizer, MarketForecast, SoilCrop, WeatherForecast,
};
use forms::{Endpoint, FormSpec, RemoteForm, SubmitError, Submission, Summary, ValidationError};
use serde_json::Value;
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;
use tracing_subscriber::EnvFilter;

use service::{PredictionClient, Timeouts};

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("invalid input:\n{}", format_validation(.0))]
    Validation(Vec<ValidationError>),
    #[error(transparent)]
    Submit(#[from] SubmitError),
    #[error("cannot read {}: {source}", .path.display())]
    ReadImage {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid JSON payload: {0}")]
    InvalidJson(#[from] serde_json::Error),
    #[error("timestamp formatting failed: {0}")]
    Timestamp(#[from] time::error::Format),
}

fn format_validation(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| format!("  - {e}"))
        .collect::<Vec<_>>()
        .join("\n")
}

#[derive(Parser, Debug)]
#[command(name = "cropix", about = "Cropix agricultural advisory CLI")]
struct Cli {
    #[arg(
        long,
        global = true,
        env = "CROPIX_API_BASE_URL",
        default_value = forms::DEFAULT_API_BASE_URL
    )]
    base_url: String,

    #[arg(
        long,
        global = true,
        env = "CROPIX_TIMEOUT_SECS",
        default_value_t = service::DEFAULT_REQUEST_TIMEOUT_SECS
    )]
    timeout_secs: u64,

    #[arg(
        long,
        global = true,
        env = "CROPIX_CONNECT_TIMEOUT_SECS",
        default_value_t = service::DEFAULT_CONNECT_TIMEOUT_SECS
    )]
    connect_timeout_secs: u64,

    /// Print the decoded JSON body instead of the rendered result.
    #[arg(long, global = true, default_value_t = false)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Check that the prediction service answers.
    Ping,
    /// Predict crop yield in tonnes per hectare.
    Yield(YieldArgs),
    /// Recommend N/P/K fertilizer levels.
    Fertilizer(FertilizerArgs),
    /// Recommend a crop from soil and climate readings.
    Soil(SoilArgs),
    /// Detect a crop disease from a photo.
    Disease(DiseaseArgs),
    /// Daily weather forecast for a city.
    Weather(WeatherArgs),
    /// Weekly market price forecast for a crop.
    Market(MarketArgs),
    /// Send a message to the Cropix team.
    Contact(ContactArgs),
}

/// Raw field values for one form, by wire name.
type Fields = Vec<(&'static str, String)>;

#[derive(Args, Debug)]
struct YieldArgs {
    #[arg(long)]
    crop: String,
    #[arg(long)]
    season: String,
    /// Farm area in hectares.
    #[arg(long)]
    area: String,
    /// Fertilizer in tonnes.
    #[arg(long)]
    fertilizer: String,
    #[arg(long)]
    crop_year: String,
    /// Pesticide in tonnes.
    #[arg(long)]
    pesticide: String,
    /// Annual rainfall in mm.
    #[arg(long)]
    annual_rainfall: String,
}

impl YieldArgs {
    fn fields(self) -> Fields {
        vec![
            ("Crop", self.crop),
            ("Season", self.season),
            ("Area", self.area),
            ("Fertilizer", self.fertilizer),
            ("Crop_Year", self.crop_year),
            ("Pesticide", self.pesticide),
            ("Annual_Rainfall", self.annual_rainfall),
        ]
    }
}

#[derive(Args, Debug)]
struct FertilizerArgs {
    #[arg(long)]
    crop: String,
    #[arg(long)]
    current_n: String,
    #[arg(long)]
    current_p: String,
    #[arg(long)]
    current_k: String,
}

impl FertilizerArgs {
    fn fields(self) -> Fields {
        vec![
            ("Crop", self.crop),
            ("Current_N", self.current_n),
            ("Current_P", self.current_p),
            ("Current_K", self.current_k),
        ]
    }
}

#[derive(Args, Debug)]
struct SoilArgs {
    #[arg(long)]
    nitrogen: String,
    #[arg(long)]
    phosphorus: String,
    #[arg(long)]
    potassium: String,
    /// Temperature in °C.
    #[arg(long)]
    temperature: String,
    /// Relative humidity in %.
    #[arg(long)]
    humidity: String,
    #[arg(long)]
    ph: String,
    /// Rainfall in mm.
    #[arg(long)]
    rainfall: String,
}

impl SoilArgs {
    fn fields(self) -> Fields {
        vec![
            ("N", self.nitrogen),
            ("P", self.phosphorus),
            ("K", self.potassium),
            ("temperature", self.temperature),
            ("humidity", self.humidity),
            ("ph", self.ph),
            ("rainfall", self.rainfall),
        ]
    }
}

#[derive(Args, Debug)]
struct DiseaseArgs {
    /// Path to the crop photo.
    #[arg(long)]
    image: PathBuf,
}

impl DiseaseArgs {
    fn fields(self) -> Result<Fields, CliError> {
        let bytes = std::fs::read(&self.image).map_err(|source| CliError::ReadImage {
            path: self.image.clone(),
            source,
        })?;
        Ok(vec![(IMAGE_FIELD, forms::image::encode_image(&bytes))])
    }
}

#[derive(Args, Debug)]
struct WeatherArgs {
    #[arg(long)]
    city: String,
    /// Number of days, 1 to 14.
    #[arg(long, default_value = "7")]
    days: String,
}

impl WeatherArgs {
    fn fields(self) -> Fields {
        vec![("city", self.city), ("days", self.days)]
    }
}

#[derive(Args, Debug)]
struct MarketArgs {
    /// One of Wheat, Rice, Maize, Soybean.
    #[arg(long)]
    crop: String,
    /// Number of weeks, 1 to 52.
    #[arg(long, default_value = "4")]
    weeks: String,
}

impl MarketArgs {
    fn fields(self) -> Fields {
        vec![("crop_name", self.crop), ("weeks_to_forecast", self.weeks)]
    }
}

#[derive(Args, Debug)]
struct ContactArgs {
    #[arg(long)]
    name: String,
    #[arg(long)]
    email: String,
    #[arg(long)]
    subject: String,
    #[arg(long)]
    message: String,
    #[arg(long, env = "CROPIX_CONTACT_WEBHOOK_URL")]
    webhook_url: Option<String>,
}

impl ContactArgs {
    fn split(self) -> (Fields, Option<String>) {
        let fields = vec![
            ("name", self.name),
            ("email", self.email),
            ("subject", self.subject),
            ("message", self.message),
        ];
        (fields, self.webhook_url)
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    if let Err(e) = dotenvy::dotenv() {
        if !e.not_found() {
            eprintln!("warning: .env not loaded: {e}");
        }
    }

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            if let CliError::Submit(submit) = &e {
                tracing::warn!(
                    code = submit.error_code(),
                    retryable = submit.retryable(),
                    "submission failed"
                );
            }
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<(), CliError> {
    let timeouts = Timeouts {
        request_secs: cli.timeout_secs,
        connect_secs: cli.connect_timeout_secs,
    };
    let client = PredictionClient::new(&cli.base_url, timeouts)?;
    let json = cli.json;

    match cli.command {
        Command::Ping => {
            let body = client.ping().await?;
            print_json(&body)
        }
        Command::Yield(args) => run_form::<CropYield>(&client, args.fields(), json).await,
        Command::Fertilizer(args) => run_form::<Fertilizer>(&client, args.fields(), json).await,
        Command::Soil(args) => run_form::<SoilCrop>(&client, args.fields(), json).await,
        Command::Disease(args) => {
            run_form::<DiseaseDetection>(&client, args.fields()?, json).await
        }
        Command::Weather(args) => run_form::<WeatherForecast>(&client, args.fields(), json).await,
        Command::Market(args) => run_form::<MarketForecast>(&client, args.fields(), json).await,
        Command::Contact(args) => run_contact(&client, args).await,
    }
}

/// Fill a fresh form and validate it.
fn prepare<F: FormSpec>(
    fields: Fields,
) -> Result<(RemoteForm<F>, Submission<F::Request>), CliError> {
    let mut form = RemoteForm::<F>::new();
    for (name, value) in fields {
        form.set_field(name, value);
    }
    let submission = form.begin_submit().map_err(CliError::Validation)?;
    Ok((form, submission))
}

async fn run_form<E: Endpoint>(
    client: &PredictionClient,
    fields: Fields,
    json: bool,
) -> Result<(), CliError> {
    let (mut form, submission) = prepare::<E>(fields)?;
    tracing::info!(path = E::PATH, token = submission.token.value(), "submitting");

    let prediction = client.predict::<E>(&submission.request).await?;
    if json {
        return print_json(&prediction.raw);
    }
    form.complete(submission.token, Ok(prediction.outcome));
    if let Some(outcome) = form.result().success() {
        print_lines(outcome);
    }
    Ok(())
}

async fn run_contact(client: &PredictionClient, args: ContactArgs) -> Result<(), CliError> {
    let (fields, webhook_url) = args.split();
    let (mut form, submission) = prepare::<Contact>(fields)?;
    let webhook_url = webhook_url
        .filter(|url| !url.trim().is_empty())
        .ok_or_else(missing_webhook)?;
    let timestamp = OffsetDateTime::now_utc().format(&Rfc3339)?;

    match client
        .deliver_contact(&webhook_url, &submission.request, timestamp)
        .await
    {
        Ok(delivered) => {
            form.complete(submission.token, Ok(delivered));
            print_lines(&delivered);
            Ok(())
        }
        Err(e) => {
            eprintln!("{FAILURE}");
            Err(e.into())
        }
    }
}

fn print_lines(outcome: &impl Summary) {
    for line in outcome.lines() {
        println!("{line}");
    }
}

fn print_json(value: &Value) -> Result<(), CliError> {
    let rendered = serde_json::to_string_pretty(value)?;
    println!("{rendered}");
    Ok(())
}

#[cfg(test)]
#[path = "main_test.rs"]
mod main_test;
