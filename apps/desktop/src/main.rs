use anyhow::{anyhow, Result};
use clap::{Parser, ValueEnum};
use client_core::{config, HttpPredictionClient, PredictionSession};
use shared::domain::{EmbarkPort, FieldSnapshot, PassengerClass, Sex};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ClassArg {
    First,
    Second,
    Third,
}

impl From<ClassArg> for PassengerClass {
    fn from(value: ClassArg) -> Self {
        match value {
            ClassArg::First => PassengerClass::First,
            ClassArg::Second => PassengerClass::Second,
            ClassArg::Third => PassengerClass::Third,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum SexArg {
    Female,
    Male,
}

impl From<SexArg> for Sex {
    fn from(value: SexArg) -> Self {
        match value {
            SexArg::Female => Sex::Female,
            SexArg::Male => Sex::Male,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum EmbarkedArg {
    S,
    C,
    Q,
}

impl From<EmbarkedArg> for EmbarkPort {
    fn from(value: EmbarkedArg) -> Self {
        match value {
            EmbarkedArg::S => EmbarkPort::Southampton,
            EmbarkedArg::C => EmbarkPort::Cherbourg,
            EmbarkedArg::Q => EmbarkPort::Queenstown,
        }
    }
}

#[derive(Parser, Debug)]
#[command(about = "Submit passenger details to the survival prediction service")]
struct Args {
    /// Prediction service base URL; defaults to predictor.toml / env / built-in.
    #[arg(long)]
    server_url: Option<String>,
    #[arg(long, value_enum)]
    pclass: ClassArg,
    #[arg(long, value_enum)]
    sex: SexArg,
    #[arg(long, value_enum)]
    embarked: EmbarkedArg,
    #[arg(long)]
    age: String,
    #[arg(long)]
    sibsp: String,
    #[arg(long)]
    parch: String,
    #[arg(long)]
    fare: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt().init();
    let args = Args::parse();

    let mut settings = config::load_settings();
    if let Some(server_url) = args.server_url {
        settings.server_url = server_url;
    }

    let snapshot = FieldSnapshot {
        passenger_class: args.pclass.into(),
        sex: args.sex.into(),
        embarked: args.embarked.into(),
        age: args.age,
        siblings_spouses: args.sibsp,
        parents_children: args.parch,
        fare: args.fare,
    };

    let client = HttpPredictionClient::from_settings(&settings)?;
    let mut session = PredictionSession::new(client);
    session.submit(&snapshot).await;

    let state = session.state();
    if let Some(result) = &state.result {
        println!("Prediction: {result}");
        return Ok(());
    }
    Err(anyhow!(state
        .error
        .clone()
        .unwrap_or_else(|| "prediction did not complete".to_string())))
}
