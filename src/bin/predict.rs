use {
    anyhow::{Context, Result, bail},
    clap::Parser,
    gold_predictor::{
        build_controller,
        config::PREDICTOR,
        domain::{FormField, FormState},
        engine::BackendStatus,
    },
    std::time::Duration,
};

/// One-shot gold price prediction without opening the window.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Base URL of the prediction server
    #[arg(long, default_value = PREDICTOR.endpoint.base_url)]
    endpoint: String,

    /// Use this year with today's month and day. Explicit fields below still win.
    #[arg(long)]
    preset: Option<i32>,

    #[arg(long)]
    year: Option<String>,
    #[arg(long)]
    month: Option<String>,
    #[arg(long)]
    day: Option<String>,
    /// Inflation assumption in percent
    #[arg(long, allow_hyphen_values = true)]
    inflation: Option<String>,

    /// Only ask the server whether it is up
    #[arg(long, default_value_t = false)]
    health: bool,

    /// Give up after this many seconds without an answer
    #[arg(long, default_value_t = 60)]
    wait_secs: u64,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();
    let wait = Duration::from_secs(args.wait_secs);
    let mut controller = build_controller(&args.endpoint, FormState::default())?;

    if args.health {
        controller.check_health();
        while !controller.backend_status().is_settled() {
            if controller.pump_blocking(wait) == 0 {
                bail!("No health answer from {} within {}s", args.endpoint, args.wait_secs);
            }
        }
        return match controller.backend_status() {
            BackendStatus::Online(status) => {
                println!("{}", status);
                Ok(())
            }
            other => bail!("Prediction server is not healthy: {:?}", other),
        };
    }

    if let Some(year) = args.preset {
        controller.apply_preset(year);
    }

    let fields = [
        (FormField::Year, &args.year),
        (FormField::Month, &args.month),
        (FormField::Day, &args.day),
        (FormField::InflationRate, &args.inflation),
    ];
    for (field, raw) in fields {
        if let Some(raw) = raw {
            controller.set_field(field, raw)?;
        }
    }

    controller.submit()?;
    if !controller.wait_until_settled(wait) {
        bail!("No prediction from {} within {}s", args.endpoint, args.wait_secs);
    }
    if let Some(message) = controller.error() {
        bail!("{}", message);
    }

    let result = controller
        .result()
        .context("server answered without a prediction")?;
    println!(
        "{} {} on {} (inflation {}, {})",
        result.formatted_price(),
        result.unit,
        result.formatted_date(),
        result.formatted_inflation(),
        result.currency
    );
    Ok(())
}
