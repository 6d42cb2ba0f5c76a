use beverage_chart::api::{BeverageDashboard, ChartConfig};
use beverage_chart::data::load_records_from_path;
use beverage_chart::interaction::ControlEvent;
use beverage_chart::render::SvgRenderer;
use std::fs;
use std::path::PathBuf;

const USAGE: &str = "usage: beverage_chart_svg --input <csv> --output <svg> [--size <size>] [--milk <milk type>] [--min <calories>] [--max <calories>] [--config <json>]";

#[derive(Debug, Default)]
struct CliArgs {
    input: PathBuf,
    output: PathBuf,
    config: Option<PathBuf>,
    size: Option<String>,
    milk_type: Option<String>,
    min: Option<f64>,
    max: Option<f64>,
}

fn main() {
    let _ = beverage_chart::telemetry::init_default_tracing();
    if let Err(err) = run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let args = parse_args()?;

    let config = match &args.config {
        Some(path) => {
            let raw = fs::read_to_string(path)
                .map_err(|err| format!("failed to read `{}`: {err}", path.display()))?;
            ChartConfig::from_json_str(&raw).map_err(|err| err.to_string())?
        }
        None => ChartConfig::default(),
    };
    let records = load_records_from_path(&args.input).map_err(|err| err.to_string())?;

    let mut events = Vec::new();
    if let Some(size) = args.size {
        events.push(ControlEvent::SizeSelected(size));
    }
    if let Some(milk_type) = args.milk_type {
        events.push(ControlEvent::MilkTypeSelected(milk_type));
    }
    if let Some(min) = args.min {
        events.push(ControlEvent::CaloriesMinChanged(min));
    }
    if let Some(max) = args.max {
        events.push(ControlEvent::CaloriesMaxChanged(max));
    }

    let settle_ms = config.transition_duration_ms;
    let mut dashboard = BeverageDashboard::new(records, config, SvgRenderer::new(), 0.0)
        .map_err(|err| err.to_string())?;
    for event in events {
        dashboard.handle(event, 0.0).map_err(|err| err.to_string())?;
    }
    dashboard.render(settle_ms).map_err(|err| err.to_string())?;

    let document = dashboard.chart().renderer().document();
    fs::write(&args.output, document)
        .map_err(|err| format!("failed to write `{}`: {err}", args.output.display()))
}

fn parse_args() -> Result<CliArgs, String> {
    let mut args = std::env::args().skip(1);
    let mut input = None::<PathBuf>;
    let mut output = None::<PathBuf>;
    let mut parsed = CliArgs::default();

    while let Some(flag) = args.next() {
        let mut value = |name: &str| {
            args.next()
                .ok_or_else(|| format!("missing value for {name}"))
        };
        match flag.as_str() {
            "--input" => input = Some(PathBuf::from(value("--input")?)),
            "--output" => output = Some(PathBuf::from(value("--output")?)),
            "--config" => parsed.config = Some(PathBuf::from(value("--config")?)),
            "--size" => parsed.size = Some(value("--size")?),
            "--milk" => parsed.milk_type = Some(value("--milk")?),
            "--min" => parsed.min = Some(parse_calories("--min", &value("--min")?)?),
            "--max" => parsed.max = Some(parse_calories("--max", &value("--max")?)?),
            "--help" | "-h" => return Err(USAGE.to_owned()),
            _ => return Err(format!("unknown argument `{flag}`\n{USAGE}")),
        }
    }

    parsed.input = input.ok_or_else(|| format!("missing --input\n{USAGE}"))?;
    parsed.output = output.ok_or_else(|| format!("missing --output\n{USAGE}"))?;
    Ok(parsed)
}

fn parse_calories(flag: &str, raw: &str) -> Result<f64, String> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .ok_or_else(|| format!("invalid value `{raw}` for {flag}"))
}
