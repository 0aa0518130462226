use clap::Parser;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use unitcircle::{FixedProbe, Handle, HandlePixel, Origin, Outcome, UnitCircle, WidgetConfig};

const SCHEMA_JSON: &str = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/config.schema.json"));
const EXAMPLE_JSON: &str =
    include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/config.example.json"));

#[derive(Parser, Debug)]
#[command(author, version, about = "Unit circle event replay (JSON config driven)")]
struct Cli {
    /// Path to the JSON configuration file.
    #[arg(short, long, value_name = "FILE", default_value = "config.json")]
    config: PathBuf,
    /// Print the JSON schema and exit.
    #[arg(long)]
    print_schema: bool,
    /// Print an example config and exit.
    #[arg(long)]
    print_example: bool,
    /// Log every commit and drag transition.
    #[arg(long)]
    trace: bool,
}

#[derive(Clone, Copy, Debug, Deserialize)]
#[serde(rename_all = "snake_case")]
enum HandleConfig {
    Angle,
    Cosine,
    Sine,
}

impl From<HandleConfig> for Handle {
    fn from(value: HandleConfig) -> Self {
        match value {
            HandleConfig::Angle => Handle::AngleRay,
            HandleConfig::Cosine => Handle::CosineMarker,
            HandleConfig::Sine => Handle::SineMarker,
        }
    }
}

#[derive(Clone, Copy, Debug, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum EventConfig {
    Press { handle: HandleConfig },
    Move { x: f64, y: f64 },
    ClientMove { x: f64, y: f64 },
    Release,
    Leave,
    Resize { x: f64, y: f64 },
}

#[derive(Clone, Copy, Debug, Default, Deserialize)]
#[serde(default)]
struct OriginConfig {
    x: f64,
    y: f64,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
struct Config {
    diameter: f64,
    initial_angle: f64,
    origin: OriginConfig,
    events: Vec<EventConfig>,
    output_path: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        let cfg = WidgetConfig::default();
        Self {
            diameter: cfg.diameter,
            initial_angle: cfg.initial_angle,
            origin: OriginConfig::default(),
            events: Vec::new(),
            output_path: None,
        }
    }
}

#[derive(Debug, Serialize)]
struct FrameRecord {
    event: usize,
    outcome: &'static str,
    mode: &'static str,
    angle: f64,
    cosine: f64,
    sine: f64,
    handle_x: f64,
    handle_y: f64,
    arc_path: String,
}

impl FrameRecord {
    fn capture(event: usize, outcome: &'static str, widget: &UnitCircle) -> Self {
        let snap = widget.snapshot();
        Self {
            event,
            outcome,
            mode: snap.mode.as_str(),
            angle: snap.angle,
            cosine: snap.cosine,
            sine: snap.sine,
            handle_x: snap.handle.x,
            handle_y: snap.handle.y,
            arc_path: widget.arc().to_svg_path(),
        }
    }
}

#[derive(Debug, Serialize)]
struct Output {
    initial: FrameRecord,
    frames: Vec<FrameRecord>,
}

fn outcome_name(outcome: Outcome) -> &'static str {
    match outcome {
        Outcome::Ignored => "ignored",
        Outcome::Rejected => "rejected",
        Outcome::Committed { .. } => "committed",
    }
}

fn apply(
    widget: &mut UnitCircle,
    event: EventConfig,
) -> Result<&'static str, Box<dyn std::error::Error>> {
    let name = match event {
        EventConfig::Press { handle } => {
            widget.pointer_down(handle.into());
            "pressed"
        }
        EventConfig::Move { x, y } => outcome_name(widget.pointer_move(HandlePixel::new(x, y))),
        EventConfig::ClientMove { x, y } => outcome_name(widget.pointer_move_client(x, y)),
        EventConfig::Release => {
            widget.pointer_up();
            "released"
        }
        EventConfig::Leave => {
            widget.pointer_leave();
            "released"
        }
        EventConfig::Resize { x, y } => {
            widget.geometry_changed(Origin::new(x, y))?;
            "resized"
        }
    };
    Ok(name)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    if cli.trace {
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::from_default_env().add_directive("unitcircle=info".parse()?),
            )
            .with_target(false)
            .init();
    }

    if cli.print_schema {
        println!("{SCHEMA_JSON}");
        return Ok(());
    }
    if cli.print_example {
        println!("{EXAMPLE_JSON}");
        return Ok(());
    }

    let config_text = fs::read_to_string(&cli.config)?;
    let config: Config = serde_json::from_str(&config_text)?;

    let mut widget = UnitCircle::new(WidgetConfig {
        diameter: config.diameter,
        initial_angle: config.initial_angle,
    })?;
    let mut probe = FixedProbe::new(Origin::new(config.origin.x, config.origin.y));
    widget.mount(&mut probe)?;

    let initial = FrameRecord::capture(0, "mounted", &widget);
    let mut frames = Vec::with_capacity(config.events.len());
    for (idx, event) in config.events.iter().copied().enumerate() {
        let outcome = apply(&mut widget, event)?;
        frames.push(FrameRecord::capture(idx + 1, outcome, &widget));
    }
    widget.unmount(&mut probe)?;

    let committed = frames.iter().filter(|f| f.outcome == "committed").count();
    tracing::info!(events = frames.len(), committed, "replay finished");

    let output = Output { initial, frames };
    let json = serde_json::to_string_pretty(&output)?;

    match config.output_path {
        Some(path) => fs::write(path, json)?,
        None => println!("{json}"),
    }

    Ok(())
}
