//! # Gearcalc CLI Application
//!
//! Terminal interface for gear train calculations.
//!
//! Usage:
//!   gearcalc [options]
//!
//! Options:
//!   --json <path|->    Calculate one JSON request and print the JSON result
//!   --config <path>    Load display and fallback settings (interactive mode)
//!   --verbose          Log calculation details to stderr
//!   --help             Show this help
//!
//! Without `--json` the program runs interactively: pick a train, then type
//! edits (`speed 150`, `teeth 2 40`, `mode 3`, ...). Every edit recalculates.

mod commands;

use std::env;
use std::fs;
use std::io::{self, BufRead, Read, Write};
use std::path::PathBuf;
use std::process;

use gear_core::calculations::simple::{MAX_GEAR_COUNT, MIN_GEAR_COUNT};
use gear_core::entry::{gear_count_or, number_or};
use gear_core::settings::InputFallbacks;
use gear_core::{
    CalculationItem, CalculationResult, CompoundInput, DisplaySettings, GearError, GearListInput, GearResult,
    PlanetaryInput, PlanetaryMode, Session, Settings,
};
use tracing::{info, Level};

use commands::{parse_command, Command};

/// Starting tooth counts for a compound train (2:1 then 3:1)
const COMPOUND_PRESET: [f64; 4] = [20.0, 40.0, 15.0, 45.0];

#[derive(Debug, Default)]
struct Options {
    json: Option<String>,
    config: Option<PathBuf>,
    verbose: bool,
    help: bool,
}

fn parse_args(args: &[String]) -> Result<Options, String> {
    let mut options = Options::default();
    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--json" => {
                i += 1;
                options.json = Some(args.get(i).ok_or("--json needs a path or '-'")?.clone());
            }
            "--config" => {
                i += 1;
                options.config = Some(PathBuf::from(args.get(i).ok_or("--config needs a path")?));
            }
            "--verbose" | "-v" => options.verbose = true,
            "--help" | "-h" => options.help = true,
            other => return Err(format!("Unknown option: {}", other)),
        }
        i += 1;
    }
    Ok(options)
}

fn init_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::WARN };
    let subscriber = tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_max_level(level)
        .compact()
        .finish();
    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Failed to init logging. {}", e);
    }
}

fn main() {
    let args: Vec<String> = env::args().skip(1).collect();
    let options = match parse_args(&args) {
        Ok(options) => options,
        Err(message) => {
            eprintln!("{}", message);
            print_usage();
            process::exit(2);
        }
    };

    if options.help {
        print_usage();
        return;
    }

    init_logging(options.verbose);
    info!("Logging initialised");

    if let Some(source) = &options.json {
        if let Err(e) = run_json(source) {
            report_error(&e);
            process::exit(1);
        }
        return;
    }

    let settings = match &options.config {
        Some(path) => Settings::load_or_default(path),
        None => Settings::default(),
    };
    run_interactive(&settings);
}

fn print_usage() {
    println!("Usage: gearcalc [--json <path|->] [--config <path>] [--verbose]");
    println!();
    println!("  --json <path|->   Calculate a JSON request (file, or '-' for stdin)");
    println!("  --config <path>   JSON settings file (display format, entry fallbacks);");
    println!("                    interactive mode only, --json output is unformatted");
    println!("  --verbose, -v     Log calculation details to stderr");
    println!("  --help, -h        Show this help");
}

// ============================================================================
// JSON request mode
// ============================================================================

fn run_json(source: &str) -> GearResult<()> {
    let request = if source == "-" {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .map_err(|e| GearError::file_error("read", "<stdin>", e.to_string()))?;
        buf
    } else {
        fs::read_to_string(source).map_err(|e| GearError::file_error("read", source, e.to_string()))?
    };

    let response = calculate_request(&request)?;
    println!("{}", serde_json::to_string_pretty(&response)?);
    Ok(())
}

/// Calculate one `CalculationItem` document; the response echoes the input
/// beside the result.
fn calculate_request(request: &str) -> GearResult<serde_json::Value> {
    let item: CalculationItem = serde_json::from_str(request)?;
    let result = item.calculate();
    info!(calc_type = item.calc_type(), defined = result.is_defined(), "json request calculated");

    Ok(serde_json::json!({
        "input": item,
        "result": result,
    }))
}

fn report_error(error: &GearError) {
    eprintln!("Error: {}", error);
    if let Ok(json) = serde_json::to_string_pretty(error) {
        eprintln!();
        eprintln!("Error JSON:");
        eprintln!("{}", json);
    }
}

// ============================================================================
// Interactive mode
// ============================================================================

fn read_line(prompt: &str) -> Option<String> {
    print!("{}", prompt);
    if io::stdout().flush().is_err() {
        return None;
    }

    let mut input = String::new();
    match io::stdin().lock().read_line(&mut input) {
        Ok(0) | Err(_) => None,
        Ok(_) => Some(input),
    }
}

fn prompt_f64(prompt: &str, fallback: f64) -> f64 {
    read_line(prompt)
        .map(|line| number_or(&line, fallback))
        .unwrap_or(fallback)
}

fn choose_train(fallbacks: &InputFallbacks) -> CalculationItem {
    println!("Gear train type:");
    println!("  1) Simple    - N gears in series");
    println!("  2) Compound  - two stages on a common shaft");
    println!("  3) Planetary - sun, ring, and carrier");
    let choice = read_line("Choice [1]: ").unwrap_or_default();

    let input_speed_rpm = prompt_f64("Input speed (rpm): ", fallbacks.input_speed_rpm);
    let input_torque = prompt_f64("Input torque: ", fallbacks.input_torque);

    match choice.trim() {
        "2" => {
            let [z1, z2, z3, z4] = COMPOUND_PRESET;
            CalculationItem::Compound(CompoundInput {
                z1,
                z2,
                z3,
                z4,
                input_speed_rpm,
                input_torque,
            })
        }
        "3" => CalculationItem::Planetary(PlanetaryInput {
            sun_teeth: fallbacks.sun_teeth,
            ring_teeth: fallbacks.ring_teeth,
            mode: PlanetaryMode::SunInRingFixedCarrierOut,
            input_speed_rpm,
            input_torque,
        }),
        _ => {
            let default_count = fallbacks.gear_count.clamp(MIN_GEAR_COUNT, MAX_GEAR_COUNT);
            let line = read_line(&format!("Number of gears [{}]: ", default_count)).unwrap_or_default();
            let count = gear_count_or(&line, fallbacks.gear_count);
            CalculationItem::Simple(GearListInput::with_gear_count(count, input_speed_rpm, input_torque))
        }
    }
}

fn describe(item: &CalculationItem, display: &DisplaySettings) -> String {
    let n = |v: f64| gear_core::display::format_value(v, display);
    match item {
        CalculationItem::Simple(input) => {
            let teeth: Vec<String> = input.teeth.iter().map(|&z| n(z)).collect();
            format!(
                "Simple train, {} gears [{}], in {} rpm / {}",
                input.gear_count(),
                teeth.join(", "),
                n(input.input_speed_rpm),
                n(input.input_torque)
            )
        }
        CalculationItem::Compound(input) => format!(
            "Compound train, Z1={} Z2={} Z3={} Z4={}, in {} rpm / {}",
            n(input.z1),
            n(input.z2),
            n(input.z3),
            n(input.z4),
            n(input.input_speed_rpm),
            n(input.input_torque)
        ),
        CalculationItem::Planetary(input) => format!(
            "Planetary set, Ns={} Nr={}, {}, in {} rpm / {}",
            n(input.sun_teeth),
            n(input.ring_teeth),
            input.mode.display_name(),
            n(input.input_speed_rpm),
            n(input.input_torque)
        ),
    }
}

fn print_result(item: &CalculationItem, result: &CalculationResult, display: &DisplaySettings) {
    let shown = result.formatted(display);
    println!();
    println!("  {}", describe(item, display));
    println!("  ───────────────────────────────────────");
    println!("  Speed ratio:    {}", shown.ratio);
    println!("  Output speed:   {} rpm", shown.output_speed);
    println!("  Output torque:  {}", shown.output_torque);
    println!("  Direction:      {}", shown.direction);
    println!();
}

fn print_help() {
    println!("Commands:");
    println!("  speed <rpm>        input speed");
    println!("  torque <value>     input torque");
    println!("  gears <n>          simple: rebuild with n gears");
    println!("  teeth <i> <z>      simple: set gear i (1-based) to z teeth");
    println!("  z1..z4 <z>         compound: set a stage gear");
    println!("  sun <z>, ring <z>  planetary: tooth counts");
    println!("  mode <name|1-6>    planetary: operating mode (see 'modes')");
    println!("  show, json, modes, help, quit");
}

fn print_modes() {
    for (i, mode) in PlanetaryMode::ALL.iter().enumerate() {
        println!("  {}) {:<32} {}", i + 1, mode.as_str(), mode.display_name());
    }
}

fn run_interactive(settings: &Settings) {
    println!("Gearcalc - Gear Train Calculator");
    println!("================================");
    println!();

    let item = choose_train(&settings.fallbacks);
    let mut session = Session::new(item);

    let display = settings.display.clone();
    session.subscribe(move |item, result| print_result(item, result, &display));

    print_result(session.item(), session.result(), &settings.display);
    print_help();

    while let Some(line) = read_line("> ") {
        match parse_command(&line, &settings.fallbacks) {
            Ok(Command::Edit(edit)) => {
                if let Err(e) = session.apply(edit) {
                    eprintln!("Error: {}", e);
                }
            }
            Ok(Command::Show) => print_result(session.item(), session.result(), &settings.display),
            Ok(Command::Json) => {
                if let Ok(json) = serde_json::to_string_pretty(session.result()) {
                    println!("{}", json);
                }
            }
            Ok(Command::Modes) => print_modes(),
            Ok(Command::Help) => print_help(),
            Ok(Command::Quit) => break,
            Err(e) => eprintln!("Error: {}", e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parse_args() {
        let options = parse_args(&args(&["--json", "-", "--verbose"])).unwrap();
        assert_eq!(options.json.as_deref(), Some("-"));
        assert!(options.verbose);
        assert!(options.config.is_none());

        let options = parse_args(&args(&["--config", "gearcalc.json"])).unwrap();
        assert_eq!(options.config, Some(PathBuf::from("gearcalc.json")));
    }

    #[test]
    fn test_parse_args_errors() {
        assert!(parse_args(&args(&["--json"])).is_err());
        assert!(parse_args(&args(&["--frobnicate"])).is_err());
    }

    #[test]
    fn test_calculate_request_planetary() {
        let request = r#"{
            "type": "Planetary",
            "sun_teeth": 20.0,
            "ring_teeth": 60.0,
            "mode": "sun_in_ring_fixed_carrier_out",
            "input_speed_rpm": 100.0,
            "input_torque": 10.0
        }"#;
        let response = calculate_request(request).unwrap();

        assert_eq!(response["input"]["type"], "Planetary");
        assert_eq!(response["input"]["mode"], "sun_in_ring_fixed_carrier_out");
        assert_eq!(response["result"]["ratio"], 4.0);
        assert_eq!(response["result"]["output_speed_rpm"], 25.0);
        assert_eq!(response["result"]["output_torque"], 40.0);
        assert_eq!(response["result"]["direction"], "same_as_input");
    }

    #[test]
    fn test_calculate_request_guard() {
        let request = r#"{"type": "Planetary", "sun_teeth": 60.0, "ring_teeth": 20.0,
            "mode": "sun_in_ring_fixed_carrier_out", "input_speed_rpm": 100.0, "input_torque": 10.0}"#;
        let response = calculate_request(request).unwrap();
        assert!(response["result"]["ratio"].is_null());
        assert!(response["result"]["output_speed_rpm"].is_null());
    }

    #[test]
    fn test_calculate_request_malformed() {
        let err = calculate_request(r#"{"type": "Planetary", "sun_teeth": "#).unwrap_err();
        assert_eq!(err.error_code(), "SERIALIZATION_ERROR");

        let err = calculate_request(r#"{"type": "Worm"}"#).unwrap_err();
        assert_eq!(err.error_code(), "SERIALIZATION_ERROR");
    }

    #[test]
    fn test_describe() {
        let item = CalculationItem::Simple(GearListInput::with_gear_count(3, 900.0, 12.0));
        assert_eq!(
            describe(&item, &DisplaySettings::default()),
            "Simple train, 3 gears [18, 30, 54], in 900 rpm / 12"
        );
    }
}
