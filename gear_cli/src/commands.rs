//! Interactive command parsing.
//!
//! Each line typed at the prompt becomes a [`Command`]. Numeric arguments go
//! through the same coercion as any other entry, so `speed abc` sets the
//! fallback speed rather than failing.

use gear_core::entry::{gear_count_or, number_or};
use gear_core::settings::InputFallbacks;
use gear_core::{Edit, GearError, GearResult, PlanetaryMode};

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Edit(Edit),
    Show,
    Json,
    Modes,
    Help,
    Quit,
}

pub fn parse_command(line: &str, fallbacks: &InputFallbacks) -> GearResult<Command> {
    let mut words = line.split_whitespace();
    let Some(keyword) = words.next() else {
        return Ok(Command::Show);
    };
    let arg = words.next().unwrap_or("");

    let command = match keyword.to_ascii_lowercase().as_str() {
        "speed" | "rpm" => Command::Edit(Edit::InputSpeed(number_or(arg, fallbacks.input_speed_rpm))),
        "torque" => Command::Edit(Edit::InputTorque(number_or(arg, fallbacks.input_torque))),
        "gears" => Command::Edit(Edit::GearCount(gear_count_or(arg, fallbacks.gear_count))),
        "teeth" => {
            let index = arg
                .parse::<usize>()
                .map_err(|_| GearError::invalid_input("index", arg, "Expected a gear number, e.g. 'teeth 2 40'"))?;
            let teeth = number_or(words.next().unwrap_or(""), fallbacks.teeth);
            Command::Edit(Edit::GearTeeth { index, teeth })
        }
        "z1" => stage(1, arg, fallbacks),
        "z2" => stage(2, arg, fallbacks),
        "z3" => stage(3, arg, fallbacks),
        "z4" => stage(4, arg, fallbacks),
        "sun" | "ns" => Command::Edit(Edit::SunTeeth(number_or(arg, fallbacks.sun_teeth))),
        "ring" | "nr" => Command::Edit(Edit::RingTeeth(number_or(arg, fallbacks.ring_teeth))),
        "mode" => Command::Edit(Edit::Mode(parse_mode(arg)?)),
        "show" => Command::Show,
        "json" => Command::Json,
        "modes" => Command::Modes,
        "help" | "?" => Command::Help,
        "quit" | "exit" | "q" => Command::Quit,
        _ => {
            return Err(GearError::invalid_input(
                "command",
                keyword,
                "Unknown command, type 'help' for a list",
            ))
        }
    };
    Ok(command)
}

fn stage(position: usize, arg: &str, fallbacks: &InputFallbacks) -> Command {
    Command::Edit(Edit::StageTeeth {
        position,
        teeth: number_or(arg, fallbacks.teeth),
    })
}

/// Accepts a mode identifier or its 1-based menu number.
pub fn parse_mode(arg: &str) -> GearResult<PlanetaryMode> {
    if let Ok(n) = arg.parse::<usize>() {
        return n
            .checked_sub(1)
            .and_then(|i| PlanetaryMode::ALL.get(i).copied())
            .ok_or_else(|| GearError::unknown_mode(arg));
    }
    arg.parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(line: &str) -> GearResult<Command> {
        parse_command(line, &InputFallbacks::default())
    }

    #[test]
    fn test_numeric_edits() {
        assert_eq!(parse("speed 150").unwrap(), Command::Edit(Edit::InputSpeed(150.0)));
        assert_eq!(parse("TORQUE -2.5").unwrap(), Command::Edit(Edit::InputTorque(-2.5)));
        assert_eq!(parse("sun 24").unwrap(), Command::Edit(Edit::SunTeeth(24.0)));
        assert_eq!(parse("ring 72").unwrap(), Command::Edit(Edit::RingTeeth(72.0)));
        assert_eq!(
            parse("z3 15").unwrap(),
            Command::Edit(Edit::StageTeeth { position: 3, teeth: 15.0 })
        );
    }

    #[test]
    fn test_fallbacks_apply() {
        assert_eq!(parse("speed fast").unwrap(), Command::Edit(Edit::InputSpeed(0.0)));
        assert_eq!(parse("ring").unwrap(), Command::Edit(Edit::RingTeeth(60.0)));
        assert_eq!(parse("gears 1").unwrap(), Command::Edit(Edit::GearCount(2)));
        assert_eq!(
            parse("teeth 2 lots").unwrap(),
            Command::Edit(Edit::GearTeeth { index: 2, teeth: 1.0 })
        );
    }

    #[test]
    fn test_teeth_needs_index() {
        let err = parse("teeth two 40").unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");
    }

    #[test]
    fn test_mode() {
        assert_eq!(
            parse("mode carrier_in_sun_fixed_ring_out").unwrap(),
            Command::Edit(Edit::Mode(PlanetaryMode::CarrierInSunFixedRingOut))
        );
        assert_eq!(
            parse("mode 6").unwrap(),
            Command::Edit(Edit::Mode(PlanetaryMode::RingInCarrierFixedSunOut))
        );
        assert_eq!(parse("mode 0").unwrap_err().error_code(), "UNKNOWN_MODE");
        assert_eq!(parse("mode 7").unwrap_err().error_code(), "UNKNOWN_MODE");
        assert_eq!(parse("mode backwards").unwrap_err().error_code(), "UNKNOWN_MODE");
    }

    #[test]
    fn test_plain_commands() {
        assert_eq!(parse("").unwrap(), Command::Show);
        assert_eq!(parse("json").unwrap(), Command::Json);
        assert_eq!(parse("modes").unwrap(), Command::Modes);
        assert_eq!(parse("?").unwrap(), Command::Help);
        assert_eq!(parse("q").unwrap(), Command::Quit);
        assert!(parse("explode").is_err());
    }
}
