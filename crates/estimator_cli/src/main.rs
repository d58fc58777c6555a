//! Estimator CLI.
//!
//! # Responsibility
//! - Price rooms from the command line without the mobile UI.
//! - Print the running total and the analysis narrative.

use clap::Parser;
use estimator_core::{
    format_usd, init_logging, parse_area, EstimateService, EstimatorSettings, Finish, Room,
    RoomType,
};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::process::ExitCode;

#[derive(Debug, Parser)]
#[command(name = "estimator", version, about = "Room cost estimator")]
struct Cli {
    /// Room as `AREA:FINISH[:TYPE]`, e.g. `250:Basic` or `80:Premium:Kitchen`.
    #[arg(long = "room", value_parser = parse_room_spec)]
    rooms: Vec<RoomSpec>,

    /// Seed for a reproducible contingency factor.
    #[arg(long)]
    seed: Option<u64>,

    /// Absolute directory for rolling log files.
    #[arg(long)]
    log_dir: Option<String>,

    /// Log level used with `--log-dir`.
    #[arg(long, default_value = estimator_core::default_log_level())]
    log_level: String,
}

#[derive(Debug, Clone)]
struct RoomSpec {
    area: f64,
    finish: Finish,
    room_type: RoomType,
}

fn parse_room_spec(raw: &str) -> Result<RoomSpec, String> {
    let mut parts = raw.splitn(3, ':');
    let area = parts.next().unwrap_or_default();
    let finish = parts
        .next()
        .ok_or_else(|| format!("expected AREA:FINISH[:TYPE], got `{raw}`"))?;
    let room_type = parts.next().unwrap_or("General");
    Ok(RoomSpec {
        area: parse_area(area),
        finish: Finish::from_label(finish.trim()),
        room_type: RoomType::from_label(room_type.trim()),
    })
}

fn main() -> ExitCode {
    match run(&Cli::parse()) {
        Ok(report) => {
            println!("{report}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("estimator: {err}");
            ExitCode::FAILURE
        }
    }
}

/// Prices the requested rooms and renders per-room lines, total and analysis.
fn run(cli: &Cli) -> Result<String, String> {
    if let Some(log_dir) = cli.log_dir.as_deref() {
        init_logging(&cli.log_level, log_dir)?;
    }

    let mut service = EstimateService::empty(EstimatorSettings::default());
    let mut lines = Vec::with_capacity(cli.rooms.len() + 2);
    for spec in &cli.rooms {
        let room = Room::new()
            .with_area(spec.area)
            .with_finish(spec.finish.clone());
        let id = service.insert_room(room).map_err(|err| err.to_string())?;
        let cost = service
            .room_cost(id, spec.room_type.label())
            .map_err(|err| err.to_string())?;
        lines.push(format!(
            "{:>10} sqft  {:<9} {:<9} {}",
            spec.area,
            spec.finish,
            spec.room_type,
            format_usd(cost)
        ));
    }

    lines.push(service.total_label());

    let analysis = match cli.seed {
        Some(seed) => service.analyze_with(&mut ChaCha8Rng::seed_from_u64(seed)),
        None => service.analyze(),
    };
    lines.push(analysis.text);
    Ok(lines.join("\n"))
}

#[cfg(test)]
mod tests {
    use super::{parse_room_spec, run, Cli};
    use clap::Parser;
    use estimator_core::{Finish, RoomType};

    #[test]
    fn room_spec_defaults_to_general_type() {
        let spec = parse_room_spec("250:Basic").unwrap();
        assert_eq!(spec.area, 250.0);
        assert_eq!(spec.finish, Finish::Basic);
        assert_eq!(spec.room_type, RoomType::General);
    }

    #[test]
    fn room_spec_reads_type_and_coerces_bad_area() {
        let spec = parse_room_spec("big:Premium:Kitchen").unwrap();
        assert_eq!(spec.area, 0.0);
        assert_eq!(spec.finish, Finish::Premium);
        assert_eq!(spec.room_type, RoomType::Kitchen);
    }

    #[test]
    fn room_spec_requires_finish() {
        assert!(parse_room_spec("120").is_err());
    }

    #[test]
    fn run_prints_rooms_total_and_reproducible_analysis() {
        let cli = Cli::try_parse_from([
            "estimator",
            "--room",
            "250:Basic",
            "--room",
            "50:Standard:Kitchen",
            "--seed",
            "11",
        ])
        .unwrap();

        let report = run(&cli).unwrap();
        let lines: Vec<&str> = report.lines().collect();
        assert_eq!(lines.len(), 4);
        assert!(lines[0].ends_with("$30000.00"));
        assert!(lines[1].contains("Kitchen"));
        assert!(lines[1].ends_with("$13500.00"));
        assert_eq!(lines[2], "Total Estimate: $39000.00");
        assert!(lines[3].contains("The significant area of your larger rooms"));
        assert_eq!(run(&cli).unwrap(), report);
    }

    #[test]
    fn run_rejects_relative_log_dir() {
        let cli = Cli::try_parse_from(["estimator", "--log-dir", "logs"]).unwrap();
        let err = run(&cli).unwrap_err();
        assert!(err.contains("absolute"));
    }
}
