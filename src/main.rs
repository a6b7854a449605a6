// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

use std::io::{self, Write};
use std::path::PathBuf;
use std::thread;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use earth_rotation::cli::{CliArgs, Command};
use earth_rotation::config::Config;
use earth_rotation::format::{format_date_time, format_iso_date_time, format_nearest};
use earth_rotation::{parse_timestamp, RotationCalculator, TauntGenerator, TauntZone};
use tracing::{debug, info};

fn init_tracing(verbose: bool) {
    use tracing_subscriber::EnvFilter;

    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env().add_directive(tracing::Level::WARN.into())
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = CliArgs::parse();
    init_tracing(cli.verbose);

    let config = Config::from_cli(&cli)?;
    debug!(?config, "effective configuration");
    let calculator = RotationCalculator::new();

    match cli.command {
        Command::Now => cmd_now(&calculator, &config),
        Command::Watch { ticks } => cmd_watch(&calculator, &config, ticks),
        Command::At { timestamp } => cmd_at(&calculator, &timestamp),
        Command::Date { rotations } => cmd_date(&calculator, rotations),
        Command::Taunt {
            at,
            utc,
            local,
            copy,
        } => {
            let zone = if utc {
                TauntZone::Utc
            } else if local {
                TauntZone::Local
            } else {
                config.taunt.zone
            };
            cmd_taunt(&calculator, at.as_deref(), zone, copy)
        }
        Command::Toggle => cmd_toggle(cli.config),
    }
}

fn cmd_now(calculator: &RotationCalculator, config: &Config) -> Result<()> {
    let snapshot = calculator.snapshot(config.display.format);
    println!("現在時刻: {}", snapshot.formatted_date_time);
    println!("地球の累積自転回数: {}", snapshot.formatted_rotations);
    Ok(())
}

fn cmd_watch(calculator: &RotationCalculator, config: &Config, ticks: Option<u64>) -> Result<()> {
    info!(format = %config.display.format, "starting live counter");
    println!("※ 計算基準: 西暦1年1月1日 00:00 UTC = 0回転");
    println!("※ 恒星日（23時間56分4秒）基準で計算");

    let mut stdout = io::stdout();
    let mut tick = 0u64;
    loop {
        let snapshot = calculator.snapshot(config.display.format);
        write!(
            stdout,
            "\r\x1b[2K{}  {}",
            snapshot.formatted_date_time, snapshot.formatted_rotations
        )?;
        stdout.flush().context("Failed to flush stdout")?;

        tick += 1;
        if ticks.is_some_and(|limit| tick >= limit) {
            break;
        }
        thread::sleep(Duration::from_secs(1));
    }
    writeln!(stdout)?;
    Ok(())
}

fn cmd_at(calculator: &RotationCalculator, timestamp: &str) -> Result<()> {
    let rotations = calculator
        .rotations_from_str(timestamp)
        .with_context(|| format!("Cannot convert {timestamp:?}"))?;
    println!("{}", calculator.format_rotations(rotations.value()));
    Ok(())
}

fn cmd_date(calculator: &RotationCalculator, rotations: f64) -> Result<()> {
    let datetime = calculator
        .date_from_rotations(rotations)
        .with_context(|| format!("Cannot convert {rotations} rotations"))?;
    println!("{}", format_iso_date_time(&datetime));
    println!("{}", format_date_time(&datetime));
    Ok(())
}

fn cmd_toggle(config_path: Option<PathBuf>) -> Result<()> {
    let config = Config::toggle_format(config_path)?;
    println!("表示形式: {}", config.display.format);
    Ok(())
}

fn cmd_taunt(
    calculator: &RotationCalculator,
    at: Option<&str>,
    zone: TauntZone,
    copy: bool,
) -> Result<()> {
    let generator = TauntGenerator::default();
    let taunt = match at {
        Some(input) => {
            let timestamp =
                parse_timestamp(input).with_context(|| format!("Cannot parse {input:?}"))?;
            generator.taunt_at(calculator, timestamp, zone)
        }
        None => generator.taunt_now(calculator, zone),
    };

    println!("{}", taunt.phrase);
    println!("生成時刻: {}", format_iso_date_time(&taunt.timestamp));
    println!("回転数: {} 回転", format_nearest(taunt.rotations.value()));

    if copy {
        if generator.copy_to_clipboard(&taunt.phrase) {
            eprintln!("コピーしました！");
        } else {
            eprintln!("コピーに失敗しました。手動でコピーしてください。");
        }
    }
    Ok(())
}
