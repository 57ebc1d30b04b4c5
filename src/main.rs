// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Sniff - client environment classification from your terminal
//!
//! Entry point for the Sniff CLI application.

use std::io::Read;
use std::path::Path;

use anyhow::{bail, Context};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use sniff::classes::{ClassList, Markers};
use sniff::cli::{Cli, ClassesArgs, Commands, DetectArgs, OutputFormat};
use sniff::config::Settings;
use sniff::detect::Detection;
use sniff::env::EnvSnapshot;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let settings = match &cli.config {
        Some(path) => Settings::load_from(path)
            .with_context(|| format!("loading settings from {}", path.display()))?,
        None => match Settings::load() {
            Ok(settings) => settings,
            Err(err) => {
                tracing::warn!(error = %err, "failed to load settings, using defaults");
                Settings::default()
            }
        },
    };
    let format = resolve_format(cli.format, &settings);

    match cli.command {
        Commands::Detect(args) => run_detect(&args, &settings, format),
        Commands::Classes(args) => run_classes(&args, &settings, format),
        Commands::Snapshot => run_snapshot(),
    }
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Explicit --format wins; otherwise the settings file decides.
fn resolve_format(flag: Option<OutputFormat>, settings: &Settings) -> OutputFormat {
    flag.unwrap_or(if settings.output.format == "json" {
        OutputFormat::Json
    } else {
        OutputFormat::Text
    })
}

fn load_snapshot(
    snapshot: Option<&Path>,
    user_agent: Option<&str>,
) -> anyhow::Result<EnvSnapshot> {
    match (snapshot, user_agent) {
        (Some(_), Some(_)) => bail!("pass either --snapshot or --user-agent, not both"),
        (None, Some(agent)) => Ok(EnvSnapshot::from_user_agent(agent)),
        (Some(path), None) if path == Path::new("-") => {
            let mut contents = String::new();
            std::io::stdin().read_to_string(&mut contents)?;
            EnvSnapshot::from_json(&contents).context("parsing snapshot from stdin")
        }
        (Some(path), None) => {
            let contents = std::fs::read_to_string(path)
                .with_context(|| format!("reading snapshot {}", path.display()))?;
            EnvSnapshot::from_json(&contents)
                .with_context(|| format!("parsing snapshot {}", path.display()))
        }
        (None, None) => bail!("pass --snapshot <file> or --user-agent <string>"),
    }
}

fn run_detect(
    args: &DetectArgs,
    settings: &Settings,
    format: OutputFormat,
) -> anyhow::Result<()> {
    let snapshot = load_snapshot(args.snapshot.as_deref(), args.user_agent.as_deref())?;
    let detection = Detection::capture_with(&snapshot, &settings.detection);

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&detection)?),
        OutputFormat::Text => print!("{}", render_detection(&detection)),
    }
    Ok(())
}

fn run_classes(
    args: &ClassesArgs,
    settings: &Settings,
    format: OutputFormat,
) -> anyhow::Result<()> {
    let snapshot = load_snapshot(args.snapshot.as_deref(), args.user_agent.as_deref())?;
    let detection = Detection::capture_with(&snapshot, &settings.detection);
    let markers = Markers::from_detection(&detection);

    let mut list = args
        .base
        .as_deref()
        .map(ClassList::parse)
        .unwrap_or_default();
    markers.apply(&mut list);

    match format {
        OutputFormat::Json => {
            let report = serde_json::json!({
                "add": markers.add,
                "remove": markers.remove,
                "classes": list.to_string(),
            });
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        OutputFormat::Text => println!("{list}"),
    }
    Ok(())
}

fn run_snapshot() -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(&EnvSnapshot::template())?);
    Ok(())
}

fn render_detection(detection: &Detection) -> String {
    let mut out = String::new();
    let on = |flag: bool| if flag { "yes" } else { "no" };

    out.push_str(&format!("Device: {}\n", detection.device_class().label()));

    out.push_str("\nFeatures:\n");
    out.push_str(&format!("  touch          {}\n", on(detection.features.touch)));
    out.push_str(&format!("  transforms     {}\n", on(detection.features.transforms)));
    out.push_str(&format!("  transforms 3d  {}\n", on(detection.features.transforms_3d)));
    out.push_str(&format!("  canvas         {}\n", on(detection.features.canvas)));
    out.push_str(&format!("  local storage  {}\n", on(detection.features.local_storage)));
    out.push_str(&format!("  svg            {}\n", on(detection.features.svg)));

    out.push_str("\nOS:\n");
    out.push_str(&format!("  mac            {}\n", on(detection.os.mac)));
    out.push_str(&format!("  windows        {}\n", on(detection.os.windows)));
    out.push_str(&format!("  linux          {}\n", on(detection.os.linux)));
    out.push_str(&format!("  mobile         {}\n", on(detection.os.mobile)));
    out.push_str(&format!("  phone          {}\n", on(detection.os.phone)));
    out.push_str(&format!("  tablet         {}\n", on(detection.os.tablet)));
    out.push_str(&format!("  retina         {}\n", on(detection.os.retina)));
    out.push_str(&format!("  android        {}\n", on(detection.os.android)));
    if detection.os.ios {
        out.push_str(&format!("  ios            {}\n", detection.os.ios_version));
        out.push_str(&format!("  iphone         {}\n", on(detection.os.iphone)));
        out.push_str(&format!("  ipad           {}\n", on(detection.os.ipad)));
    } else {
        out.push_str("  ios            no\n");
    }

    out.push_str("\nBrowser:\n");
    if detection.browser.ie {
        out.push_str(&format!("  ie             {}\n", detection.browser.ie_version));
    } else {
        out.push_str("  ie             no\n");
    }
    out.push_str(&format!("  firefox        {}\n", on(detection.browser.firefox)));
    out.push_str(&format!("  safari         {}\n", on(detection.browser.safari)));
    out.push_str(&format!("  chrome         {}\n", on(detection.browser.chrome)));
    out.push_str(&format!("  stock android  {}\n", on(detection.browser.android_browser)));
    out.push_str(&format!("  iframed        {}\n", on(detection.browser.iframed)));
    out.push_str(&format!("  app mode       {}\n", on(detection.browser.app_mode)));

    out
}
