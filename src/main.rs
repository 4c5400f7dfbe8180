// Copyright (c) 2025 FinTrack Authors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use tracing_subscriber::EnvFilter;

use fintrack::{cli, commands, seed, session::Session, utils};

fn entropy_seed() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0x5eed)
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let matches = cli::build_cli().get_matches();

    let today = match matches.get_one::<String>("as-of") {
        Some(s) => utils::parse_date(s)?,
        None => chrono::Local::now().date_naive(),
    };
    let seed_value = matches.get_one::<u64>("seed").copied().unwrap_or_else(entropy_seed);

    // One session per invocation; collections reset on every run.
    let mut session = Session::new(seed_value);
    if !matches.get_flag("no-seed") {
        seed::ensure_demo_data(&mut session, today);
    }

    match matches.subcommand() {
        Some(("dashboard", sub)) => commands::dashboard::handle(&session, sub, today)?,
        Some(("expense", sub)) => commands::expenses::handle(&mut session, sub, today)?,
        Some(("category", sub)) => commands::categories::handle(&mut session, sub)?,
        Some(("report", sub)) => commands::reports::handle(&mut session, sub, today)?,
        Some(("export", sub)) => commands::exporter::handle(&mut session, sub, today)?,
        Some(("settings", sub)) => commands::settings::handle(&mut session, sub)?,
        Some(("doctor", sub)) => commands::doctor::handle(&session, sub)?,
        Some(("clear", _)) => {
            session.clear_all_data();
            println!("All expenses have been cleared");
        }
        _ => {
            cli::build_cli().print_help()?;
            println!();
        }
    }
    Ok(())
}
