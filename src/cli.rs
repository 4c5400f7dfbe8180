// Copyright (c) 2025 FinTrack Authors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{value_parser, Arg, ArgAction, Command};

fn json_flags(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("json")
            .long("json")
            .help("Print as pretty JSON")
            .action(ArgAction::SetTrue),
    )
    .arg(
        Arg::new("jsonl")
            .long("jsonl")
            .help("Print as JSON lines")
            .action(ArgAction::SetTrue),
    )
}

fn range_arg() -> Arg {
    Arg::new("range")
        .long("range")
        .value_name("RANGE")
        .help("Report window: 'This Week', 'This Month', 'Last Month', 'This Year', 'All Time'")
}

pub fn build_cli() -> Command {
    Command::new("fintrack")
        .about("In-memory personal finance dashboard with synthetic demo data")
        .version(clap::crate_version!())
        .subcommand_required(false)
        .arg(
            Arg::new("seed")
                .long("seed")
                .value_name("N")
                .env("FINTRACK_SEED")
                .value_parser(value_parser!(u64))
                .global(true)
                .help("Seed for the demo data generator (reproducible sessions)"),
        )
        .arg(
            Arg::new("as-of")
                .long("as-of")
                .value_name("YYYY-MM-DD")
                .env("FINTRACK_AS_OF")
                .global(true)
                .help("Pin 'today' for date-relative views"),
        )
        .arg(
            Arg::new("no-seed")
                .long("no-seed")
                .action(ArgAction::SetTrue)
                .global(true)
                .help("Start with empty collections instead of demo data"),
        )
        .subcommand(json_flags(
            Command::new("dashboard").about("Summary totals, monthly trend, recent expenses, category budgets"),
        ))
        .subcommand(
            Command::new("expense")
                .about("Manage and browse expenses")
                .subcommand(json_flags(
                    Command::new("list")
                        .about("Filter, sort and page through expenses")
                        .arg(Arg::new("search").long("search").value_name("TERM").help("Case-insensitive match on merchant or description"))
                        .arg(Arg::new("category").long("category").value_name("NAME").help("Exact category name, or 'All'"))
                        .arg(Arg::new("sort").long("sort").value_name("FIELD").help("id|date|merchant|category|description|amount|status"))
                        .arg(Arg::new("asc").long("asc").action(ArgAction::SetTrue).help("Sort ascending (default descending)"))
                        .arg(Arg::new("page").long("page").value_name("N").value_parser(value_parser!(usize))),
                ))
                .subcommand(
                    Command::new("add")
                        .about("Add an expense (status starts Pending)")
                        .arg(Arg::new("merchant").long("merchant").value_name("NAME"))
                        .arg(Arg::new("description").long("description").value_name("TEXT"))
                        .arg(Arg::new("amount").long("amount").value_name("DECIMAL"))
                        .arg(Arg::new("date").long("date").value_name("YYYY-MM-DD"))
                        .arg(Arg::new("category").long("category").value_name("NAME")),
                )
                .subcommand(
                    Command::new("update")
                        .about("Overwrite provided fields of an expense")
                        .arg(Arg::new("id").long("id").value_name("ID").required(true))
                        .arg(Arg::new("merchant").long("merchant").value_name("NAME"))
                        .arg(Arg::new("description").long("description").value_name("TEXT"))
                        .arg(Arg::new("amount").long("amount").value_name("DECIMAL"))
                        .arg(Arg::new("date").long("date").value_name("YYYY-MM-DD"))
                        .arg(Arg::new("category").long("category").value_name("NAME"))
                        .arg(Arg::new("status").long("status").value_name("STATUS").help("Completed|Pending|Processing")),
                )
                .subcommand(
                    Command::new("delete")
                        .about("Delete an expense by id")
                        .arg(Arg::new("id").long("id").value_name("ID").required(true)),
                ),
        )
        .subcommand(
            Command::new("category")
                .about("Manage spending categories")
                .subcommand(json_flags(Command::new("list").about("List categories")))
                .subcommand(
                    Command::new("add")
                        .about("Create a category")
                        .arg(Arg::new("name").long("name").value_name("NAME"))
                        .arg(Arg::new("budget").long("budget").value_name("DECIMAL"))
                        .arg(Arg::new("color").long("color").value_name("TOKEN")),
                )
                .subcommand(
                    Command::new("update")
                        .about("Overwrite provided fields of a category")
                        .arg(Arg::new("id").long("id").value_name("ID").required(true))
                        .arg(Arg::new("name").long("name").value_name("NAME"))
                        .arg(Arg::new("budget").long("budget").value_name("DECIMAL"))
                        .arg(Arg::new("color").long("color").value_name("TOKEN")),
                )
                .subcommand(
                    Command::new("delete")
                        .about("Delete a category (expenses keep its name)")
                        .arg(Arg::new("id").long("id").value_name("ID").required(true)),
                ),
        )
        .subcommand(
            Command::new("report")
                .about("Range-scoped report views")
                .subcommand(json_flags(
                    Command::new("summary").about("Total and count for the range").arg(range_arg()),
                ))
                .subcommand(json_flags(
                    Command::new("pie").about("Spend by category for the range").arg(range_arg()),
                ))
                .subcommand(json_flags(
                    Command::new("trend").about("Spend by day for the range").arg(range_arg()),
                ))
                .subcommand(json_flags(
                    Command::new("chart")
                        .about("Monthly trend buckets")
                        .arg(Arg::new("chart-range").long("chart-range").value_name("RANGE").help("'Last 6 Months' or 'This Year'")),
                )),
        )
        .subcommand(
            Command::new("export")
                .about("Write the current report range to a file")
                .arg(range_arg())
                .arg(
                    Arg::new("format")
                        .long("format")
                        .value_name("FMT")
                        .default_value("csv")
                        .help("csv or json"),
                )
                .arg(Arg::new("out").long("out").value_name("PATH").help("Defaults to a timestamped filename")),
        )
        .subcommand(
            Command::new("settings")
                .about("Profile, notifications, budget defaults, currency")
                .subcommand(json_flags(Command::new("show").about("Show current settings")))
                .subcommand(
                    Command::new("profile")
                        .about("Update profile fields")
                        .arg(Arg::new("name").long("name").value_name("NAME"))
                        .arg(Arg::new("email").long("email").value_name("EMAIL")),
                )
                .subcommand(
                    Command::new("notify")
                        .about("Toggle a notification preference")
                        .arg(Arg::new("key").long("key").value_name("KEY").required(true).help("email_alerts|expense_reminders|monthly_reports"))
                        .arg(
                            Arg::new("enabled")
                                .long("enabled")
                                .value_name("BOOL")
                                .required(true)
                                .value_parser(value_parser!(bool)),
                        ),
                )
                .subcommand(
                    Command::new("budget")
                        .about("Update budget defaults")
                        .arg(Arg::new("default-limit").long("default-limit").value_name("DECIMAL"))
                        .arg(Arg::new("warning-threshold").long("warning-threshold").value_name("PERCENT")),
                )
                .subcommand(
                    Command::new("currency")
                        .about("Set the display currency label")
                        .arg(Arg::new("set").long("set").value_name("LABEL").required(true)),
                ),
        )
        .subcommand(json_flags(
            Command::new("doctor").about("Offline health and consistency checks"),
        ))
        .subcommand(Command::new("clear").about("Clear all expenses (categories survive)"))
}
