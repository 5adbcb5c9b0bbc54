// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{Arg, ArgAction, Command, crate_version};

fn output_flags(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("json")
            .long("json")
            .action(ArgAction::SetTrue)
            .conflicts_with_all(["jsonl", "html"])
            .help("Print the raw API records as pretty JSON"),
    )
    .arg(
        Arg::new("jsonl")
            .long("jsonl")
            .action(ArgAction::SetTrue)
            .conflicts_with("html")
            .help("Print the raw API records as JSON lines"),
    )
    .arg(
        Arg::new("html")
            .long("html")
            .action(ArgAction::SetTrue)
            .help("Print the rendered HTML page"),
    )
}

fn html_flag(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("html")
            .long("html")
            .action(ArgAction::SetTrue)
            .help("Print the rendered HTML page"),
    )
}

fn account_arg() -> Arg {
    Arg::new("account")
        .required(true)
        .help("Account number")
}

fn payment_args(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("amount")
            .long("amount")
            .help("Amount to charge"),
    )
    .arg(
        Arg::new("currency")
            .long("currency")
            .default_value("MXN")
            .help("Payment currency"),
    )
    .arg(
        Arg::new("description")
            .long("description")
            .default_value("")
            .help("Free-form description"),
    )
}

pub fn build_cli() -> Command {
    Command::new("povy")
        .about("Povy Sandbox: test accounts, transaction history, and sandbox payments")
        .version(crate_version!())
        .arg(
            Arg::new("api-base")
                .long("api-base")
                .global(true)
                .help("Base URL of the Povy API, e.g. http://localhost:4000/api"),
        )
        .arg(
            Arg::new("local")
                .long("local")
                .global(true)
                .action(ArgAction::SetTrue)
                .help("Use the local backend (http://localhost:4000/api)"),
        )
        .subcommand(
            Command::new("account")
                .about("List, inspect and manage sandbox accounts")
                .subcommand(output_flags(Command::new("list").about("List accounts")))
                .subcommand(
                    output_flags(Command::new("create").about("Create an account")).arg(
                        Arg::new("owner")
                            .long("owner")
                            .help("Owner name; the server picks one when omitted"),
                    ),
                )
                .subcommand(
                    output_flags(Command::new("show").about("Show an account and its history"))
                        .arg(
                            Arg::new("account")
                                .required_unless_present("url")
                                .help("Account number"),
                        )
                        .arg(
                            Arg::new("url")
                                .long("url")
                                .conflicts_with("account")
                                .help("Detail page URL, e.g. account.html?account=ACC-1"),
                        ),
                )
                .subcommand(
                    html_flag(Command::new("currency").about("Change the account currency"))
                        .arg(account_arg())
                        .arg(Arg::new("currency").required(true).help("New currency code")),
                )
                .subcommand(
                    html_flag(Command::new("topup").about("Add funds to the account balance"))
                        .arg(account_arg())
                        .arg(
                            Arg::new("amount")
                                .required(true)
                                .allow_hyphen_values(true)
                                .help("Amount to add (>= 0)"),
                        ),
                )
                .subcommand(
                    Command::new("rm")
                        .about("Delete an account")
                        .arg(account_arg())
                        .arg(
                            Arg::new("yes")
                                .long("yes")
                                .short('y')
                                .action(ArgAction::SetTrue)
                                .help("Skip the confirmation prompt"),
                        ),
                )
                .subcommand(
                    Command::new("copy-card")
                        .about("Copy the account's card number to the terminal clipboard")
                        .arg(account_arg()),
                ),
        )
        .subcommand(
            Command::new("pay")
                .about("Send sandbox payments")
                .subcommand(
                    html_flag(payment_args(
                        Command::new("account").about("Pay from an account number"),
                    ))
                    .arg(
                        Arg::new("account")
                            .long("account")
                            .help("Account number to charge"),
                    ),
                )
                .subcommand(
                    html_flag(payment_args(
                        Command::new("card").about("Pay with the account's virtual card"),
                    ))
                    .arg(Arg::new("number").long("number").help("Card number (16 digits)"))
                    .arg(Arg::new("exp-month").long("exp-month").help("Expiry month (MM)"))
                    .arg(Arg::new("exp-year").long("exp-year").help("Expiry year (YY)"))
                    .arg(Arg::new("cvv").long("cvv").help("Card CVV"))
                    .arg(
                        Arg::new("interactive")
                            .long("interactive")
                            .short('i')
                            .action(ArgAction::SetTrue)
                            .conflicts_with_all(["number", "exp-month", "exp-year", "cvv", "amount"])
                            .help("Prompt for the card fields one by one"),
                    ),
                ),
        )
        .subcommand(
            Command::new("config")
                .about("Inspect or change where the API lives")
                .subcommand(Command::new("show").about("Show the resolved settings"))
                .subcommand(
                    Command::new("set-base")
                        .about("Persist an API base URL")
                        .arg(Arg::new("url").required(true)),
                )
                .subcommand(Command::new("clear-base").about("Forget the persisted API base URL")),
        )
        .subcommand(Command::new("doctor").about("Check that the Povy backend is reachable"))
}
