// Copyright (c) Daftar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{Arg, ArgAction, Command, crate_version, value_parser};

fn json_flags(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("json")
            .long("json")
            .action(ArgAction::SetTrue)
            .help("Print records as pretty JSON"),
    )
    .arg(
        Arg::new("jsonl")
            .long("jsonl")
            .action(ArgAction::SetTrue)
            .help("Print one JSON record per line"),
    )
}

fn date_range_args(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("from")
            .long("from")
            .help("Start date (YYYY-MM-DD, inclusive)"),
    )
    .arg(
        Arg::new("to")
            .long("to")
            .help("End date (YYYY-MM-DD, inclusive)"),
    )
}

fn kirim_filter_args(cmd: Command) -> Command {
    date_range_args(
        cmd.arg(
            Arg::new("search")
                .long("search")
                .help("Substring match on company, tax id, contact or staff"),
        )
        .arg(
            Arg::new("branch")
                .long("branch")
                .help("Branch name; all branches when omitted"),
        )
        .arg(
            Arg::new("status")
                .long("status")
                .help("Payment status: any|paid|unpaid"),
        ),
    )
}

fn chiqim_filter_args(cmd: Command) -> Command {
    date_range_args(
        cmd.arg(
            Arg::new("search")
                .long("search")
                .help("Substring match on payee, category or branch"),
        )
        .arg(
            Arg::new("branch")
                .long("branch")
                .help("Branch name; all branches when omitted"),
        )
        .arg(
            Arg::new("category")
                .long("category")
                .help("Substring match on the expense category"),
        ),
    )
}

fn kirim_field_args(cmd: Command) -> Command {
    cmd.arg(Arg::new("phone").long("phone").help("Phone number"))
        .arg(Arg::new("contact").long("contact").help("Contact person"))
        .arg(Arg::new("service").long("service").help("Service type"))
        .arg(Arg::new("branch").long("branch").help("Branch office"))
        .arg(Arg::new("staff").long("staff").help("Assigned staff member"))
        .arg(
            Arg::new("prior-months")
                .long("prior-months")
                .value_parser(value_parser!(u32))
                .help("Months carried forward"),
        )
        .arg(
            Arg::new("prior-amount")
                .long("prior-amount")
                .help("Amount carried forward"),
        )
        .arg(
            Arg::new("monthly")
                .long("monthly")
                .help("Amount billed this month"),
        )
        .arg(Arg::new("cash").long("cash").help("Paid in cash"))
        .arg(Arg::new("wire").long("wire").help("Paid by wire transfer"))
        .arg(Arg::new("card").long("card").help("Paid by card"))
}

fn chiqim_field_args(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("date")
            .long("date")
            .help("Expense date (YYYY-MM-DD); today when omitted"),
    )
    .arg(Arg::new("branch").long("branch").help("Branch office"))
    .arg(
        Arg::new("carried")
            .long("carried")
            .help("Amount carried forward"),
    )
    .arg(
        Arg::new("monthly")
            .long("monthly")
            .help("Amount charged this month"),
    )
    .arg(Arg::new("cash").long("cash").help("Paid in cash"))
    .arg(Arg::new("wire").long("wire").help("Paid by wire transfer"))
    .arg(Arg::new("card").long("card").help("Paid by card"))
}

fn id_arg() -> Arg {
    Arg::new("id")
        .long("id")
        .required(true)
        .value_parser(value_parser!(i64))
        .help("Record id")
}

pub fn build_cli() -> Command {
    Command::new("daftar")
        .version(crate_version!())
        .about("Branch-office bookkeeping: incoming payments (kirim) and outgoing expenses (chiqim)")
        .subcommand(Command::new("init").about("Initialize the database"))
        .subcommand(
            Command::new("kirim")
                .about("Incoming payments ledger")
                .subcommand(kirim_field_args(
                    Command::new("add")
                        .about("Record a payer for the period")
                        .arg(
                            Arg::new("company")
                                .long("company")
                                .required(true)
                                .help("Company name"),
                        )
                        .arg(
                            Arg::new("tax-id")
                                .long("tax-id")
                                .required(true)
                                .help("Tax identification number"),
                        ),
                ))
                .subcommand(json_flags(kirim_filter_args(
                    Command::new("list").about("List incoming records with totals"),
                )))
                .subcommand(kirim_field_args(
                    Command::new("update")
                        .about("Update a record; derived fields are recomputed")
                        .arg(id_arg())
                        .arg(Arg::new("company").long("company").help("Company name"))
                        .arg(
                            Arg::new("tax-id")
                                .long("tax-id")
                                .help("Tax identification number"),
                        ),
                ))
                .subcommand(
                    Command::new("rm")
                        .about("Delete a record by id")
                        .arg(id_arg()),
                ),
        )
        .subcommand(
            Command::new("chiqim")
                .about("Outgoing expenses ledger")
                .subcommand(chiqim_field_args(
                    Command::new("add")
                        .about("Record an expense line")
                        .arg(
                            Arg::new("payee")
                                .long("payee")
                                .required(true)
                                .help("Payee or description"),
                        )
                        .arg(
                            Arg::new("category")
                                .long("category")
                                .required(true)
                                .help("Expense category"),
                        ),
                ))
                .subcommand(json_flags(chiqim_filter_args(
                    Command::new("list").about("List outgoing records with totals"),
                )))
                .subcommand(chiqim_field_args(
                    Command::new("update")
                        .about("Update a record; derived fields are recomputed")
                        .arg(id_arg())
                        .arg(Arg::new("payee").long("payee").help("Payee or description"))
                        .arg(
                            Arg::new("category")
                                .long("category")
                                .help("Expense category"),
                        ),
                ))
                .subcommand(
                    Command::new("rm")
                        .about("Delete a record by id")
                        .arg(id_arg()),
                ),
        )
        .subcommand(
            Command::new("export")
                .about("Write a filtered ledger report to CSV")
                .subcommand(
                    kirim_filter_args(Command::new("kirim").about("Export the incoming ledger"))
                        .arg(Arg::new("out").long("out").help("Output path")),
                )
                .subcommand(
                    chiqim_filter_args(Command::new("chiqim").about("Export the outgoing ledger"))
                        .arg(Arg::new("out").long("out").help("Output path")),
                ),
        )
        .subcommand(
            Command::new("branch")
                .about("Branch offices")
                .subcommand(Command::new("list").about("List branches and the default"))
                .subcommand(
                    Command::new("set-default")
                        .about("Set the branch used when --branch is omitted")
                        .arg(Arg::new("name").required(true).help("Branch name")),
                ),
        )
        .subcommand(Command::new("doctor").about("Check stored records against the balance rules"))
}
