// Copyright (c) Daftar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use rusqlite::Connection;

use crate::models::Branch;
use crate::utils::{get_default_branch, pretty_table, set_default_branch};

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("set-default", sub)) => {
            let branch = sub.get_one::<String>("name").unwrap().parse::<Branch>()?;
            set_default_branch(conn, branch)?;
            println!("Default branch set to {}", branch);
        }
        Some(("list", _)) => {
            let default = get_default_branch(conn)?;
            let mut data = Vec::new();
            for b in Branch::ALL {
                let marker = if b == default { "default" } else { "" };
                data.push(vec![b.label().to_string(), marker.to_string()]);
            }
            println!("{}", pretty_table(&["Branch", ""], data));
        }
        _ => {}
    }
    Ok(())
}
