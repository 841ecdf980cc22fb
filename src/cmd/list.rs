//! `list` - print every user in the account.

use anyhow::Result;
use clap::Args;

use crate::cmd::{format, shared};
use crate::creds::Credentials;

#[derive(Args, Debug)]
pub struct ListArgs {
    /// Output JSON instead of human-readable text
    #[arg(long)]
    pub json: bool,
}

pub fn execute_list(args: ListArgs, creds: &Credentials) -> Result<()> {
    let remote = shared::Remote::connect(creds)?;
    let users = remote.list_users()?;
    crate::log_debug!("fetched {} users", users.len());

    if args.json {
        println!("{}", serde_json::to_string_pretty(&users)?);
        return Ok(());
    }

    for (i, user) in users.iter().enumerate() {
        if i > 0 {
            println!();
        }
        println!("{}", format::user_block(user));
    }
    Ok(())
}
