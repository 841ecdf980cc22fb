//! `show` - print a single user record.

use anyhow::Result;
use clap::Args;

use crate::cmd::{format, shared};
use crate::creds::Credentials;

#[derive(Args, Debug, Default)]
pub struct ShowArgs {
    /// User id or email (defaults to the credential email)
    pub user: Option<String>,

    /// Output JSON instead of human-readable text
    #[arg(long)]
    pub json: bool,
}

pub fn execute_show(args: ShowArgs, creds: &Credentials) -> Result<()> {
    let key = args.user.as_deref().unwrap_or(&creds.user_email);
    let remote = shared::Remote::connect(creds)?;
    let user = remote.get_user(key)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&user)?);
    } else {
        println!("{}", format::user_block(&user));
    }
    Ok(())
}
