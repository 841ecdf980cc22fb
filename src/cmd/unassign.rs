//! `unassign` - demote a user to Basic, freeing their seat.

use anyhow::Result;
use clap::Args;

use crate::cmd::{format, shared};
use crate::creds::Credentials;
use crate::zoom::types::UserType;

#[derive(Args, Debug)]
pub struct UnassignArgs {
    /// User (id or email) whose license should be released
    /// (defaults to the credential email)
    pub user: Option<String>,
}

pub fn execute_unassign(args: UnassignArgs, creds: &Credentials) -> Result<()> {
    let key = args.user.as_deref().unwrap_or(&creds.user_email);
    let remote = shared::Remote::connect(creds)?;
    let user = remote.get_user(key)?;

    if !user.user_type.is_licensed() {
        crate::log_debug!("'{}' holds no license, nothing to do", user.email);
        println!("{}", format::user_block(&user));
        return Ok(());
    }

    remote.set_user_type(&user.id, UserType::Basic)?;
    let fresh = remote.get_user(&user.id)?;
    println!("{}", format::user_block(&fresh));
    Ok(())
}
