/*!
assign.rs - move a Licensed seat to a user.

Source selection is strict: with no `--from`, the directory is scanned and
the single license holder becomes the source; zero or several holders is an
error. The reassignment itself is two sequential writes (demote source,
promote target) with no rollback; a failed promote leaves the freed seat
unassigned and the process reports the failure.
*/

use anyhow::{Context, Result};
use clap::Args;

use crate::cmd::{format, shared};
use crate::creds::Credentials;
use crate::error::ZoomctlError;
use crate::zoom::types::{User, UserType};

#[derive(Args, Debug)]
pub struct AssignArgs {
    /// User (id or email) that should end up with the license
    /// (defaults to the credential email)
    pub user: Option<String>,

    /// Explicit license source; required when multiple licensed users exist
    #[arg(short = 'f', long = "from", value_name = "SOURCE")]
    pub from: Option<String>,
}

/// Outcome of resolving an assignment against the fetched directory, before
/// any remote write happens.
#[derive(Debug)]
pub enum ReassignPlan {
    /// Target already holds a license; nothing to write.
    AlreadyLicensed(User),
    /// Demote `source`, then promote `target`.
    Move { source: User, target: User },
}

/// Pure decision step: resolve target and source against the directory
/// snapshot. No remote writes happen here.
pub fn plan_reassignment(
    users: &[User],
    target_key: &str,
    source_key: Option<&str>,
) -> Result<ReassignPlan, ZoomctlError> {
    let target = shared::find_user(users, target_key)?;
    if target.user_type.is_licensed() {
        return Ok(ReassignPlan::AlreadyLicensed(target.clone()));
    }

    let source = match source_key {
        Some(key) => {
            let source = shared::find_user(users, key)?;
            if !source.user_type.is_licensed() {
                return Err(ZoomctlError::SourceNotLicensed(key.to_string()));
            }
            source
        }
        None => {
            let holders = shared::licensed_users(users);
            match holders.as_slice() {
                [] => return Err(ZoomctlError::NoLicenseAvailable),
                [only] => *only,
                _ => return Err(ZoomctlError::AmbiguousSource),
            }
        }
    };

    Ok(ReassignPlan::Move {
        source: source.clone(),
        target: target.clone(),
    })
}

pub fn execute_assign(args: AssignArgs, creds: &Credentials) -> Result<()> {
    let target_key = args.user.as_deref().unwrap_or(&creds.user_email);
    let remote = shared::Remote::connect(creds)?;
    let users = remote.list_users()?;

    match plan_reassignment(&users, target_key, args.from.as_deref())? {
        ReassignPlan::AlreadyLicensed(target) => {
            crate::log_debug!("'{}' already licensed, nothing to do", target.email);
            println!("{}", format::user_block(&target));
        }
        ReassignPlan::Move { source, target } => {
            crate::log_debug!(
                "moving license from '{}' to '{}'",
                source.email,
                target.email
            );
            remote.set_user_type(&source.id, UserType::Basic)?;
            // The freed seat is not transactionally held; if this promote
            // fails the account is left with an unassigned license.
            remote
                .set_user_type(&target.id, UserType::Licensed)
                .with_context(|| {
                    format!(
                        "promoting '{}' failed after demoting '{}' - the seat may be exhausted or not yet released",
                        target.email, source.email
                    )
                })?;

            let fresh = remote.get_user(&target.id)?;
            println!("{}", format::user_block(&fresh));
        }
    }
    Ok(())
}
