/*!
Command dispatcher module.

One file per subcommand, each exposing a clap `Args` struct and a single
`execute_*` entry point returning `anyhow::Result<()>`:

  src/cmd/
    mod.rs        (module declarations + re-exports)
    show.rs       (ShowArgs     + execute_show)
    list.rs       (ListArgs     + execute_list)
    assign.rs     (AssignArgs   + execute_assign)
    unassign.rs   (UnassignArgs + execute_unassign)
    meetings.rs   (MeetingsArgs + execute_meetings)
    shared.rs     (blocking remote facade + directory helpers)
    format.rs     (presentation helpers)
*/

pub mod assign;
pub mod format;
pub mod list;
pub mod meetings;
pub mod shared;
pub mod show;
pub mod unassign;

pub use assign::{AssignArgs, execute_assign};
pub use list::{ListArgs, execute_list};
pub use meetings::{MeetingsArgs, execute_meetings};
pub use show::{ShowArgs, execute_show};
pub use unassign::{UnassignArgs, execute_unassign};
