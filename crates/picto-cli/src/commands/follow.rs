//! Follow commands
//!
//! Usage:
//!   picto follow add <FOLLOWER> <FOLLOWED>
//!   picto follow remove <FOLLOWER> <FOLLOWED>
//!   picto follow move <FOLLOWER> <FOLLOWED> --to <FOLLOWER> <FOLLOWED>
//!   picto follow list [--followers-of <ID> | --following-of <ID>]

use clap::{Args, Subcommand};
use picto_core::errors::{ExError, ExErrorKind};
use picto_core::model::{Follower, UserId};
use picto_engine::commands::follower;
use picto_store::errors::Result;
use rusqlite::Connection;

use super::{print_record, print_records};

#[derive(Debug, Args)]
pub struct FollowArgs {
    #[command(subcommand)]
    pub command: FollowCommand,
}

#[derive(Debug, Args)]
pub struct Edge {
    pub follower: UserId,
    pub followed: UserId,
}

impl From<Edge> for Follower {
    fn from(edge: Edge) -> Self {
        Follower::new(edge.follower, edge.followed)
    }
}

#[derive(Debug, Subcommand)]
pub enum FollowCommand {
    /// FOLLOWER starts following FOLLOWED
    Add(Edge),
    /// Remove a follow edge
    Remove(Edge),
    /// Replace one follow edge with another
    Move {
        #[command(flatten)]
        from: Edge,
        /// New (follower, followed) pair
        #[arg(long, num_args = 2, value_names = ["FOLLOWER", "FOLLOWED"], required = true)]
        to: Vec<UserId>,
    },
    /// List follow edges
    List {
        #[arg(long, conflicts_with = "following_of")]
        followers_of: Option<UserId>,
        #[arg(long)]
        following_of: Option<UserId>,
    },
}

pub fn execute(args: FollowArgs, conn: &mut Connection) -> Result<()> {
    match args.command {
        FollowCommand::Add(edge) => {
            let edge = Follower::from(edge);
            follower::follow_create(conn, edge)?;
            print_record(&edge)
        }
        FollowCommand::Remove(edge) => follower::follow_delete(conn, edge.into()),
        FollowCommand::Move { from, to } => {
            let new = match to.as_slice() {
                [follower, followed] => Follower::new(*follower, *followed),
                _ => {
                    return Err(ExError::new(ExErrorKind::InvalidInput)
                        .with_op("follow_move")
                        .with_message("--to takes exactly two user ids"))
                }
            };
            follower::follow_update(conn, from.into(), new)?;
            print_record(&new)
        }
        FollowCommand::List {
            followers_of,
            following_of,
        } => {
            let rows = match (followers_of, following_of) {
                (Some(user), _) => follower::followers_of(conn, user)?,
                (None, Some(user)) => follower::following_of(conn, user)?,
                (None, None) => follower::follow_list(conn)?,
            };
            print_records(&rows)
        }
    }
}
