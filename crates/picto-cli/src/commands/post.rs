//! Post commands
//!
//! Usage:
//!   picto post add --user <ID> [--image <I>] [--caption <C>]
//!   picto post list [--user <ID>]
//!   picto post delete <ID>

use clap::{Args, Subcommand};
use picto_core::model::{NewPost, PostId, UserId};
use picto_engine::commands::post;
use picto_store::errors::Result;
use rusqlite::Connection;

use super::{print_record, print_records};

#[derive(Debug, Args)]
pub struct PostArgs {
    #[command(subcommand)]
    pub command: PostCommand,
}

#[derive(Debug, Subcommand)]
pub enum PostCommand {
    /// Create a post
    Add {
        /// Owner user id
        #[arg(long)]
        user: UserId,
        #[arg(long)]
        image: Option<String>,
        #[arg(long)]
        caption: Option<String>,
    },
    /// List posts, optionally only one user's
    List {
        #[arg(long)]
        user: Option<UserId>,
    },
    /// Delete a post with its comments and media
    Delete { id: PostId },
}

pub fn execute(args: PostArgs, conn: &Connection) -> Result<()> {
    match args.command {
        PostCommand::Add {
            user,
            image,
            caption,
        } => {
            let new = NewPost {
                user_id: user,
                image,
                caption,
            };
            let id = post::post_create(conn, new)?;
            print_record(&post::post_get(conn, id)?)
        }
        PostCommand::List { user: Some(user) } => print_records(&post::posts_by_user(conn, user)?),
        PostCommand::List { user: None } => print_records(&post::post_list(conn)?),
        PostCommand::Delete { id } => post::post_delete(conn, id),
    }
}
