//! Comment commands
//!
//! Usage:
//!   picto comment add --author <ID> --post <ID> --text <T>
//!   picto comment list [--post <ID> | --author <ID>]

use clap::{Args, Subcommand};
use picto_core::model::{NewComment, PostId, UserId};
use picto_engine::commands::comment;
use picto_store::errors::Result;
use rusqlite::Connection;

use super::{print_record, print_records};

#[derive(Debug, Args)]
pub struct CommentArgs {
    #[command(subcommand)]
    pub command: CommentCommand,
}

#[derive(Debug, Subcommand)]
pub enum CommentCommand {
    /// Comment on a post
    Add {
        #[arg(long)]
        author: UserId,
        #[arg(long)]
        post: PostId,
        #[arg(long)]
        text: String,
    },
    /// List comments
    List {
        #[arg(long, conflicts_with = "author")]
        post: Option<PostId>,
        #[arg(long)]
        author: Option<UserId>,
    },
}

pub fn execute(args: CommentArgs, conn: &Connection) -> Result<()> {
    match args.command {
        CommentCommand::Add { author, post, text } => {
            let id = comment::comment_create(conn, NewComment::new(author, post, text))?;
            print_record(&comment::comment_get(conn, id)?)
        }
        CommentCommand::List { post, author } => {
            let rows = match (post, author) {
                (Some(post), _) => comment::comments_on_post(conn, post)?,
                (None, Some(author)) => comment::comments_by_author(conn, author)?,
                (None, None) => comment::comment_list(conn)?,
            };
            print_records(&rows)
        }
    }
}
