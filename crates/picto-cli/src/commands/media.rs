//! Media commands
//!
//! Usage:
//!   picto media add --post <ID> --type <T> --url <U>
//!   picto media list [--post <ID>]

use clap::{Args, Subcommand};
use picto_core::model::{NewMedia, PostId};
use picto_engine::commands::media;
use picto_store::errors::Result;
use rusqlite::Connection;

use super::{print_record, print_records};

#[derive(Debug, Args)]
pub struct MediaArgs {
    #[command(subcommand)]
    pub command: MediaCommand,
}

#[derive(Debug, Subcommand)]
pub enum MediaCommand {
    /// Attach media to a post
    Add {
        #[arg(long)]
        post: PostId,
        /// e.g. image, video
        #[arg(long = "type")]
        media_type: String,
        #[arg(long)]
        url: String,
    },
    /// List media
    List {
        #[arg(long)]
        post: Option<PostId>,
    },
}

pub fn execute(args: MediaArgs, conn: &Connection) -> Result<()> {
    match args.command {
        MediaCommand::Add {
            post,
            media_type,
            url,
        } => {
            let id = media::media_create(conn, NewMedia::new(post, media_type, url))?;
            print_record(&media::media_get(conn, id)?)
        }
        MediaCommand::List { post: Some(post) } => {
            print_records(&media::media_for_post(conn, post)?)
        }
        MediaCommand::List { post: None } => print_records(&media::media_list(conn)?),
    }
}
