//! User commands
//!
//! Usage:
//!   picto user add --username <U> --email <E> --password <P> [--firstname <F>] [--lastname <L>]
//!   picto user show (<ID> | --username <U> | --email <E>)
//!   picto user update <ID> [--username <U>] [--email <E>] [--password <P>] ...
//!   picto user delete <ID>
//!   picto user list

use std::convert::Infallible;

use clap::{ArgGroup, Args, Subcommand};
use picto_core::errors::{ExError, ExErrorKind};
use picto_core::model::{NewUser, UserId, UserPatch};
use picto_core_types::Sensitive;
use picto_engine::commands::user;
use picto_store::errors::Result;
use rusqlite::Connection;

use super::{print_record, print_records};

#[derive(Debug, Args)]
pub struct UserArgs {
    #[command(subcommand)]
    pub command: UserCommand,
}

#[derive(Debug, Subcommand)]
pub enum UserCommand {
    /// Create a user
    Add(AddArgs),
    /// Show one user by id, username or email
    Show(ShowArgs),
    /// Change one or more fields of a user
    Update(UpdateArgs),
    /// Delete a user and everything that depends on them
    Delete {
        id: UserId,
    },
    /// List all users
    List,
}

#[derive(Debug, Args)]
pub struct AddArgs {
    #[arg(long)]
    pub username: String,
    #[arg(long)]
    pub email: String,
    #[arg(long, value_parser = secret)]
    pub password: Sensitive<String>,
    #[arg(long)]
    pub firstname: Option<String>,
    #[arg(long)]
    pub lastname: Option<String>,
}

#[derive(Debug, Args)]
#[command(group(ArgGroup::new("key").required(true).args(["id", "username", "email"])))]
pub struct ShowArgs {
    pub id: Option<UserId>,
    #[arg(long)]
    pub username: Option<String>,
    #[arg(long)]
    pub email: Option<String>,
}

#[derive(Debug, Args)]
pub struct UpdateArgs {
    pub id: UserId,
    #[arg(long)]
    pub username: Option<String>,
    #[arg(long)]
    pub email: Option<String>,
    #[arg(long, value_parser = secret)]
    pub password: Option<Sensitive<String>>,
    #[arg(long, conflicts_with = "clear_firstname")]
    pub firstname: Option<String>,
    #[arg(long, conflicts_with = "clear_lastname")]
    pub lastname: Option<String>,
    /// Set firstname to null
    #[arg(long)]
    pub clear_firstname: bool,
    /// Set lastname to null
    #[arg(long)]
    pub clear_lastname: bool,
}

impl UpdateArgs {
    fn into_patch(self) -> UserPatch {
        UserPatch {
            username: self.username,
            firstname: nullable(self.firstname, self.clear_firstname),
            lastname: nullable(self.lastname, self.clear_lastname),
            email: self.email,
            password: self.password,
        }
    }
}

/// Keeps a password argument out of `Debug` output
fn secret(value: &str) -> std::result::Result<Sensitive<String>, Infallible> {
    Ok(Sensitive::new(value.to_string()))
}

/// `Some(None)` clears, `Some(Some(v))` sets, `None` leaves alone
fn nullable(value: Option<String>, clear: bool) -> Option<Option<String>> {
    if clear {
        Some(None)
    } else {
        value.map(Some)
    }
}

pub fn execute(args: UserArgs, conn: &mut Connection) -> Result<()> {
    match args.command {
        UserCommand::Add(add) => {
            let mut new = NewUser::new(add.username, add.email, add.password.into_inner());
            new.firstname = add.firstname;
            new.lastname = add.lastname;
            let id = user::user_create(conn, new)?;
            print_record(&user::user_get(conn, id)?)
        }
        UserCommand::Show(show) => {
            let row = match (show.id, show.username, show.email) {
                (Some(id), _, _) => user::user_get(conn, id)?,
                (None, Some(username), _) => user::user_get_by_username(conn, &username)?,
                (None, None, Some(email)) => user::user_get_by_email(conn, &email)?,
                (None, None, None) => {
                    return Err(ExError::new(ExErrorKind::InvalidInput)
                        .with_op("user_show")
                        .with_message("give an id, --username or --email"))
                }
            };
            print_record(&row)
        }
        UserCommand::Update(update) => {
            let id = update.id;
            let row = user::user_update(conn, id, update.into_patch())?;
            print_record(&row)
        }
        UserCommand::Delete { id } => user::user_delete(conn, id),
        UserCommand::List => print_records(&user::user_list(conn)?),
    }
}
