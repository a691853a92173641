//! Create an operator account.
//!
//! ```text
//! echo 's3cret' | add-user --name admin --database-url postgres://localhost/donations
//! ```
//!
//! The password is read from the first line of stdin. Without
//! `--database-url` the `DATABASE_URL` environment variable is used.

use std::ffi::OsString;
use std::io::{self, BufRead, Write};
use std::sync::Arc;

use clap::Parser;
use color_eyre::eyre::{Context, Result, eyre};
use ortho_config::OrthoConfig;
use tokio::runtime::Builder;
use zeroize::Zeroizing;

use donations::domain::password::DEFAULT_ROUNDS;
use donations::domain::ports::{UserPersistenceError, UserRepository};
use donations::domain::{PasswordHash, User, Username};
use donations::outbound::persistence::{
    DatabaseSettings, DbPool, DieselUserRepository, PoolConfig, run_pending_migrations,
};

#[derive(Debug, Parser)]
#[command(name = "add-user", about = "Create an operator account")]
struct Cli {
    /// Login name for the new account.
    #[arg(long)]
    name: String,
    /// PostgreSQL connection URL. Defaults to `DATABASE_URL`.
    #[arg(long)]
    database_url: Option<String>,
    /// PBKDF2 iteration count for the stored hash.
    #[arg(long, default_value_t = DEFAULT_ROUNDS)]
    rounds: u32,
}

fn main() -> Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();
    let username = Username::new(cli.name.as_str()).wrap_err("invalid --name")?;
    let password = read_password(io::stdin().lock())?;
    let database_url = match cli.database_url {
        Some(url) => url,
        None => DatabaseSettings::load_from_iter([OsString::from("add-user")])
            .map_err(|err| eyre!("failed to load database settings: {err}"))?
            .url()?
            .to_owned(),
    };

    let user = User::new(
        username,
        PasswordHash::generate_with_rounds(&password, cli.rounds),
    );

    let runtime = Builder::new_current_thread()
        .enable_all()
        .build()
        .wrap_err("failed to build add-user runtime")?;
    runtime.block_on(create_user(&database_url, &user))?;

    writeln!(io::stdout().lock(), "created user {}", user.name())?;
    Ok(())
}

fn read_password(mut input: impl BufRead) -> Result<Zeroizing<String>> {
    let mut line = Zeroizing::new(String::new());
    input
        .read_line(&mut line)
        .wrap_err("failed to read password from stdin")?;
    let password = Zeroizing::new(line.trim_end_matches(['\r', '\n']).to_owned());
    if password.is_empty() {
        return Err(eyre!("password must not be empty"));
    }
    Ok(password)
}

async fn create_user(database_url: &str, user: &User) -> Result<()> {
    run_pending_migrations(database_url).await?;
    let pool = DbPool::new(PoolConfig::new(database_url).with_max_size(1)).await?;
    let users = Arc::new(DieselUserRepository::new(pool));
    match users.create(user).await {
        Ok(()) => Ok(()),
        Err(UserPersistenceError::Duplicate { name }) => {
            Err(eyre!("a user named {name} already exists"))
        }
        Err(error) => Err(error).wrap_err("failed to store user"),
    }
}
