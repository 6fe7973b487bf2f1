use std::io::{stdout, Write};
use std::process::ExitCode;

use clap::{error::ErrorKind, Parser};
use dotenv::dotenv;
use firebase_auth_token::{
    commands,
    error::{Error, Status},
};

#[derive(Parser)]
#[command(name = "firebaseauthtoken")]
#[command(version, about = "Exchange Firebase email/password credentials for an ID token")]
struct Cli {
    #[command(flatten)]
    token: commands::TokenArgs,

    #[arg(long, help = "enable debug logging")]
    debug: bool,
}

fn main() -> ExitCode {
    dotenv().ok();
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            e.exit()
        }
        Err(e) => return fail(&commands::token::flag_error(&e)),
    };

    tracing_subscriber::fmt()
        .with_max_level(if cli.debug {
            tracing::Level::DEBUG
        } else {
            tracing::Level::WARN
        })
        .with_writer(std::io::stderr)
        .init();

    match commands::token::run(cli.token) {
        Ok(token) => {
            let mut out = stdout();
            if let Err(e) = write!(out, "{}", token).and_then(|_| out.flush()) {
                return fail(&Error::Internal(format!("writing token - {}", e)));
            }
            Status::Ok.into()
        }
        Err(e) => fail(&e),
    }
}

fn fail(err: &Error) -> ExitCode {
    tracing::debug!(status = %err.status(), "exiting");
    eprintln!("{}", err.report());
    err.status().into()
}
