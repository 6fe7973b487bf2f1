use crate::{
    client::{self, Client, Config},
    credentials::{self, Credentials},
    error::Error,
    prompt,
};
use clap::Args;

#[derive(Args)]
pub struct TokenArgs {
    #[arg(
        long,
        env = "FIREBASE_PROJECT_KEY",
        hide_env_values = true,
        help = "firebase project web API key of the project to authenticate against"
    )]
    pub project_key: Option<String>,

    #[arg(long, env = "FIREBASE_EMAIL", help = "email of user to authenticate")]
    pub email: Option<String>,

    #[arg(
        long,
        env = "FIREBASE_PASSWORD",
        hide_env_values = true,
        help = "password of user to authenticate; prompted for when omitted"
    )]
    pub pw: Option<String>,

    #[arg(long, env = "FIREBASE_AUTH_ENDPOINT", hide = true, default_value = client::DEFAULT_ENDPOINT)]
    pub endpoint: String,
}

/// Options that passed validation. The password may still need prompting.
pub struct Inputs {
    pub project_key: String,
    pub email: String,
    pub pw: Option<String>,
    pub endpoint: String,
}

impl TokenArgs {
    pub fn validate(self) -> Result<Inputs, Error> {
        let project_key = non_empty(self.project_key);
        let email = non_empty(self.email);

        let mut missing = Vec::new();
        if email.is_none() {
            missing.push("--email");
        }
        if project_key.is_none() {
            missing.push("--project-key");
        }
        let (Some(project_key), Some(email)) = (project_key, email) else {
            return Err(Error::Flag(format!(
                "missing required flags [{}]",
                missing.join(" ")
            )));
        };

        credentials::check_email(&email)?;
        client::parse_endpoint(&self.endpoint)?;

        Ok(Inputs {
            project_key,
            email,
            pw: non_empty(self.pw),
            endpoint: self.endpoint,
        })
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

/// Maps a clap parse failure onto the flag error, keeping only the headline.
pub fn flag_error(err: &clap::Error) -> Error {
    let rendered = err.to_string();
    let headline = rendered.lines().next().unwrap_or_default();
    Error::Flag(headline.trim_start_matches("error: ").trim().to_string())
}

pub fn run(args: TokenArgs) -> Result<String, Error> {
    run_with_prompt(args, || prompt::prompt_password("Password: "))
}

/// Runs the exchange, calling `read_password` only when no password was given.
pub fn run_with_prompt(
    args: TokenArgs,
    read_password: impl FnOnce() -> anyhow::Result<String>,
) -> Result<String, Error> {
    let inputs = args.validate()?;

    let password = match inputs.pw {
        Some(pw) => pw,
        None => read_password().map_err(|e| Error::Internal(format!("{:#}", e)))?,
    };

    let credentials = Credentials::new(&inputs.project_key, &inputs.email, &password)?;
    let client = Client::new(Config {
        endpoint: inputs.endpoint,
    })?;

    client.verify_password(&credentials)
}
