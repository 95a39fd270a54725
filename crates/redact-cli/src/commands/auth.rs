use anyhow::Result;
use redact_client::{ApiClient, SessionStore};
use redact_core::forms::{self, CredentialForm, FormMode};

use crate::cli::AuthCommands;

pub async fn handle(cmd: AuthCommands, client: &ApiClient, store: &SessionStore) -> Result<()> {
    match cmd {
        AuthCommands::Register {
            name,
            email,
            password,
        } => register(client, name, email, password).await,
        AuthCommands::Login { email, password } => login(client, store, email, password).await,
        AuthCommands::Logout => logout(store),
        AuthCommands::Status => status(store),
    }
}

async fn register(
    client: &ApiClient,
    name: String,
    email: String,
    password: Option<String>,
) -> Result<()> {
    // A password given as a flag needs no confirmation; a prompted one is
    // asked for twice.
    let (password, confirm_password) = match password {
        Some(p) => (p.clone(), p),
        None => (prompt("Password: ")?, prompt("Confirm password: ")?),
    };

    let form = CredentialForm {
        name,
        email,
        password,
        confirm_password,
    };

    let errors = forms::validate(&form, FormMode::Signup);
    if !errors.is_empty() {
        for (field, message) in &errors {
            eprintln!("  {field}: {message}");
        }
        anyhow::bail!("invalid registration details");
    }

    client.register(&form.email, &form.password).await?;

    // Registration returns no token; the user logs in explicitly.
    println!("✓ Account created for {}", form.email);
    println!("  Log in with: redact auth login --email {}", form.email);

    Ok(())
}

async fn login(
    client: &ApiClient,
    store: &SessionStore,
    email: String,
    password: Option<String>,
) -> Result<()> {
    let password = match password {
        Some(p) => p,
        None => prompt("Password: ")?,
    };

    let form = CredentialForm {
        email,
        password,
        ..Default::default()
    };

    let errors = forms::validate(&form, FormMode::Login);
    if !errors.is_empty() {
        for (field, message) in &errors {
            eprintln!("  {field}: {message}");
        }
        anyhow::bail!("invalid login details");
    }

    let session = client.login(&form.email, &form.password).await?;
    store.save(&session)?;

    println!("✓ Logged in as {}", form.email);
    println!("  Session stored at {}", store.path().display());

    Ok(())
}

fn logout(store: &SessionStore) -> Result<()> {
    store.clear()?;
    println!("✓ Logged out");
    Ok(())
}

fn status(store: &SessionStore) -> Result<()> {
    match store.load()? {
        Some(_) => println!("Logged in (token at {})", store.path().display()),
        None => println!("Not logged in"),
    }
    Ok(())
}

fn prompt(label: &str) -> Result<String> {
    print!("{label}");
    std::io::Write::flush(&mut std::io::stdout())?;

    let mut input = String::new();
    std::io::stdin().read_line(&mut input)?;
    Ok(input.trim().to_string())
}
