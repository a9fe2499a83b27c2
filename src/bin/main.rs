use clap::Parser;
use market_billing_rs::{AuthGate, BillingError, Console, CredentialStore, Session, collect_customer};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process;
use tracing_subscriber::EnvFilter;

/// Supermarket Billing - Log in, enter an order, print or save the bill
///
/// Asks for credentials, then customer details, then runs a menu to add
/// items, display the bill, or write it to a file.
#[derive(Parser, Debug)]
#[command(name = "market-billing-rs")]
#[command(about = "A terminal supermarket billing utility", long_about = None)]
struct Args {
    /// Credential store, one `username password` pair per line
    #[arg(long, value_name = "FILE", default_value = "users.txt")]
    users: PathBuf,

    /// Destination the bill is written to (overwritten on each export)
    #[arg(long, value_name = "FILE", default_value = "bill.txt")]
    bill: PathBuf,
}

fn main() {
    // Parse command line arguments
    let args = Args::parse();

    init_tracing();

    let stdin = io::stdin();
    let mut console = Console::new(stdin.lock(), io::stdout());

    match run(&args, &mut console) {
        Ok(()) => {}
        Err(BillingError::Io(e)) if e.kind() == io::ErrorKind::UnexpectedEof => {
            eprintln!("Input closed. Exiting program.");
            process::exit(1);
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }
}

/// Logs go to stderr so they never interleave with the bill on stdout.
///
/// `RUST_LOG` overrides the default `warn` filter.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

/// Authenticate, collect the customer, then run the menu loop.
///
/// Failed authentication ends the run normally without touching an order.
fn run<R: BufRead, W: Write>(
    args: &Args,
    console: &mut Console<R, W>,
) -> Result<(), BillingError> {
    let gate = AuthGate::new(CredentialStore::new(&args.users));

    if !gate.authenticate(console)?.is_authenticated() {
        console.say("Authentication failed. Exiting program.")?;
        return Ok(());
    }

    let customer = collect_customer(console)?;
    let mut session = Session::new(customer, &args.bill);
    session.run(console)
}
