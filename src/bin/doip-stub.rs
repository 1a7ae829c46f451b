//! Runs the stub responder from the command line.

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use doip_stub::{Mode, Reply, Script, Server, DOIP_PORT};

#[derive(Parser, Debug)]
#[clap(name = "doip-stub", version)]
/// Answer a DoIP tester with a fixed sequence of reply frames.
struct Args {
    /// host name or IP address to listen on
    #[clap(long, default_value = "localhost")]
    host: String,

    /// TCP port to listen on
    #[clap(long, default_value_t = DOIP_PORT)]
    port: u16,

    /// serve a single connection, answer each reply once, then exit
    #[clap(long)]
    once: bool,

    /// reply frame as hex, sent in the given order (repeatable); replaces
    /// the built-in routing activation / session / identifier replies
    #[clap(long = "reply", value_name = "HEX")]
    replies: Vec<Reply>,

    /// log filter (trace, debug, info, warn, error); `RUST_LOG` takes precedence
    #[clap(long, default_value = "info")]
    log_level: String,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    let script = if args.replies.is_empty() {
        Script::default()
    } else {
        Script::new(args.replies)?
    };
    let mode = if args.once { Mode::Once } else { Mode::Repeat };

    let server = Server::bind((args.host.as_str(), args.port), script, mode)?;
    let sent = server.serve()?;
    info!(sent, "done");
    Ok(())
}
