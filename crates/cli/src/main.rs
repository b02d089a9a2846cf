use {
    anyhow::bail,
    clap::{Parser, Subcommand},
    harbor_api::Session,
    harbor_protocol::{CreateChannelRequest, CreateMessageRequest, Message, RegisterRequest},
    tracing::info,
    tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt},
};

#[derive(Parser)]
#[command(name = "harbor", about = "Harbor — terminal chat client")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Server base URL (overrides config value).
    #[arg(long, global = true)]
    server: Option<String>,

    /// Bearer token for authenticated commands.
    #[arg(long, global = true, env = "HARBOR_TOKEN")]
    token: Option<String>,

    /// Log level (trace, debug, info, warn, error).
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    /// Output logs as JSON instead of human-readable.
    #[arg(long, global = true, default_value_t = false)]
    json_logs: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Open the chat TUI (default when no subcommand is provided).
    Chat,
    /// Sign in and print a token for use with --token / HARBOR_TOKEN.
    Login {
        #[arg(short, long)]
        username: String,
        #[arg(short, long)]
        password: String,
    },
    /// Create an account.
    Register {
        #[arg(short, long)]
        username: String,
        #[arg(short, long)]
        email: String,
        #[arg(short, long)]
        password: String,
    },
    /// Show the profile behind the current token.
    Whoami,
    /// Channel management.
    Channels {
        #[command(subcommand)]
        action: ChannelAction,
    },
    /// Send a message to a channel.
    Send {
        /// Channel id.
        #[arg(long)]
        to: i64,
        #[arg(short, long)]
        message: String,
    },
    /// Print recent messages from a channel.
    History {
        /// Channel id.
        channel: i64,
        /// Most-recent message cap (ignored when --page is given).
        #[arg(long, default_value_t = 50)]
        limit: u32,
        /// Fetch one page instead of the recent slice.
        #[arg(long)]
        page: Option<u32>,
        /// Page size for --page.
        #[arg(long, default_value_t = 20)]
        size: u32,
    },
    /// Replace a message's content.
    Edit {
        /// Message id.
        id: i64,
        content: String,
    },
    /// Delete a message.
    Delete {
        /// Message id.
        id: i64,
    },
}

#[derive(Subcommand)]
enum ChannelAction {
    /// All channels visible to you.
    List,
    /// Channels you are a member of.
    Mine,
    Create {
        name: String,
        #[arg(short, long)]
        description: Option<String>,
    },
    Join {
        id: i64,
    },
    Leave {
        id: i64,
    },
}

/// Initialise tracing. Logs go to stderr so they never mix with command
/// output or the TUI.
fn init_telemetry(cli: &Cli) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cli.log_level));

    let registry = tracing_subscriber::registry().with(filter);

    if cli.json_logs {
        registry
            .with(
                fmt::layer()
                    .json()
                    .with_target(true)
                    .with_writer(std::io::stderr),
            )
            .init();
    } else {
        registry
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_writer(std::io::stderr),
            )
            .init();
    }
}

fn resolve_base_url(cli: &Cli) -> String {
    match &cli.server {
        Some(url) => url.trim_end_matches('/').to_owned(),
        None => harbor_config::discover_and_load().server.base_url,
    }
}

fn resolve_session(cli: &Cli) -> anyhow::Result<Session> {
    match &cli.token {
        Some(token) => Ok(Session::from_token(token.clone())),
        None => bail!("no token; run `harbor login` and export HARBOR_TOKEN"),
    }
}

fn print_message(message: &Message) {
    let stamp = message
        .created_at
        .with_timezone(&chrono::Local)
        .format("%Y-%m-%d %H:%M");
    println!("[{stamp}] {}: {}", message.sender.username, message.content);
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();
    init_telemetry(&cli);

    match &cli.command {
        // Default: open the TUI when no subcommand is provided
        None | Some(Commands::Chat) => {
            harbor_tui::run_tui(cli.server.as_deref()).await?;
            Ok(())
        },
        Some(command) => {
            info!(version = env!("CARGO_PKG_VERSION"), "harbor starting");
            let client = reqwest::Client::new();
            let base_url = resolve_base_url(&cli);
            run_command(command, &cli, &client, &base_url).await
        },
    }
}

async fn run_command(
    command: &Commands,
    cli: &Cli,
    client: &reqwest::Client,
    base_url: &str,
) -> anyhow::Result<()> {
    match command {
        Commands::Chat => unreachable!("handled in main"),
        Commands::Login { username, password } => {
            let response = harbor_api::auth::sign_in(client, base_url, username, password).await?;
            println!("Signed in as {} <{}>", response.username, response.email);
            println!("{}", response.access_token);
            Ok(())
        },
        Commands::Register {
            username,
            email,
            password,
        } => {
            let request = RegisterRequest {
                username: username.clone(),
                email: email.clone(),
                password: password.clone(),
            };
            harbor_api::auth::sign_up(client, base_url, &request).await?;
            println!("Account created. Run `harbor login` to sign in.");
            Ok(())
        },
        Commands::Whoami => {
            let session = resolve_session(cli)?;
            let user = harbor_api::auth::current_user(client, base_url, &session).await?;
            println!("{} <{}> (id {})", user.username, user.email, user.id);
            Ok(())
        },
        Commands::Channels { action } => {
            let session = resolve_session(cli)?;
            handle_channels(action, client, base_url, &session).await
        },
        Commands::Send { to, message } => {
            let session = resolve_session(cli)?;
            let request = CreateMessageRequest {
                content: message.clone(),
                channel_id: *to,
            };
            let sent = harbor_api::messages::create(client, base_url, &session, &request).await?;
            println!("Sent message {} to channel {}.", sent.id, *to);
            Ok(())
        },
        Commands::History {
            channel,
            limit,
            page,
            size,
        } => {
            let session = resolve_session(cli)?;
            match page {
                Some(page) => {
                    let result = harbor_api::messages::list_paginated(
                        client, base_url, &session, *channel, *page, *size,
                    )
                    .await?;
                    for message in &result.content {
                        print_message(message);
                    }
                    println!(
                        "Page {page} of {} ({} messages total)",
                        result.total_pages, result.total_elements
                    );
                },
                None => {
                    let mut messages = harbor_api::messages::list_by_channel(
                        client, base_url, &session, *channel, *limit,
                    )
                    .await?;
                    // Server returns newest first; print oldest first.
                    messages.reverse();
                    for message in &messages {
                        print_message(message);
                    }
                },
            }
            Ok(())
        },
        Commands::Edit { id, content } => {
            let session = resolve_session(cli)?;
            let message =
                harbor_api::messages::update(client, base_url, &session, *id, content).await?;
            println!("Updated message {}.", message.id);
            Ok(())
        },
        Commands::Delete { id } => {
            let session = resolve_session(cli)?;
            harbor_api::messages::delete(client, base_url, &session, *id).await?;
            println!("Deleted message {id}.");
            Ok(())
        },
    }
}

async fn handle_channels(
    action: &ChannelAction,
    client: &reqwest::Client,
    base_url: &str,
    session: &Session,
) -> anyhow::Result<()> {
    match action {
        ChannelAction::List => {
            let channels = harbor_api::channels::list_all(client, base_url, session).await?;
            for channel in &channels {
                print_channel(channel);
            }
            Ok(())
        },
        ChannelAction::Mine => {
            let channels = harbor_api::channels::list_mine(client, base_url, session).await?;
            for channel in &channels {
                print_channel(channel);
            }
            Ok(())
        },
        ChannelAction::Create { name, description } => {
            let request = CreateChannelRequest {
                name: name.clone(),
                description: description.clone(),
                is_private: false,
            };
            let channel = harbor_api::channels::create(client, base_url, session, &request).await?;
            println!("Created #{} (id {}).", channel.name, channel.id);
            Ok(())
        },
        ChannelAction::Join { id } => {
            let channel = harbor_api::channels::join(client, base_url, session, *id).await?;
            println!(
                "Joined #{} ({} members).",
                channel.name,
                channel.members.len()
            );
            Ok(())
        },
        ChannelAction::Leave { id } => {
            let channel = harbor_api::channels::leave(client, base_url, session, *id).await?;
            println!("Left #{}.", channel.name);
            Ok(())
        },
    }
}

fn print_channel(channel: &harbor_protocol::Channel) {
    match &channel.description {
        Some(description) => println!("{:>5}  #{}  {}", channel.id, channel.name, description),
        None => println!("{:>5}  #{}", channel.id, channel.name),
    }
}
