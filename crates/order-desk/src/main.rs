use clap::{Parser, Subcommand};
use order_desk::config::ServerConfig;
use order_desk::model::CustomerId;
use order_desk::server::start_server;
use order_desk::workflow::{compose_order, HttpOrderApi, OrderDraft, OrderLine};
use resource_actor::tracing::setup_tracing;
use std::path::PathBuf;
use tracing::{error, info};

#[derive(Parser)]
#[command(name = "order-desk", version, about = "Order management backend")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run the REST API server
    Serve {
        /// Config file (defaults to config/order-desk.toml when present)
        #[arg(long)]
        config: Option<PathBuf>,
        /// Port to listen on, overriding the config
        #[arg(long)]
        port: Option<u16>,
    },
    /// Place an order against a running server
    PlaceOrder {
        #[arg(long, default_value = "http://localhost:5222/api")]
        api_base: String,
        /// Customer placing the order
        #[arg(long)]
        customer: i32,
        /// Order line as PRODUCT:QUANTITY; repeat for more lines
        #[arg(long = "item")]
        items: Vec<OrderLine>,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Command::Serve { config, port } => {
            let mut config = ServerConfig::load(config.as_deref())?;
            if let Some(port) = port {
                config.port = port;
            }
            setup_tracing(&config.log_filter);
            info!(?config, "Configuration loaded");

            if let Err(e) = start_server(config).await {
                error!(error = %e, "Server stopped with an error");
                return Err(e.into());
            }
        }
        Command::PlaceOrder {
            api_base,
            customer,
            items,
        } => {
            setup_tracing("info");
            let api = HttpOrderApi::new(api_base);
            let draft = OrderDraft {
                customer_id: CustomerId(customer),
                lines: items,
            };
            let order = compose_order(&api, draft).await?;
            println!("Order #{} created", order.id);
        }
    }

    Ok(())
}
