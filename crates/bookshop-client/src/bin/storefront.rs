//! # Storefront Demo Tool
//!
//! Exercises the catalog client and the cart end to end against a live API.
//!
//! ## Usage
//! ```bash
//! # Browse the first page of the catalog
//! cargo run -p bookshop-client --bin storefront
//!
//! # Search, add the first two matches to a cart, show totals
//! cargo run -p bookshop-client --bin storefront -- --search history
//!
//! # Also place the order under a display name
//! cargo run -p bookshop-client --bin storefront -- --search history --order "Layla"
//!
//! # Point at a different API
//! BOOKSHOP_API_URL=http://localhost:3000/api cargo run -p bookshop-client --bin storefront
//! ```

use std::env;
use std::process::ExitCode;

use tracing::error;
use tracing_subscriber::EnvFilter;

use bookshop_client::{checkout, ApiClient, ClientError};
use bookshop_core::{BookFilters, Cart, Notification};

struct Args {
    search: Option<String>,
    order_name: Option<String>,
}

fn parse_args() -> Args {
    let mut args = Args {
        search: None,
        order_name: None,
    };
    let mut iter = env::args().skip(1);
    while let Some(flag) = iter.next() {
        match flag.as_str() {
            "--search" => args.search = iter.next(),
            "--order" => args.order_name = iter.next(),
            other => {
                eprintln!("unknown argument: {other}");
            }
        }
    }
    args
}

async fn run(args: Args) -> Result<(), ClientError> {
    let client = ApiClient::from_env()?;
    println!("catalog: {}", client.base_url());

    let filters = match &args.search {
        Some(term) => BookFilters::search(term),
        None => BookFilters::default(),
    };
    let books = client.get_books(&filters).await?;
    println!("{} book(s) found", books.len());

    let mut cart = Cart::new();
    for book in books.iter().take(2) {
        println!(
            "  {} by {} — {} ({} in stock)",
            book.title, book.author.name, book.price, book.available_quantity
        );
        match cart.add_one(book) {
            Ok(outcome) => println!("  > {}", Notification::from(&outcome).message),
            Err(rejection) => println!("  > {}", Notification::from(&rejection).message),
        }
    }

    println!(
        "cart: {} item(s), total {}",
        cart.total_items(),
        cart.total_price()
    );

    if let Some(name) = &args.order_name {
        match checkout::submit_cart(&client, &cart, name).await {
            Ok(order_id) => {
                println!("order placed: {order_id}");
                cart.clear();
            }
            Err(err) => println!("order not placed: {err}"),
        }
    }

    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    match run(parse_args()).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(%err, "storefront demo failed");
            ExitCode::FAILURE
        }
    }
}
