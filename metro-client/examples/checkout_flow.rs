// metro-client/examples/checkout_flow.rs
// End-to-end checkout demo against a running metro API

use std::sync::Arc;

use futures::StreamExt;
use metro_client::{
    AccountRepository, CartSession, DiscountRepository, NetworkHttpClient, NetworkRepository,
    Outcome, OrderRepository, OutcomeStream, TicketRepository,
};
use shared::models::{CartItem, CheckoutRequest, JourneyQuery, TicketKind};

/// Drain an outcome stream to its terminal value
async fn resolve<T>(mut flow: OutcomeStream<T>) -> Option<T> {
    while let Some(outcome) = flow.next().await {
        match outcome {
            Outcome::Init => tracing::debug!("loading..."),
            Outcome::Success(value) => return Some(value),
            Outcome::ServerError(err) => {
                tracing::error!(kind = ?err.kind, "call failed: {}", err.message);
                return None;
            }
        }
    }
    None
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    let args: Vec<String> = std::env::args().collect();
    if args.len() < 3 {
        println!("Usage: {} <username> <password>", args[0]);
        println!("  Server URL comes from METRO_API_URL (default http://localhost:8080)");
        return Ok(());
    }
    let username = &args[1];
    let password = &args[2];

    let base_url =
        std::env::var("METRO_API_URL").unwrap_or_else(|_| "http://localhost:8080".to_string());
    let http = Arc::new(NetworkHttpClient::new(&base_url)?);

    let accounts = AccountRepository::new(Arc::clone(&http));
    let network = NetworkRepository::new(Arc::clone(&http));
    let tickets = TicketRepository::new(Arc::clone(&http));
    let discounts = DiscountRepository::new(Arc::clone(&http));
    let orders = OrderRepository::new(Arc::clone(&http));

    // Login
    let Some(login) = resolve(accounts.login(username, password)).await else {
        return Ok(());
    };
    tracing::info!("logged in as {}", login.account.username);

    // Browse the network
    let Some(lines) = resolve(network.lines()).await else {
        return Ok(());
    };
    tracing::info!("network has {} lines", lines.len());
    let Some(line) = lines.first() else {
        return Ok(());
    };
    let Some(stations) = resolve(network.stations_of_line(&line.id)).await else {
        return Ok(());
    };
    if stations.len() < 2 {
        tracing::warn!("line {} has too few stations for a journey", line.code);
        return Ok(());
    }

    // Price a journey between the line's endpoints
    let query = JourneyQuery {
        origin_station_id: stations[0].id.clone(),
        destination_station_id: stations[stations.len() - 1].id.clone(),
    };
    let Some(journeys) = resolve(tickets.search_journeys(query)).await else {
        return Ok(());
    };
    let Some(journey) = journeys.first() else {
        tracing::warn!("no journey between the chosen stations");
        return Ok(());
    };

    // Build the cart
    let mut cart = CartSession::new();
    cart.add_item(CartItem::new(
        TicketKind::PointToPoint,
        journey.id.clone(),
        format!("{} → {}", journey.origin_name, journey.destination_name),
        2,
        journey.fare,
    ))?;

    if let Some(package) = resolve(discounts.active_package()).await.flatten() {
        tracing::info!("applying {} ({}% off)", package.name, package.percentage * 100.0);
        cart.set_membership_percentage(Some(package.percentage));
    }

    let totals = cart.totals();
    tracing::info!(
        "estimated: subtotal {:.2}, membership -{:.2}, voucher -{:.2}, total {:.2}",
        totals.subtotal,
        totals.membership_deduction,
        totals.voucher_deduction,
        totals.final_total
    );

    // Checkout; the server's totals are authoritative
    let request = CheckoutRequest {
        items: cart.items().to_vec(),
        voucher_code: cart.selected_voucher().map(|v| v.code.clone()),
        payment_method: "WALLET".to_string(),
    };
    let Some(detail) = resolve(orders.checkout(request)).await else {
        return Ok(());
    };
    cart.clear();
    tracing::info!(
        "order {} confirmed, server total {:.2}",
        detail.order.order_number,
        detail.order.total
    );

    Ok(())
}
