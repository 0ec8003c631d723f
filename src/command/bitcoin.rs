use crate::{command::*, response::Response};
use anyhow::Result;

const CURRENT_PRICE_URL: &str = "https://api.coindesk.com/v1/bpi/currentprice/BTC.json";

#[derive(serde::Deserialize)]
struct CurrentPrice {
    bpi: Bpi,
}

#[derive(serde::Deserialize)]
struct Bpi {
    #[serde(rename = "USD")]
    usd: Rate,
}

#[derive(serde::Deserialize)]
struct Rate {
    rate: String,
}

pub struct Bitcoin;

#[serenity::async_trait]
impl Command for Bitcoin {
    fn name(&self) -> &'static str {
        "bitcoin"
    }

    fn usage(&self) -> &'static str {
        "bitcoin - get the current price of bitcoin"
    }

    async fn run(&self, _ctx: &Context<'_>, _invocation: &Invocation) -> Result<Reply> {
        let body = reqwest::get(CURRENT_PRICE_URL)
            .await?
            .error_for_status()?
            .text()
            .await?;

        Ok(price_response(&body)?.into())
    }
}

fn price_response(body: &str) -> Result<Response> {
    let price: CurrentPrice = serde_json::from_str(body)?;

    Ok(Response::success()
        .title(":information_source: Info")
        .description(format!("Bitcoin price is: ${}", price.bpi.usd.rate)))
}
