//! Examples for using the retext server API

use reqwest::Client;
use serde_json::json;

const SERVER_URL: &str = "http://localhost:8080";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let client = Client::new();

    // Example 1: Health check
    println!("1. Health Check:");
    let resp = client.get(format!("{SERVER_URL}/health")).send().await?;
    println!("Status: {}", resp.status());
    println!("Body: {}", resp.text().await?);
    println!();

    // Example 2: Rewrite an article
    println!("2. Rewrite:");
    let resp = client
        .post(format!("{SERVER_URL}/api/text/rewrite"))
        .json(&json!({
            "text": "We need a lot of help to start the big project. It is a good plan.",
            "style": "formal",
            "intensity": "significant",
            "seed": 42
        }))
        .send()
        .await?;
    println!("Status: {}", resp.status());
    println!("Body: {}", resp.text().await?);
    println!();

    // Example 3: Humanize
    println!("3. Humanize:");
    let resp = client
        .post(format!("{SERVER_URL}/api/ai/humanize"))
        .json(&json!({
            "text": "I do not think that it is ready. We will not ship it today.",
            "level": "heavy"
        }))
        .send()
        .await?;
    println!("Status: {}", resp.status());
    println!("Body: {}", resp.text().await?);
    println!();

    // Example 4: Rephrase with a full config
    println!("4. Rephrase:");
    let resp = client
        .post(format!("{SERVER_URL}/api/text/rephrase"))
        .json(&json!({
            "text": "The team wrote the report, and the manager read it quickly.",
            "config": {
                "style": "academic",
                "intensity": 80,
                "granularity": "sentence",
                "similarity_method": "levenshtein"
            },
            "seed": 7
        }))
        .send()
        .await?;
    println!("Status: {}", resp.status());
    println!("Body: {}", resp.text().await?);
    println!();

    // Example 5: Reverse
    println!("5. Reverse:");
    let resp = client
        .post(format!("{SERVER_URL}/api/text/reverse"))
        .json(&json!({
            "text": "abc123def",
            "mode": "characters",
            "options": { "preserve_numbers": true }
        }))
        .send()
        .await?;
    println!("Status: {}", resp.status());
    println!("Body: {}", resp.text().await?);
    println!();

    // Example 6: Similarity
    println!("6. Similarity:");
    let resp = client
        .post(format!("{SERVER_URL}/api/text/similarity"))
        .json(&json!({
            "a": "the quick brown fox",
            "b": "the quick red fox",
            "method": "shingle"
        }))
        .send()
        .await?;
    println!("Status: {}", resp.status());
    println!("Body: {}", resp.text().await?);

    Ok(())
}
