use gemini_oneshot::{Client, Model};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let key = std::env::var("GEMINI_API_KEY")?;
    let client = Client::new(key);

    match client
        .generate_text("Explain borrowing in one paragraph.", Model::Gemini20Flash)
        .await?
    {
        Some(text) => println!("{text}"),
        None => println!("(no text generated)"),
    }

    Ok(())
}
