use gemini_oneshot::{Client, Model};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let path = std::env::args()
        .nth(1)
        .ok_or("usage: describe_image <path-to-image>")?;

    let key = std::env::var("GEMINI_API_KEY")?;
    let client = Client::new(key);

    match client
        .generate_text_with_image_file("Describe this image.", &path, Model::Gemini15Flash)
        .await?
    {
        Some(text) => println!("{text}"),
        None => println!("(no text generated)"),
    }

    Ok(())
}
