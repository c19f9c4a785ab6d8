/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */

// Prints the latest public photos for a Flickr user.
//
// Usage: cargo run --example latest_photos <username>
// Requires FLICKR_API_KEY in the environment or a .env file.

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();
    dotenvy::dotenv().ok();

    let api_key = std::env::var("FLICKR_API_KEY")?;
    let username = std::env::args()
        .nth(1)
        .expect("usage: latest_photos <username>");

    let photos = flickr::rest::latest_public_photos(&api_key, &username, 10).await?;
    for photo in &photos {
        println!("{}: {}", photo.title(), photo.medium_image_url());
    }
    Ok(())
}
