use anyhow::Context;
use housing_market::catalog::{self, FEATURED_COUNT};
use housing_market::config::AppConfig;
use housing_market::favorites::{Favorites, FileKv};
use housing_market::filter_properties;
use housing_market::messaging::{derive_conversations, prepare_message, SendContext};
use housing_market::store::{InMemoryStore, JsonFileStore, MarketStore, Snapshot};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| "housing_market=info".into()),
        )
        .init();

    let config = AppConfig::from_env().context("Failed to load configuration")?;

    info!("🏠 Housing Market");
    info!("==================");

    let mut store: Box<dyn MarketStore> = match &config.data_path {
        Some(path) => Box::new(
            JsonFileStore::open(path, Snapshot::seeded())
                .await
                .with_context(|| format!("Failed to open store at {}", path.display()))?,
        ),
        None => Box::new(InMemoryStore::seeded()),
    };
    info!("Using {} store", store.source_name());

    let user = store
        .user_by_id(&config.user_id)
        .await?
        .with_context(|| format!("Unknown user {}", config.user_id))?;
    info!("Signed in as {} ({:?})", user.name, user.role);

    let properties = store.properties().await?;

    // Featured strip
    for property in catalog::featured(&properties, FEATURED_COUNT) {
        info!("⭐ {} ({})", property.title, property.location);
    }

    // Display results
    let matched = filter_properties(&properties, &config.filter);
    info!(
        "\n✅ {} of {} properties match\n",
        matched.len(),
        properties.len()
    );

    for (i, property) in matched.iter().enumerate() {
        println!("{}. {} (${})", i + 1, property.title, property.price);
        println!(
            "   {} bedrooms, {} sqft, {} years, {}",
            property.bedrooms, property.sqft, property.age, property.property_type
        );
        println!("   Location: {}", property.location);
        println!("   ID: {}", property.id);
        println!("   Features: {}", property.features.join(", "));
        println!();
    }

    let kv = FileKv::new(&config.kv_dir);
    let favorites = Favorites::load(&kv).context("Failed to load favorites")?;
    let saved = catalog::favorite_properties(&properties, &favorites, &user.id);
    info!("❤️  {} saved properties", saved.len());

    if let Some((property_id, content)) = &config.outgoing {
        let conversations = derive_conversations(&store.messages().await?, &user.id);
        let context = SendContext {
            properties: &properties,
            conversations: &conversations,
        };
        match prepare_message(&user.id, property_id, content, context) {
            Ok(draft) => {
                let message = store.append_message(draft).await?;
                info!("💬 Sent message {} to {}", message.id, message.receiver_id);
            }
            Err(reason) => warn!("Message not sent ({:?}): {}", reason.kind(), reason),
        }
    }

    // Conversations, most recent first
    let messages = store.messages().await?;
    let conversations = derive_conversations(&messages, &user.id);
    if conversations.is_empty() {
        println!("No conversations yet");
    }

    for conversation in &conversations {
        let title = catalog::property_by_id(&properties, &conversation.property_id)
            .map(|p| p.title.as_str())
            .unwrap_or("(removed listing)");
        let counterparty = store
            .user_by_id(&conversation.counterparty_id)
            .await?
            .map(|u| u.name)
            .unwrap_or_else(|| conversation.counterparty_id.clone());

        println!(
            "{} - {} ({} unread)",
            title,
            counterparty,
            conversation.unread_count(&user.id)
        );
        if let Some(last) = conversation.latest_message() {
            println!("   {} | {}", last.timestamp.format("%Y-%m-%d %H:%M"), last.content);
        }
    }

    Ok(())
}
