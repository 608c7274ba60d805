//! Seed data for the demo binary and the in-memory store.

use crate::models::{Message, Property, PropertyStatus, PropertyType, Role, User};
use chrono::{DateTime, NaiveDate, Utc};

/// Timestamp on 2024-01-01 at the given wall-clock time (UTC)
///
/// Panics on an out-of-range hour or minute; every caller passes literals.
pub fn at(hour: u32, minute: u32) -> DateTime<Utc> {
    NaiveDate::from_ymd_opt(2024, 1, 1)
        .and_then(|date| date.and_hms_opt(hour, minute, 0))
        .map(|naive| naive.and_utc())
        .expect("seed timestamp must be a valid time of day")
}

pub fn message(
    id: &str,
    sender_id: &str,
    receiver_id: &str,
    property_id: &str,
    hour: u32,
    minute: u32,
) -> Message {
    Message {
        id: id.to_string(),
        sender_id: sender_id.to_string(),
        receiver_id: receiver_id.to_string(),
        property_id: property_id.to_string(),
        content: format!("Message {id}"),
        timestamp: at(hour, minute),
        read: false,
    }
}

pub fn users() -> Vec<User> {
    vec![
        user("buyer-1", "John Buyer", "buyer@example.com", Role::Buyer),
        user("buyer-2", "Ann Buyer", "ann@example.com", Role::Buyer),
        user("seller-1", "Jane Seller", "seller@example.com", Role::Seller),
        user("seller-2", "Sam Seller", "sam@example.com", Role::Seller),
    ]
}

fn user(id: &str, name: &str, email: &str, role: Role) -> User {
    User {
        id: id.to_string(),
        name: name.to_string(),
        email: email.to_string(),
        role,
        phone: None,
        created_at: at(0, 0),
    }
}

pub fn properties() -> Vec<Property> {
    vec![
        property(
            "prop-1",
            "Beautiful 3BR House",
            "New York, NY",
            450_000,
            (3, 1_200, 4),
            PropertyType::House,
            "seller-1",
            &["parking", "garden"],
        ),
        property(
            "prop-2",
            "Downtown Loft Apartment",
            "Chicago, IL",
            320_000,
            (1, 850, 12),
            PropertyType::Apartment,
            "seller-1",
            &["elevator", "gym"],
        ),
        property(
            "prop-3",
            "Lakeside Condo",
            "Austin, TX",
            275_000,
            (2, 1_050, 8),
            PropertyType::Condo,
            "seller-2",
            &["pool"],
        ),
        property(
            "prop-4",
            "Hillside Villa",
            "Malibu, CA",
            1_850_000,
            (5, 4_200, 20),
            PropertyType::Villa,
            "seller-2",
            &["pool", "ocean view", "wine cellar"],
        ),
        property(
            "prop-5",
            "Cozy Family House",
            "Portland, OR",
            510_000,
            (4, 2_100, 35),
            PropertyType::House,
            "seller-1",
            &["fireplace", "garage"],
        ),
    ]
}

#[allow(clippy::too_many_arguments)]
fn property(
    id: &str,
    title: &str,
    location: &str,
    price: u64,
    (bedrooms, sqft, age): (u32, u32, u32),
    property_type: PropertyType,
    seller_id: &str,
    features: &[&str],
) -> Property {
    Property {
        id: id.to_string(),
        title: title.to_string(),
        price,
        location: location.to_string(),
        bedrooms,
        sqft,
        age,
        image: String::new(),
        description: format!("{title} in {location}. {bedrooms} bedrooms, {sqft} sqft."),
        property_type,
        status: PropertyStatus::Available,
        seller_id: seller_id.to_string(),
        features: features.iter().map(|f| f.to_string()).collect(),
        created_at: at(0, 0),
    }
}

pub fn messages() -> Vec<Message> {
    let mut messages = vec![
        message("msg-1", "buyer-1", "seller-1", "prop-1", 10, 0),
        message("msg-2", "seller-1", "buyer-1", "prop-1", 10, 30),
        message("msg-3", "buyer-1", "seller-2", "prop-3", 11, 0),
    ];
    messages[0].content = "Hi, I'm interested in this property".to_string();
    messages[1].content =
        "Thank you for your interest! Would you like to schedule a viewing?".to_string();
    messages[2].content = "Is the condo still available?".to_string();
    messages
}
