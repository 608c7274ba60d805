use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Marketplace role of a user
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Buyer,
    Seller,
}

impl Role {
    /// Role a user plays in the context of one listing
    pub fn for_property(user_id: &str, property: &Property) -> Self {
        if property.seller_id == user_id {
            Role::Seller
        } else {
            Role::Buyer
        }
    }
}

/// Kind of dwelling
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PropertyType {
    House,
    Apartment,
    Condo,
    Villa,
}

impl fmt::Display for PropertyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PropertyType::House => "house",
            PropertyType::Apartment => "apartment",
            PropertyType::Condo => "condo",
            PropertyType::Villa => "villa",
        };
        f.write_str(name)
    }
}

/// Sale status of a listing
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PropertyStatus {
    Available,
    Pending,
    Sold,
}

/// Registered marketplace user
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: Role,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Core property listing
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Property {
    pub id: String,
    pub title: String,
    pub price: u64,
    pub location: String,
    pub bedrooms: u32,
    pub sqft: u32,
    /// Age of the building in years
    pub age: u32,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub description: String,
    #[serde(rename = "type")]
    pub property_type: PropertyType,
    pub status: PropertyStatus,
    pub seller_id: String,
    pub features: Vec<String>,
    pub created_at: DateTime<Utc>,
}

/// A listing as submitted by a seller, before the store assigns id and creation time
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PropertyDraft {
    pub title: String,
    pub price: u64,
    pub location: String,
    pub bedrooms: u32,
    pub sqft: u32,
    pub age: u32,
    pub image: String,
    pub description: String,
    #[serde(rename = "type")]
    pub property_type: PropertyType,
    pub status: PropertyStatus,
    pub seller_id: String,
    pub features: Vec<String>,
}

impl PropertyDraft {
    pub fn into_property(self, id: String, created_at: DateTime<Utc>) -> Property {
        Property {
            id,
            title: self.title,
            price: self.price,
            location: self.location,
            bedrooms: self.bedrooms,
            sqft: self.sqft,
            age: self.age,
            image: self.image,
            description: self.description,
            property_type: self.property_type,
            status: self.status,
            seller_id: self.seller_id,
            features: self.features,
            created_at,
        }
    }
}

/// A message between two users about one property
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    pub id: String,
    pub sender_id: String,
    pub receiver_id: String,
    pub property_id: String,
    pub content: String,
    pub timestamp: DateTime<Utc>,
    pub read: bool,
}

impl Message {
    /// Whether `user_id` sent or received this message
    pub fn involves(&self, user_id: &str) -> bool {
        self.sender_id == user_id || self.receiver_id == user_id
    }

    /// The participant that is not `user_id`
    pub fn other_party(&self, user_id: &str) -> &str {
        if self.sender_id == user_id {
            &self.receiver_id
        } else {
            &self.sender_id
        }
    }
}

/// An outgoing message ready to be appended to a store
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MessageDraft {
    pub sender_id: String,
    pub receiver_id: String,
    pub property_id: String,
    pub content: String,
    pub timestamp: DateTime<Utc>,
    pub read: bool,
}

impl MessageDraft {
    pub fn into_message(self, id: String) -> Message {
        Message {
            id,
            sender_id: self.sender_id,
            receiver_id: self.receiver_id,
            property_id: self.property_id,
            content: self.content,
            timestamp: self.timestamp,
            read: self.read,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;

    #[test]
    fn property_serializes_with_original_field_names() {
        let property = fixtures::properties().remove(0);
        let value = serde_json::to_value(&property).unwrap();

        assert_eq!(value["type"], "house");
        assert_eq!(value["status"], "available");
        assert_eq!(value["sellerId"], "seller-1");
        assert!(value.get("createdAt").is_some());
    }

    #[test]
    fn role_depends_on_listing_owner() {
        let property = fixtures::properties().remove(0);

        assert_eq!(Role::for_property("seller-1", &property), Role::Seller);
        assert_eq!(Role::for_property("buyer-1", &property), Role::Buyer);
    }

    #[test]
    fn other_party_is_relative_to_user() {
        let message = fixtures::message("m1", "buyer-1", "seller-1", "prop-1", 10, 0);

        assert_eq!(message.other_party("buyer-1"), "seller-1");
        assert_eq!(message.other_party("seller-1"), "buyer-1");
        assert!(message.involves("buyer-1"));
        assert!(!message.involves("buyer-2"));
    }
}
