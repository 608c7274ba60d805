//! Lookups over the listing and message collections.

use crate::error::ListingError;
use crate::favorites::Favorites;
use crate::models::{Message, Property, PropertyDraft, Role, User};

/// Number of listings in the featured strip
pub const FEATURED_COUNT: usize = 6;

pub fn property_by_id<'a>(properties: &'a [Property], id: &str) -> Option<&'a Property> {
    properties.iter().find(|p| p.id == id)
}

pub fn messages_by_property<'a>(messages: &'a [Message], property_id: &str) -> Vec<&'a Message> {
    messages.iter().filter(|m| m.property_id == property_id).collect()
}

/// The first `count` listings
pub fn featured(properties: &[Property], count: usize) -> &[Property] {
    &properties[..count.min(properties.len())]
}

pub fn listings_by_seller<'a>(properties: &'a [Property], seller_id: &str) -> Vec<&'a Property> {
    properties.iter().filter(|p| p.seller_id == seller_id).collect()
}

/// Saved listings of `user_id`, in listing order
pub fn favorite_properties<'a>(
    properties: &'a [Property],
    favorites: &Favorites,
    user_id: &str,
) -> Vec<&'a Property> {
    properties
        .iter()
        .filter(|p| favorites.contains(user_id, &p.id))
        .collect()
}

/// Check a seller's new listing and tidy its feature list
pub fn validate_property_draft(
    user: &User,
    mut draft: PropertyDraft,
) -> Result<PropertyDraft, ListingError> {
    if let Role::Buyer = user.role {
        return Err(ListingError::NotASeller(user.id.clone()));
    }
    if draft.seller_id != user.id {
        return Err(ListingError::WrongSeller {
            owner: draft.seller_id,
            user: user.id.clone(),
        });
    }

    if draft.title.trim().is_empty() {
        return Err(ListingError::MissingField("title"));
    }
    if draft.location.trim().is_empty() {
        return Err(ListingError::MissingField("location"));
    }
    if draft.price == 0 {
        return Err(ListingError::MissingField("price"));
    }
    if draft.bedrooms == 0 {
        return Err(ListingError::MissingField("bedrooms"));
    }
    if draft.sqft == 0 {
        return Err(ListingError::MissingField("sqft"));
    }

    let mut features: Vec<String> = Vec::with_capacity(draft.features.len());
    for feature in draft.features.iter().map(|f| f.trim()) {
        if !feature.is_empty() && !features.iter().any(|f| f == feature) {
            features.push(feature.to_string());
        }
    }
    draft.features = features;

    Ok(draft)
}
