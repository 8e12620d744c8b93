use serde::{Deserialize, Serialize};

use depot_core::{ItemId, LocationId};

/// A priced item owned by a location.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub id: ItemId,
    pub price: f64,
    pub name: String,
    pub location_id: LocationId,
    /// Hidden from unauthenticated callers when set.
    pub requires_authorized_user: bool,
}

impl Item {
    /// Build the stored form of a request once the store has picked an id.
    pub fn from_request(id: ItemId, request: &ItemRequest) -> Self {
        Self {
            id,
            price: request.price,
            name: request.name.clone(),
            location_id: request.location_id,
            requires_authorized_user: request.requires_authorized_user,
        }
    }

    /// Overwrite every mutable field from `request`.
    ///
    /// Full replace: default values in the request win over stored values.
    pub fn overwrite_with(&mut self, request: &ItemRequest) {
        self.name = request.name.clone();
        self.price = request.price;
        self.location_id = request.location_id;
        self.requires_authorized_user = request.requires_authorized_user;
    }
}

/// Input for creating or replacing an item.
///
/// Absent fields deserialize to their defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ItemRequest {
    pub price: f64,
    pub name: String,
    pub location_id: LocationId,
    pub requires_authorized_user: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_form_is_camel_case() {
        let item = Item {
            id: ItemId::new(1),
            price: 9.5,
            name: "Lamp".to_string(),
            location_id: LocationId::new(3),
            requires_authorized_user: true,
        };

        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "id": 1,
                "price": 9.5,
                "name": "Lamp",
                "locationId": 3,
                "requiresAuthorizedUser": true,
            })
        );
    }

    #[test]
    fn request_fields_default_when_absent() {
        let request: ItemRequest = serde_json::from_str(r#"{"name":"Desk"}"#).unwrap();
        assert_eq!(
            request,
            ItemRequest {
                price: 0.0,
                name: "Desk".to_string(),
                location_id: LocationId::new(0),
                requires_authorized_user: false,
            }
        );
    }

    #[test]
    fn overwrite_replaces_fields_even_with_defaults() {
        let mut item = Item {
            id: ItemId::new(8),
            price: 120.0,
            name: "Chair".to_string(),
            location_id: LocationId::new(2),
            requires_authorized_user: true,
        };

        item.overwrite_with(&ItemRequest::default());

        assert_eq!(item.id, ItemId::new(8));
        assert_eq!(item.price, 0.0);
        assert_eq!(item.name, "");
        assert_eq!(item.location_id, LocationId::new(0));
        assert!(!item.requires_authorized_user);
    }
}
