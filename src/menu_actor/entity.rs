//! ActorEntity implementation for [`MenuItem`].

use crate::menu_actor::MenuError;
use crate::model::{MenuItem, MenuItemCreate, MenuItemId, MenuItemUpdate};
use actor_framework::ActorEntity;
use async_trait::async_trait;
use chrono::Utc;
use rust_decimal::Decimal;
use std::convert::Infallible;

fn check_price(price: Decimal) -> Result<(), MenuError> {
    if price.is_sign_negative() && !price.is_zero() {
        return Err(MenuError::Validation(format!(
            "price must not be negative, got {price}"
        )));
    }
    Ok(())
}

fn check_name(name: &str) -> Result<(), MenuError> {
    if name.trim().is_empty() {
        return Err(MenuError::Validation("name is required".to_string()));
    }
    Ok(())
}

#[async_trait]
impl ActorEntity for MenuItem {
    type Id = MenuItemId;
    type Create = MenuItemCreate;
    type Update = MenuItemUpdate;
    type Action = Infallible;
    type ActionResult = ();
    type Context = ();
    type Error = MenuError;

    fn from_create_params(id: MenuItemId, params: MenuItemCreate) -> Result<Self, Self::Error> {
        check_name(&params.name)?;
        check_price(params.price)?;
        Ok(MenuItem::new(id, params))
    }

    /// Applies the fields that are set. Validation runs before anything changes.
    async fn on_update(&mut self, update: MenuItemUpdate, _ctx: &()) -> Result<(), Self::Error> {
        if let Some(name) = &update.name {
            check_name(name)?;
        }
        if let Some(price) = update.price {
            check_price(price)?;
        }

        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(description) = update.description {
            self.description = description;
        }
        if let Some(price) = update.price {
            self.price = price;
        }
        if let Some(category) = update.category {
            self.category = category;
        }
        if let Some(image_url) = update.image_url {
            self.image_url = image_url;
        }
        self.updated_at = Utc::now();
        Ok(())
    }

    async fn handle_action(&mut self, action: Infallible, _ctx: &()) -> Result<(), Self::Error> {
        match action {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_negative_price() {
        let params = MenuItemCreate::new("Brie", "", Decimal::new(-1, 2));
        let result = MenuItem::from_create_params(MenuItemId(1), params);
        assert!(matches!(result, Err(MenuError::Validation(_))));
    }

    #[test]
    fn accepts_free_item() {
        let params = MenuItemCreate::new("Water", "", Decimal::ZERO);
        let item = MenuItem::from_create_params(MenuItemId(1), params).unwrap();
        assert_eq!(item.price, Decimal::ZERO);
        assert_eq!(item.created_at, item.updated_at);
    }

    #[tokio::test]
    async fn update_applies_only_given_fields() {
        let params = MenuItemCreate::new("Brie", "com damasco", Decimal::new(899, 2)).category("Pizza");
        let mut item = MenuItem::from_create_params(MenuItemId(2), params).unwrap();

        let update = MenuItemUpdate {
            price: Some(Decimal::new(999, 2)),
            ..Default::default()
        };
        item.on_update(update, &()).await.unwrap();
        assert_eq!(item.price, Decimal::new(999, 2));
        assert_eq!(item.name, "Brie");
        assert_eq!(item.category, "Pizza");

        let bad = MenuItemUpdate {
            name: Some(" ".into()),
            price: Some(Decimal::ONE),
            ..Default::default()
        };
        assert!(item.on_update(bad, &()).await.is_err());
        assert_eq!(item.price, Decimal::new(999, 2));
    }
}
