//! User/account model -> entity mappers

use meli_core::{Account, User};

use crate::models::{AccountModel, UserModel};

impl From<UserModel> for User {
    fn from(model: UserModel) -> Self {
        User {
            id: model.id,
            name: model.name,
            is_seller: model.is_seller,
        }
    }
}

impl From<AccountModel> for Account {
    fn from(model: AccountModel) -> Self {
        Account {
            id: model.id,
            name: model.name,
            email: model.email,
            is_seller: model.is_seller,
            avatar_url: model.avatar_url,
            created_at: model.created_at,
            password_hash: model.password_hash,
        }
    }
}
