//! User model → entity mapper

use pos_core::entities::User;
use pos_core::error::DomainError;
use pos_core::traits::LockoutStatus;
use pos_core::value_objects::{Role, UserId};

use crate::models::{LockoutStatusModel, UserModel};

impl TryFrom<UserModel> for User {
    type Error = DomainError;

    fn try_from(model: UserModel) -> Result<Self, Self::Error> {
        let role = model.role.parse::<Role>().map_err(|_| {
            DomainError::DatabaseError(format!(
                "corrupt role value {:?} in users row {}",
                model.role, model.id
            ))
        })?;

        Ok(User {
            id: UserId::new(model.id),
            first_name: model.first_name,
            middle_name: model.middle_name,
            last_name: model.last_name,
            birthday: model.birthday,
            age: model.age,
            address: model.address,
            email: model.email,
            role,
            login_attempts: model.login_attempts,
            is_locked: model.is_locked,
            created_at: model.created_at,
        })
    }
}

impl From<LockoutStatusModel> for LockoutStatus {
    fn from(model: LockoutStatusModel) -> Self {
        LockoutStatus {
            user_id: UserId::new(model.id),
            attempts: model.login_attempts,
            locked: model.is_locked,
        }
    }
}
