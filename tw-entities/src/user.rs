use num_derive::{FromPrimitive, ToPrimitive};
use num_traits::*;
use thiserror::Error;

use crate::{email::EmailAddress, password::Password, time::Timestamp};

#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub email           : EmailAddress,
    pub email_confirmed : bool,
    pub password        : Password,
    pub display_name    : Option<String>,
    pub role            : Role,
    pub banned_at       : Option<Timestamp>,
}

impl User {
    pub fn is_banned(&self) -> bool {
        self.banned_at.is_some()
    }
}

pub type RolePrimitive = i16;

#[rustfmt::skip]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, FromPrimitive, ToPrimitive)]
pub enum Role {
    Guest = 0,
    User  = 1,
    Admin = 2,
}

impl Default for Role {
    fn default() -> Role {
        Role::Guest
    }
}

#[derive(Debug, Error)]
#[error("Invalid role primitive: {0}")]
pub struct InvalidRolePrimitive(RolePrimitive);

impl TryFrom<RolePrimitive> for Role {
    type Error = InvalidRolePrimitive;
    fn try_from(from: RolePrimitive) -> Result<Self, Self::Error> {
        Self::from_i16(from).ok_or(InvalidRolePrimitive(from))
    }
}

impl From<Role> for RolePrimitive {
    fn from(from: Role) -> Self {
        from.to_i16().expect("Role primitive")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roles_are_ordered() {
        assert!(Role::Guest < Role::User);
        assert!(Role::User < Role::Admin);
    }

    #[test]
    fn role_primitive_roundtrip() {
        assert!(Role::try_from(3).is_err());
        assert_eq!(Role::Admin, Role::try_from(RolePrimitive::from(Role::Admin)).unwrap());
    }
}
