//! User and role use cases.
//!
//! Each use case declares its failure surface as a closed enum next to it:
//!
//! | use case | failures |
//! |---|---|
//! | [`CreateUser`] | `Validation`, `EmailAlreadyExists`, `UsernameTaken` |
//! | [`GetUser`] | `Validation`, `UserNotFound` |
//! | [`CreateRole`] | `Validation`, `RoleAlreadyExists` |
//! | [`DeleteRole`] | `Validation`, `RoleNotFound` |

pub mod create_role;
pub mod create_user;
pub mod delete_role;
pub mod get_user;

#[cfg(test)]
pub(crate) mod test_support;

pub use create_role::{CreateRole, CreateRoleDto, CreateRoleError};
pub use create_user::{CreateUser, CreateUserDto, CreateUserError};
pub use delete_role::{DeleteRole, DeleteRoleDto, DeleteRoleError};
pub use get_user::{GetUser, GetUserDto, GetUserError};
