//! `hireboard-users` — user accounts and roles.
//!
//! Entities, mappers and repository ports for users and roles, plus the use
//! cases that operate on them. Pure domain logic: storage and transport live in
//! `hireboard-infra` and `hireboard-api`.

pub mod mappers;
pub mod ports;
pub mod role;
pub mod use_cases;
pub mod user;

pub use mappers::{RoleMapper, RoleRecord, UserMapper, UserRecord};
pub use ports::{RoleRepository, UserRepository};
pub use role::{Permission, Role, RoleName, RoleProps};
pub use use_cases::{
    CreateRole, CreateRoleDto, CreateRoleError, CreateUser, CreateUserDto, CreateUserError,
    DeleteRole, DeleteRoleDto, DeleteRoleError, GetUser, GetUserDto, GetUserError,
};
pub use user::{ContextType, Email, Password, User, UserProps, Username};
