pub use super::application::Entity as Application;
pub use super::group::Entity as Group;
pub use super::role::Entity as Role;
pub use super::role_group::Entity as RoleGroup;
pub use super::user::Entity as User;
pub use super::user_group::Entity as UserGroup;
