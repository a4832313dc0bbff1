/// Password reset token entity module
pub mod password_reset_token;
/// Role entity module
pub mod role;
/// User entity module
pub mod user;
/// User-role membership entity module
pub mod user_role;

pub use password_reset_token::Entity as PasswordResetToken;
pub use role::Entity as Role;
pub use user::Entity as User;
pub use user_role::Entity as UserRole;
