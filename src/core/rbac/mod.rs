//! Role-based access control administration
//!
//! [`RbacManager`] is the only way users, roles and membership edges change.
//! Every operation runs in one store transaction, so a failed call leaves the
//! store as it was.

mod assignment_ops;
mod manager;
mod role_ops;
mod user_ops;

pub use manager::RbacManager;
